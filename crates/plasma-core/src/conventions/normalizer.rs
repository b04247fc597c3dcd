use std::sync::Arc;

use super::SRC_MARKER;
use crate::host::{Action, IdProvider};

/// Strip everything up to and including the last `src.` in an action id.
///
/// Taking the last occurrence collapses composed paths of any depth to the
/// innermost source tree. Ids without the marker come back untouched; a
/// marker at the very end yields an empty id.
///
/// ```
/// use plasma_core::normalize_id;
///
/// assert_eq!(normalize_id("src.platform:prepare"), "platform:prepare");
/// assert_eq!(
///     normalize_id(".plasma.package.compose.merged.src.platform:prepare"),
///     "platform:prepare"
/// );
/// assert_eq!(normalize_id("platform:prepare"), "platform:prepare");
/// ```
pub fn normalize_id(id: &str) -> &str {
    match id.rfind(SRC_MARKER) {
        Some(i) => &id[i + SRC_MARKER.len()..],
        None => id,
    }
}

/// Id provider that post-processes another provider's ids with [`normalize_id`].
pub struct SrcPrefixIdProvider {
    inner: Arc<dyn IdProvider>,
}

impl SrcPrefixIdProvider {
    pub fn new(inner: Arc<dyn IdProvider>) -> Self {
        Self { inner }
    }
}

impl IdProvider for SrcPrefixIdProvider {
    fn get_id(&self, action: &Action) -> String {
        normalize_id(&self.inner.get_id(action)).to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::host::{DefaultIdProvider, DiscoveryRoot};
    use proptest::prelude::*;
    use std::path::PathBuf;

    #[test]
    fn test_normalize_examples() {
        let cases = [
            ("src.platform:prepare", "platform:prepare"),
            (
                ".plasma.package.compose.merged.src.platform:prepare",
                "platform:prepare",
            ),
            ("platform:prepare", "platform:prepare"),
            ("a.src.b.src.platform:prepare", "platform:prepare"),
        ];
        for (input, expected) in cases {
            assert_eq!(normalize_id(input), expected, "input: {input}");
        }
    }

    #[test]
    fn test_normalize_edge_cases() {
        assert_eq!(normalize_id(""), "");
        assert_eq!(normalize_id("platform.src."), "", "marker at the end leaves nothing");
        assert_eq!(normalize_id("src"), "src");
        assert_eq!(normalize_id("source.platform:x"), "source.platform:x");
        // Marker matching is textual, not segment-aware.
        assert_eq!(normalize_id("mysrc.platform:x"), "platform:x");
    }

    #[test]
    fn test_provider_wraps_default_derivation() {
        let provider = SrcPrefixIdProvider::new(Arc::new(DefaultIdProvider));
        let root = DiscoveryRoot::new(PathBuf::from("/wd"), PathBuf::from("/wd"));

        let nested = Action::new(
            root.clone(),
            PathBuf::from(".plasma/package/compose/merged/src/platform/actions/prepare/action.yaml"),
        );
        assert_eq!(provider.get_id(&nested), "platform:prepare");

        let plain = Action::new(root, PathBuf::from("platform/actions/prepare/action.yaml"));
        assert_eq!(provider.get_id(&plain), "platform:prepare");
    }

    #[test]
    fn test_provider_is_shareable_across_threads() {
        let provider: Arc<dyn IdProvider> =
            Arc::new(SrcPrefixIdProvider::new(Arc::new(DefaultIdProvider)));
        let root = DiscoveryRoot::new(PathBuf::from("/wd"), PathBuf::from("/wd"));

        let handles: Vec<_> = (0..4)
            .map(|i| {
                let provider = provider.clone();
                let action = Action::new(
                    root.clone(),
                    PathBuf::from(format!("src/p{i}/actions/run/action.yaml")),
                );
                std::thread::spawn(move || provider.get_id(&action))
            })
            .collect();

        let ids: Vec<String> = handles.into_iter().map(|h| h.join().unwrap()).collect();
        assert_eq!(ids, vec!["p0:run", "p1:run", "p2:run", "p3:run"]);
    }

    proptest! {
        #[test]
        fn prop_ids_without_marker_are_unchanged(id in "[a-z.:_-]{0,40}") {
            prop_assume!(!id.contains(SRC_MARKER));
            prop_assert_eq!(normalize_id(&id), id.as_str());
        }

        #[test]
        fn prop_suffix_after_last_marker(
            prefixes in prop::collection::vec("[a-z.]{0,8}", 1..4),
            suffix in "[a-z:]{0,12}",
        ) {
            prop_assume!(!suffix.contains(SRC_MARKER));
            let id = format!("{}{}", prefixes.join(SRC_MARKER), SRC_MARKER) + &suffix;
            prop_assert_eq!(normalize_id(&id), suffix.as_str());
        }

        #[test]
        fn prop_normalize_is_idempotent_once_marker_free(id in "(src\\.|[a-z.:]){0,30}") {
            let once = normalize_id(&id);
            prop_assume!(!once.contains(SRC_MARKER));
            prop_assert_eq!(normalize_id(once), once);
        }
    }
}
