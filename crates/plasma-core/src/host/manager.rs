use std::sync::Arc;

use super::action::{Action, DefaultIdProvider, IdProvider};

/// Owns the id provider used for every action the host names.
pub struct ActionManager {
    default_provider: Arc<dyn IdProvider>,
    id_provider: Arc<dyn IdProvider>,
}

impl ActionManager {
    pub fn new() -> Self {
        let default_provider: Arc<dyn IdProvider> = Arc::new(DefaultIdProvider);
        Self {
            id_provider: default_provider.clone(),
            default_provider,
        }
    }

    /// Replace the installed provider. There is no way back to the previous one.
    pub fn set_id_provider(&mut self, provider: Arc<dyn IdProvider>) {
        self.id_provider = provider;
    }

    pub fn id_provider(&self) -> Arc<dyn IdProvider> {
        self.id_provider.clone()
    }

    pub fn default_id_provider(&self) -> Arc<dyn IdProvider> {
        self.default_provider.clone()
    }

    pub fn get_id(&self, action: &Action) -> String {
        self.id_provider.get_id(action)
    }
}

impl Default for ActionManager {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::host::DiscoveryRoot;
    use std::path::PathBuf;

    struct Fixed(&'static str);

    impl IdProvider for Fixed {
        fn get_id(&self, _: &Action) -> String {
            self.0.to_string()
        }
    }

    fn action(rel: &str) -> Action {
        let root = DiscoveryRoot::new(PathBuf::from("/wd"), PathBuf::from("/wd"));
        Action::new(root, PathBuf::from(rel))
    }

    #[test]
    fn test_uses_default_provider_until_replaced() {
        let mut manager = ActionManager::new();
        let a = action("platform/actions/prepare/action.yaml");
        assert_eq!(manager.get_id(&a), "platform:prepare");

        manager.set_id_provider(Arc::new(Fixed("custom")));
        assert_eq!(manager.get_id(&a), "custom");
        assert_eq!(
            manager.default_id_provider().get_id(&a),
            "platform:prepare",
            "default provider stays reachable for delegation"
        );
    }
}
