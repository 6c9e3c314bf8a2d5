use crate::errors::Result;
use crate::settings::settings_model::FundSettings;

/// Trait for the settings persistence collaborator
pub trait SettingsRepositoryTrait: Send + Sync {
    fn get_settings(&self, user_id: &str) -> Result<FundSettings>;
    fn update_settings(&self, settings: &FundSettings) -> Result<FundSettings>;
}
