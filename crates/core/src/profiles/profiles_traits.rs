use crate::errors::Result;
use crate::profiles::profiles_model::{Profile, ProfileUpdate};
use async_trait::async_trait;

/// Trait for profile repository operations
#[async_trait]
pub trait ProfileRepositoryTrait: Send + Sync {
    fn load_profile(&self, user_id: &str) -> Result<Profile>;
    async fn update_profile(&self, user_id: &str, update: ProfileUpdate) -> Result<Profile>;
}

/// Trait for profile service operations
#[async_trait]
pub trait ProfileServiceTrait: Send + Sync {
    fn get_profile(&self, user_id: &str) -> Result<Profile>;
    async fn update_profile(&self, user_id: &str, update: ProfileUpdate) -> Result<Profile>;
}
