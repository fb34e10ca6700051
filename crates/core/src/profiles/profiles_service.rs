//! Profile management service.

use async_trait::async_trait;
use log::debug;
use std::sync::Arc;

use crate::errors::{Result, ValidationError};
use crate::profiles::profiles_model::{Profile, ProfileUpdate};
use crate::profiles::profiles_traits::{ProfileRepositoryTrait, ProfileServiceTrait};

/// Service for managing the user profile
pub struct ProfileService {
    profile_repository: Arc<dyn ProfileRepositoryTrait>,
}

impl ProfileService {
    pub fn new(profile_repository: Arc<dyn ProfileRepositoryTrait>) -> Self {
        Self { profile_repository }
    }
}

#[async_trait]
impl ProfileServiceTrait for ProfileService {
    fn get_profile(&self, user_id: &str) -> Result<Profile> {
        self.profile_repository.load_profile(user_id)
    }

    async fn update_profile(&self, user_id: &str, update: ProfileUpdate) -> Result<Profile> {
        if let Some(name) = &update.display_name {
            if name.trim().is_empty() {
                return Err(ValidationError::InvalidInput(
                    "display name cannot be blank".to_string(),
                )
                .into());
            }
        }

        debug!("Updating profile for user {}", user_id);
        self.profile_repository.update_profile(user_id, update).await
    }
}
