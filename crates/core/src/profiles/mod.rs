//! Profiles module - user profile and risk appetite.

mod profiles_model;
mod profiles_service;
mod profiles_traits;

pub use profiles_model::{KycStatus, Profile, ProfileUpdate, RiskProfile, TargetAllocation};
pub use profiles_service::ProfileService;
pub use profiles_traits::{ProfileRepositoryTrait, ProfileServiceTrait};
