//! # Core Traits (Ports)
//!
//! Plugins implement the data-source ports; the use cases sit on top of
//! `ProfileRepository` and are what the controllers depend on.

use async_trait::async_trait;
use uuid::Uuid;

use crate::error::Result;
use crate::models::{Profile, ProfileState};

/// Supplier of profile pages.
#[cfg_attr(any(test, feature = "testing"), mockall::automock)]
#[async_trait]
pub trait RemoteProfileSource: Send + Sync {
    /// Returns page `page` (0-based) of `page_size` profiles.
    async fn fetch_page(&self, page: usize, page_size: usize) -> Result<Vec<Profile>>;
}

/// Persistence contract for per-profile state. One record per profile id.
#[cfg_attr(any(test, feature = "testing"), mockall::automock)]
#[async_trait]
pub trait ProfileStateStore: Send + Sync {
    /// Every stored state; empty when nothing has been saved yet.
    async fn get_all(&self) -> Result<Vec<ProfileState>>;

    async fn get(&self, profile_id: Uuid) -> Result<Option<ProfileState>>;

    /// Replaces the record with the same `profile_id`, or appends it.
    async fn save(&self, state: ProfileState) -> Result<()>;
}

/// Single entry point over both data sources.
#[cfg_attr(any(test, feature = "testing"), mockall::automock)]
#[async_trait]
pub trait ProfileRepository: Send + Sync {
    async fn fetch_profiles(&self, page: usize, page_size: usize) -> Result<Vec<Profile>>;
    async fn get_profile_state(&self, profile_id: Uuid) -> Result<Option<ProfileState>>;
    async fn save_profile_state(&self, state: ProfileState) -> Result<()>;
    async fn get_all_profile_states(&self) -> Result<Vec<ProfileState>>;
}

#[cfg_attr(any(test, feature = "testing"), mockall::automock)]
#[async_trait]
pub trait FetchProfilesUseCase: Send + Sync {
    async fn execute(&self, page: usize, page_size: usize) -> Result<Vec<Profile>>;
}

#[cfg_attr(any(test, feature = "testing"), mockall::automock)]
#[async_trait]
pub trait GetProfileStateUseCase: Send + Sync {
    async fn execute(&self, profile_id: Uuid) -> Result<Option<ProfileState>>;
}

/// Records a judgment and hands back exactly what was persisted.
#[cfg_attr(any(test, feature = "testing"), mockall::automock)]
#[async_trait]
pub trait UpdateProfileStateUseCase: Send + Sync {
    async fn execute(&self, profile_id: Uuid, is_seen: bool, is_liked: Option<bool>) -> Result<ProfileState>;
}

#[cfg_attr(any(test, feature = "testing"), mockall::automock)]
#[async_trait]
pub trait ListProfileStatesUseCase: Send + Sync {
    async fn execute(&self) -> Result<Vec<ProfileState>>;
}
