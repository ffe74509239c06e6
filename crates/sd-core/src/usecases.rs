//! # Use Cases
//!
//! One operation each, all delegating to a `ProfileRepository`. Errors pass
//! through unchanged.

use std::sync::Arc;

use async_trait::async_trait;
use uuid::Uuid;

use crate::error::Result;
use crate::models::{Profile, ProfileState};
use crate::traits::{
    FetchProfilesUseCase, GetProfileStateUseCase, ListProfileStatesUseCase, ProfileRepository,
    UpdateProfileStateUseCase,
};

pub struct FetchProfiles {
    repository: Arc<dyn ProfileRepository>,
}

impl FetchProfiles {
    pub fn new(repository: Arc<dyn ProfileRepository>) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl FetchProfilesUseCase for FetchProfiles {
    async fn execute(&self, page: usize, page_size: usize) -> Result<Vec<Profile>> {
        self.repository.fetch_profiles(page, page_size).await
    }
}

pub struct GetProfileState {
    repository: Arc<dyn ProfileRepository>,
}

impl GetProfileState {
    pub fn new(repository: Arc<dyn ProfileRepository>) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl GetProfileStateUseCase for GetProfileState {
    async fn execute(&self, profile_id: Uuid) -> Result<Option<ProfileState>> {
        self.repository.get_profile_state(profile_id).await
    }
}

/// Stamps a new `ProfileState` with the current time and saves it.
pub struct UpdateProfileState {
    repository: Arc<dyn ProfileRepository>,
}

impl UpdateProfileState {
    pub fn new(repository: Arc<dyn ProfileRepository>) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl UpdateProfileStateUseCase for UpdateProfileState {
    async fn execute(&self, profile_id: Uuid, is_seen: bool, is_liked: Option<bool>) -> Result<ProfileState> {
        let state = ProfileState::new(profile_id, is_seen, is_liked);
        self.repository.save_profile_state(state.clone()).await?;
        tracing::debug!(%profile_id, is_seen, ?is_liked, "profile state saved");
        Ok(state)
    }
}

pub struct ListProfileStates {
    repository: Arc<dyn ProfileRepository>,
}

impl ListProfileStates {
    pub fn new(repository: Arc<dyn ProfileRepository>) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl ListProfileStatesUseCase for ListProfileStates {
    async fn execute(&self) -> Result<Vec<ProfileState>> {
        self.repository.get_all_profile_states().await
    }
}
