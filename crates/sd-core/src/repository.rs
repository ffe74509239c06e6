//! # ProfileRepositoryImpl
//!
//! Pure facade: profile pages come from the remote source, states from the
//! local store. Nothing is cached or translated here.

use std::sync::Arc;

use async_trait::async_trait;
use uuid::Uuid;

use crate::error::Result;
use crate::models::{Profile, ProfileState};
use crate::traits::{ProfileRepository, ProfileStateStore, RemoteProfileSource};

pub struct ProfileRepositoryImpl {
    remote: Arc<dyn RemoteProfileSource>,
    local: Arc<dyn ProfileStateStore>,
}

impl ProfileRepositoryImpl {
    pub fn new(remote: Arc<dyn RemoteProfileSource>, local: Arc<dyn ProfileStateStore>) -> Self {
        Self { remote, local }
    }
}

#[async_trait]
impl ProfileRepository for ProfileRepositoryImpl {
    async fn fetch_profiles(&self, page: usize, page_size: usize) -> Result<Vec<Profile>> {
        self.remote.fetch_page(page, page_size).await
    }

    async fn get_profile_state(&self, profile_id: Uuid) -> Result<Option<ProfileState>> {
        self.local.get(profile_id).await
    }

    async fn save_profile_state(&self, state: ProfileState) -> Result<()> {
        self.local.save(state).await
    }

    async fn get_all_profile_states(&self) -> Result<Vec<ProfileState>> {
        self.local.get_all().await
    }
}
