//! Shared wiring for the end-to-end tests: the real JSON store and the
//! catalog source behind the real repository and use cases.

use std::path::Path;
use std::sync::Arc;
use std::time::Duration;

use sd_core::traits::{ProfileRepository, ProfileStateStore, RemoteProfileSource};
use sd_core::{FetchProfiles, GetProfileState, ListProfileStates, ProfileRepositoryImpl, UpdateProfileState};
use sd_feed::{FeedController, FeedDependencies, FeedSettings};
use sd_remote_catalog::CatalogProfileSource;
use sd_store_json::JsonStateStore;

pub struct Harness {
    pub repository: Arc<dyn ProfileRepository>,
}

impl Harness {
    /// Zero-latency catalog, state file at `state_file`.
    pub fn new(state_file: &Path) -> Self {
        let remote: Arc<dyn RemoteProfileSource> = Arc::new(CatalogProfileSource::new(Duration::ZERO));
        let local: Arc<dyn ProfileStateStore> = Arc::new(JsonStateStore::new(state_file));
        Self {
            repository: Arc::new(ProfileRepositoryImpl::new(remote, local)),
        }
    }

    pub fn feed(&self) -> FeedController {
        FeedController::new(
            FeedDependencies {
                fetch_profiles: Arc::new(FetchProfiles::new(Arc::clone(&self.repository))),
                get_state: Arc::new(GetProfileState::new(Arc::clone(&self.repository))),
                update_state: Arc::new(UpdateProfileState::new(Arc::clone(&self.repository))),
            },
            FeedSettings::default(),
        )
    }

    pub fn list_states(&self) -> ListProfileStates {
        ListProfileStates::new(Arc::clone(&self.repository))
    }
}
