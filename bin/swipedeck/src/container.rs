//! # AppContainer
//!
//! The composition root. Every collaborator is built once here and handed
//! to its dependents through their constructors.

use std::sync::Arc;

use sd_config::Settings;
use sd_core::traits::{
    FetchProfilesUseCase, GetProfileStateUseCase, ListProfileStatesUseCase, ProfileRepository,
    ProfileStateStore, RemoteProfileSource, UpdateProfileStateUseCase,
};
use sd_core::{FetchProfiles, GetProfileState, ListProfileStates, ProfileRepositoryImpl, UpdateProfileState};
use sd_feed::{FeedController, FeedDependencies, FeedSettings};
use sd_remote_catalog::CatalogProfileSource;
use sd_store_json::JsonStateStore;

pub struct AppContainer {
    pub fetch_profiles: Arc<dyn FetchProfilesUseCase>,
    pub get_state: Arc<dyn GetProfileStateUseCase>,
    pub update_state: Arc<dyn UpdateProfileStateUseCase>,
    pub list_states: Arc<dyn ListProfileStatesUseCase>,
    feed_settings: FeedSettings,
}

impl AppContainer {
    pub fn build(settings: &Settings) -> Self {
        // 1. Data sources
        let remote: Arc<dyn RemoteProfileSource> = Arc::new(CatalogProfileSource::new(settings.remote.latency()));
        let local: Arc<dyn ProfileStateStore> = Arc::new(JsonStateStore::new(settings.store.path.clone()));

        // 2. Repository
        let repository: Arc<dyn ProfileRepository> = Arc::new(ProfileRepositoryImpl::new(remote, local));

        // 3. Use cases
        Self {
            fetch_profiles: Arc::new(FetchProfiles::new(Arc::clone(&repository))),
            get_state: Arc::new(GetProfileState::new(Arc::clone(&repository))),
            update_state: Arc::new(UpdateProfileState::new(Arc::clone(&repository))),
            list_states: Arc::new(ListProfileStates::new(repository)),
            feed_settings: FeedSettings {
                page_size: settings.feed.page_size,
                refill_threshold: settings.feed.refill_threshold,
            },
        }
    }

    pub fn feed_controller(&self) -> FeedController {
        FeedController::new(
            FeedDependencies {
                fetch_profiles: Arc::clone(&self.fetch_profiles),
                get_state: Arc::clone(&self.get_state),
                update_state: Arc::clone(&self.update_state),
            },
            self.feed_settings,
        )
    }
}
