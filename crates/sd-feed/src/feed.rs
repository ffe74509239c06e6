//! # FeedController
//!
//! The swiping flow's working set: an ordered queue of visible profiles, the
//! states known for them, and a page cursor.
//!
//! Pagination is low-watermark based: once removing a card leaves
//! `refill_threshold` or fewer profiles, the next page is fetched.
//!
//! State writes are committed to the in-memory map only after the use case
//! succeeds, so a failed write leaves the map as it was. Every failure is
//! logged here and also returned to the caller.

use std::collections::{HashMap, VecDeque};
use std::sync::Arc;

use sd_core::error::Result;
use sd_core::models::{Profile, ProfileState, SwipeDirection, Verdict};
use sd_core::traits::{FetchProfilesUseCase, GetProfileStateUseCase, UpdateProfileStateUseCase};
use uuid::Uuid;

use crate::detail::DetailController;

pub const DEFAULT_PAGE_SIZE: usize = 10;
pub const DEFAULT_REFILL_THRESHOLD: usize = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FeedSettings {
    pub page_size: usize,
    /// Refill once the visible count drops to this many or fewer.
    pub refill_threshold: usize,
}

impl Default for FeedSettings {
    fn default() -> Self {
        Self {
            page_size: DEFAULT_PAGE_SIZE,
            refill_threshold: DEFAULT_REFILL_THRESHOLD,
        }
    }
}

/// The use cases a feed needs, handed over at composition time.
#[derive(Clone)]
pub struct FeedDependencies {
    pub fetch_profiles: Arc<dyn FetchProfilesUseCase>,
    pub get_state: Arc<dyn GetProfileStateUseCase>,
    pub update_state: Arc<dyn UpdateProfileStateUseCase>,
}

pub struct FeedController {
    deps: FeedDependencies,
    settings: FeedSettings,
    /// No two entries share an id.
    profiles: VecDeque<Profile>,
    states: HashMap<Uuid, ProfileState>,
    current_page: usize,
    is_loading: bool,
}

impl FeedController {
    pub fn new(deps: FeedDependencies, settings: FeedSettings) -> Self {
        Self {
            deps,
            settings,
            profiles: VecDeque::new(),
            states: HashMap::new(),
            current_page: 0,
            is_loading: false,
        }
    }

    pub fn settings(&self) -> FeedSettings {
        self.settings
    }

    pub fn profiles(&self) -> &VecDeque<Profile> {
        &self.profiles
    }

    pub fn top(&self) -> Option<&Profile> {
        self.profiles.front()
    }

    pub fn len(&self) -> usize {
        self.profiles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.profiles.is_empty()
    }

    pub fn states(&self) -> &HashMap<Uuid, ProfileState> {
        &self.states
    }

    pub fn state_of(&self, profile_id: &Uuid) -> Option<&ProfileState> {
        self.states.get(profile_id)
    }

    pub fn current_page(&self) -> usize {
        self.current_page
    }

    pub fn is_loading(&self) -> bool {
        self.is_loading
    }

    /// Fetches the page at the cursor and appends it. Returns how many
    /// profiles were appended.
    pub async fn load_initial_profiles(&mut self) -> Result<usize> {
        self.load_next_page().await
    }

    async fn load_next_page(&mut self) -> Result<usize> {
        self.is_loading = true;
        let result = self.append_next_page().await;
        self.is_loading = false;
        result
    }

    async fn append_next_page(&mut self) -> Result<usize> {
        let page = self.current_page;
        let fetched = match self.deps.fetch_profiles.execute(page, self.settings.page_size).await {
            Ok(fetched) => fetched,
            Err(e) => {
                tracing::error!(page, error = %e, "failed to load profiles");
                return Err(e);
            }
        };
        self.current_page += 1;

        let mut appended = Vec::with_capacity(fetched.len());
        for profile in fetched {
            if self.profiles.iter().any(|p| p.id == profile.id) {
                tracing::debug!(profile_id = %profile.id, "skipping profile already in feed");
                continue;
            }
            appended.push(profile.id);
            self.profiles.push_back(profile);
        }

        // One at a time, in feed order.
        for profile_id in &appended {
            self.load_state(*profile_id).await;
        }

        tracing::debug!(page, appended = appended.len(), visible = self.profiles.len(), "feed page loaded");
        Ok(appended.len())
    }

    /// A failed lookup leaves the profile without a known state.
    async fn load_state(&mut self, profile_id: Uuid) {
        match self.deps.get_state.execute(profile_id).await {
            Ok(Some(state)) => {
                self.states.insert(profile_id, state);
            }
            Ok(None) => {}
            Err(e) => tracing::warn!(%profile_id, error = %e, "failed to load profile state"),
        }
    }

    /// Drops the front card and refills if the feed ran low.
    pub async fn remove_top_card(&mut self) -> Result<()> {
        if self.profiles.pop_front().is_none() {
            return Ok(());
        }
        if self.profiles.len() <= self.settings.refill_threshold && !self.is_loading {
            self.load_next_page().await?;
        }
        Ok(())
    }

    /// Marks `profile` seen, records the verdict for `direction`, then drops
    /// the top card. All three steps run even if one fails; the first error
    /// is returned.
    pub async fn handle_swipe(&mut self, profile: &Profile, direction: SwipeDirection) -> Result<()> {
        let seen = self.mark_as_seen(profile).await;
        let verdict = match direction {
            SwipeDirection::Left => self.dislike_profile(profile).await,
            SwipeDirection::Right => self.like_profile(profile).await,
        };
        let removed = self.remove_top_card().await;
        seen.and(verdict).and(removed)
    }

    /// Swipes whatever is on top. `Ok(false)` when the feed is empty.
    pub async fn swipe_top(&mut self, direction: SwipeDirection) -> Result<bool> {
        let Some(top) = self.top().cloned() else {
            return Ok(false);
        };
        self.handle_swipe(&top, direction).await?;
        Ok(true)
    }

    pub async fn like_profile(&mut self, profile: &Profile) -> Result<()> {
        self.persist(profile.id, true, Some(true)).await
    }

    pub async fn dislike_profile(&mut self, profile: &Profile) -> Result<()> {
        self.persist(profile.id, true, Some(false)).await
    }

    /// No-op when the map already says seen; storage is not consulted.
    pub async fn mark_as_seen(&mut self, profile: &Profile) -> Result<()> {
        let current = self.states.get(&profile.id);
        if current.is_some_and(|s| s.is_seen) {
            return Ok(());
        }
        let is_liked = current.and_then(|s| s.is_liked);
        self.persist(profile.id, true, is_liked).await
    }

    pub async fn toggle_like(&mut self, profile: &Profile) -> Result<()> {
        let current = self.states.get(&profile.id).and_then(|s| s.is_liked);
        self.persist(profile.id, true, Verdict::toggled(current)).await
    }

    /// Re-reads one profile's state. A missing record leaves the map entry
    /// untouched.
    pub async fn refresh_profile_state(&mut self, profile_id: Uuid) -> Result<()> {
        match self.deps.get_state.execute(profile_id).await {
            Ok(Some(state)) => {
                self.states.insert(profile_id, state);
                Ok(())
            }
            Ok(None) => Ok(()),
            Err(e) => {
                tracing::error!(%profile_id, error = %e, "failed to refresh profile state");
                Err(e)
            }
        }
    }

    /// Marks `profile` seen and returns a detail controller seeded with its
    /// known state, paired with the outcome of the seen-write. The detail
    /// opens even when that write fails.
    pub async fn open_detail(&mut self, profile: &Profile) -> (DetailController, Result<()>) {
        let seen = self.mark_as_seen(profile).await;
        let detail = DetailController::new(
            profile.clone(),
            self.states.get(&profile.id).cloned(),
            Arc::clone(&self.deps.update_state),
        );
        (detail, seen)
    }

    /// Picks up whatever the detail view persisted.
    pub async fn close_detail(&mut self, detail: DetailController) -> Result<()> {
        self.refresh_profile_state(detail.profile().id).await
    }

    async fn persist(&mut self, profile_id: Uuid, is_seen: bool, is_liked: Option<bool>) -> Result<()> {
        match self.deps.update_state.execute(profile_id, is_seen, is_liked).await {
            Ok(saved) => {
                self.states.insert(profile_id, saved);
                Ok(())
            }
            Err(e) => {
                tracing::error!(%profile_id, is_seen, ?is_liked, error = %e, "failed to persist profile state");
                Err(e)
            }
        }
    }
}
