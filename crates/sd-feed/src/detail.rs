//! # DetailController
//!
//! Backs the single-profile detail page: a photo cursor plus a like toggle.
//!
//! Unlike `FeedController`, the like toggle here applies the new state
//! first and rolls it back when persistence fails.

use std::sync::Arc;

use sd_core::error::Result;
use sd_core::models::{Profile, ProfileState, Verdict};
use sd_core::traits::UpdateProfileStateUseCase;

pub struct DetailController {
    profile: Profile,
    state: Option<ProfileState>,
    /// Always within `0..photo_count` when the profile has photos, else 0.
    photo_index: usize,
    update_state: Arc<dyn UpdateProfileStateUseCase>,
}

impl DetailController {
    pub fn new(
        profile: Profile,
        state: Option<ProfileState>,
        update_state: Arc<dyn UpdateProfileStateUseCase>,
    ) -> Self {
        Self {
            profile,
            state,
            photo_index: 0,
            update_state,
        }
    }

    pub fn profile(&self) -> &Profile {
        &self.profile
    }

    pub fn state(&self) -> Option<&ProfileState> {
        self.state.as_ref()
    }

    pub fn photo_index(&self) -> usize {
        self.photo_index
    }

    pub fn photo_count(&self) -> usize {
        self.profile.photos.len()
    }

    pub fn current_photo(&self) -> Option<&str> {
        self.profile.photos.get(self.photo_index).map(String::as_str)
    }

    /// Jumps to `index`. Out-of-range indexes are ignored; returns whether
    /// the cursor moved there.
    pub fn navigate_to_photo(&mut self, index: usize) -> bool {
        if index >= self.photo_count() {
            return false;
        }
        self.photo_index = index;
        true
    }

    /// Saturates at the last photo.
    pub fn next_photo(&mut self) {
        if self.photo_index + 1 < self.photo_count() {
            self.photo_index += 1;
        }
    }

    /// Saturates at the first photo.
    pub fn previous_photo(&mut self) {
        self.photo_index = self.photo_index.saturating_sub(1);
    }

    /// Liked becomes undecided, anything else becomes liked; the profile is
    /// marked seen either way. On failure the previous state is restored.
    pub async fn toggle_like(&mut self) -> Result<()> {
        let profile_id = self.profile.id;
        let previous = self.state.clone();
        let is_liked = Verdict::toggled(previous.as_ref().and_then(|s| s.is_liked));

        self.state = Some(ProfileState::new(profile_id, true, is_liked));

        match self.update_state.execute(profile_id, true, is_liked).await {
            Ok(saved) => {
                self.state = Some(saved);
                Ok(())
            }
            Err(e) => {
                tracing::warn!(%profile_id, error = %e, "like toggle not persisted, reverting");
                self.state = previous;
                Err(e)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sd_core::error::AppError;
    use sd_core::traits::MockUpdateProfileStateUseCase;
    use uuid::Uuid;

    fn person() -> Profile {
        Profile::new(
            "John",
            25,
            vec!["photo1.jpg".into(), "photo2.jpg".into(), "photo3.jpg".into()],
            "Test bio",
        )
    }

    fn saving() -> MockUpdateProfileStateUseCase {
        let mut update = MockUpdateProfileStateUseCase::new();
        update
            .expect_execute()
            .returning(|id, seen, liked| Ok(ProfileState::new(id, seen, liked)));
        update
    }

    fn failing() -> MockUpdateProfileStateUseCase {
        let mut update = MockUpdateProfileStateUseCase::new();
        update
            .expect_execute()
            .times(1)
            .returning(|_, _, _| Err(AppError::Io(std::io::Error::other("disk full"))));
        update
    }

    fn detail(state: Option<ProfileState>, update: MockUpdateProfileStateUseCase) -> DetailController {
        DetailController::new(person(), state, Arc::new(update))
    }

    #[test]
    fn starts_on_first_photo_with_given_state() {
        let profile = person();
        let state = ProfileState::new(profile.id, true, Some(true));
        let controller = DetailController::new(
            profile.clone(),
            Some(state.clone()),
            Arc::new(MockUpdateProfileStateUseCase::new()),
        );

        assert_eq!(controller.profile(), &profile);
        assert_eq!(controller.state(), Some(&state));
        assert_eq!(controller.photo_index(), 0);
        assert_eq!(controller.current_photo(), Some("photo1.jpg"));
    }

    #[test]
    fn navigate_to_valid_index_moves_cursor() {
        let mut controller = detail(None, MockUpdateProfileStateUseCase::new());

        assert!(controller.navigate_to_photo(1));
        assert_eq!(controller.photo_index(), 1);
        assert!(controller.navigate_to_photo(2));
        assert_eq!(controller.current_photo(), Some("photo3.jpg"));
    }

    #[test]
    fn navigate_out_of_range_is_ignored() {
        let mut controller = detail(None, MockUpdateProfileStateUseCase::new());
        controller.navigate_to_photo(1);

        assert!(!controller.navigate_to_photo(3));
        assert!(!controller.navigate_to_photo(10));
        assert!(!controller.navigate_to_photo(usize::MAX));
        assert_eq!(controller.photo_index(), 1);
    }

    #[test]
    fn next_photo_saturates_at_last() {
        let mut controller = detail(None, MockUpdateProfileStateUseCase::new());

        controller.next_photo();
        assert_eq!(controller.photo_index(), 1);
        controller.next_photo();
        controller.next_photo();
        controller.next_photo();
        assert_eq!(controller.photo_index(), 2);
    }

    #[test]
    fn previous_photo_saturates_at_first() {
        let mut controller = detail(None, MockUpdateProfileStateUseCase::new());
        controller.previous_photo();
        assert_eq!(controller.photo_index(), 0);

        controller.navigate_to_photo(1);
        controller.previous_photo();
        assert_eq!(controller.photo_index(), 0);
    }

    #[test]
    fn profile_without_photos_keeps_cursor_at_zero() {
        let mut controller = DetailController::new(
            Profile::new("Nobody", 30, vec![], ""),
            None,
            Arc::new(MockUpdateProfileStateUseCase::new()),
        );

        controller.next_photo();
        controller.previous_photo();
        assert!(!controller.navigate_to_photo(0));
        assert_eq!(controller.photo_index(), 0);
        assert_eq!(controller.current_photo(), None);
    }

    #[tokio::test]
    async fn toggle_like_from_nothing_sets_liked_and_seen() {
        let profile = person();
        let id = profile.id;
        let mut update = MockUpdateProfileStateUseCase::new();
        update
            .expect_execute()
            .withf(move |pid, seen, liked| *pid == id && *seen && *liked == Some(true))
            .times(1)
            .returning(|id, seen, liked| Ok(ProfileState::new(id, seen, liked)));
        let mut controller = DetailController::new(profile, None, Arc::new(update));

        controller.toggle_like().await.unwrap();

        let state = controller.state().unwrap();
        assert_eq!(state.is_liked, Some(true));
        assert!(state.is_seen);
    }

    #[tokio::test]
    async fn toggle_like_from_liked_clears_to_undecided() {
        let profile = person();
        let state = ProfileState::new(profile.id, true, Some(true));
        let mut update = MockUpdateProfileStateUseCase::new();
        update
            .expect_execute()
            .withf(|_, _, liked| liked.is_none())
            .times(1)
            .returning(|id, seen, liked| Ok(ProfileState::new(id, seen, liked)));
        let mut controller = DetailController::new(profile, Some(state), Arc::new(update));

        controller.toggle_like().await.unwrap();

        assert_eq!(controller.state().unwrap().is_liked, None);
    }

    #[tokio::test]
    async fn toggle_like_twice_returns_to_undecided() {
        let mut controller = detail(None, saving());

        controller.toggle_like().await.unwrap();
        assert_eq!(controller.state().unwrap().is_liked, Some(true));
        controller.toggle_like().await.unwrap();
        assert_eq!(controller.state().unwrap().is_liked, None);
    }

    #[tokio::test]
    async fn failed_toggle_reverts_undecided_state() {
        let id = Uuid::new_v4();
        let initial = ProfileState::new(id, true, None);
        let mut controller = detail(Some(initial.clone()), failing());

        let result = controller.toggle_like().await;

        assert!(matches!(result, Err(AppError::Io(_))));
        assert_eq!(controller.state(), Some(&initial));
        assert_eq!(controller.state().unwrap().is_liked, None);
    }

    #[tokio::test]
    async fn failed_toggle_reverts_to_no_state() {
        let mut controller = detail(None, failing());

        assert!(controller.toggle_like().await.is_err());
        assert!(controller.state().is_none());
    }
}
