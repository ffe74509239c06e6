//! # sd-ui
//!
//! Plain-text views of the feed for the terminal front-end.

use askama::Template;
use sd_core::models::{Profile, ProfileState, StateSummary};
use sd_feed::DetailController;

/// The top card of the deck.
#[derive(Template)]
#[template(
    source = "{{ profile.name }}, {{ profile.age }}{% for badge in badges %} [{{ badge }}]{% endfor %}\n  {{ profile.bio }}\n  {{ profile.photos.len() }} photos | {{ remaining }} in deck",
    ext = "txt"
)]
pub struct CardTemplate<'a> {
    pub profile: &'a Profile,
    pub badges: Vec<&'static str>,
    pub remaining: usize,
}

impl<'a> CardTemplate<'a> {
    pub fn new(profile: &'a Profile, state: Option<&ProfileState>, remaining: usize) -> Self {
        Self {
            profile,
            badges: state.map(ProfileState::badges).unwrap_or_default(),
            remaining,
        }
    }
}

/// The detail page: current photo plus the full bio.
#[derive(Template)]
#[template(
    source = "{{ name }}, {{ age }}{% for badge in badges %} [{{ badge }}]{% endfor %}\n  photo {{ position }}/{{ count }}: {{ photo }}\n  {{ bio }}",
    ext = "txt"
)]
pub struct DetailTemplate<'a> {
    pub name: &'a str,
    pub age: u32,
    pub badges: Vec<&'static str>,
    /// 1-based; 0 when there are no photos.
    pub position: usize,
    pub count: usize,
    pub photo: &'a str,
    pub bio: &'a str,
}

impl<'a> DetailTemplate<'a> {
    pub fn new(detail: &'a DetailController) -> Self {
        let profile = detail.profile();
        let count = detail.photo_count();
        Self {
            name: &profile.name,
            age: profile.age,
            badges: detail.state().map(ProfileState::badges).unwrap_or_default(),
            position: if count == 0 { 0 } else { detail.photo_index() + 1 },
            count,
            photo: detail.current_photo().unwrap_or("-"),
            bio: &profile.bio,
        }
    }
}

#[derive(Template)]
#[template(
    source = "{{ summary.total }} profiles judged: {{ summary.seen }} seen, {{ summary.liked }} liked, {{ summary.passed }} passed",
    ext = "txt"
)]
pub struct SummaryTemplate<'a> {
    pub summary: &'a StateSummary,
}
