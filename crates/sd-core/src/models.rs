//! # Domain Models
//!
//! These structs represent the core entities of swipedeck.
//! Profiles are immutable once a source hands them out; the per-profile
//! judgment lives in a separate `ProfileState` record keyed by profile id.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A browsable profile card.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Profile {
    pub id: Uuid,
    pub name: String,
    pub age: u32,
    /// Photo URLs, in display order.
    pub photos: Vec<String>,
    pub bio: String,
}

impl Profile {
    /// Builds a profile with a fresh random id.
    pub fn new(name: impl Into<String>, age: u32, photos: Vec<String>, bio: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            age,
            photos,
            bio: bio.into(),
        }
    }
}

/// The persisted judgment for one profile.
///
/// Field order matters: serde writes fields in declaration order, and the
/// state file keeps its keys alphabetical (`isLiked`, `isSeen`, `profileId`,
/// `timestamp`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileState {
    /// `Some(true)` liked, `Some(false)` passed, `None` undecided.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_liked: Option<bool>,
    pub is_seen: bool,
    pub profile_id: Uuid,
    pub timestamp: DateTime<Utc>,
}

impl ProfileState {
    /// A state stamped with the current time.
    pub fn new(profile_id: Uuid, is_seen: bool, is_liked: Option<bool>) -> Self {
        Self {
            is_liked,
            is_seen,
            profile_id,
            timestamp: Utc::now(),
        }
    }

    pub fn verdict(&self) -> Verdict {
        Verdict::from_liked(self.is_liked)
    }

    /// Labels shown on a card, top to bottom.
    pub fn badges(&self) -> Vec<&'static str> {
        let mut badges = Vec::with_capacity(2);
        if self.is_seen {
            badges.push("SEEN");
        }
        match self.verdict() {
            Verdict::Liked => badges.push("LIKED"),
            Verdict::Passed => badges.push("PASSED"),
            Verdict::Undecided => {}
        }
        badges
    }
}

/// The tri-state like value, named.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Verdict {
    Liked,
    Passed,
    Undecided,
}

impl Verdict {
    pub fn from_liked(is_liked: Option<bool>) -> Self {
        match is_liked {
            Some(true) => Verdict::Liked,
            Some(false) => Verdict::Passed,
            None => Verdict::Undecided,
        }
    }

    /// The tri-state cycle used by "toggle like": liked clears to
    /// undecided, anything else becomes liked.
    pub fn toggled(is_liked: Option<bool>) -> Option<bool> {
        match is_liked {
            Some(true) => None,
            _ => Some(true),
        }
    }
}

/// Which way a card left the stack.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SwipeDirection {
    /// Pass.
    Left,
    /// Like.
    Right,
}

impl SwipeDirection {
    /// The `is_liked` value a swipe in this direction records.
    pub fn is_liked(self) -> bool {
        matches!(self, SwipeDirection::Right)
    }
}

/// Aggregate counts over every stored state.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StateSummary {
    pub total: usize,
    pub seen: usize,
    pub liked: usize,
    pub passed: usize,
}

impl StateSummary {
    pub fn from_states(states: &[ProfileState]) -> Self {
        states.iter().fold(Self::default(), |mut acc, state| {
            acc.total += 1;
            if state.is_seen {
                acc.seen += 1;
            }
            match state.verdict() {
                Verdict::Liked => acc.liked += 1,
                Verdict::Passed => acc.passed += 1,
                Verdict::Undecided => {}
            }
            acc
        })
    }
}
