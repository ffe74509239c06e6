//! # sd-remote-catalog
//!
//! In-memory implementation of `RemoteProfileSource`.
//! Pages are cut from a fixed catalog, wrapping around at the end, after a
//! fixed artificial latency. It never fails.

use async_trait::async_trait;
use sd_core::error::Result;
use sd_core::models::Profile;
use sd_core::traits::RemoteProfileSource;
use std::time::Duration;
use uuid::Uuid;

/// (slug, display name, age, bio)
const BUILTIN: &[(&str, &str, u32, &str)] = &[
    ("emma", "Emma Wilson", 26, "Love hiking and coffee"),
    ("sophia", "Sophia Martinez", 24, "Artist | Traveler"),
    ("olivia", "Olivia Johnson", 28, "Fitness enthusiast"),
    ("ava", "Ava Brown", 25, "Foodie and book lover"),
    ("isabella", "Isabella Davis", 27, "Yoga teacher"),
    ("mia", "Mia Garcia", 23, "Music & adventure"),
    ("charlotte", "Charlotte Rodriguez", 29, "Software engineer"),
    ("amelia", "Amelia Wilson", 26, "Dog lover"),
];

const PHOTOS_PER_PROFILE: usize = 3;

pub struct CatalogProfileSource {
    catalog: Vec<Profile>,
    latency: Duration,
}

impl CatalogProfileSource {
    /// The built-in eight-profile catalog.
    pub fn new(latency: Duration) -> Self {
        Self::with_catalog(builtin_catalog(), latency)
    }

    pub fn with_catalog(catalog: Vec<Profile>, latency: Duration) -> Self {
        Self { catalog, latency }
    }

    pub fn catalog(&self) -> &[Profile] {
        &self.catalog
    }

    /// Item `i` of page `page` is catalog entry `(page * page_size + i) % len`.
    fn page(&self, page: usize, page_size: usize) -> Vec<Profile> {
        if self.catalog.is_empty() {
            return Vec::new();
        }
        let len = self.catalog.len() as u128;
        let start = page as u128 * page_size as u128;
        (0..page_size)
            .map(|i| self.catalog[((start + i as u128) % len) as usize].clone())
            .collect()
    }
}

#[async_trait]
impl RemoteProfileSource for CatalogProfileSource {
    async fn fetch_page(&self, page: usize, page_size: usize) -> Result<Vec<Profile>> {
        tokio::time::sleep(self.latency).await;
        let profiles = self.page(page, page_size);
        tracing::debug!(page, page_size, returned = profiles.len(), "catalog page served");
        Ok(profiles)
    }
}

/// Catalog ids are UUIDv5 of the slug, so stored state still matches a
/// profile after a restart.
pub fn builtin_catalog() -> Vec<Profile> {
    BUILTIN
        .iter()
        .map(|&(slug, name, age, bio)| Profile {
            id: catalog_id(slug),
            name: name.to_string(),
            age,
            photos: (1..=PHOTOS_PER_PROFILE)
                .map(|n| format!("https://picsum.photos/seed/{slug}{n}/400/600"))
                .collect(),
            bio: bio.to_string(),
        })
        .collect()
}

fn catalog_id(slug: &str) -> Uuid {
    Uuid::new_v5(&Uuid::NAMESPACE_OID, format!("swipedeck/catalog/{slug}").as_bytes())
}
