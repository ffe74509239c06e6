//! # sd-store-json
//! swipedeck/crates/sd-plugins/sd-store-json/src/lib.rs
//! Local filesystem implementation of `ProfileStateStore`.
//! Features: one pretty-printed JSON array, whole-file replace on save, atomic rename.

use async_trait::async_trait;
use sd_core::error::{AppError, Result};
use sd_core::models::ProfileState;
use sd_core::traits::ProfileStateStore;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tokio::fs;
use tokio::io::AsyncWriteExt;
use tokio::sync::Mutex;
use uuid::Uuid;

pub struct JsonStateStore {
    /// Backing file (e.g., "./data/profile_states.json")
    path: PathBuf,
    /// Serializes read-modify-write cycles issued through this instance.
    write_lock: Mutex<()>,
}

impl JsonStateStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            write_lock: Mutex::new(()),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Sibling temp file: "data/.profile_states.json.tmp"
    fn temp_path(&self) -> PathBuf {
        let name = self
            .path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| "profile_states.json".to_string());
        self.path.with_file_name(format!(".{name}.tmp"))
    }

    async fn read_states(&self) -> Result<Vec<ProfileState>> {
        let data = match fs::read(&self.path).await {
            Ok(data) => data,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(e.into()),
        };
        serde_json::from_slice(&data).map_err(AppError::Decode)
    }

    async fn write_states(&self, states: &[ProfileState]) -> Result<()> {
        let bytes = serde_json::to_vec_pretty(states).map_err(AppError::Encode)?;

        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).await?;
        }

        let tmp = self.temp_path();
        if let Err(e) = replace_via(&tmp, &self.path, &bytes).await {
            let _ = fs::remove_file(&tmp).await;
            return Err(e.into());
        }
        Ok(())
    }
}

/// Writes `bytes` to `tmp`, flushes it to disk and renames it over `target`.
/// The rename is atomic on the same filesystem, so `target` always holds
/// either the old or the new content.
async fn replace_via(tmp: &Path, target: &Path, bytes: &[u8]) -> std::io::Result<()> {
    let mut file = fs::File::create(tmp).await?;
    file.write_all(bytes).await?;
    file.sync_all().await?;
    drop(file);
    fs::rename(tmp, target).await
}

#[async_trait]
impl ProfileStateStore for JsonStateStore {
    async fn get_all(&self) -> Result<Vec<ProfileState>> {
        self.read_states().await
    }

    async fn get(&self, profile_id: Uuid) -> Result<Option<ProfileState>> {
        let states = self.read_states().await?;
        Ok(states.into_iter().find(|s| s.profile_id == profile_id))
    }

    /// Loads the whole list, replaces or appends the entry, writes it back.
    async fn save(&self, state: ProfileState) -> Result<()> {
        let _guard = self.write_lock.lock().await;

        let mut states = self.read_states().await?;
        match states.iter_mut().find(|s| s.profile_id == state.profile_id) {
            Some(existing) => *existing = state,
            None => states.push(state),
        }

        self.write_states(&states).await?;
        tracing::debug!(path = %self.path.display(), count = states.len(), "profile states written");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use std::sync::Arc;
    use tempfile::TempDir;

    fn store_in(dir: &TempDir) -> JsonStateStore {
        JsonStateStore::new(dir.path().join("profile_states.json"))
    }

    fn fixed_state(profile_id: Uuid, is_seen: bool, is_liked: Option<bool>) -> ProfileState {
        ProfileState {
            is_liked,
            is_seen,
            profile_id,
            timestamp: Utc.with_ymd_and_hms(2026, 1, 2, 3, 4, 5).unwrap(),
        }
    }

    #[tokio::test]
    async fn test_missing_file_reads_as_empty() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);

        assert!(store.get_all().await.unwrap().is_empty());
        assert!(store.get(Uuid::new_v4()).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_save_appends_new_profile() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);
        let first = fixed_state(Uuid::new_v4(), true, None);
        let second = fixed_state(Uuid::new_v4(), true, Some(false));

        store.save(first.clone()).await.unwrap();
        store.save(second.clone()).await.unwrap();

        assert_eq!(store.get_all().await.unwrap(), vec![first, second.clone()]);
        assert_eq!(store.get(second.profile_id).await.unwrap(), Some(second));
    }

    #[tokio::test]
    async fn test_save_replaces_in_place() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);
        let id = Uuid::new_v4();
        let other = fixed_state(Uuid::new_v4(), true, None);

        store.save(fixed_state(id, true, None)).await.unwrap();
        store.save(other.clone()).await.unwrap();
        store.save(fixed_state(id, true, Some(true))).await.unwrap();

        let all = store.get_all().await.unwrap();
        assert_eq!(all.len(), 2);
        assert_eq!(all[0], fixed_state(id, true, Some(true)));
        assert_eq!(all[1], other);
    }

    #[tokio::test]
    async fn test_saving_same_state_twice_is_idempotent() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);
        let state = fixed_state(Uuid::new_v4(), true, Some(true));

        store.save(state.clone()).await.unwrap();
        let once = fs::read(store.path()).await.unwrap();
        store.save(state.clone()).await.unwrap();
        let twice = fs::read(store.path()).await.unwrap();

        assert_eq!(once, twice);
        assert_eq!(store.get_all().await.unwrap(), vec![state]);
    }

    #[tokio::test]
    async fn test_file_is_pretty_and_sorted() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);
        store.save(fixed_state(Uuid::nil(), true, Some(true))).await.unwrap();

        let text = fs::read_to_string(store.path()).await.unwrap();
        let expected = r#"[
  {
    "isLiked": true,
    "isSeen": true,
    "profileId": "00000000-0000-0000-0000-000000000000",
    "timestamp": "2026-01-02T03:04:05Z"
  }
]"#;
        assert_eq!(text, expected);
        assert!(!store.temp_path().exists());
    }

    #[tokio::test]
    async fn test_garbage_file_is_decode_error() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);
        fs::write(store.path(), b"{ not a list").await.unwrap();

        assert!(matches!(store.get_all().await, Err(AppError::Decode(_))));
        assert!(matches!(store.get(Uuid::new_v4()).await, Err(AppError::Decode(_))));

        // A save must not clobber a file it could not understand.
        let result = store.save(fixed_state(Uuid::new_v4(), true, None)).await;
        assert!(matches!(result, Err(AppError::Decode(_))));
        assert_eq!(fs::read(store.path()).await.unwrap(), b"{ not a list");
    }

    #[tokio::test]
    async fn test_creates_parent_directories() {
        let dir = TempDir::new().unwrap();
        let store = JsonStateStore::new(dir.path().join("nested/deeper/states.json"));

        store.save(fixed_state(Uuid::new_v4(), true, None)).await.unwrap();
        assert_eq!(store.get_all().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_unreadable_target_is_io_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("profile_states.json");
        fs::create_dir_all(path.join("occupied")).await.unwrap();
        let store = JsonStateStore::new(&path);

        let result = store.save(fixed_state(Uuid::new_v4(), true, None)).await;
        assert!(matches!(result, Err(AppError::Io(_))));
        assert!(path.join("occupied").is_dir());
    }

    #[tokio::test]
    async fn test_failed_write_keeps_previous_content() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);
        let kept = fixed_state(Uuid::new_v4(), true, Some(true));
        store.save(kept.clone()).await.unwrap();
        let before = fs::read(store.path()).await.unwrap();

        // A directory in the temp file's place makes File::create fail.
        fs::create_dir_all(store.temp_path()).await.unwrap();
        let result = store.save(fixed_state(Uuid::new_v4(), true, None)).await;

        assert!(matches!(result, Err(AppError::Io(_))));
        assert_eq!(fs::read(store.path()).await.unwrap(), before);
        assert_eq!(store.get_all().await.unwrap(), vec![kept]);
    }

    #[tokio::test]
    async fn test_concurrent_saves_keep_every_record() {
        let dir = TempDir::new().unwrap();
        let store = Arc::new(store_in(&dir));

        let mut handles = Vec::new();
        for _ in 0..8 {
            let store = Arc::clone(&store);
            handles.push(tokio::spawn(async move {
                store.save(fixed_state(Uuid::new_v4(), true, None)).await
            }));
        }
        for handle in handles {
            handle.await.unwrap().unwrap();
        }

        assert_eq!(store.get_all().await.unwrap().len(), 8);
    }
}
