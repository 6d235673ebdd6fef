//! Flat-file persistence for script records.
//!
//! Each record lands in its own `<id>.json` file inside the store directory.
//! Records are written once and never read back by the service.

use std::path::{Path, PathBuf};

use tokio::io::AsyncWriteExt;
use uuid::Uuid;

use crate::error::CoreError;
use crate::script::{Script, ScriptId};

/// Permission bits for newly created record files (owner rw, group/other r).
pub const FILE_MODE: u32 = 0o644;

/// Writes [`Script`] records into a single directory.
#[derive(Debug, Clone)]
pub struct ScriptStore {
    dir: PathBuf,
}

impl ScriptStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Full path of the file holding the record with `id`.
    pub fn path_for(&self, id: &ScriptId) -> PathBuf {
        self.dir.join(id.file_name())
    }

    /// Serialize `script` and write it to `<dir>/<id>.json`.
    ///
    /// An existing file with the same name is truncated. Returns the path
    /// that was written.
    pub async fn save(&self, script: &Script) -> Result<PathBuf, CoreError> {
        let data = serde_json::to_vec(script).map_err(CoreError::Serialize)?;
        let path = self.path_for(&script.id);

        let mut options = tokio::fs::OpenOptions::new();
        options.write(true).create(true).truncate(true);
        #[cfg(unix)]
        options.mode(FILE_MODE);

        let mut file = options.open(&path).await?;
        file.write_all(&data).await?;
        file.flush().await?;

        tracing::debug!(path = %path.display(), bytes = data.len(), "Script record written");
        Ok(path)
    }

    /// Whether a file can actually be created in the store directory.
    ///
    /// Creates and removes a uniquely named scratch file, so ownership and
    /// mount flags are honoured, not just the mode bits.
    pub async fn is_writable(&self) -> bool {
        let path = self.dir.join(format!(".writable-{}", Uuid::new_v4()));
        let created = tokio::fs::OpenOptions::new()
            .write(true)
            .create_new(true)
            .open(&path)
            .await;

        match created {
            Ok(file) => {
                drop(file);
                if let Err(e) = tokio::fs::remove_file(&path).await {
                    tracing::warn!(path = %path.display(), error = %e, "Failed to remove scratch file");
                }
                true
            }
            Err(_) => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::*;
    use crate::script::{ScriptBody, CONTENT_TYPE_KEY};

    fn sample_script() -> Script {
        Script::new(
            "srv1".into(),
            "application/json".into(),
            ScriptBody {
                calc_func: "sum".into(),
                queries: vec!["SELECT 1".into(), "SELECT 2".into()],
            },
        )
    }

    #[tokio::test]
    async fn save_writes_record_named_after_id() {
        let dir = tempfile::tempdir().unwrap();
        let store = ScriptStore::new(dir.path());
        let script = sample_script();

        let path = store.save(&script).await.unwrap();

        assert_eq!(path, dir.path().join(format!("{}.json", script.id)));
        let bytes = std::fs::read(&path).unwrap();
        let stored: Script = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(stored, script);
        assert_eq!(stored.headers[CONTENT_TYPE_KEY], "application/json");
    }

    #[tokio::test]
    async fn save_truncates_existing_file() {
        let dir = tempfile::tempdir().unwrap();
        let store = ScriptStore::new(dir.path());
        let script = sample_script();
        let path = store.path_for(&script.id);
        std::fs::write(&path, vec![b'x'; 4096]).unwrap();

        store.save(&script).await.unwrap();

        let stored: Script = serde_json::from_slice(&std::fs::read(&path).unwrap()).unwrap();
        assert_eq!(stored, script);
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn save_sets_owner_rw_and_no_group_write() {
        use std::os::unix::fs::PermissionsExt;

        let dir = tempfile::tempdir().unwrap();
        let store = ScriptStore::new(dir.path());
        let path = store.save(&sample_script()).await.unwrap();

        let mode = std::fs::metadata(path).unwrap().permissions().mode() & 0o777;
        assert_eq!(mode & 0o600, 0o600);
        assert_eq!(mode & 0o133, 0);
    }

    #[tokio::test]
    async fn save_into_missing_directory_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let store = ScriptStore::new(dir.path().join("does-not-exist"));

        assert_matches!(store.save(&sample_script()).await, Err(CoreError::Io(_)));
        assert!(!store.is_writable().await);
    }

    #[tokio::test]
    async fn writable_check_leaves_directory_empty() {
        let dir = tempfile::tempdir().unwrap();
        assert!(ScriptStore::new(dir.path()).is_writable().await);
        assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 0);
    }

    #[tokio::test]
    async fn regular_file_is_not_a_writable_directory() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("plain");
        std::fs::write(&file, b"x").unwrap();

        assert!(!ScriptStore::new(&file).is_writable().await);
    }
}
