use async_trait::async_trait;
use std::io::{self, ErrorKind};
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tracing::debug;

/// A single named durable value holding the serialized history.
/// `write` must replace the whole value so readers never see a partial blob.
#[async_trait]
pub trait SessionSlot: Send + Sync {
    /// Raw stored text, or `None` when nothing has been stored.
    async fn read(&self) -> io::Result<Option<String>>;
    async fn write(&self, blob: &str) -> io::Result<()>;
    async fn remove(&self) -> io::Result<()>;
}

/// Slot backed by `<dir>/<name>.json`. Writes go to a sibling temp file that
/// is then renamed over the target.
#[derive(Debug, Clone)]
pub struct FileSlot {
    path: PathBuf,
}

impl FileSlot {
    pub fn new(dir: impl AsRef<Path>, name: &str) -> Self {
        Self { path: dir.as_ref().join(format!("{name}.json")) }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn temp_path(&self) -> PathBuf {
        self.path.with_extension("json.tmp")
    }
}

#[async_trait]
impl SessionSlot for FileSlot {
    async fn read(&self) -> io::Result<Option<String>> {
        match tokio::fs::read_to_string(&self.path).await {
            Ok(s) => Ok(Some(s)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e),
        }
    }

    async fn write(&self, blob: &str) -> io::Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                tokio::fs::create_dir_all(parent).await?;
            }
        }
        let tmp = self.temp_path();
        tokio::fs::write(&tmp, blob).await?;
        tokio::fs::rename(&tmp, &self.path).await?;
        debug!(path = %self.path.display(), bytes = blob.len(), "wrote history slot");
        Ok(())
    }

    async fn remove(&self) -> io::Result<()> {
        match tokio::fs::remove_file(&self.path).await {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e),
        }
    }
}

/// In-process slot, for tests and embedding.
#[derive(Debug, Default)]
pub struct MemorySlot {
    value: Mutex<Option<String>>,
}

impl MemorySlot {
    pub fn new() -> Self {
        Self::default()
    }

    /// Slot pre-filled with `blob`, e.g. to simulate foreign or damaged state.
    pub fn with_value(blob: impl Into<String>) -> Self {
        Self { value: Mutex::new(Some(blob.into())) }
    }

    fn lock(&self) -> io::Result<std::sync::MutexGuard<'_, Option<String>>> {
        self.value
            .lock()
            .map_err(|_| io::Error::new(ErrorKind::Other, "memory slot poisoned"))
    }
}

#[async_trait]
impl SessionSlot for MemorySlot {
    async fn read(&self) -> io::Result<Option<String>> {
        Ok(self.lock()?.clone())
    }

    async fn write(&self, blob: &str) -> io::Result<()> {
        *self.lock()? = Some(blob.to_string());
        Ok(())
    }

    async fn remove(&self) -> io::Result<()> {
        *self.lock()? = None;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[tokio::test]
    async fn file_slot_absent_until_written() {
        let dir = tempdir().unwrap();
        let slot = FileSlot::new(dir.path().join("nested"), "wallet-sessions");
        assert_eq!(slot.read().await.unwrap(), None);

        slot.write("[]").await.unwrap();
        assert_eq!(slot.read().await.unwrap().as_deref(), Some("[]"));
        assert!(!slot.temp_path().exists());

        slot.remove().await.unwrap();
        assert_eq!(slot.read().await.unwrap(), None);
        // removing twice is fine
        slot.remove().await.unwrap();
    }

    #[tokio::test]
    async fn memory_slot_replaces_value() {
        let slot = MemorySlot::with_value("old");
        slot.write("new").await.unwrap();
        assert_eq!(slot.read().await.unwrap().as_deref(), Some("new"));
    }
}
