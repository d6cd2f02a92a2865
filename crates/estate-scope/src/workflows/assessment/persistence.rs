use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

/// Single key-value slot holding the serialized envelope.
pub trait PersistenceSlot: Send + Sync {
    fn read(&self) -> Result<Option<String>, SlotError>;
    fn write(&self, blob: &str) -> Result<(), SlotError>;
    fn clear(&self) -> Result<(), SlotError>;
}

/// Slot access failure. The controller logs these and carries on.
#[derive(Debug, thiserror::Error)]
pub enum SlotError {
    #[error("slot io failure at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("slot unavailable: {0}")]
    Unavailable(String),
}

/// In-process slot.
#[derive(Debug, Default)]
pub struct MemorySlot {
    blob: Mutex<Option<String>>,
}

impl MemorySlot {
    pub fn with_blob(blob: impl Into<String>) -> Self {
        Self {
            blob: Mutex::new(Some(blob.into())),
        }
    }

    fn guard(&self) -> Result<std::sync::MutexGuard<'_, Option<String>>, SlotError> {
        self.blob
            .lock()
            .map_err(|_| SlotError::Unavailable("memory slot mutex poisoned".to_string()))
    }
}

impl PersistenceSlot for MemorySlot {
    fn read(&self) -> Result<Option<String>, SlotError> {
        Ok(self.guard()?.clone())
    }

    fn write(&self, blob: &str) -> Result<(), SlotError> {
        *self.guard()? = Some(blob.to_string());
        Ok(())
    }

    fn clear(&self) -> Result<(), SlotError> {
        *self.guard()? = None;
        Ok(())
    }
}

/// Slot backed by one JSON file. A missing file reads as an empty slot.
#[derive(Debug, Clone)]
pub struct FileSlot {
    path: PathBuf,
}

impl FileSlot {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn io_error(&self, source: std::io::Error) -> SlotError {
        SlotError::Io {
            path: self.path.clone(),
            source,
        }
    }
}

impl PersistenceSlot for FileSlot {
    fn read(&self) -> Result<Option<String>, SlotError> {
        match fs::read_to_string(&self.path) {
            Ok(blob) => Ok(Some(blob)),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(None),
            Err(err) => Err(self.io_error(err)),
        }
    }

    fn write(&self, blob: &str) -> Result<(), SlotError> {
        if let Some(parent) = self.path.parent().filter(|dir| !dir.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|err| self.io_error(err))?;
        }
        fs::write(&self.path, blob).map_err(|err| self.io_error(err))
    }

    fn clear(&self) -> Result<(), SlotError> {
        match fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(()),
            Err(err) => Err(self.io_error(err)),
        }
    }
}
