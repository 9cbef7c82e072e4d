use std::fs;
use std::path::{Path, PathBuf};

use furlough::Slot;

use crate::error::FileSlotError;

/// A [`Slot`] persisting the document as one JSON file.
///
/// The file is rewritten whole on every store, with no atomicity: a failure
/// mid-write can corrupt the document, and two writers over the same file
/// race last-write-wins. Acceptable for the single-writer usage this backend
/// is meant for.
#[derive(Debug)]
pub struct FileSlot {
    /// The file holding the document.
    path: PathBuf,
}

impl FileSlot {
    /// Creates a slot stored at `<data_dir>/<key>.json`.
    ///
    /// Creates the directory if it doesn't exist. The file itself is only
    /// created on the first store; until then the slot loads as empty.
    ///
    /// # Errors
    ///
    /// Returns an error if the directory cannot be created.
    pub fn new(data_dir: impl Into<PathBuf>, key: &str) -> std::io::Result<Self> {
        let data_dir = data_dir.into();
        fs::create_dir_all(&data_dir)?;
        Ok(Self {
            path: data_dir.join(format!("{key}.json")),
        })
    }

    /// The file backing this slot.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Slot for FileSlot {
    type Error = FileSlotError;

    fn load(&self) -> Result<Option<String>, Self::Error> {
        match fs::read_to_string(&self.path) {
            Ok(document) => Ok(Some(document)),
            Err(ref e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    fn store(&mut self, document: &str) -> Result<(), Self::Error> {
        fs::write(&self.path, document)?;
        Ok(())
    }
}
