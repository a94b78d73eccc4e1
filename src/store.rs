use std::cell::RefCell;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::error::Result;
use crate::model::HabitData;

/// Place the serialized habit data is kept in.
pub trait Backend {
    /// Returns `None` when nothing has been stored yet.
    fn read(&self) -> io::Result<Option<String>>;
    fn write(&self, content: &str) -> io::Result<()>;
}

/// Stores the habit data as a single JSON file.
#[derive(Debug, Clone)]
pub struct FileBackend {
    path: PathBuf,
}

impl FileBackend {
    pub fn new<P: Into<PathBuf>>(path: P) -> Self {
        FileBackend { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn tmp_path(&self) -> PathBuf {
        let mut name = self
            .path
            .file_name()
            .map(|name| name.to_os_string())
            .unwrap_or_default();
        name.push(".tmp");
        self.path.with_file_name(name)
    }
}

impl Backend for FileBackend {
    fn read(&self) -> io::Result<Option<String>> {
        match fs::read_to_string(&self.path) {
            Ok(content) => Ok(Some(content)),
            Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(err) => Err(err),
        }
    }

    fn write(&self, content: &str) -> io::Result<()> {
        if let Some(dir) = self.path.parent().filter(|dir| !dir.as_os_str().is_empty()) {
            fs::create_dir_all(dir)?;
        }

        // Replace the file in one step so an interrupted write leaves the
        // previous content in place.
        let tmp = self.tmp_path();
        fs::write(&tmp, content)?;
        fs::rename(&tmp, &self.path).map_err(|err| {
            let _ = fs::remove_file(&tmp);
            err
        })
    }
}

/// Keeps the serialized habit data in memory.
#[derive(Debug, Default)]
pub struct MemoryBackend {
    content: RefCell<Option<String>>,
}

impl MemoryBackend {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_content(content: &str) -> Self {
        MemoryBackend {
            content: RefCell::new(Some(content.to_owned())),
        }
    }

    pub fn content(&self) -> Option<String> {
        self.content.borrow().clone()
    }
}

impl Backend for MemoryBackend {
    fn read(&self) -> io::Result<Option<String>> {
        Ok(self.content.borrow().clone())
    }

    fn write(&self, content: &str) -> io::Result<()> {
        *self.content.borrow_mut() = Some(content.to_owned());
        Ok(())
    }
}

/// Loads and saves [`HabitData`] through a [`Backend`].
pub struct HabitStore<B: Backend> {
    backend: B,
}

impl<B: Backend> HabitStore<B> {
    pub fn new(backend: B) -> Self {
        HabitStore { backend }
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    /// Reads the stored habit data.
    ///
    /// Missing or unreadable data yields an empty record; the problem is
    /// logged but not reported to the caller.
    pub fn load(&self) -> HabitData {
        let content = match self.backend.read() {
            Ok(Some(content)) => content,
            Ok(None) => {
                log::debug!("No stored habit data, starting empty");
                return HabitData::new();
            }
            Err(err) => {
                log::warn!("Could not read habit data, starting empty: {}", err);
                return HabitData::new();
            }
        };

        match serde_json::from_str(&content) {
            Ok(data) => {
                log::debug!("Loaded habit data");
                data
            }
            Err(err) => {
                log::warn!("Stored habit data is malformed, starting empty: {}", err);
                HabitData::new()
            }
        }
    }

    /// Overwrites the stored habit data with `data`.
    pub fn save(&self, data: &HabitData) -> Result<()> {
        let content = serde_json::to_string(data)?;
        self.backend.write(&content)?;
        log::debug!("Saved habit data ({} bytes)", content.len());
        Ok(())
    }
}

impl HabitStore<FileBackend> {
    pub fn from_path<P: Into<PathBuf>>(path: P) -> Self {
        HabitStore::new(FileBackend::new(path))
    }
}
