//! Durable focus preference: a single key holding the last-focused
//! person's id. Survives a restart; an absent key means "no preference".

use std::fs;
use std::path::PathBuf;

pub trait PreferenceStore {
    fn load(&self) -> Option<String>;
    fn store(&mut self, id: &str);
    fn clear(&mut self);
}

/// In-memory preference, for tests and ephemeral sessions.
#[derive(Debug, Default)]
pub struct MemoryPrefs {
    id: Option<String>,
}

impl MemoryPrefs {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_id(id: impl Into<String>) -> Self {
        Self {
            id: Some(id.into()),
        }
    }
}

impl PreferenceStore for MemoryPrefs {
    fn load(&self) -> Option<String> {
        self.id.clone()
    }

    fn store(&mut self, id: &str) {
        self.id = Some(id.to_string());
    }

    fn clear(&mut self) {
        self.id = None;
    }
}

/// File-backed preference: the id as a plain string in a single file.
/// I/O failures degrade to "no preference" rather than failing the
/// session.
#[derive(Debug)]
pub struct FilePrefs {
    path: PathBuf,
}

impl FilePrefs {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &std::path::Path {
        &self.path
    }
}

impl PreferenceStore for FilePrefs {
    fn load(&self) -> Option<String> {
        let id = fs::read_to_string(&self.path).ok()?;
        let id = id.trim();
        if id.is_empty() {
            None
        } else {
            Some(id.to_string())
        }
    }

    fn store(&mut self, id: &str) {
        let _ = fs::write(&self.path, id);
    }

    fn clear(&mut self) {
        let _ = fs::remove_file(&self.path);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn memory_prefs_round_trip() {
        let mut prefs = MemoryPrefs::new();
        assert!(prefs.load().is_none());
        prefs.store("p1");
        assert_eq!(prefs.load().as_deref(), Some("p1"));
        prefs.clear();
        assert!(prefs.load().is_none());
    }
}
