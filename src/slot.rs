//! The persistence slot: one named place a whole snapshot is read from and
//! written to. The store never touches the filesystem directly; it goes
//! through a `SnapshotSlot` so tests can swap in a memory-backed fake.

use std::fs::File;
use std::io::prelude::*;
use std::io::{self, ErrorKind};
use std::path::{Path, PathBuf};

const WHATNEXT_EXTENSION: &str = ".wn.yaml";

/// Somewhere a serialized snapshot can live. Reads and writes are wholesale:
/// the slot holds at most one payload and each write replaces it.
pub trait SnapshotSlot {
    /// Returns the stored payload, or `None` if nothing has been written yet.
    fn read(&self) -> io::Result<Option<String>>;
    /// Replaces the stored payload.
    fn write(&mut self, payload: &str) -> io::Result<()>;
}

/// A slot backed by a single YAML file next to the current directory,
/// named `<name>.wn.yaml`.
#[derive(Debug)]
pub struct FileSlot {
    path: PathBuf,
}

impl FileSlot {
    pub fn new(name: &str) -> FileSlot {
        FileSlot {
            path: PathBuf::from(format!("{}{}", name, WHATNEXT_EXTENSION)),
        }
    }

    /// A slot at an explicit path, extension and all.
    pub fn at<P: Into<PathBuf>>(path: P) -> FileSlot {
        FileSlot { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl SnapshotSlot for FileSlot {
    fn read(&self) -> io::Result<Option<String>> {
        match File::open(&self.path) {
            Ok(file) => {
                let mut reader = std::io::BufReader::new(file);
                let mut payload = String::new();
                reader.read_to_string(&mut payload)?;
                Ok(Some(payload))
            }
            Err(ref e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e),
        }
    }

    fn write(&mut self, payload: &str) -> io::Result<()> {
        let mut buf = File::create(&self.path)?;
        buf.write_all(payload.as_bytes())
    }
}

/// In-memory slot for tests and throwaway sessions. Counts writes so tests
/// can check which operations actually persisted.
#[derive(Debug, Default)]
pub struct MemorySlot {
    payload: Option<String>,
    writes: usize,
}

impl MemorySlot {
    pub fn new() -> MemorySlot {
        MemorySlot::default()
    }

    /// A slot that already holds a payload, as if a previous session wrote it.
    pub fn holding(payload: &str) -> MemorySlot {
        MemorySlot {
            payload: Some(payload.to_string()),
            writes: 0,
        }
    }

    pub fn writes(&self) -> usize {
        self.writes
    }

    pub fn payload(&self) -> Option<&str> {
        self.payload.as_deref()
    }
}

impl SnapshotSlot for MemorySlot {
    fn read(&self) -> io::Result<Option<String>> {
        Ok(self.payload.clone())
    }

    fn write(&mut self, payload: &str) -> io::Result<()> {
        self.payload = Some(payload.to_string());
        self.writes += 1;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn file_slot_reads_none_when_missing() {
        let dir = tempfile::tempdir().unwrap();
        let slot = FileSlot::at(dir.path().join("nothing.wn.yaml"));
        assert_eq!(slot.read().unwrap(), None);
    }

    #[test]
    fn file_slot_round_trips_a_payload() {
        let dir = tempfile::tempdir().unwrap();
        let mut slot = FileSlot::at(dir.path().join("todos.wn.yaml"));
        slot.write("- id: 1\n").unwrap();
        assert_eq!(slot.read().unwrap().as_deref(), Some("- id: 1\n"));
    }

    #[test]
    fn file_slot_write_replaces_wholesale() {
        let dir = tempfile::tempdir().unwrap();
        let mut slot = FileSlot::at(dir.path().join("todos.wn.yaml"));
        slot.write("first first first").unwrap();
        slot.write("2nd").unwrap();
        assert_eq!(slot.read().unwrap().as_deref(), Some("2nd"));
    }

    #[test]
    fn named_slot_gets_the_extension() {
        let slot = FileSlot::new("todos");
        assert_eq!(slot.path(), Path::new("todos.wn.yaml"));
    }

    #[test]
    fn memory_slot_counts_writes() {
        let mut slot = MemorySlot::new();
        assert_eq!(slot.read().unwrap(), None);
        slot.write("x").unwrap();
        slot.write("y").unwrap();
        assert_eq!(slot.writes(), 2);
        assert_eq!(slot.payload(), Some("y"));
    }
}
