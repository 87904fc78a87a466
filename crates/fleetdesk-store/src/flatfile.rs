//! # Flat File Access
//!
//! The only place that touches the filesystem for data files.
//!
//! ## Write Strategies
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Two Ways To Persist                                │
//! │                                                                         │
//! │  REWRITE (fleet, availability)                                         │
//! │  ─────────────────────────────                                         │
//! │  1. Write every line to "<name>.tmp" next to the target                │
//! │  2. fsync the temp file                                                │
//! │  3. rename over the target                                             │
//! │  A crash leaves either the old file or the new file, never half of    │
//! │  each.                                                                  │
//! │                                                                         │
//! │  APPEND (customers, credentials, audit log)                            │
//! │  ──────────────────────────────────────────                            │
//! │  1. Open in append mode (create if missing)                            │
//! │  2. If the file does not end in '\n', write one first                  │
//! │  3. Write the new line(s)                                              │
//! │  Appends never rewrite earlier lines.                                  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Neither strategy creates missing directories. A data directory that
//! disappears while the desk runs surfaces as `StorageUnavailable`.

use std::fs::{self, File, OpenOptions};
use std::io::{ErrorKind, Read, Seek, SeekFrom, Write};
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

use crate::error::{StoreError, StoreResult};

/// One line-oriented data file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FlatFile {
    path: PathBuf,
}

impl FlatFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        FlatFile { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Reads the whole file. A missing file reads as empty.
    pub fn read_to_string(&self) -> StoreResult<String> {
        match fs::read_to_string(&self.path) {
            Ok(contents) => Ok(contents),
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!(path = %self.path.display(), "Data file missing, treating as empty");
                Ok(String::new())
            }
            Err(e) => Err(StoreError::storage(&self.path, e)),
        }
    }

    /// Replaces the file contents atomically.
    pub fn rewrite(&self, contents: &str) -> StoreResult<()> {
        let tmp = self.temp_path();

        let result = (|| {
            let mut file = File::create(&tmp)?;
            file.write_all(contents.as_bytes())?;
            file.sync_all()?;
            fs::rename(&tmp, &self.path)
        })();

        if let Err(e) = result {
            if tmp.exists() {
                if let Err(cleanup) = fs::remove_file(&tmp) {
                    warn!(path = %tmp.display(), error = %cleanup, "Could not remove temp file");
                }
            }
            return Err(StoreError::storage(&self.path, e));
        }

        debug!(path = %self.path.display(), bytes = contents.len(), "File rewritten");
        Ok(())
    }

    /// Appends `chunk` so that it starts on a fresh line and ends with '\n'.
    pub fn append(&self, chunk: &str) -> StoreResult<()> {
        self.append_inner(chunk)
            .map_err(|e| StoreError::storage(&self.path, e))
    }

    fn append_inner(&self, chunk: &str) -> std::io::Result<()> {
        let mut file = OpenOptions::new()
            .read(true)
            .append(true)
            .create(true)
            .open(&self.path)?;

        let mut buf = String::with_capacity(chunk.len() + 2);
        if file.metadata()?.len() > 0 {
            file.seek(SeekFrom::End(-1))?;
            let mut last = [0u8; 1];
            file.read_exact(&mut last)?;
            if last[0] != b'\n' {
                buf.push('\n');
            }
        }

        buf.push_str(chunk);
        if !chunk.ends_with('\n') {
            buf.push('\n');
        }

        file.write_all(buf.as_bytes())?;
        file.flush()
    }

    fn temp_path(&self) -> PathBuf {
        let mut name = self
            .path
            .file_name()
            .map(|n| n.to_os_string())
            .unwrap_or_default();
        name.push(".tmp");
        self.path.with_file_name(name)
    }
}

// =============================================================================
// Line Records
// =============================================================================

/// A record stored as one whitespace-delimited line.
pub trait LineRecord: Sized {
    /// Entity name used in log messages.
    const ENTITY: &'static str;

    fn encode(&self) -> String;

    /// Parses one non-blank line. `Err` carries the reason it was rejected.
    fn decode(line: &str) -> Result<Self, String>;
}

/// Result of loading a file: the good records plus how many lines were
/// skipped.
#[derive(Debug)]
pub struct Loaded<T> {
    pub records: Vec<T>,
    pub skipped: usize,
}

/// Loads every decodable line of `file`.
///
/// Blank lines are ignored. Malformed lines are skipped and logged.
pub fn load_records<T: LineRecord>(file: &FlatFile) -> StoreResult<Loaded<T>> {
    let contents = file.read_to_string()?;
    let mut records = Vec::new();
    let mut skipped = 0;

    for (index, line) in contents.lines().enumerate() {
        if line.trim().is_empty() {
            continue;
        }
        match T::decode(line) {
            Ok(record) => records.push(record),
            Err(reason) => {
                skipped += 1;
                let err = StoreError::MalformedRecord {
                    path: file.path().to_path_buf(),
                    line: index + 1,
                    reason,
                };
                warn!(entity = T::ENTITY, "{}", err);
            }
        }
    }

    debug!(
        entity = T::ENTITY,
        path = %file.path().display(),
        loaded = records.len(),
        skipped,
        "Records loaded"
    );

    Ok(Loaded { records, skipped })
}

/// Encodes records one per line, each terminated by '\n'.
pub fn encode_all<T: LineRecord>(records: &[T]) -> String {
    let mut out = String::new();
    for record in records {
        out.push_str(&record.encode());
        out.push('\n');
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, PartialEq)]
    struct Pair(u32, String);

    impl LineRecord for Pair {
        const ENTITY: &'static str = "pair";

        fn encode(&self) -> String {
            format!("{} {}", self.0, self.1)
        }

        fn decode(line: &str) -> Result<Self, String> {
            let mut parts = line.split_whitespace();
            let id = parts
                .next()
                .and_then(|p| p.parse().ok())
                .ok_or_else(|| "bad id".to_string())?;
            let name = parts.next().ok_or_else(|| "missing name".to_string())?;
            Ok(Pair(id, name.to_string()))
        }
    }

    #[test]
    fn test_missing_file_reads_empty() {
        let dir = tempfile::tempdir().unwrap();
        let file = FlatFile::new(dir.path().join("nope.txt"));
        assert_eq!(file.read_to_string().unwrap(), "");

        let loaded: Loaded<Pair> = load_records(&file).unwrap();
        assert!(loaded.records.is_empty());
        assert_eq!(loaded.skipped, 0);
    }

    #[test]
    fn test_rewrite_replaces_contents_and_leaves_no_temp() {
        let dir = tempfile::tempdir().unwrap();
        let file = FlatFile::new(dir.path().join("car rental.txt"));

        file.rewrite("one\ntwo\n").unwrap();
        file.rewrite("three\n").unwrap();

        assert_eq!(file.read_to_string().unwrap(), "three\n");
        assert!(!dir.path().join("car rental.txt.tmp").exists());
    }

    #[test]
    fn test_append_repairs_missing_trailing_newline() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("UserPass.txt");
        fs::write(&path, "\n1 a").unwrap();

        let file = FlatFile::new(&path);
        file.append("2 b").unwrap();
        file.append("3 c\n").unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "\n1 a\n2 b\n3 c\n");
    }

    #[test]
    fn test_append_creates_file() {
        let dir = tempfile::tempdir().unwrap();
        let file = FlatFile::new(dir.path().join("Log.txt"));
        file.append("hello").unwrap();
        assert_eq!(file.read_to_string().unwrap(), "hello\n");
    }

    #[test]
    fn test_write_into_missing_directory_is_storage_error() {
        let dir = tempfile::tempdir().unwrap();
        let file = FlatFile::new(dir.path().join("gone").join("Log.txt"));

        assert!(matches!(
            file.append("x"),
            Err(StoreError::StorageUnavailable { .. })
        ));
        assert!(matches!(
            file.rewrite("x"),
            Err(StoreError::StorageUnavailable { .. })
        ));
    }

    #[test]
    fn test_load_skips_blank_and_malformed_lines() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("pairs.txt");
        fs::write(&path, "\n1 alpha\n\nnot-a-number beta\n2 gamma\n3\n").unwrap();

        let loaded: Loaded<Pair> = load_records(&FlatFile::new(&path)).unwrap();
        assert_eq!(
            loaded.records,
            vec![Pair(1, "alpha".to_string()), Pair(2, "gamma".to_string())]
        );
        assert_eq!(loaded.skipped, 2);
    }

    #[test]
    fn test_encode_all_terminates_each_line() {
        let records = vec![Pair(1, "a".to_string()), Pair(2, "b".to_string())];
        assert_eq!(encode_all(&records), "1 a\n2 b\n");
        assert_eq!(encode_all::<Pair>(&[]), "");
    }
}
