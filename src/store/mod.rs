// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Sysboard-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Sysboard and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Persistence on disk.
//!
//! Two JSON documents are kept: the canvas preferences (theme and drawing settings) and the
//! record set behind the HTTP API (saved diagrams, submissions, solved problems). Both are
//! replaced wholesale through [`write_atomic`].

use std::fs;
use std::io;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::time::{SystemTime, UNIX_EPOCH};

use serde::de::DeserializeOwned;
use serde::Serialize;

mod preferences;
mod records;

pub use preferences::{MemoryPreferences, PreferenceSink, PreferencesFile};
pub use records::{
    DiagramPatch, DiagramRecord, NewDiagram, NewSubmission, ProgressSummary, RecordError,
    RecordStore, SubmissionPatch, SubmissionRecord, UserProgress, PASSING_SCORE,
};

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("io error at {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("json error at {path:?}: {source}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("refusing to write through symlink at {path:?}")]
    SymlinkRefused { path: PathBuf },
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum WriteDurability {
    /// Fast, best-effort persistence.
    ///
    /// - Writes a temp file and renames atomically into place.
    /// - Does not perform per-file fsync/sync.
    #[default]
    BestEffort,

    /// Slower, best-effort durability.
    ///
    /// Attempts to flush written file contents and rename operations to stable storage where
    /// possible. Exact guarantees are platform/filesystem-dependent.
    Durable,
}

/// Reads and parses a JSON document. A missing file is `Ok(None)`.
pub(crate) fn read_json<T: DeserializeOwned>(path: &Path) -> Result<Option<T>, StoreError> {
    let raw = match fs::read_to_string(path) {
        Ok(raw) => raw,
        Err(source) if source.kind() == io::ErrorKind::NotFound => return Ok(None),
        Err(source) => return Err(StoreError::Io { path: path.to_path_buf(), source }),
    };
    serde_json::from_str(&raw)
        .map(Some)
        .map_err(|source| StoreError::Json { path: path.to_path_buf(), source })
}

/// Serializes `value` as pretty JSON and atomically replaces `path` with it.
pub(crate) fn write_json<T: Serialize>(
    path: &Path,
    value: &T,
    durability: WriteDurability,
) -> Result<(), StoreError> {
    let json = serde_json::to_string_pretty(value)
        .map_err(|source| StoreError::Json { path: path.to_path_buf(), source })?;
    write_atomic(path, format!("{json}\n").as_bytes(), durability)
}

/// Writes `contents` to a sibling temp file, then renames it over `path`.
///
/// Readers see either the previous file or the new one, never a partial write. The parent
/// directory is created when missing; writing through a symlink is refused.
pub fn write_atomic(
    path: &Path,
    contents: &[u8],
    durability: WriteDurability,
) -> Result<(), StoreError> {
    let Some(parent) = path.parent() else {
        return Err(StoreError::Io {
            path: path.to_path_buf(),
            source: io::Error::other("path has no parent"),
        });
    };
    let Some(file_name) = path.file_name() else {
        return Err(StoreError::Io {
            path: path.to_path_buf(),
            source: io::Error::other("path has no file name"),
        });
    };

    // `Path::new("prefs.json").parent()` is `Some("")`.
    let parent = if parent.as_os_str().is_empty() { Path::new(".") } else { parent };
    fs::create_dir_all(parent)
        .map_err(|source| StoreError::Io { path: parent.to_path_buf(), source })?;

    match fs::symlink_metadata(path) {
        Ok(md) if md.file_type().is_symlink() => {
            return Err(StoreError::SymlinkRefused { path: path.to_path_buf() });
        }
        Ok(_) => {}
        Err(err) if err.kind() == io::ErrorKind::NotFound => {}
        Err(source) => return Err(StoreError::Io { path: path.to_path_buf(), source }),
    }

    let nanos = SystemTime::now().duration_since(UNIX_EPOCH).unwrap_or_default().as_nanos();
    let tmp_path = parent.join(format!(
        ".sysboard.tmp.{}.{}.{nanos}",
        file_name.to_string_lossy(),
        std::process::id()
    ));

    let mut file = fs::OpenOptions::new()
        .write(true)
        .create_new(true)
        .open(&tmp_path)
        .map_err(|source| StoreError::Io { path: tmp_path.clone(), source })?;

    file.write_all(contents).map_err(|source| StoreError::Io { path: tmp_path.clone(), source })?;

    if durability == WriteDurability::Durable {
        file.sync_all().map_err(|source| StoreError::Io { path: tmp_path.clone(), source })?;
    }
    drop(file);

    if let Err(source) = rename_overwrite(&tmp_path, path) {
        let _ = fs::remove_file(&tmp_path);
        return Err(StoreError::Io { path: path.to_path_buf(), source });
    }

    if durability == WriteDurability::Durable {
        #[cfg(unix)]
        {
            let dir = fs::File::open(parent)
                .map_err(|source| StoreError::Io { path: parent.to_path_buf(), source })?;
            dir.sync_all().map_err(|source| StoreError::Io { path: parent.to_path_buf(), source })?;
        }
    }

    Ok(())
}

fn rename_overwrite(from: &Path, to: &Path) -> io::Result<()> {
    #[cfg(windows)]
    {
        match fs::rename(from, to) {
            Ok(()) => Ok(()),
            Err(err)
                if matches!(
                    err.kind(),
                    io::ErrorKind::AlreadyExists | io::ErrorKind::PermissionDenied
                ) =>
            {
                let _ = fs::remove_file(to);
                fs::rename(from, to)
            }
            Err(err) => Err(err),
        }
    }

    #[cfg(not(windows))]
    {
        fs::rename(from, to)
    }
}
