use crate::identity::IdentityResolver;
use crate::mode::PermissionSet;
use crate::security::{self, Warning};
use crate::types::{Entry, EntryKind};
use chrono::{DateTime, Local, Utc};
use log::{debug, warn};
use std::fs;
use std::io;
use std::os::unix::fs::MetadataExt;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum InspectError {
    #[error("File not found: {}", .path.display())]
    NotFound { path: PathBuf },
    #[error("Cannot read metadata for {}: {source}", .path.display())]
    Metadata {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Report {
    pub entry: Entry,
    pub permissions: PermissionSet,
    pub warnings: Vec<Warning>,
}

/// Reads metadata for `path` and evaluates it.
///
/// Existence and metadata are two separate calls; an object removed in
/// between surfaces as [`InspectError::Metadata`].
pub fn inspect(path: &Path, resolver: &IdentityResolver) -> Result<Report, InspectError> {
    let exists = path.try_exists().unwrap_or_else(|e| {
        debug!("existence check for {} failed: {e}", path.display());
        false
    });
    if !exists {
        return Err(InspectError::NotFound {
            path: path.to_path_buf(),
        });
    }

    let metadata = fs::metadata(path).map_err(|source| {
        warn!("{} disappeared after existence check", path.display());
        InspectError::Metadata {
            path: path.to_path_buf(),
            source,
        }
    })?;
    debug!(
        "metadata for {}: mode={:o} uid={} gid={} size={}",
        path.display(),
        metadata.mode(),
        metadata.uid(),
        metadata.gid(),
        metadata.len()
    );

    let kind = if metadata.is_dir() {
        EntryKind::Directory
    } else {
        EntryKind::File
    };

    // mtimes outside chrono's range fall back to the epoch
    let modified_at = DateTime::from_timestamp(metadata.mtime(), 0)
        .unwrap_or(DateTime::<Utc>::UNIX_EPOCH)
        .with_timezone(&Local);

    let entry = Entry {
        path: path.to_path_buf(),
        kind,
        size_bytes: metadata.len(),
        owner_id: metadata.uid(),
        group_id: metadata.gid(),
        owner_name: resolver.user_name(metadata.uid()).into_option(),
        group_name: resolver.group_name(metadata.gid()).into_option(),
        mode_bits: metadata.mode(),
        modified_at,
    };

    Ok(evaluate(entry))
}

/// Decodes the entry's mode and runs the security heuristics on it.
#[must_use]
pub fn evaluate(entry: Entry) -> Report {
    let permissions = PermissionSet::from_mode(entry.mode_bits);
    let warnings = security::evaluate(&permissions, entry.is_directory());
    Report {
        entry,
        permissions,
        warnings,
    }
}
