use chrono::{DateTime, Local};
use std::path::PathBuf;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    File,
    Directory,
}

impl EntryKind {
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            EntryKind::File => "File",
            EntryKind::Directory => "Directory",
        }
    }
}

/// Metadata snapshot of one filesystem object, read once and never written back.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    pub path: PathBuf,
    pub kind: EntryKind,
    pub size_bytes: u64,
    pub owner_id: u32,
    pub group_id: u32,
    pub owner_name: Option<String>,
    pub group_name: Option<String>,
    pub mode_bits: u32,
    pub modified_at: DateTime<Local>,
}

impl Entry {
    #[must_use]
    pub fn is_directory(&self) -> bool {
        self.kind == EntryKind::Directory
    }
}
