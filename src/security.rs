use crate::mode::PermissionSet;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Warning {
    WorldWritable,
    EscalatedPrivilege,
    UnsafeSharedDirectory,
}

impl Warning {
    #[must_use]
    pub fn message(self) -> &'static str {
        match self {
            Warning::WorldWritable => "Anyone can modify this!",
            Warning::EscalatedPrivilege => "Runs with special privileges",
            Warning::UnsafeSharedDirectory => "Unsafe directory permissions!",
        }
    }
}

/// Runs every heuristic independently; output order is fixed.
#[must_use]
pub fn evaluate(perms: &PermissionSet, is_directory: bool) -> Vec<Warning> {
    let mut warnings = Vec::new();

    if perms.other.write {
        warnings.push(Warning::WorldWritable);
    }
    if perms.setuid {
        warnings.push(Warning::EscalatedPrivilege);
    }
    // Without the sticky bit anyone can delete or rename other users' files
    if is_directory && perms.other.write && !perms.sticky {
        warnings.push(Warning::UnsafeSharedDirectory);
    }

    warnings
}
