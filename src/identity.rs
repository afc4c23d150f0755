//! Best-effort mapping of numeric uid/gid to user and group names.
//!
//! Whether the platform identity directory (passwd/group databases) can be
//! used at all is probed once per process; lookups never fail, they either
//! resolve a name or come back [`NameLookup::Unresolved`].

use log::debug;
use std::sync::OnceLock;
use users::{get_current_uid, get_group_by_gid, get_user_by_uid};

static CAPABILITIES: OnceLock<Capabilities> = OnceLock::new();

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Capabilities {
    pub identity_directory: bool,
}

impl Capabilities {
    /// The directory counts as available if it knows either the current user or root.
    #[must_use]
    pub fn probe() -> Self {
        let uid = get_current_uid();
        let identity_directory = get_user_by_uid(uid).is_some() || get_user_by_uid(0).is_some();
        debug!("identity directory probe (uid {uid}): available={identity_directory}");
        Capabilities { identity_directory }
    }

    /// Process-wide capabilities, probed on first access.
    pub fn get() -> &'static Capabilities {
        CAPABILITIES.get_or_init(Self::probe)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NameLookup {
    Resolved(String),
    Unresolved,
}

impl NameLookup {
    #[must_use]
    pub fn into_option(self) -> Option<String> {
        match self {
            NameLookup::Resolved(name) => Some(name),
            NameLookup::Unresolved => None,
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct IdentityResolver {
    enabled: bool,
}

impl IdentityResolver {
    #[must_use]
    pub fn new(capabilities: &Capabilities) -> Self {
        IdentityResolver {
            enabled: capabilities.identity_directory,
        }
    }

    #[must_use]
    pub fn user_name(&self, uid: u32) -> NameLookup {
        if !self.enabled {
            return NameLookup::Unresolved;
        }
        match get_user_by_uid(uid) {
            Some(user) => NameLookup::Resolved(user.name().to_string_lossy().into_owned()),
            None => {
                debug!("no user entry for uid {uid}");
                NameLookup::Unresolved
            }
        }
    }

    #[must_use]
    pub fn group_name(&self, gid: u32) -> NameLookup {
        if !self.enabled {
            return NameLookup::Unresolved;
        }
        match get_group_by_gid(gid) {
            Some(group) => NameLookup::Resolved(group.name().to_string_lossy().into_owned()),
            None => {
                debug!("no group entry for gid {gid}");
                NameLookup::Unresolved
            }
        }
    }
}
