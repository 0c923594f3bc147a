//! Fixed identity registry.
//!
//! The registry associates canonical tag UIDs with participant identities.
//! It is populated once at startup from configuration entries and never
//! mutated afterwards; lookups are infallible and yield either a known
//! identity or an `Unknown` marker.

use gatepass_core::{Error, Result, TagUid};
use gatepass_hardware::LedColor;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Immutable registry entry for one registered tag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TagIdentity {
    /// Canonical tag identifier.
    pub uid: TagUid,

    /// Participant display name, as published in the event record.
    pub display_name: String,

    /// Indicator color shown on granted scans for this identity.
    pub color: LedColor,
}

/// Serde-facing configuration shape for one registry entry.
///
/// # Examples
///
/// ```
/// let entry: gatepass_access::RegistryEntry = toml::from_str(
///     r#"
///     uid = "35 F2 B3 02"
///     name = "Alice Example"
///     color = [0, 255, 0]
///     "#,
/// )
/// .unwrap();
/// assert_eq!(entry.name, "Alice Example");
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegistryEntry {
    /// Tag UID in any accepted textual form (case-insensitive).
    pub uid: String,

    /// Participant display name.
    pub name: String,

    /// Indicator color as an RGB triple.
    pub color: [u8; 3],
}

impl TryFrom<RegistryEntry> for TagIdentity {
    type Error = Error;

    fn try_from(entry: RegistryEntry) -> Result<Self> {
        Ok(TagIdentity {
            uid: entry.uid.parse()?,
            display_name: entry.name,
            color: entry.color.into(),
        })
    }
}

/// Result of resolving a scanned UID against the registry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resolution<'a> {
    /// The UID belongs to a registered identity.
    Known(&'a TagIdentity),

    /// The UID is not in the registry.
    Unknown,
}

impl Resolution<'_> {
    /// Returns `true` if the UID resolved to a registered identity.
    pub fn is_known(&self) -> bool {
        matches!(self, Resolution::Known(_))
    }
}

/// Fixed mapping from canonical tag UID to identity.
///
/// Built once from configuration; the set of identities never changes at
/// runtime.
#[derive(Debug, Clone, Default)]
pub struct IdentityRegistry {
    by_uid: HashMap<TagUid, TagIdentity>,
}

impl IdentityRegistry {
    /// Build a registry from configuration entries.
    ///
    /// # Errors
    /// Returns `Error::Config` if two entries share a UID, or
    /// `Error::InvalidTagFormat` if an entry's UID does not parse.
    pub fn from_entries(entries: Vec<RegistryEntry>) -> Result<Self> {
        let mut by_uid = HashMap::with_capacity(entries.len());

        for entry in entries {
            let identity: TagIdentity = entry.try_into()?;
            if let Some(previous) = by_uid.insert(identity.uid.clone(), identity) {
                return Err(Error::Config(format!(
                    "Duplicate registry entry for tag {}",
                    previous.uid
                )));
            }
        }

        Ok(Self { by_uid })
    }

    /// Resolve a scanned UID.
    ///
    /// Never fails: every UID is either known or unknown.
    pub fn resolve(&self, uid: &TagUid) -> Resolution<'_> {
        match self.by_uid.get(uid) {
            Some(identity) => Resolution::Known(identity),
            None => Resolution::Unknown,
        }
    }

    /// Iterate over all registered identities.
    pub fn identities(&self) -> impl Iterator<Item = &TagIdentity> {
        self.by_uid.values()
    }

    /// Number of registered identities.
    pub fn len(&self) -> usize {
        self.by_uid.len()
    }

    /// Returns `true` if the registry has no entries.
    pub fn is_empty(&self) -> bool {
        self.by_uid.is_empty()
    }
}
