//! Strongly-typed identifiers used across the domain.

use core::str::FromStr;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::DomainError;

/// Catalog code of an inventory item (e.g. `SER-10ML`).
///
/// Ordering is plain byte-wise string ordering, which is what ordered lookups
/// over a code-sorted catalog rely on.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ItemCode(String);

impl ItemCode {
    /// Parse a code, rejecting blank input.
    pub fn parse(s: &str) -> Result<Self, DomainError> {
        s.parse()
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl FromStr for ItemCode {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim().is_empty() {
            return Err(DomainError::invalid_code("code cannot be empty"));
        }
        Ok(Self(s.to_string()))
    }
}

impl core::fmt::Display for ItemCode {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ItemCode {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl From<String> for ItemCode {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl AsRef<str> for ItemCode {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl PartialEq<str> for ItemCode {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for ItemCode {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

/// Identifier of a recorded event.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EventId(Uuid);

macro_rules! impl_uuid_newtype {
    ($t:ty, $name:literal) => {
        impl $t {
            /// Create a new identifier.
            ///
            /// Uses UUIDv7 (time-ordered). Prefer passing IDs explicitly in tests
            /// for determinism.
            pub fn new() -> Self {
                Self(Uuid::now_v7())
            }

            pub fn from_uuid(uuid: Uuid) -> Self {
                Self(uuid)
            }

            pub fn as_uuid(&self) -> &Uuid {
                &self.0
            }
        }

        impl Default for $t {
            fn default() -> Self {
                Self::new()
            }
        }

        impl core::fmt::Display for $t {
            fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
                core::fmt::Display::fmt(&self.0, f)
            }
        }

        impl From<Uuid> for $t {
            fn from(value: Uuid) -> Self {
                Self(value)
            }
        }

        impl FromStr for $t {
            type Err = DomainError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                let uuid = Uuid::from_str(s)
                    .map_err(|e| DomainError::validation(format!("{}: {}", $name, e)))?;
                Ok(Self(uuid))
            }
        }
    };
}

impl_uuid_newtype!(EventId, "EventId");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_codes_are_rejected() {
        assert!(matches!(ItemCode::parse(""), Err(DomainError::InvalidCode(_))));
        assert!(matches!(ItemCode::parse("   "), Err(DomainError::InvalidCode(_))));
        assert_eq!(ItemCode::parse("MAS-N95").unwrap(), "MAS-N95");
    }

    #[test]
    fn codes_order_lexicographically() {
        let mut codes: Vec<ItemCode> = ["SUT-NY-30", "ALC-70-1L", "LUV-CIR-M"]
            .into_iter()
            .map(ItemCode::from)
            .collect();
        codes.sort();
        assert_eq!(codes, vec!["ALC-70-1L", "LUV-CIR-M", "SUT-NY-30"]);
    }

    #[test]
    fn codes_serialize_as_plain_strings() {
        let json = serde_json::to_string(&ItemCode::from("GAZ-EST-100")).unwrap();
        assert_eq!(json, "\"GAZ-EST-100\"");
    }

    #[test]
    fn event_ids_round_trip_through_display() {
        let id = EventId::new();
        let parsed: EventId = id.to_string().parse().unwrap();
        assert_eq!(parsed, id);
        assert!("not-a-uuid".parse::<EventId>().is_err());
    }
}
