//! Entity-IDs mit kanonischer String-Form.

use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

/// Art einer Entity in der Hierarchie Projekt → Etage → Schrank → Platte.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntityKind {
    /// Projekt (Wurzel der Hierarchie)
    Project,
    /// Etage innerhalb eines Projekts
    Floor,
    /// Schrank (Korpus) auf einer Etage
    Cabinet,
    /// Einzelne Platte eines Schranks
    Panel,
}

impl EntityKind {
    /// Präfix für generierte IDs dieser Art.
    pub fn id_prefix(self) -> &'static str {
        match self {
            EntityKind::Project => "proj",
            EntityKind::Floor => "floor",
            EntityKind::Cabinet => "cab",
            EntityKind::Panel => "panel",
        }
    }
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            EntityKind::Project => "Project",
            EntityKind::Floor => "Floor",
            EntityKind::Cabinet => "Cabinet",
            EntityKind::Panel => "Panel",
        };
        f.write_str(label)
    }
}

/// Global eindeutige, unveränderliche Entity-ID.
///
/// Die kanonische Form ist der getrimmte String. IDs aus Templates dürfen
/// Zahlen oder Strings sein; `7` und `"7"` ergeben dieselbe ID.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct EntityId(String);

impl EntityId {
    /// Erstellt eine ID in kanonischer Form.
    pub fn new(raw: impl AsRef<str>) -> Self {
        Self(raw.as_ref().trim().to_string())
    }

    /// Baut eine generierte ID aus Art und laufender Nummer.
    pub(crate) fn generated(kind: EntityKind, counter: u64) -> Self {
        Self(format!("{}-{}", kind.id_prefix(), counter))
    }

    /// Kanonische String-Form.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Leere IDs sind ungültig (z.B. `"  "` aus einem Template).
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for EntityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for EntityId {
    fn from(raw: &str) -> Self {
        Self::new(raw)
    }
}

impl From<String> for EntityId {
    fn from(raw: String) -> Self {
        Self::new(raw)
    }
}

impl From<&String> for EntityId {
    fn from(raw: &String) -> Self {
        Self::new(raw)
    }
}

impl From<u64> for EntityId {
    fn from(raw: u64) -> Self {
        Self(raw.to_string())
    }
}

impl<'de> Deserialize<'de> for EntityId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum RawId {
            Text(String),
            Unsigned(u64),
            Signed(i64),
        }

        Ok(match RawId::deserialize(deserializer)? {
            RawId::Text(text) => EntityId::new(text),
            RawId::Unsigned(n) => EntityId::from(n),
            RawId::Signed(n) => EntityId(n.to_string()),
        })
    }
}
