//! Schrank-Templates: Dokumentmodell, Parsing, Materialisierung, Export.
//!
//! Ein Template ist ein JSON-Dokument der Form
//! `{ "cabinets": [ { id?, name?, width, height, depth, thickness, options? } ] }`.
//! Einträge werden einzeln geparst, damit ein fehlerhafter Eintrag seine
//! Geschwister nicht blockiert.

mod materialize;
mod source;

pub use materialize::{export_template, load_from_template, SkippedEntry, TemplateLoadReport};
pub use source::{DirectorySource, TemplateSource};

use crate::core::{CabinetParameters, ConstructionOptions, EntityId};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Fehler beim Lesen, Prüfen oder Materialisieren eines Templates.
#[derive(Debug, thiserror::Error)]
pub enum TemplateError {
    #[error("Template enthält kein 'cabinets'-Array")]
    MissingCabinets,
    #[error("Template ist kein gültiges JSON: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("Eintrag {index} ist fehlerhaft: {message}")]
    Malformed { index: usize, message: String },
    #[error("Ungültige Maße für '{name}': {width} x {height} x {depth}, Stärke {thickness}")]
    InvalidDimensions {
        name: String,
        width: f32,
        height: f32,
        depth: f32,
        thickness: f32,
    },
    #[error("ID {0} ist bereits von einer anderen Entity belegt")]
    IdConflict(EntityId),
    #[error("Etage {0} existiert nicht")]
    UnknownFloor(EntityId),
    #[error("Platte '{panel}' von Schrank '{cabinet}' konnte nicht erzeugt werden")]
    Materialization { cabinet: String, panel: String },
    #[error("Template '{0}' nicht gefunden")]
    NotFound(String),
    #[error("Template-Datei {path:?} nicht lesbar: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Ein Schrank im Template.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CabinetTemplate {
    /// Optional; für idempotentes Neuladen (String oder Zahl)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<EntityId>,
    /// Optional; sonst Standardname "Cabinet <n>"
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    pub width: f32,
    pub height: f32,
    pub depth: f32,
    pub thickness: f32,
    #[serde(default)]
    pub options: ConstructionOptions,
}

impl CabinetTemplate {
    /// Korpus-Parameter dieses Eintrags.
    pub fn parameters(&self) -> CabinetParameters {
        CabinetParameters {
            width: self.width,
            height: self.height,
            depth: self.depth,
            thickness: self.thickness,
            options: self.options,
        }
    }

    /// Prüft die Maße; ungültig → `InvalidDimensions`.
    pub fn validate(&self) -> Result<CabinetParameters, TemplateError> {
        let parameters = self.parameters();
        if parameters.is_buildable() {
            Ok(parameters)
        } else {
            Err(TemplateError::InvalidDimensions {
                name: self.name.clone().unwrap_or_default(),
                width: self.width,
                height: self.height,
                depth: self.depth,
                thickness: self.thickness,
            })
        }
    }
}

/// Vollständiges Template-Dokument (Export-Form).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TemplateDocument {
    pub cabinets: Vec<CabinetTemplate>,
}

impl TemplateDocument {
    /// Serialisiert als eingerücktes JSON.
    pub fn to_json(&self) -> anyhow::Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

/// Ergebnis des Parsens eines einzelnen Eintrags.
pub type TemplateEntry = Result<CabinetTemplate, TemplateError>;

/// Parst ein Template-Dokument eintragsweise.
///
/// Fehlt das `cabinets`-Array, wird das Dokument als Ganzes abgelehnt.
/// Fehlerhafte Einträge bleiben als `Err` an ihrer Position erhalten.
pub fn parse_template_document(json: &str) -> Result<Vec<TemplateEntry>, TemplateError> {
    let document: serde_json::Value = serde_json::from_str(json)?;
    let Some(cabinets) = document.get("cabinets").and_then(|c| c.as_array()) else {
        return Err(TemplateError::MissingCabinets);
    };

    Ok(cabinets
        .iter()
        .enumerate()
        .map(|(index, entry)| {
            CabinetTemplate::deserialize(entry).map_err(|e| TemplateError::Malformed {
                index,
                message: e.to_string(),
            })
        })
        .collect())
}
