//! Entities der Hierarchie: Projekt, Etage, Schrank, Platte.
//!
//! Die Entities halten nur Kinder-Listen (geordnet). Eltern-Beziehungen werden
//! ausschließlich über die Reverse-Indizes im `HierarchyStore` aufgelöst.

use super::geometry::{Highlight, VisualHandle};
use super::id::EntityId;
use super::rules::{ConstructionOptions, PanelSpec};
use serde::{Deserialize, Serialize};

/// Projekt mit geordneten Etagen
#[derive(Debug, Clone)]
pub struct Project {
    pub id: EntityId,
    pub name: String,
    /// Etagen in Anlagereihenfolge
    pub floors: Vec<EntityId>,
    pub handle: VisualHandle,
}

/// Etage mit geordneten Schränken
#[derive(Debug, Clone)]
pub struct Floor {
    pub id: EntityId,
    pub name: String,
    /// Schränke in Anlagereihenfolge
    pub cabinets: Vec<EntityId>,
    pub handle: VisualHandle,
}

/// Korpus-Parameter, aus denen ein Schrank per Regelwerk erzeugt wurde.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CabinetParameters {
    pub width: f32,
    pub height: f32,
    pub depth: f32,
    pub thickness: f32,
    #[serde(default)]
    pub options: ConstructionOptions,
}

impl CabinetParameters {
    /// Prüft die Maße: endlich, positiv und Stärke < halbes Minimalmaß.
    pub fn is_buildable(&self) -> bool {
        let dims = [self.width, self.height, self.depth, self.thickness];
        if dims.iter().any(|v| !v.is_finite() || *v <= 0.0) {
            return false;
        }
        let min_dim = self.width.min(self.height).min(self.depth);
        self.thickness < min_dim / 2.0
    }
}

/// Schrank mit geordneten Platten
#[derive(Debug, Clone)]
pub struct Cabinet {
    pub id: EntityId,
    pub name: String,
    /// Platten in Anlagereihenfolge
    pub panels: Vec<EntityId>,
    pub handle: VisualHandle,
    /// Gesetzt, wenn der Schrank aus Maßen abgeleitet wurde (Template-Export)
    pub parameters: Option<CabinetParameters>,
}

/// Einzelne Platte
#[derive(Debug, Clone)]
pub struct Panel {
    pub id: EntityId,
    /// Name, Maße, Position und Rotation
    pub spec: PanelSpec,
    pub handle: VisualHandle,
    /// Zuletzt beim Adapter angeforderte Hervorhebung
    pub highlight: Highlight,
}

impl Panel {
    /// Anzeigename der Platte.
    pub fn name(&self) -> &str {
        &self.spec.name
    }
}
