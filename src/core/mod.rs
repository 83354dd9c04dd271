//! Core-Domänentypen: IDs, Entities, HierarchyStore, Regelwerk, Geometrie-Adapter.

pub mod entity;
pub mod events;
pub mod geometry;
/// Besitzbaum Projekt → Etage → Schrank → Platte
///
/// Der Store hält:
/// - alle Entities mit geordneten Kinder-Listen
/// - Reverse-Indizes für O(1)-Elternauflösung
/// - die Visual-Handles (Projektion in den Geometrie-Adapter)
pub mod hierarchy;
pub mod id;
pub mod rules;
pub mod scene_graph;

pub use entity::{Cabinet, CabinetParameters, Floor, Panel, Project};
pub use events::StoreEvent;
pub use geometry::{GeometryAdapter, Highlight, ViewStyle, VisualHandle};
pub use hierarchy::{CabinetSlot, HierarchyStore, BOOTSTRAP_PROJECT, GROUND_FLOOR};
pub use id::{EntityId, EntityKind};
pub use rules::{derive_panels, BackType, ConstructionOptions, PanelSpec, TopStyle};
pub use scene_graph::{HighlightPalette, SceneGraph, SceneNode, SceneNodeKind};
