//! Benachrichtigungen des HierarchyStore für die Navigationsliste.

use super::id::{EntityId, EntityKind};

/// Strukturänderung im Store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreEvent {
    /// Entity angelegt (`parent` = None bei eigenständigen Entities)
    Created {
        kind: EntityKind,
        id: EntityId,
        name: String,
        parent: Option<EntityId>,
    },
    /// Entity entfernt
    Removed { kind: EntityKind, id: EntityId },
    /// Entity umbenannt
    Renamed {
        kind: EntityKind,
        id: EntityId,
        name: String,
    },
    /// Platte in anderen Schrank verschoben
    PanelMoved {
        id: EntityId,
        from: EntityId,
        to: EntityId,
    },
}

impl StoreEvent {
    /// ID der betroffenen Entity.
    pub fn entity_id(&self) -> &EntityId {
        match self {
            StoreEvent::Created { id, .. }
            | StoreEvent::Removed { id, .. }
            | StoreEvent::Renamed { id, .. }
            | StoreEvent::PanelMoved { id, .. } => id,
        }
    }
}
