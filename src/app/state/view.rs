use crate::core::{EntityId, ViewStyle};

/// View-bezogener Anwendungszustand
#[derive(Debug, Clone, Default)]
pub struct ViewState {
    /// Darstellungsart aller Platten
    pub style: ViewStyle,
    /// Aktives Projekt (Ziel für neue Etagen)
    pub active_project: Option<EntityId>,
    /// Aktive Etage (Ziel für neue Schränke und Templates)
    pub active_floor: Option<EntityId>,
    /// Aktiver Schrank (Ziel für neue Platten)
    pub active_cabinet: Option<EntityId>,
}

impl ViewState {
    /// Erstellt den Standard-View-Zustand.
    pub fn new(style: ViewStyle) -> Self {
        Self {
            style,
            ..Default::default()
        }
    }
}
