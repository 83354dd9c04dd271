//! Use-Case-Funktionen für Darstellung, Navigation und Optionen.

use crate::app::AppState;
use crate::core::{EntityId, ViewStyle};
use crate::shared::DesignerOptions;

/// Setzt die Darstellungsart aller Platten.
pub fn set_view_style(state: &mut AppState, style: ViewStyle) {
    let rebuilt = state.store.set_view_style(style);
    state.view.style = style;
    log::debug!("Darstellung {:?}: {} Platten neu aufgebaut", style, rebuilt);
}

/// Setzt den aktiven Schrank. Unbekannte IDs werden ignoriert.
pub fn set_active_cabinet(state: &mut AppState, cabinet: &EntityId) {
    if state.store.cabinet(cabinet).is_none() {
        log::warn!("Schrank {} existiert nicht", cabinet);
        return;
    }
    state.view.active_cabinet = Some(cabinet.clone());
    if let Some(floor) = state.store.owner_floor_of_cabinet(cabinet) {
        state.view.active_floor = Some(floor.clone());
    }
}

/// Setzt die aktive Etage. Unbekannte IDs werden ignoriert.
pub fn set_active_floor(state: &mut AppState, floor: &EntityId) {
    if state.store.floor(floor).is_none() {
        log::warn!("Etage {} existiert nicht", floor);
        return;
    }
    state.view.active_floor = Some(floor.clone());
    if let Some(project) = state.store.owner_project_of_floor(floor) {
        state.view.active_project = Some(project.clone());
    }
}

/// Übernimmt neue Optionen; eine geänderte Darstellungsart wird sofort angewendet.
pub fn apply_options(state: &mut AppState, options: DesignerOptions) {
    let style_changed = options.view_style != state.view.style;
    let style = options.view_style;
    state.options = options;
    if style_changed {
        set_view_style(state, style);
    }
}
