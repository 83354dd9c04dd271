//! Use-Case: bestehende Entities ändern (Platte aktualisieren, verschieben, umbenennen).

use crate::app::AppState;
use crate::core::{EntityId, PanelSpec};

/// Ersetzt Geometrie und Namen einer Platte; die Hervorhebung bleibt erhalten.
pub fn update_panel(state: &mut AppState, panel: &EntityId, spec: PanelSpec) -> bool {
    let updated = state.store.update_panel(panel, spec);
    if !updated {
        state.ui.status_message = Some(format!("Platte {} nicht aktualisiert", panel));
    }
    updated
}

/// Verschiebt eine Platte in einen anderen Schrank.
pub fn move_panel(state: &mut AppState, panel: &EntityId, target: &EntityId) -> bool {
    state.store.move_panel(panel, target)
}

/// Benennt eine Entity beliebiger Art um. Leere Namen werden abgelehnt.
pub fn rename(state: &mut AppState, id: &EntityId, name: &str) -> bool {
    let name = name.trim();
    if name.is_empty() {
        log::warn!("Umbenennen von {} mit leerem Namen abgelehnt", id);
        return false;
    }
    state.store.rename(id, name)
}
