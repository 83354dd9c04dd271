//! Use-Case: Entities entfernen und Selektion/aktive Referenzen bereinigen.

use crate::app::use_cases::selection::{clear_selection, purge_removed};
use crate::app::AppState;
use crate::core::EntityId;

/// Entfernt eine Entity kaskadierend.
pub fn remove_entity(state: &mut AppState, id: &EntityId) -> bool {
    let removed = state.store.remove(id);
    if removed {
        forget_removed(state);
    }
    removed
}

/// Entfernt alle Platten aus beiden Selektionsmengen.
///
/// Gibt die Anzahl entfernter Platten zurück.
pub fn delete_selected_panels(state: &mut AppState) -> usize {
    let targets = state.selection.union();
    if targets.is_empty() {
        log::debug!("Nichts zum Löschen selektiert");
        return 0;
    }
    let removed = targets
        .iter()
        .filter(|id| state.store.remove_panel(id))
        .count();
    forget_removed(state);
    log::info!("{} selektierte Platten entfernt", removed);
    removed
}

/// Entfernt alle Entities und setzt Selektion und aktive Referenzen zurück.
pub fn clear_all(state: &mut AppState) {
    clear_selection(state);
    state.store.clear_all();
    state.view.active_project = None;
    state.view.active_floor = None;
    state.view.active_cabinet = None;
}

/// Bereinigt Selektion und aktive Referenzen nach einer Entfernung.
fn forget_removed(state: &mut AppState) {
    purge_removed(state);
    let store = &state.store;
    let view = &mut state.view;
    if view
        .active_project
        .as_ref()
        .is_some_and(|id| store.project(id).is_none())
    {
        view.active_project = None;
    }
    if view
        .active_floor
        .as_ref()
        .is_some_and(|id| store.floor(id).is_none())
    {
        view.active_floor = None;
    }
    if view
        .active_cabinet
        .as_ref()
        .is_some_and(|id| store.cabinet(id).is_none())
    {
        view.active_cabinet = None;
    }
}
