//! Use-Case: Platten-Selektion per Pick (Einzel-, Mehrfach-, Gruppenauswahl).

use super::helpers::sync_highlights;
use crate::app::AppState;
use crate::core::EntityId;

/// Wählt alle Platten des Schranks, dem `panel_id` gehört.
///
/// Nicht additiv wird die bisherige Selektion vorher aufgehoben. Die Platten
/// landen in beiden Mengen und werden in Gruppenfarbe dargestellt.
pub fn select_cabinet_group(state: &mut AppState, panel_id: &EntityId, additive: bool) {
    let Some(cabinet_id) = state.store.owner_cabinet_of_panel(panel_id).cloned() else {
        log::warn!("Pick auf unbekannte Platte {} ignoriert", panel_id);
        return;
    };
    let members: Vec<EntityId> = state
        .store
        .cabinet(&cabinet_id)
        .map(|c| c.panels.clone())
        .unwrap_or_default();

    let mut touched = Vec::with_capacity(members.len());
    if !additive {
        touched.extend(state.selection.union());
        state.selection.clear();
    }
    for member in members {
        state.selection.selected.insert(member.clone());
        state.selection.group_selected.insert(member.clone());
        touched.push(member);
    }
    state.view.active_cabinet = Some(cabinet_id);

    sync_highlights(state, &touched);
}

/// Wählt nur `panel_id` (Einzelfarbe, sofern nicht zugleich gruppen-gewählt).
pub fn select_single_panel(state: &mut AppState, panel_id: &EntityId, additive: bool) {
    if state.store.panel(panel_id).is_none() {
        log::warn!("Pick auf unbekannte Platte {} ignoriert", panel_id);
        return;
    }

    let mut touched = Vec::new();
    if !additive {
        touched.extend(state.selection.union());
        state.selection.clear();
    }
    state.selection.selected.insert(panel_id.clone());
    touched.push(panel_id.clone());

    sync_highlights(state, &touched);
}
