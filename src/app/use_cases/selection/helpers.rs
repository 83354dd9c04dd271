//! Gemeinsame Hilfsfunktionen für Selektionslogik.

use crate::app::AppState;
use crate::core::{EntityId, Highlight};

/// Überträgt die abgeleitete Hervorhebung der berührten Platten in den Store.
pub(super) fn sync_highlights(state: &mut AppState, touched: &[EntityId]) {
    for panel_id in touched {
        let highlight = state.selection.highlight_of(panel_id);
        state.store.set_panel_highlight(panel_id, highlight);
    }
}

/// Hebt die Selektion auf und stellt die ungewählte Darstellung wieder her.
///
/// Idempotent: bei leerer Selektion passiert nichts.
pub fn clear_selection(state: &mut AppState) {
    let touched = state.selection.union();
    if touched.is_empty() {
        return;
    }
    for panel_id in &touched {
        state.store.set_panel_highlight(panel_id, Highlight::None);
    }
    state.selection.clear();
    log::debug!("Selektion aufgehoben ({} Platten)", touched.len());
}

/// Entfernt IDs nicht mehr existierender Platten aus beiden Mengen.
pub fn purge_removed(state: &mut AppState) {
    let store = &state.store;
    state.selection.retain(|id| store.panel(id).is_some());
}
