//! Handler für Selektions-Operationen.

use crate::app::use_cases;
use crate::app::AppState;
use crate::core::EntityId;

/// Wählt alle Platten des Schranks der gepickten Platte.
pub fn select_cabinet_group(state: &mut AppState, panel: EntityId, additive: bool) {
    use_cases::selection::select_cabinet_group(state, &panel, additive);
}

/// Wählt nur die gepickte Platte.
pub fn select_single_panel(state: &mut AppState, panel: EntityId, additive: bool) {
    use_cases::selection::select_single_panel(state, &panel, additive);
}

/// Hebt die Selektion auf.
pub fn clear(state: &mut AppState) {
    use_cases::selection::clear_selection(state);
}
