//! Handler für Darstellung, Navigation und Optionen.

use crate::app::use_cases;
use crate::app::AppState;
use crate::core::{EntityId, ViewStyle};
use crate::shared::DesignerOptions;

/// Setzt die Darstellungsart.
pub fn set_view_style(state: &mut AppState, style: ViewStyle) {
    use_cases::view::set_view_style(state, style);
}

/// Setzt den aktiven Schrank.
pub fn set_active_cabinet(state: &mut AppState, cabinet: EntityId) {
    use_cases::view::set_active_cabinet(state, &cabinet);
}

/// Setzt die aktive Etage.
pub fn set_active_floor(state: &mut AppState, floor: EntityId) {
    use_cases::view::set_active_floor(state, &floor);
}

/// Übernimmt neue Optionen.
pub fn apply_options(state: &mut AppState, options: DesignerOptions) {
    use_cases::view::apply_options(state, options);
}
