//! Handler für Anlegen, Ändern und Entfernen von Hierarchie-Entities.

use crate::app::use_cases;
use crate::app::AppState;
use crate::core::{CabinetParameters, EntityId, PanelSpec};

/// Legt das Start-Projekt an.
pub fn bootstrap(state: &mut AppState) {
    if use_cases::editing::bootstrap(state).is_none() {
        log::warn!("Start-Projekt konnte nicht angelegt werden");
    }
}

/// Legt ein Projekt samt Etagen an.
pub fn create_project(state: &mut AppState, name: Option<String>, floor_names: Vec<String>) {
    use_cases::editing::create_project(state, name.as_deref(), &floor_names);
}

/// Legt eine Etage an.
pub fn create_floor(state: &mut AppState, project: Option<EntityId>, name: Option<String>) {
    use_cases::editing::create_floor(state, project.as_ref(), name.as_deref());
}

/// Legt einen leeren Schrank an.
pub fn create_cabinet(state: &mut AppState, floor: Option<EntityId>, name: Option<String>) {
    use_cases::editing::create_cabinet(state, floor.as_ref(), name.as_deref());
}

/// Erzeugt einen Schrank samt Platten aus Korpus-Maßen.
pub fn create_cabinet_from_dimensions(
    state: &mut AppState,
    floor: Option<EntityId>,
    name: Option<String>,
    parameters: CabinetParameters,
) {
    use_cases::editing::create_cabinet_from_dimensions(
        state,
        floor.as_ref(),
        name.as_deref(),
        parameters,
    );
}

/// Legt eine Platte an.
pub fn create_panel(state: &mut AppState, cabinet: Option<EntityId>, spec: PanelSpec) {
    use_cases::editing::create_panel(state, cabinet.as_ref(), spec);
}

/// Ersetzt Geometrie und Namen einer Platte.
pub fn update_panel(state: &mut AppState, panel: EntityId, spec: PanelSpec) {
    use_cases::editing::update_panel(state, &panel, spec);
}

/// Verschiebt eine Platte in einen anderen Schrank.
pub fn move_panel(state: &mut AppState, panel: EntityId, target: EntityId) {
    use_cases::editing::move_panel(state, &panel, &target);
}

/// Benennt eine Entity um.
pub fn rename(state: &mut AppState, id: EntityId, name: &str) {
    use_cases::editing::rename(state, &id, name);
}

/// Entfernt eine Entity samt Nachkommen.
pub fn remove(state: &mut AppState, id: EntityId) {
    use_cases::editing::remove_entity(state, &id);
}

/// Entfernt alle selektierten Platten.
pub fn delete_selected(state: &mut AppState) {
    use_cases::editing::delete_selected_panels(state);
}

/// Entfernt alles.
pub fn clear_all(state: &mut AppState) {
    use_cases::editing::clear_all(state);
}
