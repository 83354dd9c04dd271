//! Use-Case: Entities anlegen (Projekt, Etage, Schrank, Platte).

use crate::app::AppState;
use crate::core::{CabinetParameters, EntityId, PanelSpec};
use crate::template::{load_from_template, CabinetTemplate};

/// Legt das Start-Projekt an und macht es samt "Ground Floor" aktiv.
pub fn bootstrap(state: &mut AppState) -> Option<EntityId> {
    let project = state.store.bootstrap()?;
    activate_project(state, &project);
    Some(project)
}

/// Legt ein Projekt mit Etagen an und macht es aktiv.
pub fn create_project(
    state: &mut AppState,
    name: Option<&str>,
    floor_names: &[String],
) -> Option<EntityId> {
    let project = state.store.create_project(name, floor_names, None)?;
    activate_project(state, &project);
    Some(project)
}

fn activate_project(state: &mut AppState, project: &EntityId) {
    state.view.active_project = Some(project.clone());
    state.view.active_floor = state
        .store
        .project_floors(project)
        .first()
        .map(|f| f.id.clone());
    state.view.active_cabinet = None;
}

/// Legt eine Etage an und macht sie aktiv.
pub fn create_floor(
    state: &mut AppState,
    project: Option<&EntityId>,
    name: Option<&str>,
) -> Option<EntityId> {
    let floor = state.store.create_floor(project, name, None)?;
    state.view.active_floor = Some(floor.clone());
    Some(floor)
}

/// Legt einen leeren Schrank an und macht ihn aktiv.
pub fn create_cabinet(
    state: &mut AppState,
    floor: Option<&EntityId>,
    name: Option<&str>,
) -> Option<EntityId> {
    let cabinet = state.store.create_cabinet(floor, name, None)?;
    state.view.active_cabinet = Some(cabinet.clone());
    Some(cabinet)
}

/// Erzeugt einen Schrank samt Platten aus Korpus-Maßen.
///
/// Läuft über denselben Pfad wie ein einzelner Template-Eintrag.
pub fn create_cabinet_from_dimensions(
    state: &mut AppState,
    floor: Option<&EntityId>,
    name: Option<&str>,
    parameters: CabinetParameters,
) -> Option<EntityId> {
    let template = CabinetTemplate {
        id: None,
        name: name.map(str::to_string),
        width: parameters.width,
        height: parameters.height,
        depth: parameters.depth,
        thickness: parameters.thickness,
        options: parameters.options,
    };
    let mut report = load_from_template(&mut state.store, floor, vec![Ok(template)]);

    if let Some(skipped) = report.skipped.pop() {
        state.ui.status_message = Some(format!("Schrank nicht erzeugt: {}", skipped.error));
        return None;
    }
    let cabinet = report.created.pop()?;
    state.view.active_cabinet = Some(cabinet.clone());
    Some(cabinet)
}

/// Legt eine Platte an.
///
/// Ohne Schrank wird zuerst ein neuer Schrank auf der aktiven Etage angelegt.
pub fn create_panel(
    state: &mut AppState,
    cabinet: Option<&EntityId>,
    spec: PanelSpec,
) -> Option<EntityId> {
    let cabinet = match cabinet {
        Some(id) => id.clone(),
        None => {
            let floor = state
                .view
                .active_floor
                .clone()
                .filter(|id| state.store.floor(id).is_some());
            create_cabinet(state, floor.as_ref(), None)?
        }
    };
    let panel = state.store.create_panel(&cabinet, spec, None)?;
    state.view.active_cabinet = Some(cabinet);
    Some(panel)
}
