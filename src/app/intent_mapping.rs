//! Mapping von UI-Intents auf mutierende App-Commands.

use super::events::PickModifiers;
use super::{AppCommand, AppIntent, AppState};
use crate::core::{CabinetParameters, EntityId, ViewStyle};

#[cfg(test)]
mod tests;

/// Übersetzt einen `AppIntent` in eine Sequenz ausführbarer `AppCommand`s.
pub fn map_intent_to_commands(state: &AppState, intent: AppIntent) -> Vec<AppCommand> {
    match intent {
        AppIntent::BootstrapRequested => vec![AppCommand::Bootstrap],
        AppIntent::NewProjectRequested { name, floor_names } => {
            vec![AppCommand::CreateProject { name, floor_names }]
        }
        AppIntent::AddFloorRequested { project, name } => vec![AppCommand::CreateFloor {
            project: project.or_else(|| active_project(state)),
            name,
        }],
        AppIntent::NewCabinetRequested { floor, name } => vec![AppCommand::CreateCabinet {
            floor: floor.or_else(|| active_floor(state)),
            name,
        }],
        AppIntent::CabinetFormSubmitted { name, dimensions } => {
            let parameters = dimensions.unwrap_or_else(|| default_parameters(state));
            vec![AppCommand::CreateCabinetFromDimensions {
                floor: active_floor(state),
                name,
                parameters,
            }]
        }
        AppIntent::NewPanelRequested { cabinet, spec } => vec![AppCommand::CreatePanel {
            cabinet: cabinet.or_else(|| active_cabinet(state)),
            spec,
        }],
        AppIntent::PanelFormSubmitted { panel, spec } => {
            vec![AppCommand::UpdatePanel { panel, spec }]
        }
        AppIntent::MovePanelRequested { panel, target } => {
            vec![AppCommand::MovePanel { panel, target }]
        }
        AppIntent::RenameRequested { id, name } => vec![AppCommand::RenameEntity { id, name }],
        AppIntent::DeleteRequested { id } => vec![AppCommand::RemoveEntity { id }],
        AppIntent::DeleteSelectedRequested => vec![AppCommand::DeleteSelectedPanels],
        AppIntent::ClearAllRequested => vec![AppCommand::ClearAll],

        AppIntent::CabinetChosen { cabinet } => {
            let first_panel = state
                .store
                .cabinet(&cabinet)
                .and_then(|c| c.panels.first().cloned());
            let mut commands = vec![AppCommand::SetActiveCabinet { cabinet }];
            match first_panel {
                Some(panel) => commands.push(AppCommand::SelectCabinetGroup {
                    panel,
                    additive: false,
                }),
                None => commands.push(AppCommand::ClearSelection),
            }
            commands
        }
        AppIntent::FloorChosen { floor } => vec![AppCommand::SetActiveFloor { floor }],

        AppIntent::PanelPicked { panel, modifiers } => map_pick(panel, modifiers),
        AppIntent::ClearSelectionRequested => vec![AppCommand::ClearSelection],

        AppIntent::ViewStyleRequested { style } => vec![AppCommand::SetViewStyle { style }],
        AppIntent::ToggleViewStyleRequested => {
            let style = match state.view.style {
                ViewStyle::Wireframe => ViewStyle::Solid,
                ViewStyle::Solid => ViewStyle::Wireframe,
            };
            vec![AppCommand::SetViewStyle { style }]
        }

        AppIntent::TemplateLoaded { name, json } => vec![AppCommand::ApplyTemplate { name, json }],
        AppIntent::TemplateFetchFailed { name, message } => {
            vec![AppCommand::ReportTemplateFailure { name, message }]
        }
        AppIntent::ExportTemplateRequested { path } => vec![AppCommand::ExportTemplate { path }],

        AppIntent::OptionsChanged { options } => vec![AppCommand::ApplyOptions { options }],
    }
}

/// Pick-Tabelle: Modifier bestimmen Modus und ob additiv gewählt wird.
fn map_pick(panel: Option<EntityId>, modifiers: PickModifiers) -> Vec<AppCommand> {
    let Some(panel) = panel else {
        return vec![AppCommand::ClearSelection];
    };
    let command = match (modifiers.shift, modifiers.ctrl) {
        (false, false) => AppCommand::SelectCabinetGroup {
            panel,
            additive: false,
        },
        (false, true) => AppCommand::SelectCabinetGroup {
            panel,
            additive: true,
        },
        (true, false) => AppCommand::SelectSinglePanel {
            panel,
            additive: false,
        },
        (true, true) => AppCommand::SelectSinglePanel {
            panel,
            additive: true,
        },
    };
    vec![command]
}

fn active_project(state: &AppState) -> Option<EntityId> {
    state
        .view
        .active_project
        .clone()
        .filter(|id| state.store.project(id).is_some())
}

fn active_floor(state: &AppState) -> Option<EntityId> {
    state
        .view
        .active_floor
        .clone()
        .filter(|id| state.store.floor(id).is_some())
}

fn active_cabinet(state: &AppState) -> Option<EntityId> {
    state
        .view
        .active_cabinet
        .clone()
        .filter(|id| state.store.cabinet(id).is_some())
}

fn default_parameters(state: &AppState) -> CabinetParameters {
    CabinetParameters {
        width: state.options.cabinet_width,
        height: state.options.cabinet_height,
        depth: state.options.cabinet_depth,
        thickness: state.options.panel_thickness,
        options: state.options.construction,
    }
}
