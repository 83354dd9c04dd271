//! Application Controller für zentrale Event-Verarbeitung.
//!
//! Alle Mutationen des `HierarchyStore` laufen nacheinander über diesen
//! Controller; externe Abrufe (Templates) gelangen nur als Intent hinein.

use super::{AppCommand, AppIntent, AppState};

/// Orchestriert UI-Events und Use-Cases auf den AppState.
#[derive(Default)]
pub struct AppController;

impl AppController {
    /// Erstellt einen neuen Controller.
    pub fn new() -> Self {
        Self
    }

    /// Verarbeitet einen Intent über Intent->Command Mapping.
    pub fn handle_intent(&mut self, state: &mut AppState, intent: AppIntent) -> anyhow::Result<()> {
        let commands = self.map_intent_to_commands(state, intent);
        for command in commands {
            self.handle_command(state, command)?;
        }

        Ok(())
    }

    fn map_intent_to_commands(&self, state: &AppState, intent: AppIntent) -> Vec<AppCommand> {
        super::intent_mapping::map_intent_to_commands(state, intent)
    }

    /// Führt mutierende Commands auf dem AppState aus.
    /// Dispatcht an Feature-Handler in `handlers/`.
    pub fn handle_command(
        &mut self,
        state: &mut AppState,
        command: AppCommand,
    ) -> anyhow::Result<()> {
        let sequence = state.command_log.record(command.clone());
        log::debug!("Command #{}: {:?}", sequence, command);
        use super::handlers;

        match command {
            // === Hierarchie ===
            AppCommand::Bootstrap => handlers::hierarchy::bootstrap(state),
            AppCommand::CreateProject { name, floor_names } => {
                handlers::hierarchy::create_project(state, name, floor_names)
            }
            AppCommand::CreateFloor { project, name } => {
                handlers::hierarchy::create_floor(state, project, name)
            }
            AppCommand::CreateCabinet { floor, name } => {
                handlers::hierarchy::create_cabinet(state, floor, name)
            }
            AppCommand::CreateCabinetFromDimensions {
                floor,
                name,
                parameters,
            } => handlers::hierarchy::create_cabinet_from_dimensions(state, floor, name, parameters),
            AppCommand::CreatePanel { cabinet, spec } => {
                handlers::hierarchy::create_panel(state, cabinet, spec)
            }
            AppCommand::UpdatePanel { panel, spec } => {
                handlers::hierarchy::update_panel(state, panel, spec)
            }
            AppCommand::MovePanel { panel, target } => {
                handlers::hierarchy::move_panel(state, panel, target)
            }
            AppCommand::RenameEntity { id, name } => handlers::hierarchy::rename(state, id, &name),
            AppCommand::RemoveEntity { id } => handlers::hierarchy::remove(state, id),
            AppCommand::DeleteSelectedPanels => handlers::hierarchy::delete_selected(state),
            AppCommand::ClearAll => handlers::hierarchy::clear_all(state),

            // === Navigation ===
            AppCommand::SetActiveCabinet { cabinet } => {
                handlers::view::set_active_cabinet(state, cabinet)
            }
            AppCommand::SetActiveFloor { floor } => handlers::view::set_active_floor(state, floor),

            // === Selektion ===
            AppCommand::SelectCabinetGroup { panel, additive } => {
                handlers::selection::select_cabinet_group(state, panel, additive)
            }
            AppCommand::SelectSinglePanel { panel, additive } => {
                handlers::selection::select_single_panel(state, panel, additive)
            }
            AppCommand::ClearSelection => handlers::selection::clear(state),

            // === View ===
            AppCommand::SetViewStyle { style } => handlers::view::set_view_style(state, style),

            // === Templates ===
            AppCommand::ApplyTemplate { name, json } => {
                handlers::template::apply(state, &name, &json)?
            }
            AppCommand::ReportTemplateFailure { name, message } => {
                handlers::template::report_failure(state, &name, &message)
            }
            AppCommand::ExportTemplate { path } => handlers::template::export(state, &path)?,

            // === Optionen ===
            AppCommand::ApplyOptions { options } => handlers::view::apply_options(state, *options),
        }

        Ok(())
    }
}
