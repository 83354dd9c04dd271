use crate::app::CommandLog;
use crate::core::{GeometryAdapter, HierarchyStore, SceneGraph};
use crate::shared::DesignerOptions;

use super::{SelectionState, UiState, ViewState};

/// Hauptzustand der Anwendung
pub struct AppState {
    /// Besitzbaum aller Entities samt Visual-Handles
    pub store: HierarchyStore,
    /// View-State (Darstellungsart, aktive Entities)
    pub view: ViewState,
    /// UI-State
    pub ui: UiState,
    /// Selection-State
    pub selection: SelectionState,
    /// Verlauf ausgeführter Commands
    pub command_log: CommandLog,
    /// Laufzeit-Optionen (Standardmaße, Farben, Template-Verzeichnis)
    pub options: DesignerOptions,
}

impl AppState {
    /// Erstellt einen leeren App-State mit headless Szenengraph.
    pub fn new() -> Self {
        let options = DesignerOptions::default();
        let adapter = SceneGraph::with_palette(options.palette());
        Self::with_adapter(Box::new(adapter), options)
    }

    /// Erstellt einen leeren App-State über einem beliebigen Geometrie-Adapter.
    pub fn with_adapter(adapter: Box<dyn GeometryAdapter>, options: DesignerOptions) -> Self {
        Self {
            store: HierarchyStore::with_view_style(adapter, options.view_style),
            view: ViewState::new(options.view_style),
            ui: UiState::new(),
            selection: SelectionState::new(),
            command_log: CommandLog::new(),
            options,
        }
    }

    /// Gibt die Anzahl der Schränke zurück (für UI-Anzeige)
    pub fn cabinet_count(&self) -> usize {
        self.store.cabinet_count()
    }

    /// Gibt die Anzahl der Platten zurück (für UI-Anzeige)
    pub fn panel_count(&self) -> usize {
        self.store.panel_count()
    }

    /// Einzeln gewählte Platten in Auswahlreihenfolge
    pub fn selected_panel_ids(&self) -> Vec<crate::core::EntityId> {
        self.selection.selected.iter().cloned().collect()
    }

    /// Gruppen-gewählte Platten in Auswahlreihenfolge
    pub fn group_selected_panel_ids(&self) -> Vec<crate::core::EntityId> {
        self.selection.group_selected.iter().cloned().collect()
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
