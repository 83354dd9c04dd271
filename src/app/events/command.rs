use crate::core::{CabinetParameters, EntityId, PanelSpec, ViewStyle};
use crate::shared::DesignerOptions;

/// Commands sind mutierende Schritte, die zentral ausgeführt werden.
#[derive(Debug, Clone)]
pub enum AppCommand {
    // === Hierarchie ===
    /// Start-Projekt anlegen
    Bootstrap,
    /// Projekt mit Etagen anlegen
    CreateProject {
        name: Option<String>,
        floor_names: Vec<String>,
    },
    /// Etage anlegen (eigenständig bei `project` = None)
    CreateFloor {
        project: Option<EntityId>,
        name: Option<String>,
    },
    /// Leeren Schrank anlegen (eigenständig bei `floor` = None)
    CreateCabinet {
        floor: Option<EntityId>,
        name: Option<String>,
    },
    /// Schrank aus Maßen per Regelwerk erzeugen
    CreateCabinetFromDimensions {
        floor: Option<EntityId>,
        name: Option<String>,
        parameters: CabinetParameters,
    },
    /// Platte anlegen (None → neuer Schrank auf der aktiven Etage)
    CreatePanel {
        cabinet: Option<EntityId>,
        spec: PanelSpec,
    },
    /// Geometrie und Namen einer Platte ersetzen
    UpdatePanel { panel: EntityId, spec: PanelSpec },
    /// Platte verschieben
    MovePanel { panel: EntityId, target: EntityId },
    /// Entity umbenennen
    RenameEntity { id: EntityId, name: String },
    /// Entity entfernen
    RemoveEntity { id: EntityId },
    /// Selektierte Platten entfernen
    DeleteSelectedPanels,
    /// Alles entfernen
    ClearAll,

    // === Navigation ===
    /// Aktiven Schrank setzen
    SetActiveCabinet { cabinet: EntityId },
    /// Aktive Etage setzen
    SetActiveFloor { floor: EntityId },

    // === Selektion ===
    /// Alle Platten des Schranks von `panel` wählen
    SelectCabinetGroup { panel: EntityId, additive: bool },
    /// Nur `panel` wählen
    SelectSinglePanel { panel: EntityId, additive: bool },
    /// Selektion aufheben
    ClearSelection,

    // === View ===
    /// Darstellungsart setzen
    SetViewStyle { style: ViewStyle },

    // === Templates ===
    /// Template-Rohtext parsen und materialisieren
    ApplyTemplate { name: String, json: String },
    /// Fehlgeschlagenen Template-Abruf melden
    ReportTemplateFailure { name: String, message: String },
    /// Template-Export in Datei schreiben
    ExportTemplate { path: String },

    // === Optionen ===
    /// Optionen übernehmen
    ApplyOptions { options: Box<DesignerOptions> },
}
