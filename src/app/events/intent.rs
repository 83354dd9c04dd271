use crate::core::{CabinetParameters, EntityId, PanelSpec, ViewStyle};
use crate::shared::DesignerOptions;

/// Modifier-Tasten eines Picks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PickModifiers {
    pub shift: bool,
    pub ctrl: bool,
}

impl PickModifiers {
    /// Ohne Modifier
    pub const NONE: Self = Self {
        shift: false,
        ctrl: false,
    };
    /// Nur Shift
    pub const SHIFT: Self = Self {
        shift: true,
        ctrl: false,
    };
    /// Nur Ctrl
    pub const CTRL: Self = Self {
        shift: false,
        ctrl: true,
    };
    /// Shift + Ctrl
    pub const SHIFT_CTRL: Self = Self {
        shift: true,
        ctrl: true,
    };
}

/// App-Intent und App-Command Events.
/// Intents sind Eingaben aus UI/System ohne direkte Mutationslogik.
#[derive(Debug, Clone)]
pub enum AppIntent {
    // === Hierarchie ===
    /// Start-Projekt anlegen ("New Project" mit "Ground Floor")
    BootstrapRequested,
    /// Neues Projekt mit Etagen (leer → "Ground Floor")
    NewProjectRequested {
        name: Option<String>,
        floor_names: Vec<String>,
    },
    /// Etage hinzufügen (None → aktives Projekt)
    AddFloorRequested {
        project: Option<EntityId>,
        name: Option<String>,
    },
    /// Leeren Schrank anlegen (None → aktive Etage)
    NewCabinetRequested {
        floor: Option<EntityId>,
        name: Option<String>,
    },
    /// Schrank aus Maßen erzeugen (None → Standardmaße aus den Optionen)
    CabinetFormSubmitted {
        name: Option<String>,
        dimensions: Option<CabinetParameters>,
    },
    /// Platte anlegen (None → aktiver Schrank, sonst neuer Schrank)
    NewPanelRequested {
        cabinet: Option<EntityId>,
        spec: PanelSpec,
    },
    /// Platten-Formular übernommen
    PanelFormSubmitted { panel: EntityId, spec: PanelSpec },
    /// Platte in anderen Schrank verschieben
    MovePanelRequested { panel: EntityId, target: EntityId },
    /// Entity umbenennen
    RenameRequested { id: EntityId, name: String },
    /// Entity entfernen (kaskadierend)
    DeleteRequested { id: EntityId },
    /// Alle selektierten Platten entfernen
    DeleteSelectedRequested,
    /// Alles entfernen
    ClearAllRequested,

    // === Navigation ===
    /// Schrank in der Navigationsliste gewählt
    CabinetChosen { cabinet: EntityId },
    /// Etage in der Navigationsliste gewählt
    FloorChosen { floor: EntityId },

    // === Selektion ===
    /// Pick im 3D-View (None = Klick ins Leere)
    PanelPicked {
        panel: Option<EntityId>,
        modifiers: PickModifiers,
    },
    /// Selektion aufheben
    ClearSelectionRequested,

    // === View ===
    /// Darstellungsart setzen
    ViewStyleRequested { style: ViewStyle },
    /// Zwischen Kantenmodell und Volumen wechseln
    ToggleViewStyleRequested,

    // === Templates ===
    /// Template-Rohtext wurde geholt
    TemplateLoaded { name: String, json: String },
    /// Template konnte nicht geholt werden
    TemplateFetchFailed { name: String, message: String },
    /// Aktuelle Schränke als Template exportieren
    ExportTemplateRequested { path: String },

    // === Optionen ===
    /// Optionen geändert
    OptionsChanged { options: Box<DesignerOptions> },
}
