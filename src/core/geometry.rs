//! Schnittstelle zum Geometrie-Adapter (Visualisierung).
//!
//! Der Kern erzeugt, hängt um und entsorgt Visual-Handles ausschließlich über
//! diesen Trait. Die Handles sind opak; ihr Inhalt gehört dem Adapter.

use super::rules::PanelSpec;
use serde::{Deserialize, Serialize};
use std::cell::RefCell;
use std::rc::Rc;

/// Opake Referenz auf eine Darstellung im Adapter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct VisualHandle(u64);

impl VisualHandle {
    /// Nur für Adapter-Implementierungen: verpackt eine adapterinterne Nummer.
    pub const fn from_raw(raw: u64) -> Self {
        Self(raw)
    }

    /// Adapterinterne Nummer.
    pub fn raw(self) -> u64 {
        self.0
    }
}

/// Hervorhebung einer Platte.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Highlight {
    /// Nicht selektiert
    #[default]
    None,
    /// Einzeln selektiert (Einzel-/Mehrfachauswahl)
    Single,
    /// Als Teil eines ganzen Schranks selektiert
    Group,
}

impl Highlight {
    /// Ob die Platte überhaupt hervorgehoben ist.
    pub fn is_selected(self) -> bool {
        self != Highlight::None
    }
}

/// Globale Darstellungsart aller Platten.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ViewStyle {
    /// Kantenmodell mit transparenter Füllung
    #[default]
    Wireframe,
    /// Volumenkörper
    Solid,
}

/// Vom Kern konsumierte Operationen des Geometrie-Adapters.
pub trait GeometryAdapter {
    /// Wurzel-Handle der Szene (Eltern aller eigenständigen Entities).
    fn scene_root(&self) -> VisualHandle;

    /// Erstellt eine leere, benannte Gruppe (Projekt, Etage, Schrank).
    fn create_visual_group(&mut self, name: &str) -> VisualHandle;

    /// Hängt `child` unter `parent`. Ein bereits angehängtes Kind wird umgehängt.
    fn attach_child(&mut self, parent: VisualHandle, child: VisualHandle);

    /// Löst `handle` von seinem Elternteil.
    fn detach_child(&mut self, handle: VisualHandle);

    /// Baut die Darstellung einer Platte im gegebenen Stil.
    fn build_panel_representation(
        &mut self,
        spec: &PanelSpec,
        highlight: Highlight,
        style: ViewStyle,
    ) -> anyhow::Result<VisualHandle>;

    /// Färbt eine bestehende Plattendarstellung um.
    fn set_highlight(&mut self, handle: VisualHandle, highlight: Highlight);

    /// Aktualisiert die Beschriftung eines Handles.
    fn set_label(&mut self, handle: VisualHandle, label: &str);

    /// Gibt die Ressourcen eines Handles frei. Genau einmal pro Handle.
    fn dispose_representation(&mut self, handle: VisualHandle);
}

/// Erlaubt dem Host, einen Adapter zu teilen und nachträglich zu inspizieren.
impl<A: GeometryAdapter> GeometryAdapter for Rc<RefCell<A>> {
    fn scene_root(&self) -> VisualHandle {
        self.borrow().scene_root()
    }

    fn create_visual_group(&mut self, name: &str) -> VisualHandle {
        self.borrow_mut().create_visual_group(name)
    }

    fn attach_child(&mut self, parent: VisualHandle, child: VisualHandle) {
        self.borrow_mut().attach_child(parent, child);
    }

    fn detach_child(&mut self, handle: VisualHandle) {
        self.borrow_mut().detach_child(handle);
    }

    fn build_panel_representation(
        &mut self,
        spec: &PanelSpec,
        highlight: Highlight,
        style: ViewStyle,
    ) -> anyhow::Result<VisualHandle> {
        self.borrow_mut()
            .build_panel_representation(spec, highlight, style)
    }

    fn set_highlight(&mut self, handle: VisualHandle, highlight: Highlight) {
        self.borrow_mut().set_highlight(handle, highlight);
    }

    fn set_label(&mut self, handle: VisualHandle, label: &str) {
        self.borrow_mut().set_label(handle, label);
    }

    fn dispose_representation(&mut self, handle: VisualHandle) {
        self.borrow_mut().dispose_representation(handle);
    }
}
