//! Headless Geometrie-Adapter: hält den Handle-Baum als reinen Datenbaum.
//!
//! Wird vom Kommandozeilen-Frontend und von Tests benutzt, um die Projektion
//! des logischen Baums zu prüfen (Eltern, Beschriftung, Farbe, Freigaben).

use super::geometry::{GeometryAdapter, Highlight, ViewStyle, VisualHandle};
use super::rules::PanelSpec;
use std::collections::{HashMap, HashSet};

/// Farben der Plattendarstellung (RGB, 0xRRGGBB).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HighlightPalette {
    pub unselected: u32,
    pub single: u32,
    pub group: u32,
}

impl Default for HighlightPalette {
    fn default() -> Self {
        Self {
            unselected: 0xFFFFFF,
            single: 0x87CEFA,
            group: 0x90EE90,
        }
    }
}

impl HighlightPalette {
    /// Farbe für eine Hervorhebungsstufe.
    pub fn color_of(&self, highlight: Highlight) -> u32 {
        match highlight {
            Highlight::None => self.unselected,
            Highlight::Single => self.single,
            Highlight::Group => self.group,
        }
    }
}

/// Inhalt eines Knotens im Szenengraphen.
#[derive(Debug, Clone)]
pub enum SceneNodeKind {
    /// Szenenwurzel
    Root,
    /// Gruppe (Projekt, Etage, Schrank)
    Group,
    /// Plattendarstellung
    Panel {
        spec: PanelSpec,
        highlight: Highlight,
        style: ViewStyle,
        color: u32,
    },
}

/// Einzelner Knoten mit Beschriftung und Kanten.
#[derive(Debug, Clone)]
pub struct SceneNode {
    pub label: String,
    pub parent: Option<VisualHandle>,
    pub children: Vec<VisualHandle>,
    pub kind: SceneNodeKind,
}

/// In-Memory-Szenengraph als `GeometryAdapter`.
#[derive(Debug)]
pub struct SceneGraph {
    nodes: HashMap<VisualHandle, SceneNode>,
    disposed: HashSet<VisualHandle>,
    next_handle: u64,
    palette: HighlightPalette,
    double_disposals: usize,
    build_count: usize,
}

impl Default for SceneGraph {
    fn default() -> Self {
        Self::new()
    }
}

impl SceneGraph {
    const ROOT: VisualHandle = VisualHandle::from_raw(0);

    /// Erstellt einen Graphen, der nur die Wurzel enthält.
    pub fn new() -> Self {
        Self::with_palette(HighlightPalette::default())
    }

    /// Erstellt einen Graphen mit eigener Farbpalette.
    pub fn with_palette(palette: HighlightPalette) -> Self {
        let mut nodes = HashMap::new();
        nodes.insert(
            Self::ROOT,
            SceneNode {
                label: "Scene".to_string(),
                parent: None,
                children: Vec::new(),
                kind: SceneNodeKind::Root,
            },
        );
        Self {
            nodes,
            disposed: HashSet::new(),
            next_handle: 1,
            palette,
            double_disposals: 0,
            build_count: 0,
        }
    }

    fn allocate(&mut self, label: &str, kind: SceneNodeKind) -> VisualHandle {
        let handle = VisualHandle::from_raw(self.next_handle);
        self.next_handle += 1;
        self.nodes.insert(
            handle,
            SceneNode {
                label: label.to_string(),
                parent: None,
                children: Vec::new(),
                kind,
            },
        );
        handle
    }

    // === Inspektion ===

    /// Ob der Handle lebt (angelegt und nicht freigegeben).
    pub fn contains(&self, handle: VisualHandle) -> bool {
        self.nodes.contains_key(&handle)
    }

    /// Knoten per Handle
    pub fn node(&self, handle: VisualHandle) -> Option<&SceneNode> {
        self.nodes.get(&handle)
    }

    /// Elternteil eines lebenden Handles
    pub fn parent_of(&self, handle: VisualHandle) -> Option<VisualHandle> {
        self.nodes.get(&handle).and_then(|n| n.parent)
    }

    /// Kinder in Einhängereihenfolge (unbekannt → leer)
    pub fn children_of(&self, handle: VisualHandle) -> &[VisualHandle] {
        self.nodes
            .get(&handle)
            .map(|n| n.children.as_slice())
            .unwrap_or(&[])
    }

    /// Beschriftung eines Handles
    pub fn label_of(&self, handle: VisualHandle) -> Option<&str> {
        self.nodes.get(&handle).map(|n| n.label.as_str())
    }

    /// Hervorhebung einer Plattendarstellung
    pub fn highlight_of(&self, handle: VisualHandle) -> Option<Highlight> {
        match self.nodes.get(&handle).map(|n| &n.kind) {
            Some(SceneNodeKind::Panel { highlight, .. }) => Some(*highlight),
            _ => None,
        }
    }

    /// Farbe einer Plattendarstellung
    pub fn color_of(&self, handle: VisualHandle) -> Option<u32> {
        match self.nodes.get(&handle).map(|n| &n.kind) {
            Some(SceneNodeKind::Panel { color, .. }) => Some(*color),
            _ => None,
        }
    }

    /// Darstellungsart einer Plattendarstellung
    pub fn style_of(&self, handle: VisualHandle) -> Option<ViewStyle> {
        match self.nodes.get(&handle).map(|n| &n.kind) {
            Some(SceneNodeKind::Panel { style, .. }) => Some(*style),
            _ => None,
        }
    }

    /// Ob der Handle bereits freigegeben wurde
    pub fn is_disposed(&self, handle: VisualHandle) -> bool {
        self.disposed.contains(&handle)
    }

    /// Anzahl lebender Handles ohne Wurzel
    pub fn live_count(&self) -> usize {
        self.nodes.len() - 1
    }

    /// Anzahl doppelter Freigaben (sollte immer 0 sein)
    pub fn double_disposals(&self) -> usize {
        self.double_disposals
    }

    /// Anzahl gebauter Plattendarstellungen seit Start
    pub fn build_count(&self) -> usize {
        self.build_count
    }

    /// Anzahl Knoten im Teilbaum unter `handle` (ohne `handle` selbst).
    pub fn descendant_count(&self, handle: VisualHandle) -> usize {
        self.children_of(handle)
            .iter()
            .map(|child| 1 + self.descendant_count(*child))
            .sum()
    }

    /// Schreibt den Baum eingerückt als Text (für das Kommandozeilen-Frontend).
    pub fn render_outline(&self) -> String {
        let mut out = String::new();
        self.outline_into(Self::ROOT, 0, &mut out);
        out
    }

    fn outline_into(&self, handle: VisualHandle, depth: usize, out: &mut String) {
        let Some(node) = self.nodes.get(&handle) else {
            return;
        };
        let indent = "  ".repeat(depth);
        match &node.kind {
            SceneNodeKind::Panel { spec, color, .. } => out.push_str(&format!(
                "{indent}{} [{:.0} x {:.0} x {:.0}] #{color:06X}\n",
                node.label, spec.length, spec.width, spec.thickness
            )),
            _ => out.push_str(&format!("{indent}{}\n", node.label)),
        }
        for child in &node.children {
            self.outline_into(*child, depth + 1, out);
        }
    }

    fn unlink(&mut self, handle: VisualHandle) {
        let Some(parent) = self.nodes.get_mut(&handle).and_then(|n| n.parent.take()) else {
            return;
        };
        if let Some(p) = self.nodes.get_mut(&parent) {
            p.children.retain(|c| *c != handle);
        }
    }
}

impl GeometryAdapter for SceneGraph {
    fn scene_root(&self) -> VisualHandle {
        Self::ROOT
    }

    fn create_visual_group(&mut self, name: &str) -> VisualHandle {
        self.allocate(name, SceneNodeKind::Group)
    }

    fn attach_child(&mut self, parent: VisualHandle, child: VisualHandle) {
        if !self.nodes.contains_key(&parent) || !self.nodes.contains_key(&child) {
            log::warn!("attach_child mit unbekanntem Handle: {:?} -> {:?}", parent, child);
            return;
        }
        self.unlink(child);
        if let Some(node) = self.nodes.get_mut(&child) {
            node.parent = Some(parent);
        }
        if let Some(p) = self.nodes.get_mut(&parent) {
            p.children.push(child);
        }
    }

    fn detach_child(&mut self, handle: VisualHandle) {
        self.unlink(handle);
    }

    fn build_panel_representation(
        &mut self,
        spec: &PanelSpec,
        highlight: Highlight,
        style: ViewStyle,
    ) -> anyhow::Result<VisualHandle> {
        let dims = [spec.length, spec.width, spec.thickness];
        if dims.iter().any(|v| !v.is_finite() || *v <= 0.0) {
            anyhow::bail!(
                "Ungültige Plattenmaße für '{}': {:?}",
                spec.name,
                dims
            );
        }
        self.build_count += 1;
        let color = self.palette.color_of(highlight);
        Ok(self.allocate(
            &spec.name,
            SceneNodeKind::Panel {
                spec: spec.clone(),
                highlight,
                style,
                color,
            },
        ))
    }

    fn set_highlight(&mut self, handle: VisualHandle, highlight: Highlight) {
        let color = self.palette.color_of(highlight);
        if let Some(SceneNodeKind::Panel {
            highlight: current,
            color: current_color,
            ..
        }) = self.nodes.get_mut(&handle).map(|n| &mut n.kind)
        {
            *current = highlight;
            *current_color = color;
        }
    }

    fn set_label(&mut self, handle: VisualHandle, label: &str) {
        if let Some(node) = self.nodes.get_mut(&handle) {
            node.label = label.to_string();
        }
    }

    fn dispose_representation(&mut self, handle: VisualHandle) {
        if handle == Self::ROOT {
            log::warn!("Szenenwurzel kann nicht freigegeben werden");
            return;
        }
        if !self.disposed.insert(handle) {
            self.double_disposals += 1;
            log::warn!("Handle {:?} doppelt freigegeben", handle);
            return;
        }
        let Some(node) = self.nodes.get(&handle) else {
            return;
        };
        if node.parent.is_some() {
            log::warn!("Handle {:?} wird noch angehängt freigegeben", handle);
            self.unlink(handle);
        }
        // Kinder werden vom Besitzer einzeln freigegeben, hier nur entkoppelt
        let children = self
            .nodes
            .remove(&handle)
            .map(|n| n.children)
            .unwrap_or_default();
        for child in children {
            if let Some(c) = self.nodes.get_mut(&child) {
                c.parent = None;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn spec(name: &str) -> PanelSpec {
        PanelSpec::new(name, 100.0, 50.0, 18.0)
    }

    #[test]
    fn attach_moves_child_between_parents() {
        let mut graph = SceneGraph::new();
        let a = graph.create_visual_group("A");
        let b = graph.create_visual_group("B");
        let panel = graph
            .build_panel_representation(&spec("P"), Highlight::None, ViewStyle::Wireframe)
            .expect("Platte sollte gebaut werden");

        graph.attach_child(a, panel);
        graph.attach_child(b, panel);

        assert_eq!(graph.parent_of(panel), Some(b));
        assert!(graph.children_of(a).is_empty());
        assert_eq!(graph.children_of(b), &[panel]);
    }

    #[test]
    fn highlight_recolors_panel() {
        let mut graph = SceneGraph::new();
        let panel = graph
            .build_panel_representation(&spec("P"), Highlight::None, ViewStyle::Solid)
            .expect("Platte sollte gebaut werden");
        assert_eq!(graph.color_of(panel), Some(0xFFFFFF));

        graph.set_highlight(panel, Highlight::Group);
        assert_eq!(graph.color_of(panel), Some(0x90EE90));
        graph.set_highlight(panel, Highlight::Single);
        assert_eq!(graph.color_of(panel), Some(0x87CEFA));
    }

    #[test]
    fn double_dispose_is_counted() {
        let mut graph = SceneGraph::new();
        let group = graph.create_visual_group("G");
        graph.dispose_representation(group);
        graph.dispose_representation(group);

        assert!(graph.is_disposed(group));
        assert!(!graph.contains(group));
        assert_eq!(graph.double_disposals(), 1);
    }

    #[test]
    fn rejects_degenerate_panels() {
        let mut graph = SceneGraph::new();
        let result = graph.build_panel_representation(
            &PanelSpec::new("Flat", 0.0, 50.0, 18.0),
            Highlight::None,
            ViewStyle::Wireframe,
        );
        assert!(result.is_err());
        assert_eq!(graph.live_count(), 0);
    }
}
