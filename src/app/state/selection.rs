use crate::core::{EntityId, Highlight};
use indexmap::IndexSet;

/// Auswahlbezogener Anwendungszustand
///
/// Eine Platte kann in beiden Mengen liegen; für die Farbe gewinnt
/// `group_selected`.
#[derive(Debug, Clone, Default)]
pub struct SelectionState {
    /// Explizit gewählte Platten (Einzel- und Gruppenauswahl)
    pub selected: IndexSet<EntityId>,
    /// Platten, die als Teil eines ganzen Schranks gewählt sind
    pub group_selected: IndexSet<EntityId>,
}

impl SelectionState {
    /// Erstellt einen leeren Selektionszustand.
    pub fn new() -> Self {
        Self::default()
    }

    /// Abgeleitete Hervorhebung einer Platte.
    pub fn highlight_of(&self, panel_id: &EntityId) -> Highlight {
        if self.group_selected.contains(panel_id) {
            Highlight::Group
        } else if self.selected.contains(panel_id) {
            Highlight::Single
        } else {
            Highlight::None
        }
    }

    /// Vereinigung beider Mengen (erst `selected`, dann nur-Gruppe).
    pub fn union(&self) -> Vec<EntityId> {
        self.selected
            .iter()
            .chain(self.group_selected.iter())
            .cloned()
            .collect::<IndexSet<_>>()
            .into_iter()
            .collect()
    }

    /// Ob die Platte in irgendeiner Menge liegt.
    pub fn contains(&self, panel_id: &EntityId) -> bool {
        self.selected.contains(panel_id) || self.group_selected.contains(panel_id)
    }

    /// Ob beide Mengen leer sind.
    pub fn is_empty(&self) -> bool {
        self.selected.is_empty() && self.group_selected.is_empty()
    }

    /// Leert beide Mengen (ohne Farbänderung).
    pub fn clear(&mut self) {
        self.selected.clear();
        self.group_selected.clear();
    }

    /// Behält nur Platten, für die `keep` zutrifft.
    pub fn retain(&mut self, mut keep: impl FnMut(&EntityId) -> bool) {
        self.selected.retain(|id| keep(id));
        self.group_selected.retain(|id| keep(id));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn group_membership_wins_for_highlight() {
        let mut selection = SelectionState::new();
        let a = EntityId::from("panel-1");
        let b = EntityId::from("panel-2");
        selection.selected.insert(a.clone());
        selection.selected.insert(b.clone());
        selection.group_selected.insert(b.clone());

        assert_eq!(selection.highlight_of(&a), Highlight::Single);
        assert_eq!(selection.highlight_of(&b), Highlight::Group);
        assert_eq!(selection.highlight_of(&EntityId::from("x")), Highlight::None);
    }

    #[test]
    fn union_is_ordered_and_deduplicated() {
        let mut selection = SelectionState::new();
        selection.selected.insert(EntityId::from("b"));
        selection.group_selected.insert(EntityId::from("a"));
        selection.group_selected.insert(EntityId::from("b"));

        assert_eq!(
            selection.union(),
            vec![EntityId::from("b"), EntityId::from("a")]
        );
    }
}
