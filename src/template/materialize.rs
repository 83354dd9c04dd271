//! Materialisierung von Templates in den HierarchyStore und Export zurück.

use super::{CabinetTemplate, TemplateDocument, TemplateEntry, TemplateError};
use crate::core::{derive_panels, CabinetParameters, EntityId, HierarchyStore};
use std::collections::HashSet;

/// Übersprungener Template-Eintrag.
#[derive(Debug)]
pub struct SkippedEntry {
    /// Position im Template
    pub index: usize,
    pub error: TemplateError,
}

/// Ergebnis von [`load_from_template`].
#[derive(Debug, Default)]
pub struct TemplateLoadReport {
    /// Erzeugte Schränke in Template-Reihenfolge
    pub created: Vec<EntityId>,
    /// Übersprungene Einträge mit Grund
    pub skipped: Vec<SkippedEntry>,
}

impl TemplateLoadReport {
    /// Ob alle Einträge materialisiert wurden.
    pub fn is_clean(&self) -> bool {
        self.skipped.is_empty()
    }
}

/// Materialisiert die Einträge eines Templates best-effort.
///
/// Jeder Eintrag wird unabhängig verarbeitet; ein Fehler entfernt nur den
/// eigenen, teilweise gebauten Schrank. Eine ID, die einen bestehenden Schrank
/// benennt, ersetzt diesen erst, nachdem der Ersatz vollständig gebaut ist
/// (idempotentes Neuladen). Dieselbe ID zweimal im Dokument ist ein Konflikt.
pub fn load_from_template(
    store: &mut HierarchyStore,
    floor: Option<&EntityId>,
    entries: Vec<TemplateEntry>,
) -> TemplateLoadReport {
    let mut report = TemplateLoadReport::default();
    let mut loaded: HashSet<EntityId> = HashSet::new();

    for (index, entry) in entries.into_iter().enumerate() {
        let result =
            entry.and_then(|template| materialize_cabinet(store, floor, &template, &loaded));
        match result {
            Ok(cabinet_id) => {
                loaded.insert(cabinet_id.clone());
                report.created.push(cabinet_id);
            }
            Err(error) => {
                log::warn!("Template-Eintrag {} übersprungen: {}", index, error);
                report.skipped.push(SkippedEntry { index, error });
            }
        }
    }

    log::info!(
        "Template geladen: {} Schränke erzeugt, {} übersprungen",
        report.created.len(),
        report.skipped.len()
    );
    report
}

fn materialize_cabinet(
    store: &mut HierarchyStore,
    floor: Option<&EntityId>,
    template: &CabinetTemplate,
    loaded: &HashSet<EntityId>,
) -> Result<EntityId, TemplateError> {
    let parameters = template.validate()?;

    if let Some(floor_id) = floor {
        if store.floor(floor_id).is_none() {
            return Err(TemplateError::UnknownFloor(floor_id.clone()));
        }
    }

    let name = template.name.as_deref();
    match template.id.clone().filter(|id| !id.is_empty()) {
        Some(id) if loaded.contains(&id) => Err(TemplateError::IdConflict(id)),
        Some(id) if store.cabinet(&id).is_some() => {
            replace_cabinet(store, floor, name, id, parameters)
        }
        Some(id) if store.contains(&id) => Err(TemplateError::IdConflict(id)),
        explicit_id => build_cabinet(store, floor, name, explicit_id, parameters),
    }
}

/// Legt einen Schrank an und leitet seine Platten ab.
///
/// Scheitert eine Platte, wird der Schrank wieder entfernt.
fn build_cabinet(
    store: &mut HierarchyStore,
    floor: Option<&EntityId>,
    name: Option<&str>,
    explicit_id: Option<EntityId>,
    parameters: CabinetParameters,
) -> Result<EntityId, TemplateError> {
    let cabinet_id = store
        .create_cabinet(floor, name, explicit_id)
        .ok_or_else(|| TemplateError::Materialization {
            cabinet: name.unwrap_or_default().to_string(),
            panel: String::new(),
        })?;
    store.set_cabinet_parameters(&cabinet_id, parameters);

    let panels = derive_panels(
        parameters.width,
        parameters.height,
        parameters.depth,
        parameters.thickness,
        &parameters.options,
    );
    for spec in panels {
        let panel_name = spec.name.clone();
        if store.create_panel(&cabinet_id, spec, None).is_none() {
            let cabinet_name = store
                .cabinet(&cabinet_id)
                .map(|c| c.name.clone())
                .unwrap_or_default();
            store.remove_cabinet(&cabinet_id);
            return Err(TemplateError::Materialization {
                cabinet: cabinet_name,
                panel: panel_name,
            });
        }
    }

    Ok(cabinet_id)
}

/// Ersetzt einen bestehenden Schrank unter derselben ID.
///
/// Der Ersatz entsteht zuerst unter einer generierten ID. Erst wenn alle
/// Platten gebaut sind, weicht der alte Schrank; die Platten wandern in den
/// neu angelegten Schrank mit der alten ID an dessen alter Position.
fn replace_cabinet(
    store: &mut HierarchyStore,
    floor: Option<&EntityId>,
    name: Option<&str>,
    id: EntityId,
    parameters: CabinetParameters,
) -> Result<EntityId, TemplateError> {
    let staging = build_cabinet(store, floor, name, None, parameters)?;
    let staged_panels = store
        .cabinet(&staging)
        .map(|c| c.panels.clone())
        .unwrap_or_default();

    log::info!("Schrank {} wird aus Template neu aufgebaut", id);
    let slot = store.cabinet_slot(&id);
    store.remove_cabinet(&id);

    let Some(cabinet_id) = store.create_cabinet(floor, name, Some(id)) else {
        let cabinet = store
            .cabinet(&staging)
            .map(|c| c.name.clone())
            .unwrap_or_default();
        store.remove_cabinet(&staging);
        return Err(TemplateError::Materialization {
            cabinet,
            panel: String::new(),
        });
    };
    store.set_cabinet_parameters(&cabinet_id, parameters);
    for panel_id in &staged_panels {
        store.move_panel(panel_id, &cabinet_id);
    }
    store.remove_cabinet(&staging);
    if let Some(slot) = slot {
        store.restore_cabinet_slot(&cabinet_id, slot);
    }

    Ok(cabinet_id)
}

/// Exportiert alle aus Maßen erzeugten Schränke in Store-Reihenfolge.
pub fn export_template(store: &HierarchyStore) -> TemplateDocument {
    let cabinets = store
        .all_cabinets()
        .filter_map(|cabinet| {
            let parameters = cabinet.parameters?;
            Some(CabinetTemplate {
                id: Some(cabinet.id.clone()),
                name: Some(cabinet.name.clone()),
                width: parameters.width,
                height: parameters.height,
                depth: parameters.depth,
                thickness: parameters.thickness,
                options: parameters.options,
            })
        })
        .collect();
    TemplateDocument { cabinets }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{GeometryAdapter, Highlight, PanelSpec, SceneGraph, ViewStyle, VisualHandle};
    use crate::template::parse_template_document;
    use std::cell::RefCell;
    use std::rc::Rc;

    const KITCHEN: &str = r#"{ "cabinets": [
        { "id": "sink", "name": "Sink Base", "width": 800, "height": 720, "depth": 560, "thickness": 18 },
        { "name": "Drawer", "width": 400, "height": 720, "depth": 560, "thickness": 18,
          "options": { "backType": "groove" } },
        { "name": "Broken", "width": 400, "height": 720, "thickness": 18 },
        { "name": "Too Thick", "width": 30, "height": 720, "depth": 560, "thickness": 18 }
    ] }"#;

    fn store_with_floor() -> (HierarchyStore, EntityId) {
        let mut store = HierarchyStore::new(Box::new(SceneGraph::new()));
        let floor = store
            .create_floor(None, None, None)
            .expect("Etage sollte angelegt werden");
        (store, floor)
    }

    #[test]
    fn loads_valid_entries_and_skips_invalid_ones() {
        let (mut store, floor) = store_with_floor();
        let entries = parse_template_document(KITCHEN).expect("Dokument erwartet");

        let report = load_from_template(&mut store, Some(&floor), entries);

        assert_eq!(report.created.len(), 2);
        assert_eq!(report.created[0], EntityId::from("sink"));
        assert_eq!(report.skipped.len(), 2);
        assert_eq!(report.skipped[0].index, 2);
        assert!(matches!(report.skipped[0].error, TemplateError::Malformed { .. }));
        assert!(matches!(
            report.skipped[1].error,
            TemplateError::InvalidDimensions { .. }
        ));

        let names: Vec<&str> = store
            .floor_cabinets(&floor)
            .into_iter()
            .map(|c| c.name.as_str())
            .collect();
        assert_eq!(names, vec!["Sink Base", "Drawer"]);
        assert_eq!(store.panel_count(), 10);
    }

    #[test]
    fn reload_with_same_id_replaces_cabinet() {
        let (mut store, floor) = store_with_floor();
        let first = parse_template_document(KITCHEN).expect("Dokument erwartet");
        load_from_template(&mut store, Some(&floor), first);
        let second = parse_template_document(KITCHEN).expect("Dokument erwartet");

        let report = load_from_template(&mut store, Some(&floor), second);

        assert!(report.created.contains(&EntityId::from("sink")));
        assert_eq!(
            store
                .floor_cabinets(&floor)
                .iter()
                .filter(|c| c.id.as_str() == "sink")
                .count(),
            1
        );
        // Sink ersetzt, Drawer ohne ID kommt erneut hinzu
        assert_eq!(store.cabinet_count(), 3);
        assert_eq!(store.panel_count(), 15);
    }

    #[test]
    fn id_used_by_other_kind_is_skipped() {
        let (mut store, floor) = store_with_floor();
        let entries = parse_template_document(&format!(
            r#"{{ "cabinets": [ {{ "id": "{}", "width": 400, "height": 720, "depth": 560, "thickness": 18 }} ] }}"#,
            floor
        ))
        .expect("Dokument erwartet");

        let report = load_from_template(&mut store, Some(&floor), entries);

        assert!(report.created.is_empty());
        assert!(matches!(report.skipped[0].error, TemplateError::IdConflict(_)));
        assert!(store.floor(&floor).is_some());
    }

    #[test]
    fn unknown_floor_skips_entries() {
        let (mut store, _floor) = store_with_floor();
        let entries = parse_template_document(KITCHEN).expect("Dokument erwartet");

        let report = load_from_template(&mut store, Some(&EntityId::from("floor-99")), entries);

        assert!(report.created.is_empty());
        assert_eq!(store.cabinet_count(), 0);
    }

    #[test]
    fn export_round_trips_loaded_cabinets() {
        let (mut store, floor) = store_with_floor();
        let entries = parse_template_document(KITCHEN).expect("Dokument erwartet");
        load_from_template(&mut store, Some(&floor), entries);
        store.create_cabinet(Some(&floor), Some("Hand Built"), None);

        let exported = export_template(&store);
        assert_eq!(exported.cabinets.len(), 2);

        let json = exported.to_json().expect("Export sollte serialisierbar sein");
        let (mut fresh, fresh_floor) = store_with_floor();
        let entries = parse_template_document(&json).expect("Export sollte parsebar sein");
        let report = load_from_template(&mut fresh, Some(&fresh_floor), entries);

        assert!(report.is_clean());
        assert_eq!(export_template(&fresh), exported);
    }

    /// Adapter, der ab der n-ten Platte scheitert.
    struct FailingAfter {
        inner: SceneGraph,
        remaining: usize,
    }

    impl GeometryAdapter for FailingAfter {
        fn scene_root(&self) -> VisualHandle {
            self.inner.scene_root()
        }
        fn create_visual_group(&mut self, name: &str) -> VisualHandle {
            self.inner.create_visual_group(name)
        }
        fn attach_child(&mut self, parent: VisualHandle, child: VisualHandle) {
            self.inner.attach_child(parent, child);
        }
        fn detach_child(&mut self, handle: VisualHandle) {
            self.inner.detach_child(handle);
        }
        fn build_panel_representation(
            &mut self,
            spec: &PanelSpec,
            highlight: Highlight,
            style: ViewStyle,
        ) -> anyhow::Result<VisualHandle> {
            if self.remaining == 0 {
                anyhow::bail!("GPU-Puffer erschöpft");
            }
            self.remaining -= 1;
            self.inner.build_panel_representation(spec, highlight, style)
        }
        fn set_highlight(&mut self, handle: VisualHandle, highlight: Highlight) {
            self.inner.set_highlight(handle, highlight);
        }
        fn set_label(&mut self, handle: VisualHandle, label: &str) {
            self.inner.set_label(handle, label);
        }
        fn dispose_representation(&mut self, handle: VisualHandle) {
            self.inner.dispose_representation(handle);
        }
    }

    #[test]
    fn adapter_failure_removes_only_the_partial_cabinet() {
        let mut store = HierarchyStore::new(Box::new(FailingAfter {
            inner: SceneGraph::new(),
            remaining: 7,
        }));
        let floor = store.create_floor(None, None, None).expect("Etage erwartet");
        let entries = parse_template_document(KITCHEN).expect("Dokument erwartet");

        let report = load_from_template(&mut store, Some(&floor), entries);

        assert_eq!(report.created, vec![EntityId::from("sink")]);
        assert!(matches!(
            report.skipped[0].error,
            TemplateError::Materialization { ref cabinet, ref panel } if cabinet == "Drawer" && panel == "Bottom"
        ));
        assert_eq!(store.cabinet_count(), 1);
        assert_eq!(store.panel_count(), 5);
    }

    const SINK_ONLY: &str = r#"{ "cabinets": [
        { "id": "sink", "name": "Sink Base", "width": 800, "height": 720, "depth": 560, "thickness": 18 }
    ] }"#;

    #[test]
    fn failed_reload_keeps_the_committed_cabinet() {
        let adapter = Rc::new(RefCell::new(FailingAfter {
            inner: SceneGraph::new(),
            remaining: 5,
        }));
        let mut store = HierarchyStore::new(Box::new(adapter.clone()));
        let floor = store.create_floor(None, None, None).expect("Etage erwartet");
        let first = parse_template_document(SINK_ONLY).expect("Dokument erwartet");
        assert!(load_from_template(&mut store, Some(&floor), first).is_clean());
        let sink = EntityId::from("sink");
        let committed = store.cabinet(&sink).map(|c| c.panels.clone()).expect("Schrank erwartet");

        adapter.borrow_mut().remaining = 3;
        let second = parse_template_document(SINK_ONLY).expect("Dokument erwartet");
        let report = load_from_template(&mut store, Some(&floor), second);

        assert!(report.created.is_empty());
        assert!(matches!(
            report.skipped[0].error,
            TemplateError::Materialization { ref panel, .. } if panel == "Top"
        ));
        assert_eq!(store.cabinet_count(), 1);
        assert_eq!(store.cabinet(&sink).map(|c| c.panels.clone()), Some(committed));
        assert_eq!(store.panel_count(), 5);
        assert_eq!(adapter.borrow().inner.live_count(), 1 + 1 + 5);
        assert_eq!(adapter.borrow().inner.double_disposals(), 0);
    }

    #[test]
    fn duplicate_id_in_one_document_is_a_conflict() {
        let (mut store, floor) = store_with_floor();
        let entries = parse_template_document(
            r#"{ "cabinets": [
                { "id": "a", "name": "One", "width": 400, "height": 720, "depth": 560, "thickness": 18 },
                { "id": "a", "name": "Two", "width": 600, "height": 720, "depth": 560, "thickness": 18 }
            ] }"#,
        )
        .expect("Dokument erwartet");

        let report = load_from_template(&mut store, Some(&floor), entries);

        assert_eq!(report.created, vec![EntityId::from("a")]);
        assert_eq!(report.skipped[0].index, 1);
        assert!(matches!(report.skipped[0].error, TemplateError::IdConflict(_)));
        assert_eq!(
            store.cabinet(&EntityId::from("a")).map(|c| c.name.as_str()),
            Some("One")
        );
        assert_eq!(store.panel_count(), 5);
    }

    #[test]
    fn reload_keeps_navigation_order() {
        let (mut store, floor) = store_with_floor();
        let first = parse_template_document(KITCHEN).expect("Dokument erwartet");
        load_from_template(&mut store, Some(&floor), first);
        store.create_cabinet(Some(&floor), Some("Hand Built"), None);

        let again = parse_template_document(SINK_ONLY).expect("Dokument erwartet");
        let report = load_from_template(&mut store, Some(&floor), again);

        assert!(report.is_clean());
        let names: Vec<&str> = store
            .floor_cabinets(&floor)
            .into_iter()
            .map(|c| c.name.as_str())
            .collect();
        assert_eq!(names, vec!["Sink Base", "Drawer", "Hand Built"]);
        assert_eq!(
            store.all_cabinets().next().map(|c| c.id.clone()),
            Some(EntityId::from("sink"))
        );
        assert_eq!(store.cabinet_panels(&EntityId::from("sink")).len(), 5);
        assert_eq!(store.panel_count(), 10);
    }
}
