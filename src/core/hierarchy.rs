//! Der zentrale HierarchyStore: Besitzbaum Projekt → Etage → Schrank → Platte.
//!
//! Der logische Baum (ID-indexiert) ist die einzige Wahrheit. Der Handle-Baum
//! im Geometrie-Adapter ist eine abgeleitete Projektion und wird nur über
//! explizite attach/detach-Aufrufe bei logischen Mutationen synchron gehalten.

mod naming;

pub use naming::{BOOTSTRAP_PROJECT, GROUND_FLOOR};

use super::entity::{Cabinet, CabinetParameters, Floor, Panel, Project};
use super::events::StoreEvent;
use super::geometry::{GeometryAdapter, Highlight, ViewStyle, VisualHandle};
use super::id::{EntityId, EntityKind};
use super::rules::PanelSpec;
use indexmap::IndexMap;
use std::collections::HashMap;

/// Reverse-Indizes Kind → Elternteil, bei create/move/remove gepflegt.
#[derive(Debug, Default)]
struct OwnerIndex {
    panel_cabinet: HashMap<EntityId, EntityId>,
    cabinet_floor: HashMap<EntityId, EntityId>,
    floor_project: HashMap<EntityId, EntityId>,
}

/// Position eines Schranks in der Navigationsreihenfolge.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CabinetSlot {
    /// Index unter allen Schränken
    pub store_index: usize,
    /// Index in der Etage (None bei eigenständigen Schränken)
    pub floor_index: Option<usize>,
}

/// Besitzt alle Entities, ihre Kanten, die ID-Indizes und die Visual-Handles.
pub struct HierarchyStore {
    adapter: Box<dyn GeometryAdapter>,
    scene_root: VisualHandle,
    view_style: ViewStyle,
    projects: IndexMap<EntityId, Project>,
    floors: IndexMap<EntityId, Floor>,
    cabinets: IndexMap<EntityId, Cabinet>,
    panels: HashMap<EntityId, Panel>,
    owners: OwnerIndex,
    id_counter: u64,
    events: Vec<StoreEvent>,
}

impl HierarchyStore {
    const MAX_PENDING_EVENTS: usize = 10_000;

    /// Erstellt einen leeren Store über dem gegebenen Adapter.
    pub fn new(adapter: Box<dyn GeometryAdapter>) -> Self {
        Self::with_view_style(adapter, ViewStyle::default())
    }

    /// Erstellt einen leeren Store mit vorgegebener Darstellungsart.
    pub fn with_view_style(adapter: Box<dyn GeometryAdapter>, view_style: ViewStyle) -> Self {
        let scene_root = adapter.scene_root();
        Self {
            adapter,
            scene_root,
            view_style,
            projects: IndexMap::new(),
            floors: IndexMap::new(),
            cabinets: IndexMap::new(),
            panels: HashMap::new(),
            owners: OwnerIndex::default(),
            id_counter: 0,
            events: Vec::new(),
        }
    }

    // ── Anlegen ────────────────────────────────────────────────────

    /// Legt das Start-Projekt "New Project" mit "Ground Floor" an.
    pub fn bootstrap(&mut self) -> Option<EntityId> {
        let project = self.create_project(
            Some(BOOTSTRAP_PROJECT),
            &[GROUND_FLOOR.to_string()],
            None,
        )?;
        log::info!("Start-Projekt angelegt: {}", project);
        Some(project)
    }

    /// Legt ein Projekt mit den angegebenen Etagen an (leer → "Ground Floor").
    pub fn create_project(
        &mut self,
        name: Option<&str>,
        floor_names: &[String],
        explicit_id: Option<EntityId>,
    ) -> Option<EntityId> {
        let id = self.allocate_id(EntityKind::Project, explicit_id)?;
        let name = naming::explicit(name).unwrap_or_else(|| {
            let siblings: Vec<&str> = self.projects.values().map(|p| p.name.as_str()).collect();
            naming::numbered(BOOTSTRAP_PROJECT, &siblings)
        });

        let handle = self.adapter.create_visual_group(&name);
        self.adapter.attach_child(self.scene_root, handle);
        self.projects.insert(
            id.clone(),
            Project {
                id: id.clone(),
                name: name.clone(),
                floors: Vec::new(),
                handle,
            },
        );
        self.emit(StoreEvent::Created {
            kind: EntityKind::Project,
            id: id.clone(),
            name,
            parent: None,
        });

        if floor_names.is_empty() {
            self.create_floor(Some(&id), None, None);
        } else {
            for floor_name in floor_names {
                self.create_floor(Some(&id), Some(floor_name), None);
            }
        }

        Some(id)
    }

    /// Legt eine Etage an, eigenständig (`project` = None) oder unter einem Projekt.
    pub fn create_floor(
        &mut self,
        project: Option<&EntityId>,
        name: Option<&str>,
        explicit_id: Option<EntityId>,
    ) -> Option<EntityId> {
        let parent_handle = match project {
            Some(project_id) => match self.projects.get(project_id) {
                Some(p) => p.handle,
                None => {
                    log::warn!("Etage abgelehnt: Projekt {} existiert nicht", project_id);
                    return None;
                }
            },
            None => self.scene_root,
        };

        let id = self.allocate_id(EntityKind::Floor, explicit_id)?;
        let name = naming::explicit(name).unwrap_or_else(|| {
            let siblings = self.floor_sibling_names(project);
            naming::floor(&siblings)
        });

        let handle = self.adapter.create_visual_group(&name);
        self.adapter.attach_child(parent_handle, handle);
        self.floors.insert(
            id.clone(),
            Floor {
                id: id.clone(),
                name: name.clone(),
                cabinets: Vec::new(),
                handle,
            },
        );
        if let Some(project_id) = project {
            if let Some(p) = self.projects.get_mut(project_id) {
                p.floors.push(id.clone());
            }
            self.owners
                .floor_project
                .insert(id.clone(), project_id.clone());
        }
        self.emit(StoreEvent::Created {
            kind: EntityKind::Floor,
            id: id.clone(),
            name,
            parent: project.cloned(),
        });
        Some(id)
    }

    /// Legt einen leeren Schrank an, eigenständig oder auf einer Etage.
    pub fn create_cabinet(
        &mut self,
        floor: Option<&EntityId>,
        name: Option<&str>,
        explicit_id: Option<EntityId>,
    ) -> Option<EntityId> {
        let parent_handle = match floor {
            Some(floor_id) => match self.floors.get(floor_id) {
                Some(f) => f.handle,
                None => {
                    log::warn!("Schrank abgelehnt: Etage {} existiert nicht", floor_id);
                    return None;
                }
            },
            None => self.scene_root,
        };

        let id = self.allocate_id(EntityKind::Cabinet, explicit_id)?;
        let name = naming::explicit(name).unwrap_or_else(|| {
            let siblings = self.cabinet_sibling_names(floor);
            naming::numbered("Cabinet", &siblings)
        });

        let handle = self.adapter.create_visual_group(&name);
        self.adapter.attach_child(parent_handle, handle);
        self.cabinets.insert(
            id.clone(),
            Cabinet {
                id: id.clone(),
                name: name.clone(),
                panels: Vec::new(),
                handle,
                parameters: None,
            },
        );
        if let Some(floor_id) = floor {
            if let Some(f) = self.floors.get_mut(floor_id) {
                f.cabinets.push(id.clone());
            }
            self.owners
                .cabinet_floor
                .insert(id.clone(), floor_id.clone());
        }
        self.emit(StoreEvent::Created {
            kind: EntityKind::Cabinet,
            id: id.clone(),
            name,
            parent: floor.cloned(),
        });
        Some(id)
    }

    /// Materialisiert eine Platte unter einem bestehenden Schrank.
    ///
    /// Unbekannter Schrank oder Adapter-Fehler: `None`, der Store bleibt unverändert.
    pub fn create_panel(
        &mut self,
        cabinet: &EntityId,
        mut spec: PanelSpec,
        explicit_id: Option<EntityId>,
    ) -> Option<EntityId> {
        let Some(cabinet_handle) = self.cabinets.get(cabinet).map(|c| c.handle) else {
            log::warn!("Platte abgelehnt: Schrank {} existiert nicht", cabinet);
            return None;
        };

        let id = self.allocate_id(EntityKind::Panel, explicit_id)?;
        match naming::explicit(Some(spec.name.as_str())) {
            Some(name) => spec.name = name,
            None => {
                let siblings = self.panel_names(cabinet);
                spec.name = naming::numbered("Panel", &siblings);
            }
        }

        let handle =
            match self
                .adapter
                .build_panel_representation(&spec, Highlight::None, self.view_style)
            {
                Ok(handle) => handle,
                Err(e) => {
                    log::error!("Darstellung für Platte '{}' fehlgeschlagen: {:#}", spec.name, e);
                    return None;
                }
            };
        self.adapter.attach_child(cabinet_handle, handle);

        let name = spec.name.clone();
        if let Some(c) = self.cabinets.get_mut(cabinet) {
            c.panels.push(id.clone());
        }
        self.owners
            .panel_cabinet
            .insert(id.clone(), cabinet.clone());
        self.panels.insert(
            id.clone(),
            Panel {
                id: id.clone(),
                spec,
                handle,
                highlight: Highlight::None,
            },
        );
        self.emit(StoreEvent::Created {
            kind: EntityKind::Panel,
            id: id.clone(),
            name,
            parent: Some(cabinet.clone()),
        });
        Some(id)
    }

    // ── Ändern ─────────────────────────────────────────────────────

    /// Ersetzt Geometrie und Namen einer Platte und baut die Darstellung neu.
    ///
    /// Die neue Darstellung wird zuerst gebaut; scheitert das, bleibt die alte.
    pub fn update_panel(&mut self, panel_id: &EntityId, mut spec: PanelSpec) -> bool {
        let Some(panel) = self.panels.get(panel_id) else {
            log::warn!("Platte {} nicht gefunden", panel_id);
            return false;
        };
        let old_name = panel.spec.name.clone();
        let highlight = panel.highlight;
        spec.name = naming::explicit(Some(spec.name.as_str())).unwrap_or_else(|| old_name.clone());

        let new_handle =
            match self
                .adapter
                .build_panel_representation(&spec, highlight, self.view_style)
            {
                Ok(handle) => handle,
                Err(e) => {
                    log::error!("Neuaufbau von Platte {} fehlgeschlagen: {:#}", panel_id, e);
                    return false;
                }
            };

        let renamed = spec.name != old_name;
        let new_name = spec.name.clone();
        if let Some(panel) = self.panels.get_mut(panel_id) {
            panel.spec = spec;
        }
        self.swap_panel_handle(panel_id, new_handle);

        if renamed {
            self.emit(StoreEvent::Renamed {
                kind: EntityKind::Panel,
                id: panel_id.clone(),
                name: new_name,
            });
        }
        true
    }

    /// Hinterlegt die Korpus-Parameter eines aus Maßen erzeugten Schranks.
    pub fn set_cabinet_parameters(
        &mut self,
        cabinet_id: &EntityId,
        parameters: CabinetParameters,
    ) -> bool {
        match self.cabinets.get_mut(cabinet_id) {
            Some(c) => {
                c.parameters = Some(parameters);
                true
            }
            None => false,
        }
    }

    /// Fordert beim Adapter eine neue Hervorhebung an (unverändert → kein Aufruf).
    pub fn set_panel_highlight(&mut self, panel_id: &EntityId, highlight: Highlight) -> bool {
        let Some(panel) = self.panels.get_mut(panel_id) else {
            return false;
        };
        if panel.highlight != highlight {
            panel.highlight = highlight;
            self.adapter.set_highlight(panel.handle, highlight);
        }
        true
    }

    /// Wechselt die Darstellungsart und baut alle Platten neu.
    ///
    /// Gibt die Anzahl neu aufgebauter Platten zurück.
    pub fn set_view_style(&mut self, style: ViewStyle) -> usize {
        if style == self.view_style {
            return 0;
        }
        self.view_style = style;

        let panel_ids: Vec<EntityId> = self
            .cabinets
            .values()
            .flat_map(|c| c.panels.iter().cloned())
            .collect();

        let mut rebuilt = 0;
        for panel_id in panel_ids {
            let Some(panel) = self.panels.get(&panel_id) else {
                continue;
            };
            match self
                .adapter
                .build_panel_representation(&panel.spec, panel.highlight, style)
            {
                Ok(handle) => {
                    self.swap_panel_handle(&panel_id, handle);
                    rebuilt += 1;
                }
                Err(e) => {
                    log::error!("Neuaufbau von Platte {} fehlgeschlagen: {:#}", panel_id, e);
                }
            }
        }
        log::info!("Darstellung auf {:?} umgestellt ({} Platten)", style, rebuilt);
        rebuilt
    }

    /// Verschiebt eine Platte atomar in einen anderen Schrank.
    pub fn move_panel(&mut self, panel_id: &EntityId, target_cabinet: &EntityId) -> bool {
        let Some(target_handle) = self.cabinets.get(target_cabinet).map(|c| c.handle) else {
            log::warn!("Verschieben abgelehnt: Zielschrank {} existiert nicht", target_cabinet);
            return false;
        };
        let Some(panel_handle) = self.panels.get(panel_id).map(|p| p.handle) else {
            log::warn!("Verschieben abgelehnt: Platte {} existiert nicht", panel_id);
            return false;
        };
        let Some(source_cabinet) = self.owners.panel_cabinet.get(panel_id).cloned() else {
            return false;
        };
        if &source_cabinet == target_cabinet {
            return true;
        }

        // Quelle gibt ab, bevor das Ziel übernimmt
        self.adapter.detach_child(panel_handle);
        if let Some(source) = self.cabinets.get_mut(&source_cabinet) {
            source.panels.retain(|id| id != panel_id);
        }
        self.adapter.attach_child(target_handle, panel_handle);
        if let Some(target) = self.cabinets.get_mut(target_cabinet) {
            target.panels.push(panel_id.clone());
        }
        self.owners
            .panel_cabinet
            .insert(panel_id.clone(), target_cabinet.clone());

        self.emit(StoreEvent::PanelMoved {
            id: panel_id.clone(),
            from: source_cabinet,
            to: target_cabinet.clone(),
        });
        true
    }

    /// Benennt ein Projekt um.
    pub fn rename_project(&mut self, id: &EntityId, name: &str) -> bool {
        let handle = self.projects.get_mut(id).map(|p| {
            p.name = name.to_string();
            p.handle
        });
        self.finish_rename(EntityKind::Project, id, handle, name)
    }

    /// Benennt eine Etage um.
    pub fn rename_floor(&mut self, id: &EntityId, name: &str) -> bool {
        let handle = self.floors.get_mut(id).map(|f| {
            f.name = name.to_string();
            f.handle
        });
        self.finish_rename(EntityKind::Floor, id, handle, name)
    }

    /// Benennt einen Schrank um.
    pub fn rename_cabinet(&mut self, id: &EntityId, name: &str) -> bool {
        let handle = self.cabinets.get_mut(id).map(|c| {
            c.name = name.to_string();
            c.handle
        });
        self.finish_rename(EntityKind::Cabinet, id, handle, name)
    }

    /// Benennt eine Platte um.
    pub fn rename_panel(&mut self, id: &EntityId, name: &str) -> bool {
        let handle = self.panels.get_mut(id).map(|p| {
            p.spec.name = name.to_string();
            p.handle
        });
        self.finish_rename(EntityKind::Panel, id, handle, name)
    }

    /// Benennt eine Entity beliebiger Art um.
    pub fn rename(&mut self, id: &EntityId, name: &str) -> bool {
        match self.kind_of(id) {
            Some(EntityKind::Project) => self.rename_project(id, name),
            Some(EntityKind::Floor) => self.rename_floor(id, name),
            Some(EntityKind::Cabinet) => self.rename_cabinet(id, name),
            Some(EntityKind::Panel) => self.rename_panel(id, name),
            None => {
                log::warn!("Umbenennen: {} nicht gefunden", id);
                false
            }
        }
    }

    fn finish_rename(
        &mut self,
        kind: EntityKind,
        id: &EntityId,
        handle: Option<VisualHandle>,
        name: &str,
    ) -> bool {
        let Some(handle) = handle else {
            log::warn!("Umbenennen: {} {} nicht gefunden", kind, id);
            return false;
        };
        self.adapter.set_label(handle, name);
        self.emit(StoreEvent::Renamed {
            kind,
            id: id.clone(),
            name: name.to_string(),
        });
        true
    }

    // ── Entfernen (kaskadierend, Blätter zuerst) ───────────────────

    /// Entfernt eine Platte.
    pub fn remove_panel(&mut self, id: &EntityId) -> bool {
        let Some(panel) = self.panels.remove(id) else {
            log::warn!("Platte {} nicht gefunden", id);
            return false;
        };
        if let Some(cabinet_id) = self.owners.panel_cabinet.remove(id) {
            if let Some(c) = self.cabinets.get_mut(&cabinet_id) {
                c.panels.retain(|p| p != id);
            }
        }
        self.release_handle(panel.handle);
        self.emit(StoreEvent::Removed {
            kind: EntityKind::Panel,
            id: id.clone(),
        });
        true
    }

    /// Entfernt einen Schrank samt Platten. Die Platten werden einzeln vor dem
    /// Schrank-Handle freigegeben.
    pub fn remove_cabinet(&mut self, id: &EntityId) -> bool {
        let Some(panel_ids) = self.cabinets.get(id).map(|c| c.panels.clone()) else {
            log::warn!("Schrank {} nicht gefunden", id);
            return false;
        };
        for panel_id in &panel_ids {
            self.remove_panel(panel_id);
        }

        let Some(cabinet) = self.cabinets.shift_remove(id) else {
            return false;
        };
        if let Some(floor_id) = self.owners.cabinet_floor.remove(id) {
            if let Some(f) = self.floors.get_mut(&floor_id) {
                f.cabinets.retain(|c| c != id);
            }
        }
        self.release_handle(cabinet.handle);
        self.emit(StoreEvent::Removed {
            kind: EntityKind::Cabinet,
            id: id.clone(),
        });
        true
    }

    /// Aktuelle Position eines Schranks in Store- und Etagen-Reihenfolge.
    pub fn cabinet_slot(&self, id: &EntityId) -> Option<CabinetSlot> {
        let store_index = self.cabinets.get_index_of(id)?;
        let floor_index = self
            .owners
            .cabinet_floor
            .get(id)
            .and_then(|floor_id| self.floors.get(floor_id))
            .and_then(|f| f.cabinets.iter().position(|c| c == id));
        Some(CabinetSlot {
            store_index,
            floor_index,
        })
    }

    /// Schiebt einen Schrank an eine frühere Position zurück.
    ///
    /// Indizes jenseits des Endes werden auf das Ende begrenzt.
    pub fn restore_cabinet_slot(&mut self, id: &EntityId, slot: CabinetSlot) -> bool {
        let Some(from) = self.cabinets.get_index_of(id) else {
            return false;
        };
        let to = slot.store_index.min(self.cabinets.len() - 1);
        self.cabinets.move_index(from, to);

        if let (Some(floor_index), Some(floor_id)) =
            (slot.floor_index, self.owners.cabinet_floor.get(id))
        {
            if let Some(f) = self.floors.get_mut(floor_id) {
                f.cabinets.retain(|c| c != id);
                let at = floor_index.min(f.cabinets.len());
                f.cabinets.insert(at, id.clone());
            }
        }
        true
    }

    /// Entfernt eine Etage samt Schränken.
    pub fn remove_floor(&mut self, id: &EntityId) -> bool {
        let Some(cabinet_ids) = self.floors.get(id).map(|f| f.cabinets.clone()) else {
            log::warn!("Etage {} nicht gefunden", id);
            return false;
        };
        for cabinet_id in &cabinet_ids {
            self.remove_cabinet(cabinet_id);
        }

        let Some(floor) = self.floors.shift_remove(id) else {
            return false;
        };
        if let Some(project_id) = self.owners.floor_project.remove(id) {
            if let Some(p) = self.projects.get_mut(&project_id) {
                p.floors.retain(|f| f != id);
            }
        }
        self.release_handle(floor.handle);
        self.emit(StoreEvent::Removed {
            kind: EntityKind::Floor,
            id: id.clone(),
        });
        true
    }

    /// Entfernt ein Projekt samt Etagen.
    pub fn remove_project(&mut self, id: &EntityId) -> bool {
        let Some(floor_ids) = self.projects.get(id).map(|p| p.floors.clone()) else {
            log::warn!("Projekt {} nicht gefunden", id);
            return false;
        };
        for floor_id in &floor_ids {
            self.remove_floor(floor_id);
        }

        let Some(project) = self.projects.shift_remove(id) else {
            return false;
        };
        self.release_handle(project.handle);
        self.emit(StoreEvent::Removed {
            kind: EntityKind::Project,
            id: id.clone(),
        });
        true
    }

    /// Entfernt eine Entity beliebiger Art (kaskadierend).
    pub fn remove(&mut self, id: &EntityId) -> bool {
        match self.kind_of(id) {
            Some(EntityKind::Project) => self.remove_project(id),
            Some(EntityKind::Floor) => self.remove_floor(id),
            Some(EntityKind::Cabinet) => self.remove_cabinet(id),
            Some(EntityKind::Panel) => self.remove_panel(id),
            None => {
                log::warn!("Entfernen: {} nicht gefunden", id);
                false
            }
        }
    }

    /// Entfernt alle Projekte sowie eigenständige Etagen und Schränke.
    pub fn clear_all(&mut self) {
        let project_ids: Vec<EntityId> = self.projects.keys().cloned().collect();
        for id in &project_ids {
            self.remove_project(id);
        }
        let floor_ids: Vec<EntityId> = self.floors.keys().cloned().collect();
        for id in &floor_ids {
            self.remove_floor(id);
        }
        let cabinet_ids: Vec<EntityId> = self.cabinets.keys().cloned().collect();
        for id in &cabinet_ids {
            self.remove_cabinet(id);
        }
        log::info!("Alle Entities entfernt");
    }

    // ── Abfragen ───────────────────────────────────────────────────

    /// Projekt per ID
    pub fn project(&self, id: &EntityId) -> Option<&Project> {
        self.projects.get(id)
    }

    /// Erstes Projekt mit diesem Namen
    pub fn project_by_name(&self, name: &str) -> Option<&Project> {
        self.projects.values().find(|p| p.name == name)
    }

    /// Alle Projekte in Anlagereihenfolge
    pub fn projects(&self) -> impl Iterator<Item = &Project> {
        self.projects.values()
    }

    /// Etage per ID
    pub fn floor(&self, id: &EntityId) -> Option<&Floor> {
        self.floors.get(id)
    }

    /// Erste Etage mit diesem Namen
    pub fn floor_by_name(&self, name: &str) -> Option<&Floor> {
        self.floors.values().find(|f| f.name == name)
    }

    /// Etagen eines Projekts in Reihenfolge (unbekanntes Projekt → leer)
    pub fn project_floors(&self, project_id: &EntityId) -> Vec<&Floor> {
        self.projects
            .get(project_id)
            .map(|p| p.floors.iter().filter_map(|id| self.floors.get(id)).collect())
            .unwrap_or_default()
    }

    /// Schrank per ID (O(1))
    pub fn cabinet(&self, id: &EntityId) -> Option<&Cabinet> {
        self.cabinets.get(id)
    }

    /// Erster Schrank mit diesem Namen
    pub fn cabinet_by_name(&self, name: &str) -> Option<&Cabinet> {
        self.cabinets.values().find(|c| c.name == name)
    }

    /// Alle Schränke in Anlagereihenfolge
    pub fn all_cabinets(&self) -> impl Iterator<Item = &Cabinet> {
        self.cabinets.values()
    }

    /// Schränke einer Etage in Reihenfolge (unbekannte Etage → leer)
    pub fn floor_cabinets(&self, floor_id: &EntityId) -> Vec<&Cabinet> {
        self.floors
            .get(floor_id)
            .map(|f| {
                f.cabinets
                    .iter()
                    .filter_map(|id| self.cabinets.get(id))
                    .collect()
            })
            .unwrap_or_default()
    }

    /// Platte per ID (O(1))
    pub fn panel(&self, id: &EntityId) -> Option<&Panel> {
        self.panels.get(id)
    }

    /// Erste Platte mit diesem Namen (Schränke in Anlagereihenfolge)
    pub fn panel_by_name(&self, name: &str) -> Option<&Panel> {
        self.cabinets
            .values()
            .flat_map(|c| c.panels.iter())
            .filter_map(|id| self.panels.get(id))
            .find(|p| p.name() == name)
    }

    /// Platten eines Schranks in Reihenfolge (unbekannter Schrank → leer)
    pub fn cabinet_panels(&self, cabinet_id: &EntityId) -> Vec<&Panel> {
        self.cabinets
            .get(cabinet_id)
            .map(|c| c.panels.iter().filter_map(|id| self.panels.get(id)).collect())
            .unwrap_or_default()
    }

    /// Schrank, der die Platte enthält (O(1))
    pub fn find_panel_cabinet(&self, panel_id: &EntityId) -> Option<&EntityId> {
        self.owner_cabinet_of_panel(panel_id)
    }

    /// Besitzender Schrank einer Platte (O(1))
    pub fn owner_cabinet_of_panel(&self, panel_id: &EntityId) -> Option<&EntityId> {
        self.owners.panel_cabinet.get(panel_id)
    }

    /// Besitzende Etage eines Schranks (O(1)); None bei eigenständigen Schränken
    pub fn owner_floor_of_cabinet(&self, cabinet_id: &EntityId) -> Option<&EntityId> {
        self.owners.cabinet_floor.get(cabinet_id)
    }

    /// Besitzendes Projekt einer Etage (O(1)); None bei eigenständigen Etagen
    pub fn owner_project_of_floor(&self, floor_id: &EntityId) -> Option<&EntityId> {
        self.owners.floor_project.get(floor_id)
    }

    /// Art der Entity mit dieser ID
    pub fn kind_of(&self, id: &EntityId) -> Option<EntityKind> {
        if self.panels.contains_key(id) {
            Some(EntityKind::Panel)
        } else if self.cabinets.contains_key(id) {
            Some(EntityKind::Cabinet)
        } else if self.floors.contains_key(id) {
            Some(EntityKind::Floor)
        } else if self.projects.contains_key(id) {
            Some(EntityKind::Project)
        } else {
            None
        }
    }

    /// Ob irgendeine Entity diese ID trägt
    pub fn contains(&self, id: &EntityId) -> bool {
        self.kind_of(id).is_some()
    }

    /// Anzahl Projekte
    pub fn project_count(&self) -> usize {
        self.projects.len()
    }

    /// Anzahl Etagen
    pub fn floor_count(&self) -> usize {
        self.floors.len()
    }

    /// Anzahl Schränke
    pub fn cabinet_count(&self) -> usize {
        self.cabinets.len()
    }

    /// Anzahl Platten über alle Schränke
    pub fn panel_count(&self) -> usize {
        self.panels.len()
    }

    /// Aktuelle Darstellungsart
    pub fn view_style(&self) -> ViewStyle {
        self.view_style
    }

    /// Visual-Handle der Szenenwurzel
    pub fn scene_root(&self) -> VisualHandle {
        self.scene_root
    }

    // ── Benachrichtigungen ─────────────────────────────────────────

    /// Gibt alle ausstehenden Benachrichtigungen heraus.
    pub fn drain_events(&mut self) -> Vec<StoreEvent> {
        std::mem::take(&mut self.events)
    }

    /// Ausstehende Benachrichtigungen (read-only)
    pub fn pending_events(&self) -> &[StoreEvent] {
        &self.events
    }

    fn emit(&mut self, event: StoreEvent) {
        log::debug!("{:?}", event);
        if self.events.len() >= Self::MAX_PENDING_EVENTS {
            self.events.drain(..Self::MAX_PENDING_EVENTS / 2);
            log::warn!("Benachrichtigungen nicht abgeholt, ältere verworfen");
        }
        self.events.push(event);
    }

    // ── Interna ────────────────────────────────────────────────────

    fn allocate_id(&mut self, kind: EntityKind, explicit_id: Option<EntityId>) -> Option<EntityId> {
        match explicit_id {
            Some(id) if id.is_empty() => {
                log::warn!("{} abgelehnt: leere ID", kind);
                None
            }
            Some(id) if self.contains(&id) => {
                log::warn!("{} abgelehnt: ID {} bereits vergeben", kind, id);
                None
            }
            Some(id) => Some(id),
            None => loop {
                self.id_counter += 1;
                let id = EntityId::generated(kind, self.id_counter);
                if !self.contains(&id) {
                    break Some(id);
                }
            },
        }
    }

    /// Löst ein Handle vom Elternteil und gibt es genau einmal frei.
    fn release_handle(&mut self, handle: VisualHandle) {
        self.adapter.detach_child(handle);
        self.adapter.dispose_representation(handle);
    }

    /// Ersetzt die Darstellung einer Platte unter ihrem Schrank.
    fn swap_panel_handle(&mut self, panel_id: &EntityId, new_handle: VisualHandle) {
        let cabinet_handle = self
            .owners
            .panel_cabinet
            .get(panel_id)
            .and_then(|c| self.cabinets.get(c))
            .map(|c| c.handle)
            .unwrap_or(self.scene_root);
        let Some(panel) = self.panels.get_mut(panel_id) else {
            self.adapter.dispose_representation(new_handle);
            return;
        };
        let old_handle = std::mem::replace(&mut panel.handle, new_handle);
        self.release_handle(old_handle);
        self.adapter.attach_child(cabinet_handle, new_handle);
    }

    fn floor_sibling_names(&self, project: Option<&EntityId>) -> Vec<&str> {
        match project {
            Some(project_id) => self
                .project_floors(project_id)
                .into_iter()
                .map(|f| f.name.as_str())
                .collect(),
            None => self
                .floors
                .values()
                .filter(|f| !self.owners.floor_project.contains_key(&f.id))
                .map(|f| f.name.as_str())
                .collect(),
        }
    }

    fn cabinet_sibling_names(&self, floor: Option<&EntityId>) -> Vec<&str> {
        match floor {
            Some(floor_id) => self
                .floor_cabinets(floor_id)
                .into_iter()
                .map(|c| c.name.as_str())
                .collect(),
            None => self
                .cabinets
                .values()
                .filter(|c| !self.owners.cabinet_floor.contains_key(&c.id))
                .map(|c| c.name.as_str())
                .collect(),
        }
    }

    fn panel_names(&self, cabinet: &EntityId) -> Vec<&str> {
        self.cabinet_panels(cabinet)
            .into_iter()
            .map(|p| p.name())
            .collect()
    }
}
