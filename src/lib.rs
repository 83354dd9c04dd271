//! Cabinet Designer Library.
//! Hierarchie-Kern, Regelwerk und Templates als Library exportiert für Tests und Wiederverwendung.

pub mod app;
pub mod core;
pub mod shared;
pub mod template;

pub use app::{
    AppCommand, AppController, AppIntent, AppState, PickModifiers, SelectionState, UiState,
    ViewState,
};
pub use core::{
    derive_panels, BackType, Cabinet, CabinetParameters, ConstructionOptions, EntityId,
    EntityKind, Floor, GeometryAdapter, HierarchyStore, Highlight, Panel, PanelSpec, Project,
    SceneGraph, StoreEvent, TopStyle, ViewStyle, VisualHandle,
};
pub use shared::DesignerOptions;
pub use template::{
    parse_template_document, CabinetTemplate, DirectorySource, TemplateDocument, TemplateError,
    TemplateLoadReport, TemplateSource,
};
