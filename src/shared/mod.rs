//! Geteilte Typen für layer-übergreifende Verträge.
//!
//! Enthält die Laufzeit-Optionen, die `app` und das Binary gemeinsam nutzen.

pub mod options;

pub use options::DesignerOptions;
pub use options::{
    DEFAULT_CABINET_DEPTH, DEFAULT_CABINET_HEIGHT, DEFAULT_CABINET_WIDTH, DEFAULT_PANEL_THICKNESS,
};
