//! Use-Case-Funktionen für das Bearbeiten der Hierarchie.
//!
//! Aufgeteilt nach Operation:
//! - `create`: Projekte, Etagen, Schränke und Platten anlegen
//! - `modify`: Platten aktualisieren/verschieben, Entities umbenennen
//! - `delete`: Entfernen samt Bereinigung von Selektion und aktiven Referenzen

mod create;
mod delete;
mod modify;

pub use create::{
    bootstrap, create_cabinet, create_cabinet_from_dimensions, create_floor, create_panel,
    create_project,
};
pub use delete::{clear_all, delete_selected_panels, remove_entity};
pub use modify::{move_panel, rename, update_panel};
