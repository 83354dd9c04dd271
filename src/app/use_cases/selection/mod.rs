//! Use-Case-Funktionen für Platten-Selektion.
//!
//! Aufgeteilt nach Selektionsmodus:
//! - `pick`: Gruppen- und Einzelauswahl per Pick
//! - `helpers`: Aufheben, Bereinigen, Farbabgleich

mod helpers;
mod pick;


pub use helpers::{clear_selection, purge_removed};
pub use pick::{select_cabinet_group, select_single_panel};
