//! Handler für Template-Import und -Export.

use crate::app::use_cases;
use crate::app::AppState;

/// Wendet ein geholtes Template an und propagiert Parse-Fehler.
pub fn apply(state: &mut AppState, name: &str, json: &str) -> anyhow::Result<()> {
    use_cases::template::apply_template(state, name, json)
}

/// Meldet einen fehlgeschlagenen Abruf.
pub fn report_failure(state: &mut AppState, name: &str, message: &str) {
    use_cases::template::report_failure(state, name, message);
}

/// Exportiert alle parametrischen Schränke.
pub fn export(state: &mut AppState, path: &str) -> anyhow::Result<()> {
    use_cases::template::export_to_file(state, path)
}
