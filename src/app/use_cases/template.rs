//! Use-Case-Funktionen für Templates.
//! Laden, Fehlerrückmeldung und Export laufen hier zusammen.

use crate::app::use_cases::selection::purge_removed;
use crate::app::{AppIntent, AppState};
use crate::template::{
    export_template, load_from_template, parse_template_document, TemplateSource,
};
use anyhow::Context;

/// Parst ein Template und materialisiert es auf der aktiven Etage.
///
/// Ein nicht lesbares Dokument ist ein Fehler; fehlerhafte Einträge werden
/// übersprungen und im Bericht vermerkt.
pub fn apply_template(state: &mut AppState, name: &str, json: &str) -> anyhow::Result<()> {
    state.ui.last_template_name = Some(name.to_string());

    let entries = match parse_template_document(json) {
        Ok(entries) => entries,
        Err(e) => {
            state.ui.status_message = Some(format!("Template '{}' nicht lesbar: {}", name, e));
            state.ui.last_template_report = None;
            return Err(e).with_context(|| format!("Template '{}' nicht lesbar", name));
        }
    };

    let floor = state
        .view
        .active_floor
        .clone()
        .filter(|id| state.store.floor(id).is_some());
    let report = load_from_template(&mut state.store, floor.as_ref(), entries);

    // ersetzte Schränke können selektierte Platten mitgenommen haben
    purge_removed(state);

    for skipped in &report.skipped {
        log::warn!(
            "Template '{}': Eintrag {} übersprungen: {}",
            name,
            skipped.index,
            skipped.error
        );
    }
    let msg = format!(
        "Template '{}': {} Schränke erzeugt, {} übersprungen",
        name,
        report.created.len(),
        report.skipped.len()
    );
    log::info!("{}", msg);
    state.ui.status_message = Some(msg);

    if let Some(last) = report.created.last() {
        state.view.active_cabinet = Some(last.clone());
    }
    state.ui.last_template_report = Some(report);
    Ok(())
}

/// Meldet einen fehlgeschlagenen Template-Abruf. Der Store bleibt unverändert.
pub fn report_failure(state: &mut AppState, name: &str, message: &str) {
    let msg = format!("Template '{}' nicht geladen: {}", name, message);
    log::error!("{}", msg);
    state.ui.last_template_name = Some(name.to_string());
    state.ui.last_template_report = None;
    state.ui.status_message = Some(msg);
}

/// Schreibt alle parametrischen Schränke als Template-Datei.
pub fn export_to_file(state: &mut AppState, path: &str) -> anyhow::Result<()> {
    let document = export_template(&state.store);
    let json = document.to_json()?;
    std::fs::write(path, json)
        .with_context(|| format!("Template-Export nach '{}' fehlgeschlagen", path))?;

    let msg = format!(
        "{} Schränke nach '{}' exportiert",
        document.cabinets.len(),
        path
    );
    log::info!("{}", msg);
    state.ui.status_message = Some(msg);
    Ok(())
}

/// Holt ein Template aus der Quelle und verpackt das Ergebnis als Intent.
///
/// Der Abruf selbst verändert keinen Zustand; erst der Intent läuft
/// durch den Controller.
pub fn fetch_intent(source: &dyn TemplateSource, name: &str) -> AppIntent {
    match source.fetch(name) {
        Ok(json) => AppIntent::TemplateLoaded {
            name: name.to_string(),
            json,
        },
        Err(e) => AppIntent::TemplateFetchFailed {
            name: name.to_string(),
            message: e.to_string(),
        },
    }
}
