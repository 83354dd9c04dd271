use crate::template::TemplateLoadReport;

/// UI-bezogener Anwendungszustand (Rückmeldungen an den Host)
#[derive(Debug, Default)]
pub struct UiState {
    /// Temporäre Statusnachricht (z.B. Template-Ergebnis)
    pub status_message: Option<String>,
    /// Name des zuletzt angewendeten Templates
    pub last_template_name: Option<String>,
    /// Ergebnis des zuletzt angewendeten Templates
    pub last_template_report: Option<TemplateLoadReport>,
}

impl UiState {
    /// Erstellt einen leeren UI-Zustand.
    pub fn new() -> Self {
        Self::default()
    }
}
