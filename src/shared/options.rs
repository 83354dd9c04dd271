//! Zentrale Konfiguration für den Cabinet Designer.
//!
//! `DesignerOptions` enthält alle zur Laufzeit änderbaren Werte.
//! Die `const`-Werte bleiben als Fallback/Default erhalten.

use crate::core::{ConstructionOptions, HighlightPalette, ViewStyle};
use serde::{Deserialize, Serialize};

// ── Korpus ──────────────────────────────────────────────────────────

/// Standard-Schrankbreite in mm.
pub const DEFAULT_CABINET_WIDTH: f32 = 800.0;
/// Standard-Schrankhöhe in mm.
pub const DEFAULT_CABINET_HEIGHT: f32 = 720.0;
/// Standard-Schranktiefe in mm.
pub const DEFAULT_CABINET_DEPTH: f32 = 560.0;
/// Standard-Plattenstärke in mm.
pub const DEFAULT_PANEL_THICKNESS: f32 = 18.0;

// ── Farben ──────────────────────────────────────────────────────────

/// Farbe nicht selektierter Platten (RGB: Weiß).
pub const COLOR_UNSELECTED: u32 = 0xFFFFFF;
/// Farbe einzeln selektierter Platten (RGB: Hellblau).
pub const COLOR_SINGLE_SELECTED: u32 = 0x87CEFA;
/// Farbe gruppen-selektierter Platten (RGB: Hellgrün).
pub const COLOR_GROUP_SELECTED: u32 = 0x90EE90;

// ── Templates ───────────────────────────────────────────────────────

/// Standard-Verzeichnis für Template-Dokumente (relativ zum Arbeitsverzeichnis).
pub const TEMPLATE_DIR: &str = "json";

// ── Laufzeit-Optionen (serialisierbar) ─────────────────────────────

/// Alle zur Laufzeit änderbaren Designer-Optionen.
/// Wird als `cabinet_designer.toml` neben der Binary gespeichert.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DesignerOptions {
    // ── Korpus ──────────────────────────────────────────────────
    /// Breite neuer Schränke
    pub cabinet_width: f32,
    /// Höhe neuer Schränke
    pub cabinet_height: f32,
    /// Tiefe neuer Schränke
    pub cabinet_depth: f32,
    /// Plattenstärke neuer Schränke
    pub panel_thickness: f32,

    // ── Darstellung ─────────────────────────────────────────────
    /// Darstellungsart beim Start
    #[serde(default)]
    pub view_style: ViewStyle,
    /// Farbe nicht selektierter Platten
    pub color_unselected: u32,
    /// Farbe einzeln selektierter Platten
    pub color_single_selected: u32,
    /// Farbe gruppen-selektierter Platten
    pub color_group_selected: u32,

    // ── Templates ───────────────────────────────────────────────
    /// Verzeichnis der Template-Dokumente
    #[serde(default = "default_template_dir")]
    pub template_dir: String,

    /// Bauart neuer Schränke
    #[serde(default)]
    pub construction: ConstructionOptions,
}

impl Default for DesignerOptions {
    fn default() -> Self {
        Self {
            cabinet_width: DEFAULT_CABINET_WIDTH,
            cabinet_height: DEFAULT_CABINET_HEIGHT,
            cabinet_depth: DEFAULT_CABINET_DEPTH,
            panel_thickness: DEFAULT_PANEL_THICKNESS,

            view_style: ViewStyle::default(),
            color_unselected: COLOR_UNSELECTED,
            color_single_selected: COLOR_SINGLE_SELECTED,
            color_group_selected: COLOR_GROUP_SELECTED,

            template_dir: default_template_dir(),
            construction: ConstructionOptions::default(),
        }
    }
}

/// Serde-Default für `template_dir` (Abwärtskompatibilität).
fn default_template_dir() -> String {
    TEMPLATE_DIR.to_string()
}

impl DesignerOptions {
    /// Lädt Optionen aus einer TOML-Datei. Bei Fehler: Standardwerte.
    pub fn load_from_file(path: &std::path::Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(content) => match toml::from_str(&content) {
                Ok(opts) => {
                    log::info!("Optionen geladen aus: {}", path.display());
                    opts
                }
                Err(e) => {
                    log::warn!("Optionen-Datei fehlerhaft, verwende Standardwerte: {}", e);
                    Self::default()
                }
            },
            Err(_) => {
                log::info!("Keine Optionen-Datei gefunden, verwende Standardwerte");
                Self::default()
            }
        }
    }

    /// Speichert Optionen als TOML-Datei.
    pub fn save_to_file(&self, path: &std::path::Path) -> anyhow::Result<()> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        log::info!("Optionen gespeichert nach: {}", path.display());
        Ok(())
    }

    /// Ermittelt den Pfad zur Optionen-Datei neben der Binary.
    pub fn config_path() -> std::path::PathBuf {
        std::env::current_exe()
            .unwrap_or_else(|_| std::path::PathBuf::from("cabinet_designer"))
            .parent()
            .unwrap_or_else(|| std::path::Path::new("."))
            .join("cabinet_designer.toml")
    }

    /// Farbpalette für den Geometrie-Adapter.
    pub fn palette(&self) -> HighlightPalette {
        HighlightPalette {
            unselected: self.color_unselected,
            single: self.color_single_selected,
            group: self.color_group_selected,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::BackType;

    #[test]
    fn toml_round_trip_preserves_values() {
        let mut options = DesignerOptions::default();
        options.cabinet_width = 600.0;
        options.construction.back_type = BackType::Groove;
        options.view_style = ViewStyle::Solid;

        let text = toml::to_string_pretty(&options).expect("Serialisierung erwartet");
        let parsed: DesignerOptions = toml::from_str(&text).expect("Parsen erwartet");

        assert_eq!(parsed, options);
    }

    #[test]
    fn missing_optional_sections_use_defaults() {
        let parsed: DesignerOptions = toml::from_str(
            r#"
            cabinet_width = 900.0
            cabinet_height = 720.0
            cabinet_depth = 560.0
            panel_thickness = 19.0
            color_unselected = 16777215
            color_single_selected = 8900346
            color_group_selected = 9498256
            "#,
        )
        .expect("Parsen erwartet");

        assert_eq!(parsed.cabinet_width, 900.0);
        assert_eq!(parsed.construction, ConstructionOptions::default());
        assert_eq!(parsed.view_style, ViewStyle::Wireframe);
        assert_eq!(parsed.template_dir, TEMPLATE_DIR);
    }

    #[test]
    fn missing_file_falls_back_to_defaults() {
        let path = std::env::temp_dir().join("cabinet_designer_missing_options.toml");
        let _ = std::fs::remove_file(&path);
        assert_eq!(DesignerOptions::load_from_file(&path), DesignerOptions::default());
    }

    #[test]
    fn palette_uses_configured_colors() {
        let palette = DesignerOptions::default().palette();
        assert_eq!(palette, HighlightPalette::default());
    }
}
