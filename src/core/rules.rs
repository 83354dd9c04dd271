//! Regelwerk: leitet aus Korpus-Maßen die einzelnen Platten ab.
//!
//! Reine Funktion ohne IDs, Handles oder Seiteneffekte. Lokaler Ursprung ist
//! die hintere untere Ecke: Breite entlang x, Höhe entlang y, Tiefe entlang z.

use glam::Vec3;
use serde::{Deserialize, Serialize};

/// Bauart des Oberbodens.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", from = "serde_json::Value")]
pub enum TopStyle {
    /// Oberboden zwischen den Seiten (Länge = Breite − 2·Stärke)
    #[default]
    BetweenSides,
    /// Oberboden über die volle Breite
    FlushWithSides,
}

impl TopStyle {
    /// Liest einen Optionswert; Unbekanntes ergibt den Standard.
    pub fn from_key(key: &str) -> Self {
        match key.trim() {
            "flushWithSides" => TopStyle::FlushWithSides,
            "betweenSides" => TopStyle::BetweenSides,
            other => {
                log::debug!("Unbekannter topStyle '{}', verwende betweenSides", other);
                TopStyle::default()
            }
        }
    }
}

impl From<serde_json::Value> for TopStyle {
    fn from(value: serde_json::Value) -> Self {
        value.as_str().map(Self::from_key).unwrap_or_default()
    }
}

/// Befestigungsart der Rückwand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", from = "serde_json::Value")]
pub enum BackType {
    /// Aufgeschraubt, volle Breite × Höhe an der Rückseite
    #[default]
    Screwed,
    /// In Nut, allseitig um eine Stärke eingerückt
    Groove,
}

impl BackType {
    /// Liest einen Optionswert; Unbekanntes ergibt den Standard.
    pub fn from_key(key: &str) -> Self {
        match key.trim() {
            "groove" => BackType::Groove,
            "screwed" => BackType::Screwed,
            other => {
                log::debug!("Unbekannter backType '{}', verwende screwed", other);
                BackType::default()
            }
        }
    }
}

impl From<serde_json::Value> for BackType {
    fn from(value: serde_json::Value) -> Self {
        value.as_str().map(Self::from_key).unwrap_or_default()
    }
}

/// Geschlossene Konstruktionsoptionen. Fehlende Schlüssel ergeben Standards,
/// unbekannte Schlüssel werden ignoriert.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ConstructionOptions {
    /// Bauart des Oberbodens
    pub top_style: TopStyle,
    /// Befestigungsart der Rückwand
    pub back_type: BackType,
}

/// Geometriebeschreibung einer Platte vor ID-/Handle-Vergabe.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PanelSpec {
    pub name: String,
    pub length: f32,
    pub width: f32,
    pub thickness: f32,
    pub position: Vec3,
    /// Euler-Winkel in Grad (rx, ry, rz)
    pub rotation: Vec3,
}

impl PanelSpec {
    /// Erstellt eine Platte ohne Verschiebung und Drehung.
    pub fn new(name: impl Into<String>, length: f32, width: f32, thickness: f32) -> Self {
        Self {
            name: name.into(),
            length,
            width,
            thickness,
            position: Vec3::ZERO,
            rotation: Vec3::ZERO,
        }
    }

    /// Setzt die Position (Builder).
    pub fn at(mut self, position: Vec3) -> Self {
        self.position = position;
        self
    }

    /// Setzt die Rotation in Grad (Builder).
    pub fn rotated(mut self, rotation: Vec3) -> Self {
        self.rotation = rotation;
        self
    }
}

/// Stehende Seiten: Stärke-Achse entlang x.
const SIDE_ROTATION: Vec3 = Vec3::new(90.0, 90.0, 0.0);
/// Liegende Böden.
const FLAT_ROTATION: Vec3 = Vec3::new(90.0, 0.0, 0.0);

/// Leitet die Platten eines Korpus ab.
///
/// Reihenfolge ist fest: Linke Seite, Rechte Seite, Unterboden, Oberboden, Rückwand.
pub fn derive_panels(
    width: f32,
    height: f32,
    depth: f32,
    thickness: f32,
    options: &ConstructionOptions,
) -> Vec<PanelSpec> {
    let (w, h, d, t) = (width, height, depth, thickness);
    // Seiten und Böden sitzen eine Stärke vor der Rückwandebene
    let z_center = d / 2.0 + t;

    let mut panels = Vec::with_capacity(5);

    panels.push(
        PanelSpec::new("Left Side", h, d, t)
            .at(Vec3::new(t / 2.0, h / 2.0, z_center))
            .rotated(SIDE_ROTATION),
    );
    panels.push(
        PanelSpec::new("Right Side", h, d, t)
            .at(Vec3::new(w - t / 2.0, h / 2.0, z_center))
            .rotated(SIDE_ROTATION),
    );
    panels.push(
        PanelSpec::new("Bottom", w - 2.0 * t, d, t)
            .at(Vec3::new(w / 2.0, t / 2.0, z_center))
            .rotated(FLAT_ROTATION),
    );

    let top_length = match options.top_style {
        TopStyle::BetweenSides => w - 2.0 * t,
        TopStyle::FlushWithSides => w,
    };
    panels.push(
        PanelSpec::new("Top", top_length, d, t)
            .at(Vec3::new(w / 2.0, h - t / 2.0, z_center))
            .rotated(FLAT_ROTATION),
    );

    let back = match options.back_type {
        BackType::Screwed => PanelSpec::new("Back", w, h, t).at(Vec3::new(w / 2.0, h / 2.0, t / 2.0)),
        BackType::Groove => PanelSpec::new("Back", w - 2.0 * t, h - 2.0 * t, t)
            .at(Vec3::new(w / 2.0, h / 2.0, t)),
    };
    panels.push(back);

    panels
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    const NAMES: [&str; 5] = ["Left Side", "Right Side", "Bottom", "Top", "Back"];

    #[test]
    fn derives_five_panels_in_fixed_order() {
        let panels = derive_panels(800.0, 720.0, 560.0, 18.0, &ConstructionOptions::default());
        let names: Vec<&str> = panels.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, NAMES);
    }

    #[test]
    fn all_dimensions_positive_for_valid_inputs() {
        for &(w, h, d, t) in &[
            (800.0, 720.0, 560.0, 18.0),
            (40.0, 40.0, 40.0, 19.0),
            (300.0, 2000.0, 350.0, 25.0),
            (1.0, 1.0, 1.0, 0.4),
        ] {
            for options in [
                ConstructionOptions::default(),
                ConstructionOptions {
                    top_style: TopStyle::FlushWithSides,
                    back_type: BackType::Groove,
                },
            ] {
                let panels = derive_panels(w, h, d, t, &options);
                assert_eq!(panels.len(), 5);
                for panel in &panels {
                    assert!(panel.length > 0.0, "{} length", panel.name);
                    assert!(panel.width > 0.0, "{} width", panel.name);
                    assert!(panel.thickness > 0.0, "{} thickness", panel.name);
                }
            }
        }
    }

    #[test]
    fn top_length_follows_top_style() {
        let between = derive_panels(
            800.0,
            720.0,
            560.0,
            18.0,
            &ConstructionOptions {
                top_style: TopStyle::BetweenSides,
                ..Default::default()
            },
        );
        assert_relative_eq!(between[3].length, 764.0);

        let flush = derive_panels(
            800.0,
            720.0,
            560.0,
            18.0,
            &ConstructionOptions {
                top_style: TopStyle::FlushWithSides,
                ..Default::default()
            },
        );
        assert_relative_eq!(flush[3].length, 800.0);
    }

    #[test]
    fn groove_back_is_inset_and_recessed() {
        let options = ConstructionOptions {
            back_type: BackType::Groove,
            ..Default::default()
        };
        let back = &derive_panels(800.0, 720.0, 560.0, 18.0, &options)[4];
        assert_relative_eq!(back.length, 764.0);
        assert_relative_eq!(back.width, 684.0);
        assert_relative_eq!(back.position.z, 18.0);
    }

    #[test]
    fn screwed_back_spans_full_front() {
        let back = &derive_panels(800.0, 720.0, 560.0, 18.0, &ConstructionOptions::default())[4];
        assert_relative_eq!(back.length, 800.0);
        assert_relative_eq!(back.width, 720.0);
        assert_relative_eq!(back.position.z, 9.0);
        assert_eq!(back.rotation, Vec3::ZERO);
    }

    #[test]
    fn sides_and_floors_are_placed_at_the_edges() {
        let panels = derive_panels(800.0, 720.0, 560.0, 18.0, &ConstructionOptions::default());
        assert_eq!(panels[0].position, Vec3::new(9.0, 360.0, 298.0));
        assert_eq!(panels[1].position, Vec3::new(791.0, 360.0, 298.0));
        assert_eq!(panels[2].position, Vec3::new(400.0, 9.0, 298.0));
        assert_eq!(panels[3].position, Vec3::new(400.0, 711.0, 298.0));
        assert_eq!(panels[0].rotation, SIDE_ROTATION);
        assert_eq!(panels[2].rotation, FLAT_ROTATION);
    }

    #[test]
    fn unknown_option_values_fall_back_to_defaults() {
        let options: ConstructionOptions = serde_json::from_str(
            r#"{ "topStyle": "diagonal", "backType": 17, "rebutted": "rebutted" }"#,
        )
        .expect("Optionen sollten nachsichtig geparst werden");
        assert_eq!(options, ConstructionOptions::default());
    }

    #[test]
    fn known_option_values_are_parsed() {
        let options: ConstructionOptions =
            serde_json::from_str(r#"{ "topStyle": "flushWithSides", "backType": "groove" }"#)
                .expect("Optionen erwartet");
        assert_eq!(options.top_style, TopStyle::FlushWithSides);
        assert_eq!(options.back_type, BackType::Groove);
    }
}
