//! Standardnamen für Entities ohne expliziten Namen.

/// Name der ersten Etage eines Projekts.
pub const GROUND_FLOOR: &str = "Ground Floor";
/// Name des Start-Projekts.
pub const BOOTSTRAP_PROJECT: &str = "New Project";

/// `"<base> <n>"` mit kleinstem freien n ≥ 1 unter den Geschwistern.
pub(super) fn numbered(base: &str, siblings: &[&str]) -> String {
    (1..)
        .map(|n| format!("{base} {n}"))
        .find(|candidate| !siblings.contains(&candidate.as_str()))
        .unwrap_or_else(|| base.to_string())
}

/// Etagen: erste heißt "Ground Floor", weitere "<Anzahl> Floor".
pub(super) fn floor(siblings: &[&str]) -> String {
    if siblings.is_empty() {
        return GROUND_FLOOR.to_string();
    }
    (siblings.len()..)
        .map(|n| format!("{n} Floor"))
        .find(|candidate| !siblings.contains(&candidate.as_str()))
        .unwrap_or_else(|| GROUND_FLOOR.to_string())
}

/// Übernimmt einen nicht-leeren Namen getrimmt, sonst `None`.
pub(super) fn explicit(name: Option<&str>) -> Option<String> {
    name.map(str::trim)
        .filter(|n| !n.is_empty())
        .map(str::to_string)
}
