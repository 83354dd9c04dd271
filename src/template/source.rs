//! Bezug von Template-Dokumenten aus einem Speicher.
//!
//! Der Kern liest Templates nie selbst ein; ein `TemplateSource` liefert den
//! Rohtext, der anschließend als Intent in den Controller gelangt.

use super::TemplateError;
use std::fs;
use std::path::{Path, PathBuf};

/// Speicher für benannte Template-Dokumente.
pub trait TemplateSource {
    /// Namen aller verfügbaren Templates (sortiert).
    fn list(&self) -> Result<Vec<String>, TemplateError>;

    /// Rohtext eines Templates.
    fn fetch(&self, name: &str) -> Result<String, TemplateError>;
}

/// Templates als `*.json`-Dateien in einem Verzeichnis.
#[derive(Debug, Clone)]
pub struct DirectorySource {
    root: PathBuf,
}

impl DirectorySource {
    /// Erstellt eine Quelle für das gegebene Verzeichnis.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Verzeichnis der Quelle
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Bildet einen Namen auf eine Datei im Verzeichnis ab.
    ///
    /// Pfadanteile werden verworfen, nur der Dateiname zählt.
    fn resolve(&self, name: &str) -> Option<PathBuf> {
        let file_name = Path::new(name.trim()).file_name()?;
        Some(self.root.join(file_name))
    }
}

impl TemplateSource for DirectorySource {
    fn list(&self) -> Result<Vec<String>, TemplateError> {
        let entries = fs::read_dir(&self.root).map_err(|source| TemplateError::Io {
            path: self.root.clone(),
            source,
        })?;

        let mut names: Vec<String> = entries
            .filter_map(|entry| entry.ok())
            .map(|entry| entry.path())
            .filter(|path| path.is_file())
            .filter(|path| path.extension().is_some_and(|ext| ext == "json"))
            .filter_map(|path| path.file_name()?.to_str().map(str::to_string))
            .collect();
        names.sort();
        Ok(names)
    }

    fn fetch(&self, name: &str) -> Result<String, TemplateError> {
        let Some(path) = self.resolve(name) else {
            log::warn!("Ungültiger Template-Name: '{}'", name);
            return Err(TemplateError::NotFound(name.to_string()));
        };
        if !path.is_file() {
            log::warn!("Template nicht gefunden: {:?}", path);
            return Err(TemplateError::NotFound(name.to_string()));
        }
        fs::read_to_string(&path).map_err(|source| TemplateError::Io { path, source })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fixture_dir(name: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!("cabinet_designer_{name}"));
        let _ = fs::remove_dir_all(&dir);
        fs::create_dir_all(&dir).expect("Testverzeichnis sollte anlegbar sein");
        dir
    }

    #[test]
    fn lists_only_json_files_sorted() {
        let dir = fixture_dir("list");
        fs::write(dir.join("b.json"), "{}").expect("Schreiben erwartet");
        fs::write(dir.join("a.json"), "{}").expect("Schreiben erwartet");
        fs::write(dir.join("notes.txt"), "x").expect("Schreiben erwartet");

        let names = DirectorySource::new(&dir).list().expect("Liste erwartet");
        assert_eq!(names, vec!["a.json", "b.json"]);

        let _ = fs::remove_dir_all(&dir);
    }

    #[test]
    fn fetch_strips_path_components() {
        let dir = fixture_dir("fetch");
        fs::write(dir.join("kitchen.json"), r#"{"cabinets":[]}"#).expect("Schreiben erwartet");
        let source = DirectorySource::new(&dir);

        let text = source
            .fetch("../../etc/kitchen.json")
            .expect("Template sollte gefunden werden");
        assert_eq!(text, r#"{"cabinets":[]}"#);

        assert!(matches!(
            source.fetch("missing.json"),
            Err(TemplateError::NotFound(_))
        ));
        assert!(matches!(source.fetch(".."), Err(TemplateError::NotFound(_))));

        let _ = fs::remove_dir_all(&dir);
    }

    #[test]
    fn missing_directory_is_an_io_error() {
        let source = DirectorySource::new(std::env::temp_dir().join("cabinet_designer_absent"));
        assert!(matches!(source.list(), Err(TemplateError::Io { .. })));
    }
}
