//! Cabinet Designer (headless).
//!
//! Lädt Korpus-Templates aus einem Verzeichnis in ein Start-Projekt und gibt
//! den entstandenen Szenengraphen als Gliederung aus.
//!
//! Aufruf: `cabinet-designer [TEMPLATE_DIR] [TEMPLATE_NAME...]`

use cabinet_designer::app::use_cases::template::fetch_intent;
use cabinet_designer::{
    AppController, AppIntent, AppState, DesignerOptions, DirectorySource, SceneGraph,
    TemplateSource,
};
use std::cell::RefCell;
use std::rc::Rc;

fn main() -> anyhow::Result<()> {
    AppRunner::run()
}

struct AppRunner;

impl AppRunner {
    fn run() -> anyhow::Result<()> {
        // Logger initialisieren
        env_logger::Builder::from_default_env()
            .filter_level(log::LevelFilter::Info)
            .init();

        log::info!("Cabinet Designer v{} startet...", env!("CARGO_PKG_VERSION"));

        // Optionen aus TOML laden (oder Standardwerte)
        let config_path = DesignerOptions::config_path();
        let options = DesignerOptions::load_from_file(&config_path);

        let mut args = std::env::args().skip(1);
        let template_dir = args.next().unwrap_or_else(|| options.template_dir.clone());
        let requested: Vec<String> = args.collect();

        let graph = Rc::new(RefCell::new(SceneGraph::with_palette(options.palette())));
        let mut state = AppState::with_adapter(Box::new(graph.clone()), options);
        let mut controller = AppController::new();

        controller.handle_intent(&mut state, AppIntent::BootstrapRequested)?;

        let source = DirectorySource::new(&template_dir);
        let names = if requested.is_empty() {
            source.list().unwrap_or_else(|e| {
                log::warn!("Template-Verzeichnis nicht lesbar: {}", e);
                Vec::new()
            })
        } else {
            requested
        };

        for name in &names {
            let intent = fetch_intent(&source, name);
            if let Err(e) = controller.handle_intent(&mut state, intent) {
                log::error!("{:#}", e);
            }
            if let Some(msg) = &state.ui.status_message {
                println!("{}", msg);
            }
        }

        print!("{}", graph.borrow().render_outline());
        println!(
            "{} Schränke, {} Platten, {} Visuals",
            state.cabinet_count(),
            state.panel_count(),
            graph.borrow().live_count()
        );
        Ok(())
    }
}
