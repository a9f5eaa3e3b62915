//! Offline preview: renders the page from local dataset files, in every
//! enabled language, without touching the network.
//!
//! Usage: `preview [data-dir]` (defaults to `data/`).

use anyhow::{Context, Result};
use sprint_plan_board::controller::PageController;
use sprint_plan_board::dataset::Dataset;
use sprint_plan_board::i18n::Language;
use sprint_plan_board::render;
use sprint_plan_board::store::DataStore;
use std::path::PathBuf;
use tracing::info;

fn main() -> Result<()> {
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("sprint_plan_board=info".parse()?),
        )
        .init();

    let data_dir = std::env::args()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("data"));

    info!("Loading datasets from {}", data_dir.display());

    let mut store = DataStore::new();
    for language in Language::enabled() {
        let path = data_dir.join(format!("{}.json", language.code()));
        let dataset = Dataset::load(&path)
            .with_context(|| format!("failed to load {}", path.display()))?;
        store.insert(language, dataset);
    }

    let mut controller = PageController::new(
        store,
        Language::canonical(),
        render::standard_surface(),
    );
    controller.initialize();

    for language in Language::enabled() {
        controller.switch_to(language);
        println!("================ {} ================", language.native_name());
        println!("{}", controller.surface().render_to_string());
    }

    Ok(())
}
