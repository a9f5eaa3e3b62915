use anyhow::Result;
use sprint_plan_board::config::Config;
use sprint_plan_board::controller::PageController;
use sprint_plan_board::fetch;
use sprint_plan_board::i18n::{DatasetValidator, Language, ResolutionMetrics};
use sprint_plan_board::render;
use tracing::{debug, info, warn};

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file (ignored in production)
    let _ = dotenvy::dotenv();

    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("sprint_plan_board=info".parse()?),
        )
        .init();

    info!("Starting sprint plan board render job");

    // Load configuration from environment
    let config = Config::from_env()?;
    let default_language = Language::from_code(&config.default_language)?;

    // Step 1: Fetch both datasets (concurrently; a failure leaves the store
    // empty and the page degrades section by section)
    let store = fetch::load_datasets(&config).await;

    // Step 2: Check the translated datasets against the canonical one
    let canonical = Language::canonical();
    if let Some(canonical_dataset) = store.get(canonical) {
        for language in Language::enabled() {
            if language == canonical {
                continue;
            }
            let Some(dataset) = store.get(language) else {
                continue;
            };
            let report =
                DatasetValidator::validate(canonical_dataset.root(), dataset.root());
            for error in &report.errors {
                warn!("[{}] {}", language.code(), error);
            }
            for warning in &report.warnings {
                debug!("[{}] {}", language.code(), warning);
            }
            if report.is_clean() {
                info!("✓ {} dataset matches the canonical shape", language.code());
            }
        }
    }

    // Step 3: Render the page onto an in-memory surface
    info!("Rendering page in '{}'", default_language.code());
    let mut controller =
        PageController::new(store, default_language, render::standard_surface());
    controller.initialize();

    println!("{}", controller.surface().render_to_string());
    println!("Generated at {}", chrono::Utc::now().format("%Y-%m-%d %H:%M:%S UTC"));

    let report = ResolutionMetrics::global().report();
    debug!(
        "i18n resolution: {} hits, {} misses ({:.1}% hit rate), {} fallbacks",
        report.hits, report.misses, report.hit_rate, report.fallbacks
    );

    info!("Render complete");
    Ok(())
}
