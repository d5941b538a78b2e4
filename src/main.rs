//! Traffic Grid launcher
//!
//! Run with: cargo run --features native               (dashboard window)
//!           cargo run --features cli                  (map description as JSON)
//!           cargo run --features native -- --headless

#[cfg(not(target_arch = "wasm32"))]
fn main() -> std::process::ExitCode {
    use clap::Parser;
    use tracing::error;
    use traffic_grid::cli::Cli;

    let cli = Cli::parse();
    traffic_grid::logging::init_logging();

    match run(cli) {
        Ok(()) => std::process::ExitCode::SUCCESS,
        Err(e) => {
            error!(error = %e, "traffic-grid failed");
            std::process::ExitCode::FAILURE
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn run(cli: traffic_grid::cli::Cli) -> traffic_grid::Result<()> {
    use tracing::info;
    use traffic_grid::config::Settings;
    use traffic_grid::core::{render_rng, Deck};
    use traffic_grid::page::Page;

    let settings = Settings::load_from(cli.config)?;
    info!(
        center_lat = settings.map_center_lat,
        center_lon = settings.map_center_lon,
        zoom = settings.initial_zoom,
        seeded = settings.seed.is_some(),
        "Settings loaded"
    );

    // Page configuration runs before anything is rendered
    let page = Page::configure(&settings);

    let mut rng = render_rng(settings.seed);
    let deck = Deck::traffic_grid(&settings, &mut rng)?;

    let headless = cli.headless;

    #[cfg(feature = "native")]
    if !headless {
        info!(title = %page.config().title, "Opening dashboard window");
        return traffic_grid::app::run_native(page, deck);
    }

    info!(title = %page.config().title, headless, "Writing map description to stdout");
    println!("{}", deck.to_json()?);
    Ok(())
}

#[cfg(target_arch = "wasm32")]
fn main() {}
