mod app;
mod catalog;
mod radius;
mod survey;
mod util;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use app::Screen;

#[derive(Debug, Parser)]
#[command(author, version, about)]
struct Args {
    #[arg(long, value_enum, default_value_t = Screen::Home)]
    screen: Screen,
}

fn main() -> eframe::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(false)
        .init();

    let args = Args::parse();
    tracing::info!(screen = ?args.screen, "starting Conexión Social");

    let options = eframe::NativeOptions {
        viewport: eframe::egui::ViewportBuilder::default().with_inner_size([1100.0, 760.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Conexión Social",
        options,
        Box::new(move |cc| Ok(Box::new(app::ConexionApp::new(cc, args.screen)))),
    )
}
