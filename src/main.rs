mod app;

use app::FlashyApp;
use flashy_app::config::SETTINGS_FILE;
use flashy_app::{Config, CsvDeckStore, Trainer};
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::path::Path;
use std::time::Instant;

fn main() -> eframe::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = Config::load_or_default(Path::new(SETTINGS_FILE));
    let store = CsvDeckStore::from_config(&config);

    let trainer = match Trainer::start(
        store,
        config.flip_delay(),
        StdRng::from_entropy(),
        Instant::now(),
    ) {
        Ok(trainer) => trainer,
        Err(e) => {
            log::error!("{e}");
            std::process::exit(1);
        }
    };

    log::info!(
        "Loaded {} words ({:?})",
        trainer.remaining(),
        trainer.source()
    );

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("Flashy")
            .with_inner_size([940.0, 860.0]),
        ..Default::default()
    };
    eframe::run_native(
        "Flashy",
        options,
        Box::new(|_cc| Ok(Box::new(FlashyApp::new(trainer, config)))),
    )
}
