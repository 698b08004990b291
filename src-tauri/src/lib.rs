// ABOUTME: Core library for the taglme console Tauri application.
// ABOUTME: Loads .env, registers the console commands and runs the window.

use log::{debug, info};
use nfc_console_config::{DotenvOutcome, load_dotenv};
use tauri_plugin_log::{Target, TargetKind};

pub mod commands {
    pub mod console;
}

mod build_info;
mod error;

pub use error::AppError;

use commands::console::ConsoleState;

pub fn run() -> Result<(), AppError> {
    // `cargo tauri dev` does not load .env on its own. Load it before anything
    // reads the environment; the log plugin is not up yet, so report in setup.
    let dotenv = load_dotenv();

    tauri::Builder::default()
        .plugin(
            tauri_plugin_log::Builder::new()
                .targets([
                    Target::new(TargetKind::Stdout),
                    Target::new(TargetKind::LogDir { file_name: None }),
                    Target::new(TargetKind::Webview),
                ])
                .max_file_size(5_000_000) // 5 MB per log file
                .rotation_strategy(tauri_plugin_log::RotationStrategy::KeepOne)
                .level(if cfg!(debug_assertions) {
                    log::LevelFilter::Debug
                } else {
                    log::LevelFilter::Info
                })
                .build(),
        )
        .manage(ConsoleState::new())
        .setup(move |app| {
            use tauri::Manager;

            match &dotenv {
                DotenvOutcome::Loaded(path) => {
                    info!("[Startup] Loaded environment from {}", path.display())
                }
                DotenvOutcome::NotFound => debug!("[Startup] No .env file"),
                DotenvOutcome::Failed(e) => debug!("[Startup] Ignored .env: {}", e),
            }

            let state = app.state::<ConsoleState>();
            info!("[Startup] X-App-Key source: {}", state.app.app_key_source());
            if state.app.ignore_host_license() {
                info!("[Startup] Host license checks disabled by environment");
            }

            Ok(())
        })
        .invoke_handler(tauri::generate_handler![
            commands::console::greet,
            commands::console::get_embedded_app_key,
            commands::console::get_ignore_host_license,
        ])
        .run(tauri::generate_context!())?;

    Ok(())
}
