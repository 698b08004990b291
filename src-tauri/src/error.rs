// ABOUTME: Error types for the desktop shell.
// ABOUTME: Only startup can fail; bound commands always answer with defaults.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("failed to run application: {0}")]
    Tauri(#[from] tauri::Error),
}
