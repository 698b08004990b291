// ABOUTME: Tauri commands bound to the embedded console frontend.
// ABOUTME: Thin wrappers over ConsoleApp reading the live process environment.

use nfc_console_config::{ConsoleApp, ProcessEnv};
use tauri::State;

use crate::build_info::EMBEDDED_APP_KEY;

/// Managed state behind the console commands.
pub struct ConsoleState {
    pub app: ConsoleApp<ProcessEnv>,
}

impl ConsoleState {
    pub fn new() -> Self {
        Self {
            app: ConsoleApp::new(ProcessEnv, EMBEDDED_APP_KEY),
        }
    }
}

impl Default for ConsoleState {
    fn default() -> Self {
        Self::new()
    }
}

#[tauri::command]
pub fn greet(state: State<'_, ConsoleState>, name: &str) -> String {
    state.app.greet(name)
}

/// X-App-Key for API requests. Empty when neither env nor build provides one.
#[tauri::command]
pub fn get_embedded_app_key(state: State<'_, ConsoleState>) -> String {
    state.app.embedded_app_key()
}

/// Dev flag: skip host license enforcement in the frontend.
#[tauri::command]
pub fn get_ignore_host_license(state: State<'_, ConsoleState>) -> bool {
    state.app.ignore_host_license()
}
