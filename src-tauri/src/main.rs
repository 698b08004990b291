// ABOUTME: Entry point for the taglme console Tauri application.
// ABOUTME: Runs the desktop shell and reports startup failure on stderr.

// Prevents additional console window on Windows in release, DO NOT REMOVE!!
#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

fn main() {
    if let Err(e) = nfc_console_lib::run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
