// ABOUTME: Values fixed at build time.
// ABOUTME: The fallback X-App-Key is baked in from NFC_CONSOLE_EMBEDDED_APP_KEY when compiling.

/// Compiled-in X-App-Key, empty when the build did not provide one.
///
/// ```text
/// NFC_CONSOLE_EMBEDDED_APP_KEY=YOUR_KEY cargo tauri build
/// ```
pub const EMBEDDED_APP_KEY: &str = match option_env!("NFC_CONSOLE_EMBEDDED_APP_KEY") {
    Some(key) => key,
    None => "",
};
