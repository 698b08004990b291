// ABOUTME: Configuration resolution and bound methods for the NFC console shell.
// ABOUTME: Pure over an injectable environment source so it can be tested without a webview.

pub mod dotenv;
pub mod env;
pub mod facade;
pub mod resolve;

pub use dotenv::{DotenvOutcome, load_dotenv, load_dotenv_from};
pub use env::{EnvSource, ProcessEnv};
pub use facade::ConsoleApp;
pub use resolve::{
    APP_KEY, BoolSetting, IGNORE_HOST_LICENSE, Resolved, Setting, Source, TRUTHY_TOKENS,
    is_truthy, resolve_bool, resolve_string, resolve_string_with_source,
};
