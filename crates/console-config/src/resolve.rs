// ABOUTME: Priority-ordered resolution of string and boolean settings.
// ABOUTME: First non-blank candidate wins for strings; first truthy alias wins for booleans.

use std::fmt;

use crate::env::EnvSource;

/// Values accepted as `true` after trimming and lowercasing.
pub const TRUTHY_TOKENS: [&str; 5] = ["1", "true", "yes", "y", "on"];

/// X-App-Key sent by the frontend. Env overrides beat the compiled-in key.
pub const APP_KEY: Setting = Setting {
    name: "app_key",
    candidates: &["NFC_CONSOLE_X_APP_KEY", "X_APP_KEY"],
};

/// Dev flag letting the frontend skip host license enforcement.
pub const IGNORE_HOST_LICENSE: BoolSetting = BoolSetting {
    name: "ignore_host_license",
    aliases: &[
        "NFC_CONSOLE_IGNORE_HOST_LICENSE",
        "TAGLME_NFC_CONSOLE_IGNORE_HOST_LICENSE",
    ],
};

/// A string setting: candidate variables in priority order, highest first.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Setting {
    pub name: &'static str,
    pub candidates: &'static [&'static str],
}

impl Setting {
    pub fn resolve<E: EnvSource + ?Sized>(&self, env: &E, fallback: &str) -> String {
        resolve_string(env, self.candidates, fallback)
    }

    pub fn resolve_with_source<E: EnvSource + ?Sized>(&self, env: &E, fallback: &str) -> Resolved {
        resolve_string_with_source(env, self.candidates, fallback)
    }
}

/// A boolean setting read from any of several alias variables.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoolSetting {
    pub name: &'static str,
    pub aliases: &'static [&'static str],
}

impl BoolSetting {
    pub fn resolve<E: EnvSource + ?Sized>(&self, env: &E) -> bool {
        resolve_bool(env, self.aliases)
    }
}

/// Where a resolved string came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Source {
    /// The named environment variable.
    Env(String),
    /// The non-blank fallback.
    Fallback,
    /// Nothing matched and the fallback was blank.
    Unset,
}

impl fmt::Display for Source {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Source::Env(name) => write!(f, "env {}", name),
            Source::Fallback => f.write_str("build-time fallback"),
            Source::Unset => f.write_str("unset"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolved {
    pub value: String,
    pub source: Source,
}

/// Returns the first candidate whose trimmed value is non-empty, otherwise the
/// trimmed fallback (which may be empty).
pub fn resolve_string<E: EnvSource + ?Sized>(env: &E, candidates: &[&str], fallback: &str) -> String {
    resolve_string_with_source(env, candidates, fallback).value
}

/// Same as [`resolve_string`], also reporting which source produced the value.
pub fn resolve_string_with_source<E: EnvSource + ?Sized>(
    env: &E,
    candidates: &[&str],
    fallback: &str,
) -> Resolved {
    for name in candidates {
        if let Some(raw) = env.var(name) {
            let value = raw.trim();
            if !value.is_empty() {
                return Resolved {
                    value: value.to_string(),
                    source: Source::Env((*name).to_string()),
                };
            }
        }
    }

    let value = fallback.trim();
    let source = if value.is_empty() {
        Source::Unset
    } else {
        Source::Fallback
    };
    Resolved {
        value: value.to_string(),
        source,
    }
}

/// True if any alias holds a truthy token. A present but non-truthy value does
/// not stop the scan; later aliases are still consulted.
pub fn resolve_bool<E: EnvSource + ?Sized>(env: &E, names: &[&str]) -> bool {
    names
        .iter()
        .filter_map(|name| env.var(name))
        .any(|raw| is_truthy(&raw))
}

pub fn is_truthy(value: &str) -> bool {
    let normalized = value.trim().to_lowercase();
    TRUTHY_TOKENS.contains(&normalized.as_str())
}
