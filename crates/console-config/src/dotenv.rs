// ABOUTME: Best-effort loading of a local .env file into the process environment.
// ABOUTME: Existing variables are never overwritten and failures are only logged.

use std::path::{Path, PathBuf};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DotenvOutcome {
    Loaded(PathBuf),
    NotFound,
    Failed(String),
}

/// Load `.env` from the current directory or the nearest ancestor that has one.
pub fn load_dotenv() -> DotenvOutcome {
    let outcome = match dotenvy::dotenv() {
        Ok(path) => DotenvOutcome::Loaded(path),
        Err(e) if e.not_found() => DotenvOutcome::NotFound,
        Err(e) => DotenvOutcome::Failed(e.to_string()),
    };
    log_outcome(&outcome);
    outcome
}

/// Load a specific dotenv file.
pub fn load_dotenv_from(path: impl AsRef<Path>) -> DotenvOutcome {
    let path = path.as_ref();
    let outcome = match dotenvy::from_path(path) {
        Ok(()) => DotenvOutcome::Loaded(path.to_path_buf()),
        Err(e) if e.not_found() => DotenvOutcome::NotFound,
        Err(e) => DotenvOutcome::Failed(e.to_string()),
    };
    log_outcome(&outcome);
    outcome
}

fn log_outcome(outcome: &DotenvOutcome) {
    match outcome {
        DotenvOutcome::Loaded(path) => log::debug!("[Config] Loaded {}", path.display()),
        DotenvOutcome::NotFound => log::debug!("[Config] No .env file found"),
        DotenvOutcome::Failed(e) => log::debug!("[Config] Ignoring unreadable .env: {}", e),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::env::{EnvSource, ProcessEnv};
    use std::io::Write;

    #[test]
    fn loads_variables_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "NFC_CONSOLE_DOTENV_TEST_KEY=\"from-file\"").unwrap();

        let outcome = load_dotenv_from(file.path());

        assert_eq!(outcome, DotenvOutcome::Loaded(file.path().to_path_buf()));
        assert_eq!(
            ProcessEnv.var("NFC_CONSOLE_DOTENV_TEST_KEY").as_deref(),
            Some("from-file")
        );
    }

    #[test]
    fn does_not_override_existing_variables() {
        let Ok(original) = std::env::var("PATH") else {
            return;
        };
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "PATH=/nowhere").unwrap();

        load_dotenv_from(file.path());

        assert_eq!(ProcessEnv.var("PATH"), Some(original));
    }

    #[test]
    fn missing_file_is_not_found() {
        let dir = tempfile::tempdir().unwrap();
        let outcome = load_dotenv_from(dir.path().join("missing.env"));
        assert_eq!(outcome, DotenvOutcome::NotFound);
    }
}
