// ABOUTME: The methods the embedded frontend calls through the shell.
// ABOUTME: Stateless queries over an injected environment and build-time app key.

use crate::env::EnvSource;
use crate::resolve::{APP_KEY, IGNORE_HOST_LICENSE, Source};

pub struct ConsoleApp<E> {
    env: E,
    embedded_app_key: String,
}

impl<E: EnvSource> ConsoleApp<E> {
    /// `embedded_app_key` is the compiled-in key, used only when no env override is set.
    pub fn new(env: E, embedded_app_key: impl Into<String>) -> Self {
        Self {
            env,
            embedded_app_key: embedded_app_key.into(),
        }
    }

    pub fn greet(&self, name: &str) -> String {
        format!("Hello {}, It's show time!", name)
    }

    /// X-App-Key for API requests.
    ///
    /// Priority: `NFC_CONSOLE_X_APP_KEY` > `X_APP_KEY` > build-time key.
    pub fn embedded_app_key(&self) -> String {
        APP_KEY.resolve(&self.env, &self.embedded_app_key)
    }

    /// Where [`Self::embedded_app_key`] would currently come from.
    pub fn app_key_source(&self) -> Source {
        APP_KEY
            .resolve_with_source(&self.env, &self.embedded_app_key)
            .source
    }

    pub fn ignore_host_license(&self) -> bool {
        IGNORE_HOST_LICENSE.resolve(&self.env)
    }
}
