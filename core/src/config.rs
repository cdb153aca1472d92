//! Client configuration.
//!
//! Explicit `JustCmsOptions` win; any field left unset (or empty) is looked up
//! in a `ConfigSource`. A client never exists without both a token and a
//! project id.

use std::collections::HashMap;

use serde::Deserialize;

use crate::endpoint::DEFAULT_BASE_URL;
use crate::error::ConfigError;

pub const TOKEN_KEY: &str = "JUST_CMS_TOKEN";
pub const PROJECT_KEY: &str = "JUST_CMS_PROJECT";

/// Explicit overrides. Unset fields fall back to a `ConfigSource`.
#[derive(Clone, Default, Deserialize, PartialEq, Eq)]
#[serde(default, rename_all = "camelCase")]
pub struct JustCmsOptions {
    pub token: Option<String>,
    pub project_id: Option<String>,
    pub base_url: Option<String>,
}

impl std::fmt::Debug for JustCmsOptions {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JustCmsOptions")
            .field("token", &self.token.as_ref().map(|_| "<redacted>"))
            .field("project_id", &self.project_id)
            .field("base_url", &self.base_url)
            .finish()
    }
}

/// Where unset options are looked up.
pub trait ConfigSource {
    fn get(&self, key: &str) -> Option<String>;
}

/// Reads process environment variables.
#[derive(Debug, Clone, Copy, Default)]
pub struct EnvConfig;

impl ConfigSource for EnvConfig {
    fn get(&self, key: &str) -> Option<String> {
        std::env::var(key).ok()
    }
}

impl ConfigSource for HashMap<String, String> {
    fn get(&self, key: &str) -> Option<String> {
        HashMap::get(self, key).cloned()
    }
}

impl<C: ConfigSource + ?Sized> ConfigSource for &C {
    fn get(&self, key: &str) -> Option<String> {
        (**self).get(key)
    }
}

/// Fully resolved settings.
#[derive(Clone, PartialEq, Eq)]
pub struct Settings {
    pub token: String,
    pub project_id: String,
    pub base_url: String,
}

// The token stays out of debug output.
impl std::fmt::Debug for Settings {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Settings")
            .field("token", &"<redacted>")
            .field("project_id", &self.project_id)
            .field("base_url", &self.base_url)
            .finish()
    }
}

impl JustCmsOptions {
    pub fn new(token: impl Into<String>, project_id: impl Into<String>) -> Self {
        Self {
            token: Some(token.into()),
            project_id: Some(project_id.into()),
            base_url: None,
        }
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = Some(base_url.into());
        self
    }

    /// Fill unset fields from `source` and check that nothing required is missing.
    pub fn resolve<C: ConfigSource + ?Sized>(&self, source: &C) -> Result<Settings, ConfigError> {
        let token = non_empty(self.token.clone())
            .or_else(|| non_empty(source.get(TOKEN_KEY)))
            .ok_or(ConfigError::MissingToken)?;
        let project_id = non_empty(self.project_id.clone())
            .or_else(|| non_empty(source.get(PROJECT_KEY)))
            .ok_or(ConfigError::MissingProjectId)?;
        let base_url = non_empty(self.base_url.clone()).unwrap_or_else(|| DEFAULT_BASE_URL.to_string());
        Ok(Settings {
            token,
            project_id,
            base_url,
        })
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}
