//! Widget configuration read from the host page.
//!
//! The host page may embed a JSON object in
//! `<meta name="job-board-config" content="...">`. Every field is optional;
//! missing fields take the defaults below.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use serde::Deserialize;

use crate::error::ConfigError;

pub const DEFAULT_JOBS_URL: &str = "jobs.json";
pub const DEFAULT_THEME_STORAGE_KEY: &str = "theme";
pub const DEFAULT_APPLY_HREF_PREFIX: &str = "#apply-";

#[cfg(feature = "csr")]
const META_NAME: &str = "job-board-config";

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct WidgetConfig {
    /// Location of the job list JSON.
    pub jobs_url: String,
    /// localStorage key holding `"light"` or `"dark"`.
    pub theme_storage_key: String,
    /// Prefix of the detail view's apply link; the job id is appended.
    pub apply_href_prefix: String,
    /// Department selector options. Empty means derive them from the
    /// loaded jobs.
    pub departments: Vec<String>,
}

impl Default for WidgetConfig {
    fn default() -> Self {
        Self {
            jobs_url: DEFAULT_JOBS_URL.to_owned(),
            theme_storage_key: DEFAULT_THEME_STORAGE_KEY.to_owned(),
            apply_href_prefix: DEFAULT_APPLY_HREF_PREFIX.to_owned(),
            departments: Vec::new(),
        }
    }
}

impl WidgetConfig {
    /// Parse config from the raw meta-tag content. `None` yields defaults.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Parse` for malformed JSON and
    /// `ConfigError::Invalid` for a blank `jobs_url` or `theme_storage_key`.
    pub fn parse(raw: Option<&str>) -> Result<Self, ConfigError> {
        let Some(raw) = raw.map(str::trim).filter(|r| !r.is_empty()) else {
            return Ok(Self::default());
        };
        let config: Self = serde_json::from_str(raw).map_err(|e| ConfigError::Parse(e.to_string()))?;
        if config.jobs_url.trim().is_empty() {
            return Err(ConfigError::Invalid("jobs_url must not be blank"));
        }
        if config.theme_storage_key.trim().is_empty() {
            return Err(ConfigError::Invalid("theme_storage_key must not be blank"));
        }
        Ok(config)
    }

    /// Read config from the host document, falling back to defaults when
    /// the meta tag is absent or unusable.
    pub fn from_document() -> Self {
        let raw = read_meta_content();
        match Self::parse(raw.as_deref()) {
            Ok(config) => config,
            Err(e) => {
                log::warn!("{e}; using default config");
                Self::default()
            }
        }
    }

    /// Apply link for a job id.
    pub fn apply_href(&self, job_id: i64) -> String {
        format!("{}{job_id}", self.apply_href_prefix)
    }
}

fn read_meta_content() -> Option<String> {
    #[cfg(feature = "csr")]
    {
        use wasm_bindgen::JsCast;

        let doc = web_sys::window()?.document()?;
        let selector = format!("meta[name=\"{META_NAME}\"]");
        let el = doc.query_selector(&selector).ok().flatten()?;
        let meta = el.dyn_into::<web_sys::HtmlMetaElement>().ok()?;
        Some(meta.content())
    }
    #[cfg(not(feature = "csr"))]
    {
        None
    }
}
