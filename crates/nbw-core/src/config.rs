//! Page-supplied configuration.
//!
//! The hosting page injects the base project URL and the current notebook's
//! path (percent-encoded, exactly as the server wrote it). The menu bar
//! only uses these for URL construction.

use serde::Deserialize;

use crate::url::percent_decode;

/// Configuration injected by the hosting page.
#[derive(Debug, Clone, Deserialize)]
pub struct PageConfig {
    /// Base project URL, e.g. `"/"` or `"/user/alice/"`.
    pub base_project_url: String,
    /// Percent-encoded path of the current notebook's directory.
    pub notebook_path: String,
}

impl PageConfig {
    pub fn new(base_project_url: impl Into<String>, notebook_path: impl Into<String>) -> Self {
        Self {
            base_project_url: base_project_url.into(),
            notebook_path: notebook_path.into(),
        }
    }

    /// Override the page-supplied base URL, mirroring the constructor
    /// option the embedding page may pass.
    pub fn with_base_project_url(mut self, base: impl Into<String>) -> Self {
        self.base_project_url = base.into();
        self
    }

    /// The notebook path with percent escapes decoded.
    pub fn notebook_path(&self) -> String {
        percent_decode(&self.notebook_path)
    }
}

impl Default for PageConfig {
    fn default() -> Self {
        Self::new("/", "")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn notebook_path_is_percent_decoded() {
        let config = PageConfig::new("/", "My%20Work/Sub%20Dir");
        assert_eq!(config.notebook_path(), "My Work/Sub Dir");
    }

    #[test]
    fn base_url_override_wins() {
        let config = PageConfig::new("/", "nb").with_base_project_url("/user/alice/");
        assert_eq!(config.base_project_url, "/user/alice/");
    }

    #[test]
    fn deserializes_page_payload() {
        let config: PageConfig = serde_json::from_str(
            r#"{"base_project_url": "/hub/", "notebook_path": "proj%2Fnotes"}"#,
        )
        .unwrap();
        assert_eq!(config.base_project_url, "/hub/");
        assert_eq!(config.notebook_path(), "proj/notes");
    }
}
