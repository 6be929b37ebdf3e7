use ustr::Ustr;

/// Base URL of the OctoFit deployment the views read from.
pub const DEFAULT_API_BASE_URL: &str = "https://glowing-yodel-9p9jwv56vpp27gxj-8000.app.github.dev";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BusinessConfig {
    pub api_base_url: String,
}

impl BusinessConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            api_base_url: base_url.into(),
        }
    }

    /// Root of the REST API, e.g. `https://host/api`.
    ///
    /// An empty base resolves to the same-origin `/api`.
    pub fn api_url(&self) -> Ustr {
        let base = self.api_base_url.trim_end_matches('/');
        if base.is_empty() {
            Ustr::from("/api")
        } else {
            Ustr::from(&format!("{base}/api"))
        }
    }

    /// Full URL of a collection endpoint. Trailing slash is kept, the API expects it.
    pub fn endpoint(&self, resource_path: &str) -> Ustr {
        let path = resource_path.trim_matches('/');
        Ustr::from(&format!("{}/{path}/", self.api_url()))
    }
}

impl Default for BusinessConfig {
    fn default() -> Self {
        Self::new(DEFAULT_API_BASE_URL)
    }
}
