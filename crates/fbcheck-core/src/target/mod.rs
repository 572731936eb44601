//! Target modeling: normalizing and validating the database URL.
//!
//! Accepts what users paste (bare host, trailing slash, full URL) and produces
//! a base URL that probe paths such as `/.json` can be appended to.

mod error;
mod host;

pub use error::TargetError;
pub use host::{is_known_firebase_host, KNOWN_FIREBASE_DOMAINS};

const DEFAULT_SCHEME: &str = "https://";

/// A validated database base URL (no trailing slash, no query or fragment).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Target {
    base_url: String,
    host: String,
}

impl Target {
    /// Normalizes `raw` into a target.
    ///
    /// Prepends `https://` when no scheme is given, requires an http(s) scheme
    /// and a host, and strips trailing slashes. Hosts outside the known
    /// Firebase domains are accepted; callers decide whether to warn.
    ///
    /// # Examples
    ///
    /// - `"my-app.firebaseio.com"` → `"https://my-app.firebaseio.com"`
    /// - `"https://my-app.firebaseio.com/"` → `"https://my-app.firebaseio.com"`
    pub fn parse(raw: &str) -> Result<Self, TargetError> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(TargetError::Empty);
        }

        let with_scheme = if trimmed.contains("://") {
            trimmed.to_string()
        } else {
            format!("{}{}", DEFAULT_SCHEME, trimmed)
        };

        let mut parsed = url::Url::parse(&with_scheme).map_err(|source| TargetError::Parse {
            input: trimmed.to_string(),
            source,
        })?;

        match parsed.scheme() {
            "https" | "http" => {}
            other => return Err(TargetError::UnsupportedScheme(other.to_string())),
        }

        let host = match parsed.host_str() {
            Some(h) if !h.is_empty() => h.to_string(),
            _ => return Err(TargetError::MissingHost(trimmed.to_string())),
        };

        parsed.set_query(None);
        parsed.set_fragment(None);

        let base_url = parsed.as_str().trim_end_matches('/').to_string();
        Ok(Self { base_url, host })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn host(&self) -> &str {
        &self.host
    }

    pub fn is_known_firebase_host(&self) -> bool {
        is_known_firebase_host(&self.host)
    }

    /// Appends a probe path (e.g. `/.json?shallow=true`) to the base URL.
    pub fn join(&self, relative: &str) -> String {
        if relative.starts_with('/') {
            format!("{}{}", self.base_url, relative)
        } else {
            format!("{}/{}", self.base_url, relative)
        }
    }
}

impl std::fmt::Display for Target {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.base_url)
    }
}
