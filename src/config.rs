use serde::{Deserialize, Serialize};

/// Environment override for the API base URL. Takes precedence over
/// the stored settings file at startup.
pub const API_URL_ENV: &str = "ADVISOR_API_URL";

/// Persisted application settings.
///
/// There is no default base URL. The endpoint is supplied by whoever
/// deploys the app, either through [`API_URL_ENV`] or the settings
/// page.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct AppSettings {
    pub api_base: String,
}

impl AppSettings {
    pub fn is_configured(&self) -> bool {
        !self.api_base.trim().is_empty()
    }
}

pub fn from_env() -> Option<AppSettings> {
    std::env::var(API_URL_ENV)
        .ok()
        .filter(|s| !s.trim().is_empty())
        .map(|api_base| AppSettings { api_base })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_base_url_is_not_configured() {
        assert!(!AppSettings { api_base: "".into() }.is_configured());
        assert!(!AppSettings { api_base: "  ".into() }.is_configured());
        assert!(AppSettings { api_base: "https://api.example.com".into() }.is_configured());
    }
}
