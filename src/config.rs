use crate::error::{Result, WizardError};

pub const DEFAULT_SERVICE_URL: &str = "http://localhost:5000";

pub const ENV_SERVICE_URL: &str = "MEAL_PLAN_SERVICE_URL";
pub const ENV_TIMEOUT_SECS: &str = "MEAL_PLAN_TIMEOUT_SECS";
pub const ENV_FEEDBACK: &str = "MEAL_PLAN_FEEDBACK";

/// Where and how to reach the recommendation service.
#[derive(Debug, Clone, PartialEq)]
pub struct ServiceConfig {
    /// Base URL; the profile endpoint is appended to it.
    pub service_url: String,

    /// Transport timeout. `None` leaves requests unbounded.
    pub timeout_secs: Option<u64>,

    /// Ring the terminal bell on bulk selection changes.
    pub feedback: bool,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            service_url: DEFAULT_SERVICE_URL.to_string(),
            timeout_secs: None,
            feedback: true,
        }
    }
}

impl ServiceConfig {
    /// Load from environment variables, falling back to defaults.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load using an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let timeout_secs = match lookup(ENV_TIMEOUT_SECS) {
            Some(raw) => Some(raw.trim().parse().map_err(|_| {
                WizardError::Config(format!("{ENV_TIMEOUT_SECS} must be a whole number of seconds"))
            })?),
            None => None,
        };

        let feedback = match lookup(ENV_FEEDBACK).map(|v| v.trim().to_lowercase()) {
            Some(v) if matches!(v.as_str(), "on" | "true" | "1") => true,
            Some(v) if matches!(v.as_str(), "off" | "false" | "0") => false,
            Some(v) => {
                return Err(WizardError::Config(format!(
                    "{ENV_FEEDBACK} must be on or off, got '{v}'"
                )));
            }
            None => defaults.feedback,
        };

        let config = Self {
            service_url: lookup(ENV_SERVICE_URL).unwrap_or(defaults.service_url),
            timeout_secs,
            feedback,
        };

        config.validate()?;
        Ok(config)
    }

    /// Apply command-line overrides on top of the loaded values.
    pub fn with_overrides(
        mut self,
        service_url: Option<String>,
        timeout_secs: Option<u64>,
        quiet: bool,
    ) -> Result<Self> {
        if let Some(url) = service_url {
            self.service_url = url;
        }
        if timeout_secs.is_some() {
            self.timeout_secs = timeout_secs;
        }
        if quiet {
            self.feedback = false;
        }

        self.validate()?;
        Ok(self)
    }

    fn validate(&self) -> Result<()> {
        let url = self.service_url.trim();
        if url.is_empty() {
            return Err(WizardError::Config("Service URL cannot be empty".to_string()));
        }
        if !(url.starts_with("http://") || url.starts_with("https://")) {
            return Err(WizardError::Config(format!(
                "Service URL must start with http:// or https://, got '{url}'"
            )));
        }
        if self.timeout_secs == Some(0) {
            return Err(WizardError::Config(
                "Timeout must be greater than 0".to_string(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults_without_env() {
        let config = ServiceConfig::from_lookup(|_| None).unwrap();
        assert_eq!(config, ServiceConfig::default());
        assert_eq!(config.timeout_secs, None);
    }

    #[test]
    fn test_env_values() {
        let config = ServiceConfig::from_lookup(lookup_from(&[
            (ENV_SERVICE_URL, "https://plans.example.com"),
            (ENV_TIMEOUT_SECS, "45"),
            (ENV_FEEDBACK, "off"),
        ]))
        .unwrap();
        assert_eq!(config.service_url, "https://plans.example.com");
        assert_eq!(config.timeout_secs, Some(45));
        assert!(!config.feedback);
    }

    #[test]
    fn test_rejects_bad_values() {
        assert!(ServiceConfig::from_lookup(lookup_from(&[(ENV_TIMEOUT_SECS, "soon")])).is_err());
        assert!(ServiceConfig::from_lookup(lookup_from(&[(ENV_TIMEOUT_SECS, "0")])).is_err());
        assert!(ServiceConfig::from_lookup(lookup_from(&[(ENV_SERVICE_URL, "ftp://x")])).is_err());
        assert!(ServiceConfig::from_lookup(lookup_from(&[(ENV_FEEDBACK, "maybe")])).is_err());
    }

    #[test]
    fn test_overrides_win() {
        let config = ServiceConfig::default()
            .with_overrides(Some("http://10.0.0.2:5000".to_string()), Some(5), true)
            .unwrap();
        assert_eq!(config.service_url, "http://10.0.0.2:5000");
        assert_eq!(config.timeout_secs, Some(5));
        assert!(!config.feedback);
    }
}
