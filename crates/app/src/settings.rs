use std::time::Duration;

use url::Url;

use service::{ClientConfig, Credentials, DEFAULT_TIMEOUT};

use crate::args::ConnectionArgs;
use crate::state::AppConfig;

/// Connection settings after merging flags and environment over the config file.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Settings {
    pub endpoint: Option<Url>,
    pub region: Option<String>,
    pub access_key_id: Option<String>,
    pub secret_access_key: Option<String>,
    pub session_token: Option<String>,
    pub timeout: Option<Duration>,
}

#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    #[error("no service endpoint configured; pass --endpoint, set ROOMCTL_ENDPOINT or run 'roomctl init'")]
    NoEndpoint,
    #[error("{missing} is required when {given} is set")]
    IncompleteCredentials {
        given: &'static str,
        missing: &'static str,
    },
}

impl Settings {
    pub fn resolve(args: &ConnectionArgs, file: &AppConfig) -> Self {
        fn pick<T: Clone>(flag: &Option<T>, file: &Option<T>) -> Option<T> {
            flag.clone().or_else(|| file.clone())
        }

        Self {
            endpoint: pick(&args.endpoint, &file.endpoint),
            region: pick(&args.region, &file.region),
            access_key_id: pick(&args.access_key_id, &file.access_key_id),
            secret_access_key: pick(&args.secret_access_key, &file.secret_access_key),
            session_token: pick(&args.session_token, &file.session_token),
            timeout: pick(&args.timeout_secs, &file.timeout_secs).map(Duration::from_secs),
        }
    }

    pub fn credentials(&self) -> Result<Option<Credentials>, SettingsError> {
        let credentials = match (&self.access_key_id, &self.secret_access_key) {
            (Some(id), Some(secret)) => Credentials::new(id, secret),
            (Some(_), None) => {
                return Err(SettingsError::IncompleteCredentials {
                    given: "access key id",
                    missing: "secret access key",
                })
            }
            (None, Some(_)) => {
                return Err(SettingsError::IncompleteCredentials {
                    given: "secret access key",
                    missing: "access key id",
                })
            }
            (None, None) => {
                if self.session_token.is_some() {
                    tracing::warn!("session token ignored without an access key");
                }
                return Ok(None);
            }
        };

        Ok(Some(match &self.session_token {
            Some(token) => credentials.with_session_token(token),
            None => credentials,
        }))
    }

    pub fn client_config(&self) -> Result<ClientConfig, SettingsError> {
        let endpoint = self.endpoint.clone().ok_or(SettingsError::NoEndpoint)?;

        let mut config =
            ClientConfig::new(endpoint).with_timeout(self.timeout.unwrap_or(DEFAULT_TIMEOUT));
        if let Some(region) = &self.region {
            config = config.with_region(region);
        }
        if let Some(credentials) = self.credentials()? {
            config = config.with_credentials(credentials);
        }
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn file() -> AppConfig {
        AppConfig {
            endpoint: Some(Url::parse("http://file.local/").unwrap()),
            region: Some("file-region".into()),
            access_key_id: Some("FILEKEY".into()),
            secret_access_key: Some("filesecret".into()),
            session_token: None,
            timeout_secs: Some(5),
        }
    }

    #[test]
    fn test_flags_win_over_file() {
        let args = ConnectionArgs {
            endpoint: Some(Url::parse("http://flag.local/").unwrap()),
            region: Some("flag-region".into()),
            ..Default::default()
        };

        let settings = Settings::resolve(&args, &file());
        assert_eq!(settings.endpoint.unwrap().as_str(), "http://flag.local/");
        assert_eq!(settings.region.as_deref(), Some("flag-region"));
        assert_eq!(settings.access_key_id.as_deref(), Some("FILEKEY"));
        assert_eq!(settings.timeout, Some(Duration::from_secs(5)));
    }

    #[test]
    fn test_client_config() {
        let settings = Settings::resolve(&ConnectionArgs::default(), &file());
        let config = settings.client_config().unwrap();

        assert_eq!(config.region.as_deref(), Some("file-region"));
        assert_eq!(config.timeout, Duration::from_secs(5));
        assert_eq!(config.credentials.unwrap().access_key_id, "FILEKEY");
    }

    #[test]
    fn test_no_endpoint() {
        let settings = Settings::resolve(&ConnectionArgs::default(), &AppConfig::default());
        assert!(matches!(settings.client_config(), Err(SettingsError::NoEndpoint)));
    }

    #[test]
    fn test_half_credentials_rejected() {
        let settings = Settings {
            endpoint: Some(Url::parse("http://x/").unwrap()),
            access_key_id: Some("AKID".into()),
            ..Default::default()
        };
        assert!(matches!(
            settings.client_config(),
            Err(SettingsError::IncompleteCredentials { .. })
        ));
    }

    #[test]
    fn test_anonymous() {
        let settings = Settings {
            endpoint: Some(Url::parse("http://x/").unwrap()),
            ..Default::default()
        };
        let config = settings.client_config().unwrap();
        assert!(config.credentials.is_none());
        assert_eq!(config.timeout, DEFAULT_TIMEOUT);
    }
}
