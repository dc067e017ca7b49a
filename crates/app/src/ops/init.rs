use clap::Args;
use url::Url;

use crate::state::{AppConfig, AppState, DEFAULT_ENDPOINT};

/// Write a config file with connection defaults
#[derive(Args, Debug, Clone)]
pub struct Init;

#[derive(Debug, thiserror::Error)]
pub enum InitError {
    #[error("init failed: {0}")]
    StateFailed(#[from] crate::state::StateError),
    #[error("invalid default endpoint: {0}")]
    Endpoint(#[from] url::ParseError),
}

#[async_trait::async_trait]
impl crate::op::Op for Init {
    type Error = InitError;
    type Output = String;

    async fn execute(&self, ctx: &crate::op::OpContext) -> Result<Self::Output, Self::Error> {
        // global connection flags seed the file; secrets stay out of it
        let endpoint = match &ctx.settings.endpoint {
            Some(endpoint) => endpoint.clone(),
            None => Url::parse(DEFAULT_ENDPOINT)?,
        };
        let timeout = ctx.settings.timeout.unwrap_or(service::DEFAULT_TIMEOUT);
        let config = AppConfig {
            endpoint: Some(endpoint),
            region: ctx.settings.region.clone(),
            timeout_secs: Some(timeout.as_secs()),
            ..Default::default()
        };

        let state = AppState::init(ctx.config_path.clone(), config)?;
        let endpoint = state.config.endpoint.as_ref().map(Url::as_str);

        let output = format!(
            "Initialized roomctl config at: {}\n\
             - Endpoint: {}\n\
             - Region: {}",
            state.config_path.display(),
            endpoint.unwrap_or_default(),
            state.config.region.as_deref().unwrap_or("(none)"),
        );

        Ok(output)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::op::{Op, OpContext};
    use crate::render::OutputFormat;
    use crate::settings::Settings;
    use service::OutputOptions;

    #[tokio::test]
    async fn test_init_writes_config() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");

        let settings = Settings {
            region: Some("eu-west-1".into()),
            secret_access_key: Some("hunter2".into()),
            ..Default::default()
        };
        let mut ctx = OpContext::new(settings, OutputOptions::default(), OutputFormat::Json);
        ctx.config_path = Some(path.clone());

        let output = Init.execute(&ctx).await.unwrap();
        assert!(output.contains("Region: eu-west-1"));

        let written = std::fs::read_to_string(&path).unwrap();
        assert!(written.contains("endpoint = \"http://127.0.0.1:8080/\""));
        assert!(!written.contains("hunter2"));

        assert!(Init.execute(&ctx).await.is_err());
    }
}
