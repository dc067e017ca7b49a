use std::error::Error;
use std::path::PathBuf;
use std::sync::Arc;

use common::prelude::{CallError, Confirm, Force};
use service::api::Operation;
use service::{AdapterError, ApiClient, ClientError, OutputOptions, Transport};

use crate::args::Args;
use crate::prompt::TerminalConfirm;
use crate::render::{render, OutputFormat, Rendered};
use crate::settings::{Settings, SettingsError};
use crate::state::{AppState, StateError};
use crate::Command;

/// Everything a command needs besides its own arguments.
#[derive(Clone)]
pub struct OpContext {
    pub settings: Settings,
    pub options: OutputOptions,
    pub format: OutputFormat,
    /// Config file named on the command line, if any
    pub config_path: Option<PathBuf>,
    confirm: Arc<dyn Confirm>,
    transport: Option<Arc<dyn Transport>>,
}

impl OpContext {
    pub fn new(settings: Settings, options: OutputOptions, format: OutputFormat) -> Self {
        let confirm: Arc<dyn Confirm> = if options.force {
            Arc::new(Force)
        } else {
            Arc::new(TerminalConfirm)
        };

        Self {
            settings,
            options,
            format,
            config_path: None,
            confirm,
            transport: None,
        }
    }

    pub fn try_from(args: &Args) -> Result<Self, StateError> {
        // init writes the file, the others never talk to the service
        let file = match args.command {
            Command::Init(_) | Command::Commands(_) | Command::Version(_) => None,
            _ => AppState::load(args.config.clone())?,
        };
        let file_config = file.map(|state| state.config).unwrap_or_default();

        let options = OutputOptions {
            select: args.output.select.clone(),
            pass_thru: args.output.pass_thru,
            force: args.output.force,
        };

        let mut ctx = Self::new(
            Settings::resolve(&args.connection, &file_config),
            options,
            args.output.output,
        );
        ctx.config_path = args.config.clone();
        Ok(ctx)
    }

    #[cfg(test)]
    pub fn with_confirm(mut self, confirm: Arc<dyn Confirm>) -> Self {
        self.confirm = confirm;
        self
    }

    #[cfg(test)]
    pub fn with_transport(mut self, transport: Arc<dyn Transport>) -> Self {
        self.transport = Some(transport);
        self
    }

    /// Runs one operation against the configured service.
    pub async fn invoke<O: Operation>(&self, params: O) -> Result<Rendered, InvokeError> {
        match &self.transport {
            Some(transport) => self.invoke_with(params, transport.as_ref()).await,
            None => {
                let client = ApiClient::new(&self.settings.client_config()?)?;
                self.invoke_with(params, &client).await
            }
        }
    }

    pub async fn invoke_with<O, T>(&self, params: O, transport: &T) -> Result<Rendered, InvokeError>
    where
        O: Operation,
        T: Transport + ?Sized,
    {
        let confirm = self.confirm.as_ref();
        let envelope = match service::run(params, &self.options, confirm, transport).await? {
            Some(envelope) => envelope,
            None => return Ok(Rendered::empty()),
        };

        let payload = envelope.into_result()?;
        Ok(render(payload.as_ref(), self.format)?)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum InvokeError {
    #[error(transparent)]
    Settings(#[from] SettingsError),
    #[error("failed to create client: {0}")]
    Client(#[from] ClientError),
    #[error(transparent)]
    Adapter(#[from] AdapterError),
    #[error(transparent)]
    Call(#[from] CallError),
    #[error("failed to render output: {0}")]
    Render(#[from] serde_json::Error),
}

#[async_trait::async_trait]
pub trait Op: Send + Sync {
    type Error: Error + Send + Sync + 'static;
    type Output;

    async fn execute(&self, ctx: &OpContext) -> Result<Self::Output, Self::Error>;
}

/// Generates a `Command` subcommand enum over ops, plus the matching
/// `OpOutput`/`OpError` sums and an `Op` impl dispatching to each variant.
#[macro_export]
macro_rules! command_enum {
    ($(($variant:ident, $type:ty)),* $(,)?) => {
        #[derive(clap::Subcommand, Debug, Clone)]
        pub enum Command {
            $($variant($type),)*
        }

        #[derive(Debug)]
        pub enum OpOutput {
            $($variant(<$type as $crate::op::Op>::Output),)*
        }

        #[derive(Debug, thiserror::Error)]
        pub enum OpError {
            $(
                #[error(transparent)]
                $variant(<$type as $crate::op::Op>::Error),
            )*
        }

        #[async_trait::async_trait]
        impl $crate::op::Op for Command {
            type Output = OpOutput;
            type Error = OpError;

            async fn execute(&self, ctx: &$crate::op::OpContext) -> Result<Self::Output, Self::Error> {
                match self {
                    $(
                        Command::$variant(op) => {
                            op.execute(ctx).await
                                .map(OpOutput::$variant)
                                .map_err(OpError::$variant)
                        },
                    )*
                }
            }
        }

        impl std::fmt::Display for OpOutput {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                match self {
                    $(
                        OpOutput::$variant(output) => write!(f, "{}", output),
                    )*
                }
            }
        }
    };
}

/// Makes operation parameter records runnable as commands through the adapter.
#[macro_export]
macro_rules! adapter_ops {
    ($($type:ty),* $(,)?) => {
        $(
            #[async_trait::async_trait]
            impl $crate::op::Op for $type {
                type Error = $crate::op::InvokeError;
                type Output = $crate::render::Rendered;

                async fn execute(&self, ctx: &$crate::op::OpContext) -> Result<Self::Output, Self::Error> {
                    ctx.invoke(self.clone()).await
                }
            }
        )*
    };
}
