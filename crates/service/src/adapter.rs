//! The one generic command adapter.
//!
//! An invocation is split in two: [`bind`] resolves the output selection,
//! asks for confirmation and checks required parameters without touching
//! the network; [`invoke`] consumes the resulting context, issues exactly one
//! call and wraps the outcome in an [`OutputEnvelope`].

use serde_json::Value;

use common::prelude::*;

use crate::api::Operation;
use crate::client::Transport;

/// How the caller wants the output shaped and whether prompts are skipped.
#[derive(Debug, Clone, Default)]
pub struct OutputOptions {
    /// `--select` expression: `*`, `^Param` or a response field
    pub select: Option<String>,
    pub pass_thru: bool,
    pub force: bool,
}

#[derive(Debug, thiserror::Error)]
pub enum AdapterError {
    #[error(transparent)]
    Select(#[from] SelectError),
    #[error("failed to encode {type_name}: {source}")]
    Encode {
        type_name: &'static str,
        #[source]
        source: serde_json::Error,
    },
    #[error(
        "{command}: unable to reach the service at {endpoint}; check the endpoint, region and network connection"
    )]
    Unreachable {
        command: String,
        endpoint: String,
        #[source]
        source: BoxError,
    },
}

/// Everything one call needs, fixed before the call is made.
#[derive(Debug)]
pub struct InvocationContext<O: Operation> {
    params: O,
    selection: Selection,
    warnings: Vec<String>,
}

impl<O: Operation> InvocationContext<O> {
    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    pub fn warnings(&self) -> &[String] {
        &self.warnings
    }

    pub fn build_request(&self) -> O::Request {
        self.params.build_request()
    }
}

#[derive(Debug)]
pub enum BindOutcome<O: Operation> {
    Ready(InvocationContext<O>),
    /// The caller said no; nothing was sent
    Declined(ConfirmPrompt),
}

/// Validates an invocation and, for mutating operations, asks `confirm`
/// unless `options.force` is set.
///
/// Selector problems are errors. Missing required parameters are not: each
/// one is logged and recorded as a warning, and the service gets to reject
/// the request.
pub fn bind<O: Operation>(
    params: O,
    options: &OutputOptions,
    confirm: &dyn Confirm,
) -> Result<BindOutcome<O>, AdapterError> {
    let descriptor = O::DESCRIPTOR;
    let record = serde_json::to_value(&params).map_err(|source| AdapterError::Encode {
        type_name: std::any::type_name::<O>(),
        source,
    })?;

    let select = options.select.as_deref();
    let selector = OutputSelector::from_options(select, options.pass_thru, descriptor)?;
    let selection = selector.resolve(descriptor, &record)?;

    if descriptor.is_mutating() && !options.force {
        let prompt = ConfirmPrompt::new(descriptor, &record);
        if !confirm.confirm(&prompt) {
            tracing::info!(command = %descriptor, target = %prompt.target, "declined");
            return Ok(BindOutcome::Declined(prompt));
        }
    }

    let command = descriptor.command_name();
    let warnings = descriptor
        .missing_required(&record)
        .into_iter()
        .map(|parameter| {
            tracing::warn!(%command, parameter, "required parameter not set");
            format!("{command}: required parameter '{parameter}' is not set")
        })
        .collect();

    Ok(BindOutcome::Ready(InvocationContext {
        params,
        selection,
        warnings,
    }))
}

/// Sends the context's request once and wraps whatever comes back.
///
/// Service, transport and decoding failures land in the envelope. An
/// unreachable endpoint is returned as [`AdapterError::Unreachable`].
pub async fn invoke<O, T>(
    context: InvocationContext<O>,
    transport: &T,
) -> Result<OutputEnvelope, AdapterError>
where
    O: Operation,
    T: Transport + ?Sized,
{
    let descriptor = O::DESCRIPTOR;
    let InvocationContext {
        params,
        selection,
        warnings,
    } = context;

    let request = params.build_request();
    let body = serde_json::to_value(&request).map_err(|source| AdapterError::Encode {
        type_name: descriptor.request_type,
        source,
    })?;

    tracing::info!(command = %descriptor, "invoking");
    let result = transport
        .send(descriptor, body)
        .await
        .and_then(decode_response::<O>);

    match result {
        Ok(response) => {
            let payload = selection.apply(&response);
            Ok(OutputEnvelope::success(descriptor.operation, warnings, payload, response))
        }
        Err(CallError::Unreachable { endpoint, source }) => Err(AdapterError::Unreachable {
            command: descriptor.command_name(),
            endpoint,
            source,
        }),
        Err(err) => {
            tracing::debug!(command = %descriptor, error = %err, "call failed");
            Ok(OutputEnvelope::failure(descriptor.operation, warnings, err))
        }
    }
}

/// [`bind`] then [`invoke`]; `None` when the caller declined.
pub async fn run<O, T>(
    params: O,
    options: &OutputOptions,
    confirm: &dyn Confirm,
    transport: &T,
) -> Result<Option<OutputEnvelope>, AdapterError>
where
    O: Operation,
    T: Transport + ?Sized,
{
    match bind(params, options, confirm)? {
        BindOutcome::Ready(context) => invoke(context, transport).await.map(Some),
        BindOutcome::Declined(_) => Ok(None),
    }
}

// Round-trips through the typed response so only modelled members survive.
fn decode_response<O: Operation>(raw: Value) -> Result<Value, CallError> {
    let decode_error = |source| CallError::Decode {
        response_type: O::DESCRIPTOR.response_type,
        source,
    };
    let typed: O::Response = serde_json::from_value(raw).map_err(decode_error)?;
    serde_json::to_value(typed).map_err(decode_error)
}
