/**
 * The generic command adapter: bind parameters, confirm,
 *  call once, wrap the outcome.
 */
pub mod adapter;
/**
 * Operation catalog of the room service, one [`api::Operation`]
 *  per remote call with its request and response models.
 */
pub mod api;
/**
 * HTTP client speaking the service's JSON protocol, behind
 *  the [`client::Transport`] seam.
 */
pub mod client;

mod config;

#[cfg(any(test, feature = "testkit"))]
pub mod testkit;

pub use adapter::{bind, invoke, run, AdapterError, BindOutcome, InvocationContext, OutputOptions};
pub use client::{ApiClient, ClientError, Transport};
pub use config::{Config as ClientConfig, Credentials, DEFAULT_TIMEOUT};
