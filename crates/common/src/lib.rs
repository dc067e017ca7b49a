/**
 * Typed inputs of a command.
 *  - Parameter bindings and their declared kinds
 *  - Helpers for flattened nested request members
 */
pub mod binding;
/**
 * Confirmation prompts for mutating operations.
 */
pub mod confirm;
/**
 * Static metadata describing one remote operation
 *  and the command bound to it.
 */
pub mod descriptor;
/**
 * Uniform result of an invocation.
 */
pub mod envelope;
/**
 * Transport-neutral call errors.
 */
pub mod error;
/**
 * Output selection: `*`, `^Parameter`, `Field`
 *  and the legacy pass-through switch.
 */
pub mod selector;
/**
 * Value types shared by several operations
 *  (tags, filters, sort criteria).
 */
pub mod values;
/**
 * Helper for reporting build version information
 *  injected at compile time.
 */
pub mod version;

pub mod prelude {
    pub use crate::binding::{non_empty, present_if_any, ParamKind, ParameterBinding};
    pub use crate::confirm::{Confirm, ConfirmPrompt, Decline, Force};
    pub use crate::descriptor::{ConfirmImpact, DefaultOutput, OperationDescriptor, Verb};
    pub use crate::envelope::{Outcome, OutputEnvelope};
    pub use crate::error::{BoxError, CallError};
    pub use crate::selector::{OutputSelector, SelectError, Selection};
    pub use crate::values::{Filter, SortCriterion, SortValue, Tag, ValueParseError};
    pub use crate::version::{build_info, BuildInfo};
}
