//! Error types for path construction.
//!
//! Every failure here aborts the entire `create_graph` call; there is no
//! partial-result mode. Each fatal site also emits an error diagnostic to
//! the [`DiagnosticSink`](ramsmith_diagnostics::DiagnosticSink) before
//! returning, so callers that only inspect the sink still see the failure.

use ramsmith_common::InternalError;

/// Errors produced while resolving drivers and constructing paths.
#[derive(Debug, thiserror::Error)]
pub enum PathError {
    /// A dotted-path segment does not match any declared instance name in
    /// its parent module.
    #[error("no instance named '{instance}' in module '{module}'")]
    UnknownInstance {
        /// The unmatched (normalized) instance name.
        instance: String,
        /// The parent module searched.
        module: String,
    },

    /// A net has no instance driving it via an output or inout pin within
    /// its owning module.
    #[error("net '{net}' is not driven by an output or inout pin in module '{module}'")]
    UndrivenNet {
        /// The undriven net.
        net: String,
        /// The module owning the net.
        module: String,
    },

    /// Path-construction recursion exceeded `max_depth`.
    #[error(
        "path construction exceeded max_depth ({max}) while resolving net '{net}'; \
         the netlist may contain a cycle"
    )]
    DepthExceeded {
        /// The destination net of the sub-walk that overflowed.
        net: String,
        /// The configured depth bound.
        max: usize,
    },

    /// One path-constructor invocation processed more derived paths than
    /// `max_adjacent_modules` allows.
    #[error(
        "path construction exceeded max_adjacent_modules ({max}) in module '{module}'; \
         the netlist may contain a cycle"
    )]
    AdjacentLimitExceeded {
        /// The module whose derived nets were being resolved.
        module: String,
        /// The configured iteration bound.
        max: usize,
    },

    /// A structural invariant was violated; indicates a bug, not bad input.
    #[error(transparent)]
    Internal(#[from] InternalError),
}
