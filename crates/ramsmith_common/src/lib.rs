//! Shared foundations for the ramsmith toolchain.
//!
//! Provides the interned identifier type used for all net, pin, module, and
//! instance names ([`Ident`]/[`Interner`]) and the internal-error type for
//! invariant violations that indicate a bug rather than bad input
//! ([`InternalError`]).

#![warn(missing_docs)]

pub mod ident;
pub mod result;

pub use ident::{Ident, Interner};
pub use result::InternalError;
