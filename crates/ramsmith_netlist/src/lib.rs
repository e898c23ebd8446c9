//! In-memory hierarchical netlist model for ramsmith.
//!
//! A [`Design`] holds a set of [`Module`]s. Each module declares an ordered
//! pin list and a list of child [`Instance`]s; every instance carries a
//! positional connection list aligned with the instantiated module's pins
//! (connection `i` is the net, in the parent's net-name space, attached to
//! the child's `i`-th pin). Leaf timing cells are flagged as primitives and
//! terminate hierarchical decomposition.
//!
//! All names (modules, pins, instances, nets) are interned in ASCII-lowercase
//! form at construction time, so identity comparisons are case-insensitive
//! integer equality throughout.

#![warn(missing_docs)]

pub mod design;
pub mod error;
pub mod ids;
pub mod module;
pub mod pin;

pub use design::Design;
pub use error::NetlistError;
pub use ids::{InstanceId, ModuleId};
pub use module::{Instance, Module};
pub use pin::{Pin, PinDirection};
