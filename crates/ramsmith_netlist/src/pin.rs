//! Pin definitions for module interfaces.
//!
//! A [`Pin`] is one entry in a module's ordered pin list. Pin position is
//! semantically significant: it is the index that aligns an instance's
//! connection list with the instantiated module's interface.

use ramsmith_common::Ident;
use serde::{Deserialize, Serialize};

/// The direction of a pin on a module boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PinDirection {
    /// An input pin (data flows into the module).
    Input,
    /// An output pin (data flows out of the module).
    Output,
    /// A bidirectional pin (data flows both ways).
    Inout,
}

/// A pin in a module's ordered interface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pin {
    /// The pin name (interned lowercase).
    pub name: Ident,
    /// The direction of data flow.
    pub direction: PinDirection,
}

impl Pin {
    /// Creates a new pin.
    pub fn new(name: Ident, direction: PinDirection) -> Self {
        Self { name, direction }
    }

    /// Returns `true` if this pin is input-direction.
    pub fn is_input(&self) -> bool {
        self.direction == PinDirection::Input
    }
}
