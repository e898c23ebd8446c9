//! Error types for netlist construction and validation.

/// Errors that can occur while building or validating a [`Design`](crate::Design).
#[derive(Debug, thiserror::Error)]
pub enum NetlistError {
    /// An instance's connection list does not match the instantiated module's
    /// pin count.
    #[error(
        "instance '{instance}' of module '{module}' has {got} connections \
         but the module declares {expected} pins"
    )]
    ConnectionArity {
        /// The offending instance name.
        instance: String,
        /// The instantiated module name.
        module: String,
        /// The instantiated module's pin count.
        expected: usize,
        /// The number of connections supplied.
        got: usize,
    },

    /// The module instantiation hierarchy contains a cycle, which would make
    /// recursive traversal diverge.
    #[error("module instantiation hierarchy contains a cycle through module '{module}'")]
    CyclicHierarchy {
        /// A module on the cycle.
        module: String,
    },
}
