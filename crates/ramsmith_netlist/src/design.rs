//! Top-level design container and builder.
//!
//! A [`Design`] owns every module in a hierarchical netlist and provides the
//! construction API used by netlist importers and tests. Construction
//! normalizes all names to lowercase via the shared
//! [`Interner`](ramsmith_common::Interner) and validates connection arity,
//! so traversal code downstream can index positionally without re-checking.

use crate::error::NetlistError;
use crate::ids::{InstanceId, ModuleId};
use crate::module::{Instance, Module};
use crate::pin::{Pin, PinDirection};
use petgraph::algo::toposort;
use petgraph::graph::{DiGraph, NodeIndex};
use ramsmith_common::{Ident, Interner};
use serde::{Deserialize, Serialize};

/// A complete hierarchical netlist.
///
/// Modules are stored densely and addressed by [`ModuleId`]; IDs are stable
/// for the lifetime of the design.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Design {
    modules: Vec<Module>,
}

impl Design {
    /// Creates an empty design.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a module with an empty interface and returns its ID.
    ///
    /// `is_primitive` marks leaf timing cells that terminate hierarchical
    /// decomposition. Pins must be declared (via [`add_pin`](Self::add_pin))
    /// before the module is instantiated anywhere, since instantiation
    /// validates connection arity against the pin count.
    pub fn add_module(&mut self, name: &str, is_primitive: bool, interner: &Interner) -> ModuleId {
        let id = ModuleId::from_raw(self.modules.len() as u32);
        self.modules.push(Module {
            id,
            name: interner.get_or_intern_lower(name),
            is_primitive,
            pins: Vec::new(),
            instances: Vec::new(),
        });
        id
    }

    /// Appends a pin to a module's ordered interface.
    ///
    /// # Panics
    ///
    /// Panics if `module` is out of bounds.
    pub fn add_pin(
        &mut self,
        module: ModuleId,
        name: &str,
        direction: PinDirection,
        interner: &Interner,
    ) {
        let name = interner.get_or_intern_lower(name);
        self.modules[module.as_raw() as usize]
            .pins
            .push(Pin::new(name, direction));
    }

    /// Instantiates `child` inside `parent` with a positional connection
    /// list (`connections[i]` is the parent-level net on the child's `i`-th
    /// pin). Fails if the connection count does not match the child's pin
    /// count.
    ///
    /// # Panics
    ///
    /// Panics if `parent` or `child` is out of bounds.
    pub fn add_instance(
        &mut self,
        parent: ModuleId,
        name: &str,
        child: ModuleId,
        connections: &[&str],
        interner: &Interner,
    ) -> Result<InstanceId, NetlistError> {
        let expected = self.modules[child.as_raw() as usize].pins.len();
        if connections.len() != expected {
            return Err(NetlistError::ConnectionArity {
                instance: name.to_ascii_lowercase(),
                module: interner
                    .resolve(self.modules[child.as_raw() as usize].name)
                    .to_string(),
                expected,
                got: connections.len(),
            });
        }
        let connections = connections
            .iter()
            .map(|n| interner.get_or_intern_lower(n))
            .collect();
        let parent_module = &mut self.modules[parent.as_raw() as usize];
        let id = InstanceId::from_raw(parent_module.instances.len() as u32);
        parent_module.instances.push(Instance::new(
            interner.get_or_intern_lower(name),
            child,
            connections,
        ));
        Ok(id)
    }

    /// Returns the module with the given ID.
    ///
    /// # Panics
    ///
    /// Panics if the ID is out of bounds.
    pub fn module(&self, id: ModuleId) -> &Module {
        &self.modules[id.as_raw() as usize]
    }

    /// Returns the module with the given (normalized) name, or `None`.
    pub fn module_named(&self, name: Ident) -> Option<&Module> {
        self.modules.iter().find(|m| m.name == name)
    }

    /// Returns the number of modules in the design.
    pub fn module_count(&self) -> usize {
        self.modules.len()
    }

    /// Iterates over all modules in ID order.
    pub fn modules(&self) -> impl Iterator<Item = &Module> {
        self.modules.iter()
    }

    /// Checks that the module instantiation hierarchy is acyclic.
    ///
    /// A module that (transitively) instantiates itself would make the
    /// recursive driver walk diverge before any traversal bound applies, so
    /// importers run this once after construction.
    pub fn validate(&self, interner: &Interner) -> Result<(), NetlistError> {
        let mut graph: DiGraph<(), ()> = DiGraph::with_capacity(self.modules.len(), 0);
        for _ in &self.modules {
            graph.add_node(());
        }
        for module in &self.modules {
            for inst in &module.instances {
                graph.add_edge(
                    NodeIndex::new(module.id.as_raw() as usize),
                    NodeIndex::new(inst.module.as_raw() as usize),
                    (),
                );
            }
        }
        match toposort(&graph, None) {
            Ok(_) => Ok(()),
            Err(cycle) => {
                let module = &self.modules[cycle.node_id().index()];
                Err(NetlistError::CyclicHierarchy {
                    module: interner.resolve(module.name).to_string(),
                })
            }
        }
    }
}
