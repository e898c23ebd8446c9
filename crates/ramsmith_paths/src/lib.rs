//! Hierarchical signal-path construction.
//!
//! This crate turns a destination net name (possibly dotted, naming a net
//! deep inside the module hierarchy) into the set of [`GraphPath`]s that
//! reach it from primary inputs. The pipeline is:
//!
//! 1. [`resolve_net_hierarchy`] — walk the dotted name down the instance
//!    tree to find the module that owns the terminal net,
//! 2. [`driver_chain`] — descend through sub-modules to the primitive that
//!    ultimately drives the net,
//! 3. [`construct_paths`] — enumerate, ground, and lift the paths back up
//!    through every hierarchy level the chain covered.
//!
//! [`create_graph`] strings the three together with default [`PathLimits`].

#![warn(missing_docs)]

mod construct;
mod driver;
mod error;
mod graph;
mod hierarchy;
mod limits;

pub use construct::construct_paths;
pub use driver::{driver_chain, find_net_driver, ChainLink, ChainTail, DriverChain, NetDriver};
pub use error::PathError;
pub use graph::{GraphNode, GraphPath};
pub use hierarchy::resolve_net_hierarchy;
pub use limits::PathLimits;

use ramsmith_common::Interner;
use ramsmith_diagnostics::DiagnosticSink;
use ramsmith_netlist::{Design, ModuleId};

/// Constructs all paths reaching `destination_net` within `module`, using
/// default traversal limits.
///
/// `destination_net` may be a dotted hierarchical name; the search is rooted
/// at `module` and descends through the named instances before resolving the
/// terminal net's driver. See [`create_graph_with_limits`] for the bounds.
pub fn create_graph(
    destination_net: &str,
    module: ModuleId,
    design: &Design,
    interner: &Interner,
    sink: &DiagnosticSink,
) -> Result<Vec<GraphPath>, PathError> {
    create_graph_with_limits(
        destination_net,
        module,
        &PathLimits::default(),
        design,
        interner,
        sink,
    )
}

/// Constructs all paths reaching `destination_net` within `module`, bounded
/// by `limits`.
///
/// Paths are constructed relative to the innermost module named by the
/// hierarchical prefix: the returned paths stop at that module's pins rather
/// than being re-expressed in `module`'s net-name space.
pub fn create_graph_with_limits(
    destination_net: &str,
    module: ModuleId,
    limits: &PathLimits,
    design: &Design,
    interner: &Interner,
    sink: &DiagnosticSink,
) -> Result<Vec<GraphPath>, PathError> {
    sink.trace(
        1,
        format!(
            "constructing paths for net '{destination_net}' in module '{}'",
            interner.resolve(design.module(module).name)
        ),
    );
    let (net, hierarchy) = resolve_net_hierarchy(destination_net, module, design, interner, sink)?;
    // The terminal net lives in the innermost module of the resolved scope.
    let owner = *hierarchy
        .last()
        .unwrap_or(&module);
    let chain = driver_chain(net, owner, design, interner, sink)?;
    let paths = construct_paths(&chain, 0, limits, design, interner, sink)?;
    sink.trace(
        1,
        format!("{} paths constructed for net '{destination_net}'", paths.len()),
    );
    Ok(paths)
}
