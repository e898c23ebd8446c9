//! Path construction from a driver chain.
//!
//! Given a [`DriverChain`] ending at a primitive, this module enumerates the
//! primitive's input pins as path sources, resolves any source whose
//! parent-level net is derived (generated by a sibling instance rather than
//! a primary pin), and then propagates the path set upward through every
//! remaining ancestor level of the chain. The result is the complete set of
//! acyclic paths from primary inputs to the chain's destination net.
//!
//! The traversal bounds in [`PathLimits`] are the only defense against
//! cyclic netlists: the depth check guards nested derived resolution, the
//! derived-path counter guards same-level loops that keep re-enqueueing.

use crate::driver::{driver_chain, find_net_driver, ChainTail, DriverChain};
use crate::error::PathError;
use crate::graph::{GraphNode, GraphPath};
use crate::limits::PathLimits;
use ramsmith_common::{InternalError, Interner};
use ramsmith_diagnostics::{Category, Diagnostic, DiagnosticCode, DiagnosticSink};
use ramsmith_netlist::{Design, ModuleId};
use std::collections::VecDeque;

/// Builds one hop per input pin of `driver`, each wrapped as a path source
/// candidate. `tail.connections` is positional over `driver`'s pin list, so
/// the parent-level net of each input pin is read off by index.
fn seed_nodes(
    driver: ModuleId,
    tail: &ChainTail,
    parent: ModuleId,
    design: &Design,
) -> Vec<GraphNode> {
    design
        .module(driver)
        .input_pins()
        .map(|(index, pin)| GraphNode {
            in_net: pin.name,
            out_net: tail.pin,
            module: driver,
            parent_in_net: tail.connections[index],
            parent_out_net: tail.output_net,
            parent_module: parent,
        })
        .collect()
}

/// Constructs every path from a primary input to the destination net of
/// `chain`, within the hierarchy scope the chain covers.
///
/// `depth` is the recursion index of this invocation; the entry point passes
/// 0 and each nested derived resolution adds 1. Both bounds in `limits` are
/// fatal when exceeded: a cyclic netlist must abort, never hang.
pub fn construct_paths(
    chain: &DriverChain,
    depth: usize,
    limits: &PathLimits,
    design: &Design,
    interner: &Interner,
    sink: &DiagnosticSink,
) -> Result<Vec<GraphPath>, PathError> {
    if depth > limits.max_depth {
        let message = format!(
            "path construction exceeded max_depth ({}) while resolving net '{}'; \
             the netlist may contain a cycle",
            limits.max_depth,
            interner.resolve(chain.tail.output_net)
        );
        sink.emit(
            Diagnostic::error(DiagnosticCode::new(Category::Path, 1), &message)
                .with_note("raise max_depth if the hierarchy is genuinely this deep"),
        );
        return Err(PathError::DepthExceeded {
            net: interner.resolve(chain.tail.output_net).to_string(),
            max: limits.max_depth,
        });
    }

    let parent = chain.parent;

    // Seed phase: one candidate path per input pin of the primitive.
    let mut queue: VecDeque<GraphPath> = seed_nodes(chain.driver, &chain.tail, parent, design)
        .into_iter()
        .map(GraphPath::from_node)
        .collect();

    // Derived-input resolution: ground every path's source at a primary pin
    // of `parent`, fanning out through sibling drivers where needed.
    let mut processed: Vec<GraphPath> = Vec::new();
    let mut derived_count = 0usize;

    while let Some(path) = queue.pop_front() {
        let source = *path.source_node();

        if design.module(parent).has_pin(source.parent_in_net) {
            processed.push(path);
            continue;
        }

        derived_count += 1;
        if derived_count > limits.max_adjacent_modules {
            let message = format!(
                "path construction exceeded max_adjacent_modules ({}) in module '{}'; \
                 the netlist may contain a cycle",
                limits.max_adjacent_modules,
                interner.resolve(design.module(parent).name)
            );
            sink.emit(Diagnostic::error(
                DiagnosticCode::new(Category::Path, 2),
                &message,
            ));
            return Err(PathError::AdjacentLimitExceeded {
                module: interner.resolve(design.module(parent).name).to_string(),
                max: limits.max_adjacent_modules,
            });
        }

        let sibling = find_net_driver(source.parent_in_net, parent, design, interner, sink)?;
        if design.module(sibling.module).is_primitive {
            // Fan out: one extended path per input pin of the sibling.
            let tail = ChainTail {
                pin: sibling.pin,
                output_net: source.parent_in_net,
                connections: sibling.connections,
            };
            for node in seed_nodes(sibling.module, &tail, parent, design) {
                queue.push_back(path.prepend_node(node));
            }
        } else {
            // The sibling has interior structure: walk down to its primitive
            // and construct its own sub-paths one recursion level deeper.
            let sub_chain =
                driver_chain(source.parent_in_net, parent, design, interner, sink)?;
            let sub_paths =
                construct_paths(&sub_chain, depth + 1, limits, design, interner, sink)?;
            for sub in &sub_paths {
                queue.push_back(path.prepend_nodes(sub));
            }
        }
    }

    sink.trace(
        3,
        format!(
            "{} grounded paths in module '{}' ({} derived resolutions)",
            processed.len(),
            interner.resolve(design.module(parent).name),
            derived_count
        ),
    );

    // Ancestor propagation: re-express each path's source net one hierarchy
    // level up at a time, nearest ancestor first.
    let mut reference = parent;
    let mut paths = processed;
    for link in chain.ancestors.iter().rev() {
        let ancestor = link.module;
        sink.trace(
            3,
            format!(
                "propagating {} paths for net '{}' into module '{}'",
                paths.len(),
                interner.resolve(link.net),
                interner.resolve(design.module(ancestor).name)
            ),
        );
        let mut lifted: Vec<GraphPath> = Vec::with_capacity(paths.len());
        for path in paths {
            let source = *path.source_node();
            let pin_index = design
                .module(reference)
                .pin_index(source.parent_in_net)
                .ok_or_else(|| {
                    InternalError::new(format!(
                        "path source net '{}' is not a pin of module '{}'",
                        interner.resolve(source.parent_in_net),
                        interner.resolve(design.module(reference).name)
                    ))
                })?;
            let net_in_ancestor = link.connections[pin_index];

            if design.module(ancestor).has_pin(net_in_ancestor) {
                // Already a primary boundary net at this level; just rename
                // the source into the ancestor's net-name space.
                lifted.push(path.with_source_parent_in_net(net_in_ancestor));
            } else {
                // Derived within the ancestor: resolve its driver there and
                // graft the ancestor-local sub-paths onto this path. The
                // fresh sub-walk starts a new depth budget.
                let driver =
                    find_net_driver(net_in_ancestor, ancestor, design, interner, sink)?;
                let sub_chain = DriverChain {
                    ancestors: Vec::new(),
                    parent: ancestor,
                    driver: driver.module,
                    tail: ChainTail {
                        pin: driver.pin,
                        output_net: net_in_ancestor,
                        connections: driver.connections,
                    },
                };
                for sub in construct_paths(&sub_chain, 0, limits, design, interner, sink)? {
                    lifted.push(path.prepend_nodes(&sub));
                }
            }
        }
        paths = lifted;
        reference = ancestor;
    }

    Ok(paths)
}
