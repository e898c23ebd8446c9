//! Dotted hierarchical net-name resolution.
//!
//! A net deep in the hierarchy is addressed as `inst1.inst2.signal`: every
//! segment except the last names an instance, the last names the net inside
//! the module reached. Matching is case-insensitive and tolerates the SPICE
//! convention of a leading `x` on instance names in netlist text (`X5`
//! matches a declared instance `5`).

use crate::error::PathError;
use ramsmith_common::{Ident, Interner};
use ramsmith_diagnostics::{Category, Diagnostic, DiagnosticCode, DiagnosticSink};
use ramsmith_netlist::{Design, Instance, Module, ModuleId};

/// Splits a dotted net name into its terminal net plus the chain of modules
/// traversed via named instances.
///
/// Returns the terminal net name (normalized) and the ordered module chain
/// starting at `root`, one entry appended per resolved instance segment; the
/// last entry is the module that owns the terminal net.
pub fn resolve_net_hierarchy(
    net: &str,
    root: ModuleId,
    design: &Design,
    interner: &Interner,
    sink: &DiagnosticSink,
) -> Result<(Ident, Vec<ModuleId>), PathError> {
    let segments: Vec<&str> = net.split('.').collect();
    let mut hierarchy = vec![root];
    let mut current = root;

    for segment in &segments[..segments.len() - 1] {
        let module = design.module(current);
        match lookup_instance(module, segment, interner) {
            Some(inst) => {
                current = inst.module;
                hierarchy.push(current);
            }
            None => {
                let message = format!(
                    "no instance named '{}' in module '{}'",
                    segment.to_ascii_lowercase(),
                    interner.resolve(module.name)
                );
                sink.emit(Diagnostic::error(
                    DiagnosticCode::new(Category::Hierarchy, 1),
                    &message,
                ));
                return Err(PathError::UnknownInstance {
                    instance: segment.to_ascii_lowercase(),
                    module: interner.resolve(module.name).to_string(),
                });
            }
        }
    }

    // split('.') yields at least one segment even for an empty string.
    let terminal = segments[segments.len() - 1];
    Ok((interner.get_or_intern_lower(terminal), hierarchy))
}

/// Finds the instance a dotted-path segment refers to: exact (normalized)
/// match first, then with the optional leading `x` stripped.
fn lookup_instance<'a>(
    module: &'a Module,
    segment: &str,
    interner: &Interner,
) -> Option<&'a Instance> {
    if let Some(inst) = module.instance_named(interner.get_or_intern_lower(segment)) {
        return Some(inst);
    }
    let stripped = segment.strip_prefix(['x', 'X'])?;
    if stripped.is_empty() {
        return None;
    }
    module.instance_named(interner.get_or_intern_lower(stripped))
}
