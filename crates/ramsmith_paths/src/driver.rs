//! Net driver resolution and the recursive driver hierarchy walk.
//!
//! [`find_net_driver`] answers "which instance/pin sources this net" inside
//! one module. [`driver_chain`] applies it repeatedly, descending through
//! sub-modules until a primitive delay element is reached; the resulting
//! [`DriverChain`] is the input shape the path constructor consumes.

use crate::error::PathError;
use ramsmith_common::{Ident, Interner};
use ramsmith_diagnostics::{Category, Diagnostic, DiagnosticCode, DiagnosticSink};
use ramsmith_netlist::{Design, ModuleId, PinDirection};

/// The resolved driver of a net within a module.
#[derive(Debug, Clone)]
pub struct NetDriver {
    /// The driving pin on the instantiated module.
    pub pin: Ident,
    /// The module being instantiated by the driving instance.
    pub module: ModuleId,
    /// The driving instance's full positional connection list.
    pub connections: Vec<Ident>,
}

/// One ancestor level of a driver chain: a module, the net resolved inside
/// it, and the connection list of the instance the walk descended through.
#[derive(Debug, Clone)]
pub struct ChainLink {
    /// The module at this hierarchy level.
    pub module: ModuleId,
    /// The net that was resolved in this module's net-name space.
    pub net: Ident,
    /// The connection list of the driving instance at this level.
    pub connections: Vec<Ident>,
}

/// The primitive end of a driver chain.
#[derive(Debug, Clone)]
pub struct ChainTail {
    /// The driving pin on the primitive.
    pub pin: Ident,
    /// The driven net, in the immediate parent's net-name space.
    pub output_net: Ident,
    /// The primitive instance's full positional connection list.
    pub connections: Vec<Ident>,
}

/// A driver hierarchy: the ancestor levels traversed (most distant first),
/// the module immediately instantiating the primitive, the primitive module
/// itself, and the tail describing the driving pin.
#[derive(Debug, Clone)]
pub struct DriverChain {
    /// Ancestor levels still to be propagated through, root-most first.
    pub ancestors: Vec<ChainLink>,
    /// The module instantiating the primitive driver.
    pub parent: ModuleId,
    /// The primitive module finally reached.
    pub driver: ModuleId,
    /// The driving pin, driven net, and connection list at the primitive.
    pub tail: ChainTail,
}

/// Resolves which instance/pin drives `net` within `module`.
///
/// Instances are scanned in declaration order. The first instance whose
/// matching pin is an output wins immediately; if no output match exists
/// anywhere, the *last* inout match is used as fallback. A net whose first
/// connection-list occurrence on an instance is an input pin does not make
/// that instance a candidate. Multiply-driven nets are not flagged; the
/// scan order makes the choice deterministic.
pub fn find_net_driver(
    net: Ident,
    module: ModuleId,
    design: &Design,
    interner: &Interner,
    sink: &DiagnosticSink,
) -> Result<NetDriver, PathError> {
    let owner = design.module(module);
    let mut inout_fallback: Option<NetDriver> = None;

    for inst in &owner.instances {
        let Some(pin_index) = inst.net_pin_index(net) else {
            continue;
        };
        let child = design.module(inst.module);
        let pin = &child.pins[pin_index];
        match pin.direction {
            PinDirection::Output => {
                sink.trace(
                    2,
                    format!(
                        "net '{}' driven by output pin '{}' of instance '{}' ({}) in module '{}'",
                        interner.resolve(net),
                        interner.resolve(pin.name),
                        interner.resolve(inst.name),
                        interner.resolve(child.name),
                        interner.resolve(owner.name),
                    ),
                );
                return Ok(NetDriver {
                    pin: pin.name,
                    module: inst.module,
                    connections: inst.connections().to_vec(),
                });
            }
            PinDirection::Inout => {
                // Last inout candidate wins if no output is found.
                inout_fallback = Some(NetDriver {
                    pin: pin.name,
                    module: inst.module,
                    connections: inst.connections().to_vec(),
                });
            }
            PinDirection::Input => {}
        }
    }

    inout_fallback.ok_or_else(|| {
        let message = format!(
            "net '{}' is not driven by an output or inout pin in module '{}'",
            interner.resolve(net),
            interner.resolve(owner.name)
        );
        sink.emit(Diagnostic::error(
            DiagnosticCode::new(Category::Driver, 1),
            &message,
        ));
        PathError::UndrivenNet {
            net: interner.resolve(net).to_string(),
            module: interner.resolve(owner.name).to_string(),
        }
    })
}

/// Descends from `parent` through sub-modules until the driver of `net` is a
/// primitive, recording each traversed level.
///
/// If the immediate driver is already primitive the chain has no ancestor
/// links; otherwise each level of descent prepends a [`ChainLink`], leaving
/// the original caller's module first in `ancestors`.
pub fn driver_chain(
    net: Ident,
    parent: ModuleId,
    design: &Design,
    interner: &Interner,
    sink: &DiagnosticSink,
) -> Result<DriverChain, PathError> {
    let driver = find_net_driver(net, parent, design, interner, sink)?;
    if design.module(driver.module).is_primitive {
        sink.trace(
            2,
            format!(
                "driver chain for net '{}' terminates at primitive '{}'",
                interner.resolve(net),
                interner.resolve(design.module(driver.module).name),
            ),
        );
        return Ok(DriverChain {
            ancestors: Vec::new(),
            parent,
            driver: driver.module,
            tail: ChainTail {
                pin: driver.pin,
                output_net: net,
                connections: driver.connections,
            },
        });
    }

    let mut chain = driver_chain(driver.pin, driver.module, design, interner, sink)?;
    chain.ancestors.insert(
        0,
        ChainLink {
            module: parent,
            net,
            connections: driver.connections,
        },
    );
    Ok(chain)
}
