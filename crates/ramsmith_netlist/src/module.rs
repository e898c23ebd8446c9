//! Module and instance definitions.
//!
//! A [`Module`] is the unit of hierarchy: an ordered pin interface plus the
//! child [`Instance`]s it contains. Primitive modules (leaf timing cells
//! such as precharge/reset transistor pairs) have no decomposable interior
//! and terminate recursive traversal.

use crate::ids::ModuleId;
use crate::pin::{Pin, PinDirection};
use ramsmith_common::Ident;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// An instantiation of a module inside a parent module.
///
/// The connection list is positional: `connections[i]` is the net, in the
/// *parent's* net-name space, attached to the instantiated module's `i`-th
/// pin. A first-occurrence `net -> pin index` table is built at construction
/// so driver scans avoid repeated linear searches; when a net connects to
/// several pins of the same instance, only its first position is indexed.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Instance {
    /// The instance name (interned lowercase).
    pub name: Ident,
    /// The module being instantiated.
    pub module: ModuleId,
    connections: Vec<Ident>,
    net_index: HashMap<Ident, usize>,
}

impl Instance {
    /// Creates a new instance with the given positional connection list.
    pub fn new(name: Ident, module: ModuleId, connections: Vec<Ident>) -> Self {
        let mut net_index = HashMap::with_capacity(connections.len());
        for (idx, &net) in connections.iter().enumerate() {
            net_index.entry(net).or_insert(idx);
        }
        Self {
            name,
            module,
            connections,
            net_index,
        }
    }

    /// Returns the positional connection list.
    pub fn connections(&self) -> &[Ident] {
        &self.connections
    }

    /// Returns the pin index at which `net` first appears in the connection
    /// list, or `None` if the net is not connected to this instance.
    pub fn net_pin_index(&self, net: Ident) -> Option<usize> {
        self.net_index.get(&net).copied()
    }
}

/// A single module in the design hierarchy.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Module {
    /// The unique ID of this module in the design.
    pub id: ModuleId,
    /// The module name (interned lowercase).
    pub name: Ident,
    /// Whether this module is a primitive delay element (a leaf timing cell
    /// whose input pins are path sources).
    pub is_primitive: bool,
    /// The ordered pin interface.
    pub pins: Vec<Pin>,
    /// Child instances, in declaration order.
    pub instances: Vec<Instance>,
}

impl Module {
    /// Returns the position of the named pin in the pin list, or `None`.
    pub fn pin_index(&self, name: Ident) -> Option<usize> {
        self.pins.iter().position(|p| p.name == name)
    }

    /// Returns `true` if this module declares a pin with the given name.
    pub fn has_pin(&self, name: Ident) -> bool {
        self.pin_index(name).is_some()
    }

    /// Returns the direction of the named pin, or `None`.
    pub fn pin_direction(&self, name: Ident) -> Option<PinDirection> {
        self.pins
            .iter()
            .find(|p| p.name == name)
            .map(|p| p.direction)
    }

    /// Iterates over input-direction pins with their positional index, in
    /// declaration order.
    pub fn input_pins(&self) -> impl Iterator<Item = (usize, &Pin)> {
        self.pins.iter().enumerate().filter(|(_, p)| p.is_input())
    }

    /// Returns the child instance with the given (normalized) name, or `None`.
    pub fn instance_named(&self, name: Ident) -> Option<&Instance> {
        self.instances.iter().find(|i| i.name == name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ident(n: u32) -> Ident {
        Ident::from_raw(n)
    }

    fn two_pin_module() -> Module {
        Module {
            id: ModuleId::from_raw(0),
            name: ident(0),
            is_primitive: true,
            pins: vec![
                Pin::new(ident(1), PinDirection::Input),
                Pin::new(ident(2), PinDirection::Output),
            ],
            instances: Vec::new(),
        }
    }

    #[test]
    fn pin_lookup() {
        let m = two_pin_module();
        assert_eq!(m.pin_index(ident(1)), Some(0));
        assert_eq!(m.pin_index(ident(2)), Some(1));
        assert_eq!(m.pin_index(ident(9)), None);
        assert!(m.has_pin(ident(1)));
        assert!(!m.has_pin(ident(9)));
    }

    #[test]
    fn pin_direction_lookup() {
        let m = two_pin_module();
        assert_eq!(m.pin_direction(ident(1)), Some(PinDirection::Input));
        assert_eq!(m.pin_direction(ident(2)), Some(PinDirection::Output));
        assert_eq!(m.pin_direction(ident(9)), None);
    }

    #[test]
    fn input_pins_ordered() {
        let mut m = two_pin_module();
        m.pins.push(Pin::new(ident(3), PinDirection::Input));
        let inputs: Vec<(usize, Ident)> = m.input_pins().map(|(i, p)| (i, p.name)).collect();
        assert_eq!(inputs, vec![(0, ident(1)), (2, ident(3))]);
    }

    #[test]
    fn instance_net_index_first_occurrence() {
        // Net 5 appears at pins 0 and 2; only the first position is indexed.
        let inst = Instance::new(
            ident(0),
            ModuleId::from_raw(1),
            vec![ident(5), ident(6), ident(5)],
        );
        assert_eq!(inst.net_pin_index(ident(5)), Some(0));
        assert_eq!(inst.net_pin_index(ident(6)), Some(1));
        assert_eq!(inst.net_pin_index(ident(9)), None);
    }

    #[test]
    fn instance_named_scans_declaration_order() {
        let mut m = two_pin_module();
        m.instances.push(Instance::new(
            ident(10),
            ModuleId::from_raw(1),
            Vec::new(),
        ));
        m.instances.push(Instance::new(
            ident(11),
            ModuleId::from_raw(2),
            Vec::new(),
        ));
        assert_eq!(
            m.instance_named(ident(11)).map(|i| i.module),
            Some(ModuleId::from_raw(2))
        );
        assert!(m.instance_named(ident(12)).is_none());
    }

    #[test]
    fn module_serde_roundtrip() {
        let mut m = two_pin_module();
        m.instances.push(Instance::new(
            ident(10),
            ModuleId::from_raw(1),
            vec![ident(5), ident(6)],
        ));
        let json = serde_json::to_string(&m).unwrap();
        let restored: Module = serde_json::from_str(&json).unwrap();
        assert_eq!(restored.pins.len(), 2);
        assert_eq!(restored.instances[0].net_pin_index(ident(6)), Some(1));
    }
}
