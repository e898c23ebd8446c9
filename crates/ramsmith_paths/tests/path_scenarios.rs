//! End-to-end path construction scenarios over hand-built designs.

use ramsmith_common::Interner;
use ramsmith_diagnostics::DiagnosticSink;
use ramsmith_netlist::{Design, ModuleId, PinDirection};
use ramsmith_paths::{create_graph, create_graph_with_limits, PathError, PathLimits};

struct Bench {
    design: Design,
    interner: Interner,
    sink: DiagnosticSink,
}

impl Bench {
    fn new() -> Self {
        Self {
            design: Design::new(),
            interner: Interner::new(),
            sink: DiagnosticSink::new(),
        }
    }

    fn buf(&mut self) -> ModuleId {
        let buf = self.design.add_module("buf", true, &self.interner);
        self.design.add_pin(buf, "a", PinDirection::Input, &self.interner);
        self.design.add_pin(buf, "z", PinDirection::Output, &self.interner);
        buf
    }

    fn nand2(&mut self) -> ModuleId {
        let nand = self.design.add_module("nand2", true, &self.interner);
        self.design.add_pin(nand, "a", PinDirection::Input, &self.interner);
        self.design.add_pin(nand, "b", PinDirection::Input, &self.interner);
        self.design.add_pin(nand, "z", PinDirection::Output, &self.interner);
        nand
    }

    fn name(&self, s: &str) -> ramsmith_common::Ident {
        self.interner.get_or_intern_lower(s)
    }
}

/// A two-input gate feeding a buffer: the derived buffer input fans out into
/// one path per gate input, in pin-declaration order.
#[test]
fn derived_net_fans_out_in_pin_order() {
    let mut b = Bench::new();
    let buf = b.buf();
    let nand = b.nand2();
    let top = b.design.add_module("top", false, &b.interner);
    b.design.add_pin(top, "pa", PinDirection::Input, &b.interner);
    b.design.add_pin(top, "pb", PinDirection::Input, &b.interner);
    b.design.add_pin(top, "out", PinDirection::Output, &b.interner);
    b.design
        .add_instance(top, "xout", buf, &["mid", "out"], &b.interner)
        .unwrap();
    b.design
        .add_instance(top, "xg", nand, &["pa", "pb", "mid"], &b.interner)
        .unwrap();

    let paths = create_graph("out", top, &b.design, &b.interner, &b.sink).unwrap();
    assert_eq!(paths.len(), 2);
    assert_eq!(paths[0].source_node().parent_in_net, b.name("pa"));
    assert_eq!(paths[1].source_node().parent_in_net, b.name("pb"));
    for p in &paths {
        assert_eq!(p.len(), 2);
        assert_eq!(p.destination_node().parent_out_net, b.name("out"));
        // The hand-off net between the two hops is consistent.
        assert_eq!(p.source_node().parent_out_net, b.name("mid"));
        assert_eq!(p.destination_node().parent_in_net, b.name("mid"));
    }
}

/// Driver buried two levels down: the chain records both levels and ancestor
/// propagation lifts the source net back to the top module's pin.
#[test]
fn driver_buried_two_levels_down() {
    let mut b = Bench::new();
    let buf = b.buf();
    // inner: ia -> iz via a buffer.
    let inner = b.design.add_module("inner", false, &b.interner);
    b.design.add_pin(inner, "ia", PinDirection::Input, &b.interner);
    b.design.add_pin(inner, "iz", PinDirection::Output, &b.interner);
    b.design
        .add_instance(inner, "xb", buf, &["ia", "iz"], &b.interner)
        .unwrap();
    // mid: ma -> mz via inner.
    let mid = b.design.add_module("mid", false, &b.interner);
    b.design.add_pin(mid, "ma", PinDirection::Input, &b.interner);
    b.design.add_pin(mid, "mz", PinDirection::Output, &b.interner);
    b.design
        .add_instance(mid, "xi", inner, &["ma", "mz"], &b.interner)
        .unwrap();
    let top = b.design.add_module("top", false, &b.interner);
    b.design.add_pin(top, "tin", PinDirection::Input, &b.interner);
    b.design.add_pin(top, "tout", PinDirection::Output, &b.interner);
    b.design
        .add_instance(top, "xm", mid, &["tin", "tout"], &b.interner)
        .unwrap();

    let paths = create_graph("tout", top, &b.design, &b.interner, &b.sink).unwrap();
    assert_eq!(paths.len(), 1);
    let path = &paths[0];
    assert_eq!(path.len(), 1);
    // The single primitive hop is grounded at top's own input pin after two
    // levels of ancestor propagation.
    assert_eq!(path.source_node().module, buf);
    assert_eq!(path.source_node().parent_in_net, b.name("tin"));
    assert_eq!(path.source_node().parent_out_net, b.name("iz"));
    assert!(!b.sink.has_errors());
}

/// A derived net inside an ancestor level: while lifting a path upward, the
/// translated source net is itself driven by a sibling in that ancestor, so
/// the ancestor's sub-paths are grafted on.
#[test]
fn ancestor_level_derived_net_extends_path() {
    let mut b = Bench::new();
    let buf = b.buf();
    // leaf: la -> lz via a buffer.
    let leaf = b.design.add_module("leaf", false, &b.interner);
    b.design.add_pin(leaf, "la", PinDirection::Input, &b.interner);
    b.design.add_pin(leaf, "lz", PinDirection::Output, &b.interner);
    b.design
        .add_instance(leaf, "xb", buf, &["la", "lz"], &b.interner)
        .unwrap();
    // top: a pre-buffer generates the net feeding the leaf instance.
    let top = b.design.add_module("top", false, &b.interner);
    b.design.add_pin(top, "ta", PinDirection::Input, &b.interner);
    b.design.add_pin(top, "tout", PinDirection::Output, &b.interner);
    b.design
        .add_instance(top, "xpre", buf, &["ta", "gen"], &b.interner)
        .unwrap();
    b.design
        .add_instance(top, "xleaf", leaf, &["gen", "tout"], &b.interner)
        .unwrap();

    let paths = create_graph("tout", top, &b.design, &b.interner, &b.sink).unwrap();
    assert_eq!(paths.len(), 1);
    let path = &paths[0];
    // Pre-buffer hop grafted ahead of the leaf's interior hop.
    assert_eq!(path.len(), 2);
    assert_eq!(path.source_node().parent_in_net, b.name("ta"));
    assert_eq!(path.source_node().parent_out_net, b.name("gen"));
    assert_eq!(path.destination_node().parent_out_net, b.name("lz"));
}

/// Hierarchical instance names tolerate an 'x' prefix and are matched
/// case-insensitively.
#[test]
fn hierarchical_name_prefix_and_case_tolerance() {
    let mut b = Bench::new();
    let buf = b.buf();
    let core = b.design.add_module("core", false, &b.interner);
    b.design.add_pin(core, "ca", PinDirection::Input, &b.interner);
    b.design.add_pin(core, "cz", PinDirection::Output, &b.interner);
    b.design
        .add_instance(core, "xdrv", buf, &["ca", "cz"], &b.interner)
        .unwrap();
    let top = b.design.add_module("top", false, &b.interner);
    b.design.add_pin(top, "in", PinDirection::Input, &b.interner);
    b.design.add_pin(top, "out", PinDirection::Output, &b.interner);
    b.design
        .add_instance(top, "xcore", core, &["in", "out"], &b.interner)
        .unwrap();

    for spelling in ["xcore.cz", "XCORE.CZ", "XCore.cz"] {
        let paths = create_graph(spelling, top, &b.design, &b.interner, &b.sink).unwrap();
        assert_eq!(paths.len(), 1, "spelling {spelling:?}");
    }
}

/// A flat cross-coupled loop cannot be grounded; the derived-path counter
/// aborts the walk instead of spinning forever.
#[test]
fn cross_coupled_loop_is_rejected() {
    let mut b = Bench::new();
    let buf = b.buf();
    let top = b.design.add_module("latchy", false, &b.interner);
    b.design.add_pin(top, "q", PinDirection::Output, &b.interner);
    b.design
        .add_instance(top, "x0", buf, &["n1", "n0"], &b.interner)
        .unwrap();
    b.design
        .add_instance(top, "x1", buf, &["n0", "n1"], &b.interner)
        .unwrap();
    b.design
        .add_instance(top, "xq", buf, &["n0", "q"], &b.interner)
        .unwrap();

    let err = create_graph("q", top, &b.design, &b.interner, &b.sink).unwrap_err();
    assert!(matches!(
        err,
        PathError::AdjacentLimitExceeded { max: 50, .. }
    ));
    assert!(b.sink.has_errors());
    // A tiny limit trips after proportionally less work.
    let limits = PathLimits {
        max_adjacent_modules: 3,
        ..PathLimits::default()
    };
    let sink = DiagnosticSink::new();
    let err =
        create_graph_with_limits("q", top, &limits, &b.design, &b.interner, &sink).unwrap_err();
    assert!(matches!(err, PathError::AdjacentLimitExceeded { max: 3, .. }));
}

/// Nested derived resolution respects max_depth.
#[test]
fn nesting_beyond_max_depth_is_rejected() {
    let mut b = Bench::new();
    let buf = b.buf();
    let wrap = b.design.add_module("wrap", false, &b.interner);
    b.design.add_pin(wrap, "a", PinDirection::Input, &b.interner);
    b.design.add_pin(wrap, "z", PinDirection::Output, &b.interner);
    b.design
        .add_instance(wrap, "xb", buf, &["a", "z"], &b.interner)
        .unwrap();
    let top = b.design.add_module("top", false, &b.interner);
    b.design.add_pin(top, "in", PinDirection::Input, &b.interner);
    b.design.add_pin(top, "out", PinDirection::Output, &b.interner);
    b.design
        .add_instance(top, "xo", buf, &["mid", "out"], &b.interner)
        .unwrap();
    b.design
        .add_instance(top, "xw", wrap, &["in", "mid"], &b.interner)
        .unwrap();

    let limits = PathLimits {
        max_depth: 0,
        ..PathLimits::default()
    };
    let err =
        create_graph_with_limits("out", top, &limits, &b.design, &b.interner, &b.sink).unwrap_err();
    assert!(matches!(err, PathError::DepthExceeded { max: 0, .. }));

    // With the default bound the same netlist resolves cleanly.
    let sink = DiagnosticSink::new();
    let paths = create_graph("out", top, &b.design, &b.interner, &sink).unwrap();
    assert_eq!(paths.len(), 1);
    assert_eq!(paths[0].len(), 2);
    assert!(!sink.has_errors());
}

/// Repeated construction over the same design yields identical path sets.
#[test]
fn construction_is_deterministic() {
    let mut b = Bench::new();
    let buf = b.buf();
    let nand = b.nand2();
    let top = b.design.add_module("top", false, &b.interner);
    b.design.add_pin(top, "pa", PinDirection::Input, &b.interner);
    b.design.add_pin(top, "pb", PinDirection::Input, &b.interner);
    b.design.add_pin(top, "pc", PinDirection::Input, &b.interner);
    b.design.add_pin(top, "out", PinDirection::Output, &b.interner);
    b.design
        .add_instance(top, "xo", nand, &["m0", "pc", "out"], &b.interner)
        .unwrap();
    b.design
        .add_instance(top, "xg", nand, &["pa", "pb", "m0"], &b.interner)
        .unwrap();
    b.design
        .add_instance(top, "xbuf", buf, &["pa", "unused"], &b.interner)
        .unwrap();

    let first = create_graph("out", top, &b.design, &b.interner, &b.sink).unwrap();
    let second = create_graph("out", top, &b.design, &b.interner, &b.sink).unwrap();
    assert_eq!(first, second);
    assert_eq!(first.len(), 3);
}

/// Multi-hop rendering keeps one hop per line, source first.
#[test]
fn multi_hop_render() {
    let mut b = Bench::new();
    let buf = b.buf();
    let top = b.design.add_module("top", false, &b.interner);
    b.design.add_pin(top, "in", PinDirection::Input, &b.interner);
    b.design.add_pin(top, "out", PinDirection::Output, &b.interner);
    b.design
        .add_instance(top, "x0", buf, &["in", "n0"], &b.interner)
        .unwrap();
    b.design
        .add_instance(top, "x1", buf, &["n0", "out"], &b.interner)
        .unwrap();

    let paths = create_graph("out", top, &b.design, &b.interner, &b.sink).unwrap();
    assert_eq!(paths.len(), 1);
    assert_eq!(
        paths[0].render(&b.design, &b.interner),
        "in:a -> |buf| -> z:n0\nn0:a -> |buf| -> z:out"
    );
}
