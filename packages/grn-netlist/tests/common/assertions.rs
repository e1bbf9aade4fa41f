//! Custom assertions for netlists

use grn_netlist::{GateType, Netlist};

/// Assert that the node named `name` carries `expected`
pub fn assert_gate(netlist: &Netlist, name: &str, expected: GateType) {
    let node = netlist
        .find_node(name)
        .unwrap_or_else(|| panic!("node '{}' not found in netlist", name));
    assert_eq!(
        node.gate_type(),
        expected,
        "node '{}' has gate {:?}, expected {:?}",
        name,
        node.gate_type(),
        expected
    );
}

/// Assert the `(edge, src, dst)` triples of a netlist in insertion order
pub fn assert_edges(netlist: &Netlist, expected: &[(&str, &str, &str)]) {
    let actual: Vec<(&str, &str, &str)> = netlist
        .edges()
        .iter()
        .map(|edge| {
            let (src, dst) = netlist.endpoint_names(edge);
            (edge.name(), src, dst)
        })
        .collect();
    assert_eq!(actual, expected);
}

/// Assert that boundary labels follow the edge structure
pub fn assert_boundary_labels(netlist: &Netlist) {
    for node in netlist.nodes() {
        if node.num_in_edges() == 0 {
            assert_eq!(
                node.gate_type(),
                GateType::PrimaryInput,
                "node '{}' has no in-edges",
                node.name()
            );
        } else if node.num_out_edges() == 0 {
            assert_eq!(
                node.gate_type(),
                GateType::PrimaryOutput,
                "node '{}' has no out-edges",
                node.name()
            );
        } else {
            assert!(
                !node.gate_type().is_boundary(),
                "interior node '{}' labelled {:?}",
                node.name(),
                node.gate_type()
            );
        }
    }
}
