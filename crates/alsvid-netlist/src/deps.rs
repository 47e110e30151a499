//! Wire-dependency analysis over the gate list.
//!
//! The gate list order is the dependency order: a gate may read, as an
//! operand, only input cells or wires produced by an earlier gate, and
//! every wire has exactly one producer.

use petgraph::algo::toposort;
use petgraph::graph::{DiGraph, NodeIndex};
use rustc_hash::FxHashSet;

use alsvid_ir::CellId;

use crate::error::{NetlistError, NetlistResult};
use crate::netlist::Netlist;

/// Check the single-writer and definition-order discipline.
pub(crate) fn check_wires(netlist: &Netlist) -> NetlistResult<()> {
    let input = netlist.layout().input();
    let mut written: FxHashSet<CellId> = FxHashSet::default();

    for record in netlist.gates() {
        for operand in record.gate.operands() {
            if !input.contains(operand) && !written.contains(&operand) {
                return Err(NetlistError::UseBeforeDefinition { cell: operand });
            }
        }
        if input.contains(record.target) {
            return Err(NetlistError::WriteToInput {
                cell: record.target,
            });
        }
        if !written.insert(record.target) {
            return Err(NetlistError::RewrittenCell {
                cell: record.target,
            });
        }
    }
    Ok(())
}

/// Length of the longest dependency chain, counted in gates.
///
/// Builds the wire graph with one node per declared cell and an edge
/// from each operand to its gate's target, then walks it in
/// topological order.
pub(crate) fn logic_depth(netlist: &Netlist) -> usize {
    let total = netlist.total_cells() as usize;
    let mut graph: DiGraph<(), ()> = DiGraph::with_capacity(total, netlist.gates().len() * 2);
    let nodes: Vec<NodeIndex> = (0..total).map(|_| graph.add_node(())).collect();

    let mut targets: FxHashSet<NodeIndex> = FxHashSet::default();
    for record in netlist.gates() {
        let target = nodes[record.target.0 as usize];
        targets.insert(target);
        for operand in record.gate.operands() {
            graph.add_edge(nodes[operand.0 as usize], target, ());
        }
    }

    let order = match toposort(&graph, None) {
        Ok(order) => order,
        // validated netlists are acyclic
        Err(_) => return netlist.gates().len(),
    };

    let mut depth = vec![0usize; total];
    let mut longest = 0;
    for node in order {
        if !targets.contains(&node) {
            continue;
        }
        // a written cell costs one gate on top of its deepest operand
        let own = 1 + graph
            .neighbors_directed(node, petgraph::Direction::Incoming)
            .map(|n| depth[n.index()])
            .max()
            .unwrap_or(0);
        depth[node.index()] = own;
        longest = longest.max(own);
    }
    longest
}
