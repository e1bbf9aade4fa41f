// Netlist Domain Models
//
// Arena-style graph: nodes and edges live in insertion-ordered vectors and
// refer to each other through typed indices.

use serde::{Deserialize, Serialize};

use crate::errors::{NetlistError, ReferenceKind, Result};

// ============================================================
// Identifiers
// ============================================================

/// Index of a node in its netlist
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct NodeId(pub u32);

/// Index of an edge in its netlist
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct EdgeId(pub u32);

impl NodeId {
    #[inline]
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

impl EdgeId {
    #[inline]
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

// ============================================================
// Gate Type
// ============================================================

/// Logic function assigned to a netlist node
///
/// Serialized with the names the downstream stages expect.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum GateType {
    #[serde(rename = "PRIMARY_INPUT")]
    PrimaryInput,
    #[serde(rename = "PRIMARY_OUTPUT")]
    PrimaryOutput,
    #[serde(rename = "AND")]
    And,
    #[serde(rename = "OR")]
    Or,
    #[serde(rename = "NAND")]
    Nand,
    #[serde(rename = "NOR")]
    Nor,
    #[serde(rename = "NOT")]
    Not,
    #[serde(rename = "BUF")]
    Buf,
    /// No gate could be inferred
    #[default]
    #[serde(rename = "")]
    Unset,
}

impl GateType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::PrimaryInput => "PRIMARY_INPUT",
            Self::PrimaryOutput => "PRIMARY_OUTPUT",
            Self::And => "AND",
            Self::Or => "OR",
            Self::Nand => "NAND",
            Self::Nor => "NOR",
            Self::Not => "NOT",
            Self::Buf => "BUF",
            Self::Unset => "",
        }
    }

    /// Primary input or primary output
    pub fn is_boundary(&self) -> bool {
        matches!(self, Self::PrimaryInput | Self::PrimaryOutput)
    }

    /// One of the inferred logic functions
    pub fn is_logic(&self) -> bool {
        !self.is_boundary() && *self != Self::Unset
    }
}

impl std::fmt::Display for GateType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

// ============================================================
// Node / Edge
// ============================================================

/// Netlist node: one molecular species
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NetlistNode {
    id: NodeId,
    name: String,
    in_edges: Vec<EdgeId>,
    out_edges: Vec<EdgeId>,
    gate_type: GateType,
}

impl NetlistNode {
    pub fn id(&self) -> NodeId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Incoming edges in insertion order
    pub fn in_edges(&self) -> &[EdgeId] {
        &self.in_edges
    }

    /// Outgoing edges in insertion order
    pub fn out_edges(&self) -> &[EdgeId] {
        &self.out_edges
    }

    pub fn gate_type(&self) -> GateType {
        self.gate_type
    }

    pub fn num_in_edges(&self) -> usize {
        self.in_edges.len()
    }

    pub fn num_out_edges(&self) -> usize {
        self.out_edges.len()
    }
}

/// Netlist edge: `src` regulates `dst`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NetlistEdge {
    id: EdgeId,
    name: String,
    src: NodeId,
    dst: NodeId,
}

impl NetlistEdge {
    pub fn id(&self) -> EdgeId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn src(&self) -> NodeId {
        self.src
    }

    pub fn dst(&self) -> NodeId {
        self.dst
    }
}

// ============================================================
// Netlist
// ============================================================

/// Directed gate graph produced by a conversion
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Netlist {
    name: Option<String>,
    input_filename: Option<String>,
    nodes: Vec<NetlistNode>,
    edges: Vec<NetlistEdge>,
}

impl Netlist {
    /// Empty, unnamed netlist
    pub fn new() -> Self {
        Self::default()
    }

    /// Empty netlist with a name
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            ..Self::default()
        }
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = Some(name.into());
    }

    pub fn input_filename(&self) -> Option<&str> {
        self.input_filename.as_deref()
    }

    pub fn set_input_filename(&mut self, filename: impl Into<String>) {
        self.input_filename = Some(filename.into());
    }

    /// Append a node with an unset gate type
    pub fn add_node(&mut self, name: impl Into<String>) -> NodeId {
        let id = NodeId(self.nodes.len() as u32);
        self.nodes.push(NetlistNode {
            id,
            name: name.into(),
            in_edges: Vec::new(),
            out_edges: Vec::new(),
            gate_type: GateType::Unset,
        });
        id
    }

    /// Append an edge `src → dst` and register it on both endpoints
    ///
    /// Both endpoints must already be part of this netlist.
    pub fn add_edge(&mut self, name: impl Into<String>, src: NodeId, dst: NodeId) -> Result<EdgeId> {
        for endpoint in [src, dst] {
            if endpoint.index() >= self.nodes.len() {
                return Err(NetlistError::unresolved(
                    ReferenceKind::Node,
                    format!("{:?}", endpoint),
                ));
            }
        }

        let id = EdgeId(self.edges.len() as u32);
        self.edges.push(NetlistEdge {
            id,
            name: name.into(),
            src,
            dst,
        });
        self.nodes[src.index()].out_edges.push(id);
        self.nodes[dst.index()].in_edges.push(id);
        Ok(id)
    }

    pub fn set_gate_type(&mut self, id: NodeId, gate_type: GateType) -> Result<()> {
        let node = self
            .nodes
            .get_mut(id.index())
            .ok_or_else(|| NetlistError::unresolved(ReferenceKind::Node, format!("{:?}", id)))?;
        node.gate_type = gate_type;
        Ok(())
    }

    pub fn node(&self, id: NodeId) -> Option<&NetlistNode> {
        self.nodes.get(id.index())
    }

    pub fn edge(&self, id: EdgeId) -> Option<&NetlistEdge> {
        self.edges.get(id.index())
    }

    /// First node with the given name
    pub fn find_node(&self, name: &str) -> Option<&NetlistNode> {
        self.nodes.iter().find(|n| n.name == name)
    }

    /// First edge with the given name
    pub fn find_edge(&self, name: &str) -> Option<&NetlistEdge> {
        self.edges.iter().find(|e| e.name == name)
    }

    /// Nodes in insertion order
    pub fn nodes(&self) -> &[NetlistNode] {
        &self.nodes
    }

    /// Edges in insertion order
    pub fn edges(&self) -> &[NetlistEdge] {
        &self.edges
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty() && self.edges.is_empty()
    }

    /// Names of an edge's source and destination nodes
    pub fn endpoint_names(&self, edge: &NetlistEdge) -> (&str, &str) {
        (
            self.nodes[edge.src.index()].name(),
            self.nodes[edge.dst.index()].name(),
        )
    }

    pub fn stats(&self) -> NetlistStats {
        let mut stats = NetlistStats {
            nodes: self.nodes.len(),
            edges: self.edges.len(),
            ..NetlistStats::default()
        };
        for node in &self.nodes {
            match node.gate_type {
                GateType::PrimaryInput => stats.primary_inputs += 1,
                GateType::PrimaryOutput => stats.primary_outputs += 1,
                GateType::Unset => stats.unset += 1,
                _ => stats.logic_gates += 1,
            }
        }
        stats
    }
}

/// Node/edge counts by gate category
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NetlistStats {
    pub nodes: usize,
    pub edges: usize,
    pub primary_inputs: usize,
    pub primary_outputs: usize,
    pub logic_gates: usize,
    pub unset: usize,
}

// ============================================================
// Tests
// ============================================================
