//! Netlist JSON writer
//!
//! Nodes and edges are written in insertion order; edges refer to their
//! endpoints by node name.

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::errors::Result;
use crate::features::netlist::{GateType, Netlist};

/// Serialized netlist
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NetlistJson {
    pub name: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub input_filename: Option<String>,

    pub nodes: Vec<NodeJson>,
    pub edges: Vec<EdgeJson>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NodeJson {
    pub name: String,
    pub node_type: GateType,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EdgeJson {
    pub name: String,
    pub src: String,
    pub dst: String,
}

impl From<&Netlist> for NetlistJson {
    fn from(netlist: &Netlist) -> Self {
        Self {
            name: netlist.name().unwrap_or_default().to_string(),
            input_filename: netlist.input_filename().map(str::to_string),
            nodes: netlist
                .nodes()
                .iter()
                .map(|node| NodeJson {
                    name: node.name().to_string(),
                    node_type: node.gate_type(),
                })
                .collect(),
            edges: netlist
                .edges()
                .iter()
                .map(|edge| {
                    let (src, dst) = netlist.endpoint_names(edge);
                    EdgeJson {
                        name: edge.name().to_string(),
                        src: src.to_string(),
                        dst: dst.to_string(),
                    }
                })
                .collect(),
        }
    }
}

/// Pretty-printed JSON for a netlist
pub fn to_json_string(netlist: &Netlist) -> Result<String> {
    Ok(serde_json::to_string_pretty(&NetlistJson::from(netlist))?)
}

/// Write a netlist as JSON to `path`
pub fn write_json(netlist: &Netlist, path: impl AsRef<Path>) -> Result<()> {
    std::fs::write(path, to_json_string(netlist)?)?;
    Ok(())
}
