/*
 * GRN Netlist - Regulatory Network to Logic Netlist Conversion
 *
 * Feature-First Hexagonal Architecture:
 * - shared/      : Document model (modules, interactions, SBO terms)
 * - features/    : Vertical slices (netlist domain, conversion stages)
 * - config/      : Converter configuration (YAML, validation)
 * - export/      : Netlist writers (JSON, DOT)
 *
 * Pipeline:
 *   root module → nodes → resolved interactions → edges → gate types
 */

#![allow(clippy::new_without_default)] // Default impl not always needed
#![allow(clippy::module_inception)] // Module naming intentional

// ═══════════════════════════════════════════════════════════════════════════
// Module Exports - Feature-First Architecture
// ═══════════════════════════════════════════════════════════════════════════

/// Shared document models
pub mod shared;

/// Feature modules (netlist domain, conversion stages)
pub mod features;

/// Configuration system
pub mod config;

/// Netlist writers
pub mod export;

/// Error types
pub mod errors;

// ═══════════════════════════════════════════════════════════════════════════
// Re-exports for Public API
// ═══════════════════════════════════════════════════════════════════════════

pub use config::{ClassifierKind, ConverterConfig};
pub use errors::{NetlistError, Result};
pub use features::conversion::{
    GateClassifier, NetlistConverter, SinglePassClassifier, TwoPassClassifier,
};
pub use features::netlist::{EdgeId, GateType, Netlist, NetlistEdge, NetlistNode, NodeId};
pub use shared::models::{Document, LogicOperator};

/// Convert a document with the default configuration (two-pass classifier,
/// first root module).
pub fn convert(document: &Document) -> Result<Netlist> {
    NetlistConverter::new(ConverterConfig::default()).convert(document)
}
