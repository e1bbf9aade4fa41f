//! Conversion Ports - Interface Layer (Hexagonal Architecture)
//!
//! Defines the gate classification interface. Implementations:
//! - `TwoPassClassifier` (infrastructure/two_pass.rs): role-pattern inference
//! - `SinglePassClassifier` (infrastructure/single_pass.rs): fixed operator table

use crate::errors::Result;
use crate::features::conversion::domain::ResolvedInteraction;
use crate::features::netlist::Netlist;

// ═══════════════════════════════════════════════════════════════════════════
// Gate Classifier Port
// ═══════════════════════════════════════════════════════════════════════════

/// Assigns a gate type to every node of a netlist whose edges are built
///
/// Implementations label nodes without in-edges `PrimaryInput` and nodes
/// without out-edges `PrimaryOutput` before inferring any logic.
pub trait GateClassifier: Send + Sync {
    /// Short name used in logs and configuration
    fn name(&self) -> &'static str;

    /// Classify every node of `netlist` from the interactions that produced its edges
    fn classify(
        &self,
        netlist: Netlist,
        interactions: &[ResolvedInteraction<'_>],
    ) -> Result<Netlist>;
}
