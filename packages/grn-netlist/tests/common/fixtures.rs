//! Test fixtures
//!
//! Small regulatory networks with known gate assignments.

use grn_netlist::{Document, LogicOperator};

use super::builders::{DocumentBuilder, InteractionBuilder};

/// `In1`, `In2` jointly stimulate `G`, which inhibits `Out`
///
/// Two-pass result: `G` is NOR for `or`, NAND for `and`.
pub fn two_stimulator_gate(logic: LogicOperator) -> Document {
    DocumentBuilder::new("two_stimulator_gate")
        .species_list(&["In1", "In2", "G", "Out"])
        .interaction(
            InteractionBuilder::stimulation("drive_g")
                .stimulator("In1")
                .stimulator("In2")
                .stimulated("G")
                .logic(logic),
        )
        .interaction(
            InteractionBuilder::inhibition("g_represses_out")
                .inhibitor("G")
                .inhibited("Out"),
        )
        .build()
}

/// `In1`, `In2` jointly inhibit `G`, which inhibits `Out`
///
/// Two-pass result: `G` is NAND for `nor`, NOR for `nand`.
pub fn two_inhibitor_gate(logic: LogicOperator) -> Document {
    DocumentBuilder::new("two_inhibitor_gate")
        .species_list(&["In1", "In2", "G", "Out"])
        .interaction(
            InteractionBuilder::inhibition("repress_g")
                .inhibitor("In1")
                .inhibitor("In2")
                .inhibited("G")
                .logic(logic),
        )
        .interaction(
            InteractionBuilder::inhibition("g_represses_out")
                .inhibitor("G")
                .inhibited("Out"),
        )
        .build()
}

/// `A` inhibits `B`, `B` inhibits `C` (B is NOT)
pub fn inverter_chain() -> Document {
    DocumentBuilder::new("inverter_chain")
        .species_list(&["A", "B", "C"])
        .interaction(InteractionBuilder::inhibition("a_b").inhibitor("A").inhibited("B"))
        .interaction(InteractionBuilder::inhibition("b_c").inhibitor("B").inhibited("C"))
        .build()
}

/// `A` inhibits `B`, `B` stimulates `C` (B is BUF)
pub fn buffer_chain() -> Document {
    DocumentBuilder::new("buffer_chain")
        .species_list(&["A", "B", "C"])
        .interaction(InteractionBuilder::inhibition("a_b").inhibitor("A").inhibited("B"))
        .interaction(
            InteractionBuilder::stimulation("b_c")
                .stimulator("B")
                .stimulated("C"),
        )
        .build()
}

/// Four-node cascade: `X1`, `X2` repress `X3` (nor), `X3` represses `X4`
/// and `X1` also represses `X4` directly, so `X4` has two inputs but no
/// outputs
pub fn repressor_cascade() -> Document {
    DocumentBuilder::new("repressor_cascade")
        .species_list(&["X1", "X2", "X3", "X4"])
        .interaction(
            InteractionBuilder::inhibition("x3_logic")
                .inhibitor("X1")
                .inhibitor("X2")
                .inhibited("X3")
                .logic(LogicOperator::Nor),
        )
        .interaction(
            InteractionBuilder::inhibition("x4_logic")
                .inhibitor("X3")
                .inhibitor("X1")
                .inhibited("X4")
                .logic(LogicOperator::Nor),
        )
        .build()
}
