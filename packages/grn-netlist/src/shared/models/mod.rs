//! Shared models
//!
//! In-memory form of an already-parsed regulatory network document. Loading
//! the exchange format itself happens upstream; these types are what the
//! loader hands to the converter.

mod document;
mod logic;
mod sbo;

pub use document::{
    ComponentDefinition, Document, FunctionalComponent, Interaction, Module, ModuleDefinition,
    Participation,
};
pub use logic::LogicOperator;
pub use sbo::SboTerm;
