//! Lanechart Core Types and Definitions
//!
//! This crate provides the foundational types shared by the Lanechart crates:
//!
//! - **Identifiers**: String-interned lane names ([`identifier::Id`])
//! - **Geometry**: Points, vertical segments and arrowheads ([`geometry`] module)
//! - **Statements**: The typed statement model handed to the layout engine ([`statement`] module)
//! - **Draw**: Drawing primitives produced by the layout engine ([`draw`] module)
//! - **Sizing**: Named scalar measurements derived from font height ([`sizing`] module)

pub mod draw;
pub mod geometry;
pub mod identifier;
pub mod sizing;
pub mod statement;
