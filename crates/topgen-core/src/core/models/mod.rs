//! # Core Models Module
//!
//! Data structures describing what a chain is built from and what it resolves to.
//!
//! ## Key Components
//!
//! - [`template`] - Per-monomer bead sets and bonded-term templates, with distinct
//!   variants for the first, interior, and last repeat units
//! - [`chain`] - A validated pairing of a template with a monomer count
//! - [`topology`] - Resolved beads and bonded terms carrying global atom indices
//!
//! ```ignore
//! use topgen::core::chemistry::Polymer;
//! use topgen::core::models::chain::Chain;
//!
//! let chain = Chain::new(Polymer::Pss.template(), 10)?;
//! assert_eq!(chain.monomers(), 10);
//! ```

pub mod chain;
pub mod template;
pub mod topology;
