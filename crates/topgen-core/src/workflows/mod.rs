//! # Workflows Module
//!
//! High-level entry points that run the complete generation pipeline.
//!
//! - **Generation Workflow** ([`generate`]) - From a monomer template and a monomer count
//!   to a resolved [`Topology`](crate::core::models::topology::Topology) and its rendered
//!   `.itp` document.
//!
//! The pipeline is a pure function of its inputs: invoking it twice with the same template
//! and chain length yields byte-identical output, and no partially rendered document is
//! ever returned.

pub mod generate;
