//! # topgen Core Library
//!
//! A template-driven generator of coarse-grained MARTINI topologies (`.itp` files) for
//! linear homopolymer chains.
//!
//! ## Architectural Philosophy
//!
//! The library follows a strict three-layer architecture so that the index arithmetic
//! stays pure and testable, separate from any text rendering or file handling.
//!
//! - **[`core`]: The Foundation.** Immutable data models (`MonomerTemplate`, `Chain`,
//!   resolved `Topology`), the built-in chemistries, and the `.itp` format writer.
//!
//! - **[`engine`]: The Logic Core.** The `IndexResolver`, which maps a monomer position and
//!   a local bead id to a global atom index, and the term emitter, which walks the chain
//!   and resolves every bonded term of every section in a single forward pass.
//!
//! - **[`workflows`]: The Public API.** Ties `engine` and `core` together: from a template
//!   and a monomer count to a fully resolved topology or its rendered document.

pub mod core;
pub mod engine;
pub mod workflows;
