//! # Engine Module
//!
//! The index-resolution and term-emission machinery that turns a [`Chain`] into a
//! [`Topology`].
//!
//! ## Key Components
//!
//! - [`resolver`] - The closed-form map from (monomer position, local bead id) to a global
//!   1-based atom index
//! - [`emitter`] - The single forward pass over monomer positions that produces every
//!   section of the topology in a fixed order
//! - [`error`] - Failure modes of the engine
//!
//! Both the resolver and the emitter are pure: they perform no I/O and hold no shared
//! state, so independent chains can be generated concurrently without coordination.
//!
//! [`Chain`]: crate::core::models::chain::Chain
//! [`Topology`]: crate::core::models::topology::Topology

pub mod emitter;
pub mod error;
pub mod resolver;
