//! Provides output functionality for topology file formats.
//!
//! Writers consume a fully resolved [`Topology`](crate::core::models::topology::Topology)
//! and perform no computation beyond formatting. The [`traits::TopologyFile`] trait gives
//! every format the same writer/path/in-memory entry points.

pub mod itp;
pub mod traits;
