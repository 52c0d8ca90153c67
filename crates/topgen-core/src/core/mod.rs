//! # Core Module
//!
//! This module provides the fundamental building blocks for describing coarse-grained
//! polymer chains and their topologies.
//!
//! ## Architecture
//!
//! - **Chain Representation** ([`models`]) - Monomer templates, chains, and resolved
//!   topology records (beads, bonds, constraints, angles, dihedrals)
//! - **Built-in Chemistries** ([`chemistry`]) - Ready-made MARTINI templates for PSS and PDADMA
//! - **File I/O** ([`io`]) - Serialization of resolved topologies to the GROMACS `.itp` layout
//!
//! Nothing in this module performs index arithmetic; that lives in [`crate::engine`].

pub mod chemistry;
pub mod io;
pub mod models;
