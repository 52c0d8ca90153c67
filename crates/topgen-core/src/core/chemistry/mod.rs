//! # Chemistry Module
//!
//! Built-in MARTINI monomer templates for the polyelectrolytes of Vögele, Smiatek and Holm,
//! J. Chem. Phys. 143, 243151 (2015).
//!
//! - [`pss`] - Poly(styrene sulfonate), A-mapping, five beads per monomer
//! - [`pdadma`] - Poly(diallyldimethylammonium), three beads per monomer
//!
//! Custom chemistries do not need a variant here; any [`MonomerTemplate`] (for example one
//! loaded with [`MonomerTemplate::load`]) can be fed to the engine directly.

pub mod pdadma;
pub mod pss;

use crate::core::models::template::MonomerTemplate;
use phf::{Map, phf_map};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Shared MARTINI parameters used by both built-in chemistries.
pub(crate) const BOND_LENGTH: f64 = 0.27; // nm
pub(crate) const BOND_FORCE_CONSTANT: f64 = 8000.0; // kJ mol^-1 nm^-2

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Polymer {
    Pss,
    Pdadma,
}

static POLYMER_ALIASES: Map<&'static str, Polymer> = phf_map! {
    "pss" => Polymer::Pss,
    "polystyrene-sulfonate" => Polymer::Pss,
    "polystyrenesulfonate" => Polymer::Pss,
    "pdadma" => Polymer::Pdadma,
    "pdadmac" => Polymer::Pdadma,
    "polydadmac" => Polymer::Pdadma,
};

impl Polymer {
    pub const ALL: [Polymer; 2] = [Polymer::Pss, Polymer::Pdadma];

    pub fn template(self) -> MonomerTemplate {
        match self {
            Polymer::Pss => pss::template(),
            Polymer::Pdadma => pdadma::template(),
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            Polymer::Pss => "poly(styrene sulfonate), A-mapping, 5 beads per monomer",
            Polymer::Pdadma => "poly(diallyldimethylammonium), 3 beads per monomer",
        }
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("Unknown polymer '{0}'. Expected one of: pss, pdadma")]
pub struct ParsePolymerError(pub String);

impl FromStr for Polymer {
    type Err = ParsePolymerError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        POLYMER_ALIASES
            .get(s.trim().to_lowercase().as_str())
            .copied()
            .ok_or_else(|| ParsePolymerError(s.to_string()))
    }
}

impl fmt::Display for Polymer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}",
            match self {
                Polymer::Pss => "pss",
                Polymer::Pdadma => "pdadma",
            }
        )
    }
}
