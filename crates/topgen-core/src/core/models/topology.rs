/// A resolved bead: one atom of the chain with its global index.
#[derive(Debug, Clone, PartialEq)]
pub struct BeadInstance {
    pub index: usize,          // Global 1-based atom index
    pub bead_type: String,     // MARTINI bead type
    pub residue_number: usize, // Monomer position in the chain
    pub residue: String,
    pub name: String,
    pub charge_group: usize,
    pub charge: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Bond {
    pub atoms: [usize; 2],
    pub funct: u8,
    pub length: f64,
    pub force_constant: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Constraint {
    pub atoms: [usize; 2],
    pub funct: u8,
    pub length: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Angle {
    pub atoms: [usize; 3],
    pub funct: u8,
    pub theta: f64,
    pub force_constant: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Dihedral {
    pub atoms: [usize; 4],
    pub funct: u8,
    pub q0: f64,
    pub force_constant: f64,
}

/// The complete, resolved topology of one chain.
///
/// Every section is stored in emission order: first-monomer terms, then interior terms by
/// increasing position, then last-monomer terms. `dihedrals` is `None` when the template
/// declares no dihedral terms at all, in which case the section is omitted from output.
#[derive(Debug, Clone, PartialEq)]
pub struct Topology {
    pub molecule_name: String,
    pub title: String,
    pub notes: Vec<String>,
    pub monomers: usize,
    pub exclusions: u32,
    pub atoms: Vec<BeadInstance>,
    pub bonds: Vec<Bond>,
    pub constraints: Vec<Constraint>,
    pub angles: Vec<Angle>,
    pub dihedrals: Option<Vec<Dihedral>>,
}

impl Topology {
    pub fn atom_count(&self) -> usize {
        self.atoms.len()
    }

    pub fn dihedral_count(&self) -> usize {
        self.dihedrals.as_ref().map_or(0, Vec::len)
    }

    pub fn total_charge(&self) -> f64 {
        self.atoms.iter().map(|a| a.charge).sum()
    }
}
