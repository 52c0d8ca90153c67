//! Poly(styrene sulfonate), A-mapping.
//!
//! Local bead ids: `B` (1) backbone, `R1`..`R3` (2..4) the aromatic ring, `S` (5) the
//! sulfonate group. Each backbone bead is bonded to its own ring and to the ring of the
//! following monomer, which is also where the inter-monomer angles are anchored.

use super::{BOND_FORCE_CONSTANT, BOND_LENGTH};
use crate::core::models::template::{
    AngleTemplate, BeadRef, BeadTemplate, BondTemplate, ConstraintTemplate, DihedralTemplate,
    MonomerTemplate, MonomerVariant,
};

const B: usize = 1;
const R1: usize = 2;
const R2: usize = 3;
const R3: usize = 4;
const S: usize = 5;

/// The first monomer keeps the longer ring-to-sulfonate bond of the published model.
const FIRST_SULFONATE_BOND_LENGTH: f64 = 0.278;
const IMPROPER_Q0: f64 = 180.0;
const IMPROPER_FORCE_CONSTANT: f64 = 167.36;

const CITATION: [&str; 6] = [
    "If you use those parameters, please cite:",
    "",
    "M. Voegele, J. Smiatek, C. Holm ",
    "Coarse-grained simulations of polyelectrolyte complexes: MARTINI models for poly(styrene sulfonate) and poly(diallyldimethylammonium) ",
    "The Journal of Chemical Physics 143(24):243151, December 2015.",
    "DOI: 10.1063/1.4937805 ",
];

pub fn template() -> MonomerTemplate {
    MonomerTemplate {
        name: "PSS".to_string(),
        title: "POLYSTYRENE SULFONATE (A-mapping)".to_string(),
        notes: CITATION.iter().map(|s| s.to_string()).collect(),
        residue: "STYR".to_string(),
        exclusions: 3,
        first: MonomerVariant {
            beads: beads(),
            bonds: vec![
                bond(BeadRef::here(B), BeadRef::here(R1), BOND_LENGTH),
                bond(BeadRef::here(B), BeadRef::next(R1), BOND_LENGTH),
                bond(BeadRef::here(R2), BeadRef::here(S), FIRST_SULFONATE_BOND_LENGTH),
                bond(BeadRef::here(R3), BeadRef::here(S), FIRST_SULFONATE_BOND_LENGTH),
            ],
            constraints: ring_constraints(),
            angles: [ring_angles(), linking_angles()].concat(),
            dihedrals: vec![improper()],
        },
        interior: MonomerVariant {
            beads: beads(),
            bonds: vec![
                bond(BeadRef::here(B), BeadRef::here(R1), BOND_LENGTH),
                bond(BeadRef::here(B), BeadRef::next(R1), BOND_LENGTH),
                bond(BeadRef::here(R2), BeadRef::here(S), BOND_LENGTH),
                bond(BeadRef::here(R3), BeadRef::here(S), BOND_LENGTH),
            ],
            constraints: ring_constraints(),
            angles: [ring_angles(), linking_angles()].concat(),
            dihedrals: vec![improper()],
        },
        last: MonomerVariant {
            beads: beads(),
            bonds: vec![
                bond(BeadRef::here(B), BeadRef::here(R1), BOND_LENGTH),
                bond(BeadRef::here(R2), BeadRef::here(S), BOND_LENGTH),
                bond(BeadRef::here(R3), BeadRef::here(S), BOND_LENGTH),
            ],
            constraints: ring_constraints(),
            angles: ring_angles(),
            dihedrals: vec![improper()],
        },
    }
}

fn beads() -> Vec<BeadTemplate> {
    vec![
        BeadTemplate::new("SCY", "B", 0.0),
        BeadTemplate::new("STY", "R1", 0.0),
        BeadTemplate::new("STY", "R2", 0.0),
        BeadTemplate::new("STY", "R3", 0.0),
        BeadTemplate::new("Qa", "S", -1.0),
    ]
}

fn bond(a: BeadRef, b: BeadRef, length: f64) -> BondTemplate {
    BondTemplate {
        beads: [a, b],
        funct: 1,
        length,
        force_constant: BOND_FORCE_CONSTANT,
    }
}

fn ring_constraints() -> Vec<ConstraintTemplate> {
    [(R1, R2), (R2, R3), (R3, R1)]
        .into_iter()
        .map(|(a, b)| ConstraintTemplate {
            beads: [BeadRef::here(a), BeadRef::here(b)],
            funct: 1,
            length: BOND_LENGTH,
        })
        .collect()
}

fn angle(beads: [BeadRef; 3], theta: f64, force_constant: f64) -> AngleTemplate {
    AngleTemplate {
        beads,
        funct: 1,
        theta,
        force_constant,
    }
}

// Backbone bead against its own ring.
fn ring_angles() -> Vec<AngleTemplate> {
    vec![
        angle(
            [BeadRef::here(B), BeadRef::here(R1), BeadRef::here(R2)],
            136.0,
            100.0,
        ),
        angle(
            [BeadRef::here(B), BeadRef::here(R1), BeadRef::here(R3)],
            136.0,
            100.0,
        ),
    ]
}

fn linking_angles() -> Vec<AngleTemplate> {
    vec![
        angle(
            [BeadRef::here(B), BeadRef::next(R1), BeadRef::next(R2)],
            136.0,
            100.0,
        ),
        angle(
            [BeadRef::here(B), BeadRef::next(R1), BeadRef::next(R3)],
            136.0,
            100.0,
        ),
        angle(
            [BeadRef::here(R1), BeadRef::here(B), BeadRef::next(R1)],
            120.0,
            25.0,
        ),
        angle(
            [BeadRef::here(B), BeadRef::next(R1), BeadRef::next(B)],
            52.0,
            550.0,
        ),
    ]
}

fn improper() -> DihedralTemplate {
    DihedralTemplate {
        beads: [
            BeadRef::here(R1),
            BeadRef::here(R2),
            BeadRef::here(R3),
            BeadRef::here(S),
        ],
        funct: 2,
        q0: IMPROPER_Q0,
        force_constant: IMPROPER_FORCE_CONSTANT,
    }
}
