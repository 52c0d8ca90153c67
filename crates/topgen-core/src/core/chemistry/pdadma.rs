//! Poly(diallyldimethylammonium).
//!
//! Local bead ids: `B1` (1) and `B2` (2) form the backbone, `N` (3) carries the
//! quaternary ammonium charge. The three beads are held together by a triangle of
//! constraints; consecutive monomers are joined by a `B2`-`B1` bond. The last monomer has
//! no following neighbour and therefore declares constraints only.

use super::{BOND_FORCE_CONSTANT, BOND_LENGTH};
use crate::core::models::template::{
    AngleTemplate, BeadRef, BeadTemplate, BondTemplate, ConstraintTemplate, MonomerTemplate,
    MonomerVariant,
};

const B1: usize = 1;
const B2: usize = 2;
const N: usize = 3;

const BACKBONE_ANGLE: f64 = 136.0;
const BACKBONE_ANGLE_FORCE_CONSTANT: f64 = 100.0;

pub fn template() -> MonomerTemplate {
    MonomerTemplate {
        name: "PDADMA".to_string(),
        title: "POLY(DIALLYLDIMETHYLAMMONIUM)".to_string(),
        notes: Vec::new(),
        residue: "DADMA".to_string(),
        exclusions: 2,
        first: linked_variant(),
        interior: linked_variant(),
        last: MonomerVariant {
            beads: beads(),
            constraints: triangle_constraints(),
            ..Default::default()
        },
    }
}

fn beads() -> Vec<BeadTemplate> {
    vec![
        BeadTemplate::new("SC1", "B1", 0.0),
        BeadTemplate::new("SC1", "B2", 0.0),
        BeadTemplate::new("SQd", "N", 1.0),
    ]
}

fn linked_variant() -> MonomerVariant {
    MonomerVariant {
        beads: beads(),
        bonds: vec![BondTemplate {
            beads: [BeadRef::here(B2), BeadRef::next(B1)],
            funct: 1,
            length: BOND_LENGTH,
            force_constant: BOND_FORCE_CONSTANT,
        }],
        constraints: triangle_constraints(),
        angles: vec![
            backbone_angle([BeadRef::here(B1), BeadRef::here(B2), BeadRef::next(B1)]),
            backbone_angle([BeadRef::here(B2), BeadRef::next(B1), BeadRef::next(B2)]),
        ],
        dihedrals: Vec::new(),
    }
}

fn triangle_constraints() -> Vec<ConstraintTemplate> {
    [(B1, B2), (B2, N), (N, B1)]
        .into_iter()
        .map(|(a, b)| ConstraintTemplate {
            beads: [BeadRef::here(a), BeadRef::here(b)],
            funct: 1,
            length: BOND_LENGTH,
        })
        .collect()
}

fn backbone_angle(beads: [BeadRef; 3]) -> AngleTemplate {
    AngleTemplate {
        beads,
        funct: 1,
        theta: BACKBONE_ANGLE,
        force_constant: BACKBONE_ANGLE_FORCE_CONSTANT,
    }
}
