use super::error::EngineError;
use super::resolver::IndexResolver;
use crate::core::models::chain::{Chain, ChainLengthError};
use crate::core::models::template::{
    AngleTemplate, BeadRef, BondTemplate, ConstraintTemplate, DihedralTemplate, MonomerTemplate,
    MonomerVariant, TermRefs,
};
use crate::core::models::topology::{Angle, BeadInstance, Bond, Constraint, Dihedral, Topology};

/// A bonded-term template that can be resolved at a chain position.
pub trait ResolveTerm: TermRefs {
    type Instance;

    fn resolve(
        &self,
        resolver: &IndexResolver,
        position: usize,
    ) -> Result<Self::Instance, EngineError>;
}

fn resolve_beads<const N: usize>(
    resolver: &IndexResolver,
    position: usize,
    refs: &[BeadRef; N],
) -> Result<[usize; N], EngineError> {
    let mut atoms = [0usize; N];
    for (slot, bead_ref) in atoms.iter_mut().zip(refs) {
        *slot = resolver.resolve(position, *bead_ref)?;
    }
    Ok(atoms)
}

impl ResolveTerm for BondTemplate {
    type Instance = Bond;

    fn resolve(&self, resolver: &IndexResolver, position: usize) -> Result<Bond, EngineError> {
        Ok(Bond {
            atoms: resolve_beads(resolver, position, &self.beads)?,
            funct: self.funct,
            length: self.length,
            force_constant: self.force_constant,
        })
    }
}

impl ResolveTerm for ConstraintTemplate {
    type Instance = Constraint;

    fn resolve(
        &self,
        resolver: &IndexResolver,
        position: usize,
    ) -> Result<Constraint, EngineError> {
        Ok(Constraint {
            atoms: resolve_beads(resolver, position, &self.beads)?,
            funct: self.funct,
            length: self.length,
        })
    }
}

impl ResolveTerm for AngleTemplate {
    type Instance = Angle;

    fn resolve(&self, resolver: &IndexResolver, position: usize) -> Result<Angle, EngineError> {
        Ok(Angle {
            atoms: resolve_beads(resolver, position, &self.beads)?,
            funct: self.funct,
            theta: self.theta,
            force_constant: self.force_constant,
        })
    }
}

impl ResolveTerm for DihedralTemplate {
    type Instance = Dihedral;

    fn resolve(
        &self,
        resolver: &IndexResolver,
        position: usize,
    ) -> Result<Dihedral, EngineError> {
        Ok(Dihedral {
            atoms: resolve_beads(resolver, position, &self.beads)?,
            funct: self.funct,
            q0: self.q0,
            force_constant: self.force_constant,
        })
    }
}

/// Resolves one section for the whole chain.
///
/// Terms come out as: first-monomer terms, then interior terms by increasing position
/// (declaration order within a position), then last-monomer terms.
pub fn emit_section<T: ResolveTerm>(
    template: &MonomerTemplate,
    resolver: &IndexResolver,
    select: fn(&MonomerVariant) -> &[T],
) -> Result<Vec<T::Instance>, EngineError> {
    let mut terms = Vec::new();
    for (position, kind) in resolver.positions() {
        for term in select(template.variant(kind)) {
            terms.push(term.resolve(resolver, position)?);
        }
    }
    Ok(terms)
}

pub fn emit_atoms(
    template: &MonomerTemplate,
    resolver: &IndexResolver,
) -> Result<Vec<BeadInstance>, EngineError> {
    let mut atoms = Vec::new();
    atoms
        .try_reserve_exact(resolver.total_atoms())
        .map_err(|_| ChainLengthError::TooLong {
            monomers: resolver.monomers(),
        })?;
    for (position, kind) in resolver.positions() {
        for (local, bead) in template.variant(kind).beads.iter().enumerate() {
            let index = resolver.index_of(position, local + 1)?;
            atoms.push(BeadInstance {
                index,
                bead_type: bead.bead_type.clone(),
                residue_number: position,
                residue: template.residue.clone(),
                name: bead.name.clone(),
                charge_group: index,
                charge: bead.charge,
            });
        }
    }
    if atoms.len() != resolver.total_atoms() {
        return Err(EngineError::InternalConsistency(format!(
            "emitted {} beads but the chain holds {}",
            atoms.len(),
            resolver.total_atoms()
        )));
    }
    Ok(atoms)
}

/// Resolves the complete topology of `chain` in a single forward pass.
pub fn emit(chain: &Chain) -> Result<Topology, EngineError> {
    chain.template().validate()?;
    assemble(chain.template(), &IndexResolver::new(chain)?)
}

pub(crate) fn assemble(
    template: &MonomerTemplate,
    resolver: &IndexResolver,
) -> Result<Topology, EngineError> {
    let atoms = emit_atoms(template, resolver)?;
    let bonds = emit_section(template, resolver, |v| v.bonds.as_slice())?;
    let constraints = emit_section(template, resolver, |v| v.constraints.as_slice())?;
    let angles = emit_section(template, resolver, |v| v.angles.as_slice())?;
    let dihedrals = if template.has_dihedrals() {
        Some(emit_section(template, resolver, |v| v.dihedrals.as_slice())?)
    } else {
        None
    };

    Ok(Topology {
        molecule_name: template.molecule_name(resolver.monomers()),
        title: template.title.clone(),
        notes: template.notes.clone(),
        monomers: resolver.monomers(),
        exclusions: template.exclusions,
        atoms,
        bonds,
        constraints,
        angles,
        dihedrals,
    })
}
