use super::error::EngineError;
use crate::core::models::chain::{Chain, ChainLengthError};
use crate::core::models::template::{BeadRef, MonomerTemplate, VariantKind};

/// Maps chain positions and local bead ids to global 1-based atom indices.
///
/// The map is a closed-form formula over three template parameters (the first-monomer
/// bead count, the interior bead count `k`, and the last-monomer bead count); no index
/// table is ever stored.
///
/// | position        | variant  | index                                         |
/// |-----------------|----------|-----------------------------------------------|
/// | `1`             | first    | `local`                                       |
/// | `2 ..= N-1`     | interior | `base_interior + (position - 2) * k + local - 1` |
/// | `N`             | last     | `base_last + local - 1`                       |
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IndexResolver {
    monomers: usize,
    first_count: usize,
    per_monomer: usize,
    last_count: usize,
    base_last: usize,
    total_atoms: usize,
}

impl IndexResolver {
    pub fn new(chain: &Chain) -> Result<Self, EngineError> {
        Self::for_template(chain.template(), chain.monomers())
    }

    /// Builds a resolver without the minimum-length check of [`Chain`].
    ///
    /// A chain of two monomers has an empty interior range; the formula handles it
    /// without any special case. Chains whose indices overflow `usize` are rejected.
    pub(crate) fn for_template(
        template: &MonomerTemplate,
        monomers: usize,
    ) -> Result<Self, EngineError> {
        let too_long = || EngineError::from(ChainLengthError::TooLong { monomers });
        let first_count = template.first_bead_count();
        let per_monomer = template.beads_per_monomer();

        let base_last = monomers
            .saturating_sub(2)
            .checked_mul(per_monomer)
            .and_then(|n| n.checked_add(first_count))
            .and_then(|n| n.checked_add(1))
            .ok_or_else(too_long)?;
        let total_atoms = template.atom_count(monomers).ok_or_else(too_long)?;

        Ok(Self {
            monomers,
            first_count,
            per_monomer,
            last_count: template.last_bead_count(),
            base_last,
            total_atoms,
        })
    }

    pub fn monomers(&self) -> usize {
        self.monomers
    }

    /// Beads per interior monomer (`k`).
    pub fn beads_per_monomer(&self) -> usize {
        self.per_monomer
    }

    pub fn interior_monomers(&self) -> usize {
        self.monomers.saturating_sub(2)
    }

    /// Global index of the first bead of the first interior monomer.
    pub fn base_interior(&self) -> usize {
        self.first_count + 1
    }

    /// Global index of the first bead of the last monomer.
    pub fn base_last(&self) -> usize {
        self.base_last
    }

    pub fn total_atoms(&self) -> usize {
        self.total_atoms
    }

    /// The template variant that applies at `position`, or `None` outside `1..=N`.
    pub fn variant_at(&self, position: usize) -> Option<VariantKind> {
        match position {
            p if p == 0 || p > self.monomers => None,
            1 => Some(VariantKind::First),
            p if p == self.monomers => Some(VariantKind::Last),
            _ => Some(VariantKind::Interior),
        }
    }

    /// Every chain position paired with its variant, in increasing order.
    pub fn positions(&self) -> impl Iterator<Item = (usize, VariantKind)> + '_ {
        (1..=self.monomers).filter_map(move |p| self.variant_at(p).map(|kind| (p, kind)))
    }

    fn bead_count(&self, kind: VariantKind) -> usize {
        match kind {
            VariantKind::First => self.first_count,
            VariantKind::Interior => self.per_monomer,
            VariantKind::Last => self.last_count,
        }
    }

    fn base_index(&self, position: usize, kind: VariantKind) -> Option<usize> {
        match kind {
            VariantKind::First => Some(1),
            VariantKind::Interior => position
                .checked_sub(2)?
                .checked_mul(self.per_monomer)?
                .checked_add(self.base_interior()),
            VariantKind::Last => Some(self.base_last),
        }
    }

    /// Resolves a 1-based local bead id of the monomer at `position`.
    pub fn index_of(&self, position: usize, local_bead: usize) -> Result<usize, EngineError> {
        let kind = self.variant_at(position).ok_or_else(|| {
            EngineError::InternalConsistency(format!(
                "monomer position {} is outside the chain (1..={})",
                position, self.monomers
            ))
        })?;
        if local_bead == 0 || local_bead > self.bead_count(kind) {
            return Err(EngineError::InternalConsistency(format!(
                "bead {} does not exist in the {} monomer at position {} ({} beads)",
                local_bead,
                kind,
                position,
                self.bead_count(kind)
            )));
        }

        let index = self
            .base_index(position, kind)
            .and_then(|base| base.checked_add(local_bead - 1))
            .filter(|index| (1..=self.total_atoms).contains(index));
        index.ok_or_else(|| {
            EngineError::InternalConsistency(format!(
                "bead {} of monomer {} resolves outside [1, {}]",
                local_bead, position, self.total_atoms
            ))
        })
    }

    /// Resolves a bead reference made from the monomer at `position`.
    pub fn resolve(&self, position: usize, bead_ref: BeadRef) -> Result<usize, EngineError> {
        let target = position
            .checked_add_signed(bead_ref.offset)
            .filter(|p| (1..=self.monomers).contains(p))
            .ok_or_else(|| {
                EngineError::InternalConsistency(format!(
                    "monomer at position {} references offset {:+}, which leaves the chain (1..={})",
                    position, bead_ref.offset, self.monomers
                ))
            })?;
        self.index_of(target, bead_ref.bead)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::chemistry::Polymer;
    use crate::core::models::template::BeadTemplate;

    fn resolver(polymer: Polymer, monomers: usize) -> IndexResolver {
        IndexResolver::new(&Chain::new(polymer.template(), monomers).unwrap()).unwrap()
    }

    #[test]
    fn base_offsets_follow_bead_counts() {
        let r = resolver(Polymer::Pss, 10);
        assert_eq!(r.beads_per_monomer(), 5);
        assert_eq!(r.base_interior(), 6);
        assert_eq!(r.base_last(), 46);
        assert_eq!(r.total_atoms(), 50);

        let r = resolver(Polymer::Pdadma, 10);
        assert_eq!(r.base_interior(), 4);
        assert_eq!(r.base_last(), 28);
        assert_eq!(r.total_atoms(), 30);
    }

    #[test]
    fn index_of_matches_closed_form_for_every_position() {
        let r = resolver(Polymer::Pss, 7);
        for position in 1..=7 {
            for bead in 1..=5 {
                assert_eq!(r.index_of(position, bead).unwrap(), (position - 1) * 5 + bead);
            }
        }
    }

    #[test]
    fn indices_are_contiguous_and_unique() {
        let r = resolver(Polymer::Pdadma, 9);
        let indices: Vec<usize> = r
            .positions()
            .flat_map(|(p, _)| (1..=3).map(move |b| (p, b)))
            .map(|(p, b)| r.index_of(p, b).unwrap())
            .collect();
        assert_eq!(indices, (1..=27).collect::<Vec<_>>());
    }

    #[test]
    fn positions_assign_first_interior_last_variants() {
        let r = resolver(Polymer::Pss, 4);
        let positions: Vec<_> = r.positions().collect();
        assert_eq!(
            positions,
            vec![
                (1, VariantKind::First),
                (2, VariantKind::Interior),
                (3, VariantKind::Interior),
                (4, VariantKind::Last),
            ]
        );
    }

    #[test]
    fn minimum_chain_has_single_interior_monomer() {
        let r = resolver(Polymer::Pdadma, 3);
        assert_eq!(r.interior_monomers(), 1);
        assert_eq!(r.variant_at(2), Some(VariantKind::Interior));
        assert_eq!(r.index_of(2, 1).unwrap(), 4);
        assert_eq!(r.index_of(3, 1).unwrap(), 7);
    }

    #[test]
    fn empty_interior_range_goes_straight_from_first_to_last() {
        let r = IndexResolver::for_template(&Polymer::Pdadma.template(), 2).unwrap();
        assert_eq!(r.interior_monomers(), 0);
        assert_eq!(r.base_last(), 4);
        assert_eq!(r.total_atoms(), 6);
        assert_eq!(
            r.positions().collect::<Vec<_>>(),
            vec![(1, VariantKind::First), (2, VariantKind::Last)]
        );
        assert_eq!(r.index_of(1, 3).unwrap(), 3);
        assert_eq!(r.index_of(2, 1).unwrap(), 4);
        assert_eq!(r.index_of(2, 3).unwrap(), 6);
    }

    #[test]
    fn resolve_follows_offsets_into_neighbouring_monomers() {
        let r = resolver(Polymer::Pss, 5);
        assert_eq!(r.resolve(1, BeadRef::next(2)).unwrap(), 7);
        assert_eq!(r.resolve(4, BeadRef::next(2)).unwrap(), 22);
        assert_eq!(r.resolve(3, BeadRef::new(-1, 1)).unwrap(), 6);
        assert_eq!(r.resolve(1, BeadRef::new(3, 5)).unwrap(), 20);
    }

    #[test]
    fn resolve_rejects_offsets_leaving_the_chain() {
        let r = resolver(Polymer::Pss, 3);
        assert!(matches!(
            r.resolve(3, BeadRef::next(1)),
            Err(EngineError::InternalConsistency(_))
        ));
        assert!(matches!(
            r.resolve(1, BeadRef::new(-1, 1)),
            Err(EngineError::InternalConsistency(_))
        ));
    }

    #[test]
    fn index_of_rejects_unknown_beads_and_positions() {
        let r = resolver(Polymer::Pdadma, 4);
        assert!(r.index_of(2, 0).is_err());
        assert!(r.index_of(2, 4).is_err());
        assert!(r.index_of(0, 1).is_err());
        assert!(r.index_of(5, 1).is_err());
    }

    #[test]
    fn overflowing_atom_count_is_rejected_before_resolution() {
        let monomers = usize::MAX / 2;
        assert_eq!(
            IndexResolver::for_template(&Polymer::Pss.template(), monomers),
            Err(EngineError::InvalidChainLength(ChainLengthError::TooLong {
                monomers
            }))
        );
    }

    #[test]
    fn largest_representable_chain_resolves_its_last_bead() {
        let monomers = usize::MAX / 3;
        let r = IndexResolver::for_template(&Polymer::Pdadma.template(), monomers).unwrap();
        assert_eq!(r.total_atoms(), usize::MAX);
        assert_eq!(r.index_of(monomers, 3).unwrap(), usize::MAX);
        assert_eq!(r.index_of(monomers - 1, 1).unwrap(), usize::MAX - 5);
    }

    #[test]
    fn boundary_variants_with_different_bead_counts_shift_offsets() {
        let mut template = Polymer::Pdadma.template();
        template.first.beads.insert(0, BeadTemplate::new("TC1", "T", 0.0));
        template.last.beads.push(BeadTemplate::new("TC1", "T", 0.0));
        template.last.beads.push(BeadTemplate::new("TC1", "U", 0.0));

        let r = IndexResolver::for_template(&template, 4).unwrap();
        assert_eq!(r.base_interior(), 5);
        assert_eq!(r.base_last(), 11);
        assert_eq!(r.total_atoms(), 4 + 2 * 3 + 5);
        assert_eq!(r.index_of(1, 4).unwrap(), 4);
        assert_eq!(r.index_of(3, 3).unwrap(), 10);
        assert_eq!(r.index_of(4, 5).unwrap(), 15);
        assert!(r.index_of(3, 4).is_err());
    }
}
