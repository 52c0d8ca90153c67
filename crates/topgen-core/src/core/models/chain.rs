use super::template::MonomerTemplate;
use thiserror::Error;

/// The shortest accepted chain. A chain of exactly `MIN_MONOMERS` units is laid out as
/// first + one interior + last, so every chain holds `k * N` beads when all variants
/// share the interior bead count.
pub const MIN_MONOMERS: usize = 3;

#[derive(Debug, Error, PartialEq, Eq, Clone, Copy)]
pub enum ChainLengthError {
    #[error("Number of monomers must be at least {minimum} (got {monomers})")]
    TooShort { monomers: usize, minimum: usize },
    #[error("A chain of {monomers} monomers has more atoms than can be indexed")]
    TooLong { monomers: usize },
}

/// A linear homopolymer: a monomer template repeated `monomers` times.
#[derive(Debug, Clone, PartialEq)]
pub struct Chain {
    template: MonomerTemplate,
    monomers: usize,
}

impl Chain {
    pub fn new(template: MonomerTemplate, monomers: usize) -> Result<Self, ChainLengthError> {
        if monomers < MIN_MONOMERS {
            return Err(ChainLengthError::TooShort {
                monomers,
                minimum: MIN_MONOMERS,
            });
        }
        if template.atom_count(monomers).is_none() {
            return Err(ChainLengthError::TooLong { monomers });
        }
        Ok(Self { template, monomers })
    }

    pub fn template(&self) -> &MonomerTemplate {
        &self.template
    }

    pub fn monomers(&self) -> usize {
        self.monomers
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::chemistry::Polymer;

    #[test]
    fn new_accepts_minimum_length() {
        let chain = Chain::new(Polymer::Pdadma.template(), 3).unwrap();
        assert_eq!(chain.monomers(), 3);
        assert_eq!(chain.template().name, "PDADMA");
    }

    #[test]
    fn new_rejects_chains_shorter_than_three() {
        for n in 0..MIN_MONOMERS {
            let err = Chain::new(Polymer::Pss.template(), n).unwrap_err();
            assert_eq!(
                err,
                ChainLengthError::TooShort {
                    monomers: n,
                    minimum: 3
                }
            );
        }
    }

    #[test]
    fn error_message_names_both_lengths() {
        let err = Chain::new(Polymer::Pss.template(), 2).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Number of monomers must be at least 3 (got 2)"
        );
    }

    #[test]
    fn new_rejects_chains_whose_atom_count_overflows() {
        let monomers = usize::MAX / 2;
        let err = Chain::new(Polymer::Pss.template(), monomers).unwrap_err();
        assert_eq!(err, ChainLengthError::TooLong { monomers });
        assert_eq!(
            err.to_string(),
            format!("A chain of {monomers} monomers has more atoms than can be indexed")
        );
    }

    #[test]
    fn new_accepts_largest_representable_chain() {
        // PDADMA: 3 beads per monomer, so 3 * N must fit.
        let monomers = usize::MAX / 3;
        assert!(Chain::new(Polymer::Pdadma.template(), monomers).is_ok());
        assert!(Chain::new(Polymer::Pdadma.template(), monomers + 1).is_err());
    }
}
