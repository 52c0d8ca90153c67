use crate::core::io::itp::ItpFile;
use crate::core::io::traits::TopologyFile;
use crate::core::models::chain::Chain;
use crate::core::models::template::MonomerTemplate;
use crate::core::models::topology::Topology;
use crate::engine::emitter;
use crate::engine::error::EngineError;
use std::io;

/// Resolves the full topology of a chain of `monomers` repeat units of `template`.
///
/// The chain length is checked before any index is resolved.
///
/// # Errors
///
/// * [`EngineError::InvalidChainLength`] if `monomers < 3`, or if the chain has more atoms
///   than can be indexed or held in memory.
/// * [`EngineError::InvalidTemplate`] if the template fails validation.
/// * [`EngineError::InternalConsistency`] if a term resolves outside the chain.
pub fn run(template: MonomerTemplate, monomers: usize) -> Result<Topology, EngineError> {
    let chain = Chain::new(template, monomers)?;
    emitter::emit(&chain)
}

/// Renders a resolved topology as a complete `.itp` document held in memory.
pub fn render(topology: &Topology) -> io::Result<Vec<u8>> {
    ItpFile::render(topology)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::chemistry::Polymer;
    use crate::core::models::chain::ChainLengthError;

    #[test]
    fn run_rejects_two_monomers_with_invalid_chain_length() {
        let result = run(Polymer::Pdadma.template(), 2);
        assert_eq!(
            result,
            Err(EngineError::InvalidChainLength(ChainLengthError::TooShort {
                monomers: 2,
                minimum: 3
            }))
        );
    }

    #[test]
    fn run_rejects_unindexable_chain_length() {
        let result = run(Polymer::Pss.template(), usize::MAX / 2);
        assert!(matches!(
            result,
            Err(EngineError::InvalidChainLength(ChainLengthError::TooLong { .. }))
        ));
    }

    fn document(polymer: Polymer, monomers: usize) -> String {
        let topology = run(polymer.template(), monomers).unwrap();
        String::from_utf8(render(&topology).unwrap()).unwrap()
    }

    #[test]
    fn pipeline_is_idempotent() {
        assert_eq!(document(Polymer::Pss, 9), document(Polymer::Pss, 9));
    }

    #[test]
    fn render_produces_expected_header_and_molecule_name() {
        let document = document(Polymer::Pdadma, 12);
        assert!(document.starts_with(";\n; POLY(DIALLYLDIMETHYLAMMONIUM) \n;\n"));
        assert!(document.contains("; NUMBER OF MONOMERS:           12\n"));
        assert!(document.contains("\nPDADMA12\t    2\n"));
    }

    #[test]
    fn run_reports_total_charge_of_chain() {
        let pss = run(Polymer::Pss.template(), 10).unwrap();
        assert_eq!(pss.total_charge(), -10.0);
        let pdadma = run(Polymer::Pdadma.template(), 10).unwrap();
        assert_eq!(pdadma.total_charge(), 10.0);
    }

    #[test]
    fn run_accepts_templates_loaded_from_toml() {
        let content = r#"
name = "PEO"
title = "POLY(ETHYLENE OXIDE)"
residue = "PEO"
exclusions = 1

[first]
beads = [{ type = "SN0", name = "EO" }]
bonds = [{ beads = [{ bead = 1 }, { offset = 1, bead = 1 }], funct = 1, length = 0.33, force-constant = 7000.0 }]

[interior]
beads = [{ type = "SN0", name = "EO" }]
bonds = [{ beads = [{ bead = 1 }, { offset = 1, bead = 1 }], funct = 1, length = 0.33, force-constant = 7000.0 }]
angles = [{ beads = [{ offset = -1, bead = 1 }, { bead = 1 }, { offset = 1, bead = 1 }], funct = 2, theta = 130.0, force-constant = 50.0 }]

[last]
beads = [{ type = "SN0", name = "EO" }]
"#;
        let template = MonomerTemplate::from_toml_str(content).unwrap();
        let topology = run(template, 5).unwrap();
        assert_eq!(topology.atom_count(), 5);
        let bonds: Vec<[usize; 2]> = topology.bonds.iter().map(|b| b.atoms).collect();
        assert_eq!(bonds, vec![[1, 2], [2, 3], [3, 4], [4, 5]]);
        let angles: Vec<[usize; 3]> = topology.angles.iter().map(|a| a.atoms).collect();
        assert_eq!(angles, vec![[1, 2, 3], [2, 3, 4], [3, 4, 5]]);
        assert!(topology.dihedrals.is_none());
    }
}
