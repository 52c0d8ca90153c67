use super::traits::TopologyFile;
use crate::core::models::topology::{
    Angle, BeadInstance, Bond, Constraint, Dihedral, Topology,
};
use std::io::{self, Write};

/// GROMACS include-topology (`.itp`) writer.
///
/// The column layout is fixed: several legacy readers are column-sensitive, and reference
/// outputs are compared as literal text.
pub struct ItpFile;

impl TopologyFile for ItpFile {
    type Error = io::Error;

    fn write_to(topology: &Topology, writer: &mut impl Write) -> Result<(), Self::Error> {
        write_header(topology, writer)?;

        writeln!(writer)?;
        writeln!(writer, "[ moleculetype ]")?;
        writeln!(writer, "; molname  nrexcl")?;
        writeln!(
            writer,
            "{}\t    {}",
            topology.molecule_name, topology.exclusions
        )?;

        writeln!(writer)?;
        writeln!(writer, "[ atoms ]")?;
        writeln!(
            writer,
            ";  nr    type       resnr  residu    atom    cgnr        charge"
        )?;
        for atom in &topology.atoms {
            writeln!(writer, "{}", atom_line(atom))?;
        }

        writeln!(writer)?;
        writeln!(writer, "[ bonds ]")?;
        writeln!(writer, ";   ai     aj funct   r             k")?;
        for bond in &topology.bonds {
            writeln!(writer, "{}", bond_line(bond))?;
        }

        writeln!(writer)?;
        writeln!(writer, "[ constraints ]")?;
        writeln!(writer, ";  ai  aj  funct length")?;
        for constraint in &topology.constraints {
            writeln!(writer, "{}", constraint_line(constraint))?;
        }

        writeln!(writer)?;
        writeln!(writer, "[ angles ]")?;
        writeln!(writer, ";   ai     aj     ak    funct   theta         cth")?;
        for angle in &topology.angles {
            writeln!(writer, "{}", angle_line(angle))?;
        }

        if let Some(dihedrals) = &topology.dihedrals {
            writeln!(writer)?;
            writeln!(writer, "[ dihedrals ]")?;
            writeln!(writer, "; ai aj ak al funct q0 cq")?;
            for dihedral in dihedrals {
                writeln!(writer, "{}", dihedral_line(dihedral))?;
            }
        }

        Ok(())
    }
}

fn write_header(topology: &Topology, writer: &mut impl Write) -> io::Result<()> {
    writeln!(writer, ";")?;
    writeln!(writer, "; {} ", topology.title)?;
    writeln!(writer, ";")?;
    writeln!(writer, "; NUMBER OF MONOMERS:           {}", topology.monomers)?;
    writeln!(writer, ";")?;
    if !topology.notes.is_empty() {
        writeln!(writer, ";")?;
        for line in &topology.notes {
            writeln!(writer, "; {}", line)?;
        }
        writeln!(writer, ";")?;
        writeln!(writer)?;
    }
    Ok(())
}

fn atom_line(atom: &BeadInstance) -> String {
    format!(
        "{:5}     {:<10}{:5}  {:<11}{:<6}{:5}{:>16} ",
        atom.index,
        atom.bead_type,
        atom.residue_number,
        atom.residue,
        atom.name,
        atom.charge_group,
        c_exponential(atom.charge, 5, true)
    )
}

fn bond_line(bond: &Bond) -> String {
    format!(
        "{:5} {:5} {:>4} {:>12.6} {:.6}",
        bond.atoms[0], bond.atoms[1], bond.funct, bond.length, bond.force_constant
    )
}

fn constraint_line(constraint: &Constraint) -> String {
    format!(
        "{:5} {:5} {:>4} {:>12.6} ",
        constraint.atoms[0], constraint.atoms[1], constraint.funct, constraint.length
    )
}

fn angle_line(angle: &Angle) -> String {
    format!(
        "{:5}  {:5}  {:5} {:>4} {:>12.6} {:>11.6} ",
        angle.atoms[0],
        angle.atoms[1],
        angle.atoms[2],
        angle.funct,
        angle.theta,
        angle.force_constant
    )
}

fn dihedral_line(dihedral: &Dihedral) -> String {
    format!(
        "{:5}  {:5}  {:5}  {:5} {:>3} {:>14} {} ",
        dihedral.atoms[0],
        dihedral.atoms[1],
        dihedral.atoms[2],
        dihedral.atoms[3],
        dihedral.funct,
        // The reference angle is kept unnormalised with a zero exponent.
        format!("{:.4}e+00", dihedral.q0),
        c_exponential(dihedral.force_constant, 6, false)
    )
}

/// Formats `value` like C's `%.*E` / `%.*e`: signed exponent with at least two digits.
fn c_exponential(value: f64, precision: usize, upper: bool) -> String {
    let (raw, marker) = if upper {
        (format!("{:.*E}", precision, value), 'E')
    } else {
        (format!("{:.*e}", precision, value), 'e')
    };
    match raw.split_once(marker) {
        Some((mantissa, exponent)) => {
            let exponent: i32 = exponent.parse().unwrap_or(0);
            let sign = if exponent < 0 { '-' } else { '+' };
            format!("{}{}{}{:02}", mantissa, marker, sign, exponent.abs())
        }
        None => raw,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::chemistry::Polymer;
    use crate::core::models::chain::Chain;
    use crate::engine::emitter;

    const PSS_3: &str = include_str!("../../../tests/data/pss_3.itp");
    const PSS_4: &str = include_str!("../../../tests/data/pss_4.itp");
    const PDADMA_3: &str = include_str!("../../../tests/data/pdadma_3.itp");
    const PDADMA_4: &str = include_str!("../../../tests/data/pdadma_4.itp");

    fn render(polymer: Polymer, monomers: usize) -> String {
        let chain = Chain::new(polymer.template(), monomers).unwrap();
        let topology = emitter::emit(&chain).unwrap();
        String::from_utf8(ItpFile::render(&topology).unwrap()).unwrap()
    }

    fn section<'a>(document: &'a str, header: &str) -> Vec<&'a str> {
        document
            .lines()
            .skip_while(|line| *line != header)
            .skip(2)
            .take_while(|line| !line.is_empty())
            .collect()
    }

    #[test]
    fn pss_matches_reference_documents() {
        assert_eq!(render(Polymer::Pss, 3), PSS_3);
        assert_eq!(render(Polymer::Pss, 4), PSS_4);
    }

    #[test]
    fn pdadma_matches_reference_documents() {
        assert_eq!(render(Polymer::Pdadma, 3), PDADMA_3);
        assert_eq!(render(Polymer::Pdadma, 4), PDADMA_4);
    }

    #[test]
    fn rendering_twice_is_byte_identical() {
        assert_eq!(render(Polymer::Pss, 25), render(Polymer::Pss, 25));
    }

    #[test]
    fn atom_lines_have_seven_fields_with_signed_exponent_charge() {
        let document = render(Polymer::Pss, 12);
        let atoms = section(&document, "[ atoms ]");
        assert_eq!(atoms.len(), 60);
        for line in atoms {
            let fields: Vec<&str> = line.split_whitespace().collect();
            assert_eq!(fields.len(), 7, "{line}");
            let charge = fields[6];
            let (_, exponent) = charge.split_once('E').unwrap();
            assert!(exponent.starts_with('+') || exponent.starts_with('-'), "{charge}");
            assert_eq!(exponent.len(), 3, "{charge}");
        }
    }

    #[test]
    fn dihedral_section_is_omitted_without_dihedral_terms() {
        let document = render(Polymer::Pdadma, 10);
        assert!(!document.contains("[ dihedrals ]"));
        assert!(render(Polymer::Pss, 10).contains("[ dihedrals ]"));
    }

    #[test]
    fn large_indices_keep_column_alignment_up_to_five_digits() {
        let document = render(Polymer::Pdadma, 3000);
        let atoms = section(&document, "[ atoms ]");
        assert_eq!(atoms.len(), 9000);
        assert_eq!(
            atoms[8999],
            " 9000     SQd        3000  DADMA      N      9000     1.00000E+00 "
        );
    }

    #[test]
    fn moleculetype_line_uses_tab_separator() {
        let document = render(Polymer::Pdadma, 17);
        assert!(document.contains("\n[ moleculetype ]\n; molname  nrexcl\nPDADMA17\t    2\n"));
    }

    #[test]
    fn c_exponential_matches_printf_conventions() {
        assert_eq!(c_exponential(0.0, 5, true), "0.00000E+00");
        assert_eq!(c_exponential(-1.0, 5, true), "-1.00000E+00");
        assert_eq!(c_exponential(0.5, 5, true), "5.00000E-01");
        assert_eq!(c_exponential(167.36, 6, false), "1.673600e+02");
        assert_eq!(c_exponential(1.5e-120, 2, false), "1.50e-120");
    }

    #[test]
    fn write_to_path_creates_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("pss.itp");
        let chain = Chain::new(Polymer::Pss.template(), 3).unwrap();
        ItpFile::write_to_path(&emitter::emit(&chain).unwrap(), &path).unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap(), PSS_3);
    }
}
