use crate::cli::TemplateSource;
use crate::error::{CliError, Result};
use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};
use topgen::core::chemistry::Polymer;
use topgen::core::models::template::MonomerTemplate;
use topgen::workflows;
use tracing::{debug, info, warn};

#[derive(Debug, Clone)]
pub struct GenerateArgs {
    pub monomers: usize,
    pub output: PathBuf,
    pub source: TemplateSource,
}

pub fn run(args: GenerateArgs) -> Result<()> {
    let template = resolve_template(&args.source)?;
    info!(
        "Using monomer template '{}' ({} beads per monomer).",
        template.name,
        template.beads_per_monomer()
    );

    let topology = workflows::generate::run(template, args.monomers)?;
    info!(
        atoms = topology.atom_count(),
        bonds = topology.bonds.len(),
        constraints = topology.constraints.len(),
        angles = topology.angles.len(),
        dihedrals = topology.dihedral_count(),
        "Resolved topology for {}.",
        topology.molecule_name
    );
    debug!("Net charge of the chain: {:+.3}", topology.total_charge());

    let document = workflows::generate::render(&topology)?;
    write_output(&args.output, &document)?;

    println!(
        "✓ Topology for {} written to: {}",
        topology.molecule_name,
        args.output.display()
    );
    Ok(())
}

fn resolve_template(source: &TemplateSource) -> Result<MonomerTemplate> {
    match (&source.template, source.polymer) {
        (Some(path), _) => {
            info!("Loading monomer template from {:?}", path);
            MonomerTemplate::load(path).map_err(|source| CliError::Template {
                path: path.clone(),
                source,
            })
        }
        (None, Some(polymer)) => Ok(polymer.template()),
        (None, None) => {
            debug!("No template selected, defaulting to {}.", Polymer::Pss);
            Ok(Polymer::Pss.template())
        }
    }
}

/// Writes the rendered document in one go. A file left half-written by a failed write is
/// removed again; a file that could not be opened is never touched.
fn write_output(path: &Path, document: &[u8]) -> Result<()> {
    let to_error = |source: std::io::Error| CliError::Output {
        path: path.to_path_buf(),
        source,
    };

    let mut file = File::create(path).map_err(to_error)?;
    let written = file.write_all(document).and_then(|_| file.sync_all());
    if let Err(source) = written {
        drop(file);
        if let Err(e) = fs::remove_file(path) {
            warn!("Could not remove incomplete output {:?}: {}", path, e);
        }
        return Err(to_error(source));
    }
    Ok(())
}
