use serde::Deserialize;
use std::fmt;
use std::path::Path;
use thiserror::Error;

/// Which of the three monomer variants applies at a chain position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum VariantKind {
    First,
    Interior,
    Last,
}

impl fmt::Display for VariantKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}",
            match self {
                VariantKind::First => "first",
                VariantKind::Interior => "interior",
                VariantKind::Last => "last",
            }
        )
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct BeadTemplate {
    #[serde(rename = "type")]
    pub bead_type: String, // MARTINI bead type (e.g., "SCY", "Qa")
    pub name: String,      // Atom name within the residue (e.g., "B", "R1")
    #[serde(default)]
    pub charge: f64,
}

impl BeadTemplate {
    pub fn new(bead_type: &str, name: &str, charge: f64) -> Self {
        Self {
            bead_type: bead_type.to_string(),
            name: name.to_string(),
            charge,
        }
    }
}

/// A reference to a bead relative to the monomer whose terms are being emitted.
///
/// `offset` selects the monomer (0 = this one, 1 = the next one, -1 = the previous one,
/// and so on) and `bead` is the 1-based local bead id inside that monomer's variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct BeadRef {
    #[serde(default)]
    pub offset: isize,
    pub bead: usize,
}

impl BeadRef {
    pub const fn new(offset: isize, bead: usize) -> Self {
        Self { offset, bead }
    }

    pub const fn here(bead: usize) -> Self {
        Self::new(0, bead)
    }

    pub const fn next(bead: usize) -> Self {
        Self::new(1, bead)
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(deny_unknown_fields, rename_all = "kebab-case")]
pub struct BondTemplate {
    pub beads: [BeadRef; 2],
    pub funct: u8,
    pub length: f64,
    pub force_constant: f64,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ConstraintTemplate {
    pub beads: [BeadRef; 2],
    pub funct: u8,
    pub length: f64,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(deny_unknown_fields, rename_all = "kebab-case")]
pub struct AngleTemplate {
    pub beads: [BeadRef; 3],
    pub funct: u8,
    pub theta: f64,
    pub force_constant: f64,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(deny_unknown_fields, rename_all = "kebab-case")]
pub struct DihedralTemplate {
    pub beads: [BeadRef; 4],
    pub funct: u8,
    pub q0: f64,
    pub force_constant: f64,
}

/// Read access to the bead references of any bonded-term template.
pub trait TermRefs {
    const SECTION: &'static str;

    fn bead_refs(&self) -> &[BeadRef];
}

impl TermRefs for BondTemplate {
    const SECTION: &'static str = "bonds";

    fn bead_refs(&self) -> &[BeadRef] {
        &self.beads
    }
}

impl TermRefs for ConstraintTemplate {
    const SECTION: &'static str = "constraints";

    fn bead_refs(&self) -> &[BeadRef] {
        &self.beads
    }
}

impl TermRefs for AngleTemplate {
    const SECTION: &'static str = "angles";

    fn bead_refs(&self) -> &[BeadRef] {
        &self.beads
    }
}

impl TermRefs for DihedralTemplate {
    const SECTION: &'static str = "dihedrals";

    fn bead_refs(&self) -> &[BeadRef] {
        &self.beads
    }
}

/// The bead set and bonded terms of one repeat unit in one chain role.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct MonomerVariant {
    pub beads: Vec<BeadTemplate>,
    #[serde(default)]
    pub bonds: Vec<BondTemplate>,
    #[serde(default)]
    pub constraints: Vec<ConstraintTemplate>,
    #[serde(default)]
    pub angles: Vec<AngleTemplate>,
    #[serde(default)]
    pub dihedrals: Vec<DihedralTemplate>,
}

impl MonomerVariant {
    pub fn bead_count(&self) -> usize {
        self.beads.len()
    }

    /// Looks up a bead by its 1-based local id.
    pub fn bead(&self, local_id: usize) -> Option<&BeadTemplate> {
        local_id.checked_sub(1).and_then(|i| self.beads.get(i))
    }

    fn validate(&self, kind: VariantKind) -> Result<(), TemplateError> {
        if self.beads.is_empty() {
            return Err(TemplateError::EmptyVariant(kind));
        }
        check_refs(kind, &self.bonds, self)?;
        check_refs(kind, &self.constraints, self)?;
        check_refs(kind, &self.angles, self)?;
        check_refs(kind, &self.dihedrals, self)?;
        Ok(())
    }
}

fn check_refs<T: TermRefs>(
    kind: VariantKind,
    terms: &[T],
    variant: &MonomerVariant,
) -> Result<(), TemplateError> {
    for (term_idx, term) in terms.iter().enumerate() {
        for bead_ref in term.bead_refs() {
            // References into neighbouring monomers are checked once the chain length is known.
            let out_of_range = bead_ref.bead == 0
                || (bead_ref.offset == 0 && variant.bead(bead_ref.bead).is_none());
            if out_of_range {
                return Err(TemplateError::UnknownBead {
                    variant: kind,
                    section: T::SECTION,
                    term: term_idx + 1,
                    bead: bead_ref.bead,
                });
            }
        }
    }
    Ok(())
}

/// An immutable description of one polymer chemistry.
///
/// Each chain role has its own [`MonomerVariant`], so the chain ends can carry fewer or
/// different bonded terms (and even a different number of beads) than the interior.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct MonomerTemplate {
    pub name: String,  // Molecule name prefix; the monomer count is appended
    pub title: String, // Free-text description written into the header comment
    #[serde(default)]
    pub notes: Vec<String>, // Extra header comment lines (e.g., a citation)
    pub residue: String,
    pub exclusions: u32, // nrexcl
    pub first: MonomerVariant,
    pub interior: MonomerVariant,
    pub last: MonomerVariant,
}

impl MonomerTemplate {
    pub fn variant(&self, kind: VariantKind) -> &MonomerVariant {
        match kind {
            VariantKind::First => &self.first,
            VariantKind::Interior => &self.interior,
            VariantKind::Last => &self.last,
        }
    }

    /// Number of beads in one interior repeat unit (`k`).
    pub fn beads_per_monomer(&self) -> usize {
        self.interior.bead_count()
    }

    pub fn first_bead_count(&self) -> usize {
        self.first.bead_count()
    }

    pub fn last_bead_count(&self) -> usize {
        self.last.bead_count()
    }

    /// Total bead count of a chain of `monomers` units, or `None` if it overflows `usize`.
    pub fn atom_count(&self, monomers: usize) -> Option<usize> {
        match monomers {
            0 => Some(0),
            1 => Some(self.first_bead_count()),
            n => (n - 2)
                .checked_mul(self.beads_per_monomer())?
                .checked_add(self.first_bead_count())?
                .checked_add(self.last_bead_count()),
        }
    }

    /// Molecule name as written to `[ moleculetype ]`, e.g. `PSS20`.
    pub fn molecule_name(&self, monomers: usize) -> String {
        format!("{}{}", self.name, monomers)
    }

    pub fn has_dihedrals(&self) -> bool {
        [&self.first, &self.interior, &self.last]
            .iter()
            .any(|v| !v.dihedrals.is_empty())
    }

    pub fn validate(&self) -> Result<(), TemplateError> {
        if self.name.trim().is_empty() {
            return Err(TemplateError::MissingName);
        }
        self.first.validate(VariantKind::First)?;
        self.interior.validate(VariantKind::Interior)?;
        self.last.validate(VariantKind::Last)?;
        Ok(())
    }

    pub fn from_toml_str(content: &str) -> Result<Self, TemplateLoadError> {
        let template: Self = toml::from_str(content)?;
        template.validate()?;
        Ok(template)
    }

    pub fn load(path: &Path) -> Result<Self, TemplateLoadError> {
        let content = std::fs::read_to_string(path).map_err(|e| TemplateLoadError::Io {
            path: path.to_string_lossy().to_string(),
            source: e,
        })?;
        Self::from_toml_str(&content)
    }
}

#[derive(Debug, Error, PartialEq, Eq, Clone)]
pub enum TemplateError {
    #[error("Template has an empty molecule name")]
    MissingName,
    #[error("The {0} monomer variant declares no beads")]
    EmptyVariant(VariantKind),
    #[error("Term {term} in [ {section} ] of the {variant} variant references unknown bead {bead}")]
    UnknownBead {
        variant: VariantKind,
        section: &'static str,
        term: usize,
        bead: usize,
    },
}

#[derive(Debug, Error)]
pub enum TemplateLoadError {
    #[error("File I/O error for '{path}': {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },
    #[error("TOML parsing error: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("Invalid template: {0}")]
    Invalid(#[from] TemplateError),
}
