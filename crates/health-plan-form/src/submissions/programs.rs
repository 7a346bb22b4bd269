use std::io::Read;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

/// Display name used when a package references a program the lookup does not know.
pub const UNKNOWN_PROGRAM: &str = "UNKNOWNPROGRAM";

/// A named state Medicaid/CHIP program referenced by opaque id.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Program {
    pub id: String,
    pub name: String,
}

impl Program {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
        }
    }
}

/// Resolve a program id to its display name.
pub fn program_name<'a>(programs: &'a [Program], id: &str) -> &'a str {
    programs
        .iter()
        .find(|program| program.id == id)
        .map(|program| program.name.as_str())
        .unwrap_or(UNKNOWN_PROGRAM)
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatePrograms {
    pub code: String,
    pub name: String,
    #[serde(default)]
    pub programs: Vec<Program>,
}

#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("failed to read state program catalog from {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid state program catalog JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("state {0} appears more than once in the program catalog")]
    DuplicateState(String),
}

/// Program lookup for every state, as configured for the review tool.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "CatalogWire")]
pub struct StateProgramCatalog {
    states: Vec<StatePrograms>,
}

#[derive(Debug, Deserialize)]
struct CatalogWire {
    #[serde(default)]
    states: Vec<StatePrograms>,
}

impl TryFrom<CatalogWire> for StateProgramCatalog {
    type Error = CatalogError;

    fn try_from(wire: CatalogWire) -> Result<Self, Self::Error> {
        Self::new(wire.states)
    }
}

impl StateProgramCatalog {
    pub fn new(states: Vec<StatePrograms>) -> Result<Self, CatalogError> {
        for (index, state) in states.iter().enumerate() {
            if states[..index]
                .iter()
                .any(|earlier| earlier.code.eq_ignore_ascii_case(&state.code))
            {
                return Err(CatalogError::DuplicateState(state.code.clone()));
            }
        }

        Ok(Self { states })
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<Self, CatalogError> {
        let wire: CatalogWire = serde_json::from_reader(reader)?;
        Self::try_from(wire)
    }

    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, CatalogError> {
        let path = path.as_ref();
        let file = std::fs::File::open(path).map_err(|source| CatalogError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_reader(std::io::BufReader::new(file))
    }

    pub fn states(&self) -> &[StatePrograms] {
        &self.states
    }

    /// Programs configured for a state; empty when the state is not in the catalog.
    pub fn programs_for(&self, state_code: &str) -> &[Program] {
        self.states
            .iter()
            .find(|state| state.code.eq_ignore_ascii_case(state_code))
            .map(|state| state.programs.as_slice())
            .unwrap_or(&[])
    }
}
