use serde::Serialize;
use serde::ser::{SerializeStruct, Serializer};

/// Outcome of validating build output or a set of snapshots.
///
/// Validity is derived from `errors`: warnings never affect it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationResult {
    pub valid_files: Vec<String>,
    pub missing_files: Vec<String>,
    pub errors: Vec<String>,
    pub warnings: Vec<String>,
}

impl ValidationResult {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn error(&mut self, msg: impl Into<String>) {
        self.errors.push(msg.into());
    }

    pub fn warning(&mut self, msg: impl Into<String>) {
        self.warnings.push(msg.into());
    }
}

impl Serialize for ValidationResult {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut s = serializer.serialize_struct("ValidationResult", 5)?;
        s.serialize_field("is_valid", &self.is_valid())?;
        s.serialize_field("valid_files", &self.valid_files)?;
        s.serialize_field("missing_files", &self.missing_files)?;
        s.serialize_field("errors", &self.errors)?;
        s.serialize_field("warnings", &self.warnings)?;
        s.end()
    }
}
