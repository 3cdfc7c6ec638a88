use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::domain::AppError;
use crate::impl_validated_id;

/// A validated generator name.
///
/// Guarantees:
/// - Non-empty
/// - Contains only alphanumeric characters, `-`, or `_`
/// - Usable as a file stem inside the artifact store
///
/// Ordering is the byte-wise order of the underlying string, so sorted
/// collections of names are locale independent.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct GeneratorName(String);

impl_validated_id!(GeneratorName, AppError::InvalidGeneratorName);

impl From<GeneratorName> for String {
    fn from(val: GeneratorName) -> Self {
        val.0
    }
}

impl Serialize for GeneratorName {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for GeneratorName {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        GeneratorName::new(&s).map_err(serde::de::Error::custom)
    }
}
