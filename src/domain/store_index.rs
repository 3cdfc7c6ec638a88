//! Static lookup table over every artifact in the store.

use std::collections::BTreeSet;

use super::GeneratorName;

/// How the index refers to artifacts and what the emitted constant is called.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IndexLayout {
    pub const_name: String,
    pub extension: String,
}

impl IndexLayout {
    pub fn artifact_file_name(&self, name: &GeneratorName) -> String {
        format!("{}.{}", name, self.extension)
    }
}

/// One row of the index.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IndexEntry {
    pub name: GeneratorName,
    /// File name resolved by the host build via `include_str!`, relative to the index.
    pub reference: String,
}

/// Sorted, duplicate-free table of `(name, reference)` pairs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreIndex {
    entries: Vec<IndexEntry>,
    const_name: String,
}

impl StoreIndex {
    /// Build the index for the given store listing.
    pub fn generate<'a, I>(names: I, layout: &IndexLayout) -> Self
    where
        I: IntoIterator<Item = &'a GeneratorName>,
    {
        let unique: BTreeSet<&GeneratorName> = names.into_iter().collect();
        let entries = unique
            .into_iter()
            .map(|name| IndexEntry {
                name: name.clone(),
                reference: layout.artifact_file_name(name),
            })
            .collect();
        Self { entries, const_name: layout.const_name.clone() }
    }

    pub fn entries(&self) -> &[IndexEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Render as Rust source, already in the shape rustfmt produces.
    pub fn render(&self) -> String {
        let mut out = String::new();
        out.push_str("// @generated by gensync. Do not edit by hand.\n\n");

        if self.entries.is_empty() {
            out.push_str(&format!("pub const {}: &[(&str, &str)] = &[];\n", self.const_name));
            return out;
        }

        out.push_str(&format!("pub const {}: &[(&str, &str)] = &[\n", self.const_name));
        for entry in &self.entries {
            out.push_str(&format!(
                "    ({:?}, include_str!({:?})),\n",
                entry.name.as_str(),
                entry.reference
            ));
        }
        out.push_str("];\n");
        out
    }
}
