use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Short operator name mapped to a job sub-path on the server
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct AliasEntry {
    #[serde(rename = "Alias")]
    pub alias: String,
    /// Relative to the server URL, no leading `/`, one trailing `/`
    #[serde(rename = "URL")]
    pub path: String,
}

/// Alias table kept in ascending alias order.
#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq, Eq)]
#[serde(transparent)]
pub struct AliasTable {
    entries: Vec<AliasEntry>,
}

impl AliasTable {
    pub fn resolve(&self, alias: &str) -> Result<&AliasEntry> {
        self.entries
            .iter()
            .find(|entry| entry.alias == alias)
            .ok_or_else(|| Error::AliasNotFound(alias.to_string()))
    }

    pub fn contains(&self, alias: &str) -> bool {
        self.entries.iter().any(|entry| entry.alias == alias)
    }

    pub fn insert(&mut self, alias: String, path: String) -> Result<()> {
        if self.contains(&alias) {
            return Err(Error::AliasExists(alias));
        }

        self.entries.push(AliasEntry { alias, path });
        self.sort();
        Ok(())
    }

    pub fn delete(&mut self, alias: &str) -> Result<AliasEntry> {
        let index = self
            .entries
            .iter()
            .position(|entry| entry.alias == alias)
            .ok_or_else(|| Error::AliasNotFound(alias.to_string()))?;

        // Vec::remove shifts, so the remaining entries stay sorted
        Ok(self.entries.remove(index))
    }

    pub fn list(&self) -> &[AliasEntry] {
        &self.entries
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Restore ascending order, e.g. after loading a hand-edited file
    pub fn sort(&mut self) {
        self.entries.sort_by(|a, b| a.alias.cmp(&b.alias));
    }
}
