/*!
# Instruction Index

Компактный индекс инструкций, который сохраняется в `<set>.json` и
используется во время работы для hover подсказок.

```json
{
  "CRC32C": { "doc": "...", "file": "crc32c.html" }
}
```

Keys keep the order in which they were first inserted; a name that is
already present is never overwritten.
*/

use serde::ser::SerializeMap;
use serde::{Deserialize, Serialize, Serializer};
use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

use crate::core::{output_path, ConvertError, ConvertResult};

/// As stored in the instruction set file
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InstructionEntry {
    /// Documentation to show in hover
    pub doc: String,
    /// File name the doc was extracted from
    pub file: String,
}

/// Instruction name → entry, first writer wins
#[derive(Debug, Clone, Default)]
pub struct InstructionIndex {
    entries: Vec<(String, InstructionEntry)>,
    names: HashSet<String>,
}

impl InstructionIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds `entry` under `name` unless the name is already indexed.
    /// Returns `false` when the entry was dropped as a duplicate.
    pub fn insert(&mut self, name: &str, entry: InstructionEntry) -> bool {
        if name.is_empty() || self.names.contains(name) {
            return false;
        }
        self.names.insert(name.to_string());
        self.entries.push((name.to_string(), entry));
        true
    }

    pub fn get(&self, name: &str) -> Option<&InstructionEntry> {
        if !self.names.contains(name) {
            return None;
        }
        self.entries
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, entry)| entry)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.names.contains(name)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Имена в порядке добавления
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(name, _)| name.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &InstructionEntry)> {
        self.entries.iter().map(|(name, entry)| (name.as_str(), entry))
    }

    /// Pretty JSON with two-space indentation
    pub fn to_json_pretty(&self) -> ConvertResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Writes `<dst_folder>/<set_name>.json` and returns its path.
    pub fn write_json(&self, dst_folder: &Path, set_name: &str) -> ConvertResult<PathBuf> {
        let path = output_path(dst_folder, set_name);
        let json = self.to_json_pretty()?;
        fs::write(&path, json).map_err(|source| ConvertError::Write {
            path: path.clone(),
            source,
        })?;
        Ok(path)
    }
}

impl Serialize for InstructionIndex {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (name, entry) in &self.entries {
            map.serialize_entry(name, entry)?;
        }
        map.end()
    }
}
