use crate::foundation::error::{ReelError, ReelResult};
use crate::scene::model::{DeviceProfile, RangeTableDef};
use crate::scene::profiles::table_for;
use crate::schema::validate::{describe, validate_range_table};
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

/// Range table boundary object.
///
/// This is the JSON-facing, human-edited description of every segment, layer transition and
/// text block for one device profile. It is validated and compiled into a
/// [`crate::Timeline`] before any progress is mapped.
#[derive(Debug, Clone, PartialEq)]
pub struct RangeTable {
    def: RangeTableDef,
}

impl RangeTable {
    /// Built-in table for `profile`.
    pub fn for_profile(profile: DeviceProfile) -> Self {
        Self {
            def: table_for(profile),
        }
    }

    /// Built-in desktop table (wheel smoothing, 40-viewport container).
    pub fn desktop() -> Self {
        Self::for_profile(DeviceProfile::Desktop)
    }

    /// Built-in constrained table (native scrolling, 30-viewport container).
    pub fn constrained() -> Self {
        Self::for_profile(DeviceProfile::Constrained)
    }

    /// Wrap an already constructed definition.
    pub fn from_def(def: RangeTableDef) -> Self {
        Self { def }
    }

    /// Parse a range table from a JSON reader.
    pub fn from_reader<R: std::io::Read>(r: R) -> ReelResult<Self> {
        let def: RangeTableDef = serde_json::from_reader(r)
            .map_err(|e| ReelError::serde(format!("parse range table JSON: {e}")))?;
        Ok(Self { def })
    }

    /// Parse a range table from a JSON string.
    pub fn from_json(s: &str) -> ReelResult<Self> {
        Self::from_reader(s.as_bytes())
    }

    /// Parse a range table from a JSON file on disk.
    pub fn from_path(path: impl AsRef<Path>) -> ReelResult<Self> {
        let path = path.as_ref();
        let f = File::open(path).map_err(|e| {
            ReelError::config(format!("open range table JSON '{}': {e}", path.display()))
        })?;
        Self::from_reader(BufReader::new(f))
    }

    /// Serialize to pretty JSON.
    pub fn to_json_pretty(&self) -> ReelResult<String> {
        serde_json::to_string_pretty(&self.def).map_err(|e| ReelError::serde(e.to_string()))
    }

    /// Validate every range and reference in the table.
    ///
    /// Malformed ranges are rejected here instead of being clamped at evaluation time.
    pub fn validate(&self) -> ReelResult<()> {
        validate_range_table(&self.def).map_err(|issues| {
            ReelError::validation(format!(
                "range table validation failed: {}",
                describe(&issues)
            ))
        })
    }

    /// Profile this table targets.
    pub fn profile(&self) -> DeviceProfile {
        self.def.profile
    }

    /// Borrow the underlying definition.
    pub fn def(&self) -> &RangeTableDef {
        &self.def
    }

    /// Mutable access for programmatic edits; call [`RangeTable::validate`] afterwards.
    pub fn def_mut(&mut self) -> &mut RangeTableDef {
        &mut self.def
    }
}

#[cfg(test)]
#[path = "../../tests/unit/scene/table.rs"]
mod tests;
