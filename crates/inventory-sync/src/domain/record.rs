//! Equipment Entities
//!
//! One record per piece of equipment, keyed by the opaque id the remote store
//! assigns on creation. Wire field names keep the original camelCase keys so
//! existing collections stay readable.

use serde::{Deserialize, Serialize};

use super::error::{InventoryError, InventoryResult};

/// Equipment condition, fixed selectable set
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Condition {
    Good,
    Bad,
    Maintenance,
}

impl Condition {
    /// All selectable conditions, in display order
    pub const ALL: [Condition; 3] = [Condition::Good, Condition::Bad, Condition::Maintenance];

    pub fn as_str(&self) -> &'static str {
        match self {
            Condition::Good => "Good",
            Condition::Bad => "Bad",
            Condition::Maintenance => "Maintenance",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "Good" => Some(Condition::Good),
            "Bad" => Some(Condition::Bad),
            "Maintenance" => Some(Condition::Maintenance),
            _ => None,
        }
    }
}

/// The persisted field set of a record (everything but the id)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EquipmentInput {
    #[serde(rename = "objectDisplayName")]
    pub display_name: String,
    pub condition: Condition,
    #[serde(rename = "partNumber")]
    pub part_number: String,
    #[serde(default)]
    pub description: String,
}

/// One equipment entry in the local mirror
#[derive(Debug, Clone, PartialEq)]
pub struct EquipmentRecord {
    /// Opaque key assigned by the remote store, never client-generated
    pub id: String,
    pub display_name: String,
    pub condition: Condition,
    pub part_number: String,
    pub description: String,
}

impl EquipmentRecord {
    /// Build a record from one snapshot entry (`id` is the entry's key).
    pub fn from_entry(id: String, input: EquipmentInput) -> Self {
        Self {
            id,
            display_name: input.display_name,
            condition: input.condition,
            part_number: input.part_number,
            description: input.description,
        }
    }
}

/// Raw dialog fields before validation
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EquipmentDraft {
    pub display_name: String,
    pub condition: String,
    pub part_number: String,
    pub description: String,
}

impl EquipmentDraft {
    /// Prefill from an existing record (edit dialog).
    pub fn from_record(record: &EquipmentRecord) -> Self {
        Self {
            display_name: record.display_name.clone(),
            condition: record.condition.as_str().to_string(),
            part_number: record.part_number.clone(),
            description: record.description.clone(),
        }
    }

    /// Check the required fields and produce the wire payload.
    ///
    /// Description is optional; everything else must be present and the
    /// condition must be one of the selectable values.
    pub fn validate(&self) -> InventoryResult<EquipmentInput> {
        if self.display_name.trim().is_empty() {
            return Err(InventoryError::Validation("display name is required".into()));
        }
        let condition = Condition::from_str(&self.condition)
            .ok_or_else(|| InventoryError::Validation("condition is required".into()))?;
        if self.part_number.trim().is_empty() {
            return Err(InventoryError::Validation("part number is required".into()));
        }
        Ok(EquipmentInput {
            display_name: self.display_name.clone(),
            condition,
            part_number: self.part_number.clone(),
            description: self.description.clone(),
        })
    }
}
