//! Grouping of search results by building.

use property_store::PropertyRecord;
use serde::Serialize;

/// Label for units with no building name.
pub const UNKNOWN_BUILDING: &str = "Unknown building";

/// Units of one building, cheapest first.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BuildingGroup {
    pub building: String,
    pub records: Vec<PropertyRecord>,
}

/// Building name → units, in first-seen order. Since searches return units cheapest first,
/// the building with the cheapest unit comes first.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct GroupedResults {
    groups: Vec<BuildingGroup>,
}

impl GroupedResults {
    pub fn groups(&self) -> &[BuildingGroup] {
        &self.groups
    }

    pub fn into_groups(self) -> Vec<BuildingGroup> {
        self.groups
    }

    pub fn get(&self, building: &str) -> Option<&BuildingGroup> {
        self.groups.iter().find(|g| g.building == building)
    }

    pub fn building_names(&self) -> impl Iterator<Item = &str> {
        self.groups.iter().map(|g| g.building.as_str())
    }

    /// Number of buildings.
    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// Number of units across all buildings.
    pub fn unit_count(&self) -> usize {
        self.groups.iter().map(|g| g.records.len()).sum()
    }
}

/// Partitions `records` by their exact building name. Every record is kept, in input order
/// within its group. Records with no name or an empty one go under [`UNKNOWN_BUILDING`],
/// which is also written into their `building`; named records are left untouched.
pub fn group_by_building(records: Vec<PropertyRecord>) -> GroupedResults {
    let mut groups: Vec<BuildingGroup> = Vec::new();

    for mut record in records {
        let label = match record.building.as_deref() {
            Some(name) if !name.is_empty() => name.to_string(),
            _ => {
                record.building = Some(UNKNOWN_BUILDING.to_string());
                UNKNOWN_BUILDING.to_string()
            }
        };

        match groups.iter_mut().find(|g| g.building == label) {
            Some(group) => group.records.push(record),
            None => groups.push(BuildingGroup {
                building: label,
                records: vec![record],
            }),
        }
    }

    GroupedResults { groups }
}
