//! Consistent remapping of identifiers across the instances of a session.
use dcmkit_dictionary_std::uids::UUID_DERIVED_ROOT;
use dcmkit_object::DicomMap;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

/// A level of the patient/study/series/instance hierarchy.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum ResourceLevel {
    Patient,
    Study,
    Series,
    Instance,
}

impl ResourceLevel {
    pub fn as_str(self) -> &'static str {
        match self {
            ResourceLevel::Patient => "Patient",
            ResourceLevel::Study => "Study",
            ResourceLevel::Series => "Series",
            ResourceLevel::Instance => "Instance",
        }
    }
}

impl fmt::Display for ResourceLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ResourceLevel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "patient" => Ok(ResourceLevel::Patient),
            "study" => Ok(ResourceLevel::Study),
            "series" => Ok(ResourceLevel::Series),
            "instance" => Ok(ResourceLevel::Instance),
            _ => Err(s.to_string()),
        }
    }
}

/// The table of identifiers already remapped in a session,
/// one mapping per resource level.
///
/// Serializes to an object with the members
/// `MapPatients`, `MapStudies`, `MapSeries` and `MapInstances`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UidMap {
    #[serde(rename = "MapPatients")]
    patients: BTreeMap<String, String>,
    #[serde(rename = "MapStudies")]
    studies: BTreeMap<String, String>,
    #[serde(rename = "MapSeries")]
    series: BTreeMap<String, String>,
    #[serde(rename = "MapInstances")]
    instances: BTreeMap<String, String>,
}

impl UidMap {
    pub fn new() -> Self {
        Self::default()
    }

    fn level(&self, level: ResourceLevel) -> &BTreeMap<String, String> {
        match level {
            ResourceLevel::Patient => &self.patients,
            ResourceLevel::Study => &self.studies,
            ResourceLevel::Series => &self.series,
            ResourceLevel::Instance => &self.instances,
        }
    }

    fn level_mut(&mut self, level: ResourceLevel) -> &mut BTreeMap<String, String> {
        match level {
            ResourceLevel::Patient => &mut self.patients,
            ResourceLevel::Study => &mut self.studies,
            ResourceLevel::Series => &mut self.series,
            ResourceLevel::Instance => &mut self.instances,
        }
    }

    /// The identifier which `original` was mapped to at this level.
    pub fn get(&self, level: ResourceLevel, original: &str) -> Option<&str> {
        self.level(level).get(original).map(String::as_str)
    }

    /// Record a mapping, replacing any previous one.
    pub fn insert(&mut self, level: ResourceLevel, original: String, mapped: String) {
        self.level_mut(level).insert(original, mapped);
    }

    /// Record a mapping unless `original` is already mapped at this level.
    pub fn register(&mut self, level: ResourceLevel, original: String, mapped: String) {
        self.level_mut(level).entry(original).or_insert(mapped);
    }

    /// Iterate over all mappings of a level, as `(original, mapped)`.
    pub fn iter(&self, level: ResourceLevel) -> impl Iterator<Item = (&str, &str)> + '_ {
        self.level(level)
            .iter()
            .map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.patients.len() + self.studies.len() + self.series.len() + self.instances.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn clear(&mut self) {
        self.patients.clear();
        self.studies.clear();
        self.series.clear();
        self.instances.clear();
    }
}

/// A source of new identifiers for the resources being anonymized.
pub trait IdentifierGenerator: fmt::Debug {
    /// Produce the identifier replacing `original` at the given level.
    ///
    /// `source` is the summary of the data set being modified.
    /// Returns `None` if no identifier could be produced.
    fn generate(
        &mut self,
        original: &str,
        level: ResourceLevel,
        source: &DicomMap,
    ) -> Option<String>;
}

/// The built-in identifier generator.
///
/// Patients receive a random UUID in its textual form,
/// which fits the 64 characters of a Patient ID.
/// Other levels receive a UUID-derived UID under the `2.25` root.
#[derive(Debug, Default, Copy, Clone)]
pub struct UuidIdentifierGenerator;

impl UuidIdentifierGenerator {
    /// Produce a new identifier for the level.
    pub fn new_identifier(level: ResourceLevel) -> String {
        let uuid = Uuid::new_v4();
        match level {
            ResourceLevel::Patient => uuid.hyphenated().to_string(),
            _ => format!("{}.{}", UUID_DERIVED_ROOT, uuid.as_u128()),
        }
    }
}

impl IdentifierGenerator for UuidIdentifierGenerator {
    fn generate(&mut self, _original: &str, level: ResourceLevel, _source: &DicomMap) -> Option<String> {
        Some(Self::new_identifier(level))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn register_keeps_first_mapping() {
        let mut map = UidMap::new();
        map.register(ResourceLevel::Study, "1.2.3".into(), "9.9.1".into());
        map.register(ResourceLevel::Study, "1.2.3".into(), "9.9.2".into());
        assert_eq!(map.get(ResourceLevel::Study, "1.2.3"), Some("9.9.1"));
        assert_eq!(map.get(ResourceLevel::Series, "1.2.3"), None);

        map.insert(ResourceLevel::Study, "1.2.3".into(), "9.9.3".into());
        assert_eq!(map.get(ResourceLevel::Study, "1.2.3"), Some("9.9.3"));
        assert_eq!(map.len(), 1);
    }

    #[test]
    fn serialize_uid_map() {
        let mut map = UidMap::new();
        map.insert(ResourceLevel::Patient, "P1".into(), "anon".into());
        map.insert(ResourceLevel::Instance, "1.2.5".into(), "2.25.7".into());

        let json = serde_json::to_value(&map).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "MapPatients": { "P1": "anon" },
                "MapStudies": {},
                "MapSeries": {},
                "MapInstances": { "1.2.5": "2.25.7" },
            })
        );
        let back: UidMap = serde_json::from_value(json).unwrap();
        assert_eq!(back, map);
    }

    #[test]
    fn generated_identifiers() {
        let uid = UuidIdentifierGenerator::new_identifier(ResourceLevel::Series);
        assert!(uid.starts_with("2.25."));
        assert!(uid.len() <= 64);
        assert!(uid[5..].bytes().all(|c| c.is_ascii_digit()));

        let id = UuidIdentifierGenerator::new_identifier(ResourceLevel::Patient);
        assert_eq!(id.len(), 36);
        assert_ne!(id, UuidIdentifierGenerator::new_identifier(ResourceLevel::Patient));
    }

    #[test]
    fn parse_levels() {
        assert_eq!("Study".parse::<ResourceLevel>(), Ok(ResourceLevel::Study));
        assert_eq!("instance".parse::<ResourceLevel>(), Ok(ResourceLevel::Instance));
        assert!("Frame".parse::<ResourceLevel>().is_err());
        assert!(ResourceLevel::Patient < ResourceLevel::Instance);
    }
}
