//! The modification engine.
use crate::profile::{basic_profile, DicomVersion, TagRange};
use crate::relationships::{remove_relationships, RelationshipsVisitor};
use crate::uid_map::{IdentifierGenerator, ResourceLevel, UidMap, UuidIdentifierGenerator};
use crate::value::{json_to_value, replacement_vr};
use crate::{
    AccessSnafu, GenerateIdentifierSnafu, ManualIdentifierSnafu, NoReplacementSnafu,
    RemoveMainIdentifierSnafu, Result, UidValueRepresentationSnafu, VisitSnafu,
};
use dcmkit_core::dictionary::DataDictionary;
use dcmkit_core::{DicomPath, Tag, VR};
use dcmkit_dictionary_std::tags;
use dcmkit_object::visitor::TextEncoding;
use dcmkit_object::{
    DefaultDicomObject, DicomMap, InMemDicomObject, ReplaceMode, StandardDataDictionary, Value,
    USEFUL_TAG_LENGTH,
};
use serde_json::Value as JsonValue;
use snafu::{OptionExt, ResultExt};
use std::collections::{BTreeMap, BTreeSet};
use tracing::{debug, warn};

/// The main identifier of each level of the hierarchy.
pub(crate) fn level_tag(level: ResourceLevel) -> Tag {
    match level {
        ResourceLevel::Patient => tags::PATIENT_ID,
        ResourceLevel::Study => tags::STUDY_INSTANCE_UID,
        ResourceLevel::Series => tags::SERIES_INSTANCE_UID,
        ResourceLevel::Instance => tags::SOP_INSTANCE_UID,
    }
}

/// A set of rules for modifying or anonymizing data sets.
///
/// Each attribute is subject to at most one of the rules
/// keep, remove, clear or replace:
/// registering a rule for a tag cancels the other rules for that tag.
///
/// The identifiers of the patient/study/series/instance hierarchy
/// are remapped to new values at and below the modification [level].
/// The same original identifier is always mapped to the same new one
/// for as long as this modification lives,
/// so that a batch of related instances stays consistent.
///
/// [level]: DicomModification::set_level
#[derive(Debug)]
pub struct DicomModification {
    pub(crate) removals: BTreeSet<Tag>,
    pub(crate) clearings: BTreeSet<Tag>,
    pub(crate) keep: BTreeSet<Tag>,
    pub(crate) replacements: BTreeMap<Tag, JsonValue>,
    pub(crate) remove_private_tags: bool,
    pub(crate) level: ResourceLevel,
    pub(crate) uid_map: UidMap,
    pub(crate) private_tags_to_keep: BTreeSet<Tag>,
    pub(crate) allow_manual_identifiers: bool,
    pub(crate) keep_study_instance_uid: bool,
    pub(crate) keep_series_instance_uid: bool,
    pub(crate) keep_sop_instance_uid: bool,
    pub(crate) update_referenced_relationships: bool,
    pub(crate) is_anonymization: bool,
    pub(crate) private_creator: String,
    pub(crate) uids: BTreeSet<Tag>,
    pub(crate) removed_ranges: Vec<TagRange>,
    pub(crate) keep_sequences: Vec<DicomPath>,
    pub(crate) remove_sequences: Vec<DicomPath>,
    pub(crate) sequence_replacements: Vec<(DicomPath, JsonValue)>,
    current_source: DicomMap,
    identifier_generator: Option<Box<dyn IdentifierGenerator>>,
}

impl Default for DicomModification {
    fn default() -> Self {
        DicomModification {
            removals: BTreeSet::new(),
            clearings: BTreeSet::new(),
            keep: BTreeSet::new(),
            replacements: BTreeMap::new(),
            remove_private_tags: false,
            level: ResourceLevel::Instance,
            uid_map: UidMap::new(),
            private_tags_to_keep: BTreeSet::new(),
            allow_manual_identifiers: true,
            keep_study_instance_uid: false,
            keep_series_instance_uid: false,
            keep_sop_instance_uid: false,
            update_referenced_relationships: true,
            is_anonymization: false,
            private_creator: String::new(),
            uids: BTreeSet::new(),
            removed_ranges: Vec::new(),
            keep_sequences: Vec::new(),
            remove_sequences: Vec::new(),
            sequence_replacements: Vec::new(),
            current_source: DicomMap::new(),
            identifier_generator: None,
        }
    }
}

impl DicomModification {
    /// Create an empty modification at the instance level.
    pub fn new() -> Self {
        Self::default()
    }

    /// Once the rules were edited by hand,
    /// the data set is no longer de-identified by a profile alone,
    /// so the method stamp is withdrawn.
    fn mark_not_builtin_anonymization(&mut self) {
        let is_builtin = match self
            .replacements
            .get(&tags::DEIDENTIFICATION_METHOD)
            .and_then(JsonValue::as_str)
        {
            Some(method) => DicomVersion::all()
                .iter()
                .any(|v| v.deidentification_method() == method),
            None => false,
        };
        if is_builtin {
            self.replacements.remove(&tags::DEIDENTIFICATION_METHOD);
        }
    }

    /// Keep an attribute untouched.
    pub fn keep(&mut self, tag: Tag) {
        self.removals.remove(&tag);
        self.clearings.remove(&tag);
        self.uids.remove(&tag);
        self.replacements.remove(&tag);
        self.keep.insert(tag);

        if tag == tags::STUDY_INSTANCE_UID {
            self.keep_study_instance_uid = true;
        } else if tag == tags::SERIES_INSTANCE_UID {
            self.keep_series_instance_uid = true;
        } else if tag == tags::SOP_INSTANCE_UID {
            self.keep_sop_instance_uid = true;
        } else if tag.is_private() {
            self.private_tags_to_keep.insert(tag);
        }

        self.mark_not_builtin_anonymization();
    }

    /// Remove an attribute.
    pub fn remove(&mut self, tag: Tag) {
        self.keep.remove(&tag);
        self.clearings.remove(&tag);
        self.uids.remove(&tag);
        self.replacements.remove(&tag);
        self.private_tags_to_keep.remove(&tag);
        self.removals.insert(tag);
        self.mark_not_builtin_anonymization();
    }

    /// Give an attribute an empty value, if it exists.
    pub fn clear(&mut self, tag: Tag) {
        self.keep.remove(&tag);
        self.removals.remove(&tag);
        self.uids.remove(&tag);
        self.replacements.remove(&tag);
        self.private_tags_to_keep.remove(&tag);
        self.clearings.insert(tag);
        self.mark_not_builtin_anonymization();
    }

    /// Replace the value of an attribute, inserting it if missing.
    ///
    /// The value is a string, `null` or an array of items,
    /// as described in [`crate::value`].
    /// Replacements marked `safe_for_anonymization`
    /// do not withdraw the de-identification method stamp.
    pub fn replace(&mut self, tag: Tag, value: impl Into<JsonValue>, safe_for_anonymization: bool) {
        self.keep.remove(&tag);
        self.clearings.remove(&tag);
        self.removals.remove(&tag);
        self.uids.remove(&tag);
        self.private_tags_to_keep.remove(&tag);
        self.replacements.insert(tag, value.into());

        if !safe_for_anonymization {
            self.mark_not_builtin_anonymization();
        }
    }

    /// Keep every attribute designated by the path.
    ///
    /// Nested attributes under a kept path
    /// are left untouched by the anonymization.
    pub fn keep_path(&mut self, path: DicomPath) {
        if path.prefix_len() == 0 {
            self.keep(path.final_tag());
        }
        self.keep_sequences.push(path);
        self.mark_not_builtin_anonymization();
    }

    /// Remove every attribute designated by the path.
    pub fn remove_path(&mut self, path: DicomPath) {
        if path.prefix_len() == 0 {
            self.remove(path.final_tag());
        } else {
            self.remove_sequences.push(path);
            self.mark_not_builtin_anonymization();
        }
    }

    /// Replace the value of every attribute designated by the path.
    pub fn replace_path(
        &mut self,
        path: DicomPath,
        value: impl Into<JsonValue>,
        safe_for_anonymization: bool,
    ) {
        if path.prefix_len() == 0 {
            self.replace(path.final_tag(), value, safe_for_anonymization);
        } else {
            self.sequence_replacements.push((path, value.into()));
            if !safe_for_anonymization {
                self.mark_not_builtin_anonymization();
            }
        }
    }

    /// Whether the attribute is removed, explicitly or by a range rule.
    pub fn is_removed(&self, tag: Tag) -> bool {
        self.removals.contains(&tag) || self.removed_ranges.iter().any(|r| r.contains(tag))
    }

    pub fn is_cleared(&self, tag: Tag) -> bool {
        self.clearings.contains(&tag)
    }

    pub fn is_replaced(&self, tag: Tag) -> bool {
        self.replacements.contains_key(&tag)
    }

    pub fn is_kept(&self, tag: Tag) -> bool {
        self.keep.contains(&tag)
    }

    /// The replacement registered for the attribute.
    pub fn replacement(&self, tag: Tag) -> Result<&JsonValue> {
        self.replacements
            .get(&tag)
            .context(NoReplacementSnafu { tag })
    }

    /// The replacement registered for the attribute,
    /// or `None` if it is not a string.
    pub fn replacement_as_str(&self, tag: Tag) -> Result<Option<&str>> {
        self.replacement(tag).map(JsonValue::as_str)
    }

    /// Iterate over the attributes with a top-level replacement.
    pub fn replaced_tags(&self) -> impl Iterator<Item = Tag> + '_ {
        self.replacements.keys().copied()
    }

    /// Whether the attribute is affected by any rule of this modification.
    pub fn is_altered_tag(&self, tag: Tag) -> bool {
        self.is_removed(tag)
            || self.is_cleared(tag)
            || self.is_replaced(tag)
            || (tag.is_private() && self.remove_private_tags)
            || (self.is_anonymization && self.uids.contains(&tag))
            || (tag == tags::STUDY_INSTANCE_UID
                && self.level <= ResourceLevel::Study
                && !self.keep_study_instance_uid)
            || (tag == tags::SERIES_INSTANCE_UID
                && self.level <= ResourceLevel::Series
                && !self.keep_series_instance_uid)
            || (tag == tags::SOP_INSTANCE_UID && !self.keep_sop_instance_uid)
    }

    /// Remove all private attributes except the kept ones.
    pub fn set_remove_private_tags(&mut self, removed: bool) {
        self.remove_private_tags = removed;
        if !removed {
            self.mark_not_builtin_anonymization();
        }
    }

    pub fn remove_private_tags(&self) -> bool {
        self.remove_private_tags
    }

    /// Set the level of the hierarchy being modified.
    ///
    /// The identifiers at and below this level are remapped.
    /// Changing the level forgets the identifiers mapped so far.
    pub fn set_level(&mut self, level: ResourceLevel) {
        self.uid_map.clear();
        self.level = level;
        if level != ResourceLevel::Patient {
            self.mark_not_builtin_anonymization();
        }
    }

    pub fn level(&self) -> ResourceLevel {
        self.level
    }

    /// Allow the identifiers of the levels above the modified one
    /// to be replaced by hand.
    pub fn set_allow_manual_identifiers(&mut self, allow: bool) {
        self.allow_manual_identifiers = allow;
    }

    pub fn allow_manual_identifiers(&self) -> bool {
        self.allow_manual_identifiers
    }

    /// Remap the identifiers found in references to other instances
    /// instead of removing those references.
    pub fn set_update_referenced_relationships(&mut self, update: bool) {
        self.update_referenced_relationships = update;
    }

    pub fn update_referenced_relationships(&self) -> bool {
        self.update_referenced_relationships
    }

    /// Set the private creator used when inserting private attributes.
    pub fn set_private_creator(&mut self, creator: impl Into<String>) {
        self.private_creator = creator.into();
    }

    pub fn private_creator(&self) -> &str {
        &self.private_creator
    }

    /// Use a custom source of new identifiers.
    ///
    /// Such a modification can no longer be serialized.
    pub fn set_identifier_generator(&mut self, generator: Box<dyn IdentifierGenerator>) {
        self.identifier_generator = Some(generator);
    }

    pub(crate) fn has_identifier_generator(&self) -> bool {
        self.identifier_generator.is_some()
    }

    pub fn is_anonymization(&self) -> bool {
        self.is_anonymization
    }

    /// The identifiers remapped so far.
    pub fn uid_map(&self) -> &UidMap {
        &self.uid_map
    }

    /// The attributes whose values are remapped as identifiers
    /// wherever they appear.
    pub fn uids(&self) -> &BTreeSet<Tag> {
        &self.uids
    }

    pub fn removed_ranges(&self) -> &[TagRange] {
        &self.removed_ranges
    }

    /// Turn this modification into an anonymization
    /// following the basic profile of the given edition.
    ///
    /// All the rules registered so far are discarded.
    pub fn setup_anonymization(&mut self, version: DicomVersion) -> Result<()> {
        self.is_anonymization = true;

        self.keep.clear();
        self.removals.clear();
        self.clearings.clear();
        self.removed_ranges.clear();
        self.uids.clear();
        self.replacements.clear();
        self.remove_private_tags = true;
        self.level = ResourceLevel::Patient;
        self.uid_map.clear();
        self.private_tags_to_keep.clear();
        self.keep_sequences.clear();
        self.remove_sequences.clear();
        self.sequence_replacements.clear();

        let profile = basic_profile(version);
        self.clearings.extend(profile.clearings.iter().copied());
        self.removals.extend(profile.removals.iter().copied());
        self.uids.extend(profile.uids.iter().copied());
        self.removed_ranges.extend(profile.ranges.iter().copied());

        self.replacements.insert(
            tags::DEIDENTIFICATION_METHOD,
            JsonValue::from(version.deidentification_method()),
        );
        self.replacements
            .insert(tags::PATIENT_IDENTITY_REMOVED, JsonValue::from("YES"));

        // pseudonyms, mapped at the patient level
        self.uids.insert(tags::PATIENT_ID);
        self.uids.insert(tags::PATIENT_NAME);

        for &tag in &self.uids {
            let expected = match tag {
                tags::PATIENT_ID => VR::LO,
                tags::PATIENT_NAME => VR::PN,
                _ => VR::UI,
            };
            match StandardDataDictionary.vr_of(tag) {
                Some(vr) if vr != expected => {
                    return UidValueRepresentationSnafu { tag, vr }.fail();
                }
                Some(_) => {}
                None => debug!("Tag {} of the UID set is not in the dictionary", tag),
            }
        }

        debug!(
            "Anonymization set up with the basic profile of {} ({} removals, {} clearings, {} identifiers)",
            version,
            self.removals.len(),
            self.clearings.len(),
            self.uids.len()
        );
        Ok(())
    }

    /// Map an identifier to its replacement at the given level,
    /// generating a new one the first time it is seen.
    pub fn map_dicom_identifier(&mut self, original: &str, level: ResourceLevel) -> Result<String> {
        let original = original.trim_matches(|c| c == ' ' || c == '\0');
        if let Some(mapped) = self.uid_map.get(level, original) {
            return Ok(mapped.to_string());
        }

        let mapped = match self.identifier_generator.as_mut() {
            Some(generator) => generator
                .generate(original, level, &self.current_source)
                .context(GenerateIdentifierSnafu { level })?,
            None => UuidIdentifierGenerator::new_identifier(level),
        };
        debug!("Mapped {} identifier {:?} to {:?}", level, original, mapped);
        self.uid_map
            .insert(level, original.to_string(), mapped.clone());
        Ok(mapped)
    }

    /// Record that `original` was replaced by hand,
    /// so that references to it are updated consistently.
    fn register_mapped_identifier(&mut self, original: &str, mapped: &str, level: ResourceLevel) {
        let original = original.trim_matches(|c| c == ' ' || c == '\0');
        self.uid_map
            .register(level, original.to_string(), mapped.to_string());
    }

    fn check_main_identifiers(&self) -> Result<()> {
        for tag in [
            tags::PATIENT_ID,
            tags::STUDY_INSTANCE_UID,
            tags::SERIES_INSTANCE_UID,
            tags::SOP_INSTANCE_UID,
        ] {
            if self.is_removed(tag) {
                return RemoveMainIdentifierSnafu { tag }.fail();
            }
        }
        Ok(())
    }

    fn check_manual_identifiers(&self) -> Result<()> {
        if self.allow_manual_identifiers {
            return Ok(());
        }
        let level = self.level;
        let forbidden: &[(Tag, &'static str)] = match level {
            ResourceLevel::Patient => &[
                (tags::STUDY_INSTANCE_UID, "the StudyInstanceUID cannot be manually modified"),
                (tags::SERIES_INSTANCE_UID, "the SeriesInstanceUID cannot be manually modified"),
                (tags::SOP_INSTANCE_UID, "the SopInstanceUID cannot be manually modified"),
            ],
            ResourceLevel::Study => &[
                (tags::SERIES_INSTANCE_UID, "the SeriesInstanceUID cannot be manually modified"),
                (tags::SOP_INSTANCE_UID, "the SopInstanceUID cannot be manually modified"),
            ],
            ResourceLevel::Series => &[(
                tags::SOP_INSTANCE_UID,
                "the SopInstanceUID cannot be manually modified",
            )],
            ResourceLevel::Instance => &[],
        };
        for &(tag, reason) in forbidden {
            if self.is_replaced(tag) {
                return ManualIdentifierSnafu { level, reason }.fail();
            }
        }
        Ok(())
    }

    /// Check the constraints on the identifiers of the hierarchy
    /// that hold unless the modification is forced.
    pub(crate) fn check_hierarchy(&self) -> Result<()> {
        let level = self.level;
        let patient_id_changed =
            self.is_replaced(tags::PATIENT_ID) || self.uids.contains(&tags::PATIENT_ID);

        let reason = match level {
            ResourceLevel::Patient if !patient_id_changed => {
                Some("the PatientID is required to be modified")
            }
            ResourceLevel::Study | ResourceLevel::Series | ResourceLevel::Instance
                if patient_id_changed =>
            {
                Some("the parent PatientID cannot be manually modified")
            }
            ResourceLevel::Series | ResourceLevel::Instance
                if self.is_replaced(tags::STUDY_INSTANCE_UID) =>
            {
                Some("the parent StudyInstanceUID cannot be manually modified")
            }
            ResourceLevel::Instance if self.is_replaced(tags::SERIES_INSTANCE_UID) => {
                Some("the parent SeriesInstanceUID cannot be manually modified")
            }
            _ => None,
        };
        match reason {
            Some(reason) => ManualIdentifierSnafu { level, reason }.fail(),
            None => Ok(()),
        }
    }

    /// Apply the modification to a data set.
    ///
    /// The data set is left untouched if the modification fails.
    pub fn apply(&mut self, obj: &mut InMemDicomObject) -> Result<()> {
        self.check_main_identifiers()?;
        self.check_manual_identifiers()?;

        let mut work = obj.clone();
        let outcome = self.apply_to(&mut work);
        self.current_source = DicomMap::new();
        outcome?;
        *obj = work;
        Ok(())
    }

    /// Apply the modification to a DICOM file,
    /// keeping its file meta group in line with the new SOP instance.
    pub fn apply_file(&mut self, file: &mut DefaultDicomObject) -> Result<()> {
        self.apply(file)?;

        let sop_instance_uid = file
            .get(tags::SOP_INSTANCE_UID)
            .and_then(|e| e.to_str().map(|s| s.into_owned()));
        let sop_class_uid = file
            .get(tags::SOP_CLASS_UID)
            .and_then(|e| e.to_str().map(|s| s.into_owned()));
        if let Some(uid) = sop_instance_uid {
            file.meta_mut().set_media_storage_sop_instance_uid(&uid);
        }
        if let Some(uid) = sop_class_uid {
            file.meta_mut().set_media_storage_sop_class_uid(&uid);
        }
        Ok(())
    }

    fn private_creator_opt(&self) -> Option<String> {
        if self.private_creator.is_empty() {
            None
        } else {
            Some(self.private_creator.clone())
        }
    }

    fn apply_to(&mut self, obj: &mut InMemDicomObject) -> Result<()> {
        if self.identifier_generator.is_some() {
            self.current_source = obj.extract_summary(USEFUL_TAG_LENGTH);
        }

        // values converted up front, so that a bad replacement
        // fails before the data set is altered
        let encoding = TextEncoding::of(obj);
        let mut replacements = Vec::with_capacity(self.replacements.len());
        for (&tag, json) in &self.replacements {
            let vr = obj
                .get(tag)
                .map(|e| e.vr())
                .unwrap_or_else(|| replacement_vr(tag, json));
            replacements.push((tag, json_to_value(tag, vr, json, encoding)?));
        }
        let mut sequence_replacements = Vec::with_capacity(self.sequence_replacements.len());
        for (path, json) in &self.sequence_replacements {
            let tag = path.final_tag();
            let vr = replacement_vr(tag, json);
            sequence_replacements.push((path.clone(), json_to_value(tag, vr, json, encoding)?));
        }

        // register the identifiers replaced by hand,
        // so that the references to them follow
        if self.is_anonymization && self.update_referenced_relationships {
            for (level, tag) in [
                (ResourceLevel::Study, tags::STUDY_INSTANCE_UID),
                (ResourceLevel::Series, tags::SERIES_INSTANCE_UID),
                (ResourceLevel::Instance, tags::SOP_INSTANCE_UID),
            ] {
                let mapped = match self.replacements.get(&tag).and_then(JsonValue::as_str) {
                    Some(mapped) => mapped.to_string(),
                    None => continue,
                };
                if let Some(original) = obj.get(tag).and_then(|e| e.to_str()) {
                    self.register_mapped_identifier(&original, &mapped, level);
                }
            }
        }

        if self.remove_private_tags {
            let mut kept = self.private_tags_to_keep.clone();
            // kept attributes need the element reserving their block
            kept.extend(
                self.private_tags_to_keep
                    .iter()
                    .filter_map(|t| t.private_creator()),
            );
            obj.remove_private_tags(&kept);
        }

        for &tag in &self.clearings {
            obj.clear(tag, true);
        }

        for &tag in &self.removals {
            obj.remove(tag);
        }

        let creator = self.private_creator_opt();
        for (tag, value) in replacements {
            obj.replace(tag, value, ReplaceMode::InsertIfAbsent, creator.as_deref())
                .context(AccessSnafu)?;
        }

        // patient identifiers are pseudonymized through the UID set
        for (level, kept) in [
            (ResourceLevel::Study, self.keep_study_instance_uid),
            (ResourceLevel::Series, self.keep_series_instance_uid),
            (ResourceLevel::Instance, self.keep_sop_instance_uid),
        ] {
            let tag = level_tag(level);
            if level < self.level || self.is_replaced(tag) {
                continue;
            }
            if kept {
                warn!(
                    "Modifying a {} while keeping its original {}: the result may collide with the source",
                    level.as_str().to_lowercase(),
                    tag
                );
                continue;
            }
            let original = obj
                .get(tag)
                .and_then(|e| e.to_str().map(|s| s.into_owned()))
                .unwrap_or_default();
            let mapped = self.map_dicom_identifier(&original, level)?;
            obj.replace(tag, Value::from(mapped), ReplaceMode::InsertIfAbsent, None)
                .context(AccessSnafu)?;
        }

        if self.is_anonymization {
            if self.update_referenced_relationships {
                let mut visitor = RelationshipsVisitor::new(self);
                obj.apply_visitor(&mut visitor).context(VisitSnafu)?;
                visitor.finish()?;
            } else {
                remove_relationships(self, obj)?;
            }
        }

        if !self.removed_ranges.is_empty() {
            let in_ranges: Vec<Tag> = obj
                .iter()
                .map(|e| e.tag())
                .filter(|&t| self.removed_ranges.iter().any(|r| r.contains(t)))
                .collect();
            for tag in in_ranges {
                obj.remove(tag);
            }
        }

        for path in &self.remove_sequences {
            obj.remove_path(path);
        }

        for (path, value) in sequence_replacements {
            obj.replace_path(&path, value, ReplaceMode::InsertIfAbsent, creator.as_deref())
                .context(AccessSnafu)?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dcmkit_object::InMemElement;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    fn sample() -> InMemDicomObject {
        InMemDicomObject::from_element_iter(vec![
            InMemElement::new(tags::PATIENT_NAME, VR::PN, "Doe^John"),
            InMemElement::new(tags::PATIENT_ID, VR::LO, "P1"),
            InMemElement::new(tags::STUDY_INSTANCE_UID, VR::UI, "1.2.3"),
            InMemElement::new(tags::SERIES_INSTANCE_UID, VR::UI, "1.2.3.4"),
            InMemElement::new(tags::SOP_INSTANCE_UID, VR::UI, "1.2.3.4.5"),
            InMemElement::new(tags::INSTITUTION_NAME, VR::LO, "General Hospital"),
        ])
    }

    fn text(obj: &InMemDicomObject, tag: Tag) -> Option<String> {
        obj.get(tag).and_then(|e| e.to_str().map(|s| s.into_owned()))
    }

    #[test]
    fn rules_are_exclusive() {
        let mut m = DicomModification::new();
        m.remove(tags::INSTITUTION_NAME);
        assert!(m.is_removed(tags::INSTITUTION_NAME));

        m.replace(tags::INSTITUTION_NAME, "Nowhere", false);
        assert!(!m.is_removed(tags::INSTITUTION_NAME));
        assert!(m.is_replaced(tags::INSTITUTION_NAME));

        m.clear(tags::INSTITUTION_NAME);
        assert!(!m.is_replaced(tags::INSTITUTION_NAME));
        assert!(m.is_cleared(tags::INSTITUTION_NAME));

        m.keep(tags::INSTITUTION_NAME);
        assert!(!m.is_cleared(tags::INSTITUTION_NAME));
        assert!(m.is_kept(tags::INSTITUTION_NAME));
        assert!(!m.is_altered_tag(tags::INSTITUTION_NAME));
    }

    #[test]
    fn instance_level_modification() {
        let mut m = DicomModification::new();
        m.replace(tags::INSTITUTION_NAME, "Nowhere", false);
        m.remove(tags::PATIENT_NAME);

        let mut obj = sample();
        m.apply(&mut obj).unwrap();

        assert_eq!(text(&obj, tags::INSTITUTION_NAME).as_deref(), Some("Nowhere"));
        assert!(obj.get(tags::PATIENT_NAME).is_none());
        assert_eq!(text(&obj, tags::STUDY_INSTANCE_UID).as_deref(), Some("1.2.3"));
        assert_eq!(text(&obj, tags::SERIES_INSTANCE_UID).as_deref(), Some("1.2.3.4"));

        let sop = text(&obj, tags::SOP_INSTANCE_UID).unwrap();
        assert_ne!(sop, "1.2.3.4.5");
        assert!(sop.starts_with("2.25."));
        assert_eq!(
            m.uid_map().get(ResourceLevel::Instance, "1.2.3.4.5"),
            Some(sop.as_str())
        );
    }

    #[test]
    fn removing_a_main_identifier_is_refused() {
        let mut m = DicomModification::new();
        m.remove(tags::SERIES_INSTANCE_UID);
        let mut obj = sample();
        let err = m.apply(&mut obj).unwrap_err();
        assert!(matches!(err, crate::Error::RemoveMainIdentifier { .. }));
        assert_eq!(obj, sample());
    }

    #[test]
    fn manual_identifiers_can_be_refused() {
        let mut m = DicomModification::new();
        m.set_level(ResourceLevel::Series);
        m.replace(tags::SOP_INSTANCE_UID, "1.2.99", false);
        m.set_allow_manual_identifiers(false);
        let err = m.apply(&mut sample()).unwrap_err();
        assert!(matches!(err, crate::Error::ManualIdentifier { .. }));

        m.set_allow_manual_identifiers(true);
        let mut obj = sample();
        m.apply(&mut obj).unwrap();
        assert_eq!(text(&obj, tags::SOP_INSTANCE_UID).as_deref(), Some("1.2.99"));
    }

    #[test]
    fn bad_replacement_leaves_data_set_untouched() {
        let mut m = DicomModification::new();
        m.remove(tags::INSTITUTION_NAME);
        m.replace(tags::ROWS, "many", false);
        let mut obj = sample();
        assert!(m.apply(&mut obj).is_err());
        assert_eq!(obj, sample());
    }

    #[test]
    fn editing_an_anonymization_withdraws_the_method() {
        let mut m = DicomModification::new();
        m.setup_anonymization(DicomVersion::V2017c).unwrap();
        assert!(m.is_replaced(tags::DEIDENTIFICATION_METHOD));
        assert_eq!(
            m.replacement_as_str(tags::PATIENT_IDENTITY_REMOVED).unwrap(),
            Some("YES")
        );

        m.replace(tags::INSTITUTION_NAME, json!("Anon"), true);
        assert!(m.is_replaced(tags::DEIDENTIFICATION_METHOD));

        m.keep(tags::INSTITUTION_NAME);
        assert!(!m.is_replaced(tags::DEIDENTIFICATION_METHOD));
        assert!(m.replacement(tags::DEIDENTIFICATION_METHOD).is_err());
    }

    #[test]
    fn custom_method_survives_edits() {
        let mut m = DicomModification::new();
        m.setup_anonymization(DicomVersion::V2023b).unwrap();
        m.replace(tags::DEIDENTIFICATION_METHOD, "in-house", true);
        m.remove(tags::INSTITUTION_NAME);
        assert_eq!(
            m.replacement_as_str(tags::DEIDENTIFICATION_METHOD).unwrap(),
            Some("in-house")
        );
    }

    #[test]
    fn changing_level_forgets_mappings() {
        let mut m = DicomModification::new();
        let a = m.map_dicom_identifier("1.2.3 ", ResourceLevel::Study).unwrap();
        assert_eq!(m.map_dicom_identifier("1.2.3", ResourceLevel::Study).unwrap(), a);
        m.set_level(ResourceLevel::Study);
        assert!(m.uid_map().is_empty());
    }

    #[test]
    fn kept_private_tags_keep_their_creator() {
        let mut obj = sample();
        obj.put(InMemElement::new(Tag(0x0009, 0x0010), VR::LO, "ACME"));
        obj.put(InMemElement::new(Tag(0x0009, 0x1001), VR::LO, "secret"));
        obj.put(InMemElement::new(Tag(0x0009, 0x1002), VR::LO, "kept"));

        let mut m = DicomModification::new();
        m.set_remove_private_tags(true);
        m.keep(Tag(0x0009, 0x1002));
        m.apply(&mut obj).unwrap();

        assert!(obj.get(Tag(0x0009, 0x1001)).is_none());
        assert_eq!(text(&obj, Tag(0x0009, 0x1002)).as_deref(), Some("kept"));
        assert_eq!(text(&obj, Tag(0x0009, 0x0010)).as_deref(), Some("ACME"));
    }
}
