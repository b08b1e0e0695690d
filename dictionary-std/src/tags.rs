//! Data element tag declarations
//!
//! Automatically generated. Edit at your own risk.

use dcmkit_core::dictionary::DataDictionaryEntryRef;
use dcmkit_core::Tag;
use dcmkit_core::VR::*;

/// AffectedSOPInstanceUID (0000,1000) UI
#[rustfmt::skip]
pub const AFFECTED_SOP_INSTANCE_UID: Tag = Tag(0x0000, 0x1000);
/// RequestedSOPInstanceUID (0000,1001) UI
#[rustfmt::skip]
pub const REQUESTED_SOP_INSTANCE_UID: Tag = Tag(0x0000, 0x1001);
/// FileMetaInformationGroupLength (0002,0000) UL
#[rustfmt::skip]
pub const FILE_META_INFORMATION_GROUP_LENGTH: Tag = Tag(0x0002, 0x0000);
/// FileMetaInformationVersion (0002,0001) OB
#[rustfmt::skip]
pub const FILE_META_INFORMATION_VERSION: Tag = Tag(0x0002, 0x0001);
/// MediaStorageSOPClassUID (0002,0002) UI
#[rustfmt::skip]
pub const MEDIA_STORAGE_SOP_CLASS_UID: Tag = Tag(0x0002, 0x0002);
/// MediaStorageSOPInstanceUID (0002,0003) UI
#[rustfmt::skip]
pub const MEDIA_STORAGE_SOP_INSTANCE_UID: Tag = Tag(0x0002, 0x0003);
/// TransferSyntaxUID (0002,0010) UI
#[rustfmt::skip]
pub const TRANSFER_SYNTAX_UID: Tag = Tag(0x0002, 0x0010);
/// ImplementationClassUID (0002,0012) UI
#[rustfmt::skip]
pub const IMPLEMENTATION_CLASS_UID: Tag = Tag(0x0002, 0x0012);
/// ImplementationVersionName (0002,0013) SH
#[rustfmt::skip]
pub const IMPLEMENTATION_VERSION_NAME: Tag = Tag(0x0002, 0x0013);
/// SourceApplicationEntityTitle (0002,0016) AE
#[rustfmt::skip]
pub const SOURCE_APPLICATION_ENTITY_TITLE: Tag = Tag(0x0002, 0x0016);
/// SendingApplicationEntityTitle (0002,0017) AE
#[rustfmt::skip]
pub const SENDING_APPLICATION_ENTITY_TITLE: Tag = Tag(0x0002, 0x0017);
/// ReceivingApplicationEntityTitle (0002,0018) AE
#[rustfmt::skip]
pub const RECEIVING_APPLICATION_ENTITY_TITLE: Tag = Tag(0x0002, 0x0018);
/// PrivateInformationCreatorUID (0002,0100) UI
#[rustfmt::skip]
pub const PRIVATE_INFORMATION_CREATOR_UID: Tag = Tag(0x0002, 0x0100);
/// PrivateInformation (0002,0102) OB
#[rustfmt::skip]
pub const PRIVATE_INFORMATION: Tag = Tag(0x0002, 0x0102);
/// ReferencedSOPInstanceUIDInFile (0004,1511) UI
#[rustfmt::skip]
pub const REFERENCED_SOP_INSTANCE_UID_IN_FILE: Tag = Tag(0x0004, 0x1511);
/// SpecificCharacterSet (0008,0005) CS
#[rustfmt::skip]
pub const SPECIFIC_CHARACTER_SET: Tag = Tag(0x0008, 0x0005);
/// ImageType (0008,0008) CS
#[rustfmt::skip]
pub const IMAGE_TYPE: Tag = Tag(0x0008, 0x0008);
/// InstanceCreationDate (0008,0012) DA
#[rustfmt::skip]
pub const INSTANCE_CREATION_DATE: Tag = Tag(0x0008, 0x0012);
/// InstanceCreationTime (0008,0013) TM
#[rustfmt::skip]
pub const INSTANCE_CREATION_TIME: Tag = Tag(0x0008, 0x0013);
/// InstanceCreatorUID (0008,0014) UI
#[rustfmt::skip]
pub const INSTANCE_CREATOR_UID: Tag = Tag(0x0008, 0x0014);
/// InstanceCoercionDateTime (0008,0015) DT
#[rustfmt::skip]
pub const INSTANCE_COERCION_DATE_TIME: Tag = Tag(0x0008, 0x0015);
/// SOPClassUID (0008,0016) UI
#[rustfmt::skip]
pub const SOP_CLASS_UID: Tag = Tag(0x0008, 0x0016);
/// AcquisitionUID (0008,0017) UI
#[rustfmt::skip]
pub const ACQUISITION_UID: Tag = Tag(0x0008, 0x0017);
/// SOPInstanceUID (0008,0018) UI
#[rustfmt::skip]
pub const SOP_INSTANCE_UID: Tag = Tag(0x0008, 0x0018);
/// PyramidUID (0008,0019) UI
#[rustfmt::skip]
pub const PYRAMID_UID: Tag = Tag(0x0008, 0x0019);
/// StudyDate (0008,0020) DA
#[rustfmt::skip]
pub const STUDY_DATE: Tag = Tag(0x0008, 0x0020);
/// SeriesDate (0008,0021) DA
#[rustfmt::skip]
pub const SERIES_DATE: Tag = Tag(0x0008, 0x0021);
/// AcquisitionDate (0008,0022) DA
#[rustfmt::skip]
pub const ACQUISITION_DATE: Tag = Tag(0x0008, 0x0022);
/// ContentDate (0008,0023) DA
#[rustfmt::skip]
pub const CONTENT_DATE: Tag = Tag(0x0008, 0x0023);
/// OverlayDate (0008,0024) DA
#[rustfmt::skip]
pub const OVERLAY_DATE: Tag = Tag(0x0008, 0x0024);
/// CurveDate (0008,0025) DA
#[rustfmt::skip]
pub const CURVE_DATE: Tag = Tag(0x0008, 0x0025);
/// AcquisitionDateTime (0008,002A) DT
#[rustfmt::skip]
pub const ACQUISITION_DATE_TIME: Tag = Tag(0x0008, 0x002A);
/// StudyTime (0008,0030) TM
#[rustfmt::skip]
pub const STUDY_TIME: Tag = Tag(0x0008, 0x0030);
/// SeriesTime (0008,0031) TM
#[rustfmt::skip]
pub const SERIES_TIME: Tag = Tag(0x0008, 0x0031);
/// AcquisitionTime (0008,0032) TM
#[rustfmt::skip]
pub const ACQUISITION_TIME: Tag = Tag(0x0008, 0x0032);
/// ContentTime (0008,0033) TM
#[rustfmt::skip]
pub const CONTENT_TIME: Tag = Tag(0x0008, 0x0033);
/// OverlayTime (0008,0034) TM
#[rustfmt::skip]
pub const OVERLAY_TIME: Tag = Tag(0x0008, 0x0034);
/// CurveTime (0008,0035) TM
#[rustfmt::skip]
pub const CURVE_TIME: Tag = Tag(0x0008, 0x0035);
/// AccessionNumber (0008,0050) SH
#[rustfmt::skip]
pub const ACCESSION_NUMBER: Tag = Tag(0x0008, 0x0050);
/// RetrieveAETitle (0008,0054) AE
#[rustfmt::skip]
pub const RETRIEVE_AE_TITLE: Tag = Tag(0x0008, 0x0054);
/// StationAETitle (0008,0055) AE
#[rustfmt::skip]
pub const STATION_AE_TITLE: Tag = Tag(0x0008, 0x0055);
/// FailedSOPInstanceUIDList (0008,0058) UI
#[rustfmt::skip]
pub const FAILED_SOP_INSTANCE_UID_LIST: Tag = Tag(0x0008, 0x0058);
/// Modality (0008,0060) CS
#[rustfmt::skip]
pub const MODALITY: Tag = Tag(0x0008, 0x0060);
/// ConversionType (0008,0064) CS
#[rustfmt::skip]
pub const CONVERSION_TYPE: Tag = Tag(0x0008, 0x0064);
/// Manufacturer (0008,0070) LO
#[rustfmt::skip]
pub const MANUFACTURER: Tag = Tag(0x0008, 0x0070);
/// InstitutionName (0008,0080) LO
#[rustfmt::skip]
pub const INSTITUTION_NAME: Tag = Tag(0x0008, 0x0080);
/// InstitutionAddress (0008,0081) ST
#[rustfmt::skip]
pub const INSTITUTION_ADDRESS: Tag = Tag(0x0008, 0x0081);
/// InstitutionCodeSequence (0008,0082) SQ
#[rustfmt::skip]
pub const INSTITUTION_CODE_SEQUENCE: Tag = Tag(0x0008, 0x0082);
/// ReferringPhysicianName (0008,0090) PN
#[rustfmt::skip]
pub const REFERRING_PHYSICIAN_NAME: Tag = Tag(0x0008, 0x0090);
/// ReferringPhysicianAddress (0008,0092) ST
#[rustfmt::skip]
pub const REFERRING_PHYSICIAN_ADDRESS: Tag = Tag(0x0008, 0x0092);
/// ReferringPhysicianTelephoneNumbers (0008,0094) SH
#[rustfmt::skip]
pub const REFERRING_PHYSICIAN_TELEPHONE_NUMBERS: Tag = Tag(0x0008, 0x0094);
/// ReferringPhysicianIdentificationSequence (0008,0096) SQ
#[rustfmt::skip]
pub const REFERRING_PHYSICIAN_IDENTIFICATION_SEQUENCE: Tag = Tag(0x0008, 0x0096);
/// ConsultingPhysicianName (0008,009C) PN
#[rustfmt::skip]
pub const CONSULTING_PHYSICIAN_NAME: Tag = Tag(0x0008, 0x009C);
/// ConsultingPhysicianIdentificationSequence (0008,009D) SQ
#[rustfmt::skip]
pub const CONSULTING_PHYSICIAN_IDENTIFICATION_SEQUENCE: Tag = Tag(0x0008, 0x009D);
/// CodeValue (0008,0100) SH
#[rustfmt::skip]
pub const CODE_VALUE: Tag = Tag(0x0008, 0x0100);
/// CodingSchemeDesignator (0008,0102) SH
#[rustfmt::skip]
pub const CODING_SCHEME_DESIGNATOR: Tag = Tag(0x0008, 0x0102);
/// CodingSchemeVersion (0008,0103) SH
#[rustfmt::skip]
pub const CODING_SCHEME_VERSION: Tag = Tag(0x0008, 0x0103);
/// CodeMeaning (0008,0104) LO
#[rustfmt::skip]
pub const CODE_MEANING: Tag = Tag(0x0008, 0x0104);
/// ContextGroupVersion (0008,0106) DT
#[rustfmt::skip]
pub const CONTEXT_GROUP_VERSION: Tag = Tag(0x0008, 0x0106);
/// ContextGroupLocalVersion (0008,0107) DT
#[rustfmt::skip]
pub const CONTEXT_GROUP_LOCAL_VERSION: Tag = Tag(0x0008, 0x0107);
/// ContextGroupExtensionFlag (0008,010B) CS
#[rustfmt::skip]
pub const CONTEXT_GROUP_EXTENSION_FLAG: Tag = Tag(0x0008, 0x010B);
/// ContextIdentifier (0008,010F) CS
#[rustfmt::skip]
pub const CONTEXT_IDENTIFIER: Tag = Tag(0x0008, 0x010F);
/// TimezoneOffsetFromUTC (0008,0201) SH
#[rustfmt::skip]
pub const TIMEZONE_OFFSET_FROM_UTC: Tag = Tag(0x0008, 0x0201);
/// NetworkID (0008,1000) AE
#[rustfmt::skip]
pub const NETWORK_ID: Tag = Tag(0x0008, 0x1000);
/// StationName (0008,1010) SH
#[rustfmt::skip]
pub const STATION_NAME: Tag = Tag(0x0008, 0x1010);
/// StudyDescription (0008,1030) LO
#[rustfmt::skip]
pub const STUDY_DESCRIPTION: Tag = Tag(0x0008, 0x1030);
/// SeriesDescription (0008,103E) LO
#[rustfmt::skip]
pub const SERIES_DESCRIPTION: Tag = Tag(0x0008, 0x103E);
/// InstitutionalDepartmentName (0008,1040) LO
#[rustfmt::skip]
pub const INSTITUTIONAL_DEPARTMENT_NAME: Tag = Tag(0x0008, 0x1040);
/// InstitutionalDepartmentTypeCodeSequence (0008,1041) SQ
#[rustfmt::skip]
pub const INSTITUTIONAL_DEPARTMENT_TYPE_CODE_SEQUENCE: Tag = Tag(0x0008, 0x1041);
/// PhysiciansOfRecord (0008,1048) PN
#[rustfmt::skip]
pub const PHYSICIANS_OF_RECORD: Tag = Tag(0x0008, 0x1048);
/// PhysiciansOfRecordIdentificationSequence (0008,1049) SQ
#[rustfmt::skip]
pub const PHYSICIANS_OF_RECORD_IDENTIFICATION_SEQUENCE: Tag = Tag(0x0008, 0x1049);
/// PerformingPhysicianName (0008,1050) PN
#[rustfmt::skip]
pub const PERFORMING_PHYSICIAN_NAME: Tag = Tag(0x0008, 0x1050);
/// PerformingPhysicianIdentificationSequence (0008,1052) SQ
#[rustfmt::skip]
pub const PERFORMING_PHYSICIAN_IDENTIFICATION_SEQUENCE: Tag = Tag(0x0008, 0x1052);
/// NameOfPhysiciansReadingStudy (0008,1060) PN
#[rustfmt::skip]
pub const NAME_OF_PHYSICIANS_READING_STUDY: Tag = Tag(0x0008, 0x1060);
/// PhysiciansReadingStudyIdentificationSequence (0008,1062) SQ
#[rustfmt::skip]
pub const PHYSICIANS_READING_STUDY_IDENTIFICATION_SEQUENCE: Tag = Tag(0x0008, 0x1062);
/// OperatorsName (0008,1070) PN
#[rustfmt::skip]
pub const OPERATORS_NAME: Tag = Tag(0x0008, 0x1070);
/// OperatorIdentificationSequence (0008,1072) SQ
#[rustfmt::skip]
pub const OPERATOR_IDENTIFICATION_SEQUENCE: Tag = Tag(0x0008, 0x1072);
/// AdmittingDiagnosesDescription (0008,1080) LO
#[rustfmt::skip]
pub const ADMITTING_DIAGNOSES_DESCRIPTION: Tag = Tag(0x0008, 0x1080);
/// AdmittingDiagnosesCodeSequence (0008,1084) SQ
#[rustfmt::skip]
pub const ADMITTING_DIAGNOSES_CODE_SEQUENCE: Tag = Tag(0x0008, 0x1084);
/// PyramidDescription (0008,1088) LO
#[rustfmt::skip]
pub const PYRAMID_DESCRIPTION: Tag = Tag(0x0008, 0x1088);
/// ManufacturerModelName (0008,1090) LO
#[rustfmt::skip]
pub const MANUFACTURER_MODEL_NAME: Tag = Tag(0x0008, 0x1090);
/// ReferencedStudySequence (0008,1110) SQ
#[rustfmt::skip]
pub const REFERENCED_STUDY_SEQUENCE: Tag = Tag(0x0008, 0x1110);
/// ReferencedPerformedProcedureStepSequence (0008,1111) SQ
#[rustfmt::skip]
pub const REFERENCED_PERFORMED_PROCEDURE_STEP_SEQUENCE: Tag = Tag(0x0008, 0x1111);
/// ReferencedSeriesSequence (0008,1115) SQ
#[rustfmt::skip]
pub const REFERENCED_SERIES_SEQUENCE: Tag = Tag(0x0008, 0x1115);
/// ReferencedPatientSequence (0008,1120) SQ
#[rustfmt::skip]
pub const REFERENCED_PATIENT_SEQUENCE: Tag = Tag(0x0008, 0x1120);
/// ReferencedVisitSequence (0008,1125) SQ
#[rustfmt::skip]
pub const REFERENCED_VISIT_SEQUENCE: Tag = Tag(0x0008, 0x1125);
/// ReferencedImageSequence (0008,1140) SQ
#[rustfmt::skip]
pub const REFERENCED_IMAGE_SEQUENCE: Tag = Tag(0x0008, 0x1140);
/// ReferencedInstanceSequence (0008,114A) SQ
#[rustfmt::skip]
pub const REFERENCED_INSTANCE_SEQUENCE: Tag = Tag(0x0008, 0x114A);
/// ReferencedSOPClassUID (0008,1150) UI
#[rustfmt::skip]
pub const REFERENCED_SOP_CLASS_UID: Tag = Tag(0x0008, 0x1150);
/// ReferencedSOPInstanceUID (0008,1155) UI
#[rustfmt::skip]
pub const REFERENCED_SOP_INSTANCE_UID: Tag = Tag(0x0008, 0x1155);
/// ReferencedFrameNumber (0008,1160) IS
#[rustfmt::skip]
pub const REFERENCED_FRAME_NUMBER: Tag = Tag(0x0008, 0x1160);
/// TransactionUID (0008,1195) UI
#[rustfmt::skip]
pub const TRANSACTION_UID: Tag = Tag(0x0008, 0x1195);
/// ReferencedSOPSequence (0008,1199) SQ
#[rustfmt::skip]
pub const REFERENCED_SOP_SEQUENCE: Tag = Tag(0x0008, 0x1199);
/// StudiesContainingOtherReferencedInstancesSequence (0008,1200) SQ
#[rustfmt::skip]
pub const STUDIES_CONTAINING_OTHER_REFERENCED_INSTANCES_SEQUENCE: Tag = Tag(0x0008, 0x1200);
/// RelatedSeriesSequence (0008,1250) SQ
#[rustfmt::skip]
pub const RELATED_SERIES_SEQUENCE: Tag = Tag(0x0008, 0x1250);
/// DerivationDescription (0008,2111) ST
#[rustfmt::skip]
pub const DERIVATION_DESCRIPTION: Tag = Tag(0x0008, 0x2111);
/// SourceImageSequence (0008,2112) SQ
#[rustfmt::skip]
pub const SOURCE_IMAGE_SEQUENCE: Tag = Tag(0x0008, 0x2112);
/// IrradiationEventUID (0008,3010) UI
#[rustfmt::skip]
pub const IRRADIATION_EVENT_UID: Tag = Tag(0x0008, 0x3010);
/// IdentifyingComments (0008,4000) LT
#[rustfmt::skip]
pub const IDENTIFYING_COMMENTS: Tag = Tag(0x0008, 0x4000);
/// ReferencedRawDataSequence (0008,9121) SQ
#[rustfmt::skip]
pub const REFERENCED_RAW_DATA_SEQUENCE: Tag = Tag(0x0008, 0x9121);
/// DerivationImageSequence (0008,9124) SQ
#[rustfmt::skip]
pub const DERIVATION_IMAGE_SEQUENCE: Tag = Tag(0x0008, 0x9124);
/// PatientName (0010,0010) PN
#[rustfmt::skip]
pub const PATIENT_NAME: Tag = Tag(0x0010, 0x0010);
/// PatientID (0010,0020) LO
#[rustfmt::skip]
pub const PATIENT_ID: Tag = Tag(0x0010, 0x0020);
/// IssuerOfPatientID (0010,0021) LO
#[rustfmt::skip]
pub const ISSUER_OF_PATIENT_ID: Tag = Tag(0x0010, 0x0021);
/// PatientBirthDate (0010,0030) DA
#[rustfmt::skip]
pub const PATIENT_BIRTH_DATE: Tag = Tag(0x0010, 0x0030);
/// PatientBirthTime (0010,0032) TM
#[rustfmt::skip]
pub const PATIENT_BIRTH_TIME: Tag = Tag(0x0010, 0x0032);
/// PatientSex (0010,0040) CS
#[rustfmt::skip]
pub const PATIENT_SEX: Tag = Tag(0x0010, 0x0040);
/// PatientInsurancePlanCodeSequence (0010,0050) SQ
#[rustfmt::skip]
pub const PATIENT_INSURANCE_PLAN_CODE_SEQUENCE: Tag = Tag(0x0010, 0x0050);
/// PatientPrimaryLanguageCodeSequence (0010,0101) SQ
#[rustfmt::skip]
pub const PATIENT_PRIMARY_LANGUAGE_CODE_SEQUENCE: Tag = Tag(0x0010, 0x0101);
/// PatientPrimaryLanguageModifierCodeSequence (0010,0102) SQ
#[rustfmt::skip]
pub const PATIENT_PRIMARY_LANGUAGE_MODIFIER_CODE_SEQUENCE: Tag = Tag(0x0010, 0x0102);
/// OtherPatientIDs (0010,1000) LO
#[rustfmt::skip]
pub const OTHER_PATIENT_I_DS: Tag = Tag(0x0010, 0x1000);
/// OtherPatientNames (0010,1001) PN
#[rustfmt::skip]
pub const OTHER_PATIENT_NAMES: Tag = Tag(0x0010, 0x1001);
/// OtherPatientIDsSequence (0010,1002) SQ
#[rustfmt::skip]
pub const OTHER_PATIENT_I_DS_SEQUENCE: Tag = Tag(0x0010, 0x1002);
/// PatientBirthName (0010,1005) PN
#[rustfmt::skip]
pub const PATIENT_BIRTH_NAME: Tag = Tag(0x0010, 0x1005);
/// PatientAge (0010,1010) AS
#[rustfmt::skip]
pub const PATIENT_AGE: Tag = Tag(0x0010, 0x1010);
/// PatientSize (0010,1020) DS
#[rustfmt::skip]
pub const PATIENT_SIZE: Tag = Tag(0x0010, 0x1020);
/// PatientWeight (0010,1030) DS
#[rustfmt::skip]
pub const PATIENT_WEIGHT: Tag = Tag(0x0010, 0x1030);
/// PatientAddress (0010,1040) LO
#[rustfmt::skip]
pub const PATIENT_ADDRESS: Tag = Tag(0x0010, 0x1040);
/// InsurancePlanIdentification (0010,1050) LO
#[rustfmt::skip]
pub const INSURANCE_PLAN_IDENTIFICATION: Tag = Tag(0x0010, 0x1050);
/// PatientMotherBirthName (0010,1060) PN
#[rustfmt::skip]
pub const PATIENT_MOTHER_BIRTH_NAME: Tag = Tag(0x0010, 0x1060);
/// MilitaryRank (0010,1080) LO
#[rustfmt::skip]
pub const MILITARY_RANK: Tag = Tag(0x0010, 0x1080);
/// BranchOfService (0010,1081) LO
#[rustfmt::skip]
pub const BRANCH_OF_SERVICE: Tag = Tag(0x0010, 0x1081);
/// MedicalRecordLocator (0010,1090) LO
#[rustfmt::skip]
pub const MEDICAL_RECORD_LOCATOR: Tag = Tag(0x0010, 0x1090);
/// ReferencedPatientPhotoSequence (0010,1100) SQ
#[rustfmt::skip]
pub const REFERENCED_PATIENT_PHOTO_SEQUENCE: Tag = Tag(0x0010, 0x1100);
/// MedicalAlerts (0010,2000) LO
#[rustfmt::skip]
pub const MEDICAL_ALERTS: Tag = Tag(0x0010, 0x2000);
/// Allergies (0010,2110) LO
#[rustfmt::skip]
pub const ALLERGIES: Tag = Tag(0x0010, 0x2110);
/// CountryOfResidence (0010,2150) LO
#[rustfmt::skip]
pub const COUNTRY_OF_RESIDENCE: Tag = Tag(0x0010, 0x2150);
/// RegionOfResidence (0010,2152) LO
#[rustfmt::skip]
pub const REGION_OF_RESIDENCE: Tag = Tag(0x0010, 0x2152);
/// PatientTelephoneNumbers (0010,2154) SH
#[rustfmt::skip]
pub const PATIENT_TELEPHONE_NUMBERS: Tag = Tag(0x0010, 0x2154);
/// PatientTelecomInformation (0010,2155) LT
#[rustfmt::skip]
pub const PATIENT_TELECOM_INFORMATION: Tag = Tag(0x0010, 0x2155);
/// EthnicGroup (0010,2160) SH
#[rustfmt::skip]
pub const ETHNIC_GROUP: Tag = Tag(0x0010, 0x2160);
/// Occupation (0010,2180) SH
#[rustfmt::skip]
pub const OCCUPATION: Tag = Tag(0x0010, 0x2180);
/// SmokingStatus (0010,21A0) CS
#[rustfmt::skip]
pub const SMOKING_STATUS: Tag = Tag(0x0010, 0x21A0);
/// AdditionalPatientHistory (0010,21B0) LT
#[rustfmt::skip]
pub const ADDITIONAL_PATIENT_HISTORY: Tag = Tag(0x0010, 0x21B0);
/// PregnancyStatus (0010,21C0) US
#[rustfmt::skip]
pub const PREGNANCY_STATUS: Tag = Tag(0x0010, 0x21C0);
/// LastMenstrualDate (0010,21D0) DA
#[rustfmt::skip]
pub const LAST_MENSTRUAL_DATE: Tag = Tag(0x0010, 0x21D0);
/// PatientReligiousPreference (0010,21F0) LO
#[rustfmt::skip]
pub const PATIENT_RELIGIOUS_PREFERENCE: Tag = Tag(0x0010, 0x21F0);
/// PatientSexNeutered (0010,2203) CS
#[rustfmt::skip]
pub const PATIENT_SEX_NEUTERED: Tag = Tag(0x0010, 0x2203);
/// ResponsiblePerson (0010,2297) PN
#[rustfmt::skip]
pub const RESPONSIBLE_PERSON: Tag = Tag(0x0010, 0x2297);
/// ResponsibleOrganization (0010,2299) LO
#[rustfmt::skip]
pub const RESPONSIBLE_ORGANIZATION: Tag = Tag(0x0010, 0x2299);
/// PatientComments (0010,4000) LT
#[rustfmt::skip]
pub const PATIENT_COMMENTS: Tag = Tag(0x0010, 0x4000);
/// ClinicalTrialSponsorName (0012,0010) LO
#[rustfmt::skip]
pub const CLINICAL_TRIAL_SPONSOR_NAME: Tag = Tag(0x0012, 0x0010);
/// ClinicalTrialProtocolID (0012,0020) LO
#[rustfmt::skip]
pub const CLINICAL_TRIAL_PROTOCOL_ID: Tag = Tag(0x0012, 0x0020);
/// ClinicalTrialProtocolName (0012,0021) LO
#[rustfmt::skip]
pub const CLINICAL_TRIAL_PROTOCOL_NAME: Tag = Tag(0x0012, 0x0021);
/// ClinicalTrialSiteID (0012,0030) LO
#[rustfmt::skip]
pub const CLINICAL_TRIAL_SITE_ID: Tag = Tag(0x0012, 0x0030);
/// ClinicalTrialSiteName (0012,0031) LO
#[rustfmt::skip]
pub const CLINICAL_TRIAL_SITE_NAME: Tag = Tag(0x0012, 0x0031);
/// ClinicalTrialSubjectID (0012,0040) LO
#[rustfmt::skip]
pub const CLINICAL_TRIAL_SUBJECT_ID: Tag = Tag(0x0012, 0x0040);
/// ClinicalTrialSubjectReadingID (0012,0042) LO
#[rustfmt::skip]
pub const CLINICAL_TRIAL_SUBJECT_READING_ID: Tag = Tag(0x0012, 0x0042);
/// ClinicalTrialTimePointID (0012,0050) LO
#[rustfmt::skip]
pub const CLINICAL_TRIAL_TIME_POINT_ID: Tag = Tag(0x0012, 0x0050);
/// ClinicalTrialTimePointDescription (0012,0051) ST
#[rustfmt::skip]
pub const CLINICAL_TRIAL_TIME_POINT_DESCRIPTION: Tag = Tag(0x0012, 0x0051);
/// ClinicalTrialCoordinatingCenterName (0012,0060) LO
#[rustfmt::skip]
pub const CLINICAL_TRIAL_COORDINATING_CENTER_NAME: Tag = Tag(0x0012, 0x0060);
/// PatientIdentityRemoved (0012,0062) CS
#[rustfmt::skip]
pub const PATIENT_IDENTITY_REMOVED: Tag = Tag(0x0012, 0x0062);
/// DeidentificationMethod (0012,0063) LO
#[rustfmt::skip]
pub const DEIDENTIFICATION_METHOD: Tag = Tag(0x0012, 0x0063);
/// DeidentificationMethodCodeSequence (0012,0064) SQ
#[rustfmt::skip]
pub const DEIDENTIFICATION_METHOD_CODE_SEQUENCE: Tag = Tag(0x0012, 0x0064);
/// ClinicalTrialSeriesID (0012,0071) LO
#[rustfmt::skip]
pub const CLINICAL_TRIAL_SERIES_ID: Tag = Tag(0x0012, 0x0071);
/// ClinicalTrialSeriesDescription (0012,0072) LO
#[rustfmt::skip]
pub const CLINICAL_TRIAL_SERIES_DESCRIPTION: Tag = Tag(0x0012, 0x0072);
/// ClinicalTrialProtocolEthicsCommitteeName (0012,0081) LO
#[rustfmt::skip]
pub const CLINICAL_TRIAL_PROTOCOL_ETHICS_COMMITTEE_NAME: Tag = Tag(0x0012, 0x0081);
/// ClinicalTrialProtocolEthicsCommitteeApprovalNumber (0012,0082) LO
#[rustfmt::skip]
pub const CLINICAL_TRIAL_PROTOCOL_ETHICS_COMMITTEE_APPROVAL_NUMBER: Tag = Tag(0x0012, 0x0082);
/// EthicsCommitteeApprovalEffectivenessStartDate (0012,0086) DA
#[rustfmt::skip]
pub const ETHICS_COMMITTEE_APPROVAL_EFFECTIVENESS_START_DATE: Tag = Tag(0x0012, 0x0086);
/// EthicsCommitteeApprovalEffectivenessEndDate (0012,0087) DA
#[rustfmt::skip]
pub const ETHICS_COMMITTEE_APPROVAL_EFFECTIVENESS_END_DATE: Tag = Tag(0x0012, 0x0087);
/// CalibrationTime (0014,407C) TM
#[rustfmt::skip]
pub const CALIBRATION_TIME: Tag = Tag(0x0014, 0x407C);
/// CalibrationDate (0014,407E) DA
#[rustfmt::skip]
pub const CALIBRATION_DATE: Tag = Tag(0x0014, 0x407E);
/// MakerNote (0016,002B) OB
#[rustfmt::skip]
pub const MAKER_NOTE: Tag = Tag(0x0016, 0x002B);
/// DeviceSettingDescription (0016,004B) OB
#[rustfmt::skip]
pub const DEVICE_SETTING_DESCRIPTION: Tag = Tag(0x0016, 0x004B);
/// CameraOwnerName (0016,004D) UT
#[rustfmt::skip]
pub const CAMERA_OWNER_NAME: Tag = Tag(0x0016, 0x004D);
/// LensSpecification (0016,004E) DS
#[rustfmt::skip]
pub const LENS_SPECIFICATION: Tag = Tag(0x0016, 0x004E);
/// LensMake (0016,004F) UT
#[rustfmt::skip]
pub const LENS_MAKE: Tag = Tag(0x0016, 0x004F);
/// LensModel (0016,0050) UT
#[rustfmt::skip]
pub const LENS_MODEL: Tag = Tag(0x0016, 0x0050);
/// LensSerialNumber (0016,0051) UT
#[rustfmt::skip]
pub const LENS_SERIAL_NUMBER: Tag = Tag(0x0016, 0x0051);
/// GPSVersionID (0016,0070) OB
#[rustfmt::skip]
pub const GPS_VERSION_ID: Tag = Tag(0x0016, 0x0070);
/// GPSLatitudeRef (0016,0071) SH
#[rustfmt::skip]
pub const GPS_LATITUDE_REF: Tag = Tag(0x0016, 0x0071);
/// GPSLatitude (0016,0072) DS
#[rustfmt::skip]
pub const GPS_LATITUDE: Tag = Tag(0x0016, 0x0072);
/// GPSLongitudeRef (0016,0073) SH
#[rustfmt::skip]
pub const GPS_LONGITUDE_REF: Tag = Tag(0x0016, 0x0073);
/// GPSLongitude (0016,0074) DS
#[rustfmt::skip]
pub const GPS_LONGITUDE: Tag = Tag(0x0016, 0x0074);
/// GPSAltitudeRef (0016,0075) US
#[rustfmt::skip]
pub const GPS_ALTITUDE_REF: Tag = Tag(0x0016, 0x0075);
/// GPSAltitude (0016,0076) DS
#[rustfmt::skip]
pub const GPS_ALTITUDE: Tag = Tag(0x0016, 0x0076);
/// GPSTimeStamp (0016,0077) DT
#[rustfmt::skip]
pub const GPS_TIME_STAMP: Tag = Tag(0x0016, 0x0077);
/// GPSSatellites (0016,0078) UT
#[rustfmt::skip]
pub const GPS_SATELLITES: Tag = Tag(0x0016, 0x0078);
/// GPSStatus (0016,0079) SH
#[rustfmt::skip]
pub const GPS_STATUS: Tag = Tag(0x0016, 0x0079);
/// GPSMeasureMode (0016,007A) CS
#[rustfmt::skip]
pub const GPS_MEASURE_MODE: Tag = Tag(0x0016, 0x007A);
/// GPSDOP (0016,007B) DS
#[rustfmt::skip]
pub const GPSDOP: Tag = Tag(0x0016, 0x007B);
/// GPSSpeedRef (0016,007C) SH
#[rustfmt::skip]
pub const GPS_SPEED_REF: Tag = Tag(0x0016, 0x007C);
/// GPSSpeed (0016,007D) DS
#[rustfmt::skip]
pub const GPS_SPEED: Tag = Tag(0x0016, 0x007D);
/// GPSTrackRef (0016,007E) SH
#[rustfmt::skip]
pub const GPS_TRACK_REF: Tag = Tag(0x0016, 0x007E);
/// GPSTrack (0016,007F) DS
#[rustfmt::skip]
pub const GPS_TRACK: Tag = Tag(0x0016, 0x007F);
/// GPSImgDirectionRef (0016,0080) SH
#[rustfmt::skip]
pub const GPS_IMG_DIRECTION_REF: Tag = Tag(0x0016, 0x0080);
/// GPSImgDirection (0016,0081) DS
#[rustfmt::skip]
pub const GPS_IMG_DIRECTION: Tag = Tag(0x0016, 0x0081);
/// GPSMapDatum (0016,0082) UT
#[rustfmt::skip]
pub const GPS_MAP_DATUM: Tag = Tag(0x0016, 0x0082);
/// GPSDestLatitudeRef (0016,0083) SH
#[rustfmt::skip]
pub const GPS_DEST_LATITUDE_REF: Tag = Tag(0x0016, 0x0083);
/// GPSDestLatitude (0016,0084) DS
#[rustfmt::skip]
pub const GPS_DEST_LATITUDE: Tag = Tag(0x0016, 0x0084);
/// GPSDestLongitudeRef (0016,0085) SH
#[rustfmt::skip]
pub const GPS_DEST_LONGITUDE_REF: Tag = Tag(0x0016, 0x0085);
/// GPSDestLongitude (0016,0086) DS
#[rustfmt::skip]
pub const GPS_DEST_LONGITUDE: Tag = Tag(0x0016, 0x0086);
/// GPSDestBearingRef (0016,0087) SH
#[rustfmt::skip]
pub const GPS_DEST_BEARING_REF: Tag = Tag(0x0016, 0x0087);
/// GPSDestBearing (0016,0088) DS
#[rustfmt::skip]
pub const GPS_DEST_BEARING: Tag = Tag(0x0016, 0x0088);
/// GPSDestDistanceRef (0016,0089) SH
#[rustfmt::skip]
pub const GPS_DEST_DISTANCE_REF: Tag = Tag(0x0016, 0x0089);
/// GPSDestDistance (0016,008A) DS
#[rustfmt::skip]
pub const GPS_DEST_DISTANCE: Tag = Tag(0x0016, 0x008A);
/// GPSProcessingMethod (0016,008B) OB
#[rustfmt::skip]
pub const GPS_PROCESSING_METHOD: Tag = Tag(0x0016, 0x008B);
/// GPSAreaInformation (0016,008C) OB
#[rustfmt::skip]
pub const GPS_AREA_INFORMATION: Tag = Tag(0x0016, 0x008C);
/// GPSDateStamp (0016,008D) DT
#[rustfmt::skip]
pub const GPS_DATE_STAMP: Tag = Tag(0x0016, 0x008D);
/// GPSDifferential (0016,008E) US
#[rustfmt::skip]
pub const GPS_DIFFERENTIAL: Tag = Tag(0x0016, 0x008E);
/// ContrastBolusAgent (0018,0010) LO
#[rustfmt::skip]
pub const CONTRAST_BOLUS_AGENT: Tag = Tag(0x0018, 0x0010);
/// BodyPartExamined (0018,0015) CS
#[rustfmt::skip]
pub const BODY_PART_EXAMINED: Tag = Tag(0x0018, 0x0015);
/// InterventionDrugStopTime (0018,0027) TM
#[rustfmt::skip]
pub const INTERVENTION_DRUG_STOP_TIME: Tag = Tag(0x0018, 0x0027);
/// InterventionDrugStartTime (0018,0035) TM
#[rustfmt::skip]
pub const INTERVENTION_DRUG_START_TIME: Tag = Tag(0x0018, 0x0035);
/// SliceThickness (0018,0050) DS
#[rustfmt::skip]
pub const SLICE_THICKNESS: Tag = Tag(0x0018, 0x0050);
/// KVP (0018,0060) DS
#[rustfmt::skip]
pub const KVP: Tag = Tag(0x0018, 0x0060);
/// SpacingBetweenSlices (0018,0088) DS
#[rustfmt::skip]
pub const SPACING_BETWEEN_SLICES: Tag = Tag(0x0018, 0x0088);
/// DeviceSerialNumber (0018,1000) LO
#[rustfmt::skip]
pub const DEVICE_SERIAL_NUMBER: Tag = Tag(0x0018, 0x1000);
/// DeviceUID (0018,1002) UI
#[rustfmt::skip]
pub const DEVICE_UID: Tag = Tag(0x0018, 0x1002);
/// PlateID (0018,1004) LO
#[rustfmt::skip]
pub const PLATE_ID: Tag = Tag(0x0018, 0x1004);
/// GeneratorID (0018,1005) LO
#[rustfmt::skip]
pub const GENERATOR_ID: Tag = Tag(0x0018, 0x1005);
/// CassetteID (0018,1007) LO
#[rustfmt::skip]
pub const CASSETTE_ID: Tag = Tag(0x0018, 0x1007);
/// GantryID (0018,1008) LO
#[rustfmt::skip]
pub const GANTRY_ID: Tag = Tag(0x0018, 0x1008);
/// UniqueDeviceIdentifier (0018,1009) UT
#[rustfmt::skip]
pub const UNIQUE_DEVICE_IDENTIFIER: Tag = Tag(0x0018, 0x1009);
/// UDISequence (0018,100A) SQ
#[rustfmt::skip]
pub const UDI_SEQUENCE: Tag = Tag(0x0018, 0x100A);
/// ManufacturerDeviceClassUID (0018,100B) UI
#[rustfmt::skip]
pub const MANUFACTURER_DEVICE_CLASS_UID: Tag = Tag(0x0018, 0x100B);
/// DateOfSecondaryCapture (0018,1012) DA
#[rustfmt::skip]
pub const DATE_OF_SECONDARY_CAPTURE: Tag = Tag(0x0018, 0x1012);
/// TimeOfSecondaryCapture (0018,1014) TM
#[rustfmt::skip]
pub const TIME_OF_SECONDARY_CAPTURE: Tag = Tag(0x0018, 0x1014);
/// SoftwareVersions (0018,1020) LO
#[rustfmt::skip]
pub const SOFTWARE_VERSIONS: Tag = Tag(0x0018, 0x1020);
/// ProtocolName (0018,1030) LO
#[rustfmt::skip]
pub const PROTOCOL_NAME: Tag = Tag(0x0018, 0x1030);
/// ContrastBolusStartTime (0018,1042) TM
#[rustfmt::skip]
pub const CONTRAST_BOLUS_START_TIME: Tag = Tag(0x0018, 0x1042);
/// ContrastBolusStopTime (0018,1043) TM
#[rustfmt::skip]
pub const CONTRAST_BOLUS_STOP_TIME: Tag = Tag(0x0018, 0x1043);
/// RadiopharmaceuticalStartTime (0018,1072) TM
#[rustfmt::skip]
pub const RADIOPHARMACEUTICAL_START_TIME: Tag = Tag(0x0018, 0x1072);
/// RadiopharmaceuticalStopTime (0018,1073) TM
#[rustfmt::skip]
pub const RADIOPHARMACEUTICAL_STOP_TIME: Tag = Tag(0x0018, 0x1073);
/// RadiopharmaceuticalStartDateTime (0018,1078) DT
#[rustfmt::skip]
pub const RADIOPHARMACEUTICAL_START_DATE_TIME: Tag = Tag(0x0018, 0x1078);
/// RadiopharmaceuticalStopDateTime (0018,1079) DT
#[rustfmt::skip]
pub const RADIOPHARMACEUTICAL_STOP_DATE_TIME: Tag = Tag(0x0018, 0x1079);
/// ExposureTime (0018,1150) IS
#[rustfmt::skip]
pub const EXPOSURE_TIME: Tag = Tag(0x0018, 0x1150);
/// XRayTubeCurrent (0018,1151) IS
#[rustfmt::skip]
pub const X_RAY_TUBE_CURRENT: Tag = Tag(0x0018, 0x1151);
/// Exposure (0018,1152) IS
#[rustfmt::skip]
pub const EXPOSURE: Tag = Tag(0x0018, 0x1152);
/// AcquisitionFieldOfViewLabel (0018,11BB) LO
#[rustfmt::skip]
pub const ACQUISITION_FIELD_OF_VIEW_LABEL: Tag = Tag(0x0018, 0x11BB);
/// DateOfLastCalibration (0018,1200) DA
#[rustfmt::skip]
pub const DATE_OF_LAST_CALIBRATION: Tag = Tag(0x0018, 0x1200);
/// TimeOfLastCalibration (0018,1201) TM
#[rustfmt::skip]
pub const TIME_OF_LAST_CALIBRATION: Tag = Tag(0x0018, 0x1201);
/// DateTimeOfLastCalibration (0018,1202) DT
#[rustfmt::skip]
pub const DATE_TIME_OF_LAST_CALIBRATION: Tag = Tag(0x0018, 0x1202);
/// CalibrationDateTime (0018,1203) DT
#[rustfmt::skip]
pub const CALIBRATION_DATE_TIME: Tag = Tag(0x0018, 0x1203);
/// AcquisitionDeviceProcessingDescription (0018,1400) LO
#[rustfmt::skip]
pub const ACQUISITION_DEVICE_PROCESSING_DESCRIPTION: Tag = Tag(0x0018, 0x1400);
/// TargetUID (0018,2042) UI
#[rustfmt::skip]
pub const TARGET_UID: Tag = Tag(0x0018, 0x2042);
/// AcquisitionComments (0018,4000) LT
#[rustfmt::skip]
pub const ACQUISITION_COMMENTS: Tag = Tag(0x0018, 0x4000);
/// TransducerIdentificationSequence (0018,5011) SQ
#[rustfmt::skip]
pub const TRANSDUCER_IDENTIFICATION_SEQUENCE: Tag = Tag(0x0018, 0x5011);
/// PatientPosition (0018,5100) CS
#[rustfmt::skip]
pub const PATIENT_POSITION: Tag = Tag(0x0018, 0x5100);
/// DetectorID (0018,700A) SH
#[rustfmt::skip]
pub const DETECTOR_ID: Tag = Tag(0x0018, 0x700A);
/// DateOfLastDetectorCalibration (0018,700C) DA
#[rustfmt::skip]
pub const DATE_OF_LAST_DETECTOR_CALIBRATION: Tag = Tag(0x0018, 0x700C);
/// TimeOfLastDetectorCalibration (0018,700E) TM
#[rustfmt::skip]
pub const TIME_OF_LAST_DETECTOR_CALIBRATION: Tag = Tag(0x0018, 0x700E);
/// FrameAcquisitionDateTime (0018,9074) DT
#[rustfmt::skip]
pub const FRAME_ACQUISITION_DATE_TIME: Tag = Tag(0x0018, 0x9074);
/// FrameReferenceDateTime (0018,9151) DT
#[rustfmt::skip]
pub const FRAME_REFERENCE_DATE_TIME: Tag = Tag(0x0018, 0x9151);
/// RespiratoryMotionCompensationTechniqueDescription (0018,9185) ST
#[rustfmt::skip]
pub const RESPIRATORY_MOTION_COMPENSATION_TECHNIQUE_DESCRIPTION: Tag = Tag(0x0018, 0x9185);
/// XRaySourceID (0018,9367) UT
#[rustfmt::skip]
pub const X_RAY_SOURCE_ID: Tag = Tag(0x0018, 0x9367);
/// SourceStartDateTime (0018,9369) DT
#[rustfmt::skip]
pub const SOURCE_START_DATE_TIME: Tag = Tag(0x0018, 0x9369);
/// SourceEndDateTime (0018,936A) DT
#[rustfmt::skip]
pub const SOURCE_END_DATE_TIME: Tag = Tag(0x0018, 0x936A);
/// XRayDetectorID (0018,9371) UT
#[rustfmt::skip]
pub const X_RAY_DETECTOR_ID: Tag = Tag(0x0018, 0x9371);
/// XRayDetectorLabel (0018,9373) ST
#[rustfmt::skip]
pub const X_RAY_DETECTOR_LABEL: Tag = Tag(0x0018, 0x9373);
/// MultiEnergyAcquisitionDescription (0018,937B) UT
#[rustfmt::skip]
pub const MULTI_ENERGY_ACQUISITION_DESCRIPTION: Tag = Tag(0x0018, 0x937B);
/// DecompositionDescription (0018,937F) ST
#[rustfmt::skip]
pub const DECOMPOSITION_DESCRIPTION: Tag = Tag(0x0018, 0x937F);
/// AcquisitionProtocolDescription (0018,9424) LT
#[rustfmt::skip]
pub const ACQUISITION_PROTOCOL_DESCRIPTION: Tag = Tag(0x0018, 0x9424);
/// StartAcquisitionDateTime (0018,9516) DT
#[rustfmt::skip]
pub const START_ACQUISITION_DATE_TIME: Tag = Tag(0x0018, 0x9516);
/// EndAcquisitionDateTime (0018,9517) DT
#[rustfmt::skip]
pub const END_ACQUISITION_DATE_TIME: Tag = Tag(0x0018, 0x9517);
/// FunctionalSyncPulse (0018,9623) DT
#[rustfmt::skip]
pub const FUNCTIONAL_SYNC_PULSE: Tag = Tag(0x0018, 0x9623);
/// DecayCorrectionDateTime (0018,9701) DT
#[rustfmt::skip]
pub const DECAY_CORRECTION_DATE_TIME: Tag = Tag(0x0018, 0x9701);
/// ExclusionStartDateTime (0018,9804) DT
#[rustfmt::skip]
pub const EXCLUSION_START_DATE_TIME: Tag = Tag(0x0018, 0x9804);
/// InstructionPerformedDateTime (0018,9919) DT
#[rustfmt::skip]
pub const INSTRUCTION_PERFORMED_DATE_TIME: Tag = Tag(0x0018, 0x9919);
/// RequestedSeriesDescription (0018,9937) LO
#[rustfmt::skip]
pub const REQUESTED_SERIES_DESCRIPTION: Tag = Tag(0x0018, 0x9937);
/// ContributionDateTime (0018,A002) DT
#[rustfmt::skip]
pub const CONTRIBUTION_DATE_TIME: Tag = Tag(0x0018, 0xA002);
/// ContributionDescription (0018,A003) ST
#[rustfmt::skip]
pub const CONTRIBUTION_DESCRIPTION: Tag = Tag(0x0018, 0xA003);
/// StudyInstanceUID (0020,000D) UI
#[rustfmt::skip]
pub const STUDY_INSTANCE_UID: Tag = Tag(0x0020, 0x000D);
/// SeriesInstanceUID (0020,000E) UI
#[rustfmt::skip]
pub const SERIES_INSTANCE_UID: Tag = Tag(0x0020, 0x000E);
/// StudyID (0020,0010) SH
#[rustfmt::skip]
pub const STUDY_ID: Tag = Tag(0x0020, 0x0010);
/// SeriesNumber (0020,0011) IS
#[rustfmt::skip]
pub const SERIES_NUMBER: Tag = Tag(0x0020, 0x0011);
/// AcquisitionNumber (0020,0012) IS
#[rustfmt::skip]
pub const ACQUISITION_NUMBER: Tag = Tag(0x0020, 0x0012);
/// InstanceNumber (0020,0013) IS
#[rustfmt::skip]
pub const INSTANCE_NUMBER: Tag = Tag(0x0020, 0x0013);
/// PatientOrientation (0020,0020) CS
#[rustfmt::skip]
pub const PATIENT_ORIENTATION: Tag = Tag(0x0020, 0x0020);
/// PyramidLabel (0020,0027) LO
#[rustfmt::skip]
pub const PYRAMID_LABEL: Tag = Tag(0x0020, 0x0027);
/// ImagePositionPatient (0020,0032) DS
#[rustfmt::skip]
pub const IMAGE_POSITION_PATIENT: Tag = Tag(0x0020, 0x0032);
/// ImageOrientationPatient (0020,0037) DS
#[rustfmt::skip]
pub const IMAGE_ORIENTATION_PATIENT: Tag = Tag(0x0020, 0x0037);
/// FrameOfReferenceUID (0020,0052) UI
#[rustfmt::skip]
pub const FRAME_OF_REFERENCE_UID: Tag = Tag(0x0020, 0x0052);
/// SynchronizationFrameOfReferenceUID (0020,0200) UI
#[rustfmt::skip]
pub const SYNCHRONIZATION_FRAME_OF_REFERENCE_UID: Tag = Tag(0x0020, 0x0200);
/// PositionReferenceIndicator (0020,1040) LO
#[rustfmt::skip]
pub const POSITION_REFERENCE_INDICATOR: Tag = Tag(0x0020, 0x1040);
/// SliceLocation (0020,1041) DS
#[rustfmt::skip]
pub const SLICE_LOCATION: Tag = Tag(0x0020, 0x1041);
/// ModifyingDeviceID (0020,3401) CS
#[rustfmt::skip]
pub const MODIFYING_DEVICE_ID: Tag = Tag(0x0020, 0x3401);
/// ModifiedImageDate (0020,3403) DA
#[rustfmt::skip]
pub const MODIFIED_IMAGE_DATE: Tag = Tag(0x0020, 0x3403);
/// ModifyingDeviceManufacturer (0020,3404) LO
#[rustfmt::skip]
pub const MODIFYING_DEVICE_MANUFACTURER: Tag = Tag(0x0020, 0x3404);
/// ModifiedImageTime (0020,3405) TM
#[rustfmt::skip]
pub const MODIFIED_IMAGE_TIME: Tag = Tag(0x0020, 0x3405);
/// ModifiedImageDescription (0020,3406) LO
#[rustfmt::skip]
pub const MODIFIED_IMAGE_DESCRIPTION: Tag = Tag(0x0020, 0x3406);
/// ImageComments (0020,4000) LT
#[rustfmt::skip]
pub const IMAGE_COMMENTS: Tag = Tag(0x0020, 0x4000);
/// FrameComments (0020,9158) LT
#[rustfmt::skip]
pub const FRAME_COMMENTS: Tag = Tag(0x0020, 0x9158);
/// ConcatenationUID (0020,9161) UI
#[rustfmt::skip]
pub const CONCATENATION_UID: Tag = Tag(0x0020, 0x9161);
/// DimensionOrganizationUID (0020,9164) UI
#[rustfmt::skip]
pub const DIMENSION_ORGANIZATION_UID: Tag = Tag(0x0020, 0x9164);
/// SamplesPerPixel (0028,0002) US
#[rustfmt::skip]
pub const SAMPLES_PER_PIXEL: Tag = Tag(0x0028, 0x0002);
/// PhotometricInterpretation (0028,0004) CS
#[rustfmt::skip]
pub const PHOTOMETRIC_INTERPRETATION: Tag = Tag(0x0028, 0x0004);
/// PlanarConfiguration (0028,0006) US
#[rustfmt::skip]
pub const PLANAR_CONFIGURATION: Tag = Tag(0x0028, 0x0006);
/// NumberOfFrames (0028,0008) IS
#[rustfmt::skip]
pub const NUMBER_OF_FRAMES: Tag = Tag(0x0028, 0x0008);
/// Rows (0028,0010) US
#[rustfmt::skip]
pub const ROWS: Tag = Tag(0x0028, 0x0010);
/// Columns (0028,0011) US
#[rustfmt::skip]
pub const COLUMNS: Tag = Tag(0x0028, 0x0011);
/// PixelSpacing (0028,0030) DS
#[rustfmt::skip]
pub const PIXEL_SPACING: Tag = Tag(0x0028, 0x0030);
/// BitsAllocated (0028,0100) US
#[rustfmt::skip]
pub const BITS_ALLOCATED: Tag = Tag(0x0028, 0x0100);
/// BitsStored (0028,0101) US
#[rustfmt::skip]
pub const BITS_STORED: Tag = Tag(0x0028, 0x0101);
/// HighBit (0028,0102) US
#[rustfmt::skip]
pub const HIGH_BIT: Tag = Tag(0x0028, 0x0102);
/// PixelRepresentation (0028,0103) US
#[rustfmt::skip]
pub const PIXEL_REPRESENTATION: Tag = Tag(0x0028, 0x0103);
/// SmallestImagePixelValue (0028,0106) US
#[rustfmt::skip]
pub const SMALLEST_IMAGE_PIXEL_VALUE: Tag = Tag(0x0028, 0x0106);
/// LargestImagePixelValue (0028,0107) US
#[rustfmt::skip]
pub const LARGEST_IMAGE_PIXEL_VALUE: Tag = Tag(0x0028, 0x0107);
/// WindowCenter (0028,1050) DS
#[rustfmt::skip]
pub const WINDOW_CENTER: Tag = Tag(0x0028, 0x1050);
/// WindowWidth (0028,1051) DS
#[rustfmt::skip]
pub const WINDOW_WIDTH: Tag = Tag(0x0028, 0x1051);
/// RescaleIntercept (0028,1052) DS
#[rustfmt::skip]
pub const RESCALE_INTERCEPT: Tag = Tag(0x0028, 0x1052);
/// RescaleSlope (0028,1053) DS
#[rustfmt::skip]
pub const RESCALE_SLOPE: Tag = Tag(0x0028, 0x1053);
/// RescaleType (0028,1054) LO
#[rustfmt::skip]
pub const RESCALE_TYPE: Tag = Tag(0x0028, 0x1054);
/// RedPaletteColorLookupTableDescriptor (0028,1101) US
#[rustfmt::skip]
pub const RED_PALETTE_COLOR_LOOKUP_TABLE_DESCRIPTOR: Tag = Tag(0x0028, 0x1101);
/// GreenPaletteColorLookupTableDescriptor (0028,1102) US
#[rustfmt::skip]
pub const GREEN_PALETTE_COLOR_LOOKUP_TABLE_DESCRIPTOR: Tag = Tag(0x0028, 0x1102);
/// BluePaletteColorLookupTableDescriptor (0028,1103) US
#[rustfmt::skip]
pub const BLUE_PALETTE_COLOR_LOOKUP_TABLE_DESCRIPTOR: Tag = Tag(0x0028, 0x1103);
/// PaletteColorLookupTableUID (0028,1199) UI
#[rustfmt::skip]
pub const PALETTE_COLOR_LOOKUP_TABLE_UID: Tag = Tag(0x0028, 0x1199);
/// RedPaletteColorLookupTableData (0028,1201) OW
#[rustfmt::skip]
pub const RED_PALETTE_COLOR_LOOKUP_TABLE_DATA: Tag = Tag(0x0028, 0x1201);
/// GreenPaletteColorLookupTableData (0028,1202) OW
#[rustfmt::skip]
pub const GREEN_PALETTE_COLOR_LOOKUP_TABLE_DATA: Tag = Tag(0x0028, 0x1202);
/// BluePaletteColorLookupTableData (0028,1203) OW
#[rustfmt::skip]
pub const BLUE_PALETTE_COLOR_LOOKUP_TABLE_DATA: Tag = Tag(0x0028, 0x1203);
/// LargePaletteColorLookupTableUID (0028,1214) UI
#[rustfmt::skip]
pub const LARGE_PALETTE_COLOR_LOOKUP_TABLE_UID: Tag = Tag(0x0028, 0x1214);
/// LossyImageCompression (0028,2110) CS
#[rustfmt::skip]
pub const LOSSY_IMAGE_COMPRESSION: Tag = Tag(0x0028, 0x2110);
/// ImagePresentationComments (0028,4000) LT
#[rustfmt::skip]
pub const IMAGE_PRESENTATION_COMMENTS: Tag = Tag(0x0028, 0x4000);
/// StudyIDIssuer (0032,0012) LO
#[rustfmt::skip]
pub const STUDY_ID_ISSUER: Tag = Tag(0x0032, 0x0012);
/// StudyVerifiedDate (0032,0032) DA
#[rustfmt::skip]
pub const STUDY_VERIFIED_DATE: Tag = Tag(0x0032, 0x0032);
/// StudyVerifiedTime (0032,0033) TM
#[rustfmt::skip]
pub const STUDY_VERIFIED_TIME: Tag = Tag(0x0032, 0x0033);
/// StudyReadDate (0032,0034) DA
#[rustfmt::skip]
pub const STUDY_READ_DATE: Tag = Tag(0x0032, 0x0034);
/// StudyReadTime (0032,0035) TM
#[rustfmt::skip]
pub const STUDY_READ_TIME: Tag = Tag(0x0032, 0x0035);
/// ScheduledStudyStartDate (0032,1000) DA
#[rustfmt::skip]
pub const SCHEDULED_STUDY_START_DATE: Tag = Tag(0x0032, 0x1000);
/// ScheduledStudyStartTime (0032,1001) TM
#[rustfmt::skip]
pub const SCHEDULED_STUDY_START_TIME: Tag = Tag(0x0032, 0x1001);
/// ScheduledStudyStopDate (0032,1010) DA
#[rustfmt::skip]
pub const SCHEDULED_STUDY_STOP_DATE: Tag = Tag(0x0032, 0x1010);
/// ScheduledStudyStopTime (0032,1011) TM
#[rustfmt::skip]
pub const SCHEDULED_STUDY_STOP_TIME: Tag = Tag(0x0032, 0x1011);
/// ScheduledStudyLocation (0032,1020) LO
#[rustfmt::skip]
pub const SCHEDULED_STUDY_LOCATION: Tag = Tag(0x0032, 0x1020);
/// ScheduledStudyLocationAETitle (0032,1021) AE
#[rustfmt::skip]
pub const SCHEDULED_STUDY_LOCATION_AE_TITLE: Tag = Tag(0x0032, 0x1021);
/// ReasonForStudy (0032,1030) LO
#[rustfmt::skip]
pub const REASON_FOR_STUDY: Tag = Tag(0x0032, 0x1030);
/// RequestingPhysician (0032,1032) PN
#[rustfmt::skip]
pub const REQUESTING_PHYSICIAN: Tag = Tag(0x0032, 0x1032);
/// RequestingService (0032,1033) LO
#[rustfmt::skip]
pub const REQUESTING_SERVICE: Tag = Tag(0x0032, 0x1033);
/// StudyArrivalDate (0032,1040) DA
#[rustfmt::skip]
pub const STUDY_ARRIVAL_DATE: Tag = Tag(0x0032, 0x1040);
/// StudyArrivalTime (0032,1041) TM
#[rustfmt::skip]
pub const STUDY_ARRIVAL_TIME: Tag = Tag(0x0032, 0x1041);
/// StudyCompletionDate (0032,1050) DA
#[rustfmt::skip]
pub const STUDY_COMPLETION_DATE: Tag = Tag(0x0032, 0x1050);
/// StudyCompletionTime (0032,1051) TM
#[rustfmt::skip]
pub const STUDY_COMPLETION_TIME: Tag = Tag(0x0032, 0x1051);
/// RequestedProcedureDescription (0032,1060) LO
#[rustfmt::skip]
pub const REQUESTED_PROCEDURE_DESCRIPTION: Tag = Tag(0x0032, 0x1060);
/// ReasonForVisit (0032,1066) UT
#[rustfmt::skip]
pub const REASON_FOR_VISIT: Tag = Tag(0x0032, 0x1066);
/// ReasonForVisitCodeSequence (0032,1067) SQ
#[rustfmt::skip]
pub const REASON_FOR_VISIT_CODE_SEQUENCE: Tag = Tag(0x0032, 0x1067);
/// RequestedContrastAgent (0032,1070) LO
#[rustfmt::skip]
pub const REQUESTED_CONTRAST_AGENT: Tag = Tag(0x0032, 0x1070);
/// StudyComments (0032,4000) LT
#[rustfmt::skip]
pub const STUDY_COMMENTS: Tag = Tag(0x0032, 0x4000);
/// FlowIdentifierSequence (0034,0001) SQ
#[rustfmt::skip]
pub const FLOW_IDENTIFIER_SEQUENCE: Tag = Tag(0x0034, 0x0001);
/// FlowIdentifier (0034,0002) OB
#[rustfmt::skip]
pub const FLOW_IDENTIFIER: Tag = Tag(0x0034, 0x0002);
/// SourceIdentifier (0034,0005) OB
#[rustfmt::skip]
pub const SOURCE_IDENTIFIER: Tag = Tag(0x0034, 0x0005);
/// FrameOriginTimestamp (0034,0007) OB
#[rustfmt::skip]
pub const FRAME_ORIGIN_TIMESTAMP: Tag = Tag(0x0034, 0x0007);
/// ReferencedPatientAliasSequence (0038,0004) SQ
#[rustfmt::skip]
pub const REFERENCED_PATIENT_ALIAS_SEQUENCE: Tag = Tag(0x0038, 0x0004);
/// AdmissionID (0038,0010) LO
#[rustfmt::skip]
pub const ADMISSION_ID: Tag = Tag(0x0038, 0x0010);
/// IssuerOfAdmissionID (0038,0011) LO
#[rustfmt::skip]
pub const ISSUER_OF_ADMISSION_ID: Tag = Tag(0x0038, 0x0011);
/// IssuerOfAdmissionIDSequence (0038,0014) SQ
#[rustfmt::skip]
pub const ISSUER_OF_ADMISSION_ID_SEQUENCE: Tag = Tag(0x0038, 0x0014);
/// ScheduledAdmissionDate (0038,001A) DA
#[rustfmt::skip]
pub const SCHEDULED_ADMISSION_DATE: Tag = Tag(0x0038, 0x001A);
/// ScheduledAdmissionTime (0038,001B) TM
#[rustfmt::skip]
pub const SCHEDULED_ADMISSION_TIME: Tag = Tag(0x0038, 0x001B);
/// ScheduledDischargeDate (0038,001C) DA
#[rustfmt::skip]
pub const SCHEDULED_DISCHARGE_DATE: Tag = Tag(0x0038, 0x001C);
/// ScheduledDischargeTime (0038,001D) TM
#[rustfmt::skip]
pub const SCHEDULED_DISCHARGE_TIME: Tag = Tag(0x0038, 0x001D);
/// ScheduledPatientInstitutionResidence (0038,001E) LO
#[rustfmt::skip]
pub const SCHEDULED_PATIENT_INSTITUTION_RESIDENCE: Tag = Tag(0x0038, 0x001E);
/// AdmittingDate (0038,0020) DA
#[rustfmt::skip]
pub const ADMITTING_DATE: Tag = Tag(0x0038, 0x0020);
/// AdmittingTime (0038,0021) TM
#[rustfmt::skip]
pub const ADMITTING_TIME: Tag = Tag(0x0038, 0x0021);
/// DischargeDate (0038,0030) DA
#[rustfmt::skip]
pub const DISCHARGE_DATE: Tag = Tag(0x0038, 0x0030);
/// DischargeTime (0038,0032) TM
#[rustfmt::skip]
pub const DISCHARGE_TIME: Tag = Tag(0x0038, 0x0032);
/// DischargeDiagnosisDescription (0038,0040) LO
#[rustfmt::skip]
pub const DISCHARGE_DIAGNOSIS_DESCRIPTION: Tag = Tag(0x0038, 0x0040);
/// SpecialNeeds (0038,0050) LO
#[rustfmt::skip]
pub const SPECIAL_NEEDS: Tag = Tag(0x0038, 0x0050);
/// ServiceEpisodeID (0038,0060) LO
#[rustfmt::skip]
pub const SERVICE_EPISODE_ID: Tag = Tag(0x0038, 0x0060);
/// IssuerOfServiceEpisodeID (0038,0061) LO
#[rustfmt::skip]
pub const ISSUER_OF_SERVICE_EPISODE_ID: Tag = Tag(0x0038, 0x0061);
/// ServiceEpisodeDescription (0038,0062) LO
#[rustfmt::skip]
pub const SERVICE_EPISODE_DESCRIPTION: Tag = Tag(0x0038, 0x0062);
/// IssuerOfServiceEpisodeIDSequence (0038,0064) SQ
#[rustfmt::skip]
pub const ISSUER_OF_SERVICE_EPISODE_ID_SEQUENCE: Tag = Tag(0x0038, 0x0064);
/// CurrentPatientLocation (0038,0300) LO
#[rustfmt::skip]
pub const CURRENT_PATIENT_LOCATION: Tag = Tag(0x0038, 0x0300);
/// PatientInstitutionResidence (0038,0400) LO
#[rustfmt::skip]
pub const PATIENT_INSTITUTION_RESIDENCE: Tag = Tag(0x0038, 0x0400);
/// PatientState (0038,0500) LO
#[rustfmt::skip]
pub const PATIENT_STATE: Tag = Tag(0x0038, 0x0500);
/// VisitComments (0038,4000) LT
#[rustfmt::skip]
pub const VISIT_COMMENTS: Tag = Tag(0x0038, 0x4000);
/// MultiplexGroupUID (003A,0310) UI
#[rustfmt::skip]
pub const MULTIPLEX_GROUP_UID: Tag = Tag(0x003A, 0x0310);
/// ImpedanceMeasurementDateTime (003A,0314) DT
#[rustfmt::skip]
pub const IMPEDANCE_MEASUREMENT_DATE_TIME: Tag = Tag(0x003A, 0x0314);
/// WaveformFilterDescription (003A,0329) ST
#[rustfmt::skip]
pub const WAVEFORM_FILTER_DESCRIPTION: Tag = Tag(0x003A, 0x0329);
/// FilterLookupTableDescription (003A,032B) ST
#[rustfmt::skip]
pub const FILTER_LOOKUP_TABLE_DESCRIPTION: Tag = Tag(0x003A, 0x032B);
/// ScheduledStationAETitle (0040,0001) AE
#[rustfmt::skip]
pub const SCHEDULED_STATION_AE_TITLE: Tag = Tag(0x0040, 0x0001);
/// ScheduledProcedureStepStartDate (0040,0002) DA
#[rustfmt::skip]
pub const SCHEDULED_PROCEDURE_STEP_START_DATE: Tag = Tag(0x0040, 0x0002);
/// ScheduledProcedureStepStartTime (0040,0003) TM
#[rustfmt::skip]
pub const SCHEDULED_PROCEDURE_STEP_START_TIME: Tag = Tag(0x0040, 0x0003);
/// ScheduledProcedureStepEndDate (0040,0004) DA
#[rustfmt::skip]
pub const SCHEDULED_PROCEDURE_STEP_END_DATE: Tag = Tag(0x0040, 0x0004);
/// ScheduledProcedureStepEndTime (0040,0005) TM
#[rustfmt::skip]
pub const SCHEDULED_PROCEDURE_STEP_END_TIME: Tag = Tag(0x0040, 0x0005);
/// ScheduledPerformingPhysicianName (0040,0006) PN
#[rustfmt::skip]
pub const SCHEDULED_PERFORMING_PHYSICIAN_NAME: Tag = Tag(0x0040, 0x0006);
/// ScheduledProcedureStepDescription (0040,0007) LO
#[rustfmt::skip]
pub const SCHEDULED_PROCEDURE_STEP_DESCRIPTION: Tag = Tag(0x0040, 0x0007);
/// ScheduledProcedureStepID (0040,0009) SH
#[rustfmt::skip]
pub const SCHEDULED_PROCEDURE_STEP_ID: Tag = Tag(0x0040, 0x0009);
/// ScheduledPerformingPhysicianIdentificationSequence (0040,000B) SQ
#[rustfmt::skip]
pub const SCHEDULED_PERFORMING_PHYSICIAN_IDENTIFICATION_SEQUENCE: Tag = Tag(0x0040, 0x000B);
/// ScheduledStationName (0040,0010) SH
#[rustfmt::skip]
pub const SCHEDULED_STATION_NAME: Tag = Tag(0x0040, 0x0010);
/// ScheduledProcedureStepLocation (0040,0011) SH
#[rustfmt::skip]
pub const SCHEDULED_PROCEDURE_STEP_LOCATION: Tag = Tag(0x0040, 0x0011);
/// PreMedication (0040,0012) LO
#[rustfmt::skip]
pub const PRE_MEDICATION: Tag = Tag(0x0040, 0x0012);
/// PerformedStationAETitle (0040,0241) AE
#[rustfmt::skip]
pub const PERFORMED_STATION_AE_TITLE: Tag = Tag(0x0040, 0x0241);
/// PerformedStationName (0040,0242) SH
#[rustfmt::skip]
pub const PERFORMED_STATION_NAME: Tag = Tag(0x0040, 0x0242);
/// PerformedLocation (0040,0243) SH
#[rustfmt::skip]
pub const PERFORMED_LOCATION: Tag = Tag(0x0040, 0x0243);
/// PerformedProcedureStepStartDate (0040,0244) DA
#[rustfmt::skip]
pub const PERFORMED_PROCEDURE_STEP_START_DATE: Tag = Tag(0x0040, 0x0244);
/// PerformedProcedureStepStartTime (0040,0245) TM
#[rustfmt::skip]
pub const PERFORMED_PROCEDURE_STEP_START_TIME: Tag = Tag(0x0040, 0x0245);
/// PerformedProcedureStepEndDate (0040,0250) DA
#[rustfmt::skip]
pub const PERFORMED_PROCEDURE_STEP_END_DATE: Tag = Tag(0x0040, 0x0250);
/// PerformedProcedureStepEndTime (0040,0251) TM
#[rustfmt::skip]
pub const PERFORMED_PROCEDURE_STEP_END_TIME: Tag = Tag(0x0040, 0x0251);
/// PerformedProcedureStepID (0040,0253) SH
#[rustfmt::skip]
pub const PERFORMED_PROCEDURE_STEP_ID: Tag = Tag(0x0040, 0x0253);
/// PerformedProcedureStepDescription (0040,0254) LO
#[rustfmt::skip]
pub const PERFORMED_PROCEDURE_STEP_DESCRIPTION: Tag = Tag(0x0040, 0x0254);
/// RequestAttributesSequence (0040,0275) SQ
#[rustfmt::skip]
pub const REQUEST_ATTRIBUTES_SEQUENCE: Tag = Tag(0x0040, 0x0275);
/// CommentsOnThePerformedProcedureStep (0040,0280) ST
#[rustfmt::skip]
pub const COMMENTS_ON_THE_PERFORMED_PROCEDURE_STEP: Tag = Tag(0x0040, 0x0280);
/// CommentsOnRadiationDose (0040,0310) ST
#[rustfmt::skip]
pub const COMMENTS_ON_RADIATION_DOSE: Tag = Tag(0x0040, 0x0310);
/// SpecimenAccessionNumber (0040,050A) LO
#[rustfmt::skip]
pub const SPECIMEN_ACCESSION_NUMBER: Tag = Tag(0x0040, 0x050A);
/// ContainerIdentifier (0040,0512) LO
#[rustfmt::skip]
pub const CONTAINER_IDENTIFIER: Tag = Tag(0x0040, 0x0512);
/// IssuerOfTheContainerIdentifierSequence (0040,0513) SQ
#[rustfmt::skip]
pub const ISSUER_OF_THE_CONTAINER_IDENTIFIER_SEQUENCE: Tag = Tag(0x0040, 0x0513);
/// ContainerDescription (0040,051A) LO
#[rustfmt::skip]
pub const CONTAINER_DESCRIPTION: Tag = Tag(0x0040, 0x051A);
/// SpecimenIdentifier (0040,0551) LO
#[rustfmt::skip]
pub const SPECIMEN_IDENTIFIER: Tag = Tag(0x0040, 0x0551);
/// SpecimenUID (0040,0554) UI
#[rustfmt::skip]
pub const SPECIMEN_UID: Tag = Tag(0x0040, 0x0554);
/// AcquisitionContextSequence (0040,0555) SQ
#[rustfmt::skip]
pub const ACQUISITION_CONTEXT_SEQUENCE: Tag = Tag(0x0040, 0x0555);
/// IssuerOfTheSpecimenIdentifierSequence (0040,0562) SQ
#[rustfmt::skip]
pub const ISSUER_OF_THE_SPECIMEN_IDENTIFIER_SEQUENCE: Tag = Tag(0x0040, 0x0562);
/// SpecimenShortDescription (0040,0600) LO
#[rustfmt::skip]
pub const SPECIMEN_SHORT_DESCRIPTION: Tag = Tag(0x0040, 0x0600);
/// SpecimenDetailedDescription (0040,0602) UT
#[rustfmt::skip]
pub const SPECIMEN_DETAILED_DESCRIPTION: Tag = Tag(0x0040, 0x0602);
/// SpecimenPreparationSequence (0040,0610) SQ
#[rustfmt::skip]
pub const SPECIMEN_PREPARATION_SEQUENCE: Tag = Tag(0x0040, 0x0610);
/// SlideIdentifier (0040,06FA) LO
#[rustfmt::skip]
pub const SLIDE_IDENTIFIER: Tag = Tag(0x0040, 0x06FA);
/// RequestedProcedureID (0040,1001) SH
#[rustfmt::skip]
pub const REQUESTED_PROCEDURE_ID: Tag = Tag(0x0040, 0x1001);
/// ReasonForTheRequestedProcedure (0040,1002) LO
#[rustfmt::skip]
pub const REASON_FOR_THE_REQUESTED_PROCEDURE: Tag = Tag(0x0040, 0x1002);
/// PatientTransportArrangements (0040,1004) LO
#[rustfmt::skip]
pub const PATIENT_TRANSPORT_ARRANGEMENTS: Tag = Tag(0x0040, 0x1004);
/// RequestedProcedureLocation (0040,1005) LO
#[rustfmt::skip]
pub const REQUESTED_PROCEDURE_LOCATION: Tag = Tag(0x0040, 0x1005);
/// ReasonForRequestedProcedureCodeSequence (0040,100A) SQ
#[rustfmt::skip]
pub const REASON_FOR_REQUESTED_PROCEDURE_CODE_SEQUENCE: Tag = Tag(0x0040, 0x100A);
/// NamesOfIntendedRecipientsOfResults (0040,1010) PN
#[rustfmt::skip]
pub const NAMES_OF_INTENDED_RECIPIENTS_OF_RESULTS: Tag = Tag(0x0040, 0x1010);
/// IntendedRecipientsOfResultsIdentificationSequence (0040,1011) SQ
#[rustfmt::skip]
pub const INTENDED_RECIPIENTS_OF_RESULTS_IDENTIFICATION_SEQUENCE: Tag = Tag(0x0040, 0x1011);
/// PersonIdentificationCodeSequence (0040,1101) SQ
#[rustfmt::skip]
pub const PERSON_IDENTIFICATION_CODE_SEQUENCE: Tag = Tag(0x0040, 0x1101);
/// PersonAddress (0040,1102) ST
#[rustfmt::skip]
pub const PERSON_ADDRESS: Tag = Tag(0x0040, 0x1102);
/// PersonTelephoneNumbers (0040,1103) LO
#[rustfmt::skip]
pub const PERSON_TELEPHONE_NUMBERS: Tag = Tag(0x0040, 0x1103);
/// PersonTelecomInformation (0040,1104) LT
#[rustfmt::skip]
pub const PERSON_TELECOM_INFORMATION: Tag = Tag(0x0040, 0x1104);
/// RequestedProcedureComments (0040,1400) LT
#[rustfmt::skip]
pub const REQUESTED_PROCEDURE_COMMENTS: Tag = Tag(0x0040, 0x1400);
/// ReasonForTheImagingServiceRequest (0040,2001) LO
#[rustfmt::skip]
pub const REASON_FOR_THE_IMAGING_SERVICE_REQUEST: Tag = Tag(0x0040, 0x2001);
/// IssueDateOfImagingServiceRequest (0040,2004) DA
#[rustfmt::skip]
pub const ISSUE_DATE_OF_IMAGING_SERVICE_REQUEST: Tag = Tag(0x0040, 0x2004);
/// IssueTimeOfImagingServiceRequest (0040,2005) TM
#[rustfmt::skip]
pub const ISSUE_TIME_OF_IMAGING_SERVICE_REQUEST: Tag = Tag(0x0040, 0x2005);
/// OrderEnteredBy (0040,2008) PN
#[rustfmt::skip]
pub const ORDER_ENTERED_BY: Tag = Tag(0x0040, 0x2008);
/// OrderEntererLocation (0040,2009) SH
#[rustfmt::skip]
pub const ORDER_ENTERER_LOCATION: Tag = Tag(0x0040, 0x2009);
/// OrderCallbackPhoneNumber (0040,2010) SH
#[rustfmt::skip]
pub const ORDER_CALLBACK_PHONE_NUMBER: Tag = Tag(0x0040, 0x2010);
/// OrderCallbackTelecomInformation (0040,2011) LT
#[rustfmt::skip]
pub const ORDER_CALLBACK_TELECOM_INFORMATION: Tag = Tag(0x0040, 0x2011);
/// PlacerOrderNumberImagingServiceRequest (0040,2016) LO
#[rustfmt::skip]
pub const PLACER_ORDER_NUMBER_IMAGING_SERVICE_REQUEST: Tag = Tag(0x0040, 0x2016);
/// FillerOrderNumberImagingServiceRequest (0040,2017) LO
#[rustfmt::skip]
pub const FILLER_ORDER_NUMBER_IMAGING_SERVICE_REQUEST: Tag = Tag(0x0040, 0x2017);
/// ImagingServiceRequestComments (0040,2400) LT
#[rustfmt::skip]
pub const IMAGING_SERVICE_REQUEST_COMMENTS: Tag = Tag(0x0040, 0x2400);
/// ConfidentialityConstraintOnPatientDataDescription (0040,3001) LO
#[rustfmt::skip]
pub const CONFIDENTIALITY_CONSTRAINT_ON_PATIENT_DATA_DESCRIPTION: Tag = Tag(0x0040, 0x3001);
/// ScheduledProcedureStepStartDateTime (0040,4005) DT
#[rustfmt::skip]
pub const SCHEDULED_PROCEDURE_STEP_START_DATE_TIME: Tag = Tag(0x0040, 0x4005);
/// ScheduledProcedureStepExpirationDateTime (0040,4008) DT
#[rustfmt::skip]
pub const SCHEDULED_PROCEDURE_STEP_EXPIRATION_DATE_TIME: Tag = Tag(0x0040, 0x4008);
/// ScheduledProcedureStepModificationDateTime (0040,4010) DT
#[rustfmt::skip]
pub const SCHEDULED_PROCEDURE_STEP_MODIFICATION_DATE_TIME: Tag = Tag(0x0040, 0x4010);
/// ExpectedCompletionDateTime (0040,4011) DT
#[rustfmt::skip]
pub const EXPECTED_COMPLETION_DATE_TIME: Tag = Tag(0x0040, 0x4011);
/// ReferencedGeneralPurposeScheduledProcedureStepTransactionUID (0040,4023) UI
#[rustfmt::skip]
pub const REFERENCED_GENERAL_PURPOSE_SCHEDULED_PROCEDURE_STEP_TRANSACTION_UID: Tag = Tag(0x0040, 0x4023);
/// ScheduledStationNameCodeSequence (0040,4025) SQ
#[rustfmt::skip]
pub const SCHEDULED_STATION_NAME_CODE_SEQUENCE: Tag = Tag(0x0040, 0x4025);
/// ScheduledStationGeographicLocationCodeSequence (0040,4027) SQ
#[rustfmt::skip]
pub const SCHEDULED_STATION_GEOGRAPHIC_LOCATION_CODE_SEQUENCE: Tag = Tag(0x0040, 0x4027);
/// PerformedStationNameCodeSequence (0040,4028) SQ
#[rustfmt::skip]
pub const PERFORMED_STATION_NAME_CODE_SEQUENCE: Tag = Tag(0x0040, 0x4028);
/// PerformedStationGeographicLocationCodeSequence (0040,4030) SQ
#[rustfmt::skip]
pub const PERFORMED_STATION_GEOGRAPHIC_LOCATION_CODE_SEQUENCE: Tag = Tag(0x0040, 0x4030);
/// ScheduledHumanPerformersSequence (0040,4034) SQ
#[rustfmt::skip]
pub const SCHEDULED_HUMAN_PERFORMERS_SEQUENCE: Tag = Tag(0x0040, 0x4034);
/// ActualHumanPerformersSequence (0040,4035) SQ
#[rustfmt::skip]
pub const ACTUAL_HUMAN_PERFORMERS_SEQUENCE: Tag = Tag(0x0040, 0x4035);
/// HumanPerformerOrganization (0040,4036) LO
#[rustfmt::skip]
pub const HUMAN_PERFORMER_ORGANIZATION: Tag = Tag(0x0040, 0x4036);
/// HumanPerformerName (0040,4037) PN
#[rustfmt::skip]
pub const HUMAN_PERFORMER_NAME: Tag = Tag(0x0040, 0x4037);
/// PerformedProcedureStepStartDateTime (0040,4050) DT
#[rustfmt::skip]
pub const PERFORMED_PROCEDURE_STEP_START_DATE_TIME: Tag = Tag(0x0040, 0x4050);
/// PerformedProcedureStepEndDateTime (0040,4051) DT
#[rustfmt::skip]
pub const PERFORMED_PROCEDURE_STEP_END_DATE_TIME: Tag = Tag(0x0040, 0x4051);
/// ProcedureStepCancellationDateTime (0040,4052) DT
#[rustfmt::skip]
pub const PROCEDURE_STEP_CANCELLATION_DATE_TIME: Tag = Tag(0x0040, 0x4052);
/// RelationshipType (0040,A010) CS
#[rustfmt::skip]
pub const RELATIONSHIP_TYPE: Tag = Tag(0x0040, 0xA010);
/// FindingsGroupRecordingDateTrial (0040,A023) DA
#[rustfmt::skip]
pub const FINDINGS_GROUP_RECORDING_DATE_TRIAL: Tag = Tag(0x0040, 0xA023);
/// FindingsGroupRecordingTimeTrial (0040,A024) TM
#[rustfmt::skip]
pub const FINDINGS_GROUP_RECORDING_TIME_TRIAL: Tag = Tag(0x0040, 0xA024);
/// VerifyingOrganization (0040,A027) LO
#[rustfmt::skip]
pub const VERIFYING_ORGANIZATION: Tag = Tag(0x0040, 0xA027);
/// VerificationDateTime (0040,A030) DT
#[rustfmt::skip]
pub const VERIFICATION_DATE_TIME: Tag = Tag(0x0040, 0xA030);
/// ObservationDateTime (0040,A032) DT
#[rustfmt::skip]
pub const OBSERVATION_DATE_TIME: Tag = Tag(0x0040, 0xA032);
/// ObservationStartDateTime (0040,A033) DT
#[rustfmt::skip]
pub const OBSERVATION_START_DATE_TIME: Tag = Tag(0x0040, 0xA033);
/// ValueType (0040,A040) CS
#[rustfmt::skip]
pub const VALUE_TYPE: Tag = Tag(0x0040, 0xA040);
/// ConceptNameCodeSequence (0040,A043) SQ
#[rustfmt::skip]
pub const CONCEPT_NAME_CODE_SEQUENCE: Tag = Tag(0x0040, 0xA043);
/// VerifyingObserverSequence (0040,A073) SQ
#[rustfmt::skip]
pub const VERIFYING_OBSERVER_SEQUENCE: Tag = Tag(0x0040, 0xA073);
/// VerifyingObserverName (0040,A075) PN
#[rustfmt::skip]
pub const VERIFYING_OBSERVER_NAME: Tag = Tag(0x0040, 0xA075);
/// AuthorObserverSequence (0040,A078) SQ
#[rustfmt::skip]
pub const AUTHOR_OBSERVER_SEQUENCE: Tag = Tag(0x0040, 0xA078);
/// ParticipantSequence (0040,A07A) SQ
#[rustfmt::skip]
pub const PARTICIPANT_SEQUENCE: Tag = Tag(0x0040, 0xA07A);
/// CustodialOrganizationSequence (0040,A07C) SQ
#[rustfmt::skip]
pub const CUSTODIAL_ORGANIZATION_SEQUENCE: Tag = Tag(0x0040, 0xA07C);
/// ParticipationDateTime (0040,A082) DT
#[rustfmt::skip]
pub const PARTICIPATION_DATE_TIME: Tag = Tag(0x0040, 0xA082);
/// VerifyingObserverIdentificationCodeSequence (0040,A088) SQ
#[rustfmt::skip]
pub const VERIFYING_OBSERVER_IDENTIFICATION_CODE_SEQUENCE: Tag = Tag(0x0040, 0xA088);
/// DateOfDocumentOrVerbalTransactionTrial (0040,A110) DA
#[rustfmt::skip]
pub const DATE_OF_DOCUMENT_OR_VERBAL_TRANSACTION_TRIAL: Tag = Tag(0x0040, 0xA110);
/// TimeOfDocumentOrVerbalTransactionTrial (0040,A112) TM
#[rustfmt::skip]
pub const TIME_OF_DOCUMENT_OR_VERBAL_TRANSACTION_TRIAL: Tag = Tag(0x0040, 0xA112);
/// DateTime (0040,A120) DT
#[rustfmt::skip]
pub const DATE_TIME: Tag = Tag(0x0040, 0xA120);
/// Date (0040,A121) DA
#[rustfmt::skip]
pub const DATE: Tag = Tag(0x0040, 0xA121);
/// Time (0040,A122) TM
#[rustfmt::skip]
pub const TIME: Tag = Tag(0x0040, 0xA122);
/// PersonName (0040,A123) PN
#[rustfmt::skip]
pub const PERSON_NAME: Tag = Tag(0x0040, 0xA123);
/// UID (0040,A124) UI
#[rustfmt::skip]
pub const UID: Tag = Tag(0x0040, 0xA124);
/// ReferencedDateTime (0040,A13A) DT
#[rustfmt::skip]
pub const REFERENCED_DATE_TIME: Tag = Tag(0x0040, 0xA13A);
/// TextValue (0040,A160) UT
#[rustfmt::skip]
pub const TEXT_VALUE: Tag = Tag(0x0040, 0xA160);
/// ConceptCodeSequence (0040,A168) SQ
#[rustfmt::skip]
pub const CONCEPT_CODE_SEQUENCE: Tag = Tag(0x0040, 0xA168);
/// PurposeOfReferenceCodeSequence (0040,A170) SQ
#[rustfmt::skip]
pub const PURPOSE_OF_REFERENCE_CODE_SEQUENCE: Tag = Tag(0x0040, 0xA170);
/// ObservationUID (0040,A171) UI
#[rustfmt::skip]
pub const OBSERVATION_UID: Tag = Tag(0x0040, 0xA171);
/// ReferencedObservationUIDTrial (0040,A172) UI
#[rustfmt::skip]
pub const REFERENCED_OBSERVATION_UID_TRIAL: Tag = Tag(0x0040, 0xA172);
/// ObservationDateTrial (0040,A192) DA
#[rustfmt::skip]
pub const OBSERVATION_DATE_TRIAL: Tag = Tag(0x0040, 0xA192);
/// ObservationTimeTrial (0040,A193) TM
#[rustfmt::skip]
pub const OBSERVATION_TIME_TRIAL: Tag = Tag(0x0040, 0xA193);
/// CurrentObserverTrial (0040,A307) PN
#[rustfmt::skip]
pub const CURRENT_OBSERVER_TRIAL: Tag = Tag(0x0040, 0xA307);
/// VerbalSourceTrial (0040,A352) PN
#[rustfmt::skip]
pub const VERBAL_SOURCE_TRIAL: Tag = Tag(0x0040, 0xA352);
/// AddressTrial (0040,A353) ST
#[rustfmt::skip]
pub const ADDRESS_TRIAL: Tag = Tag(0x0040, 0xA353);
/// TelephoneNumberTrial (0040,A354) LO
#[rustfmt::skip]
pub const TELEPHONE_NUMBER_TRIAL: Tag = Tag(0x0040, 0xA354);
/// VerbalSourceIdentifierCodeSequenceTrial (0040,A358) SQ
#[rustfmt::skip]
pub const VERBAL_SOURCE_IDENTIFIER_CODE_SEQUENCE_TRIAL: Tag = Tag(0x0040, 0xA358);
/// CurrentRequestedProcedureEvidenceSequence (0040,A375) SQ
#[rustfmt::skip]
pub const CURRENT_REQUESTED_PROCEDURE_EVIDENCE_SEQUENCE: Tag = Tag(0x0040, 0xA375);
/// PertinentOtherEvidenceSequence (0040,A385) SQ
#[rustfmt::skip]
pub const PERTINENT_OTHER_EVIDENCE_SEQUENCE: Tag = Tag(0x0040, 0xA385);
/// ObservationSubjectUIDTrial (0040,A402) UI
#[rustfmt::skip]
pub const OBSERVATION_SUBJECT_UID_TRIAL: Tag = Tag(0x0040, 0xA402);
/// CompletionFlag (0040,A491) CS
#[rustfmt::skip]
pub const COMPLETION_FLAG: Tag = Tag(0x0040, 0xA491);
/// VerificationFlag (0040,A493) CS
#[rustfmt::skip]
pub const VERIFICATION_FLAG: Tag = Tag(0x0040, 0xA493);
/// ContentTemplateSequence (0040,A504) SQ
#[rustfmt::skip]
pub const CONTENT_TEMPLATE_SEQUENCE: Tag = Tag(0x0040, 0xA504);
/// IdenticalDocumentsSequence (0040,A525) SQ
#[rustfmt::skip]
pub const IDENTICAL_DOCUMENTS_SEQUENCE: Tag = Tag(0x0040, 0xA525);
/// ContentSequence (0040,A730) SQ
#[rustfmt::skip]
pub const CONTENT_SEQUENCE: Tag = Tag(0x0040, 0xA730);
/// TemplateIdentifier (0040,DB00) CS
#[rustfmt::skip]
pub const TEMPLATE_IDENTIFIER: Tag = Tag(0x0040, 0xDB00);
/// TemplateVersion (0040,DB06) DT
#[rustfmt::skip]
pub const TEMPLATE_VERSION: Tag = Tag(0x0040, 0xDB06);
/// TemplateLocalVersion (0040,DB07) DT
#[rustfmt::skip]
pub const TEMPLATE_LOCAL_VERSION: Tag = Tag(0x0040, 0xDB07);
/// TemplateExtensionOrganizationUID (0040,DB0C) UI
#[rustfmt::skip]
pub const TEMPLATE_EXTENSION_ORGANIZATION_UID: Tag = Tag(0x0040, 0xDB0C);
/// TemplateExtensionCreatorUID (0040,DB0D) UI
#[rustfmt::skip]
pub const TEMPLATE_EXTENSION_CREATOR_UID: Tag = Tag(0x0040, 0xDB0D);
/// HL7DocumentEffectiveTime (0040,E004) DT
#[rustfmt::skip]
pub const HL7_DOCUMENT_EFFECTIVE_TIME: Tag = Tag(0x0040, 0xE004);
/// EncapsulatedDocument (0042,0011) OB
#[rustfmt::skip]
pub const ENCAPSULATED_DOCUMENT: Tag = Tag(0x0042, 0x0011);
/// ApprovalStatusDateTime (0044,0004) DT
#[rustfmt::skip]
pub const APPROVAL_STATUS_DATE_TIME: Tag = Tag(0x0044, 0x0004);
/// ProductExpirationDateTime (0044,000B) DT
#[rustfmt::skip]
pub const PRODUCT_EXPIRATION_DATE_TIME: Tag = Tag(0x0044, 0x000B);
/// SubstanceAdministrationDateTime (0044,0010) DT
#[rustfmt::skip]
pub const SUBSTANCE_ADMINISTRATION_DATE_TIME: Tag = Tag(0x0044, 0x0010);
/// AssertionDateTime (0044,0104) DT
#[rustfmt::skip]
pub const ASSERTION_DATE_TIME: Tag = Tag(0x0044, 0x0104);
/// AssertionExpirationDateTime (0044,0105) DT
#[rustfmt::skip]
pub const ASSERTION_EXPIRATION_DATE_TIME: Tag = Tag(0x0044, 0x0105);
/// ContainerComponentID (0050,001B) LO
#[rustfmt::skip]
pub const CONTAINER_COMPONENT_ID: Tag = Tag(0x0050, 0x001B);
/// DeviceDescription (0050,0020) LO
#[rustfmt::skip]
pub const DEVICE_DESCRIPTION: Tag = Tag(0x0050, 0x0020);
/// LongDeviceDescription (0050,0021) ST
#[rustfmt::skip]
pub const LONG_DEVICE_DESCRIPTION: Tag = Tag(0x0050, 0x0021);
/// TrackingUID (0062,0021) UI
#[rustfmt::skip]
pub const TRACKING_UID: Tag = Tag(0x0062, 0x0021);
/// SourceFrameOfReferenceUID (0064,0003) UI
#[rustfmt::skip]
pub const SOURCE_FRAME_OF_REFERENCE_UID: Tag = Tag(0x0064, 0x0003);
/// EffectiveDateTime (0068,6226) DT
#[rustfmt::skip]
pub const EFFECTIVE_DATE_TIME: Tag = Tag(0x0068, 0x6226);
/// InformationIssueDateTime (0068,6270) DT
#[rustfmt::skip]
pub const INFORMATION_ISSUE_DATE_TIME: Tag = Tag(0x0068, 0x6270);
/// AnnotationGroupUID (006A,0003) UI
#[rustfmt::skip]
pub const ANNOTATION_GROUP_UID: Tag = Tag(0x006A, 0x0003);
/// AnnotationGroupLabel (006A,0005) LO
#[rustfmt::skip]
pub const ANNOTATION_GROUP_LABEL: Tag = Tag(0x006A, 0x0005);
/// AnnotationGroupDescription (006A,0006) UT
#[rustfmt::skip]
pub const ANNOTATION_GROUP_DESCRIPTION: Tag = Tag(0x006A, 0x0006);
/// GraphicAnnotationSequence (0070,0001) SQ
#[rustfmt::skip]
pub const GRAPHIC_ANNOTATION_SEQUENCE: Tag = Tag(0x0070, 0x0001);
/// PresentationCreationDate (0070,0082) DA
#[rustfmt::skip]
pub const PRESENTATION_CREATION_DATE: Tag = Tag(0x0070, 0x0082);
/// PresentationCreationTime (0070,0083) TM
#[rustfmt::skip]
pub const PRESENTATION_CREATION_TIME: Tag = Tag(0x0070, 0x0083);
/// ContentCreatorName (0070,0084) PN
#[rustfmt::skip]
pub const CONTENT_CREATOR_NAME: Tag = Tag(0x0070, 0x0084);
/// ContentCreatorIdentificationCodeSequence (0070,0086) SQ
#[rustfmt::skip]
pub const CONTENT_CREATOR_IDENTIFICATION_CODE_SEQUENCE: Tag = Tag(0x0070, 0x0086);
/// FiducialUID (0070,031A) UI
#[rustfmt::skip]
pub const FIDUCIAL_UID: Tag = Tag(0x0070, 0x031A);
/// PresentationDisplayCollectionUID (0070,1101) UI
#[rustfmt::skip]
pub const PRESENTATION_DISPLAY_COLLECTION_UID: Tag = Tag(0x0070, 0x1101);
/// PresentationSequenceCollectionUID (0070,1102) UI
#[rustfmt::skip]
pub const PRESENTATION_SEQUENCE_COLLECTION_UID: Tag = Tag(0x0070, 0x1102);
/// HangingProtocolCreationDateTime (0072,000A) DT
#[rustfmt::skip]
pub const HANGING_PROTOCOL_CREATION_DATE_TIME: Tag = Tag(0x0072, 0x000A);
/// SelectorAEValue (0072,005E) AE
#[rustfmt::skip]
pub const SELECTOR_AE_VALUE: Tag = Tag(0x0072, 0x005E);
/// SelectorASValue (0072,005F) AS
#[rustfmt::skip]
pub const SELECTOR_AS_VALUE: Tag = Tag(0x0072, 0x005F);
/// SelectorDAValue (0072,0061) DA
#[rustfmt::skip]
pub const SELECTOR_DA_VALUE: Tag = Tag(0x0072, 0x0061);
/// SelectorDTValue (0072,0063) DT
#[rustfmt::skip]
pub const SELECTOR_DT_VALUE: Tag = Tag(0x0072, 0x0063);
/// SelectorOBValue (0072,0065) OB
#[rustfmt::skip]
pub const SELECTOR_OB_VALUE: Tag = Tag(0x0072, 0x0065);
/// SelectorLOValue (0072,0066) LO
#[rustfmt::skip]
pub const SELECTOR_LO_VALUE: Tag = Tag(0x0072, 0x0066);
/// SelectorLTValue (0072,0068) LT
#[rustfmt::skip]
pub const SELECTOR_LT_VALUE: Tag = Tag(0x0072, 0x0068);
/// SelectorPNValue (0072,006A) PN
#[rustfmt::skip]
pub const SELECTOR_PN_VALUE: Tag = Tag(0x0072, 0x006A);
/// SelectorTMValue (0072,006B) TM
#[rustfmt::skip]
pub const SELECTOR_TM_VALUE: Tag = Tag(0x0072, 0x006B);
/// SelectorSHValue (0072,006C) SH
#[rustfmt::skip]
pub const SELECTOR_SH_VALUE: Tag = Tag(0x0072, 0x006C);
/// SelectorUNValue (0072,006D) UN
#[rustfmt::skip]
pub const SELECTOR_UN_VALUE: Tag = Tag(0x0072, 0x006D);
/// SelectorSTValue (0072,006E) ST
#[rustfmt::skip]
pub const SELECTOR_ST_VALUE: Tag = Tag(0x0072, 0x006E);
/// SelectorUTValue (0072,0070) UT
#[rustfmt::skip]
pub const SELECTOR_UT_VALUE: Tag = Tag(0x0072, 0x0070);
/// SelectorURValue (0072,0071) UR
#[rustfmt::skip]
pub const SELECTOR_UR_VALUE: Tag = Tag(0x0072, 0x0071);
/// ReceivingAE (0074,1234) AE
#[rustfmt::skip]
pub const RECEIVING_AE: Tag = Tag(0x0074, 0x1234);
/// RequestingAE (0074,1236) AE
#[rustfmt::skip]
pub const REQUESTING_AE: Tag = Tag(0x0074, 0x1236);
/// StorageMediaFileSetUID (0088,0140) UI
#[rustfmt::skip]
pub const STORAGE_MEDIA_FILE_SET_UID: Tag = Tag(0x0088, 0x0140);
/// IconImageSequence (0088,0200) SQ
#[rustfmt::skip]
pub const ICON_IMAGE_SEQUENCE: Tag = Tag(0x0088, 0x0200);
/// TopicTitle (0088,0904) LO
#[rustfmt::skip]
pub const TOPIC_TITLE: Tag = Tag(0x0088, 0x0904);
/// TopicSubject (0088,0906) ST
#[rustfmt::skip]
pub const TOPIC_SUBJECT: Tag = Tag(0x0088, 0x0906);
/// TopicAuthor (0088,0910) LO
#[rustfmt::skip]
pub const TOPIC_AUTHOR: Tag = Tag(0x0088, 0x0910);
/// TopicKeywords (0088,0912) LO
#[rustfmt::skip]
pub const TOPIC_KEYWORDS: Tag = Tag(0x0088, 0x0912);
/// SOPAuthorizationDateTime (0100,0420) DT
#[rustfmt::skip]
pub const SOP_AUTHORIZATION_DATE_TIME: Tag = Tag(0x0100, 0x0420);
/// DigitalSignatureUID (0400,0100) UI
#[rustfmt::skip]
pub const DIGITAL_SIGNATURE_UID: Tag = Tag(0x0400, 0x0100);
/// DigitalSignatureDateTime (0400,0105) DT
#[rustfmt::skip]
pub const DIGITAL_SIGNATURE_DATE_TIME: Tag = Tag(0x0400, 0x0105);
/// CertificateOfSigner (0400,0115) OB
#[rustfmt::skip]
pub const CERTIFICATE_OF_SIGNER: Tag = Tag(0x0400, 0x0115);
/// CertifiedTimestamp (0400,0310) OB
#[rustfmt::skip]
pub const CERTIFIED_TIMESTAMP: Tag = Tag(0x0400, 0x0310);
/// ReferencedDigitalSignatureSequence (0400,0402) SQ
#[rustfmt::skip]
pub const REFERENCED_DIGITAL_SIGNATURE_SEQUENCE: Tag = Tag(0x0400, 0x0402);
/// ReferencedSOPInstanceMACSequence (0400,0403) SQ
#[rustfmt::skip]
pub const REFERENCED_SOP_INSTANCE_MAC_SEQUENCE: Tag = Tag(0x0400, 0x0403);
/// MAC (0400,0404) OB
#[rustfmt::skip]
pub const MAC: Tag = Tag(0x0400, 0x0404);
/// ModifiedAttributesSequence (0400,0550) SQ
#[rustfmt::skip]
pub const MODIFIED_ATTRIBUTES_SEQUENCE: Tag = Tag(0x0400, 0x0550);
/// NonconformingModifiedAttributesSequence (0400,0551) SQ
#[rustfmt::skip]
pub const NONCONFORMING_MODIFIED_ATTRIBUTES_SEQUENCE: Tag = Tag(0x0400, 0x0551);
/// NonconformingDataElementValue (0400,0552) OB
#[rustfmt::skip]
pub const NONCONFORMING_DATA_ELEMENT_VALUE: Tag = Tag(0x0400, 0x0552);
/// OriginalAttributesSequence (0400,0561) SQ
#[rustfmt::skip]
pub const ORIGINAL_ATTRIBUTES_SEQUENCE: Tag = Tag(0x0400, 0x0561);
/// AttributeModificationDateTime (0400,0562) DT
#[rustfmt::skip]
pub const ATTRIBUTE_MODIFICATION_DATE_TIME: Tag = Tag(0x0400, 0x0562);
/// ModifyingSystem (0400,0563) LO
#[rustfmt::skip]
pub const MODIFYING_SYSTEM: Tag = Tag(0x0400, 0x0563);
/// SourceOfPreviousValues (0400,0564) LO
#[rustfmt::skip]
pub const SOURCE_OF_PREVIOUS_VALUES: Tag = Tag(0x0400, 0x0564);
/// ReasonForTheAttributeModification (0400,0565) CS
#[rustfmt::skip]
pub const REASON_FOR_THE_ATTRIBUTE_MODIFICATION: Tag = Tag(0x0400, 0x0565);
/// InstanceOriginStatus (0400,0600) CS
#[rustfmt::skip]
pub const INSTANCE_ORIGIN_STATUS: Tag = Tag(0x0400, 0x0600);
/// TextString (2030,0020) LO
#[rustfmt::skip]
pub const TEXT_STRING: Tag = Tag(0x2030, 0x0020);
/// CreationDate (2100,0040) DA
#[rustfmt::skip]
pub const CREATION_DATE: Tag = Tag(0x2100, 0x0040);
/// CreationTime (2100,0050) TM
#[rustfmt::skip]
pub const CREATION_TIME: Tag = Tag(0x2100, 0x0050);
/// Originator (2100,0070) AE
#[rustfmt::skip]
pub const ORIGINATOR: Tag = Tag(0x2100, 0x0070);
/// DestinationAE (2100,0140) AE
#[rustfmt::skip]
pub const DESTINATION_AE: Tag = Tag(0x2100, 0x0140);
/// LabelText (2200,0002) UT
#[rustfmt::skip]
pub const LABEL_TEXT: Tag = Tag(0x2200, 0x0002);
/// BarcodeValue (2200,0005) LT
#[rustfmt::skip]
pub const BARCODE_VALUE: Tag = Tag(0x2200, 0x0005);
/// PositionAcquisitionTemplateName (3002,0121) SH
#[rustfmt::skip]
pub const POSITION_ACQUISITION_TEMPLATE_NAME: Tag = Tag(0x3002, 0x0121);
/// PositionAcquisitionTemplateDescription (3002,0123) LO
#[rustfmt::skip]
pub const POSITION_ACQUISITION_TEMPLATE_DESCRIPTION: Tag = Tag(0x3002, 0x0123);
/// StructureSetLabel (3006,0002) SH
#[rustfmt::skip]
pub const STRUCTURE_SET_LABEL: Tag = Tag(0x3006, 0x0002);
/// StructureSetName (3006,0004) LO
#[rustfmt::skip]
pub const STRUCTURE_SET_NAME: Tag = Tag(0x3006, 0x0004);
/// StructureSetDescription (3006,0006) ST
#[rustfmt::skip]
pub const STRUCTURE_SET_DESCRIPTION: Tag = Tag(0x3006, 0x0006);
/// StructureSetDate (3006,0008) DA
#[rustfmt::skip]
pub const STRUCTURE_SET_DATE: Tag = Tag(0x3006, 0x0008);
/// StructureSetTime (3006,0009) TM
#[rustfmt::skip]
pub const STRUCTURE_SET_TIME: Tag = Tag(0x3006, 0x0009);
/// ReferencedFrameOfReferenceSequence (3006,0010) SQ
#[rustfmt::skip]
pub const REFERENCED_FRAME_OF_REFERENCE_SEQUENCE: Tag = Tag(0x3006, 0x0010);
/// RTReferencedStudySequence (3006,0012) SQ
#[rustfmt::skip]
pub const RT_REFERENCED_STUDY_SEQUENCE: Tag = Tag(0x3006, 0x0012);
/// RTReferencedSeriesSequence (3006,0014) SQ
#[rustfmt::skip]
pub const RT_REFERENCED_SERIES_SEQUENCE: Tag = Tag(0x3006, 0x0014);
/// ContourImageSequence (3006,0016) SQ
#[rustfmt::skip]
pub const CONTOUR_IMAGE_SEQUENCE: Tag = Tag(0x3006, 0x0016);
/// StructureSetROISequence (3006,0020) SQ
#[rustfmt::skip]
pub const STRUCTURE_SET_ROI_SEQUENCE: Tag = Tag(0x3006, 0x0020);
/// ROINumber (3006,0022) IS
#[rustfmt::skip]
pub const ROI_NUMBER: Tag = Tag(0x3006, 0x0022);
/// ReferencedFrameOfReferenceUID (3006,0024) UI
#[rustfmt::skip]
pub const REFERENCED_FRAME_OF_REFERENCE_UID: Tag = Tag(0x3006, 0x0024);
/// ROIName (3006,0026) LO
#[rustfmt::skip]
pub const ROI_NAME: Tag = Tag(0x3006, 0x0026);
/// ROIDescription (3006,0028) ST
#[rustfmt::skip]
pub const ROI_DESCRIPTION: Tag = Tag(0x3006, 0x0028);
/// ROIGenerationDescription (3006,0038) LO
#[rustfmt::skip]
pub const ROI_GENERATION_DESCRIPTION: Tag = Tag(0x3006, 0x0038);
/// ROIContourSequence (3006,0039) SQ
#[rustfmt::skip]
pub const ROI_CONTOUR_SEQUENCE: Tag = Tag(0x3006, 0x0039);
/// ContourSequence (3006,0040) SQ
#[rustfmt::skip]
pub const CONTOUR_SEQUENCE: Tag = Tag(0x3006, 0x0040);
/// ContourData (3006,0050) DS
#[rustfmt::skip]
pub const CONTOUR_DATA: Tag = Tag(0x3006, 0x0050);
/// ROIObservationLabel (3006,0085) SH
#[rustfmt::skip]
pub const ROI_OBSERVATION_LABEL: Tag = Tag(0x3006, 0x0085);
/// ROIObservationDescription (3006,0088) ST
#[rustfmt::skip]
pub const ROI_OBSERVATION_DESCRIPTION: Tag = Tag(0x3006, 0x0088);
/// ROIInterpreter (3006,00A6) PN
#[rustfmt::skip]
pub const ROI_INTERPRETER: Tag = Tag(0x3006, 0x00A6);
/// RelatedFrameOfReferenceUID (3006,00C2) UI
#[rustfmt::skip]
pub const RELATED_FRAME_OF_REFERENCE_UID: Tag = Tag(0x3006, 0x00C2);
/// TreatmentControlPointDate (3008,0024) DA
#[rustfmt::skip]
pub const TREATMENT_CONTROL_POINT_DATE: Tag = Tag(0x3008, 0x0024);
/// TreatmentControlPointTime (3008,0025) TM
#[rustfmt::skip]
pub const TREATMENT_CONTROL_POINT_TIME: Tag = Tag(0x3008, 0x0025);
/// FirstTreatmentDate (3008,0054) DA
#[rustfmt::skip]
pub const FIRST_TREATMENT_DATE: Tag = Tag(0x3008, 0x0054);
/// MostRecentTreatmentDate (3008,0056) DA
#[rustfmt::skip]
pub const MOST_RECENT_TREATMENT_DATE: Tag = Tag(0x3008, 0x0056);
/// SourceSerialNumber (3008,0105) LO
#[rustfmt::skip]
pub const SOURCE_SERIAL_NUMBER: Tag = Tag(0x3008, 0x0105);
/// SafePositionExitDate (3008,0162) DA
#[rustfmt::skip]
pub const SAFE_POSITION_EXIT_DATE: Tag = Tag(0x3008, 0x0162);
/// SafePositionExitTime (3008,0164) TM
#[rustfmt::skip]
pub const SAFE_POSITION_EXIT_TIME: Tag = Tag(0x3008, 0x0164);
/// SafePositionReturnDate (3008,0166) DA
#[rustfmt::skip]
pub const SAFE_POSITION_RETURN_DATE: Tag = Tag(0x3008, 0x0166);
/// SafePositionReturnTime (3008,0168) TM
#[rustfmt::skip]
pub const SAFE_POSITION_RETURN_TIME: Tag = Tag(0x3008, 0x0168);
/// TreatmentDate (3008,0250) DA
#[rustfmt::skip]
pub const TREATMENT_DATE: Tag = Tag(0x3008, 0x0250);
/// TreatmentTime (3008,0251) TM
#[rustfmt::skip]
pub const TREATMENT_TIME: Tag = Tag(0x3008, 0x0251);
/// RTPlanLabel (300A,0002) SH
#[rustfmt::skip]
pub const RT_PLAN_LABEL: Tag = Tag(0x300A, 0x0002);
/// RTPlanName (300A,0003) LO
#[rustfmt::skip]
pub const RT_PLAN_NAME: Tag = Tag(0x300A, 0x0003);
/// RTPlanDescription (300A,0004) ST
#[rustfmt::skip]
pub const RT_PLAN_DESCRIPTION: Tag = Tag(0x300A, 0x0004);
/// RTPlanDate (300A,0006) DA
#[rustfmt::skip]
pub const RT_PLAN_DATE: Tag = Tag(0x300A, 0x0006);
/// RTPlanTime (300A,0007) TM
#[rustfmt::skip]
pub const RT_PLAN_TIME: Tag = Tag(0x300A, 0x0007);
/// TreatmentSites (300A,000B) LO
#[rustfmt::skip]
pub const TREATMENT_SITES: Tag = Tag(0x300A, 0x000B);
/// PrescriptionDescription (300A,000E) ST
#[rustfmt::skip]
pub const PRESCRIPTION_DESCRIPTION: Tag = Tag(0x300A, 0x000E);
/// DoseReferenceUID (300A,0013) UI
#[rustfmt::skip]
pub const DOSE_REFERENCE_UID: Tag = Tag(0x300A, 0x0013);
/// DoseReferenceDescription (300A,0016) LO
#[rustfmt::skip]
pub const DOSE_REFERENCE_DESCRIPTION: Tag = Tag(0x300A, 0x0016);
/// FractionGroupDescription (300A,0072) LO
#[rustfmt::skip]
pub const FRACTION_GROUP_DESCRIPTION: Tag = Tag(0x300A, 0x0072);
/// ReferencedDoseReferenceUID (300A,0083) UI
#[rustfmt::skip]
pub const REFERENCED_DOSE_REFERENCE_UID: Tag = Tag(0x300A, 0x0083);
/// TreatmentMachineName (300A,00B2) SH
#[rustfmt::skip]
pub const TREATMENT_MACHINE_NAME: Tag = Tag(0x300A, 0x00B2);
/// BeamDescription (300A,00C3) ST
#[rustfmt::skip]
pub const BEAM_DESCRIPTION: Tag = Tag(0x300A, 0x00C3);
/// BolusDescription (300A,00DD) ST
#[rustfmt::skip]
pub const BOLUS_DESCRIPTION: Tag = Tag(0x300A, 0x00DD);
/// FixationDeviceDescription (300A,0196) ST
#[rustfmt::skip]
pub const FIXATION_DEVICE_DESCRIPTION: Tag = Tag(0x300A, 0x0196);
/// ShieldingDeviceDescription (300A,01A6) ST
#[rustfmt::skip]
pub const SHIELDING_DEVICE_DESCRIPTION: Tag = Tag(0x300A, 0x01A6);
/// SetupTechniqueDescription (300A,01B2) ST
#[rustfmt::skip]
pub const SETUP_TECHNIQUE_DESCRIPTION: Tag = Tag(0x300A, 0x01B2);
/// SourceManufacturer (300A,0216) LO
#[rustfmt::skip]
pub const SOURCE_MANUFACTURER: Tag = Tag(0x300A, 0x0216);
/// SourceStrengthReferenceDate (300A,022C) DA
#[rustfmt::skip]
pub const SOURCE_STRENGTH_REFERENCE_DATE: Tag = Tag(0x300A, 0x022C);
/// SourceStrengthReferenceTime (300A,022E) TM
#[rustfmt::skip]
pub const SOURCE_STRENGTH_REFERENCE_TIME: Tag = Tag(0x300A, 0x022E);
/// CompensatorDescription (300A,02EB) LT
#[rustfmt::skip]
pub const COMPENSATOR_DESCRIPTION: Tag = Tag(0x300A, 0x02EB);
/// TreatmentPositionGroupLabel (300A,0608) LO
#[rustfmt::skip]
pub const TREATMENT_POSITION_GROUP_LABEL: Tag = Tag(0x300A, 0x0608);
/// TreatmentPositionGroupUID (300A,0609) UI
#[rustfmt::skip]
pub const TREATMENT_POSITION_GROUP_UID: Tag = Tag(0x300A, 0x0609);
/// RTAccessoryHolderSlotID (300A,0611) LO
#[rustfmt::skip]
pub const RT_ACCESSORY_HOLDER_SLOT_ID: Tag = Tag(0x300A, 0x0611);
/// RTAccessoryDeviceSlotID (300A,0615) LO
#[rustfmt::skip]
pub const RT_ACCESSORY_DEVICE_SLOT_ID: Tag = Tag(0x300A, 0x0615);
/// RadiationDoseIdentificationLabel (300A,0619) LO
#[rustfmt::skip]
pub const RADIATION_DOSE_IDENTIFICATION_LABEL: Tag = Tag(0x300A, 0x0619);
/// RadiationDoseInVivoMeasurementLabel (300A,0623) LO
#[rustfmt::skip]
pub const RADIATION_DOSE_IN_VIVO_MEASUREMENT_LABEL: Tag = Tag(0x300A, 0x0623);
/// RTToleranceSetLabel (300A,062A) LO
#[rustfmt::skip]
pub const RT_TOLERANCE_SET_LABEL: Tag = Tag(0x300A, 0x062A);
/// PatientSetupUID (300A,0650) UI
#[rustfmt::skip]
pub const PATIENT_SETUP_UID: Tag = Tag(0x300A, 0x0650);
/// EquipmentFrameOfReferenceDescription (300A,0676) UT
#[rustfmt::skip]
pub const EQUIPMENT_FRAME_OF_REFERENCE_DESCRIPTION: Tag = Tag(0x300A, 0x0676);
/// RadiationGenerationModeLabel (300A,067C) SH
#[rustfmt::skip]
pub const RADIATION_GENERATION_MODE_LABEL: Tag = Tag(0x300A, 0x067C);
/// RadiationGenerationModeDescription (300A,067D) ST
#[rustfmt::skip]
pub const RADIATION_GENERATION_MODE_DESCRIPTION: Tag = Tag(0x300A, 0x067D);
/// TreatmentSessionUID (300A,0700) UI
#[rustfmt::skip]
pub const TREATMENT_SESSION_UID: Tag = Tag(0x300A, 0x0700);
/// TreatmentToleranceViolationDescription (300A,0734) UT
#[rustfmt::skip]
pub const TREATMENT_TOLERANCE_VIOLATION_DESCRIPTION: Tag = Tag(0x300A, 0x0734);
/// TreatmentToleranceViolationDateTime (300A,0736) DT
#[rustfmt::skip]
pub const TREATMENT_TOLERANCE_VIOLATION_DATE_TIME: Tag = Tag(0x300A, 0x0736);
/// RecordedRTControlPointDateTime (300A,073A) DT
#[rustfmt::skip]
pub const RECORDED_RT_CONTROL_POINT_DATE_TIME: Tag = Tag(0x300A, 0x073A);
/// InterlockDateTime (300A,0741) DT
#[rustfmt::skip]
pub const INTERLOCK_DATE_TIME: Tag = Tag(0x300A, 0x0741);
/// InterlockDescription (300A,0742) ST
#[rustfmt::skip]
pub const INTERLOCK_DESCRIPTION: Tag = Tag(0x300A, 0x0742);
/// OverrideDateTime (300A,0760) DT
#[rustfmt::skip]
pub const OVERRIDE_DATE_TIME: Tag = Tag(0x300A, 0x0760);
/// InterlockOriginDescription (300A,0783) ST
#[rustfmt::skip]
pub const INTERLOCK_ORIGIN_DESCRIPTION: Tag = Tag(0x300A, 0x0783);
/// ReferencedTreatmentPositionGroupUID (300A,0785) UI
#[rustfmt::skip]
pub const REFERENCED_TREATMENT_POSITION_GROUP_UID: Tag = Tag(0x300A, 0x0785);
/// PatientTreatmentPreparationProcedureParameterDescription (300A,078E) LT
#[rustfmt::skip]
pub const PATIENT_TREATMENT_PREPARATION_PROCEDURE_PARAMETER_DESCRIPTION: Tag = Tag(0x300A, 0x078E);
/// PatientTreatmentPreparationMethodDescription (300A,0792) LT
#[rustfmt::skip]
pub const PATIENT_TREATMENT_PREPARATION_METHOD_DESCRIPTION: Tag = Tag(0x300A, 0x0792);
/// PatientSetupPhotoDescription (300A,0794) LT
#[rustfmt::skip]
pub const PATIENT_SETUP_PHOTO_DESCRIPTION: Tag = Tag(0x300A, 0x0794);
/// DisplacementReferenceLabel (300A,079A) LO
#[rustfmt::skip]
pub const DISPLACEMENT_REFERENCE_LABEL: Tag = Tag(0x300A, 0x079A);
/// ReferencedRTPlanSequence (300C,0002) SQ
#[rustfmt::skip]
pub const REFERENCED_RT_PLAN_SEQUENCE: Tag = Tag(0x300C, 0x0002);
/// ReferencedStructureSetSequence (300C,0060) SQ
#[rustfmt::skip]
pub const REFERENCED_STRUCTURE_SET_SEQUENCE: Tag = Tag(0x300C, 0x0060);
/// ReferencedDoseSequence (300C,0080) SQ
#[rustfmt::skip]
pub const REFERENCED_DOSE_SEQUENCE: Tag = Tag(0x300C, 0x0080);
/// ReasonForOmissionDescription (300C,0113) LO
#[rustfmt::skip]
pub const REASON_FOR_OMISSION_DESCRIPTION: Tag = Tag(0x300C, 0x0113);
/// BeamHoldTransitionDateTime (300C,0127) DT
#[rustfmt::skip]
pub const BEAM_HOLD_TRANSITION_DATE_TIME: Tag = Tag(0x300C, 0x0127);
/// ReviewDate (300E,0004) DA
#[rustfmt::skip]
pub const REVIEW_DATE: Tag = Tag(0x300E, 0x0004);
/// ReviewTime (300E,0005) TM
#[rustfmt::skip]
pub const REVIEW_TIME: Tag = Tag(0x300E, 0x0005);
/// ReviewerName (300E,0008) PN
#[rustfmt::skip]
pub const REVIEWER_NAME: Tag = Tag(0x300E, 0x0008);
/// ConceptualVolumeUID (3010,0006) UI
#[rustfmt::skip]
pub const CONCEPTUAL_VOLUME_UID: Tag = Tag(0x3010, 0x0006);
/// ReferencedConceptualVolumeUID (3010,000B) UI
#[rustfmt::skip]
pub const REFERENCED_CONCEPTUAL_VOLUME_UID: Tag = Tag(0x3010, 0x000B);
/// ConceptualVolumeCombinationDescription (3010,000F) ST
#[rustfmt::skip]
pub const CONCEPTUAL_VOLUME_COMBINATION_DESCRIPTION: Tag = Tag(0x3010, 0x000F);
/// ConstituentConceptualVolumeUID (3010,0013) UI
#[rustfmt::skip]
pub const CONSTITUENT_CONCEPTUAL_VOLUME_UID: Tag = Tag(0x3010, 0x0013);
/// SourceConceptualVolumeUID (3010,0015) UI
#[rustfmt::skip]
pub const SOURCE_CONCEPTUAL_VOLUME_UID: Tag = Tag(0x3010, 0x0015);
/// ConceptualVolumeDescription (3010,0017) ST
#[rustfmt::skip]
pub const CONCEPTUAL_VOLUME_DESCRIPTION: Tag = Tag(0x3010, 0x0017);
/// DeviceAlternateIdentifier (3010,001B) UT
#[rustfmt::skip]
pub const DEVICE_ALTERNATE_IDENTIFIER: Tag = Tag(0x3010, 0x001B);
/// DeviceLabel (3010,002D) LO
#[rustfmt::skip]
pub const DEVICE_LABEL: Tag = Tag(0x3010, 0x002D);
/// ReferencedFiducialsUID (3010,0031) UI
#[rustfmt::skip]
pub const REFERENCED_FIDUCIALS_UID: Tag = Tag(0x3010, 0x0031);
/// UserContentLabel (3010,0033) SH
#[rustfmt::skip]
pub const USER_CONTENT_LABEL: Tag = Tag(0x3010, 0x0033);
/// UserContentLongLabel (3010,0034) LO
#[rustfmt::skip]
pub const USER_CONTENT_LONG_LABEL: Tag = Tag(0x3010, 0x0034);
/// EntityLabel (3010,0035) SH
#[rustfmt::skip]
pub const ENTITY_LABEL: Tag = Tag(0x3010, 0x0035);
/// EntityName (3010,0036) LO
#[rustfmt::skip]
pub const ENTITY_NAME: Tag = Tag(0x3010, 0x0036);
/// EntityDescription (3010,0037) ST
#[rustfmt::skip]
pub const ENTITY_DESCRIPTION: Tag = Tag(0x3010, 0x0037);
/// EntityLongLabel (3010,0038) LO
#[rustfmt::skip]
pub const ENTITY_LONG_LABEL: Tag = Tag(0x3010, 0x0038);
/// RTTreatmentPhaseUID (3010,003B) UI
#[rustfmt::skip]
pub const RT_TREATMENT_PHASE_UID: Tag = Tag(0x3010, 0x003B);
/// ManufacturerDeviceIdentifier (3010,0043) ST
#[rustfmt::skip]
pub const MANUFACTURER_DEVICE_IDENTIFIER: Tag = Tag(0x3010, 0x0043);
/// IntendedPhaseStartDate (3010,004C) DA
#[rustfmt::skip]
pub const INTENDED_PHASE_START_DATE: Tag = Tag(0x3010, 0x004C);
/// IntendedPhaseEndDate (3010,004D) DA
#[rustfmt::skip]
pub const INTENDED_PHASE_END_DATE: Tag = Tag(0x3010, 0x004D);
/// RTPrescriptionLabel (3010,0054) LO
#[rustfmt::skip]
pub const RT_PRESCRIPTION_LABEL: Tag = Tag(0x3010, 0x0054);
/// RTTreatmentApproachLabel (3010,0056) LO
#[rustfmt::skip]
pub const RT_TREATMENT_APPROACH_LABEL: Tag = Tag(0x3010, 0x0056);
/// RTPhysicianIntentNarrative (3010,005A) UT
#[rustfmt::skip]
pub const RT_PHYSICIAN_INTENT_NARRATIVE: Tag = Tag(0x3010, 0x005A);
/// ReasonForSuperseding (3010,005C) LO
#[rustfmt::skip]
pub const REASON_FOR_SUPERSEDING: Tag = Tag(0x3010, 0x005C);
/// PriorTreatmentDoseDescription (3010,0061) UT
#[rustfmt::skip]
pub const PRIOR_TREATMENT_DOSE_DESCRIPTION: Tag = Tag(0x3010, 0x0061);
/// DosimetricObjectiveUID (3010,006E) UI
#[rustfmt::skip]
pub const DOSIMETRIC_OBJECTIVE_UID: Tag = Tag(0x3010, 0x006E);
/// ReferencedDosimetricObjectiveUID (3010,006F) UI
#[rustfmt::skip]
pub const REFERENCED_DOSIMETRIC_OBJECTIVE_UID: Tag = Tag(0x3010, 0x006F);
/// TreatmentSite (3010,0077) LO
#[rustfmt::skip]
pub const TREATMENT_SITE: Tag = Tag(0x3010, 0x0077);
/// TreatmentTechniqueNotes (3010,007A) UT
#[rustfmt::skip]
pub const TREATMENT_TECHNIQUE_NOTES: Tag = Tag(0x3010, 0x007A);
/// PrescriptionNotes (3010,007B) UT
#[rustfmt::skip]
pub const PRESCRIPTION_NOTES: Tag = Tag(0x3010, 0x007B);
/// FractionationNotes (3010,007F) UT
#[rustfmt::skip]
pub const FRACTIONATION_NOTES: Tag = Tag(0x3010, 0x007F);
/// PrescriptionNotesSequence (3010,0081) SQ
#[rustfmt::skip]
pub const PRESCRIPTION_NOTES_SEQUENCE: Tag = Tag(0x3010, 0x0081);
/// IntendedFractionStartTime (3010,0085) TM
#[rustfmt::skip]
pub const INTENDED_FRACTION_START_TIME: Tag = Tag(0x3010, 0x0085);
/// Arbitrary (4000,0010) LT
#[rustfmt::skip]
pub const ARBITRARY: Tag = Tag(0x4000, 0x0010);
/// TextComments (4000,4000) LT
#[rustfmt::skip]
pub const TEXT_COMMENTS: Tag = Tag(0x4000, 0x4000);
/// ResultsID (4008,0040) SH
#[rustfmt::skip]
pub const RESULTS_ID: Tag = Tag(0x4008, 0x0040);
/// ResultsIDIssuer (4008,0042) LO
#[rustfmt::skip]
pub const RESULTS_ID_ISSUER: Tag = Tag(0x4008, 0x0042);
/// InterpretationRecordedDate (4008,0100) DA
#[rustfmt::skip]
pub const INTERPRETATION_RECORDED_DATE: Tag = Tag(0x4008, 0x0100);
/// InterpretationRecordedTime (4008,0101) TM
#[rustfmt::skip]
pub const INTERPRETATION_RECORDED_TIME: Tag = Tag(0x4008, 0x0101);
/// InterpretationRecorder (4008,0102) PN
#[rustfmt::skip]
pub const INTERPRETATION_RECORDER: Tag = Tag(0x4008, 0x0102);
/// InterpretationTranscriptionDate (4008,0108) DA
#[rustfmt::skip]
pub const INTERPRETATION_TRANSCRIPTION_DATE: Tag = Tag(0x4008, 0x0108);
/// InterpretationTranscriptionTime (4008,0109) TM
#[rustfmt::skip]
pub const INTERPRETATION_TRANSCRIPTION_TIME: Tag = Tag(0x4008, 0x0109);
/// InterpretationTranscriber (4008,010A) PN
#[rustfmt::skip]
pub const INTERPRETATION_TRANSCRIBER: Tag = Tag(0x4008, 0x010A);
/// InterpretationText (4008,010B) ST
#[rustfmt::skip]
pub const INTERPRETATION_TEXT: Tag = Tag(0x4008, 0x010B);
/// InterpretationAuthor (4008,010C) PN
#[rustfmt::skip]
pub const INTERPRETATION_AUTHOR: Tag = Tag(0x4008, 0x010C);
/// InterpretationApproverSequence (4008,0111) SQ
#[rustfmt::skip]
pub const INTERPRETATION_APPROVER_SEQUENCE: Tag = Tag(0x4008, 0x0111);
/// InterpretationApprovalDate (4008,0112) DA
#[rustfmt::skip]
pub const INTERPRETATION_APPROVAL_DATE: Tag = Tag(0x4008, 0x0112);
/// InterpretationApprovalTime (4008,0113) TM
#[rustfmt::skip]
pub const INTERPRETATION_APPROVAL_TIME: Tag = Tag(0x4008, 0x0113);
/// PhysicianApprovingInterpretation (4008,0114) PN
#[rustfmt::skip]
pub const PHYSICIAN_APPROVING_INTERPRETATION: Tag = Tag(0x4008, 0x0114);
/// InterpretationDiagnosisDescription (4008,0115) LT
#[rustfmt::skip]
pub const INTERPRETATION_DIAGNOSIS_DESCRIPTION: Tag = Tag(0x4008, 0x0115);
/// ResultsDistributionListSequence (4008,0118) SQ
#[rustfmt::skip]
pub const RESULTS_DISTRIBUTION_LIST_SEQUENCE: Tag = Tag(0x4008, 0x0118);
/// DistributionName (4008,0119) PN
#[rustfmt::skip]
pub const DISTRIBUTION_NAME: Tag = Tag(0x4008, 0x0119);
/// DistributionAddress (4008,011A) LO
#[rustfmt::skip]
pub const DISTRIBUTION_ADDRESS: Tag = Tag(0x4008, 0x011A);
/// InterpretationID (4008,0200) SH
#[rustfmt::skip]
pub const INTERPRETATION_ID: Tag = Tag(0x4008, 0x0200);
/// InterpretationIDIssuer (4008,0202) LO
#[rustfmt::skip]
pub const INTERPRETATION_ID_ISSUER: Tag = Tag(0x4008, 0x0202);
/// Impressions (4008,0300) ST
#[rustfmt::skip]
pub const IMPRESSIONS: Tag = Tag(0x4008, 0x0300);
/// ResultsComments (4008,4000) ST
#[rustfmt::skip]
pub const RESULTS_COMMENTS: Tag = Tag(0x4008, 0x4000);
/// PixelData (7FE0,0010) OW
#[rustfmt::skip]
pub const PIXEL_DATA: Tag = Tag(0x7FE0, 0x0010);
/// DigitalSignaturesSequence (FFFA,FFFA) SQ
#[rustfmt::skip]
pub const DIGITAL_SIGNATURES_SEQUENCE: Tag = Tag(0xFFFA, 0xFFFA);
/// DataSetTrailingPadding (FFFC,FFFC) OB
#[rustfmt::skip]
pub const DATA_SET_TRAILING_PADDING: Tag = Tag(0xFFFC, 0xFFFC);
/// Item (FFFE,E000) UN
#[rustfmt::skip]
pub const ITEM: Tag = Tag(0xFFFE, 0xE000);
/// ItemDelimitationItem (FFFE,E00D) UN
#[rustfmt::skip]
pub const ITEM_DELIMITATION_ITEM: Tag = Tag(0xFFFE, 0xE00D);
/// SequenceDelimitationItem (FFFE,E0DD) UN
#[rustfmt::skip]
pub const SEQUENCE_DELIMITATION_ITEM: Tag = Tag(0xFFFE, 0xE0DD);

type E = DataDictionaryEntryRef<'static>;

#[rustfmt::skip]
pub(crate) const ENTRIES: &[E] = &[
    E { tag: AFFECTED_SOP_INSTANCE_UID, alias: "AffectedSOPInstanceUID", vr: UI },
    E { tag: REQUESTED_SOP_INSTANCE_UID, alias: "RequestedSOPInstanceUID", vr: UI },
    E { tag: FILE_META_INFORMATION_GROUP_LENGTH, alias: "FileMetaInformationGroupLength", vr: UL },
    E { tag: FILE_META_INFORMATION_VERSION, alias: "FileMetaInformationVersion", vr: OB },
    E { tag: MEDIA_STORAGE_SOP_CLASS_UID, alias: "MediaStorageSOPClassUID", vr: UI },
    E { tag: MEDIA_STORAGE_SOP_INSTANCE_UID, alias: "MediaStorageSOPInstanceUID", vr: UI },
    E { tag: TRANSFER_SYNTAX_UID, alias: "TransferSyntaxUID", vr: UI },
    E { tag: IMPLEMENTATION_CLASS_UID, alias: "ImplementationClassUID", vr: UI },
    E { tag: IMPLEMENTATION_VERSION_NAME, alias: "ImplementationVersionName", vr: SH },
    E { tag: SOURCE_APPLICATION_ENTITY_TITLE, alias: "SourceApplicationEntityTitle", vr: AE },
    E { tag: SENDING_APPLICATION_ENTITY_TITLE, alias: "SendingApplicationEntityTitle", vr: AE },
    E { tag: RECEIVING_APPLICATION_ENTITY_TITLE, alias: "ReceivingApplicationEntityTitle", vr: AE },
    E { tag: PRIVATE_INFORMATION_CREATOR_UID, alias: "PrivateInformationCreatorUID", vr: UI },
    E { tag: PRIVATE_INFORMATION, alias: "PrivateInformation", vr: OB },
    E { tag: REFERENCED_SOP_INSTANCE_UID_IN_FILE, alias: "ReferencedSOPInstanceUIDInFile", vr: UI },
    E { tag: SPECIFIC_CHARACTER_SET, alias: "SpecificCharacterSet", vr: CS },
    E { tag: IMAGE_TYPE, alias: "ImageType", vr: CS },
    E { tag: INSTANCE_CREATION_DATE, alias: "InstanceCreationDate", vr: DA },
    E { tag: INSTANCE_CREATION_TIME, alias: "InstanceCreationTime", vr: TM },
    E { tag: INSTANCE_CREATOR_UID, alias: "InstanceCreatorUID", vr: UI },
    E { tag: INSTANCE_COERCION_DATE_TIME, alias: "InstanceCoercionDateTime", vr: DT },
    E { tag: SOP_CLASS_UID, alias: "SOPClassUID", vr: UI },
    E { tag: ACQUISITION_UID, alias: "AcquisitionUID", vr: UI },
    E { tag: SOP_INSTANCE_UID, alias: "SOPInstanceUID", vr: UI },
    E { tag: PYRAMID_UID, alias: "PyramidUID", vr: UI },
    E { tag: STUDY_DATE, alias: "StudyDate", vr: DA },
    E { tag: SERIES_DATE, alias: "SeriesDate", vr: DA },
    E { tag: ACQUISITION_DATE, alias: "AcquisitionDate", vr: DA },
    E { tag: CONTENT_DATE, alias: "ContentDate", vr: DA },
    E { tag: OVERLAY_DATE, alias: "OverlayDate", vr: DA },
    E { tag: CURVE_DATE, alias: "CurveDate", vr: DA },
    E { tag: ACQUISITION_DATE_TIME, alias: "AcquisitionDateTime", vr: DT },
    E { tag: STUDY_TIME, alias: "StudyTime", vr: TM },
    E { tag: SERIES_TIME, alias: "SeriesTime", vr: TM },
    E { tag: ACQUISITION_TIME, alias: "AcquisitionTime", vr: TM },
    E { tag: CONTENT_TIME, alias: "ContentTime", vr: TM },
    E { tag: OVERLAY_TIME, alias: "OverlayTime", vr: TM },
    E { tag: CURVE_TIME, alias: "CurveTime", vr: TM },
    E { tag: ACCESSION_NUMBER, alias: "AccessionNumber", vr: SH },
    E { tag: RETRIEVE_AE_TITLE, alias: "RetrieveAETitle", vr: AE },
    E { tag: STATION_AE_TITLE, alias: "StationAETitle", vr: AE },
    E { tag: FAILED_SOP_INSTANCE_UID_LIST, alias: "FailedSOPInstanceUIDList", vr: UI },
    E { tag: MODALITY, alias: "Modality", vr: CS },
    E { tag: CONVERSION_TYPE, alias: "ConversionType", vr: CS },
    E { tag: MANUFACTURER, alias: "Manufacturer", vr: LO },
    E { tag: INSTITUTION_NAME, alias: "InstitutionName", vr: LO },
    E { tag: INSTITUTION_ADDRESS, alias: "InstitutionAddress", vr: ST },
    E { tag: INSTITUTION_CODE_SEQUENCE, alias: "InstitutionCodeSequence", vr: SQ },
    E { tag: REFERRING_PHYSICIAN_NAME, alias: "ReferringPhysicianName", vr: PN },
    E { tag: REFERRING_PHYSICIAN_ADDRESS, alias: "ReferringPhysicianAddress", vr: ST },
    E { tag: REFERRING_PHYSICIAN_TELEPHONE_NUMBERS, alias: "ReferringPhysicianTelephoneNumbers", vr: SH },
    E { tag: REFERRING_PHYSICIAN_IDENTIFICATION_SEQUENCE, alias: "ReferringPhysicianIdentificationSequence", vr: SQ },
    E { tag: CONSULTING_PHYSICIAN_NAME, alias: "ConsultingPhysicianName", vr: PN },
    E { tag: CONSULTING_PHYSICIAN_IDENTIFICATION_SEQUENCE, alias: "ConsultingPhysicianIdentificationSequence", vr: SQ },
    E { tag: CODE_VALUE, alias: "CodeValue", vr: SH },
    E { tag: CODING_SCHEME_DESIGNATOR, alias: "CodingSchemeDesignator", vr: SH },
    E { tag: CODING_SCHEME_VERSION, alias: "CodingSchemeVersion", vr: SH },
    E { tag: CODE_MEANING, alias: "CodeMeaning", vr: LO },
    E { tag: CONTEXT_GROUP_VERSION, alias: "ContextGroupVersion", vr: DT },
    E { tag: CONTEXT_GROUP_LOCAL_VERSION, alias: "ContextGroupLocalVersion", vr: DT },
    E { tag: CONTEXT_GROUP_EXTENSION_FLAG, alias: "ContextGroupExtensionFlag", vr: CS },
    E { tag: CONTEXT_IDENTIFIER, alias: "ContextIdentifier", vr: CS },
    E { tag: TIMEZONE_OFFSET_FROM_UTC, alias: "TimezoneOffsetFromUTC", vr: SH },
    E { tag: NETWORK_ID, alias: "NetworkID", vr: AE },
    E { tag: STATION_NAME, alias: "StationName", vr: SH },
    E { tag: STUDY_DESCRIPTION, alias: "StudyDescription", vr: LO },
    E { tag: SERIES_DESCRIPTION, alias: "SeriesDescription", vr: LO },
    E { tag: INSTITUTIONAL_DEPARTMENT_NAME, alias: "InstitutionalDepartmentName", vr: LO },
    E { tag: INSTITUTIONAL_DEPARTMENT_TYPE_CODE_SEQUENCE, alias: "InstitutionalDepartmentTypeCodeSequence", vr: SQ },
    E { tag: PHYSICIANS_OF_RECORD, alias: "PhysiciansOfRecord", vr: PN },
    E { tag: PHYSICIANS_OF_RECORD_IDENTIFICATION_SEQUENCE, alias: "PhysiciansOfRecordIdentificationSequence", vr: SQ },
    E { tag: PERFORMING_PHYSICIAN_NAME, alias: "PerformingPhysicianName", vr: PN },
    E { tag: PERFORMING_PHYSICIAN_IDENTIFICATION_SEQUENCE, alias: "PerformingPhysicianIdentificationSequence", vr: SQ },
    E { tag: NAME_OF_PHYSICIANS_READING_STUDY, alias: "NameOfPhysiciansReadingStudy", vr: PN },
    E { tag: PHYSICIANS_READING_STUDY_IDENTIFICATION_SEQUENCE, alias: "PhysiciansReadingStudyIdentificationSequence", vr: SQ },
    E { tag: OPERATORS_NAME, alias: "OperatorsName", vr: PN },
    E { tag: OPERATOR_IDENTIFICATION_SEQUENCE, alias: "OperatorIdentificationSequence", vr: SQ },
    E { tag: ADMITTING_DIAGNOSES_DESCRIPTION, alias: "AdmittingDiagnosesDescription", vr: LO },
    E { tag: ADMITTING_DIAGNOSES_CODE_SEQUENCE, alias: "AdmittingDiagnosesCodeSequence", vr: SQ },
    E { tag: PYRAMID_DESCRIPTION, alias: "PyramidDescription", vr: LO },
    E { tag: MANUFACTURER_MODEL_NAME, alias: "ManufacturerModelName", vr: LO },
    E { tag: REFERENCED_STUDY_SEQUENCE, alias: "ReferencedStudySequence", vr: SQ },
    E { tag: REFERENCED_PERFORMED_PROCEDURE_STEP_SEQUENCE, alias: "ReferencedPerformedProcedureStepSequence", vr: SQ },
    E { tag: REFERENCED_SERIES_SEQUENCE, alias: "ReferencedSeriesSequence", vr: SQ },
    E { tag: REFERENCED_PATIENT_SEQUENCE, alias: "ReferencedPatientSequence", vr: SQ },
    E { tag: REFERENCED_VISIT_SEQUENCE, alias: "ReferencedVisitSequence", vr: SQ },
    E { tag: REFERENCED_IMAGE_SEQUENCE, alias: "ReferencedImageSequence", vr: SQ },
    E { tag: REFERENCED_INSTANCE_SEQUENCE, alias: "ReferencedInstanceSequence", vr: SQ },
    E { tag: REFERENCED_SOP_CLASS_UID, alias: "ReferencedSOPClassUID", vr: UI },
    E { tag: REFERENCED_SOP_INSTANCE_UID, alias: "ReferencedSOPInstanceUID", vr: UI },
    E { tag: REFERENCED_FRAME_NUMBER, alias: "ReferencedFrameNumber", vr: IS },
    E { tag: TRANSACTION_UID, alias: "TransactionUID", vr: UI },
    E { tag: REFERENCED_SOP_SEQUENCE, alias: "ReferencedSOPSequence", vr: SQ },
    E { tag: STUDIES_CONTAINING_OTHER_REFERENCED_INSTANCES_SEQUENCE, alias: "StudiesContainingOtherReferencedInstancesSequence", vr: SQ },
    E { tag: RELATED_SERIES_SEQUENCE, alias: "RelatedSeriesSequence", vr: SQ },
    E { tag: DERIVATION_DESCRIPTION, alias: "DerivationDescription", vr: ST },
    E { tag: SOURCE_IMAGE_SEQUENCE, alias: "SourceImageSequence", vr: SQ },
    E { tag: IRRADIATION_EVENT_UID, alias: "IrradiationEventUID", vr: UI },
    E { tag: IDENTIFYING_COMMENTS, alias: "IdentifyingComments", vr: LT },
    E { tag: REFERENCED_RAW_DATA_SEQUENCE, alias: "ReferencedRawDataSequence", vr: SQ },
    E { tag: DERIVATION_IMAGE_SEQUENCE, alias: "DerivationImageSequence", vr: SQ },
    E { tag: PATIENT_NAME, alias: "PatientName", vr: PN },
    E { tag: PATIENT_ID, alias: "PatientID", vr: LO },
    E { tag: ISSUER_OF_PATIENT_ID, alias: "IssuerOfPatientID", vr: LO },
    E { tag: PATIENT_BIRTH_DATE, alias: "PatientBirthDate", vr: DA },
    E { tag: PATIENT_BIRTH_TIME, alias: "PatientBirthTime", vr: TM },
    E { tag: PATIENT_SEX, alias: "PatientSex", vr: CS },
    E { tag: PATIENT_INSURANCE_PLAN_CODE_SEQUENCE, alias: "PatientInsurancePlanCodeSequence", vr: SQ },
    E { tag: PATIENT_PRIMARY_LANGUAGE_CODE_SEQUENCE, alias: "PatientPrimaryLanguageCodeSequence", vr: SQ },
    E { tag: PATIENT_PRIMARY_LANGUAGE_MODIFIER_CODE_SEQUENCE, alias: "PatientPrimaryLanguageModifierCodeSequence", vr: SQ },
    E { tag: OTHER_PATIENT_I_DS, alias: "OtherPatientIDs", vr: LO },
    E { tag: OTHER_PATIENT_NAMES, alias: "OtherPatientNames", vr: PN },
    E { tag: OTHER_PATIENT_I_DS_SEQUENCE, alias: "OtherPatientIDsSequence", vr: SQ },
    E { tag: PATIENT_BIRTH_NAME, alias: "PatientBirthName", vr: PN },
    E { tag: PATIENT_AGE, alias: "PatientAge", vr: AS },
    E { tag: PATIENT_SIZE, alias: "PatientSize", vr: DS },
    E { tag: PATIENT_WEIGHT, alias: "PatientWeight", vr: DS },
    E { tag: PATIENT_ADDRESS, alias: "PatientAddress", vr: LO },
    E { tag: INSURANCE_PLAN_IDENTIFICATION, alias: "InsurancePlanIdentification", vr: LO },
    E { tag: PATIENT_MOTHER_BIRTH_NAME, alias: "PatientMotherBirthName", vr: PN },
    E { tag: MILITARY_RANK, alias: "MilitaryRank", vr: LO },
    E { tag: BRANCH_OF_SERVICE, alias: "BranchOfService", vr: LO },
    E { tag: MEDICAL_RECORD_LOCATOR, alias: "MedicalRecordLocator", vr: LO },
    E { tag: REFERENCED_PATIENT_PHOTO_SEQUENCE, alias: "ReferencedPatientPhotoSequence", vr: SQ },
    E { tag: MEDICAL_ALERTS, alias: "MedicalAlerts", vr: LO },
    E { tag: ALLERGIES, alias: "Allergies", vr: LO },
    E { tag: COUNTRY_OF_RESIDENCE, alias: "CountryOfResidence", vr: LO },
    E { tag: REGION_OF_RESIDENCE, alias: "RegionOfResidence", vr: LO },
    E { tag: PATIENT_TELEPHONE_NUMBERS, alias: "PatientTelephoneNumbers", vr: SH },
    E { tag: PATIENT_TELECOM_INFORMATION, alias: "PatientTelecomInformation", vr: LT },
    E { tag: ETHNIC_GROUP, alias: "EthnicGroup", vr: SH },
    E { tag: OCCUPATION, alias: "Occupation", vr: SH },
    E { tag: SMOKING_STATUS, alias: "SmokingStatus", vr: CS },
    E { tag: ADDITIONAL_PATIENT_HISTORY, alias: "AdditionalPatientHistory", vr: LT },
    E { tag: PREGNANCY_STATUS, alias: "PregnancyStatus", vr: US },
    E { tag: LAST_MENSTRUAL_DATE, alias: "LastMenstrualDate", vr: DA },
    E { tag: PATIENT_RELIGIOUS_PREFERENCE, alias: "PatientReligiousPreference", vr: LO },
    E { tag: PATIENT_SEX_NEUTERED, alias: "PatientSexNeutered", vr: CS },
    E { tag: RESPONSIBLE_PERSON, alias: "ResponsiblePerson", vr: PN },
    E { tag: RESPONSIBLE_ORGANIZATION, alias: "ResponsibleOrganization", vr: LO },
    E { tag: PATIENT_COMMENTS, alias: "PatientComments", vr: LT },
    E { tag: CLINICAL_TRIAL_SPONSOR_NAME, alias: "ClinicalTrialSponsorName", vr: LO },
    E { tag: CLINICAL_TRIAL_PROTOCOL_ID, alias: "ClinicalTrialProtocolID", vr: LO },
    E { tag: CLINICAL_TRIAL_PROTOCOL_NAME, alias: "ClinicalTrialProtocolName", vr: LO },
    E { tag: CLINICAL_TRIAL_SITE_ID, alias: "ClinicalTrialSiteID", vr: LO },
    E { tag: CLINICAL_TRIAL_SITE_NAME, alias: "ClinicalTrialSiteName", vr: LO },
    E { tag: CLINICAL_TRIAL_SUBJECT_ID, alias: "ClinicalTrialSubjectID", vr: LO },
    E { tag: CLINICAL_TRIAL_SUBJECT_READING_ID, alias: "ClinicalTrialSubjectReadingID", vr: LO },
    E { tag: CLINICAL_TRIAL_TIME_POINT_ID, alias: "ClinicalTrialTimePointID", vr: LO },
    E { tag: CLINICAL_TRIAL_TIME_POINT_DESCRIPTION, alias: "ClinicalTrialTimePointDescription", vr: ST },
    E { tag: CLINICAL_TRIAL_COORDINATING_CENTER_NAME, alias: "ClinicalTrialCoordinatingCenterName", vr: LO },
    E { tag: PATIENT_IDENTITY_REMOVED, alias: "PatientIdentityRemoved", vr: CS },
    E { tag: DEIDENTIFICATION_METHOD, alias: "DeidentificationMethod", vr: LO },
    E { tag: DEIDENTIFICATION_METHOD_CODE_SEQUENCE, alias: "DeidentificationMethodCodeSequence", vr: SQ },
    E { tag: CLINICAL_TRIAL_SERIES_ID, alias: "ClinicalTrialSeriesID", vr: LO },
    E { tag: CLINICAL_TRIAL_SERIES_DESCRIPTION, alias: "ClinicalTrialSeriesDescription", vr: LO },
    E { tag: CLINICAL_TRIAL_PROTOCOL_ETHICS_COMMITTEE_NAME, alias: "ClinicalTrialProtocolEthicsCommitteeName", vr: LO },
    E { tag: CLINICAL_TRIAL_PROTOCOL_ETHICS_COMMITTEE_APPROVAL_NUMBER, alias: "ClinicalTrialProtocolEthicsCommitteeApprovalNumber", vr: LO },
    E { tag: ETHICS_COMMITTEE_APPROVAL_EFFECTIVENESS_START_DATE, alias: "EthicsCommitteeApprovalEffectivenessStartDate", vr: DA },
    E { tag: ETHICS_COMMITTEE_APPROVAL_EFFECTIVENESS_END_DATE, alias: "EthicsCommitteeApprovalEffectivenessEndDate", vr: DA },
    E { tag: CALIBRATION_TIME, alias: "CalibrationTime", vr: TM },
    E { tag: CALIBRATION_DATE, alias: "CalibrationDate", vr: DA },
    E { tag: MAKER_NOTE, alias: "MakerNote", vr: OB },
    E { tag: DEVICE_SETTING_DESCRIPTION, alias: "DeviceSettingDescription", vr: OB },
    E { tag: CAMERA_OWNER_NAME, alias: "CameraOwnerName", vr: UT },
    E { tag: LENS_SPECIFICATION, alias: "LensSpecification", vr: DS },
    E { tag: LENS_MAKE, alias: "LensMake", vr: UT },
    E { tag: LENS_MODEL, alias: "LensModel", vr: UT },
    E { tag: LENS_SERIAL_NUMBER, alias: "LensSerialNumber", vr: UT },
    E { tag: GPS_VERSION_ID, alias: "GPSVersionID", vr: OB },
    E { tag: GPS_LATITUDE_REF, alias: "GPSLatitudeRef", vr: SH },
    E { tag: GPS_LATITUDE, alias: "GPSLatitude", vr: DS },
    E { tag: GPS_LONGITUDE_REF, alias: "GPSLongitudeRef", vr: SH },
    E { tag: GPS_LONGITUDE, alias: "GPSLongitude", vr: DS },
    E { tag: GPS_ALTITUDE_REF, alias: "GPSAltitudeRef", vr: US },
    E { tag: GPS_ALTITUDE, alias: "GPSAltitude", vr: DS },
    E { tag: GPS_TIME_STAMP, alias: "GPSTimeStamp", vr: DT },
    E { tag: GPS_SATELLITES, alias: "GPSSatellites", vr: UT },
    E { tag: GPS_STATUS, alias: "GPSStatus", vr: SH },
    E { tag: GPS_MEASURE_MODE, alias: "GPSMeasureMode", vr: CS },
    E { tag: GPSDOP, alias: "GPSDOP", vr: DS },
    E { tag: GPS_SPEED_REF, alias: "GPSSpeedRef", vr: SH },
    E { tag: GPS_SPEED, alias: "GPSSpeed", vr: DS },
    E { tag: GPS_TRACK_REF, alias: "GPSTrackRef", vr: SH },
    E { tag: GPS_TRACK, alias: "GPSTrack", vr: DS },
    E { tag: GPS_IMG_DIRECTION_REF, alias: "GPSImgDirectionRef", vr: SH },
    E { tag: GPS_IMG_DIRECTION, alias: "GPSImgDirection", vr: DS },
    E { tag: GPS_MAP_DATUM, alias: "GPSMapDatum", vr: UT },
    E { tag: GPS_DEST_LATITUDE_REF, alias: "GPSDestLatitudeRef", vr: SH },
    E { tag: GPS_DEST_LATITUDE, alias: "GPSDestLatitude", vr: DS },
    E { tag: GPS_DEST_LONGITUDE_REF, alias: "GPSDestLongitudeRef", vr: SH },
    E { tag: GPS_DEST_LONGITUDE, alias: "GPSDestLongitude", vr: DS },
    E { tag: GPS_DEST_BEARING_REF, alias: "GPSDestBearingRef", vr: SH },
    E { tag: GPS_DEST_BEARING, alias: "GPSDestBearing", vr: DS },
    E { tag: GPS_DEST_DISTANCE_REF, alias: "GPSDestDistanceRef", vr: SH },
    E { tag: GPS_DEST_DISTANCE, alias: "GPSDestDistance", vr: DS },
    E { tag: GPS_PROCESSING_METHOD, alias: "GPSProcessingMethod", vr: OB },
    E { tag: GPS_AREA_INFORMATION, alias: "GPSAreaInformation", vr: OB },
    E { tag: GPS_DATE_STAMP, alias: "GPSDateStamp", vr: DT },
    E { tag: GPS_DIFFERENTIAL, alias: "GPSDifferential", vr: US },
    E { tag: CONTRAST_BOLUS_AGENT, alias: "ContrastBolusAgent", vr: LO },
    E { tag: BODY_PART_EXAMINED, alias: "BodyPartExamined", vr: CS },
    E { tag: INTERVENTION_DRUG_STOP_TIME, alias: "InterventionDrugStopTime", vr: TM },
    E { tag: INTERVENTION_DRUG_START_TIME, alias: "InterventionDrugStartTime", vr: TM },
    E { tag: SLICE_THICKNESS, alias: "SliceThickness", vr: DS },
    E { tag: KVP, alias: "KVP", vr: DS },
    E { tag: SPACING_BETWEEN_SLICES, alias: "SpacingBetweenSlices", vr: DS },
    E { tag: DEVICE_SERIAL_NUMBER, alias: "DeviceSerialNumber", vr: LO },
    E { tag: DEVICE_UID, alias: "DeviceUID", vr: UI },
    E { tag: PLATE_ID, alias: "PlateID", vr: LO },
    E { tag: GENERATOR_ID, alias: "GeneratorID", vr: LO },
    E { tag: CASSETTE_ID, alias: "CassetteID", vr: LO },
    E { tag: GANTRY_ID, alias: "GantryID", vr: LO },
    E { tag: UNIQUE_DEVICE_IDENTIFIER, alias: "UniqueDeviceIdentifier", vr: UT },
    E { tag: UDI_SEQUENCE, alias: "UDISequence", vr: SQ },
    E { tag: MANUFACTURER_DEVICE_CLASS_UID, alias: "ManufacturerDeviceClassUID", vr: UI },
    E { tag: DATE_OF_SECONDARY_CAPTURE, alias: "DateOfSecondaryCapture", vr: DA },
    E { tag: TIME_OF_SECONDARY_CAPTURE, alias: "TimeOfSecondaryCapture", vr: TM },
    E { tag: SOFTWARE_VERSIONS, alias: "SoftwareVersions", vr: LO },
    E { tag: PROTOCOL_NAME, alias: "ProtocolName", vr: LO },
    E { tag: CONTRAST_BOLUS_START_TIME, alias: "ContrastBolusStartTime", vr: TM },
    E { tag: CONTRAST_BOLUS_STOP_TIME, alias: "ContrastBolusStopTime", vr: TM },
    E { tag: RADIOPHARMACEUTICAL_START_TIME, alias: "RadiopharmaceuticalStartTime", vr: TM },
    E { tag: RADIOPHARMACEUTICAL_STOP_TIME, alias: "RadiopharmaceuticalStopTime", vr: TM },
    E { tag: RADIOPHARMACEUTICAL_START_DATE_TIME, alias: "RadiopharmaceuticalStartDateTime", vr: DT },
    E { tag: RADIOPHARMACEUTICAL_STOP_DATE_TIME, alias: "RadiopharmaceuticalStopDateTime", vr: DT },
    E { tag: EXPOSURE_TIME, alias: "ExposureTime", vr: IS },
    E { tag: X_RAY_TUBE_CURRENT, alias: "XRayTubeCurrent", vr: IS },
    E { tag: EXPOSURE, alias: "Exposure", vr: IS },
    E { tag: ACQUISITION_FIELD_OF_VIEW_LABEL, alias: "AcquisitionFieldOfViewLabel", vr: LO },
    E { tag: DATE_OF_LAST_CALIBRATION, alias: "DateOfLastCalibration", vr: DA },
    E { tag: TIME_OF_LAST_CALIBRATION, alias: "TimeOfLastCalibration", vr: TM },
    E { tag: DATE_TIME_OF_LAST_CALIBRATION, alias: "DateTimeOfLastCalibration", vr: DT },
    E { tag: CALIBRATION_DATE_TIME, alias: "CalibrationDateTime", vr: DT },
    E { tag: ACQUISITION_DEVICE_PROCESSING_DESCRIPTION, alias: "AcquisitionDeviceProcessingDescription", vr: LO },
    E { tag: TARGET_UID, alias: "TargetUID", vr: UI },
    E { tag: ACQUISITION_COMMENTS, alias: "AcquisitionComments", vr: LT },
    E { tag: TRANSDUCER_IDENTIFICATION_SEQUENCE, alias: "TransducerIdentificationSequence", vr: SQ },
    E { tag: PATIENT_POSITION, alias: "PatientPosition", vr: CS },
    E { tag: DETECTOR_ID, alias: "DetectorID", vr: SH },
    E { tag: DATE_OF_LAST_DETECTOR_CALIBRATION, alias: "DateOfLastDetectorCalibration", vr: DA },
    E { tag: TIME_OF_LAST_DETECTOR_CALIBRATION, alias: "TimeOfLastDetectorCalibration", vr: TM },
    E { tag: FRAME_ACQUISITION_DATE_TIME, alias: "FrameAcquisitionDateTime", vr: DT },
    E { tag: FRAME_REFERENCE_DATE_TIME, alias: "FrameReferenceDateTime", vr: DT },
    E { tag: RESPIRATORY_MOTION_COMPENSATION_TECHNIQUE_DESCRIPTION, alias: "RespiratoryMotionCompensationTechniqueDescription", vr: ST },
    E { tag: X_RAY_SOURCE_ID, alias: "XRaySourceID", vr: UT },
    E { tag: SOURCE_START_DATE_TIME, alias: "SourceStartDateTime", vr: DT },
    E { tag: SOURCE_END_DATE_TIME, alias: "SourceEndDateTime", vr: DT },
    E { tag: X_RAY_DETECTOR_ID, alias: "XRayDetectorID", vr: UT },
    E { tag: X_RAY_DETECTOR_LABEL, alias: "XRayDetectorLabel", vr: ST },
    E { tag: MULTI_ENERGY_ACQUISITION_DESCRIPTION, alias: "MultiEnergyAcquisitionDescription", vr: UT },
    E { tag: DECOMPOSITION_DESCRIPTION, alias: "DecompositionDescription", vr: ST },
    E { tag: ACQUISITION_PROTOCOL_DESCRIPTION, alias: "AcquisitionProtocolDescription", vr: LT },
    E { tag: START_ACQUISITION_DATE_TIME, alias: "StartAcquisitionDateTime", vr: DT },
    E { tag: END_ACQUISITION_DATE_TIME, alias: "EndAcquisitionDateTime", vr: DT },
    E { tag: FUNCTIONAL_SYNC_PULSE, alias: "FunctionalSyncPulse", vr: DT },
    E { tag: DECAY_CORRECTION_DATE_TIME, alias: "DecayCorrectionDateTime", vr: DT },
    E { tag: EXCLUSION_START_DATE_TIME, alias: "ExclusionStartDateTime", vr: DT },
    E { tag: INSTRUCTION_PERFORMED_DATE_TIME, alias: "InstructionPerformedDateTime", vr: DT },
    E { tag: REQUESTED_SERIES_DESCRIPTION, alias: "RequestedSeriesDescription", vr: LO },
    E { tag: CONTRIBUTION_DATE_TIME, alias: "ContributionDateTime", vr: DT },
    E { tag: CONTRIBUTION_DESCRIPTION, alias: "ContributionDescription", vr: ST },
    E { tag: STUDY_INSTANCE_UID, alias: "StudyInstanceUID", vr: UI },
    E { tag: SERIES_INSTANCE_UID, alias: "SeriesInstanceUID", vr: UI },
    E { tag: STUDY_ID, alias: "StudyID", vr: SH },
    E { tag: SERIES_NUMBER, alias: "SeriesNumber", vr: IS },
    E { tag: ACQUISITION_NUMBER, alias: "AcquisitionNumber", vr: IS },
    E { tag: INSTANCE_NUMBER, alias: "InstanceNumber", vr: IS },
    E { tag: PATIENT_ORIENTATION, alias: "PatientOrientation", vr: CS },
    E { tag: PYRAMID_LABEL, alias: "PyramidLabel", vr: LO },
    E { tag: IMAGE_POSITION_PATIENT, alias: "ImagePositionPatient", vr: DS },
    E { tag: IMAGE_ORIENTATION_PATIENT, alias: "ImageOrientationPatient", vr: DS },
    E { tag: FRAME_OF_REFERENCE_UID, alias: "FrameOfReferenceUID", vr: UI },
    E { tag: SYNCHRONIZATION_FRAME_OF_REFERENCE_UID, alias: "SynchronizationFrameOfReferenceUID", vr: UI },
    E { tag: POSITION_REFERENCE_INDICATOR, alias: "PositionReferenceIndicator", vr: LO },
    E { tag: SLICE_LOCATION, alias: "SliceLocation", vr: DS },
    E { tag: MODIFYING_DEVICE_ID, alias: "ModifyingDeviceID", vr: CS },
    E { tag: MODIFIED_IMAGE_DATE, alias: "ModifiedImageDate", vr: DA },
    E { tag: MODIFYING_DEVICE_MANUFACTURER, alias: "ModifyingDeviceManufacturer", vr: LO },
    E { tag: MODIFIED_IMAGE_TIME, alias: "ModifiedImageTime", vr: TM },
    E { tag: MODIFIED_IMAGE_DESCRIPTION, alias: "ModifiedImageDescription", vr: LO },
    E { tag: IMAGE_COMMENTS, alias: "ImageComments", vr: LT },
    E { tag: FRAME_COMMENTS, alias: "FrameComments", vr: LT },
    E { tag: CONCATENATION_UID, alias: "ConcatenationUID", vr: UI },
    E { tag: DIMENSION_ORGANIZATION_UID, alias: "DimensionOrganizationUID", vr: UI },
    E { tag: SAMPLES_PER_PIXEL, alias: "SamplesPerPixel", vr: US },
    E { tag: PHOTOMETRIC_INTERPRETATION, alias: "PhotometricInterpretation", vr: CS },
    E { tag: PLANAR_CONFIGURATION, alias: "PlanarConfiguration", vr: US },
    E { tag: NUMBER_OF_FRAMES, alias: "NumberOfFrames", vr: IS },
    E { tag: ROWS, alias: "Rows", vr: US },
    E { tag: COLUMNS, alias: "Columns", vr: US },
    E { tag: PIXEL_SPACING, alias: "PixelSpacing", vr: DS },
    E { tag: BITS_ALLOCATED, alias: "BitsAllocated", vr: US },
    E { tag: BITS_STORED, alias: "BitsStored", vr: US },
    E { tag: HIGH_BIT, alias: "HighBit", vr: US },
    E { tag: PIXEL_REPRESENTATION, alias: "PixelRepresentation", vr: US },
    E { tag: SMALLEST_IMAGE_PIXEL_VALUE, alias: "SmallestImagePixelValue", vr: US },
    E { tag: LARGEST_IMAGE_PIXEL_VALUE, alias: "LargestImagePixelValue", vr: US },
    E { tag: WINDOW_CENTER, alias: "WindowCenter", vr: DS },
    E { tag: WINDOW_WIDTH, alias: "WindowWidth", vr: DS },
    E { tag: RESCALE_INTERCEPT, alias: "RescaleIntercept", vr: DS },
    E { tag: RESCALE_SLOPE, alias: "RescaleSlope", vr: DS },
    E { tag: RESCALE_TYPE, alias: "RescaleType", vr: LO },
    E { tag: RED_PALETTE_COLOR_LOOKUP_TABLE_DESCRIPTOR, alias: "RedPaletteColorLookupTableDescriptor", vr: US },
    E { tag: GREEN_PALETTE_COLOR_LOOKUP_TABLE_DESCRIPTOR, alias: "GreenPaletteColorLookupTableDescriptor", vr: US },
    E { tag: BLUE_PALETTE_COLOR_LOOKUP_TABLE_DESCRIPTOR, alias: "BluePaletteColorLookupTableDescriptor", vr: US },
    E { tag: PALETTE_COLOR_LOOKUP_TABLE_UID, alias: "PaletteColorLookupTableUID", vr: UI },
    E { tag: RED_PALETTE_COLOR_LOOKUP_TABLE_DATA, alias: "RedPaletteColorLookupTableData", vr: OW },
    E { tag: GREEN_PALETTE_COLOR_LOOKUP_TABLE_DATA, alias: "GreenPaletteColorLookupTableData", vr: OW },
    E { tag: BLUE_PALETTE_COLOR_LOOKUP_TABLE_DATA, alias: "BluePaletteColorLookupTableData", vr: OW },
    E { tag: LARGE_PALETTE_COLOR_LOOKUP_TABLE_UID, alias: "LargePaletteColorLookupTableUID", vr: UI },
    E { tag: LOSSY_IMAGE_COMPRESSION, alias: "LossyImageCompression", vr: CS },
    E { tag: IMAGE_PRESENTATION_COMMENTS, alias: "ImagePresentationComments", vr: LT },
    E { tag: STUDY_ID_ISSUER, alias: "StudyIDIssuer", vr: LO },
    E { tag: STUDY_VERIFIED_DATE, alias: "StudyVerifiedDate", vr: DA },
    E { tag: STUDY_VERIFIED_TIME, alias: "StudyVerifiedTime", vr: TM },
    E { tag: STUDY_READ_DATE, alias: "StudyReadDate", vr: DA },
    E { tag: STUDY_READ_TIME, alias: "StudyReadTime", vr: TM },
    E { tag: SCHEDULED_STUDY_START_DATE, alias: "ScheduledStudyStartDate", vr: DA },
    E { tag: SCHEDULED_STUDY_START_TIME, alias: "ScheduledStudyStartTime", vr: TM },
    E { tag: SCHEDULED_STUDY_STOP_DATE, alias: "ScheduledStudyStopDate", vr: DA },
    E { tag: SCHEDULED_STUDY_STOP_TIME, alias: "ScheduledStudyStopTime", vr: TM },
    E { tag: SCHEDULED_STUDY_LOCATION, alias: "ScheduledStudyLocation", vr: LO },
    E { tag: SCHEDULED_STUDY_LOCATION_AE_TITLE, alias: "ScheduledStudyLocationAETitle", vr: AE },
    E { tag: REASON_FOR_STUDY, alias: "ReasonForStudy", vr: LO },
    E { tag: REQUESTING_PHYSICIAN, alias: "RequestingPhysician", vr: PN },
    E { tag: REQUESTING_SERVICE, alias: "RequestingService", vr: LO },
    E { tag: STUDY_ARRIVAL_DATE, alias: "StudyArrivalDate", vr: DA },
    E { tag: STUDY_ARRIVAL_TIME, alias: "StudyArrivalTime", vr: TM },
    E { tag: STUDY_COMPLETION_DATE, alias: "StudyCompletionDate", vr: DA },
    E { tag: STUDY_COMPLETION_TIME, alias: "StudyCompletionTime", vr: TM },
    E { tag: REQUESTED_PROCEDURE_DESCRIPTION, alias: "RequestedProcedureDescription", vr: LO },
    E { tag: REASON_FOR_VISIT, alias: "ReasonForVisit", vr: UT },
    E { tag: REASON_FOR_VISIT_CODE_SEQUENCE, alias: "ReasonForVisitCodeSequence", vr: SQ },
    E { tag: REQUESTED_CONTRAST_AGENT, alias: "RequestedContrastAgent", vr: LO },
    E { tag: STUDY_COMMENTS, alias: "StudyComments", vr: LT },
    E { tag: FLOW_IDENTIFIER_SEQUENCE, alias: "FlowIdentifierSequence", vr: SQ },
    E { tag: FLOW_IDENTIFIER, alias: "FlowIdentifier", vr: OB },
    E { tag: SOURCE_IDENTIFIER, alias: "SourceIdentifier", vr: OB },
    E { tag: FRAME_ORIGIN_TIMESTAMP, alias: "FrameOriginTimestamp", vr: OB },
    E { tag: REFERENCED_PATIENT_ALIAS_SEQUENCE, alias: "ReferencedPatientAliasSequence", vr: SQ },
    E { tag: ADMISSION_ID, alias: "AdmissionID", vr: LO },
    E { tag: ISSUER_OF_ADMISSION_ID, alias: "IssuerOfAdmissionID", vr: LO },
    E { tag: ISSUER_OF_ADMISSION_ID_SEQUENCE, alias: "IssuerOfAdmissionIDSequence", vr: SQ },
    E { tag: SCHEDULED_ADMISSION_DATE, alias: "ScheduledAdmissionDate", vr: DA },
    E { tag: SCHEDULED_ADMISSION_TIME, alias: "ScheduledAdmissionTime", vr: TM },
    E { tag: SCHEDULED_DISCHARGE_DATE, alias: "ScheduledDischargeDate", vr: DA },
    E { tag: SCHEDULED_DISCHARGE_TIME, alias: "ScheduledDischargeTime", vr: TM },
    E { tag: SCHEDULED_PATIENT_INSTITUTION_RESIDENCE, alias: "ScheduledPatientInstitutionResidence", vr: LO },
    E { tag: ADMITTING_DATE, alias: "AdmittingDate", vr: DA },
    E { tag: ADMITTING_TIME, alias: "AdmittingTime", vr: TM },
    E { tag: DISCHARGE_DATE, alias: "DischargeDate", vr: DA },
    E { tag: DISCHARGE_TIME, alias: "DischargeTime", vr: TM },
    E { tag: DISCHARGE_DIAGNOSIS_DESCRIPTION, alias: "DischargeDiagnosisDescription", vr: LO },
    E { tag: SPECIAL_NEEDS, alias: "SpecialNeeds", vr: LO },
    E { tag: SERVICE_EPISODE_ID, alias: "ServiceEpisodeID", vr: LO },
    E { tag: ISSUER_OF_SERVICE_EPISODE_ID, alias: "IssuerOfServiceEpisodeID", vr: LO },
    E { tag: SERVICE_EPISODE_DESCRIPTION, alias: "ServiceEpisodeDescription", vr: LO },
    E { tag: ISSUER_OF_SERVICE_EPISODE_ID_SEQUENCE, alias: "IssuerOfServiceEpisodeIDSequence", vr: SQ },
    E { tag: CURRENT_PATIENT_LOCATION, alias: "CurrentPatientLocation", vr: LO },
    E { tag: PATIENT_INSTITUTION_RESIDENCE, alias: "PatientInstitutionResidence", vr: LO },
    E { tag: PATIENT_STATE, alias: "PatientState", vr: LO },
    E { tag: VISIT_COMMENTS, alias: "VisitComments", vr: LT },
    E { tag: MULTIPLEX_GROUP_UID, alias: "MultiplexGroupUID", vr: UI },
    E { tag: IMPEDANCE_MEASUREMENT_DATE_TIME, alias: "ImpedanceMeasurementDateTime", vr: DT },
    E { tag: WAVEFORM_FILTER_DESCRIPTION, alias: "WaveformFilterDescription", vr: ST },
    E { tag: FILTER_LOOKUP_TABLE_DESCRIPTION, alias: "FilterLookupTableDescription", vr: ST },
    E { tag: SCHEDULED_STATION_AE_TITLE, alias: "ScheduledStationAETitle", vr: AE },
    E { tag: SCHEDULED_PROCEDURE_STEP_START_DATE, alias: "ScheduledProcedureStepStartDate", vr: DA },
    E { tag: SCHEDULED_PROCEDURE_STEP_START_TIME, alias: "ScheduledProcedureStepStartTime", vr: TM },
    E { tag: SCHEDULED_PROCEDURE_STEP_END_DATE, alias: "ScheduledProcedureStepEndDate", vr: DA },
    E { tag: SCHEDULED_PROCEDURE_STEP_END_TIME, alias: "ScheduledProcedureStepEndTime", vr: TM },
    E { tag: SCHEDULED_PERFORMING_PHYSICIAN_NAME, alias: "ScheduledPerformingPhysicianName", vr: PN },
    E { tag: SCHEDULED_PROCEDURE_STEP_DESCRIPTION, alias: "ScheduledProcedureStepDescription", vr: LO },
    E { tag: SCHEDULED_PROCEDURE_STEP_ID, alias: "ScheduledProcedureStepID", vr: SH },
    E { tag: SCHEDULED_PERFORMING_PHYSICIAN_IDENTIFICATION_SEQUENCE, alias: "ScheduledPerformingPhysicianIdentificationSequence", vr: SQ },
    E { tag: SCHEDULED_STATION_NAME, alias: "ScheduledStationName", vr: SH },
    E { tag: SCHEDULED_PROCEDURE_STEP_LOCATION, alias: "ScheduledProcedureStepLocation", vr: SH },
    E { tag: PRE_MEDICATION, alias: "PreMedication", vr: LO },
    E { tag: PERFORMED_STATION_AE_TITLE, alias: "PerformedStationAETitle", vr: AE },
    E { tag: PERFORMED_STATION_NAME, alias: "PerformedStationName", vr: SH },
    E { tag: PERFORMED_LOCATION, alias: "PerformedLocation", vr: SH },
    E { tag: PERFORMED_PROCEDURE_STEP_START_DATE, alias: "PerformedProcedureStepStartDate", vr: DA },
    E { tag: PERFORMED_PROCEDURE_STEP_START_TIME, alias: "PerformedProcedureStepStartTime", vr: TM },
    E { tag: PERFORMED_PROCEDURE_STEP_END_DATE, alias: "PerformedProcedureStepEndDate", vr: DA },
    E { tag: PERFORMED_PROCEDURE_STEP_END_TIME, alias: "PerformedProcedureStepEndTime", vr: TM },
    E { tag: PERFORMED_PROCEDURE_STEP_ID, alias: "PerformedProcedureStepID", vr: SH },
    E { tag: PERFORMED_PROCEDURE_STEP_DESCRIPTION, alias: "PerformedProcedureStepDescription", vr: LO },
    E { tag: REQUEST_ATTRIBUTES_SEQUENCE, alias: "RequestAttributesSequence", vr: SQ },
    E { tag: COMMENTS_ON_THE_PERFORMED_PROCEDURE_STEP, alias: "CommentsOnThePerformedProcedureStep", vr: ST },
    E { tag: COMMENTS_ON_RADIATION_DOSE, alias: "CommentsOnRadiationDose", vr: ST },
    E { tag: SPECIMEN_ACCESSION_NUMBER, alias: "SpecimenAccessionNumber", vr: LO },
    E { tag: CONTAINER_IDENTIFIER, alias: "ContainerIdentifier", vr: LO },
    E { tag: ISSUER_OF_THE_CONTAINER_IDENTIFIER_SEQUENCE, alias: "IssuerOfTheContainerIdentifierSequence", vr: SQ },
    E { tag: CONTAINER_DESCRIPTION, alias: "ContainerDescription", vr: LO },
    E { tag: SPECIMEN_IDENTIFIER, alias: "SpecimenIdentifier", vr: LO },
    E { tag: SPECIMEN_UID, alias: "SpecimenUID", vr: UI },
    E { tag: ACQUISITION_CONTEXT_SEQUENCE, alias: "AcquisitionContextSequence", vr: SQ },
    E { tag: ISSUER_OF_THE_SPECIMEN_IDENTIFIER_SEQUENCE, alias: "IssuerOfTheSpecimenIdentifierSequence", vr: SQ },
    E { tag: SPECIMEN_SHORT_DESCRIPTION, alias: "SpecimenShortDescription", vr: LO },
    E { tag: SPECIMEN_DETAILED_DESCRIPTION, alias: "SpecimenDetailedDescription", vr: UT },
    E { tag: SPECIMEN_PREPARATION_SEQUENCE, alias: "SpecimenPreparationSequence", vr: SQ },
    E { tag: SLIDE_IDENTIFIER, alias: "SlideIdentifier", vr: LO },
    E { tag: REQUESTED_PROCEDURE_ID, alias: "RequestedProcedureID", vr: SH },
    E { tag: REASON_FOR_THE_REQUESTED_PROCEDURE, alias: "ReasonForTheRequestedProcedure", vr: LO },
    E { tag: PATIENT_TRANSPORT_ARRANGEMENTS, alias: "PatientTransportArrangements", vr: LO },
    E { tag: REQUESTED_PROCEDURE_LOCATION, alias: "RequestedProcedureLocation", vr: LO },
    E { tag: REASON_FOR_REQUESTED_PROCEDURE_CODE_SEQUENCE, alias: "ReasonForRequestedProcedureCodeSequence", vr: SQ },
    E { tag: NAMES_OF_INTENDED_RECIPIENTS_OF_RESULTS, alias: "NamesOfIntendedRecipientsOfResults", vr: PN },
    E { tag: INTENDED_RECIPIENTS_OF_RESULTS_IDENTIFICATION_SEQUENCE, alias: "IntendedRecipientsOfResultsIdentificationSequence", vr: SQ },
    E { tag: PERSON_IDENTIFICATION_CODE_SEQUENCE, alias: "PersonIdentificationCodeSequence", vr: SQ },
    E { tag: PERSON_ADDRESS, alias: "PersonAddress", vr: ST },
    E { tag: PERSON_TELEPHONE_NUMBERS, alias: "PersonTelephoneNumbers", vr: LO },
    E { tag: PERSON_TELECOM_INFORMATION, alias: "PersonTelecomInformation", vr: LT },
    E { tag: REQUESTED_PROCEDURE_COMMENTS, alias: "RequestedProcedureComments", vr: LT },
    E { tag: REASON_FOR_THE_IMAGING_SERVICE_REQUEST, alias: "ReasonForTheImagingServiceRequest", vr: LO },
    E { tag: ISSUE_DATE_OF_IMAGING_SERVICE_REQUEST, alias: "IssueDateOfImagingServiceRequest", vr: DA },
    E { tag: ISSUE_TIME_OF_IMAGING_SERVICE_REQUEST, alias: "IssueTimeOfImagingServiceRequest", vr: TM },
    E { tag: ORDER_ENTERED_BY, alias: "OrderEnteredBy", vr: PN },
    E { tag: ORDER_ENTERER_LOCATION, alias: "OrderEntererLocation", vr: SH },
    E { tag: ORDER_CALLBACK_PHONE_NUMBER, alias: "OrderCallbackPhoneNumber", vr: SH },
    E { tag: ORDER_CALLBACK_TELECOM_INFORMATION, alias: "OrderCallbackTelecomInformation", vr: LT },
    E { tag: PLACER_ORDER_NUMBER_IMAGING_SERVICE_REQUEST, alias: "PlacerOrderNumberImagingServiceRequest", vr: LO },
    E { tag: FILLER_ORDER_NUMBER_IMAGING_SERVICE_REQUEST, alias: "FillerOrderNumberImagingServiceRequest", vr: LO },
    E { tag: IMAGING_SERVICE_REQUEST_COMMENTS, alias: "ImagingServiceRequestComments", vr: LT },
    E { tag: CONFIDENTIALITY_CONSTRAINT_ON_PATIENT_DATA_DESCRIPTION, alias: "ConfidentialityConstraintOnPatientDataDescription", vr: LO },
    E { tag: SCHEDULED_PROCEDURE_STEP_START_DATE_TIME, alias: "ScheduledProcedureStepStartDateTime", vr: DT },
    E { tag: SCHEDULED_PROCEDURE_STEP_EXPIRATION_DATE_TIME, alias: "ScheduledProcedureStepExpirationDateTime", vr: DT },
    E { tag: SCHEDULED_PROCEDURE_STEP_MODIFICATION_DATE_TIME, alias: "ScheduledProcedureStepModificationDateTime", vr: DT },
    E { tag: EXPECTED_COMPLETION_DATE_TIME, alias: "ExpectedCompletionDateTime", vr: DT },
    E { tag: REFERENCED_GENERAL_PURPOSE_SCHEDULED_PROCEDURE_STEP_TRANSACTION_UID, alias: "ReferencedGeneralPurposeScheduledProcedureStepTransactionUID", vr: UI },
    E { tag: SCHEDULED_STATION_NAME_CODE_SEQUENCE, alias: "ScheduledStationNameCodeSequence", vr: SQ },
    E { tag: SCHEDULED_STATION_GEOGRAPHIC_LOCATION_CODE_SEQUENCE, alias: "ScheduledStationGeographicLocationCodeSequence", vr: SQ },
    E { tag: PERFORMED_STATION_NAME_CODE_SEQUENCE, alias: "PerformedStationNameCodeSequence", vr: SQ },
    E { tag: PERFORMED_STATION_GEOGRAPHIC_LOCATION_CODE_SEQUENCE, alias: "PerformedStationGeographicLocationCodeSequence", vr: SQ },
    E { tag: SCHEDULED_HUMAN_PERFORMERS_SEQUENCE, alias: "ScheduledHumanPerformersSequence", vr: SQ },
    E { tag: ACTUAL_HUMAN_PERFORMERS_SEQUENCE, alias: "ActualHumanPerformersSequence", vr: SQ },
    E { tag: HUMAN_PERFORMER_ORGANIZATION, alias: "HumanPerformerOrganization", vr: LO },
    E { tag: HUMAN_PERFORMER_NAME, alias: "HumanPerformerName", vr: PN },
    E { tag: PERFORMED_PROCEDURE_STEP_START_DATE_TIME, alias: "PerformedProcedureStepStartDateTime", vr: DT },
    E { tag: PERFORMED_PROCEDURE_STEP_END_DATE_TIME, alias: "PerformedProcedureStepEndDateTime", vr: DT },
    E { tag: PROCEDURE_STEP_CANCELLATION_DATE_TIME, alias: "ProcedureStepCancellationDateTime", vr: DT },
    E { tag: RELATIONSHIP_TYPE, alias: "RelationshipType", vr: CS },
    E { tag: FINDINGS_GROUP_RECORDING_DATE_TRIAL, alias: "FindingsGroupRecordingDateTrial", vr: DA },
    E { tag: FINDINGS_GROUP_RECORDING_TIME_TRIAL, alias: "FindingsGroupRecordingTimeTrial", vr: TM },
    E { tag: VERIFYING_ORGANIZATION, alias: "VerifyingOrganization", vr: LO },
    E { tag: VERIFICATION_DATE_TIME, alias: "VerificationDateTime", vr: DT },
    E { tag: OBSERVATION_DATE_TIME, alias: "ObservationDateTime", vr: DT },
    E { tag: OBSERVATION_START_DATE_TIME, alias: "ObservationStartDateTime", vr: DT },
    E { tag: VALUE_TYPE, alias: "ValueType", vr: CS },
    E { tag: CONCEPT_NAME_CODE_SEQUENCE, alias: "ConceptNameCodeSequence", vr: SQ },
    E { tag: VERIFYING_OBSERVER_SEQUENCE, alias: "VerifyingObserverSequence", vr: SQ },
    E { tag: VERIFYING_OBSERVER_NAME, alias: "VerifyingObserverName", vr: PN },
    E { tag: AUTHOR_OBSERVER_SEQUENCE, alias: "AuthorObserverSequence", vr: SQ },
    E { tag: PARTICIPANT_SEQUENCE, alias: "ParticipantSequence", vr: SQ },
    E { tag: CUSTODIAL_ORGANIZATION_SEQUENCE, alias: "CustodialOrganizationSequence", vr: SQ },
    E { tag: PARTICIPATION_DATE_TIME, alias: "ParticipationDateTime", vr: DT },
    E { tag: VERIFYING_OBSERVER_IDENTIFICATION_CODE_SEQUENCE, alias: "VerifyingObserverIdentificationCodeSequence", vr: SQ },
    E { tag: DATE_OF_DOCUMENT_OR_VERBAL_TRANSACTION_TRIAL, alias: "DateOfDocumentOrVerbalTransactionTrial", vr: DA },
    E { tag: TIME_OF_DOCUMENT_OR_VERBAL_TRANSACTION_TRIAL, alias: "TimeOfDocumentOrVerbalTransactionTrial", vr: TM },
    E { tag: DATE_TIME, alias: "DateTime", vr: DT },
    E { tag: DATE, alias: "Date", vr: DA },
    E { tag: TIME, alias: "Time", vr: TM },
    E { tag: PERSON_NAME, alias: "PersonName", vr: PN },
    E { tag: UID, alias: "UID", vr: UI },
    E { tag: REFERENCED_DATE_TIME, alias: "ReferencedDateTime", vr: DT },
    E { tag: TEXT_VALUE, alias: "TextValue", vr: UT },
    E { tag: CONCEPT_CODE_SEQUENCE, alias: "ConceptCodeSequence", vr: SQ },
    E { tag: PURPOSE_OF_REFERENCE_CODE_SEQUENCE, alias: "PurposeOfReferenceCodeSequence", vr: SQ },
    E { tag: OBSERVATION_UID, alias: "ObservationUID", vr: UI },
    E { tag: REFERENCED_OBSERVATION_UID_TRIAL, alias: "ReferencedObservationUIDTrial", vr: UI },
    E { tag: OBSERVATION_DATE_TRIAL, alias: "ObservationDateTrial", vr: DA },
    E { tag: OBSERVATION_TIME_TRIAL, alias: "ObservationTimeTrial", vr: TM },
    E { tag: CURRENT_OBSERVER_TRIAL, alias: "CurrentObserverTrial", vr: PN },
    E { tag: VERBAL_SOURCE_TRIAL, alias: "VerbalSourceTrial", vr: PN },
    E { tag: ADDRESS_TRIAL, alias: "AddressTrial", vr: ST },
    E { tag: TELEPHONE_NUMBER_TRIAL, alias: "TelephoneNumberTrial", vr: LO },
    E { tag: VERBAL_SOURCE_IDENTIFIER_CODE_SEQUENCE_TRIAL, alias: "VerbalSourceIdentifierCodeSequenceTrial", vr: SQ },
    E { tag: CURRENT_REQUESTED_PROCEDURE_EVIDENCE_SEQUENCE, alias: "CurrentRequestedProcedureEvidenceSequence", vr: SQ },
    E { tag: PERTINENT_OTHER_EVIDENCE_SEQUENCE, alias: "PertinentOtherEvidenceSequence", vr: SQ },
    E { tag: OBSERVATION_SUBJECT_UID_TRIAL, alias: "ObservationSubjectUIDTrial", vr: UI },
    E { tag: COMPLETION_FLAG, alias: "CompletionFlag", vr: CS },
    E { tag: VERIFICATION_FLAG, alias: "VerificationFlag", vr: CS },
    E { tag: CONTENT_TEMPLATE_SEQUENCE, alias: "ContentTemplateSequence", vr: SQ },
    E { tag: IDENTICAL_DOCUMENTS_SEQUENCE, alias: "IdenticalDocumentsSequence", vr: SQ },
    E { tag: CONTENT_SEQUENCE, alias: "ContentSequence", vr: SQ },
    E { tag: TEMPLATE_IDENTIFIER, alias: "TemplateIdentifier", vr: CS },
    E { tag: TEMPLATE_VERSION, alias: "TemplateVersion", vr: DT },
    E { tag: TEMPLATE_LOCAL_VERSION, alias: "TemplateLocalVersion", vr: DT },
    E { tag: TEMPLATE_EXTENSION_ORGANIZATION_UID, alias: "TemplateExtensionOrganizationUID", vr: UI },
    E { tag: TEMPLATE_EXTENSION_CREATOR_UID, alias: "TemplateExtensionCreatorUID", vr: UI },
    E { tag: HL7_DOCUMENT_EFFECTIVE_TIME, alias: "HL7DocumentEffectiveTime", vr: DT },
    E { tag: ENCAPSULATED_DOCUMENT, alias: "EncapsulatedDocument", vr: OB },
    E { tag: APPROVAL_STATUS_DATE_TIME, alias: "ApprovalStatusDateTime", vr: DT },
    E { tag: PRODUCT_EXPIRATION_DATE_TIME, alias: "ProductExpirationDateTime", vr: DT },
    E { tag: SUBSTANCE_ADMINISTRATION_DATE_TIME, alias: "SubstanceAdministrationDateTime", vr: DT },
    E { tag: ASSERTION_DATE_TIME, alias: "AssertionDateTime", vr: DT },
    E { tag: ASSERTION_EXPIRATION_DATE_TIME, alias: "AssertionExpirationDateTime", vr: DT },
    E { tag: CONTAINER_COMPONENT_ID, alias: "ContainerComponentID", vr: LO },
    E { tag: DEVICE_DESCRIPTION, alias: "DeviceDescription", vr: LO },
    E { tag: LONG_DEVICE_DESCRIPTION, alias: "LongDeviceDescription", vr: ST },
    E { tag: TRACKING_UID, alias: "TrackingUID", vr: UI },
    E { tag: SOURCE_FRAME_OF_REFERENCE_UID, alias: "SourceFrameOfReferenceUID", vr: UI },
    E { tag: EFFECTIVE_DATE_TIME, alias: "EffectiveDateTime", vr: DT },
    E { tag: INFORMATION_ISSUE_DATE_TIME, alias: "InformationIssueDateTime", vr: DT },
    E { tag: ANNOTATION_GROUP_UID, alias: "AnnotationGroupUID", vr: UI },
    E { tag: ANNOTATION_GROUP_LABEL, alias: "AnnotationGroupLabel", vr: LO },
    E { tag: ANNOTATION_GROUP_DESCRIPTION, alias: "AnnotationGroupDescription", vr: UT },
    E { tag: GRAPHIC_ANNOTATION_SEQUENCE, alias: "GraphicAnnotationSequence", vr: SQ },
    E { tag: PRESENTATION_CREATION_DATE, alias: "PresentationCreationDate", vr: DA },
    E { tag: PRESENTATION_CREATION_TIME, alias: "PresentationCreationTime", vr: TM },
    E { tag: CONTENT_CREATOR_NAME, alias: "ContentCreatorName", vr: PN },
    E { tag: CONTENT_CREATOR_IDENTIFICATION_CODE_SEQUENCE, alias: "ContentCreatorIdentificationCodeSequence", vr: SQ },
    E { tag: FIDUCIAL_UID, alias: "FiducialUID", vr: UI },
    E { tag: PRESENTATION_DISPLAY_COLLECTION_UID, alias: "PresentationDisplayCollectionUID", vr: UI },
    E { tag: PRESENTATION_SEQUENCE_COLLECTION_UID, alias: "PresentationSequenceCollectionUID", vr: UI },
    E { tag: HANGING_PROTOCOL_CREATION_DATE_TIME, alias: "HangingProtocolCreationDateTime", vr: DT },
    E { tag: SELECTOR_AE_VALUE, alias: "SelectorAEValue", vr: AE },
    E { tag: SELECTOR_AS_VALUE, alias: "SelectorASValue", vr: AS },
    E { tag: SELECTOR_DA_VALUE, alias: "SelectorDAValue", vr: DA },
    E { tag: SELECTOR_DT_VALUE, alias: "SelectorDTValue", vr: DT },
    E { tag: SELECTOR_OB_VALUE, alias: "SelectorOBValue", vr: OB },
    E { tag: SELECTOR_LO_VALUE, alias: "SelectorLOValue", vr: LO },
    E { tag: SELECTOR_LT_VALUE, alias: "SelectorLTValue", vr: LT },
    E { tag: SELECTOR_PN_VALUE, alias: "SelectorPNValue", vr: PN },
    E { tag: SELECTOR_TM_VALUE, alias: "SelectorTMValue", vr: TM },
    E { tag: SELECTOR_SH_VALUE, alias: "SelectorSHValue", vr: SH },
    E { tag: SELECTOR_UN_VALUE, alias: "SelectorUNValue", vr: UN },
    E { tag: SELECTOR_ST_VALUE, alias: "SelectorSTValue", vr: ST },
    E { tag: SELECTOR_UT_VALUE, alias: "SelectorUTValue", vr: UT },
    E { tag: SELECTOR_UR_VALUE, alias: "SelectorURValue", vr: UR },
    E { tag: RECEIVING_AE, alias: "ReceivingAE", vr: AE },
    E { tag: REQUESTING_AE, alias: "RequestingAE", vr: AE },
    E { tag: STORAGE_MEDIA_FILE_SET_UID, alias: "StorageMediaFileSetUID", vr: UI },
    E { tag: ICON_IMAGE_SEQUENCE, alias: "IconImageSequence", vr: SQ },
    E { tag: TOPIC_TITLE, alias: "TopicTitle", vr: LO },
    E { tag: TOPIC_SUBJECT, alias: "TopicSubject", vr: ST },
    E { tag: TOPIC_AUTHOR, alias: "TopicAuthor", vr: LO },
    E { tag: TOPIC_KEYWORDS, alias: "TopicKeywords", vr: LO },
    E { tag: SOP_AUTHORIZATION_DATE_TIME, alias: "SOPAuthorizationDateTime", vr: DT },
    E { tag: DIGITAL_SIGNATURE_UID, alias: "DigitalSignatureUID", vr: UI },
    E { tag: DIGITAL_SIGNATURE_DATE_TIME, alias: "DigitalSignatureDateTime", vr: DT },
    E { tag: CERTIFICATE_OF_SIGNER, alias: "CertificateOfSigner", vr: OB },
    E { tag: CERTIFIED_TIMESTAMP, alias: "CertifiedTimestamp", vr: OB },
    E { tag: REFERENCED_DIGITAL_SIGNATURE_SEQUENCE, alias: "ReferencedDigitalSignatureSequence", vr: SQ },
    E { tag: REFERENCED_SOP_INSTANCE_MAC_SEQUENCE, alias: "ReferencedSOPInstanceMACSequence", vr: SQ },
    E { tag: MAC, alias: "MAC", vr: OB },
    E { tag: MODIFIED_ATTRIBUTES_SEQUENCE, alias: "ModifiedAttributesSequence", vr: SQ },
    E { tag: NONCONFORMING_MODIFIED_ATTRIBUTES_SEQUENCE, alias: "NonconformingModifiedAttributesSequence", vr: SQ },
    E { tag: NONCONFORMING_DATA_ELEMENT_VALUE, alias: "NonconformingDataElementValue", vr: OB },
    E { tag: ORIGINAL_ATTRIBUTES_SEQUENCE, alias: "OriginalAttributesSequence", vr: SQ },
    E { tag: ATTRIBUTE_MODIFICATION_DATE_TIME, alias: "AttributeModificationDateTime", vr: DT },
    E { tag: MODIFYING_SYSTEM, alias: "ModifyingSystem", vr: LO },
    E { tag: SOURCE_OF_PREVIOUS_VALUES, alias: "SourceOfPreviousValues", vr: LO },
    E { tag: REASON_FOR_THE_ATTRIBUTE_MODIFICATION, alias: "ReasonForTheAttributeModification", vr: CS },
    E { tag: INSTANCE_ORIGIN_STATUS, alias: "InstanceOriginStatus", vr: CS },
    E { tag: TEXT_STRING, alias: "TextString", vr: LO },
    E { tag: CREATION_DATE, alias: "CreationDate", vr: DA },
    E { tag: CREATION_TIME, alias: "CreationTime", vr: TM },
    E { tag: ORIGINATOR, alias: "Originator", vr: AE },
    E { tag: DESTINATION_AE, alias: "DestinationAE", vr: AE },
    E { tag: LABEL_TEXT, alias: "LabelText", vr: UT },
    E { tag: BARCODE_VALUE, alias: "BarcodeValue", vr: LT },
    E { tag: POSITION_ACQUISITION_TEMPLATE_NAME, alias: "PositionAcquisitionTemplateName", vr: SH },
    E { tag: POSITION_ACQUISITION_TEMPLATE_DESCRIPTION, alias: "PositionAcquisitionTemplateDescription", vr: LO },
    E { tag: STRUCTURE_SET_LABEL, alias: "StructureSetLabel", vr: SH },
    E { tag: STRUCTURE_SET_NAME, alias: "StructureSetName", vr: LO },
    E { tag: STRUCTURE_SET_DESCRIPTION, alias: "StructureSetDescription", vr: ST },
    E { tag: STRUCTURE_SET_DATE, alias: "StructureSetDate", vr: DA },
    E { tag: STRUCTURE_SET_TIME, alias: "StructureSetTime", vr: TM },
    E { tag: REFERENCED_FRAME_OF_REFERENCE_SEQUENCE, alias: "ReferencedFrameOfReferenceSequence", vr: SQ },
    E { tag: RT_REFERENCED_STUDY_SEQUENCE, alias: "RTReferencedStudySequence", vr: SQ },
    E { tag: RT_REFERENCED_SERIES_SEQUENCE, alias: "RTReferencedSeriesSequence", vr: SQ },
    E { tag: CONTOUR_IMAGE_SEQUENCE, alias: "ContourImageSequence", vr: SQ },
    E { tag: STRUCTURE_SET_ROI_SEQUENCE, alias: "StructureSetROISequence", vr: SQ },
    E { tag: ROI_NUMBER, alias: "ROINumber", vr: IS },
    E { tag: REFERENCED_FRAME_OF_REFERENCE_UID, alias: "ReferencedFrameOfReferenceUID", vr: UI },
    E { tag: ROI_NAME, alias: "ROIName", vr: LO },
    E { tag: ROI_DESCRIPTION, alias: "ROIDescription", vr: ST },
    E { tag: ROI_GENERATION_DESCRIPTION, alias: "ROIGenerationDescription", vr: LO },
    E { tag: ROI_CONTOUR_SEQUENCE, alias: "ROIContourSequence", vr: SQ },
    E { tag: CONTOUR_SEQUENCE, alias: "ContourSequence", vr: SQ },
    E { tag: CONTOUR_DATA, alias: "ContourData", vr: DS },
    E { tag: ROI_OBSERVATION_LABEL, alias: "ROIObservationLabel", vr: SH },
    E { tag: ROI_OBSERVATION_DESCRIPTION, alias: "ROIObservationDescription", vr: ST },
    E { tag: ROI_INTERPRETER, alias: "ROIInterpreter", vr: PN },
    E { tag: RELATED_FRAME_OF_REFERENCE_UID, alias: "RelatedFrameOfReferenceUID", vr: UI },
    E { tag: TREATMENT_CONTROL_POINT_DATE, alias: "TreatmentControlPointDate", vr: DA },
    E { tag: TREATMENT_CONTROL_POINT_TIME, alias: "TreatmentControlPointTime", vr: TM },
    E { tag: FIRST_TREATMENT_DATE, alias: "FirstTreatmentDate", vr: DA },
    E { tag: MOST_RECENT_TREATMENT_DATE, alias: "MostRecentTreatmentDate", vr: DA },
    E { tag: SOURCE_SERIAL_NUMBER, alias: "SourceSerialNumber", vr: LO },
    E { tag: SAFE_POSITION_EXIT_DATE, alias: "SafePositionExitDate", vr: DA },
    E { tag: SAFE_POSITION_EXIT_TIME, alias: "SafePositionExitTime", vr: TM },
    E { tag: SAFE_POSITION_RETURN_DATE, alias: "SafePositionReturnDate", vr: DA },
    E { tag: SAFE_POSITION_RETURN_TIME, alias: "SafePositionReturnTime", vr: TM },
    E { tag: TREATMENT_DATE, alias: "TreatmentDate", vr: DA },
    E { tag: TREATMENT_TIME, alias: "TreatmentTime", vr: TM },
    E { tag: RT_PLAN_LABEL, alias: "RTPlanLabel", vr: SH },
    E { tag: RT_PLAN_NAME, alias: "RTPlanName", vr: LO },
    E { tag: RT_PLAN_DESCRIPTION, alias: "RTPlanDescription", vr: ST },
    E { tag: RT_PLAN_DATE, alias: "RTPlanDate", vr: DA },
    E { tag: RT_PLAN_TIME, alias: "RTPlanTime", vr: TM },
    E { tag: TREATMENT_SITES, alias: "TreatmentSites", vr: LO },
    E { tag: PRESCRIPTION_DESCRIPTION, alias: "PrescriptionDescription", vr: ST },
    E { tag: DOSE_REFERENCE_UID, alias: "DoseReferenceUID", vr: UI },
    E { tag: DOSE_REFERENCE_DESCRIPTION, alias: "DoseReferenceDescription", vr: LO },
    E { tag: FRACTION_GROUP_DESCRIPTION, alias: "FractionGroupDescription", vr: LO },
    E { tag: REFERENCED_DOSE_REFERENCE_UID, alias: "ReferencedDoseReferenceUID", vr: UI },
    E { tag: TREATMENT_MACHINE_NAME, alias: "TreatmentMachineName", vr: SH },
    E { tag: BEAM_DESCRIPTION, alias: "BeamDescription", vr: ST },
    E { tag: BOLUS_DESCRIPTION, alias: "BolusDescription", vr: ST },
    E { tag: FIXATION_DEVICE_DESCRIPTION, alias: "FixationDeviceDescription", vr: ST },
    E { tag: SHIELDING_DEVICE_DESCRIPTION, alias: "ShieldingDeviceDescription", vr: ST },
    E { tag: SETUP_TECHNIQUE_DESCRIPTION, alias: "SetupTechniqueDescription", vr: ST },
    E { tag: SOURCE_MANUFACTURER, alias: "SourceManufacturer", vr: LO },
    E { tag: SOURCE_STRENGTH_REFERENCE_DATE, alias: "SourceStrengthReferenceDate", vr: DA },
    E { tag: SOURCE_STRENGTH_REFERENCE_TIME, alias: "SourceStrengthReferenceTime", vr: TM },
    E { tag: COMPENSATOR_DESCRIPTION, alias: "CompensatorDescription", vr: LT },
    E { tag: TREATMENT_POSITION_GROUP_LABEL, alias: "TreatmentPositionGroupLabel", vr: LO },
    E { tag: TREATMENT_POSITION_GROUP_UID, alias: "TreatmentPositionGroupUID", vr: UI },
    E { tag: RT_ACCESSORY_HOLDER_SLOT_ID, alias: "RTAccessoryHolderSlotID", vr: LO },
    E { tag: RT_ACCESSORY_DEVICE_SLOT_ID, alias: "RTAccessoryDeviceSlotID", vr: LO },
    E { tag: RADIATION_DOSE_IDENTIFICATION_LABEL, alias: "RadiationDoseIdentificationLabel", vr: LO },
    E { tag: RADIATION_DOSE_IN_VIVO_MEASUREMENT_LABEL, alias: "RadiationDoseInVivoMeasurementLabel", vr: LO },
    E { tag: RT_TOLERANCE_SET_LABEL, alias: "RTToleranceSetLabel", vr: LO },
    E { tag: PATIENT_SETUP_UID, alias: "PatientSetupUID", vr: UI },
    E { tag: EQUIPMENT_FRAME_OF_REFERENCE_DESCRIPTION, alias: "EquipmentFrameOfReferenceDescription", vr: UT },
    E { tag: RADIATION_GENERATION_MODE_LABEL, alias: "RadiationGenerationModeLabel", vr: SH },
    E { tag: RADIATION_GENERATION_MODE_DESCRIPTION, alias: "RadiationGenerationModeDescription", vr: ST },
    E { tag: TREATMENT_SESSION_UID, alias: "TreatmentSessionUID", vr: UI },
    E { tag: TREATMENT_TOLERANCE_VIOLATION_DESCRIPTION, alias: "TreatmentToleranceViolationDescription", vr: UT },
    E { tag: TREATMENT_TOLERANCE_VIOLATION_DATE_TIME, alias: "TreatmentToleranceViolationDateTime", vr: DT },
    E { tag: RECORDED_RT_CONTROL_POINT_DATE_TIME, alias: "RecordedRTControlPointDateTime", vr: DT },
    E { tag: INTERLOCK_DATE_TIME, alias: "InterlockDateTime", vr: DT },
    E { tag: INTERLOCK_DESCRIPTION, alias: "InterlockDescription", vr: ST },
    E { tag: OVERRIDE_DATE_TIME, alias: "OverrideDateTime", vr: DT },
    E { tag: INTERLOCK_ORIGIN_DESCRIPTION, alias: "InterlockOriginDescription", vr: ST },
    E { tag: REFERENCED_TREATMENT_POSITION_GROUP_UID, alias: "ReferencedTreatmentPositionGroupUID", vr: UI },
    E { tag: PATIENT_TREATMENT_PREPARATION_PROCEDURE_PARAMETER_DESCRIPTION, alias: "PatientTreatmentPreparationProcedureParameterDescription", vr: LT },
    E { tag: PATIENT_TREATMENT_PREPARATION_METHOD_DESCRIPTION, alias: "PatientTreatmentPreparationMethodDescription", vr: LT },
    E { tag: PATIENT_SETUP_PHOTO_DESCRIPTION, alias: "PatientSetupPhotoDescription", vr: LT },
    E { tag: DISPLACEMENT_REFERENCE_LABEL, alias: "DisplacementReferenceLabel", vr: LO },
    E { tag: REFERENCED_RT_PLAN_SEQUENCE, alias: "ReferencedRTPlanSequence", vr: SQ },
    E { tag: REFERENCED_STRUCTURE_SET_SEQUENCE, alias: "ReferencedStructureSetSequence", vr: SQ },
    E { tag: REFERENCED_DOSE_SEQUENCE, alias: "ReferencedDoseSequence", vr: SQ },
    E { tag: REASON_FOR_OMISSION_DESCRIPTION, alias: "ReasonForOmissionDescription", vr: LO },
    E { tag: BEAM_HOLD_TRANSITION_DATE_TIME, alias: "BeamHoldTransitionDateTime", vr: DT },
    E { tag: REVIEW_DATE, alias: "ReviewDate", vr: DA },
    E { tag: REVIEW_TIME, alias: "ReviewTime", vr: TM },
    E { tag: REVIEWER_NAME, alias: "ReviewerName", vr: PN },
    E { tag: CONCEPTUAL_VOLUME_UID, alias: "ConceptualVolumeUID", vr: UI },
    E { tag: REFERENCED_CONCEPTUAL_VOLUME_UID, alias: "ReferencedConceptualVolumeUID", vr: UI },
    E { tag: CONCEPTUAL_VOLUME_COMBINATION_DESCRIPTION, alias: "ConceptualVolumeCombinationDescription", vr: ST },
    E { tag: CONSTITUENT_CONCEPTUAL_VOLUME_UID, alias: "ConstituentConceptualVolumeUID", vr: UI },
    E { tag: SOURCE_CONCEPTUAL_VOLUME_UID, alias: "SourceConceptualVolumeUID", vr: UI },
    E { tag: CONCEPTUAL_VOLUME_DESCRIPTION, alias: "ConceptualVolumeDescription", vr: ST },
    E { tag: DEVICE_ALTERNATE_IDENTIFIER, alias: "DeviceAlternateIdentifier", vr: UT },
    E { tag: DEVICE_LABEL, alias: "DeviceLabel", vr: LO },
    E { tag: REFERENCED_FIDUCIALS_UID, alias: "ReferencedFiducialsUID", vr: UI },
    E { tag: USER_CONTENT_LABEL, alias: "UserContentLabel", vr: SH },
    E { tag: USER_CONTENT_LONG_LABEL, alias: "UserContentLongLabel", vr: LO },
    E { tag: ENTITY_LABEL, alias: "EntityLabel", vr: SH },
    E { tag: ENTITY_NAME, alias: "EntityName", vr: LO },
    E { tag: ENTITY_DESCRIPTION, alias: "EntityDescription", vr: ST },
    E { tag: ENTITY_LONG_LABEL, alias: "EntityLongLabel", vr: LO },
    E { tag: RT_TREATMENT_PHASE_UID, alias: "RTTreatmentPhaseUID", vr: UI },
    E { tag: MANUFACTURER_DEVICE_IDENTIFIER, alias: "ManufacturerDeviceIdentifier", vr: ST },
    E { tag: INTENDED_PHASE_START_DATE, alias: "IntendedPhaseStartDate", vr: DA },
    E { tag: INTENDED_PHASE_END_DATE, alias: "IntendedPhaseEndDate", vr: DA },
    E { tag: RT_PRESCRIPTION_LABEL, alias: "RTPrescriptionLabel", vr: LO },
    E { tag: RT_TREATMENT_APPROACH_LABEL, alias: "RTTreatmentApproachLabel", vr: LO },
    E { tag: RT_PHYSICIAN_INTENT_NARRATIVE, alias: "RTPhysicianIntentNarrative", vr: UT },
    E { tag: REASON_FOR_SUPERSEDING, alias: "ReasonForSuperseding", vr: LO },
    E { tag: PRIOR_TREATMENT_DOSE_DESCRIPTION, alias: "PriorTreatmentDoseDescription", vr: UT },
    E { tag: DOSIMETRIC_OBJECTIVE_UID, alias: "DosimetricObjectiveUID", vr: UI },
    E { tag: REFERENCED_DOSIMETRIC_OBJECTIVE_UID, alias: "ReferencedDosimetricObjectiveUID", vr: UI },
    E { tag: TREATMENT_SITE, alias: "TreatmentSite", vr: LO },
    E { tag: TREATMENT_TECHNIQUE_NOTES, alias: "TreatmentTechniqueNotes", vr: UT },
    E { tag: PRESCRIPTION_NOTES, alias: "PrescriptionNotes", vr: UT },
    E { tag: FRACTIONATION_NOTES, alias: "FractionationNotes", vr: UT },
    E { tag: PRESCRIPTION_NOTES_SEQUENCE, alias: "PrescriptionNotesSequence", vr: SQ },
    E { tag: INTENDED_FRACTION_START_TIME, alias: "IntendedFractionStartTime", vr: TM },
    E { tag: ARBITRARY, alias: "Arbitrary", vr: LT },
    E { tag: TEXT_COMMENTS, alias: "TextComments", vr: LT },
    E { tag: RESULTS_ID, alias: "ResultsID", vr: SH },
    E { tag: RESULTS_ID_ISSUER, alias: "ResultsIDIssuer", vr: LO },
    E { tag: INTERPRETATION_RECORDED_DATE, alias: "InterpretationRecordedDate", vr: DA },
    E { tag: INTERPRETATION_RECORDED_TIME, alias: "InterpretationRecordedTime", vr: TM },
    E { tag: INTERPRETATION_RECORDER, alias: "InterpretationRecorder", vr: PN },
    E { tag: INTERPRETATION_TRANSCRIPTION_DATE, alias: "InterpretationTranscriptionDate", vr: DA },
    E { tag: INTERPRETATION_TRANSCRIPTION_TIME, alias: "InterpretationTranscriptionTime", vr: TM },
    E { tag: INTERPRETATION_TRANSCRIBER, alias: "InterpretationTranscriber", vr: PN },
    E { tag: INTERPRETATION_TEXT, alias: "InterpretationText", vr: ST },
    E { tag: INTERPRETATION_AUTHOR, alias: "InterpretationAuthor", vr: PN },
    E { tag: INTERPRETATION_APPROVER_SEQUENCE, alias: "InterpretationApproverSequence", vr: SQ },
    E { tag: INTERPRETATION_APPROVAL_DATE, alias: "InterpretationApprovalDate", vr: DA },
    E { tag: INTERPRETATION_APPROVAL_TIME, alias: "InterpretationApprovalTime", vr: TM },
    E { tag: PHYSICIAN_APPROVING_INTERPRETATION, alias: "PhysicianApprovingInterpretation", vr: PN },
    E { tag: INTERPRETATION_DIAGNOSIS_DESCRIPTION, alias: "InterpretationDiagnosisDescription", vr: LT },
    E { tag: RESULTS_DISTRIBUTION_LIST_SEQUENCE, alias: "ResultsDistributionListSequence", vr: SQ },
    E { tag: DISTRIBUTION_NAME, alias: "DistributionName", vr: PN },
    E { tag: DISTRIBUTION_ADDRESS, alias: "DistributionAddress", vr: LO },
    E { tag: INTERPRETATION_ID, alias: "InterpretationID", vr: SH },
    E { tag: INTERPRETATION_ID_ISSUER, alias: "InterpretationIDIssuer", vr: LO },
    E { tag: IMPRESSIONS, alias: "Impressions", vr: ST },
    E { tag: RESULTS_COMMENTS, alias: "ResultsComments", vr: ST },
    E { tag: PIXEL_DATA, alias: "PixelData", vr: OW },
    E { tag: DIGITAL_SIGNATURES_SEQUENCE, alias: "DigitalSignaturesSequence", vr: SQ },
    E { tag: DATA_SET_TRAILING_PADDING, alias: "DataSetTrailingPadding", vr: OB },
    E { tag: ITEM, alias: "Item", vr: UN },
    E { tag: ITEM_DELIMITATION_ITEM, alias: "ItemDelimitationItem", vr: UN },
    E { tag: SEQUENCE_DELIMITATION_ITEM, alias: "SequenceDelimitationItem", vr: UN },
];
