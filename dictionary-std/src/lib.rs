//! This crate implements the standard DICOM attribute dictionary
//! used across dcmkit, plus a few normative constants.
//!
//! - [`data_element`] contains the attribute dictionary,
//!   mapping tags to their alias and typical value representation.
//!   It is provided as a lazily indexed singleton
//!   behind the unit type [`StandardDataDictionary`].
//! - [`tags`] maps attribute aliases to DICOM tags at compile time.
//! - [`uids`] declares the normative unique identifiers
//!   which the toolkit needs to recognize.
pub mod data_element;
pub mod tags;
pub mod uids;

pub use data_element::{StandardDataDictionary, StandardDataDictionaryRegistry};
