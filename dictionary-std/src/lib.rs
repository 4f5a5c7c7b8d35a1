//! This crate implements the standard DICOM data element dictionary and its tag constants.
//!
//! ## Run-time dictionary
//!
//! [`data_element`] contains all information about the
//! DICOM attributes specified in [DICOM PS3.6] and [DICOM PS3.7],
//! and it should be used by default whenever a data element dictionary is needed.
//! When not using private tags, this dictionary should suffice.
//!
//! The dictionary is provided as a singleton
//! behind the unit type [`StandardDataDictionary`].
//! It is built on first use and never modified afterwards.
//!
//! ```
//! use dcmtags_core::dictionary::{DataDictionary, DataDictionaryEntry};
//! use dcmtags_dictionary::{tags, StandardDataDictionary};
//!
//! let rows = StandardDataDictionary.by_tag(tags::ROWS).unwrap();
//! assert_eq!(rows.name(), "Rows");
//! assert!(!rows.is_retired());
//!
//! // private and unknown attributes are simply not found
//! assert!(StandardDataDictionary.by_tag(dcmtags_core::Tag(0x0009, 0x0001)).is_none());
//! ```
//!
//! [DICOM PS3.6]: https://dicom.nema.org/medical/dicom/current/output/chtml/part06/ps3.6.html
//! [DICOM PS3.7]: https://dicom.nema.org/medical/dicom/current/output/chtml/part07/ps3.7.html
//!
//! ## Constants
//!
//! The [`tags`] module maps each attribute keyword to its DICOM tag at compile time,
//! thus without incurring a look-up cost.
pub mod data_element;

pub mod tags;

pub use data_element::{registry, Entries, StandardDataDictionary, StandardDataDictionaryRegistry};
