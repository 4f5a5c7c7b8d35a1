//! This module contains the concept of a DICOM data dictionary.
//!
//! The standard data dictionary is available in the `dcmtags-dictionary` crate.

mod data_element;
mod multiplicity;
pub mod stub;

pub use data_element::{
    DataDictionary, DataDictionaryEntry, DataDictionaryEntryBuf, DataDictionaryEntryRef,
    ParseVirtualVrError, TagByName, TagRange, TagRangeParseError, VirtualVr,
};
pub use multiplicity::{Multiplicity, ParseMultiplicityError};
