#![crate_type = "lib"]
#![deny(trivial_numeric_casts, unsafe_code, unstable_features)]
#![warn(
    missing_debug_implementations,
    missing_docs,
    unused_qualifications,
    unused_import_braces
)]

//! This is the core library of DCMTAGS containing the concepts
//! and data structures needed to identify and describe DICOM attributes.
//!
//! The current structure of this crate is as follows:
//!
//! - [`header`] comprises the DICOM attribute [`Tag`]
//!   and the [value representation](VR) enumeration.
//! - [`dictionary`] describes common behavior of DICOM data dictionaries,
//!   which translate attribute keywords and/or tags to a dictionary entry
//!   containing relevant information about the attribute,
//!   such as its name, value representation, value multiplicity
//!   and whether it was retired from the standard.
//!
//! The standard dictionary itself lives in the `dcmtags-dictionary` crate.
//!
//! [`dictionary`]: ./dictionary/index.html
//! [`header`]: ./header/index.html

pub mod dictionary;
pub mod header;
pub mod prelude;

pub use dictionary::{DataDictionary, DataDictionaryEntry, Multiplicity, TagRange, VirtualVr};
pub use header::{ElementNumber, GroupNumber, ParseTagError, Tag, VR};
