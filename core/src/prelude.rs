//! Prelude module.
//!
//! You may import all symbols within for convenient usage of this library.
//!
//! # Example
//!
//! ```
//! use dcmtags_core::prelude::*;
//! ```

pub use crate::{Tag, VR};
pub use crate::{DataDictionary as _, DataDictionaryEntry as _};
