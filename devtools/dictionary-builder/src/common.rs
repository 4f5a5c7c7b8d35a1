use std::io::Read;

use eyre::{Context, Result};
use tracing::info;

/// How to process retired entries
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum RetiredOptions {
    /// ignore retired attributes
    Ignore,
    /// include retired attributes
    Include {
        /// mark constants as deprecated
        deprecate: bool,
    },
}

impl RetiredOptions {
    /// Create retired options from two flags.
    /// `ignore` takes precedence over `deprecate`.
    pub fn from_flags(ignore: bool, deprecate: bool) -> Self {
        if ignore {
            RetiredOptions::Ignore
        } else {
            RetiredOptions::Include { deprecate }
        }
    }

    /// Whether retired constants should be marked as deprecated.
    pub fn deprecate(self) -> bool {
        matches!(self, RetiredOptions::Include { deprecate: true })
    }
}

/// Obtain the contents of a standard document,
/// either by downloading it if `src` is a URL,
/// or by reading it from the file system.
pub fn read_document(src: &str) -> Result<String> {
    if src.starts_with("http:") || src.starts_with("https:") {
        // read from URL
        info!("Downloading {} ...", src);
        let resp = ureq::get(src)
            .call()
            .with_context(|| format!("Could not fetch {}", src))?;
        // the registry is larger than what `into_string` accepts
        let mut text = String::new();
        resp.into_reader()
            .read_to_string(&mut text)
            .with_context(|| format!("Could not read response from {}", src))?;
        Ok(text)
    } else {
        // read from File
        info!("Reading from file {}", src);
        std::fs::read_to_string(src).with_context(|| format!("Could not read {}", src))
    }
}

#[cfg(test)]
mod tests {
    use super::RetiredOptions;

    #[test]
    fn retired_options_from_flags() {
        assert_eq!(RetiredOptions::from_flags(true, true), RetiredOptions::Ignore);
        assert_eq!(RetiredOptions::from_flags(true, false), RetiredOptions::Ignore);
        assert_eq!(
            RetiredOptions::from_flags(false, true),
            RetiredOptions::Include { deprecate: true }
        );
        assert!(RetiredOptions::from_flags(false, true).deprecate());
        assert!(!RetiredOptions::from_flags(false, false).deprecate());
    }
}
