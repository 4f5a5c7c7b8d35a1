//! Value multiplicity descriptor.

use std::fmt;
use std::str::FromStr;

use snafu::{ensure, Backtrace, ResultExt, Snafu};

/// The value multiplicity (VM) of an attribute,
/// which constrains how many values a data element may hold.
///
/// The registry notation of each variant is as follows:
///
/// | notation | variant |
/// |----------|---------|
/// | `1`, `16` | [`Exact`](Multiplicity::Exact) |
/// | `1-n`, `2-n` | [`AtLeast`](Multiplicity::AtLeast) |
/// | `1-8`, `1-32` | [`Bounded`](Multiplicity::Bounded) |
/// | `2-2n`, `3-3n` | [`MultipleOf`](Multiplicity::MultipleOf) |
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Multiplicity {
    /// Exactly this many values
    Exact(u32),
    /// This many values or more
    AtLeast(u32),
    /// Between the two numbers of values, inclusive
    Bounded(u32, u32),
    /// A positive multiple of this number of values
    MultipleOf(u32),
}

impl Multiplicity {
    /// Check whether the given number of values satisfies this multiplicity.
    pub fn contains(self, count: u32) -> bool {
        match self {
            Multiplicity::Exact(n) => count == n,
            Multiplicity::AtLeast(n) => count >= n,
            Multiplicity::Bounded(min, max) => (min..=max).contains(&count),
            Multiplicity::MultipleOf(k) => k != 0 && count >= k && count % k == 0,
        }
    }

    /// The minimum number of values admitted.
    pub fn min(self) -> u32 {
        match self {
            Multiplicity::Exact(n)
            | Multiplicity::AtLeast(n)
            | Multiplicity::Bounded(n, _)
            | Multiplicity::MultipleOf(n) => n,
        }
    }

    /// The maximum number of values admitted,
    /// or `None` if unbounded.
    pub fn max(self) -> Option<u32> {
        match self {
            Multiplicity::Exact(n) | Multiplicity::Bounded(_, n) => Some(n),
            Multiplicity::AtLeast(_) | Multiplicity::MultipleOf(_) => None,
        }
    }
}

/// An error returned when parsing an invalid value multiplicity.
#[derive(Debug, Snafu)]
#[non_exhaustive]
pub enum ParseMultiplicityError {
    /// A value count is not a decimal number
    #[snafu(display("invalid value count in multiplicity `{}`", text))]
    InvalidCount {
        text: String,
        backtrace: Backtrace,
        source: std::num::ParseIntError,
    },
    /// The text is not in a known multiplicity notation
    #[snafu(display("unsupported multiplicity `{}`", text))]
    Unsupported { text: String, backtrace: Backtrace },
}

impl FromStr for Multiplicity {
    type Err = ParseMultiplicityError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let text = s.trim();
        // legacy form found in older editions of the registry
        if text == "1-n or 1" {
            return Ok(Multiplicity::AtLeast(1));
        }

        let count = |part: &str| -> Result<u32, ParseMultiplicityError> {
            part.trim()
                .parse::<u32>()
                .context(InvalidCountSnafu { text: s })
        };

        match text.split_once('-') {
            None => Ok(Multiplicity::Exact(count(text)?)),
            Some((min, "n")) => Ok(Multiplicity::AtLeast(count(min)?)),
            Some((min, max)) => {
                let min = count(min)?;
                if let Some(factor) = max.strip_suffix('n') {
                    let factor = count(factor)?;
                    ensure!(factor == min && factor > 0, UnsupportedSnafu { text: s });
                    Ok(Multiplicity::MultipleOf(factor))
                } else {
                    let max = count(max)?;
                    ensure!(min <= max, UnsupportedSnafu { text: s });
                    Ok(Multiplicity::Bounded(min, max))
                }
            }
        }
    }
}

impl fmt::Display for Multiplicity {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Multiplicity::Exact(n) => write!(f, "{}", n),
            Multiplicity::AtLeast(n) => write!(f, "{}-n", n),
            Multiplicity::Bounded(min, max) => write!(f, "{}-{}", min, max),
            Multiplicity::MultipleOf(k) => write!(f, "{}-{}n", k, k),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{Multiplicity, ParseMultiplicityError};

    #[test]
    fn parse_registry_notation() {
        assert_eq!("1".parse::<Multiplicity>().unwrap(), Multiplicity::Exact(1));
        assert_eq!("16".parse::<Multiplicity>().unwrap(), Multiplicity::Exact(16));
        assert_eq!("1-n".parse::<Multiplicity>().unwrap(), Multiplicity::AtLeast(1));
        assert_eq!("2-n".parse::<Multiplicity>().unwrap(), Multiplicity::AtLeast(2));
        assert_eq!("1-8".parse::<Multiplicity>().unwrap(), Multiplicity::Bounded(1, 8));
        assert_eq!("1-32".parse::<Multiplicity>().unwrap(), Multiplicity::Bounded(1, 32));
        assert_eq!("2-2n".parse::<Multiplicity>().unwrap(), Multiplicity::MultipleOf(2));
        assert_eq!("3-3n".parse::<Multiplicity>().unwrap(), Multiplicity::MultipleOf(3));
        assert_eq!("1-n or 1".parse::<Multiplicity>().unwrap(), Multiplicity::AtLeast(1));
    }

    #[test]
    fn reject_bad_notation() {
        assert!(matches!(
            "".parse::<Multiplicity>(),
            Err(ParseMultiplicityError::InvalidCount { .. })
        ));
        assert!(matches!(
            "n".parse::<Multiplicity>(),
            Err(ParseMultiplicityError::InvalidCount { .. })
        ));
        assert!(matches!(
            "2-3n".parse::<Multiplicity>(),
            Err(ParseMultiplicityError::Unsupported { .. })
        ));
        assert!(matches!(
            "0-0n".parse::<Multiplicity>(),
            Err(ParseMultiplicityError::Unsupported { .. })
        ));
        assert!(matches!(
            "8-1".parse::<Multiplicity>(),
            Err(ParseMultiplicityError::Unsupported { .. })
        ));
    }

    #[test]
    fn display_registry_notation() {
        for text in ["1", "3", "1-n", "2-n", "1-2", "1-99", "2-2n", "3-3n", "6-6n"] {
            let vm: Multiplicity = text.parse().unwrap();
            assert_eq!(vm.to_string(), text);
        }
    }

    #[test]
    fn value_counts() {
        assert!(Multiplicity::Exact(1).contains(1));
        assert!(!Multiplicity::Exact(1).contains(2));

        assert!(Multiplicity::AtLeast(1).contains(1));
        assert!(Multiplicity::AtLeast(1).contains(100));
        assert!(!Multiplicity::AtLeast(2).contains(1));

        assert!(Multiplicity::Bounded(1, 8).contains(8));
        assert!(!Multiplicity::Bounded(1, 8).contains(9));
        assert!(!Multiplicity::Bounded(1, 8).contains(0));

        assert!(Multiplicity::MultipleOf(3).contains(3));
        assert!(Multiplicity::MultipleOf(3).contains(9));
        assert!(!Multiplicity::MultipleOf(3).contains(4));
        assert!(!Multiplicity::MultipleOf(3).contains(0));
        assert!(!Multiplicity::MultipleOf(0).contains(0));

        assert_eq!(Multiplicity::Bounded(1, 8).min(), 1);
        assert_eq!(Multiplicity::Bounded(1, 8).max(), Some(8));
        assert_eq!(Multiplicity::MultipleOf(2).max(), None);
    }
}
