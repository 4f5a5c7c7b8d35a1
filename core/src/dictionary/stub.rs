//! This module contains a stub dictionary.

use super::{DataDictionary, DataDictionaryEntryRef};
use crate::header::Tag;

/// An empty attribute dictionary.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct StubDataDictionary;

impl DataDictionary for StubDataDictionary {
    type Entry = DataDictionaryEntryRef<'static>;
    fn by_name(&self, _: &str) -> Option<&DataDictionaryEntryRef<'static>> {
        None
    }

    fn by_tag(&self, _: Tag) -> Option<&DataDictionaryEntryRef<'static>> {
        None
    }
}

impl<'a> DataDictionary for &'a StubDataDictionary {
    type Entry = DataDictionaryEntryRef<'static>;
    fn by_name(&self, _: &str) -> Option<&DataDictionaryEntryRef<'static>> {
        None
    }

    fn by_tag(&self, _: Tag) -> Option<&DataDictionaryEntryRef<'static>> {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::StubDataDictionary;
    use crate::dictionary::{DataDictionary, TagByName};
    use crate::header::Tag;

    #[test]
    fn stub_knows_nothing() {
        let dict = StubDataDictionary;
        assert_eq!(dict.by_tag(Tag(0x0010, 0x0010)), None);
        assert_eq!(dict.by_name("PatientName"), None);
        assert_eq!(dict.by_expr("(0010,0010)"), None);
        assert_eq!(dict.by_expr("PatientName"), None);
    }

    #[test]
    fn stub_still_parses_tags() {
        let dict = StubDataDictionary;
        assert_eq!(dict.parse_tag("(0010,0010)"), Some(Tag(0x0010, 0x0010)));
        assert_eq!(dict.parse_tag("00100010"), Some(Tag(0x0010, 0x0010)));
        assert_eq!(dict.parse_tag("PatientName"), None);

        let tag: Option<Tag> = TagByName::new(&dict, "PatientName").into();
        assert_eq!(tag, None);
    }
}
