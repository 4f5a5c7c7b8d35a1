//! A dictionary implemented outside of the core crate
//! gets the provided lookup methods for free.

use dcmtags_core::dictionary::{
    DataDictionary, DataDictionaryEntry, DataDictionaryEntryRef, Multiplicity, TagByName,
    TagRange, VirtualVr,
};
use dcmtags_core::{Tag, VR};

static ENTRIES: &[DataDictionaryEntryRef<'static>] = &[
    DataDictionaryEntryRef::new(
        TagRange::Single(Tag(0x0028, 0x0010)),
        "Rows",
        "Rows",
        VirtualVr::Exact(VR::US),
        Multiplicity::Exact(1),
        false,
    ),
    DataDictionaryEntryRef::new(
        TagRange::Group100(Tag(0x6000, 0x3000)),
        "OverlayData",
        "Overlay Data",
        VirtualVr::Ox,
        Multiplicity::Exact(1),
        false,
    ),
];

#[derive(Debug)]
struct TinyDictionary;

impl DataDictionary for TinyDictionary {
    type Entry = DataDictionaryEntryRef<'static>;

    fn by_tag(&self, tag: Tag) -> Option<&Self::Entry> {
        ENTRIES.iter().find(|e| e.tag_range().contains(tag))
    }

    fn by_name(&self, name: &str) -> Option<&Self::Entry> {
        ENTRIES.iter().find(|e| e.alias() == name)
    }
}

#[test]
fn lookup_through_provided_methods() {
    let dict = TinyDictionary;

    let rows = dict.by_expr("(0028,0010)").unwrap();
    assert_eq!(rows.alias(), "Rows");
    assert_eq!(rows.vr(), VirtualVr::Exact(VR::US));
    assert_eq!(rows.vm(), Multiplicity::Exact(1));
    assert!(!rows.is_retired());

    assert_eq!(dict.by_expr("Rows").map(|e| e.tag()), Some(Tag(0x0028, 0x0010)));
    assert_eq!(dict.parse_tag("Rows"), Some(Tag(0x0028, 0x0010)));
    assert_eq!(dict.parse_tag("Columns"), None);

    let overlay = dict.by_tag(Tag(0x6002, 0x3000)).unwrap();
    assert_eq!(overlay.name(), "Overlay Data");
    assert_eq!(overlay.tag(), Tag(0x6000, 0x3000));

    assert!(dict.by_tag(Tag(0x0009, 0x0001)).is_none());
}

#[test]
fn deferred_tag_by_name() {
    let tag: Option<Tag> = TagByName::new(TinyDictionary, "OverlayData").into();
    assert_eq!(tag, Some(Tag(0x6000, 0x3000)));
}
