//! Data element dictionary implementation

use crate::tags::ENTRIES;
use dcmtags_core::dictionary::{
    DataDictionary, DataDictionaryEntryRef, Multiplicity, TagRange::*, VirtualVr,
};
use dcmtags_core::header::Tag;
use dcmtags_core::VR;
use once_cell::sync::Lazy;
use std::collections::{HashMap, HashSet};
use std::fmt;
use std::fmt::{Display, Formatter};

static DICT: Lazy<StandardDataDictionaryRegistry> = Lazy::new(init_dictionary);

/// Retrieve a singleton instance of the standard dictionary registry.
///
/// Note that one does not generally have to call this
/// unless when retrieving the underlying registry is important.
/// The unit type [`StandardDataDictionary`]
/// already provides a lazy loaded singleton implementing the necessary traits.
///
/// The registry is built at most once per process,
/// even if many threads request it at the same time.
#[inline]
pub fn registry() -> &'static StandardDataDictionaryRegistry {
    &DICT
}

/// An iterator over the records of the standard dictionary,
/// in ascending tag order.
pub type Entries = std::slice::Iter<'static, DataDictionaryEntryRef<'static>>;

/// The data struct actually containing the standard dictionary.
///
/// This structure is made opaque via the unit type [`StandardDataDictionary`],
/// which provides a lazy loaded singleton.
#[derive(Debug)]
pub struct StandardDataDictionaryRegistry {
    /// all records, sorted by tag
    entries: &'static [DataDictionaryEntryRef<'static>],
    /// mapping: name → entry
    by_name: HashMap<&'static str, &'static DataDictionaryEntryRef<'static>>,
    /// mapping: tag → entry
    by_tag: HashMap<Tag, &'static DataDictionaryEntryRef<'static>>,
    /// repeating elements of the form (ggxx, eeee). The `xx` portion is zeroed.
    repeating_ggxx: HashSet<Tag>,
    /// repeating elements of the form (gggg, eexx). The `xx` portion is zeroed.
    repeating_eexx: HashSet<Tag>,
}

impl StandardDataDictionaryRegistry {
    fn new(entries: &'static [DataDictionaryEntryRef<'static>]) -> StandardDataDictionaryRegistry {
        StandardDataDictionaryRegistry {
            entries,
            by_name: HashMap::with_capacity(entries.len() + 1),
            by_tag: HashMap::with_capacity(entries.len()),
            repeating_ggxx: HashSet::with_capacity(32),
            repeating_eexx: HashSet::new(),
        }
    }

    /// record the given dictionary entry reference
    fn index(&mut self, entry: &'static DataDictionaryEntryRef<'static>) -> &mut Self {
        self.by_name.insert(entry.alias, entry);
        self.by_tag.insert(entry.tag.inner(), entry);
        match entry.tag {
            Group100(tag) => {
                self.repeating_ggxx.insert(tag);
            }
            Element100(tag) => {
                self.repeating_eexx.insert(tag);
            }
            _ => {}
        }
        self
    }

    /// Iterate over all records of the standard dictionary
    /// in ascending tag order.
    ///
    /// Repeating group and element records
    /// are positioned by their zeroed tag (e.g. _Overlay Data_ as `(6000,3000)`).
    /// Generic records (group length and private creator) are not included.
    #[inline]
    pub fn entries(&self) -> Entries {
        self.entries.iter()
    }

    /// The number of records in the dictionary.
    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the dictionary has no records.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Generic Group Length dictionary entry.
static GROUP_LENGTH_ENTRY: DataDictionaryEntryRef<'static> = DataDictionaryEntryRef {
    tag: GroupLength,
    alias: "GenericGroupLength",
    name: "Generic Group Length",
    vr: VirtualVr::Exact(VR::UL),
    vm: Multiplicity::Exact(1),
    retired: false,
};

/// Generic Private Creator dictionary entry.
static PRIVATE_CREATOR_ENTRY: DataDictionaryEntryRef<'static> = DataDictionaryEntryRef {
    tag: PrivateCreator,
    alias: "PrivateCreator",
    name: "Private Creator",
    vr: VirtualVr::Exact(VR::LO),
    vm: Multiplicity::Exact(1),
    retired: false,
};

/// A data element dictionary which consults
/// the library's global DICOM attribute registry.
///
/// This is the type which would generally be used
/// whenever a data element dictionary is needed.
///
/// The dictionary index is automatically initialized upon the first use.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct StandardDataDictionary;

impl StandardDataDictionary {
    fn indexed_tag(tag: Tag) -> Option<&'static DataDictionaryEntryRef<'static>> {
        // item and sequence delimiters are not attributes
        if tag.is_delimiter() {
            return None;
        }

        let r = registry();

        r.by_tag
            .get(&tag)
            .or_else(|| {
                // check tags repeating in different groups,
                // which only ever span even groups
                if !tag.is_private() {
                    let group_trimmed = Tag(tag.0 & 0xFF00, tag.1);
                    if r.repeating_ggxx.contains(&group_trimmed) {
                        return r.by_tag.get(&group_trimmed);
                    }
                }
                // check tags repeating in different elements
                let elem_trimmed = Tag(tag.0, tag.1 & 0xFF00);
                if r.repeating_eexx.contains(&elem_trimmed) {
                    return r.by_tag.get(&elem_trimmed);
                }

                None
            })
            .cloned()
            .or_else(|| {
                // check for private creator
                if tag.is_private_creator() {
                    return Some(&PRIVATE_CREATOR_ENTRY);
                }
                // check for group length
                if tag.is_group_length() && !tag.is_private() {
                    return Some(&GROUP_LENGTH_ENTRY);
                }

                None
            })
    }

    /// Iterate over all records of the standard dictionary
    /// in ascending tag order.
    ///
    /// The returned iterator can be cloned
    /// to go over the records again.
    #[inline]
    pub fn entries(&self) -> Entries {
        registry().entries()
    }

    /// The number of records in the standard dictionary.
    #[inline]
    pub fn len(&self) -> usize {
        registry().len()
    }

    /// Whether the standard dictionary has no records.
    #[inline]
    pub fn is_empty(&self) -> bool {
        registry().is_empty()
    }
}

impl DataDictionary for StandardDataDictionary {
    type Entry = DataDictionaryEntryRef<'static>;

    fn by_name(&self, name: &str) -> Option<&Self::Entry> {
        registry().by_name.get(name).cloned()
    }

    fn by_tag(&self, tag: Tag) -> Option<&Self::Entry> {
        StandardDataDictionary::indexed_tag(tag)
    }
}

impl<'a> DataDictionary for &'a StandardDataDictionary {
    type Entry = DataDictionaryEntryRef<'static>;

    fn by_name(&self, name: &str) -> Option<&'static DataDictionaryEntryRef<'static>> {
        registry().by_name.get(name).cloned()
    }

    fn by_tag(&self, tag: Tag) -> Option<&'static DataDictionaryEntryRef<'static>> {
        StandardDataDictionary::indexed_tag(tag)
    }
}

impl Display for StandardDataDictionary {
    fn fmt(&self, f: &mut Formatter) -> Result<(), fmt::Error> {
        f.write_str("Standard DICOM Data Dictionary")
    }
}

fn init_dictionary() -> StandardDataDictionaryRegistry {
    let mut d = StandardDataDictionaryRegistry::new(ENTRIES);
    for entry in ENTRIES {
        d.index(entry);
    }
    // generic group length is not a generated entry,
    // inserting it manually
    d.by_name.insert("GenericGroupLength", &GROUP_LENGTH_ENTRY);

    tracing::debug!(
        entries = d.by_tag.len(),
        repeating_groups = d.repeating_ggxx.len(),
        repeating_elements = d.repeating_eexx.len(),
        "Standard data dictionary initialized"
    );
    d
}

#[cfg(test)]
mod tests {
    use super::StandardDataDictionary;
    use dcmtags_core::dictionary::{
        DataDictionary, DataDictionaryEntry, DataDictionaryEntryRef, Multiplicity, TagRange::*,
        VirtualVr,
    };
    use dcmtags_core::header::{Tag, VR};

    // tests for just a few attributes to make sure that the entries
    // were well installed into the crate
    #[test]
    fn smoke_test() {
        let dict = StandardDataDictionary::default();

        assert_eq!(
            dict.by_name("PatientName"),
            Some(&DataDictionaryEntryRef {
                tag: Single(Tag(0x0010, 0x0010)),
                alias: "PatientName",
                name: "Patient's Name",
                vr: VirtualVr::Exact(VR::PN),
                vm: Multiplicity::Exact(1),
                retired: false,
            })
        );

        assert_eq!(
            dict.by_name("Modality"),
            Some(&DataDictionaryEntryRef {
                tag: Single(Tag(0x0008, 0x0060)),
                alias: "Modality",
                name: "Modality",
                vr: VirtualVr::Exact(VR::CS),
                vm: Multiplicity::Exact(1),
                retired: false,
            })
        );

        let pixel_data = dict
            .by_tag(Tag(0x7FE0, 0x0010))
            .expect("Pixel Data attribute should exist");
        assert_eq!(pixel_data.tag, Single(Tag(0x7FE0, 0x0010)));
        assert_eq!(pixel_data.alias, "PixelData");
        assert_eq!(pixel_data.vr, VirtualVr::Px);
        assert_eq!(pixel_data.vr.candidates(), &[VR::OB, VR::OW]);

        let overlay_data = dict
            .by_tag(Tag(0x6000, 0x3000))
            .expect("Overlay Data attribute should exist");
        assert_eq!(overlay_data.tag, Group100(Tag(0x6000, 0x3000)));
        assert_eq!(overlay_data.alias, "OverlayData");
        assert_eq!(overlay_data.vr, VirtualVr::Ox);

        // repeated overlay data
        let overlay_data = dict
            .by_tag(Tag(0x60EE, 0x3000))
            .expect("Repeated Overlay Data attribute should exist");
        assert_eq!(overlay_data.tag, Group100(Tag(0x6000, 0x3000)));
        assert_eq!(overlay_data.alias, "OverlayData");
        assert_eq!(overlay_data.vr, VirtualVr::Ox);

        // repeating elements
        let source_image_ids = dict
            .by_tag(Tag(0x0020, 0x31A5))
            .expect("Source Image IDs attribute should exist");
        assert_eq!(source_image_ids.tag, Element100(Tag(0x0020, 0x3100)));
        assert!(source_image_ids.is_retired());
    }

    // tests for just a few attributes to make sure that the tag constants
    // were well installed into the crate
    #[test]
    fn constants_available() {
        use crate::tags::*;
        assert_eq!(PATIENT_NAME, Tag(0x0010, 0x0010));
        assert_eq!(MODALITY, Tag(0x0008, 0x0060));
        assert_eq!(PIXEL_DATA, Tag(0x7FE0, 0x0010));
        assert_eq!(STATUS, Tag(0x0000, 0x0900));
        assert_eq!(EXPOSURE_INU_AS, Tag(0x0018, 0x1153));
        assert_eq!(OVERLAY_DATA, Tag(0x6000, 0x3000));
        assert_eq!(ITEM, Tag::ITEM);
        assert_eq!(ITEM_DELIMITATION_ITEM, Tag::ITEM_DELIMITER);
        assert_eq!(SEQUENCE_DELIMITATION_ITEM, Tag::SEQUENCE_DELIMITER);
    }

    #[test]
    fn can_parse_tags() {
        let dict = StandardDataDictionary;

        assert_eq!(dict.parse_tag("(7FE0,0010)"), Some(crate::tags::PIXEL_DATA));
        assert_eq!(dict.parse_tag("0010,21C0"), Some(Tag(0x0010, 0x21C0)));
        assert_eq!(
            dict.parse_tag("OperatorsName"),
            Some(crate::tags::OPERATORS_NAME)
        );

        // can't parse these
        assert_eq!(dict.parse_tag(""), None);
        assert_eq!(dict.parse_tag("1111,2222,3333"), None);
        assert_eq!(dict.parse_tag("OperatorNickname"), None);
    }

    #[test]
    fn can_query_by_expression() {
        let dict = StandardDataDictionary;

        assert_eq!(
            dict.by_expr("(0010,0010)").map(|e| e.alias()),
            Some("PatientName"),
        );

        assert_eq!(
            dict.by_expr("0008,0060").map(|e| e.tag_range()),
            Some(Single(crate::tags::MODALITY)),
        );

        let operators_name = dict.by_expr("OperatorsName").unwrap();
        assert_eq!(operators_name.tag(), crate::tags::OPERATORS_NAME);
        assert_eq!(operators_name.name(), "Operators' Name");
        assert_eq!(operators_name.vr(), VirtualVr::Exact(VR::PN));
        assert_eq!(operators_name.vm(), Multiplicity::AtLeast(1));

        // can't handle these
        assert_eq!(dict.parse_tag("0080 0010"), None);
        assert_eq!(dict.parse_tag("(0000.0600)"), None);
        assert_eq!(dict.parse_tag("OPERATORSNAME"), None);
    }

    #[test]
    fn has_group_length_tags() {
        use crate::tags::*;
        assert_eq!(COMMAND_GROUP_LENGTH, Tag(0x0000, 0x0000));
        assert_eq!(FILE_META_INFORMATION_GROUP_LENGTH, Tag(0x0002, 0x0000));

        let dict = StandardDataDictionary::default();

        assert_eq!(
            dict.by_tag(FILE_META_INFORMATION_GROUP_LENGTH),
            Some(&DataDictionaryEntryRef {
                tag: Single(FILE_META_INFORMATION_GROUP_LENGTH),
                alias: "FileMetaInformationGroupLength",
                name: "File Meta Information Group Length",
                vr: VirtualVr::Exact(VR::UL),
                vm: Multiplicity::Exact(1),
                retired: false,
            }),
        );

        assert_eq!(
            dict.by_tag(COMMAND_GROUP_LENGTH).map(|e| e.alias()),
            Some("CommandGroupLength"),
        );

        // generic group length

        let generic_group_length = DataDictionaryEntryRef {
            tag: GroupLength,
            alias: "GenericGroupLength",
            name: "Generic Group Length",
            vr: VirtualVr::Exact(VR::UL),
            vm: Multiplicity::Exact(1),
            retired: false,
        };

        assert_eq!(
            dict.by_tag(Tag(0x7FE0, 0x0000)),
            Some(&generic_group_length),
        );

        assert_eq!(
            dict.by_name("GenericGroupLength"),
            Some(&generic_group_length),
        );

        // not for private groups, nor for delimiters
        assert_eq!(dict.by_tag(Tag(0x0009, 0x0000)), None);
        assert_eq!(dict.by_tag(Tag(0xFFFE, 0x0000)), None);
    }

    #[test]
    fn has_private_creator() {
        let dict = StandardDataDictionary::default();

        let private_creator = DataDictionaryEntryRef {
            tag: PrivateCreator,
            alias: "PrivateCreator",
            name: "Private Creator",
            vr: VirtualVr::Exact(VR::LO),
            vm: Multiplicity::Exact(1),
            retired: false,
        };

        assert_eq!(dict.by_tag(Tag(0x0009, 0x0010)), Some(&private_creator));
        assert_eq!(dict.by_tag(Tag(0x0009, 0x0011)), Some(&private_creator));
        assert_eq!(dict.by_tag(Tag(0x000B, 0x0010)), Some(&private_creator));
        assert_eq!(dict.by_tag(Tag(0x00ED, 0x00FF)), Some(&private_creator));

        // private data elements proper are unknown
        assert_eq!(dict.by_tag(Tag(0x0009, 0x0001)), None);
        assert_eq!(dict.by_tag(Tag(0x0009, 0x1001)), None);
    }

    #[test]
    fn delimiters_are_not_attributes() {
        let dict = StandardDataDictionary;
        assert_eq!(dict.by_tag(Tag::ITEM), None);
        assert_eq!(dict.by_tag(Tag::ITEM_DELIMITER), None);
        assert_eq!(dict.by_tag(Tag::SEQUENCE_DELIMITER), None);
        assert_eq!(dict.by_name("Item"), None);
        assert!(dict.entries().all(|e| !e.tag().is_delimiter()));
    }

    #[test]
    fn registry_length_matches_entries() {
        let dict = StandardDataDictionary;
        assert!(!dict.is_empty());
        assert_eq!(dict.len(), dict.entries().count());
        assert_eq!(dict.len(), crate::tags::ENTRIES.len());
    }
}
