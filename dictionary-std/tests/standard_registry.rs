//! Checks of the standard data element registry as a whole.

use dcmtags_core::dictionary::{DataDictionary, DataDictionaryEntry, Multiplicity, VirtualVr};
use dcmtags_core::{Tag, VR};
use dcmtags_dictionary::{registry, tags, StandardDataDictionary};

#[test]
fn retired_flags_are_reported() {
    let dict = StandardDataDictionary;

    let length_to_end = dict.by_tag(Tag(0x0000, 0x0001)).unwrap();
    assert_eq!(length_to_end.name(), "Command Length to End");
    assert_eq!(length_to_end.alias(), "CommandLengthToEnd");
    assert!(length_to_end.is_retired());

    let sop_instance_uid = dict.by_tag(Tag(0x0008, 0x0018)).unwrap();
    assert_eq!(sop_instance_uid.name(), "SOP Instance UID");
    assert_eq!(sop_instance_uid.vr(), VirtualVr::Exact(VR::UI));
    assert!(!sop_instance_uid.is_retired());
}

#[test]
fn private_tags_are_not_found() {
    let dict = StandardDataDictionary;

    assert!(Tag(0x0009, 0x0001).is_private());
    assert!(!Tag(0x0018, 0x5210).is_private());

    assert!(dict.by_tag(Tag(0x0009, 0x0001)).is_none());
    assert!(dict.by_tag(Tag(0x0019, 0x1001)).is_none());
    assert!(dict.by_tag(Tag(0x7FE1, 0x1010)).is_none());
    assert!(dict.by_name("NotAStandardKeyword").is_none());
}

#[test]
fn rows_descriptor() {
    let rows = StandardDataDictionary.by_tag(Tag(0x0028, 0x0010)).unwrap();
    assert_eq!(rows.tag(), tags::ROWS);
    assert_eq!(rows.name(), "Rows");
    assert_eq!(rows.alias(), "Rows");
    assert_eq!(rows.vr().candidates(), &[VR::US]);
    assert_eq!(rows.vm(), Multiplicity::Exact(1));
    assert_eq!(rows.vm().to_string(), "1");
    assert!(!rows.is_retired());
}

#[test]
fn names_keep_non_ascii_characters() {
    let exposure = StandardDataDictionary.by_tag(Tag(0x0018, 0x1153)).unwrap();
    assert_eq!(exposure.name(), "Exposure in \u{00B5}As");
    assert_eq!(exposure.name().chars().count(), 15);
    assert_eq!(exposure.alias(), "ExposureInuAs");
    assert_eq!(exposure.vr(), VirtualVr::Exact(VR::IS));
}

#[test]
fn context_dependent_value_representations() {
    let dict = StandardDataDictionary;

    let smallest = dict.by_name("SmallestImagePixelValue").unwrap();
    assert_eq!(smallest.vr(), VirtualVr::Xs);
    assert_eq!(smallest.vr().to_string(), "US/SS");

    let lut_data = dict.by_name("LUTData").unwrap();
    assert_eq!(lut_data.vr(), VirtualVr::Lt);
    assert_eq!(lut_data.vm(), Multiplicity::AtLeast(1));

    let contour_data = dict.by_tag(tags::CONTOUR_DATA).unwrap();
    assert_eq!(contour_data.vm(), Multiplicity::MultipleOf(3));
    assert!(contour_data.vm().contains(9));
    assert!(!contour_data.vm().contains(4));

    let file_set_descriptor = dict.by_tag(tags::FILE_SET_DESCRIPTOR_FILE_ID).unwrap();
    assert_eq!(file_set_descriptor.vm(), Multiplicity::Bounded(1, 8));

    let image_type = dict.by_tag(tags::IMAGE_TYPE).unwrap();
    assert_eq!(image_type.vm(), Multiplicity::AtLeast(2));
}

#[test]
fn entries_are_strictly_ascending() {
    let tags: Vec<Tag> = StandardDataDictionary.entries().map(|e| e.tag()).collect();
    assert!(!tags.is_empty());
    for pair in tags.windows(2) {
        assert!(pair[0] < pair[1], "{} is not before {}", pair[0], pair[1]);
    }
}

#[test]
fn entries_can_be_restarted() {
    let entries = StandardDataDictionary.entries();
    let first: Vec<Tag> = entries.clone().map(|e| e.tag()).collect();
    let second: Vec<Tag> = entries.map(|e| e.tag()).collect();
    assert_eq!(first, second);

    let third: Vec<Tag> = StandardDataDictionary.entries().map(|e| e.tag()).collect();
    assert_eq!(first, third);
}

#[test]
fn every_entry_is_reachable() {
    let dict = StandardDataDictionary;
    for entry in dict.entries() {
        let by_tag = dict.by_tag(entry.tag()).unwrap();
        assert_eq!(by_tag, entry);

        let by_name = dict.by_name(entry.alias()).unwrap();
        assert_eq!(by_name, entry);

        // the textual form of the tag leads to the same record
        let text = entry.tag().to_string();
        assert_eq!(text.parse::<Tag>().unwrap(), entry.tag());
        assert_eq!(dict.by_expr(&text), Some(entry));
    }
}

#[test]
fn concurrent_first_use_builds_one_registry() {
    let handles: Vec<_> = (0..8)
        .map(|i| {
            std::thread::spawn(move || {
                let r = registry();
                // do some work while others may still be initializing
                let found = StandardDataDictionary
                    .by_tag(Tag(0x0028, 0x0010 + (i % 2)))
                    .map(|e| e.alias());
                (r as *const _ as usize, found, r.len())
            })
        })
        .collect();

    let results: Vec<_> = handles.into_iter().map(|h| h.join().unwrap()).collect();
    let first = registry() as *const _ as usize;
    for (i, (addr, found, len)) in results.into_iter().enumerate() {
        assert_eq!(addr, first);
        assert_eq!(len, StandardDataDictionary.len());
        let expected = if i % 2 == 0 { "Rows" } else { "Columns" };
        assert_eq!(found, Some(expected));
    }

    assert!(std::ptr::eq(registry(), registry()));
}

#[test]
fn registry_spans_the_whole_standard() {
    let dict = StandardDataDictionary;
    assert!(dict.len() >= 4000, "only {} records", dict.len());

    // one record from each of a few modules outside the common patient/study core
    let cases = [
        (Tag(0x0018, 0x9004), "ContentQualification", VirtualVr::Exact(VR::CS)),
        (Tag(0x0040, 0xA730), "ContentSequence", VirtualVr::Exact(VR::SQ)),
        (
            Tag(0x0054, 0x0016),
            "RadiopharmaceuticalInformationSequence",
            VirtualVr::Exact(VR::SQ),
        ),
        (Tag(0x0062, 0x0002), "SegmentSequence", VirtualVr::Exact(VR::SQ)),
        (Tag(0x300A, 0x00B0), "BeamSequence", VirtualVr::Exact(VR::SQ)),
        (Tag(0x300C, 0x0002), "ReferencedRTPlanSequence", VirtualVr::Exact(VR::SQ)),
        (Tag(0x5200, 0x9230), "PerFrameFunctionalGroupsSequence", VirtualVr::Exact(VR::SQ)),
    ];
    for (tag, keyword, vr) in cases {
        let by_tag = dict
            .by_tag(tag)
            .unwrap_or_else(|| panic!("{} should be registered", tag));
        assert_eq!(by_tag.alias(), keyword);
        assert_eq!(by_tag.vr(), vr);
        assert_eq!(dict.by_name(keyword), Some(by_tag));
    }

    assert_eq!(tags::BEAM_SEQUENCE, Tag(0x300A, 0x00B0));
    assert_eq!(
        dict.by_tag(tags::BEAM_SEQUENCE).map(|e| e.name()),
        Some("Beam Sequence")
    );
}

#[test]
fn odd_groups_never_resolve_through_repeating_groups() {
    let dict = StandardDataDictionary;

    // even groups in the range do
    assert_eq!(
        dict.by_tag(Tag(0x6002, 0x3000)).map(|e| e.alias()),
        Some("OverlayData")
    );
    assert_eq!(
        dict.by_tag(Tag(0x5002, 0x3000)).map(|e| e.alias()),
        Some("CurveData")
    );

    // odd groups next to them are private
    assert_eq!(dict.by_tag(Tag(0x6001, 0x3000)), None);
    assert_eq!(dict.by_tag(Tag(0x5001, 0x3000)), None);
    assert_eq!(dict.by_tag(Tag(0x60FF, 0x3000)), None);
    assert_eq!(dict.by_tag(Tag(0x6001, 0x0102)), None);
    assert_eq!(dict.by_expr("(6001,3000)"), None);

    // except for the generic private creator slots
    for tag in [Tag(0x6001, 0x0010), Tag(0x7F01, 0x0010)] {
        assert_eq!(
            dict.by_tag(tag).map(|e| e.alias()),
            Some("PrivateCreator")
        );
    }
}
