use dcmtags_core::prelude::*;

#[test]
fn can_use_prelude() {
    // can refer to `Tag` and `VR`
    let tag = Tag(0x0010, 0x0010);
    assert_eq!(tag.to_string(), "(0010,0010)");
    assert_eq!("PN".parse::<VR>(), Ok(VR::PN));

    // can call `by_tag`
    assert_eq!(
        dcmtags_core::dictionary::stub::StubDataDictionary.by_tag(Tag(0x0010, 0x0010)),
        None,
    );
}
