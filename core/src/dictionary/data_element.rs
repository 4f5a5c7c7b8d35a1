//! Core data element dictionary types

use std::fmt;
use std::str::FromStr;

use snafu::{ensure, Backtrace, OptionExt, ResultExt, Snafu};

use super::Multiplicity;
use crate::{Tag, VR};

/// Specification of a range of tags pertaining to an attribute.
/// Very often, the dictionary of attributes indicates a unique
/// group part and element part `(group,elem)`,
/// but occasionally an attribute may cover
/// a range of groups or elements instead.
/// For example,
/// _Overlay Data_ (60xx,3000) has more than one possible tag,
/// since it is part of a repeating group.
/// Moreover, a unique variant is defined for group length tags
/// and another one for private creator tags.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum TagRange {
    /// Only a specific tag
    Single(Tag),
    /// The two rightmost digits of the _group_ portion are open:
    /// `(GGxx,EEEE)`
    Group100(Tag),
    /// The two rightmost digits of the _element_ portion are open:
    /// `(GGGG,EExx)`
    Element100(Tag),
    /// Generic group length tag,
    /// refers to any attribute of the form `(GGGG,0000)`,
    /// _save for the following exceptions_
    /// which have their own single tag record:
    ///
    /// - _Command Group Length_ (0000,0000)
    /// - _File Meta Information Group Length_ (0002,0000)
    GroupLength,
    /// Generic private creator tag,
    /// refers to any tag from (GGGG,0010) to (GGGG,00FF),
    /// where `GGGG` is an odd number.
    PrivateCreator,
}

impl TagRange {
    /// Retrieve the inner tag representation of this range.
    ///
    /// Open components are zeroed out.
    /// Returns a zeroed out tag
    /// (equivalent to _Command Group Length_)
    /// if it is a group length tag.
    /// If it is a private creator tag,
    /// this method returns `Tag(0x0009, 0x0010)`.
    pub fn inner(self) -> Tag {
        match self {
            TagRange::Single(tag) => tag,
            TagRange::Group100(tag) => tag,
            TagRange::Element100(tag) => tag,
            TagRange::GroupLength => Tag(0x0000, 0x0000),
            TagRange::PrivateCreator => Tag(0x0009, 0x0010),
        }
    }

    /// Check whether the given tag is covered by this range.
    pub fn contains(self, tag: Tag) -> bool {
        match self {
            TagRange::Single(t) => t == tag,
            TagRange::Group100(t) => {
                !tag.is_private()
                    && tag.group() & 0xFF00 == t.group()
                    && tag.element() == t.element()
            }
            TagRange::Element100(t) => {
                tag.group() == t.group() && tag.element() & 0xFF00 == t.element()
            }
            TagRange::GroupLength => tag.is_group_length(),
            TagRange::PrivateCreator => tag.is_private_creator(),
        }
    }
}

/// An error returned when parsing an invalid tag range.
#[derive(Debug, Snafu)]
#[non_exhaustive]
pub enum TagRangeParseError {
    /// The text has no tag components at all
    #[snafu(display("Not enough tag components, expected tag (group, element)"))]
    MissingTag { backtrace: Backtrace },
    /// The element component is missing
    #[snafu(display("Not enough tag components, expected tag element"))]
    MissingTagElement { backtrace: Backtrace },
    /// The group component is not 4 characters long
    #[snafu(display(
        "tag component `group` has an invalid length: got {} but must be 4",
        got
    ))]
    InvalidGroupLength { got: usize, backtrace: Backtrace },
    /// The element component is not 4 characters long
    #[snafu(display(
        "tag component `element` has an invalid length: got {} but must be 4",
        got
    ))]
    InvalidElementLength { got: usize, backtrace: Backtrace },
    /// The pattern is well formed but not a supported range,
    /// such as `(ggxx,eexx)`
    #[snafu(display("unsupported tag range"))]
    UnsupportedTagRange { backtrace: Backtrace },
    /// The group component has characters other than hexadecimal digits
    #[snafu(display("tag component `group` is not hexadecimal: {:?}", text))]
    InvalidGroupDigits { text: String, backtrace: Backtrace },
    /// The element component has characters other than hexadecimal digits
    #[snafu(display("tag component `element` is not hexadecimal: {:?}", text))]
    InvalidElementDigits { text: String, backtrace: Backtrace },
    /// The group component could not be read as a number
    #[snafu(display("invalid tag component `group`"))]
    InvalidTagGroup {
        backtrace: Backtrace,
        source: std::num::ParseIntError,
    },
    /// The element component could not be read as a number
    #[snafu(display("invalid tag component `element`"))]
    InvalidTagElement {
        backtrace: Backtrace,
        source: std::num::ParseIntError,
    },
}

/// Whether all characters are hexadecimal digits,
/// with `xx` allowed in place of the last two.
fn is_hex_pattern(text: &str) -> bool {
    let digits = text.strip_suffix("xx").unwrap_or(text);
    digits.bytes().all(|b| b.is_ascii_hexdigit())
}

impl FromStr for TagRange {
    type Err = TagRangeParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut s = s.trim();
        if s.starts_with('(') && s.ends_with(')') {
            s = &s[1..s.len() - 1];
        }
        let mut parts = s.split(',');
        let group = parts.next().context(MissingTagSnafu)?.trim();
        let elem = parts.next().context(MissingTagElementSnafu)?.trim();
        ensure!(parts.next().is_none(), UnsupportedTagRangeSnafu);
        ensure!(
            group.len() == 4 && group.is_char_boundary(2),
            InvalidGroupLengthSnafu { got: group.len() }
        );
        ensure!(
            elem.len() == 4 && elem.is_char_boundary(2),
            InvalidElementLengthSnafu { got: elem.len() }
        );
        // `from_str_radix` alone would let a leading sign through
        ensure!(is_hex_pattern(group), InvalidGroupDigitsSnafu { text: group });
        ensure!(is_hex_pattern(elem), InvalidElementDigitsSnafu { text: elem });

        match (&group.as_bytes()[2..], &elem.as_bytes()[2..]) {
            (b"xx", b"xx") => UnsupportedTagRangeSnafu.fail(),
            (b"xx", _) => {
                // Group100
                let group =
                    u16::from_str_radix(&group[..2], 16).context(InvalidTagGroupSnafu)? << 8;
                let elem = u16::from_str_radix(elem, 16).context(InvalidTagElementSnafu)?;
                Ok(TagRange::Group100(Tag(group, elem)))
            }
            (_, b"xx") => {
                // Element100
                let group = u16::from_str_radix(group, 16).context(InvalidTagGroupSnafu)?;
                let elem =
                    u16::from_str_radix(&elem[..2], 16).context(InvalidTagElementSnafu)? << 8;
                Ok(TagRange::Element100(Tag(group, elem)))
            }
            (_, _) => {
                // single element
                let group = u16::from_str_radix(group, 16).context(InvalidTagGroupSnafu)?;
                let elem = u16::from_str_radix(elem, 16).context(InvalidTagElementSnafu)?;
                Ok(TagRange::Single(Tag(group, elem)))
            }
        }
    }
}

/// A "virtual" value representation (VR) descriptor
/// which extends the standard enumeration with context-dependent VRs.
///
/// It is used by element dictionary entries to describe circumstances
/// in which the real VR may depend on context.
/// As an example, the _Pixel Data_ attribute
/// can have a value representation of either [`OB`](VR::OB) or [`OW`](VR::OW).
#[derive(Debug, Copy, Clone, Eq, Hash, PartialEq)]
#[non_exhaustive]
pub enum VirtualVr {
    /// The value representation is exactly known
    /// and does not depend on context.
    Exact(VR),
    /// Represents a pixel data sample value
    /// with a short magnitude.
    ///
    /// The value representation depends on
    /// the pixel data value sample representation.
    /// If pixel data values are signed
    /// (represented by a _Pixel Representation_ value of `1`),
    /// then values with this virtual VR
    /// should be interpreted as signed 16 bit integers
    /// ([`SS`](VR::SS)),
    /// otherwise they should be interpreted as unsigned 16 bit integers
    /// ([`US`](VR::US)).
    Xs,
    /// Represents overlay data sample values.
    ///
    /// It can be either [`OB`](VR::OB) or [`OW`](VR::OW).
    Ox,
    /// Represents pixel data sample value.
    ///
    /// It can be either [`OB`](VR::OB) or [`OW`](VR::OW).
    Px,
    /// Represents LUT data, which can be [`US`](VR::US) or [`OW`](VR::OW)
    Lt,
    /// Represents legacy gray LUT data,
    /// which can be [`US`](VR::US), [`SS`](VR::SS) or [`OW`](VR::OW)
    Xw,
    /// No value representation applies.
    ///
    /// Used by the item and sequence delimitation records,
    /// which do not carry a value.
    Empty,
}

impl From<VR> for VirtualVr {
    fn from(value: VR) -> Self {
        VirtualVr::Exact(value)
    }
}

impl VirtualVr {
    /// Return the underlying value representation
    /// in the case that it can be unambiguously defined without context.
    pub fn exact(self) -> Option<VR> {
        match self {
            VirtualVr::Exact(vr) => Some(vr),
            _ => None,
        }
    }

    /// Return the underlying value representation,
    /// making a relaxed conversion if it cannot be
    /// accurately resolved without context.
    ///
    /// - [`Xs`](VirtualVr::Xs) is relaxed to [`US`](VR::US)
    /// - [`Ox`](VirtualVr::Ox) is relaxed to [`OW`](VR::OW)
    /// - [`Px`](VirtualVr::Px) is relaxed to [`OW`](VR::OW)
    /// - [`Lt`](VirtualVr::Lt) is relaxed to [`OW`](VR::OW)
    /// - [`Xw`](VirtualVr::Xw) is relaxed to [`OW`](VR::OW)
    /// - [`Empty`](VirtualVr::Empty) is relaxed to [`UN`](VR::UN)
    ///
    /// This method is ill-advised for uses where
    /// the corresponding attribute is important.
    pub fn relaxed(self) -> VR {
        match self {
            VirtualVr::Exact(vr) => vr,
            VirtualVr::Xs => VR::US,
            VirtualVr::Ox => VR::OW,
            VirtualVr::Px => VR::OW,
            VirtualVr::Lt => VR::OW,
            VirtualVr::Xw => VR::OW,
            VirtualVr::Empty => VR::UN,
        }
    }

    /// Obtain all value representations admitted by this descriptor,
    /// in the order in which the registry lists them.
    pub fn candidates(&self) -> &[VR] {
        match self {
            VirtualVr::Exact(vr) => std::slice::from_ref(vr),
            VirtualVr::Xs => &[VR::US, VR::SS],
            VirtualVr::Ox | VirtualVr::Px => &[VR::OB, VR::OW],
            VirtualVr::Lt => &[VR::US, VR::OW],
            VirtualVr::Xw => &[VR::US, VR::SS, VR::OW],
            VirtualVr::Empty => &[],
        }
    }
}

/// An error returned when parsing an unrecognized VR set.
#[derive(Debug, Snafu)]
#[snafu(display("unrecognized value representation `{}`", text))]
pub struct ParseVirtualVrError {
    text: String,
    backtrace: Backtrace,
}

/// Parse a set of value representations
/// as written in the data element registry,
/// such as `"US"`, `"US or SS"`, or `"OB/OW"`.
///
/// Both `"OB or OW"` and `"OW or OB"` resolve to [`Ox`](VirtualVr::Ox).
/// The empty string resolves to [`Empty`](VirtualVr::Empty).
impl FromStr for VirtualVr {
    type Err = ParseVirtualVrError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let text = s.trim();
        if text.is_empty() {
            return Ok(VirtualVr::Empty);
        }

        let mut codes = [VR::UN; 3];
        let mut count = 0;
        for part in text.split(" or ").flat_map(|p| p.split('/')) {
            ensure!(count < codes.len(), ParseVirtualVrSnafu { text: s });
            codes[count] = part
                .trim()
                .parse()
                .ok()
                .context(ParseVirtualVrSnafu { text: s })?;
            count += 1;
        }
        let codes = &mut codes[..count];
        codes.sort_unstable();

        match codes {
            [vr] => Ok(VirtualVr::Exact(*vr)),
            [VR::SS, VR::US] => Ok(VirtualVr::Xs),
            [VR::OB, VR::OW] => Ok(VirtualVr::Ox),
            [VR::OW, VR::US] => Ok(VirtualVr::Lt),
            [VR::OW, VR::SS, VR::US] => Ok(VirtualVr::Xw),
            _ => ParseVirtualVrSnafu { text: s }.fail(),
        }
    }
}

impl fmt::Display for VirtualVr {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for (i, vr) in self.candidates().iter().copied().enumerate() {
            if i > 0 {
                f.write_str("/")?;
            }
            f.write_str(vr.to_string())?;
        }
        Ok(())
    }
}

/// Type trait for a dictionary of DICOM attributes.
///
/// The main purpose of an attribute dictionary is
/// to retrieve a record containing additional information about a data element,
/// in one of the following ways:
///
/// - By DICOM tag, via [`by_tag`][1];
/// - By its keyword (also known as alias) via [`by_name`][2];
/// - By an expression which may either be a keyword
///   or a tag printed in one of its standard forms,
///   using [`by_expr`][3].
///
/// These methods will return `None`
/// when the tag or name is not recognized by the dictionary.
/// This is an expected outcome for private and vendor specific attributes,
/// not an error.
///
/// In addition,
/// the data element dictionary provides
/// a built-in DICOM tag parser for convenience:
/// [`parse_tag`][4] converts an arbitrary expression to a tag.
///
/// [1]: DataDictionary::by_tag
/// [2]: DataDictionary::by_name
/// [3]: DataDictionary::by_expr
/// [4]: DataDictionary::parse_tag
pub trait DataDictionary {
    /// The type of the dictionary entry.
    type Entry: DataDictionaryEntry;

    /// Fetch a data element entry by its tag.
    fn by_tag(&self, tag: Tag) -> Option<&Self::Entry>;

    /// Fetch an entry by its usual alias
    /// (e.g. "PatientName" or "SOPInstanceUID").
    /// Aliases (or keyword)
    /// are usually in UpperCamelCase,
    /// not separated by spaces,
    /// and are case sensitive.
    ///
    /// Querying the dictionary by name is usually
    /// slightly more expensive than by DICOM tag.
    /// If the parameter provided is a string literal
    /// (e.g. `"StudyInstanceUID"`),
    /// then it may be better to use [`by_tag`][1]
    /// with a known tag constant
    /// (such as `tags::STUDY_INSTANCE_UID`
    /// from the `dcmtags-dictionary` crate).
    ///
    /// [1]: DataDictionary::by_tag
    fn by_name(&self, name: &str) -> Option<&Self::Entry>;

    /// Fetch an entry by its alias or by DICOM tag expression.
    ///
    /// This method accepts a tag descriptor in any of the following formats:
    ///
    /// - `(gggg,eeee)`:
    ///   a 4-digit hexadecimal group part
    ///   and a 4-digit hexadecimal element part
    ///   surrounded by parentheses
    /// - `gggg,eeee`:
    ///   a 4-digit hexadecimal group part
    ///   and a 4-digit hexadecimal element part
    ///   not surrounded by parentheses
    /// - `ggggeeee`:
    ///   the two parts written together
    /// - _`KeywordName`_:
    ///   an exact match (case sensitive) by DICOM tag keyword
    ///
    /// When failing to identify the intended syntax or the tag keyword,
    /// `None` is returned.
    fn by_expr(&self, tag: &str) -> Option<&Self::Entry> {
        match tag.parse() {
            Ok(tag) => self.by_tag(tag),
            Err(_) => self.by_name(tag),
        }
    }

    /// Use this data element dictionary to interpret a DICOM tag.
    ///
    /// Accepts the same formats as [`by_expr`](DataDictionary::by_expr).
    /// A well formed tag is returned as is,
    /// even if the dictionary does not know it.
    ///
    /// When failing to identify the intended syntax or the tag keyword,
    /// `None` is returned.
    fn parse_tag(&self, tag: &str) -> Option<Tag> {
        tag.parse().ok().or_else(|| {
            // look for tag in the dictionary
            self.by_name(tag).map(|e| e.tag())
        })
    }
}

/// The data element dictionary entry type,
/// representing a DICOM attribute.
pub trait DataDictionaryEntry {
    /// The full possible tag range of the attribute,
    /// which this dictionary entry can represent.
    fn tag_range(&self) -> TagRange;

    /// Fetch a single tag applicable to this attribute.
    ///
    /// Note that this is not necessarily
    /// the original tag used as key for this entry.
    fn tag(&self) -> Tag {
        self.tag_range().inner()
    }
    /// The alias of the attribute, with no spaces, usually in UpperCamelCase.
    fn alias(&self) -> &str;

    /// The human readable name of the attribute,
    /// as written in the registry (e.g. `Exposure in µAs`).
    fn name(&self) -> &str;

    /// The extended value representation descriptor of the attribute.
    /// The use of [`VirtualVr`] is to attend to edge cases
    /// in which the representation of a value
    /// depends on surrounding context.
    fn vr(&self) -> VirtualVr;

    /// The value multiplicity of the attribute.
    fn vm(&self) -> Multiplicity;

    /// Whether the attribute has been retired from the standard.
    fn is_retired(&self) -> bool;
}

/// A data type for a dictionary entry with full ownership.
#[derive(Debug, PartialEq, Clone)]
pub struct DataDictionaryEntryBuf {
    /// The attribute tag range
    pub tag: TagRange,
    /// The alias of the attribute, with no spaces, usually InCapitalizedCamelCase
    pub alias: String,
    /// The human readable name of the attribute
    pub name: String,
    /// The _typical_  value representation of the attribute
    pub vr: VirtualVr,
    /// The value multiplicity
    pub vm: Multiplicity,
    /// Whether the attribute is retired
    pub retired: bool,
}

impl DataDictionaryEntry for DataDictionaryEntryBuf {
    fn tag_range(&self) -> TagRange {
        self.tag
    }
    fn alias(&self) -> &str {
        self.alias.as_str()
    }
    fn name(&self) -> &str {
        self.name.as_str()
    }
    fn vr(&self) -> VirtualVr {
        self.vr
    }
    fn vm(&self) -> Multiplicity {
        self.vm
    }
    fn is_retired(&self) -> bool {
        self.retired
    }
}

impl<'a> From<&DataDictionaryEntryRef<'a>> for DataDictionaryEntryBuf {
    fn from(entry: &DataDictionaryEntryRef<'a>) -> Self {
        DataDictionaryEntryBuf {
            tag: entry.tag,
            alias: entry.alias.to_string(),
            name: entry.name.to_string(),
            vr: entry.vr,
            vm: entry.vm,
            retired: entry.retired,
        }
    }
}

/// A data type for a dictionary entry with string slices for its alias and name.
#[derive(Debug, PartialEq, Clone)]
pub struct DataDictionaryEntryRef<'a> {
    /// The attribute tag or tag range
    pub tag: TagRange,
    /// The alias of the attribute, with no spaces, usually InCapitalizedCamelCase
    pub alias: &'a str,
    /// The human readable name of the attribute
    pub name: &'a str,
    /// The extended value representation descriptor of the attribute
    pub vr: VirtualVr,
    /// The value multiplicity
    pub vm: Multiplicity,
    /// Whether the attribute is retired
    pub retired: bool,
}

impl<'a> DataDictionaryEntryRef<'a> {
    /// Create a dictionary entry, usable in constant tables.
    pub const fn new(
        tag: TagRange,
        alias: &'a str,
        name: &'a str,
        vr: VirtualVr,
        vm: Multiplicity,
        retired: bool,
    ) -> Self {
        DataDictionaryEntryRef {
            tag,
            alias,
            name,
            vr,
            vm,
            retired,
        }
    }
}

impl<'a> DataDictionaryEntry for DataDictionaryEntryRef<'a> {
    fn tag_range(&self) -> TagRange {
        self.tag
    }
    fn alias(&self) -> &str {
        self.alias
    }
    fn name(&self) -> &str {
        self.name
    }
    fn vr(&self) -> VirtualVr {
        self.vr
    }
    fn vm(&self) -> Multiplicity {
        self.vm
    }
    fn is_retired(&self) -> bool {
        self.retired
    }
}

/// Utility data structure that resolves to a DICOM attribute tag
/// at a later time.
#[derive(Debug, Clone)]
pub struct TagByName<N, D> {
    dict: D,
    name: N,
}

impl<N, D> TagByName<N, D>
where
    N: AsRef<str>,
    D: DataDictionary,
{
    /// Create a tag resolver by name using the given dictionary.
    pub fn new(dictionary: D, name: N) -> TagByName<N, D> {
        TagByName {
            dict: dictionary,
            name,
        }
    }
}

impl<N, D> From<TagByName<N, D>> for Option<Tag>
where
    N: AsRef<str>,
    D: DataDictionary,
{
    fn from(tag: TagByName<N, D>) -> Option<Tag> {
        tag.dict.by_name(tag.name.as_ref()).map(|e| e.tag())
    }
}

#[cfg(test)]
mod tests {
    use super::{DataDictionaryEntry, DataDictionaryEntryBuf, DataDictionaryEntryRef};
    use super::{TagRange, TagRangeParseError, VirtualVr};
    use crate::dictionary::Multiplicity;
    use crate::header::{Tag, VR};

    #[test]
    fn test_parse_tag_range() {
        let tag: TagRange = "(1234,5678)".parse().unwrap();
        assert_eq!(tag, TagRange::Single(Tag(0x1234, 0x5678)));

        let tag: TagRange = "1234,5678".parse().unwrap();
        assert_eq!(tag, TagRange::Single(Tag(0x1234, 0x5678)));

        let tag: TagRange = "12xx,5678".parse().unwrap();
        assert_eq!(tag, TagRange::Group100(Tag(0x1200, 0x5678)));

        let tag: TagRange = "1234,56xx".parse().unwrap();
        assert_eq!(tag, TagRange::Element100(Tag(0x1234, 0x5600)));

        assert!("(60xx,30xx)".parse::<TagRange>().is_err());
        assert!("(1000,xxx0)".parse::<TagRange>().is_err());
        assert!("(0028,001)".parse::<TagRange>().is_err());
        assert!("(0028)".parse::<TagRange>().is_err());
    }

    #[test]
    fn tag_range_rejects_signs_and_stray_characters() {
        assert!(matches!(
            "+1xx,0010".parse::<TagRange>(),
            Err(TagRangeParseError::InvalidGroupDigits { .. })
        ));
        assert!(matches!(
            "(+123,0010)".parse::<TagRange>(),
            Err(TagRangeParseError::InvalidGroupDigits { .. })
        ));
        assert!(matches!(
            "(0028,-010)".parse::<TagRange>(),
            Err(TagRangeParseError::InvalidElementDigits { .. })
        ));
        assert!(matches!(
            "(0028,+0xx)".parse::<TagRange>(),
            Err(TagRangeParseError::InvalidElementDigits { .. })
        ));
        assert!("(x0xx,0010)".parse::<TagRange>().is_err());
        assert!("(60XX,3000)".parse::<TagRange>().is_err());
    }

    #[test]
    fn tag_range_membership() {
        let overlay_data = TagRange::Group100(Tag(0x6000, 0x3000));
        assert!(overlay_data.contains(Tag(0x6000, 0x3000)));
        assert!(overlay_data.contains(Tag(0x601E, 0x3000)));
        assert!(!overlay_data.contains(Tag(0x6100, 0x3000)));
        assert!(!overlay_data.contains(Tag(0x6000, 0x3001)));
        // odd groups are private, never part of a repeating group
        assert!(!overlay_data.contains(Tag(0x6001, 0x3000)));
        assert!(!overlay_data.contains(Tag(0x60FF, 0x3000)));
        assert!(!TagRange::Group100(Tag(0x5000, 0x3000)).contains(Tag(0x5001, 0x3000)));

        let elements = TagRange::Element100(Tag(0x0020, 0x3100));
        assert!(elements.contains(Tag(0x0020, 0x31FF)));
        assert!(!elements.contains(Tag(0x0020, 0x3200)));

        assert!(TagRange::GroupLength.contains(Tag(0x0018, 0x0000)));
        assert!(!TagRange::GroupLength.contains(Tag(0x0018, 0x0001)));
        assert!(TagRange::PrivateCreator.contains(Tag(0x0029, 0x0010)));
        assert!(!TagRange::PrivateCreator.contains(Tag(0x0028, 0x0010)));

        assert!(TagRange::Single(Tag(0x0028, 0x0010)).contains(Tag(0x0028, 0x0010)));
        assert!(!TagRange::Single(Tag(0x0028, 0x0010)).contains(Tag(0x0028, 0x0011)));
    }

    #[test]
    fn parse_virtual_vr() {
        assert_eq!("US".parse::<VirtualVr>().unwrap(), VirtualVr::Exact(VR::US));
        assert_eq!("US or SS".parse::<VirtualVr>().unwrap(), VirtualVr::Xs);
        assert_eq!("US/SS".parse::<VirtualVr>().unwrap(), VirtualVr::Xs);
        assert_eq!("OB or OW".parse::<VirtualVr>().unwrap(), VirtualVr::Ox);
        assert_eq!("OW or OB".parse::<VirtualVr>().unwrap(), VirtualVr::Ox);
        assert_eq!("US or OW".parse::<VirtualVr>().unwrap(), VirtualVr::Lt);
        assert_eq!("US or SS or OW".parse::<VirtualVr>().unwrap(), VirtualVr::Xw);
        assert_eq!("".parse::<VirtualVr>().unwrap(), VirtualVr::Empty);

        assert!("See Note".parse::<VirtualVr>().is_err());
        assert!("US or UL".parse::<VirtualVr>().is_err());
        assert!("US or SS or OW or OB".parse::<VirtualVr>().is_err());
    }

    #[test]
    fn virtual_vr_candidates() {
        assert_eq!(VirtualVr::Exact(VR::SQ).candidates(), &[VR::SQ]);
        assert_eq!(VirtualVr::Xs.candidates(), &[VR::US, VR::SS]);
        assert_eq!(VirtualVr::Px.candidates(), &[VR::OB, VR::OW]);
        assert!(VirtualVr::Empty.candidates().is_empty());

        assert_eq!(VirtualVr::Xs.exact(), None);
        assert_eq!(VirtualVr::Exact(VR::UI).exact(), Some(VR::UI));
        assert_eq!(VirtualVr::Xs.relaxed(), VR::US);

        assert_eq!(VirtualVr::Xs.to_string(), "US/SS");
        assert_eq!(VirtualVr::Xw.to_string(), "US/SS/OW");
        assert_eq!(VirtualVr::Exact(VR::DS).to_string(), "DS");
        assert_eq!(VirtualVr::Empty.to_string(), "");
    }

    #[test]
    fn owned_entry_from_ref() {
        let entry = DataDictionaryEntryRef::new(
            TagRange::Single(Tag(0x0018, 0x1153)),
            "ExposureInuAs",
            "Exposure in µAs",
            VirtualVr::Exact(VR::IS),
            Multiplicity::Exact(1),
            false,
        );
        let owned = DataDictionaryEntryBuf::from(&entry);
        assert_eq!(owned.tag(), Tag(0x0018, 0x1153));
        assert_eq!(owned.alias(), "ExposureInuAs");
        assert_eq!(owned.name(), "Exposure in µAs");
        assert_eq!(owned.vr(), VirtualVr::Exact(VR::IS));
        assert_eq!(owned.vm(), Multiplicity::Exact(1));
        assert!(!owned.is_retired());
    }
}
