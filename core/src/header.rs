//! This module contains the basic data types required for identifying DICOM attributes:
//! the DICOM attribute tag and the value representation enumeration.

use snafu::{Backtrace, OptionExt, Snafu};
use std::fmt;
use std::str::{from_utf8, FromStr};

/// An enum type for a DICOM value representation.
#[derive(Debug, Eq, PartialEq, Hash, Copy, Clone, Ord, PartialOrd)]
pub enum VR {
    /// Application Entity
    AE,
    /// Age String
    AS,
    /// Attribute Tag
    AT,
    /// Code String
    CS,
    /// Date
    DA,
    /// Decimal String
    DS,
    /// Date Time
    DT,
    /// Floating Point Single
    FL,
    /// Floating Point Double
    FD,
    /// Integer String
    IS,
    /// Long String
    LO,
    /// Long Text
    LT,
    /// Other Byte
    OB,
    /// Other Double
    OD,
    /// Other Float
    OF,
    /// Other Long
    OL,
    /// Other Very Long
    OV,
    /// Other Word
    OW,
    /// Person Name
    PN,
    /// Short String
    SH,
    /// Signed Long
    SL,
    /// Sequence of Items
    SQ,
    /// Signed Short
    SS,
    /// Short Text
    ST,
    /// Signed Very Long
    SV,
    /// Time
    TM,
    /// Unlimited Characters
    UC,
    /// Unique Identifier (UID)
    UI,
    /// Unsigned Long
    UL,
    /// Unknown
    UN,
    /// Universal Resource Identifier or Universal Resource Locator (URI/URL)
    UR,
    /// Unsigned Short
    US,
    /// Unlimited Text
    UT,
    /// Unsigned Very Long
    UV,
}

impl VR {
    /// Obtain the value representation corresponding to the given two bytes.
    /// Each byte should represent an alphabetic character in upper case.
    pub fn from_binary(chars: [u8; 2]) -> Option<Self> {
        from_utf8(chars.as_ref())
            .ok()
            .and_then(|s| VR::from_str(s).ok())
    }

    /// Retrieve a string representation of this VR.
    pub fn to_string(self) -> &'static str {
        use VR::*;
        match self {
            AE => "AE",
            AS => "AS",
            AT => "AT",
            CS => "CS",
            DA => "DA",
            DS => "DS",
            DT => "DT",
            FL => "FL",
            FD => "FD",
            IS => "IS",
            LO => "LO",
            LT => "LT",
            OB => "OB",
            OD => "OD",
            OF => "OF",
            OL => "OL",
            OV => "OV",
            OW => "OW",
            PN => "PN",
            SH => "SH",
            SL => "SL",
            SQ => "SQ",
            SS => "SS",
            ST => "ST",
            SV => "SV",
            TM => "TM",
            UC => "UC",
            UI => "UI",
            UL => "UL",
            UN => "UN",
            UR => "UR",
            US => "US",
            UT => "UT",
            UV => "UV",
        }
    }

    /// Retrieve a copy of this VR's byte representation.
    /// The function returns two alphabetic characters in upper case.
    pub fn to_bytes(self) -> [u8; 2] {
        let bytes = self.to_string().as_bytes();
        [bytes[0], bytes[1]]
    }
}

/// Obtain the value representation corresponding to the given string.
/// The string should hold exactly two UTF-8 encoded alphabetic characters
/// in upper case, otherwise no match is made.
impl FromStr for VR {
    type Err = &'static str;

    fn from_str(string: &str) -> std::result::Result<Self, Self::Err> {
        use VR::*;
        match string {
            "AE" => Ok(AE),
            "AS" => Ok(AS),
            "AT" => Ok(AT),
            "CS" => Ok(CS),
            "DA" => Ok(DA),
            "DS" => Ok(DS),
            "DT" => Ok(DT),
            "FL" => Ok(FL),
            "FD" => Ok(FD),
            "IS" => Ok(IS),
            "LO" => Ok(LO),
            "LT" => Ok(LT),
            "OB" => Ok(OB),
            "OD" => Ok(OD),
            "OF" => Ok(OF),
            "OL" => Ok(OL),
            "OV" => Ok(OV),
            "OW" => Ok(OW),
            "PN" => Ok(PN),
            "SH" => Ok(SH),
            "SL" => Ok(SL),
            "SQ" => Ok(SQ),
            "SS" => Ok(SS),
            "ST" => Ok(ST),
            "SV" => Ok(SV),
            "TM" => Ok(TM),
            "UC" => Ok(UC),
            "UI" => Ok(UI),
            "UL" => Ok(UL),
            "UN" => Ok(UN),
            "UR" => Ok(UR),
            "US" => Ok(US),
            "UT" => Ok(UT),
            "UV" => Ok(UV),
            _ => Err("no such value representation"),
        }
    }
}

impl fmt::Display for VR {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(VR::to_string(*self))
    }
}

/// Idiomatic alias for a tag's group number.
pub type GroupNumber = u16;
/// Idiomatic alias for a tag's element number.
pub type ElementNumber = u16;

/// An error returned when parsing an invalid DICOM tag.
#[derive(Debug, Snafu)]
#[non_exhaustive]
pub enum ParseTagError {
    /// The text is not a tag in any of the accepted forms
    #[snafu(display("malformed DICOM tag `{}`", text))]
    Malformed { text: String, backtrace: Backtrace },
}

/// The data type for DICOM data element tags.
///
/// A tag is a (group, element) pair of 16-bit unsigned integers.
/// Tags are compared by group first, then by element.
/// Both `(u16, u16)` and `[u16; 2]` can be
/// efficiently converted to this type as well.
///
/// The textual form `(gggg,eeee)` can be obtained via [`Display`](fmt::Display),
/// and parsed back via [`FromStr`]:
///
/// ```
/// # use dcmtags_core::Tag;
/// let tag: Tag = "(0028,0010)".parse()?;
/// assert_eq!(tag, Tag(0x0028, 0x0010));
/// assert_eq!(tag.to_string(), "(0028,0010)");
/// # Ok::<(), dcmtags_core::ParseTagError>(())
/// ```
#[derive(PartialEq, Eq, Hash, PartialOrd, Ord, Clone, Copy)]
pub struct Tag(pub GroupNumber, pub ElementNumber);

impl Tag {
    /// Item (FFFE,E000)
    pub const ITEM: Tag = Tag(0xFFFE, 0xE000);
    /// Item Delimitation Item (FFFE,E00D)
    pub const ITEM_DELIMITER: Tag = Tag(0xFFFE, 0xE00D);
    /// Sequence Delimitation Item (FFFE,E0DD)
    pub const SEQUENCE_DELIMITER: Tag = Tag(0xFFFE, 0xE0DD);

    /// Create a tag from its group and element numbers.
    #[inline]
    pub const fn new(group: GroupNumber, element: ElementNumber) -> Self {
        Tag(group, element)
    }

    /// Getter for the tag's group value.
    #[inline]
    pub fn group(self) -> GroupNumber {
        self.0
    }

    /// Getter for the tag's element value.
    #[inline]
    pub fn element(self) -> ElementNumber {
        self.1
    }

    /// Whether this tag belongs to a private group,
    /// which is the case for all odd group numbers.
    #[inline]
    pub fn is_private(self) -> bool {
        self.0 & 1 == 1
    }

    /// Whether this is a group length tag `(gggg,0000)`.
    #[inline]
    pub fn is_group_length(self) -> bool {
        self.1 == 0x0000
    }

    /// Whether this tag reserves a block of private data elements,
    /// `(gggg,0010)` to `(gggg,00FF)` in an odd group.
    #[inline]
    pub fn is_private_creator(self) -> bool {
        self.is_private() && (0x0010..=0x00FF).contains(&self.1)
    }

    /// Whether this tag is one of the structural delimiters in group `FFFE`
    /// (item, item delimitation item, or sequence delimitation item).
    /// These do not identify data attributes.
    #[inline]
    pub fn is_delimiter(self) -> bool {
        self.0 == 0xFFFE
    }
}

fn parse_component(text: &str) -> Option<u16> {
    if text.len() != 4 || !text.bytes().all(|b| b.is_ascii_hexdigit()) {
        return None;
    }
    u16::from_str_radix(text, 16).ok()
}

/// Parse a tag in one of the forms
/// `(gggg,eeee)`, `gggg,eeee`, or `ggggeeee`,
/// where each component has exactly 4 hexadecimal digits (in any case).
impl FromStr for Tag {
    type Err = ParseTagError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let text = s.trim();
        let inner = if text.len() >= 2 && text.starts_with('(') && text.ends_with(')') {
            &text[1..text.len() - 1]
        } else {
            text
        };

        let (group, element) = match inner.split_once(',') {
            Some(parts) => parts,
            None if inner.len() == 8 && inner.is_char_boundary(4) => inner.split_at(4),
            None => return MalformedSnafu { text: s }.fail(),
        };

        let group = parse_component(group).context(MalformedSnafu { text: s })?;
        let element = parse_component(element).context(MalformedSnafu { text: s })?;
        Ok(Tag(group, element))
    }
}

impl fmt::Debug for Tag {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "Tag({:#06X?}, {:#06X?})", self.0, self.1)
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "({:04x},{:04x})", self.0, self.1)
    }
}

/// Compact form `ggggeeee`, as used for DICOM JSON keys.
impl fmt::UpperHex for Tag {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{:04X}{:04X}", self.0, self.1)
    }
}

impl fmt::LowerHex for Tag {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{:04x}{:04x}", self.0, self.1)
    }
}

impl PartialEq<(u16, u16)> for Tag {
    fn eq(&self, other: &(u16, u16)) -> bool {
        self.0 == other.0 && self.1 == other.1
    }
}

impl PartialEq<[u16; 2]> for Tag {
    fn eq(&self, other: &[u16; 2]) -> bool {
        self.0 == other[0] && self.1 == other[1]
    }
}

impl From<(u16, u16)> for Tag {
    #[inline]
    fn from(value: (u16, u16)) -> Tag {
        Tag(value.0, value.1)
    }
}

impl From<[u16; 2]> for Tag {
    #[inline]
    fn from(value: [u16; 2]) -> Tag {
        Tag(value[0], value[1])
    }
}

impl From<u32> for Tag {
    #[inline]
    fn from(value: u32) -> Tag {
        Tag((value >> 16) as u16, (value & 0xFFFF) as u16)
    }
}

impl From<Tag> for u32 {
    #[inline]
    fn from(tag: Tag) -> u32 {
        (u32::from(tag.0) << 16) | u32::from(tag.1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tag_from_u16_pair() {
        let t = Tag::from((0x0010u16, 0x0020u16));
        assert_eq!(0x0010u16, t.group());
        assert_eq!(0x0020u16, t.element());
    }

    #[test]
    fn tag_from_u16_array() {
        let t = Tag::from([0x0010u16, 0x0020u16]);
        assert_eq!(0x0010u16, t.group());
        assert_eq!(0x0020u16, t.element());
    }

    #[test]
    fn tag_to_and_from_u32() {
        let t = Tag::from(0x7FE0_0010u32);
        assert_eq!(t, Tag(0x7FE0, 0x0010));
        assert_eq!(u32::from(t), 0x7FE0_0010);
    }

    #[test]
    fn tag_equality_is_structural() {
        assert_eq!(Tag(0x0008, 0x0018), Tag::new(0x0008, 0x0018));
        assert_ne!(Tag(0x0008, 0x0018), Tag(0x0018, 0x0008));
        assert_ne!(Tag(0x0008, 0x0018), Tag(0x0008, 0x0016));
        assert_eq!(Tag(0x0008, 0x0018), (0x0008, 0x0018));
        assert_eq!(Tag(0x0008, 0x0018), [0x0008, 0x0018]);
    }

    #[test]
    fn tags_are_ordered_by_group_then_element() {
        assert!(Tag(0x0008, 0xFFFF) < Tag(0x0010, 0x0000));
        assert!(Tag(0x0010, 0x0010) < Tag(0x0010, 0x0020));
        assert!(Tag(0x7FE0, 0x0010) > Tag(0x0028, 0x0010));

        let mut tags = vec![Tag(0x0028, 0x0011), Tag(0x0002, 0x0010), Tag(0x0028, 0x0010)];
        tags.sort();
        assert_eq!(
            tags,
            vec![Tag(0x0002, 0x0010), Tag(0x0028, 0x0010), Tag(0x0028, 0x0011)]
        );
    }

    #[test]
    fn display_tag_lower_hex() {
        assert_eq!(Tag(0x7FE0, 0x0010).to_string(), "(7fe0,0010)");
        assert_eq!(Tag(0x0000, 0x0001).to_string(), "(0000,0001)");
        assert_eq!(format!("{:X}", Tag(0x7FE0, 0x00FF)), "7FE000FF");
        assert_eq!(format!("{:x}", Tag(0x7FE0, 0x00FF)), "7fe000ff");
        assert_eq!(format!("{:?}", Tag(0x7FE0, 0x0010)), "Tag(0x7FE0, 0x0010)");
    }

    #[test]
    fn parse_tag_forms() {
        let expected = Tag(0x0018, 0x5210);
        assert_eq!("(0018,5210)".parse::<Tag>().unwrap(), expected);
        assert_eq!("0018,5210".parse::<Tag>().unwrap(), expected);
        assert_eq!("00185210".parse::<Tag>().unwrap(), expected);
        assert_eq!(" (0018,5210) ".parse::<Tag>().unwrap(), expected);
        assert_eq!(
            "(7fe0,0010)".parse::<Tag>().unwrap(),
            "(7FE0,0010)".parse::<Tag>().unwrap()
        );
    }

    #[test]
    fn parse_malformed_tags() {
        for text in [
            "",
            "()",
            "(0018,521)",
            "(0018,52100)",
            "0018 5210",
            "(0018.5210)",
            "(0018,5210",
            "(+018,5210)",
            "(GGGG,EEEE)",
            "(0018,5210,0000)",
            "PatientName",
            "(µ018,5210)",
        ] {
            let err = text.parse::<Tag>().unwrap_err();
            assert!(
                matches!(&err, ParseTagError::Malformed { text: t, .. } if t == text),
                "unexpected outcome for {:?}: {:?}",
                text,
                err
            );
        }
    }

    #[test]
    fn display_then_parse_is_identity() {
        for tag in [
            Tag(0x0000, 0x0000),
            Tag(0x0009, 0x0001),
            Tag(0x0018, 0x1153),
            Tag(0x7FE0, 0x0010),
            Tag(0xFFFE, 0xE0DD),
            Tag(0xFFFF, 0xFFFF),
        ] {
            assert_eq!(tag.to_string().parse::<Tag>().unwrap(), tag);
            assert_eq!(format!("{:X}", tag).parse::<Tag>().unwrap(), tag);
        }
    }

    #[test]
    fn tag_classification() {
        assert!(!Tag(0x0018, 0x5210).is_private());
        assert!(Tag(0x0009, 0x0001).is_private());

        assert!(Tag(0x0009, 0x0010).is_private_creator());
        assert!(Tag(0x0009, 0x00FF).is_private_creator());
        assert!(!Tag(0x0009, 0x0100).is_private_creator());
        assert!(!Tag(0x0009, 0x0001).is_private_creator());
        assert!(!Tag(0x0008, 0x0010).is_private_creator());

        assert!(Tag(0x0028, 0x0000).is_group_length());
        assert!(!Tag(0x0028, 0x0010).is_group_length());

        assert!(Tag::ITEM.is_delimiter());
        assert!(Tag::ITEM_DELIMITER.is_delimiter());
        assert!(Tag::SEQUENCE_DELIMITER.is_delimiter());
        assert!(!Tag(0x7FE0, 0x0010).is_delimiter());
    }

    #[test]
    fn vr_from_binary() {
        assert_eq!(VR::from_binary(*b"US"), Some(VR::US));
        assert_eq!(VR::from_binary(*b"SQ"), Some(VR::SQ));
        assert_eq!(VR::from_binary(*b"us"), None);
        assert_eq!(VR::from_binary([0xFF, 0x00]), None);
        assert_eq!(VR::UV.to_bytes(), *b"UV");
        assert_eq!(VR::TM.to_string(), "TM");
    }
}
