//! Dictionary builder for data element entries.
//!
//! Includes all attributes found in [PS3.6 tables 6-1, 7-1 and 8-1][1]
//! and the command fields in [PS3.7 tables E.1-1 and E.2-1][2].
//!
//! [1]: https://dicom.nema.org/medical/dicom/current/output/chtml/part06/chapter_6.html
//! [2]: https://dicom.nema.org/medical/dicom/current/output/chtml/part07/chapter_E.html

use std::{
    collections::HashSet,
    fs::{create_dir_all, File},
    io::{BufWriter, Write},
    path::Path,
};

use clap::{Parser, ValueEnum};
use dcmtags_core::dictionary::{Multiplicity, TagRange, VirtualVr};
use dcmtags_core::Tag;
use eyre::{bail, Context, ContextCompat, Result};
use heck::ToShoutySnakeCase;
use serde::Serialize;
use sxd_document::parser;
use sxd_xpath::{Factory, Value, XPath};
use tracing::{debug, info, warn};

use crate::common::{read_document, RetiredOptions};

/// URL to DICOM standard Part 6 in XML
const DEFAULT_LOCATION: &str =
    "https://dicom.nema.org/medical/dicom/current/source/docbook/part06/part06.xml";

/// URL to DICOM standard Part 7 in XML
const DEFAULT_COMMAND_LOCATION: &str =
    "https://dicom.nema.org/medical/dicom/current/source/docbook/part07/part07.xml";

/// Positions (1-based) of the columns of a registry table.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
struct Columns {
    tag: usize,
    name: usize,
    keyword: usize,
    vr: usize,
    vm: usize,
    /// column holding `RET` for retired rows, if any
    note: Option<usize>,
}

/// Tag, Name, Keyword, VR, VM, retirement note
const REGISTRY_COLUMNS: Columns = Columns {
    tag: 1,
    name: 2,
    keyword: 3,
    vr: 4,
    vm: 5,
    note: Some(6),
};

/// Message Field, Keyword, Tag, VR, VM, Description of Field
const COMMAND_COLUMNS: Columns = Columns {
    tag: 3,
    name: 1,
    keyword: 2,
    vr: 4,
    vm: 5,
    note: None,
};

/// A table of the standard to read rows from.
#[derive(Debug, Copy, Clone)]
struct RegistryTable {
    label: &'static str,
    /// whether all rows of the table are retired
    retired: bool,
    columns: Columns,
}

impl RegistryTable {
    const fn new(label: &'static str, retired: bool, columns: Columns) -> Self {
        RegistryTable {
            label,
            retired,
            columns,
        }
    }
}

/// Registry tables in PS3.6
const DATA_ELEMENT_TABLES: &[RegistryTable] = &[
    RegistryTable::new("6-1", false, REGISTRY_COLUMNS),
    RegistryTable::new("7-1", false, REGISTRY_COLUMNS),
    RegistryTable::new("8-1", false, REGISTRY_COLUMNS),
];

/// Command field tables in PS3.7, the second one listing retired fields
const COMMAND_TABLES: &[RegistryTable] = &[
    RegistryTable::new("E.1-1", false, COMMAND_COLUMNS),
    RegistryTable::new("E.2-1", true, COMMAND_COLUMNS),
];

/// Output format of the dictionary
#[derive(Debug, Copy, Clone, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Rust source code
    Rs,
    /// JSON array of the normalized registry rows
    Json,
}

/// Fetch and build a dictionary of DICOM data elements
#[derive(Debug, Parser)]
pub struct DataElementApp {
    /// Path or URL to the XML file containing the data element registry (PS3.6)
    #[clap(default_value(DEFAULT_LOCATION))]
    from: String,

    /// Path or URL to the XML file containing the command fields (PS3.7)
    #[clap(long, default_value(DEFAULT_COMMAND_LOCATION))]
    command_from: String,

    /// The output file
    #[clap(short('o'), long, default_value("tags.rs"))]
    output: String,

    /// The output format
    #[clap(long, value_enum, default_value_t = OutputFormat::Rs)]
    format: OutputFormat,

    /// Ignore retired attributes
    #[clap(long)]
    ignore_retired: bool,

    /// Mark retired attributes as deprecated
    #[clap(long)]
    deprecate_retired: bool,
}

pub fn run(app: DataElementApp) -> Result<()> {
    let DataElementApp {
        from,
        command_from,
        output,
        format,
        ignore_retired,
        deprecate_retired,
    } = app;

    let retired_options = RetiredOptions::from_flags(ignore_retired, deprecate_retired);

    let xml_data = read_document(&from)?;
    let mut rows = retrieve_rows(&xml_data, DATA_ELEMENT_TABLES)?;

    let xml_data = read_document(&command_from)?;
    rows.extend(retrieve_rows(&xml_data, COMMAND_TABLES)?);

    info!("Retrieved {} registry rows", rows.len());

    let mut entries = normalize(rows)?;
    if retired_options == RetiredOptions::Ignore {
        entries.retain(|e| !e.row.retired);
    }

    match format {
        OutputFormat::Rs => to_code_file(&output, &entries, retired_options)?,
        OutputFormat::Json => to_json_file(&output, &entries)?,
    }

    info!("Wrote {} entries to {}", entries.len(), output);

    Ok(())
}

/// A row of a registry table, as written in the standard.
#[derive(Debug, Clone, PartialEq, Serialize)]
struct RegistryRow {
    tag: String,
    name: String,
    keyword: String,
    vr: String,
    vm: String,
    retired: bool,
}

/// A registry row which passed validation.
#[derive(Debug)]
struct DataElementEntry {
    row: RegistryRow,
    range: TagRange,
    vr: VirtualVr,
    /// absent for delimitation items
    vm: Option<Multiplicity>,
}

impl DataElementEntry {
    fn is_delimiter(&self) -> bool {
        matches!(self.range, TagRange::Single(tag) if tag.is_delimiter())
    }

    fn constant_name(&self) -> String {
        self.row.keyword.to_shouty_snake_case()
    }
}

/// Remove zero width spaces and collapse whitespace.
fn clean_text(text: &str) -> String {
    text.replace('\u{200b}', "")
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

/// Collects the rows of the given tables,
/// reading each one according to its column layout.
fn retrieve_rows(xml_data: &str, tables: &[RegistryTable]) -> Result<Vec<RegistryRow>> {
    let xml = parser::parse(xml_data)?;
    let doc = xml.as_document();

    let context = {
        let mut ctx = sxd_xpath::Context::new();
        ctx.set_namespace("xmlns", "http://docbook.org/ns/docbook");
        ctx.set_namespace("xml", "http://www.w3.org/1999/xlink");
        ctx
    };

    let factory = Factory::new();
    let build = |expr: &str| -> Result<XPath> {
        factory
            .build(expr)
            .with_context(|| format!("Could not compile XPath `{}`", expr))?
            .context("No XPath was compiled")
    };
    let cell = |column: usize| build(&format!("string(xmlns:td[{}])", column));

    let mut rows = vec![];

    for table in tables {
        let columns = table.columns;
        let tag_xpath = cell(columns.tag)?;
        let name_xpath = cell(columns.name)?;
        let keyword_xpath = cell(columns.keyword)?;
        let vr_xpath = cell(columns.vr)?;
        let vm_xpath = cell(columns.vm)?;
        let note_xpath = columns.note.map(cell).transpose()?;
        // retired rows are written in italics
        let emphasis_xpath = build(&format!(
            "boolean(xmlns:td[{}]//xmlns:emphasis)",
            columns.tag
        ))?;

        let table_rows_xpath = build(&format!(
            "//xmlns:table[@label='{}']/xmlns:tbody/xmlns:tr",
            table.label
        ))?;
        let nodeset = match table_rows_xpath.evaluate(&context, doc.root())? {
            Value::Nodeset(nodeset) => nodeset,
            _ => bail!("Expected node set"),
        };

        if nodeset.size() == 0 {
            bail!("No table {} found", table.label);
        }
        debug!("Table {}: {} rows", table.label, nodeset.size());

        for node in nodeset.document_order() {
            let elem = if let Some(elem) = node.element() {
                elem
            } else {
                continue;
            };

            let text = |xpath: &XPath| -> Result<String> {
                Ok(clean_text(&xpath.evaluate(&context, elem)?.into_string()))
            };

            let tag = text(&tag_xpath)?;
            if tag.is_empty() {
                continue;
            }

            let noted_retired = match &note_xpath {
                Some(xpath) => text(xpath)?.starts_with("RET"),
                None => false,
            };
            let retired = table.retired
                || noted_retired
                || emphasis_xpath.evaluate(&context, elem)?.into_boolean();

            rows.push(RegistryRow {
                tag,
                name: text(&name_xpath)?,
                keyword: text(&keyword_xpath)?,
                vr: text(&vr_xpath)?,
                vm: text(&vm_xpath)?,
                retired,
            });
        }
    }

    Ok(rows)
}

/// Whether the given range holds pixel data samples,
/// which use the [`Px`](VirtualVr::Px) descriptor instead of [`Ox`](VirtualVr::Ox).
fn is_pixel_data(range: TagRange) -> bool {
    matches!(
        range,
        TagRange::Single(Tag(0x7FE0, 0x0010)) | TagRange::Group100(Tag(0x7F00, 0x0010))
    )
}

/// Interpret the registry rows, skipping those which cannot be represented,
/// and sort them by tag.
///
/// Fails on malformed value representations or multiplicities,
/// and on repeated tags or keywords.
fn normalize(rows: Vec<RegistryRow>) -> Result<Vec<DataElementEntry>> {
    let mut entries = Vec::with_capacity(rows.len());

    for row in rows {
        if row.keyword.is_empty() {
            warn!("Skipping {} \"{}\": no keyword", row.tag, row.name);
            continue;
        }

        let range: TagRange = match row.tag.parse() {
            Ok(range) => range,
            Err(e) => {
                warn!("Skipping {} {}: {}", row.tag, row.keyword, e);
                continue;
            }
        };
        let delimiter = matches!(range, TagRange::Single(tag) if tag.is_delimiter());

        let vr = if row.vr == "See Note" {
            VirtualVr::Empty
        } else {
            row.vr
                .parse::<VirtualVr>()
                .with_context(|| format!("Bad value representation in {}", row.tag))?
        };
        let vr = match vr {
            VirtualVr::Ox if is_pixel_data(range) => VirtualVr::Px,
            VirtualVr::Empty if !delimiter => {
                warn!("Skipping {} {}: no value representation", row.tag, row.keyword);
                continue;
            }
            vr => vr,
        };

        let vm = if delimiter {
            None
        } else {
            let vm = row
                .vm
                .parse::<Multiplicity>()
                .with_context(|| format!("Bad value multiplicity in {}", row.tag))?;
            Some(vm)
        };

        entries.push(DataElementEntry { row, range, vr, vm });
    }

    entries.sort_by_key(|e| e.range.inner());
    check_unique(&entries)?;

    Ok(entries)
}

fn check_unique(entries: &[DataElementEntry]) -> Result<()> {
    for pair in entries.windows(2) {
        if pair[0].range.inner() == pair[1].range.inner() {
            bail!(
                "Duplicate tag {}: {} and {}",
                pair[0].row.tag,
                pair[0].row.keyword,
                pair[1].row.keyword
            );
        }
    }

    let mut keywords = HashSet::new();
    for e in entries {
        if !keywords.insert(e.row.keyword.as_str()) {
            bail!("Duplicate keyword {} in {}", e.row.keyword, e.row.tag);
        }
    }
    Ok(())
}

fn vr_literal(vr: VirtualVr) -> Result<String> {
    Ok(match vr {
        VirtualVr::Exact(vr) => format!("Exact({})", vr),
        VirtualVr::Xs => "Xs".to_string(),
        VirtualVr::Ox => "Ox".to_string(),
        VirtualVr::Px => "Px".to_string(),
        VirtualVr::Lt => "Lt".to_string(),
        VirtualVr::Xw => "Xw".to_string(),
        vr => bail!("No table literal for {:?}", vr),
    })
}

fn vm_literal(vm: Multiplicity) -> String {
    match vm {
        Multiplicity::Exact(n) => format!("Vm::Exact({})", n),
        Multiplicity::AtLeast(n) => format!("Vm::AtLeast({})", n),
        Multiplicity::Bounded(min, max) => format!("Vm::Bounded({}, {})", min, max),
        Multiplicity::MultipleOf(k) => format!("Vm::MultipleOf({})", k),
    }
}

/// Write the tag dictionary as Rust code.
fn to_code_file<P>(
    dest_path: P,
    entries: &[DataElementEntry],
    retired_options: RetiredOptions,
) -> Result<()>
where
    P: AsRef<Path>,
{
    if let Some(p_dir) = dest_path.as_ref().parent() {
        create_dir_all(p_dir)?;
    }
    let mut f = BufWriter::new(File::create(&dest_path)?);
    write_code(&mut f, entries, retired_options)?;
    f.flush()?;
    Ok(())
}

fn write_code(
    f: &mut impl Write,
    entries: &[DataElementEntry],
    retired_options: RetiredOptions,
) -> Result<()> {
    f.write_all(b"//! Data element tag declarations\n//!\n")?;
    f.write_all(b"//! Automatically generated. Edit at your own risk.\n")?;

    if retired_options.deprecate() {
        f.write_all(b"#![allow(deprecated)]\n")?;
    }

    f.write_all(
        b"\nuse dcmtags_core::dictionary::{DataDictionaryEntryRef, Multiplicity as Vm, TagRange::*, VirtualVr::*};\n\
        use dcmtags_core::Tag;\n\
        use dcmtags_core::VR::*;\n\n",
    )?;

    for e in entries {
        if e.is_delimiter() {
            writeln!(f, "/// {} {}", e.row.name, e.row.tag)?;
        } else {
            writeln!(
                f,
                "/// {} {} {} {}{}",
                e.row.name,
                e.row.tag,
                e.row.vr,
                e.row.vm,
                if e.row.retired { " (retired)" } else { "" }
            )?;
        }
        if e.row.retired && retired_options.deprecate() {
            writeln!(f, "#[deprecated(note = \"Retired DICOM attribute\")]")?;
        }
        let tag = e.range.inner();
        writeln!(
            f,
            "#[rustfmt::skip]\npub const {}: Tag = Tag(0x{:04X}, 0x{:04X});",
            e.constant_name(),
            tag.group(),
            tag.element(),
        )?;
    }

    f.write_all(b"\ntype E = DataDictionaryEntryRef<'static>;\n\n")?;
    f.write_all(b"#[rustfmt::skip]\npub(crate) const ENTRIES: &[E] = &[\n")?;

    for e in entries {
        // delimiters only get a constant
        let vm = match e.vm {
            Some(vm) if !e.is_delimiter() => vm,
            _ => continue,
        };
        let range = match e.range {
            TagRange::Single(_) => "Single",
            TagRange::Group100(_) => "Group100",
            TagRange::Element100(_) => "Element100",
            range => bail!("Unexpected tag range {:?} in {}", range, e.row.tag),
        };

        writeln!(
            f,
            "    E::new({}({}), \"{}\", \"{}\", {}, {}, {}),",
            range,
            e.constant_name(),
            e.row.keyword.replace('"', "\\\""),
            e.row.name.replace('"', "\\\""),
            vr_literal(e.vr)?,
            vm_literal(vm),
            e.row.retired,
        )?;
    }

    f.write_all(b"];\n")?;

    Ok(())
}

/// Write the normalized registry rows as a JSON array.
fn to_json_file<P>(dest_path: P, entries: &[DataElementEntry]) -> Result<()>
where
    P: AsRef<Path>,
{
    if let Some(p_dir) = dest_path.as_ref().parent() {
        create_dir_all(p_dir)?;
    }
    let mut f = BufWriter::new(File::create(&dest_path)?);
    let rows: Vec<&RegistryRow> = entries.iter().map(|e| &e.row).collect();
    serde_json::to_writer_pretty(&mut f, &rows)?;
    f.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::{
        normalize, retrieve_rows, write_code, RegistryRow, COMMAND_TABLES, DATA_ELEMENT_TABLES,
    };
    use crate::common::RetiredOptions;
    use dcmtags_core::dictionary::{Multiplicity, TagRange, VirtualVr};
    use dcmtags_core::{Tag, VR};

    const PART06_SAMPLE: &str = r#"<book xmlns="http://docbook.org/ns/docbook">
<chapter label="6">
<table label="6-1">
<thead><tr><td><para>Tag</para></td><td><para>Name</para></td><td><para>Keyword</para></td><td><para>VR</para></td><td><para>VM</para></td><td><para/></td></tr></thead>
<tbody>
<tr><td><para>(0028,0010)</para></td><td><para>Rows</para></td><td><para>Rows</para></td><td><para>US</para></td><td><para>1</para></td><td><para/></td></tr>
<tr><td><para><emphasis role="italic">(0028,0005)</emphasis></para></td><td><para><emphasis role="italic">Image Dimensions</emphasis></para></td><td><para><emphasis role="italic">ImageDimensions</emphasis></para></td><td><para><emphasis role="italic">US</emphasis></para></td><td><para><emphasis role="italic">1</emphasis></para></td><td><para><emphasis role="italic">RET</emphasis></para></td></tr>
<tr><td><para>(0018,1153)</para></td><td><para>Exposure in µAs</para></td><td><para>Exposure&#8203;InuAs</para></td><td><para>IS</para></td><td><para>1</para></td><td><para/></td></tr>
<tr><td><para><emphasis role="italic">(1000,xxx0)</emphasis></para></td><td><para><emphasis role="italic">Escape Triplet</emphasis></para></td><td><para><emphasis role="italic">EscapeTriplet</emphasis></para></td><td><para><emphasis role="italic">US</emphasis></para></td><td><para><emphasis role="italic">3</emphasis></para></td><td><para><emphasis role="italic">RET</emphasis></para></td></tr>
<tr><td><para>(60xx,3000)</para></td><td><para>Overlay Data</para></td><td><para>OverlayData</para></td><td><para>OB or OW</para></td><td><para>1</para></td><td><para/></td></tr>
<tr><td><para>(3006,0050)</para></td><td><para>Contour Data</para></td><td><para>ContourData</para></td><td><para>DS</para></td><td><para>3-3n</para></td><td><para/></td></tr>
<tr><td><para>(7FE0,0010)</para></td><td><para>Pixel Data</para></td><td><para>PixelData</para></td><td><para>OB or OW</para></td><td><para>1</para></td><td><para/></td></tr>
<tr><td><para>(FFFE,E000)</para></td><td><para>Item</para></td><td><para>Item</para></td><td><para>See Note</para></td><td><para>1</para></td><td><para/></td></tr>
</tbody>
</table>
<table label="7-1"><tbody>
<tr><td><para>(0002,0010)</para></td><td><para>Transfer Syntax UID</para></td><td><para>TransferSyntaxUID</para></td><td><para>UI</para></td><td><para>1</para></td><td><para/></td></tr>
</tbody></table>
<table label="8-1"><tbody>
<tr><td><para>(0004,1500)</para></td><td><para>Referenced File ID</para></td><td><para>ReferencedFileID</para></td><td><para>CS</para></td><td><para>1-8</para></td><td><para/></td></tr>
</tbody></table>
</chapter>
</book>"#;

    const PART07_SAMPLE: &str = r#"<book xmlns="http://docbook.org/ns/docbook">
<chapter label="E">
<table label="E.1-1">
<thead><tr><td><para>Message Field</para></td><td><para>Keyword</para></td><td><para>Tag</para></td><td><para>VR</para></td><td><para>VM</para></td><td><para>Description of Field</para></td></tr></thead>
<tbody>
<tr><td><para>Command Group Length</para></td><td><para>CommandGroupLength</para></td><td><para>(0000,0000)</para></td><td><para>UL</para></td><td><para>1</para></td><td><para>The even number of bytes from the end of the value field to the beginning of the next group.</para></td></tr>
<tr><td><para>Affected SOP Class UID</para></td><td><para>AffectedSOPClassUID</para></td><td><para>(0000,0002)</para></td><td><para>UI</para></td><td><para>1</para></td><td><para>The affected SOP Class UID associated with the operation.</para></td></tr>
<tr><td><para>Command Field</para></td><td><para>CommandField</para></td><td><para>(0000,0100)</para></td><td><para>US</para></td><td><para>1</para></td><td><para>This field distinguishes the DIMSE operation conveyed by this Message. <emphasis role="italic">See</emphasis> the table of command fields.</para></td></tr>
</tbody>
</table>
<table label="E.2-1">
<thead><tr><td><para>Message Field</para></td><td><para>Keyword</para></td><td><para>Tag</para></td><td><para>VR</para></td><td><para>VM</para></td><td><para>Description of Field</para></td></tr></thead>
<tbody>
<tr><td><para>Command Length to End</para></td><td><para>CommandLengthToEnd</para></td><td><para>(0000,0001)</para></td><td><para>UL</para></td><td><para>1</para></td><td><para>The number of bytes from the end of this element to the end of the message.</para></td></tr>
</tbody>
</table>
</chapter>
</book>"#;

    fn row(tag: &str, keyword: &str, vr: &str, vm: &str) -> RegistryRow {
        RegistryRow {
            tag: tag.to_string(),
            name: keyword.to_string(),
            keyword: keyword.to_string(),
            vr: vr.to_string(),
            vm: vm.to_string(),
            retired: false,
        }
    }

    #[test]
    fn reads_registry_tables() {
        let rows = retrieve_rows(PART06_SAMPLE, DATA_ELEMENT_TABLES).unwrap();
        assert_eq!(rows.len(), 10);

        let rows_row = rows.iter().find(|r| r.tag == "(0028,0010)").unwrap();
        assert_eq!(rows_row.keyword, "Rows");
        assert!(!rows_row.retired);

        let dimensions = rows.iter().find(|r| r.tag == "(0028,0005)").unwrap();
        assert_eq!(dimensions.name, "Image Dimensions");
        assert!(dimensions.retired);

        let exposure = rows.iter().find(|r| r.tag == "(0018,1153)").unwrap();
        assert_eq!(exposure.name, "Exposure in µAs");
        assert_eq!(exposure.keyword, "ExposureInuAs");

        let overlay = rows.iter().find(|r| r.tag == "(60xx,3000)").unwrap();
        assert_eq!(overlay.vr, "OB or OW");
    }

    #[test]
    fn reads_command_tables() {
        let rows = retrieve_rows(PART07_SAMPLE, COMMAND_TABLES).unwrap();
        assert_eq!(
            rows.iter().map(|r| r.tag.as_str()).collect::<Vec<_>>(),
            ["(0000,0000)", "(0000,0002)", "(0000,0100)", "(0000,0001)"]
        );

        assert_eq!(
            rows[0],
            RegistryRow {
                tag: "(0000,0000)".to_string(),
                name: "Command Group Length".to_string(),
                keyword: "CommandGroupLength".to_string(),
                vr: "UL".to_string(),
                vm: "1".to_string(),
                retired: false,
            }
        );
        assert_eq!(rows[1].keyword, "AffectedSOPClassUID");
        assert_eq!(rows[1].vr, "UI");

        // italics in the description do not retire a field
        assert_eq!(rows[2].name, "Command Field");
        assert!(!rows[2].retired);

        assert_eq!(rows[3].keyword, "CommandLengthToEnd");
        assert!(rows[3].retired);

        let entries = normalize(rows).unwrap();
        assert_eq!(entries.len(), 4);
        assert_eq!(entries[0].range, TagRange::Single(Tag(0x0000, 0x0000)));
        assert_eq!(entries[0].vr, VirtualVr::Exact(VR::UL));
        assert_eq!(entries[1].row.keyword, "CommandLengthToEnd");
    }

    #[test]
    fn normalizes_rows() {
        let rows = retrieve_rows(PART06_SAMPLE, DATA_ELEMENT_TABLES).unwrap();
        let entries = normalize(rows).unwrap();

        // escape triplet is not representable
        assert_eq!(entries.len(), 9);
        assert!(entries.iter().all(|e| e.row.keyword != "EscapeTriplet"));

        let tags: Vec<Tag> = entries.iter().map(|e| e.range.inner()).collect();
        let mut sorted = tags.clone();
        sorted.sort();
        assert_eq!(tags, sorted);

        let pixel_data = entries.iter().find(|e| e.row.keyword == "PixelData").unwrap();
        assert_eq!(pixel_data.vr, VirtualVr::Px);
        let overlay_data = entries.iter().find(|e| e.row.keyword == "OverlayData").unwrap();
        assert_eq!(overlay_data.vr, VirtualVr::Ox);
        assert_eq!(overlay_data.range, TagRange::Group100(Tag(0x6000, 0x3000)));

        let contour_data = entries.iter().find(|e| e.row.keyword == "ContourData").unwrap();
        assert_eq!(contour_data.vm, Some(Multiplicity::MultipleOf(3)));

        let item = entries.iter().find(|e| e.row.keyword == "Item").unwrap();
        assert!(item.is_delimiter());
        assert_eq!(item.vr, VirtualVr::Empty);
        assert_eq!(item.vm, None);
    }

    #[test]
    fn rejects_duplicates() {
        let rows = vec![
            row("(0028,0010)", "Rows", "US", "1"),
            row("(0028,0010)", "RowsAgain", "US", "1"),
        ];
        assert!(normalize(rows).is_err());

        let rows = vec![
            row("(0028,0010)", "Rows", "US", "1"),
            row("(0028,0011)", "Rows", "US", "1"),
        ];
        assert!(normalize(rows).is_err());
    }

    #[test]
    fn rejects_bad_literals() {
        assert!(normalize(vec![row("(0028,0010)", "Rows", "XX", "1")]).is_err());
        assert!(normalize(vec![row("(0028,0010)", "Rows", "US", "one")]).is_err());

        let entries = normalize(vec![row("(0028,0010)", "Rows", "US", "1")]).unwrap();
        assert_eq!(entries[0].vr, VirtualVr::Exact(VR::US));
    }

    #[test]
    fn writes_code() {
        let rows = retrieve_rows(PART06_SAMPLE, DATA_ELEMENT_TABLES).unwrap();
        let entries = normalize(rows).unwrap();

        let mut out = Vec::new();
        write_code(&mut out, &entries, RetiredOptions::Include { deprecate: false }).unwrap();
        let code = String::from_utf8(out).unwrap();

        assert!(code.contains("pub const ROWS: Tag = Tag(0x0028, 0x0010);\n"));
        assert!(code.contains("pub const EXPOSURE_INU_AS: Tag = Tag(0x0018, 0x1153);\n"));
        assert!(code.contains("pub const ITEM: Tag = Tag(0xFFFE, 0xE000);\n"));
        assert!(code.contains(
            "    E::new(Single(ROWS), \"Rows\", \"Rows\", Exact(US), Vm::Exact(1), false),\n"
        ));
        assert!(code.contains(
            "    E::new(Single(EXPOSURE_INU_AS), \"ExposureInuAs\", \"Exposure in µAs\", Exact(IS), Vm::Exact(1), false),\n"
        ));
        assert!(code.contains(
            "    E::new(Group100(OVERLAY_DATA), \"OverlayData\", \"Overlay Data\", Ox, Vm::Exact(1), false),\n"
        ));
        assert!(code.contains(
            "    E::new(Single(IMAGE_DIMENSIONS), \"ImageDimensions\", \"Image Dimensions\", Exact(US), Vm::Exact(1), true),\n"
        ));
        assert!(code.contains("Vm::Bounded(1, 8)"));
        assert!(code.contains("Vm::MultipleOf(3)"));
        // delimiters do not make it to the table
        assert!(!code.contains("E::new(Single(ITEM)"));
        assert!(!code.contains("deprecated"));

        let mut out = Vec::new();
        write_code(&mut out, &entries, RetiredOptions::Include { deprecate: true }).unwrap();
        let code = String::from_utf8(out).unwrap();
        assert!(code.contains("#![allow(deprecated)]\n"));
        assert!(code.contains(
            "#[deprecated(note = \"Retired DICOM attribute\")]\n#[rustfmt::skip]\npub const IMAGE_DIMENSIONS: Tag"
        ));
    }
}
