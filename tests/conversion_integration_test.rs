//! Integration tests for XML to CSV conversion

use atena::config::ConversionConfig;
use atena::core::convert::{convert_str, ConversionCoordinator};
use atena::domain::AtenaError;
use std::io::Write;
use tempfile::NamedTempFile;

const HEADER: &str = "LastName,FirstName,furigana-LastName,furigana-FirstName,AddressCode,\
FullAddress,Suffix,PhoneItem,EmailItem,Memo,NamesOfFamily1,X-Suffix1,NamesOfFamily2,\
X-Suffix2,NamesOfFamily3,X-Suffix3,atxBaseYear,X-NYCardHistory,";

/// One row has the 18 schema columns plus the empty trailing field
const FIELDS_PER_ROW: usize = 19;

const TANAKA: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<ContactXML xmlns="http://www.xmlns.org/2002/ContactXML" version="1.1">
  <ContactXMLItem lastModDate="2014-11-02T10:00:00">
    <PersonName>
      <PersonNameItem>
        <FullName>田中 太郎</FullName>
        <LastName pronunciation="タナカ">田中</LastName>
        <FirstName pronunciation="タロウ">太郎</FirstName>
      </PersonNameItem>
    </PersonName>
    <Address>
      <AddressItem locationType="Home" preference="True">
        <AddressCode>100-0001</AddressCode>
        <FullAddress>東京都千代田区1-1</FullAddress>
      </AddressItem>
    </Address>
    <Extension>
      <ExtensionItem extensionType="Extended" name="Suffix">様</ExtensionItem>
      <ExtensionItem extensionType="Extended" name="NamesOfFamily">花子</ExtensionItem>
      <ExtensionItem extensionType="Extended" name="X-Suffix1">様</ExtensionItem>
      <ExtensionItem extensionType="Extended" name="atxBaseYear">2015</ExtensionItem>
    </Extension>
  </ContactXMLItem>
</ContactXML>
"#;

fn convert(xml: &str) -> String {
    convert_str(xml, &ConversionConfig::default()).expect("conversion should succeed")
}

fn fields(line: &str) -> Vec<&str> {
    line.split(',').collect()
}

fn wrap(items: &str) -> String {
    format!("<ContactXML>{items}</ContactXML>")
}

#[test]
fn test_header_line() {
    let csv = convert("<ContactXML></ContactXML>");
    assert_eq!(csv, format!("{HEADER}\n"));
}

#[test]
fn test_full_contact_record() {
    let csv = convert(TANAKA);
    let lines: Vec<&str> = csv.lines().collect();
    assert_eq!(lines.len(), 2);
    assert_eq!(lines[0], HEADER);

    let row = fields(lines[1]);
    assert_eq!(row.len(), FIELDS_PER_ROW);
    assert_eq!(row[0], "田中");
    assert_eq!(row[1], "太郎");
    assert_eq!(row[2], "タナカ");
    assert_eq!(row[3], "タロウ");
    assert_eq!(row[4], "100-0001");
    assert_eq!(row[5], "東京都千代田区1-1");
    assert_eq!(row[6], "様");
    assert_eq!(row[10], "花子");
    assert_eq!(row[11], "様");
    assert_eq!(row[16], "2015");
    assert_eq!(row[18], "");
}

#[test]
fn test_every_line_has_trailing_separator() {
    let csv = convert(TANAKA);
    assert!(csv.ends_with(",\n"));
    for line in csv.lines() {
        assert!(line.ends_with(','), "line without trailing separator: {line}");
        assert_eq!(fields(line).len(), FIELDS_PER_ROW);
    }
}

#[test]
fn test_one_row_per_record_terminator() {
    let xml = wrap(
        "<ContactXMLItem><Memo>a</Memo></ContactXMLItem>\
         <ContactXMLItem><Memo>b</Memo></ContactXMLItem>\
         <ContactXMLItem></ContactXMLItem>",
    );
    let csv = convert(&xml);
    let rows: Vec<&str> = csv.lines().skip(1).collect();
    assert_eq!(rows.len(), 3);
    assert_eq!(fields(rows[0])[9], "a");
    assert_eq!(fields(rows[1])[9], "b");
    assert!(fields(rows[2]).iter().all(|f| f.is_empty()));
}

#[test]
fn test_records_do_not_leak_values() {
    let xml = wrap(
        "<ContactXMLItem><Memo>first</Memo><PhoneItem>03-1111</PhoneItem></ContactXMLItem>\
         <ContactXMLItem><Memo>second</Memo></ContactXMLItem>",
    );
    let csv = convert(&xml);
    let second = fields(csv.lines().nth(2).unwrap());
    assert_eq!(second[9], "second");
    assert_eq!(second[7], "");
}

#[test]
fn test_conversion_is_idempotent() {
    assert_eq!(convert(TANAKA), convert(TANAKA));
}

#[test]
fn test_family_members_fill_slots_in_order() {
    let xml = wrap(
        r#"<ContactXMLItem><Extension>
            <ExtensionItem extensionType="Extended" name="NamesOfFamily">一郎</ExtensionItem>
            <ExtensionItem extensionType="Extended" name="NamesOfFamily">二郎</ExtensionItem>
            <ExtensionItem extensionType="Extended" name="NamesOfFamily">三郎</ExtensionItem>
        </Extension></ContactXMLItem>"#,
    );
    let csv = convert(&xml);
    let row = fields(csv.lines().nth(1).unwrap());
    assert_eq!(row[10], "一郎");
    assert_eq!(row[12], "二郎");
    assert_eq!(row[14], "三郎");
}

#[test]
fn test_family_members_beyond_slots_are_not_written() {
    let items: String = (1..=11)
        .map(|i| format!(r#"<ExtensionItem t="x" name="NamesOfFamily">m{i}</ExtensionItem>"#))
        .collect();
    let xml = wrap(&format!(
        "<ContactXMLItem><Extension>{items}</Extension></ContactXMLItem>"
    ));

    let mut out = Vec::new();
    let summary = ConversionCoordinator::new(ConversionConfig::default())
        .convert(
            atena::core::event::XmlEventSource::from_xml_str(&xml),
            &mut out,
        )
        .unwrap();

    assert_eq!(summary.records_written, 1);
    assert_eq!(summary.overflow_values, 2);
    let csv = String::from_utf8(out).unwrap();
    let row = fields(csv.lines().nth(1).unwrap());
    assert_eq!(row[10], "m1");
    assert_eq!(row[12], "m2");
    assert_eq!(row[14], "m3");
}

#[test]
fn test_whitespace_does_not_overwrite_values() {
    let xml = wrap(
        "<ContactXMLItem>\n  <Memo>keep</Memo>\n  \n  <Memo>   </Memo>\n</ContactXMLItem>",
    );
    let csv = convert(&xml);
    assert_eq!(fields(csv.lines().nth(1).unwrap())[9], "keep");
}

#[test]
fn test_plain_values_are_trimmed() {
    let xml = wrap("<ContactXMLItem><Memo>\n   padded  \n</Memo></ContactXMLItem>");
    let csv = convert(&xml);
    assert_eq!(fields(csv.lines().nth(1).unwrap())[9], "padded");
}

#[test]
fn test_later_value_wins() {
    let xml = wrap("<ContactXMLItem><Memo>old</Memo><Memo>new</Memo></ContactXMLItem>");
    let csv = convert(&xml);
    assert_eq!(fields(csv.lines().nth(1).unwrap())[9], "new");
}

#[test]
fn test_unknown_extension_subtype_is_dropped() {
    let with_unknown = wrap(
        r#"<ContactXMLItem><Memo>m</Memo><Extension>
            <ExtensionItem t="x" name="X-Unknown">lost</ExtensionItem>
        </Extension></ContactXMLItem>"#,
    );
    let without = wrap("<ContactXMLItem><Memo>m</Memo></ContactXMLItem>");
    assert_eq!(convert(&with_unknown), convert(&without));
}

#[test]
fn test_unlisted_elements_are_not_columns() {
    let csv = convert(&wrap(
        "<ContactXMLItem><Nickname>nick</Nickname><Memo>m</Memo></ContactXMLItem>",
    ));
    assert!(!csv.contains("nick"));
}

#[test]
fn test_container_text_is_ignored() {
    let csv = convert(&wrap(
        "<ContactXMLItem>stray<Address>text<AddressItem>more</AddressItem></Address></ContactXMLItem>",
    ));
    let row = fields(csv.lines().nth(1).unwrap());
    assert!(row.iter().all(|f| f.is_empty()));
}

#[test]
fn test_entities_are_resolved() {
    let csv = convert(&wrap(
        "<ContactXMLItem><Memo>A &amp; B</Memo></ContactXMLItem>",
    ));
    assert_eq!(fields(csv.lines().nth(1).unwrap())[9], "A & B");
}

#[test]
fn test_mismatched_end_tag_is_an_error() {
    // the root closes while a record is still open
    let result = convert_str(
        "<ContactXML><ContactXMLItem><Memo>a</Memo></ContactXMLItem><ContactXMLItem><Memo>b</Memo></ContactXML>",
        &ConversionConfig::default(),
    );
    assert!(result.is_err());
}

#[test]
fn test_record_outside_terminator_is_discarded() {
    let mut out = Vec::new();
    let summary = ConversionCoordinator::new(ConversionConfig::default())
        .convert(
            atena::core::event::XmlEventSource::from_xml_str(
                "<ContactXML><ContactXMLItem><Memo>a</Memo></ContactXMLItem><Memo>orphan</Memo></ContactXML>",
            ),
            &mut out,
        )
        .unwrap();

    assert_eq!(summary.records_written, 1);
    assert!(summary.partial_record_discarded);
    let csv = String::from_utf8(out).unwrap();
    assert_eq!(csv.lines().count(), 2);
    assert!(!csv.contains("orphan"));
}

#[test]
fn test_malformed_xml_is_an_error() {
    let err = convert_str("<ContactXML><ContactXMLItem>", &ConversionConfig::default())
        .unwrap_err();
    assert!(err.is_input_error());
    assert!(matches!(err, AtenaError::Xml { .. }));
}

#[test]
fn test_name_without_reading_attribute_is_fatal() {
    let err = convert_str(
        "<ContactXML><ContactXMLItem><LastName>田中</LastName></ContactXMLItem></ContactXML>",
        &ConversionConfig::default(),
    )
    .unwrap_err();
    assert!(matches!(err, AtenaError::MissingAttribute { .. }));
    assert!(err.is_input_error());
}

#[test]
fn test_extension_without_subtype_attribute_is_fatal() {
    let err = convert_str(
        r#"<ContactXML><ContactXMLItem><Extension><ExtensionItem name="Suffix">様</ExtensionItem></Extension></ContactXMLItem></ContactXML>"#,
        &ConversionConfig::default(),
    )
    .unwrap_err();
    assert!(matches!(err, AtenaError::MissingAttribute { .. }));
}

#[test]
fn test_rows_before_failure_are_written() {
    let mut out = Vec::new();
    let result = ConversionCoordinator::new(ConversionConfig::default()).convert(
        atena::core::event::XmlEventSource::from_xml_str(
            "<ContactXML><ContactXMLItem><Memo>ok</Memo></ContactXMLItem><ContactXMLItem><LastName>x</LastName></ContactXMLItem></ContactXML>",
        ),
        &mut out,
    );
    assert!(result.is_err());
    let csv = String::from_utf8(out).unwrap();
    assert_eq!(csv.lines().count(), 2);
    assert!(csv.contains(",ok,"));
}

#[test]
fn test_convert_file_from_disk() {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(TANAKA.as_bytes()).unwrap();
    file.flush().unwrap();

    let mut out = Vec::new();
    let summary = ConversionCoordinator::new(ConversionConfig::default())
        .convert_file(file.path(), &mut out)
        .unwrap();

    assert_eq!(summary.records_written, 1);
    assert!(summary.is_lossless());
    assert_eq!(String::from_utf8(out).unwrap(), convert(TANAKA));
}

#[test]
fn test_missing_input_file() {
    let err = ConversionCoordinator::new(ConversionConfig::default())
        .convert_file(std::path::Path::new("no/such/contacts.xml"), Vec::new())
        .unwrap_err();
    assert!(matches!(err, AtenaError::Io(_)));
    assert!(!err.is_input_error());
}

#[test]
fn test_fewer_family_slots() {
    let config = ConversionConfig {
        family_slots: 1,
        ..ConversionConfig::default()
    };
    let xml = wrap(
        r#"<ContactXMLItem><Extension>
            <ExtensionItem t="x" name="NamesOfFamily">一郎</ExtensionItem>
            <ExtensionItem t="x" name="NamesOfFamily">二郎</ExtensionItem>
        </Extension></ContactXMLItem>"#,
    );
    let csv = convert_str(&xml, &config).unwrap();
    let row = fields(csv.lines().nth(1).unwrap());
    assert_eq!(row[10], "一郎");
    assert_eq!(row[12], "");
}
