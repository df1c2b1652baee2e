//! Response document and its XML rendering.

use quick_xml::se::Serializer;
use serde::Serialize;
use std::borrow::Cow;
use thiserror::Error;

/// Errors raised while turning a document into a response body.
#[derive(Debug, Error)]
pub enum ProcessingError {
    #[error("failed to serialize response document: {0}")]
    Serialize(String),
}

/// One projected bank in the response.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct BankEntry {
    #[serde(
        skip_serializing_if = "Option::is_none",
        serialize_with = "serialize_opt_text"
    )]
    pub mfo_code: Option<String>,

    #[serde(serialize_with = "serialize_text")]
    pub name: String,

    #[serde(
        skip_serializing_if = "Option::is_none",
        serialize_with = "serialize_opt_text"
    )]
    pub state_code: Option<String>,
}

/// Characters allowed in XML 1.0 documents (the `Char` production).
fn is_xml_char(c: char) -> bool {
    matches!(
        c,
        '\t' | '\n' | '\r' | '\u{20}'..='\u{D7FF}' | '\u{E000}'..='\u{FFFD}' | '\u{10000}'..
    )
}

/// Replace characters XML cannot carry with U+FFFD.
fn xml_safe(text: &str) -> Cow<'_, str> {
    if text.chars().all(is_xml_char) {
        Cow::Borrowed(text)
    } else {
        Cow::Owned(
            text.chars()
                .map(|c| if is_xml_char(c) { c } else { char::REPLACEMENT_CHARACTER })
                .collect(),
        )
    }
}

fn serialize_text<S: serde::Serializer>(text: &str, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(&xml_safe(text))
}

fn serialize_opt_text<S: serde::Serializer>(
    text: &Option<String>,
    serializer: S,
) -> Result<S::Ok, S::Error> {
    match text {
        Some(text) => serializer.serialize_str(&xml_safe(text)),
        None => serializer.serialize_none(),
    }
}

/// Ordered list of projected banks, rendered as
/// `<banks><bank>...</bank>...</banks>`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename = "banks")]
pub struct ResponseDocument {
    #[serde(rename = "bank")]
    pub banks: Vec<BankEntry>,
}

impl ResponseDocument {
    pub fn new(banks: Vec<BankEntry>) -> Self {
        Self { banks }
    }

    pub fn len(&self) -> usize {
        self.banks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.banks.is_empty()
    }

    /// Render as XML. `indent` is spaces per level, 0 for a single line.
    ///
    /// An empty document renders as an empty `<banks/>` root.
    pub fn to_xml(&self, indent: usize) -> Result<String, ProcessingError> {
        let mut buffer = String::new();
        let mut serializer = Serializer::new(&mut buffer);
        if indent > 0 {
            serializer.indent(' ', indent);
        }

        self.serialize(serializer)
            .map_err(|e| ProcessingError::Serialize(e.to_string()))?;

        Ok(buffer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use quick_xml::events::Event;
    use quick_xml::Reader;

    /// Parse `xml` fully and return the names of all start/empty elements.
    fn element_names(xml: &str) -> Vec<String> {
        let mut reader = Reader::from_str(xml);
        let mut names = Vec::new();
        loop {
            match reader.read_event().expect("well-formed XML") {
                Event::Start(e) | Event::Empty(e) => {
                    names.push(String::from_utf8(e.name().as_ref().to_vec()).unwrap());
                }
                Event::Eof => break,
                _ => {}
            }
        }
        names
    }

    fn entry(mfo: Option<&str>, name: &str, state: Option<&str>) -> BankEntry {
        BankEntry {
            mfo_code: mfo.map(str::to_string),
            name: name.to_string(),
            state_code: state.map(str::to_string),
        }
    }

    #[test]
    fn test_empty_document_is_empty_root() {
        for indent in [0, 2] {
            let xml = ResponseDocument::default().to_xml(indent).unwrap();
            assert_eq!(element_names(&xml), vec!["banks"]);
        }
    }

    #[test]
    fn test_compact_rendering() {
        let doc = ResponseDocument::new(vec![
            entry(Some("1"), "Bank A", Some("1")),
            entry(None, "Bank B", None),
        ]);

        let xml = doc.to_xml(0).unwrap();
        assert_eq!(
            xml,
            "<banks>\
             <bank><mfo_code>1</mfo_code><name>Bank A</name><state_code>1</state_code></bank>\
             <bank><name>Bank B</name></bank>\
             </banks>"
        );
    }

    #[test]
    fn test_indented_rendering_has_same_structure() {
        let doc = ResponseDocument::new(vec![entry(Some("300001"), "Bank A", None)]);

        let xml = doc.to_xml(2).unwrap();
        assert!(xml.contains('\n'));
        assert!(xml.contains("\n  <bank>"));
        assert_eq!(element_names(&xml), vec!["banks", "bank", "mfo_code", "name"]);
    }

    #[test]
    fn test_text_is_escaped() {
        let doc = ResponseDocument::new(vec![entry(None, "Smith & <Sons>", None)]);

        let xml = doc.to_xml(0).unwrap();
        assert!(xml.contains("Smith &amp; &lt;Sons&gt;"));
        assert_eq!(element_names(&xml), vec!["banks", "bank", "name"]);
    }

    #[test]
    fn test_control_characters_are_replaced() {
        let doc = ResponseDocument::new(vec![entry(Some("1\u{0}"), "A\u{1}B", Some("\u{1F}1"))]);

        let xml = doc.to_xml(0).unwrap();
        assert!(!xml.chars().any(|c| !is_xml_char(c)));
        assert!(xml.contains("<name>A\u{FFFD}B</name>"));
        assert!(xml.contains("<mfo_code>1\u{FFFD}</mfo_code>"));
        assert!(xml.contains("<state_code>\u{FFFD}1</state_code>"));
        assert_eq!(
            element_names(&xml),
            vec!["banks", "bank", "mfo_code", "name", "state_code"]
        );
    }

    #[test]
    fn test_allowed_whitespace_and_astral_chars_kept() {
        assert_eq!(xml_safe("a\tb\nc\r"), "a\tb\nc\r");
        assert!(matches!(xml_safe("Банк 🏦"), Cow::Borrowed(_)));
        assert_eq!(xml_safe("\u{FFFE}x"), "\u{FFFD}x");
    }
}
