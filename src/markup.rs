//! Streaming rewrite of markup strings.
//!
//! The input is read as a stream of events and copied through to the output
//! untouched, except for elements carrying the marker attribute: their
//! previous content is dropped and replaced with the resolved text. The
//! reader is configured leniently (end-name checking off, text untrimmed)
//! so fragment-like inputs survive the round trip.

use std::io::Cursor;

use quick_xml::events::{BytesEnd, BytesStart, BytesText, Event};
use quick_xml::{Reader, Writer};

use crate::error::Error;

/// Rewrite every element of `input` that carries the `marker` attribute,
/// replacing its content with `resolve(key)`.
///
/// Inserted text is entity-escaped. Self-closing marked elements are
/// expanded so they can hold content; a marked element left unclosed in the
/// input is closed in the output.
pub fn rewrite<F>(input: &str, marker: &str, mut resolve: F) -> Result<String, Error>
where
    F: FnMut(&str) -> String,
{
    let mut reader = Reader::from_reader(input.as_bytes());
    reader.trim_text(false);
    reader.check_end_names(false);

    let mut writer = Writer::new(Cursor::new(Vec::new()));
    let mut buf = Vec::new();

    loop {
        match reader.read_event_into(&mut buf)? {
            Event::Start(element) => match marker_key(&element, marker)? {
                Some(key) => {
                    let tag = element.name().as_ref().to_vec();
                    let translation = resolve(&key);
                    writer.write_event(Event::Start(element))?;
                    writer.write_event(Event::Text(BytesText::new(&translation)))?;
                    skip_element_content(&mut reader, &tag)?;
                    writer.write_event(Event::End(BytesEnd::new(
                        String::from_utf8_lossy(&tag).into_owned(),
                    )))?;
                }
                None => writer.write_event(Event::Start(element))?,
            },
            Event::Empty(element) => match marker_key(&element, marker)? {
                Some(key) => {
                    let tag = String::from_utf8_lossy(element.name().as_ref()).into_owned();
                    let translation = resolve(&key);
                    writer.write_event(Event::Start(element))?;
                    writer.write_event(Event::Text(BytesText::new(&translation)))?;
                    writer.write_event(Event::End(BytesEnd::new(tag)))?;
                }
                None => writer.write_event(Event::Empty(element))?,
            },
            Event::Eof => break,
            event => writer.write_event(event)?,
        }
        buf.clear();
    }

    let bytes = writer.into_inner().into_inner();
    Ok(String::from_utf8(bytes)?)
}

fn marker_key(element: &BytesStart<'_>, marker: &str) -> Result<Option<String>, Error> {
    for attr in element.attributes() {
        let attr = attr.map_err(quick_xml::Error::InvalidAttr)?;
        if attr.key.as_ref() == marker.as_bytes() {
            let value = attr.unescape_value()?;
            return Ok(Some(value.into_owned()));
        }
    }
    Ok(None)
}

/// Consume events up to the end tag of the element being rewritten,
/// discarding them. Only same-name tags count toward nesting depth, so
/// unbalanced void tags inside the element cannot stall the scan.
fn skip_element_content(reader: &mut Reader<&[u8]>, tag: &[u8]) -> Result<(), Error> {
    let mut buf = Vec::new();
    let mut depth = 0usize;

    loop {
        match reader.read_event_into(&mut buf)? {
            Event::Start(e) if e.name().as_ref() == tag => depth += 1,
            Event::End(e) if e.name().as_ref() == tag => {
                if depth == 0 {
                    return Ok(());
                }
                depth -= 1;
            }
            // unclosed element: its content ran to the end of the input
            Event::Eof => return Ok(()),
            _ => {}
        }
        buf.clear();
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use pretty_assertions::assert_eq;

    use crate::markup::*;

    fn resolve(key: &str) -> String {
        let table: HashMap<&str, &str> = [
            ("title", "Titel"),
            ("menu.start", "Start"),
            ("note", "5 < 6 & 7"),
        ]
        .into_iter()
        .collect();
        table.get(key).map(|s| s.to_string()).unwrap_or_else(|| key.to_string())
    }

    #[test]
    fn test_rewrite_empty_marked_element() {
        let output = rewrite(r#"<div data-tl="title"></div>"#, "data-tl", resolve).unwrap();
        assert_eq!(output, r#"<div data-tl="title">Titel</div>"#);
    }

    #[test]
    fn test_rewrite_replaces_previous_content() {
        let output = rewrite(
            r#"<div data-tl="title">old <b>content</b></div>"#,
            "data-tl",
            resolve,
        )
        .unwrap();
        assert_eq!(output, r#"<div data-tl="title">Titel</div>"#);
    }

    #[test]
    fn test_rewrite_leaves_unmarked_elements_alone() {
        let input = r#"<ul><li data-tl="menu.start">alt</li><li class="x">keep</li></ul>"#;
        let output = rewrite(input, "data-tl", resolve).unwrap();
        assert_eq!(
            output,
            r#"<ul><li data-tl="menu.start">Start</li><li class="x">keep</li></ul>"#
        );
    }

    #[test]
    fn test_rewrite_expands_self_closing_marked_element() {
        let output = rewrite(r#"<span data-tl="title"/>"#, "data-tl", resolve).unwrap();
        assert_eq!(output, r#"<span data-tl="title">Titel</span>"#);
    }

    #[test]
    fn test_rewrite_keeps_unmarked_self_closing_element() {
        let output = rewrite(r#"<p><br/>text</p>"#, "data-tl", resolve).unwrap();
        assert_eq!(output, r#"<p><br/>text</p>"#);
    }

    #[test]
    fn test_rewrite_escapes_inserted_text() {
        let output = rewrite(r#"<div data-tl="note"></div>"#, "data-tl", resolve).unwrap();
        assert_eq!(output, r#"<div data-tl="note">5 &lt; 6 &amp; 7</div>"#);
    }

    #[test]
    fn test_rewrite_unknown_key_inserts_placeholder() {
        let output = rewrite(r#"<div data-tl="missing.key"></div>"#, "data-tl", resolve).unwrap();
        assert_eq!(output, r#"<div data-tl="missing.key">missing.key</div>"#);
    }

    #[test]
    fn test_rewrite_handles_same_name_nesting() {
        let output = rewrite(
            r#"<div data-tl="title"><div>inner</div></div><p>after</p>"#,
            "data-tl",
            resolve,
        )
        .unwrap();
        assert_eq!(output, r#"<div data-tl="title">Titel</div><p>after</p>"#);
    }

    #[test]
    fn test_rewrite_closes_unclosed_marked_element() {
        let output = rewrite(r#"<div data-tl="title"><span>"#, "data-tl", resolve).unwrap();
        assert_eq!(output, r#"<div data-tl="title">Titel</div>"#);
    }

    #[test]
    fn test_rewrite_respects_custom_marker() {
        let output = rewrite(r#"<div data-i18n="title"></div>"#, "data-i18n", resolve).unwrap();
        assert_eq!(output, r#"<div data-i18n="title">Titel</div>"#);
    }

    #[test]
    fn test_rewrite_preserves_text_and_entities_outside_markers() {
        let input = r#"<p>a &amp; b</p>"#;
        let output = rewrite(input, "data-tl", resolve).unwrap();
        assert_eq!(output, input);
    }

    #[test]
    fn test_rewrite_malformed_markup_fails() {
        let result = rewrite(r#"<div data-tl="title>"#, "data-tl", resolve);
        assert!(result.is_err());
    }
}
