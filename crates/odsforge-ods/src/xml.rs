//! XML helpers for the writer

use crate::error::OdsResult;
use quick_xml::events::{BytesStart, Event};
use quick_xml::{Reader, Writer};

/// Escape a string for use in XML text or attribute content
pub(crate) fn escape_xml(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&apos;")
}

/// Rewrite a style fragment so its root element carries
/// `style:name="name"`, replacing any existing name attribute
pub(crate) fn set_fragment_name(xml: &str, name: &str) -> OdsResult<String> {
    let mut reader = Reader::from_str(xml);
    reader.trim_text(true);
    let mut writer = Writer::new(Vec::new());
    let mut renamed = false;

    loop {
        match reader.read_event()? {
            Event::Eof => break,
            Event::Start(e) if !renamed => {
                renamed = true;
                writer.write_event(Event::Start(with_name(&e, name)?))?;
            }
            Event::Empty(e) if !renamed => {
                renamed = true;
                writer.write_event(Event::Empty(with_name(&e, name)?))?;
            }
            event => writer.write_event(event.into_owned())?,
        }
    }

    Ok(String::from_utf8_lossy(&writer.into_inner()).into_owned())
}

fn with_name(e: &BytesStart<'_>, name: &str) -> OdsResult<BytesStart<'static>> {
    let tag = String::from_utf8_lossy(e.name().as_ref()).into_owned();
    let mut elem = BytesStart::new(tag);
    elem.push_attribute(("style:name", name));
    for attr in e.attributes() {
        let attr = attr.map_err(quick_xml::Error::from)?;
        if attr.key.as_ref() != b"style:name" {
            elem.push_attribute((attr.key.as_ref(), attr.value.as_ref()));
        }
    }
    Ok(elem)
}

/// Style names referenced by a fragment: values of any attribute whose key
/// ends with "style-name" (`style:data-style-name`, `style:parent-style-name`, ...)
pub(crate) fn referenced_style_names(xml: &str) -> OdsResult<Vec<String>> {
    let mut reader = Reader::from_str(xml);
    reader.trim_text(true);
    let mut names = Vec::new();

    loop {
        match reader.read_event()? {
            Event::Eof => break,
            Event::Start(e) | Event::Empty(e) => {
                for attr in e.attributes() {
                    let attr = attr.map_err(quick_xml::Error::from)?;
                    if attr.key.as_ref().ends_with(b"style-name") {
                        names.push(
                            attr.unescape_value()
                                .map_err(quick_xml::Error::from)?
                                .into_owned(),
                        );
                    }
                }
            }
            _ => {}
        }
    }
    Ok(names)
}
