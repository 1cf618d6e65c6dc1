//! Style definitions and the style registry
//!
//! Styles are raw ODF style fragments (the XML of a `style:style` or
//! `number:*-style` element) registered under a name. The registry only
//! inspects the fragment's root element to classify its family; fragments
//! are otherwise carried verbatim to the writer.

mod catalog;
mod registry;

pub use catalog::BUILTIN_STYLES;
pub use registry::StyleRegistry;

use crate::error::{Error, Result};
use quick_xml::events::Event;
use quick_xml::Reader;

/// Classification of a style by the element kind it applies to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StyleFamily {
    /// Applies to `table:table-row` elements
    TableRow,
    /// Applies to `table:table-cell` elements
    TableCell,
    /// Applies to `table:table-column` elements
    TableColumn,
    /// A `number:*-style` data format referenced by cell styles
    Data,
}

impl StyleFamily {
    /// The ODF `style:family` attribute value, if the family has one
    pub fn as_odf_str(&self) -> Option<&'static str> {
        match self {
            StyleFamily::TableRow => Some("table-row"),
            StyleFamily::TableCell => Some("table-cell"),
            StyleFamily::TableColumn => Some("table-column"),
            StyleFamily::Data => None,
        }
    }
}

/// A named, immutable style definition
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StyleDefinition {
    /// Registered name; identity within a registry
    pub name: String,
    /// Family detected from the fragment
    pub family: StyleFamily,
    /// The raw ODF style fragment
    pub xml: String,
}

/// Name and family read from a style fragment's root element
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct FragmentInfo {
    pub name: Option<String>,
    pub family: StyleFamily,
}

/// Inspect a style fragment's root element for its `style:name` attribute
/// and family classification
pub(crate) fn inspect_fragment(xml: &str) -> Result<FragmentInfo> {
    let mut reader = Reader::from_str(xml);
    reader.trim_text(true);

    loop {
        match reader.read_event() {
            Ok(Event::Start(e)) | Ok(Event::Empty(e)) => {
                let tag = e.name().as_ref().to_vec();

                let mut name = None;
                let mut family_attr = None;
                for attr in e.attributes() {
                    let attr = attr.map_err(|err| {
                        Error::shape(format!("malformed style definition: {}", err))
                    })?;
                    match attr.key.as_ref() {
                        b"style:name" => {
                            name = Some(
                                attr.unescape_value()
                                    .map_err(|err| {
                                        Error::shape(format!(
                                            "malformed style definition: {}",
                                            err
                                        ))
                                    })?
                                    .into_owned(),
                            );
                        }
                        b"style:family" => {
                            family_attr = Some(
                                attr.unescape_value()
                                    .map_err(|err| {
                                        Error::shape(format!(
                                            "malformed style definition: {}",
                                            err
                                        ))
                                    })?
                                    .into_owned(),
                            );
                        }
                        _ => {}
                    }
                }

                let family = classify_root(&tag, family_attr.as_deref())?;
                return Ok(FragmentInfo { name, family });
            }
            Ok(Event::Eof) => {
                return Err(Error::shape(
                    "style definition contains no element".to_string(),
                ))
            }
            Ok(_) => continue,
            Err(err) => {
                return Err(Error::shape(format!("malformed style definition: {}", err)))
            }
        }
    }
}

fn classify_root(tag: &[u8], family_attr: Option<&str>) -> Result<StyleFamily> {
    if tag == b"style:style" {
        return match family_attr {
            Some("table-row") => Ok(StyleFamily::TableRow),
            Some("table-cell") => Ok(StyleFamily::TableCell),
            Some("table-column") => Ok(StyleFamily::TableColumn),
            Some(other) => Err(Error::shape(format!(
                "unsupported style family '{}'",
                other
            ))),
            None => Err(Error::shape(
                "style:style element without style:family attribute".to_string(),
            )),
        };
    }
    if tag.starts_with(b"number:") && tag.ends_with(b"-style") {
        return Ok(StyleFamily::Data);
    }
    Err(Error::shape(format!(
        "unsupported style element '{}'",
        String::from_utf8_lossy(tag)
    )))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_inspect_cell_style() {
        let info = inspect_fragment(
            r#"<style:style style:name="my_bold" style:family="table-cell">
               <style:text-properties fo:font-weight="bold"/>
               </style:style>"#,
        )
        .unwrap();
        assert_eq!(info.name.as_deref(), Some("my_bold"));
        assert_eq!(info.family, StyleFamily::TableCell);
    }

    #[test]
    fn test_inspect_row_style_without_name() {
        let info = inspect_fragment(
            r#"<style:style style:family="table-row">
               <style:table-row-properties style:row-height="1cm"/>
               </style:style>"#,
        )
        .unwrap();
        assert_eq!(info.name, None);
        assert_eq!(info.family, StyleFamily::TableRow);
    }

    #[test]
    fn test_inspect_data_style() {
        let info = inspect_fragment(
            r#"<number:number-style><number:number number:decimal-places="2"/></number:number-style>"#,
        )
        .unwrap();
        assert_eq!(info.family, StyleFamily::Data);
    }

    #[test]
    fn test_inspect_rejects_unknown_elements() {
        assert!(inspect_fragment("<table:table/>").is_err());
        assert!(inspect_fragment("not xml at all").is_err());
        assert!(inspect_fragment("").is_err());
        assert!(inspect_fragment(r#"<style:style style:family="graphic"/>"#).is_err());
    }
}
