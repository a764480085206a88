//! Markup scanning.
//!
//! The linter does not model HTML documents; it only needs the `class`
//! attributes. Markup is scanned with `quick-xml`'s pull reader, collecting
//! one [`ClassUse`] per element that carries a class attribute. End-tag
//! mismatches are tolerated (void elements are common in HTML), but lexical
//! errors abort the document.

use std::path::{Path, PathBuf};

use quick_xml::Reader;
use quick_xml::events::Event;

use crate::{Error, Result};

/// The classes declared on one element.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassUse {
    /// Class names from the element's `class` attribute, in order.
    pub classes: Vec<String>,
    /// 1-based source line of the element.
    pub line: u32,
}

/// The class usage extracted from one markup document.
#[derive(Debug, Clone)]
pub struct MarkupDocument {
    /// One entry per element with a `class` attribute, in document order.
    pub uses: Vec<ClassUse>,
    /// Source file path, if loaded from disk.
    pub path: Option<PathBuf>,
}

impl MarkupDocument {
    /// Scan markup text for class attributes.
    pub fn from_str(src: &str) -> Result<Self> {
        let uses = scan_classes(src, None)?;
        Ok(Self { uses, path: None })
    }

    /// Load and scan a markup file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| Error::io(path, e))?;

        let uses = scan_classes(&content, Some(path))?;
        Ok(Self {
            uses,
            path: Some(path.to_path_buf()),
        })
    }

    /// Display name for diagnostics.
    pub fn display_name(&self) -> String {
        self.path
            .as_deref()
            .map(|p| p.display().to_string())
            .unwrap_or_else(|| "<input>".to_string())
    }

    /// Iterate over every individual class name with its line.
    pub fn class_names(&self) -> impl Iterator<Item = (&str, u32)> {
        self.uses
            .iter()
            .flat_map(|u| u.classes.iter().map(move |c| (c.as_str(), u.line)))
    }
}

fn scan_classes(src: &str, path: Option<&Path>) -> Result<Vec<ClassUse>> {
    let mut reader = Reader::from_str(src);
    reader.config_mut().check_end_names = false;

    let mut uses = vec![];

    loop {
        let pos = reader.buffer_position() as usize;

        match reader.read_event() {
            Ok(Event::Start(e)) | Ok(Event::Empty(e)) => {
                for attr in e.html_attributes().flatten() {
                    if attr.key.as_ref().eq_ignore_ascii_case(b"class") {
                        let value = String::from_utf8_lossy(&attr.value);
                        let classes: Vec<String> =
                            value.split_whitespace().map(|s| s.to_string()).collect();
                        if !classes.is_empty() {
                            uses.push(ClassUse {
                                classes,
                                line: line_at(src, pos),
                            });
                        }
                    }
                }
            }
            Ok(Event::Eof) => break,
            Ok(_) => {}
            Err(e) => {
                let path = path.map(Path::to_path_buf).unwrap_or_else(|| "<input>".into());
                return Err(Error::markup(
                    path,
                    format!("{} at line {}", e, line_at(src, pos)),
                ));
            }
        }
    }

    Ok(uses)
}

/// 1-based line number of a byte offset.
fn line_at(src: &str, offset: usize) -> u32 {
    let offset = offset.min(src.len());
    1 + src[..offset].matches('\n').count() as u32
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extract_classes() {
        let html = r#"<div class="search-form is-open"><span class="title">Hi</span></div>"#;
        let doc = MarkupDocument::from_str(html).unwrap();

        assert_eq!(doc.uses.len(), 2);
        assert_eq!(doc.uses[0].classes, vec!["search-form", "is-open"]);
        assert_eq!(doc.uses[1].classes, vec!["title"]);
    }

    #[test]
    fn elements_without_classes_are_ignored() {
        let html = r#"<div><p id="x">text</p></div>"#;
        let doc = MarkupDocument::from_str(html).unwrap();
        assert!(doc.uses.is_empty());
    }

    #[test]
    fn self_closing_and_case_insensitive_attr() {
        let html = r#"<img CLASS="u-hidden" src="x.png"/>"#;
        let doc = MarkupDocument::from_str(html).unwrap();
        assert_eq!(doc.uses[0].classes, vec!["u-hidden"]);
    }

    #[test]
    fn mismatched_end_tags_are_tolerated() {
        let html = "<div class=\"card-list\"><li>one</div>";
        let doc = MarkupDocument::from_str(html).unwrap();
        assert_eq!(doc.uses.len(), 1);
    }

    #[test]
    fn line_numbers() {
        let html = "<html>\n<body>\n<div class=\"site-nav\">\n</div>\n</body>\n</html>";
        let doc = MarkupDocument::from_str(html).unwrap();
        assert_eq!(doc.uses[0].line, 3);
    }

    #[test]
    fn class_names_iterator() {
        let html = r#"<div class="search-form is-open"></div>"#;
        let doc = MarkupDocument::from_str(html).unwrap();

        let names: Vec<_> = doc.class_names().map(|(n, _)| n.to_string()).collect();
        assert_eq!(names, vec!["search-form", "is-open"]);
    }
}
