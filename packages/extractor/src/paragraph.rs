//! Event cursor over a WordprocessingML document.
//!
//! Only the text of the paragraphs currently open is held in memory. Every
//! event buffer is cleared before the next read, so a document of any size
//! is processed with a working set bounded by its longest paragraph.
//!
//! Text is decoded with the encoding named in the XML declaration (or its
//! byte order mark), so `windows-1251` exports read the same as UTF-8 ones.

use std::io::BufRead;

use quick_xml::events::Event;
use quick_xml::name::{Namespace, QName, ResolveResult};
use quick_xml::NsReader;

use crate::config::ExtractorConfig;
use crate::error::{ExtractorError, Result};

/// Forward-only reader yielding the trimmed text of each paragraph.
///
/// Paragraphs are yielded on their end event, so an empty `<w:p/>` yields
/// `""`. Text inside a nested paragraph belongs to the nested paragraph only.
pub struct ParagraphReader<R: BufRead> {
    reader: NsReader<R>,
    buf: Vec<u8>,
    namespace: Vec<u8>,
    tag: Vec<u8>,
    /// Text of the open paragraphs, innermost last.
    open: Vec<String>,
    done: bool,
}

impl<R: BufRead> ParagraphReader<R> {
    /// Create a reader over `source` matching the configured paragraph element.
    pub fn new(source: R, config: &ExtractorConfig) -> Self {
        Self {
            reader: NsReader::from_reader(source),
            buf: Vec::new(),
            namespace: config.namespace.as_bytes().to_vec(),
            tag: config.paragraph_tag.as_bytes().to_vec(),
            open: Vec::new(),
            done: false,
        }
    }

    /// Read up to the next paragraph end and return its text.
    ///
    /// Returns `Ok(None)` at end of document.
    pub fn next_paragraph(&mut self) -> Result<Option<String>> {
        if self.done {
            return Ok(None);
        }

        loop {
            self.buf.clear();
            let event = match self.reader.read_event_into(&mut self.buf) {
                Ok(event) => event,
                Err(e) => {
                    self.done = true;
                    return Err(ExtractorError::XmlParse {
                        position: self.reader.buffer_position(),
                        message: e.to_string(),
                    });
                }
            };

            match event {
                Event::Start(e) => {
                    if is_paragraph(&self.reader, &self.namespace, &self.tag, e.name()) {
                        self.open.push(String::new());
                    }
                }
                Event::Empty(e) => {
                    if is_paragraph(&self.reader, &self.namespace, &self.tag, e.name()) {
                        return Ok(Some(String::new()));
                    }
                }
                Event::End(e) => {
                    if is_paragraph(&self.reader, &self.namespace, &self.tag, e.name()) {
                        if let Some(text) = self.open.pop() {
                            return Ok(Some(text.trim().to_string()));
                        }
                    }
                }
                Event::Text(e) => {
                    if let Some(current) = self.open.last_mut() {
                        let text = e.unescape().map_err(|err| ExtractorError::XmlParse {
                            position: self.reader.buffer_position(),
                            message: err.to_string(),
                        });
                        match text {
                            Ok(text) => current.push_str(&text),
                            Err(err) => {
                                self.done = true;
                                return Err(err);
                            }
                        }
                    }
                }
                Event::CData(e) => {
                    if let Some(current) = self.open.last_mut() {
                        match e.decode() {
                            Ok(text) => current.push_str(&text),
                            Err(err) => {
                                self.done = true;
                                return Err(ExtractorError::XmlParse {
                                    position: self.reader.buffer_position(),
                                    message: err.to_string(),
                                });
                            }
                        }
                    }
                }
                Event::Eof => {
                    self.done = true;
                    if !self.open.is_empty() {
                        return Err(ExtractorError::XmlParse {
                            position: self.reader.buffer_position(),
                            message: format!(
                                "document ended inside {} open paragraph(s)",
                                self.open.len()
                            ),
                        });
                    }
                    return Ok(None);
                }
                _ => {}
            }
        }
    }
}

impl<R: BufRead> Iterator for ParagraphReader<R> {
    type Item = Result<String>;

    fn next(&mut self) -> Option<Self::Item> {
        self.next_paragraph().transpose()
    }
}

/// Check whether an element name resolves to the configured paragraph.
fn is_paragraph<R>(reader: &NsReader<R>, namespace: &[u8], tag: &[u8], name: QName<'_>) -> bool {
    let (ns, local) = reader.resolve_element(name);
    local.as_ref() == tag && matches!(ns, ResolveResult::Bound(Namespace(uri)) if uri == namespace)
}
