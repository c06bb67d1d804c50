//! DOCX text extraction: paragraphs of `word/document.xml`, in document order.

use std::io::{Cursor, Read};

use quick_xml::events::Event;
use quick_xml::Reader;
use zip::ZipArchive;

use super::{DocumentFormat, ExtractionError};

/// Joins every paragraph with `\n` and trims the result.
/// Empty paragraphs are kept, so an all-empty document yields `""`.
pub fn extract_docx_text(bytes: &[u8]) -> Result<String, ExtractionError> {
    let paragraphs = read_paragraphs(bytes).map_err(|reason| ExtractionError::Failed {
        format: DocumentFormat::Docx,
        reason,
    })?;
    Ok(paragraphs.join("\n").trim().to_string())
}

fn read_paragraphs(bytes: &[u8]) -> Result<Vec<String>, String> {
    let mut archive =
        ZipArchive::new(Cursor::new(bytes)).map_err(|e| format!("not a DOCX archive: {e}"))?;

    let mut xml = String::new();
    archive
        .by_name("word/document.xml")
        .map_err(|e| format!("missing word/document.xml: {e}"))?
        .read_to_string(&mut xml)
        .map_err(|e| format!("failed to read document.xml: {e}"))?;

    parse_document_xml(&xml)
}

fn parse_document_xml(xml: &str) -> Result<Vec<String>, String> {
    let mut reader = Reader::from_str(xml);
    let mut buf = Vec::new();

    let mut paragraphs = Vec::new();
    // text boxes nest whole paragraphs inside a run of the outer one
    let mut open: Vec<String> = Vec::new();
    let mut in_run = false;
    let mut in_text = false;

    loop {
        match reader.read_event_into(&mut buf) {
            Ok(Event::Start(ref e)) => match e.local_name().as_ref() {
                b"p" => open.push(String::new()),
                b"r" => in_run = true,
                b"t" => in_text = true,
                _ => {}
            },
            Ok(Event::End(ref e)) => match e.local_name().as_ref() {
                b"p" => paragraphs.extend(open.pop()),
                b"r" => in_run = false,
                b"t" => in_text = false,
                _ => {}
            },
            Ok(Event::Empty(ref e)) => match e.local_name().as_ref() {
                b"p" => paragraphs.push(String::new()),
                // <w:tab/> also appears as a tab-stop definition in paragraph properties.
                b"tab" if in_run => push_text(&mut open, "\t"),
                b"br" | b"cr" if in_run => push_text(&mut open, "\n"),
                _ => {}
            },
            Ok(Event::Text(e)) if in_text => {
                let text = e
                    .unescape()
                    .map_err(|e| format!("bad text in document.xml: {e}"))?;
                push_text(&mut open, &text);
            }
            Ok(Event::Eof) => break,
            Err(e) => {
                return Err(format!(
                    "XML parse error at position {}: {e}",
                    reader.buffer_position()
                ))
            }
            _ => {}
        }
        buf.clear();
    }

    Ok(paragraphs)
}

fn push_text(open: &mut [String], text: &str) {
    if let Some(paragraph) = open.last_mut() {
        paragraph.push_str(text);
    }
}
