//! In-memory fixtures shared by unit and router tests.

use std::io::{Cursor, Write};

use lopdf::content::{Content, Operation};
use lopdf::{dictionary, Object, Stream};
use zip::write::SimpleFileOptions;

const W_NS: &str = "http://schemas.openxmlformats.org/wordprocessingml/2006/main";

/// A minimal DOCX whose body holds one `<w:p>` per entry.
pub fn docx_bytes(paragraphs: &[&str]) -> Vec<u8> {
    let body: String = paragraphs
        .iter()
        .map(|p| {
            if p.is_empty() {
                "<w:p></w:p>".to_string()
            } else {
                format!(
                    r#"<w:p><w:r><w:t xml:space="preserve">{}</w:t></w:r></w:p>"#,
                    escape_xml(p)
                )
            }
        })
        .collect();
    docx_from_body(&body)
}

/// A minimal DOCX with a raw `<w:body>` payload.
pub fn docx_from_body(body: &str) -> Vec<u8> {
    let xml = format!(
        r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?><w:document xmlns:w="{W_NS}"><w:body>{body}</w:body></w:document>"#
    );

    let mut writer = zip::ZipWriter::new(Cursor::new(Vec::new()));
    writer
        .start_file("[Content_Types].xml", SimpleFileOptions::default())
        .unwrap();
    writer.write_all(b"<Types/>").unwrap();
    writer
        .start_file("word/document.xml", SimpleFileOptions::default())
        .unwrap();
    writer.write_all(xml.as_bytes()).unwrap();
    writer.finish().unwrap().into_inner()
}

/// A one-page PDF with each line drawn in Courier on the text layer.
pub fn pdf_bytes(lines: &[&str]) -> Vec<u8> {
    let mut operations = vec![
        Operation::new("BT", vec![]),
        Operation::new("Tf", vec!["F1".into(), 12.into()]),
        Operation::new("TL", vec![14.into()]),
        Operation::new("Td", vec![72.into(), 720.into()]),
    ];
    for line in lines {
        operations.push(Operation::new("Tj", vec![Object::string_literal(*line)]));
        operations.push(Operation::new("T*", vec![]));
    }
    operations.push(Operation::new("ET", vec![]));
    build_pdf(operations)
}

/// A one-page PDF that only paints a rectangle: no text layer at all.
pub fn pdf_without_text() -> Vec<u8> {
    build_pdf(vec![
        Operation::new("re", vec![72.into(), 72.into(), 200.into(), 100.into()]),
        Operation::new("f", vec![]),
    ])
}

fn build_pdf(operations: Vec<Operation>) -> Vec<u8> {
    let mut doc = lopdf::Document::with_version("1.5");
    let pages_id = doc.new_object_id();
    let font_id = doc.add_object(dictionary! {
        "Type" => "Font",
        "Subtype" => "Type1",
        "BaseFont" => "Courier",
    });
    let resources_id = doc.add_object(dictionary! {
        "Font" => dictionary! { "F1" => font_id },
    });
    let content = Content { operations };
    let content_id = doc.add_object(Stream::new(dictionary! {}, content.encode().unwrap()));
    let page_id = doc.add_object(dictionary! {
        "Type" => "Page",
        "Parent" => pages_id,
        "Contents" => content_id,
        "Resources" => resources_id,
        "MediaBox" => vec![0.into(), 0.into(), 612.into(), 792.into()],
    });
    doc.objects.insert(
        pages_id,
        Object::Dictionary(dictionary! {
            "Type" => "Pages",
            "Kids" => vec![page_id.into()],
            "Count" => 1,
        }),
    );
    let catalog_id = doc.add_object(dictionary! {
        "Type" => "Catalog",
        "Pages" => pages_id,
    });
    doc.trailer.set("Root", catalog_id);

    let mut bytes = Vec::new();
    doc.save_to(&mut bytes).unwrap();
    bytes
}

/// A `multipart/form-data` body; returns `(content_type, body)`.
pub fn multipart_body(
    filename: Option<(&str, &[u8])>,
    job_description: Option<&str>,
) -> (String, Vec<u8>) {
    const BOUNDARY: &str = "resume-api-test-boundary";
    let mut body = Vec::new();

    if let Some((name, data)) = filename {
        body.extend_from_slice(
            format!(
                "--{BOUNDARY}\r\nContent-Disposition: form-data; name=\"file\"; filename=\"{name}\"\r\nContent-Type: application/octet-stream\r\n\r\n"
            )
            .as_bytes(),
        );
        body.extend_from_slice(data);
        body.extend_from_slice(b"\r\n");
    }
    if let Some(jd) = job_description {
        body.extend_from_slice(
            format!(
                "--{BOUNDARY}\r\nContent-Disposition: form-data; name=\"job_description\"\r\n\r\n{jd}\r\n"
            )
            .as_bytes(),
        );
    }
    body.extend_from_slice(format!("--{BOUNDARY}--\r\n").as_bytes());

    (format!("multipart/form-data; boundary={BOUNDARY}"), body)
}

/// Resume prose that trips every formatting check and all 14 built-in keywords.
pub fn strong_resume_text() -> String {
    let mut text = String::from(
        "Jane Doe\njane.doe@example.com | 555-123-4567 | linkedin.com/in/janedoe\n\n\
         SUMMARY\nEngineer with a record of results and success.\n\n\
         EXPERIENCE\n\
         - Achieved a 40% latency reduction across the platform\n\
         - Developed and managed a team project from design to launch\n\
         - Created tooling that improved release cadence\n\
         - Responsible for leadership of the reliability effort\n\n\
         EDUCATION\nB.S. Computer Science\n\nSKILLS\nRust, Go, SQL\n\n",
    );
    // Pad into the 300–1200 word window.
    for _ in 0..40 {
        text.push_str("Shipped reliable distributed services for customers worldwide daily. ");
    }
    text
}

fn escape_xml(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}
