//! Source document loading.
//!
//! Plain text files are read as-is. Word (`.docx`) files are unzipped and
//! their `word/document.xml` is flattened to raw text: one line per paragraph,
//! with tabs and manual line breaks kept.

use std::io::{Read, Seek};
use std::path::Path;

use quick_xml::events::Event;
use quick_xml::Reader;

use crate::error::{Error, Result};

/// Main document part inside a `.docx` archive.
const DOCUMENT_PART: &str = "word/document.xml";

/// Read a source document to text, picking the reader from the extension.
pub fn read_source(path: &Path) -> Result<String> {
    let is_docx = path
        .extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| e.eq_ignore_ascii_case("docx"));

    if is_docx {
        let file = fs_err::File::open(path)?;
        docx_text(file).map_err(|e| match e {
            Error::Msg(message) => Error::document(message, path),
            other => other.with_file(path),
        })
    } else {
        Ok(fs_err::read_to_string(path)?)
    }
}

/// Extract raw paragraph text from a `.docx` archive.
pub fn docx_text<R: Read + Seek>(reader: R) -> Result<String> {
    let mut archive =
        zip::ZipArchive::new(reader).map_err(|e| Error::Msg(format!("not a .docx archive: {e}")))?;
    let mut part = archive
        .by_name(DOCUMENT_PART)
        .map_err(|e| Error::Msg(format!("missing {DOCUMENT_PART}: {e}")))?;

    let mut xml = String::new();
    part.read_to_string(&mut xml)?;
    document_xml_text(&xml)
}

/// Flatten WordprocessingML body text.
pub fn document_xml_text(xml: &str) -> Result<String> {
    let mut reader = Reader::from_str(xml);
    let mut out = String::new();
    let mut in_text = false;

    loop {
        match reader.read_event() {
            Ok(Event::Start(e)) => {
                if e.name().as_ref() == b"w:t" {
                    in_text = true;
                }
            }
            Ok(Event::End(e)) => match e.name().as_ref() {
                b"w:t" => in_text = false,
                b"w:p" => out.push('\n'),
                _ => {}
            },
            Ok(Event::Empty(e)) => match e.name().as_ref() {
                b"w:tab" => out.push('\t'),
                b"w:br" | b"w:cr" | b"w:p" => out.push('\n'),
                _ => {}
            },
            Ok(Event::Text(t)) if in_text => {
                let text = t
                    .unescape()
                    .map_err(|e| Error::Msg(format!("bad text in {DOCUMENT_PART}: {e}")))?;
                out.push_str(&text);
            }
            Ok(Event::Eof) => break,
            Err(e) => {
                return Err(Error::Msg(format!(
                    "malformed {DOCUMENT_PART} at byte {}: {e}",
                    reader.buffer_position()
                )));
            }
            _ => {}
        }
    }

    Ok(out)
}

#[cfg(test)]
mod tests {
    #![allow(clippy::expect_used, clippy::unwrap_used, clippy::panic)]

    use super::*;
    use std::io::{Cursor, Write};

    const BODY: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<w:document xmlns:w="http://schemas.openxmlformats.org/wordprocessingml/2006/main"><w:body>
<w:p><w:r><w:t>Service Date: June 22, 2025</w:t></w:r></w:p>
<w:p><w:r><w:t xml:space="preserve">Order of </w:t></w:r><w:r><w:t>Service</w:t></w:r></w:p>
<w:p/>
<w:p><w:r><w:t>Children&apos;s Message</w:t></w:r><w:r><w:br/><w:t>-Pastor Megan</w:t></w:r></w:p>
<w:p><w:r><w:t>L:</w:t><w:tab/><w:t>Come &amp; worship</w:t></w:r></w:p>
</w:body></w:document>"#;

    fn docx_bytes(document: &str) -> Vec<u8> {
        let mut buf = Cursor::new(Vec::new());
        {
            let mut zip = zip::ZipWriter::new(&mut buf);
            zip.start_file(DOCUMENT_PART, zip::write::FileOptions::default()).unwrap();
            zip.write_all(document.as_bytes()).unwrap();
            zip.finish().unwrap();
        }
        buf.into_inner()
    }

    #[test]
    fn flattens_paragraphs_runs_and_breaks() {
        let text = document_xml_text(BODY).unwrap();
        assert_eq!(
            text,
            "Service Date: June 22, 2025\nOrder of Service\n\nChildren's Message\n-Pastor Megan\nL:\tCome & worship\n"
        );
    }

    #[test]
    fn reads_docx_archive() {
        let text = docx_text(Cursor::new(docx_bytes(BODY))).unwrap();
        assert!(text.starts_with("Service Date: June 22, 2025\n"));
    }

    #[test]
    fn non_zip_is_document_error() {
        let mut file = tempfile::Builder::new().suffix(".docx").tempfile().unwrap();
        file.write_all(b"not a zip").unwrap();
        let err = read_source(file.path()).unwrap_err();
        assert!(matches!(err, Error::Document { .. }));
    }

    #[test]
    fn archive_without_document_part_is_document_error() {
        let mut buf = Cursor::new(Vec::new());
        {
            let mut zip = zip::ZipWriter::new(&mut buf);
            zip.start_file("word/styles.xml", zip::write::FileOptions::default()).unwrap();
            zip.write_all(b"<w:styles/>").unwrap();
            zip.finish().unwrap();
        }
        let mut file = tempfile::Builder::new().suffix(".docx").tempfile().unwrap();
        file.write_all(&buf.into_inner()).unwrap();

        match read_source(file.path()).unwrap_err() {
            Error::Document { message, .. } => assert!(message.contains(DOCUMENT_PART)),
            other => panic!("Expected Document error, got {other:?}"),
        }
    }

    #[test]
    fn plain_text_read_verbatim() {
        let mut file = tempfile::Builder::new().suffix(".txt").tempfile().unwrap();
        file.write_all(b"Order of Service\nDismissal\n").unwrap();
        assert_eq!(read_source(file.path()).unwrap(), "Order of Service\nDismissal\n");
    }
}
