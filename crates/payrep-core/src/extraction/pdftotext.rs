use crate::error::PayrepError;
use crate::extraction::{PageContent, TokenExtractor};
use crate::model::Token;
use quick_xml::events::{BytesStart, Event};
use quick_xml::Reader;
use std::io::Write;
use std::process::Command;

/// PDF extraction backend using pdftotext (from poppler-utils).
///
/// Uses `pdftotext -bbox-layout`, which reports every word with its bounding
/// box.
pub struct PdftotextExtractor;

impl PdftotextExtractor {
    pub fn new() -> Self {
        PdftotextExtractor
    }

    /// Check if pdftotext is available on the system.
    pub fn is_available() -> bool {
        Command::new("pdftotext")
            .arg("-v")
            .output()
            .map(|o| o.status.success() || !o.stderr.is_empty())
            .unwrap_or(false)
    }
}

impl Default for PdftotextExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl TokenExtractor for PdftotextExtractor {
    fn extract_pages(&self, pdf_bytes: &[u8]) -> Result<Vec<PageContent>, PayrepError> {
        let mut tmpfile =
            tempfile::NamedTempFile::new().map_err(|e| PayrepError::Extraction(e.to_string()))?;
        tmpfile
            .write_all(pdf_bytes)
            .map_err(|e| PayrepError::Extraction(e.to_string()))?;

        let output = Command::new("pdftotext")
            .arg("-bbox-layout")
            .arg(tmpfile.path())
            .arg("-") // output to stdout
            .output()
            .map_err(|e| {
                if e.kind() == std::io::ErrorKind::NotFound {
                    PayrepError::PdftotextNotFound
                } else {
                    PayrepError::Extraction(format!("pdftotext -bbox-layout failed: {}", e))
                }
            })?;

        if !output.status.success() {
            let code = output.status.code().unwrap_or(-1);
            let stderr = String::from_utf8_lossy(&output.stderr).to_string();
            return Err(PayrepError::PdftotextFailed { code, stderr });
        }

        let xml = String::from_utf8_lossy(&output.stdout);
        let pages = parse_bbox_xml(&xml)?;
        tracing::debug!(pages = pages.len(), "pdftotext extraction finished");
        Ok(pages)
    }

    fn backend_name(&self) -> &str {
        "pdftotext"
    }
}

/// Parse `pdftotext -bbox-layout` output into pages of tokens.
///
/// Pages are numbered in the order they appear; `x0`/`top` come from each
/// word's `xMin`/`yMin`. Block and line grouping is ignored.
fn parse_bbox_xml(xml: &str) -> Result<Vec<PageContent>, PayrepError> {
    let mut reader = Reader::from_str(xml);
    reader.config_mut().trim_text(true);

    let mut pages = Vec::new();
    let mut page: Option<PageContent> = None;
    let mut word: Option<(f32, f32, String)> = None;

    loop {
        let event = reader
            .read_event()
            .map_err(|e| PayrepError::Extraction(format!("malformed bbox XML: {e}")))?;

        match event {
            Event::Start(e) => match e.name().as_ref() {
                b"page" => {
                    page = Some(PageContent {
                        page_number: pages.len() + 1,
                        ..Default::default()
                    });
                }
                b"word" => {
                    let (x0, top) = word_position(&e)?;
                    word = Some((x0, top, String::new()));
                }
                _ => {}
            },
            Event::Empty(e) if e.name().as_ref() == b"page" => {
                pages.push(PageContent {
                    page_number: pages.len() + 1,
                    ..Default::default()
                });
            }
            Event::Text(t) => {
                if let Some((_, _, text)) = word.as_mut() {
                    let unescaped = t
                        .unescape()
                        .map_err(|e| PayrepError::Extraction(format!("bad word text: {e}")))?;
                    text.push_str(&unescaped);
                }
            }
            Event::End(e) => match e.name().as_ref() {
                b"word" => {
                    if let Some((x0, top, text)) = word.take() {
                        let text = text.trim().to_string();
                        match page.as_mut() {
                            Some(p) if !text.is_empty() => p.tokens.push(Token { text, x0, top }),
                            _ => {}
                        }
                    }
                }
                b"page" => {
                    if let Some(p) = page.take() {
                        pages.push(p);
                    }
                }
                _ => {}
            },
            Event::Eof => break,
            _ => {}
        }
    }

    Ok(pages)
}

fn word_position(tag: &BytesStart<'_>) -> Result<(f32, f32), PayrepError> {
    let mut x0 = None;
    let mut top = None;

    for attr in tag.attributes() {
        let attr = attr.map_err(|e| PayrepError::Extraction(format!("bad word attribute: {e}")))?;
        let value = attr
            .unescape_value()
            .map_err(|e| PayrepError::Extraction(format!("bad word attribute: {e}")))?;
        match attr.key.as_ref() {
            b"xMin" => x0 = value.parse::<f32>().ok(),
            b"yMin" => top = value.parse::<f32>().ok(),
            _ => {}
        }
    }

    match (x0, top) {
        (Some(x0), Some(top)) => Ok((x0, top)),
        _ => Err(PayrepError::Extraction(
            "word element without xMin/yMin".into(),
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_bbox_xml_tokens() {
        let xml = r#"<!DOCTYPE html PUBLIC "-//W3C//DTD XHTML 1.0 Transitional//EN" "http://www.w3.org/TR/xhtml1/DTD/xhtml1-transitional.dtd">
<html xmlns="http://www.w3.org/1999/xhtml">
<head>
<title></title>
<meta name="Producer" content="test"/>
</head>
<body>
<doc>
  <page width="595.0" height="842.0">
    <flow>
      <block xMin="10.0" yMin="20.0" xMax="200.0" yMax="60.0">
        <line xMin="10.0" yMin="20.0" xMax="120.0" yMax="30.0">
          <word xMin="10.0" yMin="20.0" xMax="50.0" yMax="30.0">Регион:</word>
          <word xMin="52.0" yMin="20.0" xMax="120.0" yMax="30.0">A&amp;B</word>
        </line>
        <line xMin="100.0" yMin="50.5" xMax="160.0" yMax="58.0">
          <word xMin="100.0" yMin="50.5" xMax="160.0" yMax="58.0">960101300123</word>
        </line>
      </block>
    </flow>
  </page>
  <page width="595.0" height="842.0">
  </page>
</doc>
</body>
</html>"#;
        let pages = parse_bbox_xml(xml).unwrap();
        assert_eq!(pages.len(), 2);
        assert_eq!(pages[0].page_number, 1);
        assert_eq!(pages[0].tokens.len(), 3);
        assert_eq!(pages[0].tokens[1].text, "A&B");
        assert_eq!(pages[0].tokens[2].text, "960101300123");
        assert_eq!(pages[0].tokens[2].x0, 100.0);
        assert_eq!(pages[0].tokens[2].top, 50.5);
        assert_eq!(pages[1].page_number, 2);
        assert!(pages[1].tokens.is_empty());
    }

    #[test]
    fn test_word_without_position_is_error() {
        let xml = r#"<doc><page><line><word>x</word></line></page></doc>"#;
        assert!(parse_bbox_xml(xml).is_err());
    }
}
