pub mod pdftotext;

use crate::error::PayrepError;
use crate::model::Token;

/// Content extracted from a single page of a PDF.
#[derive(Debug, Clone, Default)]
pub struct PageContent {
    pub page_number: usize,
    /// Positioned words, in extraction order.
    pub tokens: Vec<Token>,
}

impl PageContent {
    pub fn from_tokens(page_number: usize, tokens: Vec<Token>) -> Self {
        PageContent {
            page_number,
            tokens,
        }
    }

    /// Plain text of the page, one visual row per line.
    ///
    /// Tokens whose `top` lies within `line_tolerance` of a row's first token
    /// join that row, even when the backend put them in different text blocks.
    pub fn text(&self, line_tolerance: f32) -> String {
        lines_from_tokens(&self.tokens, line_tolerance).join("\n")
    }
}

/// Group tokens into visual lines by vertical position, left to right.
pub fn lines_from_tokens(tokens: &[Token], tolerance: f32) -> Vec<String> {
    let mut sorted: Vec<&Token> = tokens.iter().collect();
    sorted.sort_by(|a, b| a.top.total_cmp(&b.top).then(a.x0.total_cmp(&b.x0)));

    let mut lines: Vec<Vec<&Token>> = Vec::new();
    for token in sorted {
        match lines.last_mut() {
            Some(line) if (token.top - line[0].top).abs() < tolerance => line.push(token),
            _ => lines.push(vec![token]),
        }
    }

    lines
        .into_iter()
        .map(|mut line| {
            line.sort_by(|a, b| a.x0.total_cmp(&b.x0));
            line.iter()
                .map(|t| t.text.as_str())
                .collect::<Vec<_>>()
                .join(" ")
        })
        .collect()
}

/// Trait for PDF token extraction backends.
pub trait TokenExtractor: Send + Sync {
    /// Extract positioned tokens from PDF bytes, returning one PageContent per page.
    fn extract_pages(&self, pdf_bytes: &[u8]) -> Result<Vec<PageContent>, PayrepError>;

    /// Name of this extraction backend (for diagnostics).
    fn backend_name(&self) -> &str;
}
