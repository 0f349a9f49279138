use crate::layout::CompiledLayout;
use crate::model::Token;

/// Tokens belonging to one logical table row.
#[derive(Debug, Clone)]
pub struct RowSegment<'a> {
    /// The identifier token the row is anchored on.
    pub anchor: &'a Token,
    /// Tokens on the anchor's own visual line, left to right.
    pub core: Vec<&'a Token>,
    /// Tokens between this anchor's line and the next anchor's line, in
    /// reading order. Wrapped field fragments live here.
    pub continuation: Vec<&'a Token>,
}

/// Split one page's tokens into rows anchored on identifier tokens.
///
/// A token within `row_tolerance` of an anchor belongs to that anchor's core
/// band. Everything strictly between two core bands belongs to the upper
/// row's continuation; the last row's continuation runs to the page end.
pub fn segment_rows<'a>(tokens: &'a [Token], layout: &CompiledLayout) -> Vec<RowSegment<'a>> {
    let tolerance = layout.row_tolerance;

    let mut anchors: Vec<&Token> = tokens.iter().filter(|t| layout.anchor.matches(t)).collect();
    anchors.sort_by(|a, b| a.top.total_cmp(&b.top));

    anchors
        .iter()
        .enumerate()
        .map(|(i, &anchor)| {
            let top = anchor.top;
            let next_top = anchors.get(i + 1).map_or(f32::INFINITY, |next| next.top);

            let mut core: Vec<&Token> = tokens
                .iter()
                .filter(|t| (t.top - top).abs() < tolerance)
                .collect();
            core.sort_by(|a, b| a.x0.total_cmp(&b.x0));

            let mut continuation: Vec<&Token> = tokens
                .iter()
                .filter(|t| {
                    t.top > top
                        && t.top < next_top
                        && t.top - top >= tolerance
                        && next_top - t.top >= tolerance
                })
                .collect();
            continuation.sort_by(|a, b| a.top.total_cmp(&b.top).then(a.x0.total_cmp(&b.x0)));

            RowSegment {
                anchor,
                core,
                continuation,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::builtin::load_preset;

    fn layout() -> CompiledLayout {
        CompiledLayout::compile(&load_preset("kz-budget").unwrap()).unwrap()
    }

    fn texts(tokens: &[&Token]) -> Vec<String> {
        tokens.iter().map(|t| t.text.clone()).collect()
    }

    #[test]
    fn test_anchors_sorted_by_top() {
        let tokens = vec![
            Token::new("222222222222", 100.0, 200.0),
            Token::new("111111111111", 100.0, 100.0),
        ];
        let rows = segment_rows(&tokens, &layout());
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].anchor.text, "111111111111");
        assert_eq!(rows[1].anchor.text, "222222222222");
    }

    #[test]
    fn test_only_exact_twelve_digit_tokens_anchor() {
        let tokens = vec![
            Token::new("11111111111", 100.0, 100.0),
            Token::new("1111111111111", 100.0, 120.0),
            Token::new("11111111111A", 100.0, 140.0),
        ];
        assert!(segment_rows(&tokens, &layout()).is_empty());
    }

    #[test]
    fn test_core_band_sorted_left_to_right() {
        let tokens = vec![
            Token::new("1,000.00", 528.0, 101.0),
            Token::new("111111111111", 100.0, 100.0),
            Token::new("17", 40.0, 99.0),
            Token::new("far", 40.0, 103.0),
        ];
        let rows = segment_rows(&tokens, &layout());
        assert_eq!(texts(&rows[0].core), vec!["17", "111111111111", "1,000.00"]);
    }

    #[test]
    fn test_continuation_stops_before_next_core_band() {
        let tokens = vec![
            Token::new("111111111111", 100.0, 100.0),
            Token::new("below-core", 395.0, 101.0),
            Token::new("wrap-1", 395.0, 110.0),
            Token::new("wrap-2", 330.0, 110.0),
            Token::new("next-line", 395.0, 119.0),
            Token::new("222222222222", 100.0, 120.0),
        ];
        let rows = segment_rows(&tokens, &layout());
        assert_eq!(texts(&rows[0].continuation), vec!["wrap-2", "wrap-1"]);
        assert!(texts(&rows[1].core).contains(&"next-line".to_string()));
        assert!(rows[1].continuation.is_empty());
    }

    #[test]
    fn test_last_row_continuation_runs_to_page_end() {
        let tokens = vec![
            Token::new("111111111111", 100.0, 100.0),
            Token::new("A2910013", 395.0, 700.0),
        ];
        let rows = segment_rows(&tokens, &layout());
        assert_eq!(texts(&rows[0].continuation), vec!["A2910013"]);
    }
}
