// ============================================================================
// Numeral Lexer
// Splits input text into classified numeral glyphs
// ============================================================================

use super::glyphs::{Glyph, GroupMarker, GROUP_MARKERS};
use smallvec::SmallVec;

/// A vocabulary glyph together with where it was found.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token {
    pub glyph: Glyph,
    pub ch: char,
    /// Character offset in the original input
    pub offset: usize,
}

/// Token buffer; numerals for in-range amounts fit inline.
pub type Tokens = SmallVec<[Token; 32]>;

/// Keep every vocabulary glyph of `text`, in order.
///
/// Characters outside the vocabulary (whitespace, ASCII digits, other CJK
/// characters) are dropped. 整 is kept so callers can tell "整" apart from
/// text with no numerals at all.
pub fn tokenize(text: &str) -> Tokens {
    text.chars()
        .enumerate()
        .filter_map(|(offset, ch)| {
            Glyph::classify(ch).map(|glyph| Token { glyph, ch, offset })
        })
        .collect()
}

/// Match a group marker at the start of `tokens`, longest alternative first.
///
/// Returns the marker and the number of tokens it spans.
pub fn match_group_marker(tokens: &[Token]) -> Option<(GroupMarker, usize)> {
    GROUP_MARKERS.iter().find_map(|marker| {
        let units = marker.units();
        let matches = tokens.len() >= units.len()
            && tokens
                .iter()
                .zip(units)
                .all(|(token, unit)| token.glyph == Glyph::Group(*unit));
        matches.then_some((*marker, units.len()))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::numeral::glyphs::{DecimalUnit, PlaceUnit};

    #[test]
    fn test_tokenize_drops_foreign_characters() {
        let tokens = tokenize(" 人民币 壹 元\t整 (RMB 1.00)");
        let chars: String = tokens.iter().map(|t| t.ch).collect();
        assert_eq!(chars, "壹元整");
        assert_eq!(tokens[0].offset, 5);
        assert_eq!(tokens[1].glyph, Glyph::Place(PlaceUnit::Ones));
        assert_eq!(tokens[2].glyph, Glyph::Even);
    }

    #[test]
    fn test_tokenize_decimal_units() {
        let tokens = tokenize("贰角叁分");
        assert_eq!(tokens.len(), 4);
        assert_eq!(tokens[1].glyph, Glyph::Decimal(DecimalUnit::Jiao));
        assert_eq!(tokens[3].glyph, Glyph::Decimal(DecimalUnit::Fen));
    }

    #[test]
    fn test_tokenize_no_vocabulary() {
        assert!(tokenize("10000").is_empty());
        assert!(tokenize("").is_empty());
    }

    #[test]
    fn test_match_group_marker_longest_first() {
        let tokens = tokenize("万万亿");
        assert_eq!(match_group_marker(&tokens), Some((GroupMarker::WanWanYi, 3)));

        let tokens = tokenize("亿亿元");
        assert_eq!(match_group_marker(&tokens), Some((GroupMarker::YiYi, 2)));

        let tokens = tokenize("万亿元");
        assert_eq!(match_group_marker(&tokens), Some((GroupMarker::WanYi, 2)));

        let tokens = tokenize("万零伍");
        assert_eq!(match_group_marker(&tokens), Some((GroupMarker::Wan, 1)));

        let tokens = tokenize("壹万");
        assert_eq!(match_group_marker(&tokens), None);
    }
}
