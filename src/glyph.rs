//! Glyph token validation.
//!
//! A glyph token is the middle item of an `(x, glyph, y)` triple. Documents
//! mostly use single ASCII characters, but block and line-drawing symbols
//! are common too, and some editors split one symbol into a short sequence
//! of code points.

/// Longest accepted token, in code points.
pub const MAX_GLYPH_LEN: usize = 3;

/// Printable ASCII, space through tilde.
pub const ASCII_PRINTABLE: &str = " !\"#$%&'()*+,-./0123456789:;<=>?@\
    ABCDEFGHIJKLMNOPQRSTUVWXYZ[\\]^_`abcdefghijklmnopqrstuvwxyz{|}~";

/// Block, shade and decorative symbols that show up in text-mode art.
pub const BLOCK_SYMBOLS: &str = "█░▒▓▀▄▌▐■□▪▫▬▭▮▯°∙·‿⁀⁔⁕⁖⁗⁘⁙⁚⁛⁜⁝⁞";

/// Returns `true` if `token` can stand for one cell of the art.
///
/// The token must be 1 to [`MAX_GLYPH_LEN`] code points long, and every code
/// point must be in [`ASCII_PRINTABLE`], in [`BLOCK_SYMBOLS`], or otherwise
/// printable (see [`is_printable`]). Length is checked first, so a long run
/// of perfectly printable characters is still rejected.
pub fn is_valid_glyph(token: &str) -> bool {
    let len = token.chars().count();
    if len == 0 || len > MAX_GLYPH_LEN {
        return false;
    }

    token
        .chars()
        .all(|c| ASCII_PRINTABLE.contains(c) || BLOCK_SYMBOLS.contains(c) || is_printable(c))
}

/// Returns `true` if `c` has a visible rendering.
///
/// Rejects control characters, whitespace other than the plain space,
/// invisible formatting characters, private-use code points and
/// noncharacters.
pub fn is_printable(c: char) -> bool {
    if c == ' ' {
        return true;
    }
    if c.is_control() || c.is_whitespace() {
        return false;
    }
    !(is_format(c) || is_private_use(c) || is_noncharacter(c))
}

fn is_format(c: char) -> bool {
    matches!(
        c,
        '\u{00AD}'
            | '\u{034F}'
            | '\u{061C}'
            | '\u{115F}'..='\u{1160}'
            | '\u{17B4}'..='\u{17B5}'
            | '\u{180B}'..='\u{180F}'
            | '\u{200B}'..='\u{200F}'
            | '\u{202A}'..='\u{202E}'
            | '\u{2060}'..='\u{206F}'
            | '\u{3164}'
            | '\u{FE00}'..='\u{FE0F}'
            | '\u{FEFF}'
            | '\u{FFA0}'
            | '\u{FFF0}'..='\u{FFFB}'
            | '\u{E0000}'..='\u{E0FFF}'
    )
}

fn is_private_use(c: char) -> bool {
    matches!(
        c,
        '\u{E000}'..='\u{F8FF}' | '\u{F0000}'..='\u{FFFFD}' | '\u{100000}'..='\u{10FFFD}'
    )
}

fn is_noncharacter(c: char) -> bool {
    let cp = u32::from(c);
    (0xFDD0..=0xFDEF).contains(&cp) || cp & 0xFFFE == 0xFFFE
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_single_ascii() {
        for c in ASCII_PRINTABLE.chars() {
            assert!(is_valid_glyph(&c.to_string()), "rejected {c:?}");
        }
    }

    #[test]
    fn accepts_block_symbols() {
        for c in BLOCK_SYMBOLS.chars() {
            assert!(is_valid_glyph(&c.to_string()), "rejected {c:?}");
        }
        assert!(is_valid_glyph("▀▄█"));
    }

    #[test]
    fn accepts_other_printable_unicode() {
        assert!(is_valid_glyph("╔"));
        assert!(is_valid_glyph("é"));
        assert!(is_valid_glyph("漢"));
    }

    #[test]
    fn rejects_empty() {
        assert!(!is_valid_glyph(""));
    }

    #[test]
    fn rejects_four_printable_chars() {
        assert!(!is_valid_glyph("abcd"));
        assert!(!is_valid_glyph("████"));
    }

    #[test]
    fn accepts_three_chars() {
        assert!(is_valid_glyph("abc"));
    }

    #[test]
    fn length_counts_code_points_not_bytes() {
        // 3 code points, 9 bytes
        assert!(is_valid_glyph("░▒▓"));
    }

    #[test]
    fn rejects_invisible_characters() {
        assert!(!is_valid_glyph("\u{0007}"));
        assert!(!is_valid_glyph("\t"));
        assert!(!is_valid_glyph("a\u{200B}"));
        assert!(!is_valid_glyph("\u{FEFF}"));
        assert!(!is_valid_glyph("\u{E000}"));
        assert!(!is_valid_glyph("\u{00A0}"));
    }
}
