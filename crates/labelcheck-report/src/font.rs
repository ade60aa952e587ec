//! # Base-14 Helvetica Metrics
//!
//! The report uses the two standard Helvetica faces every PDF viewer
//! ships, so no font program is embedded. Text is encoded in
//! WinAnsiEncoding; this module owns the encoding table and the glyph
//! advance widths (in 1/1000 em) used to measure text for wrapping.
//!
//! Accented Latin letters have the advance of their base letter in both
//! faces, so widths are looked up on the folded base character.

/// One of the two faces used by the report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Font {
    /// Helvetica.
    Regular,
    /// Helvetica-Bold.
    Bold,
}

impl Font {
    /// PostScript name in the font dictionary.
    pub fn base_font(&self) -> &'static str {
        match self {
            Self::Regular => "Helvetica",
            Self::Bold => "Helvetica-Bold",
        }
    }

    /// Resource name used in content streams.
    pub fn resource_name(&self) -> &'static str {
        match self {
            Self::Regular => "F1",
            Self::Bold => "F2",
        }
    }

    /// Advance width of `c` in 1/1000 em.
    pub fn glyph_width(&self, c: char) -> u16 {
        let table = match self {
            Self::Regular => &HELVETICA_WIDTHS,
            Self::Bold => &HELVETICA_BOLD_WIDTHS,
        };
        let base = fold_accent(c);
        if (' '..='~').contains(&base) {
            return table[base as usize - 0x20];
        }
        match (self, base) {
            (_, '\u{a0}') => 278,
            (_, '¡') => 333,
            (_, '¿') => 611,
            (_, '°') => 400,
            (_, 'º') => 365,
            (_, 'ª') => 370,
            (_, '·') => 278,
            (_, '€') => 556,
            (_, '•') => 350,
            (_, '–') => 556,
            (_, '—') => 1000,
            (_, '…') => 1000,
            (Self::Regular, '‘' | '’' | '‚') => 222,
            (Self::Bold, '‘' | '’' | '‚') => 278,
            (Self::Regular, '“' | '”' | '„') => 333,
            (Self::Bold, '“' | '”' | '„') => 500,
            (_, '«' | '»') => 556,
            (_, '§') => 556,
            (_, '©' | '®') => 737,
            (_, 'Æ') => 1000,
            (_, 'æ') => 889,
            (_, 'ß') => 611,
            _ => FALLBACK_WIDTH,
        }
    }

    /// Width of `text` at `size` points.
    pub fn text_width(&self, text: &str, size: f64) -> f64 {
        let units: u32 = text.chars().map(|c| u32::from(self.glyph_width(c))).sum();
        f64::from(units) * size / 1000.0
    }
}

const FALLBACK_WIDTH: u16 = 556;

/// Byte for `c` in WinAnsiEncoding, or `None` if the encoding lacks it.
pub fn encode_win_ansi(c: char) -> Option<u8> {
    let code = u32::from(c);
    match code {
        0x20..=0x7e | 0xa0..=0xff => u8::try_from(code).ok(),
        _ => match c {
            '€' => Some(0x80),
            '‚' => Some(0x82),
            'ƒ' => Some(0x83),
            '„' => Some(0x84),
            '…' => Some(0x85),
            '†' => Some(0x86),
            '‡' => Some(0x87),
            'ˆ' => Some(0x88),
            '‰' => Some(0x89),
            'Š' => Some(0x8a),
            '‹' => Some(0x8b),
            'Œ' => Some(0x8c),
            'Ž' => Some(0x8e),
            '‘' => Some(0x91),
            '’' => Some(0x92),
            '“' => Some(0x93),
            '”' => Some(0x94),
            '•' => Some(0x95),
            '–' => Some(0x96),
            '—' => Some(0x97),
            '˜' => Some(0x98),
            '™' => Some(0x99),
            'š' => Some(0x9a),
            '›' => Some(0x9b),
            'œ' => Some(0x9c),
            'ž' => Some(0x9e),
            'Ÿ' => Some(0x9f),
            _ => None,
        },
    }
}

/// Encode `text`, substituting `?` for characters outside the encoding.
pub fn encode_win_ansi_lossy(text: &str) -> Vec<u8> {
    text.chars()
        .map(|c| encode_win_ansi(c).unwrap_or(b'?'))
        .collect()
}

fn fold_accent(c: char) -> char {
    match c {
        'á' | 'à' | 'â' | 'ä' | 'ã' | 'å' => 'a',
        'Á' | 'À' | 'Â' | 'Ä' | 'Ã' | 'Å' => 'A',
        'é' | 'è' | 'ê' | 'ë' => 'e',
        'É' | 'È' | 'Ê' | 'Ë' => 'E',
        'í' | 'ì' | 'î' | 'ï' => 'i',
        'Í' | 'Ì' | 'Î' | 'Ï' => 'I',
        'ó' | 'ò' | 'ô' | 'ö' | 'õ' => 'o',
        'Ó' | 'Ò' | 'Ô' | 'Ö' | 'Õ' => 'O',
        'ú' | 'ù' | 'û' | 'ü' => 'u',
        'Ú' | 'Ù' | 'Û' | 'Ü' => 'U',
        'ñ' => 'n',
        'Ñ' => 'N',
        'ç' => 'c',
        'Ç' => 'C',
        'ý' | 'ÿ' => 'y',
        'Ý' | 'Ÿ' => 'Y',
        'š' => 's',
        'Š' => 'S',
        'ž' => 'z',
        'Ž' => 'Z',
        other => other,
    }
}

/// Helvetica advance widths for U+0020..=U+007E.
#[rustfmt::skip]
const HELVETICA_WIDTHS: [u16; 95] = [
    // space ! " # $ % & ' ( ) * + , - . /
    278, 278, 355, 556, 556, 889, 667, 191, 333, 333, 389, 584, 278, 333, 278, 278,
    // 0-9
    556, 556, 556, 556, 556, 556, 556, 556, 556, 556,
    // : ; < = > ? @
    278, 278, 584, 584, 584, 556, 1015,
    // A-Z
    667, 667, 722, 722, 667, 611, 778, 722, 278, 500, 667, 556, 833,
    722, 778, 667, 778, 722, 667, 611, 722, 667, 944, 667, 667, 611,
    // [ \ ] ^ _ `
    278, 278, 278, 469, 556, 333,
    // a-z
    556, 556, 500, 556, 556, 278, 556, 556, 222, 222, 500, 222, 833,
    556, 556, 556, 556, 333, 500, 278, 556, 500, 722, 500, 500, 500,
    // { | } ~
    334, 260, 334, 584,
];

/// Helvetica-Bold advance widths for U+0020..=U+007E.
#[rustfmt::skip]
const HELVETICA_BOLD_WIDTHS: [u16; 95] = [
    // space ! " # $ % & ' ( ) * + , - . /
    278, 333, 474, 556, 556, 889, 722, 238, 333, 333, 389, 584, 278, 333, 278, 278,
    // 0-9
    556, 556, 556, 556, 556, 556, 556, 556, 556, 556,
    // : ; < = > ? @
    333, 333, 584, 584, 584, 611, 975,
    // A-Z
    722, 722, 722, 722, 667, 611, 778, 722, 278, 556, 722, 611, 833,
    722, 778, 667, 778, 722, 667, 611, 722, 667, 944, 667, 667, 611,
    // [ \ ] ^ _ `
    333, 278, 333, 584, 556, 333,
    // a-z
    556, 611, 556, 611, 556, 333, 611, 611, 278, 278, 556, 278, 889,
    611, 611, 611, 611, 389, 556, 333, 611, 556, 778, 556, 556, 500,
    // { | } ~
    389, 280, 389, 584,
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ascii_widths() {
        assert_eq!(Font::Regular.glyph_width(' '), 278);
        assert_eq!(Font::Regular.glyph_width('m'), 833);
        assert_eq!(Font::Regular.glyph_width('i'), 222);
        assert_eq!(Font::Bold.glyph_width('b'), 611);
        assert_eq!(Font::Regular.glyph_width('~'), 584);
        assert_eq!(Font::Bold.glyph_width('A'), 722);
    }

    #[test]
    fn test_accents_share_base_width() {
        for (accented, base) in [('á', 'a'), ('É', 'E'), ('ñ', 'n'), ('Ó', 'O'), ('ü', 'u')] {
            assert_eq!(Font::Regular.glyph_width(accented), Font::Regular.glyph_width(base));
            assert_eq!(Font::Bold.glyph_width(accented), Font::Bold.glyph_width(base));
        }
    }

    #[test]
    fn test_text_width_scales_with_size() {
        // "mi" = 833 + 222
        assert!((Font::Regular.text_width("mi", 10.0) - 10.55).abs() < 1e-9);
        assert!((Font::Regular.text_width("mi", 20.0) - 21.1).abs() < 1e-9);
        assert_eq!(Font::Regular.text_width("", 8.0), 0.0);
    }

    #[test]
    fn test_unknown_glyph_uses_fallback() {
        assert_eq!(Font::Regular.glyph_width('漢'), FALLBACK_WIDTH);
    }

    #[test]
    fn test_win_ansi_encoding() {
        assert_eq!(encode_win_ansi('A'), Some(b'A'));
        assert_eq!(encode_win_ansi('á'), Some(0xe1));
        assert_eq!(encode_win_ansi('Í'), Some(0xcd));
        assert_eq!(encode_win_ansi('ñ'), Some(0xf1));
        assert_eq!(encode_win_ansi('€'), Some(0x80));
        assert_eq!(encode_win_ansi('—'), Some(0x97));
        assert_eq!(encode_win_ansi('漢'), None);
        assert_eq!(encode_win_ansi('\n'), None);
    }

    #[test]
    fn test_lossy_encoding_substitutes() {
        assert_eq!(encode_win_ansi_lossy("Página 漢"), b"P\xe1gina ?".to_vec());
    }
}
