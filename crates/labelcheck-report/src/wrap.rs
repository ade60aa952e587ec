//! # Word Wrapping
//!
//! Breaks cell text into lines that fit a column, measured with the
//! Helvetica metrics in [`crate::font`]. Text is never truncated: a word
//! wider than the column is broken at character boundaries, so every
//! non-whitespace character of the input appears in the output, in order.
//!
//! ## Note Chunking
//!
//! Free-text notes are first cut into runs of at most `chunk_chars`
//! characters. Chunk boundaries are break opportunities that occupy no
//! width: when a line breaks there nothing is inserted, and when it does
//! not the chunks are rejoined without a space.
//!
//! Runs of whitespace collapse to a single space; explicit newlines start
//! a new line.

use crate::font::Font;

const EPSILON: f64 = 1e-9;

/// A unit the wrapper keeps on one line unless it alone overflows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token<'a> {
    /// The token text; never contains whitespace.
    pub text: &'a str,
    /// Whether a space separates this token from the previous one.
    pub space_before: bool,
}

/// Split one paragraph into word tokens, optionally cutting every word
/// into runs of at most `chunk_chars` characters.
pub fn tokenize(paragraph: &str, chunk_chars: Option<usize>) -> Vec<Token<'_>> {
    let mut tokens = Vec::new();
    for (i, word) in paragraph.split_whitespace().enumerate() {
        let space_before = i > 0;
        match chunk_chars {
            Some(n) if n > 0 => {
                for (j, chunk) in chunks(word, n).into_iter().enumerate() {
                    tokens.push(Token {
                        text: chunk,
                        space_before: space_before && j == 0,
                    });
                }
            }
            _ => tokens.push(Token {
                text: word,
                space_before,
            }),
        }
    }
    tokens
}

/// Cut `word` into consecutive slices of at most `n` characters.
fn chunks(word: &str, n: usize) -> Vec<&str> {
    let mut out = Vec::new();
    let mut start = 0;
    let mut count = 0;
    for (idx, _) in word.char_indices() {
        if count == n {
            out.push(&word[start..idx]);
            start = idx;
            count = 0;
        }
        count += 1;
    }
    if start < word.len() {
        out.push(&word[start..]);
    }
    out
}

/// Greedy line breaker for one font, size and column width.
#[derive(Debug, Clone, Copy)]
pub struct Wrapper {
    font: Font,
    size: f64,
    max_width: f64,
    chunk_chars: Option<usize>,
}

impl Wrapper {
    /// A wrapper that breaks only between words, or inside words wider
    /// than `max_width`.
    pub fn new(font: Font, size: f64, max_width: f64) -> Self {
        Self {
            font,
            size,
            max_width,
            chunk_chars: None,
        }
    }

    /// Also pre-chunk every word into runs of at most `chunk_chars`.
    pub fn with_chunking(mut self, chunk_chars: usize) -> Self {
        self.chunk_chars = Some(chunk_chars);
        self
    }

    /// Wrap `text` into lines. Blank text yields no lines.
    pub fn wrap(&self, text: &str) -> Vec<String> {
        let mut lines = Vec::new();
        for paragraph in text.lines() {
            let tokens = tokenize(paragraph, self.chunk_chars);
            if tokens.is_empty() {
                lines.push(String::new());
            } else {
                self.wrap_tokens(&tokens, &mut lines);
            }
        }
        while lines.last().is_some_and(String::is_empty) {
            lines.pop();
        }
        let leading_blank = lines.iter().take_while(|l| l.is_empty()).count();
        lines.drain(..leading_blank);
        lines
    }

    fn wrap_tokens(&self, tokens: &[Token<'_>], lines: &mut Vec<String>) {
        let space = self.font.text_width(" ", self.size);
        let mut line = String::new();
        let mut width = 0.0;

        for token in tokens {
            let token_width = self.font.text_width(token.text, self.size);
            let gap = if token.space_before && !line.is_empty() {
                space
            } else {
                0.0
            };

            if width + gap + token_width <= self.max_width + EPSILON {
                if gap > 0.0 {
                    line.push(' ');
                }
                line.push_str(token.text);
                width += gap + token_width;
                continue;
            }

            let fits_alone = token_width <= self.max_width + EPSILON;
            // A chunk glued to the previous one and too wide for any line
            // keeps filling the current line instead of breaking first.
            if (token.space_before || fits_alone) && !line.is_empty() {
                lines.push(std::mem::take(&mut line));
                width = 0.0;
            }

            if line.is_empty() && fits_alone {
                line.push_str(token.text);
                width = token_width;
                continue;
            }

            // Too wide for the space left: break between characters.
            for c in token.text.chars() {
                let w = f64::from(self.font.glyph_width(c)) * self.size / 1000.0;
                if !line.is_empty() && width + w > self.max_width + EPSILON {
                    lines.push(std::mem::take(&mut line));
                    width = 0.0;
                }
                line.push(c);
                width += w;
            }
        }

        if !line.is_empty() {
            lines.push(line);
        }
    }
}
