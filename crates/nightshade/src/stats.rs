//! Text statistics.
//!
//! [`TextStats`] is a single pass summary of a piece of text: the numbers a
//! writing tool shows under its text box.

use serde::Serialize;
use unicode_width::UnicodeWidthStr;

/// Words per minute used for the reading time estimate.
pub const READING_WORDS_PER_MINUTE: usize = 200;

/// Characters per token used for the token estimate.
pub const CHARS_PER_TOKEN: usize = 4;

/// Counts describing a piece of text.
///
/// # Example
///
/// ```rust
/// use nightshade::TextStats;
///
/// let stats = TextStats::from_text("Hello world. How are you?\n\nFine!");
/// assert_eq!(stats.words, 6);
/// assert_eq!(stats.sentences, 3);
/// assert_eq!(stats.paragraphs, 2);
/// assert_eq!(stats.lines, 3);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct TextStats {
    /// Unicode scalar values.
    pub characters: usize,
    /// Unicode scalar values that are not whitespace.
    pub characters_no_spaces: usize,
    /// Whitespace-separated words.
    pub words: usize,
    /// Lines; a trailing newline does not start a new line.
    pub lines: usize,
    /// Runs of text ended by `.`, `!` or `?` followed by whitespace or the
    /// end of the text, plus a trailing unterminated run.
    pub sentences: usize,
    /// Blocks of non-blank lines separated by blank lines.
    pub paragraphs: usize,
    /// Display width of the widest line, in terminal columns.
    pub longest_line_width: usize,
    /// Reading time in whole minutes, rounded up.
    pub reading_minutes: usize,
    /// Rough token count for language model input.
    pub estimated_tokens: usize,
}

impl TextStats {
    /// Computes statistics for `text`.
    pub fn from_text(text: &str) -> Self {
        let characters = text.chars().count();
        let characters_no_spaces = text.chars().filter(|c| !c.is_whitespace()).count();
        let words = text.split_whitespace().count();

        let sentences = count_sentences(text);

        let mut lines = 0;
        let mut paragraphs = 0;
        let mut longest_line_width = 0;
        let mut in_paragraph = false;
        for line in text.lines() {
            lines += 1;
            longest_line_width = longest_line_width.max(line.width());
            let blank = line.trim().is_empty();
            if !blank && !in_paragraph {
                paragraphs += 1;
            }
            in_paragraph = !blank;
        }

        Self {
            characters,
            characters_no_spaces,
            words,
            lines,
            sentences,
            paragraphs,
            longest_line_width,
            reading_minutes: words.div_ceil(READING_WORDS_PER_MINUTE),
            estimated_tokens: characters.div_ceil(CHARS_PER_TOKEN),
        }
    }

    /// Returns `true` if the text had no characters at all.
    pub fn is_empty(&self) -> bool {
        self.characters == 0
    }
}

fn is_terminator(c: char) -> bool {
    matches!(c, '.' | '!' | '?')
}

// A terminator only closes a sentence at a word boundary, so "3.14" and
// "e.g" stay inside theirs; a run like "..." closes it once.
fn count_sentences(text: &str) -> usize {
    let mut sentences = 0;
    let mut pending = false;
    let mut chars = text.chars().peekable();
    while let Some(c) = chars.next() {
        if is_terminator(c) {
            match chars.peek() {
                None => {}
                Some(&next) if next.is_whitespace() => {}
                Some(&next) if is_terminator(next) => continue,
                Some(_) => {
                    pending = true;
                    continue;
                }
            }
            if pending {
                sentences += 1;
                pending = false;
            }
        } else if !c.is_whitespace() {
            pending = true;
        }
    }
    if pending {
        sentences += 1;
    }
    sentences
}
