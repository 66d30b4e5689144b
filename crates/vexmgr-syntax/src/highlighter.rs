//! Single-pass, per-line lexical highlighter.

use regex::Regex;
use tracing::debug;

use crate::{ColorScheme, Rgb, SyntaxError, TokenCategory, TokenTable};

/// A byte range within one line of text.
///
/// Offsets are within line bounds and `len` is always greater than zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Span {
    pub start: usize,
    pub len: usize,
}

impl Span {
    pub fn end(&self) -> usize {
        self.start + self.len
    }
}

/// A span with its category and resolved display color.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StyledSpan {
    pub span: Span,
    pub category: TokenCategory,
    pub color: Rgb,
}

/// Classifies lines of VEX source into styled spans.
///
/// Configuration is immutable: the token table and color scheme are fixed
/// at construction, and a scheme change means building a new `Highlighter`
/// and re-running it over the document. Highlighting itself is a pure
/// function of the line text, so re-running an unchanged line yields
/// identical spans.
pub struct Highlighter {
    /// One compiled pattern per category, in application order.
    /// Comments and strings come last so they win over matches that fall
    /// inside them.
    patterns: Vec<(TokenCategory, Regex)>,
    scheme: ColorScheme,
}

impl Highlighter {
    /// Compiles the category patterns for a token table and color scheme.
    pub fn new(table: &TokenTable, scheme: ColorScheme) -> Result<Self, SyntaxError> {
        let patterns = vec![
            (TokenCategory::Number, Regex::new(r"\b\d+(?:\.\d+)?\b")?),
            (
                TokenCategory::Function,
                Regex::new(&word_alternation(table.builtin_functions))?,
            ),
            (
                TokenCategory::Keyword,
                Regex::new(&word_alternation(table.keywords))?,
            ),
            (
                TokenCategory::Type,
                Regex::new(&word_alternation(table.data_types))?,
            ),
            (TokenCategory::Reference, Regex::new(r"\w*@[\w\-]+")?),
            (TokenCategory::Comment, Regex::new(r"//.*")?),
            (
                TokenCategory::String,
                Regex::new(r#""(?:\\.|[^"\\])*"|'(?:\\.|[^'\\])*'"#)?,
            ),
        ];

        debug!(categories = patterns.len(), "compiled highlight patterns");

        Ok(Self { patterns, scheme })
    }

    /// The active color scheme.
    pub fn scheme(&self) -> &ColorScheme {
        &self.scheme
    }

    /// Highlights one line into spans in application order.
    ///
    /// The first span covers the whole line with the plain style so
    /// uncategorized characters still get a defined color. Per category,
    /// matching restarts after the previous match's end until the line is
    /// exhausted. Spans may overlap; later spans win per character cell.
    pub fn highlight_line(&self, line: &str) -> Vec<StyledSpan> {
        let mut spans = Vec::new();

        if !line.is_empty() {
            spans.push(StyledSpan {
                span: Span {
                    start: 0,
                    len: line.len(),
                },
                category: TokenCategory::Plain,
                color: self.scheme.plain,
            });
        }

        for (category, pattern) in &self.patterns {
            let mut at = 0;
            while at <= line.len() {
                let Some(found) = pattern.find_at(line, at) else {
                    break;
                };
                spans.push(StyledSpan {
                    span: Span {
                        start: found.start(),
                        len: found.len(),
                    },
                    category: *category,
                    color: self.scheme.color(*category),
                });
                at = found.end();
                if found.start() == found.end() {
                    at += 1;
                }
            }
        }

        spans
    }

    /// Resolves overlap to one category per byte (last-write-wins).
    ///
    /// This is what a rendering layer paints; it is also where the
    /// precedence invariants are observable.
    pub fn paint_line(&self, line: &str) -> Vec<TokenCategory> {
        let mut cells = vec![TokenCategory::Plain; line.len()];
        for styled in self.highlight_line(line) {
            for cell in &mut cells[styled.span.start..styled.span.end()] {
                *cell = styled.category;
            }
        }
        cells
    }

    /// Re-highlights every line of a document.
    ///
    /// The only document-wide operation; used after a scheme change.
    pub fn highlight_document(&self, text: &str) -> Vec<Vec<StyledSpan>> {
        text.lines().map(|line| self.highlight_line(line)).collect()
    }
}

fn word_alternation(words: &[&str]) -> String {
    format!(r"\b(?:{})\b", words.join("|"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn highlighter() -> Highlighter {
        Highlighter::new(&TokenTable::vex(), ColorScheme::default()).unwrap()
    }

    fn paint(line: &str) -> Vec<TokenCategory> {
        highlighter().paint_line(line)
    }

    #[test]
    fn plain_span_covers_whole_line_first() {
        let spans = highlighter().highlight_line("x = y;");
        assert_eq!(spans[0].category, TokenCategory::Plain);
        assert_eq!(spans[0].span, Span { start: 0, len: 6 });
    }

    #[test]
    fn empty_line_yields_no_spans() {
        assert!(highlighter().highlight_line("").is_empty());
    }

    #[test]
    fn rehighlighting_is_idempotent() {
        let hl = highlighter();
        let line = r#"float d = length(@P); // distance"#;
        assert_eq!(hl.highlight_line(line), hl.highlight_line(line));
    }

    #[test]
    fn keywords_match_whole_words_only() {
        let cells = paint("if (gift) iffy = 1;");
        // "if" at 0..2 is a keyword...
        assert_eq!(cells[0], TokenCategory::Keyword);
        assert_eq!(cells[1], TokenCategory::Keyword);
        // ...but "if" inside "gift" and "iffy" is not.
        assert_eq!(cells[5], TokenCategory::Plain);
        assert_eq!(cells[10], TokenCategory::Plain);
    }

    #[test]
    fn numbers_with_and_without_decimals() {
        let cells = paint("x = 42 + 3.14;");
        assert_eq!(cells[4], TokenCategory::Number);
        assert_eq!(cells[5], TokenCategory::Number);
        assert!(cells[9..13].iter().all(|c| *c == TokenCategory::Number));
    }

    #[test]
    fn attribute_references() {
        let cells = paint("v@velocity += @P;");
        assert!(cells[0..10].iter().all(|c| *c == TokenCategory::Reference));
        assert!(cells[14..16].iter().all(|c| *c == TokenCategory::Reference));
        assert_eq!(cells[11], TokenCategory::Plain);
    }

    #[test]
    fn builtin_function_and_type() {
        let cells = paint("vector n = normalize(v);");
        assert!(cells[0..6].iter().all(|c| *c == TokenCategory::Type));
        assert!(cells[11..20].iter().all(|c| *c == TokenCategory::Function));
    }

    #[test]
    fn comment_runs_to_end_of_line() {
        let cells = paint("x = 1; // set x");
        assert_eq!(cells[4], TokenCategory::Number);
        assert!(cells[7..].iter().all(|c| *c == TokenCategory::Comment));
    }

    #[test]
    fn keyword_inside_string_renders_as_string() {
        // Category precedence: strings are applied last, so every
        // character of the literal is a string, never a keyword.
        let cells = paint(r#"s = "if";"#);
        assert!(cells[4..8].iter().all(|c| *c == TokenCategory::String));
    }

    #[test]
    fn number_inside_string_renders_as_string() {
        let cells = paint(r#"s = "42";"#);
        assert!(cells[4..8].iter().all(|c| *c == TokenCategory::String));
    }

    #[test]
    fn escaped_quote_does_not_close_string() {
        let cells = paint(r#"s = "a\"b";"#);
        assert!(cells[4..10].iter().all(|c| *c == TokenCategory::String));
        assert_eq!(cells[10], TokenCategory::Plain);
    }

    #[test]
    fn single_quoted_strings_match_too() {
        let cells = paint("s = 'if';");
        assert!(cells[4..8].iter().all(|c| *c == TokenCategory::String));
    }

    #[test]
    fn comment_marker_inside_string_known_quirk() {
        // A `//` inside a string literal starts a comment span to end of
        // line. The string is repainted on top of the overlap, so quoted
        // text still renders as a string, but everything after the closing
        // quote stays comment-painted. Documented mis-highlight, kept
        // intentionally.
        let line = r#"s = "http://x"; y"#;
        let cells = paint(line);
        assert!(cells[4..14].iter().all(|c| *c == TokenCategory::String));
        assert!(cells[14..].iter().all(|c| *c == TokenCategory::Comment));
    }

    #[test]
    fn highlight_document_processes_every_line() {
        let hl = highlighter();
        let doc = "int a;\n\nfloat b; // two";
        let lines = hl.highlight_document(doc);
        assert_eq!(lines.len(), 3);
        assert!(lines[1].is_empty());
        assert_eq!(lines[0][0].category, TokenCategory::Plain);
    }

    #[test]
    fn span_lengths_are_positive_and_in_bounds() {
        let hl = highlighter();
        let line = r#"float d = fit01(rand(@ptnum), 0.1, 2); // ok "str""#;
        for styled in hl.highlight_line(line) {
            assert!(styled.span.len > 0);
            assert!(styled.span.end() <= line.len());
        }
    }

    proptest! {
        #[test]
        fn arbitrary_ascii_never_panics_and_is_idempotent(line in "[ -~]{0,80}") {
            let hl = highlighter();
            let first = hl.highlight_line(&line);
            let second = hl.highlight_line(&line);
            prop_assert_eq!(first, second);
        }
    }
}
