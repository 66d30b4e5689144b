//! # Vexmgr Syntax
//!
//! Lexical highlighting for VEX snippets.
//!
//! The highlighter is a single-pass, per-line classifier: given a line of
//! text, the static VEX vocabulary and a color scheme, it produces the
//! ordered list of styled spans to render. It is not a parser — there is no
//! syntax tree, no cross-line state, and re-highlighting a line is a pure
//! function of its text.
//!
//! ## Overlap resolution
//!
//! Categories are matched in a fixed order and later matches win per
//! character cell. Strings are matched last on purpose: the word `if`
//! inside a string literal must render as a string, not a keyword.

mod highlighter;
mod scheme;
mod table;

pub use highlighter::{Highlighter, Span, StyledSpan};
pub use scheme::{ColorScheme, Rgb};
pub use table::TokenTable;

/// Errors that can occur while building a highlighter.
#[derive(Debug, thiserror::Error)]
pub enum SyntaxError {
    #[error("Invalid token pattern: {0}")]
    Pattern(#[from] regex::Error),
}

/// A classification tag applied to a contiguous span of source text.
///
/// Every category maps to exactly one display color in the active
/// [`ColorScheme`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenCategory {
    /// Uncategorized text; the base style applied to the whole line first
    Plain,
    /// Quoted string literals
    String,
    /// Integer and decimal literals
    Number,
    /// `//` line comments
    Comment,
    /// Built-in VEX function names
    Function,
    /// Language keywords
    Keyword,
    /// Data type names
    Type,
    /// Attribute references such as `v@velocity` or `@P`
    Reference,
}

impl TokenCategory {
    /// The color scheme key for this category.
    pub fn scheme_key(&self) -> &'static str {
        match self {
            TokenCategory::Plain => "plain",
            TokenCategory::String => "strings",
            TokenCategory::Number => "numbers",
            TokenCategory::Comment => "comments",
            TokenCategory::Function => "functions",
            TokenCategory::Keyword => "keywords",
            TokenCategory::Type => "types",
            TokenCategory::Reference => "references",
        }
    }
}
