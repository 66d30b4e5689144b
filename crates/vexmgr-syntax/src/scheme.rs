//! Color scheme: one display color per token category.

use serde::{Deserialize, Serialize};

use crate::TokenCategory;

/// An RGB triple in 0..=255 per channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self(r, g, b)
    }
}

/// Mapping from token category to display color.
///
/// Loaded from preferences at editor start and replaced wholesale when the
/// preferences dialog saves; every category always has a color because
/// missing keys deserialize to the built-in defaults.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ColorScheme {
    pub plain: Rgb,
    pub strings: Rgb,
    pub numbers: Rgb,
    pub comments: Rgb,
    pub functions: Rgb,
    pub keywords: Rgb,
    pub types: Rgb,
    pub references: Rgb,
}

impl ColorScheme {
    /// The color assigned to a category.
    pub fn color(&self, category: TokenCategory) -> Rgb {
        match category {
            TokenCategory::Plain => self.plain,
            TokenCategory::String => self.strings,
            TokenCategory::Number => self.numbers,
            TokenCategory::Comment => self.comments,
            TokenCategory::Function => self.functions,
            TokenCategory::Keyword => self.keywords,
            TokenCategory::Type => self.types,
            TokenCategory::Reference => self.references,
        }
    }
}

impl Default for ColorScheme {
    fn default() -> Self {
        Self {
            plain: Rgb::new(216, 221, 222),
            strings: Rgb::new(121, 169, 120),
            numbers: Rgb::new(235, 184, 69),
            comments: Rgb::new(123, 126, 132),
            functions: Rgb::new(136, 136, 193),
            keywords: Rgb::new(103, 153, 192),
            types: Rgb::new(147, 212, 235),
            references: Rgb::new(210, 207, 156),
        }
    }
}
