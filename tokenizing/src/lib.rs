//! Colored text fragments produced when printing a demangled declaration.
use std::borrow::Cow;
use std::fmt;

pub use egui::Color32;

/// A piece of demangled output along with the color it should be rendered in.
#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    pub text: Cow<'static, str>,
    pub color: Color32,
}

impl Token {
    pub fn from_string(text: String, color: Color32) -> Self {
        Self {
            text: Cow::Owned(text),
            color,
        }
    }

    pub const fn from_static(text: &'static str, color: Color32) -> Self {
        Self {
            text: Cow::Borrowed(text),
            color,
        }
    }

    #[inline]
    pub fn text(&self) -> &str {
        &self.text
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}
