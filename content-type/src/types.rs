pub mod content_type;

pub use content_type::ContentType;

use std::borrow::Cow;

/// One `attribute=value` pair, as it was written.
///
/// Quoted values have their quoted pairs resolved, tokens are borrowed from the input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawParameter<'a> {
    pub attribute: &'a str,
    pub value: Cow<'a, str>,
}

/// What the grammar matched, before any normalization
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseTree<'a> {
    pub(crate) type_: &'a str,
    pub(crate) subtype: &'a str,
    pub(crate) parameters: Vec<RawParameter<'a>>,
}

impl<'a> ParseTree<'a> {
    pub fn type_(&self) -> &'a str {
        self.type_
    }

    pub fn subtype(&self) -> &'a str {
        self.subtype
    }

    /// Parameters in the order they appear in the input, repeats included
    pub fn parameters(&self) -> &[RawParameter<'a>] {
        &self.parameters
    }
}
