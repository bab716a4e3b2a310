use super::{ParseTree, RawParameter};
use crate::{
    encoder::encode_content_type,
    parser::{attribute, is_char, is_token_char, parse_tree},
    MalformedContentType,
};

use derivative::Derivative;
use log::trace;
use nom::combinator::all_consuming;
use ordered_multimap::ListOrderedMultimap;
use std::{convert::TryFrom, fmt, str::FromStr};

/// Keys are lower case and unique, `keys()` walks them in the order they were first seen
type Parameters = ListOrderedMultimap<String, String>;

/// A parsed media type with its parameters.
///
/// Type, subtype and parameter names are lower case, parameter values are kept as they
/// were written (minus any quoting).
#[derive(Derivative, Clone)]
#[derivative(PartialEq)]
pub struct ContentType {
    type_: String,
    subtype: String,
    #[derivative(PartialEq(compare_with = "same_parameters"))]
    parameters: Parameters,
}

fn same_parameters(a: &Parameters, b: &Parameters) -> bool {
    a.keys_len() == b.keys_len()
        && a.keys()
            .zip(b.keys())
            .all(|(ka, kb)| ka == kb && a.get(ka) == b.get(kb))
}

fn fold_parameters<'a, I>(params: I, into: &mut Parameters)
where
    I: IntoIterator<Item = RawParameter<'a>>,
{
    for p in params {
        // insert keeps the position of a key that's already there
        let previous = into.insert(p.attribute.to_ascii_lowercase(), p.value.into_owned());

        if let Some(previous) = previous {
            trace!("parameter {:?} repeated, dropping {:?}", p.attribute, previous);
        }
    }
}

impl ContentType {
    pub fn parse(d: &str) -> Result<Self, MalformedContentType> {
        parse_tree(d).map(Self::from)
    }

    /// Build from a sequence of trees, type and subtype come from the first one and the
    /// parameters of every tree are folded in order
    pub fn from_trees<'a, I>(trees: I) -> Result<Self, MalformedContentType>
    where
        I: IntoIterator<Item = ParseTree<'a>>,
    {
        let mut trees = trees.into_iter();

        let mut content_type = match trees.next() {
            Some(first) => Self::from(first),
            None => return Err(MalformedContentType::new("", 0)),
        };

        for tree in trees {
            fold_parameters(tree.parameters, &mut content_type.parameters);
        }

        Ok(content_type)
    }

    pub fn type_(&self) -> &str {
        &self.type_
    }

    pub fn subtype(&self) -> &str {
        &self.subtype
    }

    /// `type/subtype`, without parameters
    pub fn mime_type(&self) -> String {
        format!("{}/{}", self.type_, self.subtype)
    }

    pub fn charset(&self) -> Option<&str> {
        self.parameter("charset")
    }

    /// Look up a parameter, `name` is matched case insensitively
    pub fn parameter(&self, name: &str) -> Option<&str> {
        self.parameters
            .get(&name.to_ascii_lowercase())
            .map(String::as_str)
    }

    pub fn has_parameter(&self, name: &str) -> bool {
        self.parameter(name).is_some()
    }

    /// All parameters in the order they were first seen
    pub fn parameters(&self) -> impl Iterator<Item = (&str, &str)> + '_ {
        self.parameters.keys().filter_map(move |k| {
            self.parameters
                .get(k)
                .map(|v| (k.as_str(), v.as_str()))
        })
    }

    pub fn parameters_len(&self) -> usize {
        self.parameters.keys_len()
    }

    /// A copy with `name` set to `value`. An existing parameter keeps its position.
    ///
    /// Fails if `name` isn't a token, or `value` couldn't be written back as a quoted
    /// string (non US-ASCII characters or a carriage return).
    pub fn with_parameter(&self, name: &str, value: &str) -> Result<Self, MalformedContentType> {
        let invalid = |offset| MalformedContentType::new(&format!("{}={}", name, value), offset);

        if all_consuming(attribute)(name).is_err() {
            let offset = name.find(|c: char| !is_token_char(c)).unwrap_or(0);
            return Err(invalid(offset));
        }

        if let Some(offset) = value.find(|c: char| !is_char(c) || c == '\r') {
            return Err(invalid(name.len() + 1 + offset));
        }

        let mut content_type = self.clone();
        content_type
            .parameters
            .insert(name.to_ascii_lowercase(), value.to_owned());

        Ok(content_type)
    }

    /// A copy without the parameter `name`
    pub fn without_parameter(&self, name: &str) -> Self {
        let name = name.to_ascii_lowercase();
        let mut parameters = Parameters::new();

        for (k, v) in self.parameters().filter(|(k, _)| *k != name) {
            parameters.insert(k.to_owned(), v.to_owned());
        }

        Self {
            type_: self.type_.clone(),
            subtype: self.subtype.clone(),
            parameters,
        }
    }

    /// The same media type with every parameter removed
    pub fn essence(&self) -> Self {
        Self {
            type_: self.type_.clone(),
            subtype: self.subtype.clone(),
            parameters: Parameters::new(),
        }
    }

    pub fn to_mime(&self) -> Result<mime::Mime, mime::FromStrError> {
        self.to_string().parse()
    }
}

impl<'a> From<ParseTree<'a>> for ContentType {
    fn from(tree: ParseTree<'a>) -> Self {
        let mut parameters = Parameters::new();
        fold_parameters(tree.parameters, &mut parameters);

        Self {
            type_: tree.type_.to_ascii_lowercase(),
            subtype: tree.subtype.to_ascii_lowercase(),
            parameters,
        }
    }
}

impl FromStr for ContentType {
    type Err = MalformedContentType;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<&str> for ContentType {
    type Error = MalformedContentType;

    fn try_from(s: &str) -> Result<Self, Self::Error> {
        Self::parse(s)
    }
}

impl fmt::Display for ContentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&encode_content_type(self))
    }
}

impl fmt::Debug for ContentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ContentType({} ", self.mime_type())?;
        f.debug_map().entries(self.parameters()).finish()?;
        f.write_str(")")
    }
}
