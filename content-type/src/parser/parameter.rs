use super::chars::{is_char, is_qtext, is_token_char};
use crate::types::RawParameter;
use nom::{
    branch::alt,
    bytes::complete::{take_while, take_while1},
    character::complete::{char, satisfy},
    combinator::{map, recognize},
    multi::many0,
    sequence::{delimited, preceded, separated_pair, tuple},
    IResult,
};
use std::borrow::Cow;

pub fn token(d: &str) -> IResult<&str, &str> {
    take_while1(is_token_char)(d)
}

pub fn attribute(d: &str) -> IResult<&str, &str> {
    token(d)
}

fn quoted_pair(d: &str) -> IResult<&str, char> {
    preceded(char('\\'), satisfy(is_char))(d)
}

fn quoted_char(d: &str) -> IResult<&str, char> {
    alt((satisfy(is_qtext), quoted_pair))(d)
}

/// Drops the backslash from every quoted pair. `raw` must already match the
/// quoted string grammar, so a backslash is never the last character.
fn unescape(raw: &str) -> Cow<'_, str> {
    if !raw.contains('\\') {
        return Cow::Borrowed(raw);
    }

    let mut out = String::with_capacity(raw.len());
    let mut chars = raw.chars();

    while let Some(c) = chars.next() {
        match c {
            '\\' => out.extend(chars.next()),
            c => out.push(c),
        }
    }

    Cow::Owned(out)
}

pub fn quoted_string(d: &str) -> IResult<&str, Cow<'_, str>> {
    let (d, raw) = delimited(char('"'), recognize(many0(quoted_char)), char('"'))(d)?;

    Ok((d, unescape(raw)))
}

pub fn value(d: &str) -> IResult<&str, Cow<'_, str>> {
    alt((map(token, Cow::Borrowed), quoted_string))(d)
}

/// `attribute=value`, no whitespace is allowed around the `=`
pub fn parameter(d: &str) -> IResult<&str, RawParameter<'_>> {
    let (d, (attribute, value)) = separated_pair(attribute, char('='), value)(d)?;

    Ok((d, RawParameter { attribute, value }))
}

// Only plain spaces, folded whitespace (CRLF followed by space or tab) isn't accepted
fn spaces(d: &str) -> IResult<&str, &str> {
    take_while(|c: char| c == ' ')(d)
}

fn parameter_clause(d: &str) -> IResult<&str, RawParameter<'_>> {
    preceded(tuple((spaces, char(';'), spaces)), parameter)(d)
}

pub fn parameter_list(d: &str) -> IResult<&str, Vec<RawParameter<'_>>> {
    many0(parameter_clause)(d)
}

#[cfg(test)]
mod test {
    use super::*;

    fn param<'a>(attribute: &'a str, value: &'a str) -> RawParameter<'a> {
        RawParameter {
            attribute,
            value: value.into(),
        }
    }

    #[test]
    fn simple_parameter() {
        let (r, p) = parameter("charset=UTF-8").unwrap();

        assert_eq!(r, "");
        assert_eq!(p, param("charset", "UTF-8"));
    }

    #[test]
    fn token_value_is_borrowed() {
        let (_, v) = value("abc").unwrap();
        assert!(matches!(v, Cow::Borrowed("abc")));
    }

    #[test]
    fn quoted_value_with_spaces() {
        let (r, v) = value("\"----abc 123\"; a=b").unwrap();

        assert_eq!(v, "----abc 123");
        assert_eq!(r, "; a=b");
    }

    #[test]
    fn empty_quoted_value() {
        let (r, v) = quoted_string("\"\"").unwrap();

        assert_eq!(v, "");
        assert_eq!(r, "");
    }

    #[test]
    fn quoted_pairs_are_unescaped() {
        let (_, v) = quoted_string(r#""a\"b""#).unwrap();
        assert_eq!(v, "a\"b");

        let (_, v) = quoted_string(r#""back\\slash\x""#).unwrap();
        assert_eq!(v, "back\\slashx");
    }

    #[test]
    fn unterminated_quoted_string() {
        quoted_string("\"abc").unwrap_err();
        quoted_string(r#""abc\""#).unwrap_err();
    }

    #[test]
    fn quoted_string_rejects_bare_cr() {
        quoted_string("\"a\rb\"").unwrap_err();
        let (_, v) = quoted_string("\"a\\\rb\"").unwrap();
        assert_eq!(v, "a\rb");
    }

    #[test]
    fn no_space_around_equals() {
        parameter("charset =utf-8").unwrap_err();
        parameter("charset= utf-8").unwrap_err();
    }

    #[test]
    fn value_stops_at_tspecials() {
        let (r, p) = parameter("a=b/c").unwrap();

        assert_eq!(p, param("a", "b"));
        assert_eq!(r, "/c");
    }

    #[test]
    fn list_in_order() {
        let (r, list) = parameter_list(";a=1 ;  b=\"2\";c=3").unwrap();

        assert_eq!(r, "");
        assert_eq!(list, vec![param("a", "1"), param("b", "2"), param("c", "3")]);
    }

    #[test]
    fn list_leaves_trailing_input() {
        let (r, list) = parameter_list("; a=1; ").unwrap();

        assert_eq!(list, vec![param("a", "1")]);
        assert_eq!(r, "; ");
    }

    #[test]
    fn empty_list() {
        let (r, list) = parameter_list("").unwrap();

        assert!(list.is_empty());
        assert_eq!(r, "");
    }
}
