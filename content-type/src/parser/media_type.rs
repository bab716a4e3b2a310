use super::chars::is_type_token_char;
use nom::{
    branch::alt,
    bytes::complete::{tag_no_case, take_while1},
    combinator::recognize,
    sequence::pair,
    IResult,
};

pub fn type_token(d: &str) -> IResult<&str, &str> {
    take_while1(is_type_token_char)(d)
}

// DEPRECATED, see RFC 6838 section 3.4
fn x_token(d: &str) -> IResult<&str, &str> {
    recognize(pair(tag_no_case("x-"), type_token))(d)
}

// vendor tree, RFC 6838 section 3.2
fn vendor_token(d: &str) -> IResult<&str, &str> {
    recognize(pair(tag_no_case("vnd."), type_token))(d)
}

// personal or vanity tree, RFC 6838 section 3.3
fn prs_token(d: &str) -> IResult<&str, &str> {
    recognize(pair(tag_no_case("prs."), type_token))(d)
}

/// The top level type: one of the registered types, or an `x-`, `vnd.` or `prs.` tree.
///
/// This is an ordered choice, once a literal matches it's kept even if the characters
/// after it would have made a longer token.
pub fn media_type(d: &str) -> IResult<&str, &str> {
    alt((
        tag_no_case("application"),
        tag_no_case("audio"),
        tag_no_case("image"),
        tag_no_case("message"),
        tag_no_case("multipart"),
        tag_no_case("text"),
        tag_no_case("video"),
        x_token,
        vendor_token,
        prs_token,
    ))(d)
}

pub fn media_subtype(d: &str) -> IResult<&str, &str> {
    type_token(d)
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn registered_types() {
        for t in &[
            "application",
            "audio",
            "image",
            "message",
            "multipart",
            "text",
            "video",
        ] {
            let (r, v) = media_type(t).unwrap();
            assert_eq!(r, "");
            assert_eq!(&v, t);
        }
    }

    #[test]
    fn registered_types_ignore_case() {
        let (r, v) = media_type("ApPlIcAtIoN/json").unwrap();

        assert_eq!(v, "ApPlIcAtIoN");
        assert_eq!(r, "/json");
    }

    #[test]
    fn literal_match_is_committed() {
        let (r, v) = media_type("textual/plain").unwrap();

        assert_eq!(v, "text");
        assert_eq!(r, "ual/plain");
    }

    #[test]
    fn prefixed_trees() {
        assert_eq!(media_type("x-world/x-vrml").unwrap(), ("/x-vrml", "x-world"));
        assert_eq!(media_type("VND.acme.v1/a").unwrap(), ("/a", "VND.acme.v1"));
        assert_eq!(media_type("Prs.me/a").unwrap(), ("/a", "Prs.me"));
    }

    #[test]
    fn prefix_needs_a_tail() {
        media_type("x-/foo").unwrap_err();
        media_type("vnd./foo").unwrap_err();
        media_type("prs./foo").unwrap_err();
    }

    #[test]
    fn unknown_type() {
        media_type("foo/bar").unwrap_err();
        media_type("vnd/bar").unwrap_err();
        media_type("").unwrap_err();
    }

    #[test]
    fn subtype_allows_dots() {
        let (r, v) = media_subtype("vnd.api+json; charset=utf-8").unwrap();

        assert_eq!(v, "vnd.api+json");
        assert_eq!(r, "; charset=utf-8");
    }

    #[test]
    fn empty_subtype() {
        media_subtype("").unwrap_err();
        media_subtype(";a=b").unwrap_err();
    }
}
