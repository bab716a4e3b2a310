//! Parser and value type for RFC 2045 / RFC 6838 `Content-Type` header values.
//!
//! ```
//! let ct: content_type::ContentType = "TEXT/HTML;Charset=utf-8".parse().unwrap();
//!
//! assert_eq!(ct.mime_type(), "text/html");
//! assert_eq!(ct.charset(), Some("utf-8"));
//! assert_eq!(ct.to_string(), "text/html; charset=\"utf-8\"");
//! ```

mod encoder;
mod error;
pub mod parser;
pub mod types;

pub use encoder::{encode_content_type, quote_value};
pub use error::MalformedContentType;
pub use parser::parse_tree;
pub use types::{ContentType, ParseTree, RawParameter};

/// Parse a header value into a [`ContentType`]
pub fn parse_content_type(d: &str) -> Result<ContentType, MalformedContentType> {
    ContentType::parse(d)
}
