use crate::types::ContentType;

/// Wrap `v` in double quotes, escaping `"` and `\` with a backslash
pub fn quote_value(v: &str) -> String {
    let mut quoted = String::with_capacity(v.len() + 2);
    quoted.push('"');

    for c in v.chars() {
        if c == '"' || c == '\\' {
            quoted.push('\\');
        }
        quoted.push(c);
    }

    quoted.push('"');
    quoted
}

/// The canonical form: `type/subtype` then `; name="value"` for every parameter.
///
/// Values are always quoted, even when they'd be valid tokens.
pub fn encode_content_type(content_type: &ContentType) -> String {
    let params: Vec<String> = content_type
        .parameters()
        .map(|(name, value)| format!("{}={}", name, quote_value(value)))
        .collect();

    if params.len() >= 1 {
        [content_type.mime_type(), params.join("; ")].join("; ")
    } else {
        content_type.mime_type()
    }
}
