use std::fmt;

/// The input didn't match the content-type grammar from start to end
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MalformedContentType {
    input: String,
    offset: usize,
}

impl MalformedContentType {
    pub(crate) fn new(input: &str, offset: usize) -> Self {
        Self {
            input: input.to_owned(),
            offset,
        }
    }

    /// Every parser works on a subslice of `input`, so the error position is a suffix of it
    pub(crate) fn from_nom(input: &str, err: nom::Err<nom::error::Error<&str>>) -> Self {
        let offset = match err {
            nom::Err::Error(e) | nom::Err::Failure(e) => input.len() - e.input.len(),
            nom::Err::Incomplete(_) => input.len(),
        };

        Self::new(input, offset)
    }

    /// The rejected header value
    pub fn input(&self) -> &str {
        &self.input
    }

    /// Byte offset of the first character the grammar couldn't account for
    pub fn offset(&self) -> usize {
        self.offset
    }
}

impl fmt::Display for MalformedContentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "malformed content type {:?} (at byte {})",
            self.input, self.offset
        )
    }
}

impl std::error::Error for MalformedContentType {}
