mod chars;
mod media_type;
mod parameter;

pub use chars::*;
pub use media_type::*;
pub use parameter::*;

use crate::{types::ParseTree, MalformedContentType};
use log::trace;
use nom::{character::complete::char, combinator::all_consuming, IResult};

/// `type "/" subtype *(";" parameter)`, leaving anything after the last parameter
pub fn content_type(d: &str) -> IResult<&str, ParseTree<'_>> {
    let (d, type_) = media_type(d)?;
    let (d, _) = char('/')(d)?;
    let (d, subtype) = media_subtype(d)?;
    let (d, parameters) = parameter_list(d)?;

    Ok((
        d,
        ParseTree {
            type_,
            subtype,
            parameters,
        },
    ))
}

/// Match the whole of `input` against the content-type grammar
pub fn parse_tree(input: &str) -> Result<ParseTree<'_>, MalformedContentType> {
    match all_consuming(content_type)(input) {
        Ok((_, tree)) => Ok(tree),
        Err(e) => {
            let err = MalformedContentType::from_nom(input, e);
            trace!("rejected {:?} at byte {}", input, err.offset());
            Err(err)
        }
    }
}
