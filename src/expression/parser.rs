//! Parsing support for rendered sum-of-products expressions

use super::error::FormatError;
use super::SopExpression;
use lalrpop_util::ParseError;
use std::sync::Arc;

// Lalrpop-generated parser module (generated in OUT_DIR at build time)
#[allow(clippy::all)]
mod parser_impl {
    #![allow(clippy::all)]
    #![allow(dead_code)]
    #![allow(unused_variables)]
    #![allow(unused_imports)]
    #![allow(non_snake_case)]
    #![allow(non_camel_case_types)]
    #![allow(non_upper_case_globals)]
    include!(concat!(env!("OUT_DIR"), "/expression/sop.rs"));
}

/// Parse `input` with the generated sum-of-products grammar
pub(super) fn parse_sop(input: &str) -> Result<SopExpression, FormatError> {
    parser_impl::SopParser::new().parse(input).map_err(|e| {
        let position = match &e {
            ParseError::InvalidToken { location } => Some(*location),
            ParseError::UnrecognizedEof { location, .. } => Some(*location),
            ParseError::UnrecognizedToken { token, .. } => Some(token.0),
            ParseError::ExtraToken { token } => Some(token.0),
            ParseError::User { .. } => None,
        };
        FormatError::InvalidSop {
            message: Arc::from(e.to_string().as_str()),
            input: Arc::from(input),
            position,
        }
    })
}
