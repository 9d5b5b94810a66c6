use crate::wkt::WktKind;
use thiserror::Error;

/// Why a WKT string was rejected by the strict `FromStr` path.
///
/// The lenient entry points ([`crate::parse_wkt`] and friends) never surface
/// these; they signal absence with `None` instead.
#[derive(Error, Debug)]
pub enum WktError {
    #[error("empty WKT string")]
    Empty,

    #[error("no recognized geometry keyword")]
    UnknownKeyword,

    #[error("{0} has no parenthesized body")]
    MissingBody(WktKind),

    #[error("{0} contains no usable coordinates")]
    NoCoordinates(WktKind),
}

pub type Result<T> = std::result::Result<T, WktError>;
