use std::str::FromStr;
use std::sync::Arc;
use thiserror::Error;

const SOA_FIELD_COUNT: usize = 7;

/// The seven positional fields of an SOA `content` column.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SoaFields {
    pub mname: Arc<str>,
    pub rname: Arc<str>,
    pub serial: u32,
    pub refresh: u32,
    pub retry: u32,
    pub expire: u32,
    pub minimum: u32,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SoaParseError {
    #[error("SOA content has {0} fields, expected at least 7")]
    TooFewFields(usize),

    #[error("SOA {field} is not a 32-bit unsigned integer: {value:?}")]
    InvalidNumber { field: &'static str, value: String },
}

impl FromStr for SoaFields {
    type Err = SoaParseError;

    /// Splits on single spaces. Tokens past the seventh are ignored.
    fn from_str(content: &str) -> Result<Self, Self::Err> {
        let parts: Vec<&str> = content.split(' ').collect();
        if parts.len() < SOA_FIELD_COUNT {
            return Err(SoaParseError::TooFewFields(parts.len()));
        }

        Ok(SoaFields {
            mname: Arc::from(parts[0]),
            rname: Arc::from(parts[1]),
            serial: parse_u32("serial", parts[2])?,
            refresh: parse_u32("refresh", parts[3])?,
            retry: parse_u32("retry", parts[4])?,
            expire: parse_u32("expire", parts[5])?,
            minimum: parse_u32("minimum", parts[6])?,
        })
    }
}

impl SoaFields {
    pub fn parse(content: &str) -> Result<Self, SoaParseError> {
        content.parse()
    }
}

fn parse_u32(field: &'static str, value: &str) -> Result<u32, SoaParseError> {
    value.parse::<u32>().map_err(|_| SoaParseError::InvalidNumber {
        field,
        value: value.to_string(),
    })
}
