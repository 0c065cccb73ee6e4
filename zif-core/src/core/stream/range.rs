use crate::core::stream::{Error, Result};
use std::fmt::{Display, Formatter};

const BYTES_PREFIX: &str = "bytes=";
const BYTES_LEN: usize = BYTES_PREFIX.len();

/// The HTTP range information according to rfc7233.
/// The requested range only allows for `bytes` type, any other types will result in an [Err].
///
/// A range without a start is a suffix range, requesting the last `end` bytes of the resource.
#[derive(Debug, Clone, PartialEq)]
pub struct Range {
    pub start: Option<u64>,
    pub end: Option<u64>,
}

impl Range {
    pub fn parse(value: &str) -> Result<Vec<Self>> {
        let value = value.trim();
        if !value.starts_with(BYTES_PREFIX) {
            return Err(Error::InvalidRange);
        }

        let range_value = &value[BYTES_LEN..];
        let mut ranges = vec![];

        for value in range_value.split(",") {
            ranges.push(Self::parse_value(value.trim())?);
        }

        Ok(ranges)
    }

    /// Resolve the range against the total length of a resource.
    /// It returns the byte range with an exclusive end, or [Error::NotSatisfiable].
    pub fn resolve(&self, len: u64) -> Result<std::ops::Range<u64>> {
        let not_satisfiable = || Error::NotSatisfiable(self.to_string(), len);

        match (self.start, self.end) {
            (Some(start), end) => {
                if start >= len || end.filter(|end| *end < start).is_some() {
                    return Err(not_satisfiable());
                }

                let end = end.map(|e| e.saturating_add(1).min(len)).unwrap_or(len);
                Ok(start..end)
            }
            (None, Some(suffix)) => {
                if suffix == 0 || len == 0 {
                    return Err(not_satisfiable());
                }

                Ok(len.saturating_sub(suffix)..len)
            }
            (None, None) => Err(not_satisfiable()),
        }
    }

    fn parse_value(value: &str) -> Result<Self> {
        let (start, end) = value
            .split_once("-")
            .ok_or_else(|| Error::Parse(format!("range \"{}\" is missing a separator", value)))?;
        let start = Self::parse_position(start)?;
        let end = Self::parse_position(end)?;

        if start.is_none() && end.is_none() {
            return Err(Error::InvalidRange);
        }

        Ok(Self { start, end })
    }

    fn parse_position(value: &str) -> Result<Option<u64>> {
        let value = value.trim();
        if value.is_empty() {
            return Ok(None);
        }

        value
            .parse::<u64>()
            .map(Some)
            .map_err(|e| Error::Parse(e.to_string()))
    }
}

impl Display for Range {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}-{}",
            self.start.map(|e| e.to_string()).unwrap_or_default(),
            self.end.map(|e| e.to_string()).unwrap_or_default()
        )
    }
}
