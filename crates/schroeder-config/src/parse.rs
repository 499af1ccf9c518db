//! Comma-separated parameter lists.

use crate::error::PresetError;
use std::fmt::Display;
use std::str::FromStr;

/// Parse a comma-separated list such as `"0.3, 0.25, 0.25, 0.20"`.
///
/// Entries are trimmed. Blank text yields an empty list; an empty entry
/// between commas is an error.
///
/// ```rust
/// use schroeder_config::parse_list;
///
/// let delays: Vec<usize> = parse_list("1553, 1613,1493 ,1153").unwrap();
/// assert_eq!(delays, vec![1553, 1613, 1493, 1153]);
///
/// let gains: Vec<f64> = parse_list("").unwrap();
/// assert!(gains.is_empty());
///
/// assert!(parse_list::<usize>("12, 3.5").is_err());
/// ```
pub fn parse_list<T>(text: &str) -> Result<Vec<T>, PresetError>
where
    T: FromStr,
    T::Err: Display,
{
    if text.trim().is_empty() {
        return Ok(Vec::new());
    }

    text.split(',')
        .map(str::trim)
        .map(|entry| {
            entry
                .parse::<T>()
                .map_err(|e| PresetError::invalid_list(entry, e))
        })
        .collect()
}

/// Render values the way [`parse_list`] reads them.
pub fn format_list<T: Display>(values: &[T]) -> String {
    values
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_floats() {
        let v: Vec<f64> = parse_list("0.3,0.25, 0.25 , -0.7").unwrap();
        assert_eq!(v, vec![0.3, 0.25, 0.25, -0.7]);
    }

    #[test]
    fn test_single_value() {
        let v: Vec<usize> = parse_list("223").unwrap();
        assert_eq!(v, vec![223]);
    }

    #[test]
    fn test_blank_is_empty() {
        assert!(parse_list::<f64>("   ").unwrap().is_empty());
    }

    #[test]
    fn test_trailing_comma_is_rejected() {
        let err = parse_list::<f64>("0.5,").unwrap_err();
        assert!(matches!(err, PresetError::InvalidList { ref value, .. } if value.is_empty()));
    }

    #[test]
    fn test_negative_delay_is_rejected() {
        let err = parse_list::<usize>("100, -3").unwrap_err();
        assert!(matches!(err, PresetError::InvalidList { ref value, .. } if value == "-3"));
    }

    #[test]
    fn test_format_list_reparses() {
        let values = vec![0.3, 0.25, 0.2];
        let text = format_list(&values);
        assert_eq!(text, "0.3, 0.25, 0.2");
        assert_eq!(parse_list::<f64>(&text).unwrap(), values);
    }
}
