//! Row selectors.
//!
//! Clients address records by their 1-based position in the current derived
//! view: `3`, a range `2-4`, or a comma list `1,3-5`. Selectors are parsed
//! here and resolved against the view's ids by the dashboard facade.
//!
//! Ranges must run low to high; positions are 1-based and deduplicated
//! while preserving first-mention order.

use crate::error::{KeepsakeError, Result};

/// Parse a selector expression into 1-based row positions.
pub fn parse_rows(input: &str) -> Result<Vec<usize>> {
    let mut rows: Vec<usize> = Vec::new();

    for part in input.split(',') {
        let part = part.trim();
        if part.is_empty() {
            return Err(KeepsakeError::InvalidSelector(format!(
                "empty segment in '{}'",
                input
            )));
        }

        match part.split_once('-') {
            Some((start, end)) => {
                let start = parse_position(start)?;
                let end = parse_position(end)?;
                if start > end {
                    return Err(KeepsakeError::InvalidSelector(format!(
                        "range {}-{} runs backwards",
                        start, end
                    )));
                }
                for row in start..=end {
                    if !rows.contains(&row) {
                        rows.push(row);
                    }
                }
            }
            None => {
                let row = parse_position(part)?;
                if !rows.contains(&row) {
                    rows.push(row);
                }
            }
        }
    }

    Ok(rows)
}

fn parse_position(input: &str) -> Result<usize> {
    let position: usize = input.trim().parse().map_err(|_| {
        KeepsakeError::InvalidSelector(format!("'{}' is not a row number", input.trim()))
    })?;
    if position == 0 {
        return Err(KeepsakeError::InvalidSelector(
            "row numbers start at 1".to_string(),
        ));
    }
    Ok(position)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_single_row() {
        assert_eq!(parse_rows("3").unwrap(), vec![3]);
    }

    #[test]
    fn parses_range() {
        assert_eq!(parse_rows("2-4").unwrap(), vec![2, 3, 4]);
    }

    #[test]
    fn parses_comma_list_with_ranges() {
        assert_eq!(parse_rows("1,3-5,2").unwrap(), vec![1, 3, 4, 5, 2]);
    }

    #[test]
    fn deduplicates_keeping_first_mention() {
        assert_eq!(parse_rows("2,1-3").unwrap(), vec![2, 1, 3]);
    }

    #[test]
    fn rejects_backwards_range() {
        let err = parse_rows("5-3").unwrap_err();
        assert!(matches!(err, KeepsakeError::InvalidSelector(_)));
    }

    #[test]
    fn rejects_zero_and_garbage() {
        assert!(parse_rows("0").is_err());
        assert!(parse_rows("abc").is_err());
        assert!(parse_rows("1,,2").is_err());
    }
}
