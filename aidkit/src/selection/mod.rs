//! Numbered table menu and selection parsing
//!
//! The user answers the menu with one line of comma-separated, 1-based numbers
//! (`"1, 3"`). Every number is validated against the menu length.

use crate::error::SelectionError;

/// Menu lines, `"<n>. <table>"`, numbered from 1
#[must_use]
pub fn numbered_menu(tables: &[String]) -> Vec<String> {
    tables
        .iter()
        .enumerate()
        .map(|(i, table)| format!("{}. {table}", i + 1))
        .collect()
}

/// Parse a comma-separated, 1-based selection into 0-based indices
///
/// Order and duplicates are preserved.
///
/// # Errors
///
/// - [`SelectionError::Empty`] if the input is blank
/// - [`SelectionError::InvalidIndex`] if a token is not a positive integer
/// - [`SelectionError::OutOfRange`] if a number is 0 or larger than `len`
pub fn parse_selection(input: &str, len: usize) -> Result<Vec<usize>, SelectionError> {
    if input.trim().is_empty() {
        return Err(SelectionError::Empty);
    }

    input
        .split(',')
        .map(str::trim)
        .map(|token| {
            let index: usize = token.parse().map_err(|_| SelectionError::InvalidIndex {
                token: token.to_string(),
            })?;

            if index == 0 || index > len {
                return Err(SelectionError::OutOfRange { index, len });
            }

            Ok(index - 1)
        })
        .collect()
}

/// Resolve a selection line against the listed tables
///
/// # Errors
///
/// Returns the first [`SelectionError`] found in `input`.
pub fn select_tables(tables: &[String], input: &str) -> Result<Vec<String>, SelectionError> {
    let indices = parse_selection(input, tables.len())?;
    Ok(indices.into_iter().map(|i| tables[i].clone()).collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tables() -> Vec<String> {
        ["users", "services", "ndis_plans"]
            .into_iter()
            .map(String::from)
            .collect()
    }

    #[test]
    fn test_numbered_menu() {
        assert_eq!(
            numbered_menu(&tables()),
            vec!["1. users", "2. services", "3. ndis_plans"]
        );
        assert!(numbered_menu(&[]).is_empty());
    }

    #[test]
    fn test_parse_trims_and_keeps_order() {
        assert_eq!(parse_selection(" 3, 1 ,2", 3).unwrap(), vec![2, 0, 1]);
        assert_eq!(parse_selection("2,2", 3).unwrap(), vec![1, 1]);
    }

    #[test]
    fn test_select_tables() {
        let selected = select_tables(&tables(), "1,3").unwrap();
        assert_eq!(selected, vec!["users", "ndis_plans"]);
    }

    #[test]
    fn test_out_of_range_is_an_error() {
        assert_eq!(
            select_tables(&tables(), "1,4"),
            Err(SelectionError::OutOfRange { index: 4, len: 3 })
        );
        assert_eq!(
            parse_selection("0", 3),
            Err(SelectionError::OutOfRange { index: 0, len: 3 })
        );
    }

    #[test]
    fn test_any_number_is_out_of_range_for_empty_menu() {
        assert_eq!(
            parse_selection("1", 0),
            Err(SelectionError::OutOfRange { index: 1, len: 0 })
        );
    }

    #[test]
    fn test_malformed_tokens() {
        assert_eq!(parse_selection("", 3), Err(SelectionError::Empty));
        assert_eq!(parse_selection("   ", 3), Err(SelectionError::Empty));
        assert_eq!(
            parse_selection("1,,2", 3),
            Err(SelectionError::InvalidIndex { token: String::new() })
        );
        assert_eq!(
            parse_selection("one", 3),
            Err(SelectionError::InvalidIndex { token: "one".to_string() })
        );
        assert_eq!(
            parse_selection("-1", 3),
            Err(SelectionError::InvalidIndex { token: "-1".to_string() })
        );
    }
}
