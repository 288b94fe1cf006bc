use lazy_static::lazy_static;
use regex::Regex;

use crate::core::error::{AppError, Result};
use crate::shared::constants::{DEFAULT_PAGE_LIMIT, MAX_PAGE_LIMIT};
use crate::shared::types::PageRequest;

lazy_static! {
    /// Regex for validating identifier parameters
    /// Must be a positive integer written without sign, leading zeros or decimals
    /// - Valid: "1", "42", "999999"
    /// - Invalid: "0", "-1", "01", "1.5", "abc", ""
    pub static ref POSITIVE_ID_REGEX: Regex = Regex::new(r"^[1-9][0-9]*$").unwrap();

    /// Regex for validating integer query parameters (pagination)
    pub static ref INTEGER_REGEX: Regex = Regex::new(r"^-?[0-9]+$").unwrap();
}

fn invalid_id(param: &str) -> AppError {
    AppError::InvalidParameter(format!(
        "Le paramètre '{}' doit être un entier positif.",
        param
    ))
}

fn invalid_integer(param: &str) -> AppError {
    AppError::InvalidParameter(format!("Le paramètre '{}' doit être un entier.", param))
}

/// Parse a required identifier (path parameter)
pub fn parse_positive_id(param: &str, raw: &str) -> Result<i64> {
    if !POSITIVE_ID_REGEX.is_match(raw) {
        return Err(invalid_id(param));
    }
    // The regex accepts arbitrarily long digit strings
    raw.parse::<i64>().map_err(|_| invalid_id(param))
}

/// Parse an optional identifier filter (query parameter). Blank means absent,
/// anything else follows the path identifier rules untrimmed.
pub fn parse_optional_id(param: &str, raw: Option<&str>) -> Result<Option<i64>> {
    match raw {
        None => Ok(None),
        Some(value) if value.trim().is_empty() => Ok(None),
        Some(value) => parse_positive_id(param, value).map(Some),
    }
}

/// Integers too large for `i64` saturate, the caller clamps them afterwards
fn parse_integer(param: &str, raw: &str) -> Result<i64> {
    let raw = raw.trim();
    if !INTEGER_REGEX.is_match(raw) {
        return Err(invalid_integer(param));
    }
    match raw.parse::<i64>() {
        Ok(value) => Ok(value),
        Err(_) if raw.starts_with('-') => Ok(i64::MIN),
        Err(_) => Ok(i64::MAX),
    }
}

/// Build a page request from `page`/`limit` query values.
///
/// Pagination only applies when `page` is given. `page` is clamped to at
/// least 1, `limit` defaults to [`DEFAULT_PAGE_LIMIT`] and is clamped to
/// `1..=MAX_PAGE_LIMIT`.
pub fn parse_pagination(page: Option<&str>, limit: Option<&str>) -> Result<Option<PageRequest>> {
    let page = match page.map(str::trim) {
        None | Some("") => return Ok(None),
        Some(value) => parse_integer("page", value)?.max(1),
    };

    let limit = match limit.map(str::trim) {
        None | Some("") => DEFAULT_PAGE_LIMIT,
        Some(value) => parse_integer("limit", value)?.clamp(1, MAX_PAGE_LIMIT),
    };

    Ok(Some(PageRequest { page, limit }))
}
