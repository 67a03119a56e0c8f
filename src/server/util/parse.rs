use crate::server::error::filter::FilterError;

/// Parses the `quantity` listing parameter.
///
/// Surrounding whitespace is ignored.
///
/// # Returns
/// - `Ok(u64)` - Number of servers to keep
/// - `Err(FilterError::InvalidQuantity)` - Non-numeric or negative input
pub fn parse_quantity(value: &str) -> Result<u64, FilterError> {
    value
        .trim()
        .parse::<u64>()
        .map_err(|_| FilterError::InvalidQuantity(value.to_string()))
}

/// Parses the `by_server_id` listing parameter.
///
/// Accepts any 64-bit integer so that a well-formed but out-of-range id can be
/// reported as not found rather than malformed.
///
/// # Returns
/// - `Ok(i64)` - The requested id
/// - `Err(FilterError::InvalidServerId)` - Input is not an integer
pub fn parse_server_id(value: &str) -> Result<i64, FilterError> {
    value
        .trim()
        .parse::<i64>()
        .map_err(|_| FilterError::InvalidServerId(value.to_string()))
}
