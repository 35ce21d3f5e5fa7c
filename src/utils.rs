//! Utility functions for buffer parsing.

use bytes::BytesMut;

use crate::error::{StoreError, StoreResult};

/// Split a request buffer into whitespace-separated words.
///
/// Consumes the buffer. Quoting and escaping are not supported, so keys
/// and values on the wire cannot contain whitespace; the library itself
/// has no such restriction.
///
/// # Example
/// ```ignore
/// let mut buf = BytesMut::from("set key value 60");
/// let parts = buffer_to_array(&mut buf);
/// assert_eq!(parts, vec!["set", "key", "value", "60"]);
/// ```
pub fn buffer_to_array(buf: &mut BytesMut) -> Vec<String> {
    let bytes = buf.split_to(buf.len());
    String::from_utf8_lossy(&bytes)
        .split_whitespace()
        .map(str::to_owned)
        .collect()
}

/// Parse a buffer into command parts with validation.
///
/// Returns an error if the buffer holds no words at all.
pub fn parse_command(buf: &mut BytesMut) -> StoreResult<Vec<String>> {
    let parts = buffer_to_array(buf);

    if parts.is_empty() {
        return Err(StoreError::ParseError("empty command".to_string()));
    }

    Ok(parts)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_buffer_to_array_basic() {
        let mut buf = BytesMut::from("set key value");
        let result = buffer_to_array(&mut buf);
        assert_eq!(result, vec!["set", "key", "value"]);
    }

    #[test]
    fn test_buffer_to_array_empty() {
        let mut buf = BytesMut::new();
        let result = buffer_to_array(&mut buf);
        assert!(result.is_empty());
    }

    #[test]
    fn test_buffer_to_array_single_word() {
        let mut buf = BytesMut::from("ping");
        let result = buffer_to_array(&mut buf);
        assert_eq!(result, vec!["ping"]);
    }

    #[test]
    fn test_buffer_to_array_extra_whitespace() {
        let mut buf = BytesMut::from("  set  key   value \n");
        let result = buffer_to_array(&mut buf);
        assert_eq!(result, vec!["set", "key", "value"]);
    }

    #[test]
    fn test_parse_command_empty() {
        let mut buf = BytesMut::new();
        let result = parse_command(&mut buf);
        assert!(result.is_err());
    }

    #[test]
    fn test_parse_command_valid() {
        let mut buf = BytesMut::from("get mykey");
        let result = parse_command(&mut buf);
        assert!(result.is_ok());
        assert_eq!(result.unwrap(), vec!["get", "mykey"]);
    }
}
