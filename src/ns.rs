//! The well-known namespace identifiers used as hash roots for name-based UUIDs.

use crate::{Error, Uuid};

/// Namespace for fully-qualified domain names (RFC 9562).
pub const DNS: Uuid = Uuid::from_bytes([
    0x6b, 0xa7, 0xb8, 0x10, 0x9d, 0xad, 0x11, 0xd1, 0x80, 0xb4, 0x00, 0xc0, 0x4f, 0xd4, 0x30, 0xc8,
]);

/// Namespace for URLs (RFC 9562).
pub const URL: Uuid = Uuid::from_bytes([
    0x6b, 0xa7, 0xb8, 0x11, 0x9d, 0xad, 0x11, 0xd1, 0x80, 0xb4, 0x00, 0xc0, 0x4f, 0xd4, 0x30, 0xc8,
]);

/// Namespace for ISO object identifiers (RFC 9562).
pub const OID: Uuid = Uuid::from_bytes([
    0x6b, 0xa7, 0xb8, 0x12, 0x9d, 0xad, 0x11, 0xd1, 0x80, 0xb4, 0x00, 0xc0, 0x4f, 0xd4, 0x30, 0xc8,
]);

/// Namespace for X.500 distinguished names (RFC 9562).
pub const X500: Uuid = Uuid::from_bytes([
    0x6b, 0xa7, 0xb8, 0x14, 0x9d, 0xad, 0x11, 0xd1, 0x80, 0xb4, 0x00, 0xc0, 0x4f, 0xd4, 0x30, 0xc8,
]);

/// Looks up a well-known namespace by its token (`dns`, `url`, `oid`, or `x500`,
/// ASCII-case-insensitive).
pub fn resolve(token: &str) -> Result<Uuid, Error> {
    if token.eq_ignore_ascii_case("dns") {
        Ok(DNS)
    } else if token.eq_ignore_ascii_case("url") {
        Ok(URL)
    } else if token.eq_ignore_ascii_case("oid") {
        Ok(OID)
    } else if token.eq_ignore_ascii_case("x500") {
        Ok(X500)
    } else {
        Err(Error::UnknownNamespace(token.to_owned()))
    }
}
