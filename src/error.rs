use thiserror::Error as ThisError;

/// The failures reported by the generation engine and the textual codec.
///
/// Every variant reflects either bad input or an unavailable external dependency; none is
/// retried or suppressed inside the engine, and retry policy belongs to the caller.
#[derive(Clone, Eq, PartialEq, Hash, Debug, ThisError)]
#[non_exhaustive]
pub enum Error {
    /// The textual input is not a 8-4-4-4-12 hexadecimal UUID representation.
    #[error("invalid string representation")]
    Format,

    /// The namespace token is not one of the well-known namespace names.
    #[error("unknown namespace: {0} (supported: dns, url, oid, x500)")]
    UnknownNamespace(String),

    /// A name-based version (3 or 5) was requested without a name.
    #[error("name-based versions require a non-empty name")]
    MissingName,

    /// The OS randomness source could not supply bytes.
    #[error("system randomness source unavailable")]
    EntropyUnavailable,

    /// The system clock could not be read.
    #[error("system clock unavailable")]
    ClockUnavailable,

    /// The requested version number is outside the supported 1-7 range.
    #[error("invalid version: {0} (supported: 1-7)")]
    InvalidVersion(u8),
}
