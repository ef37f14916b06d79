//! An RFC 9562 UUID generation engine covering versions 1 through 7
//!
//! ```rust
//! let uuid = uuidgen::uuid7()?;
//! println!("{uuid}"); // e.g., "01809424-3e59-7c05-9219-566f82fff672"
//! println!("{:?}", uuid.as_bytes()); // as 16-byte big-endian array
//!
//! let uuid = uuidgen::generate(5, Some(&b"www.example.com"[..]), Some(uuidgen::ns::URL))?;
//! # Ok::<(), uuidgen::Error>(())
//! ```
//!
//! Every identifier produced here is a 128-bit value with the variant field set at `10` and the
//! version nibble set at the requested version, rendered as the canonical lower-case 8-4-4-4-12
//! hexadecimal string.
//!
//! # Supported versions
//!
//! - Version 1: Gregorian-time-based, with the clock sequence and the node identifier guarding
//!   uniqueness across rapid calls and clock regressions.
//! - Version 2: DCE Security, a v1 body embedding the effective user id and the person domain.
//! - Version 3: name-based via MD5 over a namespace and a name.
//! - Version 4: random.
//! - Version 5: name-based via SHA-1 over a namespace and a name.
//! - Version 6: the v1 timestamp reordered most significant bits first, so byte and string
//!   comparison is monotonic with generation time.
//! - Version 7: Unix-epoch milliseconds followed by random bits.
//!
//! # Field and bit layout of version 7
//!
//! ```text
//!  0                   1                   2                   3
//!  0 1 2 3 4 5 6 7 8 9 0 1 2 3 4 5 6 7 8 9 0 1 2 3 4 5 6 7 8 9 0 1
//! +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
//! |                          unix_ts_ms                           |
//! +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
//! |          unix_ts_ms           |  ver  |         rand_a        |
//! +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
//! |var|                          rand_b                           |
//! +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
//! |                            rand_b                             |
//! +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
//! ```
//!
//! The 74 `rand_a`/`rand_b` bits are filled with cryptographically strong random numbers;
//! identifiers generated in different milliseconds sort by generation time, while identifiers
//! generated within the same millisecond carry no mutual order.
//!
//! # Crate features
//!
//! - `serde`: serialization and deserialization of [`Uuid`] objects.
//! - `uuid`: conversion to and from the [`uuid`] crate's value type.

mod engine;
mod error;
mod id;

pub mod clock;
pub mod name_based;
pub mod ns;
pub mod random;
pub mod time_based;

pub use engine::{generate, uuid1, uuid2, uuid4, uuid6, uuid7, Engine, Request};
pub use error::Error;
pub use id::{Uuid, Variant};

#[doc(inline)]
pub use name_based::{uuid3, uuid5};
