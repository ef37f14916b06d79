//! Random UUID generation (versions 4 and 7).
//!
//! Both versions are stateless: version 4 is 122 unconstrained random bits, and version 7
//! prefixes 74 random bits with the current Unix timestamp in milliseconds so that values
//! generated in different milliseconds sort by generation time. Values generated within the same
//! millisecond carry no ordering relative to one another; the random tail breaks ties
//! arbitrarily.

use rand::RngCore;

use crate::clock::Clock;
use crate::{Error, Uuid};

const MAX_UNIX_TS_MS: u64 = (1 << 48) - 1;

/// Generates a UUIDv4 object from 16 bytes drawn from `rng`.
///
/// Fails with [`Error::EntropyUnavailable`] if the randomness source cannot supply bytes.
pub fn uuid4_core<R: RngCore>(rng: &mut R) -> Result<Uuid, Error> {
    let mut bytes = [0u8; 16];
    rng.try_fill_bytes(&mut bytes)
        .map_err(|_| Error::EntropyUnavailable)?;
    Ok(Uuid::with_version(bytes, 4))
}

/// Generates a UUIDv7 object from the current millisecond reading of `clock` and random bits
/// drawn from `rng`.
///
/// Fails with [`Error::EntropyUnavailable`] or [`Error::ClockUnavailable`] if the respective
/// collaborator is unavailable.
pub fn uuid7_core<R: RngCore, C: Clock>(rng: &mut R, clock: &mut C) -> Result<Uuid, Error> {
    let unix_ts_ms = clock.now_unix_ms()? & MAX_UNIX_TS_MS;

    let mut tail = [0u8; 10];
    rng.try_fill_bytes(&mut tail)
        .map_err(|_| Error::EntropyUnavailable)?;
    let rand_a = u16::from_be_bytes([tail[0], tail[1]]) & 0x0fff;
    let rand_b = u64::from_be_bytes([
        tail[2], tail[3], tail[4], tail[5], tail[6], tail[7], tail[8], tail[9],
    ]) & ((1 << 62) - 1);

    Ok(Uuid::from_fields_v7(unix_ts_ms, rand_a, rand_b))
}
