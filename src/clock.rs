//! Injectable collaborators of the generation engine: the wall clock, the node identifier
//! source, and the process identity accessor.
//!
//! The engine consumes these through small capability traits so that tests can substitute fake
//! clocks and forced-fallback node sources for deterministic behavior.

use std::time::{SystemTime, UNIX_EPOCH};

use rand::rngs::OsRng;
use rand::RngCore;

use crate::Error;

/// 100-nanosecond intervals between the Gregorian epoch (1582-10-15T00:00:00Z) and the Unix
/// epoch (1970-01-01T00:00:00Z).
pub const GREGORIAN_OFFSET_TICKS: u64 = 0x01b2_1dd2_1381_4000;

/// The 60-bit ceiling of the Gregorian-epoch timestamp field.
pub const MAX_TICKS: u64 = (1 << 60) - 1;

/// A wall clock readable in the two resolutions the engine needs.
pub trait Clock {
    /// Returns the current time as milliseconds since the Unix epoch.
    fn now_unix_ms(&mut self) -> Result<u64, Error>;

    /// Returns the current time as 100-nanosecond ticks since the Gregorian epoch, truncated to
    /// 60 bits.
    fn now_gregorian_ticks(&mut self) -> Result<u64, Error>;
}

/// The default [`Clock`] over [`std::time::SystemTime`].
#[derive(Copy, Clone, Eq, PartialEq, Debug, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now_unix_ms(&mut self) -> Result<u64, Error> {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_millis() as u64)
            .map_err(|_| Error::ClockUnavailable)
    }

    fn now_gregorian_ticks(&mut self) -> Result<u64, Error> {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| ((d.as_nanos() / 100) as u64 + GREGORIAN_OFFSET_TICKS) & MAX_TICKS)
            .map_err(|_| Error::ClockUnavailable)
    }
}

/// A source of the 48-bit node identifier embedded in time-based UUIDs.
pub trait NodeSource {
    /// Returns the node identifier. Resolved once per generator and cached for its lifetime.
    fn node_id(&mut self) -> Result<[u8; 6], Error>;
}

/// The default [`NodeSource`]: the hardware network address of the host, falling back to
/// [`RandomNode`] when no hardware address is available.
#[derive(Copy, Clone, Eq, PartialEq, Debug, Default)]
pub struct HardwareNode;

impl NodeSource for HardwareNode {
    fn node_id(&mut self) -> Result<[u8; 6], Error> {
        match mac_address::get_mac_address() {
            Ok(Some(addr)) => Ok(addr.bytes()),
            _ => RandomNode.node_id(),
        }
    }
}

/// A [`NodeSource`] that draws six cryptographically random bytes and forces the multicast bit
/// to 1, marking the value as not a real hardware address per RFC 9562.
#[derive(Copy, Clone, Eq, PartialEq, Debug, Default)]
pub struct RandomNode;

impl NodeSource for RandomNode {
    fn node_id(&mut self) -> Result<[u8; 6], Error> {
        let mut bytes = [0u8; 6];
        OsRng
            .try_fill_bytes(&mut bytes)
            .map_err(|_| Error::EntropyUnavailable)?;
        bytes[0] |= 0x01;
        Ok(bytes)
    }
}

/// An accessor for the 32-bit local identifier embedded in DCE Security (v2) UUIDs.
pub trait LocalIdSource {
    /// Returns the local identifier of the calling context.
    fn local_id(&mut self) -> u32;
}

/// The default [`LocalIdSource`]: the effective user id of the process on Unix, and 0 on
/// platforms without a Unix-style uid.
#[derive(Copy, Clone, Eq, PartialEq, Debug, Default)]
pub struct EffectiveUid;

impl LocalIdSource for EffectiveUid {
    fn local_id(&mut self) -> u32 {
        #[cfg(unix)]
        // SAFETY: geteuid cannot fail and has no preconditions.
        return unsafe { libc::geteuid() as u32 };

        #[cfg(not(unix))]
        return 0;
    }
}

#[cfg(test)]
mod tests {
    use super::{Clock, NodeSource, RandomNode, SystemClock, GREGORIAN_OFFSET_TICKS};

    /// Reads a plausible current time in both resolutions
    #[test]
    fn reads_a_plausible_current_time_in_both_resolutions() {
        let mut clock = SystemClock;
        let ms = clock.now_unix_ms().unwrap();
        let ticks = clock.now_gregorian_ticks().unwrap();

        // 2020-01-01T00:00:00Z in each resolution
        assert!(ms > 1_577_836_800_000);
        assert!(ticks > 1_577_836_800_000 * 10_000 + GREGORIAN_OFFSET_TICKS);

        // the two readings describe the same instant within a coarse margin
        let ms_from_ticks = (ticks - GREGORIAN_OFFSET_TICKS) / 10_000;
        assert!(ms_from_ticks.abs_diff(ms) < 1_000);
    }

    /// Marks random node identifiers with the multicast bit
    #[test]
    fn marks_random_node_identifiers_with_the_multicast_bit() {
        for _ in 0..100 {
            let node = RandomNode.node_id().unwrap();
            assert_eq!(node[0] & 0x01, 0x01);
        }
    }
}
