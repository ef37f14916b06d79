//! Time-based UUID generation (versions 1, 2, and 6) over shared clock state.
//!
//! All three versions derive from the same state machine: a 60-bit Gregorian timestamp, a 14-bit
//! clock sequence that advances whenever a reading does not move the clock forward, and a cached
//! 48-bit node identifier.

use rand::RngCore;

use crate::clock::{Clock, NodeSource};
use crate::{Error, Uuid};

/// The DCE Security "person" domain tag embedded in v2 UUIDs.
pub const DOMAIN_PERSON: u8 = 0;

const MAX_CLOCK_SEQ: u16 = (1 << 14) - 1;

/// Represents a generator of time-based UUIDs (versions 1, 2, and 6) that encapsulates the
/// last-observed timestamp, the clock sequence, and the node identifier.
///
/// The read-modify-write over this state must not interleave between concurrent requests, so
/// callers sharing one generator across threads wrap it in a mutex. The following example
/// guarantees the process-wide uniqueness of `(timestamp, clock sequence)` pairs using Rust's
/// standard synchronization mechanism.
///
/// # Examples
///
/// ```rust
/// use rand::rngs::OsRng;
/// use std::{sync, thread};
/// use uuidgen::clock::{RandomNode, SystemClock};
/// use uuidgen::time_based::TimeBasedGenerator;
///
/// let g = sync::Arc::new(sync::Mutex::new(TimeBasedGenerator::new(
///     OsRng,
///     SystemClock,
///     RandomNode,
/// )));
/// thread::scope(|s| {
///     for i in 0..4 {
///         let g = sync::Arc::clone(&g);
///         s.spawn(move || {
///             for _ in 0..8 {
///                 println!("{} by thread {}", g.lock().unwrap().generate_v1().unwrap(), i);
///                 thread::yield_now();
///             }
///         });
///     }
/// });
/// ```
#[derive(Clone, Eq, PartialEq, Debug, Default)]
pub struct TimeBasedGenerator<R, C, N> {
    last_ticks: u64,
    clock_seq: Option<u16>,
    node: Option<[u8; 6]>,

    rng: R,
    clock: C,
    node_source: N,
}

impl<R: RngCore, C: Clock, N: NodeSource> TimeBasedGenerator<R, C, N> {
    /// Creates a generator instance.
    ///
    /// The clock sequence and the node identifier are left unresolved until the first
    /// generation call.
    pub const fn new(rng: R, clock: C, node_source: N) -> Self {
        Self {
            last_ticks: 0,
            clock_seq: None,
            node: None,
            rng,
            clock,
            node_source,
        }
    }

    /// Generates a new UUIDv1 object.
    pub fn generate_v1(&mut self) -> Result<Uuid, Error> {
        let (ticks, clock_seq) = self.step()?;
        let node = self.node()?;
        Ok(Uuid::from_fields_v1(ticks, clock_seq, node))
    }

    /// Generates a new UUIDv6 object.
    pub fn generate_v6(&mut self) -> Result<Uuid, Error> {
        let (ticks, clock_seq) = self.step()?;
        let node = self.node()?;
        Ok(Uuid::from_fields_v6(ticks, clock_seq, node))
    }

    /// Generates a new UUIDv2 (DCE Security) object carrying `local_id` in place of the low 32
    /// timestamp bits and `domain` in place of the low clock sequence byte.
    pub fn generate_v2(&mut self, domain: u8, local_id: u32) -> Result<Uuid, Error> {
        let mut bytes: [u8; 16] = self.generate_v1()?.into();
        bytes[..4].copy_from_slice(&local_id.to_be_bytes());
        bytes[6] = (bytes[6] & 0x0f) | 0x20;
        bytes[9] = domain;
        Ok(Uuid::from(bytes))
    }

    /// Advances the clock state by one generation request.
    ///
    /// A reading not strictly greater than the last one (an intra-tick collision or a clock
    /// regression) advances the clock sequence instead of the timestamp, so the emitted
    /// `(timestamp, clock sequence)` pair is never repeated.
    fn step(&mut self) -> Result<(u64, u16), Error> {
        let now = self.clock.now_gregorian_ticks()?;
        let clock_seq = match self.clock_seq {
            Some(seq) if now <= self.last_ticks => (seq + 1) & MAX_CLOCK_SEQ,
            Some(seq) => seq,
            None => self.rng.next_u32() as u16 & MAX_CLOCK_SEQ,
        };
        self.clock_seq = Some(clock_seq);
        self.last_ticks = now;
        Ok((now, clock_seq))
    }

    fn node(&mut self) -> Result<[u8; 6], Error> {
        match self.node {
            Some(node) => Ok(node),
            None => {
                let node = self.node_source.node_id()?;
                self.node = Some(node);
                Ok(node)
            }
        }
    }
}
