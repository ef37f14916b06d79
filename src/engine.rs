//! Version dispatch and the process-wide default engine.

use std::sync;

use rand::rngs::adapter::ReseedingRng;
use rand::rngs::OsRng;
use rand::SeedableRng;
use rand_chacha::ChaCha12Core;

use crate::clock::{EffectiveUid, HardwareNode, LocalIdSource, SystemClock};
use crate::time_based::{TimeBasedGenerator, DOMAIN_PERSON};
use crate::{name_based, ns, random, Error, Uuid};

/// A fully-resolved generation request: one variant per supported version, each carrying exactly
/// the inputs that version consumes.
///
/// Constructing a `Request` directly makes invalid combinations unrepresentable; the numeric
/// front door [`Request::from_args`] validates untyped version/name/namespace triples instead.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum Request<'a> {
    /// Gregorian-time-based (RFC 4122).
    V1,

    /// DCE Security, embedding the process's local identity.
    V2,

    /// Name-based MD5.
    V3 {
        /// The hash root identifier.
        namespace: Uuid,
        /// The name byte sequence, non-empty.
        name: &'a [u8],
    },

    /// Random.
    V4,

    /// Name-based SHA-1.
    V5 {
        /// The hash root identifier.
        namespace: Uuid,
        /// The name byte sequence, non-empty.
        name: &'a [u8],
    },

    /// Reordered Gregorian-time-based (RFC 9562).
    V6,

    /// Unix-epoch-time-based (RFC 9562).
    V7,
}

impl<'a> Request<'a> {
    /// Builds a request from an untyped version number with optional name and namespace
    /// arguments.
    ///
    /// Fails with [`Error::InvalidVersion`] for versions outside 1-7 and with
    /// [`Error::MissingName`] when version 3 or 5 is requested without a name. The namespace
    /// defaults to [`ns::DNS`] when unspecified; a name or namespace supplied to a version that
    /// takes none is ignored.
    pub fn from_args(
        version: u8,
        name: Option<&'a [u8]>,
        namespace: Option<Uuid>,
    ) -> Result<Self, Error> {
        match version {
            1 => Ok(Self::V1),
            2 => Ok(Self::V2),
            3 | 5 => {
                let name = name.filter(|e| !e.is_empty()).ok_or(Error::MissingName)?;
                let namespace = namespace.unwrap_or(ns::DNS);
                if version == 3 {
                    Ok(Self::V3 { namespace, name })
                } else {
                    Ok(Self::V5 { namespace, name })
                }
            }
            4 => Ok(Self::V4),
            6 => Ok(Self::V6),
            7 => Ok(Self::V7),
            other => Err(Error::InvalidVersion(other)),
        }
    }

    /// Returns the version number the request resolves to.
    pub const fn version(&self) -> u8 {
        match self {
            Self::V1 => 1,
            Self::V2 => 2,
            Self::V3 { .. } => 3,
            Self::V4 => 4,
            Self::V5 { .. } => 5,
            Self::V6 => 6,
            Self::V7 => 7,
        }
    }
}

/// The type alias for the random number generator feeding the engine's time-based state.
///
/// The engine employs [`ChaCha12Core`] with the [`ReseedingRng`] wrapper to emulate the strategy
/// used by [`rand::rngs::ThreadRng`].
type EngineRng = ReseedingRng<ChaCha12Core, OsRng>;

/// An engine that dispatches generation requests across all supported versions.
///
/// The name-based and random paths are stateless and run without synchronization; the time-based
/// path holds its clock state behind a mutex, locked only for the O(1) state transition, so one
/// engine may be shared freely across threads.
#[derive(Debug)]
pub struct Engine {
    time_gen: sync::Mutex<TimeBasedGenerator<EngineRng, SystemClock, HardwareNode>>,
}

impl Engine {
    /// Creates an engine, seeding the time-based generator's random number generator from the
    /// OS.
    pub fn new() -> Result<Self, Error> {
        let core = ChaCha12Core::from_rng(OsRng).map_err(|_| Error::EntropyUnavailable)?;
        let rng = ReseedingRng::new(core, 1024 * 64, OsRng);
        Ok(Self {
            time_gen: sync::Mutex::new(TimeBasedGenerator::new(rng, SystemClock, HardwareNode)),
        })
    }

    /// Generates a new UUID object of the requested version.
    pub fn generate(&self, request: Request<'_>) -> Result<Uuid, Error> {
        match request {
            Request::V1 => self.lock_time_gen().generate_v1(),
            Request::V2 => {
                let local_id = EffectiveUid.local_id();
                self.lock_time_gen().generate_v2(DOMAIN_PERSON, local_id)
            }
            Request::V3 { namespace, name } => name_based::uuid3(namespace, name),
            Request::V4 => random::uuid4_core(&mut OsRng),
            Request::V5 { namespace, name } => name_based::uuid5(namespace, name),
            Request::V6 => self.lock_time_gen().generate_v6(),
            Request::V7 => random::uuid7_core(&mut OsRng, &mut SystemClock),
        }
    }

    fn lock_time_gen(
        &self,
    ) -> sync::MutexGuard<'_, TimeBasedGenerator<EngineRng, SystemClock, HardwareNode>> {
        self.time_gen
            .lock()
            .expect("uuidgen: could not lock time-based generator")
    }
}

/// Returns the process-wide engine, creating one if none exists.
fn global_engine() -> &'static Engine {
    static G: sync::OnceLock<Engine> = sync::OnceLock::new();
    G.get_or_init(|| Engine::new().expect("uuidgen: could not initialize global engine"))
}

/// Generates a UUID of the given version through the process-wide engine.
///
/// This is the untyped front door matching the engine's public contract: `name` is required for
/// versions 3 and 5 and ignored otherwise, and `namespace` defaults to [`ns::DNS`].
///
/// # Examples
///
/// ```rust
/// let uuid = uuidgen::generate(4, None, None)?;
/// assert_eq!(uuid.version(), Some(4));
///
/// let uuid = uuidgen::generate(5, Some(&b"www.example.com"[..]), None)?;
/// assert_eq!(uuid.to_string(), "2ed6657d-e927-568b-95e1-2665a8aea6a2");
/// # Ok::<(), uuidgen::Error>(())
/// ```
pub fn generate(version: u8, name: Option<&[u8]>, namespace: Option<Uuid>) -> Result<Uuid, Error> {
    global_engine().generate(Request::from_args(version, name, namespace)?)
}

/// Generates a UUIDv1 object through the process-wide engine.
///
/// The engine guarantees the process-wide uniqueness of the embedded `(timestamp, clock
/// sequence)` pair across rapid successive calls.
pub fn uuid1() -> Result<Uuid, Error> {
    global_engine().generate(Request::V1)
}

/// Generates a UUIDv2 (DCE Security) object for the person domain and the process's effective
/// user id through the process-wide engine.
pub fn uuid2() -> Result<Uuid, Error> {
    global_engine().generate(Request::V2)
}

/// Generates a UUIDv4 object.
///
/// # Examples
///
/// ```rust
/// let uuid = uuidgen::uuid4()?;
/// println!("{uuid}"); // e.g., "2ca4b2ce-6c13-40d4-bccf-37d222820f6f"
/// # Ok::<(), uuidgen::Error>(())
/// ```
pub fn uuid4() -> Result<Uuid, Error> {
    global_engine().generate(Request::V4)
}

/// Generates a UUIDv6 object through the process-wide engine.
///
/// Unlike [`uuid1`], the byte and string forms of v6 values sort by generation time.
pub fn uuid6() -> Result<Uuid, Error> {
    global_engine().generate(Request::V6)
}

/// Generates a UUIDv7 object.
///
/// # Examples
///
/// ```rust
/// let uuid = uuidgen::uuid7()?;
/// println!("{uuid}"); // e.g., "01809424-3e59-7c05-9219-566f82fff672"
/// println!("{:?}", uuid.as_bytes()); // as 16-byte big-endian array
/// # Ok::<(), uuidgen::Error>(())
/// ```
pub fn uuid7() -> Result<Uuid, Error> {
    global_engine().generate(Request::V7)
}

#[cfg(test)]
mod tests {
    use super::{generate, uuid1, uuid2, uuid4, uuid6, uuid7, Request};
    use crate::{ns, Error, Variant};

    /// Tags every supported version correctly
    #[test]
    fn tags_every_supported_version_correctly() {
        for version in 1..=7u8 {
            let name = matches!(version, 3 | 5).then_some(&b"example.com"[..]);
            let e = generate(version, name, None).unwrap();
            assert_eq!(e.version(), Some(version));
            assert_eq!(e.variant(), Variant::Var10);
        }
    }

    /// Generates canonical v4 string
    #[test]
    fn generates_canonical_v4_string() {
        let pattern = r"^[0-9a-f]{8}-[0-9a-f]{4}-4[0-9a-f]{3}-[89ab][0-9a-f]{3}-[0-9a-f]{12}$";
        let re = regex::Regex::new(pattern).unwrap();
        for _ in 0..1_000 {
            assert!(re.is_match(&generate(4, None, None).unwrap().to_string()));
        }
    }

    /// Generates deterministic name-based identifiers with the DNS default
    #[test]
    fn generates_deterministic_name_based_identifiers_with_the_dns_default() {
        for _ in 0..10 {
            let e = generate(3, Some(&b"www.widgets.com"[..]), None).unwrap();
            assert_eq!(&e.to_string(), "3d813cbb-47fb-32ba-91df-831e1593ac29");
        }

        assert_eq!(
            generate(5, Some(&b"www.example.com"[..]), None),
            generate(5, Some(&b"www.example.com"[..]), Some(ns::DNS)),
        );
        assert_ne!(
            generate(5, Some(&b"www.example.com"[..]), None),
            generate(5, Some(&b"www.example.com"[..]), Some(ns::URL)),
        );
    }

    /// Rejects invalid argument combinations
    #[test]
    fn rejects_invalid_argument_combinations() {
        assert_eq!(generate(3, None, None), Err(Error::MissingName));
        assert_eq!(generate(5, None, None), Err(Error::MissingName));
        assert_eq!(generate(5, Some(&b""[..]), None), Err(Error::MissingName));
        assert_eq!(generate(0, None, None), Err(Error::InvalidVersion(0)));
        assert_eq!(generate(8, None, None), Err(Error::InvalidVersion(8)));
        assert_eq!(generate(99, None, None), Err(Error::InvalidVersion(99)));
    }

    /// Reports the resolved version of requests
    #[test]
    fn reports_the_resolved_version_of_requests() {
        for version in 1..=7u8 {
            let name = matches!(version, 3 | 5).then_some(&b"example.com"[..]);
            let request = Request::from_args(version, name, None).unwrap();
            assert_eq!(request.version(), version);
        }
    }

    /// Embeds the person domain in v2 identifiers
    #[test]
    fn embeds_the_person_domain_in_v2_identifiers() {
        let e = uuid2().unwrap();
        assert_eq!(e.version(), Some(2));
        assert_eq!(e.as_bytes()[9], 0);
    }

    /// Generates no duplicate time-based identifiers under multithreading
    #[test]
    fn generates_no_duplicate_time_based_identifiers_under_multithreading(
    ) -> Result<(), Box<dyn std::error::Error>> {
        use std::{collections::HashSet, sync::mpsc, thread};

        for f in [uuid1, uuid6, uuid7] {
            let (tx, rx) = mpsc::channel();
            for _ in 0..4 {
                let tx = tx.clone();
                thread::Builder::new()
                    .spawn(move || {
                        for _ in 0..2_500 {
                            tx.send(f().unwrap()).unwrap();
                        }
                    })
                    .map_err(|err| format!("failed to spawn thread: {:?}", err))?;
            }
            drop(tx);

            let mut s = HashSet::new();
            while let Ok(e) = rx.recv() {
                s.insert(e);
            }

            assert_eq!(s.len(), 4 * 2_500);
        }
        Ok(())
    }

    /// Sorts v6 and v7 string forms across distinct timestamps
    #[test]
    fn sorts_v6_and_v7_string_forms_across_distinct_timestamps() {
        use std::{thread, time::Duration};

        for f in [uuid6, uuid7] {
            let a = f().unwrap();
            thread::sleep(Duration::from_millis(3));
            let b = f().unwrap();
            assert!(a.to_string() < b.to_string());
        }
    }

    /// Sets constant bits and random bits properly in v4
    #[test]
    fn sets_constant_bits_and_random_bits_properly_in_v4() {
        const N_SAMPLES: usize = 100_000;
        let samples: Vec<String> = (0..N_SAMPLES)
            .map(|_| uuid4().unwrap().to_string())
            .collect();

        // count '1' of each bit
        let mut bins = [0u32; 128];
        for e in &samples {
            let mut it = bins.iter_mut().rev();
            for c in e.chars().rev() {
                if let Some(mut num) = c.to_digit(16) {
                    for _ in 0..4 {
                        *it.next().unwrap() += num & 1;
                        num >>= 1;
                    }
                }
            }
        }

        // test if constant bits are all set to 1 or 0
        let n = N_SAMPLES as u32;
        assert_eq!(bins[48], 0, "version bit 48");
        assert_eq!(bins[49], n, "version bit 49");
        assert_eq!(bins[50], 0, "version bit 50");
        assert_eq!(bins[51], 0, "version bit 51");
        assert_eq!(bins[64], n, "variant bit 64");
        assert_eq!(bins[65], 0, "variant bit 65");

        // test if random bits are set to 1 at ~50% probability
        // set margin based on binom dist 99.999% confidence interval
        let margin = 4.417173 * (0.5 * 0.5 / N_SAMPLES as f64).sqrt();
        for i in (0..48).chain(52..64).chain(66..128) {
            let p = bins[i] as f64 / N_SAMPLES as f64;
            assert!((p - 0.5).abs() < margin, "random bit {i}: {p}");
        }
    }
}
