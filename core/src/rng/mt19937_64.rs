//! MT19937-64 random number generator
//!
//! 64-bit variant of the Mersenne Twister PRNG (Nishimura/Matsumoto),
//! period 2^19937-1, with 64-bit seeds and 64-bit output.
//!
//! # Algorithm
//!
//! The generator keeps a 312-word state array and a cursor. Words are
//! consumed one at a time through a tempering transform; when the array is
//! exhausted the whole state is regenerated in place ("twist") before the
//! next value is returned. Seeding fills the array from a single word via
//! a linear congruential recurrence, or from an arbitrary-length key for
//! callers that want more than 64 bits of entropy.
//!
//! # Determinism
//!
//! Same seed → same sequence of random numbers, indefinitely. This is the
//! core contract: reproducing a run only requires reproducing the seed.
//!
//! # Security
//!
//! NOT cryptographically secure. The output is fully predictable after
//! observing enough values. Never use this generator for keys, tokens,
//! or anything else an adversary must not guess.

use rand_core::{impls, Error, RngCore, SeedableRng};

/// Number of 64-bit words in the state array
pub(crate) const NN: usize = 312;

/// Mid-point offset of the twist recurrence
const MM: usize = 156;

/// Twist matrix constant
const MATRIX_A: u64 = 0xB502_6F5A_A966_19E9;

/// Mask selecting the 33 high bits of a state word
const UPPER_MASK: u64 = 0xFFFF_FFFF_8000_0000;

/// Mask selecting the 31 low bits of a state word
const LOWER_MASK: u64 = 0x7FFF_FFFF;

/// Seed applied implicitly when an unseeded generator produces its
/// first value
const DEFAULT_SEED: i64 = 5489;

/// Deterministic random number generator using MT19937-64
///
/// A plain value type: no internal synchronization, no shared ownership.
/// Cloning duplicates the stream: a clone produces the identical future
/// sequence until either copy is advanced independently. Callers that need
/// parallel streams should construct one generator per worker and seed
/// each differently.
///
/// An unseeded generator seeds itself with a fixed default constant (5489)
/// on first use, so skipping [`seed`](Mt64Generator::seed) still yields
/// reproducible output.
///
/// # Example
/// ```
/// use mt19937_core_rs::Mt64Generator;
///
/// let mut rng = Mt64Generator::new(5489);
/// assert_eq!(rng.next_u64(), 14514284786278117030);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Mt64Generator {
    /// State array (312 x 64-bit words)
    pub(crate) state: [u64; NN],
    /// Cursor into `state`, in [0, NN]; NN means "exhausted, twist before
    /// the next read"
    pub(crate) index: usize,
    /// Whether the state array has been populated by seeding or a
    /// restored snapshot
    pub(crate) init: bool,
}

impl Default for Mt64Generator {
    /// Construct an uninitialized generator (seeds itself with the default
    /// constant on first use)
    fn default() -> Self {
        Self {
            state: [0; NN],
            index: NN,
            init: false,
        }
    }
}

impl Mt64Generator {
    /// Create a new generator seeded with the given value
    ///
    /// # Example
    /// ```
    /// use mt19937_core_rs::Mt64Generator;
    ///
    /// let mut a = Mt64Generator::new(12345);
    /// let mut b = Mt64Generator::new(12345);
    /// assert_eq!(a.next_u64(), b.next_u64());
    /// ```
    pub fn new(seed: i64) -> Self {
        let mut rng = Self::default();
        rng.seed(seed);
        rng
    }

    /// Reset the generator to a specific seed
    ///
    /// Fills all 312 state words from the single seed value and leaves the
    /// cursor at the exhausted position, so the first read performs a
    /// twist. All arithmetic wraps modulo 2^64.
    pub fn seed(&mut self, seed: i64) {
        self.state[0] = seed as u64;
        for i in 1..NN {
            self.state[i] = 6_364_136_223_846_793_005u64
                .wrapping_mul(self.state[i - 1] ^ (self.state[i - 1] >> 62))
                .wrapping_add(i as u64);
        }
        self.index = NN;
        self.init = true;
    }

    /// Reset the generator from a key of arbitrary length
    ///
    /// Use this form when more than 64 bits of seed entropy are desired.
    /// A given key always produces the same sequence, and sequences for
    /// different keys are decorrelated even when the keys share a prefix.
    ///
    /// # Panics
    /// Panics if `key` is empty.
    ///
    /// # Example
    /// ```
    /// use mt19937_core_rs::Mt64Generator;
    ///
    /// let mut rng = Mt64Generator::default();
    /// rng.seed_from_slice(&[0x12345, 0x23456, 0x34567, 0x45678]);
    /// assert_eq!(rng.next_u64(), 7266447313870364031);
    /// ```
    pub fn seed_from_slice(&mut self, key: &[u64]) {
        assert!(!key.is_empty(), "seed key must be non-empty");

        self.seed(19650218);

        let mut i = 1usize;
        let mut j = 0usize;
        for _ in 0..NN.max(key.len()) {
            self.state[i] = (self.state[i]
                ^ (self.state[i - 1] ^ (self.state[i - 1] >> 62))
                    .wrapping_mul(3_935_559_000_370_003_845))
            .wrapping_add(key[j])
            .wrapping_add(j as u64);
            i += 1;
            j += 1;
            if i >= NN {
                self.state[0] = self.state[NN - 1];
                i = 1;
            }
            if j >= key.len() {
                j = 0;
            }
        }
        for _ in 0..NN - 1 {
            self.state[i] = (self.state[i]
                ^ (self.state[i - 1] ^ (self.state[i - 1] >> 62))
                    .wrapping_mul(2_862_933_555_777_941_757))
            .wrapping_sub(i as u64);
            i += 1;
            if i >= NN {
                self.state[0] = self.state[NN - 1];
                i = 1;
            }
        }

        // Forcing the top bit keeps the state non-zero for any key.
        self.state[0] = 1 << 63;
    }

    /// Generate the next random u64 value
    ///
    /// Seeds with the default constant first if the generator has never
    /// been seeded. Twists when the state array is exhausted, then tempers
    /// and returns the word at the cursor.
    ///
    /// # Example
    /// ```
    /// use mt19937_core_rs::Mt64Generator;
    ///
    /// // Unseeded generators fall back to the well-known default seed.
    /// let mut rng = Mt64Generator::default();
    /// assert_eq!(rng.next_u64(), Mt64Generator::new(5489).next_u64());
    /// ```
    pub fn next_u64(&mut self) -> u64 {
        if !self.init {
            self.seed(DEFAULT_SEED);
        }

        if self.index >= NN {
            self.twist();
        }

        let mut x = self.state[self.index];
        self.index += 1;

        x ^= (x >> 29) & 0x5555_5555_5555_5555;
        x ^= (x << 17) & 0x71D6_7FFF_EDA6_0000;
        x ^= (x << 37) & 0xFFF7_EEE0_0000_0000;
        x ^= x >> 43;

        x
    }

    /// Generate a uniformly random integer in [0, 2^63)
    ///
    /// # Example
    /// ```
    /// use mt19937_core_rs::Mt64Generator;
    ///
    /// let mut rng = Mt64Generator::new(42);
    /// assert!(rng.next_i63() >= 0);
    /// ```
    pub fn next_i63(&mut self) -> i64 {
        (self.next_u64() >> 1) as i64
    }

    /// Whether the generator has been seeded (explicitly, implicitly on
    /// first use, or by restoring a snapshot)
    pub fn is_initialized(&self) -> bool {
        self.init
    }

    /// Regenerate the full state array in place and reset the cursor.
    ///
    /// One sequential pass over the 312-slot ring; each slot combines the
    /// high bits of the current word, the low bits of the next, and the
    /// partner word MM slots ahead. The loop is split into three linear
    /// ranges so the wrapping partner/next indices never need a modulo.
    pub(crate) fn twist(&mut self) {
        let mag01 = [0, MATRIX_A];

        let mut i = 0;
        while i < NN - MM {
            let x = (self.state[i] & UPPER_MASK) | (self.state[i + 1] & LOWER_MASK);
            self.state[i] = self.state[i + MM] ^ (x >> 1) ^ mag01[(x & 1) as usize];
            i += 1;
        }
        while i < NN - 1 {
            let x = (self.state[i] & UPPER_MASK) | (self.state[i + 1] & LOWER_MASK);
            self.state[i] = self.state[i + MM - NN] ^ (x >> 1) ^ mag01[(x & 1) as usize];
            i += 1;
        }
        let x = (self.state[NN - 1] & UPPER_MASK) | (self.state[0] & LOWER_MASK);
        self.state[NN - 1] = self.state[MM - 1] ^ (x >> 1) ^ mag01[(x & 1) as usize];

        self.index = 0;
    }
}

impl RngCore for Mt64Generator {
    fn next_u32(&mut self) -> u32 {
        Mt64Generator::next_u64(self) as u32
    }

    fn next_u64(&mut self) -> u64 {
        Mt64Generator::next_u64(self)
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        impls::fill_bytes_via_next(self, dest);
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), Error> {
        self.fill_bytes(dest);
        Ok(())
    }
}

impl SeedableRng for Mt64Generator {
    type Seed = [u8; 8];

    fn from_seed(seed: Self::Seed) -> Self {
        Self::new(i64::from_le_bytes(seed))
    }

    fn seed_from_u64(state: u64) -> Self {
        Self::new(state as i64)
    }
}
