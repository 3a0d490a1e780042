use rand::{rngs::StdRng, seq::SliceRandom, Rng, SeedableRng};

use crate::constants::ALPHANUMERIC_SYMBOLS;

fn ordered<T: PartialOrd>(a: T, b: T) -> (T, T) {
    if a <= b {
        (a, b)
    } else {
        (b, a)
    }
}

fn int_with<R: Rng + ?Sized>(rng: &mut R, min: i64, max: i64) -> i64 {
    let (low, high) = ordered(min, max);
    rng.gen_range(low..=high)
}

fn float_with<R: Rng + ?Sized>(rng: &mut R, min: f64, max: f64) -> f64 {
    if !min.is_finite() || !max.is_finite() {
        return min;
    }
    let (low, high) = ordered(min, max);
    if low == high {
        return low;
    }

    // interpolate instead of `high - low`, which overflows for the full f64 range
    let unit: f64 = rng.gen();
    let value = low * (1.0 - unit) + high * unit;
    if value < high {
        value.max(low)
    } else {
        low
    }
}

fn string_with<R: Rng + ?Sized>(rng: &mut R, length: usize, symbols: &str) -> String {
    let symbols: Vec<char> = symbols.chars().collect();
    (0..length).filter_map(|_| symbols.choose(rng)).collect()
}

fn bytes_with<R: Rng + ?Sized>(rng: &mut R, length: usize) -> Vec<u8> {
    let mut bytes = vec![0u8; length];
    rng.fill(&mut bytes[..]);
    bytes
}

/// Returns a random integer in `[min, max]`. Reversed bounds are swapped.
///
/// ```
/// use assist_common::utils::random::random_int;
///
/// let value = random_int(10, -10);
/// assert!((-10..=10).contains(&value));
/// ```
pub fn random_int(min: i64, max: i64) -> i64 {
    int_with(&mut rand::thread_rng(), min, max)
}

/// Returns a random float in `[min, max)`, or `min` when both bounds are equal.
///
/// Reversed bounds are swapped. When either bound is NaN or infinite, `min` is returned
/// unchanged.
pub fn random_float(min: f64, max: f64) -> f64 {
    float_with(&mut rand::thread_rng(), min, max)
}

/// Returns a random alphanumeric string of `length` characters.
pub fn random_string(length: usize) -> String {
    random_string_from(length, ALPHANUMERIC_SYMBOLS)
}

/// Returns a random string of `length` characters picked from `symbols`.
///
/// An empty symbol set yields an empty string.
pub fn random_string_from(length: usize, symbols: &str) -> String {
    string_with(&mut rand::thread_rng(), length, symbols)
}

/// Returns `length` random bytes.
pub fn random_bytes(length: usize) -> Vec<u8> {
    bytes_with(&mut rand::thread_rng(), length)
}

/// A random generator that can be seeded for reproducible sequences.
#[derive(Debug, Clone)]
pub struct Generator {
    rng: StdRng,
}

impl Generator {
    /// Creates a generator whose sequence is fully determined by `seed`.
    pub fn from_seed(seed: u64) -> Self {
        Self { rng: StdRng::seed_from_u64(seed) }
    }

    /// Creates a generator seeded from the operating system.
    pub fn from_entropy() -> Self {
        Self { rng: StdRng::from_entropy() }
    }

    /// Creates a seeded generator, or an entropy seeded one when `seed` is 0.
    pub fn from_optional_seed(seed: u64) -> Self {
        if seed == 0 {
            Self::from_entropy()
        } else {
            Self::from_seed(seed)
        }
    }

    /// Returns a random integer in `[min, max]`.
    pub fn int(&mut self, min: i64, max: i64) -> i64 {
        int_with(&mut self.rng, min, max)
    }

    /// Returns a random float in `[min, max)`. See [`random_float`] for the edge cases.
    pub fn float(&mut self, min: f64, max: f64) -> f64 {
        float_with(&mut self.rng, min, max)
    }

    /// Returns a random string of `length` characters picked from `symbols`.
    pub fn string_from(&mut self, length: usize, symbols: &str) -> String {
        string_with(&mut self.rng, length, symbols)
    }

    /// Returns a random alphanumeric string of `length` characters.
    pub fn string(&mut self, length: usize) -> String {
        self.string_from(length, ALPHANUMERIC_SYMBOLS)
    }

    /// Returns `length` random bytes.
    pub fn bytes(&mut self, length: usize) -> Vec<u8> {
        bytes_with(&mut self.rng, length)
    }
}

#[cfg(test)]
mod tests {
    use crate::utils::random::*;

    #[test]
    fn test_random_int_bounds() {
        for _ in 0..1000 {
            let value = random_int(-5, 5);
            assert!((-5..=5).contains(&value));
        }
        assert_eq!(random_int(7, 7), 7);
        assert!((0..=3).contains(&random_int(3, 0)));
    }

    #[test]
    fn test_random_float_bounds() {
        for _ in 0..1000 {
            let value = random_float(1.5, -1.5);
            assert!((-1.5..1.5).contains(&value));
        }
        assert_eq!(random_float(2.0, 2.0), 2.0);
    }

    #[test]
    fn test_random_float_full_range() {
        for _ in 0..1000 {
            let value = random_float(f64::MIN, f64::MAX);
            assert!(value.is_finite());
            assert!((f64::MIN..f64::MAX).contains(&value));
        }

        let mut generator = Generator::from_seed(3);
        assert!(generator.float(f64::MAX, f64::MIN).is_finite());
    }

    #[test]
    fn test_random_float_non_finite_bounds() {
        assert_eq!(random_float(f64::NEG_INFINITY, 1.0), f64::NEG_INFINITY);
        assert_eq!(random_float(0.5, f64::INFINITY), 0.5);
        assert!(random_float(f64::NAN, 1.0).is_nan());
        assert_eq!(random_float(1.0, f64::NAN), 1.0);
    }

    #[test]
    fn test_random_string() {
        let s = random_string(64);
        assert_eq!(s.len(), 64);
        assert!(s.chars().all(|c| c.is_ascii_alphanumeric()));

        let s = random_string_from(32, "ab");
        assert_eq!(s.len(), 32);
        assert!(s.chars().all(|c| c == 'a' || c == 'b'));

        assert_eq!(random_string_from(10, ""), "");
        assert_eq!(random_string(0), "");
    }

    #[test]
    fn test_random_bytes_length() {
        assert_eq!(random_bytes(128).len(), 128);
        assert!(random_bytes(0).is_empty());
    }

    #[test]
    fn test_seeded_generator_is_deterministic() {
        let mut a = Generator::from_seed(42);
        let mut b = Generator::from_seed(42);
        assert_eq!(a.int(0, 1_000_000), b.int(0, 1_000_000));
        assert_eq!(a.string(16), b.string(16));
        assert_eq!(a.bytes(8), b.bytes(8));
        assert_eq!(a.float(0.0, 1.0).to_bits(), b.float(0.0, 1.0).to_bits());
    }

    #[test]
    fn test_generator_from_optional_seed() {
        let mut seeded = Generator::from_optional_seed(7);
        let mut reference = Generator::from_seed(7);
        assert_eq!(seeded.string_from(20, "xyz"), reference.string_from(20, "xyz"));

        let mut entropy = Generator::from_optional_seed(0);
        assert!((1..=6).contains(&entropy.int(1, 6)));
    }
}
