//! Password generation.

use std::fmt;

use log::debug;
use zeroize::Zeroize;

use super::catalog::MAX_LENGTH;
use super::request::GenerationRequest;
use crate::entropy::RandomSource;
use crate::error::ConfigurationError;

/// A generated password. The buffer is wiped on drop.
#[derive(Clone, PartialEq, Eq)]
pub struct Password(String);

impl Password {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Length in Unicode scalar values.
    pub fn char_count(&self) -> usize {
        self.0.chars().count()
    }
}

impl Drop for Password {
    fn drop(&mut self) {
        self.0.zeroize();
    }
}

impl fmt::Debug for Password {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Password").field(&"<redacted>").finish()
    }
}

/// Draw `length` code points uniformly, with replacement, from `pool`.
///
/// The pool is validated up front: a non-positive or oversized length, an
/// empty pool or a value that is not a Unicode scalar value yields an error
/// and no output.
pub fn generate<R: RandomSource + ?Sized>(
    length: i64,
    pool: &[u32],
    rng: &mut R,
) -> Result<Password, ConfigurationError> {
    let (count, chars) = validate(length, pool)?;
    Ok(draw(count, &chars, rng))
}

/// Check a length and pool once, returning the draw count and decoded pool.
fn validate(length: i64, pool: &[u32]) -> Result<(usize, Vec<char>), ConfigurationError> {
    let count = match usize::try_from(length) {
        Ok(0) | Err(_) => return Err(ConfigurationError::NonPositiveLength(length)),
        Ok(n) if n > MAX_LENGTH => return Err(ConfigurationError::LengthTooLarge(length)),
        Ok(n) => n,
    };
    if pool.is_empty() {
        return Err(ConfigurationError::EmptyPool);
    }
    let chars = pool
        .iter()
        .map(|&cp| char::from_u32(cp).ok_or(ConfigurationError::InvalidCodePoint(cp)))
        .collect::<Result<Vec<char>, _>>()?;
    Ok((count, chars))
}

fn draw<R: RandomSource + ?Sized>(count: usize, chars: &[char], rng: &mut R) -> Password {
    let mut out = String::with_capacity(count);
    for _ in 0..count {
        out.push(chars[rng.below(chars.len())]);
    }
    Password(out)
}

/// Generator bound to one randomness source.
pub struct PasswordGenerator<R> {
    rng: R,
}

impl<R: RandomSource> PasswordGenerator<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }

    pub fn generate(&mut self, request: &GenerationRequest) -> Result<Password, ConfigurationError> {
        let pool = request.pool();
        debug!("generating length {} from pool of {}", request.length, pool.len());
        generate(request.length, &pool, &mut self.rng)
    }

    /// Generate `count` passwords, handing each to `sink` as soon as it is
    /// drawn. The request is validated before the first draw, even when
    /// `count` is zero.
    pub fn for_each<E, F>(
        &mut self,
        request: &GenerationRequest,
        count: usize,
        mut sink: F,
    ) -> Result<(), E>
    where
        E: From<ConfigurationError>,
        F: FnMut(Password) -> Result<(), E>,
    {
        let (length, chars) = validate(request.length, &request.pool())?;
        debug!(
            "generating {count} password(s) of length {length} from pool of {}",
            chars.len()
        );
        for _ in 0..count {
            sink(draw(length, &chars, &mut self.rng))?;
        }
        Ok(())
    }

    /// Generate `count` independent passwords from one request.
    pub fn generate_batch(
        &mut self,
        request: &GenerationRequest,
        count: usize,
    ) -> Result<Vec<Password>, ConfigurationError> {
        let mut batch = Vec::with_capacity(count.min(1024));
        self.for_each(request, count, |pass| {
            batch.push(pass);
            Ok::<_, ConfigurationError>(())
        })?;
        Ok(batch)
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use rand::SeedableRng;
    use rand::rngs::StdRng;

    use super::*;
    use crate::pass::CharacterClass::{self, *};

    fn seeded() -> StdRng {
        StdRng::seed_from_u64(0x5eed)
    }

    /// Replays fixed indices.
    struct Script(Vec<usize>);

    impl RandomSource for Script {
        fn below(&mut self, n: usize) -> usize {
            self.0.remove(0) % n
        }
    }

    fn pool_of(classes: &[CharacterClass]) -> Vec<u32> {
        GenerationRequest::new(1, classes.iter().copied()).pool()
    }

    #[test]
    fn output_has_requested_length() {
        let pool = pool_of(&CharacterClass::ALL);
        let mut rng = seeded();
        for n in [1, 6, 16, 128, 2048] {
            let pass = generate(n, &pool, &mut rng).unwrap();
            assert_eq!(pass.char_count(), n as usize);
        }
    }

    #[test]
    fn output_stays_inside_pool() {
        let pool = pool_of(&[Symbols, Uppercase, Emoji]);
        let allowed: HashSet<u32> = pool.iter().copied().collect();
        let pass = generate(512, &pool, &mut seeded()).unwrap();
        assert!(pass.as_str().chars().all(|c| allowed.contains(&(c as u32))));
    }

    #[test]
    fn empty_pool_is_rejected() {
        for n in [-1, 0, 1, 16, 2048] {
            assert!(generate(n, &[], &mut seeded()).is_err());
        }
        assert_eq!(
            generate(16, &[], &mut seeded()),
            Err(ConfigurationError::EmptyPool)
        );
    }

    #[test]
    fn non_positive_length_is_rejected() {
        let pool = pool_of(&[Lowercase]);
        assert_eq!(
            generate(0, &pool, &mut seeded()),
            Err(ConfigurationError::NonPositiveLength(0))
        );
        assert_eq!(
            generate(-1, &pool, &mut seeded()),
            Err(ConfigurationError::NonPositiveLength(-1))
        );
    }

    #[test]
    fn surrogates_are_rejected_before_sampling() {
        let mut script = Script(vec![]);
        assert_eq!(
            generate(4, &[97, 0xD800], &mut script),
            Err(ConfigurationError::InvalidCodePoint(0xD800))
        );
    }

    #[test]
    fn draws_are_concatenated_in_order() {
        let pool = [0x61, 0x1F600, 0x7A];
        let mut script = Script(vec![2, 0, 1, 1]);
        let pass = generate(4, &pool, &mut script).unwrap();
        assert_eq!(pass.as_str(), "za\u{1F600}\u{1F600}");
    }

    #[test]
    fn draws_are_roughly_uniform() {
        let pool = pool_of(&[Numbers]);
        let k = pool.len();
        let draws = 100_000usize;
        let pass = generate(draws as i64, &pool, &mut seeded()).unwrap();

        let mut counts = vec![0usize; k];
        for c in pass.as_str().chars() {
            counts[c as usize - '0' as usize] += 1;
        }

        let expected = draws as f64 / k as f64;
        let chi_square: f64 = counts
            .iter()
            .map(|&o| (o as f64 - expected).powi(2) / expected)
            .sum();
        // 9 degrees of freedom, p = 0.001
        assert!(chi_square < 27.88, "chi-square {chi_square}");
        for &o in &counts {
            let freq = o as f64 / draws as f64;
            assert!((freq - 0.1).abs() < 0.01, "frequency {freq}");
        }
    }

    #[test]
    fn lowercase_sixteen() {
        let pass = generate(16, &pool_of(&[Lowercase]), &mut seeded()).unwrap();
        assert_eq!(pass.char_count(), 16);
        assert!(pass.as_str().chars().all(|c| c.is_ascii_lowercase()));
    }

    #[test]
    fn digits_at_maximum_catalog_length() {
        let pass = generate(2048, &pool_of(&[Numbers]), &mut seeded()).unwrap();
        assert_eq!(pass.char_count(), 2048);
        assert!(pass.as_str().chars().all(|c| c.is_ascii_digit()));
    }

    #[test]
    fn no_classes_enabled() {
        let mut generator = PasswordGenerator::new(seeded());
        let err = generator
            .generate(&GenerationRequest::new(16, []))
            .unwrap_err();
        assert_eq!(err, ConfigurationError::EmptyPool);
        assert_eq!(err.to_string(), "Please select at least 1 option.");
    }

    #[test]
    fn four_base_classes_short_password() {
        let pool = pool_of(&[Symbols, Numbers, Lowercase, Uppercase]);
        assert_eq!(pool.len(), 84);
        let pass = generate(6, &pool, &mut seeded()).unwrap();
        assert_eq!(pass.char_count(), 6);
        assert!(pass.as_str().chars().all(|c| c.is_ascii_graphic()));
    }

    #[test]
    fn emoji_only_counts_scalar_values() {
        let emoji: HashSet<u32> = Emoji.code_points().iter().copied().collect();
        let mut rng = seeded();
        for _ in 0..50 {
            let pass = generate(5, &pool_of(&[Emoji]), &mut rng).unwrap();
            assert_eq!(pass.char_count(), 5);
            assert!(pass.as_str().chars().all(|c| emoji.contains(&(c as u32))));
            let units = pass.as_str().encode_utf16().count();
            let wide = pass.as_str().chars().filter(|&c| c as u32 > 0xFFFF).count();
            assert_eq!(units, 5 + wide);
        }
    }

    #[test]
    fn seeded_generators_repeat() {
        let req = GenerationRequest::default();
        let a = PasswordGenerator::new(seeded()).generate(&req).unwrap();
        let b = PasswordGenerator::new(seeded()).generate(&req).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn successive_calls_differ() {
        let mut generator = PasswordGenerator::new(seeded());
        let req = GenerationRequest::new(32, CharacterClass::ALL);
        let a = generator.generate(&req).unwrap();
        let b = generator.generate(&req).unwrap();
        assert_ne!(a, b);
    }

    #[test]
    fn batch() {
        let mut generator = PasswordGenerator::new(seeded());
        let req = GenerationRequest::default();
        let batch = generator.generate_batch(&req, 5).unwrap();
        assert_eq!(batch.len(), 5);
        assert!(batch.iter().all(|p| p.char_count() == 16));
        assert!(generator.generate_batch(&GenerationRequest::new(0, []), 3).is_err());
        assert!(generator.generate_batch(&req, 0).unwrap().is_empty());
    }

    #[test]
    fn empty_batch_still_validates() {
        let mut generator = PasswordGenerator::new(seeded());
        assert_eq!(
            generator.generate_batch(&GenerationRequest::new(0, []), 0),
            Err(ConfigurationError::NonPositiveLength(0))
        );
        assert_eq!(
            generator.generate_batch(&GenerationRequest::new(16, []), 0),
            Err(ConfigurationError::EmptyPool)
        );
    }

    #[test]
    fn for_each_streams_in_draw_order() {
        let req = GenerationRequest::new(12, [Lowercase]);
        let mut streamed = Vec::new();
        PasswordGenerator::new(seeded())
            .for_each(&req, 3, |pass| {
                streamed.push(pass);
                Ok::<_, ConfigurationError>(())
            })
            .unwrap();
        let batch = PasswordGenerator::new(seeded()).generate_batch(&req, 3).unwrap();
        assert_eq!(streamed, batch);
    }

    #[test]
    fn sink_errors_stop_the_stream() {
        let req = GenerationRequest::default();
        let mut seen = 0;
        let result = PasswordGenerator::new(seeded()).for_each(&req, 10, |_| {
            seen += 1;
            if seen == 2 {
                Err(crate::error::Error::Clipboard("full".into()))
            } else {
                Ok(())
            }
        });
        assert!(result.is_err());
        assert_eq!(seen, 2);
    }

    #[test]
    fn oversized_length_is_rejected_without_allocating() {
        let pool = pool_of(&[Lowercase]);
        for n in [MAX_LENGTH as i64 + 1, 100_000_000_000_000_000, i64::MAX] {
            assert_eq!(
                generate(n, &pool, &mut seeded()),
                Err(ConfigurationError::LengthTooLarge(n))
            );
        }
        let pass = generate(MAX_LENGTH as i64, &pool, &mut seeded()).unwrap();
        assert_eq!(pass.char_count(), MAX_LENGTH);
    }

    #[test]
    fn debug_output_hides_the_password() {
        let pass = generate(8, &pool_of(&[Lowercase]), &mut seeded()).unwrap();
        assert_eq!(format!("{pass:?}"), "Password(\"<redacted>\")");
    }
}
