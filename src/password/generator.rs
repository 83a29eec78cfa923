use log::debug;
use rand::{
    rngs::{OsRng, StdRng},
    SeedableRng,
};

use super::{random::RandomSource, GeneratedPassword, GenerationRequest};
use crate::error::PasswordError;

/// Generate a password for `request`, drawing every character from `rng`.
///
/// The request is validated again here, so a caller that skipped the form
/// still gets a typed error instead of a malformed password.
pub fn generate<R>(
    request: &GenerationRequest,
    rng: &mut R,
) -> Result<GeneratedPassword, PasswordError>
where
    R: RandomSource + ?Sized,
{
    request.validate()?;

    let alphabet = request.classes.alphabet();
    debug!(
        "generating {} characters from a {} character alphabet",
        request.length,
        alphabet.len()
    );

    // reduced again so a source that ignores its bound cannot index past the end
    let password: String = (0..request.length)
        .map(|_| alphabet[rng.next_index(alphabet.len()) % alphabet.len()])
        .collect();

    Ok(GeneratedPassword::new(password))
}

/// Password generator that owns its random source
pub struct Generator {
    rng: Box<dyn RandomSource>,
}

impl Generator {
    pub fn new(rng: Box<dyn RandomSource>) -> Self {
        Self { rng }
    }

    /// Generator backed by the operating system entropy source
    pub fn os() -> Self {
        Self::new(Box::new(OsRng::default()))
    }

    /// Reproducible generator, the same seed always yields the same passwords
    pub fn seeded(seed: u64) -> Self {
        Self::new(Box::new(StdRng::seed_from_u64(seed)))
    }

    pub fn password(&mut self, request: &GenerationRequest) -> Result<GeneratedPassword, PasswordError> {
        generate(request, self.rng.as_mut())
    }
}

impl Default for Generator {
    fn default() -> Self {
        Self::os()
    }
}

#[cfg(test)]
mod tests {
    use rand::rngs::mock::StepRng;

    use super::*;
    use crate::{
        error::LengthError,
        password::{CharacterClass, ClassSet, RandomSource},
    };

    fn request(length: usize, classes: &[CharacterClass]) -> GenerationRequest {
        GenerationRequest::new(length, classes.iter().copied().collect())
    }

    #[test]
    fn long_random() {
        let length = 16;
        let password = Generator::os()
            .password(&request(length, &CharacterClass::ALL))
            .unwrap();

        assert_eq!(password.chars().count(), length);
    }

    #[test]
    fn short_random() {
        let length = 4;
        let password = Generator::os()
            .password(&request(length, &[CharacterClass::Symbol]))
            .unwrap();

        assert_eq!(password.len(), length);
        assert!(password
            .chars()
            .all(|c| CharacterClass::Symbol.alphabet().contains(c)));
    }

    #[test]
    fn stays_in_alphabet() {
        let classes = [CharacterClass::Uppercase, CharacterClass::Digit];
        let alphabet = classes.iter().copied().collect::<ClassSet>().alphabet();
        let mut generator = Generator::seeded(1);

        for length in 4..=16 {
            let password = generator.password(&request(length, &classes)).unwrap();
            assert_eq!(password.len(), length);
            assert!(password.chars().all(|c| alphabet.contains(&c)));
        }
    }

    #[test]
    fn same_seed_same_password() {
        let request = request(12, &CharacterClass::ALL);

        let first = Generator::seeded(42).password(&request).unwrap();
        let second = Generator::seeded(42).password(&request).unwrap();

        assert_eq!(first, second);
    }

    #[test]
    fn zero_source_repeats_first_char() {
        let mut rng = StepRng::new(0, 0);
        let request = request(8, &[CharacterClass::Lowercase, CharacterClass::Uppercase]);

        let password = generate(&request, &mut rng).unwrap();

        assert_eq!(password.as_str(), "AAAAAAAA");
    }

    struct AtBound;

    impl RandomSource for AtBound {
        fn next_index(&mut self, bound: usize) -> usize {
            bound
        }
    }

    #[test]
    fn out_of_range_source_wraps() {
        let password = generate(&request(4, &CharacterClass::ALL), &mut AtBound).unwrap();

        assert_eq!(password.as_str(), "AAAA");
    }

    #[test]
    fn rejects_bad_length() {
        let mut rng = StepRng::new(0, 1);

        assert_eq!(
            generate(&request(3, &[CharacterClass::Lowercase]), &mut rng),
            Err(PasswordError::InvalidLength(LengthError::TooShort(3)))
        );
        assert_eq!(
            generate(&request(17, &[CharacterClass::Lowercase]), &mut rng),
            Err(PasswordError::InvalidLength(LengthError::TooLong("17".into())))
        );
    }

    #[test]
    fn rejects_empty_classes() {
        let mut rng = StepRng::new(0, 1);

        assert_eq!(
            generate(&request(10, &[]), &mut rng),
            Err(PasswordError::NoClassSelected)
        );
    }
}
