use log::{debug, info};

use crate::{
    error::PasswordError,
    password::{
        generate, parse_length, CharacterClass, ClassSet, GeneratedPassword, GenerationRequest,
        RandomSource,
    },
};

/// State of the password form: what the user typed, which classes are
/// ticked, and the last password shown.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PasswordForm {
    length: String,
    classes: ClassSet,
    result: Option<GeneratedPassword>,
}

impl Default for PasswordForm {
    fn default() -> Self {
        Self {
            length: String::new(),
            classes: ClassSet::from(CharacterClass::Lowercase),
            result: None,
        }
    }
}

impl PasswordForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn length(&self) -> &str {
        &self.length
    }

    pub fn set_length<S: Into<String>>(&mut self, input: S) {
        self.length = input.into();
    }

    pub fn classes(&self) -> ClassSet {
        self.classes
    }

    pub fn set_classes(&mut self, classes: ClassSet) {
        self.classes = classes;
    }

    pub fn set_class(&mut self, class: CharacterClass, enabled: bool) {
        self.classes.set(class, enabled);
    }

    pub fn toggle(&mut self, class: CharacterClass) {
        self.classes.toggle(class);
    }

    /// Turn the current input into a request, field by field
    pub fn validate(&self) -> Result<GenerationRequest, PasswordError> {
        let length = parse_length(&self.length)?;
        let request = GenerationRequest::new(length, self.classes);
        request.validate()?;

        Ok(request)
    }

    /// Validate and generate. A rejected submission keeps the previous result.
    pub fn submit<R>(&mut self, rng: &mut R) -> Result<&GeneratedPassword, PasswordError>
    where
        R: RandomSource + ?Sized,
    {
        let request = match self.validate() {
            Ok(request) => request,
            Err(error) => {
                debug!("form rejected: {}", error);
                return Err(error);
            }
        };

        let password = generate(&request, rng)?;
        info!(
            "generated a {} character password from {} class(es)",
            request.length,
            request.classes.len()
        );

        let password: &GeneratedPassword = self.result.insert(password);
        Ok(password)
    }

    /// Back to the initial state: no length, lowercase only, nothing shown
    pub fn reset(&mut self) {
        debug!("form reset");
        *self = Self::default();
    }

    pub fn result(&self) -> Option<&GeneratedPassword> {
        self.result.as_ref()
    }

    pub fn is_generated(&self) -> bool {
        self.result.is_some()
    }
}

#[cfg(test)]
mod tests {
    use rand::{rngs::StdRng, SeedableRng};

    use super::*;
    use crate::error::LengthError;

    #[test]
    fn starts_with_lowercase() {
        let form = PasswordForm::new();

        assert_eq!(form.length(), "");
        assert_eq!(form.classes(), ClassSet::from(CharacterClass::Lowercase));
        assert!(!form.is_generated());
    }

    #[test]
    fn submit_generates() {
        let mut rng = StdRng::seed_from_u64(3);
        let mut form = PasswordForm::new();
        form.set_length("10");
        form.set_class(CharacterClass::Digit, true);

        let password = form.submit(&mut rng).unwrap().clone();

        assert_eq!(password.len(), 10);
        assert!(password
            .chars()
            .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit()));
        assert_eq!(form.result(), Some(&password));
    }

    #[test]
    fn second_submit_replaces_result() {
        let mut rng = StdRng::seed_from_u64(3);
        let mut form = PasswordForm::new();
        form.set_length("8");
        form.submit(&mut rng).unwrap();

        form.set_length("16");
        form.submit(&mut rng).unwrap();

        assert_eq!(form.result().map(|p| p.len()), Some(16));
    }

    #[test]
    fn missing_length() {
        let mut rng = StdRng::seed_from_u64(3);
        let mut form = PasswordForm::new();

        assert_eq!(
            form.submit(&mut rng),
            Err(PasswordError::InvalidLength(LengthError::Missing))
        );
    }

    #[test]
    fn failed_submit_keeps_result() {
        let mut rng = StdRng::seed_from_u64(3);
        let mut form = PasswordForm::new();
        form.set_length("6");
        let first = form.submit(&mut rng).unwrap().clone();

        form.toggle(CharacterClass::Lowercase);
        assert_eq!(form.submit(&mut rng), Err(PasswordError::NoClassSelected));

        form.set_length("abc");
        assert_eq!(
            form.submit(&mut rng),
            Err(PasswordError::InvalidLength(LengthError::NotNumeric(
                "abc".into()
            )))
        );

        assert_eq!(form.result(), Some(&first));
    }

    #[test]
    fn oversized_length_is_too_long() {
        let mut rng = StdRng::seed_from_u64(3);
        let mut form = PasswordForm::new();
        form.set_length("99999999999999999999999");

        assert_eq!(
            form.submit(&mut rng),
            Err(PasswordError::InvalidLength(LengthError::TooLong(
                "99999999999999999999999".into()
            )))
        );
    }

    #[test]
    fn reset_restores_defaults() {
        let mut rng = StdRng::seed_from_u64(3);
        let mut form = PasswordForm::new();
        form.set_length("12");
        form.set_classes(ClassSet::all());
        form.submit(&mut rng).unwrap();

        form.reset();

        assert_eq!(form, PasswordForm::default());
    }
}
