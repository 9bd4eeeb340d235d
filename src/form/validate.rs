//! Field validation rules.
//!
//! Rules run in a fixed order and the first failure wins:
//! required-and-empty, then email shape, then phone shape.

use std::sync::LazyLock;

use regex::Regex;

use crate::options::FormMessages;

/// Field name that gets the phone-number rule.
pub const PHONE_FIELD: &str = "phone";

/// Permissive `local@domain.tld` shape.
static EMAIL_SHAPE: LazyLock<Option<Regex>> =
    LazyLock::new(|| compile(r"^[^\s@]+@[^\s@]+\.[^\s@]+$"));

/// Digits, whitespace, `+`, `-` and parentheses only.
static PHONE_SHAPE: LazyLock<Option<Regex>> =
    LazyLock::new(|| compile(r"^[0-9\s+\-()]+$"));

fn compile(pattern: &str) -> Option<Regex> {
    Regex::new(pattern)
        .map_err(|e| log::error!("invalid field pattern {pattern}: {e}"))
        .ok()
}

fn matches(shape: &LazyLock<Option<Regex>>, value: &str) -> bool {
    shape.as_ref().is_some_and(|re| re.is_match(value))
}

/// Input kind, as far as validation cares.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FieldKind {
    /// Any input that is not an email input (text, tel, textarea, ...).
    #[default]
    Text,
    /// `<input type="email">`.
    Email,
}

impl FieldKind {
    /// Kind from the element's `type` attribute.
    pub fn from_type_attr(input_type: &str) -> Self {
        if input_type.eq_ignore_ascii_case("email") {
            Self::Email
        } else {
            Self::Text
        }
    }
}

/// Static description of a form field.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FieldSpec {
    /// The field's `name` attribute.
    pub name: String,
    /// Input kind.
    pub kind: FieldKind,
    /// Whether the field carries the `required` attribute.
    pub required: bool,
}

impl FieldSpec {
    /// Spec from the element's attributes.
    pub fn new(name: impl Into<String>, kind: FieldKind, required: bool) -> Self {
        Self {
            name: name.into(),
            kind,
            required,
        }
    }
}

/// Why a value was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldError {
    /// Required field left empty.
    Required,
    /// Email field whose value is not shaped like an address.
    InvalidEmail,
    /// Phone field with stray characters or too few of them.
    InvalidPhone,
}

impl FieldError {
    /// Localized text for this error.
    pub fn message(self, messages: &FormMessages) -> &str {
        match self {
            Self::Required => &messages.required,
            Self::InvalidEmail => &messages.invalid_email,
            Self::InvalidPhone => &messages.invalid_phone,
        }
    }
}

/// Check `raw` against the rules of `spec`.
///
/// The value is trimmed first. `min_phone_length` is counted in characters.
pub fn validate(
    spec: &FieldSpec,
    raw: &str,
    min_phone_length: usize,
) -> Result<(), FieldError> {
    let value = raw.trim();

    if value.is_empty() {
        return if spec.required {
            Err(FieldError::Required)
        } else {
            Ok(())
        };
    }

    if spec.kind == FieldKind::Email && !matches(&EMAIL_SHAPE, value) {
        return Err(FieldError::InvalidEmail);
    }

    if spec.name == PHONE_FIELD
        && (!matches(&PHONE_SHAPE, value)
            || value.chars().count() < min_phone_length)
    {
        return Err(FieldError::InvalidPhone);
    }

    Ok(())
}

/// Validation state of one field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Validity {
    /// Never validated.
    #[default]
    Unchecked,
    /// Passed the last validation.
    Valid,
    /// Failed the last validation.
    Invalid(FieldError),
}

impl Validity {
    /// Value of the `aria-invalid` attribute, `None` before the first
    /// validation.
    pub fn aria_invalid(self) -> Option<&'static str> {
        match self {
            Self::Unchecked => None,
            Self::Valid => Some("false"),
            Self::Invalid(_) => Some("true"),
        }
    }

    /// Whether the last validation failed.
    pub fn is_invalid(self) -> bool {
        matches!(self, Self::Invalid(_))
    }

    /// Inline error text (empty unless invalid).
    pub fn error_text(self, messages: &FormMessages) -> &str {
        match self {
            Self::Invalid(error) => error.message(messages),
            Self::Unchecked | Self::Valid => "",
        }
    }
}

/// A field, its current value and its validation state.
#[derive(Debug, Clone, Default)]
pub struct FormField {
    spec: FieldSpec,
    value: String,
    validity: Validity,
}

impl FormField {
    /// Unchecked, empty field.
    pub fn new(spec: FieldSpec) -> Self {
        Self {
            spec,
            value: String::new(),
            validity: Validity::Unchecked,
        }
    }

    /// Static description.
    pub fn spec(&self) -> &FieldSpec {
        &self.spec
    }

    /// Current raw value.
    pub fn value(&self) -> &str {
        &self.value
    }

    /// Current validation state.
    pub fn validity(&self) -> Validity {
        self.validity
    }

    /// Replace the value without validating.
    pub fn set_value(&mut self, value: &str) {
        value.clone_into(&mut self.value);
    }

    /// Clear the value (form reset). The validation state is kept.
    pub fn clear(&mut self) {
        self.value.clear();
    }

    /// Validate the current value and record the result.
    pub fn validate(&mut self, min_phone_length: usize) -> Validity {
        self.validity = match validate(&self.spec, &self.value, min_phone_length)
        {
            Ok(()) => Validity::Valid,
            Err(e) => Validity::Invalid(e),
        };
        self.validity
    }

    /// The field lost focus: always re-validate.
    pub fn blur(&mut self, value: &str, min_phone_length: usize) -> Validity {
        self.set_value(value);
        self.validate(min_phone_length)
    }

    /// The user typed: re-validate only while flagged invalid, so an error
    /// clears as soon as it is fixed but none appears mid-typing.
    pub fn input(
        &mut self,
        value: &str,
        min_phone_length: usize,
    ) -> Option<Validity> {
        self.set_value(value);
        if self.validity.is_invalid() {
            Some(self.validate(min_phone_length))
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn email() -> FieldSpec {
        FieldSpec::new("email", FieldKind::Email, true)
    }

    fn phone() -> FieldSpec {
        FieldSpec::new("phone", FieldKind::Text, false)
    }

    #[test]
    fn required_empty_is_rejected() {
        let name = FieldSpec::new("name", FieldKind::Text, true);
        assert_eq!(validate(&name, "", 8), Err(FieldError::Required));
        assert_eq!(validate(&name, "   ", 8), Err(FieldError::Required));
        assert_eq!(validate(&name, "Ana", 8), Ok(()));
    }

    #[test]
    fn optional_empty_is_accepted() {
        assert_eq!(validate(&phone(), "", 8), Ok(()));
        let email = FieldSpec::new("email", FieldKind::Email, false);
        assert_eq!(validate(&email, "", 8), Ok(()));
    }

    #[test]
    fn email_needs_dot_after_domain() {
        assert_eq!(validate(&email(), "a@b", 8), Err(FieldError::InvalidEmail));
        assert_eq!(validate(&email(), "a@b.co", 8), Ok(()));
        assert_eq!(
            validate(&email(), "a b@c.si", 8),
            Err(FieldError::InvalidEmail)
        );
        assert_eq!(
            validate(&email(), "a@@b.si", 8),
            Err(FieldError::InvalidEmail)
        );
        assert_eq!(validate(&email(), "  ana@vodovod.si ", 8), Ok(()));
    }

    #[test]
    fn phone_rules() {
        assert_eq!(validate(&phone(), "123", 8), Err(FieldError::InvalidPhone));
        assert_eq!(validate(&phone(), "123-456-7890", 8), Ok(()));
        assert_eq!(
            validate(&phone(), "12a45678", 8),
            Err(FieldError::InvalidPhone)
        );
        assert_eq!(validate(&phone(), "+386 (41) 123 456", 8), Ok(()));
        assert_eq!(validate(&phone(), "1234567", 8), Err(FieldError::InvalidPhone));
        assert_eq!(validate(&phone(), "12345678", 8), Ok(()));
    }

    #[test]
    fn phone_rule_only_applies_to_phone_field() {
        let other = FieldSpec::new("service", FieldKind::Text, false);
        assert_eq!(validate(&other, "abc", 8), Ok(()));
    }

    #[test]
    fn blur_always_validates() {
        let mut field = FormField::new(email());
        assert_eq!(field.validity().aria_invalid(), None);
        assert_eq!(
            field.blur("", 8),
            Validity::Invalid(FieldError::Required)
        );
        assert_eq!(field.validity().aria_invalid(), Some("true"));
        assert_eq!(field.blur("ana@vodovod.si", 8), Validity::Valid);
        assert_eq!(field.validity().aria_invalid(), Some("false"));
    }

    #[test]
    fn input_revalidates_only_when_invalid() {
        let mut field = FormField::new(email());
        assert_eq!(field.input("a", 8), None);
        assert_eq!(field.validity(), Validity::Unchecked);

        let _ = field.blur("a", 8);
        assert!(field.validity().is_invalid());
        assert_eq!(
            field.input("ana@", 8),
            Some(Validity::Invalid(FieldError::InvalidEmail))
        );
        assert_eq!(field.input("ana@vodovod.si", 8), Some(Validity::Valid));
        assert_eq!(field.input("ana@", 8), None);
    }

    #[test]
    fn error_text_is_localized() {
        let messages = FormMessages::default();
        let invalid = Validity::Invalid(FieldError::Required);
        assert_eq!(invalid.error_text(&messages), messages.required);
        assert_eq!(Validity::Valid.error_text(&messages), "");
    }

    #[test]
    fn kind_from_type_attr() {
        assert_eq!(FieldKind::from_type_attr("email"), FieldKind::Email);
        assert_eq!(FieldKind::from_type_attr("EMAIL"), FieldKind::Email);
        assert_eq!(FieldKind::from_type_attr("tel"), FieldKind::Text);
    }
}
