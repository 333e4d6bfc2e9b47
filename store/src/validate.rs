//! # Credential validation shared by the login and signup forms
//!
//! Declarative rules over the raw form inputs, run on every keystroke. Each
//! rule is an independent check producing its own message; a password missing
//! both a digit and an uppercase letter surfaces both messages at once, not
//! just the first.
//!
//! Validation never reaches the network: a form submits only while its
//! [`ValidationReport`] is clean.

use serde::Serialize;

pub const PASSWORD_MIN_LEN: usize = 8;
pub const PASSWORD_MAX_LEN: usize = 20;

/// Punctuation set one of which every password must contain.
pub const PASSWORD_PUNCTUATION: &str = "!@#$%^&*";

pub const MSG_INVALID_EMAIL: &str = "Invalid email";
pub const MSG_PASSWORD_MIN: &str = "Minimum length 8";
pub const MSG_PASSWORD_MAX: &str = "Maximum length 20";
pub const MSG_PASSWORD_UPPER: &str = "Must contain one uppercase alphabet";
pub const MSG_PASSWORD_LOWER: &str = "Must contain one lowercase alphabet";
pub const MSG_PASSWORD_DIGIT: &str = "Must contain one digit";
pub const MSG_PASSWORD_PUNCT: &str = "Must contain one special character";
pub const MSG_FIRSTNAME_REQUIRED: &str = "First name is required";
pub const MSG_LASTNAME_REQUIRED: &str = "Last name is required";

/// One failed rule: which field, which message.
#[derive(Clone, Debug, PartialEq)]
pub struct FieldError {
    pub field: &'static str,
    pub message: &'static str,
}

/// Outcome of validating a whole form.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ValidationReport {
    errors: Vec<FieldError>,
}

impl ValidationReport {
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    /// Messages for one field, in rule order.
    pub fn field_messages(&self, field: &str) -> Vec<&'static str> {
        self.errors
            .iter()
            .filter(|err| err.field == field)
            .map(|err| err.message)
            .collect()
    }

    pub fn has_field_errors(&self, field: &str) -> bool {
        self.errors.iter().any(|err| err.field == field)
    }

    pub fn errors(&self) -> &[FieldError] {
        &self.errors
    }

    fn push(&mut self, field: &'static str, message: &'static str) {
        self.errors.push(FieldError { field, message });
    }
}

/// Structural email check: one `@` with a non-empty local part and a dotted
/// domain whose labels are all non-empty.
pub fn is_valid_email(email: &str) -> bool {
    let mut parts = email.split('@');
    let (Some(local), Some(domain), None) = (parts.next(), parts.next(), parts.next()) else {
        return false;
    };
    if local.is_empty() || domain.is_empty() || email.contains(char::is_whitespace) {
        return false;
    }
    domain.contains('.') && domain.split('.').all(|label| !label.is_empty())
}

fn check_email(email: &str, report: &mut ValidationReport) {
    if !is_valid_email(email) {
        report.push("email", MSG_INVALID_EMAIL);
    }
}

/// Run every password rule independently, collecting all failures.
fn check_password(password: &str, report: &mut ValidationReport) {
    if password.chars().count() < PASSWORD_MIN_LEN {
        report.push("password", MSG_PASSWORD_MIN);
    }
    if password.chars().count() > PASSWORD_MAX_LEN {
        report.push("password", MSG_PASSWORD_MAX);
    }
    if !password.chars().any(|c| c.is_ascii_uppercase()) {
        report.push("password", MSG_PASSWORD_UPPER);
    }
    if !password.chars().any(|c| c.is_ascii_lowercase()) {
        report.push("password", MSG_PASSWORD_LOWER);
    }
    if !password.chars().any(|c| c.is_ascii_digit()) {
        report.push("password", MSG_PASSWORD_DIGIT);
    }
    if !password.chars().any(|c| PASSWORD_PUNCTUATION.contains(c)) {
        report.push("password", MSG_PASSWORD_PUNCT);
    }
}

/// Sign-in credentials; doubles as the `/user/signin` request body.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct SignInInput {
    pub email: String,
    pub password: String,
}

impl SignInInput {
    pub fn validate(&self) -> ValidationReport {
        let mut report = ValidationReport::default();
        check_email(&self.email, &mut report);
        check_password(&self.password, &mut report);
        report
    }
}

/// Signup fields; doubles as the `/user/register` request body.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct SignUpInput {
    pub email: String,
    pub password: String,
    pub firstname: String,
    pub lastname: String,
}

impl SignUpInput {
    pub fn validate(&self) -> ValidationReport {
        let mut report = ValidationReport::default();
        check_email(&self.email, &mut report);
        check_password(&self.password, &mut report);
        if self.firstname.trim().is_empty() {
            report.push("firstname", MSG_FIRSTNAME_REQUIRED);
        }
        if self.lastname.trim().is_empty() {
            report.push("lastname", MSG_LASTNAME_REQUIRED);
        }
        report
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn password_messages(password: &str) -> Vec<&'static str> {
        SignInInput {
            email: "user@example.com".to_string(),
            password: password.to_string(),
        }
        .validate()
        .field_messages("password")
    }

    #[test]
    fn accepts_a_fully_valid_credential_pair() {
        let report = SignInInput {
            email: "user@example.com".to_string(),
            password: "Str0ng!pass".to_string(),
        }
        .validate();
        assert!(report.is_valid(), "unexpected errors: {:?}", report.errors());
    }

    #[test]
    fn each_missing_class_fails_with_its_own_message() {
        assert_eq!(password_messages("str0ng!pass"), vec![MSG_PASSWORD_UPPER]);
        assert_eq!(password_messages("STR0NG!PASS"), vec![MSG_PASSWORD_LOWER]);
        assert_eq!(password_messages("Strong!pass"), vec![MSG_PASSWORD_DIGIT]);
        assert_eq!(password_messages("Str0ngpass"), vec![MSG_PASSWORD_PUNCT]);
    }

    #[test]
    fn multiple_failures_surface_simultaneously() {
        // Short, no uppercase, no digit, no punctuation: four rules at once.
        let messages = password_messages("abc");
        assert_eq!(
            messages,
            vec![
                MSG_PASSWORD_MIN,
                MSG_PASSWORD_UPPER,
                MSG_PASSWORD_DIGIT,
                MSG_PASSWORD_PUNCT,
            ]
        );
    }

    #[test]
    fn length_bounds_are_inclusive() {
        assert!(password_messages("Str0ng!x").is_empty(), "8 chars is valid");
        assert!(
            password_messages("Str0ng!xStr0ng!xStr0").is_empty(),
            "20 chars is valid"
        );
        assert_eq!(
            password_messages("Str0ng!xStr0ng!xStr0x"),
            vec![MSG_PASSWORD_MAX]
        );
    }

    #[test]
    fn email_shapes() {
        for email in ["user@example.com", "a.b@sub.domain.org", "x@y.io"] {
            assert!(is_valid_email(email), "{email} should be valid");
        }
        for email in [
            "",
            "plain",
            "@example.com",
            "user@",
            "user@nodot",
            "user@@example.com",
            "user@ex ample.com",
            "user@.com",
            "user@domain.",
        ] {
            assert!(!is_valid_email(email), "{email} should be invalid");
        }
    }

    #[test]
    fn signup_requires_both_names() {
        let report = SignUpInput {
            email: "user@example.com".to_string(),
            password: "Str0ng!pass".to_string(),
            firstname: "  ".to_string(),
            lastname: String::new(),
        }
        .validate();
        assert!(!report.is_valid());
        assert_eq!(
            report.field_messages("firstname"),
            vec![MSG_FIRSTNAME_REQUIRED]
        );
        assert_eq!(
            report.field_messages("lastname"),
            vec![MSG_LASTNAME_REQUIRED]
        );
        // Name errors do not leak onto the credential fields.
        assert!(!report.has_field_errors("email"));
        assert!(!report.has_field_errors("password"));
    }

    #[test]
    fn fixing_a_field_revalidates_cleanly() {
        let mut input = SignUpInput {
            email: "broken".to_string(),
            password: "Str0ng!pass".to_string(),
            firstname: "Ada".to_string(),
            lastname: "Lovelace".to_string(),
        };
        assert!(!input.validate().is_valid());

        input.email = "ada@example.com".to_string();
        assert!(input.validate().is_valid());
    }

    #[test]
    fn request_bodies_use_backend_field_names() {
        let body = serde_json::to_value(SignUpInput {
            email: "a@b.co".to_string(),
            password: "Str0ng!pass".to_string(),
            firstname: "Ada".to_string(),
            lastname: "Lovelace".to_string(),
        })
        .unwrap();
        assert_eq!(body["email"], "a@b.co");
        assert_eq!(body["firstname"], "Ada");
        assert_eq!(body["lastname"], "Lovelace");
    }
}
