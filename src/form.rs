// SPDX-License-Identifier: MPL-2.0
//! Application form fields and their native-style validity rules.
//!
//! Both fields are optional. The only constraint is the one an `email` input
//! enforces on its own: a non-empty value must look like an address.

use std::fmt;

/// Raw contents of the application form, exactly as typed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ApplicationForm {
    pub full_name: String,
    pub email: String,
}

/// Reason a form failed its validity check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Validity {
    /// The email field holds something that is not an email address.
    TypeMismatch,
}

impl Validity {
    /// Returns the i18n message key for this failure.
    #[must_use]
    pub fn i18n_key(&self) -> &'static str {
        match self {
            Validity::TypeMismatch => "validation-email-type-mismatch",
        }
    }
}

impl fmt::Display for Validity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Validity::TypeMismatch => write!(f, "Please enter an email address"),
        }
    }
}

/// Trimmed values extracted from a valid form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Submission {
    pub display_name: String,
    pub contact_email: Option<String>,
}

impl ApplicationForm {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Checks the form the way the browser would before submitting it.
    pub fn check_validity(&self) -> Result<(), Validity> {
        let email = self.email.trim();
        if email.is_empty() || is_simple_email(email) {
            Ok(())
        } else {
            Err(Validity::TypeMismatch)
        }
    }

    /// Extracts trimmed values, substituting `fallback_name` for an empty name.
    #[must_use]
    pub fn submission(&self, fallback_name: &str) -> Submission {
        let name = self.full_name.trim();
        let email = self.email.trim();

        Submission {
            display_name: if name.is_empty() {
                fallback_name.to_string()
            } else {
                name.to_string()
            },
            contact_email: (!email.is_empty()).then(|| email.to_string()),
        }
    }

    /// Clears both fields.
    pub fn reset(&mut self) {
        self.full_name.clear();
        self.email.clear();
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.full_name.is_empty() && self.email.is_empty()
    }
}

fn is_email_local_char(ch: char) -> bool {
    ch.is_ascii_alphanumeric()
        || matches!(
            ch,
            '.' | '!'
                | '#'
                | '$'
                | '%'
                | '&'
                | '\''
                | '*'
                | '+'
                | '/'
                | '='
                | '?'
                | '^'
                | '_'
                | '`'
                | '{'
                | '|'
                | '}'
                | '~'
                | '-'
        )
}

fn is_email_domain_label(label: &str) -> bool {
    if label.is_empty() || label.len() > 63 {
        return false;
    }

    let bytes = label.as_bytes();
    let first = bytes[0];
    let last = bytes[bytes.len() - 1];
    first.is_ascii_alphanumeric()
        && last.is_ascii_alphanumeric()
        && bytes.iter().all(|b| b.is_ascii_alphanumeric() || *b == b'-')
}

/// `local@domain` as accepted by an `<input type="email">`.
#[must_use]
pub fn is_simple_email(value: &str) -> bool {
    let Some((local, domain)) = value.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.is_empty() || domain.contains('@') {
        return false;
    }
    local.chars().all(is_email_local_char) && domain.split('.').all(is_email_domain_label)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form(full_name: &str, email: &str) -> ApplicationForm {
        ApplicationForm {
            full_name: full_name.to_string(),
            email: email.to_string(),
        }
    }

    #[test]
    fn empty_form_is_valid() {
        assert_eq!(ApplicationForm::new().check_validity(), Ok(()));
    }

    #[test]
    fn well_formed_email_is_valid() {
        assert_eq!(form("Jane", "jane@x.com").check_validity(), Ok(()));
        assert_eq!(form("", " jane.doe+eu@mail-box.example.org ").check_validity(), Ok(()));
    }

    #[test]
    fn malformed_email_is_type_mismatch() {
        for email in ["jane", "jane@", "@x.com", "a@b@c", "jane@-x.com", "jane@x..com", "ja ne@x.com"] {
            assert_eq!(
                form("Jane", email).check_validity(),
                Err(Validity::TypeMismatch),
                "{email} should be rejected"
            );
        }
    }

    #[test]
    fn dotless_domain_is_accepted() {
        // Browsers accept intranet-style addresses.
        assert!(is_simple_email("jane@localhost"));
    }

    #[test]
    fn submission_trims_fields() {
        let submission = form("  Jane Doe ", " jane@x.com  ").submission("Applicant");
        assert_eq!(submission.display_name, "Jane Doe");
        assert_eq!(submission.contact_email.as_deref(), Some("jane@x.com"));
    }

    #[test]
    fn submission_uses_fallback_for_empty_name() {
        let submission = form("   ", "").submission("Applicant");
        assert_eq!(submission.display_name, "Applicant");
        assert!(submission.contact_email.is_none());
    }

    #[test]
    fn reset_clears_fields() {
        let mut form = form("Jane", "jane@x.com");
        form.reset();
        assert!(form.is_empty());
    }

    #[test]
    fn validity_has_i18n_key() {
        assert_eq!(
            Validity::TypeMismatch.i18n_key(),
            "validation-email-type-mismatch"
        );
    }
}
