//! Local-only validation for the contact form. Nothing here talks to a
//! network; the frontend shows the returned messages beside each field.

use regex::Regex;

/// The four contact-form fields as the user typed them.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

/// Per-field validation messages. `None` means the field is valid.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ContactErrors {
    pub name: Option<String>,
    pub email: Option<String>,
    pub subject: Option<String>,
    pub message: Option<String>,
}

impl ContactErrors {
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.email.is_none()
            && self.subject.is_none()
            && self.message.is_none()
    }
}

impl ContactForm {
    pub fn validate(&self) -> ContactErrors {
        let mut errors = ContactErrors::default();

        if self.name.trim().is_empty() {
            errors.name = Some("Name is required".to_string());
        }

        if self.email.trim().is_empty() {
            errors.email = Some("Email is required".to_string());
        } else if !email_shape().is_match(&self.email) {
            errors.email = Some("Please enter a valid email".to_string());
        }

        if self.subject.trim().is_empty() {
            errors.subject = Some("Subject is required".to_string());
        }

        let message = self.message.trim();
        if message.is_empty() {
            errors.message = Some("Message is required".to_string());
        } else if message.chars().count() < 10 {
            errors.message = Some("Message must be at least 10 characters".to_string());
        }

        errors
    }
}

/// local@domain.tld, nothing fancier. Deliverability is not our problem.
fn email_shape() -> Regex {
    Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").unwrap()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_form() -> ContactForm {
        ContactForm {
            name: "Ada".to_string(),
            email: "ada@example.com".to_string(),
            subject: "Kubernetes course".to_string(),
            message: "Is there a module on operators?".to_string(),
        }
    }

    #[test]
    fn valid_form_passes() {
        assert!(valid_form().validate().is_empty());
    }

    #[test]
    fn blank_fields_are_required() {
        let errors = ContactForm::default().validate();
        assert_eq!(errors.name.as_deref(), Some("Name is required"));
        assert_eq!(errors.email.as_deref(), Some("Email is required"));
        assert_eq!(errors.subject.as_deref(), Some("Subject is required"));
        assert_eq!(errors.message.as_deref(), Some("Message is required"));
    }

    #[test]
    fn whitespace_only_counts_as_blank() {
        let form = ContactForm {
            name: "   ".to_string(),
            ..valid_form()
        };
        assert!(form.validate().name.is_some());
    }

    #[test]
    fn malformed_email_is_rejected() {
        for email in ["no-at-sign", "two@@example.com ", "missing@tld", "a b@example.com"] {
            let form = ContactForm {
                email: email.to_string(),
                ..valid_form()
            };
            assert_eq!(
                form.validate().email.as_deref(),
                Some("Please enter a valid email"),
                "{email}"
            );
        }
    }

    #[test]
    fn short_message_is_rejected_after_trimming() {
        let form = ContactForm {
            message: "  hi there  ".to_string(),
            ..valid_form()
        };
        assert_eq!(
            form.validate().message.as_deref(),
            Some("Message must be at least 10 characters")
        );
    }

    #[test]
    fn ten_character_message_is_accepted() {
        let form = ContactForm {
            message: "0123456789".to_string(),
            ..valid_form()
        };
        assert!(form.validate().message.is_none());
    }
}
