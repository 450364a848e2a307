use regex::Regex;
use std::collections::BTreeMap;
use std::sync::LazyLock;

static EMAIL_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").unwrap());

pub const REQUIRED_MESSAGE: &str = "This field is required.";
pub const EMAIL_MESSAGE: &str = "Please enter a valid email address.";
pub const FAILURE_MESSAGE: &str = "Please correct the highlighted fields and try again.";
pub const SUCCESS_MESSAGE: &str = "Thanks! Your transmission has been received.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Text,
    Email,
    Textarea,
}

#[derive(Debug, Clone, Copy)]
pub struct FieldSpec {
    pub name: &'static str,
    pub label: &'static str,
    pub kind: FieldKind,
    pub required: bool,
}

pub const CONTACT_FIELDS: &[FieldSpec] = &[
    FieldSpec {
        name: "name",
        label: "Full name",
        kind: FieldKind::Text,
        required: true,
    },
    FieldSpec {
        name: "email",
        label: "Email",
        kind: FieldKind::Email,
        required: true,
    },
    FieldSpec {
        name: "company",
        label: "Company",
        kind: FieldKind::Text,
        required: false,
    },
    FieldSpec {
        name: "message",
        label: "Project brief",
        kind: FieldKind::Textarea,
        required: true,
    },
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    pub field: &'static str,
    pub message: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationReport {
    pub errors: Vec<FieldError>,
    pub message: &'static str,
}

impl ValidationReport {
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn error_for(&self, field: &str) -> Option<&'static str> {
        self.errors
            .iter()
            .find(|error| error.field == field)
            .map(|error| error.message)
    }
}

pub fn is_valid_email(value: &str) -> bool {
    EMAIL_PATTERN.is_match(value.trim())
}

/// Checks every field and collects all violations.
pub fn validate(fields: &[FieldSpec], values: &BTreeMap<String, String>) -> ValidationReport {
    let mut errors = Vec::new();
    for field in fields {
        let value = values.get(field.name).map(|v| v.trim()).unwrap_or("");
        if value.is_empty() {
            if field.required {
                errors.push(FieldError {
                    field: field.name,
                    message: REQUIRED_MESSAGE,
                });
            }
            continue;
        }
        if field.kind == FieldKind::Email && !is_valid_email(value) {
            errors.push(FieldError {
                field: field.name,
                message: EMAIL_MESSAGE,
            });
        }
    }

    let message = if errors.is_empty() {
        SUCCESS_MESSAGE
    } else {
        FAILURE_MESSAGE
    };
    ValidationReport { errors, message }
}

/// A form's current values and the outcome of its last submit.
#[derive(Debug, Clone)]
pub struct FormState {
    fields: &'static [FieldSpec],
    values: BTreeMap<String, String>,
    report: Option<ValidationReport>,
}

impl FormState {
    pub fn new(fields: &'static [FieldSpec]) -> Self {
        FormState {
            fields,
            values: BTreeMap::new(),
            report: None,
        }
    }

    pub fn contact() -> Self {
        Self::new(CONTACT_FIELDS)
    }

    pub fn fields(&self) -> &'static [FieldSpec] {
        self.fields
    }

    pub fn value(&self, field: &str) -> &str {
        self.values.get(field).map(String::as_str).unwrap_or("")
    }

    pub fn set(&mut self, field: &str, value: impl Into<String>) {
        self.values.insert(field.to_string(), value.into());
    }

    pub fn report(&self) -> Option<&ValidationReport> {
        self.report.as_ref()
    }

    /// Validates the current values. A passing submit clears the form.
    pub fn submit(&mut self) -> &ValidationReport {
        let report = validate(self.fields, &self.values);
        if report.is_valid() {
            log::info!("Contact form accepted");
            self.values.clear();
        } else {
            log::debug!("Contact form rejected with {} error(s)", report.errors.len());
        }
        self.report.insert(report)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> FormState {
        let mut form = FormState::contact();
        form.set("name", "Rae Quinn");
        form.set("email", "rae@orbital.studio");
        form.set("company", "Orbital");
        form.set("message", "We need a launch world.");
        form
    }

    #[test]
    fn empty_submit_reports_every_required_field() {
        let mut form = FormState::contact();
        let report = form.submit().clone();

        let required = CONTACT_FIELDS.iter().filter(|f| f.required).count();
        assert_eq!(report.errors.len(), required);
        assert!(report.errors.iter().all(|e| e.message == REQUIRED_MESSAGE));
        assert_eq!(report.error_for("company"), None);
        assert_eq!(report.message, FAILURE_MESSAGE);
    }

    #[test]
    fn valid_submit_succeeds_and_resets() {
        let mut form = filled();
        let report = form.submit().clone();
        assert!(report.is_valid());
        assert_eq!(report.message, SUCCESS_MESSAGE);
        assert_eq!(form.value("name"), "");
        assert_eq!(form.value("email"), "");
    }

    #[test]
    fn bad_email_is_reported_alongside_other_errors() {
        let mut form = filled();
        form.set("email", "rae at orbital");
        form.set("message", "   ");
        let report = form.submit().clone();

        assert_eq!(report.error_for("email"), Some(EMAIL_MESSAGE));
        assert_eq!(report.error_for("message"), Some(REQUIRED_MESSAGE));
        assert_eq!(report.errors.len(), 2);
        // values survive a failed submit
        assert_eq!(form.value("email"), "rae at orbital");
    }

    #[test]
    fn email_pattern_is_permissive() {
        assert!(is_valid_email("a@b.c"));
        assert!(is_valid_email("first.last+tag@sub.domain.io"));
        assert!(!is_valid_email("missing-at.example"));
        assert!(!is_valid_email("no@tld"));
        assert!(!is_valid_email("two words@x.io"));
    }
}
