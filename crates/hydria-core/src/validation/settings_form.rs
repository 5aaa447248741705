//! Platform settings form validation.

use std::sync::LazyLock;

use crate::models::UpdatePlatformSettingsRequest;
use crate::validation::{is_valid_email, FieldErrors, FieldKey};

// scheme://host[...]; enough to catch pasted values with no scheme or host.
static URL_PATTERN: LazyLock<regex::Regex> = LazyLock::new(|| {
    regex::Regex::new(r"^[A-Za-z][A-Za-z0-9+.-]*://[^\s/]+\S*$").expect("valid url regex")
});

fn is_valid_url(value: &str) -> bool {
    URL_PATTERN.is_match(value)
}

/// Candidate data of the platform settings form. All inputs arrive as raw
/// strings; empty optionals become absent in the request payload.
#[derive(Debug, Clone, Default)]
pub struct SettingsForm {
    pub domain: String,
    pub callback_url: String,
    pub broker_url: String,
    pub platform_name: String,
    pub logo_url: String,
    pub support_email: String,
}

impl SettingsForm {
    /// Normalized upsert payload. Call only after validation passed.
    pub fn to_request(&self) -> UpdatePlatformSettingsRequest {
        UpdatePlatformSettingsRequest {
            domain: self.domain.trim().to_string(),
            callback_url: self.callback_url.trim().to_string(),
            broker_url: self.broker_url.trim().to_string(),
            platform_name: self.platform_name.trim().to_string(),
            logo_url: non_empty(&self.logo_url),
            support_email: non_empty(&self.support_email),
        }
    }
}

fn non_empty(value: &str) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

/// Validate the settings form. Empty result means the form may be submitted.
pub fn validate_settings_form(form: &SettingsForm) -> FieldErrors {
    let mut errors = FieldErrors::new();

    if form.domain.trim().is_empty() {
        errors.insert(FieldKey::field("domain"), "Domain is required".to_string());
    }
    if form.platform_name.trim().is_empty() {
        errors.insert(
            FieldKey::field("platform_name"),
            "Platform name is required".to_string(),
        );
    }

    for (name, value) in [
        ("callback_url", &form.callback_url),
        ("broker_url", &form.broker_url),
    ] {
        let trimmed = value.trim();
        if trimmed.is_empty() {
            errors.insert(FieldKey::field(name), "URL is required".to_string());
        } else if !is_valid_url(trimmed) {
            errors.insert(FieldKey::field(name), "Invalid URL".to_string());
        }
    }

    let logo = form.logo_url.trim();
    if !logo.is_empty() && !is_valid_url(logo) {
        errors.insert(FieldKey::field("logo_url"), "Invalid URL".to_string());
    }

    let email = form.support_email.trim();
    if !email.is_empty() && !is_valid_email(email) {
        errors.insert(
            FieldKey::field("support_email"),
            "Invalid email address".to_string(),
        );
    }

    errors
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_form() -> SettingsForm {
        SettingsForm {
            domain: "metering.example.com".to_string(),
            callback_url: "https://metering.example.com/callback".to_string(),
            broker_url: "mqtts://broker.example.com:8883".to_string(),
            platform_name: "Hydria".to_string(),
            logo_url: String::new(),
            support_email: String::new(),
        }
    }

    #[test]
    fn test_valid_form_passes() {
        assert!(validate_settings_form(&valid_form()).is_empty());
    }

    #[test]
    fn test_missing_scheme_rejected() {
        let mut form = valid_form();
        form.broker_url = "broker.example.com:8883".to_string();
        let errors = validate_settings_form(&form);
        assert!(errors.contains_key(&FieldKey::field("broker_url")));
    }

    #[test]
    fn test_optional_fields_only_checked_when_present() {
        let mut form = valid_form();
        assert!(validate_settings_form(&form).is_empty());

        form.support_email = "not-an-email".to_string();
        let errors = validate_settings_form(&form);
        assert!(errors.contains_key(&FieldKey::field("support_email")));
    }

    #[test]
    fn test_request_drops_empty_optionals() {
        let request = valid_form().to_request();
        assert!(request.logo_url.is_none());
        assert!(request.support_email.is_none());
    }
}
