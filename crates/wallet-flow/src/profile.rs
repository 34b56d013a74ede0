//! Profile Setup Form
//!
//! Transient form state for the profile screen. Nothing here is persisted or
//! transmitted; the only rule is the submit guard.

use serde::{Deserialize, Serialize};

/// Input fields of the profile form, in display order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProfileField {
    Name,
    Contact,
    Password,
    CardNumber,
    Expiry,
    Cvv,
}

impl ProfileField {
    pub const ALL: [ProfileField; 6] = [
        ProfileField::Name,
        ProfileField::Contact,
        ProfileField::Password,
        ProfileField::CardNumber,
        ProfileField::Expiry,
        ProfileField::Cvv,
    ];

    pub const fn label(self) -> &'static str {
        match self {
            ProfileField::Name => "Full Name",
            ProfileField::Contact => "Phone/Email",
            ProfileField::Password => "Password",
            ProfileField::CardNumber => "Card Number",
            ProfileField::Expiry => "Exp Date",
            ProfileField::Cvv => "CVV",
        }
    }

    /// Required fields gate the Done action; card fields are optional.
    pub const fn is_required(self) -> bool {
        matches!(
            self,
            ProfileField::Name | ProfileField::Contact | ProfileField::Password
        )
    }

    /// Secret fields are masked on screen and redacted in debug output.
    pub const fn is_secret(self) -> bool {
        matches!(self, ProfileField::Password | ProfileField::Cvv)
    }
}

#[derive(Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfileForm {
    pub name: String,
    pub contact: String,
    pub password: String,
    pub card_number: String,
    pub expiry: String,
    pub cvv: String,
}

impl ProfileForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn value(&self, field: ProfileField) -> &str {
        match field {
            ProfileField::Name => &self.name,
            ProfileField::Contact => &self.contact,
            ProfileField::Password => &self.password,
            ProfileField::CardNumber => &self.card_number,
            ProfileField::Expiry => &self.expiry,
            ProfileField::Cvv => &self.cvv,
        }
    }

    pub fn set(&mut self, field: ProfileField, value: impl Into<String>) {
        let slot = match field {
            ProfileField::Name => &mut self.name,
            ProfileField::Contact => &mut self.contact,
            ProfileField::Password => &mut self.password,
            ProfileField::CardNumber => &mut self.card_number,
            ProfileField::Expiry => &mut self.expiry,
            ProfileField::Cvv => &mut self.cvv,
        };
        *slot = value.into();
    }

    /// Builder-style setter, mostly for tests and previews
    pub fn with(mut self, field: ProfileField, value: impl Into<String>) -> Self {
        self.set(field, value);
        self
    }

    /// Required fields that are empty or whitespace-only
    pub fn missing_required(&self) -> Vec<ProfileField> {
        ProfileField::ALL
            .into_iter()
            .filter(|field| field.is_required() && self.value(*field).trim().is_empty())
            .collect()
    }

    /// Whether the Done action is enabled
    pub fn is_submittable(&self) -> bool {
        self.missing_required().is_empty()
    }
}

impl std::fmt::Debug for ProfileForm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mask = |value: &str| if value.is_empty() { "" } else { "***" };
        f.debug_struct("ProfileForm")
            .field("name", &self.name)
            .field("contact", &self.contact)
            .field("password", &mask(&self.password))
            .field("card_number", &self.card_number)
            .field("expiry", &self.expiry)
            .field("cvv", &mask(&self.cvv))
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> ProfileForm {
        ProfileForm::new()
            .with(ProfileField::Name, "Yusuf Masood")
            .with(ProfileField::Contact, "yusuf@example.com")
            .with(ProfileField::Password, "hunter2")
    }

    #[test]
    fn test_empty_form_not_submittable() {
        let form = ProfileForm::new();
        assert!(!form.is_submittable());
        assert_eq!(
            form.missing_required(),
            vec![ProfileField::Name, ProfileField::Contact, ProfileField::Password]
        );
    }

    #[test]
    fn test_each_required_field_gates_submit() {
        for field in [ProfileField::Name, ProfileField::Contact, ProfileField::Password] {
            let form = filled().with(field, "");
            assert!(!form.is_submittable(), "{:?} should gate submit", field);
            assert_eq!(form.missing_required(), vec![field]);
        }
    }

    #[test]
    fn test_whitespace_counts_as_blank() {
        let form = filled().with(ProfileField::Contact, "   ");
        assert!(!form.is_submittable());
    }

    #[test]
    fn test_card_fields_do_not_affect_guard() {
        assert!(filled().is_submittable());

        let with_card = filled()
            .with(ProfileField::CardNumber, "4111 1111 1111 9743")
            .with(ProfileField::Expiry, "02/02")
            .with(ProfileField::Cvv, "123");
        assert!(with_card.is_submittable());

        let card_only = ProfileForm::new()
            .with(ProfileField::CardNumber, "4111 1111 1111 9743")
            .with(ProfileField::Expiry, "02/02")
            .with(ProfileField::Cvv, "123");
        assert!(!card_only.is_submittable());
    }

    #[test]
    fn test_debug_redacts_secrets() {
        let form = filled().with(ProfileField::Cvv, "987");
        let debug = format!("{:?}", form);
        assert!(!debug.contains("hunter2"));
        assert!(!debug.contains("987"));
        assert!(debug.contains("Yusuf Masood"));
    }

    #[test]
    fn test_required_and_secret_flags() {
        let required: Vec<_> = ProfileField::ALL.into_iter().filter(|f| f.is_required()).collect();
        assert_eq!(required.len(), 3);
        assert!(ProfileField::Password.is_secret());
        assert!(ProfileField::Cvv.is_secret());
        assert!(!ProfileField::CardNumber.is_secret());
    }
}
