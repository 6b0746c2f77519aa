use std::fmt;

use serde::{Deserialize, Serialize};

/// Contact answers handed to the submission collaborator.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactPayload {
    pub interest: String,
    pub name: String,
    pub email: String,
    pub message: String,
}

impl ContactPayload {
    pub fn field(&self, field: ContactField) -> &str {
        match field {
            ContactField::Name => &self.name,
            ContactField::Email => &self.email,
            ContactField::Message => &self.message,
        }
    }

    pub fn field_mut(&mut self, field: ContactField) -> &mut String {
        match field {
            ContactField::Name => &mut self.name,
            ContactField::Email => &mut self.email,
            ContactField::Message => &mut self.message,
        }
    }
}

/// Detail fields editable on the second step of the contact form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ContactField {
    Name,
    Email,
    Message,
}

impl ContactField {
    pub const ALL: [ContactField; 3] = [Self::Name, Self::Email, Self::Message];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Email => "email",
            Self::Message => "message",
        }
    }
}

impl fmt::Display for ContactField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn field_names_match_serde_names() {
        for field in ContactField::ALL {
            let json = serde_json::to_value(field).expect("field json");
            assert_eq!(json, field.as_str());
        }
    }

    #[test]
    fn payload_serializes_flat() {
        let payload = ContactPayload {
            interest: "Mentorship".into(),
            name: "Ada".into(),
            email: "ada@example.com".into(),
            message: "Hi".into(),
        };
        let value = serde_json::to_value(&payload).expect("json");
        assert_eq!(value["interest"], "Mentorship");
        assert_eq!(value["email"], "ada@example.com");
    }
}
