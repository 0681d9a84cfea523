//! User records and registration payloads.

use serde::{Deserialize, Serialize};

use shop_core::{Principal, Role};

use crate::error::StoreError;
use crate::id::ObjectId;
use crate::password;

const NAME_MAX: usize = 50;
const PASSWORD_MIN: usize = 10;

/// A stored user account. The password digest is never serialized.
#[derive(Debug, Clone, Serialize)]
pub struct User {
    #[serde(rename = "_id")]
    pub id: ObjectId,
    pub name: String,
    pub email: String,
    pub role: Role,
    #[serde(skip_serializing)]
    pub password: String,
}

impl User {
    /// Build a user directly with a given role. Used for seeding and tests;
    /// the API only ever creates users through [`User::register`].
    pub fn create(
        name: &str,
        email: &str,
        plaintext_password: &str,
        role: Role,
    ) -> Result<User, StoreError> {
        let registration = Registration {
            name: name.to_string(),
            email: email.to_string(),
            password: plaintext_password.to_string(),
        };
        let mut user = Self::register(registration)?;
        user.role = role;
        Ok(user)
    }

    /// Construct a customer account from a registration payload.
    ///
    /// Registration is the only way to create users, and it always yields a
    /// customer — any role in the payload is ignored by the deserializer.
    pub fn register(registration: Registration) -> Result<User, StoreError> {
        registration.validate()?;
        Ok(User {
            id: ObjectId::new(),
            name: registration.name.trim().to_string(),
            email: registration.email.trim().to_lowercase(),
            role: Role::Customer,
            password: password::hash(&registration.password),
        })
    }

    /// Check a plaintext password against the stored digest.
    pub fn verify_password(&self, plaintext: &str) -> bool {
        password::verify(plaintext, &self.password)
    }

    /// The principal this account acts as once authenticated.
    pub fn principal(&self) -> Principal {
        Principal::new(self.id.as_str(), self.role)
    }
}

/// Registration request body. Unknown fields — including `role` — are
/// dropped by serde.
#[derive(Debug, Deserialize)]
pub struct Registration {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub password: String,
}

impl Registration {
    fn validate(&self) -> Result<(), StoreError> {
        let name = self.name.trim();
        if name.is_empty() {
            return Err(StoreError::validation("name is required"));
        }
        if name.len() > NAME_MAX {
            return Err(StoreError::validation(format!(
                "name must not exceed {NAME_MAX} characters"
            )));
        }
        let email = self.email.trim();
        if email.is_empty() {
            return Err(StoreError::validation("email is required"));
        }
        if !email.contains('@') {
            return Err(StoreError::validation("email is not valid"));
        }
        if self.password.len() < PASSWORD_MIN {
            return Err(StoreError::validation(format!(
                "password must be at least {PASSWORD_MIN} characters"
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn registration(name: &str, email: &str, password: &str) -> Registration {
        Registration {
            name: name.to_string(),
            email: email.to_string(),
            password: password.to_string(),
        }
    }

    #[test]
    fn registration_always_yields_a_customer() {
        let user = User::register(registration("Maija", "maija@example.com", "0123456789")).unwrap();
        assert_eq!(user.role, Role::Customer);
        assert!(user.verify_password("0123456789"));
    }

    #[test]
    fn registration_normalizes_email_and_name() {
        let user =
            User::register(registration("  Maija  ", "  Maija@Example.COM ", "0123456789")).unwrap();
        assert_eq!(user.name, "Maija");
        assert_eq!(user.email, "maija@example.com");
    }

    #[test]
    fn registration_payload_ignores_role_field() {
        let raw = r#"{"name":"Eve","email":"eve@example.com","password":"0123456789","role":"admin"}"#;
        let registration: Registration = serde_json::from_str(raw).unwrap();
        let user = User::register(registration).unwrap();
        assert_eq!(user.role, Role::Customer);
    }

    #[test]
    fn validation_rejects_bad_payloads() {
        assert!(User::register(registration("", "a@example.com", "0123456789")).is_err());
        assert!(User::register(registration("A", "not-an-email", "0123456789")).is_err());
        assert!(User::register(registration("A", "a@example.com", "short")).is_err());
        let long_name = "x".repeat(51);
        assert!(User::register(registration(&long_name, "a@example.com", "0123456789")).is_err());
    }

    #[test]
    fn password_digest_never_serializes() {
        let user = User::register(registration("Maija", "maija@example.com", "0123456789")).unwrap();
        let json = serde_json::to_value(&user).unwrap();
        assert!(json.get("password").is_none());
        assert_eq!(json["_id"].as_str().unwrap(), user.id.as_str());
        assert_eq!(json["role"], "customer");
    }
}
