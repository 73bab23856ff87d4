//! Display-only login stub. No credentials are checked or stored.

use crate::error::{DashboardError, Result};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionIdentity {
    pub name: String,
    pub role: String,
}

impl Default for SessionIdentity {
    fn default() -> Self {
        Self {
            name: "Guest".to_string(),
            role: "Citizen".to_string(),
        }
    }
}

impl SessionIdentity {
    /// Derives the header identity from the login form.
    pub fn from_login(user_type: &str, email: &str) -> Result<Self> {
        let email = email.trim();
        if email.is_empty() {
            return Err(DashboardError::MissingEmail);
        }
        let name = email.split('@').next().unwrap_or(email).to_string();
        Ok(Self {
            name,
            role: capitalize(user_type.trim()),
        })
    }
}

fn capitalize(value: &str) -> String {
    let mut chars = value.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_login_echoes_identity() {
        let identity = SessionIdentity::from_login("official", "priya@incois.gov.in").unwrap();
        assert_eq!(identity.name, "priya");
        assert_eq!(identity.role, "Official");
    }

    #[test]
    fn test_login_without_at_sign() {
        let identity = SessionIdentity::from_login("citizen", "ravi").unwrap();
        assert_eq!(identity.name, "ravi");
        assert_eq!(identity.role, "Citizen");
    }

    #[test]
    fn test_login_requires_email() {
        assert_eq!(SessionIdentity::from_login("citizen", "  "), Err(DashboardError::MissingEmail));
    }

    #[test]
    fn test_default_identity() {
        assert_eq!(SessionIdentity::default().name, "Guest");
    }
}
