use serde::{Deserialize, Serialize};
use crate::utils::{GUEST_ID_LENGTH, GUEST_ID_PREFIX};

/// Identidad del comprador: la del host o un invitado persistido
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct User {
    /// Numérico en Telegram, `guest_xxxxxxxxx` para invitados
    pub id: serde_json::Value,
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub username: Option<String>,
}

impl User {
    /// Genera un invitado nuevo (`guest_` + 9 caracteres aleatorios)
    pub fn guest() -> Self {
        let random = uuid::Uuid::new_v4().simple().to_string();
        let suffix: String = random.chars().take(GUEST_ID_LENGTH).collect();
        Self {
            id: serde_json::Value::String(format!("{}{}", GUEST_ID_PREFIX, suffix)),
            first_name: "Guest".to_string(),
            username: Some("guest".to_string()),
        }
    }

    pub fn is_guest(&self) -> bool {
        self.id.as_str().is_some_and(|id| id.starts_with(GUEST_ID_PREFIX))
    }

    pub fn id_string(&self) -> String {
        match &self.id {
            serde_json::Value::String(s) => s.clone(),
            other => other.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn guest_ids_have_fixed_shape() {
        let guest = User::guest();
        assert!(guest.is_guest());
        assert_eq!(guest.id_string().len(), GUEST_ID_PREFIX.len() + GUEST_ID_LENGTH);
        assert_eq!(guest.first_name, "Guest");
        assert_ne!(User::guest().id, guest.id);
    }

    #[test]
    fn host_users_keep_numeric_ids() {
        let user: User =
            serde_json::from_str(r#"{"id": 123456, "first_name": "Ana", "username": "ana", "language_code": "es"}"#)
                .unwrap();
        assert!(!user.is_guest());
        assert_eq!(user.id_string(), "123456");
    }
}
