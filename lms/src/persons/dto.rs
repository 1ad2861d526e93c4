use serde::{Deserialize, Serialize};
use uuid::Uuid;
use crate::core::library::Role;
use crate::persons::Actor;

// PersonDto identifies the staff member or patron behind a request.
#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
pub struct PersonDto {
    pub person_id: String,
    pub role: Role,
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
    #[serde(default)]
    pub login: String,
}

impl PersonDto {
    pub fn new(login: &str, role: Role) -> Self {
        Self {
            person_id: Uuid::new_v4().to_string(),
            role,
            first_name: "".to_string(),
            last_name: "".to_string(),
            login: login.to_string(),
        }
    }

    pub fn staff(login: &str) -> Self {
        Self::new(login, Role::Staff)
    }

    pub fn patron(login: &str) -> Self {
        Self::new(login, Role::Patron)
    }
}

impl Actor for PersonDto {
    fn id(&self) -> &str {
        self.person_id.as_str()
    }

    fn role(&self) -> Role {
        self.role
    }
}
