pub mod dto;

use crate::core::library::Role;

// Actor is whoever drives a lending operation, the desk only cares about the role it carries
pub trait Actor: Sync + Send {
    fn id(&self) -> &str;
    fn role(&self) -> Role;
    fn is_staff(&self) -> bool {
        self.role() == Role::Staff
    }
}
