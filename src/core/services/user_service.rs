//! Account-holder settings.

use crate::core::services::require_text;
use crate::errors::Result;
use crate::model::AppState;

pub struct UserService;

impl UserService {
    /// Replaces both user fields. Free text, but neither may be blank.
    pub fn update(state: &mut AppState, name: &str, email: &str) -> Result<()> {
        let name = require_text("name", name)?;
        let email = require_text("email", email)?;
        state.user.name = name;
        state.user.email = email;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::FinanceError;
    use crate::model::User;

    #[test]
    fn update_replaces_both_fields() {
        let mut state = AppState::new(User::new("Jane", "jane@example.com"));
        UserService::update(&mut state, "Joan", "joan@example.com").unwrap();
        assert_eq!(state.user, User::new("Joan", "joan@example.com"));
    }

    #[test]
    fn update_rejects_blank_name() {
        let mut state = AppState::new(User::new("Jane", "jane@example.com"));
        let err = UserService::update(&mut state, "  ", "joan@example.com")
            .expect_err("blank name must fail");
        assert!(matches!(err, FinanceError::Validation(_)));
        assert_eq!(state.user.name, "Jane");
    }
}
