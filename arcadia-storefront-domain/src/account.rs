use std::sync::Arc;

use arcadia_core::{User, UserId};
use log::info;

use crate::{
    ServiceError, ServiceResult,
    gateway::{ArcStoreGateway, AuthSession},
    state::Store,
    util::validate_email,
};

/// The signed-in user plus the bearer token the backend issued. Held for
/// the duration of a run only; never persisted.
#[derive(Clone, Debug, PartialEq)]
pub struct Session {
    pub user: User,
    pub access_token: String,
    pub token_type: String,
}

pub type SessionStore = Store<Option<Session>>;

pub struct AccountController {
    gateway: ArcStoreGateway,
    session: Arc<SessionStore>,
}

impl AccountController {
    pub fn new(gateway: ArcStoreGateway, session: Arc<SessionStore>) -> Self {
        Self { gateway, session }
    }

    pub fn current(&self) -> Option<Session> {
        self.session.get()
    }

    pub fn current_user_id(&self) -> ServiceResult<UserId> {
        match self.session.get() {
            Some(session) => Ok(session.user.id),
            None => ServiceError::not_possible("Not signed in"),
        }
    }

    pub async fn register(
        &self,
        name: &str,
        email: &str,
        password: &str,
    ) -> ServiceResult<Session> {
        if name.trim().is_empty() || password.is_empty() {
            return ServiceError::bad_request("Name and password are required");
        }
        let email = validate_email(email)?;
        let auth = self.gateway.register(name.trim(), &email, password).await?;
        self.finish_sign_in(name.trim(), auth).await
    }

    pub async fn login(&self, name: &str, password: &str) -> ServiceResult<Session> {
        if name.trim().is_empty() || password.is_empty() {
            return ServiceError::bad_request("Name and password are required");
        }
        let auth = self.gateway.login(name.trim(), password).await?;
        self.finish_sign_in(name.trim(), auth).await
    }

    pub fn logout(&self) {
        self.session.set(None);
    }

    /// Updates the account email and folds the confirmed user back into
    /// the session snapshot.
    pub async fn update_email(&self, email: &str) -> ServiceResult<User> {
        let user_id = self.current_user_id()?;
        let email = validate_email(email)?;
        let updated = self.gateway.update_user_email(user_id, &email).await?;
        self.session.update(|session| {
            if let Some(session) = session {
                session.user = updated.clone();
            }
        });
        Ok(updated)
    }

    // The token response carries no user record, so the signed-in user is
    // resolved by name from the user list.
    async fn finish_sign_in(&self, name: &str, auth: AuthSession) -> ServiceResult<Session> {
        let users = self.gateway.list_users().await?;
        let Some(user) = users.into_iter().find(|user| user.name == name) else {
            return ServiceError::not_found(format!("No account named {}", name));
        };
        info!("signed in as {} (user {})", user.name, user.id);
        let session = Session {
            user,
            access_token: auth.access_token,
            token_type: auth.token_type,
        };
        self.session.set(Some(session.clone()));
        Ok(session)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gateway::MockStoreGateway;

    fn seeded_mock() -> MockStoreGateway {
        let mock = MockStoreGateway::default();
        *mock.users.lock().unwrap() = vec![User {
            id: 7,
            name: "ada".to_string(),
            email: "ada@example.com".to_string(),
        }];
        mock
    }

    fn controller_with(mock: &MockStoreGateway) -> (AccountController, Arc<SessionStore>) {
        let session = Arc::new(SessionStore::new(None));
        (
            AccountController::new(Arc::new(Box::new(mock.clone())), session.clone()),
            session,
        )
    }

    #[tokio::test]
    async fn test_login_stores_the_session() {
        let mock = seeded_mock();
        let (account, session) = controller_with(&mock);

        let signed_in = account.login("ada", "pw").await.unwrap();
        assert_eq!(signed_in.user.id, 7);
        assert_eq!(signed_in.access_token, "token-ada");
        assert_eq!(session.get().unwrap().user.name, "ada");
        assert_eq!(account.current_user_id().unwrap(), 7);

        account.logout();
        assert!(account.current().is_none());
    }

    #[tokio::test]
    async fn test_login_requires_credentials() {
        let mock = seeded_mock();
        let (account, _) = controller_with(&mock);
        assert!(account.login("", "pw").await.is_err());
        assert!(account.login("ada", "").await.is_err());
        assert!(mock.call_log().is_empty());
    }

    #[tokio::test]
    async fn test_register_creates_and_signs_in() {
        let mock = seeded_mock();
        let (account, _) = controller_with(&mock);

        let session = account
            .register("grace", "grace@example.com", "pw")
            .await
            .unwrap();
        assert_eq!(session.user.name, "grace");

        assert!(account.register("x", "not-an-email", "pw").await.is_err());
    }

    #[tokio::test]
    async fn test_update_email_needs_a_session() {
        let mock = seeded_mock();
        let (account, session) = controller_with(&mock);
        assert!(account.update_email("new@example.com").await.is_err());

        account.login("ada", "pw").await.unwrap();
        let updated = account.update_email("new@example.com").await.unwrap();
        assert_eq!(updated.email, "new@example.com");
        assert_eq!(session.get().unwrap().user.email, "new@example.com");
    }
}
