// Signed-in user state backed by the session cookie

use std::sync::Arc;

use parking_lot::RwLock;
use tracing::{info, warn};

use facility_api::{LoginRequest, UserInfo};
use facility_client::ResourceClient;

use crate::error::FieldError;
use crate::messages;
use crate::mutation::SubmitOutcome;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SessionState {
    pub user: Option<UserInfo>,
    pub loading: bool,
    pub error: Option<String>,
}

pub struct SessionController {
    client: Arc<ResourceClient>,
    state: RwLock<SessionState>,
}

impl SessionController {
    pub fn new(client: Arc<ResourceClient>) -> Self {
        Self {
            client,
            state: RwLock::new(SessionState::default()),
        }
    }

    pub fn state(&self) -> SessionState {
        self.state.read().clone()
    }

    pub fn current(&self) -> Option<UserInfo> {
        self.state.read().user.clone()
    }

    /// Authenticate, then load the full profile of the signed-in user
    pub async fn login(&self, username: &str, password: &str) -> SubmitOutcome<UserInfo> {
        let missing = if username.is_empty() {
            Some("username")
        } else if password.is_empty() {
            Some("password")
        } else {
            None
        };
        if let Some(field) = missing {
            let err = FieldError::new(field, "required", messages::CREDENTIALS_REQUIRED);
            self.state.write().error = Some(err.message.clone());
            return SubmitOutcome::Invalid(err);
        }

        {
            let mut state = self.state.write();
            state.loading = true;
            state.error = None;
        }

        let request = LoginRequest {
            username: username.to_string(),
            password: password.to_string(),
        };
        let outcome = match self.client.login(&request).await {
            Some(_) => match self.client.current_user().await {
                Some(user) => Ok(user),
                None => Err(messages::SESSION_LOAD_FAILED),
            },
            None => Err(messages::LOGIN_FAILED),
        };

        let mut state = self.state.write();
        state.loading = false;
        match outcome {
            Ok(user) => {
                info!(username = %user.username, role = %user.role, "Signed in");
                state.user = Some(user.clone());
                SubmitOutcome::Completed(user)
            }
            Err(message) => {
                warn!(username, "Sign-in failed");
                state.error = Some(message.to_string());
                SubmitOutcome::Failed(message.to_string())
            }
        }
    }

    /// Load the signed-in user from an existing session
    pub async fn refresh(&self) -> Option<UserInfo> {
        {
            let mut state = self.state.write();
            state.loading = true;
            state.error = None;
        }

        let user = self.client.current_user().await;

        let mut state = self.state.write();
        state.loading = false;
        match &user {
            Some(user) => state.user = Some(user.clone()),
            None => {
                state.user = None;
                state.error = Some(messages::SESSION_LOAD_FAILED.to_string());
            }
        }
        user
    }

    /// End the session. The local user is cleared even if the server call
    /// fails.
    pub async fn logout(&self) -> bool {
        let result = self.client.logout().await;

        let mut state = self.state.write();
        state.user = None;
        match result {
            Some(_) => {
                info!("Signed out");
                state.error = None;
                true
            }
            None => {
                state.error = Some(messages::LOGOUT_FAILED.to_string());
                false
            }
        }
    }
}
