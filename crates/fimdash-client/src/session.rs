// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Session and route guard.
//
// A session exists when the cookie jar holds the `token` cookie. That alone
// decides redirects; protected content additionally waits for the backend's
// `check-auth/` to confirm the cookie is still valid.

use tokio::sync::watch;
use tracing::{info, warn};

use fimdash_core::error::Result;

use crate::api::ApiClient;

/// Which side of the auth boundary a route sits on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouteKind {
    Login,
    Protected,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouteDecision {
    Allow,
    RedirectToLogin,
    RedirectToHome,
}

/// Redirect rule: no token on a protected route goes to the login page, a
/// token on the login page goes to the dashboard.
pub fn guard(route: RouteKind, has_token: bool) -> RouteDecision {
    match (route, has_token) {
        (RouteKind::Protected, false) => RouteDecision::RedirectToLogin,
        (RouteKind::Login, true) => RouteDecision::RedirectToHome,
        _ => RouteDecision::Allow,
    }
}

/// Where the backend check of the current session stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthState {
    /// Not checked since start-up or the last login.
    Unknown,
    Checking,
    Verified,
    SignedOut,
}

/// Owns login, logout and session verification.
#[derive(Clone)]
pub struct Session {
    api: ApiClient,
    state: watch::Sender<AuthState>,
}

impl Session {
    pub fn new(api: ApiClient) -> Self {
        let (state, _rx) = watch::channel(AuthState::Unknown);
        Self { api, state }
    }

    pub fn has_token(&self) -> bool {
        self.api.has_session_cookie()
    }

    pub fn decide(&self, route: RouteKind) -> RouteDecision {
        guard(route, self.has_token())
    }

    pub fn state(&self) -> AuthState {
        *self.state.borrow()
    }

    pub fn subscribe(&self) -> watch::Receiver<AuthState> {
        self.state.subscribe()
    }

    pub async fn login(&self, username: &str, password: &str) -> Result<()> {
        self.api.login(username, password).await?;
        self.state.send_replace(AuthState::Verified);
        Ok(())
    }

    /// Sign out. The local session ends even if the backend call fails.
    pub async fn logout(&self) -> Result<()> {
        let result = self.api.logout().await;
        self.state.send_replace(AuthState::SignedOut);
        info!("signed out");
        result
    }

    /// Ask the backend whether the session cookie is still valid.
    pub async fn verify(&self) -> bool {
        if !self.has_token() {
            self.state.send_replace(AuthState::SignedOut);
            return false;
        }
        self.state.send_replace(AuthState::Checking);
        match self.api.check_auth().await {
            Ok(()) => {
                self.state.send_replace(AuthState::Verified);
                true
            }
            Err(e) => {
                warn!(error = %e, "session check failed");
                self.api.forget_session();
                self.state.send_replace(AuthState::SignedOut);
                false
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use fimdash_core::DashboardConfig;

    use super::*;

    #[test]
    fn guard_redirects() {
        assert_eq!(guard(RouteKind::Protected, false), RouteDecision::RedirectToLogin);
        assert_eq!(guard(RouteKind::Protected, true), RouteDecision::Allow);
        assert_eq!(guard(RouteKind::Login, true), RouteDecision::RedirectToHome);
        assert_eq!(guard(RouteKind::Login, false), RouteDecision::Allow);
    }

    #[tokio::test]
    async fn verify_without_token_signs_out_locally() {
        let api = ApiClient::new(&DashboardConfig::default()).unwrap();
        let session = Session::new(api);
        assert_eq!(session.state(), AuthState::Unknown);
        assert_eq!(session.decide(RouteKind::Protected), RouteDecision::RedirectToLogin);

        assert!(!session.verify().await);
        assert_eq!(session.state(), AuthState::SignedOut);
    }
}
