//! Route admission gate.
//!
//! The decision itself is a pure function over (path, authenticated). The
//! async wrapper exists for one reason: authentication state is initialized
//! asynchronously at startup, and the gate must never read the flag before
//! that initialization has settled - otherwise a valid session gets bounced
//! to login during the startup race. `admit` awaits the initialization
//! signal (bounded by a timeout) and only then computes the decision.

use async_trait::async_trait;
use serde::Serialize;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;
use tokio::sync::watch;
use utoipa::ToSchema;

/// Outcome of the route admission decision.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum RouteDecision {
    Allow,
    RedirectToLogin,
    RedirectToHome,
}

/// Routes reachable without a session.
pub const PUBLIC_PATHS: [&str; 3] = ["/login", "/forgot-password", "/reset-password"];

fn normalize(path: &str) -> &str {
    let path = path.split('?').next().unwrap_or(path);
    if path.len() > 1 {
        path.trim_end_matches('/')
    } else {
        path
    }
}

fn is_public(path: &str) -> bool {
    PUBLIC_PATHS.contains(&normalize(path))
}

/// Pure admission decision.
///
/// Public path + authenticated caller redirects home (an authenticated user
/// never revisits login); public path + anonymous caller is allowed;
/// protected paths allow authenticated callers and redirect everyone else
/// to login.
pub fn decide(path: &str, is_authenticated: bool) -> RouteDecision {
    match (is_public(path), is_authenticated) {
        (true, true) => RouteDecision::RedirectToHome,
        (true, false) => RouteDecision::Allow,
        (false, true) => RouteDecision::Allow,
        (false, false) => RouteDecision::RedirectToLogin,
    }
}

/// Seam between the gate and whatever owns authentication state. The token
/// storage/refresh mechanics behind `is_authenticated` are out of scope;
/// only the settled boolean is consumed here.
#[async_trait]
pub trait AuthStateProvider: Send + Sync {
    /// Resolves once authentication-state initialization has completed.
    /// Idempotent; resolves immediately when already initialized.
    async fn ensure_initialized(&self);

    /// Must only be trusted after `ensure_initialized` has resolved.
    fn is_authenticated(&self) -> bool;
}

/// Process-scoped authentication session state with an explicit lifecycle:
/// created uninitialized at app start, latched by `mark_initialized` once
/// the session restore finishes (or login completes), and reset by
/// `tear_down` on logout.
#[derive(Debug)]
pub struct SessionContext {
    authenticated: AtomicBool,
    init_tx: watch::Sender<bool>,
    init_rx: watch::Receiver<bool>,
}

impl SessionContext {
    pub fn new() -> Self {
        let (init_tx, init_rx) = watch::channel(false);
        Self {
            authenticated: AtomicBool::new(false),
            init_tx,
            init_rx,
        }
    }

    /// Record the settled authentication state and release all waiters.
    /// Calling again simply updates the flag.
    pub fn mark_initialized(&self, authenticated: bool) {
        self.authenticated.store(authenticated, Ordering::SeqCst);
        self.init_tx.send_replace(true);
    }

    /// Logout: drop the session and return to the uninitialized state.
    pub fn tear_down(&self) {
        self.authenticated.store(false, Ordering::SeqCst);
        self.init_tx.send_replace(false);
    }

    pub fn is_initialized(&self) -> bool {
        *self.init_rx.borrow()
    }
}

impl Default for SessionContext {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl AuthStateProvider for SessionContext {
    async fn ensure_initialized(&self) {
        let mut rx = self.init_rx.clone();
        // Only fails if the sender is dropped, and we own the sender.
        let _ = rx.wait_for(|initialized| *initialized).await;
    }

    fn is_authenticated(&self) -> bool {
        self.authenticated.load(Ordering::SeqCst)
    }
}

/// Gate a navigation: await settled authentication state, then decide.
///
/// Initialization is bounded by `init_timeout`; when it does not settle in
/// time the safe default is a redirect to login rather than an indefinite
/// suspension.
pub async fn admit(
    path: &str,
    provider: &dyn AuthStateProvider,
    init_timeout: Duration,
) -> RouteDecision {
    match tokio::time::timeout(init_timeout, provider.ensure_initialized()).await {
        Ok(()) => decide(path, provider.is_authenticated()),
        Err(_) => {
            tracing::warn!(
                path = %path,
                timeout_secs = init_timeout.as_secs(),
                "authentication state did not initialize in time, redirecting to login"
            );
            RouteDecision::RedirectToLogin
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    #[test]
    fn test_decision_truth_table() {
        assert_eq!(decide("/dashboard", false), RouteDecision::RedirectToLogin);
        assert_eq!(decide("/dashboard", true), RouteDecision::Allow);
        assert_eq!(decide("/login", false), RouteDecision::Allow);
        assert_eq!(decide("/login", true), RouteDecision::RedirectToHome);
    }

    #[test]
    fn test_all_public_paths_allow_anonymous() {
        for path in PUBLIC_PATHS {
            assert_eq!(decide(path, false), RouteDecision::Allow);
            assert_eq!(decide(path, true), RouteDecision::RedirectToHome);
        }
    }

    #[test]
    fn test_path_normalization() {
        assert_eq!(decide("/login/", true), RouteDecision::RedirectToHome);
        assert_eq!(decide("/login?next=/meters", true), RouteDecision::RedirectToHome);
        assert_eq!(decide("/", false), RouteDecision::RedirectToLogin);
    }

    #[tokio::test]
    async fn test_admit_after_initialization() {
        let session = SessionContext::new();
        session.mark_initialized(true);
        let decision = admit("/meters", &session, Duration::from_secs(1)).await;
        assert_eq!(decision, RouteDecision::Allow);
    }

    #[tokio::test(start_paused = true)]
    async fn test_admit_times_out_to_login() {
        let session = SessionContext::new();
        let decision = admit("/meters", &session, Duration::from_secs(10)).await;
        assert_eq!(decision, RouteDecision::RedirectToLogin);
    }

    #[tokio::test(start_paused = true)]
    async fn test_admit_waits_for_late_initialization() {
        let session = Arc::new(SessionContext::new());

        let background = session.clone();
        tokio::spawn(async move {
            tokio::time::sleep(Duration::from_secs(2)).await;
            background.mark_initialized(true);
        });

        // Decision must reflect the state set by the late initializer, not
        // a premature read of the default.
        let decision = admit("/meters", session.as_ref(), Duration::from_secs(30)).await;
        assert_eq!(decision, RouteDecision::Allow);
    }

    #[tokio::test]
    async fn test_tear_down_resets_session() {
        let session = SessionContext::new();
        session.mark_initialized(true);
        assert!(session.is_initialized());
        assert!(session.is_authenticated());

        session.tear_down();
        assert!(!session.is_initialized());
        assert!(!session.is_authenticated());
    }
}
