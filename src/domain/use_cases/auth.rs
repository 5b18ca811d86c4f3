use zeroize::Zeroizing;

use crate::constants::{MIN_PASSWORD_LEN, OPEN_ACCESS_TOKEN};
use crate::errors::AuthError;
use crate::infrastructure::auth::checksum::compute_checksum;
use crate::repositories::session::SessionRepository;
use crate::repositories::site_config::SiteConfigRepository;

/// Gates the editing surface behind the configured password checksum.
///
/// This is a convenience lock, not access control: the checksum is
/// brute-forceable and stored next to the content it protects. See
/// [`compute_checksum`].
pub struct AuthHandler<C, S>
where
    C: SiteConfigRepository,
    S: SessionRepository,
{
    pub config_repo: C,
    pub session_repo: S,
}

impl<C, S> AuthHandler<C, S>
where
    C: SiteConfigRepository,
    S: SessionRepository,
{
    pub fn new(config_repo: C, session_repo: S) -> Self {
        AuthHandler {
            config_repo,
            session_repo,
        }
    }

    /// True when no password is configured (nothing to protect), or when
    /// the session token matches the stored checksum.
    pub fn is_unlocked(&self) -> bool {
        match self.config_repo.get().admin_password {
            None => true,
            Some(checksum) => self.session_repo.token().as_deref() == Some(checksum.as_str()),
        }
    }

    /// Checks a candidate password and opens a session on success. With no
    /// password configured, succeeds immediately with the open-access
    /// sentinel token.
    pub fn login(&self, candidate: &str) -> Result<String, AuthError> {
        let config = self.config_repo.get();
        let Some(stored) = config.admin_password else {
            self.session_repo
                .set_token(Some(OPEN_ACCESS_TOKEN.to_string()));
            tracing::info!("No password configured, granting open access");
            return Ok(OPEN_ACCESS_TOKEN.to_string());
        };

        let candidate = Zeroizing::new(candidate.to_string());
        if compute_checksum(&candidate) == stored {
            self.session_repo.set_token(Some(stored.clone()));
            tracing::info!("Admin session opened");
            Ok(stored)
        } else {
            tracing::warn!("Rejected admin login attempt");
            Err(AuthError::Rejected)
        }
    }

    /// Closes the current session.
    pub fn logout(&self) {
        self.session_repo.set_token(None);
        tracing::info!("Admin session closed");
    }

    /// Configures a new password and auto-logs in. The config and session
    /// slots are written sequentially with no cross-slot transaction; an
    /// interruption in between just forces a fresh login.
    pub fn set_password(&self, new_password: &str, confirm: &str) -> Result<String, AuthError> {
        if new_password.chars().count() < MIN_PASSWORD_LEN {
            return Err(AuthError::PasswordTooShort);
        }
        if new_password != confirm {
            return Err(AuthError::PasswordMismatch);
        }

        let secret = Zeroizing::new(new_password.to_string());
        let checksum = compute_checksum(&secret);
        self.config_repo.set_password_checksum(Some(checksum.clone()));
        self.session_repo.set_token(Some(checksum.clone()));
        tracing::info!("Admin password configured");
        Ok(checksum)
    }

    /// Removes the configured password and closes the session; the editing
    /// surface is open to anyone until a new password is set.
    pub fn remove_password(&self) {
        self.config_repo.set_password_checksum(None);
        self.session_repo.set_token(None);
        tracing::info!("Admin password removed");
    }
}
