//! Local identity session.
//!
//! Stands in for the external identity provider: whoever drives the app
//! (a CLI flag, a test) reports sign-in and sign-out here, and subscribers
//! are notified through a `tokio::sync::watch` channel.

use devblog_core::identity::{IdentitySession, User};
use tokio::sync::watch;
use tracing::info;

/// Identity session whose state is set explicitly.
pub struct LocalIdentitySession {
    sender: watch::Sender<Option<User>>,
}

impl LocalIdentitySession {
    /// A session with nobody signed in.
    pub fn new() -> Self {
        let (sender, _) = watch::channel(None);
        Self { sender }
    }

    /// A session with `user` already signed in.
    pub fn signed_in(user: User) -> Self {
        let (sender, _) = watch::channel(Some(user));
        Self { sender }
    }

    /// Records a successful sign-in and notifies subscribers.
    pub fn sign_in(&self, user: User) {
        info!(user = %user.uid, "Signed in");
        self.sender.send_replace(Some(user));
    }

    /// Records a sign-out and notifies subscribers.
    pub fn sign_out(&self) {
        info!("Signed out");
        self.sender.send_replace(None);
    }
}

impl Default for LocalIdentitySession {
    fn default() -> Self {
        Self::new()
    }
}

impl IdentitySession for LocalIdentitySession {
    fn current_user(&self) -> Option<User> {
        self.sender.borrow().as_ref().cloned()
    }

    fn subscribe(&self) -> watch::Receiver<Option<User>> {
        self.sender.subscribe()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_signed_out() {
        let session = LocalIdentitySession::new();
        assert!(session.current_user().is_none());
    }

    #[test]
    fn test_sign_in_and_out_notify_subscribers() {
        let session = LocalIdentitySession::new();
        let mut rx = session.subscribe();

        session.sign_in(User::new("u1"));
        assert!(rx.has_changed().unwrap());
        assert_eq!(rx.borrow_and_update().as_ref().map(|u| u.uid.as_str()), Some("u1"));

        session.sign_out();
        assert!(rx.has_changed().unwrap());
        assert!(rx.borrow_and_update().is_none());
        assert!(session.current_user().is_none());
    }

    #[test]
    fn test_signed_in_constructor() {
        let session = LocalIdentitySession::signed_in(User::new("u2"));
        assert_eq!(session.current_user().unwrap().uid.as_str(), "u2");
    }
}
