//! Identity session trait.

use tokio::sync::watch;

use super::model::User;

/// Source of the current user and of sign-in/sign-out notifications.
///
/// Every change, including the change to "no user", is published on the
/// watch channel returned by [`IdentitySession::subscribe`].
pub trait IdentitySession: Send + Sync {
    /// The currently signed-in user, if any.
    fn current_user(&self) -> Option<User>;

    /// Subscribes to session changes.
    fn subscribe(&self) -> watch::Receiver<Option<User>>;
}
