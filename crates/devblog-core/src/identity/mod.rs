//! Identity domain module.
//!
//! Authentication itself is delegated to an external provider. This module
//! only models what the rest of the application consumes: the signed-in
//! user and a change notification when sign-in state flips.

mod model;
mod session;

pub use model::{User, UserId};
pub use session::IdentitySession;
