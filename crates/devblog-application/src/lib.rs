//! Application layer for DevBlog.
//!
//! View-models that coordinate the domain (search filter, saved-articles
//! registry) with the outer collaborators (article API, storage, identity
//! session). Each view owns its state explicitly; nothing is global.

pub mod article_store;
pub mod routes;
pub mod views;

pub use article_store::{ArticleStore, RefreshTicket, StoreState};
pub use routes::Route;
pub use views::{ArticleDetailsViewModel, DashboardViewModel, HomeViewModel};
