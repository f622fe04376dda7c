//! View-models for the application's pages.
//!
//! - `home`: article list with search
//! - `dashboard`: recommended articles with per-user bookmarks
//! - `article_details`: a single article
//! - `article_card`: the card summary shared by list views

pub mod article_card;
pub mod article_details;
pub mod dashboard;
pub mod home;

pub use article_card::ArticleCard;
pub use article_details::{ArticleDetailsViewModel, DetailsState};
pub use dashboard::{DashboardView, DashboardViewModel, RecommendedArticle};
pub use home::{HomeView, HomeViewModel};
