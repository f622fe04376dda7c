pub mod articles;
pub mod dashboard;
pub mod saved;
pub mod show;
