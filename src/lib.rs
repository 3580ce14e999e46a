pub mod cli;
pub mod config;
pub mod database;
pub mod models;
pub mod render;
pub mod utils;

pub use config::Config;
pub use database::{Database, DatabaseError};
pub use models::Idea;
pub use render::ViewMode;
pub use utils::Profile;
