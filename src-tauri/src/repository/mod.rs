//! Repository Layer
//!
//! SQLite connection setup and the preference stores behind the launch router.

mod db;
mod preference_repo;


pub use db::init_db;
pub use preference_repo::{AppPreferences, SqlitePreferences};
