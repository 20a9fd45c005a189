pub mod connection;
pub mod listings;
pub mod saved;
pub mod users;

pub use connection::{init_db, seed_if_empty, Database};
