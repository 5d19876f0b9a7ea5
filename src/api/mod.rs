//! API layer - HTTP endpoints

pub mod health;
pub mod router;
pub mod state;
pub mod tokens;
pub mod types;

pub use router::create_router;
pub use state::AppState;
