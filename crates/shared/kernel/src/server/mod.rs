pub mod error;
pub mod extract;
pub mod health;
pub mod index;
pub mod request_id;
pub mod router;
pub mod state;
