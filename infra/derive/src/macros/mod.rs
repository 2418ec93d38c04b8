pub mod api;
pub mod error;
pub mod runtime;
pub mod slice;
mod util;
