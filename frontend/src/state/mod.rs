pub mod auth;
pub mod refresh;
pub mod session;
