pub mod classify;
pub mod services;
pub mod session;
