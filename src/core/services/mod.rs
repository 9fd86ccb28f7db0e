pub mod advice_service;
pub mod traits;
