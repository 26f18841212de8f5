// handlers/public/auth/mod.rs - Credential check against the users file

pub mod login; // POST /api/login

pub use login::{login, LoginRequest, LoginResponse};
