// handlers/public/mod.rs - Public handlers (no authentication required)
//
// Security Level: None (completely public access)
// Middleware: CORS and request tracing only

pub mod auth;

pub use auth::*;
