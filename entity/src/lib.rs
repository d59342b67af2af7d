//! SeaORM entities for the Vibe Analytics schema.

pub mod prelude;

pub mod email_otp;
pub mod keyword;
pub mod search_history;
pub mod session;
pub mod user;
