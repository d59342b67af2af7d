//! Request guards and typed session access.
//!
//! - `auth` - Resolves bearer tokens to users and checks plan permissions
//! - `session` - Cookie session wrapper holding OAuth CSRF state

pub mod auth;
pub mod session;

#[cfg(test)]
mod test;
