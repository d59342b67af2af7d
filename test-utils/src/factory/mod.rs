//! Factory methods for creating test data.
//!
//! Each entity has its own factory module with a `Factory` struct for customization and
//! a `create_*` convenience function for quick default creation. Factories insert rows
//! directly through SeaORM so tests can arrange state without going through services.
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! let user = factory::user::create_user(&db).await?;
//! let pro = factory::user::UserFactory::new(&db).plan("pro").build().await?;
//! let keyword = factory::keyword::create_keyword(&db, user.id).await?;
//! ```

pub mod email_otp;
pub mod helpers;
pub mod keyword;
pub mod search_history;
pub mod session;
pub mod user;

pub use email_otp::create_otp;
pub use keyword::create_keyword;
pub use search_history::create_search_history;
pub use session::create_session;
pub use user::create_user;
