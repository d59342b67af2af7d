pub use super::email_otp::Entity as EmailOtp;
pub use super::keyword::Entity as Keyword;
pub use super::search_history::Entity as SearchHistory;
pub use super::session::Entity as Session;
pub use super::user::Entity as User;
