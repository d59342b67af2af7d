mod email_otp;
mod keyword;
mod search_history;
mod session;
mod user;
