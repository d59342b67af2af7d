//! Background cron jobs.

pub mod session_cleanup;
