use crate::server::data::email_otp::EmailOtpRepository;
use chrono::{Duration, Utc};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod is_valid;
