use crate::server::data::session::SessionRepository;
use chrono::{Duration, Utc};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod delete;
mod find_user_by_token;
