use crate::server::{data::keyword::KeywordRepository, model::keyword::CreateKeywordParam};
use chrono::{Duration, Utc};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod create;
mod delete;
mod get_by_user;
