use crate::{
    model::sentiment::Sentiment,
    server::{
        data::search_history::SearchHistoryRepository,
        model::search_history::CreateSearchHistoryParam,
    },
};
use chrono::{Duration, Utc};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod create;
mod get_by_user;
