use crate::server::{
    data::user::UserRepository,
    model::user::{AuthProvider, CreateUserParam, Plan},
};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod create;
mod mark_verified;
mod try_consume_query;
mod upgrade_to_pro;
