use crate::server::{
    data::post::PostRepository,
    model::post::{CreatePostParams, UpdatePostParams},
};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod add_votes;
mod create;
mod find_by_id;
mod update;
