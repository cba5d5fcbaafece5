use crate::server::{
    data::comment::CommentRepository,
    model::comment::{CreateCommentParams, UpdateCommentParams},
};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod create;
mod delete;
mod find_in_post;
mod update;
