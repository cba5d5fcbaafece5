use crate::server::{
    data::community::CommunityRepository,
    model::community::{CreateCommunityParams, UpdateCommunityParams},
};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod create;
mod find_by_id;
mod members;
mod name_taken;
mod update;
