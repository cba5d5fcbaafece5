use crate::server::{
    data::user::UserRepository,
    error::AppError,
    model::user::{CreateUserParams, Role, UpdateUserParams, VoteDirection},
};
use test_utils::{builder::TestBuilder, factory};

mod create;
mod find_by_id;
mod set_vote;
mod taken;
mod update;
