use crate::{
    data::profile::ProfileRepository,
    error::{farm::FarmError, AppError},
    model::profile::Profile,
};
use chrono::Utc;
use test_utils::{builder::TestBuilder, factory::profile::ProfileFactory};

mod create;
mod find_by_user_id;
mod increment_farmed;
mod increment_tokens;
mod save;
mod set_rank;
mod set_tokens;
