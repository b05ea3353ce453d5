use crate::{
    data::farm::FarmRepository,
    error::{farm::FarmError, AppError},
};
use chrono::Utc;
use test_utils::{builder::TestBuilder, factory::farm::FarmFactory};

mod apply_farm_delta;
mod create;
mod find_by_server_id;
mod set_channel;
mod set_daily_goal;
