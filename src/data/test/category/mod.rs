use crate::data::category::{CategoryInclude, CategoryRepository};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod get_all;
mod get_by_id;
