use crate::data::item::{ItemInclude, ItemRepository};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod get_all;
mod get_by_id;
