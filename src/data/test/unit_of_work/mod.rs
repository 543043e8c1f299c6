use crate::data::{category::CategoryInclude, item::ItemInclude, unit_of_work::UnitOfWork};
use sea_orm::{ActiveValue, DbErr, EntityTrait};
use test_utils::{builder::TestBuilder, factory};

mod delete;
mod rollback;
mod update;
