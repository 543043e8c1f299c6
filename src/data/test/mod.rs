mod category;
mod item;
mod unit_of_work;
