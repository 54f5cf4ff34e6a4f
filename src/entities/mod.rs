//! SeaORM entity definitions.

pub mod prelude;

pub mod employees;
pub mod holidays;
pub mod sea_orm_active_enums;
