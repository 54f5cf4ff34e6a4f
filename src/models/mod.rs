//! Data models for employees and holidays.

pub mod employee;
pub mod holiday;

pub use employee::{CreateEmployee, UpdateEmployee};
pub use holiday::{CreateHoliday, HolidayRequest, HolidayRow, LeaveBalance, UpdateHoliday};
