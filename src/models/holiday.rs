//! Holiday DTOs and view models.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::entities::sea_orm_active_enums::HolidayType;
use crate::entities::{employees, holidays};
use crate::rules::HolidayPeriod;

/// Holiday as entered in the form or on the command line.
///
/// Dates are kept as raw text so that format errors surface from the rules.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HolidayRequest {
    pub employee_id: i32,
    pub start_date: String,
    pub end_date: String,
    pub holiday_type: HolidayType,
}

/// DTO for creating a holiday.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateHoliday {
    pub employee_id: i32,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub holiday_type: HolidayType,
}

/// DTO for updating a holiday.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateHoliday {
    pub employee_id: Option<i32>,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub holiday_type: Option<HolidayType>,
}

/// Holiday joined with its employee, one row of the holiday table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HolidayRow {
    pub id: i32,
    pub employee_id: i32,
    pub employee_name: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub holiday_type: HolidayType,
    pub days: i64,
}

/// Yearly leave balance of one employee.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeaveBalance {
    pub employee_id: i32,
    pub year: i32,
    pub allowance: u32,
    pub taken: i64,
    pub remaining: i64,
}

impl CreateHoliday {
    pub fn new(employee_id: i32, period: HolidayPeriod, holiday_type: HolidayType) -> Self {
        Self {
            employee_id,
            start_date: period.start(),
            end_date: period.end(),
            holiday_type,
        }
    }
}

impl HolidayRow {
    /// Build a table row from a holiday and its (possibly missing) employee.
    pub fn from_models(holiday: holidays::Model, employee: Option<&employees::Model>) -> Self {
        let days = (holiday.end_date - holiday.start_date).num_days() + 1;
        Self {
            id: holiday.id,
            employee_id: holiday.employee_id,
            employee_name: employee.map(|e| e.display_name()).unwrap_or_default(),
            start_date: holiday.start_date,
            end_date: holiday.end_date,
            holiday_type: holiday.holiday_type,
            days,
        }
    }

    /// Whether the holiday covers the given day.
    pub fn is_active_on(&self, date: NaiveDate) -> bool {
        self.start_date <= date && date <= self.end_date
    }
}
