//! Holiday repository with CRUD operations and the rule queries.

use crate::entities::{holidays, prelude::*};
use crate::models::holiday::{CreateHoliday, HolidayRow, UpdateHoliday};
use crate::rules::HolidayPeriod;
use chrono::NaiveDate;
use sea_orm::*;

/// List all holidays with the employee name, ordered by start date.
pub async fn list_all<C: ConnectionTrait>(db: &C) -> Result<Vec<HolidayRow>, DbErr> {
    let rows = Holidays::find()
        .find_also_related(Employees)
        .order_by_asc(holidays::Column::StartDate)
        .order_by_asc(holidays::Column::Id)
        .all(db)
        .await?;

    Ok(rows
        .into_iter()
        .map(|(holiday, employee)| HolidayRow::from_models(holiday, employee.as_ref()))
        .collect())
}

/// List the holidays of one employee, ordered by start date.
pub async fn list_by_employee<C: ConnectionTrait>(db: &C, employee_id: i32) -> Result<Vec<holidays::Model>, DbErr> {
    Holidays::find()
        .filter(holidays::Column::EmployeeId.eq(employee_id))
        .order_by_asc(holidays::Column::StartDate)
        .all(db)
        .await
}

/// Get holiday by ID.
pub async fn get_by_id<C: ConnectionTrait>(db: &C, id: i32) -> Result<Option<holidays::Model>, DbErr> {
    Holidays::find_by_id(id).one(db).await
}

/// Get holiday by ID joined with the employee name.
pub async fn get_row_by_id<C: ConnectionTrait>(db: &C, id: i32) -> Result<Option<HolidayRow>, DbErr> {
    let row = Holidays::find_by_id(id).find_also_related(Employees).one(db).await?;

    Ok(row.map(|(holiday, employee)| HolidayRow::from_models(holiday, employee.as_ref())))
}

/// Create a new holiday.
pub async fn create<C: ConnectionTrait>(db: &C, data: CreateHoliday) -> Result<holidays::Model, DbErr> {
    let model = holidays::ActiveModel {
        employee_id: Set(data.employee_id),
        start_date: Set(data.start_date),
        end_date: Set(data.end_date),
        holiday_type: Set(data.holiday_type),
        ..Default::default()
    };
    model.insert(db).await
}

/// Update an existing holiday.
pub async fn update<C: ConnectionTrait>(
    db: &C,
    id: i32,
    data: UpdateHoliday,
) -> Result<Option<holidays::Model>, DbErr> {
    let existing = Holidays::find_by_id(id).one(db).await?;

    match existing {
        Some(model) => {
            let mut active: holidays::ActiveModel = model.into();

            if let Some(employee_id) = data.employee_id {
                active.employee_id = Set(employee_id);
            }
            if let Some(start_date) = data.start_date {
                active.start_date = Set(start_date);
            }
            if let Some(end_date) = data.end_date {
                active.end_date = Set(end_date);
            }
            if let Some(holiday_type) = data.holiday_type {
                active.holiday_type = Set(holiday_type);
            }

            let updated = active.update(db).await?;
            Ok(Some(updated))
        }
        None => Ok(None),
    }
}

/// Delete a holiday by ID.
pub async fn delete<C: ConnectionTrait>(db: &C, id: i32) -> Result<bool, DbErr> {
    let result = Holidays::delete_by_id(id).exec(db).await?;
    Ok(result.rows_affected > 0)
}

/// Check whether the employee already has a holiday sharing a day with `period`.
///
/// `exclude_id` skips the holiday being modified.
pub async fn has_overlap<C: ConnectionTrait>(
    db: &C,
    employee_id: i32,
    period: &HolidayPeriod,
    exclude_id: Option<i32>,
) -> Result<bool, DbErr> {
    let mut query = Holidays::find()
        .filter(holidays::Column::EmployeeId.eq(employee_id))
        .filter(holidays::Column::StartDate.lte(period.end()))
        .filter(holidays::Column::EndDate.gte(period.start()));

    if let Some(id) = exclude_id {
        query = query.filter(holidays::Column::Id.ne(id));
    }

    let count = query.count(db).await?;
    Ok(count > 0)
}

/// Days (inclusive) of the employee's holidays starting in `year`.
pub async fn days_taken_in_year<C: ConnectionTrait>(
    db: &C,
    employee_id: i32,
    year: i32,
    exclude_id: Option<i32>,
) -> Result<i64, DbErr> {
    let (Some(first), Some(last)) = (
        NaiveDate::from_ymd_opt(year, 1, 1),
        NaiveDate::from_ymd_opt(year, 12, 31),
    ) else {
        return Ok(0);
    };

    let mut query = Holidays::find()
        .filter(holidays::Column::EmployeeId.eq(employee_id))
        .filter(holidays::Column::StartDate.between(first, last));

    if let Some(id) = exclude_id {
        query = query.filter(holidays::Column::Id.ne(id));
    }

    let rows = query.all(db).await?;
    Ok(rows
        .iter()
        .map(|h| (h.end_date - h.start_date).num_days() + 1)
        .sum())
}

/// Count holidays covering the given day.
pub async fn count_active_on<C: ConnectionTrait>(db: &C, date: NaiveDate) -> Result<u64, DbErr> {
    Holidays::find()
        .filter(holidays::Column::StartDate.lte(date))
        .filter(holidays::Column::EndDate.gte(date))
        .count(db)
        .await
}

/// Get total holiday count.
pub async fn count_all<C: ConnectionTrait>(db: &C) -> Result<u64, DbErr> {
    Holidays::find().count(db).await
}
