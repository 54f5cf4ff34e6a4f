//! Holiday request handling: runs the rule set, then persists.
//!
//! The database checks and the write of each operation share one transaction
//! that starts by locking the employee row, so requests for the same employee
//! are checked one after the other on PostgreSQL and MySQL. SQLite allows a
//! single writer at a time.

use sea_orm::{DatabaseConnection, Iterable, TransactionTrait};
use tracing::{info, warn};

use crate::config::LeaveConfig;
use crate::db;
use crate::entities::holidays;
use crate::entities::sea_orm_active_enums::HolidayType;
use crate::error::{AppError, Result};
use crate::models::holiday::{CreateHoliday, HolidayRequest, LeaveBalance, UpdateHoliday};
use crate::rules::{self, HolidayPeriod};

/// Validate and record a new holiday.
pub async fn add_holiday(
    db: &DatabaseConnection,
    policy: &LeaveConfig,
    request: &HolidayRequest,
) -> Result<holidays::Model> {
    let period = validate_request(policy, request)?;

    let txn = db.begin().await?;
    check_against_stored(&txn, policy, request.employee_id, &period, None).await?;
    let model = db::holiday::create(&txn, CreateHoliday::new(request.employee_id, period, request.holiday_type)).await?;
    txn.commit().await?;

    info!(
        "Holiday {} added for employee {} ({} to {}, {} days)",
        model.id,
        model.employee_id,
        model.start_date,
        model.end_date,
        period.days()
    );
    Ok(model)
}

/// Validate and apply changes to an existing holiday.
///
/// The holiday being modified is left out of the overlap and allowance checks.
pub async fn modify_holiday(
    db: &DatabaseConnection,
    policy: &LeaveConfig,
    id: i32,
    request: &HolidayRequest,
) -> Result<holidays::Model> {
    let period = validate_request(policy, request)?;

    let txn = db.begin().await?;
    if db::holiday::get_by_id(&txn, id).await?.is_none() {
        return Err(AppError::not_found(format!("Holiday {id}")));
    }
    check_against_stored(&txn, policy, request.employee_id, &period, Some(id)).await?;

    let data = UpdateHoliday {
        employee_id: Some(request.employee_id),
        start_date: Some(period.start()),
        end_date: Some(period.end()),
        holiday_type: Some(request.holiday_type),
    };
    let model = db::holiday::update(&txn, id, data)
        .await?
        .ok_or_else(|| AppError::not_found(format!("Holiday {id}")))?;
    txn.commit().await?;

    info!("Holiday {} modified ({} to {})", model.id, model.start_date, model.end_date);
    Ok(model)
}

/// Delete a holiday.
pub async fn delete_holiday(db: &DatabaseConnection, id: i32) -> Result<()> {
    if db::holiday::delete(db, id).await? {
        info!("Holiday {} deleted", id);
        Ok(())
    } else {
        Err(AppError::not_found(format!("Holiday {id}")))
    }
}

/// Leave balance of an employee for a calendar year.
pub async fn balance(db: &DatabaseConnection, policy: &LeaveConfig, employee_id: i32, year: i32) -> Result<LeaveBalance> {
    if db::employee::get_by_id(db, employee_id).await?.is_none() {
        return Err(AppError::not_found(format!("Employee {employee_id}")));
    }

    let taken = db::holiday::days_taken_in_year(db, employee_id, year, None).await?;
    Ok(LeaveBalance {
        employee_id,
        year,
        allowance: policy.yearly_allowance_days,
        taken,
        remaining: rules::remaining_allowance(taken, policy),
    })
}

/// Every holiday type, in display order.
pub fn holiday_types() -> Vec<HolidayType> {
    HolidayType::iter().collect()
}

/// Checks that need no database: date format, ordering, duration.
fn validate_request(policy: &LeaveConfig, request: &HolidayRequest) -> Result<HolidayPeriod> {
    let period = HolidayPeriod::parse(&request.start_date, &request.end_date).inspect_err(|e| {
        warn!("Rejected holiday for employee {}: {}", request.employee_id, e);
    })?;
    rules::check_duration(&period, policy).inspect_err(|e| {
        warn!("Rejected holiday for employee {}: {}", request.employee_id, e);
    })?;
    Ok(period)
}

/// Checks against the employee's stored holidays: existence, overlap, yearly allowance.
async fn check_against_stored<C: sea_orm::ConnectionTrait>(
    db: &C,
    policy: &LeaveConfig,
    employee_id: i32,
    period: &HolidayPeriod,
    exclude_id: Option<i32>,
) -> Result<()> {
    if db::employee::lock_for_update(db, employee_id).await?.is_none() {
        return Err(AppError::not_found(format!("Employee {employee_id}")));
    }

    if db::holiday::has_overlap(db, employee_id, period, exclude_id).await? {
        warn!(
            "Rejected holiday for employee {}: overlaps an existing holiday ({} to {})",
            employee_id,
            period.start(),
            period.end()
        );
        return Err(AppError::Overlapping);
    }

    let taken = db::holiday::days_taken_in_year(db, employee_id, period.year(), exclude_id).await?;
    rules::check_allowance(taken, period, policy).inspect_err(|e| {
        warn!("Rejected holiday for employee {}: {}", employee_id, e);
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::connection::connect_memory;
    use crate::entities::sea_orm_active_enums::{Position, Role};
    use crate::models::employee::CreateEmployee;

    async fn seed_employee(db: &DatabaseConnection, last: &str) -> i32 {
        db::employee::create(
            db,
            CreateEmployee {
                last_name: last.to_string(),
                first_name: "Jean".to_string(),
                email: format!("{}@example.com", last.to_lowercase()),
                phone: None,
                salary: 2800.0,
                role: Role::Employee,
                position: Position::Pilot,
            },
        )
        .await
        .unwrap()
        .id
    }

    fn request(employee_id: i32, start: &str, end: &str) -> HolidayRequest {
        HolidayRequest {
            employee_id,
            start_date: start.to_string(),
            end_date: end.to_string(),
            holiday_type: HolidayType::Paid,
        }
    }

    #[tokio::test]
    async fn test_add_holiday() {
        let db = connect_memory().await;
        let policy = LeaveConfig::default();
        let emp = seed_employee(&db, "Bernard").await;

        let model = add_holiday(&db, &policy, &request(emp, "2024-07-01", "2024-07-05"))
            .await
            .unwrap();
        assert_eq!(model.employee_id, emp);
        assert_eq!(model.start_date.to_string(), "2024-07-01");

        let rows = db::holiday::list_all(&db).await.unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].employee_name, "Bernard Jean");
    }

    #[tokio::test]
    async fn test_add_rejects_bad_input_before_touching_db() {
        let db = connect_memory().await;
        let policy = LeaveConfig::default();
        let emp = seed_employee(&db, "Thomas").await;

        let err = add_holiday(&db, &policy, &request(emp, "01/07/2024", "2024-07-05"))
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::InvalidDate(_)));

        let err = add_holiday(&db, &policy, &request(emp, "2024-07-05", "2024-07-05"))
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::EndNotAfterStart));

        let err = add_holiday(&db, &policy, &request(emp, "2024-07-01", "2024-07-26"))
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::DurationExceeded { days: 26, max: 25 }));

        assert_eq!(db::holiday::count_all(&db).await.unwrap(), 0);
    }

    #[tokio::test]
    async fn test_add_rejects_unknown_employee() {
        let db = connect_memory().await;
        let policy = LeaveConfig::default();

        let err = add_holiday(&db, &policy, &request(42, "2024-07-01", "2024-07-05"))
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::NotFound(_)));
    }

    #[tokio::test]
    async fn test_add_rejects_overlap() {
        let db = connect_memory().await;
        let policy = LeaveConfig::default();
        let emp = seed_employee(&db, "Robert").await;
        let other = seed_employee(&db, "Richard").await;

        add_holiday(&db, &policy, &request(emp, "2024-07-10", "2024-07-15"))
            .await
            .unwrap();

        let err = add_holiday(&db, &policy, &request(emp, "2024-07-15", "2024-07-18"))
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::Overlapping));

        // Same dates for a colleague are fine.
        add_holiday(&db, &policy, &request(other, "2024-07-15", "2024-07-18"))
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn test_add_rejects_yearly_allowance_overrun() {
        let db = connect_memory().await;
        let policy = LeaveConfig::default();
        let emp = seed_employee(&db, "Moreau").await;

        // 20 days in February and 5 days in May use the whole allowance.
        add_holiday(&db, &policy, &request(emp, "2024-02-01", "2024-02-20"))
            .await
            .unwrap();
        add_holiday(&db, &policy, &request(emp, "2024-05-06", "2024-05-10"))
            .await
            .unwrap();

        let err = add_holiday(&db, &policy, &request(emp, "2024-09-02", "2024-09-03"))
            .await
            .unwrap_err();
        match err {
            AppError::AllowanceExceeded {
                taken,
                requested,
                allowance,
            } => assert_eq!((taken, requested, allowance), (25, 2, 25)),
            other => panic!("unexpected error: {other:?}"),
        }

        // The next year starts from zero.
        add_holiday(&db, &policy, &request(emp, "2025-01-06", "2025-01-10"))
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn test_modify_keeps_own_dates_valid() {
        let db = connect_memory().await;
        let policy = LeaveConfig::default();
        let emp = seed_employee(&db, "Simon").await;

        let created = add_holiday(&db, &policy, &request(emp, "2024-03-04", "2024-03-15"))
            .await
            .unwrap();

        let mut changed = request(emp, "2024-03-04", "2024-03-15");
        changed.holiday_type = HolidayType::Sick;
        let modified = modify_holiday(&db, &policy, created.id, &changed).await.unwrap();
        assert_eq!(modified.holiday_type, HolidayType::Sick);

        let extended = modify_holiday(&db, &policy, created.id, &request(emp, "2024-03-04", "2024-03-28"))
            .await
            .unwrap();
        assert_eq!(extended.end_date.to_string(), "2024-03-28");
    }

    #[tokio::test]
    async fn test_modify_applies_full_rule_set() {
        let db = connect_memory().await;
        let policy = LeaveConfig::default();
        let emp = seed_employee(&db, "Laurent").await;

        let first = add_holiday(&db, &policy, &request(emp, "2024-04-01", "2024-04-05"))
            .await
            .unwrap();
        add_holiday(&db, &policy, &request(emp, "2024-06-03", "2024-06-20"))
            .await
            .unwrap();

        let err = modify_holiday(&db, &policy, first.id, &request(emp, "2024-06-19", "2024-06-22"))
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::Overlapping));

        // 18 days in June leave 7: growing the April holiday to 8 days is too much.
        let err = modify_holiday(&db, &policy, first.id, &request(emp, "2024-04-01", "2024-04-08"))
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::AllowanceExceeded { taken: 18, .. }));

        let err = modify_holiday(&db, &policy, 999, &request(emp, "2024-04-01", "2024-04-02"))
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::NotFound(_)));
    }

    #[tokio::test]
    async fn test_modify_rejects_bad_input_and_keeps_row() {
        let db = connect_memory().await;
        let policy = LeaveConfig::default();
        let emp = seed_employee(&db, "Moreau").await;

        let created = add_holiday(&db, &policy, &request(emp, "2024-05-06", "2024-05-10"))
            .await
            .unwrap();

        let err = modify_holiday(&db, &policy, created.id, &request(emp, "2024/04/01", "2024-04-05"))
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::InvalidDate(_)));

        let err = modify_holiday(&db, &policy, created.id, &request(emp, "2024-05-08", "2024-05-08"))
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::EndNotAfterStart));

        let err = modify_holiday(&db, &policy, created.id, &request(emp, "2024-05-01", "2024-05-26"))
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::DurationExceeded { days: 26, max: 25 }));

        let err = modify_holiday(&db, &policy, created.id, &request(999, "2024-05-13", "2024-05-17"))
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::NotFound(_)));

        let stored = db::holiday::get_by_id(&db, created.id).await.unwrap().unwrap();
        assert_eq!(stored.employee_id, emp);
        assert_eq!(stored.start_date, created.start_date);
        assert_eq!(stored.end_date, created.end_date);
    }

    #[tokio::test]
    async fn test_cross_year_holiday_counts_in_start_year() {
        let db = connect_memory().await;
        let policy = LeaveConfig::default();
        let emp = seed_employee(&db, "Lambert").await;

        add_holiday(&db, &policy, &request(emp, "2024-12-28", "2025-01-05"))
            .await
            .unwrap();

        assert_eq!(balance(&db, &policy, emp, 2024).await.unwrap().taken, 9);
        assert_eq!(balance(&db, &policy, emp, 2025).await.unwrap().taken, 0);
    }

    #[tokio::test]
    async fn test_locked_employee_lookup() {
        let db = connect_memory().await;
        let emp = seed_employee(&db, "Fabre").await;

        let txn = db.begin().await.unwrap();
        let locked = db::employee::lock_for_update(&txn, emp).await.unwrap();
        assert_eq!(locked.map(|e| e.id), Some(emp));
        assert!(db::employee::lock_for_update(&txn, emp + 1).await.unwrap().is_none());
        txn.commit().await.unwrap();
    }

    #[tokio::test]
    async fn test_delete_and_balance() {
        let db = connect_memory().await;
        let policy = LeaveConfig::default();
        let emp = seed_employee(&db, "Garcia").await;

        let created = add_holiday(&db, &policy, &request(emp, "2024-10-07", "2024-10-11"))
            .await
            .unwrap();

        let balance_before = balance(&db, &policy, emp, 2024).await.unwrap();
        assert_eq!(balance_before.taken, 5);
        assert_eq!(balance_before.remaining, 20);
        assert_eq!(balance_before.allowance, 25);

        delete_holiday(&db, created.id).await.unwrap();
        assert!(matches!(
            delete_holiday(&db, created.id).await,
            Err(AppError::NotFound(_))
        ));

        let balance_after = balance(&db, &policy, emp, 2024).await.unwrap();
        assert_eq!(balance_after.taken, 0);
        assert_eq!(balance_after.remaining, 25);

        assert!(matches!(
            balance(&db, &policy, emp + 1, 2024).await,
            Err(AppError::NotFound(_))
        ));
    }

    #[tokio::test]
    async fn test_custom_policy_limits() {
        let db = connect_memory().await;
        let policy = LeaveConfig {
            max_duration_days: 5,
            yearly_allowance_days: 8,
        };
        let emp = seed_employee(&db, "Fournier").await;

        let err = add_holiday(&db, &policy, &request(emp, "2024-01-01", "2024-01-06"))
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::DurationExceeded { days: 6, max: 5 }));

        add_holiday(&db, &policy, &request(emp, "2024-01-01", "2024-01-05"))
            .await
            .unwrap();
        let err = add_holiday(&db, &policy, &request(emp, "2024-02-01", "2024-02-04"))
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::AllowanceExceeded { .. }));
    }

    #[test]
    fn test_holiday_types_lists_every_variant() {
        assert_eq!(
            holiday_types(),
            vec![HolidayType::Paid, HolidayType::Sick, HolidayType::Unpaid]
        );
    }
}
