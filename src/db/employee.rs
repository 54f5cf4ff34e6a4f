//! Employee repository with CRUD operations.

use crate::entities::{employees, holidays, prelude::*};
use crate::models::employee::{CreateEmployee, UpdateEmployee};
use sea_orm::sea_query::{Expr, Func};
use sea_orm::*;

/// List all employees ordered by last and first name.
pub async fn list_all<C: ConnectionTrait>(db: &C) -> Result<Vec<employees::Model>, DbErr> {
    Employees::find()
        .order_by_asc(employees::Column::LastName)
        .order_by_asc(employees::Column::FirstName)
        .order_by_asc(employees::Column::Id)
        .all(db)
        .await
}

/// Get employee by ID.
pub async fn get_by_id<C: ConnectionTrait>(db: &C, id: i32) -> Result<Option<employees::Model>, DbErr> {
    Employees::find_by_id(id).one(db).await
}

/// Get employee by ID, holding a row lock until the transaction ends.
///
/// Holiday writes take this lock first so the checks for one employee run serially.
/// SQLite has no row locks and ignores it.
pub async fn lock_for_update<C: ConnectionTrait>(db: &C, id: i32) -> Result<Option<employees::Model>, DbErr> {
    Employees::find_by_id(id).lock_exclusive().one(db).await
}

/// Find employees whose "Last First" display name matches exactly.
pub async fn find_by_display_name<C: ConnectionTrait>(db: &C, name: &str) -> Result<Vec<employees::Model>, DbErr> {
    let wanted = name.trim();
    let all = list_all(db).await?;
    Ok(all.into_iter().filter(|e| e.display_name() == wanted).collect())
}

/// Create a new employee.
pub async fn create<C: ConnectionTrait>(db: &C, data: CreateEmployee) -> Result<employees::Model, DbErr> {
    let model = employees::ActiveModel {
        last_name: Set(data.last_name.trim().to_string()),
        first_name: Set(data.first_name.trim().to_string()),
        email: Set(normalize_email(&data.email)),
        phone: Set(data.phone.map(|p| p.trim().to_string()).filter(|p| !p.is_empty())),
        salary: Set(data.salary),
        role: Set(data.role),
        position: Set(data.position),
        ..Default::default()
    };
    model.insert(db).await
}

/// Update an existing employee.
pub async fn update<C: ConnectionTrait>(
    db: &C,
    id: i32,
    data: UpdateEmployee,
) -> Result<Option<employees::Model>, DbErr> {
    let existing = Employees::find_by_id(id).one(db).await?;

    match existing {
        Some(model) => {
            let mut active: employees::ActiveModel = model.into();

            if let Some(last_name) = data.last_name {
                active.last_name = Set(last_name.trim().to_string());
            }
            if let Some(first_name) = data.first_name {
                active.first_name = Set(first_name.trim().to_string());
            }
            if let Some(email) = data.email {
                active.email = Set(normalize_email(&email));
            }
            if let Some(phone) = data.phone {
                active.phone = Set(phone.map(|p| p.trim().to_string()).filter(|p| !p.is_empty()));
            }
            if let Some(salary) = data.salary {
                active.salary = Set(salary);
            }
            if let Some(role) = data.role {
                active.role = Set(role);
            }
            if let Some(position) = data.position {
                active.position = Set(position);
            }

            let updated = active.update(db).await?;
            Ok(Some(updated))
        }
        None => Ok(None),
    }
}

/// Delete an employee and their holidays.
///
/// Holidays are removed explicitly so backends without enforced foreign keys stay consistent.
pub async fn delete<C: ConnectionTrait>(db: &C, id: i32) -> Result<bool, DbErr> {
    Holidays::delete_many()
        .filter(holidays::Column::EmployeeId.eq(id))
        .exec(db)
        .await?;

    let result = Employees::delete_by_id(id).exec(db).await?;
    Ok(result.rows_affected > 0)
}

/// Check if an email is already used, ignoring case (for validation).
pub async fn email_exists<C: ConnectionTrait>(db: &C, email: &str, exclude_id: Option<i32>) -> Result<bool, DbErr> {
    let mut query = Employees::find().filter(
        Expr::expr(Func::lower(Expr::col((employees::Entity, employees::Column::Email)))).eq(normalize_email(email)),
    );

    if let Some(id) = exclude_id {
        query = query.filter(employees::Column::Id.ne(id));
    }

    let count = query.count(db).await?;
    Ok(count > 0)
}

/// Get total employee count.
pub async fn count_all<C: ConnectionTrait>(db: &C) -> Result<u64, DbErr> {
    Employees::find().count(db).await
}

/// Emails are stored trimmed and lowercased.
fn normalize_email(email: &str) -> String {
    email.trim().to_lowercase()
}
