//! Employee record handling: field checks, email uniqueness, cascading delete.

use sea_orm::{DatabaseConnection, TransactionTrait};
use tracing::info;

use crate::db;
use crate::entities::employees;
use crate::error::{AppError, Result};
use crate::models::employee::{CreateEmployee, UpdateEmployee};

/// Validate and insert a new employee.
pub async fn create_employee(db: &DatabaseConnection, data: CreateEmployee) -> Result<employees::Model> {
    data.validate()?;

    let txn = db.begin().await?;
    if db::employee::email_exists(&txn, &data.email, None).await? {
        return Err(AppError::validation(format!("Email '{}' is already used", data.email.trim())));
    }
    let model = db::employee::create(&txn, data).await?;
    txn.commit().await?;

    info!("Employee {} created: {}", model.id, model.display_name());
    Ok(model)
}

/// Validate and apply changes to an employee.
pub async fn update_employee(db: &DatabaseConnection, id: i32, data: UpdateEmployee) -> Result<employees::Model> {
    data.validate()?;

    let txn = db.begin().await?;
    if let Some(email) = &data.email
        && db::employee::email_exists(&txn, email, Some(id)).await?
    {
        return Err(AppError::validation(format!("Email '{}' is already used", email.trim())));
    }
    let model = db::employee::update(&txn, id, data)
        .await?
        .ok_or_else(|| AppError::not_found(format!("Employee {id}")))?;
    txn.commit().await?;

    info!("Employee {} updated: {}", model.id, model.display_name());
    Ok(model)
}

/// Delete an employee together with their holidays.
pub async fn delete_employee(db: &DatabaseConnection, id: i32) -> Result<()> {
    let txn = db.begin().await?;
    let deleted = db::employee::delete(&txn, id).await?;
    if !deleted {
        return Err(AppError::not_found(format!("Employee {id}")));
    }
    txn.commit().await?;

    info!("Employee {} deleted", id);
    Ok(())
}

/// Display names of all employees, for the holiday form.
pub async fn employee_names(db: &DatabaseConnection) -> Result<Vec<(i32, String)>> {
    let employees = db::employee::list_all(db).await?;
    Ok(employees.iter().map(|e| (e.id, e.display_name())).collect())
}

/// Resolve a "Last First" name to exactly one employee.
pub async fn find_by_name(db: &DatabaseConnection, name: &str) -> Result<employees::Model> {
    let mut matches = db::employee::find_by_display_name(db, name).await?;
    match matches.len() {
        0 => Err(AppError::not_found(format!("Employee '{}'", name.trim()))),
        1 => Ok(matches.remove(0)),
        n => Err(AppError::validation(format!(
            "{n} employees are named '{}', use the id instead",
            name.trim()
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::connection::connect_memory;
    use crate::entities::sea_orm_active_enums::{Position, Role};

    fn employee(last: &str, first: &str, email: &str) -> CreateEmployee {
        CreateEmployee {
            last_name: last.to_string(),
            first_name: first.to_string(),
            email: email.to_string(),
            phone: Some("0612345678".to_string()),
            salary: 3000.0,
            role: Role::Employee,
            position: Position::TeamLeader,
        }
    }

    #[tokio::test]
    async fn test_create_and_list_names() {
        let db = connect_memory().await;
        create_employee(&db, employee("Zola", "Emile", "emile@example.com"))
            .await
            .unwrap();
        create_employee(&db, employee("Adam", "Paul", "paul@example.com"))
            .await
            .unwrap();

        let names: Vec<String> = employee_names(&db).await.unwrap().into_iter().map(|(_, n)| n).collect();
        assert_eq!(names, vec!["Adam Paul", "Zola Emile"]);
    }

    #[tokio::test]
    async fn test_create_trims_fields() {
        let db = connect_memory().await;
        let model = create_employee(&db, employee("  Hugo ", " Victor", " victor@example.com "))
            .await
            .unwrap();
        assert_eq!(model.display_name(), "Hugo Victor");
        assert_eq!(model.email, "victor@example.com");
    }

    #[tokio::test]
    async fn test_duplicate_email_rejected() {
        let db = connect_memory().await;
        create_employee(&db, employee("Roux", "Anne", "anne@example.com"))
            .await
            .unwrap();

        let err = create_employee(&db, employee("Roux", "Annie", "anne@example.com"))
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
    }

    #[tokio::test]
    async fn test_email_uniqueness_ignores_case() {
        let db = connect_memory().await;
        let model = create_employee(&db, employee("Roux", "Anne", "Anne@Example.com"))
            .await
            .unwrap();
        assert_eq!(model.email, "anne@example.com");

        let err = create_employee(&db, employee("Roux", "Annie", "anne@example.com"))
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
    }

    #[tokio::test]
    async fn test_update_email_uniqueness_excludes_self() {
        let db = connect_memory().await;
        let a = create_employee(&db, employee("Blanc", "Luc", "luc@example.com"))
            .await
            .unwrap();
        create_employee(&db, employee("Noir", "Eva", "eva@example.com"))
            .await
            .unwrap();

        let same = UpdateEmployee {
            email: Some("luc@example.com".to_string()),
            salary: Some(3500.0),
            ..Default::default()
        };
        let updated = update_employee(&db, a.id, same).await.unwrap();
        assert_eq!(updated.salary, 3500.0);

        let taken = UpdateEmployee {
            email: Some("eva@example.com".to_string()),
            ..Default::default()
        };
        assert!(matches!(
            update_employee(&db, a.id, taken).await,
            Err(AppError::Validation(_))
        ));

        assert!(matches!(
            update_employee(&db, 999, UpdateEmployee::default()).await,
            Err(AppError::NotFound(_))
        ));
    }

    #[tokio::test]
    async fn test_delete_employee() {
        let db = connect_memory().await;
        let model = create_employee(&db, employee("Faure", "Lea", "lea@example.com"))
            .await
            .unwrap();

        delete_employee(&db, model.id).await.unwrap();
        assert!(matches!(
            delete_employee(&db, model.id).await,
            Err(AppError::NotFound(_))
        ));
    }

    #[tokio::test]
    async fn test_find_by_name() {
        let db = connect_memory().await;
        create_employee(&db, employee("Morel", "Jean", "jean1@example.com"))
            .await
            .unwrap();
        create_employee(&db, employee("Morel", "Jean", "jean2@example.com"))
            .await
            .unwrap();
        let lucie = create_employee(&db, employee("Morel", "Lucie", "lucie@example.com"))
            .await
            .unwrap();

        assert_eq!(find_by_name(&db, "Morel Lucie").await.unwrap().id, lucie.id);
        assert!(matches!(
            find_by_name(&db, "Morel Jean").await,
            Err(AppError::Validation(_))
        ));
        assert!(matches!(
            find_by_name(&db, "Nobody Here").await,
            Err(AppError::NotFound(_))
        ));
    }
}
