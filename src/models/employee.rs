//! Employee DTOs for create and update operations.

use serde::{Deserialize, Serialize};

use crate::entities::sea_orm_active_enums::{Position, Role};
use crate::error::{AppError, Result};

/// DTO for creating an employee.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateEmployee {
    pub last_name: String,
    pub first_name: String,
    pub email: String,
    pub phone: Option<String>,
    pub salary: f64,
    pub role: Role,
    pub position: Position,
}

/// DTO for updating an employee.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateEmployee {
    pub last_name: Option<String>,
    pub first_name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<Option<String>>,
    pub salary: Option<f64>,
    pub role: Option<Role>,
    pub position: Option<Position>,
}

impl CreateEmployee {
    /// Check field formats before touching the database.
    pub fn validate(&self) -> Result<()> {
        validate_name("Last name", &self.last_name)?;
        validate_name("First name", &self.first_name)?;
        validate_email(&self.email)?;
        if let Some(phone) = &self.phone {
            validate_phone(phone)?;
        }
        validate_salary(self.salary)
    }
}

impl UpdateEmployee {
    /// Check the fields that are being changed.
    pub fn validate(&self) -> Result<()> {
        if let Some(name) = &self.last_name {
            validate_name("Last name", name)?;
        }
        if let Some(name) = &self.first_name {
            validate_name("First name", name)?;
        }
        if let Some(email) = &self.email {
            validate_email(email)?;
        }
        if let Some(Some(phone)) = &self.phone {
            validate_phone(phone)?;
        }
        if let Some(salary) = self.salary {
            validate_salary(salary)?;
        }
        Ok(())
    }
}

fn validate_name(field: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(AppError::validation(format!("{field} is required")));
    }
    Ok(())
}

fn validate_email(email: &str) -> Result<()> {
    let email = email.trim();
    let valid = match email.split_once('@') {
        Some((local, domain)) => {
            !local.is_empty()
                && !domain.contains('@')
                && domain.contains('.')
                && !domain.starts_with('.')
                && !domain.ends_with('.')
                && !email.contains(char::is_whitespace)
        }
        None => false,
    };

    if valid {
        Ok(())
    } else {
        Err(AppError::validation(format!("Invalid email address '{email}'")))
    }
}

fn validate_phone(phone: &str) -> Result<()> {
    let allowed = phone
        .chars()
        .all(|c| c.is_ascii_digit() || matches!(c, ' ' | '+' | '-' | '.'));
    let digits = phone.chars().filter(|c| c.is_ascii_digit()).count();

    if allowed && (6..=20).contains(&digits) {
        Ok(())
    } else {
        Err(AppError::validation(format!("Invalid phone number '{phone}'")))
    }
}

fn validate_salary(salary: f64) -> Result<()> {
    if !salary.is_finite() || salary < 0.0 {
        return Err(AppError::validation("Salary must be a positive amount"));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> CreateEmployee {
        CreateEmployee {
            last_name: "Dupont".to_string(),
            first_name: "Marie".to_string(),
            email: "marie.dupont@example.com".to_string(),
            phone: Some("+33 6 12 34 56 78".to_string()),
            salary: 3200.0,
            role: Role::Employee,
            position: Position::Engineer,
        }
    }

    #[test]
    fn test_valid_employee() {
        assert!(sample().validate().is_ok());
    }

    #[test]
    fn test_blank_names_rejected() {
        let mut emp = sample();
        emp.last_name = "   ".to_string();
        assert!(matches!(emp.validate(), Err(AppError::Validation(_))));

        let mut emp = sample();
        emp.first_name = String::new();
        assert!(emp.validate().is_err());
    }

    #[test]
    fn test_email_format() {
        for bad in ["", "marie", "marie@", "@example.com", "marie@example", "a@b@c.com", "marie @x.com"] {
            let mut emp = sample();
            emp.email = bad.to_string();
            assert!(emp.validate().is_err(), "accepted {bad:?}");
        }
    }

    #[test]
    fn test_phone_format() {
        let mut emp = sample();
        emp.phone = Some("06-12-34-56-78".to_string());
        assert!(emp.validate().is_ok());

        emp.phone = Some("call me".to_string());
        assert!(emp.validate().is_err());

        emp.phone = Some("123".to_string());
        assert!(emp.validate().is_err());

        emp.phone = None;
        assert!(emp.validate().is_ok());
    }

    #[test]
    fn test_negative_salary_rejected() {
        let mut emp = sample();
        emp.salary = -1.0;
        assert!(emp.validate().is_err());
    }

    #[test]
    fn test_update_only_checks_present_fields() {
        let update = UpdateEmployee {
            salary: Some(4000.0),
            ..Default::default()
        };
        assert!(update.validate().is_ok());

        let update = UpdateEmployee {
            email: Some("nope".to_string()),
            ..Default::default()
        };
        assert!(update.validate().is_err());
    }
}
