pub use super::employees::Entity as Employees;
pub use super::holidays::Entity as Holidays;
