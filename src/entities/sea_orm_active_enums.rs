//! Enumerated columns, stored as short strings so every backend can hold them.

use std::fmt;
use std::str::FromStr;

use sea_orm::Iterable;
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Kind of leave.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(16))")]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum HolidayType {
    #[sea_orm(string_value = "PAID")]
    Paid,
    #[sea_orm(string_value = "SICK")]
    Sick,
    #[sea_orm(string_value = "UNPAID")]
    Unpaid,
}

/// Access level of an employee.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(16))")]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Role {
    #[sea_orm(string_value = "ADMIN")]
    Admin,
    #[sea_orm(string_value = "EMPLOYEE")]
    Employee,
}

/// Job position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(24))")]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Position {
    #[sea_orm(string_value = "ENGINEER")]
    Engineer,
    #[sea_orm(string_value = "TEAM_LEADER")]
    TeamLeader,
    #[sea_orm(string_value = "PILOT")]
    Pilot,
}

impl HolidayType {
    /// Stored code, also accepted on the command line.
    pub fn code(&self) -> &'static str {
        match self {
            Self::Paid => "PAID",
            Self::Sick => "SICK",
            Self::Unpaid => "UNPAID",
        }
    }

    /// Label for forms and exports.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Paid => "Paid",
            Self::Sick => "Sick",
            Self::Unpaid => "Unpaid",
        }
    }
}

impl Role {
    pub fn code(&self) -> &'static str {
        match self {
            Self::Admin => "ADMIN",
            Self::Employee => "EMPLOYEE",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Admin => "Admin",
            Self::Employee => "Employee",
        }
    }
}

impl Position {
    pub fn code(&self) -> &'static str {
        match self {
            Self::Engineer => "ENGINEER",
            Self::TeamLeader => "TEAM_LEADER",
            Self::Pilot => "PILOT",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Engineer => "Engineer",
            Self::TeamLeader => "Team leader",
            Self::Pilot => "Pilot",
        }
    }
}

/// Unknown code for one of the enumerated columns.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownCode(pub String);

impl fmt::Display for UnknownCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown value '{}'", self.0)
    }
}

impl std::error::Error for UnknownCode {}

macro_rules! code_enum_impls {
    ($ty:ty) => {
        impl fmt::Display for $ty {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.code())
            }
        }

        impl FromStr for $ty {
            type Err = UnknownCode;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                let wanted = s.trim().to_uppercase().replace([' ', '-'], "_");
                <$ty>::iter()
                    .find(|v| v.code() == wanted)
                    .ok_or_else(|| UnknownCode(s.to_string()))
            }
        }
    };
}

code_enum_impls!(HolidayType);
code_enum_impls!(Role);
code_enum_impls!(Position);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_holiday_type_from_str_is_case_insensitive() {
        assert_eq!("paid".parse::<HolidayType>(), Ok(HolidayType::Paid));
        assert_eq!(" SICK ".parse::<HolidayType>(), Ok(HolidayType::Sick));
        assert_eq!("Unpaid".parse::<HolidayType>(), Ok(HolidayType::Unpaid));
        assert!("vacation".parse::<HolidayType>().is_err());
    }

    #[test]
    fn test_position_accepts_spaced_label() {
        assert_eq!("team leader".parse::<Position>(), Ok(Position::TeamLeader));
        assert_eq!(Position::TeamLeader.to_string(), "TEAM_LEADER");
    }

    #[test]
    fn test_every_holiday_type_round_trips_through_code() {
        for ty in HolidayType::iter() {
            assert_eq!(ty.code().parse::<HolidayType>(), Ok(ty));
        }
    }
}
