use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::DomainError;

pub const HIRE_DATE_FORMAT: &str = "%Y-%m-%d";

macro_rules! id_newtype {
    ($name:ident) => {
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(pub i64);

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.0)
            }
        }
    };
}

id_newtype!(EmployeeId);

/// Employee fields without the backend-assigned identifier.
///
/// This is the body of a create request and, paired with an id, of an update.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmployeeDraft {
    pub first_name: String,
    pub last_name: String,
    pub department: String,
    pub position: String,
    pub hire_date: NaiveDate,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Employee {
    pub id: EmployeeId,
    pub first_name: String,
    pub last_name: String,
    pub department: String,
    pub position: String,
    pub hire_date: NaiveDate,
}

impl Employee {
    pub fn from_draft(id: EmployeeId, draft: EmployeeDraft) -> Self {
        Self {
            id,
            first_name: draft.first_name,
            last_name: draft.last_name,
            department: draft.department,
            position: draft.position,
            hire_date: draft.hire_date,
        }
    }

    pub fn draft(&self) -> EmployeeDraft {
        EmployeeDraft {
            first_name: self.first_name.clone(),
            last_name: self.last_name.clone(),
            department: self.department.clone(),
            position: self.position.clone(),
            hire_date: self.hire_date,
        }
    }

    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

pub fn parse_hire_date(raw: &str) -> Result<NaiveDate, DomainError> {
    let raw = raw.trim();
    NaiveDate::parse_from_str(raw, HIRE_DATE_FORMAT).map_err(|source| {
        DomainError::InvalidHireDate {
            input: raw.to_string(),
            source,
        }
    })
}

pub fn format_hire_date(date: NaiveDate) -> String {
    date.format(HIRE_DATE_FORMAT).to_string()
}

#[cfg(test)]
#[path = "tests/domain_tests.rs"]
mod tests;
