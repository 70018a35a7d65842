//! Patient domain entity

use std::str::FromStr;

use chrono::{DateTime, Datelike, NaiveDate, Utc};

use crate::domain::entity::impl_entity;
use crate::shared::{SortKey, Sortable};

/// Administrative gender
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Gender {
    Male,
    Female,
    Other,
    #[default]
    Unknown,
}

impl Gender {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Male => "male",
            Self::Female => "female",
            Self::Other => "other",
            Self::Unknown => "unknown",
        }
    }
}

impl std::fmt::Display for Gender {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Gender {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "male" => Ok(Self::Male),
            "female" => Ok(Self::Female),
            "other" => Ok(Self::Other),
            "unknown" => Ok(Self::Unknown),
            other => Err(format!(
                "unknown gender '{other}' (expected male, female, other or unknown)"
            )),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Patient {
    pub id: i32,
    pub first_name: String,
    pub last_name: String,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub date_of_birth: NaiveDate,
    pub gender: Gender,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Patient {
    pub fn new(
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        date_of_birth: NaiveDate,
        gender: Gender,
    ) -> Self {
        let now = Utc::now();
        Self {
            id: 0,
            first_name: first_name.into(),
            last_name: last_name.into(),
            email: None,
            phone: None,
            date_of_birth,
            gender,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    /// Age in completed years on `date`
    pub fn age_on(&self, date: NaiveDate) -> i32 {
        let years = date.year() - self.date_of_birth.year();
        if (date.month(), date.day()) < (self.date_of_birth.month(), self.date_of_birth.day()) {
            years - 1
        } else {
            years
        }
    }
}

impl_entity!(Patient, "Patient");

impl Sortable for Patient {
    const SORT_FIELDS: &'static [&'static str] = &[
        "id",
        "lastName",
        "firstName",
        "dateOfBirth",
        "createdAt",
    ];

    fn sort_key(&self, field: &str) -> Option<SortKey> {
        match field {
            "id" => Some(self.id.into()),
            "lastName" => Some(SortKey::text(&self.last_name)),
            "firstName" => Some(SortKey::text(&self.first_name)),
            "dateOfBirth" => Some(self.date_of_birth.into()),
            "createdAt" => Some(self.created_at.into()),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn gender_parsing() {
        assert_eq!("Female".parse::<Gender>(), Ok(Gender::Female));
        assert_eq!(" other ".parse::<Gender>(), Ok(Gender::Other));
        assert!("robot".parse::<Gender>().is_err());
        assert_eq!(Gender::Male.to_string(), "male");
    }

    #[test]
    fn age_counts_completed_years() {
        let patient = Patient::new("Ada", "Lovelace", date(1990, 6, 15), Gender::Female);
        assert_eq!(patient.age_on(date(2020, 6, 14)), 29);
        assert_eq!(patient.age_on(date(2020, 6, 15)), 30);
        assert_eq!(patient.full_name(), "Ada Lovelace");
    }
}
