use chrono::NaiveDate;

use super::Certification;
use crate::shared::{contains_ignore_case, Filter};

/// Certification list criteria
#[derive(Debug, Clone, Default)]
pub struct CertificationQuery {
    pub doctor_id: Option<i32>,
    /// Matches title or issuer
    pub search: Option<String>,
    /// Only certifications valid on this date
    pub valid_on: Option<NaiveDate>,
}

impl CertificationQuery {
    pub fn filter(&self) -> Filter<Certification> {
        Filter::all()
            .and_some(self.doctor_id, |c: &Certification, id| c.doctor_id == *id)
            .and_search(self.search.as_deref(), |c: &Certification, term| {
                contains_ignore_case(&c.title, term) || contains_ignore_case(&c.issuer, term)
            })
            .and_some(self.valid_on, |c: &Certification, date| c.is_valid_on(*date))
    }
}
