use super::{Gender, Patient};
use crate::shared::{contains_ignore_case, Filter};

/// Patient list criteria
#[derive(Debug, Clone, Default)]
pub struct PatientQuery {
    /// Matches name, email or phone
    pub search: Option<String>,
    pub gender: Option<Gender>,
}

impl PatientQuery {
    pub fn filter(&self) -> Filter<Patient> {
        Filter::all()
            .and_search(self.search.as_deref(), |p: &Patient, term| {
                contains_ignore_case(&p.full_name(), term)
                    || p.email.as_deref().is_some_and(|e| contains_ignore_case(e, term))
                    || p.phone.as_deref().is_some_and(|ph| ph.contains(term))
            })
            .and_some(self.gender, |p: &Patient, gender| p.gender == *gender)
    }
}
