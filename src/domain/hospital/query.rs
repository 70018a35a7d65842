use super::Hospital;
use crate::shared::{contains_ignore_case, eq_ignore_case, Filter};

/// Hospital list criteria
#[derive(Debug, Clone, Default)]
pub struct HospitalQuery {
    /// Matches name, address or city
    pub search: Option<String>,
    pub city: Option<String>,
    pub is_active: Option<bool>,
}

impl HospitalQuery {
    pub fn filter(&self) -> Filter<Hospital> {
        Filter::all()
            .and_search(self.search.as_deref(), |h: &Hospital, term| {
                contains_ignore_case(&h.name, term)
                    || contains_ignore_case(&h.address, term)
                    || contains_ignore_case(&h.city, term)
            })
            .and_some(self.city.clone(), |h: &Hospital, city| eq_ignore_case(&h.city, city))
            .and_some(self.is_active, |h: &Hospital, active| h.is_active == *active)
    }
}
