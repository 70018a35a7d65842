use super::DrugType;
use crate::shared::{contains_ignore_case, Filter};

#[derive(Debug, Clone, Default)]
pub struct DrugTypeQuery {
    pub search: Option<String>,
}

impl DrugTypeQuery {
    pub fn filter(&self) -> Filter<DrugType> {
        Filter::all().and_search(self.search.as_deref(), |drug_type: &DrugType, term| {
            contains_ignore_case(&drug_type.name, term)
                || drug_type
                    .description
                    .as_deref()
                    .is_some_and(|d| contains_ignore_case(d, term))
        })
    }
}
