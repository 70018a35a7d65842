use super::Role;
use crate::shared::{contains_ignore_case, Filter};

/// Role list criteria
#[derive(Debug, Clone, Default)]
pub struct RoleQuery {
    /// Matches name or description
    pub search: Option<String>,
}

impl RoleQuery {
    pub fn filter(&self) -> Filter<Role> {
        Filter::all().and_search(self.search.as_deref(), |role: &Role, term| {
            contains_ignore_case(&role.name, term)
                || role
                    .description
                    .as_deref()
                    .is_some_and(|d| contains_ignore_case(d, term))
        })
    }
}
