use super::Doctor;
use crate::shared::{contains_ignore_case, eq_ignore_case, Filter};

/// Doctor list criteria
#[derive(Debug, Clone, Default)]
pub struct DoctorQuery {
    /// Matches first name, last name or email
    pub search: Option<String>,
    pub specialty: Option<String>,
    pub hospital_id: Option<i32>,
    pub role_id: Option<i32>,
    pub is_active: Option<bool>,
}

impl DoctorQuery {
    pub fn filter(&self) -> Filter<Doctor> {
        Filter::all()
            .and_search(self.search.as_deref(), |d: &Doctor, term| {
                contains_ignore_case(&d.first_name, term)
                    || contains_ignore_case(&d.last_name, term)
                    || contains_ignore_case(&d.full_name(), term)
                    || contains_ignore_case(&d.email, term)
            })
            .and_some(self.specialty.clone(), |d: &Doctor, specialty| {
                eq_ignore_case(&d.specialty, specialty)
            })
            .and_some(self.hospital_id, |d: &Doctor, id| d.hospital_id == Some(*id))
            .and_some(self.role_id, |d: &Doctor, id| d.role_id == Some(*id))
            .and_some(self.is_active, |d: &Doctor, active| d.is_active == *active)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn doctors() -> Vec<Doctor> {
        let mut house = Doctor::new("Gregory", "House", "house@ppth.org", "Diagnostics");
        house.hospital_id = Some(1);
        let mut wilson = Doctor::new("James", "Wilson", "wilson@ppth.org", "Oncology");
        wilson.hospital_id = Some(1);
        let mut grey = Doctor::new("Meredith", "Grey", "grey@gsm.org", "General Surgery");
        grey.hospital_id = Some(2);
        grey.is_active = false;
        vec![house, wilson, grey]
    }

    fn matching(query: &DoctorQuery) -> Vec<String> {
        let filter = query.filter();
        doctors()
            .into_iter()
            .filter(|d| filter.matches(d))
            .map(|d| d.last_name)
            .collect()
    }

    #[test]
    fn no_criteria_matches_all() {
        assert_eq!(matching(&DoctorQuery::default()).len(), 3);
    }

    #[test]
    fn search_covers_full_name_and_email() {
        let query = DoctorQuery {
            search: Some("james wil".into()),
            ..Default::default()
        };
        assert_eq!(matching(&query), vec!["Wilson"]);

        let query = DoctorQuery {
            search: Some("PPTH".into()),
            ..Default::default()
        };
        assert_eq!(matching(&query), vec!["House", "Wilson"]);
    }

    #[test]
    fn criteria_combine() {
        let query = DoctorQuery {
            hospital_id: Some(1),
            specialty: Some("oncology".into()),
            ..Default::default()
        };
        assert_eq!(matching(&query), vec!["Wilson"]);

        let query = DoctorQuery {
            is_active: Some(false),
            ..Default::default()
        };
        assert_eq!(matching(&query), vec!["Grey"]);
    }
}
