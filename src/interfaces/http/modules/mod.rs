pub mod certifications;
pub mod doctors;
pub mod drug_types;
pub mod health;
pub mod hospitals;
pub mod patients;
pub mod request_id;
pub mod roles;
pub mod slots;
