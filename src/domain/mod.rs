//! Domain layer
//!
//! One module per aggregate (`model` + list `query`), plus the shared
//! [`Entity`] contract and the repository ports.

pub mod certification;
pub mod doctor;
pub mod drug_type;
pub mod entity;
pub mod hospital;
pub mod patient;
pub mod repositories;
pub mod role;
pub mod slot;

pub use certification::{Certification, CertificationQuery};
pub use doctor::{Doctor, DoctorQuery};
pub use drug_type::{DrugType, DrugTypeQuery};
pub use entity::Entity;
pub use hospital::{Hospital, HospitalQuery};
pub use patient::{Gender, Patient, PatientQuery};
pub use repositories::{Repositories, Repository, SharedRepository};
pub use role::{Role, RoleQuery};
pub use slot::{Slot, SlotQuery};

// Re-export DomainError from shared for convenience
pub use crate::shared::{DomainError, DomainResult};
