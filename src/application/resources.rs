//! [`Resource`] implementations for every aggregate

use async_trait::async_trait;

use super::resource::Resource;
use crate::domain::{
    Certification, CertificationQuery, Doctor, DoctorQuery, DomainError, DomainResult, DrugType,
    DrugTypeQuery, Entity, Hospital, HospitalQuery, Patient, PatientQuery, Repositories,
    Repository, Role, RoleQuery, SharedRepository, Slot, SlotQuery,
};
use crate::shared::{eq_ignore_case, Filter};

/// Fail with `Validation` unless a row with `id` exists in `repo`.
async fn ensure_exists<E: Entity>(repo: &dyn Repository<E>, id: i32) -> DomainResult<()> {
    if repo.exists(id).await? {
        Ok(())
    } else {
        Err(DomainError::Validation(format!(
            "{} with id={id} does not exist",
            E::NAME
        )))
    }
}

fn ensure_not_blank(field: &str, value: &str) -> DomainResult<()> {
    if value.trim().is_empty() {
        return Err(DomainError::Validation(format!("{field} must not be blank")));
    }
    Ok(())
}

#[async_trait]
impl Resource for Role {
    type Criteria = RoleQuery;

    fn repository(repos: &Repositories) -> &SharedRepository<Self> {
        &repos.roles
    }

    fn filter(criteria: &RoleQuery) -> Filter<Self> {
        criteria.filter()
    }

    async fn check(&self, repos: &Repositories) -> DomainResult<()> {
        ensure_not_blank("name", &self.name)?;
        let taken = repos
            .roles
            .find_all()
            .await?
            .iter()
            .any(|other| other.id != self.id && eq_ignore_case(&other.name, &self.name));
        if taken {
            return Err(DomainError::Conflict(format!("Role '{}'", self.name)));
        }
        Ok(())
    }

    async fn before_delete(id: i32, repos: &Repositories) -> DomainResult<()> {
        let in_use = repos
            .doctors
            .find_all()
            .await?
            .iter()
            .any(|doctor| doctor.role_id == Some(id));
        if in_use {
            return Err(DomainError::Conflict(format!(
                "Role with id={id} is still assigned to doctors"
            )));
        }
        Ok(())
    }
}

#[async_trait]
impl Resource for DrugType {
    type Criteria = DrugTypeQuery;

    fn repository(repos: &Repositories) -> &SharedRepository<Self> {
        &repos.drug_types
    }

    fn filter(criteria: &DrugTypeQuery) -> Filter<Self> {
        criteria.filter()
    }

    async fn check(&self, repos: &Repositories) -> DomainResult<()> {
        ensure_not_blank("name", &self.name)?;
        let taken = repos
            .drug_types
            .find_all()
            .await?
            .iter()
            .any(|other| other.id != self.id && eq_ignore_case(&other.name, &self.name));
        if taken {
            return Err(DomainError::Conflict(format!("Drug type '{}'", self.name)));
        }
        Ok(())
    }
}

#[async_trait]
impl Resource for Hospital {
    type Criteria = HospitalQuery;

    fn repository(repos: &Repositories) -> &SharedRepository<Self> {
        &repos.hospitals
    }

    fn filter(criteria: &HospitalQuery) -> Filter<Self> {
        criteria.filter()
    }

    async fn check(&self, _repos: &Repositories) -> DomainResult<()> {
        ensure_not_blank("name", &self.name)?;
        ensure_not_blank("city", &self.city)
    }

    async fn before_delete(id: i32, repos: &Repositories) -> DomainResult<()> {
        let staffed = repos
            .doctors
            .find_all()
            .await?
            .iter()
            .any(|doctor| doctor.hospital_id == Some(id));
        if staffed {
            return Err(DomainError::Conflict(format!(
                "Hospital with id={id} still has doctors"
            )));
        }
        Ok(())
    }
}

#[async_trait]
impl Resource for Doctor {
    type Criteria = DoctorQuery;

    fn repository(repos: &Repositories) -> &SharedRepository<Self> {
        &repos.doctors
    }

    fn filter(criteria: &DoctorQuery) -> Filter<Self> {
        criteria.filter()
    }

    async fn check(&self, repos: &Repositories) -> DomainResult<()> {
        ensure_not_blank("firstName", &self.first_name)?;
        ensure_not_blank("lastName", &self.last_name)?;
        if let Some(hospital_id) = self.hospital_id {
            ensure_exists(&*repos.hospitals, hospital_id).await?;
        }
        if let Some(role_id) = self.role_id {
            ensure_exists(&*repos.roles, role_id).await?;
        }
        let taken = repos
            .doctors
            .find_all()
            .await?
            .iter()
            .any(|other| other.id != self.id && eq_ignore_case(&other.email, &self.email));
        if taken {
            return Err(DomainError::Conflict(format!(
                "Doctor with email '{}'",
                self.email
            )));
        }
        Ok(())
    }

    async fn before_delete(id: i32, repos: &Repositories) -> DomainResult<()> {
        let has_slots = repos
            .slots
            .find_all()
            .await?
            .iter()
            .any(|slot| slot.doctor_id == id);
        let has_certifications = repos
            .certifications
            .find_all()
            .await?
            .iter()
            .any(|cert| cert.doctor_id == id);
        if has_slots || has_certifications {
            return Err(DomainError::Conflict(format!(
                "Doctor with id={id} still has slots or certifications"
            )));
        }
        Ok(())
    }
}

#[async_trait]
impl Resource for Slot {
    type Criteria = SlotQuery;

    fn repository(repos: &Repositories) -> &SharedRepository<Self> {
        &repos.slots
    }

    fn filter(criteria: &SlotQuery) -> Filter<Self> {
        criteria.filter()
    }

    async fn check(&self, repos: &Repositories) -> DomainResult<()> {
        if !self.has_valid_window() {
            return Err(DomainError::Validation(
                "startsAt must be before endsAt".into(),
            ));
        }
        ensure_exists(&*repos.doctors, self.doctor_id).await?;
        let clash = repos
            .slots
            .find_all()
            .await?
            .into_iter()
            .find(|other| {
                other.id != self.id && other.doctor_id == self.doctor_id && other.overlaps(self)
            });
        if let Some(other) = clash {
            return Err(DomainError::Conflict(format!(
                "Slot overlapping slot id={} of doctor id={}",
                other.id, self.doctor_id
            )));
        }
        Ok(())
    }
}

#[async_trait]
impl Resource for Certification {
    type Criteria = CertificationQuery;

    fn repository(repos: &Repositories) -> &SharedRepository<Self> {
        &repos.certifications
    }

    fn filter(criteria: &CertificationQuery) -> Filter<Self> {
        criteria.filter()
    }

    async fn check(&self, repos: &Repositories) -> DomainResult<()> {
        ensure_not_blank("title", &self.title)?;
        if !self.has_valid_period() {
            return Err(DomainError::Validation(
                "expiresAt must be after issuedAt".into(),
            ));
        }
        ensure_exists(&*repos.doctors, self.doctor_id).await
    }
}

#[async_trait]
impl Resource for Patient {
    type Criteria = PatientQuery;

    fn repository(repos: &Repositories) -> &SharedRepository<Self> {
        &repos.patients
    }

    fn filter(criteria: &PatientQuery) -> Filter<Self> {
        criteria.filter()
    }

    async fn check(&self, repos: &Repositories) -> DomainResult<()> {
        ensure_not_blank("firstName", &self.first_name)?;
        ensure_not_blank("lastName", &self.last_name)?;
        let Some(email) = self.email.as_deref() else {
            return Ok(());
        };
        let taken = repos.patients.find_all().await?.iter().any(|other| {
            other.id != self.id
                && other
                    .email
                    .as_deref()
                    .is_some_and(|existing| eq_ignore_case(existing, email))
        });
        if taken {
            return Err(DomainError::Conflict(format!("Patient with email '{email}'")));
        }
        Ok(())
    }
}
