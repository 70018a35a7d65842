//! Demo reference data for local development

use tracing::info;

use crate::domain::{DomainResult, DrugType, Repositories, Role};

const ROLES: &[(&str, &str)] = &[
    ("Physician", "Licensed medical doctor"),
    ("Nurse", "Registered nurse"),
    ("Consultant", "Senior specialist available for referrals"),
];

const DRUG_TYPES: &[(&str, &str)] = &[
    ("Tablet", "Solid oral dosage form"),
    ("Capsule", "Gelatin-encased oral dosage form"),
    ("Syrup", "Liquid oral dosage form"),
    ("Injection", "Parenteral administration"),
    ("Ointment", "Topical semi-solid preparation"),
];

/// Insert the reference roles and drug types into empty repositories.
/// Repositories that already hold rows are left untouched.
pub async fn seed_demo_data(repos: &Repositories) -> DomainResult<()> {
    if repos.roles.find_all().await?.is_empty() {
        for (name, description) in ROLES {
            repos
                .roles
                .insert(Role::new(*name, Some((*description).to_string())))
                .await?;
        }
        info!(count = ROLES.len(), "Seeded roles");
    }

    if repos.drug_types.find_all().await?.is_empty() {
        for (name, description) in DRUG_TYPES {
            repos
                .drug_types
                .insert(DrugType::new(*name, Some((*description).to_string())))
                .await?;
        }
        info!(count = DRUG_TYPES.len(), "Seeded drug types");
    }

    Ok(())
}
