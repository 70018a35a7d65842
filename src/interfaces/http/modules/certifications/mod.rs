//! Certifications module

pub mod dto;

pub use dto::*;

use crate::domain::{Certification, CertificationQuery, DomainResult};
use crate::interfaces::http::common::ResourceApi;

impl ResourceApi for Certification {
    const PATH: &'static str = "/certifications";

    type Dto = CertificationDto;
    type CreateRequest = CreateCertificationRequest;
    type UpdateRequest = UpdateCertificationRequest;
    type ListParams = ListCertificationsParams;

    fn criteria(params: ListCertificationsParams) -> DomainResult<CertificationQuery> {
        Ok(CertificationQuery {
            doctor_id: params.doctor_id,
            search: params.search,
            valid_on: params.valid_on,
        })
    }

    fn from_create(req: CreateCertificationRequest) -> DomainResult<Self> {
        let mut cert = Certification::new(
            req.doctor_id,
            req.title.trim(),
            req.issuer.trim(),
            req.issued_at,
        );
        cert.expires_at = req.expires_at;
        Ok(cert)
    }

    fn apply_update(mut current: Self, req: UpdateCertificationRequest) -> DomainResult<Self> {
        if let Some(title) = req.title {
            current.title = title.trim().to_string();
        }
        if let Some(issuer) = req.issuer {
            current.issuer = issuer.trim().to_string();
        }
        if let Some(issued_at) = req.issued_at {
            current.issued_at = issued_at;
        }
        if let Some(expires_at) = req.expires_at {
            current.expires_at = expires_at;
        }
        Ok(current)
    }
}
