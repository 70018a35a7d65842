//! Slots module - bookable consultation windows

pub mod dto;

pub use dto::*;

use crate::domain::{DomainResult, Slot, SlotQuery};
use crate::interfaces::http::common::ResourceApi;

impl ResourceApi for Slot {
    const PATH: &'static str = "/slots";

    type Dto = SlotDto;
    type CreateRequest = CreateSlotRequest;
    type UpdateRequest = UpdateSlotRequest;
    type ListParams = ListSlotsParams;

    fn criteria(params: ListSlotsParams) -> DomainResult<SlotQuery> {
        Ok(SlotQuery {
            doctor_id: params.doctor_id,
            is_booked: params.is_booked,
            from: params.from,
            to: params.to,
        })
    }

    fn from_create(req: CreateSlotRequest) -> DomainResult<Self> {
        let mut slot = Slot::new(req.doctor_id, req.starts_at, req.ends_at);
        slot.is_booked = req.is_booked;
        Ok(slot)
    }

    /// The owning doctor cannot change; a slot moves by time only.
    fn apply_update(mut current: Self, req: UpdateSlotRequest) -> DomainResult<Self> {
        if let Some(starts_at) = req.starts_at {
            current.starts_at = starts_at;
        }
        if let Some(ends_at) = req.ends_at {
            current.ends_at = ends_at;
        }
        if let Some(is_booked) = req.is_booked {
            current.is_booked = is_booked;
        }
        Ok(current)
    }
}
