//! ZoneGroupTopology service operations
//!
//! Any speaker can answer for the whole household, so one call is enough to
//! learn every group, its coordinator and its members.

mod get_zone_group_state;
mod state;

pub use get_zone_group_state::{
    GetZoneGroupStateOperation, GetZoneGroupStateRequest, GetZoneGroupStateResponse,
};
pub use state::{ZoneGroup, ZoneGroupMember, ZoneGroupState};
