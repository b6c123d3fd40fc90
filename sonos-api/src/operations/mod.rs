//! Sonos API operations organized by service

pub mod av_transport;
pub mod content_directory;
pub mod rendering_control;
pub mod zone_group_topology;

pub use av_transport::{
    AddURIToQueueOperation, BecomeCoordinatorOfStandaloneGroupOperation, GetTransportInfoOperation,
    NextOperation, PauseOperation, PlayOperation, PreviousOperation,
    RemoveAllTracksFromQueueOperation, SeekOperation, SetAVTransportURIOperation,
    SetPlayModeOperation,
};
pub use content_directory::BrowseOperation;
pub use rendering_control::{GetVolumeOperation, SetVolumeOperation};
pub use zone_group_topology::GetZoneGroupStateOperation;
