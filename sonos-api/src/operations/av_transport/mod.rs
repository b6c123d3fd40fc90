//! AVTransport service operations
//!
//! Playback, queue management and group membership.

mod become_standalone;
mod get_transport_info;
mod pause;
mod play;
mod queue;
mod seek;
mod set_av_transport_uri;
mod set_play_mode;
mod skip;

pub use become_standalone::{
    BecomeCoordinatorOfStandaloneGroupOperation, BecomeCoordinatorOfStandaloneGroupRequest,
    BecomeCoordinatorOfStandaloneGroupResponse,
};
pub use get_transport_info::{
    GetTransportInfoOperation, GetTransportInfoRequest, GetTransportInfoResponse, PlayState,
};
pub use pause::{PauseOperation, PauseRequest, PauseResponse};
pub use play::{PlayOperation, PlayRequest, PlayResponse};
pub use queue::{
    AddURIToQueueOperation, AddURIToQueueRequest, AddURIToQueueResponse,
    RemoveAllTracksFromQueueOperation, RemoveAllTracksFromQueueRequest,
    RemoveAllTracksFromQueueResponse,
};
pub use seek::{SeekOperation, SeekRequest, SeekResponse, SeekUnit};
pub use set_av_transport_uri::{
    SetAVTransportURIOperation, SetAVTransportURIRequest, SetAVTransportURIResponse,
};
pub use set_play_mode::{PlayMode, SetPlayModeOperation, SetPlayModeRequest, SetPlayModeResponse};
pub use skip::{NextOperation, PreviousOperation, SkipRequest, SkipResponse};
