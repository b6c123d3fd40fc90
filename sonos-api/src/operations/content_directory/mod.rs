//! ContentDirectory service operations
//!
//! Browsing the speaker's own library: saved Sonos playlists live under
//! `SQ:`, favourite radio stations under `R:0/0`.

mod browse;
pub mod didl;

pub use browse::{BrowseFlag, BrowseOperation, BrowseRequest, BrowseResponse};
pub use didl::DidlObject;

/// Object id of the saved Sonos playlists container
pub const SAVED_QUEUES: &str = "SQ:";

/// Object id of the favourite radio stations container
pub const RADIO_FAVORITES: &str = "R:0/0";
