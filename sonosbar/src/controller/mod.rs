//! The speaker controller capability
//!
//! Everything the remote needs from the network goes through
//! [`SpeakerController`], so the topology, menu and dispatch logic can run
//! against an in-memory household in tests.

mod upnp;

pub use upnp::UpnpController;

use crate::error::ControllerError;
use crate::model::{Group, PlayMode, Playlist, RadioStation, Speaker, TransportState, Volume};

pub type Result<T> = std::result::Result<T, ControllerError>;

pub trait SpeakerController {
    /// Every speaker that answers discovery
    fn discover_all(&self) -> Result<Vec<Speaker>>;

    /// Any one speaker; enough to learn the whole household
    fn discover_one(&self) -> Result<Option<Speaker>> {
        Ok(self.discover_all()?.into_iter().next())
    }

    /// The visible speaker answering on `address`
    fn speaker_at(&self, address: &str) -> Result<Speaker>;

    /// All groups in topology order, as reported by `via`
    fn groups(&self, via: &Speaker) -> Result<Vec<Group>>;

    fn volume(&self, speaker: &Speaker) -> Result<Volume>;
    fn set_volume(&self, speaker: &Speaker, volume: Volume) -> Result<()>;
    fn transport_state(&self, speaker: &Speaker) -> Result<TransportState>;

    fn play(&self, speaker: &Speaker) -> Result<()>;
    fn pause(&self, speaker: &Speaker) -> Result<()>;
    fn next(&self, speaker: &Speaker) -> Result<()>;
    fn previous(&self, speaker: &Speaker) -> Result<()>;
    fn set_play_mode(&self, speaker: &Speaker, mode: PlayMode) -> Result<()>;

    fn playlists(&self, speaker: &Speaker) -> Result<Vec<Playlist>>;
    fn radio_stations(&self, speaker: &Speaker) -> Result<Vec<RadioStation>>;

    /// Replace the queue with `playlist` and start at its first track
    fn play_playlist(&self, speaker: &Speaker, playlist: &Playlist) -> Result<()>;

    /// Point the transport at `uri` described by DIDL-Lite `metadata`, then play
    fn play_uri(&self, speaker: &Speaker, uri: &str, metadata: &str) -> Result<()>;

    /// Make `speaker` follow the group coordinated by `coordinator`
    fn join(&self, speaker: &Speaker, coordinator: &Speaker) -> Result<()>;

    /// Take `speaker` out of its group
    fn unjoin(&self, speaker: &Speaker) -> Result<()>;
}
