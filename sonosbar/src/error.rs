//! Error types for the remote

use sonos_api::ApiError;
use sonos_discovery::DiscoveryError;
use thiserror::Error;

/// Failures of the speaker controller capability
#[derive(Debug, Error)]
pub enum ControllerError {
    #[error(transparent)]
    Api(#[from] ApiError),

    #[error(transparent)]
    Discovery(#[from] DiscoveryError),

    #[error("Speaker '{0}' not found")]
    SpeakerNotFound(String),

    #[error("Playlist '{0}' not found")]
    PlaylistNotFound(String),

    /// The speaker is not a member of any group the topology reports
    #[error("No group coordinator known for '{0}'")]
    NoCoordinator(String),
}

/// Application-level errors
#[derive(Debug, Error)]
pub enum BarError {
    /// Nothing answered discovery; rendered as the no-speakers menu
    #[error("No Sonos Zone present")]
    DiscoveryEmpty,

    #[error("Target to join is not known")]
    JoinTargetUnknown,

    #[error(transparent)]
    Controller(#[from] ControllerError),

    #[error("Invalid address '{address}': {reason}")]
    Address { address: String, reason: String },

    #[error("Failed to write output")]
    Output(#[from] std::io::Error),
}

impl BarError {
    /// The single `ERROR:` line shown to the user for failures they caused
    ///
    /// Network and device failures return `None` and are reported with
    /// their full context instead.
    pub fn user_message(&self) -> Option<String> {
        match self {
            BarError::JoinTargetUnknown
            | BarError::Address { .. }
            | BarError::Controller(ControllerError::SpeakerNotFound(_))
            | BarError::Controller(ControllerError::PlaylistNotFound(_)) => Some(format!("ERROR: {}", self)),
            _ => None,
        }
    }
}
