//! In-memory household for driving the remote without a network
#![allow(dead_code)]

use std::cell::RefCell;
use std::collections::HashMap;

use sonosbar::controller::{Result, SpeakerController};
use sonosbar::model::{Group, PlayMode, Playlist, RadioStation, Speaker, TransportState, Volume};
use sonosbar::ControllerError;

/// A controller call, recorded in order
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Call {
    SetVolume(String, u8),
    Play(String),
    Pause(String),
    Next(String),
    Previous(String),
    PlayMode(String, PlayMode),
    PlayPlaylist(String, String),
    PlayUri(String, String),
    Join(String, String),
    Unjoin(String),
}

pub fn speaker(name: &str, address: &str) -> Speaker {
    Speaker::new(format!("RINCON_{}", name.replace(' ', "")), name, address)
}

#[derive(Default)]
pub struct FakeController {
    pub groups: Vec<Group>,
    pub volumes: HashMap<String, u8>,
    pub states: HashMap<String, TransportState>,
    pub playlists: Vec<Playlist>,
    pub radio_stations: Vec<RadioStation>,
    pub calls: RefCell<Vec<Call>>,
}

impl FakeController {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a group; the first speaker coordinates
    pub fn with_group(mut self, members: &[&Speaker]) -> Self {
        self.groups.push(Group {
            coordinator: members[0].clone(),
            members: members.iter().map(|&s| s.clone()).collect(),
        });
        self
    }

    pub fn with_volume(mut self, speaker: &Speaker, volume: u8) -> Self {
        self.volumes.insert(speaker.uuid.clone(), volume);
        self
    }

    pub fn with_state(mut self, speaker: &Speaker, state: TransportState) -> Self {
        self.states.insert(speaker.uuid.clone(), state);
        self
    }

    pub fn with_playlist(mut self, title: &str, id: &str) -> Self {
        self.playlists.push(Playlist {
            title: title.to_string(),
            id: id.to_string(),
            uri: format!("file:///jffs/settings/savedqueues.rsq#{}", id.trim_start_matches("SQ:")),
        });
        self
    }

    pub fn with_radio(mut self, title: &str, uri: &str) -> Self {
        self.radio_stations.push(RadioStation {
            title: title.to_string(),
            uri: uri.to_string(),
        });
        self
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.borrow().clone()
    }

    fn record(&self, call: Call) -> Result<()> {
        self.calls.borrow_mut().push(call);
        Ok(())
    }
}

impl SpeakerController for FakeController {
    fn discover_all(&self) -> Result<Vec<Speaker>> {
        Ok(self.groups.iter().flat_map(|g| g.members.iter().cloned()).collect())
    }

    fn speaker_at(&self, address: &str) -> Result<Speaker> {
        self.discover_all()?
            .into_iter()
            .find(|s| s.address == address)
            .ok_or_else(|| ControllerError::SpeakerNotFound(address.to_string()))
    }

    fn groups(&self, _via: &Speaker) -> Result<Vec<Group>> {
        Ok(self.groups.clone())
    }

    fn volume(&self, speaker: &Speaker) -> Result<Volume> {
        Ok(Volume::from(self.volumes.get(&speaker.uuid).copied().unwrap_or(0)))
    }

    fn set_volume(&self, speaker: &Speaker, volume: Volume) -> Result<()> {
        self.record(Call::SetVolume(speaker.name.clone(), volume.value()))
    }

    fn transport_state(&self, speaker: &Speaker) -> Result<TransportState> {
        Ok(self
            .states
            .get(&speaker.uuid)
            .cloned()
            .unwrap_or(TransportState::Stopped))
    }

    fn play(&self, speaker: &Speaker) -> Result<()> {
        self.record(Call::Play(speaker.name.clone()))
    }

    fn pause(&self, speaker: &Speaker) -> Result<()> {
        self.record(Call::Pause(speaker.name.clone()))
    }

    fn next(&self, speaker: &Speaker) -> Result<()> {
        self.record(Call::Next(speaker.name.clone()))
    }

    fn previous(&self, speaker: &Speaker) -> Result<()> {
        self.record(Call::Previous(speaker.name.clone()))
    }

    fn set_play_mode(&self, speaker: &Speaker, mode: PlayMode) -> Result<()> {
        self.record(Call::PlayMode(speaker.name.clone(), mode))
    }

    fn playlists(&self, _speaker: &Speaker) -> Result<Vec<Playlist>> {
        Ok(self.playlists.clone())
    }

    fn radio_stations(&self, _speaker: &Speaker) -> Result<Vec<RadioStation>> {
        Ok(self.radio_stations.clone())
    }

    fn play_playlist(&self, speaker: &Speaker, playlist: &Playlist) -> Result<()> {
        self.record(Call::PlayPlaylist(speaker.name.clone(), playlist.title.clone()))
    }

    fn play_uri(&self, speaker: &Speaker, uri: &str, _metadata: &str) -> Result<()> {
        self.record(Call::PlayUri(speaker.name.clone(), uri.to_string()))
    }

    fn join(&self, speaker: &Speaker, coordinator: &Speaker) -> Result<()> {
        self.record(Call::Join(speaker.name.clone(), coordinator.name.clone()))
    }

    fn unjoin(&self, speaker: &Speaker) -> Result<()> {
        self.record(Call::Unjoin(speaker.name.clone()))
    }
}
