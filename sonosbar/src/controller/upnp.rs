use std::time::Duration;

use sonos_api::operations::av_transport::{
    AddURIToQueueOperation, AddURIToQueueRequest, BecomeCoordinatorOfStandaloneGroupOperation,
    BecomeCoordinatorOfStandaloneGroupRequest, GetTransportInfoOperation, GetTransportInfoRequest,
    NextOperation, PauseOperation, PauseRequest, PlayOperation, PlayRequest, PreviousOperation,
    RemoveAllTracksFromQueueOperation, RemoveAllTracksFromQueueRequest, SeekOperation, SeekRequest,
    SetAVTransportURIOperation, SetAVTransportURIRequest, SetPlayModeOperation, SetPlayModeRequest,
    SkipRequest,
};
use sonos_api::operations::content_directory::{
    didl, BrowseOperation, BrowseRequest, DidlObject, RADIO_FAVORITES, SAVED_QUEUES,
};
use sonos_api::operations::rendering_control::{
    GetVolumeOperation, GetVolumeRequest, SetVolumeOperation, SetVolumeRequest,
};
use sonos_api::operations::zone_group_topology::{
    GetZoneGroupStateOperation, GetZoneGroupStateRequest, ZoneGroup, ZoneGroupMember, ZoneGroupState,
};
use sonos_api::SonosClient;
use tracing::{debug, warn};

use super::{Result, SpeakerController};
use crate::error::ControllerError;
use crate::model::{Group, PlayMode, Playlist, RadioStation, Speaker, TransportState, Volume};

/// Controller talking UPnP to real speakers
#[derive(Debug, Clone)]
pub struct UpnpController {
    client: SonosClient,
    discovery_timeout: Duration,
}

impl UpnpController {
    pub fn new(discovery_timeout: Duration) -> Self {
        Self::with_client(SonosClient::new(), discovery_timeout)
    }

    pub fn with_client(client: SonosClient, discovery_timeout: Duration) -> Self {
        Self {
            client,
            discovery_timeout,
        }
    }

    fn zone_group_state(&self, address: &str) -> Result<ZoneGroupState> {
        let response = self
            .client
            .execute::<GetZoneGroupStateOperation>(address, &GetZoneGroupStateRequest)?;
        Ok(response.zone_group_state)
    }

    fn browse(&self, speaker: &Speaker, object_id: &str) -> Result<Vec<DidlObject>> {
        let response = self
            .client
            .execute::<BrowseOperation>(&speaker.address, &BrowseRequest::children(object_id))?;
        debug!(object_id, returned = response.number_returned, total = response.total_matches, "browsed");
        Ok(response.objects)
    }
}

fn member_speaker(member: &ZoneGroupMember) -> Option<Speaker> {
    match member.ip_address() {
        Some(address) => Some(Speaker::new(&member.uuid, &member.zone_name, address)),
        None => {
            warn!(uuid = %member.uuid, location = %member.location, "member without usable location");
            None
        }
    }
}

fn group_from_topology(zone_group: &ZoneGroup) -> Option<Group> {
    let members: Vec<Speaker> = zone_group.visible_members().filter_map(member_speaker).collect();
    let coordinator = members.iter().find(|m| m.uuid == zone_group.coordinator)?.clone();
    Some(Group { coordinator, members })
}

impl SpeakerController for UpnpController {
    fn discover_all(&self) -> Result<Vec<Speaker>> {
        Ok(sonos_discovery::get_with_timeout(self.discovery_timeout)
            .into_iter()
            .map(Speaker::from)
            .collect())
    }

    fn discover_one(&self) -> Result<Option<Speaker>> {
        Ok(sonos_discovery::first_with_timeout(self.discovery_timeout).map(Speaker::from))
    }

    fn speaker_at(&self, address: &str) -> Result<Speaker> {
        self.zone_group_state(address)?
            .groups
            .iter()
            .flat_map(|g| g.visible_members())
            .filter_map(member_speaker)
            .find(|s| s.address == address)
            .ok_or_else(|| ControllerError::SpeakerNotFound(address.to_string()))
    }

    fn groups(&self, via: &Speaker) -> Result<Vec<Group>> {
        let state = self.zone_group_state(&via.address)?;
        Ok(state
            .groups
            .iter()
            .filter_map(|zone_group| {
                let group = group_from_topology(zone_group);
                if group.is_none() {
                    warn!(id = %zone_group.id, "group without a visible coordinator");
                }
                group
            })
            .collect())
    }

    fn volume(&self, speaker: &Speaker) -> Result<Volume> {
        let response = self
            .client
            .execute::<GetVolumeOperation>(&speaker.address, &GetVolumeRequest::default())?;
        Ok(Volume::from(response.current_volume))
    }

    fn set_volume(&self, speaker: &Speaker, volume: Volume) -> Result<()> {
        self.client
            .execute::<SetVolumeOperation>(&speaker.address, &SetVolumeRequest::master(volume.value()))?;
        Ok(())
    }

    fn transport_state(&self, speaker: &Speaker) -> Result<TransportState> {
        let response = self
            .client
            .execute::<GetTransportInfoOperation>(&speaker.address, &GetTransportInfoRequest::default())?;
        Ok(response.current_transport_state)
    }

    fn play(&self, speaker: &Speaker) -> Result<()> {
        self.client
            .execute::<PlayOperation>(&speaker.address, &PlayRequest::default())?;
        Ok(())
    }

    fn pause(&self, speaker: &Speaker) -> Result<()> {
        self.client
            .execute::<PauseOperation>(&speaker.address, &PauseRequest::default())?;
        Ok(())
    }

    fn next(&self, speaker: &Speaker) -> Result<()> {
        self.client
            .execute::<NextOperation>(&speaker.address, &SkipRequest::default())?;
        Ok(())
    }

    fn previous(&self, speaker: &Speaker) -> Result<()> {
        self.client
            .execute::<PreviousOperation>(&speaker.address, &SkipRequest::default())?;
        Ok(())
    }

    fn set_play_mode(&self, speaker: &Speaker, mode: PlayMode) -> Result<()> {
        let request = SetPlayModeRequest {
            instance_id: 0,
            new_play_mode: mode,
        };
        self.client
            .execute::<SetPlayModeOperation>(&speaker.address, &request)?;
        Ok(())
    }

    fn playlists(&self, speaker: &Speaker) -> Result<Vec<Playlist>> {
        Ok(self
            .browse(speaker, SAVED_QUEUES)?
            .into_iter()
            .filter_map(|object| {
                Some(Playlist {
                    uri: object.uri?,
                    title: object.title,
                    id: object.id,
                })
            })
            .collect())
    }

    fn radio_stations(&self, speaker: &Speaker) -> Result<Vec<RadioStation>> {
        Ok(self
            .browse(speaker, RADIO_FAVORITES)?
            .into_iter()
            .filter_map(|object| {
                Some(RadioStation {
                    uri: object.uri?,
                    title: object.title,
                })
            })
            .collect())
    }

    fn play_playlist(&self, speaker: &Speaker, playlist: &Playlist) -> Result<()> {
        let address = speaker.address.as_str();
        let metadata = didl::playlist_metadata(&DidlObject {
            id: playlist.id.clone(),
            parent_id: SAVED_QUEUES.to_string(),
            title: playlist.title.clone(),
            uri: Some(playlist.uri.clone()),
            class: None,
            is_container: true,
        });

        self.client.execute::<RemoveAllTracksFromQueueOperation>(
            address,
            &RemoveAllTracksFromQueueRequest::default(),
        )?;
        let added = self.client.execute::<AddURIToQueueOperation>(
            address,
            &AddURIToQueueRequest {
                instance_id: 0,
                enqueued_uri: playlist.uri.clone(),
                enqueued_uri_meta_data: metadata,
                desired_first_track_number_enqueued: 0,
                enqueue_as_next: false,
            },
        )?;
        debug!(playlist = %playlist.title, tracks = added.num_tracks_added, "queue replaced");

        self.client
            .execute::<SetAVTransportURIOperation>(address, &SetAVTransportURIRequest::queue(&speaker.uuid))?;
        self.client
            .execute::<SeekOperation>(address, &SeekRequest::track(1))?;
        self.play(speaker)
    }

    fn play_uri(&self, speaker: &Speaker, uri: &str, metadata: &str) -> Result<()> {
        let request = SetAVTransportURIRequest {
            instance_id: 0,
            current_uri: uri.to_string(),
            current_uri_meta_data: metadata.to_string(),
        };
        self.client
            .execute::<SetAVTransportURIOperation>(&speaker.address, &request)?;
        self.play(speaker)
    }

    fn join(&self, speaker: &Speaker, coordinator: &Speaker) -> Result<()> {
        self.client.execute::<SetAVTransportURIOperation>(
            &speaker.address,
            &SetAVTransportURIRequest::join(&coordinator.uuid),
        )?;
        Ok(())
    }

    fn unjoin(&self, speaker: &Speaker) -> Result<()> {
        self.client.execute::<BecomeCoordinatorOfStandaloneGroupOperation>(
            &speaker.address,
            &BecomeCoordinatorOfStandaloneGroupRequest::default(),
        )?;
        Ok(())
    }
}
