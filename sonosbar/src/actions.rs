//! The single command an invocation carries out

use sonos_api::operations::content_directory::didl;
use tracing::info;

use crate::controller::SpeakerController;
use crate::error::{BarError, ControllerError};
use crate::model::{PlayMode, Speaker, Volume};
use crate::topology;

/// Who a join should follow
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum JoinTarget {
    Name(String),
    Address(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    Play,
    Pause,
    Next,
    Previous,
    Shuffle,
    Normal,
    PlayPlaylist(String),
    PlayRadio(String),
    SetVolume(Volume),
    Join(JoinTarget),
    Unjoin,
}

impl Action {
    /// Transport and library actions act on a lone speaker unless the group was asked for
    pub fn detaches(&self) -> bool {
        match self {
            Action::Play
            | Action::Pause
            | Action::Next
            | Action::Previous
            | Action::Shuffle
            | Action::Normal
            | Action::PlayPlaylist(_)
            | Action::PlayRadio(_) => true,
            Action::SetVolume(_) | Action::Join(_) | Action::Unjoin => false,
        }
    }

    pub fn describe(&self) -> String {
        match self {
            Action::Play => "Play".to_string(),
            Action::Pause => "Pause".to_string(),
            Action::Next => "Next track".to_string(),
            Action::Previous => "Previous track".to_string(),
            Action::Shuffle => "Shuffle ON".to_string(),
            Action::Normal => "Shuffle OFF".to_string(),
            Action::PlayPlaylist(name) => format!("Play playlist {}", name),
            Action::PlayRadio(uri) => format!("Switching to radio station {}", uri),
            Action::SetVolume(volume) => format!("Setting the volume to {}", volume),
            Action::Join(JoinTarget::Name(target)) | Action::Join(JoinTarget::Address(target)) => {
                format!("Joining {}", target)
            }
            Action::Unjoin => "Unjoin".to_string(),
        }
    }
}

/// Whether actions address the target's whole group or only the target
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScopePolicy {
    group_scope: bool,
}

impl ScopePolicy {
    pub fn new(group_scope: bool) -> Self {
        Self { group_scope }
    }

    pub fn group_scope(&self) -> bool {
        self.group_scope
    }

    /// Feedback line for `-o`
    pub fn feedback(&self, action: &Action) -> String {
        let scope = if self.group_scope { "Group" } else { "Player" };
        format!("{}: {}", scope, action.describe())
    }

    /// Run `perform`, first taking `speaker` out of its group if `action` requires it
    pub fn apply<C, F>(&self, controller: &C, speaker: &Speaker, action: &Action, perform: F) -> Result<(), BarError>
    where
        C: SpeakerController,
        F: FnOnce() -> Result<(), BarError>,
    {
        if action.detaches() && !self.group_scope {
            controller.unjoin(speaker)?;
        }
        perform()
    }
}

pub struct Dispatcher<'a, C> {
    controller: &'a C,
    policy: ScopePolicy,
}

impl<'a, C: SpeakerController> Dispatcher<'a, C> {
    pub fn new(controller: &'a C, policy: ScopePolicy) -> Self {
        Self { controller, policy }
    }

    /// Carry out `action` on `speaker`, which is already the coordinator in group scope
    pub fn dispatch(&self, speaker: &Speaker, action: &Action) -> Result<(), BarError> {
        info!(speaker = %speaker.name, action = %action.describe(), group = self.policy.group_scope(), "dispatching");
        let controller = self.controller;

        self.policy.apply(controller, speaker, action, || match action {
            Action::Play => Ok(controller.play(speaker)?),
            Action::Pause => Ok(controller.pause(speaker)?),
            Action::Next => Ok(controller.next(speaker)?),
            Action::Previous => Ok(controller.previous(speaker)?),
            Action::Shuffle => Ok(controller.set_play_mode(speaker, PlayMode::ShuffleNoRepeat)?),
            Action::Normal => Ok(controller.set_play_mode(speaker, PlayMode::Normal)?),
            Action::PlayPlaylist(name) => self.play_playlist(speaker, name),
            Action::PlayRadio(uri) => Ok(controller.play_uri(speaker, uri, &didl::radio_metadata())?),
            Action::SetVolume(volume) => Ok(controller.set_volume(speaker, *volume)?),
            Action::Join(target) => self.join(speaker, target),
            Action::Unjoin => Ok(controller.unjoin(speaker)?),
        })
    }

    fn play_playlist(&self, speaker: &Speaker, name: &str) -> Result<(), BarError> {
        let playlist = self
            .controller
            .playlists(speaker)?
            .into_iter()
            .find(|p| p.title == name)
            .ok_or_else(|| ControllerError::PlaylistNotFound(name.to_string()))?;
        Ok(self.controller.play_playlist(speaker, &playlist)?)
    }

    fn join(&self, speaker: &Speaker, target: &JoinTarget) -> Result<(), BarError> {
        let target = resolve_join_target(self.controller, speaker, target)?;
        let groups = self.controller.groups(speaker)?;
        let coordinator = topology::group_of(&groups, &target)
            .map_err(|_| BarError::JoinTargetUnknown)?
            .coordinator
            .clone();

        if self.policy.group_scope() {
            let source = topology::group_of(&groups, speaker)?;
            for member in &source.members {
                self.controller.join(member, &coordinator)?;
            }
        } else {
            self.controller.join(speaker, &coordinator)?;
        }
        Ok(())
    }
}

fn resolve_join_target<C: SpeakerController>(
    controller: &C,
    speaker: &Speaker,
    target: &JoinTarget,
) -> Result<Speaker, BarError> {
    let resolved = match target {
        JoinTarget::Address(address) => controller.speaker_at(address),
        JoinTarget::Name(name) => controller.groups(speaker).and_then(|groups| {
            topology::find_by_name(&groups, name)
                .cloned()
                .ok_or_else(|| ControllerError::SpeakerNotFound(name.clone()))
        }),
    };

    match resolved {
        Ok(target) => Ok(target),
        Err(ControllerError::SpeakerNotFound(_)) => Err(BarError::JoinTargetUnknown),
        Err(e) => Err(e.into()),
    }
}
