//! Command line parsing

use std::path::PathBuf;

use clap::{ArgGroup, Parser, ValueEnum};

use crate::actions::{Action, JoinTarget};
use crate::address;
use crate::error::BarError;
use crate::model::Volume;

/// Control your Sonos from the command line or a BitBar menu
///
/// Without a target (or with `-b`) the menu for the whole household is
/// printed. Short flags stack, so `-gl Dinner` plays a playlist on the group.
#[derive(Parser, Debug, Clone, PartialEq, Eq)]
#[command(name = "sonosbar")]
#[command(about = "Control your Sonos")]
#[command(version)]
#[command(group(ArgGroup::new("target").args(["player", "ip"])))]
#[command(group(ArgGroup::new("control").args(["playlist", "radio", "vol", "join", "ipjoin", "unjoin", "action"])))]
#[command(group(ArgGroup::new("output").args(["verbose", "bitbar"])))]
pub struct Args {
    /// The name of the player/zone
    #[arg(short, long, value_name = "SPEAKER_NAME")]
    pub player: Option<String>,

    /// The IP address of the player/zone; leading octets may be left out
    #[arg(short, long, value_name = "IP_ADDRESS")]
    pub ip: Option<String>,

    /// Apply the action to the whole group
    #[arg(short, long)]
    pub group: bool,

    /// Display feedback about the action taken
    #[arg(short = 'o', long)]
    pub verbose: bool,

    /// Display BitBar controls
    #[arg(short, long)]
    pub bitbar: bool,

    /// The name of the playlist to play
    #[arg(short = 'l', long, value_name = "PLAYLIST_NAME")]
    pub playlist: Option<String>,

    /// The URI of the radio station to play
    #[arg(short, long, value_name = "RADIO_STATION")]
    pub radio: Option<String>,

    /// Set the volume
    #[arg(short, long, value_name = "VOLUME", value_parser = clap::value_parser!(u8).range(0..=100))]
    pub vol: Option<u8>,

    /// Name of the speaker to join
    #[arg(short, long, value_name = "SPEAKER_NAME")]
    pub join: Option<String>,

    /// IP of the speaker to join
    #[arg(short = 'k', long, value_name = "SPEAKER_IP")]
    pub ipjoin: Option<String>,

    /// Unjoin the player from its group
    #[arg(short, long)]
    pub unjoin: bool,

    /// Action to take if none is set via flags
    #[arg(value_enum, ignore_case = true)]
    pub action: Option<ActionArg>,

    /// Discovery timeout in seconds
    #[arg(long, default_value_t = 3)]
    pub discovery_timeout: u64,

    /// Log level (error, warn, info, debug, trace)
    #[arg(long, default_value = "warn")]
    pub log_level: String,

    /// Program embedded in menu commands
    #[arg(long, value_name = "PATH")]
    pub self_path: Option<PathBuf>,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActionArg {
    Play,
    Pause,
    Next,
    Previous,
    Shuffle,
    /// Disable shuffle
    Normal,
}

impl From<ActionArg> for Action {
    fn from(action: ActionArg) -> Self {
        match action {
            ActionArg::Play => Action::Play,
            ActionArg::Pause => Action::Pause,
            ActionArg::Next => Action::Next,
            ActionArg::Previous => Action::Previous,
            ActionArg::Shuffle => Action::Shuffle,
            ActionArg::Normal => Action::Normal,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Target {
    Name(String),
    Address(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputMode {
    Quiet,
    /// One feedback line per action
    Verbose,
    /// BitBar menu, even when a target is given
    Menu,
}

/// What one run of the program was asked to do
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    pub target: Option<Target>,
    pub group_scope: bool,
    pub output: OutputMode,
    pub action: Option<Action>,
}

/// Menu commands wrap names and URIs in double quotes
fn unquote(value: &str) -> String {
    value
        .strip_prefix('"')
        .and_then(|v| v.strip_suffix('"'))
        .unwrap_or(value)
        .to_string()
}

impl Args {
    /// Build the invocation, completing partial addresses against this host
    pub fn invocation(&self) -> Result<Invocation, BarError> {
        self.invocation_with(address::complete)
    }

    pub fn invocation_with<F>(&self, complete: F) -> Result<Invocation, BarError>
    where
        F: Fn(&str) -> Result<String, BarError>,
    {
        let target = match (&self.player, &self.ip) {
            (Some(name), _) => Some(Target::Name(name.clone())),
            (None, Some(ip)) => Some(Target::Address(complete(ip)?)),
            (None, None) => None,
        };

        let output = if self.bitbar {
            OutputMode::Menu
        } else if self.verbose {
            OutputMode::Verbose
        } else {
            OutputMode::Quiet
        };

        let action = if let Some(playlist) = &self.playlist {
            Some(Action::PlayPlaylist(unquote(playlist)))
        } else if let Some(radio) = &self.radio {
            Some(Action::PlayRadio(unquote(radio)))
        } else if let Some(vol) = self.vol {
            Some(Action::SetVolume(Volume::from(vol)))
        } else if let Some(name) = &self.join {
            Some(Action::Join(JoinTarget::Name(unquote(name))))
        } else if let Some(ip) = &self.ipjoin {
            Some(Action::Join(JoinTarget::Address(complete(ip)?)))
        } else if self.unjoin {
            Some(Action::Unjoin)
        } else {
            self.action.map(Action::from)
        };

        Ok(Invocation {
            target,
            group_scope: self.group,
            output,
            action,
        })
    }
}
