//! BitBar menu rendering
//!
//! A [`MenuSnapshot`] is collected from the controller first; rendering it
//! is pure, so the menu is either produced whole or not at all.

pub mod command;

use std::fmt;
use std::path::PathBuf;

use tracing::debug;

use crate::controller::SpeakerController;
use crate::error::BarError;
use crate::model::{Playlist, RadioStation, Speaker, TransportState, Volume};
use crate::topology::{self, Zone, ZoneKind};
use command::Command;

/// Settings the renderer needs from outside the household
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuConfig {
    /// Program the embedded commands re-invoke
    pub program: PathBuf,
}

/// One line of BitBar output
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuLine {
    /// Submenu depth, rendered as two dashes per level
    pub depth: usize,
    pub label: String,
    pub command: Option<Command>,
}

impl MenuLine {
    pub fn text(depth: usize, label: impl Into<String>) -> Self {
        Self {
            depth,
            label: label.into(),
            command: None,
        }
    }

    pub fn action(depth: usize, label: impl Into<String>, command: Command) -> Self {
        Self {
            depth,
            label: label.into(),
            command: Some(command),
        }
    }

    pub fn separator() -> Self {
        Self::text(0, "---")
    }
}

impl fmt::Display for MenuLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", "--".repeat(self.depth), self.label)?;
        if let Some(command) = &self.command {
            write!(f, " | {}", command)?;
        }
        Ok(())
    }
}

/// The fixed menu shown when no speaker answers
pub fn no_speakers_menu() -> Vec<MenuLine> {
    vec![
        MenuLine::text(0, "🔇 Sonos"),
        MenuLine::separator(),
        MenuLine::text(0, "No Sonos Zone present"),
    ]
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayerSnapshot {
    pub speaker: Speaker,
    pub volume: Volume,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ZoneSnapshot {
    pub kind: ZoneKind,
    pub coordinator: PlayerSnapshot,
    /// Coordinator's transport state, which the whole zone follows
    pub transport: TransportState,
    /// Empty for single-player zones
    pub members: Vec<PlayerSnapshot>,
}

/// Everything a menu shows, read from the household once
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuSnapshot {
    pub zones: Vec<ZoneSnapshot>,
    /// Join targets, in topology order
    pub players: Vec<Speaker>,
    pub playlists: Vec<Playlist>,
    pub radio_stations: Vec<RadioStation>,
}

impl MenuSnapshot {
    /// Query the household through `anchor`
    ///
    /// Saved playlists and favourites are household-wide, so they are read
    /// once from the anchor rather than per zone.
    pub fn collect<C: SpeakerController>(controller: &C, anchor: &Speaker) -> Result<Self, BarError> {
        let groups = controller.groups(anchor)?;
        let zones = topology::build_zones(&groups)?;
        let player = |speaker: &Speaker| -> Result<PlayerSnapshot, BarError> {
            Ok(PlayerSnapshot {
                speaker: speaker.clone(),
                volume: controller.volume(speaker)?,
            })
        };

        let zones = zones
            .iter()
            .map(|zone: &Zone| -> Result<ZoneSnapshot, BarError> {
                Ok(ZoneSnapshot {
                    kind: zone.kind,
                    coordinator: player(&zone.coordinator)?,
                    transport: controller.transport_state(&zone.coordinator)?,
                    members: zone.members.iter().map(&player).collect::<Result<Vec<_>, BarError>>()?,
                })
            })
            .collect::<Result<Vec<_>, BarError>>()?;

        let snapshot = Self {
            zones,
            players: topology::all_speakers(&groups),
            playlists: controller.playlists(anchor)?,
            radio_stations: controller.radio_stations(anchor)?,
        };
        debug!(
            zones = snapshot.zones.len(),
            playlists = snapshot.playlists.len(),
            radios = snapshot.radio_stations.len(),
            "menu snapshot collected"
        );
        Ok(snapshot)
    }
}

pub struct MenuRenderer<'a> {
    config: &'a MenuConfig,
}

impl<'a> MenuRenderer<'a> {
    pub fn new(config: &'a MenuConfig) -> Self {
        Self { config }
    }

    pub fn render(&self, snapshot: &MenuSnapshot) -> Vec<MenuLine> {
        let mut lines = vec![MenuLine::text(0, "🔊Sonos"), MenuLine::separator()];
        for zone in &snapshot.zones {
            self.zone(&mut lines, snapshot, zone);
        }
        lines
    }

    fn command<S: Into<String>>(&self, speaker: &Speaker, params: impl IntoIterator<Item = S>) -> Command {
        Command::new(&self.config.program, &speaker.address, params)
    }

    fn zone(&self, lines: &mut Vec<MenuLine>, snapshot: &MenuSnapshot, zone: &ZoneSnapshot) {
        let coordinator = &zone.coordinator.speaker;
        lines.push(MenuLine::separator());
        lines.push(MenuLine::text(0, "Zone:"));
        lines.push(MenuLine::text(0, format!("{}: {}", zone.kind.label(), coordinator.name)));

        match zone.kind {
            ZoneKind::Single => {
                self.library(lines, snapshot, coordinator);
                self.player_controls(lines, snapshot, coordinator, 1);
                self.transport(lines, zone);
            }
            ZoneKind::Group => {
                self.library(lines, snapshot, coordinator);
                self.transport(lines, zone);
                for member in &zone.members {
                    lines.push(MenuLine::text(0, format!("➤ {}", member.speaker.name)));
                    self.player_controls(lines, snapshot, &member.speaker, 1);
                    lines.push(MenuLine::text(1, "Volume"));
                    self.volume_ladder(lines, member, 2);
                }
            }
        }
    }

    fn library(&self, lines: &mut Vec<MenuLine>, snapshot: &MenuSnapshot, speaker: &Speaker) {
        lines.push(MenuLine::text(1, "Playlists"));
        for playlist in &snapshot.playlists {
            let quoted = format!("\"{}\"", playlist.title);
            lines.push(MenuLine::action(2, &playlist.title, self.command(speaker, ["-gl".to_string(), quoted])));
        }

        lines.push(MenuLine::text(1, "Radios"));
        for station in &snapshot.radio_stations {
            let quoted = format!("\"{}\"", station.uri);
            lines.push(MenuLine::action(2, &station.title, self.command(speaker, ["-gr".to_string(), quoted])));
        }
    }

    fn player_controls(&self, lines: &mut Vec<MenuLine>, snapshot: &MenuSnapshot, speaker: &Speaker, depth: usize) {
        lines.push(MenuLine::text(depth, "Join"));
        for other in snapshot.players.iter().filter(|p| p.uuid != speaker.uuid) {
            lines.push(MenuLine::action(
                depth + 1,
                &other.name,
                self.command(speaker, ["--ipjoin", other.address.as_str()]),
            ));
        }
        lines.push(MenuLine::action(depth, "Unjoin", self.command(speaker, ["--unjoin"])));
    }

    fn transport(&self, lines: &mut Vec<MenuLine>, zone: &ZoneSnapshot) {
        let coordinator = &zone.coordinator.speaker;
        if zone.transport == TransportState::Playing {
            lines.push(MenuLine::action(0, "├ Pause", self.command(coordinator, ["pause", "-g"])));
            lines.push(MenuLine::action(0, "├ Next", self.command(coordinator, ["next", "-g"])));
        } else {
            lines.push(MenuLine::action(0, "├ Play", self.command(coordinator, ["play", "-g"])));
        }
        lines.push(MenuLine::text(0, "└ Volume"));
        self.volume_ladder(lines, &zone.coordinator, 1);
    }

    fn volume_ladder(&self, lines: &mut Vec<MenuLine>, player: &PlayerSnapshot, depth: usize) {
        let current = player.volume.value();
        for bucket in 0..=10u8 {
            let level = bucket * 10;
            if bucket_selected(bucket, current) {
                lines.push(MenuLine::text(depth, format!("✓{}", level)));
            } else {
                let command = self.command(&player.speaker, ["--vol".to_string(), level.to_string()]);
                lines.push(MenuLine::action(depth, level.to_string(), command));
            }
        }
    }
}

/// Bucket `i` covers volumes in `((i - 1) * 10, i * 10]`; bucket 0 takes volume 0
pub fn bucket_selected(bucket: u8, volume: u8) -> bool {
    let (bucket, volume) = (i32::from(bucket), i32::from(volume));
    (bucket - 1) * 10 < volume && volume <= bucket * 10
}
