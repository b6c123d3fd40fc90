//! Zones: the household grouped the way the menu presents it

use std::collections::HashSet;

use tracing::warn;

use crate::error::{BarError, ControllerError};
use crate::model::{Group, Speaker};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ZoneKind {
    /// A speaker playing on its own
    Single,
    /// Two or more speakers under one coordinator
    Group,
}

impl ZoneKind {
    /// Prefix of the zone's title line
    pub fn label(self) -> &'static str {
        match self {
            ZoneKind::Single => "P",
            ZoneKind::Group => "G",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Zone {
    pub kind: ZoneKind,
    pub coordinator: Speaker,
    /// Group members in topology order, coordinator included; empty for `Single`
    pub members: Vec<Speaker>,
}

/// One zone per group, in topology order
///
/// A coordinator reported twice is only used once. An empty household is
/// [`BarError::DiscoveryEmpty`].
pub fn build_zones(groups: &[Group]) -> Result<Vec<Zone>, BarError> {
    if groups.is_empty() {
        return Err(BarError::DiscoveryEmpty);
    }

    let mut seen = HashSet::new();
    let zones = groups
        .iter()
        .filter(|group| {
            let fresh = seen.insert(group.coordinator.uuid.as_str());
            if !fresh {
                warn!(coordinator = %group.coordinator.name, "duplicate coordinator dropped");
            }
            fresh
        })
        .map(|group| {
            if group.members.len() > 1 {
                Zone {
                    kind: ZoneKind::Group,
                    coordinator: group.coordinator.clone(),
                    members: group.members.clone(),
                }
            } else {
                Zone {
                    kind: ZoneKind::Single,
                    coordinator: group.coordinator.clone(),
                    members: Vec::new(),
                }
            }
        })
        .collect();

    Ok(zones)
}

/// Every visible speaker in topology order
pub fn all_speakers(groups: &[Group]) -> Vec<Speaker> {
    groups.iter().flat_map(|g| g.members.iter().cloned()).collect()
}

pub fn find_by_name<'a>(groups: &'a [Group], name: &str) -> Option<&'a Speaker> {
    groups.iter().flat_map(|g| &g.members).find(|s| s.name == name)
}

/// The group `speaker` belongs to
pub fn group_of<'a>(groups: &'a [Group], speaker: &Speaker) -> Result<&'a Group, ControllerError> {
    groups
        .iter()
        .find(|g| g.contains(speaker))
        .ok_or_else(|| ControllerError::NoCoordinator(speaker.name.clone()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn speaker(n: usize) -> Speaker {
        Speaker::new(format!("RINCON_{}", n), format!("Room {}", n), format!("10.0.0.{}", n))
    }

    fn group(ids: &[usize]) -> Group {
        Group {
            coordinator: speaker(ids[0]),
            members: ids.iter().map(|&n| speaker(n)).collect(),
        }
    }

    #[test]
    fn test_single_and_group_zones() {
        let zones = build_zones(&[group(&[1]), group(&[2, 3, 4])]).unwrap();

        assert_eq!(zones.len(), 2);
        assert_eq!(zones[0].kind, ZoneKind::Single);
        assert!(zones[0].members.is_empty());
        assert_eq!(zones[1].kind, ZoneKind::Group);
        assert_eq!(zones[1].members.len(), 3);
        assert_eq!(zones[1].members[0], zones[1].coordinator);
        assert_ne!(zones[0].coordinator, zones[1].coordinator);
    }

    #[test]
    fn test_empty_household() {
        assert!(matches!(build_zones(&[]), Err(BarError::DiscoveryEmpty)));
    }

    #[test]
    fn test_duplicate_coordinator_is_dropped() {
        let zones = build_zones(&[group(&[1, 2]), group(&[1])]).unwrap();
        assert_eq!(zones.len(), 1);
        assert_eq!(zones[0].kind, ZoneKind::Group);
    }

    #[test]
    fn test_lookups() {
        let groups = vec![group(&[1]), group(&[2, 3])];

        assert_eq!(find_by_name(&groups, "Room 3"), Some(&speaker(3)));
        assert_eq!(find_by_name(&groups, "Attic"), None);
        assert_eq!(group_of(&groups, &speaker(3)).unwrap().coordinator, speaker(2));
        assert!(matches!(
            group_of(&groups, &speaker(9)),
            Err(ControllerError::NoCoordinator(_))
        ));
        assert_eq!(all_speakers(&groups), vec![speaker(1), speaker(2), speaker(3)]);
    }

    proptest! {
        #[test]
        fn zones_partition_the_household(sizes in prop::collection::vec(1usize..5, 1..6)) {
            let mut next = 1;
            let groups: Vec<Group> = sizes
                .iter()
                .map(|&size| {
                    let ids: Vec<usize> = (next..next + size).collect();
                    next += size;
                    group(&ids)
                })
                .collect();

            let zones = build_zones(&groups).unwrap();
            prop_assert_eq!(zones.len(), groups.len());

            let mut coordinators = HashSet::new();
            for (zone, group) in zones.iter().zip(&groups) {
                prop_assert!(coordinators.insert(zone.coordinator.uuid.clone()));
                let expected = if group.members.len() > 1 { ZoneKind::Group } else { ZoneKind::Single };
                prop_assert_eq!(zone.kind, expected);
            }
        }
    }
}
