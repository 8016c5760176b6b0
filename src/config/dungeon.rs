// src/config/dungeon.rs

use serde::{Deserialize, Serialize};

/// The overall objective of the dungeon visit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DungeonObjective {
    Story,
    Normal,
    Rescue,
    UnkGamemode5,
}

impl DungeonObjective {
    pub fn all() -> &'static [DungeonObjective] {
        &[
            DungeonObjective::Story,
            DungeonObjective::Normal,
            DungeonObjective::Rescue,
            DungeonObjective::UnkGamemode5,
        ]
    }

    pub fn name(&self) -> &'static str {
        match self {
            DungeonObjective::Story => "Story",
            DungeonObjective::Normal => "Normal",
            DungeonObjective::Rescue => "Rescue",
            DungeonObjective::UnkGamemode5 => "Unknown Gamemode 5",
        }
    }
}

/// Subtype of a challenge-request mission.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ChallengeSubtype {
    #[default]
    Normal,
    Mewtwo,
    Entei,
    Raikou,
    Suicune,
    Jirachi,
}

impl ChallengeSubtype {
    pub fn all() -> &'static [ChallengeSubtype] {
        &[
            ChallengeSubtype::Normal,
            ChallengeSubtype::Mewtwo,
            ChallengeSubtype::Entei,
            ChallengeSubtype::Raikou,
            ChallengeSubtype::Suicune,
            ChallengeSubtype::Jirachi,
        ]
    }

    pub fn name(&self) -> &'static str {
        match self {
            ChallengeSubtype::Normal => "Normal",
            ChallengeSubtype::Mewtwo => "Mewtwo",
            ChallengeSubtype::Entei => "Entei",
            ChallengeSubtype::Raikou => "Raikou",
            ChallengeSubtype::Suicune => "Suicune",
            ChallengeSubtype::Jirachi => "Jirachi",
        }
    }
}

/// Subtype of an exploration mission.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ExploreSubtype {
    #[default]
    Normal,
    SealedChamber,
    GoldenChamber,
    NewDungeon,
}

impl ExploreSubtype {
    pub fn all() -> &'static [ExploreSubtype] {
        &[
            ExploreSubtype::Normal,
            ExploreSubtype::SealedChamber,
            ExploreSubtype::GoldenChamber,
            ExploreSubtype::NewDungeon,
        ]
    }

    pub fn name(&self) -> &'static str {
        match self {
            ExploreSubtype::Normal => "Normal",
            ExploreSubtype::SealedChamber => "Sealed Chamber",
            ExploreSubtype::GoldenChamber => "Golden Chamber",
            ExploreSubtype::NewDungeon => "New Dungeon",
        }
    }
}

/// Subtype of an arrest-outlaw mission.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum OutlawSubtype {
    #[default]
    Normal0,
    Normal1,
    Normal2,
    Normal3,
    Escort,
    Fleeing,
    Hideout,
    MonsterHouse,
}

impl OutlawSubtype {
    pub fn all() -> &'static [OutlawSubtype] {
        &[
            OutlawSubtype::Normal0,
            OutlawSubtype::Normal1,
            OutlawSubtype::Normal2,
            OutlawSubtype::Normal3,
            OutlawSubtype::Escort,
            OutlawSubtype::Fleeing,
            OutlawSubtype::Hideout,
            OutlawSubtype::MonsterHouse,
        ]
    }

    pub fn name(&self) -> &'static str {
        match self {
            OutlawSubtype::Normal0 => "Normal 0",
            OutlawSubtype::Normal1 => "Normal 1",
            OutlawSubtype::Normal2 => "Normal 2",
            OutlawSubtype::Normal3 => "Normal 3",
            OutlawSubtype::Escort => "Escort",
            OutlawSubtype::Fleeing => "Fleeing",
            OutlawSubtype::Hideout => "Hideout",
            OutlawSubtype::MonsterHouse => "Monster House",
        }
    }
}

/// Subtype of a take-item-from-outlaw mission.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum TakeItemSubtype {
    #[default]
    NormalOutlaw,
    HiddenOutlaw,
    FleeingOutlaw,
}

impl TakeItemSubtype {
    pub fn all() -> &'static [TakeItemSubtype] {
        &[
            TakeItemSubtype::NormalOutlaw,
            TakeItemSubtype::HiddenOutlaw,
            TakeItemSubtype::FleeingOutlaw,
        ]
    }

    pub fn name(&self) -> &'static str {
        match self {
            TakeItemSubtype::NormalOutlaw => "Normal Outlaw",
            TakeItemSubtype::HiddenOutlaw => "Hidden Outlaw",
            TakeItemSubtype::FleeingOutlaw => "Fleeing Outlaw",
        }
    }
}

/// The mission active on the destination floor.
///
/// Only four mission kinds carry a subtype; those variants hold it as a
/// payload, so a subtype can never be paired with a mission kind it does
/// not belong to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "mission_type", content = "mission_subtype")]
pub enum MissionType {
    RescueClient,
    RescueTarget,
    EscortToTarget,
    ExploreWithClient(ExploreSubtype),
    ProspectWithClient,
    GuideClient,
    FindItem,
    DeliverItem,
    SearchForTarget,
    TakeItemFromOutlaw(TakeItemSubtype),
    ArrestOutlaw(OutlawSubtype),
    ChallengeRequest(ChallengeSubtype),
    TreasureMemo,
}

impl Default for MissionType {
    fn default() -> Self {
        MissionType::RescueClient
    }
}

impl MissionType {
    /// One representative of every mission kind, in menu order. Kinds with
    /// a subtype start on their default subtype.
    pub fn all() -> &'static [MissionType] {
        &[
            MissionType::RescueClient,
            MissionType::RescueTarget,
            MissionType::EscortToTarget,
            MissionType::ExploreWithClient(ExploreSubtype::Normal),
            MissionType::ProspectWithClient,
            MissionType::GuideClient,
            MissionType::FindItem,
            MissionType::DeliverItem,
            MissionType::SearchForTarget,
            MissionType::TakeItemFromOutlaw(TakeItemSubtype::NormalOutlaw),
            MissionType::ArrestOutlaw(OutlawSubtype::Normal0),
            MissionType::ChallengeRequest(ChallengeSubtype::Normal),
            MissionType::TreasureMemo,
        ]
    }

    pub fn name(&self) -> &'static str {
        match self {
            MissionType::RescueClient => "Rescue Client",
            MissionType::RescueTarget => "Rescue Target",
            MissionType::EscortToTarget => "Escort to Target",
            MissionType::ExploreWithClient(_) => "Explore with Client",
            MissionType::ProspectWithClient => "Prospect with Client",
            MissionType::GuideClient => "Guide Client",
            MissionType::FindItem => "Find Item",
            MissionType::DeliverItem => "Deliver Item",
            MissionType::SearchForTarget => "Search for Target",
            MissionType::TakeItemFromOutlaw(_) => "Take Item from Outlaw",
            MissionType::ArrestOutlaw(_) => "Arrest Outlaw",
            MissionType::ChallengeRequest(_) => "Challenge Request",
            MissionType::TreasureMemo => "Treasure Memo",
        }
    }

    /// True when two mission values are the same kind, ignoring subtype.
    pub fn same_kind(&self, other: &MissionType) -> bool {
        std::mem::discriminant(self) == std::mem::discriminant(other)
    }
}

/// Mission state for the floor, merged one level below the dungeon section.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct MissionDestination {
    /// Whether this floor is the destination floor for a mission.
    pub is_destination_floor: bool,
    pub mission: MissionType,
}

/// Properties of the dungeon the floor belongs to.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DungeonProperties {
    /// The dungeon's ID. Only relevant for gating monster-house traps in
    /// story mode.
    pub id: i32,
    /// The floor number within the dungeon.
    pub floor: i32,
    /// Number of floors in the dungeon, plus one.
    pub n_floors_plus_one: i32,
    pub rescue_floor: i32,
    /// Whether the dungeon is being cleared outside story mode.
    pub nonstory_flag: bool,
    pub mission_destination: MissionDestination,
    pub dungeon_objective: DungeonObjective,
    /// Item ID guaranteed to spawn on the floor; 0 for none.
    pub guaranteed_item_id: i32,
}

impl Default for DungeonProperties {
    fn default() -> Self {
        DungeonProperties {
            id: 0,
            floor: 0,
            n_floors_plus_one: 5,
            rescue_floor: 0,
            nonstory_flag: true,
            mission_destination: MissionDestination::default(),
            dungeon_objective: DungeonObjective::Normal,
            guaranteed_item_id: 0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mission_subtype_stays_with_its_kind() {
        let challenge = MissionType::ChallengeRequest(ChallengeSubtype::Mewtwo);
        let explore = MissionType::ExploreWithClient(ExploreSubtype::Normal);

        assert!(challenge.same_kind(&MissionType::ChallengeRequest(ChallengeSubtype::Jirachi)));
        assert!(!challenge.same_kind(&explore));
    }

    #[test]
    fn mission_serializes_with_subtype_payload() {
        let dest = MissionDestination {
            is_destination_floor: true,
            mission: MissionType::ArrestOutlaw(OutlawSubtype::Hideout),
        };

        let json = serde_json::to_value(&dest).unwrap();
        assert_eq!(json["mission"]["mission_type"], "ArrestOutlaw");
        assert_eq!(json["mission"]["mission_subtype"], "Hideout");

        let back: MissionDestination = serde_json::from_value(json).unwrap();
        assert_eq!(back, dest);
    }

    #[test]
    fn mission_without_subtype_omits_payload() {
        let dest = MissionDestination {
            is_destination_floor: false,
            mission: MissionType::TreasureMemo,
        };

        let json = serde_json::to_value(&dest).unwrap();
        assert_eq!(json["mission"]["mission_type"], "TreasureMemo");
        assert!(json["mission"].get("mission_subtype").is_none());
    }
}
