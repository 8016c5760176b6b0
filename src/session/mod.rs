// src/session/mod.rs
//
// The committed-configuration store. The UI edits a draft copy freely;
// nothing reaches this store until an explicit commit action, and the
// recorder only ever reads committed state from here.

mod patch;

pub use patch::{
    AdvancedPatch, ConfigPatch, ConstantsPatch, DungeonPatch, FloorPatch, MissionPatch,
    RoomFlagsPatch,
};

use std::sync::Arc;

use parking_lot::RwLock;

use crate::config::DungeonConfig;

/// The two ways committed state can change.
#[derive(Debug, Clone)]
pub enum SessionAction {
    /// Replace committed state with the configuration defaults.
    ResetToDefaults,
    /// Merge a partial configuration into committed state, one level deep
    /// per section (one further level for the nested sub-records).
    Commit(ConfigPatch),
}

struct SessionInner {
    committed: DungeonConfig,
    revision: u64,
}

/// A cheaply clonable handle to one session store.
///
/// Each call to [`SessionStore::new`] creates an independent store; there
/// is no process-wide instance. All mutation goes through [`dispatch`],
/// which is expected to be driven from a single place (the event loop);
/// everything else reads. The revision counter ticks on every dispatch,
/// so readers can cheaply detect that committed state changed since they
/// last looked.
///
/// [`dispatch`]: SessionStore::dispatch
#[derive(Clone)]
pub struct SessionStore {
    inner: Arc<RwLock<SessionInner>>,
}

impl SessionStore {
    /// A fresh store holding the default configuration.
    pub fn new() -> Self {
        SessionStore {
            inner: Arc::new(RwLock::new(SessionInner {
                committed: DungeonConfig::default(),
                revision: 0,
            })),
        }
    }

    /// The current committed configuration, by value. The config is a
    /// small plain-data struct; handing out a copy keeps readers
    /// decoupled from the lock.
    pub fn committed(&self) -> DungeonConfig {
        self.inner.read().committed.clone()
    }

    /// Monotonic count of dispatches applied so far.
    pub fn revision(&self) -> u64 {
        self.inner.read().revision
    }

    pub fn dispatch(&self, action: SessionAction) {
        let mut inner = self.inner.write();
        match action {
            SessionAction::ResetToDefaults => {
                inner.committed = DungeonConfig::default();
            }
            SessionAction::Commit(patch) => {
                patch.apply(&mut inner.committed);
            }
        }
        inner.revision += 1;
    }
}

impl Default for SessionStore {
    fn default() -> Self {
        SessionStore::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{ChallengeSubtype, FloorLayout, MissionType};

    #[test]
    fn starts_at_defaults_with_revision_zero() {
        let store = SessionStore::new();
        assert_eq!(store.committed(), DungeonConfig::default());
        assert_eq!(store.revision(), 0);
    }

    #[test]
    fn commit_overwrites_present_fields_and_preserves_absent_ones() {
        let store = SessionStore::new();

        let mut patch = ConfigPatch::default();
        patch.floor_props.room_density = Some(-4);
        patch.floor_props.layout = Some(FloorLayout::OuterRing);
        store.dispatch(SessionAction::Commit(patch));

        let committed = store.committed();
        assert_eq!(committed.floor_props.room_density, -4);
        assert_eq!(committed.floor_props.layout, FloorLayout::OuterRing);
        // Untouched fields keep their prior values.
        assert_eq!(committed.floor_props.trap_density, 5);
        assert_eq!(committed.generation_constants.merge_rooms_chance, 5);
        assert_eq!(store.revision(), 1);
    }

    #[test]
    fn nested_sub_records_merge_one_level_down() {
        let store = SessionStore::new();

        // Flip one room flag; the sibling flag must survive.
        let mut patch = ConfigPatch::default();
        patch.floor_props.room_flags.room_imperfections = Some(true);
        store.dispatch(SessionAction::Commit(patch));

        let flags = store.committed().floor_props.room_flags;
        assert!(flags.room_imperfections);
        assert!(flags.secondary_terrain_generation);

        // Change the mission without touching the destination-floor flag.
        let mut patch = ConfigPatch::default();
        patch.dungeon_props.mission_destination.mission =
            Some(MissionType::ChallengeRequest(ChallengeSubtype::Entei));
        store.dispatch(SessionAction::Commit(patch));

        let dest = store.committed().dungeon_props.mission_destination;
        assert_eq!(
            dest.mission,
            MissionType::ChallengeRequest(ChallengeSubtype::Entei)
        );
        assert!(!dest.is_destination_floor);
    }

    #[test]
    fn reset_returns_to_defaults() {
        let store = SessionStore::new();

        let mut patch = ConfigPatch::default();
        patch.generation_constants.merge_rooms_chance = Some(99);
        store.dispatch(SessionAction::Commit(patch));
        store.dispatch(SessionAction::ResetToDefaults);

        assert_eq!(store.committed(), DungeonConfig::default());
        assert_eq!(store.revision(), 2);
    }

    #[test]
    fn draft_edits_never_leak_into_the_store() {
        let store = SessionStore::new();
        let mut draft = store.committed();

        draft.floor_props.enemy_density = 77;
        assert_eq!(store.committed().floor_props.enemy_density, 10);

        store.dispatch(SessionAction::Commit(ConfigPatch::from(&draft)));
        assert_eq!(store.committed().floor_props.enemy_density, 77);
    }

    #[test]
    fn independent_stores_do_not_share_state() {
        let a = SessionStore::new();
        let b = SessionStore::new();

        let mut patch = ConfigPatch::default();
        patch.floor_props.item_density = Some(1);
        a.dispatch(SessionAction::Commit(patch));

        assert_eq!(a.committed().floor_props.item_density, 1);
        assert_eq!(b.committed().floor_props.item_density, 5);
    }
}
