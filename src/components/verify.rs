use logging_utils::{ActorType, log_fn_call};
use rustc_hash::FxHashSet;

use crate::components::world::World;
use crate::utils::{Direction, ExploreError, RoomId};

/// What a replayed path went through.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReplayReport {
    /// The starting room followed by the room entered after each move.
    pub rooms: Vec<RoomId>,
    /// Distinct rooms among `rooms`.
    pub distinct: usize,
}

impl ReplayReport {
    pub fn moves(&self) -> usize {
        self.rooms.len().saturating_sub(1)
    }

    /// True when the replay entered `total_rooms` different rooms.
    pub fn covers(&self, total_rooms: usize) -> bool {
        self.distinct == total_rooms
    }

    /// Rooms in the order they were first entered.
    pub fn first_visits(&self) -> Vec<RoomId> {
        let mut seen = FxHashSet::default();
        self.rooms
            .iter()
            .copied()
            .filter(|room| seen.insert(*room))
            .collect()
    }
}

/// Replays `path` from the agent's current room, one move per direction.
///
/// Stops at the first rejected move and returns it with its index.
pub fn replay<W: World>(world: &mut W, path: &[Direction]) -> Result<ReplayReport, ExploreError> {
    let start = world.current_room();
    let moves = path.len();
    log_fn_call!(dir ActorType::Driver, 0u32, "replay()", start, moves);

    let mut rooms = Vec::with_capacity(path.len() + 1);
    rooms.push(start);
    for (step, &direction) in path.iter().enumerate() {
        world
            .travel(direction)
            .map_err(|source| ExploreError::InvalidMove { step, source })?;
        rooms.push(world.current_room());
    }

    let distinct = rooms.iter().collect::<FxHashSet<_>>().len();
    Ok(ReplayReport { rooms, distinct })
}
