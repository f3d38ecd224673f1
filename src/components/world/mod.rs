pub mod generate;
pub mod init;
#[cfg(test)]
mod tests;

use std::collections::BTreeMap;

use logging_utils::{ActorType, LoggableActor, log_internal_op};
use rustc_hash::FxHashMap;

use crate::utils::{Direction, MoveError, RoomId};

/// What the explorer is allowed to know about the world it walks in.
pub trait World {
    /// The room the agent currently occupies.
    fn current_room(&self) -> RoomId;

    /// Valid exits of `room`, in the room's own order. Empty for unknown rooms.
    fn exits_of(&self, room: RoomId) -> Vec<Direction>;

    /// Moves the agent one step. Fails, leaving the agent in place, if the
    /// current room has no exit that way.
    fn travel(&mut self, direction: Direction) -> Result<(), MoveError>;

    /// Room behind an exit of the current room, without moving.
    /// Worlds that cannot answer this return `None`.
    fn peek(&self, _direction: Direction) -> Option<RoomId> {
        None
    }
}

/// A room of the true map.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Room {
    pub id: RoomId,
    pub position: Option<(i64, i64)>,
    pub exits: BTreeMap<Direction, RoomId>,
}

impl Room {
    pub fn new(id: RoomId) -> Self {
        Self {
            id,
            position: None,
            exits: BTreeMap::new(),
        }
    }

    pub fn with_position(id: RoomId, x: i64, y: i64) -> Self {
        Self {
            id,
            position: Some((x, y)),
            exits: BTreeMap::new(),
        }
    }

    pub fn exit(&self, direction: Direction) -> Option<RoomId> {
        self.exits.get(&direction).copied()
    }
}

/// In-memory world: the complete room graph plus the agent position.
#[derive(Debug, Clone)]
pub struct RoomGraphWorld {
    rooms: FxHashMap<RoomId, Room>,
    start: RoomId,
    position: RoomId,
    moves_made: usize,
}

impl RoomGraphWorld {
    /// Builds a world from already validated rooms. Use [`init::load_map`] or
    /// [`init::parse_map`] to get the symmetry checks.
    pub(crate) fn from_rooms(rooms: FxHashMap<RoomId, Room>, start: RoomId) -> Self {
        Self {
            rooms,
            start,
            position: start,
            moves_made: 0,
        }
    }

    pub fn starting_room(&self) -> RoomId {
        self.start
    }

    pub fn room(&self, id: RoomId) -> Option<&Room> {
        self.rooms.get(&id)
    }

    /// Room ids in ascending order.
    pub fn room_ids(&self) -> Vec<RoomId> {
        let mut ids: Vec<RoomId> = self.rooms.keys().copied().collect();
        ids.sort();
        ids
    }

    pub fn room_count(&self) -> usize {
        self.rooms.len()
    }

    /// Number of undirected edges.
    pub fn edge_count(&self) -> usize {
        self.rooms.values().map(|r| r.exits.len()).sum::<usize>() / 2
    }

    /// Successful moves since creation or the last [`reset`](Self::reset).
    pub fn moves_made(&self) -> usize {
        self.moves_made
    }

    /// Puts the agent back in the starting room and clears the move counter.
    pub fn reset(&mut self) {
        log_internal_op!(self, "action" => "reset", "start" => self.start);
        self.position = self.start;
        self.moves_made = 0;
    }

    /// Places the agent in `room` without walking.
    pub fn teleport(&mut self, room: RoomId) -> Result<(), MoveError> {
        if !self.rooms.contains_key(&room) {
            return Err(MoveError::UnknownRoom(room));
        }
        self.position = room;
        Ok(())
    }
}

impl World for RoomGraphWorld {
    fn current_room(&self) -> RoomId {
        self.position
    }

    fn exits_of(&self, room: RoomId) -> Vec<Direction> {
        self.rooms
            .get(&room)
            .map(|r| r.exits.keys().copied().collect())
            .unwrap_or_default()
    }

    fn travel(&mut self, direction: Direction) -> Result<(), MoveError> {
        let room = self
            .rooms
            .get(&self.position)
            .ok_or(MoveError::UnknownRoom(self.position))?;
        let next = room.exit(direction).ok_or(MoveError::NoExit {
            room: self.position,
            direction,
        })?;
        self.position = next;
        self.moves_made += 1;
        Ok(())
    }

    fn peek(&self, direction: Direction) -> Option<RoomId> {
        self.rooms.get(&self.position)?.exit(direction)
    }
}

impl LoggableActor for RoomGraphWorld {
    fn actor_type(&self) -> ActorType {
        ActorType::World
    }

    fn actor_id(&self) -> u32 {
        0
    }
}
