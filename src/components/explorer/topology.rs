use std::collections::BTreeMap;

use rustc_hash::{FxHashMap, FxHashSet};

use crate::utils::{Direction, ExploreError, Result, RoomId};

/// Struct that holds the part of the map discovered so far.
///
/// A room with an entry has been probed: all its exits are known. Rooms that
/// only appear as someone's neighbor are the frontier. Edges are never
/// removed or rewritten once recorded.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RoomMap {
    rooms: FxHashMap<RoomId, BTreeMap<Direction, RoomId>>,
}

impl RoomMap {
    /// Creates an empty map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Records that `room` was probed and has no exit recorded yet.
    /// Does nothing if the room was already probed.
    pub(crate) fn mark_probed(&mut self, room: RoomId) {
        self.rooms.entry(room).or_default();
    }

    /// Records `room -direction-> neighbor`.
    ///
    /// Re-recording the same edge is a no-op. Returns Err if `room` already
    /// leads somewhere else that way, or if `neighbor` was probed and does not
    /// lead back to `room`. A room that loops into itself must do so through
    /// both a direction and its inverse.
    pub(crate) fn record_edge(
        &mut self,
        room: RoomId,
        direction: Direction,
        neighbor: RoomId,
    ) -> Result<()> {
        if let Some(back) = self.rooms.get(&neighbor) {
            let expected = back.get(&direction.inverse()).copied();
            // a loop into `room` is checked once its inverse exit is recorded
            let pending_loop = neighbor == room && expected.is_none();
            if expected != Some(room) && !pending_loop {
                return Err(ExploreError::AsymmetricEdge {
                    room,
                    direction,
                    neighbor,
                    expected,
                });
            }
        }

        let exits = self.rooms.entry(room).or_default();
        if exits.get(&direction.inverse()) == Some(&room) && neighbor != room {
            return Err(ExploreError::AsymmetricEdge {
                room,
                direction,
                neighbor,
                expected: Some(room),
            });
        }
        match exits.get(&direction) {
            Some(&known) if known != neighbor => Err(ExploreError::AsymmetricEdge {
                room,
                direction,
                neighbor,
                expected: Some(known),
            }),
            Some(_) => Ok(()),
            None => {
                exits.insert(direction, neighbor);
                Ok(())
            }
        }
    }

    /// Neighbors of `room` in exit order, or None if `room` was never probed.
    /// A probed dead end gives `Some` of an empty list.
    pub fn neighbors(&self, room: RoomId) -> Option<Vec<RoomId>> {
        self.rooms
            .get(&room)
            .map(|exits| exits.values().copied().collect())
    }

    /// Direction to take from `start` to reach `neighbor`.
    ///
    /// Ok(None) if `neighbor` is not adjacent to `start`; Err if `start` was
    /// never probed.
    pub fn direction_to(&self, start: RoomId, neighbor: RoomId) -> Result<Option<Direction>> {
        let exits = self
            .rooms
            .get(&start)
            .ok_or(ExploreError::UnprobedRoom(start))?;
        Ok(exits
            .iter()
            .find(|(_, room)| **room == neighbor)
            .map(|(direction, _)| *direction))
    }

    /// Recorded exits of a probed room.
    pub fn exits(&self, room: RoomId) -> Option<&BTreeMap<Direction, RoomId>> {
        self.rooms.get(&room)
    }

    /// Checks if `room` has been probed.
    pub fn is_probed(&self, room: RoomId) -> bool {
        self.rooms.contains_key(&room)
    }

    /// Number of probed rooms.
    pub fn probed_count(&self) -> usize {
        self.rooms.len()
    }

    /// Number of recorded directed edges.
    pub fn edge_count(&self) -> usize {
        self.rooms.values().map(|exits| exits.len()).sum()
    }

    /// Every room known to exist: probed rooms and their recorded neighbors.
    pub fn known_rooms(&self) -> Vec<RoomId> {
        let mut known: FxHashSet<RoomId> = self.rooms.keys().copied().collect();
        known.extend(self.rooms.values().flat_map(|exits| exits.values().copied()));
        let mut known: Vec<RoomId> = known.into_iter().collect();
        known.sort();
        known
    }

    /// Rooms known to exist that have not been probed yet, sorted.
    pub fn frontier(&self) -> Vec<RoomId> {
        let mut frontier: Vec<RoomId> = self
            .rooms
            .values()
            .flat_map(|exits| exits.values().copied())
            .filter(|room| !self.rooms.contains_key(room))
            .collect::<FxHashSet<_>>()
            .into_iter()
            .collect();
        frontier.sort();
        frontier
    }

    /// True when every known room has been probed.
    pub fn is_fully_discovered(&self) -> bool {
        self.rooms
            .values()
            .flat_map(|exits| exits.values())
            .all(|room| self.rooms.contains_key(room))
    }
}
