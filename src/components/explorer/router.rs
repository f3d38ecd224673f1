use std::collections::VecDeque;

use logging_utils::{ActorType, log_fn_call};
use rustc_hash::FxHashSet;

use super::topology::RoomMap;
use crate::utils::{Direction, ExploreError, Result, RoomId};

impl RoomMap {
    /// Returns the shortest list of moves from `start` to `end` that only
    /// uses recorded edges.
    ///
    /// BFS over whole paths. A path is only extended from a probed room:
    /// unprobed rooms can end a path but never continue one, so a route is
    /// found as soon as the known part of the map connects the two rooms.
    /// Returns an empty list when `start == end` and when no known route
    /// exists; callers tell the two apart by comparing the rooms.
    pub fn shortest_path(&self, start: RoomId, end: RoomId) -> Result<Vec<Direction>> {
        if start == end {
            return Ok(Vec::new());
        }

        let rooms = self.shortest_room_path(start, end);
        let mut directions = Vec::with_capacity(rooms.len().saturating_sub(1));
        for pair in rooms.windows(2) {
            let (from, to) = (pair[0], pair[1]);
            let direction = self
                .direction_to(from, to)?
                .ok_or(ExploreError::MissingEdge { from, to })?;
            directions.push(direction);
        }

        let route_len = directions.len();
        log_fn_call!(dir ActorType::Explorer, 0u32, "shortest_path()", start, end; result = route_len);
        Ok(directions)
    }

    /// Room-level BFS behind [`shortest_path`](Self::shortest_path). Empty if
    /// `end` cannot be reached through probed rooms.
    fn shortest_room_path(&self, start: RoomId, end: RoomId) -> Vec<RoomId> {
        let mut queue = VecDeque::new();
        let mut expanded = FxHashSet::default();
        queue.push_back(vec![start]);

        while let Some(path) = queue.pop_front() {
            let Some(&last) = path.last() else {
                continue;
            };
            if !expanded.insert(last) {
                continue;
            }
            // unprobed rooms are dead ends, not errors
            let Some(neighbors) = self.neighbors(last) else {
                continue;
            };

            for next in neighbors {
                let mut extended = path.clone();
                extended.push(next);
                if next == end {
                    return extended;
                }
                if self.is_probed(next) && !expanded.contains(&next) {
                    queue.push_back(extended);
                }
            }
        }

        Vec::new()
    }
}
