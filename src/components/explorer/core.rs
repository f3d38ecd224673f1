use rustc_hash::FxHashSet;

use logging_utils::{
    ActorType, LOG_ACTORS_ACTIVITY, LogEvent, LoggableActor, Participant, debug_println,
    log_fn_call, log_internal_op, log_warning, payload,
};

use super::mover::move_along;
use super::prober::probe_current_room;
use super::topology::RoomMap;
use crate::components::world::World;
use crate::settings::ProbeMode;
use crate::utils::{Direction, ExploreError, Result, RoomId};

/// Result of a full exploration run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Traversal {
    /// Room the run started from.
    pub start: RoomId,
    /// Every move made outside of probing, in order.
    pub path: Vec<Direction>,
    /// Rooms in the order they were first visited.
    pub visit_order: Vec<RoomId>,
    /// The map discovered along the way.
    pub map: RoomMap,
}

/// struct of the explorer
///
/// Owns the world it walks in and all the traversal state: the discovered
/// map, the visited set, the emitted path. Nothing is shared.
pub struct Explorer<W: World> {
    explorer_id: u32,
    world: W,
    origin: Option<RoomId>,
    topology: RoomMap,
    visited: FxHashSet<RoomId>,
    traversal_path: Vec<Direction>,
    visit_order: Vec<RoomId>,
    probe_mode: ProbeMode,
}

impl<W: World> Explorer<W> {
    /// Creates an explorer standing wherever the world's agent currently is.
    pub fn new(explorer_id: u32, world: W) -> Self {
        Self {
            explorer_id,
            world,
            origin: None,
            topology: RoomMap::new(),
            visited: FxHashSet::default(),
            traversal_path: Vec::new(),
            visit_order: Vec::new(),
            probe_mode: ProbeMode::default(),
        }
    }

    /// Sets how rooms get probed.
    pub fn with_probe_mode(mut self, probe_mode: ProbeMode) -> Self {
        self.probe_mode = probe_mode;
        self
    }

    // ==================== Getter Methods ====================

    pub fn id(&self) -> u32 {
        self.explorer_id
    }

    pub fn current_room(&self) -> RoomId {
        self.world.current_room()
    }

    pub fn topology(&self) -> &RoomMap {
        &self.topology
    }

    pub fn traversal_path(&self) -> &[Direction] {
        &self.traversal_path
    }

    pub fn visit_order(&self) -> &[RoomId] {
        &self.visit_order
    }

    pub fn has_visited(&self, room: RoomId) -> bool {
        self.visited.contains(&room)
    }

    pub fn world(&self) -> &W {
        &self.world
    }

    pub fn world_mut(&mut self) -> &mut W {
        &mut self.world
    }

    pub fn into_world(self) -> W {
        self.world
    }

    // ==================== Main Loop ====================

    /// Visits every room reachable from the current one and returns the moves
    /// that did it. Calling it again returns the same traversal.
    ///
    /// Depth-first over an explicit stack of rooms to visit. A popped room that
    /// was already visited is dropped. Otherwise the agent is routed to it
    /// through the known map if it is not already there, it is marked visited,
    /// then probed, and all its neighbors are pushed, visited or not. A room
    /// the agent failed to reach is left unvisited.
    pub fn explore(&mut self) -> Result<Traversal> {
        let start = *self.origin.get_or_insert(self.world.current_room());
        log_fn_call!(self, "explore()", start; "probe_mode" => self.probe_mode);
        self.log_activity("exploration started", start);

        let mut to_visit = vec![start];
        while let Some(room) = to_visit.pop() {
            if self.visited.contains(&room) {
                continue;
            }

            let here = self.world.current_room();
            if here != room {
                self.relocate(here, room)?;
            }
            self.visited.insert(room);
            self.visit_order.push(room);

            probe_current_room(&mut self.world, &mut self.topology, self.probe_mode)?;

            // duplicates are expected, the visited check on pop filters them
            if let Some(neighbors) = self.topology.neighbors(room) {
                to_visit.extend(neighbors);
            }
            let pending = to_visit.len();
            log_internal_op!(self, "action" => "room visited", "room" => room, "stack" => pending);
            debug_println!("explorer {} visited {}, {} rooms on the stack", self.explorer_id, room, pending);
        }

        let moves = self.traversal_path.len();
        let rooms = self.visit_order.len();
        log_fn_call!(self, "explore()", start; result = "completed", "moves" => moves, "rooms" => rooms);
        self.log_activity("exploration completed", start);

        Ok(Traversal {
            start,
            path: self.traversal_path.clone(),
            visit_order: self.visit_order.clone(),
            map: self.topology.clone(),
        })
    }

    /// Walks from `from` to `to` over known edges and appends the moves to the
    /// traversal path.
    fn relocate(&mut self, from: RoomId, to: RoomId) -> Result<()> {
        let route = self.topology.shortest_path(from, to)?;
        if route.is_empty() {
            let err = ExploreError::Unreachable { from, to };
            log_warning!(self, "no known route", err, "relocate()", from, to);
            return Err(err);
        }

        let hops = route.len();
        log_internal_op!(self, "action" => "relocating", "from" => from, "to" => to, "hops" => hops);
        self.traversal_path.extend_from_slice(&route);
        move_along(&mut self.world, &route)?;

        let landed = self.world.current_room();
        if landed != to {
            let err = ExploreError::Unreachable { from, to };
            log_warning!(self, "route ended elsewhere", err, "relocate()", landed);
            return Err(err);
        }
        Ok(())
    }

    fn log_activity(&self, action: &str, start: RoomId) {
        LogEvent::self_directed(
            Participant::new(self.actor_type(), self.actor_id()),
            LOG_ACTORS_ACTIVITY,
            payload!(
                "action" => action,
                "start" => start,
                "moves" => self.traversal_path.len(),
                "rooms_visited" => self.visit_order.len(),
            ),
        )
        .emit();
    }
}

impl<W: World> LoggableActor for Explorer<W> {
    fn actor_type(&self) -> ActorType {
        ActorType::Explorer
    }

    fn actor_id(&self) -> u32 {
        self.explorer_id
    }
}
