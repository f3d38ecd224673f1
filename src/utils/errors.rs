use thiserror::Error;

use super::types::{Direction, RoomId};

/// Unified result type for the explorer core.
pub type Result<T> = std::result::Result<T, ExploreError>;

/// Failures of the world's single-step move primitive.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MoveError {
    #[error("room {room} has no exit to the {direction}")]
    NoExit { room: RoomId, direction: Direction },
    #[error("room {0} does not exist in this world")]
    UnknownRoom(RoomId),
}

/// Fatal inconsistencies found while exploring. None of them is retried.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ExploreError {
    #[error("move {step} of the sequence failed: {source}")]
    InvalidMove {
        step: usize,
        #[source]
        source: MoveError,
    },
    #[error("moving {direction} from {room} and back landed in {landed}")]
    BrokenReturn {
        room: RoomId,
        direction: Direction,
        landed: RoomId,
    },
    #[error("edge {room} -{direction}-> {neighbor} contradicts the recorded map (expected {expected:?})")]
    AsymmetricEdge {
        room: RoomId,
        direction: Direction,
        neighbor: RoomId,
        expected: Option<RoomId>,
    },
    #[error("room {0} has not been probed yet")]
    UnprobedRoom(RoomId),
    #[error("no recorded edge leads from {from} to {to}")]
    MissingEdge { from: RoomId, to: RoomId },
    #[error("room {to} cannot be reached from {from} through known rooms")]
    Unreachable { from: RoomId, to: RoomId },
}

/// Errors raised while loading a map file.
#[derive(Debug, Error)]
pub enum MapError {
    #[error("unable to read map file {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("line {line}: {reason}")]
    Parse { line: usize, reason: String },
    #[error("room {0} is declared twice")]
    DuplicateRoom(RoomId),
    #[error("room {room} has an exit {direction} to undeclared room {target}")]
    DanglingExit {
        room: RoomId,
        direction: Direction,
        target: RoomId,
    },
    #[error("room {room} exits {direction} to {target}, but {target} does not lead back")]
    AsymmetricExit {
        room: RoomId,
        direction: Direction,
        target: RoomId,
    },
    #[error("start room {0} is not declared")]
    MissingStartRoom(RoomId),
    #[error("the map declares no rooms")]
    Empty,
    #[error("a {width}x{height} grid has more rooms than room ids")]
    TooLarge { width: u32, height: u32 },
}

/// Invalid configuration value.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("environment variable {key}: cannot parse '{value}': {reason}")]
pub struct SettingsError {
    pub key: String,
    pub value: String,
    pub reason: String,
}
