use std::collections::BTreeMap;
use std::fmt;

pub use log::Level;

///The events this level should be used for are:
/// function call (and finish if it is relevant) and parameters.
pub const LOG_FN_CALL_CHNL: Channel = Channel::Debug;
/// every operation that it useful to log inside a function
/// such as to log changes made to variables
pub const LOG_FN_INT_OPERATIONS: Channel = Channel::Trace;
///The events this level should be used for are:
///run start and completion, room visits, relocations
pub const LOG_ACTORS_ACTIVITY: Channel = Channel::Info;

/// The components that emit log events.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ActorType {
    Explorer,
    World,
    Driver,
}

impl fmt::Display for ActorType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ActorType::Explorer => write!(f, "explorer"),
            ActorType::World => write!(f, "world"),
            ActorType::Driver => write!(f, "driver"),
        }
    }
}

/// Log channel, mapped one to one on a `log` level.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Channel {
    Trace,
    Debug,
    Info,
    Warning,
    Error,
}

impl Channel {
    pub fn level(self) -> Level {
        match self {
            Channel::Trace => Level::Trace,
            Channel::Debug => Level::Debug,
            Channel::Info => Level::Info,
            Channel::Warning => Level::Warn,
            Channel::Error => Level::Error,
        }
    }
}

/// Who emitted an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Participant {
    pub actor_type: ActorType,
    pub id: u32,
}

impl Participant {
    pub fn new(actor_type: ActorType, id: u32) -> Self {
        Self { actor_type, id }
    }
}

impl fmt::Display for Participant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}#{}", self.actor_type, self.id)
    }
}

/// A structured log record: an emitter, a channel and a key-value payload.
#[derive(Debug, Clone)]
pub struct LogEvent {
    pub sender: Participant,
    pub channel: Channel,
    pub payload: BTreeMap<String, String>,
}

impl LogEvent {
    pub fn self_directed(
        sender: Participant,
        channel: Channel,
        payload: BTreeMap<String, String>,
    ) -> Self {
        Self {
            sender,
            channel,
            payload,
        }
    }

    /// Sends the event to the `log` facade. Nothing is formatted when the
    /// level is filtered out.
    pub fn emit(&self) {
        let level = self.channel.level();
        if !log::log_enabled!(target: "room_explorer", level) {
            return;
        }
        log::log!(target: "room_explorer", level, "[{}] {}", self.sender, self.render_payload());
    }

    fn render_payload(&self) -> String {
        self.payload
            .iter()
            .map(|(k, v)| format!("{k}={v}"))
            .collect::<Vec<_>>()
            .join(" ")
    }
}

// ---------------------------------------------------------------------------------------
// LOG Macros
// ---------------------------------------------------------------------------------------

/// Creates a BTreeMap payload from key-value pairs for use in log events.
///
/// # Example usage
/// ```
/// use logging_utils::payload;
/// let current_idx = 3;
/// let data = payload!(
///     "room" => 12,
///     "exits" => 2,
///     "stack_len" => current_idx,
/// );
/// assert_eq!(data.len(), 3);
/// ```
///
/// # Arguments
/// * `$key => $val` - Any number of key-value pairs where both key and val will be converted to String
#[macro_export]
macro_rules! payload {
    ($($key:expr => $val:expr),* $(,)?) => {{
        let mut p = std::collections::BTreeMap::new();
        $(
            p.insert($key.to_string(), $val.to_string());
        )*
        p
    }};
}

/// Generates a standardized payload for warnings and errors.
///
/// Captures the warning category, the error value, the function name, any
/// local variables (Debug-formatted) and optional custom metadata.
///
/// # Usage
/// ```
/// use logging_utils::warning_payload;
/// let room = 4;
/// let direction = 'n';
/// let p = warning_payload!("probe failed", "no exit", "probe()", room, direction; "step" => 1);
/// assert_eq!(p["room"], "4");
/// ```
#[macro_export]
macro_rules! warning_payload {
    ($warn:expr, $err:expr, $func:expr $(,$param:ident )*$(; $($key:expr => $val:expr),*)?) => {{
        let mut p = std::collections::BTreeMap::new();

        p.insert("Warning".to_string(), $warn.to_string());
        p.insert("returned error".to_string(), $err.to_string());
        p.insert("fn".to_string(), $func.to_string());

        // adds every argument
        $(
            p.insert(
                stringify!($param).to_string(),
                format!("{:?}", $param)
            );
        )*
        // generic key-value
        $($(
            p.insert($key.to_string(), $val.to_string());
        )*)?

        p
    }};
}

/// Logs internal actor operations and state changes (Trace level).
///
/// Two modes: `self` mode extracts actor info through [`LoggableActor`],
/// direct mode takes the actor type and id explicitly.
///
/// # Usage
/// ```ignore
/// log_internal_op!(self, "action" => "room probed", "room" => room);
/// log_internal_op!(self, "stack drained");
/// log_internal_op!(dir ActorType::World, 0u32, "action" => "map loaded");
/// ```
#[macro_export]
macro_rules! log_internal_op {
    // requires self
    ($self:ident,  $($key:expr => $val:expr),* $(,)? ) => {{
        $crate::log_internal_op!(dir $self.actor_type(), $self.actor_id(), $($key => $val),* )
    }};

    // direct. requires ActorType and ID
    (dir $actor:expr, $id:expr, $($key:expr => $val:expr),* $(,)? ) => {{
        $crate::LogEvent::self_directed(
            $crate::Participant::new($actor, $id),
            $crate::LOG_FN_INT_OPERATIONS,
            $crate::payload!( $($key => $val),* )
        ).emit();
    }};

    // single message (require self)
    ($self:ident, $msg:expr) => {
        $crate::log_internal_op!($self, "action" => $msg );
    };
}

/// Records function execution, input arguments and, optionally, the result
/// (Debug level).
///
/// # Usage Patterns
/// ```ignore
/// // Simple: just function name and parameters
/// log_fn_call!(self, "probe()", room);
///
/// // With pre-execution metadata
/// log_fn_call!(self, "route()", from, to; "known_rooms" => n);
///
/// // With result and post-execution metadata
/// log_fn_call!(self, "route()", from, to; result = route.len(), "frontier" => f);
///
/// // Direct mode (without self)
/// log_fn_call!(dir ActorType::World, 0u32, "load_map()", path);
/// ```
#[macro_export]
macro_rules! log_fn_call {
    // ----- self: pre-kvs ; result = ... ; post-kvs -----
    ($self:ident, $fn_name:expr $(, $param:ident)* ;
        $($pre_k:expr => $pre_v:expr),+ ;
        result = $result:expr $(, $($post_k:expr => $post_v:expr),* )? $(,)?
    ) => {{
        $crate::log_fn_call!(
            dir $self.actor_type(),
            $self.actor_id(),
            $fn_name $(, $param)* ;
            $($pre_k => $pre_v),+ ;
            result = $result $(, $($post_k => $post_v),* )?
        )
    }};

    // ----- self: result = ... , post-kvs (no pre) -----
    ($self:ident, $fn_name:expr $(, $param:ident)* ;
        result = $result:expr $(, $($post_k:expr => $post_v:expr),* )? $(,)?
    ) => {{
        $crate::log_fn_call!(
            dir $self.actor_type(),
            $self.actor_id(),
            $fn_name $(, $param)* ;
            result = $result $(, $($post_k => $post_v),* )?
        )
    }};

    // ----- self: only pre-kvs (no result) -----
    ($self:ident, $fn_name:expr $(, $param:ident)* ;
        $($pre_k:expr => $pre_v:expr),+ $(,)?
    ) => {{
        $crate::log_fn_call!(
            dir $self.actor_type(),
            $self.actor_id(),
            $fn_name $(, $param)* ;
            $($pre_k => $pre_v),+
        )
    }};

    // ----- self: no kvs/result -----
    ($self:ident, $fn_name:expr $(, $param:ident)* $(,)?) => {{
        $crate::log_fn_call!(
            dir $self.actor_type(),
            $self.actor_id(),
            $fn_name $(, $param)*
        )
    }};

    // ----------------- DIR FORMS -----------------

    // dir: pre-kvs ; result = ... ; post-kvs
    (dir $actor:expr, $id:expr, $fn_name:expr $(, $param:ident)* ;
        $($pre_k:expr => $pre_v:expr),+ ;
        result = $result:expr $(, $($post_k:expr => $post_v:expr),* )? $(,)?
    ) => {{
        let mut p = std::collections::BTreeMap::new();
        p.insert("fn".to_string(), $fn_name.to_string());
        $(
            p.insert(stringify!($param).to_string(), format!("{:?}", $param));
        )*
        $(
            p.insert($pre_k.to_string(), $pre_v.to_string());
        )+
        p.insert("Result".to_string(), $result.to_string());
        $(
            $(
                p.insert($post_k.to_string(), $post_v.to_string());
            )*
        )?
        $crate::LogEvent::self_directed(
            $crate::Participant::new($actor, $id),
            $crate::LOG_FN_CALL_CHNL,
            p
        ).emit();
    }};

    // dir: result = ... , post-kvs (no pre)
    (dir $actor:expr, $id:expr, $fn_name:expr $(, $param:ident)* ;
        result = $result:expr $(, $($post_k:expr => $post_v:expr),* )? $(,)?
    ) => {{
        let mut p = std::collections::BTreeMap::new();
        p.insert("fn".to_string(), $fn_name.to_string());
        $(
            p.insert(stringify!($param).to_string(), format!("{:?}", $param));
        )*
        p.insert("Result".to_string(), $result.to_string());
        $(
            $(
                p.insert($post_k.to_string(), $post_v.to_string());
            )*
        )?
        $crate::LogEvent::self_directed(
            $crate::Participant::new($actor, $id),
            $crate::LOG_FN_CALL_CHNL,
            p
        ).emit();
    }};

    // dir: only pre-kvs (no result)
    (dir $actor:expr, $id:expr, $fn_name:expr $(, $param:ident)* ;
        $($pre_k:expr => $pre_v:expr),+ $(,)?
    ) => {{
        let mut p = std::collections::BTreeMap::new();
        p.insert("fn".to_string(), $fn_name.to_string());
        $(
            p.insert(stringify!($param).to_string(), format!("{:?}", $param));
        )*
        $(
            p.insert($pre_k.to_string(), $pre_v.to_string());
        )+
        $crate::LogEvent::self_directed(
            $crate::Participant::new($actor, $id),
            $crate::LOG_FN_CALL_CHNL,
            p
        ).emit();
    }};

    // dir: no kvs/result
    (dir $actor:expr, $id:expr, $fn_name:expr $(, $param:ident)* $(,)?) => {{
        let mut p = std::collections::BTreeMap::new();
        p.insert("fn".to_string(), $fn_name.to_string());
        $(
            p.insert(stringify!($param).to_string(), format!("{:?}", $param));
        )*
        $crate::LogEvent::self_directed(
            $crate::Participant::new($actor, $id),
            $crate::LOG_FN_CALL_CHNL,
            p
        ).emit();
    }};
}

/// Emits a warning event built with [`warning_payload!`].
///
/// ```ignore
/// log_warning!(self, "route not found", "empty route", "explore()", from, to);
/// log_warning!(dir ActorType::World, 0u32, "bad line", err, "load_map()", line_num);
/// ```
#[macro_export]
macro_rules! log_warning {
    ($self:ident, $warn:expr, $err:expr, $func:expr $(,$param:ident )*$(; $($key:expr => $val:expr),*)?) => {{
        $crate::log_warning!(dir $self.actor_type(), $self.actor_id(), $warn, $err, $func $(, $param)* $(; $($key => $val),*)?)
    }};
    (dir $actor:expr, $id:expr, $warn:expr, $err:expr, $func:expr $(,$param:ident )*$(; $($key:expr => $val:expr),*)?) => {{
        $crate::LogEvent::self_directed(
            $crate::Participant::new($actor, $id),
            $crate::Channel::Warning,
            $crate::warning_payload!($warn, $err, $func $(, $param)* $(; $($key => $val),*)?)
        ).emit();
    }};
}

#[cfg(feature = "debug-prints")]
#[macro_export]
macro_rules! debug_println {
    ($($arg:tt)*) => { println!($($arg)*) };
}

#[cfg(not(feature = "debug-prints"))]
#[macro_export]
macro_rules! debug_println {
    ($($arg:tt)*) => {
        ()
    };
}

pub trait LoggableActor {
    fn actor_type(&self) -> ActorType;
    fn actor_id(&self) -> u32;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn channels_map_to_log_levels() {
        assert_eq!(LOG_FN_CALL_CHNL.level(), Level::Debug);
        assert_eq!(LOG_FN_INT_OPERATIONS.level(), Level::Trace);
        assert_eq!(LOG_ACTORS_ACTIVITY.level(), Level::Info);
        assert_eq!(Channel::Warning.level(), Level::Warn);
    }

    #[test]
    fn warning_payload_captures_params_and_extra_keys() {
        let room = 7u32;
        let p = warning_payload!("probe failed", "no exit", "probe()", room; "step" => 2);
        assert_eq!(p["Warning"], "probe failed");
        assert_eq!(p["returned error"], "no exit");
        assert_eq!(p["fn"], "probe()");
        assert_eq!(p["room"], "7");
        assert_eq!(p["step"], "2");
    }

    #[test]
    fn event_renders_sorted_payload() {
        let event = LogEvent::self_directed(
            Participant::new(ActorType::Explorer, 1),
            Channel::Info,
            payload!("b" => 2, "a" => 1),
        );
        assert_eq!(event.render_payload(), "a=1 b=2");
        assert_eq!(event.sender.to_string(), "explorer#1");
    }
}
