mod common;

pub use common::{ProbeMode, Settings, get_settings, set_settings};
