//! Stable error codes embedded in error messages and exposed via `code()`.

pub const SYNTH_UNREACHABLE: &str = "TAILSCRIPT_SYNTH_001";
pub const SYNTH_SINK_ERROR: &str = "TAILSCRIPT_SYNTH_002";

pub const COMPILE_LIMITS_EXCEEDED: &str = "TAILSCRIPT_COMPILE_001";
pub const COMPILE_SYNTHESIS: &str = "TAILSCRIPT_COMPILE_002";
pub const COMPILE_CONFIG: &str = "TAILSCRIPT_COMPILE_003";

pub const TRAIN_ATTEMPTS_EXHAUSTED: &str = "TAILSCRIPT_TRAIN_001";
