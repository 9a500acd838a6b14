//! CLI errors and their exit codes.
//!
//! | code | meaning |
//! |------|---------|
//! | 0    | success |
//! | 2    | argument parse error (raised by clap) |
//! | 10   | render error: no context, bad geometry, unusable surface size |
//! | 11   | I/O error: config read or PNG write |
//! | 12   | input error: config contents |
//! | 13   | serialization error |

use glyph_render_core::RenderError;
use std::fmt;

#[derive(Debug)]
pub enum CliError {
    Render(RenderError),
    Io(String),
    Input(String),
    Serialization(String),
}

impl CliError {
    pub fn exit_code(&self) -> i32 {
        match self {
            CliError::Render(_) => 10,
            CliError::Io(_) => 11,
            CliError::Input(_) => 12,
            CliError::Serialization(_) => 13,
        }
    }

    /// Short machine-readable category, reported under `"kind"` in JSON mode.
    pub fn kind(&self) -> &'static str {
        match self {
            CliError::Render(_) => "render",
            CliError::Io(_) => "io",
            CliError::Input(_) => "input",
            CliError::Serialization(_) => "serialization",
        }
    }

    /// The `--json` error report.
    pub fn to_json(&self) -> serde_json::Value {
        serde_json::json!({
            "error": self.to_string(),
            "kind": self.kind(),
            "exit_code": self.exit_code(),
        })
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::Render(e) => write!(f, "{e}"),
            CliError::Io(msg) | CliError::Input(msg) | CliError::Serialization(msg) => {
                f.write_str(msg)
            }
        }
    }
}

impl std::error::Error for CliError {}

/// Output and config failures surfaced by the core keep their own codes;
/// everything else is a render failure.
impl From<RenderError> for CliError {
    fn from(e: RenderError) -> Self {
        match e {
            RenderError::Io(msg) => CliError::Io(msg),
            RenderError::InvalidConfig(msg) => CliError::Input(msg),
            other => CliError::Render(other),
        }
    }
}

impl From<serde_json::Error> for CliError {
    fn from(e: serde_json::Error) -> Self {
        CliError::Serialization(e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn render_failures_route_by_cause() {
        let cases = [
            (
                RenderError::ContextUnavailable {
                    tried: vec!["webgl".into(), "experimental-webgl".into()],
                },
                10,
                "render",
            ),
            (RenderError::Validation("30 positions vs 29 colors".into()), 10, "render"),
            (RenderError::BufferAllocation("out of memory".into()), 10, "render"),
            (RenderError::InvalidDimensions, 10, "render"),
            (RenderError::Io("disk full".into()), 11, "io"),
            (RenderError::InvalidConfig("'width' must be a number".into()), 12, "input"),
        ];
        for (render_err, code, kind) in cases {
            let label = format!("{render_err:?}");
            let cli_err = CliError::from(render_err);
            assert_eq!(cli_err.exit_code(), code, "{label}");
            assert_eq!(cli_err.kind(), kind, "{label}");
        }
    }

    #[test]
    fn context_failure_message_names_tried_kinds() {
        let cli_err = CliError::from(RenderError::ContextUnavailable {
            tried: vec!["webgl".into(), "experimental-webgl".into()],
        });
        let msg = cli_err.to_string();
        assert!(msg.contains("webgl, experimental-webgl"), "got: {msg}");
    }

    #[test]
    fn routed_messages_drop_the_core_prefix() {
        // Io and InvalidConfig carry only their detail once rerouted.
        assert_eq!(CliError::from(RenderError::Io("disk full".into())).to_string(), "disk full");
        let validation = CliError::from(RenderError::Validation("29 colors".into()));
        assert_eq!(validation.to_string(), "invalid vertex data: 29 colors");
    }

    #[test]
    fn json_report_carries_kind_and_code() {
        let report = CliError::from(RenderError::InvalidDimensions).to_json();
        assert_eq!(report["kind"], "render");
        assert_eq!(report["exit_code"], 10);
        assert!(report["error"].as_str().unwrap().contains("dimensions"));
    }

    #[test]
    fn malformed_json_is_serialization_error() {
        let bad_json = serde_json::from_str::<serde_json::Value>("{invalid");
        let cli_err = CliError::from(bad_json.unwrap_err());
        assert_eq!((cli_err.exit_code(), cli_err.kind()), (13, "serialization"));
    }
}
