//! Telemetry configuration from environment variables.

use std::env;

/// How log lines are rendered on stdout.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    /// Human-readable, ANSI-coloured lines.
    Pretty,
    /// One JSON object per line.
    Json,
    /// No console output.
    Off,
}

/// Logging configuration shared by every subsystem.
#[derive(Debug, Clone)]
pub struct TelemetryConfig {
    /// Node-level service name
    pub service_name: String,

    /// Subsystem tag such as `qc-18`, if logging for a single subsystem
    pub subsystem: Option<String>,

    /// `EnvFilter` directive used when `RUST_LOG` is unset
    pub log_level: String,

    /// Console rendering
    pub format: LogFormat,
}

impl Default for TelemetryConfig {
    fn default() -> Self {
        Self {
            service_name: "quantum-chain".to_string(),
            subsystem: None,
            log_level: "info".to_string(),
            format: LogFormat::Pretty,
        }
    }
}

impl TelemetryConfig {
    /// Create configuration from environment variables.
    ///
    /// # Environment Variables
    ///
    /// - `OTEL_SERVICE_NAME`: Service name (default: quantum-chain)
    /// - `QC_SUBSYSTEM_ID`: Subsystem number, e.g. `18` (default: none)
    /// - `QC_LOG_LEVEL` or `RUST_LOG`: Log level (default: info)
    /// - `QC_CONSOLE_OUTPUT`: `false`/`0` silences the console
    /// - `QC_JSON_LOGS`: JSON output (default: on inside containers)
    pub fn from_env() -> Self {
        let defaults = Self::default();
        let in_container =
            env::var("KUBERNETES_SERVICE_HOST").is_ok() || env::var("DOCKER_CONTAINER").is_ok();

        let console = env_flag("QC_CONSOLE_OUTPUT").unwrap_or(true);
        let json = env_flag("QC_JSON_LOGS").unwrap_or(in_container);
        let format = match (console, json) {
            (false, _) => LogFormat::Off,
            (true, true) => LogFormat::Json,
            (true, false) => LogFormat::Pretty,
        };

        Self {
            service_name: env::var("OTEL_SERVICE_NAME").unwrap_or(defaults.service_name),
            subsystem: env::var("QC_SUBSYSTEM_ID")
                .ok()
                .map(|id| format!("qc-{id}")),
            log_level: env::var("QC_LOG_LEVEL")
                .or_else(|_| env::var("RUST_LOG"))
                .unwrap_or(defaults.log_level),
            format,
        }
    }

    /// Environment configuration tagged with subsystem `qc-<id>`.
    pub fn for_subsystem(id: &str) -> Self {
        Self {
            subsystem: Some(format!("qc-{id}")),
            ..Self::from_env()
        }
    }

    /// Service name suffixed with the subsystem tag, if any.
    pub fn full_service_name(&self) -> String {
        match &self.subsystem {
            Some(tag) => format!("{}/{}", self.service_name, tag),
            None => self.service_name.clone(),
        }
    }
}

fn env_flag(var: &str) -> Option<bool> {
    env::var(var)
        .ok()
        .map(|v| matches!(v.to_lowercase().as_str(), "true" | "1" | "yes"))
}
