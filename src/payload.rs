use serde::Serialize;

pub const SERVICE_NAME: &str = "science-worker";
pub const HEALTH_OK: &str = "ok";
pub const GREETING: &str = "Zone14 Science Worker";

/// Body of `GET /health`. Always reports the service as up, no subsystems are inspected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct HealthStatus {
    pub status: &'static str,
    pub service: &'static str,
}

impl HealthStatus {
    pub const fn ok() -> Self {
        HealthStatus {
            status: HEALTH_OK,
            service: SERVICE_NAME,
        }
    }
}

/// Body of `GET /`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Greeting {
    pub message: &'static str,
}

impl Greeting {
    pub const fn new() -> Self {
        Greeting { message: GREETING }
    }
}

impl Default for Greeting {
    fn default() -> Self {
        Self::new()
    }
}
