use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct Health {
    pub status: &'static str,
}

impl Health {
    pub fn ok() -> Self { Self { status: "ok" } }

    pub fn unavailable() -> Self { Self { status: "unavailable" } }

    /// Health of a dependency from the result of a liveness check.
    pub fn from_check<T, E>(res: &Result<T, E>) -> Self {
        if res.is_ok() { Self::ok() } else { Self::unavailable() }
    }

    pub fn is_ok(&self) -> bool { self.status == "ok" }
}
