use derive_more::Display;
use serde::{Deserialize, Serialize};

/// The judgement for one attended day.
///
/// `None` covers both "on time" and "no judgement possible" (an unknown
/// schedule or missing readings never escalate to an error).
#[derive(Debug, Copy, Clone, Display, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AttendanceStatus {
    #[display("on time")]
    None,
    #[display("tardy")]
    Tardy,
    #[display("leaving early")]
    LeavingEarly,
    #[display("tardy and leaving early")]
    TardyAndLeavingEarly,
}

impl AttendanceStatus {
    #[must_use]
    pub(crate) fn from_flags(is_late: bool, is_early: bool) -> Self {
        match (is_late, is_early) {
            (true, true) => Self::TardyAndLeavingEarly,
            (true, false) => Self::Tardy,
            (false, true) => Self::LeavingEarly,
            (false, false) => Self::None,
        }
    }

    #[must_use]
    pub const fn is_tardy(&self) -> bool {
        matches!(self, Self::Tardy | Self::TardyAndLeavingEarly)
    }

    #[must_use]
    pub const fn is_leaving_early(&self) -> bool {
        matches!(self, Self::LeavingEarly | Self::TardyAndLeavingEarly)
    }
}
