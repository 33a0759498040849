use serde::Serialize;

#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub enum EventKind {
    ClockIn,
    ClockOut,
}

impl EventKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            EventKind::ClockIn => "in",
            EventKind::ClockOut => "out",
        }
    }

    /// Convert enum → DB integer (0 = in, 1 = out)
    pub fn to_db(&self) -> i64 {
        match self {
            EventKind::ClockIn => 0,
            EventKind::ClockOut => 1,
        }
    }

    /// Convert DB integer → enum
    pub fn from_db(v: i64) -> Option<Self> {
        match v {
            0 => Some(EventKind::ClockIn),
            1 => Some(EventKind::ClockOut),
            _ => None,
        }
    }

    pub fn is_in(&self) -> bool {
        matches!(self, EventKind::ClockIn)
    }
}
