//! Mock dashboard state feeding the tracker and its sibling widgets.

use crate::inputs::{clamp_ratio, Progress, Status, TrackerProps};

/// Seed values shown after boot and after every demo reset.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DemoValues {
    pub score: f64,
    pub sessions: f64,
    pub max_sessions: f64,
    pub sets: f64,
    pub max_sets: f64,
    pub volume: f64,
    pub max_volume: f64,
    pub time_under_tension_sec: f64,
}

impl Default for DemoValues {
    fn default() -> Self {
        Self {
            score: 84.0,
            sessions: 4.0,
            max_sessions: 5.0,
            sets: 45.0,
            max_sets: 60.0,
            volume: 18_500.0,
            max_volume: 25_000.0,
            time_under_tension_sec: 2_450.0,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DashboardState {
    demo: DemoValues,
    pub score: f64,
    pub sessions: Progress,
    pub sets: Progress,
    pub volume: f64,
}

impl Default for DashboardState {
    fn default() -> Self {
        Self::new(DemoValues::default())
    }
}

impl DashboardState {
    pub fn new(demo: DemoValues) -> Self {
        Self {
            demo,
            score: demo.score,
            sessions: Progress::new(demo.sessions, demo.max_sessions),
            sets: Progress::new(demo.sets, demo.max_sets),
            volume: demo.volume,
        }
    }

    /// Zero the live values; goal maxima stay put.
    pub fn reset(&mut self) {
        self.score = 0.0;
        self.sessions.current = 0.0;
        self.sets.current = 0.0;
        self.volume = 0.0;
    }

    pub fn restore(&mut self) {
        *self = Self::new(self.demo);
    }

    pub fn tracker_props(&self) -> TrackerProps {
        TrackerProps {
            score: self.score,
            sessions: self.sessions,
            sets: self.sets,
            status: Status::for_score(self.score),
        }
    }

    pub fn volume_gauge(&self) -> VolumeGauge {
        VolumeGauge {
            volume: self.volume,
            max_volume: self.demo.max_volume,
            sets: self.sets.current,
            time_under_tension_sec: self.demo.time_under_tension_sec,
            sessions: self.sessions.current,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct VolumeGauge {
    pub volume: f64,
    pub max_volume: f64,
    pub sets: f64,
    pub time_under_tension_sec: f64,
    pub sessions: f64,
}

impl VolumeGauge {
    pub fn ratio(&self) -> f64 {
        clamp_ratio(self.volume / self.max_volume)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Accent {
    Cyan,
    Orange,
    Purple,
    Green,
    Yellow,
    Blue,
}

impl Accent {
    /// Text color and the rgb triple used for border/glow tints.
    pub fn palette(self) -> (&'static str, [u8; 3]) {
        match self {
            Accent::Cyan => ("#22d3ee", [6, 182, 212]),
            Accent::Orange => ("#fb923c", [249, 115, 22]),
            Accent::Purple => ("#c084fc", [168, 85, 247]),
            Accent::Green => ("#4ade80", [34, 197, 94]),
            Accent::Yellow => ("#facc15", [234, 179, 8]),
            Accent::Blue => ("#60a5fa", [59, 130, 246]),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct StatTile {
    pub label: &'static str,
    pub value: &'static str,
    pub accent: Accent,
}

pub const STAT_TILES: [StatTile; 6] = [
    StatTile {
        label: "HRV",
        value: "72ms",
        accent: Accent::Cyan,
    },
    StatTile {
        label: "KCAL",
        value: "3420",
        accent: Accent::Orange,
    },
    StatTile {
        label: "FOCUS",
        value: "94%",
        accent: Accent::Purple,
    },
    StatTile {
        label: "LOAD",
        value: "68%",
        accent: Accent::Green,
    },
    StatTile {
        label: "RANK",
        value: "#12",
        accent: Accent::Yellow,
    },
    StatTile {
        label: "RECO",
        value: "88%",
        accent: Accent::Blue,
    },
];

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct XpProgress {
    pub level: u32,
    pub current: u32,
    pub next_level: u32,
}

pub const XP_PROGRESS: XpProgress = XpProgress {
    level: 24,
    current: 1850,
    next_level: 2500,
};

impl XpProgress {
    pub fn ratio(&self) -> f64 {
        clamp_ratio(self.current as f64 / self.next_level as f64)
    }
}
