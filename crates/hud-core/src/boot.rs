//! Boot splash timeline.

use crate::constants::*;
use smallvec::{smallvec, SmallVec};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BootEvent {
    Step(u8),
    /// Put the demo values back (only scheduled after a reset).
    RestoreDemo,
    Complete,
}

pub type BootSchedule = SmallVec<[(u32, BootEvent); 5]>;

/// Timed events for one boot run, in firing order.
pub fn schedule(after_reset: bool) -> BootSchedule {
    let mut events: BootSchedule = smallvec![
        (BOOT_STEP_1_MS, BootEvent::Step(1)),
        (BOOT_STEP_2_MS, BootEvent::Step(2)),
        (BOOT_STEP_3_MS, BootEvent::Step(3)),
    ];
    if after_reset {
        events.push((BOOT_COMPLETE_MS, BootEvent::RestoreDemo));
    }
    events.push((BOOT_COMPLETE_MS, BootEvent::Complete));
    events
}

/// Boot step reached `elapsed_ms` after the splash appeared.
pub fn step_at(elapsed_ms: f64) -> u8 {
    schedule(false)
        .iter()
        .filter_map(|&(at, ev)| match ev {
            BootEvent::Step(n) if elapsed_ms >= at as f64 => Some(n),
            _ => None,
        })
        .max()
        .unwrap_or(0)
}

pub fn is_complete(elapsed_ms: f64) -> bool {
    elapsed_ms >= BOOT_COMPLETE_MS as f64
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BootLine {
    pub text: &'static str,
    /// Lit once the boot step reaches this value.
    pub lit_from: u8,
}

pub const BOOT_LINES: [BootLine; 3] = [
    BootLine {
        text: "[ SYSTEM_BOOT ] ... OK",
        lit_from: 0,
    },
    BootLine {
        text: "[ LOADING_MODULES ] ... V14 KINETIC",
        lit_from: 1,
    },
    BootLine {
        text: "[ DISPLAY_READY ] ... 100%",
        lit_from: 3,
    },
];

impl BootLine {
    pub fn is_lit(&self, step: u8) -> bool {
        step >= self.lit_from
    }
}
