//! Keystroke handling and text for the command form.
//!
//! Time is passed in as seconds since start so the lock can be driven from
//! `get_time()` in the frame loop and from plain numbers in tests.

use rover_core::{Command, InputFilter, RoverState};

pub const INPUT_LOCK_SECONDS: f64 = 0.5;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Submission {
    Accepted(Command),
    Locked,
    Disallowed(char),
}

#[derive(Debug, Clone)]
pub struct Console {
    filter: InputFilter,
    echoed: Option<char>,
    message: Option<&'static str>,
    locked_until: Option<f64>,
}

impl Console {
    pub fn new(filter: InputFilter) -> Self {
        Self {
            filter,
            echoed: None,
            message: None,
            locked_until: None,
        }
    }

    pub fn submit(&mut self, input: char, now: f64) -> Submission {
        if self.is_locked() {
            return Submission::Locked;
        }
        let Some(command) = self.filter.accept(input) else {
            return Submission::Disallowed(input);
        };

        self.echoed = Some(command.as_char());
        self.message = Some(command.status_text());
        self.locked_until = Some(now + INPUT_LOCK_SECONDS);
        Submission::Accepted(command)
    }

    /// Releases the lock once it has expired. Returns true on release.
    pub fn update(&mut self, now: f64) -> bool {
        match self.locked_until {
            Some(until) if now >= until => {
                self.locked_until = None;
                self.echoed = None;
                self.message = None;
                true
            }
            _ => false,
        }
    }

    pub fn is_locked(&self) -> bool {
        self.locked_until.is_some()
    }

    pub fn echoed(&self) -> Option<char> {
        self.echoed
    }

    pub fn status_line(&self) -> &'static str {
        self.message.unwrap_or_else(|| self.filter.prompt())
    }
}

pub fn readout_lines(state: &RoverState) -> [String; 3] {
    [
        format!("Left: {}", state.position.x),
        format!("Top: {}", state.position.y),
        format!("Rotation: {}", state.heading.degrees()),
    ]
}
