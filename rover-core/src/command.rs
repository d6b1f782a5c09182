#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Command {
    TurnLeft,
    TurnRight,
    MoveForward,
    MoveBackward,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommandError {
    Unrecognized(char),
}

impl Command {
    pub fn from_char(input: char) -> Result<Self, CommandError> {
        match input.to_ascii_uppercase() {
            'L' => Ok(Command::TurnLeft),
            'R' => Ok(Command::TurnRight),
            'F' => Ok(Command::MoveForward),
            'B' => Ok(Command::MoveBackward),
            _ => Err(CommandError::Unrecognized(input)),
        }
    }

    pub fn as_char(self) -> char {
        match self {
            Command::TurnLeft => 'L',
            Command::TurnRight => 'R',
            Command::MoveForward => 'F',
            Command::MoveBackward => 'B',
        }
    }

    pub fn is_move(self) -> bool {
        matches!(self, Command::MoveForward | Command::MoveBackward)
    }

    pub fn status_text(self) -> &'static str {
        match self {
            Command::TurnLeft => "Turning Left...",
            Command::TurnRight => "Turning Right...",
            Command::MoveForward => "Moving Forward...",
            Command::MoveBackward => "Moving Backwards...",
        }
    }
}

/// Allow-set for keystrokes forwarded to the controller.
///
/// The default set is `L`, `R` and `F`; `B` is opt-in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct InputFilter {
    allow_backward: bool,
}

impl InputFilter {
    pub fn with_backward() -> Self {
        Self {
            allow_backward: true,
        }
    }

    pub fn accept(&self, input: char) -> Option<Command> {
        match Command::from_char(input) {
            Ok(Command::MoveBackward) if !self.allow_backward => None,
            Ok(command) => Some(command),
            Err(_) => None,
        }
    }

    pub fn prompt(&self) -> &'static str {
        if self.allow_backward {
            "Enter L, R, F or B"
        } else {
            "Enter L, R or F"
        }
    }
}
