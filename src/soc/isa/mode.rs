/// Per-parameter interpretation of a raw parameter slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AddressingMode {
    /// The slot holds an address to dereference.
    #[default]
    Position,
    /// The slot holds the operand itself. Never a write target.
    Immediate,
    /// The slot holds an offset from the relative base.
    Relative,
}

impl AddressingMode {
    pub fn from_digit(digit: i64) -> Option<Self> {
        match digit {
            0 => Some(AddressingMode::Position),
            1 => Some(AddressingMode::Immediate),
            2 => Some(AddressingMode::Relative),
            _ => None,
        }
    }

    pub fn digit(self) -> i64 {
        match self {
            AddressingMode::Position => 0,
            AddressingMode::Immediate => 1,
            AddressingMode::Relative => 2,
        }
    }
}
