use std::fmt;

pub type Registers = [i64; 4];

/// The sixteen register-machine operations. Suffix `r` reads an operand from
/// a register, `i` uses it as an immediate value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Operation {
    Addr,
    Addi,
    Mulr,
    Muli,
    Banr,
    Bani,
    Borr,
    Bori,
    Setr,
    Seti,
    Gtir,
    Gtri,
    Gtrr,
    Eqir,
    Eqri,
    Eqrr,
}

impl Operation {
    pub const ALL: [Operation; 16] = [
        Operation::Addr,
        Operation::Addi,
        Operation::Mulr,
        Operation::Muli,
        Operation::Banr,
        Operation::Bani,
        Operation::Borr,
        Operation::Bori,
        Operation::Setr,
        Operation::Seti,
        Operation::Gtir,
        Operation::Gtri,
        Operation::Gtrr,
        Operation::Eqir,
        Operation::Eqri,
        Operation::Eqrr,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Operation::Addr => "addr",
            Operation::Addi => "addi",
            Operation::Mulr => "mulr",
            Operation::Muli => "muli",
            Operation::Banr => "banr",
            Operation::Bani => "bani",
            Operation::Borr => "borr",
            Operation::Bori => "bori",
            Operation::Setr => "setr",
            Operation::Seti => "seti",
            Operation::Gtir => "gtir",
            Operation::Gtri => "gtri",
            Operation::Gtrr => "gtrr",
            Operation::Eqir => "eqir",
            Operation::Eqri => "eqri",
            Operation::Eqrr => "eqrr",
        }
    }

    /// Applies the operation with operands `a`, `b` and destination register
    /// `c`. Returns `None` when a register operand does not exist.
    pub fn apply(self, regs: &Registers, a: i64, b: i64, c: i64) -> Option<Registers> {
        let reg = |index: i64| {
            usize::try_from(index)
                .ok()
                .and_then(|index| regs.get(index))
                .copied()
        };
        let value = match self {
            Operation::Addr => reg(a)?.checked_add(reg(b)?)?,
            Operation::Addi => reg(a)?.checked_add(b)?,
            Operation::Mulr => reg(a)?.checked_mul(reg(b)?)?,
            Operation::Muli => reg(a)?.checked_mul(b)?,
            Operation::Banr => reg(a)? & reg(b)?,
            Operation::Bani => reg(a)? & b,
            Operation::Borr => reg(a)? | reg(b)?,
            Operation::Bori => reg(a)? | b,
            Operation::Setr => reg(a)?,
            Operation::Seti => a,
            Operation::Gtir => (a > reg(b)?) as i64,
            Operation::Gtri => (reg(a)? > b) as i64,
            Operation::Gtrr => (reg(a)? > reg(b)?) as i64,
            Operation::Eqir => (a == reg(b)?) as i64,
            Operation::Eqri => (reg(a)? == b) as i64,
            Operation::Eqrr => (reg(a)? == reg(b)?) as i64,
        };
        let dest = usize::try_from(c).ok().filter(|c| *c < regs.len())?;
        let mut out = *regs;
        out[dest] = value;
        Some(out)
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn register_and_immediate_variants_differ() {
        let regs = [3, 2, 1, 1];
        assert_eq!(Operation::Addr.apply(&regs, 2, 1, 2), Some([3, 2, 3, 1]));
        assert_eq!(Operation::Addi.apply(&regs, 2, 1, 2), Some([3, 2, 2, 1]));
        assert_eq!(Operation::Mulr.apply(&regs, 2, 1, 2), Some([3, 2, 2, 1]));
        assert_eq!(Operation::Seti.apply(&regs, 2, 1, 2), Some([3, 2, 2, 1]));
        assert_eq!(Operation::Setr.apply(&regs, 2, 1, 2), Some([3, 2, 1, 1]));
    }

    #[test]
    fn comparisons_yield_flags() {
        let regs = [5, 7, 0, 0];
        assert_eq!(Operation::Gtrr.apply(&regs, 1, 0, 3), Some([5, 7, 0, 1]));
        assert_eq!(Operation::Gtir.apply(&regs, 6, 1, 3), Some([5, 7, 0, 0]));
        assert_eq!(Operation::Eqri.apply(&regs, 0, 5, 2), Some([5, 7, 1, 0]));
        assert_eq!(Operation::Eqir.apply(&regs, 7, 1, 2), Some([5, 7, 1, 0]));
    }

    #[test]
    fn bitwise_operations() {
        let regs = [0b1100, 0b1010, 0, 0];
        assert_eq!(Operation::Banr.apply(&regs, 0, 1, 2), Some([12, 10, 0b1000, 0]));
        assert_eq!(Operation::Borr.apply(&regs, 0, 1, 2), Some([12, 10, 0b1110, 0]));
        assert_eq!(Operation::Bori.apply(&regs, 0, 1, 2), Some([12, 10, 0b1101, 0]));
    }

    #[test]
    fn out_of_range_registers_are_inapplicable() {
        let regs = [0; 4];
        assert_eq!(Operation::Addr.apply(&regs, 4, 0, 0), None);
        assert_eq!(Operation::Seti.apply(&regs, 9, 0, 4), None);
        assert_eq!(Operation::Setr.apply(&regs, -1, 0, 0), None);
        assert_eq!(
            Operation::Seti.apply(&regs, 9, 99, 0),
            Some([9, 0, 0, 0]),
            "immediate operands are not range checked"
        );
    }
}
