use std::collections::{BTreeMap, BTreeSet};

use ahash::AHashMap;

use super::error::{ClassifyError, ClassifyResult};
use super::ops::{Operation, Registers};
use super::sample::Sample;

/// Operations whose effect on `before` reproduces `after`.
pub fn matching_operations(sample: &Sample) -> Vec<Operation> {
    let (a, b, c) = sample.operands();
    Operation::ALL
        .into_iter()
        .filter(|op| op.apply(&sample.before, a, b, c) == Some(sample.after))
        .collect()
}

/// Number of samples consistent with at least `threshold` operations.
pub fn count_ambiguous(samples: &[Sample], threshold: usize) -> usize {
    samples
        .iter()
        .filter(|sample| matching_operations(sample).len() >= threshold)
        .count()
}

/// Resolved opcode → operation assignment.
#[derive(Debug, Clone, Default)]
pub struct OpcodeTable {
    entries: AHashMap<i64, Operation>,
}

impl OpcodeTable {
    pub fn get(&self, opcode: i64) -> Option<Operation> {
        self.entries.get(&opcode).copied()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries ordered by opcode.
    pub fn entries(&self) -> Vec<(i64, Operation)> {
        let mut entries: Vec<_> = self.entries.iter().map(|(k, v)| (*k, *v)).collect();
        entries.sort_unstable_by_key(|(opcode, _)| *opcode);
        entries
    }
}

impl FromIterator<(i64, Operation)> for OpcodeTable {
    fn from_iter<T: IntoIterator<Item = (i64, Operation)>>(iter: T) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}

/// Assigns an operation to every opcode that appears in `samples`.
///
/// Each opcode starts with the operations consistent with all of its samples.
/// Opcodes left with a single candidate are fixed and that operation is struck
/// from every other opcode, repeating until nothing is pending.
pub fn resolve_opcodes(samples: &[Sample]) -> ClassifyResult<OpcodeTable> {
    let mut candidates: BTreeMap<i64, BTreeSet<Operation>> = BTreeMap::new();
    for sample in samples {
        let matching: BTreeSet<_> = matching_operations(sample).into_iter().collect();
        candidates
            .entry(sample.opcode())
            .and_modify(|set| set.retain(|op| matching.contains(op)))
            .or_insert(matching);
    }

    let mut resolved = AHashMap::new();
    while !candidates.is_empty() {
        if let Some((&opcode, _)) = candidates.iter().find(|(_, ops)| ops.is_empty()) {
            return Err(ClassifyError::Contradiction { opcode });
        }
        let fixed: Vec<(i64, Operation)> = candidates
            .iter()
            .filter(|(_, ops)| ops.len() == 1)
            .filter_map(|(opcode, ops)| ops.first().map(|op| (*opcode, *op)))
            .collect();
        if fixed.is_empty() {
            return Err(ClassifyError::Unresolvable {
                pending: candidates.keys().copied().collect(),
            });
        }
        for (opcode, op) in fixed {
            candidates.remove(&opcode);
            resolved.insert(opcode, op);
            for ops in candidates.values_mut() {
                ops.remove(&op);
            }
        }
    }
    Ok(OpcodeTable { entries: resolved })
}

/// Runs `program` from all-zero registers.
pub fn execute(table: &OpcodeTable, program: &[[i64; 4]]) -> ClassifyResult<Registers> {
    let mut regs: Registers = [0; 4];
    for (index, &[opcode, a, b, c]) in program.iter().enumerate() {
        let op = table
            .get(opcode)
            .ok_or(ClassifyError::UnknownOpcode { opcode })?;
        regs = op
            .apply(&regs, a, b, c)
            .ok_or(ClassifyError::InvalidOperand { index })?;
    }
    Ok(regs)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample(before: Registers, instruction: [i64; 4], after: Registers) -> Sample {
        Sample {
            before,
            instruction,
            after,
        }
    }

    #[test]
    fn example_sample_matches_three_operations() {
        let s = sample([3, 2, 1, 1], [9, 2, 1, 2], [3, 2, 2, 1]);
        assert_eq!(
            matching_operations(&s),
            vec![Operation::Addi, Operation::Mulr, Operation::Seti]
        );
        assert_eq!(count_ambiguous(&[s], 3), 1);
        assert_eq!(count_ambiguous(&[s], 4), 0);
    }

    #[test]
    fn elimination_resolves_chain() {
        let samples = [
            // only seti puts 7 in r0
            sample([0, 0, 0, 0], [5, 7, 0, 0], [7, 0, 0, 0]),
            // addi or seti
            sample([0, 0, 1, 0], [2, 2, 1, 3], [0, 0, 1, 2]),
            // addr or borr, then only addr
            sample([1, 2, 0, 0], [8, 0, 1, 2], [1, 2, 3, 0]),
            sample([1, 1, 0, 0], [8, 0, 1, 2], [1, 1, 2, 0]),
        ];
        let table = resolve_opcodes(&samples[..2]).expect("resolve");
        assert_eq!(table.get(5), Some(Operation::Seti));
        assert_eq!(table.get(2), Some(Operation::Addi));
        assert_eq!(
            table.entries(),
            vec![(2, Operation::Addi), (5, Operation::Seti)]
        );
        assert_eq!(table.len(), 2);

        let table = resolve_opcodes(&samples).expect("resolve");
        assert_eq!(table.get(8), Some(Operation::Addr));
    }

    #[test]
    fn reports_contradictions_and_stalls() {
        let impossible = sample([0, 0, 0, 0], [1, 0, 0, 0], [5, 5, 5, 5]);
        assert_eq!(
            resolve_opcodes(&[impossible]).expect_err("no operation fits"),
            ClassifyError::Contradiction { opcode: 1 }
        );

        let vague = sample([3, 2, 1, 1], [9, 2, 1, 2], [3, 2, 2, 1]);
        assert_eq!(
            resolve_opcodes(&[vague]).expect_err("three candidates remain"),
            ClassifyError::Unresolvable { pending: vec![9] }
        );
    }

    #[test]
    fn executes_with_resolved_table() {
        let table: OpcodeTable = [(0, Operation::Seti), (1, Operation::Addr)]
            .into_iter()
            .collect();
        let regs = execute(&table, &[[0, 4, 0, 1], [0, 5, 0, 2], [1, 1, 2, 0]])
            .expect("execute");
        assert_eq!(regs, [9, 4, 5, 0]);
        assert_eq!(
            execute(&table, &[[3, 0, 0, 0]]),
            Err(ClassifyError::UnknownOpcode { opcode: 3 })
        );
        assert_eq!(
            execute(&table, &[[1, 7, 0, 0]]),
            Err(ClassifyError::InvalidOperand { index: 0 })
        );
    }
}
