//! Text formats: sample blocks and the trailing instruction listing.

use super::error::{ClassifyError, ClassifyResult};
use super::ops::Registers;

/// One observation of an unknown instruction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Sample {
    pub before: Registers,
    pub instruction: [i64; 4],
    pub after: Registers,
}

impl Sample {
    pub fn opcode(&self) -> i64 {
        self.instruction[0]
    }

    pub fn operands(&self) -> (i64, i64, i64) {
        let [_, a, b, c] = self.instruction;
        (a, b, c)
    }
}

/// Splits puzzle input into the sample section and the program section, which
/// are separated by at least two blank lines. Input without a program yields
/// an empty second half. Both `\n` and `\r\n` line endings are accepted.
pub fn split_input(text: &str) -> (&str, &str) {
    let separator = if text.contains("\r\n") {
        "\r\n\r\n\r\n"
    } else {
        "\n\n\n"
    };
    match text.find(separator) {
        Some(at) => (&text[..at], text[at..].trim_start_matches(['\r', '\n'])),
        None => (text, ""),
    }
}

/// Parses blank-line separated blocks of the form
///
/// ```text
/// Before: [3, 2, 1, 1]
/// 9 2 1 2
/// After:  [3, 2, 2, 1]
/// ```
pub fn parse_samples(text: &str) -> ClassifyResult<Vec<Sample>> {
    let normalized = text.replace("\r\n", "\n");
    normalized
        .split("\n\n")
        .map(str::trim)
        .filter(|block| !block.is_empty())
        .enumerate()
        .map(|(index, block)| parse_sample(index, block))
        .collect()
}

fn parse_sample(index: usize, block: &str) -> ClassifyResult<Sample> {
    let malformed = |reason: &str| ClassifyError::MalformedSample {
        index,
        reason: reason.to_string(),
    };
    let mut lines = block.lines().map(str::trim);
    let before = lines
        .next()
        .and_then(|line| parse_registers(line, "Before:"))
        .ok_or_else(|| malformed("expected 'Before: [a, b, c, d]'"))?;
    let instruction = lines
        .next()
        .and_then(parse_words)
        .ok_or_else(|| malformed("expected four instruction words"))?;
    let after = lines
        .next()
        .and_then(|line| parse_registers(line, "After:"))
        .ok_or_else(|| malformed("expected 'After: [a, b, c, d]'"))?;
    if lines.next().is_some() {
        return Err(malformed("unexpected trailing line"));
    }
    Ok(Sample {
        before,
        instruction,
        after,
    })
}

fn parse_registers(line: &str, label: &str) -> Option<Registers> {
    let list = line
        .strip_prefix(label)?
        .trim()
        .strip_prefix('[')?
        .strip_suffix(']')?;
    collect_four(list.split(','))
}

fn parse_words(line: &str) -> Option<[i64; 4]> {
    collect_four(line.split_whitespace())
}

fn collect_four<'a, I: Iterator<Item = &'a str>>(parts: I) -> Option<[i64; 4]> {
    let values = parts
        .map(|part| part.trim().parse::<i64>().ok())
        .collect::<Option<Vec<_>>>()?;
    values.try_into().ok()
}

/// Parses one `opcode a b c` instruction per non-empty line.
pub fn parse_instructions(text: &str) -> ClassifyResult<Vec<[i64; 4]>> {
    text.lines()
        .enumerate()
        .filter(|(_, line)| !line.trim().is_empty())
        .map(|(line, text)| {
            parse_words(text).ok_or_else(|| ClassifyError::MalformedInstruction {
                line: line + 1,
                text: text.to_string(),
            })
        })
        .collect()
}
