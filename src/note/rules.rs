//! The fixed rules of the note.

use super::registry::{NoteError, Result};

/// The rules, in canonical order. [`rule`] numbers them starting at 1.
pub const RULES: [&str; 5] = [
    "The human whose name is written in this note shall die.",
    "This note will not take effect unless the writer has the person's face in \
     their mind when writing his or her name. Therefore, people sharing the \
     same name will not be affected.",
    "If the cause of death is written within the next 40 seconds of writing \
     the person's name, it will happen.",
    "If the cause of death is not specified, the person will simply die of a \
     heart attack.",
    "After writing the cause of death, details of the death should be written \
     in the next 6 minutes and 40 seconds.",
];

/// Returns the `rule_number`-th rule, counting from 1.
pub fn rule(rule_number: usize) -> Result<&'static str> {
    if rule_number < 1 || rule_number > RULES.len() {
        return Err(NoteError::InvalidRule(rule_number));
    }
    Ok(RULES[rule_number - 1])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_rule_is_reachable_and_non_empty() {
        for number in 1..=RULES.len() {
            let text = rule(number).unwrap();
            assert!(!text.is_empty());
        }
    }

    #[test]
    fn test_out_of_range_rule_numbers() {
        for number in [0, RULES.len() + 1] {
            assert!(matches!(rule(number), Err(NoteError::InvalidRule(n)) if n == number));
        }
    }
}
