//! Finding expressions in chat text and item fields.

use crate::parse::has_dice;
use logos::Logos;

const ROLL_PREFIXES: &[&str] = &["/roll", "/r"];

/// Returns the expression after a `/r` or `/roll` prefix, or `None` if `text`
/// is an ordinary chat message. The prefix is case-insensitive and must be
/// followed by whitespace.
pub fn strip_roll_command(text: &str) -> Option<&str> {
    let text = text.trim();
    ROLL_PREFIXES.iter().find_map(|prefix| {
        let head = text.get(..prefix.len())?;
        if !head.eq_ignore_ascii_case(prefix) {
            return None;
        }
        let rest = &text[prefix.len()..];
        rest.starts_with(char::is_whitespace)
            .then(|| rest.trim_start())
    })
}

#[derive(Logos, Debug, Copy, Clone, Eq, PartialEq)]
enum Segment {
    #[regex(r"[0-9dD+\-*/() ]+")]
    Formula,
    #[regex(r"[^0-9dD+\-*/() ]+")]
    Text,

    #[error]
    Error,
}

/// A formula pulled out of a free-text field such as a weapon's stress.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct StressRoll<'a> {
    pub expression: &'a str,
    /// The rest of the field, e.g. a damage type or condition.
    pub effect: String,
}

/// Finds the first run of formula characters in `field` that contains a
/// dice term. Returns `None` if there is none, in which case the field is
/// plain text.
pub fn extract_stress(field: &str) -> Option<StressRoll<'_>> {
    let mut lexer = Segment::lexer(field);

    while let Some(segment) = lexer.next() {
        if segment != Segment::Formula {
            continue;
        }

        let run = lexer.slice();
        let start = lexer.span().start + (run.len() - run.trim_start().len());
        // A word starting with `d` or an opening bracket often trails the
        // formula, as in "2d6 damage" or "1d6 (fire)".
        let expression = field[start..lexer.span().end].trim_end_matches(|c: char| {
            c.is_whitespace() || matches!(c, 'd' | 'D' | '+' | '-' | '*' | '/' | '(')
        });
        if !has_dice(expression) {
            continue;
        }

        let end = start + expression.len();
        let effect = [field[..start].trim_end(), field[end..].trim_start()]
            .iter()
            .filter(|s| !s.is_empty())
            .copied()
            .collect::<Vec<_>>()
            .join(" ");
        let effect = effect
            .trim_start_matches(|c: char| c.is_whitespace() || matches!(c, '+' | '-' | ',' | ';' | ':'))
            .trim_end()
            .to_owned();

        return Some(StressRoll { expression, effect });
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stress<'a>(expression: &'a str, effect: &str) -> Option<StressRoll<'a>> {
        Some(StressRoll {
            expression,
            effect: effect.to_owned(),
        })
    }

    #[test]
    fn test_roll_command() {
        assert_eq!(strip_roll_command("/r 2d6+3"), Some("2d6+3"));
        assert_eq!(strip_roll_command("/roll 1d20"), Some("1d20"));
        assert_eq!(strip_roll_command("  /ROLL   4d4 * 2 "), Some("4d4 * 2"));
        assert_eq!(strip_roll_command("/R\t1d6"), Some("1d6"));
    }

    #[test]
    fn test_not_a_roll_command() {
        assert_eq!(strip_roll_command("hello there"), None);
        assert_eq!(strip_roll_command("/r"), None);
        assert_eq!(strip_roll_command("/r2d6"), None);
        assert_eq!(strip_roll_command("/rolls 2d6"), None);
        assert_eq!(strip_roll_command("/whisper hi"), None);
        assert_eq!(strip_roll_command("é"), None);
    }

    #[test]
    fn test_extract_formula_first() {
        assert_eq!(extract_stress("2d6+1, stunned"), stress("2d6+1", "stunned"));
        assert_eq!(extract_stress("3d6"), stress("3d6", ""));
        assert_eq!(extract_stress("1D8 + 2"), stress("1D8 + 2", ""));
    }

    #[test]
    fn test_extract_after_text() {
        assert_eq!(extract_stress("Dano 2d6 fogo"), stress("2d6", "Dano fogo"));
        assert_eq!(extract_stress("Stress: 4d4"), stress("4d4", "Stress:"));
    }

    #[test]
    fn test_extract_trims_trailing_words() {
        assert_eq!(extract_stress("2d6 damage"), stress("2d6", "damage"));
        assert_eq!(
            extract_stress("1d6 (piercing)"),
            stress("1d6", "(piercing)")
        );
    }

    #[test]
    fn test_no_formula() {
        assert_eq!(extract_stress(""), None);
        assert_eq!(extract_stress("Vicious"), None);
        assert_eq!(extract_stress("d6 + 2"), None);
        assert_eq!(extract_stress("Area 3"), None);
    }
}
