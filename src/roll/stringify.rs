use super::result::{Outcome, RollDetail, RollResult};
use crate::check::{CheckDie, CheckResult};
use crate::common::Float;
use crate::error::RollError;

/// Renders outcomes as chat text. Implementors override the pieces they
/// want to decorate.
pub trait Stringify {
    fn stringify(&mut self, outcome: &Outcome) -> String {
        match outcome {
            Ok(result) => self.str_result(result),
            Err(error) => self.str_error(error),
        }
    }

    /// `2d6+3 = 2d6 [3, 4]=7 => 10`
    fn str_result(&mut self, result: &RollResult) -> String {
        let mut ret = format!("{} = ", result.expression);
        if !result.details.is_empty() {
            let details = result
                .details
                .iter()
                .map(|d| self.str_detail(d))
                .collect::<Vec<_>>()
                .join(" ");
            ret.push_str(&details);
            ret.push_str(" => ");
        }
        ret.push_str(&self.str_total(result.result));
        ret
    }

    fn str_detail(&mut self, detail: &RollDetail) -> String {
        let rolls = detail
            .rolls
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(", ");
        format!("{} [{}]={}", detail.notation, rolls, detail.sum)
    }

    fn str_total(&mut self, total: Float) -> String {
        total.to_string()
    }

    fn str_error(&mut self, error: &RollError) -> String {
        format!("Error: {}", error)
    }

    /// `target 7 (Sniper): [3, 12] => 1 successes, 1 complications`
    fn str_check(&mut self, check: &CheckResult) -> String {
        let dice = check
            .dice
            .iter()
            .map(|d| self.str_check_die(d))
            .collect::<Vec<_>>()
            .join(", ");
        let focus = match &check.focus {
            Some(focus) => format!(" ({})", focus),
            None => String::new(),
        };
        format!(
            "target {}{}: [{}] => {} successes, {} complications",
            check.target, focus, dice, check.successes, check.complications
        )
    }

    fn str_check_die(&mut self, die: &CheckDie) -> String {
        die.value.to_string()
    }
}

#[derive(Default)]
pub struct SimpleStringifier;

impl SimpleStringifier {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Stringify for SimpleStringifier {}

/// Bolds totals and successful check dice, strikes out complications.
#[derive(Default)]
pub struct MarkdownStringifier;

impl MarkdownStringifier {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Stringify for MarkdownStringifier {
    fn str_total(&mut self, total: Float) -> String {
        format!("**{}**", total)
    }

    fn str_check_die(&mut self, die: &CheckDie) -> String {
        if die.success {
            format!("**{}**", die.value)
        } else {
            format!("~~{}~~", die.value)
        }
    }
}
