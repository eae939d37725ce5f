use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::core::primitives::round_to_tenths;
use crate::error::{ChartError, ChartResult};

/// Unit rules for rendering numeric values in display panels.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValueFormat {
    /// Suffix for every non-percentage value.
    #[serde(default = "default_unit_suffix")]
    pub unit_suffix: String,
    /// Label/kind (compared case-insensitively) rendered as a percentage.
    #[serde(default = "default_percent_kind")]
    pub percent_kind: String,
}

impl Default for ValueFormat {
    fn default() -> Self {
        Self {
            unit_suffix: default_unit_suffix(),
            percent_kind: default_percent_kind(),
        }
    }
}

fn default_unit_suffix() -> String {
    "°C".to_owned()
}

fn default_percent_kind() -> String {
    "accuracy".to_owned()
}

impl ValueFormat {
    pub(crate) fn validate(&self) -> ChartResult<()> {
        if self.percent_kind.trim().is_empty() {
            return Err(ChartError::InvalidData(
                "value format percent kind must not be empty".to_owned(),
            ));
        }
        Ok(())
    }

    #[must_use]
    pub fn is_percent(&self, label: &str, kind: Option<&str>) -> bool {
        let matches = |candidate: &str| candidate.trim().eq_ignore_ascii_case(&self.percent_kind);
        matches(label) || kind.is_some_and(matches)
    }

    /// Formats `value` with one decimal and the unit implied by `label`/`kind`.
    #[must_use]
    pub fn format(&self, value: f64, label: &str, kind: Option<&str>) -> String {
        if self.is_percent(label, kind) {
            format!("{}%", format_tenths(value, Decimal::ONE_HUNDRED, 100.0))
        } else {
            format!("{}{}", format_tenths(value, Decimal::ONE, 1.0), self.unit_suffix)
        }
    }
}

fn format_tenths(value: f64, scale: Decimal, float_scale: f64) -> String {
    match round_to_tenths(value, scale) {
        Some(rounded) => format!("{rounded:.1}"),
        None => format!("{:.1}", value * float_scale),
    }
}

fn is_word_boundary(ch: char) -> bool {
    ch.is_whitespace() || matches!(ch, '-' | ',' | '(' | ')' | '"' | '\'')
}

/// Title-cases a label.
///
/// Words written fully in uppercase are lowercased first, then the first
/// character after each boundary is uppercased, so `"RMSE"` becomes `"Rmse"`.
#[must_use]
pub fn title_case(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut word = String::new();
    for ch in text.chars() {
        if is_word_boundary(ch) {
            push_title_word(&mut out, &word);
            word.clear();
            out.push(ch);
        } else {
            word.push(ch);
        }
    }
    push_title_word(&mut out, &word);
    out
}

fn push_title_word(out: &mut String, word: &str) {
    let shouted =
        word.chars().any(char::is_uppercase) && !word.chars().any(char::is_lowercase);
    let mut chars = word.chars();
    let Some(first) = chars.next() else {
        return;
    };
    out.extend(first.to_uppercase());
    if shouted {
        out.extend(chars.flat_map(char::to_lowercase));
    } else {
        out.extend(chars);
    }
}
