//! Count-up stat animation.
//!
//! Stats arrive as display strings (`"12,000+"`, `"47%"`, `"15hrs"`,
//! `"4.9/5"`). [`parse_stat`] splits one into its numeric target and
//! affixes, [`CountUp`] advances a displayed value from 0 to the target
//! over a fixed duration with an ease-out cubic curve, and
//! [`format_stat_number`] turns the current value back into display text.
//!
//! The animator is an explicit state machine driven by frame timestamps, so
//! the frame loop that feeds it stays a thin shell around `tick`.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Default animation length, matching the reference design's 2 seconds.
pub const DEFAULT_DURATION_MS: f64 = 2000.0;

/// A stat string decomposed into the number to animate and its affixes.
///
/// `prefix` is always empty in the current design; it is kept so a future
/// `"$1,200"` style stat does not change the type.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatValue {
    pub number: f64,
    pub prefix: String,
    pub suffix: String,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum StatParseError {
    #[error("stat string {0:?} has no parseable number")]
    NotNumeric(String),
}

/// Parses a formatted stat string into `{number, prefix, suffix}`.
///
/// Recognized formats, checked in order: `"12,000+"`, `"47%"`, `"15hrs"`,
/// `"4.9/5"`. Anything else is treated as a plain number with optional
/// thousands separators. A non-numeric remainder is an input-contract
/// violation and reported as an error; callers fall back to displaying the
/// raw string.
pub fn parse_stat(raw: &str) -> Result<StatValue, StatParseError> {
    let parse = |s: &str| -> Result<f64, StatParseError> {
        s.trim()
            .parse::<f64>()
            .map_err(|_| StatParseError::NotNumeric(raw.to_string()))
    };

    if raw.contains('+') {
        let number = parse(&raw.replace(',', "").replace('+', ""))?;
        return Ok(StatValue {
            number,
            prefix: String::new(),
            suffix: "+".to_string(),
        });
    }
    if raw.contains('%') {
        let number = parse(&raw.replace('%', ""))?;
        return Ok(StatValue {
            number,
            prefix: String::new(),
            suffix: "%".to_string(),
        });
    }
    if raw.contains("hrs") {
        let number = parse(&raw.replace("hrs", ""))?;
        return Ok(StatValue {
            number,
            prefix: String::new(),
            suffix: "hrs".to_string(),
        });
    }
    if let Some((numerator, denominator)) = raw.split_once('/') {
        let number = parse(numerator)?;
        return Ok(StatValue {
            number,
            prefix: String::new(),
            suffix: format!("/{denominator}"),
        });
    }
    let number = parse(&raw.replace(',', ""))?;
    Ok(StatValue {
        number,
        prefix: String::new(),
        suffix: String::new(),
    })
}

/// Ease-out cubic: fast start, decelerating finish.
pub fn ease_out_cubic(progress: f64) -> f64 {
    1.0 - (1.0 - progress).powi(3)
}

/// Formats a stat value for display: thousands separators from 1000 up,
/// a single decimal digit when it is non-zero, plain integers otherwise.
/// The value is rounded to one decimal first, so a fraction near the next
/// whole number carries instead of printing a two-digit "tenth".
pub fn format_stat_number(value: f64) -> String {
    let scaled = (value * 10.0).round() as i64;
    let sign = if scaled < 0 { "-" } else { "" };
    let whole = (scaled / 10).abs();
    let tenth = (scaled % 10).abs();
    let whole_text = if whole >= 1000 {
        group_thousands(whole)
    } else {
        whole.to_string()
    };
    if tenth == 0 {
        format!("{sign}{whole_text}")
    } else {
        format!("{sign}{whole_text}.{tenth}")
    }
}

fn group_thousands(value: i64) -> String {
    let digits = value.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }
    grouped
}

/// Lifecycle of one animated stat.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CountUpPhase {
    /// Created, waiting for its visibility trigger
    Idle,
    /// Trigger fired; the first tick will record the start timestamp
    Armed,
    /// Counting toward the target
    Running,
    /// Holding at the exact target; ticks are no-ops
    Completed,
}

/// Count-up animator driven by frame timestamps.
///
/// The owner arms it when the host element becomes visible, then feeds it
/// one timestamp per animation frame. The displayed value is monotonically
/// non-decreasing and snaps to the exact target when the duration elapses.
#[derive(Debug, Clone, PartialEq)]
pub struct CountUp {
    target: f64,
    duration_ms: f64,
    phase: CountUpPhase,
    started_at: Option<f64>,
    value: f64,
}

impl CountUp {
    pub fn new(target: f64, duration_ms: f64) -> Self {
        Self {
            target,
            duration_ms,
            phase: CountUpPhase::Idle,
            started_at: None,
            value: 0.0,
        }
    }

    pub fn target(&self) -> f64 {
        self.target
    }

    pub fn phase(&self) -> CountUpPhase {
        self.phase
    }

    pub fn value(&self) -> f64 {
        self.value
    }

    pub fn is_complete(&self) -> bool {
        self.phase == CountUpPhase::Completed
    }

    /// Permits the animation to start. Only meaningful from `Idle`;
    /// restarting mid-flight is not supported.
    pub fn arm(&mut self) {
        if self.phase == CountUpPhase::Idle {
            self.phase = CountUpPhase::Armed;
        }
    }

    /// Returns to `Idle`, discarding any progress. The next arm/tick cycle
    /// starts the animation over.
    pub fn reset(&mut self) {
        self.phase = CountUpPhase::Idle;
        self.started_at = None;
        self.value = 0.0;
    }

    /// Advances the animation to `now_ms` (a frame timestamp) and returns
    /// the value to display.
    pub fn tick(&mut self, now_ms: f64) -> f64 {
        match self.phase {
            CountUpPhase::Idle | CountUpPhase::Completed => self.value,
            CountUpPhase::Armed => {
                self.started_at = Some(now_ms);
                self.phase = CountUpPhase::Running;
                self.value = 0.0;
                self.value
            }
            CountUpPhase::Running => {
                let started = self.started_at.unwrap_or(now_ms);
                let progress = if self.duration_ms > 0.0 {
                    ((now_ms - started) / self.duration_ms).clamp(0.0, 1.0)
                } else {
                    1.0
                };
                if progress >= 1.0 {
                    self.phase = CountUpPhase::Completed;
                    self.value = self.target;
                } else {
                    let eased = (ease_out_cubic(progress) * self.target).floor();
                    // Timestamps come from outside; never let the displayed
                    // value move backwards.
                    self.value = eased.max(self.value);
                }
                self.value
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_plus_stat_with_thousands_separator() {
        assert_eq!(
            parse_stat("12,000+"),
            Ok(StatValue {
                number: 12000.0,
                prefix: String::new(),
                suffix: "+".to_string(),
            })
        );
    }

    #[test]
    fn parses_percent_stat() {
        let stat = parse_stat("47%").unwrap();
        assert_eq!(stat.number, 47.0);
        assert_eq!(stat.suffix, "%");
        assert_eq!(stat.prefix, "");
    }

    #[test]
    fn parses_hours_stat() {
        let stat = parse_stat("15hrs").unwrap();
        assert_eq!(stat.number, 15.0);
        assert_eq!(stat.suffix, "hrs");
    }

    #[test]
    fn parses_rating_stat() {
        let stat = parse_stat("4.9/5").unwrap();
        assert_eq!(stat.number, 4.9);
        assert_eq!(stat.suffix, "/5");
        assert_eq!(stat.prefix, "");
    }

    #[test]
    fn parses_plain_number_with_separator() {
        assert_eq!(parse_stat("1,234").unwrap().number, 1234.0);
        assert_eq!(parse_stat("1234").unwrap().suffix, "");
    }

    #[test]
    fn rejects_non_numeric_input() {
        assert_eq!(
            parse_stat("lots"),
            Err(StatParseError::NotNumeric("lots".to_string()))
        );
        assert!(parse_stat("fast+").is_err());
    }

    #[test]
    fn formats_thousands_with_separators() {
        assert_eq!(format_stat_number(12000.0), "12,000");
        assert_eq!(format_stat_number(1234567.0), "1,234,567");
        assert_eq!(format_stat_number(1000.0), "1,000");
    }

    #[test]
    fn formats_fractions_with_one_decimal() {
        assert_eq!(format_stat_number(4.9), "4.9");
        assert_eq!(format_stat_number(0.5), "0.5");
    }

    #[test]
    fn rounds_to_one_decimal_before_splitting() {
        assert_eq!(format_stat_number(1000.96), "1,001");
        assert_eq!(format_stat_number(1000.94), "1,000.9");
        assert_eq!(format_stat_number(12000.5), "12,000.5");
        assert_eq!(format_stat_number(999.96), "1,000");
    }

    #[test]
    fn formats_small_integers_plainly() {
        assert_eq!(format_stat_number(47.0), "47");
        assert_eq!(format_stat_number(0.0), "0");
        assert_eq!(format_stat_number(999.0), "999");
    }

    #[test]
    fn ease_out_cubic_hits_endpoints() {
        assert_eq!(ease_out_cubic(0.0), 0.0);
        assert_eq!(ease_out_cubic(1.0), 1.0);
        assert!(ease_out_cubic(0.5) > 0.5);
    }

    #[test]
    fn idle_countup_ignores_ticks() {
        let mut countup = CountUp::new(100.0, 1000.0);
        assert_eq!(countup.tick(500.0), 0.0);
        assert_eq!(countup.phase(), CountUpPhase::Idle);
    }

    #[test]
    fn first_tick_after_arming_starts_at_zero() {
        let mut countup = CountUp::new(100.0, 1000.0);
        countup.arm();
        assert_eq!(countup.phase(), CountUpPhase::Armed);
        assert_eq!(countup.tick(3000.0), 0.0);
        assert_eq!(countup.phase(), CountUpPhase::Running);
    }

    #[test]
    fn value_is_monotone_and_snaps_to_target() {
        let mut countup = CountUp::new(12000.0, 2000.0);
        countup.arm();
        let mut last = countup.tick(0.0);
        for frame in 1..=125 {
            let value = countup.tick(frame as f64 * 16.0);
            assert!(value >= last, "value regressed at frame {frame}");
            last = value;
        }
        assert_eq!(countup.tick(2000.0), 12000.0);
        assert!(countup.is_complete());
    }

    #[test]
    fn completed_countup_holds_exact_target() {
        let mut countup = CountUp::new(4.9, 2000.0);
        countup.arm();
        countup.tick(0.0);
        assert_eq!(countup.tick(2500.0), 4.9);
        // Further ticks never move it again.
        assert_eq!(countup.tick(9999.0), 4.9);
        assert_eq!(countup.phase(), CountUpPhase::Completed);
    }

    #[test]
    fn fractional_target_floors_mid_flight() {
        let mut countup = CountUp::new(4.9, 2000.0);
        countup.arm();
        countup.tick(0.0);
        let mid = countup.tick(1000.0);
        assert_eq!(mid, mid.floor());
        assert!(mid < 4.9);
    }

    #[test]
    fn zero_duration_completes_on_first_running_tick() {
        let mut countup = CountUp::new(47.0, 0.0);
        countup.arm();
        countup.tick(100.0);
        assert_eq!(countup.tick(100.0), 47.0);
        assert!(countup.is_complete());
    }

    #[test]
    fn reset_returns_to_idle() {
        let mut countup = CountUp::new(100.0, 1000.0);
        countup.arm();
        countup.tick(0.0);
        countup.tick(500.0);
        countup.reset();
        assert_eq!(countup.phase(), CountUpPhase::Idle);
        assert_eq!(countup.value(), 0.0);
    }
}
