//! Quantity selection state machine.
//!
//! A line item quantity is owned by the caller (the committed value) and is
//! bounded by a ceiling such as stock on hand. The selector keeps its own
//! transient state next to it:
//!
//! - which input idiom is active ([`Modality`]), a small enumerated picker
//!   for low quantities or a free-text field for larger ones
//! - the text currently shown or being typed
//! - whether the free-text field has focus
//!
//! Every boundary goes through [`normalize`], so a quantity above the
//! ceiling is clamped, never rejected. Malformed text never produces an
//! error either: commits recover to [`RECOVERY_QUANTITY`] and the display
//! recovers to an empty field.

use serde::{Deserialize, Serialize};

/// Maximum number of characters accepted by the free-text field.
pub const MAX_INPUT_LENGTH: usize = 5;

/// Highest plain choice offered by the enumerated picker.
pub const PICKER_LIMIT: u32 = 9;

/// Quantities at or above this value are entered as free text.
pub const FREE_TEXT_THRESHOLD: u32 = 10;

/// Quantity committed when the text cannot be read as a number.
pub const RECOVERY_QUANTITY: u32 = 1;

/// Clamp a candidate quantity to the ceiling.
pub fn normalize(value: u32, max_value: u32) -> u32 {
    if value > max_value {
        max_value
    } else {
        value
    }
}

/// Clamp a parsed, possibly negative, quantity into `[0, max_value]`.
pub fn normalize_signed(value: i64, max_value: u32) -> u32 {
    if value < 0 {
        return 0;
    }
    u32::try_from(value).map_or(max_value, |value| normalize(value, max_value))
}

/// Read the leading integer of `raw`.
///
/// Leading whitespace and one sign character are accepted, trailing
/// characters after the digits are ignored (`"12abc"` reads as 12). Returns
/// `None` when no digit follows. Large values saturate.
pub fn parse_integer(raw: &str) -> Option<i64> {
    let text = raw.trim_start();
    let (negative, digits) = match text.as_bytes().first() {
        Some(b'-') => (true, &text[1..]),
        Some(b'+') => (false, &text[1..]),
        _ => (false, text),
    };

    let end = digits
        .bytes()
        .position(|b| !b.is_ascii_digit())
        .unwrap_or(digits.len());
    if end == 0 {
        return None;
    }

    let magnitude = digits[..end].bytes().fold(0_i64, |acc, b| {
        acc.saturating_mul(10).saturating_add(i64::from(b - b'0'))
    });

    Some(if negative { -magnitude } else { magnitude })
}

/// Validate text on the commit path.
///
/// Unparseable text commits [`RECOVERY_QUANTITY`] (clamped to the ceiling,
/// so a ceiling of 0 still commits 0).
pub fn validate_value(raw: &str, max_value: u32) -> u32 {
    match parse_integer(raw) {
        Some(parsed) => normalize_signed(parsed, max_value),
        None => normalize(RECOVERY_QUANTITY, max_value),
    }
}

/// Validate text on the keystroke path.
///
/// Returns the text to show. Unparseable or negative input shows an empty
/// field so the user can clear it while typing.
pub fn validate_display_value(raw: &str, max_value: u32) -> String {
    match parse_integer(raw) {
        Some(parsed) if parsed >= 0 => normalize_signed(parsed, max_value).to_string(),
        _ => String::new(),
    }
}

/// A single choice of the enumerated picker.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PickerOption {
    pub value: u32,
    pub label: String,
}

impl PickerOption {
    fn new(value: u32, label: impl Into<String>) -> Self {
        Self {
            value,
            label: label.into(),
        }
    }
}

/// Choices offered by the enumerated picker for a ceiling.
///
/// `0..=min(9, max_value)`, plus a `10+` entry once the ceiling allows it.
pub fn picker_options(max_value: u32) -> Vec<PickerOption> {
    let limit = PICKER_LIMIT.min(max_value);
    let mut options: Vec<PickerOption> = (0..=limit)
        .map(|value| PickerOption::new(value, value.to_string()))
        .collect();

    if max_value >= FREE_TEXT_THRESHOLD {
        options.push(PickerOption::new(
            FREE_TEXT_THRESHOLD,
            format!("{}+", FREE_TEXT_THRESHOLD),
        ));
    }

    options
}

/// Which input widget is shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Modality {
    /// Enumerated picker with low choices and `10+`.
    Enumerated,
    /// Free-text numeric field.
    FreeText,
}

impl Modality {
    /// Modality for a freshly mounted selector.
    pub fn initial(value: u32) -> Self {
        if value < FREE_TEXT_THRESHOLD {
            Modality::Enumerated
        } else {
            Modality::FreeText
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Modality::Enumerated => "enumerated",
            Modality::FreeText => "free_text",
        }
    }
}

/// A user interaction delivered to the selector.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QuantityEvent {
    /// A picker choice, reported as the option's value text.
    Select(String),
    /// A keystroke in the free-text field, carrying the whole field text.
    Input(String),
    Focus,
    Blur,
}

/// Transient state of one mounted quantity selector.
///
/// The committed value is not stored here: it is passed in on every call by
/// the owner. [`QuantityState::reconcile`] must run before each render so
/// the display text follows external changes of the committed value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuantityState {
    modality: Modality,
    display_text: String,
    focused: bool,
}

impl QuantityState {
    /// Initial state for a committed value and ceiling.
    pub fn mount(value: u32, max_value: u32) -> Self {
        Self {
            modality: Modality::initial(value),
            display_text: normalize(value, max_value).to_string(),
            focused: false,
        }
    }

    pub fn modality(&self) -> Modality {
        self.modality
    }

    pub fn display_text(&self) -> &str {
        &self.display_text
    }

    pub fn is_focused(&self) -> bool {
        self.focused
    }

    /// Realign the display text with the committed value.
    ///
    /// Skipped while the field is focused so a half-typed value survives
    /// re-renders. Returns `true` when the state changed. Running it twice
    /// with the same inputs never changes anything the second time.
    pub fn reconcile(&mut self, value: u32, max_value: u32) -> bool {
        if self.focused {
            return false;
        }

        // Compare against the canonical text, not the parsed display: a
        // lowered ceiling parses both sides to the same clamped number.
        let normalized = normalize(value, max_value);
        let canonical = validate_display_value(&normalized.to_string(), max_value);
        if self.display_text == canonical {
            return false;
        }

        if normalized >= FREE_TEXT_THRESHOLD {
            self.promote();
        }
        self.display_text = canonical;
        true
    }

    /// Handle a picker choice. Returns the value to commit.
    pub fn select(&mut self, raw: &str, max_value: u32) -> u32 {
        let validated = validate_value(raw, max_value);
        if validated >= FREE_TEXT_THRESHOLD {
            self.promote();
        }
        self.display_text = validate_display_value(raw, max_value);
        validated
    }

    /// Handle a keystroke in the free-text field. Nothing is committed.
    ///
    /// Returns `true` when the display text differs from what was typed, in
    /// which case the field must be rewritten even if the state is unchanged.
    pub fn input(&mut self, raw: &str, max_value: u32) -> bool {
        let bounded: String = raw.chars().take(MAX_INPUT_LENGTH).collect();
        self.display_text = validate_display_value(&bounded, max_value);
        self.display_text != raw
    }

    pub fn focus(&mut self) {
        self.focused = true;
    }

    /// Drop focus without committing, as when the field is disabled while
    /// focused. The next reconciliation restores the committed value.
    pub fn release_focus(&mut self) {
        self.focused = false;
    }

    /// Handle loss of focus. Returns the value to commit.
    ///
    /// An empty field is filled with the recovery quantity first.
    pub fn blur(&mut self, max_value: u32) -> u32 {
        self.focused = false;
        if self.display_text.is_empty() {
            self.display_text =
                validate_display_value(&RECOVERY_QUANTITY.to_string(), max_value);
        }
        validate_value(&self.display_text, max_value)
    }

    /// Dispatch an event. Returns the committed value, if the event commits.
    pub fn apply(&mut self, event: &QuantityEvent, max_value: u32) -> Option<u32> {
        match event {
            QuantityEvent::Select(raw) => Some(self.select(raw, max_value)),
            QuantityEvent::Input(raw) => {
                self.input(raw, max_value);
                None
            }
            QuantityEvent::Focus => {
                self.focus();
                None
            }
            QuantityEvent::Blur => Some(self.blur(max_value)),
        }
    }

    // The only modality transition: Enumerated -> FreeText.
    fn promote(&mut self) {
        self.modality = Modality::FreeText;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn values(options: &[PickerOption]) -> Vec<u32> {
        options.iter().map(|o| o.value).collect()
    }

    #[test]
    fn test_normalize_clamps_to_ceiling() {
        assert_eq!(normalize(3, 20), 3);
        assert_eq!(normalize(20, 20), 20);
        assert_eq!(normalize(50, 20), 20);
        assert_eq!(normalize(4, 0), 0);
    }

    #[test]
    fn test_normalize_signed() {
        assert_eq!(normalize_signed(-4, 20), 0);
        assert_eq!(normalize_signed(i64::MAX, 20), 20);
        assert_eq!(normalize_signed(7, 20), 7);
    }

    #[test]
    fn test_parse_integer_leading_digits() {
        assert_eq!(parse_integer("12"), Some(12));
        assert_eq!(parse_integer("  12abc"), Some(12));
        assert_eq!(parse_integer("3.9"), Some(3));
        assert_eq!(parse_integer("-5"), Some(-5));
        assert_eq!(parse_integer("+5"), Some(5));
        assert_eq!(parse_integer("abc"), None);
        assert_eq!(parse_integer(""), None);
        assert_eq!(parse_integer("-"), None);
        assert_eq!(parse_integer("99999999999999999999999"), Some(i64::MAX));
    }

    #[test]
    fn test_validate_value_recovers_to_one() {
        assert_eq!(validate_value("abc", 20), 1);
        assert_eq!(validate_value("", 20), 1);
        assert_eq!(validate_value("abc", 0), 0);
    }

    #[test]
    fn test_validate_value_clamps() {
        assert_eq!(validate_value("7", 20), 7);
        assert_eq!(validate_value("70", 20), 20);
        assert_eq!(validate_value("-3", 20), 0);
    }

    #[test]
    fn test_validate_display_value() {
        assert_eq!(validate_display_value("abc", 20), "");
        assert_eq!(validate_display_value("-3", 20), "");
        assert_eq!(validate_display_value("", 20), "");
        assert_eq!(validate_display_value("007", 20), "7");
        assert_eq!(validate_display_value("70", 20), "20");
        assert_eq!(validate_display_value("-0", 20), "0");
    }

    #[test]
    fn test_picker_options_small_ceiling() {
        let options = picker_options(5);
        assert_eq!(values(&options), vec![0, 1, 2, 3, 4, 5]);
        assert!(options.iter().all(|o| o.label != "10+"));
    }

    #[test]
    fn test_picker_options_large_ceiling() {
        let options = picker_options(15);
        assert_eq!(values(&options), vec![0, 1, 2, 3, 4, 5, 6, 7, 8, 9, 10]);
        assert_eq!(options.last().unwrap().label, "10+");
    }

    #[test]
    fn test_picker_options_zero_ceiling() {
        assert_eq!(picker_options(0), vec![PickerOption::new(0, "0")]);
    }

    #[test]
    fn test_mount_low_value() {
        let state = QuantityState::mount(3, 20);
        assert_eq!(state.modality(), Modality::Enumerated);
        assert_eq!(state.display_text(), "3");
        assert!(!state.is_focused());
    }

    #[test]
    fn test_mount_above_ceiling() {
        let mut state = QuantityState::mount(50, 20);
        assert_eq!(state.modality(), Modality::FreeText);
        assert_eq!(state.display_text(), "20");
        assert!(!state.reconcile(50, 20));
        assert_eq!(state.display_text(), "20");
    }

    #[test]
    fn test_select_ten_plus_switches_to_free_text() {
        let mut state = QuantityState::mount(3, 20);
        let committed = state.select("10", 20);
        assert_eq!(committed, 10);
        assert_eq!(state.modality(), Modality::FreeText);
        assert_eq!(state.display_text(), "10");
    }

    #[test]
    fn test_select_low_value_keeps_picker() {
        let mut state = QuantityState::mount(3, 20);
        assert_eq!(state.select("5", 20), 5);
        assert_eq!(state.modality(), Modality::Enumerated);
        assert_eq!(state.display_text(), "5");
    }

    #[test]
    fn test_typing_garbage_then_blur_commits_one() {
        let mut state = QuantityState::mount(3, 20);
        state.focus();
        state.input("abc", 20);
        assert_eq!(state.display_text(), "");
        assert_eq!(state.blur(20), 1);
        assert_eq!(state.display_text(), "1");
        assert!(!state.is_focused());
    }

    #[test]
    fn test_blur_empty_with_zero_ceiling() {
        let mut state = QuantityState::mount(0, 0);
        state.focus();
        state.input("", 0);
        assert_eq!(state.blur(0), 0);
        assert_eq!(state.display_text(), "0");
    }

    #[test]
    fn test_input_is_bounded() {
        let mut state = QuantityState::mount(12, 9_999_999);
        state.input("1234567", 9_999_999);
        assert_eq!(state.display_text(), "12345");
    }

    #[test]
    fn test_input_clamps_display() {
        let mut state = QuantityState::mount(12, 20);
        state.input("45", 20);
        assert_eq!(state.display_text(), "20");
    }

    #[test]
    fn test_focus_suppresses_reconcile() {
        let mut state = QuantityState::mount(12, 20);
        state.focus();
        state.input("7", 20);
        assert!(!state.reconcile(12, 20));
        assert_eq!(state.display_text(), "7");
    }

    #[test]
    fn test_reconcile_follows_external_change() {
        let mut state = QuantityState::mount(3, 20);
        assert!(state.reconcile(0, 20));
        assert_eq!(state.display_text(), "0");
        assert_eq!(state.modality(), Modality::Enumerated);

        assert!(state.reconcile(14, 20));
        assert_eq!(state.display_text(), "14");
        assert_eq!(state.modality(), Modality::FreeText);
    }

    #[test]
    fn test_reconcile_clamps_when_ceiling_drops() {
        let mut state = QuantityState::mount(8, 20);
        assert!(state.reconcile(8, 4));
        assert_eq!(state.display_text(), "4");
    }

    #[test]
    fn test_reconcile_clamps_free_text_when_ceiling_drops() {
        let mut state = QuantityState::mount(15, 20);
        assert!(state.reconcile(15, 12));
        assert_eq!(state.display_text(), "12");
        assert_eq!(state.modality(), Modality::FreeText);
        assert!(!state.reconcile(15, 12));
    }

    #[test]
    fn test_input_reports_rewrite() {
        let mut state = QuantityState::mount(20, 20);
        let before = state.clone();
        assert!(state.input("200", 20));
        assert_eq!(state, before);
        assert_eq!(state.display_text(), "20");

        let mut state = QuantityState::mount(12, 20);
        assert!(state.input("12a", 20));
        assert_eq!(state.display_text(), "12");
        assert!(!state.input("13", 20));
    }

    #[test]
    fn test_release_focus_resumes_reconcile() {
        let mut state = QuantityState::mount(12, 20);
        state.focus();
        state.input("7", 20);
        assert!(!state.reconcile(5, 20));

        state.release_focus();
        assert!(!state.is_focused());
        assert!(state.reconcile(5, 20));
        assert_eq!(state.display_text(), "5");
        assert!(state.reconcile(12, 20));
        assert_eq!(state.display_text(), "12");
    }

    #[test]
    fn test_reconcile_is_idempotent() {
        let mut state = QuantityState::mount(3, 20);
        state.reconcile(17, 20);
        let snapshot = state.clone();
        for _ in 0..5 {
            assert!(!state.reconcile(17, 20));
            assert_eq!(state, snapshot);
        }
    }

    #[test]
    fn test_modality_never_reverts() {
        let mut state = QuantityState::mount(3, 20);
        state.select("10", 20);
        state.reconcile(2, 20);
        assert_eq!(state.modality(), Modality::FreeText);
        assert_eq!(state.display_text(), "2");
        state.select("1", 20);
        assert_eq!(state.modality(), Modality::FreeText);
    }

    #[test]
    fn test_apply_dispatch() {
        let mut state = QuantityState::mount(3, 20);
        assert_eq!(state.apply(&QuantityEvent::Focus, 20), None);
        assert_eq!(state.apply(&QuantityEvent::Input("15".into()), 20), None);
        assert_eq!(state.apply(&QuantityEvent::Blur, 20), Some(15));
        assert_eq!(state.apply(&QuantityEvent::Select("2".into()), 20), Some(2));
    }
}
