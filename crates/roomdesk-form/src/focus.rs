//! Form controls, key handling and value binding.
//!
//! A form is laid out as an ordered list of [`Control`]s. Pressing Enter in
//! a control moves focus to the next input or button instead of submitting
//! the form; [`bind`] pairs each data control with its value and error.

use tracing::debug;

use crate::value::{Errors, FieldValue, Values};

/// What kind of element a control is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ControlKind {
    /// Text, email, password, number or date input.
    Input,
    /// Select, checkbox group, counter or any other data control that does
    /// not take keyboard focus.
    Field,
    /// Plain button.
    Button,
    /// Submit button.
    Submit,
}

impl ControlKind {
    /// Inputs and buttons take focus on Enter.
    pub fn is_focusable(self) -> bool {
        matches!(self, ControlKind::Input | ControlKind::Button | ControlKind::Submit)
    }

    /// Buttons carry no value and are never bound.
    pub fn is_bindable(self) -> bool {
        matches!(self, ControlKind::Input | ControlKind::Field)
    }
}

/// One control in a form, in layout order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Control {
    /// Field name for data controls, a label for buttons.
    pub name: String,
    /// Element kind.
    pub kind: ControlKind,
}

impl Control {
    /// A control of any kind.
    pub fn new(name: impl Into<String>, kind: ControlKind) -> Self {
        Self {
            name: name.into(),
            kind,
        }
    }

    /// A focusable input.
    pub fn input(name: impl Into<String>) -> Self {
        Self::new(name, ControlKind::Input)
    }

    /// A data control that Enter skips.
    pub fn field(name: impl Into<String>) -> Self {
        Self::new(name, ControlKind::Field)
    }

    /// A plain button.
    pub fn button(name: impl Into<String>) -> Self {
        Self::new(name, ControlKind::Button)
    }

    /// The submit button.
    pub fn submit(name: impl Into<String>) -> Self {
        Self::new(name, ControlKind::Submit)
    }
}

/// A key pressed on a form control.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    /// Return or Enter.
    Enter,
    /// Tab, left to the platform's own focus handling.
    Tab,
    /// Escape.
    Escape,
    /// Any printable character.
    Char(char),
}

/// A key press and the control it happened in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyEvent {
    /// The key pressed.
    pub key: Key,
    /// Name of the control that had focus.
    pub target: String,
}

impl KeyEvent {
    /// `key` pressed in `target`.
    pub fn new(key: Key, target: impl Into<String>) -> Self {
        Self {
            key,
            target: target.into(),
        }
    }

    /// Enter pressed in `target`.
    pub fn enter(target: impl Into<String>) -> Self {
        Self::new(Key::Enter, target)
    }
}

/// What the caller should do with a key press.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct KeyOutcome {
    /// Suppress the browser default (form submission on Enter).
    pub prevent_default: bool,
    /// Control to focus next, if focus moves.
    pub focus: Option<String>,
}

impl KeyOutcome {
    /// Let the key through untouched.
    pub fn pass_through() -> Self {
        Self::default()
    }
}

/// Handle a key press in a form laid out as `controls`.
///
/// Enter never submits: it is suppressed and focus moves to the next
/// focusable control after the target. On the last focusable control, or
/// when the target is not a focusable control, focus stays where it is.
/// Other keys pass through.
pub fn advance(event: &KeyEvent, controls: &[Control]) -> KeyOutcome {
    if event.key != Key::Enter {
        return KeyOutcome::pass_through();
    }

    let mut focusable = controls.iter().filter(|c| c.kind.is_focusable());
    let focus = focusable
        .position(|c| c.name == event.target)
        .and_then(|_| focusable.next())
        .map(|c| c.name.clone());
    debug!(from = %event.target, to = ?focus, "enter advances focus");

    KeyOutcome {
        prevent_default: true,
        focus,
    }
}

/// A data control with the state it should render.
#[derive(Debug, Clone, PartialEq)]
pub struct BoundControl<'a> {
    /// Field name.
    pub name: &'a str,
    /// Element kind, always [`ControlKind::Input`] or [`ControlKind::Field`].
    pub kind: ControlKind,
    /// Current value, [`FieldValue::Null`] if the field has none.
    pub value: &'a FieldValue,
    /// Error message to show under the control.
    pub error: Option<&'a str>,
}

static EMPTY: FieldValue = FieldValue::Null;

/// Pair every bindable control with its value and error.
///
/// Buttons are skipped. A control with no value is bound to
/// [`FieldValue::Null`].
pub fn bind<'a>(controls: &'a [Control], values: &'a Values, errors: &'a Errors) -> Vec<BoundControl<'a>> {
    controls
        .iter()
        .filter(|c| c.kind.is_bindable())
        .map(|c| BoundControl {
            name: &c.name,
            kind: c.kind,
            value: values.get(&c.name).unwrap_or(&EMPTY),
            error: errors.get(&c.name).map(String::as_str),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn booking_form() -> Vec<Control> {
        vec![
            Control::input("arrival"),
            Control::input("departure"),
            Control::field("guests"),
            Control::button("toggle-breakfast"),
            Control::input("phone"),
            Control::submit("book"),
        ]
    }

    #[test]
    fn enter_moves_to_next_focusable() {
        let form = booking_form();
        let outcome = advance(&KeyEvent::enter("arrival"), &form);
        assert!(outcome.prevent_default);
        assert_eq!(outcome.focus.as_deref(), Some("departure"));

        // non-focusable fields are skipped
        let outcome = advance(&KeyEvent::enter("departure"), &form);
        assert_eq!(outcome.focus.as_deref(), Some("toggle-breakfast"));

        let outcome = advance(&KeyEvent::enter("phone"), &form);
        assert_eq!(outcome.focus.as_deref(), Some("book"));
    }

    #[test]
    fn enter_on_last_control_stays_put() {
        let outcome = advance(&KeyEvent::enter("book"), &booking_form());
        assert!(outcome.prevent_default);
        assert_eq!(outcome.focus, None);
    }

    #[test]
    fn enter_on_unknown_target_stays_put() {
        let outcome = advance(&KeyEvent::enter("guests"), &booking_form());
        assert!(outcome.prevent_default);
        assert_eq!(outcome.focus, None);
    }

    #[test]
    fn other_keys_pass_through() {
        for key in [Key::Tab, Key::Escape, Key::Char('a')] {
            let outcome = advance(&KeyEvent::new(key, "arrival"), &booking_form());
            assert_eq!(outcome, KeyOutcome::pass_through());
        }
    }

    #[test]
    fn bind_skips_buttons() {
        let values = Values::new().with("arrival", "2024-05-01").with("guests", 2);
        let mut errors = Errors::new();
        errors.insert("phone".into(), "Phone is required".into());

        let form = booking_form();
        let bound = bind(&form, &values, &errors);
        let names: Vec<_> = bound.iter().map(|b| b.name).collect();
        assert_eq!(names, vec!["arrival", "departure", "guests", "phone"]);

        assert_eq!(bound[0].value, &FieldValue::from("2024-05-01"));
        assert!(bound[1].value.is_null());
        assert_eq!(bound[3].error, Some("Phone is required"));
        assert_eq!(bound[0].error, None);
    }
}
