//! Focusable controls of the active demo, in focus order.

/// Identifies a control across all demos.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldId {
    DiceCount,
    SameValues,
    SharedMax,
    DieMax(usize),
    Roll,
    Click,
    WizardInput,
    WizardNext,
    ActivityName,
    ActivityDuration,
    AddActivity,
    ClearActivities,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldKind {
    /// Editable text; holds the raw text as typed.
    Text(String),
    Toggle(bool),
    Button,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormField {
    pub id: FieldId,
    pub label: String,
    pub kind: FieldKind,
}

impl FormField {
    pub fn text(id: FieldId, label: impl Into<String>, value: &str) -> Self {
        Self {
            id,
            label: label.into(),
            kind: FieldKind::Text(value.to_string()),
        }
    }

    pub fn toggle(id: FieldId, label: impl Into<String>, on: bool) -> Self {
        Self {
            id,
            label: label.into(),
            kind: FieldKind::Toggle(on),
        }
    }

    pub fn button(id: FieldId, label: impl Into<String>) -> Self {
        Self {
            id,
            label: label.into(),
            kind: FieldKind::Button,
        }
    }
}

/// Move a focus index by `delta` over `len` fields, wrapping.
pub fn step_focus(focus: usize, delta: isize, len: usize) -> usize {
    if len == 0 {
        return 0;
    }
    (focus as isize + delta).rem_euclid(len as isize) as usize
}
