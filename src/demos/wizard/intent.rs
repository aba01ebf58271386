use crate::ui::mvi::Intent;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WizardIntent {
    EditFirst { text: String },
    EditSecond { text: String },
    Next,
}

impl Intent for WizardIntent {}
