use crate::ui::mvi::UiState;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WizardScreen {
    #[default]
    First,
    Second,
    Summary,
}

impl WizardScreen {
    pub fn next(self) -> Self {
        match self {
            WizardScreen::First => WizardScreen::Second,
            WizardScreen::Second | WizardScreen::Summary => WizardScreen::Summary,
        }
    }

    pub fn number(self) -> u8 {
        match self {
            WizardScreen::First => 1,
            WizardScreen::Second => 2,
            WizardScreen::Summary => 3,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct WizardState {
    pub screen: WizardScreen,
    /// Typed on screen 1, shown on screens 2 and 3.
    pub first: String,
    /// Typed on screen 2, shown on screen 3.
    pub second: String,
}

impl UiState for WizardState {}
