use crate::demos::wizard::intent::WizardIntent;
use crate::demos::wizard::state::{WizardScreen, WizardState};
use crate::ui::mvi::Reducer;

pub struct WizardReducer;

impl Reducer for WizardReducer {
    type State = WizardState;
    type Intent = WizardIntent;
    type Effects = ();

    fn reduce(state: Self::State, intent: Self::Intent, _: &mut ()) -> Self::State {
        match (state.screen, intent) {
            (WizardScreen::First, WizardIntent::EditFirst { text }) => WizardState {
                first: text,
                ..state
            },
            (WizardScreen::Second, WizardIntent::EditSecond { text }) => WizardState {
                second: text,
                ..state
            },
            (screen, WizardIntent::Next) => WizardState {
                screen: screen.next(),
                ..state
            },
            // Edits for a screen that is not showing
            _ => state,
        }
    }
}
