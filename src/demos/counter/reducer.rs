use crate::demos::counter::intent::CounterIntent;
use crate::demos::counter::state::ClickCounterState;
use crate::ui::mvi::Reducer;

pub struct CounterReducer;

impl Reducer for CounterReducer {
    type State = ClickCounterState;
    type Intent = CounterIntent;
    type Effects = ();

    fn reduce(state: Self::State, intent: Self::Intent, _: &mut ()) -> Self::State {
        match intent {
            CounterIntent::Increment => state.incremented(),
        }
    }
}
