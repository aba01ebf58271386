use crate::config::Config;
use crate::demos::counter::{ClickCounterState, CounterIntent, CounterReducer};
use crate::demos::dice::{DiceSession, DiceSessionState};
use crate::demos::notice::NoticeBoard;
use crate::demos::tracker::{TrackerIntent, TrackerReducer, TrackerState};
use crate::demos::wizard::{WizardIntent, WizardReducer, WizardScreen, WizardState};
use crate::demos::DemoKind;
use crate::ui::form::{step_focus, FieldId, FieldKind, FormField};
use crate::ui::mvi::Reducer;
use crate::ui::toast::{ToastIntent, ToastReducer, ToastState};

/// Generic MVI dispatch: takes current state, runs reducer, stores result.
macro_rules! dispatch_mvi {
    ($self:expr, $field:ident, $reducer:ty, $intent:expr) => {
        $self.$field = <$reducer>::reduce(std::mem::take(&mut $self.$field), $intent, &mut ());
    };
}

/// Host state for all four demos plus focus and notices.
pub struct App {
    should_quit: bool,
    active: DemoKind,
    /// Index into `fields()` of the active demo.
    focus: usize,
    dice: DiceSession<NoticeBoard>,
    /// Raw text of the dice count field; may hold a rejected value.
    dice_count_text: String,
    counter: ClickCounterState,
    wizard: WizardState,
    tracker: TrackerState,
    notices: NoticeBoard,
    toasts: ToastState,
    toast_ticks: u32,
}

impl App {
    pub fn new(config: &Config) -> Self {
        let notices = NoticeBoard::new();
        let dice = DiceSession::new(notices.clone()).with_state(DiceSessionState::starting_with(
            config.dice.initial_count,
            &config.dice.initial_max,
        ));
        let dice_count_text = dice.state().dice_count.to_string();

        let mut app = Self {
            should_quit: false,
            active: config.ui.start_demo,
            focus: 0,
            dice,
            dice_count_text,
            counter: ClickCounterState::default(),
            wizard: WizardState::default(),
            tracker: TrackerState::default(),
            notices,
            toasts: ToastState::default(),
            toast_ticks: config.ui.toast_ticks,
        };
        app.collect_notices();
        app
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn request_quit(&mut self) {
        tracing::info!("quit requested");
        self.should_quit = true;
    }

    pub fn active(&self) -> DemoKind {
        self.active
    }

    pub fn focus(&self) -> usize {
        self.focus
    }

    pub fn dice(&self) -> &DiceSessionState {
        self.dice.state()
    }

    pub fn dice_count_text(&self) -> &str {
        &self.dice_count_text
    }

    pub fn counter(&self) -> &ClickCounterState {
        &self.counter
    }

    pub fn wizard(&self) -> &WizardState {
        &self.wizard
    }

    pub fn tracker(&self) -> &TrackerState {
        &self.tracker
    }

    pub fn toasts(&self) -> &ToastState {
        &self.toasts
    }

    pub fn select_demo(&mut self, demo: DemoKind) {
        if demo != self.active {
            tracing::debug!(from = ?self.active, to = ?demo, "switching demo");
            self.active = demo;
            self.focus = 0;
        }
    }

    pub fn cycle_demo(&mut self, offset: isize) {
        self.select_demo(self.active.cycled(offset));
    }

    pub fn move_focus(&mut self, delta: isize) {
        self.focus = step_focus(self.focus, delta, self.fields().len());
    }

    pub fn on_tick(&mut self) {
        if !self.toasts.is_empty() {
            dispatch_mvi!(self, toasts, ToastReducer, ToastIntent::Tick);
        }
    }

    pub fn dismiss_toasts(&mut self) {
        dispatch_mvi!(self, toasts, ToastReducer, ToastIntent::DismissAll);
    }

    /// Controls of the active demo in focus order.
    pub fn fields(&self) -> Vec<FormField> {
        match self.active {
            DemoKind::Dice => self.dice_fields(),
            DemoKind::Counter => vec![FormField::button(FieldId::Click, "Press me")],
            DemoKind::Wizard => match self.wizard.screen {
                WizardScreen::First => vec![
                    FormField::text(FieldId::WizardInput, "Screen 1", &self.wizard.first),
                    FormField::button(FieldId::WizardNext, "Move to screen 2"),
                ],
                WizardScreen::Second => vec![
                    FormField::text(FieldId::WizardInput, "Screen 2", &self.wizard.second),
                    FormField::button(FieldId::WizardNext, "Move to screen 3"),
                ],
                WizardScreen::Summary => Vec::new(),
            },
            DemoKind::Tracker => vec![
                FormField::text(FieldId::ActivityName, "Activity Name", &self.tracker.name_input),
                FormField::text(
                    FieldId::ActivityDuration,
                    "Duration (min, hh:mm, or hh.mm)",
                    &self.tracker.duration_input,
                ),
                FormField::button(FieldId::AddActivity, "Add"),
                FormField::button(FieldId::ClearActivities, "Rem."),
            ],
        }
    }

    fn dice_fields(&self) -> Vec<FormField> {
        let state = self.dice.state();
        let mut fields = vec![
            FormField::text(FieldId::DiceCount, "Number of Dice", &self.dice_count_text),
            FormField::toggle(
                FieldId::SameValues,
                "All dice have the same value",
                state.same_value_mode,
            ),
        ];
        if state.same_value_mode {
            fields.push(FormField::text(FieldId::SharedMax, "Maximum Value", &state.shared_max));
        } else {
            fields.extend(state.max_values.iter().enumerate().map(|(index, value)| {
                FormField::text(FieldId::DieMax(index), format!("Die {}", index + 1), value)
            }));
        }
        fields.push(FormField::button(FieldId::Roll, "Roll the Dice"));
        fields
    }

    pub fn focused_field(&self) -> Option<FormField> {
        self.fields().into_iter().nth(self.focus)
    }

    /// Append a typed character to the focused text field.
    pub fn insert_char(&mut self, ch: char) {
        if let Some(FormField {
            id,
            kind: FieldKind::Text(mut value),
            ..
        }) = self.focused_field()
        {
            value.push(ch);
            self.apply_text(id, value);
        }
    }

    pub fn backspace(&mut self) {
        if let Some(FormField {
            id,
            kind: FieldKind::Text(mut value),
            ..
        }) = self.focused_field()
        {
            if value.pop().is_some() {
                self.apply_text(id, value);
            }
        }
    }

    /// Press the focused button or flip the focused toggle.
    pub fn activate(&mut self) {
        let Some(field) = self.focused_field() else {
            return;
        };
        match field.kind {
            FieldKind::Button => self.press(field.id),
            FieldKind::Toggle(on) => self.toggle(field.id, !on),
            FieldKind::Text(_) => {}
        }
    }

    /// True when printable keys should go to a text field rather than
    /// acting as shortcuts.
    pub fn is_editing_text(&self) -> bool {
        matches!(
            self.focused_field(),
            Some(FormField {
                kind: FieldKind::Text(_),
                ..
            })
        )
    }

    fn apply_text(&mut self, id: FieldId, text: String) {
        match id {
            FieldId::DiceCount => {
                self.dice.set_dice_count(&text);
                self.dice_count_text = text;
            }
            FieldId::SharedMax => self.dice.set_shared_maximum(&text),
            FieldId::DieMax(index) => self.dice.set_per_die_maximum(index, &text),
            FieldId::WizardInput => {
                let intent = match self.wizard.screen {
                    WizardScreen::First => WizardIntent::EditFirst { text },
                    _ => WizardIntent::EditSecond { text },
                };
                dispatch_mvi!(self, wizard, WizardReducer, intent);
            }
            FieldId::ActivityName => self.dispatch_tracker(TrackerIntent::EditName { text }),
            FieldId::ActivityDuration => {
                self.dispatch_tracker(TrackerIntent::EditDuration { text })
            }
            other => tracing::warn!(field = ?other, "text edit on a non-text field"),
        }
        self.after_dispatch();
    }

    fn press(&mut self, id: FieldId) {
        match id {
            FieldId::Roll => {
                self.dice.roll();
            }
            FieldId::Click => {
                dispatch_mvi!(self, counter, CounterReducer, CounterIntent::Increment);
            }
            FieldId::WizardNext => {
                dispatch_mvi!(self, wizard, WizardReducer, WizardIntent::Next);
                self.focus = 0;
            }
            FieldId::AddActivity => self.dispatch_tracker(TrackerIntent::Add),
            FieldId::ClearActivities => self.dispatch_tracker(TrackerIntent::Clear),
            other => tracing::warn!(field = ?other, "press on a non-button field"),
        }
        self.after_dispatch();
    }

    fn toggle(&mut self, id: FieldId, on: bool) {
        if id == FieldId::SameValues {
            self.dice.toggle_same_value_mode(on);
        }
        self.after_dispatch();
    }

    fn dispatch_tracker(&mut self, intent: TrackerIntent) {
        let mut sink = self.notices.clone();
        self.tracker = TrackerReducer::reduce(std::mem::take(&mut self.tracker), intent, &mut sink);
    }

    /// Fields may have appeared or vanished (count change, mode toggle,
    /// screen change); keep focus in range and surface any notices.
    fn after_dispatch(&mut self) {
        let len = self.fields().len();
        if self.focus >= len {
            self.focus = len.saturating_sub(1);
        }
        self.collect_notices();
    }

    fn collect_notices(&mut self) {
        for message in self.notices.drain() {
            let ticks = self.toast_ticks;
            dispatch_mvi!(self, toasts, ToastReducer, ToastIntent::Push { message, ticks });
        }
    }
}
