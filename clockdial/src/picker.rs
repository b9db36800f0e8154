//! Host integration for the time dial.
//!
//! ## Usage
//!
//! Build a [`TimePickerArgs`] with the initial value and the confirm/dismiss
//! callbacks, then [`TimePickerSession::open`] it when the selector becomes
//! visible. Forward user input to the session's methods; the host's
//! input-routing layer delivers outside-clicks as an explicit
//! [`dismiss`](TimePickerSession::dismiss). The canonical value leaves the
//! component exactly once, through the confirm callback.

use clockdial_foundation::{Callback, CallbackWith, State};
use derive_setters::Setters;
use tracing::debug;

use crate::{
    face::FaceLayout,
    selector::{SelectionUnit, TimeSelectorController},
    time_value::{DayPeriod, TimeValue},
};

/// Configuration options for a [`TimePickerSession`].
///
/// Initial-state fields are applied only when the session owns the
/// controller; with an external [`state`](TimePickerArgs::state) the host is
/// responsible for seeding.
#[derive(Clone, PartialEq, Setters)]
pub struct TimePickerArgs {
    /// Value the dial opens on; `None` seeds midnight.
    #[setters(strip_option)]
    pub initial: Option<TimeValue>,
    /// Whether the caller signals that a minute was already chosen, which
    /// opens the dial on the minute ring instead of the hour ring.
    pub minute_chosen: bool,
    /// Callback invoked with the canonical value on confirm.
    #[setters(skip)]
    pub on_confirm: CallbackWith<TimeValue>,
    /// Callback invoked on dismissal; no value is passed.
    #[setters(skip)]
    pub on_dismiss: Callback,
    /// Optional external controller state.
    ///
    /// When this is `None`, the session creates and owns its controller.
    #[setters(skip)]
    pub state: Option<State<TimeSelectorController>>,
}

impl Default for TimePickerArgs {
    fn default() -> Self {
        Self {
            initial: None,
            minute_chosen: false,
            on_confirm: CallbackWith::default(),
            on_dismiss: Callback::default(),
            state: None,
        }
    }
}

impl TimePickerArgs {
    /// Sets the confirm callback.
    pub fn on_confirm<F>(mut self, f: F) -> Self
    where
        F: Fn(TimeValue) + Send + Sync + 'static,
    {
        self.on_confirm = CallbackWith::new(f);
        self
    }

    /// Sets the confirm callback from a shared handle.
    pub fn on_confirm_shared(mut self, f: impl Into<CallbackWith<TimeValue>>) -> Self {
        self.on_confirm = f.into();
        self
    }

    /// Sets the dismiss callback.
    pub fn on_dismiss<F>(mut self, f: F) -> Self
    where
        F: Fn() + Send + Sync + 'static,
    {
        self.on_dismiss = Callback::new(f);
        self
    }

    /// Sets the dismiss callback from a shared handle.
    pub fn on_dismiss_shared(mut self, f: impl Into<Callback>) -> Self {
        self.on_dismiss = f.into();
        self
    }

    /// Sets an external controller state.
    pub fn state(mut self, state: State<TimeSelectorController>) -> Self {
        self.state = Some(state);
        self
    }
}

/// One opening of the time selector.
///
/// The session forwards user input to its [`TimeSelectorController`] and
/// enforces the terminal contract: [`confirm`](Self::confirm) emits the
/// canonical value exactly once and closes, [`dismiss`](Self::dismiss)
/// closes emitting nothing, and every event delivered after close is a
/// no-op. There is no pending work to unwind on either path.
pub struct TimePickerSession {
    state: State<TimeSelectorController>,
    on_confirm: CallbackWith<TimeValue>,
    on_dismiss: Callback,
    closed: bool,
}

impl TimePickerSession {
    /// Opens a session from the given args.
    pub fn open(args: &TimePickerArgs) -> Self {
        let state = args.state.clone().unwrap_or_else(|| {
            State::new(TimeSelectorController::new(args.initial, args.minute_chosen))
        });
        Self {
            state,
            on_confirm: args.on_confirm.clone(),
            on_dismiss: args.on_dismiss.clone(),
            closed: false,
        }
    }

    /// Returns whether the session is still accepting input.
    pub fn is_open(&self) -> bool {
        !self.closed
    }

    /// Returns the shared controller handle.
    pub fn state(&self) -> State<TimeSelectorController> {
        self.state.clone()
    }

    /// Computes the face geometry for the current display state.
    pub fn face_layout(&self) -> FaceLayout {
        self.state.with(|controller| {
            FaceLayout::compute(
                controller.active_unit(),
                controller.display_hour(),
                controller.minute(),
            )
        })
    }

    /// Picks an hour numeral from the dial.
    pub fn select_hour_numeral(&mut self, hour: u8) {
        self.edit(|controller| controller.select_hour_numeral(hour));
    }

    /// Picks a minute value from the dial.
    pub fn select_minute_numeral(&mut self, minute: u8) {
        self.edit(|controller| controller.select_minute_numeral(minute));
    }

    /// Sets the AM/PM period.
    pub fn set_period(&mut self, period: DayPeriod) {
        self.edit(|controller| controller.set_period(period));
    }

    /// Moves editing to another unit.
    pub fn switch_unit(&mut self, unit: SelectionUnit) {
        self.edit(|controller| controller.switch_unit(unit));
    }

    /// Forwards a typed character; returns whether it was accepted.
    pub fn type_digit(&mut self, unit: SelectionUnit, ch: char) -> bool {
        if self.closed {
            return false;
        }
        self.state.with_mut(|controller| controller.type_digit(unit, ch))
    }

    /// Empties a unit's text buffer.
    pub fn clear_field(&mut self, unit: SelectionUnit) {
        self.edit(|controller| controller.clear_field(unit));
    }

    /// Marks a unit's field as being typed into.
    pub fn focus_field(&mut self, unit: SelectionUnit) {
        self.edit(|controller| controller.focus_field(unit));
    }

    /// Ends typing on a unit's field and settles its text.
    pub fn blur_field(&mut self, unit: SelectionUnit) {
        self.edit(|controller| controller.blur_field(unit));
    }

    /// Confirms the selection, emitting the canonical value and closing.
    pub fn confirm(&mut self) {
        if self.closed {
            return;
        }
        self.closed = true;
        let value = self.state.with(TimeSelectorController::committed_value);
        debug!(%value, "time selection confirmed");
        self.on_confirm.call(value);
    }

    /// Dismisses the selection, emitting nothing and closing.
    ///
    /// Outside-clicks land here too: the host maps a pointer-down outside
    /// the dial's hit region to this call.
    pub fn dismiss(&mut self) {
        if self.closed {
            return;
        }
        self.closed = true;
        debug!("time selection dismissed");
        self.on_dismiss.call();
    }

    fn edit(&mut self, f: impl FnOnce(&mut TimeSelectorController)) {
        if self.closed {
            return;
        }
        self.state.with_mut(f);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn recording_args() -> (TimePickerArgs, State<Vec<TimeValue>>, State<u32>) {
        let confirmed = State::new(Vec::new());
        let dismissed = State::new(0u32);
        let confirmed_in = confirmed.clone();
        let dismissed_in = dismissed.clone();
        let args = TimePickerArgs::default()
            .on_confirm(move |value| confirmed_in.with_mut(|log| log.push(value)))
            .on_dismiss(move || dismissed_in.with_mut(|count| *count += 1));
        (args, confirmed, dismissed)
    }

    #[test]
    fn test_open_then_confirm_round_trips() {
        for (hour, minute) in [(0, 0), (0, 5), (9, 41), (12, 0), (13, 30), (23, 59)] {
            let value = TimeValue::new(hour, minute).expect("in range");
            let (args, confirmed, _) = recording_args();
            let mut session = TimePickerSession::open(&args.initial(value));
            session.confirm();
            assert_eq!(confirmed.get(), vec![value]);
        }
    }

    #[test]
    fn test_end_to_end_selection() {
        let (args, confirmed, dismissed) = recording_args();
        let mut session = TimePickerSession::open(&args);

        // No prior value: the dial opens on midnight, hour ring active.
        session.state().with(|controller| {
            assert_eq!(controller.display_hour(), 12);
            assert_eq!(controller.period(), DayPeriod::Am);
            assert_eq!(controller.minute(), 0);
            assert_eq!(controller.active_unit(), SelectionUnit::Hour);
        });

        session.select_hour_numeral(7);
        session.set_period(DayPeriod::Pm);
        session.select_minute_numeral(45);
        session.confirm();

        assert_eq!(
            confirmed.get(),
            vec![TimeValue::new(19, 45).expect("in range")]
        );
        assert_eq!(dismissed.get(), 0);
    }

    #[test]
    fn test_dismiss_emits_no_value() {
        let (args, confirmed, dismissed) = recording_args();
        let mut session = TimePickerSession::open(&args);

        session.select_hour_numeral(3);
        session.set_period(DayPeriod::Pm);
        session.dismiss();

        assert!(confirmed.get().is_empty());
        assert_eq!(dismissed.get(), 1);
    }

    #[test]
    fn test_events_after_close_are_inert() {
        let (args, confirmed, dismissed) = recording_args();
        let mut session = TimePickerSession::open(&args);

        session.confirm();
        assert!(!session.is_open());

        // A second confirm, a dismiss, and further edits all do nothing.
        session.confirm();
        session.dismiss();
        session.select_hour_numeral(5);
        assert!(!session.type_digit(SelectionUnit::Minute, '1'));

        assert_eq!(confirmed.get(), vec![TimeValue::MIDNIGHT]);
        assert_eq!(dismissed.get(), 0);
        session
            .state()
            .with(|controller| assert_eq!(controller.display_hour(), 12));
    }

    #[test]
    fn test_external_state_is_shared_not_reseeded() {
        let controller = TimeSelectorController::new(
            Some(TimeValue::new(9, 30).expect("in range")),
            true,
        );
        let shared = State::new(controller);
        let (args, confirmed, _) = recording_args();
        let mut session = TimePickerSession::open(&args.state(shared.clone()));

        shared.with(|controller| assert_eq!(controller.active_unit(), SelectionUnit::Minute));
        session.select_minute_numeral(55);
        shared.with(|controller| assert_eq!(controller.minute(), 55));

        session.confirm();
        assert_eq!(confirmed.get(), vec![TimeValue::new(9, 55).expect("in range")]);
    }

    #[test]
    fn test_minute_chosen_flag_opens_minute_ring() {
        let args = TimePickerArgs::default()
            .initial(TimeValue::new(8, 15).expect("in range"))
            .minute_chosen(true);
        let session = TimePickerSession::open(&args);
        session
            .state()
            .with(|controller| assert_eq!(controller.active_unit(), SelectionUnit::Minute));
    }

    #[test]
    fn test_face_layout_tracks_controller() {
        let (args, _, _) = recording_args();
        let mut session = TimePickerSession::open(&args);

        let layout = session.face_layout();
        // Hour ring while picking hours.
        assert!(layout.numerals.iter().any(|n| n.label == "12"));

        session.select_hour_numeral(3);
        let layout = session.face_layout();
        // Picking an hour advances to the minute ring.
        assert!(layout.numerals.iter().any(|n| n.label == "55"));
        assert_eq!(layout.hour_hand_degrees, 0.0);
    }
}
