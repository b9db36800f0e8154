//! Analog clock-dial time selection core.
//!
//! This crate is the non-rendering half of an analog time picker: it owns the
//! canonical 24-hour value, the 12-hour AM/PM display state the user edits
//! while the dial is open, and the clock-face geometry a renderer needs to
//! draw numerals and hands. Drawing, layout, and event routing belong to the
//! embedding host.
//!
//! # Usage
//!
//! Open a [`picker::TimePickerSession`] with optional initial value and
//! confirm/dismiss callbacks, forward user input events to it, and receive
//! the committed [`time_value::TimeValue`] through the confirm callback.
//!
//! # Example
//!
//! ```
//! use clockdial::picker::{TimePickerArgs, TimePickerSession};
//! use clockdial::time_value::{DayPeriod, TimeValue};
//! use clockdial_foundation::State;
//!
//! let picked = State::new(None::<TimeValue>);
//! let picked_out = picked.clone();
//!
//! let args = TimePickerArgs::default()
//!     .on_confirm(move |value| picked_out.set(Some(value)));
//! let mut session = TimePickerSession::open(&args);
//!
//! session.select_hour_numeral(7);
//! session.set_period(DayPeriod::Pm);
//! session.select_minute_numeral(45);
//! session.confirm();
//!
//! assert_eq!(picked.get(), Some(TimeValue::new(19, 45).unwrap()));
//! ```
#![deny(missing_docs, clippy::unwrap_used)]

pub mod face;
pub mod picker;
pub mod selector;
pub mod time_value;
