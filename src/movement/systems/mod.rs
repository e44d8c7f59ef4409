//! Movement domain: system modules for input and flight.

pub(crate) mod flight;
pub(crate) mod input;

pub(crate) use flight::apply_flight;
pub(crate) use input::read_press_input;
