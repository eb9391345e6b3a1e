mod buttons;
mod pointer;

pub use buttons::{wire_accept_button, wire_decline_button};
pub use pointer::wire_pointer_tracking;
