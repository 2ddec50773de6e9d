//! Chairside - clinic portal client composition root
//!
//! Wires the infrastructure adapters into the application core and exposes
//! the portal facade that feature code talks to.

pub mod appointments;
pub mod portal;
pub mod routes;

pub use appointments::{Appointment, AppointmentsView, NewAppointment};
pub use portal::Portal;
