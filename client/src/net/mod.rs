//! Outbound requests.
//!
//! SYSTEM CONTEXT
//! ==============
//! `appointment` owns the booking request shape and the gateway that
//! delivers it. The page has no backend, so delivery is simulated.

pub mod appointment;
