//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped orchestration (window listeners, observers)
//! and delegates rendering details to `components`.

pub mod home;
