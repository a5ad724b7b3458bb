//! CareerLab domain crate: the registration wizard, coding lab, resume
//! builder, and role dashboards behind the career-preparation platform.
//!
//! Everything "asynchronous" or "intelligent" here is an explicit
//! simulation. Timers are the poll-driven machine in [`runtime::task`],
//! wall time only enters through [`runtime::Clock`], and every random
//! outcome draws from [`runtime::RandomSource`] so tests stay
//! deterministic.

pub mod config;
pub mod directory;
pub mod error;
pub mod navigation;
pub mod notify;
pub mod runtime;
pub mod session;
pub mod telemetry;
pub mod workflows;
