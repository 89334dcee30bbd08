//! Domain Layer
//!
//! Pure business logic: entities, planning services, and the ports the
//! infrastructure layer implements. Nothing in here performs I/O or talks
//! to a network.

pub mod entities;
pub mod ports;
pub mod services;
