//! Background services.

pub mod clicks;
