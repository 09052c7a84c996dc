pub mod agenda;
pub mod appointment;
pub mod confirmation;
