pub mod agenda;
pub mod confirmation;
