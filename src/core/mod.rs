pub mod ack;
pub mod form;
