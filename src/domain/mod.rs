pub mod commands;
pub mod loan;
pub mod value_objects;

pub use loan::{LoanPeriod, LoanRecord};
pub use value_objects::*;
