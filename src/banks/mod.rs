//! Bank product records and their category taxonomy.

pub mod bank;
pub mod category;

pub use bank::BankRecord;
pub use category::{BankCategory, CategoryFilter};
