mod customer;
mod transaction;

pub use customer::Customer;
pub use transaction::Transaction;
