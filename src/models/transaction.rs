use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Transaction {
    pub customer_id: u64,
    pub date: NaiveDate,
    pub amount: f64,
}
