use crate::models::{Customer, Transaction};
use crate::services::api::RecordsApi;
use log::{error, info};
use std::sync::mpsc::Sender;
use tokio::task::JoinHandle;

/// Messages sent from the fetch tasks to the UI thread.
#[derive(Debug)]
pub enum FetchEvent {
    CustomersLoaded(Vec<Customer>),
    TransactionsLoaded(Vec<Transaction>),
}

/// Issues the two collection reads as independent tasks. Each task sends one
/// event on success; on failure it logs and sends nothing, so the UI keeps
/// whatever it already had (initially an empty collection). One endpoint
/// failing never blocks the other.
pub fn spawn_fetches<A>(api: A, tx: Sender<FetchEvent>) -> Vec<JoinHandle<()>>
where
    A: RecordsApi + Clone + Send + Sync + 'static,
{
    let customers_api = api.clone();
    let customers_tx = tx.clone();
    let customers_task = tokio::spawn(async move {
        match customers_api.fetch_customers().await {
            Ok(customers) => {
                info!("Loaded {} customers", customers.len());
                let _ = customers_tx.send(FetchEvent::CustomersLoaded(customers));
            }
            Err(e) => error!("Error fetching customer data: {}", e),
        }
    });

    let transactions_task = tokio::spawn(async move {
        match api.fetch_transactions().await {
            Ok(transactions) => {
                info!("Loaded {} transactions", transactions.len());
                let _ = tx.send(FetchEvent::TransactionsLoaded(transactions));
            }
            Err(e) => error!("Error fetching transaction data: {}", e),
        }
    });

    vec![customers_task, transactions_task]
}
