use crate::fetcher::FetchEvent;
use crate::models::{Customer, Transaction};
use crate::utils::helpers::format_amount;
use chrono::NaiveDate;
use ratatui::widgets::TableState;

/// One rendered table row: a customer plus the sum of their transactions.
#[derive(Debug, Clone, PartialEq)]
pub struct CustomerRow {
    pub id: u64,
    pub name: String,
    pub total_amount: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    NameFilter,
    AmountFilter,
    Table,
}

pub struct AppState {
    pub customers: Vec<Customer>,
    pub transactions: Vec<Transaction>,
    pub name_filter: String,
    pub amount_filter: String,
    pub selected: Option<Customer>,
    pub rows: Vec<CustomerRow>,
    pub focus: Focus,
    pub table_state: TableState,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            customers: Vec::new(),
            transactions: Vec::new(),
            name_filter: String::new(),
            amount_filter: String::new(),
            selected: None,
            rows: Vec::new(),
            focus: Focus::NameFilter,
            table_state: TableState::default(),
        }
    }
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    /// A fetch completion replaces the corresponding collection wholesale.
    pub fn apply_event(&mut self, event: FetchEvent) {
        match event {
            FetchEvent::CustomersLoaded(customers) => self.customers = customers,
            FetchEvent::TransactionsLoaded(transactions) => self.transactions = transactions,
        }
        self.refresh();
    }

    /// Recomputes the filtered rows. Called after every change to the source
    /// collections or either filter; the table highlight is clamped to the
    /// new row count.
    pub fn refresh(&mut self) {
        self.rows = filter_customers(
            &self.customers,
            &self.transactions,
            &self.name_filter,
            &self.amount_filter,
        );

        if self.rows.is_empty() {
            self.table_state.select(None);
        } else {
            let index = self.table_state.selected().unwrap_or(0);
            self.table_state.select(Some(index.min(self.rows.len() - 1)));
        }
    }

    pub fn focus_next(&mut self) {
        self.focus = match self.focus {
            Focus::NameFilter => Focus::AmountFilter,
            Focus::AmountFilter => Focus::Table,
            Focus::Table => Focus::NameFilter,
        };
    }

    pub fn push_filter_char(&mut self, c: char) {
        match self.focus {
            Focus::NameFilter => self.name_filter.push(c),
            Focus::AmountFilter => self.amount_filter.push(c),
            Focus::Table => return,
        }
        self.refresh();
    }

    pub fn pop_filter_char(&mut self) {
        match self.focus {
            Focus::NameFilter => {
                self.name_filter.pop();
            }
            Focus::AmountFilter => {
                self.amount_filter.pop();
            }
            Focus::Table => return,
        }
        self.refresh();
    }

    pub fn select_next(&mut self) {
        if self.rows.is_empty() {
            return;
        }
        let index = match self.table_state.selected() {
            Some(i) => (i + 1).min(self.rows.len() - 1),
            None => 0,
        };
        self.table_state.select(Some(index));
    }

    pub fn select_previous(&mut self) {
        if self.rows.is_empty() {
            return;
        }
        let index = match self.table_state.selected() {
            Some(i) => i.saturating_sub(1),
            None => 0,
        };
        self.table_state.select(Some(index));
    }

    /// Stores the highlighted customer's full record as the selection,
    /// replacing any prior one. The chart scopes itself to this record.
    pub fn confirm_selection(&mut self) {
        let Some(index) = self.table_state.selected() else {
            return;
        };
        let Some(row) = self.rows.get(index) else {
            return;
        };
        self.selected = self.customers.iter().find(|c| c.id == row.id).cloned();
    }
}

/// Sum of `amount` over transactions attributed to `customer_id`. Zero when
/// none match; transactions referencing unknown customers simply never match.
pub fn total_amount(transactions: &[Transaction], customer_id: u64) -> f64 {
    transactions
        .iter()
        .filter(|t| t.customer_id == customer_id)
        .map(|t| t.amount)
        .sum()
}

/// The filtered view: a customer passes iff the lowercased name contains the
/// lowercased name filter AND the string form of the transaction total
/// contains the amount filter. Substring match on the string form is the
/// observed behavior being reproduced ("10" matches totals 10 and 100), not
/// a numeric comparison. Empty filters match everything.
pub fn filter_customers(
    customers: &[Customer],
    transactions: &[Transaction],
    name_filter: &str,
    amount_filter: &str,
) -> Vec<CustomerRow> {
    let name_filter = name_filter.to_lowercase();
    customers
        .iter()
        .filter_map(|customer| {
            let total = total_amount(transactions, customer.id);
            let name_match = customer.name.to_lowercase().contains(&name_filter);
            let amount_match = format_amount(total).contains(amount_filter);
            (name_match && amount_match).then(|| CustomerRow {
                id: customer.id,
                name: customer.name.clone(),
                total_amount: total,
            })
        })
        .collect()
}

/// Chart projection for the selected customer: (date, amount) per matching
/// transaction, in original collection order. No date sort.
pub fn chart_points(transactions: &[Transaction], customer_id: u64) -> Vec<(NaiveDate, f64)> {
    transactions
        .iter()
        .filter(|t| t.customer_id == customer_id)
        .map(|t| (t.date, t.amount))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(s: &str) -> NaiveDate {
        s.parse().unwrap()
    }

    fn sample_customers() -> Vec<Customer> {
        vec![
            Customer {
                id: 1,
                name: "Alice".to_string(),
            },
            Customer {
                id: 2,
                name: "Bob".to_string(),
            },
        ]
    }

    fn sample_transactions() -> Vec<Transaction> {
        vec![
            Transaction {
                customer_id: 1,
                date: date("2024-01-01"),
                amount: 50.0,
            },
            Transaction {
                customer_id: 1,
                date: date("2024-01-02"),
                amount: 60.0,
            },
            Transaction {
                customer_id: 2,
                date: date("2024-01-01"),
                amount: 5.0,
            },
        ]
    }

    #[test]
    fn total_amount_sums_matching_transactions() {
        let transactions = sample_transactions();
        assert_eq!(total_amount(&transactions, 1), 110.0);
        assert_eq!(total_amount(&transactions, 2), 5.0);
    }

    #[test]
    fn total_amount_is_zero_without_transactions() {
        assert_eq!(total_amount(&[], 1), 0.0);
        assert_eq!(total_amount(&sample_transactions(), 7), 0.0);
    }

    #[test]
    fn empty_filters_match_everything() {
        let rows = filter_customers(&sample_customers(), &sample_transactions(), "", "");
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].total_amount, 110.0);
        assert_eq!(rows[1].total_amount, 5.0);
    }

    #[test]
    fn name_filter_is_a_case_insensitive_substring_match() {
        let rows = filter_customers(&sample_customers(), &sample_transactions(), "ali", "");
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].name, "Alice");
        assert_eq!(rows[0].total_amount, 110.0);

        let rows = filter_customers(&sample_customers(), &sample_transactions(), "ALI", "");
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].name, "Alice");
    }

    #[test]
    fn amount_filter_matches_the_string_form_of_the_total() {
        // Bob's total is "5"; Alice's "110" does not contain "5".
        let rows = filter_customers(&sample_customers(), &sample_transactions(), "", "5");
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].name, "Bob");

        // "1" matches "110" as a substring, not numerically.
        let rows = filter_customers(&sample_customers(), &sample_transactions(), "", "1");
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].name, "Alice");
    }

    #[test]
    fn filters_are_conjunctive() {
        let rows = filter_customers(&sample_customers(), &sample_transactions(), "bob", "110");
        assert!(rows.is_empty());
    }

    #[test]
    fn customer_without_transactions_still_renders_with_zero_total() {
        let rows = filter_customers(&sample_customers(), &[], "", "");
        assert_eq!(rows.len(), 2);
        assert!(rows.iter().all(|r| r.total_amount == 0.0));
    }

    #[test]
    fn orphan_transactions_contribute_to_no_row() {
        let mut transactions = sample_transactions();
        transactions.push(Transaction {
            customer_id: 99,
            date: date("2024-02-01"),
            amount: 1000.0,
        });
        let rows = filter_customers(&sample_customers(), &transactions, "", "");
        assert_eq!(rows[0].total_amount, 110.0);
        assert_eq!(rows[1].total_amount, 5.0);
    }

    #[test]
    fn chart_points_keep_collection_order() {
        let transactions = vec![
            Transaction {
                customer_id: 1,
                date: date("2024-01-02"),
                amount: 60.0,
            },
            Transaction {
                customer_id: 2,
                date: date("2024-01-01"),
                amount: 5.0,
            },
            Transaction {
                customer_id: 1,
                date: date("2024-01-01"),
                amount: 50.0,
            },
        ];
        let points = chart_points(&transactions, 1);
        assert_eq!(
            points,
            vec![(date("2024-01-02"), 60.0), (date("2024-01-01"), 50.0)]
        );
    }

    #[test]
    fn chart_points_are_empty_for_customers_without_transactions() {
        assert!(chart_points(&sample_transactions(), 7).is_empty());
    }

    #[test]
    fn fetch_events_replace_collections_independently() {
        let mut state = AppState::new();
        state.apply_event(FetchEvent::CustomersLoaded(sample_customers()));

        // Transactions never arrived; the table still renders from the
        // successful collection with zero totals.
        assert_eq!(state.rows.len(), 2);
        assert!(state.rows.iter().all(|r| r.total_amount == 0.0));

        state.apply_event(FetchEvent::TransactionsLoaded(sample_transactions()));
        assert_eq!(state.rows[0].total_amount, 110.0);
    }

    #[test]
    fn typing_in_a_filter_recomputes_rows() {
        let mut state = AppState::new();
        state.apply_event(FetchEvent::CustomersLoaded(sample_customers()));
        state.apply_event(FetchEvent::TransactionsLoaded(sample_transactions()));

        state.focus = Focus::NameFilter;
        for c in "ali".chars() {
            state.push_filter_char(c);
        }
        assert_eq!(state.rows.len(), 1);
        assert_eq!(state.rows[0].name, "Alice");

        state.pop_filter_char();
        state.pop_filter_char();
        state.pop_filter_char();
        assert_eq!(state.rows.len(), 2);
    }

    #[test]
    fn selection_follows_the_highlighted_row() {
        let mut state = AppState::new();
        state.apply_event(FetchEvent::CustomersLoaded(sample_customers()));
        state.apply_event(FetchEvent::TransactionsLoaded(sample_transactions()));

        state.focus = Focus::Table;
        state.select_next();
        state.confirm_selection();
        assert_eq!(state.selected.as_ref().unwrap().name, "Bob");

        state.select_previous();
        state.confirm_selection();
        assert_eq!(state.selected.as_ref().unwrap().name, "Alice");
    }

    #[test]
    fn highlight_clamps_when_filtering_shrinks_the_table() {
        let mut state = AppState::new();
        state.apply_event(FetchEvent::CustomersLoaded(sample_customers()));
        state.select_next();
        assert_eq!(state.table_state.selected(), Some(1));

        state.focus = Focus::NameFilter;
        for c in "ali".chars() {
            state.push_filter_char(c);
        }
        assert_eq!(state.table_state.selected(), Some(0));

        state.push_filter_char('z');
        assert_eq!(state.table_state.selected(), None);
    }
}
