/// String form of an amount as shown in the table and matched by the amount
/// filter. Integral values print without a decimal point ("110", not
/// "110.0"), which the substring filter relies on.
pub fn format_amount(amount: f64) -> String {
    amount.to_string()
}

pub fn truncate_text(text: &str, max_len: usize) -> String {
    if text.chars().count() <= max_len {
        text.to_string()
    } else {
        let truncated: String = text.chars().take(max_len.saturating_sub(3)).collect();
        format!("{}...", truncated)
    }
}
