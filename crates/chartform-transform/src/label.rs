//! Human-readable labels derived from column identifiers.

/// Converts a snake_case identifier into a Title Case label.
///
/// Splits on underscores only, capitalizes the first character of each token,
/// lowercases the rest and joins tokens with single spaces. Empty tokens from
/// repeated underscores are dropped.
///
/// # Examples
///
/// ```
/// use chartform_transform::format_label;
///
/// assert_eq!(format_label("avg_days_to_ship"), "Avg Days To Ship");
/// assert_eq!(format_label("id"), "Id");
/// ```
pub fn format_label(identifier: &str) -> String {
    identifier
        .split('_')
        .filter(|token| !token.is_empty())
        .map(title_case)
        .collect::<Vec<_>>()
        .join(" ")
}

fn title_case(token: &str) -> String {
    let mut chars = token.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_snake_case() {
        assert_eq!(format_label("total_gmv"), "Total Gmv");
        assert_eq!(format_label("customer_id"), "Customer Id");
        assert_eq!(format_label("avg_days_to_ship"), "Avg Days To Ship");
    }

    #[test]
    fn test_single_token() {
        assert_eq!(format_label("id"), "Id");
        assert_eq!(format_label("REVENUE"), "Revenue");
    }

    #[test]
    fn test_repeated_and_edge_underscores() {
        assert_eq!(format_label("__total__orders_"), "Total Orders");
        assert_eq!(format_label(""), "");
    }

    #[test]
    fn test_no_case_splitting() {
        assert_eq!(format_label("totalOrders"), "Totalorders");
    }
}
