/// Индийская группировка разрядов: последние три цифры, затем пары
fn group_indian(n: u64) -> String {
    let digits = n.to_string();
    if digits.len() <= 3 {
        return digits;
    }
    let (head, tail) = digits.split_at(digits.len() - 3);
    let mut groups: Vec<&str> = Vec::new();
    let mut end = head.len();
    while end > 0 {
        let start = end.saturating_sub(2);
        groups.push(&head[start..end]);
        end = start;
    }
    groups.reverse();
    format!("{},{}", groups.join(","), tail)
}

/// Rupee amount, e.g. `₹1,50,000` or `₹2,499.50`
pub fn format_rupees(amount: f64) -> String {
    if !amount.is_finite() {
        return "₹0".to_string();
    }
    let sign = if amount < 0.0 { "-" } else { "" };
    let paise = (amount.abs() * 100.0).round() as u64;
    let whole = group_indian(paise / 100);
    match paise % 100 {
        0 => format!("{}₹{}", sign, whole),
        frac => format!("{}₹{}.{:02}", sign, whole, frac),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grouping() {
        assert_eq!(format_rupees(0.0), "₹0");
        assert_eq!(format_rupees(999.0), "₹999");
        assert_eq!(format_rupees(1500.0), "₹1,500");
        assert_eq!(format_rupees(150000.0), "₹1,50,000");
        assert_eq!(format_rupees(12345678.0), "₹1,23,45,678");
    }

    #[test]
    fn test_fraction_and_sign() {
        assert_eq!(format_rupees(2499.5), "₹2,499.50");
        assert_eq!(format_rupees(-1200.0), "-₹1,200");
        assert_eq!(format_rupees(f64::NAN), "₹0");
    }
}
