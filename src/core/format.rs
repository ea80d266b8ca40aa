const RUPEE: char = '₹';

/// Formats a value as whole rupees with Indian digit grouping, e.g. `₹56,00,897`.
pub fn format_inr(value: f64) -> String {
    if !value.is_finite() {
        return format!("{RUPEE}0");
    }

    let rounded = value.round();
    let digits = format!("{:.0}", rounded.abs());
    let sign = if rounded < 0.0 { "-" } else { "" };
    format!("{sign}{RUPEE}{}", group_indian(&digits))
}

/// Last three digits form one group, everything above is grouped in pairs.
fn group_indian(digits: &str) -> String {
    if digits.len() <= 3 {
        return digits.to_string();
    }

    let (head, tail) = digits.split_at(digits.len() - 3);
    let mut out = String::with_capacity(digits.len() + digits.len() / 2);
    let lead = head.len() % 2;
    if lead == 1 {
        out.push_str(&head[..1]);
    }
    for (idx, pair) in head.as_bytes()[lead..].chunks(2).enumerate() {
        if idx > 0 || lead == 1 {
            out.push(',');
        }
        out.extend(pair.iter().map(|&b| b as char));
    }
    out.push(',');
    out.push_str(tail);
    out
}
