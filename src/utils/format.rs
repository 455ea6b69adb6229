/// Formatea un importe al estilo `toLocaleString()` (en-US): miles con `,`
/// y hasta dos decimales
pub fn format_amount(value: f64) -> String {
    if !value.is_finite() {
        return "0".to_string();
    }

    let negative = value < 0.0;
    let cents = (value.abs() * 100.0).round() as u64;
    let whole = cents / 100;
    let fraction = cents % 100;

    let digits = whole.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    let mut result = if negative { format!("-{}", grouped) } else { grouped };
    if fraction > 0 {
        let decimals = format!("{:02}", fraction);
        result.push('.');
        result.push_str(decimals.trim_end_matches('0'));
    }
    result
}
