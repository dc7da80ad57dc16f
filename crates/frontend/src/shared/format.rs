/// Currency formatting: Brazilian real for pt-br, dollars otherwise —
/// same rule the backend's invoice generator applies.
pub fn format_currency(language: &str, amount: f64) -> String {
    if language == "pt-br" {
        format!("R$ {:.2}", amount)
    } else {
        format!("${:.2}", amount)
    }
}

/// Quantities drop the fraction when they are whole
pub fn format_quantity(quantity: f64) -> String {
    if quantity.fract() == 0.0 {
        format!("{}", quantity as i64)
    } else {
        format!("{}", quantity)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn currency_by_language() {
        assert_eq!(format_currency("pt-br", 12.5), "R$ 12.50");
        assert_eq!(format_currency("en", 12.5), "$12.50");
    }

    #[test]
    fn whole_quantities_have_no_fraction() {
        assert_eq!(format_quantity(3.0), "3");
        assert_eq!(format_quantity(2.5), "2.5");
    }
}
