//! Reconciliation rules for the two-way editable line item.
//!
//! A line item exposes both `quantity` and `subtotal` as inputs. Editing
//! one back-derives the other from the unit price; the two entry points
//! are mutually exclusive per keystroke. Values are taken as typed —
//! negative or fractional quantities pass through — but a zero or broken
//! unit price can never produce NaN/Infinity in either field.

/// Editable `{quantity, unit_price, subtotal}` triple of one line item
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LineEdit {
    pub quantity: f64,
    pub unit_price: f64,
    pub subtotal: f64,
}

impl LineEdit {
    pub fn new(quantity: f64, unit_price: f64, subtotal: f64) -> Self {
        Self {
            quantity,
            unit_price,
            subtotal,
        }
    }

    fn safe_price(&self) -> f64 {
        if self.unit_price.is_finite() {
            self.unit_price
        } else {
            0.0
        }
    }

    /// Quantity edited: recompute the subtotal
    pub fn edit_quantity(&mut self, quantity: f64) {
        self.quantity = quantity;
        let subtotal = quantity * self.safe_price();
        self.subtotal = if subtotal.is_finite() { subtotal } else { 0.0 };
    }

    /// Subtotal edited: back-derive the quantity
    pub fn edit_subtotal(&mut self, subtotal: f64) {
        self.subtotal = subtotal;
        let price = self.safe_price();
        self.quantity = if price != 0.0 { subtotal / price } else { 0.0 };
        if !self.quantity.is_finite() {
            self.quantity = 0.0;
        }
    }
}

/// Sum of subtotals over a set of lines
pub fn lines_total<'a, I>(lines: I) -> f64
where
    I: IntoIterator<Item = &'a LineEdit>,
{
    lines.into_iter().map(|l| l.subtotal).sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quantity_edit_recomputes_subtotal() {
        let mut line = LineEdit::new(1.0, 10.0, 10.0);
        line.edit_quantity(3.0);
        assert_eq!(line.subtotal, 30.0);
    }

    #[test]
    fn subtotal_edit_back_derives_quantity() {
        let mut line = LineEdit::new(3.0, 10.0, 30.0);
        line.edit_subtotal(25.0);
        assert_eq!(line.quantity, 2.5);
    }

    #[test]
    fn zero_price_never_yields_nan_or_infinity() {
        let mut line = LineEdit::new(2.0, 0.0, 0.0);
        line.edit_quantity(5.0);
        assert_eq!(line.subtotal, 0.0);
        line.edit_subtotal(40.0);
        assert_eq!(line.quantity, 0.0);
        assert!(line.quantity.is_finite() && line.subtotal.is_finite());
    }

    #[test]
    fn negative_and_fractional_inputs_pass_through() {
        let mut line = LineEdit::new(1.0, 4.0, 4.0);
        line.edit_quantity(-2.5);
        assert_eq!(line.subtotal, -10.0);
        line.edit_subtotal(6.0);
        assert_eq!(line.quantity, 1.5);
    }

    #[test]
    fn total_sums_subtotals() {
        let lines = vec![
            LineEdit::new(1.0, 10.0, 10.0),
            LineEdit::new(2.0, 5.0, 10.0),
        ];
        assert_eq!(lines_total(&lines), 20.0);
    }
}
