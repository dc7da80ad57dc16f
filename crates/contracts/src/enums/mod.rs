mod order_status;
mod payment_method;
mod unit_of_measure;
mod weekday;

pub use order_status::OrderStatus;
pub use payment_method::PaymentMethod;
pub use unit_of_measure::UnitOfMeasure;
pub use weekday::Weekday;
