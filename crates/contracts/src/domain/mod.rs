pub mod customer;
pub mod customer_preference;
pub mod order;
pub mod order_detail;
pub mod payment;
pub mod product;

pub use customer::{Customer, CustomerData};
pub use customer_preference::{CustomerPreference, PreferenceData};
pub use order::{NewOrder, NewOrderLine, Order, OrderLine, OrderStatusUpdate};
pub use order_detail::{OrderDetail, OrderDetailUpdate};
pub use payment::{CustomerPendingPayment, NewPayment, Payment, PendingPaymentsResponse};
pub use product::{Product, ProductData};
