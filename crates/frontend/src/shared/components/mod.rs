pub mod customer_select;
pub mod date_input;
pub mod entity_table;
pub mod filter_panel;
pub mod pagination_controls;
pub mod search_input;
