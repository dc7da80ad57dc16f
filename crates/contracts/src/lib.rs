//! Shared contracts between the BizFlow front-end and the REST API.
//!
//! Everything in this crate is plain data plus the small pieces of pure
//! logic the UI needs to exercise them: the paginated list query/response
//! types, the line-item reconciliation rules and the batch outcome report.
//! No I/O happens here.

pub mod batch;
pub mod domain;
pub mod enums;
pub mod line_edit;
pub mod list;
