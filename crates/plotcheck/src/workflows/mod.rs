pub mod accounts;
pub mod permit;
