pub mod u501_submit_order;
pub mod u502_order_admin;
