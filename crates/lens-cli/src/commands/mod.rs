pub mod barcodes;
pub mod dispatch;
pub mod health;
pub mod lookup;
pub mod seed;
