//! Constantes de la aplicación

pub const APP_NAME: &str = "Al Aksha Security Management";
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

pub const COMPANY_NAME: &str = "Al Aksha Security & Logistics Services";
pub const COMPANY_ADDRESS: &str = "Chattogram, Bangladesh";
pub const CURRENCY: &str = "BDT";
