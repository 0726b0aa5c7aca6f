//! Al Aksha back-office
//!
//! Servicio CRUD para una empresa de seguridad: empleados, clientes,
//! partes de vigilancia, órdenes de buque, jornales, adelantos, nóminas y
//! facturas. Los datos van a un endpoint remoto respaldado por una hoja de
//! cálculo o, si no está disponible, a un almacenamiento clave-valor local.

pub mod clients;
pub mod config;
pub mod controllers;
pub mod dto;
pub mod middleware;
pub mod models;
pub mod repositories;
pub mod routes;
pub mod services;
pub mod state;
pub mod storage;
pub mod utils;

pub use routes::create_router;
pub use services::api_facade::{ApiFacade, DataSource};
pub use state::AppState;
