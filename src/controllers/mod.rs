//! Controladores de página
//!
//! Sustituyen el estado global de cada página por un objeto que posee la
//! lista cargada y el registro en edición.

pub mod debounce;
pub mod duty_form;
pub mod form_rules;
pub mod notification;
pub mod page_controller;
pub mod vessel_order_controller;

pub use notification::{Notification, NotificationKind};
pub use page_controller::PageController;
pub use vessel_order_controller::VesselOrderController;
