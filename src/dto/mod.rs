pub mod action_dto;
pub mod api_response;
pub mod vessel_order_dto;

pub use action_dto::ActionRequest;
pub use api_response::ApiResponse;
