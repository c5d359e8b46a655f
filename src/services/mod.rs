pub mod operation_service;

pub use operation_service::OperationService;
