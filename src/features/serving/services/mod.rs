mod serving_service;

pub use serving_service::ServingService;
