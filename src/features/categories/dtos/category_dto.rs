use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Response DTO for a service category
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CategoryResponseDto {
    pub service: String,
    /// Tickets currently waiting
    pub waiting: usize,
    /// Whether requests without a service land here
    pub is_default: bool,
}

/// Response DTO listing every configured service category
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CategoryListDto {
    pub services: Vec<CategoryResponseDto>,
}
