use utoipa::{Modify, OpenApi};

use crate::features::analytics::{dtos as analytics_dtos, handlers as analytics_handlers};
use crate::features::categories::{dtos as categories_dtos, handlers as categories_handlers};
use crate::features::serving::{dtos as serving_dtos, handlers as serving_handlers};
use crate::features::tickets::{
    dtos as tickets_dtos, handlers as tickets_handlers, models as tickets_models,
};

#[derive(OpenApi)]
#[openapi(
    paths(
        // Tickets
        tickets_handlers::create_ticket,
        tickets_handlers::get_status,
        // Serving
        serving_handlers::serve_next,
        // Analytics
        analytics_handlers::get_analytics,
        // Categories
        categories_handlers::list_categories,
        categories_handlers::get_category,
    ),
    components(
        schemas(
            // Tickets
            tickets_models::TicketStatus,
            tickets_dtos::CreateTicketDto,
            tickets_dtos::TicketIssuedDto,
            tickets_dtos::TicketStatusDto,
            // Serving
            serving_dtos::ServeNextDto,
            serving_dtos::ServedTicketDto,
            serving_dtos::ServeResultDto,
            // Analytics
            analytics_dtos::ServiceWaitDto,
            analytics_dtos::AnalyticsDto,
            // Categories
            categories_dtos::CategoryResponseDto,
            categories_dtos::CategoryListDto,
        )
    ),
    tags(
        (name = "tickets", description = "Ticket issuing and status lookup (kiosk)"),
        (name = "serving", description = "Calling the next customer (counter staff)"),
        (name = "analytics", description = "Average wait time per service"),
        (name = "categories", description = "Configured service categories"),
    ),
    info(
        title = "SmartQueue API",
        version = "0.1.0",
        description = "Ticket queue service for kiosks and service counters",
    )
)]
pub struct ApiDoc;

/// Modifier to override OpenAPI info from config
pub struct SwaggerInfoModifier {
    pub title: String,
    pub version: String,
    pub description: String,
}

impl Modify for SwaggerInfoModifier {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        openapi.info.title = self.title.clone();
        openapi.info.version = self.version.clone();
        openapi.info.description = Some(self.description.clone());
    }
}
