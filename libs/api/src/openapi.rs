use utoipa::OpenApi;

use crate::parse::{
    self,
    request::EventInput,
    response::{ErrorResponse, EventOutput},
};

#[derive(OpenApi)]
#[openapi(
    paths(parse::parse_text),
    components(schemas(EventInput, EventOutput, ErrorResponse)),
    tags(
        (name = "events", description = "Calendar event extraction from free text")
    )
)]
pub struct ApiDoc;

pub fn openapi() -> utoipa::openapi::OpenApi {
    ApiDoc::openapi()
}
