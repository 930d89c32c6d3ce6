use actix_web::http::StatusCode;
pub use apperr_shared::errors::ApiError;

// Extension trait for ApiError to add actix-web specific methods
pub trait ApiErrorExt {
    fn status(&self) -> StatusCode;
    fn to_response(&self) -> actix_web::HttpResponse;
}

impl ApiErrorExt for ApiError {
    fn status(&self) -> StatusCode {
        StatusCode::from_u16(self.status_code()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
    }

    fn to_response(&self) -> actix_web::HttpResponse {
        actix_web::HttpResponse::build(self.status()).json(self)
    }
}
