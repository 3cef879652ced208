use actix_web::{web, HttpResponse};

use crate::application::OrderService;
use crate::errors::{AppError, ErrorBody};
use crate::messages::{
    CheckOrderOwnerRequest, CheckOrderOwnerResponse, CreateOrderRequest, CreateOrderResponse,
    GetOrderRequest, GetOrderResponse, ListOrdersRequest, ListOrdersResponse,
};

/// Route prefix shared by every `order.v1.OrderService` procedure.
pub const SERVICE_PATH: &str = "/order.v1.OrderService";

/// Mount the four procedures under [`SERVICE_PATH`]. Expects an
/// `OrderService` in app data.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope(SERVICE_PATH)
            .app_data(json_config())
            .route("/CreateOrder", web::post().to(create_order))
            .route("/GetOrder", web::post().to(get_order))
            .route("/ListOrders", web::post().to(list_orders))
            .route("/CheckOrderOwner", web::post().to(check_order_owner)),
    );
}

/// Undecodable request bodies are reported as `invalid_argument`.
fn json_config() -> web::JsonConfig {
    web::JsonConfig::default().error_handler(|err, _req| {
        log::debug!("rejecting undecodable request body: {}", err);
        AppError::InvalidArgument(err.to_string()).into()
    })
}

fn decode_list_request(body: &[u8]) -> Result<ListOrdersRequest, AppError> {
    if body.iter().all(u8::is_ascii_whitespace) {
        return Ok(ListOrdersRequest::default());
    }
    serde_json::from_slice(body).map_err(|e| {
        log::debug!("rejecting undecodable ListOrders body: {}", e);
        AppError::InvalidArgument(e.to_string())
    })
}

fn blocking_error(e: actix_web::error::BlockingError) -> AppError {
    log::error!("blocking pool failure: {}", e);
    AppError::Internal(e.to_string())
}

// ── Procedures ───────────────────────────────────────────────────────────────

/// Create an order owned by `userId`. Id, status and creation time are
/// assigned by the service.
#[utoipa::path(
    post,
    path = "/order.v1.OrderService/CreateOrder",
    request_body = CreateOrderRequest,
    responses(
        (status = 200, description = "Order created", body = CreateOrderResponse),
        (status = 400, description = "Missing user id or item, or non-positive amount", body = ErrorBody),
        (status = 500, description = "Storage failure", body = ErrorBody),
    ),
    tag = "order.v1.OrderService"
)]
pub async fn create_order(
    service: web::Data<OrderService>,
    body: web::Json<CreateOrderRequest>,
) -> Result<HttpResponse, AppError> {
    let req = body.into_inner();
    let resp = web::block(move || service.create_order(req))
        .await
        .map_err(blocking_error)??;

    Ok(HttpResponse::Ok().json(resp))
}

#[utoipa::path(
    post,
    path = "/order.v1.OrderService/GetOrder",
    request_body = GetOrderRequest,
    responses(
        (status = 200, description = "Order found", body = GetOrderResponse),
        (status = 400, description = "Missing id", body = ErrorBody),
        (status = 404, description = "Order not found", body = ErrorBody),
        (status = 500, description = "Storage failure", body = ErrorBody),
    ),
    tag = "order.v1.OrderService"
)]
pub async fn get_order(
    service: web::Data<OrderService>,
    body: web::Json<GetOrderRequest>,
) -> Result<HttpResponse, AppError> {
    let req = body.into_inner();
    let resp = web::block(move || service.get_order(req))
        .await
        .map_err(blocking_error)??;

    Ok(HttpResponse::Ok().json(resp))
}

/// All orders, newest first. The request message has no fields, so an empty
/// body is accepted too.
#[utoipa::path(
    post,
    path = "/order.v1.OrderService/ListOrders",
    request_body = ListOrdersRequest,
    responses(
        (status = 200, description = "All orders, newest first", body = ListOrdersResponse),
        (status = 400, description = "Body is not a ListOrdersRequest", body = ErrorBody),
        (status = 500, description = "Storage failure", body = ErrorBody),
    ),
    tag = "order.v1.OrderService"
)]
pub async fn list_orders(
    service: web::Data<OrderService>,
    body: web::Bytes,
) -> Result<HttpResponse, AppError> {
    let req = decode_list_request(&body)?;
    let resp = web::block(move || service.list_orders(req))
        .await
        .map_err(blocking_error)??;

    Ok(HttpResponse::Ok().json(resp))
}

/// Succeeds with an empty message iff `userId` owns `orderId`.
#[utoipa::path(
    post,
    path = "/order.v1.OrderService/CheckOrderOwner",
    request_body = CheckOrderOwnerRequest,
    responses(
        (status = 200, description = "User owns the order", body = CheckOrderOwnerResponse),
        (status = 400, description = "Missing order id or user id", body = ErrorBody),
        (status = 403, description = "Order does not belong to user", body = ErrorBody),
        (status = 404, description = "Order not found", body = ErrorBody),
        (status = 500, description = "Storage failure", body = ErrorBody),
    ),
    tag = "order.v1.OrderService"
)]
pub async fn check_order_owner(
    service: web::Data<OrderService>,
    body: web::Json<CheckOrderOwnerRequest>,
) -> Result<HttpResponse, AppError> {
    let req = body.into_inner();
    let resp = web::block(move || service.check_order_owner(req))
        .await
        .map_err(blocking_error)??;

    Ok(HttpResponse::Ok().json(resp))
}
