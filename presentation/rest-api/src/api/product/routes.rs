use std::sync::Arc;

use poem::Request;
use poem::http::header;
use poem_openapi::{
    OpenApi,
    param::Path,
    payload::{Json, PlainText},
};

use business::domain::product::use_cases::create::{CreateProductInput, CreateProductUseCase};
use business::domain::product::use_cases::find::{FindProductInput, FindProductUseCase};
use business::domain::product::use_cases::list::{ListProductsInput, ListProductsUseCase};
use business::domain::product::use_cases::update::{UpdateProductInput, UpdateProductUseCase};

use crate::api::error::{ErrorResponse, IntoErrorResponse};
use crate::api::product::dto::{
    CreateProductRequest, ProductListResponse, ProductResponse, UpdateProductRequest,
};
use crate::api::product::negotiation::ResponseFormat;
use crate::api::product::render::products_to_xml;
use crate::api::tags::ApiTags;

pub struct ProductApi {
    create_use_case: Arc<dyn CreateProductUseCase>,
    find_use_case: Arc<dyn FindProductUseCase>,
    update_use_case: Arc<dyn UpdateProductUseCase>,
    list_use_case: Arc<dyn ListProductsUseCase>,
}

impl ProductApi {
    pub fn new(
        create_use_case: Arc<dyn CreateProductUseCase>,
        find_use_case: Arc<dyn FindProductUseCase>,
        update_use_case: Arc<dyn UpdateProductUseCase>,
        list_use_case: Arc<dyn ListProductsUseCase>,
    ) -> Self {
        Self {
            create_use_case,
            find_use_case,
            update_use_case,
            list_use_case,
        }
    }
}

/// Product catalogue API
///
/// Endpoints for creating, reading, updating and listing products.
#[OpenApi]
impl ProductApi {
    /// Create a new product
    ///
    /// Assigns a fresh identifier and stores the product.
    #[oai(path = "/product", method = "post", tag = "ApiTags::Products")]
    async fn create_product(&self, body: Json<CreateProductRequest>) -> CreateProductResponse {
        let input = CreateProductInput {
            name: body.0.name,
            price: body.0.price,
        };

        match self.create_use_case.execute(input).await {
            Ok(output) => CreateProductResponse::Ok(Json(output.into())),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    400 => CreateProductResponse::BadRequest(json),
                    _ => CreateProductResponse::InternalError(json),
                }
            }
        }
    }

    /// List all products
    ///
    /// Products come back in creation order. Send `Accept: application/xml`
    /// for an XML document, otherwise the body is JSON.
    #[oai(path = "/product", method = "get", tag = "ApiTags::Products")]
    async fn list_products(&self, req: &Request) -> ListProductsResponse {
        let format = ResponseFormat::negotiate(
            req.headers()
                .get(header::ACCEPT)
                .and_then(|value| value.to_str().ok()),
        );

        let list: ProductListResponse = match self.list_use_case.execute(ListProductsInput).await
        {
            Ok(output) => output.into(),
            Err(err) => {
                let (_status, json) = err.into_error_response();
                return ListProductsResponse::InternalError(json);
            }
        };

        match format {
            ResponseFormat::Json => ListProductsResponse::OkJson(Json(list)),
            ResponseFormat::Xml => match products_to_xml(&list) {
                Ok(xml) => ListProductsResponse::OkXml(PlainText(xml)),
                Err(err) => {
                    tracing::error!(error = %err, "Failed to render product listing as XML");
                    ListProductsResponse::InternalError(Json(ErrorResponse::new(
                        "InternalError",
                        "xml.render_error",
                    )))
                }
            },
        }
    }

    /// Get a product by ID
    #[oai(path = "/product/:id", method = "get", tag = "ApiTags::Products")]
    async fn find_product(&self, id: Path<String>) -> FindProductResponse {
        match self
            .find_use_case
            .execute(FindProductInput { id: id.0 })
            .await
        {
            Ok(output) => FindProductResponse::Ok(Json(output.into())),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    404 => FindProductResponse::NotFound(json),
                    _ => FindProductResponse::InternalError(json),
                }
            }
        }
    }

    /// Update a product
    ///
    /// Replaces the name and price of an existing product. Nothing is stored
    /// when either value is invalid.
    #[oai(path = "/product/:id", method = "put", tag = "ApiTags::Products")]
    async fn update_product(
        &self,
        id: Path<String>,
        body: Json<UpdateProductRequest>,
    ) -> UpdateProductResponse {
        let input = UpdateProductInput {
            id: id.0,
            name: body.0.name,
            price: body.0.price,
        };

        match self.update_use_case.execute(input).await {
            Ok(output) => UpdateProductResponse::Ok(Json(output.into())),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    400 => UpdateProductResponse::BadRequest(json),
                    404 => UpdateProductResponse::NotFound(json),
                    _ => UpdateProductResponse::InternalError(json),
                }
            }
        }
    }
}

#[derive(poem_openapi::ApiResponse)]
pub enum CreateProductResponse {
    #[oai(status = 200)]
    Ok(Json<ProductResponse>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum ListProductsResponse {
    #[oai(status = 200)]
    OkJson(Json<ProductListResponse>),
    #[oai(status = 200, content_type = "application/xml; charset=utf-8")]
    OkXml(PlainText<String>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum FindProductResponse {
    #[oai(status = 200)]
    Ok(Json<ProductResponse>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum UpdateProductResponse {
    #[oai(status = 200)]
    Ok(Json<ProductResponse>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}
