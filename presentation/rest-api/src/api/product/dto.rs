use poem_openapi::Object;

use business::domain::product::use_cases::create::CreateProductOutput;
use business::domain::product::use_cases::find::FindProductOutput;
use business::domain::product::use_cases::list::{ListProductsOutput, ListedProduct};
use business::domain::product::use_cases::update::UpdateProductOutput;

#[derive(Debug, Clone, Object)]
pub struct CreateProductRequest {
    /// Product name (cannot be empty)
    pub name: String,
    /// Unit price, strictly greater than zero
    pub price: f64,
}

#[derive(Debug, Clone, Object)]
pub struct UpdateProductRequest {
    /// New product name (cannot be empty)
    pub name: String,
    /// New unit price, strictly greater than zero
    pub price: f64,
}

#[derive(Debug, Clone, PartialEq, Object)]
pub struct ProductResponse {
    /// Product unique identifier
    pub id: String,
    /// Product name
    pub name: String,
    /// Unit price
    pub price: f64,
}

/// Canonical listing record, rendered either as JSON or as XML.
#[derive(Debug, Clone, PartialEq, Object)]
pub struct ProductListResponse {
    pub products: Vec<ProductResponse>,
}

impl From<CreateProductOutput> for ProductResponse {
    fn from(output: CreateProductOutput) -> Self {
        Self {
            id: output.id,
            name: output.name,
            price: output.price,
        }
    }
}

impl From<FindProductOutput> for ProductResponse {
    fn from(output: FindProductOutput) -> Self {
        Self {
            id: output.id,
            name: output.name,
            price: output.price,
        }
    }
}

impl From<UpdateProductOutput> for ProductResponse {
    fn from(output: UpdateProductOutput) -> Self {
        Self {
            id: output.id,
            name: output.name,
            price: output.price,
        }
    }
}

impl From<ListedProduct> for ProductResponse {
    fn from(product: ListedProduct) -> Self {
        Self {
            id: product.id,
            name: product.name,
            price: product.price,
        }
    }
}

impl From<ListProductsOutput> for ProductListResponse {
    fn from(output: ListProductsOutput) -> Self {
        Self {
            products: output.products.into_iter().map(Into::into).collect(),
        }
    }
}
