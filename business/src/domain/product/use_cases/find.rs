use async_trait::async_trait;

use crate::domain::product::errors::ProductError;

pub struct FindProductInput {
    pub id: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct FindProductOutput {
    pub id: String,
    pub name: String,
    pub price: f64,
}

#[async_trait]
pub trait FindProductUseCase: Send + Sync {
    async fn execute(&self, input: FindProductInput) -> Result<FindProductOutput, ProductError>;
}
