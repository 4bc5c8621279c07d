use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::product::errors::ProductError;
use crate::domain::product::repository::ProductRepository;
use crate::domain::product::use_cases::find::{
    FindProductInput, FindProductOutput, FindProductUseCase,
};

pub struct FindProductUseCaseImpl {
    pub repository: Arc<dyn ProductRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl FindProductUseCase for FindProductUseCaseImpl {
    async fn execute(&self, input: FindProductInput) -> Result<FindProductOutput, ProductError> {
        self.logger
            .info(&format!("Fetching product by id: {}", input.id));

        let product = self.repository.find(&input.id).await?;

        Ok(FindProductOutput {
            id: product.id().to_string(),
            name: product.name().to_string(),
            price: product.price(),
        })
    }
}
