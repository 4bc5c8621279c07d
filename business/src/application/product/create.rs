use std::sync::Arc;

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::logger::Logger;
use crate::domain::product::errors::ProductError;
use crate::domain::product::model::Product;
use crate::domain::product::repository::ProductRepository;
use crate::domain::product::use_cases::create::{
    CreateProductInput, CreateProductOutput, CreateProductUseCase,
};

pub struct CreateProductUseCaseImpl {
    pub repository: Arc<dyn ProductRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl CreateProductUseCase for CreateProductUseCaseImpl {
    async fn execute(
        &self,
        input: CreateProductInput,
    ) -> Result<CreateProductOutput, ProductError> {
        self.logger
            .info(&format!("Creating product: {}", input.name));

        let product = Product::new(Uuid::new_v4().to_string(), input.name, input.price)?;

        self.repository.create(&product).await?;

        self.logger
            .info(&format!("Product created with id: {}", product.id()));
        Ok(CreateProductOutput {
            id: product.id().to_string(),
            name: product.name().to_string(),
            price: product.price(),
        })
    }
}
