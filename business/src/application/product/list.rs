use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::product::errors::ProductError;
use crate::domain::product::repository::ProductRepository;
use crate::domain::product::use_cases::list::{
    ListProductsInput, ListProductsOutput, ListProductsUseCase,
};

pub struct ListProductsUseCaseImpl {
    pub repository: Arc<dyn ProductRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl ListProductsUseCase for ListProductsUseCaseImpl {
    async fn execute(&self, _input: ListProductsInput) -> Result<ListProductsOutput, ProductError> {
        self.logger.info("Fetching all products");
        let products = self.repository.find_all().await?;
        self.logger
            .info(&format!("Found {} products", products.len()));

        Ok(ListProductsOutput {
            products: products.into_iter().map(Into::into).collect(),
        })
    }
}
