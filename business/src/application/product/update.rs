use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::product::errors::ProductError;
use crate::domain::product::repository::ProductRepository;
use crate::domain::product::use_cases::update::{
    UpdateProductInput, UpdateProductOutput, UpdateProductUseCase,
};

pub struct UpdateProductUseCaseImpl {
    pub repository: Arc<dyn ProductRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl UpdateProductUseCase for UpdateProductUseCaseImpl {
    async fn execute(
        &self,
        input: UpdateProductInput,
    ) -> Result<UpdateProductOutput, ProductError> {
        self.logger
            .info(&format!("Updating product: {}", input.id));

        let mut product = self.repository.find(&input.id).await?;

        product.change_name(input.name)?;
        product.change_price(input.price)?;

        self.repository.update(&product).await?;

        self.logger
            .info(&format!("Product updated: {}", product.id()));
        Ok(UpdateProductOutput {
            id: product.id().to_string(),
            name: product.name().to_string(),
            price: product.price(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::errors::RepositoryError;
    use crate::domain::product::model::Product;
    use mockall::mock;

    mock! {
        pub ProductRepo {}

        #[async_trait]
        impl ProductRepository for ProductRepo {
            async fn create(&self, product: &Product) -> Result<(), RepositoryError>;
            async fn find(&self, id: &str) -> Result<Product, RepositoryError>;
            async fn update(&self, product: &Product) -> Result<(), RepositoryError>;
            async fn find_all(&self) -> Result<Vec<Product>, RepositoryError>;
        }
    }

    mock! {
        pub Log {}

        impl Logger for Log {
            fn info(&self, message: &str);
            fn warn(&self, message: &str);
            fn error(&self, message: &str);
            fn debug(&self, message: &str);
        }
    }

    fn mock_logger() -> Arc<dyn Logger> {
        let mut logger = MockLog::new();
        logger.expect_info().returning(|_| ());
        logger.expect_warn().returning(|_| ());
        logger.expect_error().returning(|_| ());
        logger.expect_debug().returning(|_| ());
        Arc::new(logger)
    }

    fn existing_product() -> Product {
        Product::from_repository("123".to_string(), "Product 1".to_string(), 100.0)
    }

    #[tokio::test]
    async fn should_update_product_when_exists() {
        let mut mock_repo = MockProductRepo::new();
        mock_repo.expect_find().returning(|_| Ok(existing_product()));
        mock_repo
            .expect_update()
            .withf(|product| {
                product.id() == "123"
                    && product.name() == "Product Updated"
                    && product.price() == 200.0
            })
            .times(1)
            .returning(|_| Ok(()));

        let use_case = UpdateProductUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let output = use_case
            .execute(UpdateProductInput {
                id: "123".to_string(),
                name: "Product Updated".to_string(),
                price: 200.0,
            })
            .await
            .unwrap();

        assert_eq!(
            output,
            UpdateProductOutput {
                id: "123".to_string(),
                name: "Product Updated".to_string(),
                price: 200.0,
            }
        );
    }

    #[tokio::test]
    async fn should_return_error_when_product_not_found() {
        let mut mock_repo = MockProductRepo::new();
        mock_repo
            .expect_find()
            .returning(|_| Err(RepositoryError::NotFound));
        mock_repo.expect_update().never();

        let use_case = UpdateProductUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let error = use_case
            .execute(UpdateProductInput {
                id: "non-existing-id".to_string(),
                name: "Product Updated".to_string(),
                price: 200.0,
            })
            .await
            .unwrap_err();

        assert!(matches!(error, ProductError::NotFound));
        assert_eq!(error.to_string(), "Product not found");
    }

    #[tokio::test]
    async fn should_not_persist_when_new_values_invalid() {
        let mut mock_repo = MockProductRepo::new();
        mock_repo.expect_find().returning(|_| Ok(existing_product()));
        mock_repo.expect_update().never();

        let use_case = UpdateProductUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let error = use_case
            .execute(UpdateProductInput {
                id: "123".to_string(),
                name: "".to_string(),
                price: 200.0,
            })
            .await
            .unwrap_err();

        assert!(matches!(error, ProductError::Validation(_)));
        assert!(error.to_string().contains("Name is required"));
    }

    #[tokio::test]
    async fn should_propagate_not_found_from_update() {
        let mut mock_repo = MockProductRepo::new();
        mock_repo.expect_find().returning(|_| Ok(existing_product()));
        mock_repo
            .expect_update()
            .returning(|_| Err(RepositoryError::NotFound));

        let use_case = UpdateProductUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(UpdateProductInput {
                id: "123".to_string(),
                name: "Product Updated".to_string(),
                price: 200.0,
            })
            .await;

        assert!(matches!(result.unwrap_err(), ProductError::NotFound));
    }
}
