use std::sync::Arc;

use sqlx::PgPool;

use business::application::product::create::CreateProductUseCaseImpl;
use business::application::product::find::FindProductUseCaseImpl;
use business::application::product::list::ListProductsUseCaseImpl;
use business::application::product::update::UpdateProductUseCaseImpl;
use business::domain::logger::Logger;
use business::domain::product::repository::ProductRepository;
use logger::TracingLogger;
use persistence::product::in_memory::ProductRepositoryInMemory;
use persistence::product::repository::ProductRepositoryPostgres;

/// Backing store selected at startup.
pub enum ProductStore {
    Postgres(PgPool),
    InMemory(ProductRepositoryInMemory),
}

/// Application context: every adapter and use case, wired once at startup and
/// handed to the server.
pub struct DependencyContainer {
    pub health_api: crate::api::health::routes::Api,
    pub product_api: crate::api::product::routes::ProductApi,
    pool: Option<PgPool>,
}

impl DependencyContainer {
    pub fn new(store: ProductStore) -> Self {
        let logger: Arc<dyn Logger> = Arc::new(TracingLogger);
        let health_api = crate::api::health::routes::Api::new();

        let pool = match &store {
            ProductStore::Postgres(pool) => Some(pool.clone()),
            ProductStore::InMemory(_) => None,
        };
        let product_repository: Arc<dyn ProductRepository> = match store {
            ProductStore::Postgres(pool) => Arc::new(ProductRepositoryPostgres::new(pool)),
            ProductStore::InMemory(repository) => Arc::new(repository),
        };

        let create_use_case = Arc::new(CreateProductUseCaseImpl {
            repository: product_repository.clone(),
            logger: logger.clone(),
        });
        let find_use_case = Arc::new(FindProductUseCaseImpl {
            repository: product_repository.clone(),
            logger: logger.clone(),
        });
        let update_use_case = Arc::new(UpdateProductUseCaseImpl {
            repository: product_repository.clone(),
            logger: logger.clone(),
        });
        let list_use_case = Arc::new(ListProductsUseCaseImpl {
            repository: product_repository,
            logger,
        });

        let product_api = crate::api::product::routes::ProductApi::new(
            create_use_case,
            find_use_case,
            update_use_case,
            list_use_case,
        );

        Self {
            health_api,
            product_api,
            pool,
        }
    }

    /// Handle used to release store connections once the server has stopped.
    pub fn pool(&self) -> Option<PgPool> {
        self.pool.clone()
    }
}
