use sqlx::FromRow;

use business::domain::product::model::Product;

/// Row of the `products` table.
#[derive(Debug, FromRow)]
pub struct ProductEntity {
    pub id: String,
    pub name: String,
    pub price: f64,
}

impl ProductEntity {
    pub fn into_domain(self) -> Product {
        Product::from_repository(self.id, self.name, self.price)
    }
}
