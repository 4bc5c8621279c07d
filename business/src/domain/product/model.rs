use crate::domain::shared::notification::{Notification, NotificationError, NotificationErrorProps};

const CONTEXT: &str = "product";

#[derive(Debug, Clone, PartialEq)]
pub struct Product {
    id: String,
    name: String,
    price: f64,
}

impl Product {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        price: f64,
    ) -> Result<Self, NotificationError> {
        let id = id.into();
        let name = name.into();
        validate(&id, &name, price)?;

        Ok(Self { id, name, price })
    }

    /// Constructor for data already persisted in the repository (no validation).
    pub fn from_repository(id: String, name: String, price: f64) -> Self {
        Self { id, name, price }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn price(&self) -> f64 {
        self.price
    }

    /// Renames the product. The product is left untouched when validation fails.
    pub fn change_name(&mut self, name: impl Into<String>) -> Result<(), NotificationError> {
        let name = name.into();
        validate(&self.id, &name, self.price)?;
        self.name = name;
        Ok(())
    }

    /// Reprices the product. The product is left untouched when validation fails.
    pub fn change_price(&mut self, price: f64) -> Result<(), NotificationError> {
        validate(&self.id, &self.name, price)?;
        self.price = price;
        Ok(())
    }
}

// Every rule is checked even after a failure so all violations are reported together.
fn validate(id: &str, name: &str, price: f64) -> Result<(), NotificationError> {
    let mut notification = Notification::new();

    if id.trim().is_empty() {
        notification.add_error(NotificationErrorProps::new(CONTEXT, "Id is required"));
    }
    if name.trim().is_empty() {
        notification.add_error(NotificationErrorProps::new(CONTEXT, "Name is required"));
    }
    if !price.is_finite() || price <= 0.0 {
        notification.add_error(NotificationErrorProps::new(
            CONTEXT,
            "Price must be greater than zero",
        ));
    }

    notification.into_result()
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn should_create_product_when_fields_valid() {
        let product = Product::new("123", "Product 1", 100.0).unwrap();

        assert_eq!(product.id(), "123");
        assert_eq!(product.name(), "Product 1");
        assert_eq!(product.price(), 100.0);
    }

    #[test]
    fn should_reject_when_id_empty() {
        let error = Product::new("", "Product 1", 100.0).unwrap_err();

        assert_eq!(error.messages(), vec!["Id is required"]);
    }

    #[test]
    fn should_reject_when_name_empty() {
        let error = Product::new("123", "", 100.0).unwrap_err();

        assert_eq!(error.messages(), vec!["Name is required"]);
    }

    #[test]
    fn should_reject_when_name_only_whitespace() {
        let error = Product::new("123", "   ", 100.0).unwrap_err();

        assert_eq!(error.messages(), vec!["Name is required"]);
    }

    #[test]
    fn should_reject_when_price_zero() {
        let error = Product::new("123", "Product 1", 0.0).unwrap_err();

        assert_eq!(error.messages(), vec!["Price must be greater than zero"]);
    }

    #[test]
    fn should_reject_when_price_not_a_number() {
        let error = Product::new("123", "Product 1", f64::NAN).unwrap_err();

        assert_eq!(error.messages(), vec!["Price must be greater than zero"]);
    }

    #[test]
    fn should_report_name_and_price_together() {
        let error = Product::new("123", "", 0.0).unwrap_err();

        assert_eq!(
            error.messages(),
            vec!["Name is required", "Price must be greater than zero"]
        );
    }

    #[test]
    fn should_accumulate_all_errors_in_fixed_order() {
        let error = Product::new("", "", 0.0).unwrap_err();

        assert_eq!(error.errors.len(), 3);
        assert_eq!(error.errors[0].message, "Id is required");
        assert_eq!(error.errors[1].message, "Name is required");
        assert_eq!(error.errors[2].message, "Price must be greater than zero");
        assert!(error.errors.iter().all(|e| e.context == "product"));
        assert_eq!(
            error.to_string(),
            "product: Id is required, product: Name is required, product: Price must be greater than zero"
        );
    }

    #[test]
    fn should_change_name_when_valid() {
        let mut product = Product::new("123", "Product 1", 100.0).unwrap();

        product.change_name("Product 2").unwrap();

        assert_eq!(product.name(), "Product 2");
    }

    #[test]
    fn should_keep_name_when_changed_to_empty() {
        let mut product = Product::new("123", "Product 1", 100.0).unwrap();

        let error = product.change_name("").unwrap_err();

        assert_eq!(error.messages(), vec!["Name is required"]);
        assert_eq!(product.name(), "Product 1");
    }

    #[test]
    fn should_change_price_when_valid() {
        let mut product = Product::new("123", "Product 1", 100.0).unwrap();

        product.change_price(250.5).unwrap();

        assert_eq!(product.price(), 250.5);
    }

    #[test]
    fn should_keep_price_when_changed_to_zero() {
        let mut product = Product::new("123", "Product 1", 100.0).unwrap();

        let error = product.change_price(0.0).unwrap_err();

        assert_eq!(error.messages(), vec!["Price must be greater than zero"]);
        assert_eq!(product.price(), 100.0);
    }

    proptest! {
        #[test]
        fn should_report_exactly_the_violated_fields_in_order(
            id in prop_oneof![Just(String::new()), "[a-z0-9]{1,12}"],
            name in prop_oneof![Just(String::new()), "[A-Za-z][A-Za-z ]{0,20}"],
            price in prop_oneof![-1000.0f64..=0.0, 0.01f64..1000.0],
        ) {
            let mut expected = Vec::new();
            if id.is_empty() {
                expected.push("Id is required");
            }
            if name.is_empty() {
                expected.push("Name is required");
            }
            if price <= 0.0 {
                expected.push("Price must be greater than zero");
            }

            match Product::new(id, name, price) {
                Ok(_) => prop_assert!(expected.is_empty()),
                Err(error) => prop_assert_eq!(error.messages(), expected),
            }
        }
    }
}
