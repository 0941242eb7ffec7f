use std::sync::Arc;

use tokio::sync::mpsc::{UnboundedReceiver, UnboundedSender, unbounded_channel};

use crate::domain::cart::errors::CartError;
use crate::domain::cart::model::{CartAddedEvent, CartLine};
use crate::domain::cart::store::CartStore;
use crate::domain::logger::Logger;
use crate::domain::product::model::Product;

pub const DEFAULT_QUANTITY: i32 = 1;
pub const MAX_RATING: i32 = 5;
pub const DEFAULT_RATING: i32 = 4;

/// Quantity picker and "add to cart" action for a single product.
pub struct ProductDetail {
    product: Product,
    cart: CartStore,
    logger: Arc<dyn Logger>,
    listeners: Vec<UnboundedSender<CartAddedEvent>>,
    quantity: i32,
    max: i32,
    rate: i32,
    is_readonly: bool,
}

impl ProductDetail {
    pub fn new(product: Product, cart: CartStore, logger: Arc<dyn Logger>) -> Self {
        Self {
            product,
            cart,
            logger,
            listeners: Vec::new(),
            quantity: DEFAULT_QUANTITY,
            max: MAX_RATING,
            rate: DEFAULT_RATING,
            is_readonly: true,
        }
    }

    /// Builds the widget and restores the quantity already in the cart.
    pub fn open(product: Product, cart: CartStore, logger: Arc<dyn Logger>) -> Self {
        let mut detail = Self::new(product, cart, logger);
        detail.initialize();
        detail
    }

    pub fn initialize(&mut self) {
        let key = self.cart_key();
        if let Some(line) = self.cart.get(&key) {
            self.logger.debug(&format!(
                "Restored quantity {} for product {}",
                line.quantity, key
            ));
            self.quantity = line.quantity;
        }
    }

    /// Registers a listener that receives an event for every successful add.
    pub fn subscribe(&mut self) -> UnboundedReceiver<CartAddedEvent> {
        let (tx, rx) = unbounded_channel();
        self.listeners.push(tx);
        rx
    }

    pub fn add_listener(&mut self, listener: UnboundedSender<CartAddedEvent>) {
        self.listeners.push(listener);
    }

    /// Steps the quantity by one. Neither zero nor `max` is enforced; only the
    /// `i32` range stops it.
    pub fn change_value(&mut self, increment: bool) {
        self.quantity = if increment {
            self.quantity.saturating_add(1)
        } else {
            self.quantity.saturating_sub(1)
        };
    }

    /// Writes the current quantity to the cart, replacing any earlier line for
    /// this product, then notifies listeners.
    pub fn add_to_cart(&mut self) -> Result<CartAddedEvent, CartError> {
        if self.product.id.is_nil() || !self.product.price.is_finite() || self.product.price < 0.0
        {
            self.logger.warn(&format!(
                "Refusing to add invalid product {} to cart",
                self.product.id
            ));
            return Err(CartError::InvalidProduct);
        }

        let key = self.cart_key();
        let line = CartLine::new(key.clone(), self.quantity, self.product.price);
        self.cart.put(&key, &line)?;

        let event = CartAddedEvent {
            product_id: key,
            quantity: self.quantity,
        };
        self.listeners
            .retain(|listener| listener.send(event.clone()).is_ok());

        self.logger.info(&format!(
            "Added product {} to cart with quantity {}",
            event.product_id, event.quantity
        ));
        Ok(event)
    }

    pub fn product(&self) -> &Product {
        &self.product
    }

    pub fn quantity(&self) -> i32 {
        self.quantity
    }

    pub fn max(&self) -> i32 {
        self.max
    }

    pub fn rate(&self) -> i32 {
        self.rate
    }

    pub fn is_readonly(&self) -> bool {
        self.is_readonly
    }

    fn cart_key(&self) -> String {
        self.product.id.to_string()
    }
}
