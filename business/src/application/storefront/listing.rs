use std::sync::Arc;

use tokio::sync::mpsc::{UnboundedReceiver, UnboundedSender, unbounded_channel};

use crate::application::storefront::detail::ProductDetail;
use crate::domain::cart::model::CartAddedEvent;
use crate::domain::cart::store::CartStore;
use crate::domain::catalog::pager::{PagerWindow, ProductPager};
use crate::domain::catalog::services::ProductCatalogService;
use crate::domain::logger::Logger;
use crate::domain::product::model::Product;

/// Paged product list with a cart-activity flag.
///
/// Every detail widget opened from the listing reports its adds back here.
pub struct ProductListing {
    catalog: Arc<dyn ProductCatalogService>,
    cart: CartStore,
    logger: Arc<dyn Logger>,
    products: Vec<Product>,
    pager: ProductPager,
    bought: bool,
    events_tx: UnboundedSender<CartAddedEvent>,
    events_rx: UnboundedReceiver<CartAddedEvent>,
}

impl ProductListing {
    pub fn new(
        catalog: Arc<dyn ProductCatalogService>,
        cart: CartStore,
        logger: Arc<dyn Logger>,
    ) -> Self {
        let (events_tx, events_rx) = unbounded_channel();
        Self {
            catalog,
            cart,
            logger,
            products: Vec::new(),
            pager: ProductPager::new(),
            bought: false,
            events_tx,
            events_rx,
        }
    }

    /// Fetches the catalog once. On failure the listing stays empty.
    pub async fn load(&mut self) -> usize {
        self.logger.info("Fetching product catalog");
        match self.catalog.get_products().await {
            Ok(products) => {
                self.logger
                    .info(&format!("Loaded {} products", products.len()));
                self.products = products;
            }
            Err(e) => {
                self.logger
                    .error(&format!("Failed to load product catalog: {}", e));
                self.products.clear();
            }
        }
        self.products.len()
    }

    pub fn next(&mut self) {
        self.pager.next();
    }

    pub fn previous(&mut self) {
        self.pager.previous();
    }

    pub fn window(&self) -> PagerWindow {
        self.pager.window()
    }

    pub fn view_product(&self) -> bool {
        self.pager.view_product()
    }

    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn visible(&self) -> &[Product] {
        self.pager.visible(&self.products)
    }

    /// Opens the detail widget for the `position`-th visible product.
    pub fn open_detail(&self, position: usize) -> Option<ProductDetail> {
        let product = self.visible().get(position)?.clone();
        let mut detail = ProductDetail::open(product, self.cart.clone(), self.logger.clone());
        detail.add_listener(self.events_tx.clone());
        Some(detail)
    }

    /// Drains add-to-cart events raised by opened detail widgets.
    pub fn poll_events(&mut self) -> Vec<CartAddedEvent> {
        let mut events = Vec::new();
        while let Ok(event) = self.events_rx.try_recv() {
            events.push(event);
        }
        if !events.is_empty() {
            self.bought = true;
        }
        events
    }

    pub fn bought(&self) -> bool {
        self.bought
    }
}
