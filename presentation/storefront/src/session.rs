use business::application::storefront::detail::ProductDetail;
use business::application::storefront::listing::ProductListing;

use crate::commands::{Command, HELP};

const NO_OPEN_PRODUCT: &str = "No product is open. Use `open <n>` first.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

/// Terminal front end over a [`ProductListing`] and at most one open detail.
pub struct Session {
    listing: ProductListing,
    detail: Option<ProductDetail>,
}

impl Session {
    pub fn new(listing: ProductListing) -> Self {
        Self {
            listing,
            detail: None,
        }
    }

    /// Loads the catalog and renders the first page.
    pub async fn start(&mut self) -> Vec<String> {
        self.detail = None;
        let count = self.listing.load().await;
        let mut output = vec![if count == 0 {
            "No products available.".to_string()
        } else {
            format!("{count} products loaded.")
        }];
        output.extend(self.page());
        output
    }

    pub async fn handle(&mut self, command: Command) -> (Flow, Vec<String>) {
        let output = match command {
            Command::List => self.page(),
            Command::Next => {
                self.listing.next();
                self.page()
            }
            Command::Previous => {
                self.listing.previous();
                self.page()
            }
            Command::Open(position) => match position
                .checked_sub(1)
                .and_then(|index| self.listing.open_detail(index))
            {
                Some(detail) => {
                    self.detail = Some(detail);
                    self.detail_lines()
                }
                None => vec![format!("No product at position {position}.")],
            },
            Command::Increment => self.change_quantity(true),
            Command::Decrement => self.change_quantity(false),
            Command::Add => self.add_to_cart(),
            Command::Close => {
                self.detail = None;
                self.page()
            }
            Command::Reload => self.start().await,
            Command::Help => HELP.iter().map(|line| line.to_string()).collect(),
            Command::Quit => return (Flow::Quit, vec!["Bye.".to_string()]),
        };
        (Flow::Continue, output)
    }

    fn change_quantity(&mut self, increment: bool) -> Vec<String> {
        match self.detail.as_mut() {
            Some(detail) => {
                detail.change_value(increment);
                vec![format!("Quantity: {}", detail.quantity())]
            }
            None => vec![NO_OPEN_PRODUCT.to_string()],
        }
    }

    fn add_to_cart(&mut self) -> Vec<String> {
        let Some(detail) = self.detail.as_mut() else {
            return vec![NO_OPEN_PRODUCT.to_string()];
        };

        match detail.add_to_cart() {
            Ok(event) => {
                self.listing.poll_events();
                vec![format!(
                    "Cart now holds {} x {}.",
                    event.quantity,
                    detail.product().name
                )]
            }
            Err(e) => vec![format!("Could not add to cart: {e}")],
        }
    }

    fn page(&self) -> Vec<String> {
        let window = self.listing.window();
        let mut lines = vec![format!("Window ({}, {})", window.start, window.end)];

        let visible = self.listing.visible();
        if visible.is_empty() {
            lines.push("  (nothing to show)".to_string());
        }
        for (index, product) in visible.iter().enumerate() {
            lines.push(format!(
                "  {}. {} [{}] {:.2}",
                index + 1,
                product.name,
                product.sku,
                product.price
            ));
        }

        if self.listing.view_product() {
            lines.push("You have reached the last page.".to_string());
        }
        if self.listing.bought() {
            lines.push("Cart updated.".to_string());
        }
        lines
    }

    fn detail_lines(&self) -> Vec<String> {
        let Some(detail) = self.detail.as_ref() else {
            return vec![NO_OPEN_PRODUCT.to_string()];
        };
        let product = detail.product();
        vec![
            format!("{} [{}]", product.name, product.sku),
            product.summary.clone(),
            format!("Price: {:.2}", product.price),
            format!("Rating: {}/{}", detail.rate(), detail.max()),
            format!("Quantity: {}", detail.quantity()),
        ]
    }
}
