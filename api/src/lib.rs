//! # API crate — typed HTTP client for the storefront backend
//!
//! Every piece of business logic (inventory, pricing, cart persistence,
//! authentication) lives in an external backend consumed over HTTP; this
//! crate is the only place that talks to it. [`Backend`] wraps a
//! `reqwest::Client` plus a base URL and exposes one method per endpoint:
//!
//! | Method | Endpoint | Auth |
//! |--------|----------|------|
//! | [`Backend::list_products`] | `GET /product` | none |
//! | [`Backend::fetch_cart`] | `GET /cart` | bearer |
//! | [`Backend::mutate_cart`] | `POST /cart` | bearer |
//! | [`Backend::register`] | `POST /user/register` | none |
//! | [`Backend::sign_in`] | `POST /user/signin` | none |
//!
//! Responses arrive in small envelopes (`{"products": [...]}`,
//! `{"cart": [...]}`, `{"token": "..."}`); a missing list decodes to empty,
//! while a missing sign-in token is an error ([`ApiError::MissingToken`]).
//! Non-2xx statuses become [`ApiError::Backend`] with the message extracted
//! from the body.

use serde::{Deserialize, Serialize};

pub mod config;

mod error;
pub use error::ApiError;

pub use store::{CartLine, CatalogQuery, Product, SignInInput, SignUpInput};

use error::ErrorBody;

/// HTTP client for the storefront backend.
#[derive(Clone, Debug)]
pub struct Backend {
    http: reqwest::Client,
    base_url: String,
}

#[derive(Debug, Deserialize)]
struct ProductListBody {
    #[serde(default)]
    products: Vec<Product>,
}

#[derive(Debug, Deserialize)]
struct CartBody {
    #[serde(default)]
    cart: Vec<CartLine>,
}

#[derive(Debug, Deserialize)]
struct SignInBody {
    token: Option<String>,
}

#[derive(Debug, Serialize)]
struct CartMutation {
    #[serde(rename = "productId")]
    product_id: i64,
    quantity: i64,
}

impl Backend {
    /// Client against an explicit base URL (no trailing slash expected).
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.into(),
        }
    }

    /// Client against the configured `BACKEND_URL`.
    pub fn from_env() -> Self {
        Self::new(config::backend_url())
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }

    /// Turn a non-success response into [`ApiError::Backend`], reading the
    /// reason out of the body when there is one.
    async fn check(response: reqwest::Response) -> Result<reqwest::Response, ApiError> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }
        let body: ErrorBody = response.json().await.unwrap_or_default();
        Err(ApiError::Backend {
            status: status.as_u16(),
            message: body.into_message(),
        })
    }

    /// List products matching the catalog query. The response wholly
    /// replaces whatever list the caller currently displays.
    pub async fn list_products(&self, query: &CatalogQuery) -> Result<Vec<Product>, ApiError> {
        let response = self
            .http
            .get(self.url("/product"))
            .query(&query.to_params())
            .send()
            .await?;
        let body: ProductListBody = Self::check(response).await?.json().await?;
        Ok(body.products)
    }

    /// Fetch the signed-in user's cart lines.
    pub async fn fetch_cart(&self, token: &str) -> Result<Vec<CartLine>, ApiError> {
        let response = self
            .http
            .get(self.url("/cart"))
            .bearer_auth(token)
            .send()
            .await?;
        let body: CartBody = Self::check(response).await?.json().await?;
        Ok(body.cart)
    }

    /// Apply a quantity change to a product in the cart.
    ///
    /// `quantity` is a signed delta for an existing line, or the initial
    /// quantity (1) when adding. The backend owns clamping and removal at
    /// the zero boundary; callers resynchronize with [`fetch_cart`]
    /// afterwards instead of patching locally.
    pub async fn mutate_cart(
        &self,
        token: &str,
        product_id: i64,
        quantity: i64,
    ) -> Result<(), ApiError> {
        let response = self
            .http
            .post(self.url("/cart"))
            .bearer_auth(token)
            .json(&CartMutation {
                product_id,
                quantity,
            })
            .send()
            .await?;
        Self::check(response).await?;
        Ok(())
    }

    /// Create an account.
    pub async fn register(&self, input: &SignUpInput) -> Result<(), ApiError> {
        let response = self
            .http
            .post(self.url("/user/register"))
            .json(input)
            .send()
            .await?;
        Self::check(response).await?;
        Ok(())
    }

    /// Exchange credentials for a bearer token.
    pub async fn sign_in(&self, input: &SignInInput) -> Result<String, ApiError> {
        let response = self
            .http
            .post(self.url("/user/signin"))
            .json(input)
            .send()
            .await?;
        let body: SignInBody = Self::check(response).await?.json().await?;
        body.token.ok_or(ApiError::MissingToken)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn urls_join_without_double_slashes() {
        let backend = Backend::new("http://localhost:3000");
        assert_eq!(backend.url("/product"), "http://localhost:3000/product");
    }

    #[test]
    fn product_envelope_tolerates_a_missing_list() {
        let body: ProductListBody = serde_json::from_str("{}").unwrap();
        assert!(body.products.is_empty());

        let body: ProductListBody = serde_json::from_str(
            r#"{"products":[{"id":1,"title":"Mouse","price":900,"quantity":5}]}"#,
        )
        .unwrap();
        assert_eq!(body.products.len(), 1);
        assert_eq!(body.products[0].title, "Mouse");
    }

    #[test]
    fn cart_envelope_tolerates_a_missing_list() {
        let body: CartBody = serde_json::from_str("{}").unwrap();
        assert!(body.cart.is_empty());
    }

    #[test]
    fn sign_in_body_distinguishes_absent_token() {
        let body: SignInBody = serde_json::from_str(r#"{"token":"abc"}"#).unwrap();
        assert_eq!(body.token.as_deref(), Some("abc"));

        let body: SignInBody = serde_json::from_str(r#"{"message":"ok"}"#).unwrap();
        assert!(body.token.is_none());
    }

    #[test]
    fn cart_mutation_serializes_the_wire_shape() {
        let body = serde_json::to_value(CartMutation {
            product_id: 7,
            quantity: -1,
        })
        .unwrap();
        assert_eq!(body["productId"], 7);
        assert_eq!(body["quantity"], -1);
    }
}
