pub mod cart;
pub mod models;
pub mod query;
pub mod session;
pub mod validate;

mod sequence;
pub use sequence::RequestSequence;

mod token_store;
pub use token_store::{MemoryTokenStore, TokenStore, TOKEN_KEY};

#[cfg(all(target_arch = "wasm32", feature = "web"))]
pub use token_store::LocalStorageTokenStore;

pub use cart::{cart_total, cart_total_items, PendingSet};
pub use models::{CartLine, Product};
pub use query::{CatalogQuery, SortKey, SortOrder, PRICE_CEILING};
pub use session::{SessionStore, UserIdentity};
pub use validate::{SignInInput, SignUpInput, ValidationReport};
