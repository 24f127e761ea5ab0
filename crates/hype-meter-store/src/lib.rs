pub mod error;
pub mod factory;
pub mod jsonbin;
pub mod traits;

pub use error::StoreError;
pub use factory::create_store;
pub use jsonbin::JsonBinStore;
pub use traits::DocumentStore;
