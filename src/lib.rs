pub mod data_normalizer;
pub mod error;
pub mod phone;
pub mod settings;

pub use data_normalizer::{area_code, canonicalize, number, pretty, try_canonicalize, SENTINEL};
pub use error::NormalizeError;
pub use phone::PhoneNumber;
pub use settings::{Normalizer, Settings, ValidationMode};
