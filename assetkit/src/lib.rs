//! Shared plumbing for the asset generators: color model, error type,
//! logger setup and the skip-and-continue batch driver.

pub mod batch;
pub mod color;
pub mod error;
pub mod logging;

pub use batch::{AssetGenerator, BatchDriver, BatchReport};
pub use color::{Color, Palette, Swatch};
pub use error::{AssetError, check_dimensions};
pub use logging::{LoggingConfig, init_logging};
