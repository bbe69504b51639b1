//! Client for the [endoflife.date](https://endoflife.date) lifecycle API.
//!
//! ```no_run
//! # async fn demo() -> eol_data::Result<()> {
//! let products = eol_data::list_all_products().await?;
//! let cycles = eol_data::get_all_details("python").await?;
//! println!("{} products, python has {} cycles", products.len(), cycles.len());
//! # Ok(())
//! # }
//! ```

mod client;
mod error;
mod types;

pub use client::{get_all_details, list_all_products, EolClient, ALL_PRODUCTS_URL, API_BASE};
pub use error::{EolError, Result};
pub use types::{Cycle, CycleStatus, DateOrBool, LtsStatus};
