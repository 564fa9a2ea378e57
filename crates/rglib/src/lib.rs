//! rglib — decoding and verification of RG Nets installed unit identifiers
//! (IUIs) and licensing part numbers.
//!
//! ```
//! use rglib::{clean_iui, decode_iui, support_part_number};
//!
//! let decoded = decode_iui(" 4 2400 8192 256   AAAAAAAAAAAA ");
//! assert!(decoded.is_valid());
//! assert_eq!(clean_iui("4 2400 8192 256 AAAAAAAAAAAA"), "4 2400 8192 256 AAAAAAAAAAAA");
//! assert_eq!(support_part_number("rXg 2CC4"), "RXG 2CC4 ECOSA");
//! ```

pub mod constants;
pub mod iui;
pub mod iui_list;
pub mod product;

pub use constants::DEFAULT_SEPARATOR;
pub use iui::{clean_iui, decode_iui, is_valid_iui, DecodedIui, Iui, IuiError};
pub use iui_list::{decode_iui_list, has_valid_iui, IuiListResult};
pub use product::{expected_nodes, support_part_number};

/// Crate version.
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
