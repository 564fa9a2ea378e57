//! Decoding of separator-delimited IUI lists.

use serde::Serialize;

use crate::constants::DEFAULT_SEPARATOR;
use crate::iui::{decode_iui, DecodedIui, Iui};

/// Aggregate result of [`decode_iui_list`].
///
/// `iuis` holds only the entries that decoded successfully; any invalid
/// entry clears `valid` but is not recorded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct IuiListResult {
    pub valid: bool,
    pub iuis: Vec<Iui>,
}

impl Default for IuiListResult {
    fn default() -> Self {
        Self {
            valid: true,
            iuis: Vec::new(),
        }
    }
}

/// Splits `iui_list` on `separator` (`","` when `None` or empty) and decodes
/// each piece. Every piece is decoded even after a failure.
pub fn decode_iui_list(iui_list: &str, separator: Option<&str>) -> IuiListResult {
    let separator = match separator {
        Some(sep) if !sep.is_empty() => sep,
        _ => DEFAULT_SEPARATOR,
    };

    let mut result = IuiListResult::default();
    for piece in iui_list.split(separator) {
        match decode_iui(piece) {
            DecodedIui::Valid(iui) => result.iuis.push(iui),
            DecodedIui::Invalid(_) => result.valid = false,
        }
    }

    tracing::debug!(
        valid = result.valid,
        decoded = result.iuis.len(),
        "decoded iui list"
    );
    result
}

/// Returns `true` if at least one entry of the list decodes, regardless of
/// whether the list as a whole is valid.
pub fn has_valid_iui(iui_list: &str, separator: Option<&str>) -> bool {
    !decode_iui_list(iui_list, separator).iuis.is_empty()
}
