//! Installed Unit Identifier (IUI) decoding.
//!
//! An IUI is a whitespace-separated string of four integers (cores, speed,
//! ram, disk) followed by one or more tokens which, concatenated, hold a
//! whole number of 12-character MAC blocks in an `A`-`Z` alphabet:
//!
//! ```text
//! 4 2400 8192 256 AAAAAAAAAAAABBBBBBBBBBBB
//! ```

use std::fmt;
use std::str::FromStr;

use serde::ser::{Serialize, SerializeStruct, Serializer};
use thiserror::Error;

use crate::constants::{MAC_BLOCK_LEN, MAC_GROUP_LEN, MIN_PARTS, NUMERIC_PARTS};

/// Reason an IUI was rejected. `Display` yields the stable reason tag.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IuiError {
    #[error("not enough parts")]
    NotEnoughParts,
    #[error("first 4 not integers")]
    FirstFourNotIntegers,
    #[error("macs length not multiple of 12")]
    MacsLengthNotMultipleOf12,
    #[error("macs not upper alphas")]
    MacsNotUpperAlphas,
}

impl Serialize for IuiError {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// A successfully decoded IUI.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Iui {
    pub cores: i64,
    pub speed: i64,
    pub ram: i64,
    pub disk: i64,
    /// MAC characters regrouped into space-separated 24-character groups.
    pub macs: String,
    /// Canonical form: numeric fields and `macs` joined by single spaces.
    pub iui: String,
}

impl Iui {
    /// Number of 12-character MAC blocks carried by this unit.
    pub fn mac_count(&self) -> usize {
        self.macs.bytes().filter(|b| *b != b' ').count() / MAC_BLOCK_LEN
    }
}

impl fmt::Display for Iui {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.iui)
    }
}

impl FromStr for Iui {
    type Err = IuiError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        decode_iui(s).into_result()
    }
}

impl Serialize for Iui {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("Iui", 7)?;
        state.serialize_field("valid", &true)?;
        state.serialize_field("cores", &self.cores)?;
        state.serialize_field("speed", &self.speed)?;
        state.serialize_field("ram", &self.ram)?;
        state.serialize_field("disk", &self.disk)?;
        state.serialize_field("macs", &self.macs)?;
        state.serialize_field("iui", &self.iui)?;
        state.end()
    }
}

/// Outcome of decoding one IUI string.
///
/// Serializes to `{"valid": false, "reason": ..}` or to the full set of
/// decoded fields with `"valid": true`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DecodedIui {
    Valid(Iui),
    Invalid(IuiError),
}

impl DecodedIui {
    pub fn is_valid(&self) -> bool {
        matches!(self, DecodedIui::Valid(_))
    }

    pub fn reason(&self) -> Option<&IuiError> {
        match self {
            DecodedIui::Valid(_) => None,
            DecodedIui::Invalid(reason) => Some(reason),
        }
    }

    pub fn as_iui(&self) -> Option<&Iui> {
        match self {
            DecodedIui::Valid(iui) => Some(iui),
            DecodedIui::Invalid(_) => None,
        }
    }

    pub fn into_result(self) -> Result<Iui, IuiError> {
        self.into()
    }
}

impl From<DecodedIui> for Result<Iui, IuiError> {
    fn from(decoded: DecodedIui) -> Self {
        match decoded {
            DecodedIui::Valid(iui) => Ok(iui),
            DecodedIui::Invalid(reason) => Err(reason),
        }
    }
}

impl From<Result<Iui, IuiError>> for DecodedIui {
    fn from(result: Result<Iui, IuiError>) -> Self {
        match result {
            Ok(iui) => DecodedIui::Valid(iui),
            Err(reason) => DecodedIui::Invalid(reason),
        }
    }
}

impl Serialize for DecodedIui {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            DecodedIui::Valid(iui) => iui.serialize(serializer),
            DecodedIui::Invalid(reason) => {
                let mut state = serializer.serialize_struct("DecodedIui", 2)?;
                state.serialize_field("valid", &false)?;
                state.serialize_field("reason", reason)?;
                state.end()
            }
        }
    }
}

/// Decodes a raw IUI string. Never panics; malformed input yields
/// [`DecodedIui::Invalid`] with the first failing check.
pub fn decode_iui(iui: &str) -> DecodedIui {
    let decoded: DecodedIui = try_decode(iui).into();
    if let DecodedIui::Invalid(reason) = &decoded {
        tracing::trace!(reason = %reason, input = iui, "rejected iui");
    }
    decoded
}

/// Returns `true` when `iui` decodes successfully.
pub fn is_valid_iui(iui: &str) -> bool {
    decode_iui(iui).is_valid()
}

/// Returns the canonical form of `iui`, or an empty string if it is invalid.
pub fn clean_iui(iui: &str) -> String {
    match decode_iui(iui) {
        DecodedIui::Valid(decoded) => decoded.iui,
        DecodedIui::Invalid(_) => String::new(),
    }
}

fn try_decode(raw: &str) -> Result<Iui, IuiError> {
    let parts: Vec<&str> = raw.split_whitespace().collect();
    if parts.len() < MIN_PARTS {
        return Err(IuiError::NotEnoughParts);
    }

    let mut numbers = [0i64; NUMERIC_PARTS];
    for (slot, part) in numbers.iter_mut().zip(&parts[..NUMERIC_PARTS]) {
        *slot = part
            .parse::<i64>()
            .map_err(|_| IuiError::FirstFourNotIntegers)?;
    }
    let [cores, speed, ram, disk] = numbers;

    let macs: String = parts[NUMERIC_PARTS..].concat();
    if macs.chars().count() % MAC_BLOCK_LEN != 0 {
        return Err(IuiError::MacsLengthNotMultipleOf12);
    }
    if !macs.bytes().all(|b| b.is_ascii_uppercase()) {
        return Err(IuiError::MacsNotUpperAlphas);
    }

    let macs = group_macs(&macs);
    let iui = format!("{cores} {speed} {ram} {disk} {macs}");

    Ok(Iui {
        cores,
        speed,
        ram,
        disk,
        macs,
        iui,
    })
}

/// Inserts a space after every full 24-character group that is followed by
/// more characters. Input must already be ASCII.
fn group_macs(macs: &str) -> String {
    let mut out = String::with_capacity(macs.len() + macs.len() / MAC_GROUP_LEN);
    for (idx, ch) in macs.chars().enumerate() {
        if idx > 0 && idx % MAC_GROUP_LEN == 0 {
            out.push(' ');
        }
        out.push(ch);
    }
    out
}
