// SPDX-License-Identifier: GPL-3.0

#![doc = include_str!("../README.md")]

/// CIP-67 asset name labels.
pub mod asset;
/// ADA and lovelace conversions.
pub mod currency;
pub mod errors;
/// Network selection and slot origins.
pub mod network;
pub mod predicates;
/// Iterating over items with asynchronous callbacks.
pub mod sequence;
/// Conversions between slots and wall-clock time.
pub mod slot;
/// Waiting on the tokio timer.
pub mod timing;

pub use asset::{AssetNameLabel, PrefixLabel, parse_asset_name_label};
pub use currency::{LOVELACE_PER_ADA, to_ada, to_lovelace};
pub use errors::Error;
pub use network::{NETWORK_ENV_VAR, Network, SlotConfig};
pub use predicates::{is_alpha_numeric, is_null_empty_or_undefined, is_numeric};
pub use sequence::{async_for_each, await_for_each, chunk};
pub use slot::{
	date_from_slot, datetime_from_slot, get_date_from_slot, get_slot_number_from_date,
	slot_from_date, slot_from_timestamp,
};
pub use timing::delay;
