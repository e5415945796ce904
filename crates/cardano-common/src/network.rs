// SPDX-License-Identifier: GPL-3.0

use serde::{Deserialize, Serialize};
use std::env::{self, VarError};
use strum_macros::{Display, EnumString, VariantArray};

/// Environment variable holding the process default network.
pub const NETWORK_ENV_VAR: &str = "NETWORK";

/// Cardano networks with known slot origins.
#[derive(
	Debug,
	Clone,
	Copy,
	Default,
	PartialEq,
	Eq,
	Hash,
	Display,
	EnumString,
	VariantArray,
	Serialize,
	Deserialize,
)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
#[serde(rename_all = "lowercase")]
pub enum Network {
	/// Preview test network.
	Preview,
	/// Pre-production test network.
	Preprod,
	/// Main network, also used for any unrecognised identifier.
	#[default]
	Mainnet,
}

/// Reference point used to convert between slots and wall-clock time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SlotConfig {
	/// Unix time, in seconds, of the reference point.
	pub zero_time: i64,
	/// Slot number at the reference point.
	pub zero_slot: i64,
}

const PREVIEW_SLOT_CONFIG: SlotConfig = SlotConfig { zero_time: 1_666_656_000, zero_slot: 0 };
const PREPROD_SLOT_CONFIG: SlotConfig = SlotConfig { zero_time: 1_654_041_600, zero_slot: 0 };
// Shelley hard fork: slot 4924800 at 2020-08-03T21:44:51Z.
const MAINNET_SLOT_CONFIG: SlotConfig =
	SlotConfig { zero_time: 1_596_491_091, zero_slot: 4_924_800 };

impl Network {
	/// Returns the slot reference point of the network.
	pub fn slot_config(&self) -> SlotConfig {
		match self {
			Network::Preview => PREVIEW_SLOT_CONFIG,
			Network::Preprod => PREPROD_SLOT_CONFIG,
			Network::Mainnet => MAINNET_SLOT_CONFIG,
		}
	}

	/// Maps a network identifier to a network, case-insensitively. Unknown identifiers
	/// fall back to [`Network::Mainnet`].
	///
	/// # Arguments
	/// * `identifier` - The network name, e.g. `preprod`.
	pub fn from_identifier(identifier: &str) -> Self {
		identifier.parse().unwrap_or_else(|_| {
			log::debug!("Unknown network `{identifier}`, falling back to {}", Network::default());
			Network::default()
		})
	}

	/// Reads the process default network from the `NETWORK` environment variable.
	pub fn from_env() -> Self {
		match env::var(NETWORK_ENV_VAR) {
			Ok(identifier) => Self::from_identifier(&identifier),
			Err(VarError::NotPresent) => {
				log::debug!("{NETWORK_ENV_VAR} is not set, using {}", Network::default());
				Network::default()
			},
			Err(e @ VarError::NotUnicode(_)) => {
				log::warn!("Ignoring {NETWORK_ENV_VAR}: {e}, using {}", Network::default());
				Network::default()
			},
		}
	}

	/// Resolves the network to use: the explicit identifier when provided and non-empty,
	/// otherwise the process default.
	///
	/// # Arguments
	/// * `explicit` - An optional network identifier supplied by the caller.
	pub fn resolve(explicit: Option<&str>) -> Self {
		match explicit.filter(|identifier| !identifier.is_empty()) {
			Some(identifier) => Self::from_identifier(identifier),
			None => Self::from_env(),
		}
	}
}
