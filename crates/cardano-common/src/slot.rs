// SPDX-License-Identifier: GPL-3.0

use crate::{Error, Network, network::SlotConfig};
use time::OffsetDateTime;

/// Converts a slot to a Unix timestamp in milliseconds.
///
/// # Arguments
/// * `slot` - The slot number.
/// * `network` - The network whose slot origin applies.
pub fn date_from_slot(slot: u64, network: Network) -> Result<i64, Error> {
	let SlotConfig { zero_time, zero_slot } = network.slot_config();
	i64::try_from(slot)
		.ok()
		.and_then(|slot| slot.checked_sub(zero_slot))
		.and_then(|elapsed| zero_time.checked_add(elapsed))
		.and_then(|seconds| seconds.checked_mul(1000))
		.ok_or(Error::SlotOutOfRange { slot, network })
}

/// Converts a slot to a date.
///
/// # Arguments
/// * `slot` - The slot number.
/// * `network` - The network whose slot origin applies.
pub fn datetime_from_slot(slot: u64, network: Network) -> Result<OffsetDateTime, Error> {
	let seconds = date_from_slot(slot, network)? / 1000;
	OffsetDateTime::from_unix_timestamp(seconds)
		.map_err(|e| Error::InvalidTimestamp(e.to_string()))
}

/// Converts a Unix timestamp in milliseconds to the slot containing it. Sub-second
/// precision is discarded.
///
/// # Arguments
/// * `timestamp` - Milliseconds since the Unix epoch.
/// * `network` - The network whose slot origin applies.
pub fn slot_from_timestamp(timestamp: i64, network: Network) -> Result<u64, Error> {
	slot_from_seconds(timestamp.div_euclid(1000), network)
}

/// Converts a date to the slot containing it. Sub-second precision is discarded.
///
/// # Arguments
/// * `date` - The date to convert.
/// * `network` - The network whose slot origin applies.
pub fn slot_from_date(date: OffsetDateTime, network: Network) -> Result<u64, Error> {
	slot_from_seconds(date.unix_timestamp(), network)
}

fn slot_from_seconds(seconds: i64, network: Network) -> Result<u64, Error> {
	let SlotConfig { zero_time, zero_slot } = network.slot_config();
	let slot = seconds - zero_time + zero_slot;
	u64::try_from(slot).map_err(|_| Error::DateBeforeSlotZero { seconds, network })
}

/// Converts a slot to a Unix timestamp in milliseconds, resolving the network from
/// `network` or, when absent, from the `NETWORK` environment variable.
///
/// # Arguments
/// * `slot` - The slot number.
/// * `network` - An optional network identifier, matched case-insensitively.
pub fn get_date_from_slot(slot: u64, network: Option<&str>) -> Result<i64, Error> {
	date_from_slot(slot, Network::resolve(network))
}

/// Converts a date to a slot, resolving the network from `network` or, when absent, from
/// the `NETWORK` environment variable.
///
/// # Arguments
/// * `date` - The date to convert.
/// * `network` - An optional network identifier, matched case-insensitively.
pub fn get_slot_number_from_date(
	date: OffsetDateTime,
	network: Option<&str>,
) -> Result<u64, Error> {
	slot_from_date(date, Network::resolve(network))
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::network::NETWORK_ENV_VAR;
	use anyhow::Result;
	use strum::VariantArray;
	use time::Duration;

	#[test]
	fn date_from_slot_uses_network_origin() -> Result<(), Error> {
		assert_eq!(date_from_slot(0, Network::Preview)?, 1_666_656_000_000);
		assert_eq!(date_from_slot(100, Network::Preprod)?, 1_654_041_700_000);
		assert_eq!(date_from_slot(4_924_800, Network::Mainnet)?, 1_596_491_091_000);
		assert_eq!(date_from_slot(4_924_801, Network::Mainnet)?, 1_596_491_092_000);
		Ok(())
	}

	#[test]
	fn date_from_slot_handles_early_mainnet_slots() -> Result<(), Error> {
		assert_eq!(date_from_slot(0, Network::Mainnet)?, 1_591_566_291_000);
		assert_eq!(slot_from_timestamp(1_591_566_291_000, Network::Mainnet)?, 0);
		Ok(())
	}

	#[test]
	fn date_from_slot_rejects_unrepresentable_slots() {
		assert!(matches!(
			date_from_slot(u64::MAX, Network::Preview),
			Err(Error::SlotOutOfRange { slot: u64::MAX, network: Network::Preview })
		));
		assert!(matches!(
			date_from_slot(i64::MAX as u64, Network::Mainnet),
			Err(Error::SlotOutOfRange { .. })
		));
	}

	#[test]
	fn datetime_from_slot_rejects_dates_past_supported_range() {
		assert!(matches!(
			datetime_from_slot(1_000_000_000_000, Network::Preview),
			Err(Error::InvalidTimestamp(..))
		));
	}

	#[test]
	fn slot_round_trips_for_every_network() -> Result<()> {
		for network in Network::VARIANTS {
			for slot in [0, 1, 59, 86_400, 4_924_800, 4_924_801, 123_456_789, 1_000_000_000] {
				let date = datetime_from_slot(slot, *network)?;
				assert_eq!(slot_from_date(date, *network)?, slot, "{network} slot {slot}");
				let timestamp = date_from_slot(slot, *network)?;
				assert_eq!(slot_from_timestamp(timestamp, *network)?, slot);
			}
		}
		Ok(())
	}

	#[test]
	fn slot_from_date_discards_sub_second_precision() -> Result<()> {
		let date =
			OffsetDateTime::from_unix_timestamp(1_666_656_010)? + Duration::milliseconds(999);
		assert_eq!(slot_from_date(date, Network::Preview)?, 10);
		assert_eq!(slot_from_timestamp(1_666_656_010_999, Network::Preview)?, 10);
		Ok(())
	}

	#[test]
	fn slot_from_date_rejects_dates_before_slot_zero() -> Result<()> {
		let date = OffsetDateTime::from_unix_timestamp(1_654_041_599)?;
		assert!(matches!(
			slot_from_date(date, Network::Preprod),
			Err(Error::DateBeforeSlotZero { seconds: 1_654_041_599, network: Network::Preprod })
		));
		assert!(matches!(
			slot_from_timestamp(-1, Network::Preview),
			Err(Error::DateBeforeSlotZero { seconds: -1, .. })
		));
		Ok(())
	}

	#[test]
	fn entry_points_resolve_network_from_environment() -> Result<()> {
		temp_env::with_var(NETWORK_ENV_VAR, Some("Preview"), || -> Result<()> {
			assert_eq!(get_date_from_slot(0, None)?, 1_666_656_000_000);
			assert_eq!(get_date_from_slot(0, Some("preprod"))?, 1_654_041_600_000);
			let date = OffsetDateTime::from_unix_timestamp(1_666_656_042)?;
			assert_eq!(get_slot_number_from_date(date, None)?, 42);
			Ok(())
		})?;
		temp_env::with_var(NETWORK_ENV_VAR, Some("sanchonet"), || -> Result<()> {
			assert_eq!(get_date_from_slot(4_924_800, None)?, 1_596_491_091_000);
			Ok(())
		})
	}
}
