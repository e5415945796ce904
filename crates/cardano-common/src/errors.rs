// SPDX-License-Identifier: GPL-3.0

use crate::Network;
use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum Error {
	#[error("Invalid chunk size: {0}. The size must be greater than zero")]
	InvalidChunkSize(usize),
	#[error("Unix time {seconds}s is before slot zero on {network}")]
	DateBeforeSlotZero { seconds: i64, network: Network },
	#[error("Invalid timestamp: {0}")]
	InvalidTimestamp(String),
	#[error("Slot {slot} cannot be represented as a timestamp on {network}")]
	SlotOutOfRange { slot: u64, network: Network },
}
