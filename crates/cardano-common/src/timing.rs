// SPDX-License-Identifier: GPL-3.0

use std::time::Duration;
use tokio::time::sleep;

/// Waits for at least the given number of milliseconds.
///
/// Zero or negative values resolve as soon as the scheduler allows.
///
/// # Arguments
/// * `milliseconds` - The minimum time to wait.
pub async fn delay(milliseconds: i64) {
	let millis = u64::try_from(milliseconds).unwrap_or_default();
	sleep(Duration::from_millis(millis)).await;
}
