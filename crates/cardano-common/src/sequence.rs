// SPDX-License-Identifier: GPL-3.0

use crate::{Error, delay};
use futures::{StreamExt, stream::FuturesOrdered};

/// Runs an asynchronous callback over each item, one at a time and in index order.
///
/// Each callback is awaited to completion before the next one is created, so the
/// effects of item `i` are observable before item `i + 1` starts. The first error
/// stops the iteration and is returned to the caller.
///
/// # Arguments
/// * `items` - The items to process.
/// * `callback` - Called with a reference to the item and its index.
pub async fn await_for_each<'a, T, F, Fut, E>(items: &'a [T], mut callback: F) -> Result<(), E>
where
	F: FnMut(&'a T, usize) -> Fut,
	Fut: Future<Output = Result<(), E>>,
{
	for (index, item) in items.iter().enumerate() {
		log::trace!("awaiting item {index} of {}", items.len());
		callback(item, index).await?;
	}
	Ok(())
}

/// Launches an asynchronous callback for every item without waiting for earlier ones,
/// optionally pausing between launches, and collects the results in input order.
///
/// Launched operations keep making progress while the next launch is delayed. Every
/// launched operation runs to completion: once all have settled, the error of the
/// lowest failing index is returned, otherwise the ordered results.
///
/// # Arguments
/// * `items` - The items to process.
/// * `callback` - Called with a reference to the item and its index.
/// * `delay_ms` - Pause between successive launches, in milliseconds. Zero or less launches
///   all at once.
pub async fn async_for_each<'a, T, F, Fut, U, E>(
	items: &'a [T],
	mut callback: F,
	delay_ms: i64,
) -> Result<Vec<U>, E>
where
	F: FnMut(&'a T, usize) -> Fut,
	Fut: Future<Output = Result<U, E>>,
{
	let mut in_flight = FuturesOrdered::new();
	let mut settled = Vec::with_capacity(items.len());
	for (index, item) in items.iter().enumerate() {
		log::trace!("launching item {index} of {}", items.len());
		in_flight.push_back(callback(item, index));
		if delay_ms <= 0 || index + 1 == items.len() {
			continue;
		}
		// Keep driving launched operations while waiting for the next launch.
		let pause = delay(delay_ms);
		tokio::pin!(pause);
		loop {
			tokio::select! {
				_ = &mut pause => break,
				Some(result) = in_flight.next() => settled.push(result),
			}
		}
	}
	while let Some(result) = in_flight.next().await {
		settled.push(result);
	}
	settled.into_iter().collect()
}

/// Splits items into groups of `size`, with the remainder in the last group.
///
/// # Arguments
/// * `items` - The items to split.
/// * `size` - The length of each group. Must be greater than zero.
pub fn chunk<T: Clone>(items: &[T], size: usize) -> Result<Vec<Vec<T>>, Error> {
	if size == 0 {
		return Err(Error::InvalidChunkSize(size));
	}
	Ok(items.chunks(size).map(<[T]>::to_vec).collect())
}
