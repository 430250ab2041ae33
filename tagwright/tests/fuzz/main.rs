#![allow(missing_docs)]

use rand::Rng;
use rand::rngs::StdRng;
use std::thread;
use std::time::Instant;

mod frame_decode;
mod id3v2_read_from;
mod items;

/// Randomly flip, overwrite, insert, and remove bytes
pub fn mutate(rng: &mut StdRng, input: &[u8]) -> Vec<u8> {
	let mut data = input.to_vec();
	for _ in 0..=rng.random_range(0..8) {
		if data.is_empty() {
			data.push(rng.random());
			continue;
		}

		let pos = rng.random_range(0..data.len());
		match rng.random_range(0..4) {
			0 => data[pos] ^= 1 << rng.random_range(0..8),
			1 => data[pos] = rng.random(),
			2 => data.insert(pos, rng.random()),
			_ => {
				data.remove(pos);
			},
		}
	}

	data
}

/// Run `f` on another thread, failing if it panics or takes too long
#[allow(clippy::missing_panics_doc)]
pub fn no_panic<F>(f: F)
where
	F: FnOnce() + Send + 'static,
{
	let instant = Instant::now();
	let thread = thread::spawn(f);

	while instant.elapsed().as_secs() < 3 {
		if thread.is_finished() {
			assert!(thread.join().is_ok(), "Input caused a panic");
			return;
		}
	}

	panic!("Failed to run test");
}
