/*!
Hash-indexed store of decoded feature records, keyed by feature code.

Built either record by record with [`set()`](struct.FeatureIndex.html#method.set), or in one go from a decoded GET CONFIGURATION response with [`from_configuration()`](struct.FeatureIndex.html#method.from_configuration).

Collisions are chained, buckets grow through a table of primes once the load factor reaches [`LOAD_FACTOR`](constant.LOAD_FACTOR.html). The hash function is pluggable; the default is a Jenkins-style one-at-a-time mix over the big-endian key bytes.
*/

use std::mem;

use error::Error;
use mmc::data::configuration::Configuration;
use mmc::data::features::FeatureRecord;

pub type HashFn = fn(&[u8]) -> u32;

/// Stored keys over bucket count; reaching it on insert triggers growth.
pub const LOAD_FACTOR: f64 = 0.65;

// capacity walks this table; the last entry is a hard ceiling, although an
// unreachable one: 0.65 × 102877 exceeds the whole u16 key space
const PRIMES: [usize; 14] = [
	11, 23, 47, 97, 197, 397, 797, 1597,
	3203, 6421, 12853, 25717, 51437, 102877,
];

fn one_at_a_time(data: &[u8]) -> u32 {
	let mut hash: u32 = 0;
	for &b in data {
		hash = hash.wrapping_add(b as u32);
		hash = hash.wrapping_add(hash << 10);
		hash ^= hash >> 6;
	}
	hash = hash.wrapping_add(hash << 3);
	hash ^= hash >> 11;
	hash.wrapping_add(hash << 15)
}

#[derive(Debug)]
pub struct FeatureIndex {
	hash: HashFn,
	buckets: Vec<Vec<(u16, FeatureRecord)>>,
	prime_index: usize,
	len: usize,
}

impl FeatureIndex {
	pub fn new() -> Self {
		Self::with_hash(one_at_a_time)
	}

	pub fn with_hash(hash: HashFn) -> Self {
		FeatureIndex {
			hash: hash,
			buckets: vec![vec![]; PRIMES[0]],
			prime_index: 0,
			len: 0,
		}
	}

	/**
	Indexes every feature of a decoded GET CONFIGURATION response. Should a feature code appear twice, the later record replaces the earlier one.
	*/
	pub fn from_configuration(config: &Configuration) -> Result<Self, Error> {
		let mut index = Self::new();
		for record in &config.features {
			index.set(record.clone())?;
		}
		Ok(index)
	}

	pub fn len(&self) -> usize {
		self.len
	}

	pub fn is_empty(&self) -> bool {
		self.len == 0
	}

	pub fn capacity(&self) -> usize {
		self.buckets.len()
	}

	fn bucket_index(&self, key: u16) -> usize {
		let bytes = [(key >> 8) as u8, key as u8];
		(self.hash)(&bytes) as usize % self.buckets.len()
	}

	/**
	Inserts a record, replacing any previously stored record with the same feature code. Replacement is decided by key equality along the bucket chain, never by hash equality.

	## Errors

	Returns `Error::OutOfRange` if the insertion requires growth beyond the largest prime in the capacity table.
	*/
	pub fn set(&mut self, record: FeatureRecord) -> Result<(), Error> {
		let key = record.header.feature_code;

		let idx = self.bucket_index(key);
		if let Some(entry) = self.buckets[idx].iter_mut().find(|e| e.0 == key) {
			entry.1 = record;
			return Ok(());
		}

		if self.len as f64 / self.capacity() as f64 >= LOAD_FACTOR {
			self.grow()?;
		}

		let idx = self.bucket_index(key);
		self.buckets[idx].push((key, record));
		self.len += 1;
		Ok(())
	}

	pub fn lookup(&self, key: u16) -> Option<&FeatureRecord> {
		let idx = self.bucket_index(key);
		self.buckets[idx].iter()
			.find(|e| e.0 == key)
			.map(|e| &e.1)
	}

	/// Drops every stored record, keeping the current capacity.
	pub fn clear(&mut self) {
		for bucket in self.buckets.iter_mut() {
			bucket.clear();
		}
		self.len = 0;
	}

	fn grow(&mut self) -> Result<(), Error> {
		let next = self.prime_index + 1;
		if next >= PRIMES.len() {
			return Err(Error::OutOfRange);
		}

		let old = mem::replace(&mut self.buckets, vec![vec![]; PRIMES[next]]);
		self.prime_index = next;

		for bucket in old {
			for (key, record) in bucket {
				let idx = self.bucket_index(key);
				self.buckets[idx].push((key, record));
			}
		}
		Ok(())
	}
}

impl Default for FeatureIndex {
	fn default() -> Self {
		Self::new()
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use mmc::data::features::{FeatureBody, Header};

	fn record(code: u16, current: bool) -> FeatureRecord {
		FeatureRecord {
			header: Header {
				feature_code: code,
				version: 0,
				persistent: false,
				current: current,
				additional_length: 0,
			},
			body: FeatureBody::Unknown,
		}
	}

	#[test]
	fn set_and_lookup() {
		let mut index = FeatureIndex::new();
		index.set(record(0x0000, true)).unwrap();
		index.set(record(0x0107, false)).unwrap();
		assert_eq!(index.len(), 2);
		assert!(index.lookup(0x0000).is_some());
		assert!(index.lookup(0x0107).is_some());
		assert!(index.lookup(0x0042).is_none());
	}

	#[test]
	fn replacement_keeps_len() {
		let mut index = FeatureIndex::new();
		index.set(record(0x0021, false)).unwrap();
		index.set(record(0x0021, true)).unwrap();
		assert_eq!(index.len(), 1);
		assert!(index.lookup(0x0021).unwrap().header.current);
	}

	#[test]
	fn growth_at_load_factor() {
		let mut index = FeatureIndex::new();
		for code in 0..8 {
			index.set(record(code, false)).unwrap();
		}
		// 7/11 was still under 0.65 when the 8th key went in
		assert_eq!(index.capacity(), 11);

		index.set(record(8, false)).unwrap();
		// 8/11 ≥ 0.65: exactly one growth, to the next prime
		assert_eq!(index.capacity(), 23);
		assert_eq!(index.len(), 9);

		// everything inserted before the growth is still retrievable
		for code in 0..9 {
			assert!(index.lookup(code).is_some(), "lost key {}", code);
		}
	}

	#[test]
	fn replacement_does_not_grow() {
		let mut index = FeatureIndex::new();
		for code in 0..8 {
			index.set(record(code, false)).unwrap();
		}
		index.set(record(3, true)).unwrap();
		assert_eq!(index.capacity(), 11);
		assert_eq!(index.len(), 8);
	}

	#[test]
	fn clear_empties_but_keeps_capacity() {
		let mut index = FeatureIndex::new();
		for code in 0..9 {
			index.set(record(code, false)).unwrap();
		}
		assert_eq!(index.capacity(), 23);
		index.clear();
		assert!(index.is_empty());
		assert_eq!(index.capacity(), 23);
		assert!(index.lookup(3).is_none());
	}

	#[test]
	fn custom_hash() {
		// pathological hash: everything chains into one bucket
		fn collide(_: &[u8]) -> u32 { 0 }

		let mut index = FeatureIndex::with_hash(collide);
		for code in 0..7 {
			index.set(record(code, false)).unwrap();
		}
		for code in 0..7 {
			assert!(index.lookup(code).is_some());
		}
		assert!(index.lookup(7).is_none());
	}

	#[test]
	fn from_configuration_replaces_duplicates() {
		use mmc::data::configuration::Configuration;

		let config = Configuration {
			data_length: 0,
			current_profile: 0x0008,
			features: vec![
				record(0x0000, false),
				record(0x0001, false),
				record(0x0000, true),
			],
		};
		let index = FeatureIndex::from_configuration(&config).unwrap();
		assert_eq!(index.len(), 2);
		assert!(index.lookup(0x0000).unwrap().header.current);
	}
}
