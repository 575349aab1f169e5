/*!
Whole GET CONFIGURATION responses.

The response is an 8-byte header followed by feature descriptors back to back:

```plain
byte 0-3  data length (big-endian, excludes itself)
byte 4-5  reserved
byte 6-7  current profile (big-endian)
byte 8-   feature descriptors
```
*/

use byteorder::{BigEndian, ByteOrder};

use error::Error;

use super::features::{self, FeatureRecord};

/// Decoded GET CONFIGURATION response.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serializable", derive(Serialize))]
pub struct Configuration {
	/// number of bytes that follow this field on the wire
	pub data_length: u32,
	pub current_profile: u16,
	/// features in the order the drive returned them
	pub features: Vec<FeatureRecord>,
}

/**
Decodes a GET CONFIGURATION response.

Descriptors are decoded until fewer than 4 bytes remain. A malformed descriptor anywhere in the response fails the whole decode: no partially-decoded response is ever returned.

## Errors

* `InvalidArgument` if `buf` cannot hold the 8-byte header,
* `InvalidHeader` if the buffer size is not a multiple of 4,
* whatever [`parse_descriptor`](../features/fn.parse_descriptor.html) returns.
*/
pub fn decode(buf: &[u8]) -> Result<Configuration, Error> {
	if buf.len() < 8 {
		return Err(Error::InvalidArgument);
	}
	if buf.len() % 4 != 0 {
		return Err(Error::InvalidHeader);
	}

	let data_length = BigEndian::read_u32(&buf[0..4]);
	let current_profile = BigEndian::read_u16(&buf[6..8]);

	let mut features = vec![];
	let mut cursor = 8;
	while buf.len() - cursor >= 4 {
		let (record, consumed) = features::parse_descriptor(&buf[cursor..])?;
		features.push(record);
		cursor += consumed;
	}

	Ok(Configuration {
		data_length: data_length,
		current_profile: current_profile,
		features: features,
	})
}

#[cfg(test)]
mod tests {
	use super::*;
	use mmc::data::features::FeatureBody;

	// header + Profile List + Core
	fn sample() -> Vec<u8> {
		vec![
			0x00, 0x00, 0x00, 0x1c, // data length
			0x00, 0x00,
			0x00, 0x08, // current profile: CD-ROM
			// Profile List
			0x00, 0x00, 0x03, 0x08,
			0x00, 0x08, 0x01, 0x00,
			0x00, 0x10, 0x00, 0x00,
			// Core
			0x00, 0x01, 0x0b, 0x08,
			0x00, 0x00, 0x00, 0x01,
			0x01, 0x00, 0x00, 0x00,
		]
	}

	#[test]
	fn whole_response() {
		let config = decode(&sample()).unwrap();
		assert_eq!(config.data_length, 0x1c);
		assert_eq!(config.current_profile, 0x0008);
		assert_eq!(config.features.len(), 2);
		assert_eq!(config.features[0].header.feature_code, 0x0000);
		assert_eq!(config.features[1].header.feature_code, 0x0001);
		match config.features[0].body {
			FeatureBody::ProfileList(ref list) => {
				assert_eq!(list.profiles.len(), 2);
				assert!(list.profiles[0].current);
			},
			ref other => panic!("expected ProfileList, got {:?}", other),
		}
	}

	#[test]
	fn header_only() {
		let config = decode(&[0x00, 0x00, 0x00, 0x04, 0x00, 0x00, 0x00, 0x10]).unwrap();
		assert_eq!(config.current_profile, 0x0010);
		assert!(config.features.is_empty());
	}

	#[test]
	fn too_short() {
		assert_eq!(decode(&[0x00, 0x00, 0x00, 0x04]), Err(Error::InvalidArgument));
	}

	#[test]
	fn unaligned() {
		assert_eq!(decode(&[0x00, 0x00, 0x00, 0x04, 0x00, 0x00, 0x00, 0x10, 0xff]), Err(Error::InvalidHeader));
	}

	#[test]
	fn bad_descriptor_fails_the_whole_decode() {
		let mut buf = sample();
		// corrupt the Core descriptor's additional length
		buf[23] = 0x06;
		assert_eq!(decode(&buf), Err(Error::InvalidHeader));
	}

	#[test]
	fn decode_is_idempotent() {
		assert_eq!(decode(&sample()).unwrap(), decode(&sample()).unwrap());
	}
}
