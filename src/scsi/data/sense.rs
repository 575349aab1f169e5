/*!
Sense data, the error reporting side of every SCSI command.

The layout depends on the response code found in byte 0:

* `70h`/`71h`: fixed format (current/deferred error),
* `72h`/`73h`: descriptor format (current/deferred error),
* `7Fh`: vendor specific, nothing to decode.

Whatever the format, the interesting part is the key code qualifier: the `(key, asc, ascq)` triple.
*/

use std::fmt;

use error::Error;

/// Decoded sense data.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serializable", derive(Serialize))]
pub struct SenseData {
	pub response_code: u8,
	/// `Some(true)` for current errors, `Some(false)` for deferred ones, `None` for vendor-specific sense
	pub current: Option<bool>,
	pub key: u8,
	pub asc: u8,
	pub ascq: u8,
}

impl SenseData {
	/// Returns the key code qualifier tuple `(key, asc, ascq)`.
	pub fn kcq(&self) -> (u8, u8, u8) {
		(self.key, self.asc, self.ascq)
	}
}

impl fmt::Display for SenseData {
	fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
		write!(f, "{} (key {:x}h asc {:02x}h ascq {:02x}h)",
			key_name(self.key), self.key, self.asc, self.ascq)
	}
}

/// Sense key descriptions, as seen in SPC-4, 4.5.6, table 43.
pub fn key_name(key: u8) -> &'static str {
	match key {
		0x0 => "No Sense",
		0x1 => "Recovered Error",
		0x2 => "Not Ready",
		0x3 => "Medium Error",
		0x4 => "Hardware Error",
		0x5 => "Illegal Request",
		0x6 => "Unit Attention",
		0x7 => "Data Protect",
		0x8 => "Blank Check",
		0x9 => "Vendor Specific",
		0xa => "Copy Aborted",
		0xb => "Aborted Command",
		0xd => "Volume Overflow",
		0xe => "Miscompare",
		0xf => "Completed",
		_ => "<reserved>",
	}
}

fn parse_fixed(data: &[u8]) -> Result<(u8, u8, u8), Error> {
	let key = if data.len() > 2 { data[2] & 0b1111 } else { 0 };

	let additional_length = if data.len() > 7 {
		let additional_length = data[7] as usize;
		if additional_length + 7 != data.len() {
			return Err(Error::SizeMismatch);
		}
		additional_length
	} else {
		0
	};

	let asc = if additional_length > 5 { data[12] } else { 0 };
	let ascq = if additional_length > 6 { data[13] } else { 0 };

	Ok((key, asc, ascq))
}

fn parse_descriptor(data: &[u8]) -> (u8, u8, u8) {
	let key = if data.len() > 1 { data[1] & 0b1111 } else { 0 };
	let asc = if data.len() > 2 { data[2] } else { 0 };
	let ascq = if data.len() > 3 { data[3] } else { 0 };
	(key, asc, ascq)
}

/**
Decodes sense data of any of the recognized formats (70h-73h, 7Fh).

Truncated sense is not an error: fields the buffer ends before decode as zero. Vendor-specific sense (7Fh) carries no standard fields at all, so the key code qualifier is reported as all-`FFh` sentinels.

## Errors

* `InvalidArgument` if `data` is empty,
* `InvalidResponseCode` if byte 0 holds none of the recognized response codes,
* `SizeMismatch` if a fixed-format additional length disagrees with the buffer size.
*/
pub fn parse(data: &[u8]) -> Result<SenseData, Error> {
	if data.is_empty() {
		return Err(Error::InvalidArgument);
	}

	let response_code = data[0] & 0x7f;
	match response_code {
		0x70 | 0x71 => {
			let (key, asc, ascq) = parse_fixed(data)?;
			Ok(SenseData {
				response_code: response_code,
				current: Some(response_code == 0x70),
				key: key,
				asc: asc,
				ascq: ascq,
			})
		},
		0x72 | 0x73 => {
			let (key, asc, ascq) = parse_descriptor(data);
			Ok(SenseData {
				response_code: response_code,
				current: Some(response_code == 0x72),
				key: key,
				asc: asc,
				ascq: ascq,
			})
		},
		0x7f => Ok(SenseData {
			response_code: response_code,
			current: None,
			key: 0xff,
			asc: 0xff,
			ascq: 0xff,
		}),
		_ => Err(Error::InvalidResponseCode),
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn fixed_current() {
		// LOGICAL UNIT NOT SUPPORTED
		let data = [
			0x70, 0x00, 0x05, 0x00,
			0x00, 0x00, 0x00, 0x0a,
			0x00, 0x00, 0x00, 0x00,
			0x21, 0x02, 0x00, 0x00,
			0x00,
		];
		let sense = parse(&data).unwrap();
		assert_eq!(sense.current, Some(true));
		assert_eq!(sense.kcq(), (0x5, 0x21, 0x02));
	}

	#[test]
	fn fixed_length_mismatch() {
		// additional length says 10, buffer says otherwise
		let data = [
			0x70, 0x00, 0x05, 0x00,
			0x00, 0x00, 0x00, 0x0a,
			0x00, 0x00, 0x00, 0x00,
		];
		assert_eq!(parse(&data), Err(Error::SizeMismatch));
	}

	#[test]
	fn fixed_truncated_is_not_an_error() {
		let sense = parse(&[0x71, 0x00, 0x03]).unwrap();
		assert_eq!(sense.current, Some(false));
		assert_eq!(sense.kcq(), (0x3, 0x00, 0x00));
	}

	// key sits at different offsets in the two formats, and so do asc/ascq;
	// this fixture holds different values at every overlapping offset to catch
	// the formats being mixed up
	#[test]
	fn descriptor_offsets_differ_from_fixed() {
		let data = [
			0x72, 0x05, 0x21, 0x02,
			0x0a, 0x00, 0x00, 0x00,
		];
		let sense = parse(&data).unwrap();
		assert_eq!(sense.current, Some(true));
		assert_eq!(sense.kcq(), (0x5, 0x21, 0x02));
	}

	#[test]
	fn vendor_specific_sentinels() {
		let sense = parse(&[0x7f, 0x01, 0x02, 0x03]).unwrap();
		assert_eq!(sense.current, None);
		assert_eq!(sense.kcq(), (0xff, 0xff, 0xff));
	}

	#[test]
	fn unrecognized_response_code() {
		assert_eq!(parse(&[0x00, 0x00, 0x05]), Err(Error::InvalidResponseCode));
		assert_eq!(parse(&[0x74, 0x00, 0x05]), Err(Error::InvalidResponseCode));
	}

	#[test]
	fn empty() {
		assert_eq!(parse(&[]), Err(Error::InvalidArgument));
	}

	#[test]
	fn display() {
		let sense = parse(&[0x72, 0x06, 0x28, 0x00]).unwrap();
		assert_eq!(format!("{}", sense), "Unit Attention (key 6h asc 28h ascq 00h)");
	}
}
