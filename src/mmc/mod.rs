/*!
All things MMC, the command set that optical disc drives speak.

Import [`MMCDevice`](trait.MMCDevice.html) to query a [`Device`](../device/index.html) without composing CDBs and decoding raw buffers yourself; the decoded structures live in the [`data` module](data/index.html).
*/

pub mod data;

use std::cmp::min;
use std::io::{Error, ErrorKind};

use byteorder::{BigEndian, ByteOrder};

use Device;
use index::FeatureIndex;
use scsi::SCSIDevice;
use scsi::data::{inquiry, sense};

use self::data::configuration::{self, Configuration};

// a non-zero sense key means the command did not do what it was asked to
fn check_sense(sense: &[u8]) -> Result<(), Error> {
	if sense.is_empty() { return Ok(()); }

	match sense::parse(sense) {
		Ok(ref sense) if sense.key != 0 => Err(Error::new(ErrorKind::Other, format!("{}", sense))),
		// sense the drive did not bother to fill in is no reason to drop a successful reply
		_ => Ok(()),
	}
}

/// Methods of this trait issue MMC commands against the device and return decoded responses.
pub trait MMCDevice: SCSIDevice {
	/// Returns standard INQUIRY data: vendor, model, revision and whatever capabilities the unit claims.
	fn unit_inquiry(&self) -> Result<inquiry::Inquiry, Error> {
		let (sense, data) = self.scsi_inquiry(false, 0)?;
		check_sense(&sense)?;

		Ok(inquiry::parse_inquiry(&data)?)
	}

	/**
	Issues GET CONFIGURATION and decodes the whole reply.

	The drive states in the response header how much of the allocated buffer it actually filled; whatever the transport returned past that point is cut off before decoding.
	*/
	fn features(&self, current_only: bool) -> Result<Configuration, Error> {
		let rt = if current_only { 0b01 } else { 0b00 };

		let (sense, data) = self.get_configuration(rt, 0)?;
		check_sense(&sense)?;

		let data = if data.len() >= 8 {
			// data length excludes its own four bytes
			let total = BigEndian::read_u32(&data[0 .. 4]) as usize + 4;
			&data[.. min(total, data.len())]
		} else {
			&data[..]
		};

		Ok(configuration::decode(data)?)
	}

	/// [`features()`](#method.features), indexed by feature code.
	fn feature_index(&self) -> Result<FeatureIndex, Error> {
		let config = self.features(false)?;

		Ok(FeatureIndex::from_configuration(&config)?)
	}
}

impl MMCDevice for Device {}

#[cfg(test)]
mod tests {
	use super::*;
	use Direction;

	struct Canned {
		sense: Vec<u8>,
		data: Vec<u8>,
	}

	impl SCSIDevice for Canned {
		fn do_cmd(&self, _cmd: &[u8], _dir: Direction, _sense_len: u8, _data_len: usize) -> Result<(Vec<u8>, Vec<u8>), Error> {
			Ok((self.sense.clone(), self.data.clone()))
		}
	}

	impl MMCDevice for Canned {}

	#[test]
	fn features_cut_to_declared_length() {
		// header-only response padded with trailing garbage the drive never touched
		let mut data = vec![0x00, 0x00, 0x00, 0x04, 0x00, 0x00, 0x00, 0x08];
		data.extend_from_slice(&[0xff; 8]);

		let dev = Canned { sense: vec![], data: data };
		let config = dev.features(false).unwrap();
		assert_eq!(config.current_profile, 0x0008);
		assert!(config.features.is_empty());
	}

	#[test]
	fn sense_key_fails_the_command() {
		// Not Ready, MEDIUM NOT PRESENT
		let sense = vec![
			0x70, 0x00, 0x02, 0x00,
			0x00, 0x00, 0x00, 0x0a,
			0x00, 0x00, 0x00, 0x00,
			0x3a, 0x00, 0x00, 0x00,
			0x00,
		];

		let dev = Canned { sense: sense, data: vec![] };
		let err = dev.features(false).unwrap_err();
		assert!(format!("{}", err).starts_with("Not Ready"));
	}

	#[test]
	fn empty_sense_is_success() {
		let dev = Canned { sense: vec![], data: vec![0x00, 0x00, 0x00, 0x04, 0x00, 0x00, 0x00, 0x10] };
		assert_eq!(dev.features(false).unwrap().current_profile, 0x0010);
	}

	#[test]
	fn indexed_features() {
		let data = vec![
			0x00, 0x00, 0x00, 0x0c, // data length
			0x00, 0x00,
			0x00, 0x08, // current profile: CD-ROM
			// Core
			0x00, 0x01, 0x0b, 0x04,
			0x00, 0x00, 0x00, 0x01,
		];

		let dev = Canned { sense: vec![], data: data };
		let index = dev.feature_index().unwrap();
		assert_eq!(index.len(), 1);
		assert!(index.lookup(0x0001).is_some());
	}
}
