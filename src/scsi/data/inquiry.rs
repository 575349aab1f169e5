/*!
Standard INQUIRY data.

Devices are allowed to return less data than the newest SPC revision describes (and old ones routinely do), so almost every field here is optional: a field decodes to `None` when the response ends before it.
*/

use byteorder::{BigEndian, ByteOrder};

use error::Error;
use utils::ascii_field;

fn is_set(x: u8, bit: usize) -> bool {
	x & (1 << bit) != 0
}

#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serializable", derive(Serialize))]
pub struct Inquiry {
	pub peripheral_qualifier: u8,
	pub peripheral_device_type: u8,

	/// removable medium
	pub rmb: Option<bool>,
	pub version: Option<u8>,

	pub normaca: Option<bool>,
	/// hierarchical addressing
	pub hisup: Option<bool>,
	pub response_data_format: Option<u8>,

	pub additional_length: Option<u8>,

	/// storage array controller component
	pub sccs: Option<bool>,
	/// access controls coordinator
	pub acc: Option<bool>,
	/// target port group support
	pub tpgs: Option<u8>,
	/// third-party copy commands
	pub threepc: Option<bool>,
	pub protect: Option<bool>,

	pub bque: Option<bool>,
	pub encserv: Option<bool>,
	pub multip: Option<bool>,
	pub mchngr: Option<bool>,
	pub addr16: Option<bool>,

	pub wbus16: Option<bool>,
	pub sync: Option<bool>,
	pub linked: Option<bool>,
	pub cmdque: Option<bool>,

	pub vendor_id: Option<String>,
	pub product_id: Option<String>,
	pub product_rev: Option<String>,
	pub vendor_specific: Option<String>,

	pub clocking: Option<u8>,
	pub qas: Option<bool>,
	pub ius: Option<bool>,

	/// up to 8 SCSI standard version descriptors, zero-terminated on the wire
	pub version_descriptors: Vec<u16>,
}

/// What command set the peripheral device type byte promises.
pub fn device_type_name(device_type: u8) -> &'static str {
	match device_type {
		0x00 => "Direct access block device",
		0x01 => "Sequential-access device",
		0x02 => "Printer device",
		0x03 => "Processor device",
		0x04 => "Write-once device",
		0x05 => "CD/DVD device",
		0x06 => "Scanner device",
		0x07 => "Optical memory device",
		0x08 => "Medium changer device",
		0x09 => "Communications device",
		0x0c => "Storage array controller device",
		0x0d => "Enclosure services device",
		0x0e => "Simplified direct-access device",
		0x0f => "Optical card reader/writer device",
		0x10 => "Bridge controller",
		0x11 => "Object-based storage device",
		0x12 => "Automation/drive interface",
		0x1e => "Well known logical unit",
		0x1f => "Unknown or no device type",
		_ => "<reserved>",
	}
}

/**
Decodes standard INQUIRY data.

The only hard requirement is a non-empty buffer (`Error::InvalidArgument` otherwise): everything past byte 0 is optional, see the [struct docs](struct.Inquiry.html).
*/
pub fn parse_inquiry(data: &[u8]) -> Result<Inquiry, Error> {
	if data.is_empty() {
		return Err(Error::InvalidArgument);
	}

	let byte = |k: usize| data.get(k).cloned();
	let flag = |k: usize, bit: usize| byte(k).map(|x| is_set(x, bit));
	let string = |a: usize, b: usize| {
		if data.len() >= b { Some(ascii_field(&data[a..b])) } else { None }
	};

	let mut version_descriptors = vec![];
	let mut off = 58;
	while off + 2 <= data.len() && version_descriptors.len() < 8 {
		let vd = BigEndian::read_u16(&data[off .. off + 2]);
		if vd == 0 { break; }
		version_descriptors.push(vd);
		off += 2;
	}

	Ok(Inquiry {
		peripheral_qualifier: (data[0] >> 5) & 0b111,
		peripheral_device_type: data[0] & 0b1_1111,

		rmb: flag(1, 7),
		version: byte(2),

		normaca: flag(3, 5),
		hisup: flag(3, 4),
		response_data_format: byte(3).map(|x| x & 0b1111),

		additional_length: byte(4),

		sccs: flag(5, 7),
		acc: flag(5, 6),
		tpgs: byte(5).map(|x| (x >> 4) & 0b11),
		threepc: flag(5, 3),
		protect: flag(5, 0),

		bque: flag(6, 7),
		encserv: flag(6, 6),
		multip: flag(6, 4),
		mchngr: flag(6, 3),
		addr16: flag(6, 0),

		wbus16: flag(7, 5),
		sync: flag(7, 4),
		linked: flag(7, 3),
		cmdque: flag(7, 1),

		// XXX? > ASCII data fields … may be terminated with one or more ASCII null (00h) characters.
		vendor_id: string(8, 16),
		product_id: string(16, 32),
		product_rev: string(32, 36),
		vendor_specific: string(36, 56),

		clocking: byte(56).map(|x| (x >> 2) & 0b11),
		qas: flag(56, 1),
		ius: flag(56, 0),

		version_descriptors: version_descriptors,
	})
}

#[cfg(test)]
mod tests {
	use super::*;

	fn sample() -> Vec<u8> {
		let mut data = vec![0u8; 74];
		data[0] = 0x05; // connected, CD/DVD device
		data[1] = 0x80; // removable
		data[2] = 0x05; // SPC-3
		data[3] = 0x32; // NORMACA, HISUP, format 2
		data[4] = 0x1f;
		data[7] = 0x12; // SYNC, CMDQUE
		data[8..16].copy_from_slice(b"HL-DT-ST");
		data[16..32].copy_from_slice(b"BD-RE  WH16NS40 ");
		data[32..36].copy_from_slice(b"1.05");
		data[58] = 0x00; data[59] = 0x40; // SAM-2
		data[60] = 0x09; data[61] = 0x60; // SPC-3
		data
	}

	#[test]
	fn full_response() {
		let inq = parse_inquiry(&sample()).unwrap();
		assert_eq!(inq.peripheral_qualifier, 0);
		assert_eq!(inq.peripheral_device_type, 0x05);
		assert_eq!(device_type_name(inq.peripheral_device_type), "CD/DVD device");
		assert_eq!(inq.rmb, Some(true));
		assert_eq!(inq.version, Some(0x05));
		assert_eq!(inq.normaca, Some(true));
		assert_eq!(inq.hisup, Some(true));
		assert_eq!(inq.response_data_format, Some(2));
		assert_eq!(inq.wbus16, Some(false));
		assert_eq!(inq.sync, Some(true));
		assert_eq!(inq.cmdque, Some(true));
		assert_eq!(inq.vendor_id.as_ref().unwrap(), "HL-DT-ST");
		assert_eq!(inq.product_id.as_ref().unwrap(), "BD-RE  WH16NS40");
		assert_eq!(inq.product_rev.as_ref().unwrap(), "1.05");
		assert_eq!(inq.version_descriptors, vec![0x0040, 0x0960]);
	}

	#[test]
	fn legacy_36_byte_response() {
		let inq = parse_inquiry(&sample()[..36]).unwrap();
		assert_eq!(inq.vendor_id.as_ref().unwrap(), "HL-DT-ST");
		assert_eq!(inq.product_rev.as_ref().unwrap(), "1.05");
		assert_eq!(inq.vendor_specific, None);
		assert_eq!(inq.clocking, None);
		assert!(inq.version_descriptors.is_empty());
	}

	#[test]
	fn severely_truncated() {
		let inq = parse_inquiry(&sample()[..3]).unwrap();
		assert_eq!(inq.version, Some(0x05));
		assert_eq!(inq.normaca, None);
		assert_eq!(inq.vendor_id, None);
	}

	#[test]
	fn empty() {
		assert_eq!(parse_inquiry(&[]), Err(Error::InvalidArgument));
	}

	#[test]
	fn incomplete_version_descriptor_is_dropped() {
		// 61 bytes: one full descriptor at 58..60, one byte of the next
		let inq = parse_inquiry(&sample()[..61]).unwrap();
		assert_eq!(inq.version_descriptors, vec![0x0040]);
	}
}
