//! Drive-level features: maintenance, changers, streaming, serial numbers, AACS.

use utils::{ascii_field, Reader};

use super::is_set;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serializable", derive(Serialize))]
pub struct Smart {
	/// fault/failure reporting page is present
	pub page_present: bool,
}

impl Smart {
	pub fn parse(payload: &[u8]) -> Self {
		let flags = payload.first().cloned().unwrap_or(0);
		Smart { page_present: is_set(flags, 0) }
	}
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serializable", derive(Serialize))]
pub struct EmbeddedChanger {
	/// side change capable
	pub scc: bool,
	/// supports disc present reporting
	pub sdp: bool,
	pub highest_slot: u8,
}

impl EmbeddedChanger {
	pub fn parse(payload: &[u8]) -> Self {
		let flags = payload.first().cloned().unwrap_or(0);
		let slot = payload.get(3).cloned().unwrap_or(0);
		EmbeddedChanger {
			scc: is_set(flags, 5),
			sdp: is_set(flags, 2),
			highest_slot: slot & 0b1_1111,
		}
	}
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serializable", derive(Serialize))]
pub struct MicrocodeUpgrade {
	/// validates microcode via mode 5 of WRITE BUFFER
	pub m5: bool,
}

impl MicrocodeUpgrade {
	pub fn parse(payload: &[u8]) -> Self {
		let flags = payload.first().cloned().unwrap_or(0);
		MicrocodeUpgrade { m5: is_set(flags, 0) }
	}
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serializable", derive(Serialize))]
pub struct Timeout {
	/// group 3 timeouts are supported
	pub group3: bool,
	/// block length per unit of the timeout descriptors
	pub unit_length: u16,
}

impl Timeout {
	pub fn parse(payload: &[u8]) -> Self {
		let mut r = Reader::new(payload);
		let flags = r.try_u8().unwrap_or(0);
		r.skip(1);
		let unit_length = r.try_be_u16().unwrap_or(0);
		Timeout {
			group3: is_set(flags, 0),
			unit_length: unit_length,
		}
	}
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serializable", derive(Serialize))]
pub struct RealTimeStreaming {
	/// READ BUFFER CAPACITY with block bit
	pub rbcb: bool,
	/// SET CD SPEED
	pub scs: bool,
	/// mode page 2Ah with performance bits
	pub mp2a: bool,
	/// write speed performance descriptors
	pub wspd: bool,
	/// stream writing
	pub sw: bool,
}

impl RealTimeStreaming {
	pub fn parse(payload: &[u8]) -> Self {
		let flags = payload.first().cloned().unwrap_or(0);
		RealTimeStreaming {
			rbcb: is_set(flags, 4),
			scs: is_set(flags, 3),
			mp2a: is_set(flags, 2),
			wspd: is_set(flags, 1),
			sw: is_set(flags, 0),
		}
	}
}

#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serializable", derive(Serialize))]
pub struct DriveSerialNumber {
	pub serial: String,
}

impl DriveSerialNumber {
	pub fn parse(payload: &[u8]) -> Self {
		DriveSerialNumber { serial: ascii_field(payload) }
	}
}

#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serializable", derive(Serialize))]
pub struct DiscControlBlocks {
	pub supported: Vec<u32>,
}

impl DiscControlBlocks {
	pub fn parse(payload: &[u8]) -> Self {
		let mut r = Reader::new(payload);
		let mut supported = Vec::with_capacity(payload.len() / 4);
		while let Some(entry) = r.try_be_u32() {
			supported.push(entry);
		}
		DiscControlBlocks { supported: supported }
	}
}

#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serializable", derive(Serialize))]
pub struct FirmwareInformation {
	/// firmware build date, `CCYY-MM-DD HH:MM:SS`
	pub date: String,
}

impl FirmwareInformation {
	pub fn parse(payload: &[u8]) -> Self {
		let mut r = Reader::new(payload);
		let mut part = |n| r.try_bytes(n).map(ascii_field).unwrap_or_default();
		let century = part(2);
		let year = part(2);
		let month = part(2);
		let day = part(2);
		let hour = part(2);
		let minute = part(2);
		let second = part(2);
		FirmwareInformation {
			date: format!("{}{}-{}-{} {}:{}:{}", century, year, month, day, hour, minute, second),
		}
	}
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serializable", derive(Serialize))]
pub struct AACS {
	/// can generate binding nonces
	pub bng: bool,
	pub binding_nonce_blocks: u8,
	pub agids: u8,
	pub version: u8,
}

impl AACS {
	pub fn parse(payload: &[u8]) -> Self {
		let mut r = Reader::new(payload);
		let flags = r.try_u8().unwrap_or(0);
		let blocks = r.try_u8().unwrap_or(0);
		let agids = r.try_u8().unwrap_or(0);
		let version = r.try_u8().unwrap_or(0);
		AACS {
			bng: is_set(flags, 0),
			binding_nonce_blocks: blocks,
			agids: agids & 0b1111,
			version: version,
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn serial_is_trimmed() {
		let f = DriveSerialNumber::parse(b"K1A2B3C4    ");
		assert_eq!(f.serial, "K1A2B3C4");
	}

	#[test]
	fn firmware_date() {
		let f = FirmwareInformation::parse(b"20170215120000\0\0");
		assert_eq!(f.date, "2017-02-15 12:00:00");
	}

	#[test]
	fn aacs_fields() {
		let f = AACS::parse(&[0x01, 0x20, 0x04, 0x01]);
		assert!(f.bng);
		assert_eq!(f.binding_nonce_blocks, 0x20);
		assert_eq!(f.agids, 4);
		assert_eq!(f.version, 1);
	}

	#[test]
	fn timeout_unit_length() {
		let f = Timeout::parse(&[0x01, 0x00, 0x08, 0x00]);
		assert!(f.group3);
		assert_eq!(f.unit_length, 2048);
	}
}
