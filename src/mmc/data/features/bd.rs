//! Blu-ray and HD DVD features.
//!
//! BD read/write capabilities are reported per media class: a bitmap word per version group, four words per class.

use utils::Reader;

use super::is_set;

/// One bit per supported media version within a class (word 0 covers versions 0-15 and so on).
pub type ClassBitmap = [u16; 4];

fn class_bitmap(r: &mut Reader) -> ClassBitmap {
	let mut words = [0u16; 4];
	for w in words.iter_mut() {
		*w = r.try_be_u16().unwrap_or(0);
	}
	words
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serializable", derive(Serialize))]
pub struct BDRead {
	pub bd_re: ClassBitmap,
	pub bd_r: ClassBitmap,
	pub bd_rom: ClassBitmap,
}

impl BDRead {
	pub fn parse(payload: &[u8]) -> Self {
		let mut r = Reader::new(payload);
		r.skip(4);
		BDRead {
			bd_re: class_bitmap(&mut r),
			bd_r: class_bitmap(&mut r),
			bd_rom: class_bitmap(&mut r),
		}
	}
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serializable", derive(Serialize))]
pub struct BDWrite {
	/// supports verify-not-required writes
	pub svnr: bool,
	pub bd_re: ClassBitmap,
	pub bd_r: ClassBitmap,
}

impl BDWrite {
	pub fn parse(payload: &[u8]) -> Self {
		let mut r = Reader::new(payload);
		let flags = r.try_u8().unwrap_or(0);
		r.skip(3);
		BDWrite {
			svnr: is_set(flags, 0),
			bd_re: class_bitmap(&mut r),
			bd_r: class_bitmap(&mut r),
		}
	}
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serializable", derive(Serialize))]
pub struct HDDVDRead {
	pub hd_dvd_r: bool,
	pub hd_dvd_ram: bool,
}

impl HDDVDRead {
	pub fn parse(payload: &[u8]) -> Self {
		let mut r = Reader::new(payload);
		let flags = r.try_u8().unwrap_or(0);
		r.skip(1);
		let ram = r.try_u8().unwrap_or(0);
		HDDVDRead {
			hd_dvd_r: is_set(flags, 0),
			hd_dvd_ram: is_set(ram, 0),
		}
	}
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serializable", derive(Serialize))]
pub struct HDDVDWrite {
	pub hd_dvd_r: bool,
	pub hd_dvd_ram: bool,
}

impl HDDVDWrite {
	pub fn parse(payload: &[u8]) -> Self {
		let mut r = Reader::new(payload);
		let flags = r.try_u8().unwrap_or(0);
		r.skip(1);
		let ram = r.try_u8().unwrap_or(0);
		HDDVDWrite {
			hd_dvd_r: is_set(flags, 0),
			hd_dvd_ram: is_set(ram, 0),
		}
	}
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serializable", derive(Serialize))]
pub struct HybridDisc {
	/// reset immunity: hybrid disc awareness survives resets
	pub ri: bool,
}

impl HybridDisc {
	pub fn parse(payload: &[u8]) -> Self {
		let flags = payload.first().cloned().unwrap_or(0);
		HybridDisc { ri: is_set(flags, 0) }
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn bd_read_bitmaps() {
		let mut payload = vec![0x00; 28];
		payload[4] = 0x00; payload[5] = 0x07; // BD-RE word 0
		payload[12] = 0x00; payload[13] = 0x01; // BD-R word 0
		payload[20] = 0xff; payload[21] = 0xff; // BD-ROM word 0
		let f = BDRead::parse(&payload);
		assert_eq!(f.bd_re[0], 0x0007);
		assert_eq!(f.bd_r[0], 0x0001);
		assert_eq!(f.bd_rom[0], 0xffff);
	}

	#[test]
	fn bd_read_truncated() {
		// older descriptors without the BD-ROM words
		let f = BDRead::parse(&[0x00; 20]);
		assert_eq!(f.bd_rom, [0, 0, 0, 0]);
	}
}
