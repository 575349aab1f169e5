//! Recording-related features: addressing, streaming, formatting, defect management.

use error::Error;
use utils::Reader;

use super::is_set;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serializable", derive(Serialize))]
pub struct RandomReadable {
	pub block_size: u32,
	/// number of blocks the drive prefers to transfer at once
	pub blocking: u16,
	/// page 2Ah (error recovery) is present
	pub page_present: bool,
}

impl RandomReadable {
	pub fn parse(payload: &[u8]) -> Self {
		let mut r = Reader::new(payload);
		let block_size = r.try_be_u32().unwrap_or(0);
		let blocking = r.try_be_u16().unwrap_or(0);
		let flags = r.try_u8().unwrap_or(0);
		RandomReadable {
			block_size: block_size,
			blocking: blocking,
			page_present: is_set(flags, 0),
		}
	}
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serializable", derive(Serialize))]
pub struct RandomWritable {
	pub last_lba: u32,
	pub block_size: u32,
	pub blocking: u16,
	pub page_present: bool,
}

impl RandomWritable {
	pub fn parse(payload: &[u8]) -> Self {
		let mut r = Reader::new(payload);
		let last_lba = r.try_be_u32().unwrap_or(0);
		let block_size = r.try_be_u32().unwrap_or(0);
		let blocking = r.try_be_u16().unwrap_or(0);
		let flags = r.try_u8().unwrap_or(0);
		RandomWritable {
			last_lba: last_lba,
			block_size: block_size,
			blocking: blocking,
			page_present: is_set(flags, 0),
		}
	}
}

#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serializable", derive(Serialize))]
pub struct IncrementalStreamingWritable {
	/// bitmask of supported data block types, see MMC "Data Block Types"
	pub data_block_types: u16,
	/// zero-loss linking
	pub buffer_underrun_free: bool,
	pub link_sizes: Vec<u8>,
}

impl IncrementalStreamingWritable {
	pub fn parse(payload: &[u8]) -> Result<Self, Error> {
		let mut r = Reader::new(payload);
		let data_block_types = r.try_be_u16().unwrap_or(0);
		let flags = r.try_u8().unwrap_or(0);
		let num_link_sizes = r.try_u8().unwrap_or(0) as usize;
		if num_link_sizes > r.remaining() {
			return Err(Error::SizeMismatch);
		}
		let link_sizes = r.read_bytes(num_link_sizes)?.to_vec();
		Ok(IncrementalStreamingWritable {
			data_block_types: data_block_types,
			buffer_underrun_free: is_set(flags, 0),
			link_sizes: link_sizes,
		})
	}
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serializable", derive(Serialize))]
pub struct Formattable {
	/// re-format without spare area allocation
	pub renosa: bool,
	pub expand: bool,
	pub qcert: bool,
	pub cert: bool,
	/// random recording mode format for BD-R
	pub rrm: bool,
}

impl Formattable {
	pub fn parse(payload: &[u8]) -> Self {
		let mut r = Reader::new(payload);
		let flags = r.try_u8().unwrap_or(0);
		r.skip(3);
		let bd = r.try_u8().unwrap_or(0);
		Formattable {
			renosa: is_set(flags, 4),
			expand: is_set(flags, 3),
			qcert: is_set(flags, 2),
			cert: is_set(flags, 1),
			rrm: is_set(bd, 0),
		}
	}
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serializable", derive(Serialize))]
pub struct DefectManagement {
	/// spare area is undeterminate at format time
	pub ssa: bool,
}

impl DefectManagement {
	pub fn parse(payload: &[u8]) -> Self {
		let flags = payload.first().cloned().unwrap_or(0);
		DefectManagement { ssa: is_set(flags, 7) }
	}
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serializable", derive(Serialize))]
pub struct WriteOnce {
	pub block_size: u32,
	pub blocking: u16,
	pub page_present: bool,
}

impl WriteOnce {
	pub fn parse(payload: &[u8]) -> Self {
		let mut r = Reader::new(payload);
		let block_size = r.try_be_u32().unwrap_or(0);
		let blocking = r.try_be_u16().unwrap_or(0);
		let flags = r.try_u8().unwrap_or(0);
		WriteOnce {
			block_size: block_size,
			blocking: blocking,
			page_present: is_set(flags, 0),
		}
	}
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serializable", derive(Serialize))]
pub struct MRW {
	pub dvd_plus_write: bool,
	pub dvd_plus_read: bool,
	pub cd_write: bool,
}

impl MRW {
	pub fn parse(payload: &[u8]) -> Self {
		let flags = payload.first().cloned().unwrap_or(0);
		MRW {
			dvd_plus_write: is_set(flags, 2),
			dvd_plus_read: is_set(flags, 1),
			cd_write: is_set(flags, 0),
		}
	}
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serializable", derive(Serialize))]
pub struct EnhancedDefectReporting {
	/// DRT-DM mode is supported
	pub drt_dm: bool,
	pub dbi_cache_zones: u8,
	pub entries: u16,
}

impl EnhancedDefectReporting {
	pub fn parse(payload: &[u8]) -> Self {
		let mut r = Reader::new(payload);
		let flags = r.try_u8().unwrap_or(0);
		let dbi_cache_zones = r.try_u8().unwrap_or(0);
		let entries = r.try_be_u16().unwrap_or(0);
		EnhancedDefectReporting {
			drt_dm: is_set(flags, 0),
			dbi_cache_zones: dbi_cache_zones,
			entries: entries,
		}
	}
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serializable", derive(Serialize))]
pub struct RigidRestrictedOverwrite {
	/// generation of defect status data is supported
	pub dsdg: bool,
	/// defect status data can be read
	pub dsdr: bool,
	pub intermediate: bool,
	pub blank: bool,
}

impl RigidRestrictedOverwrite {
	pub fn parse(payload: &[u8]) -> Self {
		let flags = payload.first().cloned().unwrap_or(0);
		RigidRestrictedOverwrite {
			dsdg: is_set(flags, 3),
			dsdr: is_set(flags, 2),
			intermediate: is_set(flags, 1),
			blank: is_set(flags, 0),
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use error::Error;

	#[test]
	fn random_readable() {
		let rr = RandomReadable::parse(&[
			0x00, 0x00, 0x08, 0x00, // 2048-byte blocks
			0x00, 0x10,
			0x01, 0x00,
		]);
		assert_eq!(rr.block_size, 2048);
		assert_eq!(rr.blocking, 16);
		assert!(rr.page_present);
	}

	#[test]
	fn incremental_streaming_link_sizes() {
		let isw = IncrementalStreamingWritable::parse(&[
			0x00, 0x06, // data block types
			0x01, // BUF
			0x01, // one link size
			0x07, 0x00, 0x00, 0x00,
		]).unwrap();
		assert_eq!(isw.data_block_types, 0x0006);
		assert!(isw.buffer_underrun_free);
		assert_eq!(isw.link_sizes, vec![7]);
	}

	#[test]
	fn incremental_streaming_overrun() {
		// 9 link sizes declared, 4 bytes left
		let err = IncrementalStreamingWritable::parse(&[
			0x00, 0x06, 0x01, 0x09,
			0x07, 0x00, 0x00, 0x00,
		]);
		assert_eq!(err, Err(Error::SizeMismatch));
	}
}
