//! DVD-family features, both the dash and the plus kind, plus the CSS/CPRM content protection schemes.

use error::Error;
use utils::Reader;

use super::is_set;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serializable", derive(Serialize))]
pub struct DVDRead {
	/// conforms to DVD Multi Drive Read-only specification
	pub multi110: bool,
	pub dual_rw: bool,
	pub dual_r: bool,
}

impl DVDRead {
	pub fn parse(payload: &[u8]) -> Self {
		let mut r = Reader::new(payload);
		let flags = r.try_u8().unwrap_or(0);
		r.skip(1);
		let dual = r.try_u8().unwrap_or(0);
		DVDRead {
			multi110: is_set(flags, 0),
			dual_rw: is_set(dual, 1),
			dual_r: is_set(dual, 0),
		}
	}
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serializable", derive(Serialize))]
pub struct DVDMinusRWrite {
	pub buffer_underrun_free: bool,
	/// can write DVD-R DL
	pub rdl: bool,
	pub test_write: bool,
	pub dvd_rw: bool,
}

impl DVDMinusRWrite {
	pub fn parse(payload: &[u8]) -> Self {
		let flags = payload.first().cloned().unwrap_or(0);
		DVDMinusRWrite {
			buffer_underrun_free: is_set(flags, 6),
			rdl: is_set(flags, 3),
			test_write: is_set(flags, 2),
			dvd_rw: is_set(flags, 1),
		}
	}
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serializable", derive(Serialize))]
pub struct DVDPlusRW {
	pub write: bool,
	pub quick_start: bool,
	pub close_only: bool,
}

impl DVDPlusRW {
	pub fn parse(payload: &[u8]) -> Self {
		let mut r = Reader::new(payload);
		let flags = r.try_u8().unwrap_or(0);
		let format = r.try_u8().unwrap_or(0);
		DVDPlusRW {
			write: is_set(flags, 0),
			quick_start: is_set(format, 1),
			close_only: is_set(format, 0),
		}
	}
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serializable", derive(Serialize))]
pub struct DVDPlusR {
	pub write: bool,
}

impl DVDPlusR {
	pub fn parse(payload: &[u8]) -> Self {
		let flags = payload.first().cloned().unwrap_or(0);
		DVDPlusR { write: is_set(flags, 0) }
	}
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serializable", derive(Serialize))]
pub struct DVDPlusRWDualLayer {
	pub write: bool,
	pub quick_start: bool,
	pub close_only: bool,
}

impl DVDPlusRWDualLayer {
	pub fn parse(payload: &[u8]) -> Self {
		let mut r = Reader::new(payload);
		let flags = r.try_u8().unwrap_or(0);
		let format = r.try_u8().unwrap_or(0);
		DVDPlusRWDualLayer {
			write: is_set(flags, 0),
			quick_start: is_set(format, 1),
			close_only: is_set(format, 0),
		}
	}
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serializable", derive(Serialize))]
pub struct DVDPlusRDualLayer {
	pub write: bool,
}

impl DVDPlusRDualLayer {
	pub fn parse(payload: &[u8]) -> Self {
		let flags = payload.first().cloned().unwrap_or(0);
		DVDPlusRDualLayer { write: is_set(flags, 0) }
	}
}

#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serializable", derive(Serialize))]
pub struct LayerJumpRecording {
	pub link_sizes: Vec<u8>,
}

impl LayerJumpRecording {
	pub fn parse(payload: &[u8]) -> Result<Self, Error> {
		let mut r = Reader::new(payload);
		r.skip(3);
		let num_link_sizes = r.try_u8().unwrap_or(0) as usize;
		if num_link_sizes > r.remaining() {
			return Err(Error::SizeMismatch);
		}
		let link_sizes = r.read_bytes(num_link_sizes)?.to_vec();
		Ok(LayerJumpRecording { link_sizes: link_sizes })
	}
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serializable", derive(Serialize))]
pub struct DVDCSS {
	pub css_version: u8,
}

impl DVDCSS {
	pub fn parse(payload: &[u8]) -> Self {
		DVDCSS {
			css_version: payload.get(3).cloned().unwrap_or(0),
		}
	}
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serializable", derive(Serialize))]
pub struct DVDCPRM {
	pub cprm_version: u8,
}

impl DVDCPRM {
	pub fn parse(payload: &[u8]) -> Self {
		DVDCPRM {
			cprm_version: payload.get(3).cloned().unwrap_or(0),
		}
	}
}
