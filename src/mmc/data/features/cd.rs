//! CD-family features: reading, track-at-once and session-at-once recording, audio playback.

use utils::Reader;

use super::is_set;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serializable", derive(Serialize))]
pub struct CDRead {
	/// digital audio play with accurate streaming
	pub dap: bool,
	pub c2_flags: bool,
	pub cd_text: bool,
}

impl CDRead {
	pub fn parse(payload: &[u8]) -> Self {
		let flags = payload.first().cloned().unwrap_or(0);
		CDRead {
			dap: is_set(flags, 7),
			c2_flags: is_set(flags, 1),
			cd_text: is_set(flags, 0),
		}
	}
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serializable", derive(Serialize))]
pub struct CDTrackAtOnce {
	/// zero-loss linking
	pub buffer_underrun_free: bool,
	pub rw_raw: bool,
	pub rw_pack: bool,
	pub test_write: bool,
	pub cd_rw: bool,
	pub rw_subcode: bool,
	/// bitmask of supported data types, see MMC "Data Type" codes
	pub data_type: u16,
}

impl CDTrackAtOnce {
	pub fn parse(payload: &[u8]) -> Self {
		let mut r = Reader::new(payload);
		let flags = r.try_u8().unwrap_or(0);
		r.skip(1);
		let data_type = r.try_be_u16().unwrap_or(0);
		CDTrackAtOnce {
			buffer_underrun_free: is_set(flags, 6),
			rw_raw: is_set(flags, 5),
			rw_pack: is_set(flags, 4),
			test_write: is_set(flags, 3),
			cd_rw: is_set(flags, 2),
			rw_subcode: is_set(flags, 1),
			data_type: data_type,
		}
	}
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serializable", derive(Serialize))]
pub struct CDMastering {
	pub buffer_underrun_free: bool,
	/// session at once
	pub sao: bool,
	/// raw multi-session
	pub raw_ms: bool,
	pub raw: bool,
	pub test_write: bool,
	pub cd_rw: bool,
	pub rw_subcode: bool,
	pub max_cue_sheet_length: u32,
}

impl CDMastering {
	pub fn parse(payload: &[u8]) -> Self {
		let mut r = Reader::new(payload);
		let flags = r.try_u8().unwrap_or(0);
		let max_cue = r.read_be_u24().unwrap_or(0);
		CDMastering {
			buffer_underrun_free: is_set(flags, 6),
			sao: is_set(flags, 5),
			raw_ms: is_set(flags, 4),
			raw: is_set(flags, 3),
			test_write: is_set(flags, 2),
			cd_rw: is_set(flags, 1),
			rw_subcode: is_set(flags, 0),
			max_cue_sheet_length: max_cue,
		}
	}
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serializable", derive(Serialize))]
pub struct CDRWMediaWriteSupport {
	/// bitmask of writable CD-RW subtypes (bit n: subtype n)
	pub subtypes: u8,
}

impl CDRWMediaWriteSupport {
	pub fn parse(payload: &[u8]) -> Self {
		CDRWMediaWriteSupport {
			subtypes: payload.get(1).cloned().unwrap_or(0),
		}
	}
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serializable", derive(Serialize))]
pub struct DDCDRWrite {
	pub test_write: bool,
}

impl DDCDRWrite {
	pub fn parse(payload: &[u8]) -> Self {
		let flags = payload.first().cloned().unwrap_or(0);
		DDCDRWrite { test_write: is_set(flags, 2) }
	}
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serializable", derive(Serialize))]
pub struct DDCDRWWrite {
	pub intermediate: bool,
	pub blank: bool,
}

impl DDCDRWWrite {
	pub fn parse(payload: &[u8]) -> Self {
		let flags = payload.first().cloned().unwrap_or(0);
		DDCDRWWrite {
			intermediate: is_set(flags, 1),
			blank: is_set(flags, 0),
		}
	}
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serializable", derive(Serialize))]
pub struct CDAudioExternalPlay {
	pub scan: bool,
	/// separate channel mute
	pub scm: bool,
	/// separate volume levels per channel
	pub sv: bool,
	pub volume_levels: u16,
}

impl CDAudioExternalPlay {
	pub fn parse(payload: &[u8]) -> Self {
		let mut r = Reader::new(payload);
		let flags = r.try_u8().unwrap_or(0);
		r.skip(1);
		let volume_levels = r.try_be_u16().unwrap_or(0);
		CDAudioExternalPlay {
			scan: is_set(flags, 2),
			scm: is_set(flags, 1),
			sv: is_set(flags, 0),
			volume_levels: volume_levels,
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn cd_read() {
		let f = CDRead::parse(&[0b1000_0011, 0x00, 0x00, 0x00]);
		assert!(f.dap);
		assert!(f.c2_flags);
		assert!(f.cd_text);
	}

	#[test]
	fn track_at_once() {
		let f = CDTrackAtOnce::parse(&[0b0100_1100, 0x00, 0x00, 0x0f]);
		assert!(f.buffer_underrun_free);
		assert!(!f.rw_raw);
		assert!(f.test_write);
		assert!(f.cd_rw);
		assert_eq!(f.data_type, 0x000f);
	}

	#[test]
	fn audio_play_volume_levels() {
		let f = CDAudioExternalPlay::parse(&[0x07, 0x00, 0x01, 0x00]);
		assert!(f.scan && f.scm && f.sv);
		assert_eq!(f.volume_levels, 256);
	}
}
