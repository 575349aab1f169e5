/*!
Feature descriptors, as returned by GET CONFIGURATION.

Every descriptor starts with a 4-byte header:

```plain
byte 0-1  feature code (big-endian)
byte 2    bits 2-5: version, bit 1: persistent, bit 0: current
byte 3    additional length (size of the data that follows)
```

followed by `additional length` bytes of feature-specific data. Feature codes this module does not recognize are not an error: they decode into header-only records.

Use [`parse_descriptor`](fn.parse_descriptor.html) to decode a single descriptor, or [`configuration`](../configuration/index.html) to decode a whole response.
*/

use byteorder::{BigEndian, ByteOrder};

use error::Error;

pub mod profiles;
pub mod basics;
pub mod write;
pub mod cd;
pub mod dvd;
pub mod bd;
pub mod drive;

pub(crate) fn is_set(x: u8, bit: usize) -> bool {
	x & (1 << bit) != 0
}

/// Common feature descriptor header.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serializable", derive(Serialize))]
pub struct Header {
	pub feature_code: u16,
	pub version: u8,
	pub persistent: bool,
	pub current: bool,
	/// Size of the feature-specific data, in bytes. Always a multiple of 4.
	pub additional_length: u8,
}

impl Header {
	pub fn parse(buf: &[u8]) -> Result<Self, Error> {
		if buf.len() < 4 {
			return Err(Error::InvalidArgument);
		}
		let additional_length = buf[3];
		if additional_length % 4 != 0 {
			return Err(Error::InvalidHeader);
		}
		Ok(Header {
			feature_code: BigEndian::read_u16(&buf[0..2]),
			version: (buf[2] >> 2) & 0b1111,
			persistent: is_set(buf[2], 1),
			current: is_set(buf[2], 0),
			additional_length: additional_length,
		})
	}
}

/**
Feature-specific data, one variant per recognized feature code.

Features whose data carries no decodable fields are represented with unit variants. `Unknown` covers every code this crate does not recognize; the header is still available in the enclosing [`FeatureRecord`](struct.FeatureRecord.html).
*/
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serializable", derive(Serialize))]
pub enum FeatureBody {
	ProfileList(profiles::ProfileList),
	Core(basics::Core),
	Morphing(basics::Morphing),
	RemovableMedium(basics::RemovableMedium),
	WriteProtect(basics::WriteProtect),
	RandomReadable(write::RandomReadable),
	MultiRead,
	CDRead(cd::CDRead),
	DVDRead(dvd::DVDRead),
	RandomWritable(write::RandomWritable),
	IncrementalStreamingWritable(write::IncrementalStreamingWritable),
	SectorErasable,
	Formattable(write::Formattable),
	DefectManagement(write::DefectManagement),
	WriteOnce(write::WriteOnce),
	RestrictedOverwrite,
	CDRWCAVWrite,
	MRW(write::MRW),
	EnhancedDefectReporting(write::EnhancedDefectReporting),
	DVDPlusRW(dvd::DVDPlusRW),
	DVDPlusR(dvd::DVDPlusR),
	RigidRestrictedOverwrite(write::RigidRestrictedOverwrite),
	CDTrackAtOnce(cd::CDTrackAtOnce),
	CDMastering(cd::CDMastering),
	DVDMinusRWrite(dvd::DVDMinusRWrite),
	DDCDRead,
	DDCDRWrite(cd::DDCDRWrite),
	DDCDRWWrite(cd::DDCDRWWrite),
	LayerJumpRecording(dvd::LayerJumpRecording),
	CDRWMediaWriteSupport(cd::CDRWMediaWriteSupport),
	BDRPseudoOverwrite,
	DVDPlusRWDualLayer(dvd::DVDPlusRWDualLayer),
	DVDPlusRDualLayer(dvd::DVDPlusRDualLayer),
	BDRead(bd::BDRead),
	BDWrite(bd::BDWrite),
	TSR,
	HDDVDRead(bd::HDDVDRead),
	HDDVDWrite(bd::HDDVDWrite),
	HybridDisc(bd::HybridDisc),
	PowerManagement,
	Smart(drive::Smart),
	EmbeddedChanger(drive::EmbeddedChanger),
	CDAudioExternalPlay(cd::CDAudioExternalPlay),
	MicrocodeUpgrade(drive::MicrocodeUpgrade),
	Timeout(drive::Timeout),
	DVDCSS(dvd::DVDCSS),
	RealTimeStreaming(drive::RealTimeStreaming),
	DriveSerialNumber(drive::DriveSerialNumber),
	MediaSerialNumber,
	DiscControlBlocks(drive::DiscControlBlocks),
	DVDCPRM(dvd::DVDCPRM),
	FirmwareInformation(drive::FirmwareInformation),
	AACS(drive::AACS),
	VCPS,
	Unknown,
}

/// Single decoded feature descriptor.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serializable", derive(Serialize))]
pub struct FeatureRecord {
	pub header: Header,
	pub body: FeatureBody,
}

/**
Decodes a single feature descriptor from the start of `buf` and returns it together with the number of bytes it occupied (`4 + additional length`).

## Errors

* `InvalidArgument` if `buf` cannot hold the 4-byte header,
* `InvalidHeader` if the additional length is not a multiple of 4,
* `SizeMismatch` if `buf` ends before the declared feature data does,
* whatever the feature-specific decoder returns.
*/
pub fn parse_descriptor(buf: &[u8]) -> Result<(FeatureRecord, usize), Error> {
	let header = Header::parse(buf)?;
	let len = header.additional_length as usize;
	if buf.len() < 4 + len {
		return Err(Error::SizeMismatch);
	}
	let payload = &buf[4 .. 4 + len];

	let body = match header.feature_code {
		0x0000 => FeatureBody::ProfileList(profiles::ProfileList::parse(payload)),
		0x0001 => FeatureBody::Core(basics::Core::parse(payload)),
		0x0002 => FeatureBody::Morphing(basics::Morphing::parse(payload)),
		0x0003 => FeatureBody::RemovableMedium(basics::RemovableMedium::parse(payload)),
		0x0004 => FeatureBody::WriteProtect(basics::WriteProtect::parse(payload)),
		0x0010 => FeatureBody::RandomReadable(write::RandomReadable::parse(payload)),
		0x001d => FeatureBody::MultiRead,
		0x001e => FeatureBody::CDRead(cd::CDRead::parse(payload)),
		0x001f => FeatureBody::DVDRead(dvd::DVDRead::parse(payload)),
		0x0020 => FeatureBody::RandomWritable(write::RandomWritable::parse(payload)),
		0x0021 => FeatureBody::IncrementalStreamingWritable(write::IncrementalStreamingWritable::parse(payload)?),
		0x0022 => FeatureBody::SectorErasable,
		0x0023 => FeatureBody::Formattable(write::Formattable::parse(payload)),
		0x0024 => FeatureBody::DefectManagement(write::DefectManagement::parse(payload)),
		0x0025 => FeatureBody::WriteOnce(write::WriteOnce::parse(payload)),
		0x0026 => FeatureBody::RestrictedOverwrite,
		0x0027 => FeatureBody::CDRWCAVWrite,
		0x0028 => FeatureBody::MRW(write::MRW::parse(payload)),
		0x0029 => FeatureBody::EnhancedDefectReporting(write::EnhancedDefectReporting::parse(payload)),
		0x002a => FeatureBody::DVDPlusRW(dvd::DVDPlusRW::parse(payload)),
		0x002b => FeatureBody::DVDPlusR(dvd::DVDPlusR::parse(payload)),
		0x002c => FeatureBody::RigidRestrictedOverwrite(write::RigidRestrictedOverwrite::parse(payload)),
		0x002d => FeatureBody::CDTrackAtOnce(cd::CDTrackAtOnce::parse(payload)),
		0x002e => FeatureBody::CDMastering(cd::CDMastering::parse(payload)),
		0x002f => FeatureBody::DVDMinusRWrite(dvd::DVDMinusRWrite::parse(payload)),
		0x0030 => FeatureBody::DDCDRead,
		0x0031 => FeatureBody::DDCDRWrite(cd::DDCDRWrite::parse(payload)),
		0x0032 => FeatureBody::DDCDRWWrite(cd::DDCDRWWrite::parse(payload)),
		0x0033 => FeatureBody::LayerJumpRecording(dvd::LayerJumpRecording::parse(payload)?),
		0x0037 => FeatureBody::CDRWMediaWriteSupport(cd::CDRWMediaWriteSupport::parse(payload)),
		0x0038 => FeatureBody::BDRPseudoOverwrite,
		0x003a => FeatureBody::DVDPlusRWDualLayer(dvd::DVDPlusRWDualLayer::parse(payload)),
		0x003b => FeatureBody::DVDPlusRDualLayer(dvd::DVDPlusRDualLayer::parse(payload)),
		0x0040 => FeatureBody::BDRead(bd::BDRead::parse(payload)),
		0x0041 => FeatureBody::BDWrite(bd::BDWrite::parse(payload)),
		0x0042 => FeatureBody::TSR,
		0x0050 => FeatureBody::HDDVDRead(bd::HDDVDRead::parse(payload)),
		0x0051 => FeatureBody::HDDVDWrite(bd::HDDVDWrite::parse(payload)),
		0x0080 => FeatureBody::HybridDisc(bd::HybridDisc::parse(payload)),
		0x0100 => FeatureBody::PowerManagement,
		0x0101 => FeatureBody::Smart(drive::Smart::parse(payload)),
		0x0102 => FeatureBody::EmbeddedChanger(drive::EmbeddedChanger::parse(payload)),
		0x0103 => FeatureBody::CDAudioExternalPlay(cd::CDAudioExternalPlay::parse(payload)),
		0x0104 => FeatureBody::MicrocodeUpgrade(drive::MicrocodeUpgrade::parse(payload)),
		0x0105 => FeatureBody::Timeout(drive::Timeout::parse(payload)),
		0x0106 => FeatureBody::DVDCSS(dvd::DVDCSS::parse(payload)),
		0x0107 => FeatureBody::RealTimeStreaming(drive::RealTimeStreaming::parse(payload)),
		0x0108 => FeatureBody::DriveSerialNumber(drive::DriveSerialNumber::parse(payload)),
		0x0109 => FeatureBody::MediaSerialNumber,
		0x010a => FeatureBody::DiscControlBlocks(drive::DiscControlBlocks::parse(payload)),
		0x010b => FeatureBody::DVDCPRM(dvd::DVDCPRM::parse(payload)),
		0x010c => FeatureBody::FirmwareInformation(drive::FirmwareInformation::parse(payload)),
		0x010d => FeatureBody::AACS(drive::AACS::parse(payload)),
		0x0110 => FeatureBody::VCPS,
		_ => FeatureBody::Unknown,
	};

	Ok((FeatureRecord { header: header, body: body }, 4 + len))
}

/// Human-readable feature name, for unrecognized codes returns `"<unknown>"`.
pub fn feature_name(code: u16) -> &'static str {
	match code {
		0x0000 => "Profile List",
		0x0001 => "Core",
		0x0002 => "Morphing",
		0x0003 => "Removable Medium",
		0x0004 => "Write Protect",
		0x0010 => "Random Readable",
		0x001d => "Multi-Read",
		0x001e => "CD Read",
		0x001f => "DVD Read",
		0x0020 => "Random Writable",
		0x0021 => "Incremental Streaming Writable",
		0x0022 => "Sector Erasable",
		0x0023 => "Formattable",
		0x0024 => "Hardware Defect Management",
		0x0025 => "Write Once",
		0x0026 => "Restricted Overwrite",
		0x0027 => "CD-RW CAV Write",
		0x0028 => "MRW",
		0x0029 => "Enhanced Defect Reporting",
		0x002a => "DVD+RW",
		0x002b => "DVD+R",
		0x002c => "Rigid Restricted Overwrite",
		0x002d => "CD Track at Once",
		0x002e => "CD Mastering",
		0x002f => "DVD-R/-RW Write",
		0x0030 => "DDCD Read",
		0x0031 => "DDCD-R Write",
		0x0032 => "DDCD-RW Write",
		0x0033 => "Layer Jump Recording",
		0x0037 => "CD-RW Media Write Support",
		0x0038 => "BD-R Pseudo-Overwrite",
		0x003a => "DVD+RW Dual Layer",
		0x003b => "DVD+R Dual Layer",
		0x0040 => "BD Read",
		0x0041 => "BD Write",
		0x0042 => "Timely Safe Recording",
		0x0050 => "HD DVD Read",
		0x0051 => "HD DVD Write",
		0x0080 => "Hybrid Disc",
		0x0100 => "Power Management",
		0x0101 => "S.M.A.R.T.",
		0x0102 => "Embedded Changer",
		0x0103 => "CD Audio External Play",
		0x0104 => "Microcode Upgrade",
		0x0105 => "Timeout",
		0x0106 => "DVD CSS",
		0x0107 => "Real Time Streaming",
		0x0108 => "Drive Serial Number",
		0x0109 => "Media Serial Number",
		0x010a => "Disc Control Blocks",
		0x010b => "DVD CPRM",
		0x010c => "Firmware Information",
		0x010d => "AACS",
		0x0110 => "VCPS",
		_ => "<unknown>",
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use super::basics::PhysicalInterface;

	#[test]
	fn core_descriptor() {
		let buf = [
			0x00, 0x01, // feature code
			0x0b, // version 2, persistent, current
			0x08, // additional length
			0x00, 0x00, 0x00, 0x01, // physical interface: SCSI
			0x01, 0x00, 0x00, 0x00, // DBE
		];
		let (record, consumed) = parse_descriptor(&buf).unwrap();
		assert_eq!(consumed, 12);
		assert_eq!(record.header, Header {
			feature_code: 0x0001,
			version: 2,
			persistent: true,
			current: true,
			additional_length: 8,
		});
		match record.body {
			FeatureBody::Core(ref core) => {
				assert_eq!(core.physical_interface, PhysicalInterface::SCSI);
				assert!(!core.inq2);
				assert!(core.dbe);
			},
			ref other => panic!("expected Core, got {:?}", other),
		}
	}

	#[test]
	fn header_too_short() {
		assert_eq!(Header::parse(&[0x00, 0x01, 0x0b]), Err(Error::InvalidArgument));
	}

	#[test]
	fn additional_length_must_be_aligned() {
		assert_eq!(Header::parse(&[0x00, 0x01, 0x0b, 0x06]), Err(Error::InvalidHeader));
	}

	#[test]
	fn data_shorter_than_declared() {
		let buf = [0x00, 0x01, 0x0b, 0x08, 0x00, 0x00];
		assert_eq!(parse_descriptor(&buf), Err(Error::SizeMismatch));
	}

	#[test]
	fn unknown_code_keeps_the_header() {
		let buf = [
			0xff, 0x31, 0x02, 0x04,
			0xde, 0xad, 0xbe, 0xef,
		];
		let (record, consumed) = parse_descriptor(&buf).unwrap();
		assert_eq!(consumed, 8);
		assert_eq!(record.header.feature_code, 0xff31);
		assert!(record.header.persistent);
		assert!(!record.header.current);
		assert_eq!(record.body, FeatureBody::Unknown);
	}

	#[test]
	fn decode_is_idempotent() {
		let buf = [
			0x00, 0x00, 0x03, 0x08,
			0x00, 0x08, 0x01, 0x00,
			0x00, 0x10, 0x00, 0x00,
		];
		assert_eq!(parse_descriptor(&buf).unwrap(), parse_descriptor(&buf).unwrap());
	}
}
