//! Profile List feature (0000h): every profile the drive supports, with the currently active ones flagged.

use byteorder::{BigEndian, ByteOrder};

use super::is_set;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serializable", derive(Serialize))]
pub struct ProfileDescriptor {
	pub number: u16,
	pub current: bool,
}

#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serializable", derive(Serialize))]
pub struct ProfileList {
	pub profiles: Vec<ProfileDescriptor>,
}

impl ProfileList {
	pub fn parse(payload: &[u8]) -> Self {
		// each profile descriptor is 4 bytes: number, flags, reserved
		let profiles = payload.chunks(4)
			.filter(|chunk| chunk.len() == 4)
			.map(|chunk| ProfileDescriptor {
				number: BigEndian::read_u16(&chunk[0..2]),
				current: is_set(chunk[2], 0),
			})
			.collect();
		ProfileList { profiles: profiles }
	}
}

/// Human-readable profile name, for unrecognized profiles returns `"<unknown>"`.
pub fn profile_name(number: u16) -> &'static str {
	match number {
		0x0001 => "Non-removable disk",
		0x0002 => "Removable disk",
		0x0003 => "MO erasable",
		0x0004 => "Optical write once",
		0x0005 => "AS-MO",
		0x0008 => "CD-ROM",
		0x0009 => "CD-R",
		0x000a => "CD-RW",
		0x0010 => "DVD-ROM",
		0x0011 => "DVD-R sequential",
		0x0012 => "DVD-RAM",
		0x0013 => "DVD-RW restricted overwrite",
		0x0014 => "DVD-RW sequential",
		0x0015 => "DVD-R DL sequential",
		0x0016 => "DVD-R DL layer jump",
		0x0017 => "DVD-RW DL",
		0x0018 => "DVD-Download disc",
		0x001a => "DVD+RW",
		0x001b => "DVD+R",
		0x002a => "DVD+RW DL",
		0x002b => "DVD+R DL",
		0x0040 => "BD-ROM",
		0x0041 => "BD-R SRM",
		0x0042 => "BD-R RRM",
		0x0043 => "BD-RE",
		0x0050 => "HD DVD-ROM",
		0x0051 => "HD DVD-R",
		0x0052 => "HD DVD-RAM",
		0x0053 => "HD DVD-RW",
		0x0058 => "HD DVD-R DL",
		0x005a => "HD DVD-RW DL",
		0xffff => "Nonconforming profile",
		_ => "<unknown>",
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn two_profiles() {
		let payload = [
			0x00, 0x08, 0x01, 0x00, // CD-ROM, current
			0x00, 0x10, 0x00, 0x00, // DVD-ROM
		];
		let list = ProfileList::parse(&payload);
		assert_eq!(list.profiles, vec![
			ProfileDescriptor { number: 0x0008, current: true },
			ProfileDescriptor { number: 0x0010, current: false },
		]);
	}

	#[test]
	fn empty_payload() {
		assert_eq!(ProfileList::parse(&[]).profiles, vec![]);
	}
}
