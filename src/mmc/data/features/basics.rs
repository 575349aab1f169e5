//! Basic drive features: Core (0001h), Morphing (0002h), Removable Medium (0003h), Write Protect (0004h).
//!
//! Feature data may be shorter than the newest revision of its format: drives report the size they implement through the additional length field, and fields past the end decode as absent (`false`/zero).

use utils::Reader;

use super::is_set;

/// Physical interface standard, from the Core feature.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serializable", derive(Serialize))]
pub enum PhysicalInterface {
	Unspecified,
	SCSI,
	ATAPI,
	Ieee1394,
	Ieee1394A,
	FibreChannel,
	Ieee1394B,
	SerialATAPI,
	USB,
	VendorUnique(u32),
	Reserved(u32),
}

impl From<u32> for PhysicalInterface {
	fn from(x: u32) -> Self {
		match x {
			0 => PhysicalInterface::Unspecified,
			1 => PhysicalInterface::SCSI,
			2 => PhysicalInterface::ATAPI,
			3 => PhysicalInterface::Ieee1394,
			4 => PhysicalInterface::Ieee1394A,
			5 => PhysicalInterface::FibreChannel,
			6 => PhysicalInterface::Ieee1394B,
			7 => PhysicalInterface::SerialATAPI,
			8 => PhysicalInterface::USB,
			0x10000 ..= 0x1ffff => PhysicalInterface::VendorUnique(x),
			_ => PhysicalInterface::Reserved(x),
		}
	}
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serializable", derive(Serialize))]
pub struct Core {
	pub physical_interface: PhysicalInterface,
	/// INQUIRY data beyond 36 bytes is valid
	pub inq2: bool,
	/// device busy events are supported
	pub dbe: bool,
}

impl Core {
	pub fn parse(payload: &[u8]) -> Self {
		let mut r = Reader::new(payload);
		let interface = r.try_be_u32().unwrap_or(0);
		let flags = r.try_u8().unwrap_or(0);
		Core {
			physical_interface: PhysicalInterface::from(interface),
			inq2: is_set(flags, 1),
			dbe: is_set(flags, 0),
		}
	}
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serializable", derive(Serialize))]
pub struct Morphing {
	/// operational change request/notification class events
	pub oc_event: bool,
	pub asynchronous: bool,
}

impl Morphing {
	pub fn parse(payload: &[u8]) -> Self {
		let flags = payload.first().cloned().unwrap_or(0);
		Morphing {
			oc_event: is_set(flags, 1),
			asynchronous: is_set(flags, 0),
		}
	}
}

/// How the medium gets into the drive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serializable", derive(Serialize))]
pub enum LoadingMechanism {
	CaddySlot,
	Tray,
	PopUp,
	ChangerIndividual,
	ChangerCartridge,
	Reserved(u8),
}

impl From<u8> for LoadingMechanism {
	fn from(x: u8) -> Self {
		match x {
			0 => LoadingMechanism::CaddySlot,
			1 => LoadingMechanism::Tray,
			2 => LoadingMechanism::PopUp,
			4 => LoadingMechanism::ChangerIndividual,
			5 => LoadingMechanism::ChangerCartridge,
			_ => LoadingMechanism::Reserved(x),
		}
	}
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serializable", derive(Serialize))]
pub struct RemovableMedium {
	pub loading_mechanism: LoadingMechanism,
	pub load: bool,
	pub eject: bool,
	/// drive jumper can disable the prevent/allow state
	pub prevent_jumper: bool,
	pub lock: bool,
}

impl RemovableMedium {
	pub fn parse(payload: &[u8]) -> Self {
		let flags = payload.first().cloned().unwrap_or(0);
		RemovableMedium {
			loading_mechanism: LoadingMechanism::from(flags >> 5),
			load: is_set(flags, 4),
			eject: is_set(flags, 3),
			prevent_jumper: is_set(flags, 2),
			lock: is_set(flags, 0),
		}
	}
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serializable", derive(Serialize))]
pub struct WriteProtect {
	/// disc write protect PAC support
	pub dwp: bool,
	/// write protect disc control block support
	pub wdcb: bool,
	/// software write protect until power-down
	pub spwp: bool,
	/// persistent write protect support
	pub sswpp: bool,
}

impl WriteProtect {
	pub fn parse(payload: &[u8]) -> Self {
		let flags = payload.first().cloned().unwrap_or(0);
		WriteProtect {
			dwp: is_set(flags, 3),
			wdcb: is_set(flags, 2),
			spwp: is_set(flags, 1),
			sswpp: is_set(flags, 0),
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn core_usb() {
		let core = Core::parse(&[0x00, 0x00, 0x00, 0x08, 0x03, 0x00, 0x00, 0x00]);
		assert_eq!(core.physical_interface, PhysicalInterface::USB);
		assert!(core.inq2);
		assert!(core.dbe);
	}

	#[test]
	fn core_short_payload() {
		// version 0 of the feature carried the interface word only
		let core = Core::parse(&[0x00, 0x00, 0x00, 0x02]);
		assert_eq!(core.physical_interface, PhysicalInterface::ATAPI);
		assert!(!core.inq2);
		assert!(!core.dbe);
	}

	#[test]
	fn vendor_unique_interface() {
		let core = Core::parse(&[0x00, 0x01, 0x00, 0x42]);
		assert_eq!(core.physical_interface, PhysicalInterface::VendorUnique(0x10042));
	}

	#[test]
	fn removable_medium_tray() {
		let rm = RemovableMedium::parse(&[0b0011_1001, 0x00, 0x00, 0x00]);
		assert_eq!(rm.loading_mechanism, LoadingMechanism::Tray);
		assert!(rm.load);
		assert!(rm.eject);
		assert!(!rm.prevent_jumper);
		assert!(rm.lock);
	}
}
