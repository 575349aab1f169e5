use std::fs::{self, File};
use std::io::{self, Read};

use std::path::PathBuf;

/// See [parent module docs](../index.html)
#[derive(Debug)]
pub struct Device {
	pub file: File,
}

impl Device {
	pub fn open(path: &str) -> Result<Self, io::Error> {
		Ok(Device {
			file: File::open(path)?,
		})
	}

	/**
	Returns block device paths of every optical drive the kernel knows of.

	Drives are picked from `/sys/class/block` by their SCSI peripheral device type: `device/type` reads `5` for CD/DVD devices and nothing else. This skips partitions (no `device/` at all) along with disks, RAM disks and the like, and it does not need libudev to do so.
	*/
	pub fn list_devices() -> Vec<PathBuf> {
		let mut devices = vec![];

		let dir = match fs::read_dir("/sys/class/block") {
			Ok(dir) => dir,
			Err(_) => return devices,
		};

		for d in dir {
			let d = if let Ok(d) = d { d } else { continue };

			// XXX this assumes that dir name equals to whatever `DEVNAME` is set to in the uevent file
			let name = d.file_name();
			let path = if let Ok(path) = d.path().canonicalize() { path } else { continue };

			// skip devices like /dev/{loop,ram,zram,md,fd}*
			if path.starts_with("/sys/devices/virtual/") || path.starts_with("/sys/devices/platform/floppy") { continue }

			// $ cat /sys/class/block/sr0/device/type
			// 5
			let mut dev_type = String::new();
			match File::open(path.join("device/type")) {
				Ok(mut f) => if f.read_to_string(&mut dev_type).is_err() { continue },
				// partitions and virtual devices carry no `device/`
				Err(_) => continue,
			}
			if dev_type.trim() != "5" { continue }

			if let Some(name) = name.to_str() {
				devices.push(PathBuf::from(format!("/dev/{}", name)));
			}
		}

		devices
	}
}
