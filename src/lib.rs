/*!
This crate allows you to send various commands to optical disc drives, and to interpret the answers.

## Example

```no_run
use odd::Device;
use odd::mmc::MMCDevice;

let dev = Device::open("/dev/sr0").unwrap();
let config = dev.features(false).unwrap();
for f in &config.features {
	println!("{:04x}h current:{}", f.header.feature_code, f.header.current);
}
```

For more, dive into documentation for the module you're interested in.
*/

#![warn(missing_debug_implementations)]

#[cfg(feature = "serializable")]
#[macro_use]
extern crate serde_derive;

#[macro_use]
extern crate quick_error;
#[macro_use]
extern crate log;
extern crate byteorder;
extern crate libc;

/// Data transfer direction
#[derive(Debug)]
pub enum Direction { None, From, To, Both }

pub mod device;
pub use device::*;

pub mod error;
pub use error::Error;

pub mod scsi;
pub mod mmc;

pub mod index;

pub mod utils;
