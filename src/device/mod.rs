/*!
Thin wrapper for the platform-specific device handle.

This module (and the struct it provides) allows opening (`Device::open(&path)`) and interacting with (via the [`scsi::SCSIDevice`](../scsi/trait.SCSIDevice.html) and [`mmc::MMCDevice`](../mmc/trait.MMCDevice.html) traits) optical drives without caring what kind of handle the operating system wants commands to be executed against.

## Example

See [parent module](../index.html).
*/

#[cfg(target_os = "linux")]
pub mod linux;
#[cfg(target_os = "linux")]
pub use self::linux::*;
