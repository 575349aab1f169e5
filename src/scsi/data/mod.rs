/*!
Parsers for low-level structures found in SCSI replies.
*/

pub mod inquiry;
pub mod sense;
