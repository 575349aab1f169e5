/*!
Errors shared by all the response decoders in this crate.

Note that an unrecognized feature code is not an error: descriptors for features this crate knows nothing about still decode into header-only records.
*/

use std::io;

quick_error! {
	#[derive(Debug, Clone, Copy, PartialEq, Eq)]
	pub enum Error {
		InvalidArgument {
			display("buffer is too small to hold a valid response")
		}
		InvalidHeader {
			display("header field violates response format")
		}
		SizeMismatch {
			display("declared length does not match the data")
		}
		OutOfRange {
			display("read or growth beyond a hard limit")
		}
		OutOfMemory {
			display("allocation failed")
		}
		InvalidResponseCode {
			display("unrecognized sense response code")
		}
	}
}

impl From<Error> for io::Error {
	fn from(err: Error) -> Self {
		let kind = match err {
			Error::InvalidArgument => io::ErrorKind::InvalidInput,
			Error::OutOfMemory => io::ErrorKind::Other,
			_ => io::ErrorKind::InvalidData,
		};
		io::Error::new(kind, format!("{}", err))
	}
}
