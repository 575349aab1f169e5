/*!
Small helpers shared across the crate: a bounds-checked cursor over response buffers, and a hexdump formatter for debug output.
*/

use byteorder::{BigEndian, ByteOrder};

use error::Error;

/**
Cursor over a response buffer.

Offers two families of reads:

* hard reads (`read_*`) return `Err(Error::OutOfRange)` when the buffer ends too early; use these when the format guarantees the field is present,
* progressive reads (`try_*`) return `None` instead; use these for responses that devices are allowed to truncate at arbitrary points (e.g. INQUIRY data).
*/
#[derive(Debug)]
pub struct Reader<'a> {
	data: &'a [u8],
	pos: usize,
}

impl<'a> Reader<'a> {
	pub fn new(data: &'a [u8]) -> Self {
		Reader { data: data, pos: 0 }
	}

	pub fn remaining(&self) -> usize {
		self.data.len() - self.pos
	}

	pub fn read_bytes(&mut self, n: usize) -> Result<&'a [u8], Error> {
		if self.remaining() < n {
			return Err(Error::OutOfRange);
		}
		let out = &self.data[self.pos .. self.pos + n];
		self.pos += n;
		Ok(out)
	}

	pub fn read_u8(&mut self) -> Result<u8, Error> {
		self.read_bytes(1).map(|b| b[0])
	}

	pub fn read_be_u16(&mut self) -> Result<u16, Error> {
		self.read_bytes(2).map(|b| BigEndian::read_u16(b))
	}

	pub fn read_be_u24(&mut self) -> Result<u32, Error> {
		self.read_bytes(3).map(|b| BigEndian::read_u24(b))
	}

	pub fn read_be_u32(&mut self) -> Result<u32, Error> {
		self.read_bytes(4).map(|b| BigEndian::read_u32(b))
	}

	pub fn try_bytes(&mut self, n: usize) -> Option<&'a [u8]> {
		self.read_bytes(n).ok()
	}

	pub fn try_u8(&mut self) -> Option<u8> {
		self.read_u8().ok()
	}

	pub fn try_be_u16(&mut self) -> Option<u16> {
		self.read_be_u16().ok()
	}

	pub fn try_be_u32(&mut self) -> Option<u32> {
		self.read_be_u32().ok()
	}

	/// Advances the cursor, clamping at the end of the buffer.
	pub fn skip(&mut self, n: usize) {
		self.pos += n.min(self.remaining());
	}
}

/// Renders an ASCII field, replacing unprintable bytes and trimming trailing spaces.
pub fn ascii_field(data: &[u8]) -> String {
	let s: String = data.iter()
		.map(|&b| if b >= 0x20 && b < 0x7f { b as char } else { ' ' })
		.collect();
	s.trim_end().to_string()
}

#[cfg_attr(feature = "cargo-clippy", allow(needless_range_loop))]
pub fn hexdump(data: &[u8]) -> String {
	// 3× len for ' {:02x}'
	// len/16 for \n
	// len/16 for ' ' before ascii
	// len for ascii
	// 2 to "round" (/16)s up and have lesser chance of reallocation
	let mut dump = String::with_capacity(4*data.len() + data.len()/8 + 2);
	let mut ascii = String::with_capacity(16);

	for i in 0..data.len() {
		if i % 16 == 0 {
			dump.push(' ');
			dump.push_str(&ascii);
			ascii.truncate(0);
			dump.push('\n');
		}
		dump.push_str(&format!(" {:02x}", data[i]));
		ascii.push(
			if data[i] >= 0x20 && data[i] <= 0x7f {
				// safety: we already checked whether the u8 is a valid ascii printable (and therefore is a valid unicode codepoint)
				unsafe { ::std::char::from_u32_unchecked(data[i] as u32) }
			} else {
				// ' ' and '.' are ambiguous, and a string of '�'s is just unreadable
				'░'
			}
		);
	}
	dump.push(' ');
	dump.push_str(&ascii);
	ascii.truncate(0);
	dump.push('\n');
	dump
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn hard_reads() {
		let buf = [0x00, 0x01, 0x0b, 0x08, 0xde, 0xad, 0xbe, 0xef];
		let mut r = Reader::new(&buf);
		assert_eq!(r.read_be_u16(), Ok(0x0001));
		assert_eq!(r.read_u8(), Ok(0x0b));
		assert_eq!(r.read_u8(), Ok(0x08));
		assert_eq!(r.read_be_u32(), Ok(0xdeadbeef));
		assert_eq!(r.read_u8(), Err(Error::OutOfRange));
	}

	#[test]
	fn progressive_reads_stop_at_the_end() {
		let buf = [0x12, 0x34, 0x56];
		let mut r = Reader::new(&buf);
		assert_eq!(r.try_be_u16(), Some(0x1234));
		// two more bytes would be needed, only one remains
		assert_eq!(r.try_be_u16(), None);
		assert_eq!(r.try_u8(), Some(0x56));
		assert_eq!(r.try_u8(), None);
	}

	#[test]
	fn failed_read_does_not_advance() {
		let buf = [0xaa, 0xbb];
		let mut r = Reader::new(&buf);
		assert_eq!(r.read_be_u32(), Err(Error::OutOfRange));
		assert_eq!(r.read_be_u16(), Ok(0xaabb));
	}

	#[test]
	fn skip_clamps() {
		let buf = [0; 4];
		let mut r = Reader::new(&buf);
		r.skip(100);
		assert_eq!(r.remaining(), 0);
	}

	#[test]
	fn ascii_trimmed() {
		assert_eq!(ascii_field(b"HL-DT-ST"), "HL-DT-ST");
		assert_eq!(ascii_field(b"BD-RE  WH16NS40 "), "BD-RE  WH16NS40");
		assert_eq!(ascii_field(&[0x41, 0x00, 0xff, 0x42]), "A  B");
	}
}
