//! Six-bit AIS payload packing.
//!
//! Fields are appended most-significant bit first.  [`BitWriter::armor`]
//! turns the bit string into the printable payload carried by `!AIVDM`
//! sentences and reports how many zero fill bits were appended to reach a
//! multiple of six.

/// Append-only bit buffer for one AIS message.
#[derive(Clone, Debug, Default)]
pub struct BitWriter {
    bits: Vec<bool>,
}

impl BitWriter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.bits.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bits.is_empty()
    }

    /// Append the low `width` bits of `value`.
    pub fn put_u(&mut self, value: u64, width: u32) -> &mut Self {
        for shift in (0..width).rev() {
            self.bits.push((value >> shift) & 1 == 1);
        }
        self
    }

    /// Append `value` as a `width`-bit two's-complement integer.
    pub fn put_i(&mut self, value: i64, width: u32) -> &mut Self {
        let mask = if width >= 64 { u64::MAX } else { (1u64 << width) - 1 };
        self.put_u(value as u64 & mask, width)
    }

    /// Append `text` in six-bit ASCII, `chars` characters wide.
    ///
    /// Text is upper-cased, characters outside the AIS alphabet become `?`,
    /// and the field is padded with `@`.
    pub fn put_text(&mut self, text: &str, chars: usize) -> &mut Self {
        let mut codes = text.chars().flat_map(char::to_uppercase).map(sixbit_code);
        for _ in 0..chars {
            let code = codes.next().unwrap_or(0);
            self.put_u(u64::from(code), 6);
        }
        self
    }

    /// Armored payload string and the number of fill bits.
    pub fn armor(&self) -> (String, u8) {
        let fill = (6 - self.bits.len() % 6) % 6;
        let padded = self.bits.iter().copied().chain(std::iter::repeat_n(false, fill));

        let mut payload = String::with_capacity(self.bits.len().div_ceil(6));
        let mut value = 0u8;
        for (i, bit) in padded.enumerate() {
            value = (value << 1) | u8::from(bit);
            if i % 6 == 5 {
                payload.push(armor_char(value));
                value = 0;
            }
        }
        (payload, fill as u8)
    }
}

/// Six-bit code of `c`: `@`..`_` map to 0..31, space..`?` map to 32..63.
fn sixbit_code(c: char) -> u8 {
    match c {
        '@'..='_' => c as u8 - 64,
        ' '..='?' => c as u8,
        _ => b'?',
    }
}

/// Printable payload character for a six-bit value.
fn armor_char(value: u8) -> char {
    let v = if value < 40 { value + 48 } else { value + 56 };
    v as char
}
