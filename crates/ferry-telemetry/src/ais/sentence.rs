//! NMEA `!AIVDM` sentence framing.

/// Longest armored payload carried by one sentence.
pub const MAX_PAYLOAD_CHARS: usize = 60;

/// Radio channel written into every sentence.
pub const CHANNEL: char = 'A';

/// XOR of every byte of `body` (the text between `!` and `*`).
pub fn checksum(body: &str) -> u8 {
    body.bytes().fold(0, |acc, b| acc ^ b)
}

/// Split an armored payload into one or more `!AIVDM` sentences.
///
/// Single-sentence messages leave the sequential message id empty;
/// multi-part messages carry `seq_id`.  Fill bits are reported on the last
/// fragment only.
pub fn frame(payload: &str, fill: u8, seq_id: u8) -> Vec<String> {
    let chunks: Vec<&str> = if payload.is_empty() {
        vec![""]
    } else {
        payload
            .as_bytes()
            .chunks(MAX_PAYLOAD_CHARS)
            .map(|c| std::str::from_utf8(c).unwrap_or_default())
            .collect()
    };
    let count = chunks.len();
    let seq = if count > 1 { seq_id.to_string() } else { String::new() };

    chunks
        .iter()
        .enumerate()
        .map(|(i, chunk)| {
            let number = i + 1;
            let fill = if number == count { fill } else { 0 };
            let body = format!("AIVDM,{count},{number},{seq},{CHANNEL},{chunk},{fill}");
            format!("!{body}*{:02X}", checksum(&body))
        })
        .collect()
}

/// Rotating sequential message id for multi-part messages, `0..=9`.
#[derive(Clone, Debug, Default)]
pub struct SequenceId(u8);

impl SequenceId {
    /// Return the current id and advance to the next one.
    pub fn next_id(&mut self) -> u8 {
        let id = self.0;
        self.0 = (self.0 + 1) % 10;
        id
    }
}
