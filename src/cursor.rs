use crate::error::NmeaError;
use crate::MAX_SENTENCE_LEN;

/// Returned by [`SentenceCursor::peek`] once the cursor sits at its capacity.
pub const END_OF_SENTENCE: u8 = 0;

/// Read position over one sentence.
///
/// Every decoder goes through `peek`/`advance`, so the capacity check lives
/// in exactly one place.
#[derive(Debug, Clone)]
pub struct SentenceCursor<'a> {
    buffer: &'a [u8],
    position: usize,
    capacity: usize,
}

impl<'a> SentenceCursor<'a> {
    pub fn new(buffer: &'a [u8]) -> Self {
        Self::with_capacity(buffer, MAX_SENTENCE_LEN)
    }

    /// Capacity is clamped to both the buffer length and [`MAX_SENTENCE_LEN`].
    pub fn with_capacity(buffer: &'a [u8], capacity: usize) -> Self {
        Self {
            buffer,
            position: 0,
            capacity: capacity.min(buffer.len()).min(MAX_SENTENCE_LEN),
        }
    }

    pub fn position(&self) -> usize {
        self.position
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn reset(&mut self) {
        self.position = 0;
    }

    pub fn peek(&self) -> u8 {
        if self.position < self.capacity {
            self.buffer[self.position]
        } else {
            END_OF_SENTENCE
        }
    }

    pub fn advance(&mut self) -> Result<(), NmeaError> {
        if self.position >= self.capacity {
            return Err(NmeaError::Overflow);
        }
        self.position += 1;
        Ok(())
    }

    /// Consumes and returns the current byte.
    pub fn read(&mut self) -> Result<u8, NmeaError> {
        let byte = self.peek();
        self.advance()?;
        Ok(byte)
    }

    /// Consumes `expected`, or fails with `MalformedFixChar` and stays put.
    pub fn expect(&mut self, expected: u8) -> Result<(), NmeaError> {
        if self.peek() != expected {
            return Err(NmeaError::MalformedFixChar);
        }
        self.advance()
    }

    /// `*` opens the checksum, so it ends the data part as well.
    pub fn at_end(&self) -> bool {
        is_end_of_sentence(self.peek())
    }

    /// Moves just past the next `,`. Stops quietly at the end of the sentence.
    pub fn skip_field(&mut self) -> Result<(), NmeaError> {
        loop {
            if self.at_end() {
                return Ok(());
            }
            if self.read()? == b',' {
                return Ok(());
            }
        }
    }
}

pub fn is_end_of_sentence(byte: u8) -> bool {
    matches!(byte, END_OF_SENTENCE | b'*' | b'\r' | b'\n')
}
