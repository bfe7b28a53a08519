//! Code width bookkeeping shared by the encoder and decoder.

use tracing::trace;

/// Current code width and the countdown to its next increase.
///
/// Every token consumes one step of the countdown; a literal consumes an
/// extra step. When the countdown reaches zero it restarts at
/// `2^bits` and the width grows by one bit. Encoder and decoder must call
/// [`CodeWidth::grow`] at exactly matching stream positions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CodeWidth {
    bits: u8,
    enlarge_in: u64,
}

impl CodeWidth {
    /// State at the start of an encoder pass.
    pub const fn encoder() -> Self {
        Self {
            bits: 2,
            enlarge_in: 2,
        }
    }

    /// State of the decoder once the leading literal is consumed.
    ///
    /// Equals the encoder's state right after it emitted that literal.
    pub const fn decoder() -> Self {
        Self {
            bits: 3,
            enlarge_in: 4,
        }
    }

    /// Current width in bits.
    #[inline]
    pub fn bits(&self) -> u8 {
        self.bits
    }

    /// Count down one step, widening codes when the countdown expires.
    #[inline]
    pub fn grow(&mut self) {
        self.enlarge_in -= 1;
        if self.enlarge_in == 0 {
            self.enlarge_in = 1u64 << self.bits;
            self.bits += 1;
            trace!(bits = self.bits, "code width increased");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encoder_growth_schedule() {
        let mut width = CodeWidth::encoder();
        assert_eq!(width.bits(), 2);

        width.grow();
        assert_eq!(width.bits(), 2);
        width.grow();
        assert_eq!(width.bits(), 3);

        // Next increase after 2^2 steps
        for _ in 0..3 {
            width.grow();
        }
        assert_eq!(width.bits(), 3);
        width.grow();
        assert_eq!(width.bits(), 4);
    }

    #[test]
    fn test_decoder_starts_after_first_literal() {
        let mut width = CodeWidth::encoder();
        // A leading literal consumes two steps
        width.grow();
        width.grow();
        assert_eq!(width, CodeWidth::decoder());
    }
}
