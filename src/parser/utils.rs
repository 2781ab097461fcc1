/*!
Provides checked reads over attribute byte buffers.
*/
use crate::error::ParserError;
use crate::models::{Asn, AsnLength};
use bytes::{Buf, Bytes};

impl ReadUtils for Bytes {}

/// Bounds-checked reads; the plain `Buf` getters panic when the buffer runs
/// dry.
pub trait ReadUtils: Buf {
    #[inline]
    fn require_n_remaining(&self, n: usize) -> Result<(), ParserError> {
        if self.remaining() < n {
            return Err(ParserError::NotEnoughBytes);
        }
        Ok(())
    }

    #[inline]
    fn read_u8(&mut self) -> Result<u8, ParserError> {
        self.require_n_remaining(1)?;
        Ok(self.get_u8())
    }

    #[inline]
    fn read_u16(&mut self) -> Result<u16, ParserError> {
        self.require_n_remaining(2)?;
        Ok(self.get_u16())
    }

    #[inline]
    fn read_u32(&mut self) -> Result<u32, ParserError> {
        self.require_n_remaining(4)?;
        Ok(self.get_u32())
    }

    #[inline]
    fn read_asn(&mut self, asn_len: AsnLength) -> Result<Asn, ParserError> {
        match asn_len {
            AsnLength::Bits16 => self.read_u16().map(Asn::from),
            AsnLength::Bits32 => self.read_u32().map(Asn::from),
        }
    }

    fn read_asns(&mut self, asn_len: AsnLength, count: usize) -> Result<Vec<Asn>, ParserError> {
        let width = match asn_len {
            AsnLength::Bits16 => 2,
            AsnLength::Bits32 => 4,
        };
        self.require_n_remaining(count * width)?;

        (0..count).map(|_| self.read_asn(asn_len)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_checked_reads() {
        let mut data = Bytes::from_static(&[0x01, 0x00, 0x02, 0x00, 0x00, 0x00, 0x03]);
        assert_eq!(data.read_u8().unwrap(), 1);
        assert_eq!(data.read_u16().unwrap(), 2);
        assert_eq!(data.read_u32().unwrap(), 3);
        assert_eq!(data.read_u8(), Err(ParserError::NotEnoughBytes));
    }

    #[test]
    fn test_read_asns() {
        let mut data = Bytes::from_static(&[0x00, 0x01, 0x00, 0x02]);
        let asns = data.read_asns(AsnLength::Bits16, 2).unwrap();
        assert_eq!(asns, vec![Asn::new(1), Asn::new(2)]);

        // the same bytes hold only a single 32-bit ASN
        let mut data = Bytes::from_static(&[0x00, 0x01, 0x00, 0x02]);
        assert_eq!(
            data.read_asns(AsnLength::Bits32, 2),
            Err(ParserError::NotEnoughBytes)
        );
    }
}
