//! Decoder for the encoded polyline format used by web map route pages.
//!
//! Each point is stored as a latitude delta followed by a longitude delta from
//! the previous point, in units of 1e-5 degrees. A delta is zigzag-encoded
//! (sign in the low bit) and written as 5-bit groups, least significant first,
//! each offset by `'?'`; a group value of 32 or more means another group follows.

use log::trace;

use crate::config::GeodesyConfig;
use crate::coord::Coordinate;
use crate::error::{GeoError, PolylineError};

const CHUNK_OFFSET: u8 = b'?';
const MAX_CHUNK: u8 = b'~';
const CONTINUATION: u8 = 0x20;
const DATA_MASK: u8 = 0x1f;
// 7 groups carry 35 bits; only the low 32 may be set
const MAX_SHIFT: u32 = 35;

/// Forward-only decoder over an encoded polyline, yielding one coordinate per
/// latitude/longitude delta pair.
pub struct PolylineDecoder<'a> {
    bytes: &'a [u8],
    pos: usize,
    lat: i64,
    lon: i64,
    precision: f64,
    failed: bool,
}

impl<'a> PolylineDecoder<'a> {
    pub fn new(encoded: &'a str) -> Self {
        Self::with_precision(encoded, GeodesyConfig::default().polyline_precision)
    }

    pub fn with_precision(encoded: &'a str, precision: f64) -> Self {
        Self {
            bytes: encoded.as_bytes(),
            pos: 0,
            lat: 0,
            lon: 0,
            precision,
            failed: false,
        }
    }

    /// Read one zigzag-encoded delta starting at the cursor.
    fn next_delta(&mut self) -> Result<i64, PolylineError> {
        let start = self.pos;
        let mut acc: u64 = 0;
        let mut shift = 0;
        loop {
            let Some(&byte) = self.bytes.get(self.pos) else {
                return Err(PolylineError::Truncated { offset: self.pos });
            };
            if !(CHUNK_OFFSET..=MAX_CHUNK).contains(&byte) {
                return Err(PolylineError::InvalidCharacter {
                    offset: self.pos,
                    byte,
                });
            }
            if shift >= MAX_SHIFT {
                return Err(PolylineError::Overflow { offset: start });
            }
            self.pos += 1;

            let chunk = byte - CHUNK_OFFSET;
            acc |= u64::from(chunk & DATA_MASK) << shift;
            shift += 5;
            if chunk < CONTINUATION {
                break;
            }
        }

        if acc >> 32 != 0 {
            return Err(PolylineError::Overflow { offset: start });
        }
        let delta = (acc >> 1) as i64;
        Ok(if acc & 1 == 1 { !delta } else { delta })
    }

    fn next_pair(&mut self) -> Result<(i64, i64), PolylineError> {
        let dlat = self.next_delta()?;
        let dlon = self.next_delta()?;
        Ok((dlat, dlon))
    }
}

impl Iterator for PolylineDecoder<'_> {
    type Item = Result<Coordinate, PolylineError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.failed || self.pos >= self.bytes.len() {
            return None;
        }

        match self.next_pair() {
            Ok((dlat, dlon)) => {
                self.lat += dlat;
                self.lon += dlon;
                Some(Ok(Coordinate::new(
                    self.lat as f64 * self.precision,
                    self.lon as f64 * self.precision,
                )))
            }
            Err(e) => {
                self.failed = true;
                Some(Err(e))
            }
        }
    }
}

/// Decode an entire polyline into coordinates at 1e-5 degree precision.
pub fn decode_polyline(encoded: &str) -> Result<Vec<Coordinate>, PolylineError> {
    PolylineDecoder::new(encoded).collect()
}

/// Decode with the configured precision. The configuration is validated first.
pub fn decode_polyline_with(
    encoded: &str,
    config: &GeodesyConfig,
) -> Result<Vec<Coordinate>, GeoError> {
    config.validate()?;
    let points = PolylineDecoder::with_precision(encoded, config.polyline_precision)
        .collect::<Result<Vec<_>, _>>()?;
    trace!("decoded {} points from {} bytes of polyline", points.len(), encoded.len());
    Ok(points)
}
