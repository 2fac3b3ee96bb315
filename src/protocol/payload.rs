//! Payload parser (`spec.md` §4.B): turns a checksummed payload blob into a
//! sequence of tagged [`DataValue`]s, forwarding the extended-code level so
//! that future device firmware can add codes without changing this parser.
//!
//! Code table and per-code shapes are grounded on cerebrust's `Code`/`Packet`
//! decoding (`comm.rs`), generalised to a `Vec<DataValue>` return instead of a
//! single mutated `Packet` so the aggregator (§4.C) owns aggregation policy.

const EXTENDED_PREFIX: u8 = 0x55;
const CODE_POOR_SIGNAL: u8 = 0x02;
const CODE_ATTENTION: u8 = 0x04;
const CODE_MEDITATION: u8 = 0x05;
const CODE_RAW_WAVE: u8 = 0x80;
const CODE_ASIC_EEG_POWER: u8 = 0x83;

/// Eight ThinkGear spectral band powers, in on-wire order.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Power {
    pub delta: u32,
    pub theta: u32,
    pub low_alpha: u32,
    pub high_alpha: u32,
    pub low_beta: u32,
    pub high_beta: u32,
    pub low_gamma: u32,
    pub mid_gamma: u32,
}

/// A single decoded value from a payload, tagged with the extended-code level
/// it was read under. Only level 0 has defined codes today; higher levels are
/// preserved so a dispatcher can act on them later without a parser change.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DataValue {
    PoorSignal { level: u8, value: u8 },
    Attention { level: u8, value: u8 },
    Meditation { level: u8, value: u8 },
    RawWave { level: u8, value: i16 },
    AsicEegPower { level: u8, value: Power },
}

/// Parses a payload buffer into the sequence of values it encodes. Unknown
/// codes consume their declared length and are skipped without aborting the
/// remainder of the payload; only a length field running past the end of the
/// buffer aborts parsing early.
pub fn parse(buf: &[u8]) -> Vec<DataValue> {
    let mut values = Vec::new();
    let mut i = 0;
    let len = buf.len();

    while i < len {
        let mut extended_level = 0u8;
        while i < len && buf[i] == EXTENDED_PREFIX {
            extended_level += 1;
            i += 1;
        }
        if i >= len {
            break;
        }

        let code = buf[i];
        i += 1;

        let value_len = if code & 0x80 != 0 {
            if i >= len {
                break;
            }
            let value_len = buf[i] as usize;
            i += 1;
            value_len
        } else {
            1
        };

        if i + value_len > len {
            break;
        }

        let data = &buf[i..i + value_len];
        if let Some(value) = decode(extended_level, code, data) {
            values.push(value);
        }
        i += value_len;
    }

    values
}

fn decode(level: u8, code: u8, data: &[u8]) -> Option<DataValue> {
    match code {
        CODE_POOR_SIGNAL if !data.is_empty() => Some(DataValue::PoorSignal {
            level,
            value: data[0],
        }),
        CODE_ATTENTION if !data.is_empty() => Some(DataValue::Attention {
            level,
            value: data[0],
        }),
        CODE_MEDITATION if !data.is_empty() => Some(DataValue::Meditation {
            level,
            value: data[0],
        }),
        CODE_RAW_WAVE if data.len() >= 2 => Some(DataValue::RawWave {
            level,
            value: i16::from_be_bytes([data[0], data[1]]),
        }),
        CODE_ASIC_EEG_POWER if data.len() >= 24 => {
            let band = |i: usize| u32::from_be_bytes([0, data[i], data[i + 1], data[i + 2]]);
            Some(DataValue::AsicEegPower {
                level,
                value: Power {
                    delta: band(0),
                    theta: band(3),
                    low_alpha: band(6),
                    high_alpha: band(9),
                    low_beta: band(12),
                    high_beta: band(15),
                    low_gamma: band(18),
                    mid_gamma: band(21),
                },
            })
        }
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn poor_signal() {
        let values = parse(&[0x02, 0x00]);
        assert_eq!(values, vec![DataValue::PoorSignal { level: 0, value: 0 }]);
    }

    #[test]
    fn attention() {
        let values = parse(&[0x04, 0x40]);
        assert_eq!(
            values,
            vec![DataValue::Attention {
                level: 0,
                value: 64
            }]
        );
    }

    #[test]
    fn raw_wave() {
        let values = parse(&[0x80, 0x02, 0x12, 0x34]);
        assert_eq!(
            values,
            vec![DataValue::RawWave {
                level: 0,
                value: 0x1234
            }]
        );
    }

    #[test]
    fn raw_wave_is_signed() {
        let values = parse(&[0x80, 0x02, 0xFF, 0xFF]);
        assert_eq!(
            values,
            vec![DataValue::RawWave {
                level: 0,
                value: -1
            }]
        );
    }

    #[test]
    fn asic_eeg_power() {
        let mut payload = vec![0x83, 0x18];
        for band in 1u32..=8 {
            payload.extend_from_slice(&band.to_be_bytes()[1..]);
        }
        let values = parse(&payload);
        assert_eq!(
            values,
            vec![DataValue::AsicEegPower {
                level: 0,
                value: Power {
                    delta: 1,
                    theta: 2,
                    low_alpha: 3,
                    high_alpha: 4,
                    low_beta: 5,
                    high_beta: 6,
                    low_gamma: 7,
                    mid_gamma: 8,
                }
            }]
        );
    }

    #[test]
    fn unknown_code_is_skipped_without_desync() {
        // Unknown code 0x90 with declared length 2 should be skipped, then
        // attention should still decode correctly.
        let values = parse(&[0x90, 0x02, 0xAB, 0xCD, 0x04, 0x32]);
        assert_eq!(
            values,
            vec![DataValue::Attention {
                level: 0,
                value: 50
            }]
        );
    }

    #[test]
    fn extended_level_is_forwarded() {
        let values = parse(&[0x55, 0x55, 0x04, 0x20]);
        assert_eq!(
            values,
            vec![DataValue::Attention {
                level: 2,
                value: 32
            }]
        );
    }

    #[test]
    fn truncated_length_aborts_without_panicking() {
        let values = parse(&[0x80, 0x10, 0x01]);
        assert!(values.is_empty());
    }
}
