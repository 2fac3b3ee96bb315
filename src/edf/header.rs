//! EDF header serialization (`spec.md` §4.J main/signal header layout),
//! grounded on the teacher's `EDFHeader::serialize` — same field widths and
//! ordering, stripped of EDF+ (annotations, patient/recording sub-fields,
//! specification dispatch) since none of that has a counterpart here.

use chrono::{DateTime, Local};

use crate::edf::signal::EdfSignal;
use crate::error::ConvertError;
use crate::utils::pad_string;

const PATIENT_ID: &str = "NeuroSky EEG Recording";

pub fn serialize_main_header(
    start: DateTime<Local>,
    n_records: usize,
    record_duration: f64,
    signal_count: usize,
) -> Result<String, ConvertError> {
    let header_bytes = 256 + 256 * signal_count;
    let recording_id = format!("StartDate: {}", start.format("%d.%m.%Y"));

    let mut header = String::with_capacity(256);
    header.push_str(&pad_string("0", 8)?);
    header.push_str(&pad_string(PATIENT_ID, 80)?);
    header.push_str(&pad_string(&recording_id, 80)?);
    header.push_str(&pad_string(&start.format("%d.%m.%y").to_string(), 8)?);
    header.push_str(&pad_string(&start.format("%H.%M.%S").to_string(), 8)?);
    header.push_str(&pad_string(&header_bytes.to_string(), 8)?);
    header.push_str(&pad_string("", 44)?);
    header.push_str(&pad_string(&n_records.to_string(), 8)?);
    header.push_str(&pad_string(&format!("{record_duration:.2}"), 8)?);
    header.push_str(&pad_string(&signal_count.to_string(), 4)?);

    debug_assert_eq!(header.len(), 256);
    Ok(header)
}

pub fn serialize_signal_headers(signals: &[EdfSignal]) -> Result<String, ConvertError> {
    let mut header = String::with_capacity(256 * signals.len());

    for s in signals {
        header.push_str(&pad_string(&s.label, 16)?);
    }
    for s in signals {
        header.push_str(&pad_string(&s.transducer, 80)?);
    }
    for s in signals {
        header.push_str(&pad_string(&s.physical_unit, 8)?);
    }
    for s in signals {
        header.push_str(&pad_string(&s.phys_min.to_string(), 8)?);
    }
    for s in signals {
        header.push_str(&pad_string(&s.phys_max.to_string(), 8)?);
    }
    for s in signals {
        header.push_str(&pad_string(&s.dig_min.to_string(), 8)?);
    }
    for s in signals {
        header.push_str(&pad_string(&s.dig_max.to_string(), 8)?);
    }
    for s in signals {
        header.push_str(&pad_string(&s.prefilter, 80)?);
    }
    for s in signals {
        header.push_str(&pad_string(&s.samples_per_record.to_string(), 8)?);
    }
    for _ in signals {
        header.push_str(&pad_string("", 32)?);
    }

    debug_assert_eq!(header.len(), 256 * signals.len());
    Ok(header)
}
