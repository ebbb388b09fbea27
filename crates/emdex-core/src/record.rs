//! Row-to-record mapping.
//!
//! An export record is a flat JSON object keyed by the stored column names.
//! Scalars are copied verbatim (NULL columns come through as JSON `null`);
//! blob channels are decoded and inserted only when they hold at least one
//! complete element. Downstream consumers branch on channel-key presence,
//! so an absent channel must stay absent, never `null` or `[]`.

use serde_json::{Map, Value};

use crate::channel::{decode_channel, ChannelSpec, SampleKind};
use crate::types::{ClientRow, SessionRow};

/// A flat output record. `serde_json`'s map is ordered by key, which gives
/// the document its deterministic field order.
pub type ExportRecord = Map<String, Value>;

const PULSE: ChannelSpec = ChannelSpec::plain(SampleKind::U16);
const SERIES: ChannelSpec = ChannelSpec::plain(SampleKind::I32);
const ENTRAINMENT: ChannelSpec = ChannelSpec::scaled(SampleKind::I32, 100.0);

/// Map one client row. Clients carry no binary channels.
pub fn client_record(row: &ClientRow) -> ExportRecord {
    let mut record = ExportRecord::new();

    record.insert("ClientRecID".into(), row.client_rec_id.into());
    record.insert("FirstName".into(), row.first_name.clone().into());
    record.insert("LastName".into(), row.last_name.clone().into());
    record.insert("DOB".into(), row.dob.clone().into());
    record.insert("Sex".into(), row.sex.into());
    record.insert("Settings".into(), row.settings.clone().into());
    record.insert("DateCreated".into(), row.date_created.clone().into());
    record.insert("DateUpdated".into(), row.date_updated.clone().into());
    record.insert(
        "DefaultChallengeLevel".into(),
        row.default_challenge_level.into(),
    );
    record.insert("Email".into(), row.email.clone().into());
    record.insert("Password".into(), row.password.clone().into());
    record.insert("ClientGroupId".into(), row.client_group_id.into());
    record.insert("TimeCorrection".into(), row.time_correction.into());
    record.insert("BRecent".into(), row.b_recent.into());

    record
}

/// Map one session row: scalars verbatim, then every populated channel.
pub fn session_record(row: &SessionRow) -> ExportRecord {
    let mut record = ExportRecord::new();

    record.insert("TestRecID".into(), row.test_rec_id.into());
    record.insert("ClientRecID".into(), row.client_rec_id.into());
    record.insert("DateCreated".into(), row.date_created.clone().into());
    record.insert("LastModified".into(), row.last_modified.clone().into());
    record.insert("Title".into(), row.title.clone().into());
    record.insert("Comment".into(), row.comment.clone().into());
    record.insert(
        "CoreModuleVersion".into(),
        row.core_module_version.clone().into(),
    );
    record.insert("SensorVersion".into(), row.sensor_version.clone().into());
    record.insert("ChallengeLevel".into(), row.challenge_level.into());
    record.insert("PulseStartTime".into(), row.pulse_start_time.into());
    record.insert("PulseEndTime".into(), row.pulse_end_time.into());
    record.insert("IBIStartTime".into(), row.ibi_start_time.into());
    record.insert("IBIEndTime".into(), row.ibi_end_time.into());
    record.insert("ZoneEPStartTime".into(), row.zone_ep_start_time.into());
    record.insert("ZoneEPEndTime".into(), row.zone_ep_end_time.into());
    record.insert("PulseIntervalTime".into(), row.pulse_interval_time.into());
    record.insert("IBIIntervalTime".into(), row.ibi_interval_time.into());
    record.insert(
        "EntrainmentIntervalTime".into(),
        row.entrainment_interval_time.into(),
    );
    record.insert("PctMedium".into(), row.pct_medium.into());
    record.insert("PctHigh".into(), row.pct_high.into());

    push_channel(&mut record, "Pulse", row.pulse.as_deref(), &PULSE);
    push_channel(&mut record, "LiveIBI", row.live_ibi.as_deref(), &SERIES);
    push_channel(&mut record, "SampledIBI", row.sampled_ibi.as_deref(), &SERIES);
    push_channel(&mut record, "ArtifactFlag", row.artifact_flag.as_deref(), &SERIES);
    push_channel(
        &mut record,
        "AccumZoneScore",
        row.accum_zone_score.as_deref(),
        &SERIES,
    );
    push_channel(&mut record, "ZoneScore", row.zone_score.as_deref(), &SERIES);
    push_channel(&mut record, "Free2", row.free2.as_deref(), &SERIES);
    push_channel(&mut record, "Free3", row.free3.as_deref(), &SERIES);
    push_channel(
        &mut record,
        "EntrainmentParameter",
        row.entrainment_parameter.as_deref(),
        &ENTRAINMENT,
    );

    record
}

fn push_channel(record: &mut ExportRecord, name: &str, blob: Option<&[u8]>, spec: &ChannelSpec) {
    if let Some(decoded) = blob.and_then(|bytes| decode_channel(bytes, spec)) {
        record.insert(name.to_string(), decoded.into());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn session_row() -> SessionRow {
        SessionRow {
            test_rec_id: 7,
            client_rec_id: 1,
            date_created: Some("2011-07-01 09:15:00".to_string()),
            title: Some("morning".to_string()),
            challenge_level: Some(2),
            pct_medium: Some(40.0),
            pct_high: Some(25.5),
            ..Default::default()
        }
    }

    #[test]
    fn test_client_record_copies_scalars_and_has_no_channels() {
        let row = ClientRow {
            client_rec_id: 3,
            first_name: Some("Ada".to_string()),
            sex: Some(1),
            ..Default::default()
        };

        let record = client_record(&row);

        assert_eq!(record["ClientRecID"], json!(3));
        assert_eq!(record["FirstName"], json!("Ada"));
        assert_eq!(record["Sex"], json!(1));
        // Unset scalars are null, not missing.
        assert_eq!(record["Email"], Value::Null);
        assert_eq!(record.len(), 14);
        assert!(!record.contains_key("Pulse"));
    }

    #[test]
    fn test_session_scalars_present_with_nulls() {
        let record = session_record(&session_row());

        assert_eq!(record["TestRecID"], json!(7));
        assert_eq!(record["Title"], json!("morning"));
        assert_eq!(record["Comment"], Value::Null);
        assert_eq!(record["PctHigh"], json!(25.5));
    }

    #[test]
    fn test_absent_channels_are_omitted_entirely() {
        let record = session_record(&session_row());

        for key in ["Pulse", "LiveIBI", "ZoneScore", "EntrainmentParameter"] {
            assert!(!record.contains_key(key), "{key} should be omitted");
        }
    }

    #[test]
    fn test_empty_blob_behaves_like_absent_channel() {
        let mut row = session_row();
        row.pulse = Some(Vec::new());
        row.zone_score = Some(vec![0x01]); // shorter than one element

        let record = session_record(&row);

        assert!(!record.contains_key("Pulse"));
        assert!(!record.contains_key("ZoneScore"));
    }

    #[test]
    fn test_populated_channels_decode_into_sequences() {
        let mut row = session_row();
        row.pulse = Some(vec![0x01, 0x00, 0x02, 0x00]);
        row.live_ibi = Some(vec![0xe8, 0x03, 0x00, 0x00]); // 1000
        row.entrainment_parameter = Some(vec![0xfa, 0x00, 0x00, 0x00]); // 250 -> 2.5

        let record = session_record(&row);

        assert_eq!(record["Pulse"], json!([1, 2]));
        assert_eq!(record["LiveIBI"], json!([1000]));
        assert_eq!(record["EntrainmentParameter"], json!([2.5]));
    }
}
