/// One row of the `Client` table, scalars only.
///
/// Field names mirror the stored column names one-to-one; the record mapper
/// re-emits them under those names, so renaming anything here changes the
/// output document format.
#[derive(Debug, Clone, Default)]
pub struct ClientRow {
    pub client_rec_id: i64,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub dob: Option<String>,
    pub sex: Option<i64>,
    pub settings: Option<String>,
    pub date_created: Option<String>,
    pub date_updated: Option<String>,
    pub default_challenge_level: Option<i64>,
    pub email: Option<String>,
    pub password: Option<String>,
    pub client_group_id: Option<i64>,
    pub time_correction: Option<i64>,
    pub b_recent: Option<i64>,
}

/// One row of the `PrimaryData` table: session scalars plus the raw blob
/// channels, untouched. Timestamps stay the TEXT the store holds; nothing
/// downstream parses them.
#[derive(Debug, Clone, Default)]
pub struct SessionRow {
    pub test_rec_id: i64,
    pub client_rec_id: i64,
    pub date_created: Option<String>,
    pub last_modified: Option<String>,
    pub title: Option<String>,
    pub comment: Option<String>,
    pub core_module_version: Option<String>,
    pub sensor_version: Option<String>,
    pub challenge_level: Option<i64>,
    pub pulse_start_time: Option<f64>,
    pub pulse_end_time: Option<f64>,
    pub ibi_start_time: Option<f64>,
    pub ibi_end_time: Option<f64>,
    pub zone_ep_start_time: Option<f64>,
    pub zone_ep_end_time: Option<f64>,
    pub pulse_interval_time: Option<f64>,
    pub ibi_interval_time: Option<f64>,
    pub entrainment_interval_time: Option<f64>,
    pub pct_medium: Option<f64>,
    pub pct_high: Option<f64>,

    pub pulse: Option<Vec<u8>>,
    pub live_ibi: Option<Vec<u8>>,
    pub sampled_ibi: Option<Vec<u8>>,
    pub artifact_flag: Option<Vec<u8>>,
    pub accum_zone_score: Option<Vec<u8>>,
    pub zone_score: Option<Vec<u8>>,
    pub free2: Option<Vec<u8>>,
    pub free3: Option<Vec<u8>>,
    pub entrainment_parameter: Option<Vec<u8>>,
}
