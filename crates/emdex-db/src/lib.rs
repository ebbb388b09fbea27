//! Read-only SQLite access for emdex.
//!
//! Owns the one connection to an emWave2 `.emdb` database and maps its
//! `Client` and `PrimaryData` tables into the row structs from
//! `emdex-core`. This crate never writes: the database is opened with
//! read-only flags, so a missing or unreadable file is an open error rather
//! than an accidentally created empty store.

use std::path::Path;

use rusqlite::{Connection, OpenFlags};

use emdex_core::{ClientRow, SessionRow};

/// Handle on an open session database, exclusively owned for one run.
pub struct Store {
    conn: Connection,
}

impl Store {
    /// Open an existing database read-only.
    pub fn open(path: &Path) -> Result<Self, rusqlite::Error> {
        let conn = Connection::open_with_flags(
            path,
            OpenFlags::SQLITE_OPEN_READ_ONLY | OpenFlags::SQLITE_OPEN_NO_MUTEX,
        )?;
        Ok(Self { conn })
    }

    /// Read the stored schema version (first row of `VersionTable`).
    pub fn schema_version(&self) -> Result<i64, rusqlite::Error> {
        self.conn
            .query_row("SELECT Version FROM VersionTable", [], |row| row.get(0))
    }

    /// Fetch all client rows in store-native order.
    pub fn clients(&self) -> Result<Vec<ClientRow>, rusqlite::Error> {
        let mut stmt = self.conn.prepare(
            "SELECT ClientRecID, FirstName, LastName, DOB, Sex, Settings,
                    DateCreated, DateUpdated, DefaultChallengeLevel, Email,
                    Password, ClientGroupId, TimeCorrection, BRecent
             FROM Client",
        )?;
        let rows = stmt.query_map([], Self::row_to_client)?;

        let mut clients = Vec::new();
        for row in rows {
            clients.push(row?);
        }

        tracing::debug!("fetched {} client rows", clients.len());
        Ok(clients)
    }

    /// Fetch all session rows ordered by creation time ascending.
    ///
    /// The ordering is load-bearing: selector indices are positions into
    /// exactly this sequence, not stable row identifiers.
    pub fn sessions(&self) -> Result<Vec<SessionRow>, rusqlite::Error> {
        let mut stmt = self.conn.prepare(
            "SELECT TestRecID, ClientRecID, DateCreated, LastModified, Title,
                    Comment, CoreModuleVersion, SensorVersion, ChallengeLevel,
                    PulseStartTime, PulseEndTime, IBIStartTime, IBIEndTime,
                    ZoneEPStartTime, ZoneEPEndTime, PulseIntervalTime,
                    IBIIntervalTime, EntrainmentIntervalTime, PctMedium, PctHigh,
                    Pulse, LiveIBI, SampledIBI, ArtifactFlag, AccumZoneScore,
                    ZoneScore, Free2, Free3, EntrainmentParameter
             FROM PrimaryData
             ORDER BY DateCreated ASC",
        )?;
        let rows = stmt.query_map([], Self::row_to_session)?;

        let mut sessions = Vec::new();
        for row in rows {
            sessions.push(row?);
        }

        tracing::debug!("fetched {} session rows", sessions.len());
        Ok(sessions)
    }

    fn row_to_client(row: &rusqlite::Row) -> Result<ClientRow, rusqlite::Error> {
        Ok(ClientRow {
            client_rec_id: row.get(0)?,
            first_name: row.get(1)?,
            last_name: row.get(2)?,
            dob: row.get(3)?,
            sex: row.get(4)?,
            settings: row.get(5)?,
            date_created: row.get(6)?,
            date_updated: row.get(7)?,
            default_challenge_level: row.get(8)?,
            email: row.get(9)?,
            password: row.get(10)?,
            client_group_id: row.get(11)?,
            time_correction: row.get(12)?,
            b_recent: row.get(13)?,
        })
    }

    fn row_to_session(row: &rusqlite::Row) -> Result<SessionRow, rusqlite::Error> {
        Ok(SessionRow {
            test_rec_id: row.get(0)?,
            client_rec_id: row.get(1)?,
            date_created: row.get(2)?,
            last_modified: row.get(3)?,
            title: row.get(4)?,
            comment: row.get(5)?,
            core_module_version: row.get(6)?,
            sensor_version: row.get(7)?,
            challenge_level: row.get(8)?,
            pulse_start_time: row.get(9)?,
            pulse_end_time: row.get(10)?,
            ibi_start_time: row.get(11)?,
            ibi_end_time: row.get(12)?,
            zone_ep_start_time: row.get(13)?,
            zone_ep_end_time: row.get(14)?,
            pulse_interval_time: row.get(15)?,
            ibi_interval_time: row.get(16)?,
            entrainment_interval_time: row.get(17)?,
            pct_medium: row.get(18)?,
            pct_high: row.get(19)?,
            pulse: row.get(20)?,
            live_ibi: row.get(21)?,
            sampled_ibi: row.get(22)?,
            artifact_flag: row.get(23)?,
            accum_zone_score: row.get(24)?,
            zone_score: row.get(25)?,
            free2: row.get(26)?,
            free3: row.get(27)?,
            entrainment_parameter: row.get(28)?,
        })
    }
}
