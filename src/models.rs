use serde::{Serialize, Deserialize};
use std::collections::BTreeMap;

/// Profile of the signed-in soldier as returned by `/api/profile`.
/// A read-only snapshot; nothing in it is ever sent back to the server.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Profile {
    pub name: String,
    pub rank: String,
    pub unit: String,
    pub clearance_level: String,
    pub access_areas: Vec<String>,
}

/// Probe for the `{"error": "..."}` shape several endpoints use instead of
/// (or in addition to) an HTTP error status.
#[derive(Debug, Deserialize)]
pub struct MaybeError {
    #[serde(default)]
    pub error: Option<String>,
}

/// `/api/check-session` result. The backend sends extra identity fields on a
/// live session; only the flag matters here.
#[derive(Clone, Debug, Deserialize)]
pub struct SessionStatus {
    pub logged_in: bool,
}

/// `/api/request-access` verdict.
#[derive(Clone, Debug, Deserialize)]
pub struct RequestOutcome {
    pub success: bool,
    #[serde(default)]
    pub message: String,
}

/// One `/api/access-log` row. Timestamp stays a string until render time;
/// entries keep the order the backend returned them in.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct AccessLogEntry {
    pub soldier_id: String,
    pub name: String,
    pub timestamp: String,
    pub status: String,
    pub area: String,
}

#[derive(Debug, Deserialize)]
pub struct AccessLogResponse {
    pub log: Vec<AccessLogEntry>,
}

/// One roster row; the enclosing map is keyed by soldier id.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct PersonnelRecord {
    pub name: String,
    pub rank: String,
    pub unit: String,
    pub clearance_level: String,
}

#[derive(Debug, Deserialize)]
pub struct PersonnelResponse {
    pub personnel: BTreeMap<String, PersonnelRecord>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn profile_round_trip() {
        let json = r#"{
            "soldier_id": "soldier2",
            "name": "Doe",
            "rank": "CPT",
            "unit": "1st",
            "clearance_level": "TOP SECRET",
            "access_areas": ["motor_pool", "arms_room"]
        }"#;
        let profile: Profile = serde_json::from_str(json).unwrap();
        assert_eq!(profile.name, "Doe");
        assert_eq!(profile.rank, "CPT");
        assert_eq!(profile.access_areas, vec!["motor_pool", "arms_room"]);
    }

    #[test]
    fn error_body_is_detected() {
        let probe: MaybeError = serde_json::from_str(r#"{"error": "Unauthorized"}"#).unwrap();
        assert_eq!(probe.error.as_deref(), Some("Unauthorized"));

        let probe: MaybeError = serde_json::from_str(r#"{"logged_in": true}"#).unwrap();
        assert!(probe.error.is_none());
    }

    #[test]
    fn access_log_preserves_order() {
        let json = r#"{"log": [
            {"soldier_id": "s1", "name": "A", "timestamp": "2025-01-01T08:00:00", "status": "SUCCESS", "area": "Main Entrance"},
            {"soldier_id": "s2", "name": "B", "timestamp": "2025-01-01T09:00:00", "status": "LOGOUT", "area": "System"}
        ]}"#;
        let resp: AccessLogResponse = serde_json::from_str(json).unwrap();
        assert_eq!(resp.log.len(), 2);
        assert_eq!(resp.log[0].soldier_id, "s1");
        assert_eq!(resp.log[1].status, "LOGOUT");
    }

    #[test]
    fn personnel_map_keys_are_soldier_ids() {
        let json = r#"{"personnel": {
            "soldier1": {"name": "John Smith", "rank": "Captain", "unit": "Alpha Squadron", "clearance_level": "SECRET"},
            "soldier2": {"name": "Sarah Johnson", "rank": "Lieutenant", "unit": "Bravo Squadron", "clearance_level": "TOP SECRET"}
        }}"#;
        let resp: PersonnelResponse = serde_json::from_str(json).unwrap();
        assert_eq!(resp.personnel.len(), 2);
        assert_eq!(resp.personnel["soldier1"].rank, "Captain");
    }

    #[test]
    fn request_outcome_tolerates_missing_message() {
        let outcome: RequestOutcome = serde_json::from_str(r#"{"success": false}"#).unwrap();
        assert!(!outcome.success);
        assert_eq!(outcome.message, "");
    }
}
