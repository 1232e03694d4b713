// Anomaly category value object
// The backend's detection categories; values outside the known set decode
// into Other so an unknown category never fails a whole response

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AnomalyKind {
    OffHoursAccess,
    RoleViolation,
    DepartmentViolation,
    ImpossibleTravel,
    LocationMismatch,
    CurfewViolation,
    ExcessiveAccess,
    BookingNoShow,
    Overcrowding,
    UnauthorizedAccess,
    EquipmentMisuse,
    SecurityAnomaly,
    SecurityDrift,
    QueueCongestion,
    DataIntegrityAnomaly,
    #[serde(other)]
    Other,
}

impl AnomalyKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            AnomalyKind::OffHoursAccess => "off_hours_access",
            AnomalyKind::RoleViolation => "role_violation",
            AnomalyKind::DepartmentViolation => "department_violation",
            AnomalyKind::ImpossibleTravel => "impossible_travel",
            AnomalyKind::LocationMismatch => "location_mismatch",
            AnomalyKind::CurfewViolation => "curfew_violation",
            AnomalyKind::ExcessiveAccess => "excessive_access",
            AnomalyKind::BookingNoShow => "booking_no_show",
            AnomalyKind::Overcrowding => "overcrowding",
            AnomalyKind::UnauthorizedAccess => "unauthorized_access",
            AnomalyKind::EquipmentMisuse => "equipment_misuse",
            AnomalyKind::SecurityAnomaly => "security_anomaly",
            AnomalyKind::SecurityDrift => "security_drift",
            AnomalyKind::QueueCongestion => "queue_congestion",
            AnomalyKind::DataIntegrityAnomaly => "data_integrity_anomaly",
            AnomalyKind::Other => "other",
        }
    }
}

impl From<&str> for AnomalyKind {
    fn from(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "off_hours_access" => AnomalyKind::OffHoursAccess,
            "role_violation" => AnomalyKind::RoleViolation,
            "department_violation" => AnomalyKind::DepartmentViolation,
            "impossible_travel" => AnomalyKind::ImpossibleTravel,
            "location_mismatch" => AnomalyKind::LocationMismatch,
            "curfew_violation" => AnomalyKind::CurfewViolation,
            "excessive_access" => AnomalyKind::ExcessiveAccess,
            "booking_no_show" => AnomalyKind::BookingNoShow,
            "overcrowding" => AnomalyKind::Overcrowding,
            "unauthorized_access" => AnomalyKind::UnauthorizedAccess,
            "equipment_misuse" => AnomalyKind::EquipmentMisuse,
            "security_anomaly" => AnomalyKind::SecurityAnomaly,
            "security_drift" => AnomalyKind::SecurityDrift,
            "queue_congestion" => AnomalyKind::QueueCongestion,
            "data_integrity_anomaly" => AnomalyKind::DataIntegrityAnomaly,
            _ => AnomalyKind::Other,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_category_decodes_to_other() {
        let kind: AnomalyKind = serde_json::from_str("\"brand_new_category\"").unwrap();
        assert_eq!(kind, AnomalyKind::Other);
    }

    #[test]
    fn known_category_round_trips() {
        let kind: AnomalyKind = serde_json::from_str("\"impossible_travel\"").unwrap();
        assert_eq!(kind, AnomalyKind::ImpossibleTravel);
        assert_eq!(
            serde_json::to_string(&kind).unwrap(),
            "\"impossible_travel\""
        );
    }
}
