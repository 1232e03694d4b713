// User role value object
// Closed enum behind the free-text role column in the campus CSV

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum UserRole {
    Student,
    Staff,
    Faculty,
    SuperAdmin,
}

impl UserRole {
    pub fn as_str(&self) -> &'static str {
        match self {
            UserRole::Student => "STUDENT",
            UserRole::Staff => "STAFF",
            UserRole::Faculty => "FACULTY",
            UserRole::SuperAdmin => "SUPER_ADMIN",
        }
    }

    /// Strict parse over every stored role literal, `SUPER_ADMIN` included.
    /// For roles stored by this application, not for CSV input.
    pub fn parse(raw: &str) -> Option<UserRole> {
        match raw.trim().to_lowercase().as_str() {
            "student" => Some(UserRole::Student),
            "staff" => Some(UserRole::Staff),
            "faculty" => Some(UserRole::Faculty),
            "super_admin" => Some(UserRole::SuperAdmin),
            _ => None,
        }
    }

    /// Parse for the CSV role column. The bulk import may only hand out
    /// the three campus roles; `super_admin` in a CSV cell is just another
    /// unrecognized value and must not mint a privileged account.
    pub fn parse_csv_role(raw: &str) -> Option<UserRole> {
        match UserRole::parse(raw) {
            Some(UserRole::SuperAdmin) | None => None,
            known => known,
        }
    }
}

impl From<&str> for UserRole {
    /// Total mapping with the documented default branch: unrecognized
    /// values become `Student`.
    fn from(s: &str) -> Self {
        UserRole::parse(s).unwrap_or(UserRole::Student)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_known_literal_maps() {
        assert_eq!(UserRole::parse("student"), Some(UserRole::Student));
        assert_eq!(UserRole::parse("staff"), Some(UserRole::Staff));
        assert_eq!(UserRole::parse("faculty"), Some(UserRole::Faculty));
        assert_eq!(UserRole::parse("super_admin"), Some(UserRole::SuperAdmin));
    }

    #[test]
    fn mapping_is_case_insensitive() {
        assert_eq!(UserRole::parse("Faculty"), Some(UserRole::Faculty));
        assert_eq!(UserRole::parse(" STAFF "), Some(UserRole::Staff));
    }

    #[test]
    fn fallback_branch_defaults_to_student() {
        assert_eq!(UserRole::parse("unknown_value"), None);
        assert_eq!(UserRole::from("unknown_value"), UserRole::Student);
        assert_eq!(UserRole::from(""), UserRole::Student);
    }

    #[test]
    fn csv_parse_never_yields_super_admin() {
        assert_eq!(UserRole::parse_csv_role("staff"), Some(UserRole::Staff));
        assert_eq!(UserRole::parse_csv_role("super_admin"), None);
        assert_eq!(UserRole::parse_csv_role("SUPER_ADMIN"), None);
    }

    #[test]
    fn serializes_as_screaming_snake_case() {
        assert_eq!(
            serde_json::to_string(&UserRole::SuperAdmin).unwrap(),
            "\"SUPER_ADMIN\""
        );
    }
}
