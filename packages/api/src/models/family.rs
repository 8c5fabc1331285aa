use serde::{Deserialize, Serialize};

/// A household as employees manage it.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Family {
    #[serde(alias = "Family_id", default)]
    pub family_id: i64,
    #[serde(alias = "Head_citizen_id", default)]
    pub head_citizen_id: i64,
    #[serde(default)]
    pub members: Vec<MemberRef>,
}

impl Family {
    pub fn member_names(&self) -> String {
        self.members
            .iter()
            .map(|m| m.member_user_name.as_str())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct MemberRef {
    #[serde(default)]
    pub member_citizen_id: i64,
    #[serde(default)]
    pub member_user_name: String,
}

/// A member of the logged-in citizen's family.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct FamilyMember {
    #[serde(alias = "User_name", alias = "member_user_name", default)]
    pub user_name: String,
}

/// Body for `POST /panchayat-employee/family`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HeadRef {
    pub head_user_name: String,
}

/// Body for `DELETE /panchayat-employee/family`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct FamilyRef {
    pub family_id: i64,
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn test_decode_family_with_members() {
        let family: Family = serde_json::from_value(json!({
            "family_id": 1, "head_citizen_id": 101,
            "members": [
                {"member_citizen_id": 201, "member_user_name": "alice_doe"},
                {"member_citizen_id": 202, "member_user_name": "bob_doe"}
            ]
        }))
        .unwrap();
        assert_eq!(family.member_names(), "alice_doe, bob_doe");
    }

    #[test]
    fn test_family_without_members() {
        let family: Family =
            serde_json::from_value(json!({"family_id": 2, "head_citizen_id": 102})).unwrap();
        assert!(family.members.is_empty());
        assert_eq!(family.member_names(), "");
    }
}
