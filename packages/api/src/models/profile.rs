use serde::{Deserialize, Serialize};

/// Personal details of the logged-in citizen.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct CitizenProfile {
    #[serde(rename = "Name", alias = "name", default)]
    pub name: Option<String>,
    #[serde(rename = "Date_of_birth", alias = "date_of_birth", default)]
    pub date_of_birth: String,
    #[serde(rename = "Date_of_death", alias = "date_of_death", default)]
    pub date_of_death: Option<String>,
    #[serde(rename = "Gender", alias = "gender", default)]
    pub gender: String,
    #[serde(rename = "Address", alias = "address", default)]
    pub address: String,
    #[serde(
        rename = "Educational_qualification",
        alias = "educational_qualification",
        default
    )]
    pub educational_qualification: String,
    #[serde(rename = "Occupation", alias = "occupation", default)]
    pub occupation: String,
}

impl CitizenProfile {
    /// Label/value pairs in display order. Absent optional fields are skipped.
    pub fn rows(&self) -> Vec<(&'static str, String)> {
        let mut rows = Vec::new();
        if let Some(name) = self.name.as_deref().filter(|n| !n.is_empty()) {
            rows.push(("Name", name.to_string()));
        }
        rows.push(("Date of Birth", self.date_of_birth.clone()));
        if let Some(death) = self.date_of_death.as_deref().filter(|d| !d.is_empty()) {
            rows.push(("Date of Death", death.to_string()));
        }
        rows.push(("Gender", self.gender.clone()));
        rows.push(("Address", self.address.clone()));
        rows.push(("Education", self.educational_qualification.clone()));
        rows.push(("Occupation", self.occupation.clone()));
        rows
    }
}

/// Profile of an employee or agency account.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct StaffProfile {
    #[serde(rename = "Name", alias = "name", default)]
    pub name: Option<String>,
    #[serde(rename = "Email", alias = "email", default)]
    pub email: Option<String>,
    #[serde(rename = "Contact_number", alias = "contact_number", default)]
    pub contact_number: Option<String>,
    #[serde(rename = "Role", alias = "role", default)]
    pub role: String,
}

impl StaffProfile {
    pub fn rows(&self) -> Vec<(&'static str, String)> {
        [
            ("Name", self.name.as_deref()),
            ("Email", self.email.as_deref()),
            ("Contact", self.contact_number.as_deref()),
            ("Role", Some(self.role.as_str())),
        ]
        .into_iter()
        .filter_map(|(label, value)| {
            value
                .filter(|v| !v.is_empty())
                .map(|v| (label, v.to_string()))
        })
        .collect()
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn test_citizen_rows_skip_missing_death() {
        let profile: CitizenProfile = serde_json::from_value(json!({
            "Date_of_birth": "1990-05-01", "Date_of_death": null, "Gender": "Male",
            "Address": "Ward 4", "Educational_qualification": "Graduate",
            "Occupation": "Farmer"
        }))
        .unwrap();
        let labels: Vec<&str> = profile.rows().iter().map(|(l, _)| *l).collect();
        assert_eq!(
            labels,
            vec!["Date of Birth", "Gender", "Address", "Education", "Occupation"]
        );
    }

    #[test]
    fn test_staff_profile_role_only() {
        let profile: StaffProfile = serde_json::from_value(json!({"Role": "INFRASTRUCTURE"})).unwrap();
        assert_eq!(profile.rows(), vec![("Role", "INFRASTRUCTURE".to_string())]);
    }
}
