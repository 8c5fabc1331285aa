use serde::{Deserialize, Serialize};

use crate::documents;
use crate::error::ApiResult;
use crate::query::matches_text;

/// A stored PDF. `pdf_data` is base64 and may be absent in list responses.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Document {
    #[serde(rename = "Document_id", alias = "Doc_id", alias = "doc_id", default)]
    pub id: i64,
    #[serde(rename = "Type", alias = "type", default)]
    pub kind: String,
    #[serde(rename = "Pdf_data", alias = "pdf_data", default)]
    pub pdf_data: String,
    #[serde(rename = "user_name", alias = "User_name", default)]
    pub owner: String,
}

impl Document {
    pub fn has_payload(&self) -> bool {
        !self.pdf_data.trim().is_empty()
    }

    pub fn bytes(&self) -> ApiResult<Vec<u8>> {
        documents::decode(&self.pdf_data)
    }

    pub fn file_name(&self) -> String {
        documents::file_name(&self.kind)
    }

    pub fn preview_url(&self) -> String {
        documents::data_url(&self.pdf_data)
    }
}

/// Upload/replace body for `/panchayat-employee/documents`.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct DocumentDraft {
    #[serde(rename = "Type")]
    pub kind: String,
    #[serde(rename = "user_name")]
    pub owner: String,
    pub pdf_data: String,
}

impl DocumentDraft {
    pub fn new(kind: &str, owner: &str, bytes: &[u8]) -> Self {
        Self {
            kind: kind.trim().to_string(),
            owner: owner.trim().to_string(),
            pdf_data: documents::encode(bytes),
        }
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.pdf_data.is_empty() {
            return Err("Please select a file to upload.".to_string());
        }
        if self.kind.is_empty() {
            return Err("Document type is required.".to_string());
        }
        if self.owner.is_empty() {
            return Err("Citizen user name is required.".to_string());
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct DocumentFilter {
    pub kind: String,
}

impl DocumentFilter {
    pub fn apply(&self, documents: &[Document]) -> Vec<Document> {
        documents
            .iter()
            .filter(|d| matches_text(&d.kind, &self.kind))
            .cloned()
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn test_upload_download_round_trip() {
        let bytes = b"%PDF-1.7 certificate".to_vec();
        let draft = DocumentDraft::new("Birth Certificate", "john_doe", &bytes);
        draft.validate().unwrap();

        // What the employee uploads comes back to the citizen under `Pdf_data`
        let wire = serde_json::to_value(&draft).unwrap();
        let stored: Document = serde_json::from_value(json!({
            "Document_id": 5,
            "Type": wire["Type"],
            "Pdf_data": wire["pdf_data"],
            "user_name": wire["user_name"],
        }))
        .unwrap();

        assert_eq!(stored.bytes().unwrap(), bytes);
        assert_eq!(stored.file_name(), "Birth Certificate.pdf");
        assert!(stored.preview_url().starts_with("data:application/pdf;base64,"));
    }

    #[test]
    fn test_list_rows_without_payload() {
        let doc: Document =
            serde_json::from_value(json!({"Doc_id": 2, "Type": "Ration Card", "user_name": "a"}))
                .unwrap();
        assert_eq!(doc.id, 2);
        assert!(!doc.has_payload());
    }

    #[test]
    fn test_draft_requires_file() {
        let draft = DocumentDraft::new("Deed", "john_doe", b"");
        assert_eq!(
            draft.validate().unwrap_err(),
            "Please select a file to upload."
        );
    }
}
