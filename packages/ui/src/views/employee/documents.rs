use api::models::{DocumentDraft, DocumentFilter};
use api::{Access, Role};
use dioxus::prelude::*;

use crate::auth::use_client;
use crate::banner::{use_banner, BannerView};
use crate::form::Field;
use crate::records::{use_records, Notice};
use crate::views::DocumentTable;

const ACCESS: Access = Access::employee(Role::Document);

/// A picked file: its name and contents.
type Picked = (String, Vec<u8>);

/// Upload form inputs. Bumping `round` remounts the file input, which drops
/// the browser's file selection.
#[derive(Clone, Copy)]
struct UploadFields {
    kind: Signal<String>,
    owner: Signal<String>,
    replace: Signal<bool>,
    file: Signal<Option<Picked>>,
    round: Signal<u32>,
}

impl UploadFields {
    fn new() -> Self {
        Self {
            kind: Signal::new(String::new()),
            owner: Signal::new(String::new()),
            replace: Signal::new(false),
            file: Signal::new(None),
            round: Signal::new(0),
        }
    }

    fn clear(&mut self) {
        self.kind.set(String::new());
        self.owner.set(String::new());
        self.replace.set(false);
        self.file.set(None);
        *self.round.write() += 1;
    }
}

fn upload_draft(kind: &str, owner: &str, file: Option<&Picked>) -> Result<DocumentDraft, String> {
    let bytes = file.map(|(_, bytes)| bytes.as_slice()).unwrap_or_default();
    let draft = DocumentDraft::new(kind, owner, bytes);
    draft.validate()?;
    Ok(draft)
}

#[component]
pub fn EmployeeDocuments() -> Element {
    let client = use_client();
    let mut banner = use_banner();

    let mut citizen = use_signal(String::new);
    let kind_filter = use_signal(String::new);

    let mut upload = use_hook(UploadFields::new);
    let mut file = upload.file;
    let mut replace = upload.replace;

    let records = use_records(ACCESS, banner, move |client| {
        let citizen = citizen();
        async move { client.employee().documents(&citizen).await }
    });

    let filter = DocumentFilter { kind: kind_filter() };
    let rows = filter.apply(&records.rows());

    let pick_file = move |evt: FormEvent| async move {
        let Some(picked) = evt.files().into_iter().next() else {
            file.set(None);
            return;
        };
        match picked.read_bytes().await {
            Ok(bytes) => file.set(Some((picked.name(), bytes.to_vec()))),
            Err(e) => {
                tracing::warn!("Reading {} failed: {}", picked.name(), e);
                file.set(None);
                banner.error("Could not read the selected file.");
            }
        }
    };

    let submit = {
        let client = client.clone();
        move |evt: FormEvent| {
            evt.prevent_default();
            let draft = match upload_draft(&(upload.kind)(), &(upload.owner)(), file.read().as_ref()) {
                Ok(draft) => draft,
                Err(message) => {
                    banner.error(message);
                    return;
                }
            };
            let replacing = replace();
            upload.clear();
            let client = client.clone();
            if replacing {
                records.mutate(banner, "Document replaced.", async move {
                    client.employee().replace_document(&draft).await
                });
            } else {
                records.mutate(banner, "Document uploaded.", async move {
                    client.employee().upload_document(&draft).await
                });
            }
        }
    };

    let delete = move |document_id: i64| {
        let client = client.clone();
        records.mutate(banner, "Document deleted.", async move {
            client.employee().delete_document(document_id).await
        });
    };

    rsx! {
        div {
            class: "view-page",
            h1 { class: "view-title", "Documents" }
            BannerView { banner }

            form {
                class: "card upload-form",
                onsubmit: submit,
                h2 { "Upload PDF" }
                Field { label: "Document type", value: upload.kind, placeholder: "e.g. Birth Certificate" }
                Field { label: "Citizen username", value: upload.owner }
                label {
                    class: "field",
                    span { class: "field-label", "File" }
                    // Keyed by round so clearing the form swaps in a fresh input.
                    for round in [(upload.round)()] {
                        input {
                            key: "{round}",
                            r#type: "file",
                            accept: ".pdf,application/pdf",
                            onchange: pick_file,
                        }
                    }
                    if let Some((name, bytes)) = file() {
                        span { class: "muted", "{name} ({bytes.len()} bytes)" }
                    }
                }
                label {
                    class: "checkbox",
                    input {
                        r#type: "checkbox",
                        checked: replace(),
                        onchange: move |evt: FormEvent| replace.set(evt.checked()),
                    }
                    "Replace the citizen's existing document of this type"
                }
                button { class: "btn btn-primary", r#type: "submit", "Upload" }
            }

            div {
                class: "toolbar",
                input {
                    class: "search",
                    placeholder: "Citizen username (blank for all)",
                    value: "{citizen}",
                    oninput: move |evt: FormEvent| citizen.set(evt.value()),
                }
                Field { label: "Type", value: kind_filter }
            }

            if let Some(text) = records.notice() {
                Notice { text }
            } else {
                DocumentTable {
                    documents: rows,
                    banner,
                    on_delete: delete,
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use api::documents;

    use super::*;

    #[test]
    fn test_upload_draft_needs_file_and_fields() {
        let picked: Picked = ("birth.pdf".to_string(), b"%PDF-1.4".to_vec());

        let draft = upload_draft(" Birth Certificate ", "john_doe", Some(&picked)).unwrap();
        assert_eq!(draft.kind, "Birth Certificate");
        assert_eq!(draft.owner, "john_doe");
        assert_eq!(documents::decode(&draft.pdf_data).unwrap(), b"%PDF-1.4");

        assert_eq!(
            upload_draft("Birth Certificate", "john_doe", None).unwrap_err(),
            "Please select a file to upload."
        );
        assert!(upload_draft("", "john_doe", Some(&picked)).is_err());
        assert!(upload_draft("Birth Certificate", " ", Some(&picked)).is_err());
    }
}
