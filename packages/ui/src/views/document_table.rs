use api::models::Document;
use dioxus::prelude::*;

use super::ModalOverlay;
use crate::banner::Banner;
use crate::download::save_file;

/// Documents with preview and download, shared by the citizen and employee
/// screens. `on_delete` adds a delete button per row.
#[component]
pub fn DocumentTable(
    documents: Vec<Document>,
    banner: Banner,
    #[props(default)] on_delete: Option<EventHandler<i64>>,
) -> Element {
    let mut banner = banner;
    let mut previewing = use_signal(|| Option::<Document>::None);

    let mut download = move |document: Document| match document.bytes() {
        Ok(bytes) => match save_file(&document.file_name(), &bytes) {
            Ok(()) => banner.success(format!("Downloaded {}", document.file_name())),
            Err(e) => {
                tracing::warn!("Download of document {} failed: {}", document.id, e);
                banner.error("Could not save the document.");
            }
        },
        Err(e) => banner.failure(&e),
    };

    rsx! {
        table {
            class: "data-table",
            thead {
                tr {
                    th { "Type" }
                    th { "Owner" }
                    th { "Actions" }
                }
            }
            tbody {
                for document in documents {
                    tr {
                        key: "{document.id}",
                        td { "{document.kind}" }
                        td { "{document.owner}" }
                        td {
                            class: "actions",
                            if document.has_payload() {
                                button {
                                    class: "btn btn-secondary",
                                    onclick: {
                                        let document = document.clone();
                                        move |_| previewing.set(Some(document.clone()))
                                    },
                                    "Preview"
                                }
                                button {
                                    class: "btn btn-secondary",
                                    onclick: {
                                        let document = document.clone();
                                        move |_| download(document.clone())
                                    },
                                    "Download"
                                }
                            } else {
                                span { class: "muted", "No file" }
                            }
                            if let Some(on_delete) = on_delete {
                                button {
                                    class: "btn btn-danger",
                                    onclick: move |_| on_delete.call(document.id),
                                    "Delete"
                                }
                            }
                        }
                    }
                }
            }
        }

        if let Some(document) = previewing() {
            ModalOverlay {
                title: document.file_name(),
                wide: true,
                on_close: move |_| previewing.set(None),
                iframe {
                    class: "pdf-preview",
                    src: document.preview_url(),
                    title: document.kind.clone(),
                }
            }
        }
    }
}
