//! Small form building blocks shared by the entity views.

use dioxus::prelude::*;

/// Labelled text input bound to a signal.
#[component]
pub fn Field(
    #[props(into)] label: String,
    value: Signal<String>,
    #[props(default = "text".to_string(), into)] r#type: String,
    #[props(default, into)] placeholder: String,
    #[props(default, into)] error: String,
) -> Element {
    let mut value = value;
    rsx! {
        label {
            class: "field",
            span { class: "field-label", "{label}" }
            input {
                r#type: "{r#type}",
                placeholder: "{placeholder}",
                value: "{value}",
                oninput: move |evt: FormEvent| value.set(evt.value()),
            }
            if !error.is_empty() {
                span { class: "field-error", "{error}" }
            }
        }
    }
}

/// Labelled select over `(value, label)` pairs. An empty value is the
/// placeholder option.
#[component]
pub fn Choice(
    #[props(into)] label: String,
    value: Signal<String>,
    options: Vec<(String, String)>,
    #[props(default = "Select...".to_string(), into)] placeholder: String,
    #[props(default, into)] error: String,
) -> Element {
    let mut value = value;
    rsx! {
        label {
            class: "field",
            span { class: "field-label", "{label}" }
            select {
                value: "{value}",
                onchange: move |evt: FormEvent| value.set(evt.value()),
                option { value: "", "{placeholder}" }
                for (key, text) in options {
                    option { key: "{key}", value: "{key}", selected: value() == key, "{text}" }
                }
            }
            if !error.is_empty() {
                span { class: "field-error", "{error}" }
            }
        }
    }
}

/// Clickable table header that shows the current sort direction.
#[component]
pub fn SortHeader(
    #[props(into)] label: String,
    #[props(!optional)] arrow: Option<&'static str>,
    onclick: EventHandler<()>,
) -> Element {
    rsx! {
        th {
            class: "sortable",
            onclick: move |_| onclick.call(()),
            "{label}"
            if let Some(arrow) = arrow {
                span { class: "sort-arrow", " {arrow}" }
            }
        }
    }
}

/// Money and measurements as shown in tables: two decimals, thousands grouped.
pub fn amount(value: f64) -> String {
    let fixed = format!("{:.2}", value.abs());
    let (whole, fraction) = fixed.split_once('.').unwrap_or((fixed.as_str(), "00"));
    let mut grouped = String::new();
    for (i, digit) in whole.chars().enumerate() {
        if i > 0 && (whole.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }
    let sign = if value < 0.0 { "-" } else { "" };
    format!("{sign}{grouped}.{fraction}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_amount_groups_thousands() {
        assert_eq!(amount(0.0), "0.00");
        assert_eq!(amount(999.5), "999.50");
        assert_eq!(amount(50000.0), "50,000.00");
        assert_eq!(amount(1234567.891), "1,234,567.89");
        assert_eq!(amount(-2500.0), "-2,500.00");
    }
}
