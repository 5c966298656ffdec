//! Form readers
//!
//! Editors arrive as server-rendered markup that already carries the saved
//! values of a document. These readers lift those values into the typed form
//! models, so a save posts every committed row the editor showed and not only
//! the ones added since it opened.

use relay_domain::{CollectionForm, FormRow, RequestForm, RowGroup};
use scraper::{ElementRef, Html, Selector};

/// Reads a collection editor. Fields missing from the markup keep the
/// values of `defaults`.
#[must_use]
pub fn read_collection_form(html: &str, defaults: CollectionForm) -> CollectionForm {
    let fragment = Html::parse_fragment(html);
    let root = fragment.root_element();
    let scope = first(root, ".collection-form").unwrap_or(root);

    CollectionForm {
        collection: field(scope, ".collection-form-name").unwrap_or(defaults.collection),
        variables: RowGroup::from_rows(rows(scope, "collection-form-variables")),
    }
}

/// Reads a request editor. Fields missing from the markup keep the values
/// of `defaults`.
#[must_use]
pub fn read_request_form(html: &str, defaults: RequestForm) -> RequestForm {
    let fragment = Html::parse_fragment(html);
    let root = fragment.root_element();
    let scope = first(root, ".request-form").unwrap_or(root);

    RequestForm {
        collection: field(scope, ".request-form-collection").unwrap_or(defaults.collection),
        request: field(scope, ".request-form-name").unwrap_or(defaults.request),
        method: field(scope, ".request-form-method").unwrap_or(defaults.method),
        url: field(scope, ".request-form-url").unwrap_or(defaults.url),
        headers: RowGroup::from_rows(rows(scope, "request-form-headers")),
        payload: field(scope, ".request-form-payload").unwrap_or(defaults.payload),
    }
}

/// Committed rows of the group `prefix`, skipping its hidden prototype.
fn rows(scope: ElementRef<'_>, prefix: &str) -> Vec<FormRow> {
    let Ok(committed) = Selector::parse(&format!(
        ".{prefix}-row:not(.{prefix}-row-prototype)"
    )) else {
        return Vec::new();
    };
    scope
        .select(&committed)
        .map(|row| FormRow {
            name: first(row, &format!(".{prefix}-name"))
                .map(value)
                .unwrap_or_default(),
            value: first(row, &format!(".{prefix}-value"))
                .map(value)
                .unwrap_or_default(),
            enabled: first(row, &format!(".{prefix}-enabled"))
                .is_some_and(|input| input.value().attr("checked").is_some()),
        })
        .collect()
}

/// Non-empty value of the first control matching `css`.
fn field(scope: ElementRef<'_>, css: &str) -> Option<String> {
    first(scope, css).map(value).filter(|v| !v.is_empty())
}

fn first<'a>(scope: ElementRef<'a>, css: &str) -> Option<ElementRef<'a>> {
    Selector::parse(css)
        .ok()
        .and_then(|selector| scope.select(&selector).next())
}

/// Current value of a form control.
fn value(control: ElementRef<'_>) -> String {
    match control.value().name() {
        "textarea" => control.text().collect(),
        "select" => {
            let options: Vec<ElementRef<'_>> = Selector::parse("option")
                .map(|option| control.select(&option).collect())
                .unwrap_or_default();
            options
                .iter()
                .find(|option| option.value().attr("selected").is_some())
                .or_else(|| options.first())
                .map(|option| {
                    option
                        .value()
                        .attr("value")
                        .map_or_else(|| option.text().collect(), str::to_owned)
                })
                .unwrap_or_default()
        }
        _ => control.value().attr("value").unwrap_or_default().to_owned(),
    }
}
