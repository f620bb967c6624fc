// ============================================================================
// SUBMIT FORM - Formulario de contribución
// ============================================================================
// Los inputs escriben en el borrador sin re-render; el resto del formulario
// se reconstruye desde el estado en cada notificación
// ============================================================================

use gloo_timers::callback::Timeout;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys::Element;

use crate::config::CONFIG;
use crate::dom::{append_child, on_input, on_submit, set_text_content, ElementBuilder};
use crate::errors::AppError;
use crate::models::FormField;
use crate::state::AppState;
use crate::viewmodels::{SubmissionViewModel, SubmitOutcome};
use crate::views::render_status_banner;

pub fn render_submit_form(state: &AppState) -> Result<Element, JsValue> {
    let busy = state.submission.is_busy();
    let draft = state.submission.get_draft();

    let section = ElementBuilder::new("section")?
        .class("submit-section")
        .child(ElementBuilder::new("h2")?.text("Submit Research Contribution").build())?
        .child(
            ElementBuilder::new("p")?
                .class("submit-subtitle")
                .text("Verified contributions are minted as soulbound reputation tokens.")
                .build(),
        )?
        .build();

    let form = ElementBuilder::new("form")?
        .class("submit-form")
        .attr("novalidate", "")?
        .build();

    let fields = [
        (FormField::Title, "Title", "Paper or dataset title", false),
        (FormField::Doi, "DOI or Link", "10.1000/xyz123", false),
        (FormField::Repository, "Repository (optional)", "https://github.com/...", false),
        (FormField::Abstract, "Abstract", "Short summary of the contribution", true),
    ];
    for (field, label, placeholder, multiline) in fields {
        let group = render_field(
            state,
            field,
            label,
            placeholder,
            draft.field(field),
            multiline,
            busy,
        )?;
        append_child(&form, &group)?;
    }

    if let Some(banner) = render_status_banner(&state.submission.get_status())? {
        append_child(&form, &banner)?;
    }

    let button = ElementBuilder::new("button")?
        .attr("type", "submit")?
        .class("btn-submit")
        .flag("disabled", busy)?
        .text(if busy { "Submitting..." } else { "Submit Contribution" })
        .build();
    append_child(&form, &button)?;

    {
        let state_clone = state.clone();
        on_submit(&form, move || {
            let vm = SubmissionViewModel::new(&state_clone);
            let notice_timer = state_clone.submission.notice_timer.clone();
            spawn_local(async move {
                match vm.submit().await {
                    SubmitOutcome::Rejected(_) | SubmitOutcome::Failed(AppError::SubmissionInProgress) => {}
                    SubmitOutcome::Minted(_) | SubmitOutcome::Failed(_) => {
                        // El aviso se cierra solo
                        notice_timer.replace(Timeout::new(CONFIG.notice_dismiss_ms, move || {
                            vm.acknowledge()
                        }));
                    }
                }
            });
        })?;
    }

    append_child(&section, &form)?;
    Ok(section)
}

fn render_field(
    state: &AppState,
    field: FormField,
    label: &str,
    placeholder: &str,
    value: &str,
    multiline: bool,
    busy: bool,
) -> Result<Element, JsValue> {
    let id = format!("field-{}", field.name());
    let error = state.submission.field_error(field);

    let group = ElementBuilder::new("div")?
        .class(if error.is_some() { "form-group has-error" } else { "form-group" })
        .child(ElementBuilder::new("label")?.attr("for", &id)?.text(label).build())?
        .build();

    let input = if multiline {
        let area = ElementBuilder::new("textarea")?
            .attr("rows", "5")?
            .build();
        set_text_content(&area, value);
        area
    } else {
        ElementBuilder::new("input")?
            .attr("type", "text")?
            .attr("value", value)?
            .build()
    };
    let input = ElementBuilder::from(input)
        .id(&id)?
        .attr("name", field.name())?
        .attr("placeholder", placeholder)?
        .class("form-input")
        .flag("disabled", busy)?
        .build();

    {
        let form_state = state.submission.clone();
        on_input(&input, move |value| form_state.set_field(field, value))?;
    }
    append_child(&group, &input)?;

    if let Some(message) = error {
        let hint = ElementBuilder::new("p")?
            .class("field-error")
            .text(&message)
            .build();
        append_child(&group, &hint)?;
    }

    Ok(group)
}
