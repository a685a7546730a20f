//! View rendering for the generic form renderer.
//!
//! Fields are emitted in declaration order inside a two-column CSS grid; the
//! `grid_column` hint only picks the cell class. Fields without a hint get no
//! column class and flow naturally.

use common::forms::{FieldType, FormConfig, FormError, FormField, GridColumn};
use web_sys::{HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement};
use yew::html::Scope;
use yew::prelude::*;

use super::messages::Msg;
use super::state::FormRenderer;

pub fn view(component: &FormRenderer, ctx: &Context<FormRenderer>) -> Html {
    match component.config {
        Ok(config) => build_form(component, config, ctx.link()),
        Err(ref e) => build_lookup_error(e),
    }
}

fn build_form(component: &FormRenderer, config: &'static FormConfig, link: &Scope<FormRenderer>) -> Html {
    let onsubmit = link.callback(|e: SubmitEvent| {
        e.prevent_default();
        Msg::Submit
    });

    html! {
        <section class={classes!("lead-form", format!("lead-form-{}", config.id))}>
            <header class="lead-form-header">
                <h2>{ config.title }</h2>
                <p>{ config.description }</p>
            </header>
            <form {onsubmit} novalidate={true}>
                <div class="form-grid">
                    { for config.fields.iter().map(|field| build_field(component, field, link)) }
                </div>
                <button
                    type="submit"
                    class={classes!("btn-primary", component.submitting.then_some("is-busy"))}
                    disabled={component.submitting}
                >
                    { if component.submitting { config.submitting_text } else { config.submit_text } }
                </button>
            </form>
        </section>
    }
}

fn column_class(column: Option<GridColumn>) -> Option<&'static str> {
    column.map(|c| match c {
        GridColumn::One => "col-1",
        GridColumn::Two => "col-2",
        GridColumn::Full => "col-full",
    })
}

fn build_field(component: &FormRenderer, field: &'static FormField, link: &Scope<FormRenderer>) -> Html {
    let id = component.field_id(field.name);
    let error = component.errors.get(field.name);
    let error_id = format!("{}-error", id);

    html! {
        <div class={classes!("form-field", column_class(field.grid_column), error.map(|_| "has-error"))}>
            <label for={id.clone()}>
                { field.plain_label() }
                if field.required {
                    <span class="required-marker" aria-hidden="true">{ " *" }</span>
                }
            </label>
            { build_control(component, field, &id, error.is_some().then(|| error_id.clone()), link) }
            if let Some(kind) = error {
                <p class="field-error" id={error_id.clone()}>{ kind.to_string() }</p>
            }
        </div>
    }
}

fn build_control(
    component: &FormRenderer,
    field: &'static FormField,
    id: &str,
    described_by: Option<String>,
    link: &Scope<FormRenderer>,
) -> Html {
    let name = field.name;
    let value = component.values.get(name).to_string();
    let onblur = link.callback(move |_: FocusEvent| Msg::Blur(name));
    let invalid = if described_by.is_some() { "true" } else { "false" };

    match field.field_type {
        FieldType::Textarea => {
            let oninput = link.callback(move |e: InputEvent| {
                let input: HtmlTextAreaElement = e.target_unchecked_into();
                Msg::UpdateField { name, value: input.value() }
            });
            html! {
                <textarea
                    id={id.to_string()}
                    {name}
                    rows={field.rows.unwrap_or(4).to_string()}
                    placeholder={field.placeholder}
                    required={field.required}
                    aria-invalid={invalid}
                    aria-describedby={described_by}
                    {value}
                    {oninput}
                    {onblur}
                />
            }
        }
        FieldType::Select => {
            let onchange = link.callback(move |e: Event| {
                let select: HtmlSelectElement = e.target_unchecked_into();
                Msg::UpdateField { name, value: select.value() }
            });
            html! {
                <select
                    id={id.to_string()}
                    {name}
                    required={field.required}
                    aria-invalid={invalid}
                    aria-describedby={described_by}
                    {onchange}
                    {onblur}
                >
                    { for field.select_options().iter().map(|option| html! {
                        <option value={option.value} selected={option.value == value}>
                            { option.label }
                        </option>
                    }) }
                </select>
            }
        }
        other => {
            let oninput = link.callback(move |e: InputEvent| {
                let input: HtmlInputElement = e.target_unchecked_into();
                Msg::UpdateField { name, value: input.value() }
            });
            html! {
                <input
                    id={id.to_string()}
                    type={other.input_type().unwrap_or("text")}
                    {name}
                    placeholder={field.placeholder}
                    required={field.required}
                    aria-invalid={invalid}
                    aria-describedby={described_by}
                    {value}
                    {oninput}
                    {onblur}
                />
            }
        }
    }
}

fn build_lookup_error(error: &FormError) -> Html {
    html! {
        <section class="lead-form lead-form-missing">
            <p>{ format!("This form is unavailable: {}", error) }</p>
        </section>
    }
}
