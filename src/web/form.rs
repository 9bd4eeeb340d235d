//! Contact form binding and the relay transport.

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::{spawn_local, JsFuture};
use web_sys::{
    Element, Event, HtmlButtonElement, HtmlFormElement, HtmlInputElement,
    HtmlSelectElement, HtmlTextAreaElement, Request, RequestInit, RequestMode,
    Response, ScrollBehavior, ScrollIntoViewOptions, ScrollLogicalPosition,
};

use super::{dom, Page};
use crate::form::{
    Completion, ContactForm, ContactRecord, ContactValues, EmailRelay,
    FieldKind, FieldSpec, FormField, FormNotice, NoticeBoard, SubmitOutcome, Validity,
    NOTICE_CLASS,
};
use crate::SiteError;

const FORM_ID: &str = "contact-form";
const FIELD_SELECTOR: &str = "input, textarea, select";
const HONEYPOT_SELECTOR: &str = "#website";
const LOADING_CLASS: &str = "loading";

struct FormBinding {
    form: RefCell<ContactForm>,
    board: RefCell<NoticeBoard>,
    relay: EmailRelay,
    element: HtmlFormElement,
    fields: Vec<Element>,
    /// `.error-message` next to each field.
    errors: Vec<Option<Element>>,
    button: Option<Element>,
    notice: Option<Element>,
}

pub(super) fn mount(page: &Page) -> Result<(), SiteError> {
    let Some(element) = dom::document()?
        .get_element_by_id(FORM_ID)
        .and_then(|el| el.dyn_into::<HtmlFormElement>().ok())
    else {
        return Ok(());
    };
    let binding = bind(page, element)?;

    for (index, field) in binding.fields.iter().enumerate() {
        let ctx = Rc::clone(&binding);
        dom::on(field, "blur", move |_: Event| {
            let value = value_of(&ctx.fields[index]);
            let validity = ctx.form.borrow_mut().blur(index, &value);
            if let Some(validity) = validity {
                dom::report("contact form", project_field(&ctx, index, validity));
            }
        })?;

        let ctx = Rc::clone(&binding);
        dom::on(field, "input", move |_: Event| {
            let value = value_of(&ctx.fields[index]);
            let validity = ctx.form.borrow_mut().input(index, &value);
            if let Some(validity) = validity {
                dom::report("contact form", project_field(&ctx, index, validity));
            }
        })?;
    }

    let ctx = Rc::clone(&binding);
    dom::on(&binding.element, "submit", move |event: Event| {
        event.prevent_default();
        dom::report("contact form", submit(&ctx));
    })
}

fn bind(page: &Page, element: HtmlFormElement) -> Result<Rc<FormBinding>, SiteError> {
    let fields = dom::select_all_in(&element, FIELD_SELECTOR)?;
    let specs: Vec<FieldSpec> = fields.iter().map(field_spec).collect();
    let errors = fields
        .iter()
        .map(|f| {
            f.parent_element()
                .and_then(|p| p.query_selector(".error-message").ok().flatten())
        })
        .collect();

    let binding = Rc::new(FormBinding {
        form: RefCell::new(ContactForm::new(
            specs,
            page.options.form.clone(),
            &page.options.relay.recipient,
            page.tracker.clone(),
        )),
        board: RefCell::new(NoticeBoard::new()),
        relay: EmailRelay::new(page.options.relay.clone()),
        button: element.query_selector(".btn-submit").ok().flatten(),
        notice: element.query_selector(".form-message").ok().flatten(),
        errors,
        fields,
        element,
    });
    Ok(binding)
}

fn field_spec(el: &Element) -> FieldSpec {
    FieldSpec::new(
        el.get_attribute("name").unwrap_or_default(),
        FieldKind::from_type_attr(&el.get_attribute("type").unwrap_or_default()),
        el.has_attribute("required"),
    )
}

fn value_of(el: &Element) -> String {
    if let Some(input) = el.dyn_ref::<HtmlInputElement>() {
        input.value()
    } else if let Some(area) = el.dyn_ref::<HtmlTextAreaElement>() {
        area.value()
    } else if let Some(select) = el.dyn_ref::<HtmlSelectElement>() {
        select.value()
    } else {
        String::new()
    }
}

fn value_named(ctx: &FormBinding, name: &str) -> String {
    ctx.fields
        .iter()
        .find(|f| f.get_attribute("name").as_deref() == Some(name))
        .map(value_of)
        .unwrap_or_default()
}

fn project_field(ctx: &FormBinding, index: usize, validity: Validity) -> Result<(), SiteError> {
    let (Some(field), Some(error)) = (ctx.fields.get(index), ctx.errors.get(index)) else {
        return Ok(());
    };
    if let Some(aria) = validity.aria_invalid() {
        field.set_attribute("aria-invalid", aria)?;
    }
    if let Some(error) = error {
        let form = ctx.form.borrow();
        error.set_text_content(Some(form.error_text(validity)));
    }
    Ok(())
}

fn submit(ctx: &Rc<FormBinding>) -> Result<(), SiteError> {
    let honeypot = ctx
        .element
        .query_selector(HONEYPOT_SELECTOR)
        .ok()
        .flatten()
        .map(|el| value_of(&el))
        .unwrap_or_default();
    let values = ContactValues {
        name: value_named(ctx, "name"),
        email: value_named(ctx, "email"),
        phone: value_named(ctx, "phone"),
        service: value_named(ctx, "service"),
        message: value_named(ctx, "message"),
    };

    let outcome = {
        let mut form = ctx.form.borrow_mut();
        for (index, field) in ctx.fields.iter().enumerate() {
            form.set_value(index, &value_of(field));
        }
        form.submit(&honeypot, &values)
    };

    match outcome {
        SubmitOutcome::Dropped | SubmitOutcome::Busy => Ok(()),
        SubmitOutcome::Rejected { notice } => {
            let states: Vec<Validity> =
                ctx.form.borrow().fields().iter().map(FormField::validity).collect();
            for (index, validity) in states.into_iter().enumerate() {
                project_field(ctx, index, validity)?;
            }
            show_notice(ctx, &notice)
        }
        SubmitOutcome::Dispatch { record } => {
            dispatch(ctx, record);
            Ok(())
        }
    }
}

/// Send `record` to the relay. The form is already `Sending`, so the
/// spinner failing must not keep the request from going out.
fn dispatch(ctx: &Rc<FormBinding>, record: ContactRecord) {
    dom::report("contact form", set_busy(ctx, true));
    let ctx = Rc::clone(ctx);
    spawn_local(async move {
        let result = deliver(&ctx.relay, &record).await;
        let done = match result {
            Ok(()) => ctx.form.borrow_mut().relay_succeeded(),
            Err(e) => ctx.form.borrow_mut().relay_failed(&e),
        };
        dom::report("contact form", complete(&ctx, &done));
    });
}

async fn deliver(relay: &EmailRelay, record: &ContactRecord) -> Result<(), SiteError> {
    let body = relay.request_body(record)?;
    let init = RequestInit::new();
    init.set_method("POST");
    init.set_mode(RequestMode::Cors);
    init.set_body(&JsValue::from_str(&body));

    let request = Request::new_with_str_and_init(relay.endpoint(), &init)?;
    request.headers().set("Content-Type", "application/json")?;

    let response: Response = JsFuture::from(dom::window()?.fetch_with_request(&request))
        .await
        .map_err(|e| SiteError::RelayTransport(SiteError::from(e).to_string()))?
        .dyn_into()?;
    let text = JsFuture::from(response.text()?)
        .await?
        .as_string()
        .unwrap_or_default();
    EmailRelay::check_response(response.status(), &text)
}

fn complete(ctx: &Rc<FormBinding>, done: &Completion) -> Result<(), SiteError> {
    if done.reset_fields {
        ctx.element.reset();
    }
    show_notice(ctx, &done.notice)?;
    match done.reenable_after {
        None => set_busy(ctx, false),
        Some(delay) => {
            let ctx = Rc::clone(ctx);
            dom::after(delay, move || {
                ctx.form.borrow_mut().cooldown_elapsed();
                dom::report("contact form", set_busy(&ctx, false));
            });
            Ok(())
        }
    }
}

fn set_busy(ctx: &FormBinding, busy: bool) -> Result<(), SiteError> {
    let Some(button) = &ctx.button else {
        return Ok(());
    };
    if let Some(button) = button.dyn_ref::<HtmlButtonElement>() {
        button.set_disabled(busy);
    }
    let _ = button.class_list().toggle_with_force(LOADING_CLASS, busy)?;
    Ok(())
}

fn show_notice(ctx: &Rc<FormBinding>, notice: &FormNotice) -> Result<(), SiteError> {
    let Some(el) = &ctx.notice else {
        return Ok(());
    };
    el.set_text_content(Some(&notice.text));
    el.set_class_name(&notice.class_name());
    el.set_attribute("role", "alert")?;

    let scroll = ScrollIntoViewOptions::new();
    scroll.set_behavior(ScrollBehavior::Smooth);
    scroll.set_block(ScrollLogicalPosition::Nearest);
    el.scroll_into_view_with_scroll_into_view_options(&scroll);

    let ticket = ctx.board.borrow_mut().show();
    let lifetime = notice.lifetime(ctx.form.borrow().options());
    if let Some(lifetime) = lifetime {
        let ctx = Rc::clone(ctx);
        let el = el.clone();
        dom::after(lifetime, move || {
            if ctx.board.borrow().expire(ticket) {
                el.set_text_content(None);
                el.set_class_name(NOTICE_CLASS);
            }
        });
    }
    Ok(())
}
