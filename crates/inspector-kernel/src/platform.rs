//! The platform registry: browser-like host objects.
//!
//! Host objects are recognized by class tag, except the window, which is
//! recognized by identity with the global object. `Document` accepts both
//! `Document` and `HTMLDocument`; the dedicated `HTMLDocument` kind is
//! declared later and takes over HTML documents.

use crate::error::InspectError;
use crate::kind::{Kind, RenderCx, RenderFn, Universe};
use crate::registry::Registry;
use crate::render::{self, to_display};
use inspector_value::{Singleton, Value};
use std::sync::LazyLock;

pub(crate) static REGISTRY: LazyLock<Registry> = LazyLock::new(build);

const READY_STATES: [&str; 5] = [
    "UNSENT (0)",
    "OPENED (1)",
    "HEADERS_RECEIVED (2)",
    "LOADING (3)",
    "DONE (4)",
];

/// Element-like classes, alphabetical. Each becomes its own kind.
const ELEMENT_CLASSES: &[&str] = &[
    "HTMLAnchorElement",
    "HTMLAppletElement",
    "HTMLAreaElement",
    "HTMLAudioElement",
    "HTMLBRElement",
    "HTMLBaseElement",
    "HTMLBaseFontElement",
    "HTMLBodyElement",
    "HTMLButtonElement",
    "HTMLCanvasElement",
    "HTMLCollection",
    "HTMLDListElement",
    "HTMLDataListElement",
    "HTMLDirectoryElement",
    "HTMLDivElement",
    "HTMLDocument",
    "HTMLElement",
    "HTMLEmbedElement",
    "HTMLFieldSetElement",
    "HTMLFontElement",
    "HTMLFormElement",
    "HTMLFrameElement",
    "HTMLFrameSetElement",
    "HTMLHRElement",
    "HTMLHeadElement",
    "HTMLHeadingElement",
    "HTMLHtmlElement",
    "HTMLIFrameElement",
    "HTMLImageElement",
    "HTMLInputElement",
    "HTMLKeygenElement",
    "HTMLLIElement",
    "HTMLLabelElement",
    "HTMLLegendElement",
    "HTMLLinkElement",
    "HTMLMapElement",
    "HTMLMarqueeElement",
    "HTMLMediaElement",
    "HTMLMenuElement",
    "HTMLMetaElement",
    "HTMLMeterElement",
    "HTMLModElement",
    "HTMLOListElement",
    "HTMLObjectElement",
    "HTMLOptGroupElement",
    "HTMLOptionElement",
    "HTMLOutputElement",
    "HTMLParagraphElement",
    "HTMLParamElement",
    "HTMLPreElement",
    "HTMLProgressElement",
    "HTMLQuoteElement",
    "HTMLScriptElement",
    "HTMLSelectElement",
    "HTMLSourceElement",
    "HTMLSpanElement",
    "HTMLStyleElement",
    "HTMLTableCaptionElement",
    "HTMLTableCellElement",
    "HTMLTableColElement",
    "HTMLTableElement",
    "HTMLTableRowElement",
    "HTMLTableSectionElement",
    "HTMLTextAreaElement",
    "HTMLTitleElement",
    "HTMLUListElement",
    "HTMLUnknownElement",
    "HTMLVideoElement",
];

fn build() -> Registry {
    Registry::builder(Universe::Platform)
        .kind(Kind::class("Attr", &["Attr"], render::keyed))
        .kind(Kind::class("BarInfo", &["BarInfo"], bar_info))
        .kind(Kind::class("BarProp", &["BarProp"], render::plain))
        .kind(Kind::class("DOMException", &["DOMException"], dom_exception))
        .kind(Kind::class("Document", &["Document", "HTMLDocument"], document))
        .kind(Kind::class("HTMLAllCollection", &["HTMLAllCollection"], render::sequence))
        .kinds(ELEMENT_CLASSES.iter().map(|class| {
            Kind::class(*class, std::slice::from_ref(class), element_renderer(class))
        }))
        .kind(Kind::class("Image", &["Image"], image))
        .kind(Kind::class("NamedNodeMap", &["NamedNodeMap"], render::keyed))
        .kind(Kind::class("Storage", &["Storage"], storage))
        .kind(Kind::shape("Window", is_global, window))
        .kind(Kind::class("XMLElement", &["XMLElement"], render::plain))
        .kind(Kind::class("XMLHttpRequest", &["XMLHttpRequest"], xml_http_request))
        .kind(Kind::class(
            "XMLHttpRequestException",
            &["XMLHttpRequestException"],
            xml_http_request_exception,
        ))
        .kind(Kind::class(
            "XMLHttpRequestProgressEvent",
            &["XMLHttpRequestProgressEvent"],
            xml_http_request_progress_event,
        ))
        .kind(Kind::class(
            "XMLHttpRequestUpload",
            &["XMLHttpRequestUpload"],
            xml_http_request_upload,
        ))
        .build()
}

fn element_renderer(class: &str) -> RenderFn {
    match class {
        "HTMLCollection" => render::sequence,
        _ => render::element,
    }
}

fn is_global(value: &Value) -> bool {
    value
        .as_object()
        .is_some_and(|object| object.singleton() == Some(Singleton::Global))
}

fn bar_info(_cx: &RenderCx<'_>, _value: &Value) -> Result<String, InspectError> {
    Ok("[BarInfo]".to_string())
}

fn storage(_cx: &RenderCx<'_>, _value: &Value) -> Result<String, InspectError> {
    Ok("[Storage]".to_string())
}

fn xml_http_request_upload(_cx: &RenderCx<'_>, _value: &Value) -> Result<String, InspectError> {
    Ok("[XMLHttpRequestUpload]".to_string())
}

fn document(_cx: &RenderCx<'_>, value: &Value) -> Result<String, InspectError> {
    Ok(format!("Document: {}", to_display(value.member("URL"))))
}

fn image(_cx: &RenderCx<'_>, value: &Value) -> Result<String, InspectError> {
    Ok(format!("Image: {}", to_display(value.member("src"))))
}

fn window(_cx: &RenderCx<'_>, value: &Value) -> Result<String, InspectError> {
    Ok(format!(
        "Window: {}",
        to_display(value.member("location").member("href"))
    ))
}

/// Only the fields the exception actually carries.
fn dom_exception(cx: &RenderCx<'_>, value: &Value) -> Result<String, InspectError> {
    let present = ["code", "message", "name", "stack"]
        .into_iter()
        .filter_map(|key| {
            let field = value.member(key);
            field.is_truthy().then(|| (key, field.clone()))
        });
    render::keyed(cx, &Value::object(present))
}

fn ready_state_label(state: &Value) -> Value {
    state
        .as_f64()
        .filter(|n| n.fract() == 0.0 && (0.0..5.0).contains(n))
        .map_or(Value::Undefined, |n| Value::from(READY_STATES[n as usize]))
}

/// Status fields cannot be read before the response headers arrive.
fn xml_http_request(cx: &RenderCx<'_>, value: &Value) -> Result<String, InspectError> {
    let state = value.member("readyState");
    let (code, text) = match state.as_f64() {
        Some(n) if n == 0.0 || n == 1.0 => (Value::Number(0.0), Value::from("")),
        _ => (
            value.member("status").clone(),
            value.member("statusText").clone(),
        ),
    };
    let summary = Value::object([
        ("type", Value::from("[XMLHttpRequest]")),
        ("readyState", ready_state_label(state)),
        ("statusText", text),
        ("httpCode", code),
    ]);
    render::keyed(cx, &summary)
}

fn xml_http_request_exception(cx: &RenderCx<'_>, value: &Value) -> Result<String, InspectError> {
    let summary = Value::object([
        ("type", Value::from("[XMLHttpRequestException]")),
        ("code", value.member("code").clone()),
    ]);
    render::keyed(cx, &summary)
}

fn xml_http_request_progress_event(
    cx: &RenderCx<'_>,
    _value: &Value,
) -> Result<String, InspectError> {
    render::sequence(cx, &Value::array(vec![Value::from("XMLHttpRequestProgressEvent")]))
}
