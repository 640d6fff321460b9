//! Builders for browser-like host objects.
//!
//! Host objects are the ones a debugging printer meets in a page: elements,
//! documents, the window, storage, XHR. Their class tags follow the names a
//! browser reports from `Object.prototype.toString`.

use crate::object::{Object, Singleton, Slot};
use crate::value::Value;

const NODE_METHODS: &[&str] = &[
    "appendChild",
    "cloneNode",
    "hasChildNodes",
    "insertBefore",
    "removeChild",
];

const ELEMENT_NODE: u32 = 1;
const ATTRIBUTE_NODE: u32 = 2;
const DOCUMENT_NODE: u32 = 9;

/// The interface class a browser assigns to an element with `tag`.
///
/// Tags are matched case-insensitively. Known HTML tags without a dedicated
/// interface map to `HTMLElement`; anything else is `HTMLUnknownElement`.
pub fn element_class(tag: &str) -> &'static str {
    match tag.to_ascii_lowercase().as_str() {
        "a" => "HTMLAnchorElement",
        "applet" => "HTMLAppletElement",
        "area" => "HTMLAreaElement",
        "audio" => "HTMLAudioElement",
        "br" => "HTMLBRElement",
        "base" => "HTMLBaseElement",
        "basefont" => "HTMLBaseFontElement",
        "body" => "HTMLBodyElement",
        "button" => "HTMLButtonElement",
        "canvas" => "HTMLCanvasElement",
        "dl" => "HTMLDListElement",
        "datalist" => "HTMLDataListElement",
        "dir" => "HTMLDirectoryElement",
        "div" => "HTMLDivElement",
        "embed" => "HTMLEmbedElement",
        "fieldset" => "HTMLFieldSetElement",
        "font" => "HTMLFontElement",
        "form" => "HTMLFormElement",
        "frame" => "HTMLFrameElement",
        "frameset" => "HTMLFrameSetElement",
        "hr" => "HTMLHRElement",
        "head" => "HTMLHeadElement",
        "h1" | "h2" | "h3" | "h4" | "h5" | "h6" => "HTMLHeadingElement",
        "html" => "HTMLHtmlElement",
        "iframe" => "HTMLIFrameElement",
        "img" => "HTMLImageElement",
        "input" => "HTMLInputElement",
        "keygen" => "HTMLKeygenElement",
        "li" => "HTMLLIElement",
        "label" => "HTMLLabelElement",
        "legend" => "HTMLLegendElement",
        "link" => "HTMLLinkElement",
        "map" => "HTMLMapElement",
        "marquee" => "HTMLMarqueeElement",
        "menu" => "HTMLMenuElement",
        "meta" => "HTMLMetaElement",
        "meter" => "HTMLMeterElement",
        "del" | "ins" => "HTMLModElement",
        "ol" => "HTMLOListElement",
        "object" => "HTMLObjectElement",
        "optgroup" => "HTMLOptGroupElement",
        "option" => "HTMLOptionElement",
        "output" => "HTMLOutputElement",
        "p" => "HTMLParagraphElement",
        "param" => "HTMLParamElement",
        "pre" => "HTMLPreElement",
        "progress" => "HTMLProgressElement",
        "blockquote" | "q" => "HTMLQuoteElement",
        "script" => "HTMLScriptElement",
        "select" => "HTMLSelectElement",
        "source" => "HTMLSourceElement",
        "span" => "HTMLSpanElement",
        "style" => "HTMLStyleElement",
        "caption" => "HTMLTableCaptionElement",
        "td" | "th" => "HTMLTableCellElement",
        "col" | "colgroup" => "HTMLTableColElement",
        "table" => "HTMLTableElement",
        "tr" => "HTMLTableRowElement",
        "tbody" | "tfoot" | "thead" => "HTMLTableSectionElement",
        "textarea" => "HTMLTextAreaElement",
        "title" => "HTMLTitleElement",
        "ul" => "HTMLUListElement",
        "video" => "HTMLVideoElement",
        "abbr" | "address" | "article" | "aside" | "b" | "bdi" | "bdo" | "cite" | "code"
        | "dd" | "dfn" | "dt" | "em" | "figcaption" | "figure" | "footer" | "header" | "i"
        | "kbd" | "main" | "mark" | "nav" | "noscript" | "s" | "samp" | "section" | "small"
        | "strong" | "sub" | "summary" | "sup" | "u" | "var" | "wbr" => "HTMLElement",
        _ => "HTMLUnknownElement",
    }
}

/// Builds an element node.
#[derive(Debug, Clone)]
pub struct ElementBuilder {
    tag: String,
    class: Option<String>,
    attributes: Vec<(String, String)>,
    inner_html: String,
}

impl ElementBuilder {
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            class: None,
            attributes: Vec::new(),
            inner_html: String::new(),
        }
    }

    /// Force the interface class instead of deriving it from the tag, e.g.
    /// `XMLElement` for nodes of a non-HTML document.
    pub fn class(mut self, class: impl Into<String>) -> Self {
        self.class = Some(class.into());
        self
    }

    pub fn attribute(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.push((name.into(), value.into()));
        self
    }

    pub fn inner_html(mut self, html: impl Into<String>) -> Self {
        self.inner_html = html.into();
        self
    }

    pub fn build(self) -> Value {
        let class = self
            .class
            .unwrap_or_else(|| element_class(&self.tag).to_string());
        let attributes = Value::named_node_map(
            self.attributes
                .iter()
                .map(|(name, value)| Value::attr(name, value))
                .collect(),
        );
        Object::new(class.clone())
            .with_constructor(class.clone())
            .with_ancestry([class.as_str(), "HTMLElement", "Element", "Node", "Object"])
            .with_methods(NODE_METHODS.iter().copied())
            .with_methods(["getAttribute", "setAttribute"])
            .with_hidden("nodeType", ELEMENT_NODE)
            .with_hidden("tagName", self.tag.to_ascii_uppercase())
            .with_hidden("innerHTML", self.inner_html)
            .with_hidden("attributes", attributes)
            .into_value()
    }
}

/// Builds a document node.
#[derive(Debug, Clone)]
pub struct DocumentBuilder {
    url: String,
    html: bool,
    document_element: Option<Value>,
}

impl DocumentBuilder {
    /// An HTML document (`HTMLDocument`).
    pub fn html(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            html: true,
            document_element: None,
        }
    }

    /// A generic (e.g. XML) document (`Document`).
    pub fn generic(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            html: false,
            document_element: None,
        }
    }

    pub fn document_element(mut self, root: Value) -> Self {
        self.document_element = Some(root);
        self
    }

    pub fn build(self) -> Value {
        let class = if self.html { "HTMLDocument" } else { "Document" };
        let mut object = Object::new(class)
            .with_constructor(class)
            .with_ancestry([class, "Document", "Node", "Object"])
            .with_methods(NODE_METHODS.iter().copied())
            .with_methods(["createElement", "getElementById"])
            .with_hidden("nodeType", DOCUMENT_NODE)
            .with_hidden("URL", self.url);
        if let Some(root) = self.document_element {
            object = object.with_hidden("documentElement", root);
        }
        object.into_value()
    }
}

impl Value {
    /// Any host object identified only by its class, e.g. `BarProp`.
    pub fn host(class: impl Into<String>) -> Self {
        Object::of_class(class).into_value()
    }

    pub fn attr(name: impl Into<String>, value: impl Into<String>) -> Self {
        let name: String = name.into();
        let value: String = value.into();
        Object::of_class("Attr")
            .with_property("name", name.clone())
            .with_property("value", value.clone())
            .with_hidden("nodeType", ATTRIBUTE_NODE)
            .with_hidden("nodeName", name)
            .with_hidden("nodeValue", value)
            .into_value()
    }

    /// An element's attribute map: indexed in document order and keyed by
    /// attribute name.
    pub fn named_node_map(attrs: Vec<Value>) -> Self {
        let mut object = Object::of_class("NamedNodeMap").with_methods(["getNamedItem", "item"]);
        for attr in &attrs {
            if let Some(name) = attr.get("nodeName").and_then(Value::as_str) {
                object.insert(name.to_string(), attr.clone());
            }
        }
        object.with_elements(attrs).into_value()
    }

    /// A live element collection such as `document.forms`.
    pub fn html_collection(elements: Vec<Value>) -> Self {
        Object::of_class("HTMLCollection")
            .with_methods(["item", "namedItem"])
            .with_elements(elements)
            .into_value()
    }

    /// The global object of a page at `href`.
    pub fn window(href: impl Into<String>) -> Self {
        let location = Object::of_class("Location")
            .with_hidden("href", Into::<String>::into(href))
            .into_value();
        Object::of_class("Window")
            .with_methods(["alert", "setTimeout"])
            .with_hidden("location", location)
            .with_slot(Slot::Singleton(Singleton::Global))
            .into_value()
    }

    /// A legacy `Image` object.
    pub fn image(src: impl Into<String>) -> Self {
        Object::of_class("Image")
            .with_hidden("src", Into::<String>::into(src))
            .into_value()
    }

    pub fn storage<K, V, I>(entries: I) -> Self
    where
        K: Into<String>,
        V: Into<String>,
        I: IntoIterator<Item = (K, V)>,
    {
        let mut object = Object::of_class("Storage").with_methods(["getItem", "setItem"]);
        for (key, value) in entries {
            object.insert(key, Into::<String>::into(value));
        }
        object.into_value()
    }

    pub fn dom_exception(name: impl Into<String>, message: impl Into<String>, code: u32) -> Self {
        Object::of_class("DOMException")
            .with_hidden("code", code)
            .with_hidden("message", Into::<String>::into(message))
            .with_hidden("name", Into::<String>::into(name))
            .into_value()
    }

    /// An XHR in `ready_state` (0–4). Status fields are only meaningful from
    /// `HEADERS_RECEIVED` on.
    pub fn xml_http_request(ready_state: u32, status: u32, status_text: impl Into<String>) -> Self {
        Object::of_class("XMLHttpRequest")
            .with_methods(["abort", "open", "send", "setRequestHeader"])
            .with_hidden("readyState", ready_state)
            .with_hidden("status", status)
            .with_hidden("statusText", Into::<String>::into(status_text))
            .into_value()
    }

    pub fn xml_http_request_exception(code: u32) -> Self {
        Object::of_class("XMLHttpRequestException")
            .with_hidden("code", code)
            .into_value()
    }
}
