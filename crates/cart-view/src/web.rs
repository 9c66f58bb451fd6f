//! Browser binding: web-sys DOM targets and `#[wasm_bindgen]` entry points.
//!
//! Every entry point resolves the page's elements afresh and reads the cart
//! from `localStorage`, so nothing survives between callbacks except what was
//! persisted. The only long-lived closures are the two listeners `start`
//! attaches: form submit and one delegated click handler on the cart table
//! body, which outlives every re-render of its rows.

use std::cell::RefCell;

use cart_core::{CartStore, LineId, Money};
use cart_kv::LocalStorage;
use tracing::{warn, Level};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, HtmlElement, HtmlInputElement, HtmlSelectElement, HtmlTableSectionElement};

use crate::config::StorefrontConfig;
use crate::dom::{
    Attributes, CartRow, CartTargets, Element, FormTargets, Input, TableBody, ATTR_LINE_ID,
    REMOVE_BUTTON_CLASS,
};
use crate::logging;
use crate::notify::Notifier;
use crate::view::CartView;

thread_local! {
    static CONFIG: RefCell<StorefrontConfig> = RefCell::new(StorefrontConfig::default());
}

/// Element shown with a fixed CSS `display` value.
struct WebElement {
    element: HtmlElement,
    shown_display: &'static str,
}

impl Element for WebElement {
    fn set_text(&self, text: &str) {
        self.element.set_text_content(Some(text));
    }

    fn set_visible(&self, visible: bool) {
        let display = if visible { self.shown_display } else { "none" };
        if let Err(e) = self.element.style().set_property("display", display) {
            warn!(error = ?e, "could not change element visibility");
        }
    }
}

struct WebTableBody {
    body: HtmlTableSectionElement,
    document: Document,
}

impl TableBody for WebTableBody {
    fn clear_rows(&self) {
        self.body.set_inner_html("");
    }

    fn append_row(&self, row: &CartRow) {
        if let Err(e) = self.try_append_row(row) {
            warn!(line = %row.line_id, error = ?e, "could not append cart row");
        }
    }
}

impl WebTableBody {
    fn try_append_row(&self, row: &CartRow) -> Result<(), JsValue> {
        let tr = self.body.insert_row()?.dyn_into::<web_sys::HtmlTableRowElement>()?;
        for text in [
            &row.name,
            &row.size,
            &row.quantity,
            &row.unit_price,
            &row.line_total,
        ] {
            tr.insert_cell()?.set_text_content(Some(text.as_str()));
        }

        let button = self
            .document
            .create_element("button")?
            .dyn_into::<HtmlElement>()?;
        button.set_class_name(REMOVE_BUTTON_CLASS);
        button.set_attribute(ATTR_LINE_ID, row.line_id.as_str())?;
        button.set_text_content(Some("X"));

        tr.insert_cell()?.append_child(&button)?;
        Ok(())
    }
}

/// Value-bearing form control: `<input>` or `<select>`.
enum WebInput {
    Text(HtmlInputElement),
    Select(HtmlSelectElement),
}

impl Input for WebInput {
    fn value(&self) -> String {
        match self {
            WebInput::Text(el) => el.value(),
            WebInput::Select(el) => el.value(),
        }
    }

    fn set_value(&self, value: &str) {
        match self {
            WebInput::Text(el) => el.set_value(value),
            WebInput::Select(el) => el.set_value(value),
        }
    }
}

struct WebAttributes(web_sys::Element);

impl Attributes for WebAttributes {
    fn attribute(&self, name: &str) -> Option<String> {
        self.0.get_attribute(name)
    }
}

/// Notifier backed by `window.alert`.
struct AlertNotifier;

impl Notifier for AlertNotifier {
    fn notify(&self, message: &str) {
        if let Some(window) = web_sys::window() {
            let _ = window.alert_with_message(message);
        }
    }
}

/// Every cart element the current document exposes.
struct WebPage {
    badge: Option<WebElement>,
    is_cart_page: bool,
    table: Option<WebElement>,
    table_body: Option<WebTableBody>,
    empty_message: Option<WebElement>,
    subtotal: Option<WebElement>,
    grand_total: Option<WebElement>,
    product: Option<WebAttributes>,
    quantity: Option<WebInput>,
    size: Option<WebInput>,
}

impl WebPage {
    fn resolve(config: &StorefrontConfig) -> Option<Self> {
        let document = web_sys::window()?.document()?;
        let ids = &config.dom;

        let html = |id: &str, shown_display: &'static str| {
            document
                .get_element_by_id(id)
                .and_then(|el| el.dyn_into::<HtmlElement>().ok())
                .map(|element| WebElement {
                    element,
                    shown_display,
                })
        };
        let input = |id: &str| {
            let el = document.get_element_by_id(id)?;
            match el.dyn_into::<HtmlInputElement>() {
                Ok(input) => Some(WebInput::Text(input)),
                Err(el) => el.dyn_into::<HtmlSelectElement>().ok().map(WebInput::Select),
            }
        };

        let table_body = document
            .get_element_by_id(&ids.table_body)
            .and_then(|el| el.dyn_into::<HtmlTableSectionElement>().ok());
        let table = table_body
            .as_ref()
            .and_then(|body| body.closest("table").ok().flatten())
            .and_then(|el| el.dyn_into::<HtmlElement>().ok())
            .map(|element| WebElement {
                element,
                shown_display: "table",
            });

        Some(Self {
            badge: html(ids.badge.as_str(), "inline"),
            is_cart_page: document
                .query_selector(&ids.cart_page_marker)
                .ok()
                .flatten()
                .is_some(),
            table,
            table_body: table_body.map(|body| WebTableBody {
                body,
                document: document.clone(),
            }),
            empty_message: html(ids.empty_message.as_str(), "block"),
            subtotal: html(ids.subtotal.as_str(), "inline"),
            grand_total: html(ids.grand_total.as_str(), "inline"),
            product: document.get_element_by_id(&ids.add_button).map(WebAttributes),
            quantity: input(ids.quantity.as_str()),
            size: input(ids.size.as_str()),
        })
    }

    fn cart_targets(&self) -> CartTargets<'_> {
        CartTargets {
            badge: self.badge.as_ref().map(|e| e as &dyn Element),
            is_cart_page: self.is_cart_page,
            table: self.table.as_ref().map(|e| e as &dyn Element),
            table_body: self.table_body.as_ref().map(|e| e as &dyn TableBody),
            empty_message: self.empty_message.as_ref().map(|e| e as &dyn Element),
            subtotal: self.subtotal.as_ref().map(|e| e as &dyn Element),
            grand_total: self.grand_total.as_ref().map(|e| e as &dyn Element),
        }
    }

    fn form_targets(&self) -> FormTargets<'_> {
        FormTargets {
            product: self.product.as_ref().map(|e| e as &dyn Attributes),
            quantity: self.quantity.as_ref().map(|e| e as &dyn Input),
            size: self.size.as_ref().map(|e| e as &dyn Input),
        }
    }
}

/// Resolve the page and storage, then run `f` against a view of them.
fn with_view<R>(f: impl FnOnce(&CartView<'_, LocalStorage>, &WebPage) -> R) -> Option<R> {
    let config = CONFIG.with(|c| c.borrow().clone());
    let storage = match LocalStorage::open() {
        Ok(storage) => storage,
        Err(e) => {
            warn!(error = %e, "local storage unavailable");
            return None;
        }
    };
    let store = CartStore::with_config(storage, config.cart.clone());
    let page = WebPage::resolve(&config)?;
    let notifier = AlertNotifier;
    let view = CartView::new(&store, page.cart_targets(), &notifier);
    Some(f(&view, &page))
}

/// Replace the storefront configuration with a TOML document.
#[wasm_bindgen]
pub fn configure(toml: &str) -> Result<(), JsValue> {
    let config =
        StorefrontConfig::from_toml_str(toml).map_err(|e| JsValue::from_str(&e.to_string()))?;
    CONFIG.with(|c| *c.borrow_mut() = config);
    Ok(())
}

/// Page-load bootstrap: install logging, refresh the badge, render the cart
/// page, and attach the form and remove-button listeners.
#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    if tracing::subscriber::set_global_default(logging::subscriber(log_to_console, Level::INFO))
        .is_err()
    {
        warn!("tracing subscriber already installed");
    }

    with_view(|view, _| view.bootstrap());

    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        return;
    };
    let ids = CONFIG.with(|c| c.borrow().dom.clone());

    if let Some(form) = document.get_element_by_id(&ids.form) {
        let on_submit = Closure::<dyn FnMut(web_sys::Event)>::new(|event: web_sys::Event| {
            event.prevent_default();
            submit_add_to_cart();
        });
        listen(&form, "submit", on_submit);
    }

    if let Some(body) = document.get_element_by_id(&ids.table_body) {
        let on_click = Closure::<dyn FnMut(web_sys::Event)>::new(|event: web_sys::Event| {
            let selector = format!(".{REMOVE_BUTTON_CLASS}");
            let control = event
                .target()
                .and_then(|target| target.dyn_into::<web_sys::Element>().ok())
                .and_then(|el| el.closest(&selector).ok().flatten());
            let Some(control) = control else {
                return;
            };
            with_view(|view, _| {
                if let Err(e) = view.remove_clicked(&WebAttributes(control)) {
                    warn!(error = %e, "remove from cart failed");
                }
            });
        });
        listen(&body, "click", on_click);
    }
}

/// Attach a page-lifetime listener.
fn listen(target: &web_sys::Element, event: &str, handler: Closure<dyn FnMut(web_sys::Event)>) {
    if let Err(e) = target.add_event_listener_with_callback(event, handler.as_ref().unchecked_ref()) {
        warn!(event, error = ?e, "could not attach listener");
        return;
    }
    // Called once per page load; the element keeps the handler until unload.
    handler.forget();
}

fn log_to_console(level: Level, line: &str) {
    let line = JsValue::from_str(line);
    if level == Level::ERROR {
        web_sys::console::error_1(&line);
    } else if level == Level::WARN {
        web_sys::console::warn_1(&line);
    } else {
        web_sys::console::log_1(&line);
    }
}

/// Quick-add from a product listing.
#[wasm_bindgen(js_name = addToCartQuick)]
pub fn add_to_cart_quick(product_id: String, product_name: String, price: f64) {
    let Some(price) = Money::try_from_decimal(price) else {
        warn!(product = %product_id, price, "quick-add with invalid price ignored");
        return;
    };
    with_view(|view, _| {
        let _ = view.quick_add(product_id, product_name, price);
    });
}

/// Quantity stepper on the product form.
#[wasm_bindgen(js_name = changeQuantity)]
pub fn change_quantity(delta: i32) {
    with_view(|view, page| view.step_quantity(&page.form_targets(), i64::from(delta)));
}

/// Product form submit.
#[wasm_bindgen(js_name = submitAddToCart)]
pub fn submit_add_to_cart() {
    with_view(|view, page| {
        let _ = view.form_add(&page.form_targets());
    });
}

/// Remove control on a cart table row.
#[wasm_bindgen(js_name = removeFromCart)]
pub fn remove_from_cart(line_id: String) {
    with_view(|view, _| {
        if let Err(e) = view.remove_and_rerender(&LineId::new(line_id)) {
            warn!(error = %e, "remove from cart failed");
        }
    });
}

/// "Empty cart" button.
#[wasm_bindgen(js_name = clearCart)]
pub fn clear_cart() {
    with_view(|view, _| {
        let _ = view.clear_cart();
    });
}
