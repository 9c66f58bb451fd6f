//! In-memory DOM targets for tests and headless hosts.

use std::cell::{Cell, RefCell};
use std::collections::HashMap;

use crate::dom::{Attributes, CartRow, Element, Input, TableBody};

/// Text element that records what was written to it.
#[derive(Debug)]
pub struct MemoryElement {
    text: RefCell<String>,
    visible: Cell<bool>,
}

impl Default for MemoryElement {
    fn default() -> Self {
        Self {
            text: RefCell::new(String::new()),
            visible: Cell::new(true),
        }
    }
}

impl MemoryElement {
    /// An empty, visible element.
    pub fn new() -> Self {
        Self::default()
    }

    /// Current text.
    pub fn text(&self) -> String {
        self.text.borrow().clone()
    }

    /// Current visibility.
    pub fn is_visible(&self) -> bool {
        self.visible.get()
    }
}

impl Element for MemoryElement {
    fn set_text(&self, text: &str) {
        *self.text.borrow_mut() = text.to_string();
    }

    fn set_visible(&self, visible: bool) {
        self.visible.set(visible);
    }
}

/// Table body that keeps its rows in a vector.
#[derive(Debug, Default)]
pub struct MemoryTableBody {
    rows: RefCell<Vec<CartRow>>,
}

impl MemoryTableBody {
    /// An empty table body.
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of the current rows.
    pub fn rows(&self) -> Vec<CartRow> {
        self.rows.borrow().clone()
    }
}

impl TableBody for MemoryTableBody {
    fn clear_rows(&self) {
        self.rows.borrow_mut().clear();
    }

    fn append_row(&self, row: &CartRow) {
        self.rows.borrow_mut().push(row.clone());
    }
}

/// Form control holding a string value.
#[derive(Debug, Default)]
pub struct MemoryInput {
    value: RefCell<String>,
}

impl MemoryInput {
    /// A control with an initial value.
    pub fn with_value(value: impl Into<String>) -> Self {
        Self {
            value: RefCell::new(value.into()),
        }
    }
}

impl Input for MemoryInput {
    fn value(&self) -> String {
        self.value.borrow().clone()
    }

    fn set_value(&self, value: &str) {
        *self.value.borrow_mut() = value.to_string();
    }
}

/// Element with a fixed attribute map.
#[derive(Debug, Default)]
pub struct MemoryAttributes {
    attributes: HashMap<String, String>,
}

impl MemoryAttributes {
    /// An element without attributes.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an attribute.
    pub fn with(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.insert(name.into(), value.into());
        self
    }
}

impl Attributes for MemoryAttributes {
    fn attribute(&self, name: &str) -> Option<String> {
        self.attributes.get(name).cloned()
    }
}
