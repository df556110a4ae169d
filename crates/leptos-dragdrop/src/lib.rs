//! Leptos DragDrop Utilities
//!
//! Native HTML5 drag-and-drop for Leptos.
//! A dragged record travels on the `DataTransfer` under several formats
//! (structured JSON, plain identifier, HTML label) so each drop target can
//! read back the representation it needs.

use std::cell::RefCell;
use std::collections::HashMap;

use leptos::prelude::*;
use serde::Serialize;

/// Structured payload format
pub const MIME_JSON: &str = "application/json";
/// Plain identifier format
pub const MIME_TEXT: &str = "text/plain";
/// Human readable label format
pub const MIME_HTML: &str = "text/html";

/// `effectAllowed` set on drag start
pub const EFFECT_COPY_MOVE: &str = "copyMove";

/// Errors raised while writing or reading drag payloads
#[derive(Debug, thiserror::Error)]
pub enum PayloadError {
    #[error("data transfer rejected payload: {0}")]
    Transfer(String),
    #[error("drag payload has no `{0}` entry")]
    Missing(&'static str),
    #[error("drag payload is not valid JSON: {0}")]
    Malformed(#[from] serde_json::Error),
}

/// A record that can be dragged
pub trait Draggable: Serialize {
    /// Identifier written under `text/plain`
    fn drag_id(&self) -> String;

    /// Optional label written under `text/html`
    fn drag_label_html(&self) -> Option<String> {
        None
    }
}

/// Anything that holds drag data keyed by format.
///
/// Implemented for `web_sys::DataTransfer` and for [`MemoryCarrier`].
pub trait DataCarrier {
    fn write_format(&self, format: &str, data: &str) -> Result<(), PayloadError>;

    /// Returns `None` for absent or empty entries
    fn read_format(&self, format: &str) -> Option<String>;
}

impl DataCarrier for web_sys::DataTransfer {
    fn write_format(&self, format: &str, data: &str) -> Result<(), PayloadError> {
        self.set_data(format, data)
            .map_err(|e| PayloadError::Transfer(format!("{:?}", e)))
    }

    fn read_format(&self, format: &str) -> Option<String> {
        self.get_data(format).ok().filter(|data| !data.is_empty())
    }
}

/// In-memory carrier, useful off-browser
#[derive(Debug, Default)]
pub struct MemoryCarrier {
    formats: RefCell<HashMap<String, String>>,
}

impl MemoryCarrier {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert of a raw entry
    pub fn with(self, format: &str, data: &str) -> Self {
        self.formats.borrow_mut().insert(format.to_string(), data.to_string());
        self
    }
}

impl DataCarrier for MemoryCarrier {
    fn write_format(&self, format: &str, data: &str) -> Result<(), PayloadError> {
        self.formats.borrow_mut().insert(format.to_string(), data.to_string());
        Ok(())
    }

    fn read_format(&self, format: &str) -> Option<String> {
        self.formats.borrow().get(format).filter(|data| !data.is_empty()).cloned()
    }
}

/// Write every representation of `item` onto the carrier
pub fn write_payload<C, T>(carrier: &C, item: &T) -> Result<(), PayloadError>
where
    C: DataCarrier + ?Sized,
    T: Draggable + ?Sized,
{
    let json = serde_json::to_string(item)?;
    carrier.write_format(MIME_JSON, &json)?;
    carrier.write_format(MIME_TEXT, &item.drag_id())?;
    if let Some(label) = item.drag_label_html() {
        carrier.write_format(MIME_HTML, &label)?;
    }
    Ok(())
}

/// Read back the plain identifier
pub fn read_id<C: DataCarrier + ?Sized>(carrier: &C) -> Result<String, PayloadError> {
    carrier
        .read_format(MIME_TEXT)
        .map(|id| id.trim().to_string())
        .filter(|id| !id.is_empty())
        .ok_or(PayloadError::Missing(MIME_TEXT))
}

/// Read back the structured payload without committing to a type
pub fn read_record<C: DataCarrier + ?Sized>(carrier: &C) -> Result<serde_json::Value, PayloadError> {
    let raw = carrier.read_format(MIME_JSON).ok_or(PayloadError::Missing(MIME_JSON))?;
    Ok(serde_json::from_str(&raw)?)
}

/// DnD state signals
#[derive(Clone, Copy)]
pub struct DndSignals {
    /// Identifier of the record being dragged
    pub dragging_id_read: ReadSignal<Option<String>>,
    pub dragging_id_write: WriteSignal<Option<String>>,
}

pub fn create_dnd_signals() -> DndSignals {
    let (dragging_id_read, dragging_id_write) = signal(None::<String>);
    DndSignals {
        dragging_id_read,
        dragging_id_write,
    }
}

/// End drag operation
pub fn end_drag(dnd: &DndSignals) {
    dnd.dragging_id_write.set(None);
}

/// Create dragstart handler for a draggable record
pub fn make_on_dragstart<T>(dnd: DndSignals, item: T) -> impl Fn(web_sys::DragEvent) + Clone + 'static
where
    T: Draggable + Clone + 'static,
{
    move |ev: web_sys::DragEvent| {
        let Some(transfer) = ev.data_transfer() else {
            log::warn!("[DND] dragstart without data transfer");
            return;
        };
        match write_payload(&transfer, &item) {
            Ok(()) => {
                transfer.set_effect_allowed(EFFECT_COPY_MOVE);
                dnd.dragging_id_write.set(Some(item.drag_id()));
            }
            Err(e) => log::error!("[DND] Failed to attach drag payload: {}", e),
        }
    }
}

/// Create dragend handler
pub fn make_on_dragend(dnd: DndSignals) -> impl Fn(web_sys::DragEvent) + Copy + 'static {
    move |_ev: web_sys::DragEvent| end_drag(&dnd)
}

/// Create dragover handler for a drop target.
/// Calling `prevent_default` is what marks the element as droppable.
pub fn make_on_dragover(
    set_over: WriteSignal<bool>,
    drop_effect: &'static str,
) -> impl Fn(web_sys::DragEvent) + Copy + 'static {
    move |ev: web_sys::DragEvent| {
        ev.prevent_default();
        if let Some(transfer) = ev.data_transfer() {
            transfer.set_drop_effect(drop_effect);
        }
        set_over.set(true);
    }
}

/// Create dragleave handler
pub fn make_on_dragleave(set_over: WriteSignal<bool>) -> impl Fn(web_sys::DragEvent) + Copy + 'static {
    move |_ev: web_sys::DragEvent| set_over.set(false)
}

/// Create drop handler; `on_drop` receives the event's data transfer
pub fn make_on_drop<F>(
    dnd: DndSignals,
    set_over: WriteSignal<bool>,
    on_drop: F,
) -> impl Fn(web_sys::DragEvent) + 'static
where
    F: Fn(&web_sys::DataTransfer) + 'static,
{
    move |ev: web_sys::DragEvent| {
        ev.prevent_default();
        set_over.set(false);
        match ev.data_transfer() {
            Some(transfer) => on_drop(&transfer),
            None => log::warn!("[DND] drop without data transfer"),
        }
        end_drag(&dnd);
    }
}
