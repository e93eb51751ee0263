//! Dispatch façade, §4.H: two tag-driven tables replacing switch
//! scaffolding with per-id callback routing. Both tables are pure routing —
//! they own no wire state.

use std::collections::HashMap;

use ptpmgmt_types::{ManagementId, TlvPayload};

use crate::envelope::Message;

type ParseHandler = Box<dyn Fn(&mut Message, &TlvPayload, &str) + Send + Sync>;
type BuildHandler = Box<dyn Fn(&mut Message, &TlvPayload) -> bool + Send + Sync>;

/// `id -> handler(msg, decoded_tlv, name)`; ids without a registered
/// handler fall through to `no_tlv_callback`.
#[derive(Default)]
pub struct ParseDispatcher {
    handlers: HashMap<ManagementId, ParseHandler>,
    no_tlv_callback: Option<Box<dyn Fn(&mut Message, &str) + Send + Sync>>,
    no_tlv: Option<Box<dyn Fn(&mut Message) + Send + Sync>>,
}

impl ParseDispatcher {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn on(&mut self, id: ManagementId, handler: impl Fn(&mut Message, &TlvPayload, &str) + Send + Sync + 'static) {
        self.handlers.insert(id, Box::new(handler));
    }

    pub fn on_missing_handler(&mut self, handler: impl Fn(&mut Message, &str) + Send + Sync + 'static) {
        self.no_tlv_callback = Some(Box::new(handler));
    }

    pub fn on_no_tlv(&mut self, handler: impl Fn(&mut Message) + Send + Sync + 'static) {
        self.no_tlv = Some(Box::new(handler));
    }

    /// Routes a decoded TLV (or the absence of one) to the registered
    /// handler.
    pub fn dispatch(&self, msg: &mut Message, id: ManagementId, name: &str, payload: Option<&TlvPayload>) {
        match payload {
            Some(p) => {
                if let Some(h) = self.handlers.get(&id) {
                    h(msg, p, name);
                } else if let Some(cb) = &self.no_tlv_callback {
                    cb(msg, name);
                }
            }
            None => {
                if let Some(cb) = &self.no_tlv {
                    cb(msg);
                }
            }
        }
    }
}

/// `id -> builder(msg, blank_payload) -> bool`; returning `true` causes the
/// caller to call `set_action(SET|COMMAND, id, payload)`, `false` discards
/// the payload.
#[derive(Default)]
pub struct BuildDispatcher {
    handlers: HashMap<ManagementId, BuildHandler>,
}

impl BuildDispatcher {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn on(&mut self, id: ManagementId, handler: impl Fn(&mut Message, &TlvPayload) -> bool + Send + Sync + 'static) {
        self.handlers.insert(id, Box::new(handler));
    }

    pub fn dispatch(&self, msg: &mut Message, id: ManagementId, blank_payload: &TlvPayload) -> bool {
        self.handlers
            .get(&id)
            .map(|h| h(msg, blank_payload))
            .unwrap_or(false)
    }
}
