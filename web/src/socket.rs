use std::cell::{Cell, RefCell};
use std::rc::Rc;

use goban_protocol::{encode_client, ClientMsg};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{CloseEvent, ErrorEvent, Event, MessageEvent, WebSocket};

#[allow(dead_code)]
struct WsHandlers {
    onopen: Closure<dyn FnMut(Event)>,
    onmessage: Closure<dyn FnMut(MessageEvent)>,
    onerror: Closure<dyn FnMut(ErrorEvent)>,
    onclose: Closure<dyn FnMut(Event)>,
}

/// Thin wrapper around the browser WebSocket: text frames in and out,
/// callbacks for open/message/close, nothing else. Decoding and retry policy
/// live with the caller.
pub(crate) struct GameSocket {
    ws: Rc<RefCell<Option<WebSocket>>>,
    handlers: Rc<RefCell<Option<WsHandlers>>>,
    closing: Rc<Cell<bool>>,
}

impl GameSocket {
    pub(crate) fn new() -> Self {
        Self {
            ws: Rc::new(RefCell::new(None)),
            handlers: Rc::new(RefCell::new(None)),
            closing: Rc::new(Cell::new(false)),
        }
    }

    pub(crate) fn connect(
        &mut self,
        url: &str,
        on_open: Rc<dyn Fn()>,
        on_text: Rc<dyn Fn(String)>,
        on_close: Rc<dyn Fn()>,
    ) {
        self.disconnect();
        let closing = Rc::new(Cell::new(false));
        self.closing = closing.clone();

        let ws = match WebSocket::new(url) {
            Ok(ws) => ws,
            Err(_) => {
                log::warn!("failed to open websocket: {url}");
                on_close();
                return;
            }
        };
        *self.ws.borrow_mut() = Some(ws.clone());

        let onopen = {
            let url = url.to_string();
            Closure::wrap(Box::new(move |_event: Event| {
                log::debug!("websocket connected: {url}");
                on_open();
            }) as Box<dyn FnMut(Event)>)
        };
        let onmessage = {
            Closure::wrap(Box::new(move |event: MessageEvent| {
                if let Some(text) = event.data().as_string() {
                    on_text(text);
                }
            }) as Box<dyn FnMut(MessageEvent)>)
        };
        let onerror = {
            let url = url.to_string();
            Closure::wrap(Box::new(move |_event: ErrorEvent| {
                log::warn!("websocket error: {url}");
            }) as Box<dyn FnMut(ErrorEvent)>)
        };
        let onclose = {
            let ws_ref = self.ws.clone();
            let handlers_ref = self.handlers.clone();
            let url = url.to_string();
            Closure::wrap(Box::new(move |event: Event| {
                ws_ref.borrow_mut().take();
                handlers_ref.borrow_mut().take();
                if closing.get() {
                    return;
                }
                match event.dyn_ref::<CloseEvent>() {
                    Some(close) => {
                        log::debug!("websocket closed: {url} ({})", close.code());
                    }
                    None => log::debug!("websocket closed: {url}"),
                }
                on_close();
            }) as Box<dyn FnMut(Event)>)
        };

        ws.set_onopen(Some(onopen.as_ref().unchecked_ref()));
        ws.set_onmessage(Some(onmessage.as_ref().unchecked_ref()));
        ws.set_onerror(Some(onerror.as_ref().unchecked_ref()));
        ws.set_onclose(Some(onclose.as_ref().unchecked_ref()));

        *self.handlers.borrow_mut() = Some(WsHandlers {
            onopen,
            onmessage,
            onerror,
            onclose,
        });
    }

    pub(crate) fn send(&self, msg: &ClientMsg) {
        let ws = {
            let ws_guard = self.ws.borrow();
            let Some(ws) = ws_guard.as_ref() else {
                return;
            };
            ws.clone()
        };
        if ws.ready_state() != WebSocket::OPEN {
            return;
        }
        match encode_client(msg) {
            Ok(text) => {
                if ws.send_with_str(&text).is_err() {
                    log::warn!("failed to send {msg:?}");
                }
            }
            Err(err) => log::warn!("failed to encode {msg:?}: {err}"),
        }
    }

    pub(crate) fn disconnect(&mut self) {
        self.closing.set(true);
        self.handlers.borrow_mut().take();
        if let Some(ws) = self.ws.borrow_mut().take() {
            let _ = ws.close();
        }
    }
}

impl Drop for GameSocket {
    fn drop(&mut self) {
        self.disconnect();
    }
}
