use std::rc::Rc;

use gloo::timers::callback::Timeout;
use goban_core::{click_action, draw_board, open_action, BoardGeometry, GameStore, SidebarView};
use goban_protocol::{ClientMsg, DEFAULT_BOARD_SIZE};
use web_sys::{HtmlCanvasElement, MouseEvent};
use yew::prelude::*;

use crate::socket::GameSocket;
use crate::surface::CanvasSurface;
use crate::urls;

const CANVAS_SIDE: f64 = 800.0;
const BOARD_MARGIN: f64 = 20.0;
const RETRY_DELAY_MS: u32 = 1_000;

#[derive(Debug)]
pub(crate) enum Msg {
    Opened,
    Inbound(String),
    Closed,
    Retry,
    Hover(f64, f64),
    Leave,
    Click(f64, f64),
    Send(ClientMsg),
}

pub(crate) struct App {
    store: GameStore,
    socket: GameSocket,
    canvas: NodeRef,
    room_id: String,
    ws_url: String,
    share_url: String,
    _retry: Option<Timeout>,
}

impl App {
    /// Geometry follows the size of the last snapshot; the pre-sync grid
    /// shows the standard board.
    fn geometry(&self) -> BoardGeometry {
        let lines = self
            .store
            .snapshot()
            .map_or(DEFAULT_BOARD_SIZE, |snapshot| snapshot.size);
        BoardGeometry::new(CANVAS_SIDE, BOARD_MARGIN, lines)
    }

    fn connect(&mut self, ctx: &Context<Self>) {
        let on_open: Rc<dyn Fn()> = {
            let link = ctx.link().clone();
            Rc::new(move || link.send_message(Msg::Opened))
        };
        let on_text: Rc<dyn Fn(String)> = {
            let link = ctx.link().clone();
            Rc::new(move |text| link.send_message(Msg::Inbound(text)))
        };
        let on_close: Rc<dyn Fn()> = {
            let link = ctx.link().clone();
            Rc::new(move || link.send_message(Msg::Closed))
        };
        self.socket.connect(&self.ws_url, on_open, on_text, on_close);
    }

    fn redraw(&self) {
        let Some(canvas) = self.canvas.cast::<HtmlCanvasElement>() else {
            return;
        };
        match CanvasSurface::new(&canvas) {
            Ok(mut surface) => draw_board(
                &mut surface,
                &self.geometry(),
                self.store.snapshot(),
                self.store.hover(),
            ),
            Err(err) => log::warn!("canvas unavailable: {err:?}"),
        }
    }
}

impl Component for App {
    type Message = Msg;
    type Properties = ();

    fn create(ctx: &Context<Self>) -> Self {
        let location = gloo::utils::window().location();
        let path = location.pathname().unwrap_or_default();
        let protocol = location.protocol().unwrap_or_else(|_| "http:".to_string());
        let host = location.host().unwrap_or_default();
        let origin = location.origin().unwrap_or_default();
        let room_id = urls::room_id_from_path(&path);

        let mut app = Self {
            store: GameStore::new(),
            socket: GameSocket::new(),
            canvas: NodeRef::default(),
            ws_url: urls::ws_url(&protocol, &host, &room_id),
            share_url: urls::share_url(&origin, &path),
            room_id,
            _retry: None,
        };
        app.connect(ctx);
        app
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::Opened => {
                self.socket.send(&open_action());
                false
            }
            Msg::Inbound(text) => self.store.apply_text(&text).has_update(),
            Msg::Closed => {
                let link = ctx.link().clone();
                self._retry = Some(Timeout::new(RETRY_DELAY_MS, move || {
                    link.send_message(Msg::Retry)
                }));
                self.store.connection_lost()
            }
            Msg::Retry => {
                self.connect(ctx);
                false
            }
            Msg::Hover(px, py) => {
                let cell = self.geometry().to_cell(px, py);
                self.store.set_hover(Some(cell))
            }
            Msg::Leave => self.store.set_hover(None),
            Msg::Click(px, py) => {
                if let Some(action) = click_action(self.store.snapshot(), &self.geometry(), px, py)
                {
                    log::debug!("sending {action:?}");
                    self.socket.send(&action);
                }
                false
            }
            Msg::Send(action) => {
                log::debug!("sending {action:?}");
                self.socket.send(&action);
                false
            }
        }
    }

    fn rendered(&mut self, _ctx: &Context<Self>, _first_render: bool) {
        self.redraw();
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let sidebar = SidebarView::project(self.store.snapshot());

        let onmousemove = ctx
            .link()
            .callback(|e: MouseEvent| Msg::Hover(e.offset_x() as f64, e.offset_y() as f64));
        let onmouseleave = ctx.link().callback(|_: MouseEvent| Msg::Leave);
        let onclick = ctx
            .link()
            .callback(|e: MouseEvent| Msg::Click(e.offset_x() as f64, e.offset_y() as f64));
        let send = |action: ClientMsg| {
            ctx.link()
                .callback(move |_: MouseEvent| Msg::Send(action.clone()))
        };

        html! {
            <div class="goban">
                <canvas
                    ref={self.canvas.clone()}
                    width="800"
                    height="800"
                    {onmousemove}
                    {onmouseleave}
                    {onclick}
                />
                <aside>
                    <div id="roomId">{format!("Room: {}", self.room_id)}</div>
                    <input id="shareUrl" readonly={true} value={self.share_url.clone()}/>
                    <div id="status">{self.store.connection().to_string()}</div>
                    <div>{"Turn: "}<span id="turn">{sidebar.turn}</span></div>
                    <div>{"Captured by B: "}<span id="capB">{sidebar.captured_black}</span></div>
                    <div>{"Captured by W: "}<span id="capW">{sidebar.captured_white}</span></div>
                    <div>{"Players: "}<span id="players">{sidebar.players}</span></div>
                    <div id="result">{sidebar.result}</div>
                    <nav>
                        <button onclick={send(ClientMsg::Pass)}>{"Pass"}</button>
                        <button onclick={send(ClientMsg::Resign)}>{"Resign"}</button>
                        <button onclick={send(ClientMsg::RequestScore)}>{"Request Score"}</button>
                        <button onclick={send(ClientMsg::FinalizeScore)}>{"Finalize Score"}</button>
                    </nav>
                </aside>
            </div>
        }
    }
}
