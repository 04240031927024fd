use std::sync::Arc;

use color_eyre::eyre::Result;
use ratatui::prelude::Rect;
use tokio::sync::{mpsc, watch, Mutex};

use crate::{
    core::{
        cmd::Cmd,
        msg::Msg,
        raw_msg::RawMsg,
        state::AppState,
        store::UserStore,
        translator::translate_raw_to_domain,
        update::{init, update},
    },
    domain::User,
    infrastructure::tui::{event_source::EventSource, Event, Frame, TuiLike},
    integration::{cmd_executor::CmdExecutor, container::AppContainer},
    presentation::{
        components::{Components, ViewContext},
        config::KeyBindings,
    },
};

/// Drives the application: terminal events in, state updates, commands out, rendering.
pub struct AppRunner {
    keybindings: KeyBindings,
    state: AppState,
    initial_commands: Option<Vec<Cmd>>,
    components: Components,
    executor: CmdExecutor,
    users_rx: watch::Receiver<Vec<User>>,
    users_closed: bool,
    msg_rx: mpsc::UnboundedReceiver<Msg>,
    tui: Arc<Mutex<dyn TuiLike + Send>>,
    events: EventSource,
    events_closed: bool,
}

impl AppRunner {
    pub fn new(
        container: &AppContainer,
        tui: Arc<Mutex<dyn TuiLike + Send>>,
        events: EventSource,
    ) -> Self {
        let (msg_tx, msg_rx) = mpsc::unbounded_channel();
        let store = container.user_store();
        let users_rx = store.subscribe();
        let executor = CmdExecutor::new(store, container.repository(), msg_tx);
        let (state, initial_commands) = init();

        Self {
            keybindings: container.config().keybindings.clone(),
            state,
            initial_commands: Some(initial_commands),
            components: Components::new(),
            executor,
            users_rx,
            users_closed: false,
            msg_rx,
            tui,
            events,
            events_closed: false,
        }
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    pub fn store(&self) -> &UserStore {
        self.executor.store()
    }

    /// Execute the commands of the first home appearance. Later calls do nothing.
    pub fn start(&mut self) {
        if let Some(commands) = self.initial_commands.take() {
            self.executor.execute_all(commands);
        }
    }

    pub fn dispatch(&mut self, msg: Msg) {
        log::debug!("update: {msg:?}");
        let state = std::mem::take(&mut self.state);
        let (state, commands) = update(msg, state);
        self.state = state;
        self.executor.execute_all(commands);
    }

    pub fn send_raw_msg(&mut self, raw: RawMsg) {
        if !raw.is_frequent() {
            log::debug!("raw: {raw:?}");
        }
        for msg in translate_raw_to_domain(raw, &self.keybindings) {
            self.dispatch(msg);
        }
    }

    /// Run until quit, or until the event source closes and no background work is left.
    pub async fn run(&mut self) -> Result<()> {
        self.tui.lock().await.enter()?;
        self.start();

        let result = self.run_loop().await;
        if let Err(e) = &result {
            log::error!("runner error: {e}");
        }

        self.executor.shutdown();
        self.tui.lock().await.exit()?;
        result
    }

    async fn run_loop(&mut self) -> Result<()> {
        self.render().await?;
        while self.step().await? {}
        Ok(())
    }

    /// Wait for the next event, store publication or background result and handle it.
    ///
    /// Returns `false` once the loop should stop.
    pub async fn step(&mut self) -> Result<bool> {
        if self.state.system.should_quit {
            return Ok(false);
        }
        if self.events_closed && !self.has_pending_work() {
            return Ok(false);
        }

        tokio::select! {
            event = self.events.next(), if !self.events_closed => match event {
                Some(event) => self.handle_event(event).await?,
                None => {
                    log::debug!("event source closed");
                    self.events_closed = true;
                }
            },
            changed = self.users_rx.changed(), if !self.users_closed => {
                if changed.is_ok() {
                    let count = self.users_rx.borrow_and_update().len();
                    self.dispatch(Msg::UsersPublished { count });
                    self.render().await?;
                } else {
                    self.users_closed = true;
                }
            },
            Some(msg) = self.msg_rx.recv() => {
                self.dispatch(msg);
                self.render().await?;
            },
            else => return Ok(false),
        }

        Ok(!self.state.system.should_quit)
    }

    fn has_pending_work(&self) -> bool {
        self.executor.has_pending_work()
            || !self.msg_rx.is_empty()
            || self.users_rx.has_changed().unwrap_or(false)
    }

    async fn handle_event(&mut self, event: Event) -> Result<()> {
        match event {
            Event::Key(key) => {
                self.send_raw_msg(RawMsg::Key(key));
                self.render().await?;
            }
            Event::Resize(w, h) => {
                self.tui.lock().await.resize(Rect::new(0, 0, w, h))?;
                self.send_raw_msg(RawMsg::Resize(w, h));
                self.render().await?;
            }
            Event::Render => self.render().await?,
            Event::Tick => self.send_raw_msg(RawMsg::Tick),
            Event::Quit | Event::Closed => self.send_raw_msg(RawMsg::Quit),
            Event::Error => self.send_raw_msg(RawMsg::Error("terminal event error".into())),
            Event::Init | Event::FocusGained | Event::FocusLost | Event::Paste(_) | Event::Mouse(_) => {}
        }
        Ok(())
    }

    async fn render(&mut self) -> Result<()> {
        let users = self.executor.store().users();
        let ctx = ViewContext {
            users: &users,
            is_refreshing: self.executor.store().is_refreshing(),
        };
        let state = &self.state;
        let components = &self.components;
        let mut tui = self.tui.lock().await;
        tui.draw(&mut |frame: &mut Frame<'_>| {
            let area = frame.area();
            components.render(frame, area, state, ctx);
        })
    }
}
