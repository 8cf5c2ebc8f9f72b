use color_eyre::eyre::Result;
use ratatui::layout::Rect;

use crate::{
    core::{
        cmd::{Cmd, TuiCommand},
        raw_msg::RawMsg,
        state::AppState,
    },
    infrastructure::tui::{Event, Frame, TuiLike},
    integration::runtime::Runtime,
    presentation::components::Components,
};

/// Drives the runtime from terminal events and renders it
pub struct AppRunner<T: TuiLike> {
    runtime: Runtime,
    tui: T,
    components: Components,
    /// Set by `Cmd::RequestRender`, cleared by the next draw
    needs_render: bool,
}

impl<T: TuiLike> AppRunner<T> {
    /// Fails when the catalog breaks one of its invariants
    pub fn new(initial_state: AppState, tui: T) -> Result<Self> {
        initial_state.catalog.verify()?;
        Ok(Self {
            runtime: Runtime::new(initial_state),
            tui,
            components: Components::new(),
            needs_render: false,
        })
    }

    pub fn runtime(&self) -> &Runtime {
        &self.runtime
    }

    pub fn state(&self) -> &AppState {
        self.runtime.state()
    }

    pub fn tui(&self) -> &T {
        &self.tui
    }

    /// Run until quit is requested or the terminal stops producing events
    pub async fn run(&mut self) -> Result<()> {
        self.tui.enter()?;
        let area = self.tui.size()?;
        self.runtime
            .send_raw_msg(RawMsg::Resize(area.width, area.height));
        self.cycle()?;
        self.render()?;

        while let Some(event) = self.tui.next().await {
            self.handle_event(event)?;
            self.cycle()?;

            if self.state().system.should_suspend {
                log::info!("suspending");
                self.tui.suspend()?;
                self.tui.resume()?;
                self.runtime.send_raw_msg(RawMsg::Resume);
                self.cycle()?;
            }

            if self.state().system.should_quit {
                break;
            }
        }

        log::info!("shutting down");
        self.tui.exit()?;
        Ok(())
    }

    fn handle_event(&mut self, event: Event) -> Result<()> {
        let raw = match event {
            Event::Quit | Event::Closed => RawMsg::Quit,
            Event::Tick => RawMsg::Tick,
            Event::Resize(width, height) => RawMsg::Resize(width, height),
            Event::Key(key) => RawMsg::Key(key),
            Event::Mouse(mouse) => RawMsg::Mouse(mouse),
            Event::Error(error) => {
                log::error!("terminal error: {error}");
                RawMsg::Error(error)
            }
            Event::Render => {
                return self.render();
            }
            Event::Init | Event::FocusGained | Event::FocusLost | Event::Paste(_) => {
                return Ok(());
            }
        };
        self.runtime.send_raw_msg(raw);
        Ok(())
    }

    /// Run one update cycle and execute the resulting commands
    fn cycle(&mut self) -> Result<()> {
        for cmd in self.runtime.run_update_cycle() {
            self.execute(cmd)?;
        }
        if self.needs_render {
            self.render()?;
        }
        Ok(())
    }

    fn execute(&mut self, cmd: Cmd) -> Result<()> {
        match cmd {
            Cmd::Tui(TuiCommand::Resize { width, height }) => {
                self.tui.resize(Rect::new(0, 0, width, height))?;
                self.needs_render = true;
            }
            Cmd::RequestRender => self.needs_render = true,
            Cmd::Batch(cmds) => {
                for cmd in cmds {
                    self.execute(cmd)?;
                }
            }
            Cmd::None => {}
        }
        Ok(())
    }

    fn render(&mut self) -> Result<()> {
        let state = self.runtime.state();
        let components = &self.components;
        self.tui
            .draw(&mut |frame: &mut Frame<'_>| components.render(frame, state))?;
        self.needs_render = false;
        Ok(())
    }
}
