use eframe::egui;

/// Calls made against the native window.
pub trait WindowHost {
    fn is_visible(&self) -> anyhow::Result<bool>;
    fn is_minimized(&self) -> anyhow::Result<bool>;
    fn show(&mut self) -> anyhow::Result<()>;
    fn hide(&mut self) -> anyhow::Result<()>;
    fn unminimize(&mut self) -> anyhow::Result<()>;
    fn focus(&mut self) -> anyhow::Result<()>;
}

/// Abstraction over an egui context so the window adapter can be driven by a
/// recording mock in tests.
pub trait ViewportCtx {
    fn send_viewport_cmd(&self, cmd: egui::ViewportCommand);
    fn request_repaint(&self);
    /// Minimized flag as last reported by the windowing backend.
    fn minimized(&self) -> Option<bool>;
    /// Top-left corner of the window frame in screen coordinates.
    fn outer_position(&self) -> Option<egui::Pos2>;
}

impl ViewportCtx for egui::Context {
    fn send_viewport_cmd(&self, cmd: egui::ViewportCommand) {
        egui::Context::send_viewport_cmd(self, cmd);
    }

    fn request_repaint(&self) {
        egui::Context::request_repaint(self);
    }

    fn minimized(&self) -> Option<bool> {
        self.input(|i| i.viewport().minimized)
    }

    fn outer_position(&self) -> Option<egui::Pos2> {
        self.input(|i| i.viewport().outer_rect.map(|r| r.min))
    }
}

/// Where a hidden window is parked.
pub const OFFSCREEN_POS: (f32, f32) = (-10_000.0, -10_000.0);

/// Used when showing a window whose on-screen position was never observed,
/// e.g. after starting hidden.
pub const DEFAULT_POS: (f32, f32) = (80.0, 80.0);

/// [`WindowHost`] backed by viewport commands.
///
/// Hiding parks the window at [`OFFSCREEN_POS`] instead of unmapping it. A
/// natively hidden window gets no redraws on some platforms, and the frame
/// loop is what drains hotkey and tray triggers. Showing moves it back to
/// where it was.
///
/// egui does not report whether the native window is shown, so visibility is
/// the state this adapter last commanded. Minimization is read from the
/// backend on every query since the OS can change it behind our back.
pub struct ViewportWindow<C: ViewportCtx> {
    ctx: C,
    visible: bool,
    restore_pos: Option<egui::Pos2>,
}

impl<C: ViewportCtx> ViewportWindow<C> {
    pub fn new(ctx: C, visible: bool) -> Self {
        Self {
            ctx,
            visible,
            restore_pos: None,
        }
    }

    pub fn ctx(&self) -> &C {
        &self.ctx
    }
}

impl<C: ViewportCtx> WindowHost for ViewportWindow<C> {
    fn is_visible(&self) -> anyhow::Result<bool> {
        Ok(self.visible)
    }

    fn is_minimized(&self) -> anyhow::Result<bool> {
        Ok(self.ctx.minimized().unwrap_or(false))
    }

    fn show(&mut self) -> anyhow::Result<()> {
        if !self.visible {
            let pos = self.restore_pos.unwrap_or(egui::pos2(DEFAULT_POS.0, DEFAULT_POS.1));
            self.ctx.send_viewport_cmd(egui::ViewportCommand::OuterPosition(pos));
        }
        self.ctx.send_viewport_cmd(egui::ViewportCommand::Visible(true));
        self.visible = true;
        self.ctx.request_repaint();
        Ok(())
    }

    fn hide(&mut self) -> anyhow::Result<()> {
        if self.visible {
            if let Some(pos) = self.ctx.outer_position() {
                self.restore_pos = Some(pos);
            }
        }
        self.ctx.send_viewport_cmd(egui::ViewportCommand::OuterPosition(egui::pos2(
            OFFSCREEN_POS.0,
            OFFSCREEN_POS.1,
        )));
        self.visible = false;
        Ok(())
    }

    fn unminimize(&mut self) -> anyhow::Result<()> {
        self.ctx.send_viewport_cmd(egui::ViewportCommand::Minimized(false));
        Ok(())
    }

    fn focus(&mut self) -> anyhow::Result<()> {
        self.ctx.send_viewport_cmd(egui::ViewportCommand::Focus);
        Ok(())
    }
}
