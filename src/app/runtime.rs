use std::cell::RefCell;
use std::path::PathBuf;
use std::rc::Rc;
use std::sync::Arc;

use crate::api::PredictionApi;
use crate::controller::{run_command, AnalysisTicket, Command, Completion, PageController, UiEvent, UiInput};
use crate::theme::{ThemeColors, ThemeMode};
use crate::ui::StyleTokens;
use gtk4::prelude::*;
use gtk4::ApplicationWindow;

use super::bootstrap::resolve_theme_runtime;
use super::page::PageUi;
use super::render::{render_page, RenderContext, RenderedState};
use super::runtime_css::RuntimeCss;
use super::toast::ToastRuntime;
use super::worker::spawn_worker;

pub(super) struct ThemeRuntime {
    pub(super) css: RuntimeCss,
    pub(super) colors: Option<ThemeColors>,
    pub(super) motion_enabled: bool,
}

impl ThemeRuntime {
    fn apply(&self, window: &ApplicationWindow, mode: ThemeMode) {
        let resolved = resolve_theme_runtime(mode, self.colors.as_ref());
        self.css
            .apply(resolved.style_tokens, &resolved.color_tokens, self.motion_enabled);
        window.remove_css_class(mode.toggled().as_str());
        window.add_css_class(mode.as_str());
        if let Some(settings) = gtk4::Settings::default() {
            settings.set_gtk_application_prefer_dark_theme(mode == ThemeMode::Dark);
        }
        tracing::debug!(mode = mode.as_str(), "applied theme");
    }
}

/// Glue between the page controller and GTK: executes commands on workers and
/// re-renders after every event or completion.
#[derive(Clone)]
pub(super) struct PageRuntime {
    inner: Rc<PageRuntimeInner>,
}

struct PageRuntimeInner {
    controller: RefCell<PageController>,
    api: Arc<dyn PredictionApi>,
    window: ApplicationWindow,
    ui: PageUi,
    toasts: ToastRuntime,
    theme: ThemeRuntime,
    rendered: RenderedState,
    style_tokens: StyleTokens,
}

impl PageRuntime {
    pub(super) fn new(
        controller: PageController,
        api: Arc<dyn PredictionApi>,
        window: ApplicationWindow,
        ui: PageUi,
        toasts: ToastRuntime,
        theme: ThemeRuntime,
        style_tokens: StyleTokens,
    ) -> Self {
        Self {
            inner: Rc::new(PageRuntimeInner {
                controller: RefCell::new(controller),
                api,
                window,
                ui,
                toasts,
                theme,
                rendered: RenderedState::default(),
                style_tokens,
            }),
        }
    }

    pub(super) fn window(&self) -> &ApplicationWindow {
        &self.inner.window
    }

    pub(super) fn ui(&self) -> &PageUi {
        &self.inner.ui
    }

    pub(super) fn dispatch(&self, event: UiEvent, input: UiInput) {
        let commands = self.inner.controller.borrow_mut().dispatch(event, input);
        self.render();
        self.execute(commands);
    }

    pub(super) fn dispatch_files(&self, event: UiEvent, paths: Vec<PathBuf>) {
        self.dispatch(event, UiInput::Files(paths));
    }

    fn complete(&self, completion: Completion) {
        let commands = self.inner.controller.borrow_mut().complete(completion);
        self.render();
        self.execute(commands);
    }

    fn abandon(&self, ticket: AnalysisTicket) {
        self.inner.controller.borrow_mut().abandon(ticket);
        self.render();
    }

    fn execute(&self, commands: Vec<Command>) {
        for command in commands {
            self.spawn(command);
        }
    }

    fn spawn(&self, command: Command) {
        let (worker_name, ticket) = match &command {
            Command::ReadFile { ticket, .. } => ("mriscope-read", Some(*ticket)),
            Command::Predict { ticket, .. } => ("mriscope-predict", Some(*ticket)),
            Command::FetchStatistics => ("mriscope-stats", None),
            Command::CheckHealth => ("mriscope-health", None),
        };
        let api = self.inner.api.clone();
        let on_result = {
            let runtime = self.clone();
            move |completion: Completion| runtime.complete(completion)
        };
        let on_lost = {
            let runtime = self.clone();
            move || {
                if let Some(ticket) = ticket {
                    runtime.abandon(ticket);
                }
            }
        };
        spawn_worker(
            worker_name,
            move || run_command(command, api.as_ref()),
            on_result,
            on_lost,
        );
    }

    pub(super) fn render(&self) {
        let inner = &self.inner;
        let theme_changed = {
            let mut controller = inner.controller.borrow_mut();
            let context = RenderContext {
                ui: &inner.ui,
                toasts: &inner.toasts,
                rendered: &inner.rendered,
                style_tokens: inner.style_tokens,
                motion_enabled: inner.theme.motion_enabled,
            };
            render_page(&context, controller.model_mut())
        };
        if let Some(mode) = theme_changed {
            inner.theme.apply(&inner.window, mode);
        }
    }
}
