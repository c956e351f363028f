use std::cell::Cell;
use std::path::PathBuf;
use std::rc::Rc;
use std::sync::Arc;

use crate::api::{HttpPredictionApi, PredictionApi};
use crate::controller::{PageController, UiEvent, UiInput};
use crate::error::{AppError, AppResult};
use crate::notification::ToastTimeline;
use crate::theme::ThemeManager;
use gtk4::prelude::*;
use gtk4::{gdk, gio, Application, ApplicationWindow, DropTarget, FileDialog, FileFilter, GestureClick};

mod bootstrap;
mod charts;
mod page;
mod render;
mod runtime;
mod runtime_css;
mod toast;
mod worker;

use self::bootstrap::*;
use self::page::build_page_ui;
use self::runtime::{PageRuntime, ThemeRuntime};
use self::runtime_css::RuntimeCss;
use self::toast::ToastRuntime;

const APPLICATION_ID: &str = "io.github.mriscope.MriScope";
const IMAGE_MIME_PATTERN: &str = "image/*";

pub struct App {
    bootstrap: Option<AppBootstrap>,
}

impl App {
    pub fn new() -> Self {
        Self {
            bootstrap: Some(bootstrap_app_runtime()),
        }
    }

    /// Blocks in the GTK main loop until the window closes.
    pub fn start(&mut self) -> AppResult<()> {
        let bootstrap = self.bootstrap.take().ok_or(AppError::AlreadyStarted)?;
        let AppBootstrap {
            settings,
            theme_colors,
            theme_store,
        } = bootstrap;

        let api: Arc<dyn PredictionApi> = Arc::new(HttpPredictionApi::new(
            settings.server_url.clone(),
            request_timeout(&settings),
        )?);
        let controller = PageController::new(
            ThemeManager::load(theme_store),
            settings.desktop_notifications,
        );

        tracing::info!("starting gtk runtime");
        let application = Application::new(Some(APPLICATION_ID), gio::ApplicationFlags::NON_UNIQUE);
        let pending = Rc::new(Cell::new(Some((controller, theme_colors))));

        application.connect_activate(move |app| {
            let Some((controller, theme_colors)) = pending.take() else {
                tracing::debug!("ignoring duplicate gtk activate signal");
                return;
            };
            let motion_enabled = gtk4::Settings::default()
                .map(|settings| settings.is_gtk_enable_animations())
                .unwrap_or(true);
            let resolved = resolve_theme_runtime(controller.theme_mode(), theme_colors.as_ref());
            let style_tokens = resolved.style_tokens;

            let window = ApplicationWindow::new(app);
            window.add_css_class("mriscope-root");
            window.set_title(Some("MriScope"));
            window.set_default_size(
                style_tokens.window_default_width,
                style_tokens.window_default_height,
            );

            let ui = build_page_ui(style_tokens);
            window.set_child(Some(&ui.root));
            let toasts = ToastRuntime::new(&ui.toast_stack, ToastTimeline::default());
            let theme = ThemeRuntime {
                css: RuntimeCss::install(),
                colors: theme_colors,
                motion_enabled,
            };
            let runtime = PageRuntime::new(
                controller,
                api.clone(),
                window,
                ui,
                toasts,
                theme,
                style_tokens,
            );

            connect_page_signals(&runtime);
            runtime.render();
            runtime.dispatch(UiEvent::PageLoaded, UiInput::None);

            tracing::info!("presenting main window");
            runtime.window().present();
        });

        // Pass only argv[0] so app flags like --server never reach GTK's parser.
        let gtk_args = gtk_launch_args();
        application.run_with_args(&gtk_args);
        Ok(())
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}

fn gtk_launch_args() -> Vec<String> {
    vec![std::env::args()
        .next()
        .unwrap_or_else(|| "mriscope".to_string())]
}

fn connect_page_signals(runtime: &PageRuntime) {
    let ui = runtime.ui();

    {
        let runtime = runtime.clone();
        ui.theme_button.connect_clicked(move |_| {
            runtime.dispatch(UiEvent::ToggleTheme, UiInput::None);
        });
    }
    {
        let runtime = runtime.clone();
        ui.browse_button.connect_clicked(move |_| open_file_dialog(&runtime));
    }
    {
        let runtime = runtime.clone();
        let click = GestureClick::new();
        click.connect_released(move |gesture, _, _, _| {
            gesture.set_state(gtk4::EventSequenceState::Claimed);
            open_file_dialog(&runtime);
        });
        ui.drop_zone.add_controller(click);
    }
    {
        let runtime = runtime.clone();
        ui.analyze_again_button.connect_clicked(move |_| {
            runtime.dispatch(UiEvent::AnalyzeAgain, UiInput::None);
        });
    }
    {
        let runtime = runtime.clone();
        ui.refresh_stats_button.connect_clicked(move |_| {
            runtime.dispatch(UiEvent::RefreshStatistics, UiInput::None);
        });
    }

    let drop_target = DropTarget::new(gdk::FileList::static_type(), gdk::DragAction::COPY);
    {
        let runtime = runtime.clone();
        drop_target.connect_enter(move |_, _, _| {
            runtime.dispatch(UiEvent::DragEnter, UiInput::None);
            gdk::DragAction::COPY
        });
    }
    {
        let runtime = runtime.clone();
        drop_target.connect_leave(move |_| {
            runtime.dispatch(UiEvent::DragLeave, UiInput::None);
        });
    }
    {
        let runtime = runtime.clone();
        drop_target.connect_drop(move |_, value, _, _| {
            let paths = value
                .get::<gdk::FileList>()
                .map(|files| {
                    files
                        .files()
                        .iter()
                        .filter_map(|file| file.path())
                        .collect::<Vec<PathBuf>>()
                })
                .unwrap_or_default();
            if paths.is_empty() {
                tracing::debug!("drop carried no local files");
            }
            runtime.dispatch_files(UiEvent::FileDropped, paths);
            true
        });
    }
    ui.drop_zone.add_controller(drop_target);
}

fn open_file_dialog(runtime: &PageRuntime) {
    let filter = FileFilter::new();
    filter.set_name(Some("Images"));
    filter.add_mime_type(IMAGE_MIME_PATTERN);
    let filters = gio::ListStore::new::<FileFilter>();
    filters.append(&filter);

    let dialog = FileDialog::builder()
        .title("Select an MRI image")
        .modal(true)
        .filters(&filters)
        .default_filter(&filter)
        .build();

    let runtime_for_result = runtime.clone();
    dialog.open(
        Some(runtime.window()),
        gio::Cancellable::NONE,
        move |result| match result {
            Ok(file) => match file.path() {
                Some(path) => runtime_for_result.dispatch_files(UiEvent::FileChosen, vec![path]),
                None => tracing::warn!(uri = %file.uri(), "picked file has no local path"),
            },
            Err(err) => tracing::debug!(%err, "file dialog dismissed"),
        },
    );
}
