//! Composition of jars and renderers from configuration, and the one-shot
//! commands.

use std::io;

use tracing::{info, warn};

use switcher_config::{Config, ViewConfig};
use switcher_core::{MemoryCookieJar, Page, StoreSettings};
use switcher_jar_file::FileCookieJar;
use switcher_protocols::{CookieJar, NullRenderer, Renderer};
use switcher_view_html::HtmlRenderer;
use switcher_view_terminal::TerminalRenderer;

use crate::json_view::JsonRenderer;

type HostResult = Result<(), Box<dyn std::error::Error>>;

/// Open the configured cookie jar.
///
/// A file jar that cannot be opened falls back to an in-memory jar so the
/// session still works; nothing is persisted in that case.
pub(crate) fn open_jar(config: &Config) -> Box<dyn CookieJar> {
    match config.jar.backend.as_str() {
        "memory" => {
            info!("Using in-memory cookie jar");
            Box::new(MemoryCookieJar::new())
        }
        _ => match FileCookieJar::open(&config.jar.path) {
            Ok(jar) => {
                info!("Using cookie jar {}", jar.path().display());
                Box::new(jar)
            }
            Err(e) => {
                warn!(
                    "Failed to open cookie jar {}: {}; falling back to memory",
                    config.jar.path.display(),
                    e
                );
                Box::new(MemoryCookieJar::new())
            }
        },
    }
}

/// Build the renderer for `format`, or `view.format` when not given.
pub(crate) fn build_renderer(view: &ViewConfig, format: Option<&str>) -> Box<dyn Renderer> {
    match format.unwrap_or(&view.format) {
        "html" => {
            let mut renderer = HtmlRenderer::new().with_writer(io::stdout());
            if let Some(output) = &view.html_output {
                renderer = renderer.with_output(output);
            }
            Box::new(renderer)
        }
        "json" => Box::new(JsonRenderer::new(io::stdout())),
        _ => Box::new(TerminalRenderer::stdout()),
    }
}

pub(crate) fn store_settings(config: &Config) -> StoreSettings {
    StoreSettings {
        cookie_name: config.cookie.name.clone(),
        cookie_path: config.cookie.path.clone(),
    }
}

/// Interactive session on stdin/stdout.
pub(crate) fn run_shell(config: &Config) -> HostResult {
    let mut page = Page::load(
        open_jar(config),
        build_renderer(&config.view, None),
        store_settings(config),
    );
    info!("Page loaded with {} accounts", page.store().len());

    let mut input = io::stdin().lock();
    let mut out = io::stdout();
    crate::shell::run(&mut page, &mut input, &mut out)?;

    info!("Session ended");
    Ok(())
}

/// Load the page, submit one account, unload.
pub(crate) fn run_add(config: &Config, username: String, password: String) -> HostResult {
    let mut page = Page::load(open_jar(config), NullRenderer, store_settings(config));
    page.form_mut().fill(username, password);
    let id = page.submit();

    if let Some(account) = page.store().get(id) {
        println!("Added account '{}'", account.username);
    }
    Ok(())
}

/// Print the persisted usernames, one per line.
pub(crate) fn run_list(config: &Config) -> HostResult {
    let page = Page::load(open_jar(config), NullRenderer, store_settings(config));
    for account in page.store().accounts() {
        println!("{}", account.username);
    }
    Ok(())
}

/// Load the page once; the initial render is the output.
pub(crate) fn run_render(config: &Config, format: Option<&str>) -> HostResult {
    let page = Page::load(
        open_jar(config),
        build_renderer(&config.view, format),
        store_settings(config),
    );
    info!("Rendered {} accounts", page.store().len());
    Ok(())
}
