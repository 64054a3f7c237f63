//! Command handlers.
//!
//! Handlers take an initialized terminal controller so they run the same
//! against the OS ports and against in-memory ones in tests.

use std::cell::RefCell;
use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};
use std::rc::Rc;
use std::thread;
use std::time::Duration;

use anyhow::{anyhow, Context, Result};
use nightshade::{
    ControllerConfig, FileStore, ListenerId, OsSignal, PreferenceSignal, PreferenceStore,
    SignalWatch, Surface, TextStats, Theme, ThemeController,
};
use tracing::{debug, warn};

use crate::cli::{Cli, Command};
use crate::output::OutputMode;
use crate::render::Renderer;
use crate::term::{glyph_text, TermSurface};

/// Location of the preferences file when `--store` is not given.
pub fn default_store_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("nightshade").join("preferences.json"))
}

/// Runs the parsed command line against the terminal.
pub fn run(cli: Cli) -> Result<()> {
    let path = match cli.store {
        Some(path) => path,
        None => default_store_path()
            .ok_or_else(|| anyhow!("no config directory found; pass --store <PATH>"))?,
    };
    debug!(path = %path.display(), "opening preferences");
    let store = FileStore::open(&path)?;

    let config = ControllerConfig::new().storage_key(cli.key);
    let mut controller =
        ThemeController::try_init(config, TermSurface::new(), store, OsSignal::new())
            .context("theme controller could not attach to the terminal")?;
    let (renderer, _) = attach_renderer(&mut controller, cli.output)?;

    match cli.command.unwrap_or(Command::Status) {
        Command::Status => println!("{}", status(&controller, &renderer.borrow())?),
        Command::Toggle => println!("{}", toggle(&mut controller, &renderer)?),
        Command::Set { theme } => println!("{}", set(&mut controller, &renderer, theme)?),
        Command::Watch { interval_ms, polls } => {
            watch(&mut controller, &renderer, Duration::from_millis(interval_ms), polls)?
        }
        Command::Count { file } => {
            let text = read_input(file.as_deref())?;
            println!("{}", count(&renderer.borrow(), &text)?);
        }
    }
    Ok(())
}

/// Builds a renderer styled for the applied theme and keeps it in sync.
///
/// The returned listener restyles the renderer on every apply, so output
/// rendered after a toggle, a set or a system change uses the new palette.
pub fn attach_renderer<S, P, G>(
    controller: &mut ThemeController<S, P, G>,
    mode: OutputMode,
) -> Result<(Rc<RefCell<Renderer>>, ListenerId)>
where
    S: Surface,
    P: PreferenceStore,
    G: PreferenceSignal,
{
    let renderer = Rc::new(RefCell::new(Renderer::new(controller.theme(), mode)?));
    let sink = Rc::clone(&renderer);
    let listener = controller.subscribe(move |theme| sink.borrow_mut().set_theme(theme));
    Ok((renderer, listener))
}

/// Renders the applied theme and its source.
pub fn status<P, G>(
    controller: &ThemeController<TermSurface, P, G>,
    renderer: &Renderer,
) -> Result<String>
where
    P: PreferenceStore,
    G: PreferenceSignal,
{
    let glyph = controller.surface().glyph_text();
    Ok(renderer.status(&glyph, controller.theme(), controller.source())?)
}

/// Toggles the theme and renders the change.
///
/// The renderer must not be borrowed while the controller applies, since its
/// restyling listener borrows it mutably.
pub fn toggle<P, G>(
    controller: &mut ThemeController<TermSurface, P, G>,
    renderer: &RefCell<Renderer>,
) -> Result<String>
where
    P: PreferenceStore,
    G: PreferenceSignal,
{
    let theme = controller.toggle();
    let glyph = controller.surface().glyph_text();
    Ok(renderer.borrow().change(&glyph, theme)?)
}

/// Forces `theme` and renders the change.
pub fn set<P, G>(
    controller: &mut ThemeController<TermSurface, P, G>,
    renderer: &RefCell<Renderer>,
    theme: Theme,
) -> Result<String>
where
    P: PreferenceStore,
    G: PreferenceSignal,
{
    controller.set_theme(theme);
    let glyph = controller.surface().glyph_text();
    Ok(renderer.borrow().change(&glyph, controller.theme())?)
}

/// Polls the system signal and forwards changes to the controller.
///
/// A listener prints every applied change with the renderer, which
/// [`attach_renderer`] has already restyled by then; it is removed again when
/// polling stops. Runs until `polls` polls have happened, or forever when
/// `polls` is `None`.
pub fn watch<P, G>(
    controller: &mut ThemeController<TermSurface, P, G>,
    renderer: &Rc<RefCell<Renderer>>,
    interval: Duration,
    polls: Option<u64>,
) -> Result<()>
where
    P: PreferenceStore,
    G: PreferenceSignal + Clone,
{
    println!("{}", status(controller, &renderer.borrow())?);

    let sink = Rc::clone(renderer);
    let listener = controller.subscribe(move |theme| {
        match sink.borrow().change(&glyph_text(theme.glyph()), theme) {
            Ok(line) => println!("{line}"),
            Err(err) => warn!(error = %err, "could not render theme change"),
        }
    });

    // Start from the applied theme so a change made since initialization is
    // picked up by the first poll.
    let mut signal = SignalWatch::starting_from(controller.signal().clone(), controller.theme());
    let mut done = 0;
    while polls.map_or(true, |limit| done < limit) {
        thread::sleep(interval);
        done += 1;
        if let Some(system) = signal.poll() {
            debug!(%system, "system appearance changed");
            controller.system_preference_changed(system);
        }
    }
    controller.unsubscribe(listener);
    Ok(())
}

/// Renders statistics for `text`.
pub fn count(renderer: &Renderer, text: &str) -> Result<String> {
    Ok(renderer.stats(&TextStats::from_text(text))?)
}

fn read_input(file: Option<&Path>) -> Result<String> {
    match file {
        Some(path) => fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display())),
        None => {
            let mut text = String::new();
            io::stdin()
                .read_to_string(&mut text)
                .context("failed to read stdin")?;
            Ok(text)
        }
    }
}
