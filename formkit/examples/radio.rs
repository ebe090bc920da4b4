//! Radio group demo.
//!
//! Tab moves between groups, arrows change the selection, clicks work on the
//! circle and on the label. `v` switches the visual mode, `f` focuses the
//! size group through its ref, `q` quits. Logs go to `radio.log`.

use std::collections::VecDeque;
use std::fs::File;
use std::io;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use formdom::{Color, Document, Element, Event, Key, Style, Terminal};
use formkit::prelude::*;
use simplelog::{Config, LevelFilter, WriteLogger};

type Selection = Arc<Mutex<Option<String>>>;

fn main() -> io::Result<()> {
    let log_file = File::create("radio.log")?;
    if WriteLogger::init(LevelFilter::Debug, Config::default(), log_file).is_err() {
        eprintln!("logger already initialised");
    }

    let size_value: Selection = Arc::new(Mutex::new(Some("medium".to_string())));
    let crust_value: Selection = Arc::default();

    let mut size = RadioGroup::new()
        .items([
            RadioButtonDefinition::new("small".to_string(), "Small"),
            RadioButtonDefinition::new("medium".to_string(), "Medium")
                .description("Feeds two"),
            RadioButtonDefinition::new("large".to_string(), "Large"),
            RadioButtonDefinition::new("party".to_string(), "Party").disabled(true),
        ])
        .aria_label("Size")
        .aria_required(true)
        .on_change(store(size_value.clone()));
    size.validate().map_err(io::Error::other)?;

    let mut crust = RadioGroup::new()
        .items([
            RadioButtonDefinition::new("thin".to_string(), "Thin"),
            RadioButtonDefinition::new("thick".to_string(), "Thick"),
        ])
        .direction(RadioGroupDirection::Horizontal)
        .aria_label("Crust")
        .on_change(store(crust_value.clone()));

    let mode = VisualModeSignal::default();
    let config = FormConfig::new().gap(1);
    let mut doc = Document::new();
    let mut term = Terminal::new()?;
    let mut pending: VecDeque<Event> = VecDeque::new();

    loop {
        size.set_value(read(&size_value));
        crust.set_value(read(&crust_value));

        let cx = RenderContext::new(mode.clone(), config.clone());
        let root = Element::col()
            .id("app")
            .gap(1)
            .child(Element::text("Order").style(Style::new().bold()))
            .child(size.build(&cx))
            .child(crust.build(&cx))
            .child(Element::text(status(&size_value, &crust_value, mode.get())))
            .child(
                Element::text("tab/arrows/space  v: visual mode  f: focus size  q: quit")
                    .style(Style::new().foreground(Color::var("muted"))),
            );
        doc.commit(root, cx.finish());
        term.render(&mut doc)?;

        if pending.is_empty() {
            pending.extend(term.poll_events(Duration::from_millis(250))?);
        }
        // One event per frame: a change handler may have moved the selection,
        // and the next event has to land on the re-rendered tree.
        let Some(event) = pending.pop_front() else {
            continue;
        };
        match event {
            Event::Key {
                key: Key::Char('q') | Key::Escape,
                ..
            } => return Ok(()),
            Event::Key {
                key: Key::Char('v'),
                ..
            } => {
                mode.toggle();
            }
            Event::Key {
                key: Key::Char('f'),
                ..
            } => {
                if let Err(err) = size.group_ref().focus() {
                    log::warn!("focus failed: {err}");
                }
            }
            event => {
                doc.dispatch(&event);
            }
        }
    }
}

/// Change handler that writes the picked value into `selection`.
fn store(selection: Selection) -> impl Fn(&NonCancelableCustomEvent<ChangeDetail<String>>) + Send + Sync {
    move |event: &NonCancelableCustomEvent<ChangeDetail<String>>| {
        if let Ok(mut value) = selection.lock() {
            *value = Some(event.detail.value.clone());
        }
    }
}

fn read(selection: &Selection) -> Option<String> {
    selection.lock().map(|value| value.clone()).unwrap_or(None)
}

fn status(size: &Selection, crust: &Selection, mode: VisualMode) -> String {
    let show = |value: Option<String>| value.unwrap_or_else(|| "-".to_string());
    format!(
        "size: {}  crust: {}  mode: {mode:?}",
        show(read(size)),
        show(read(crust))
    )
}
