use std::cell::RefCell;
use std::path::PathBuf;
use std::rc::Rc;
use std::time::Instant;

use crate::config::Config;
use crate::deck::MarkdownDeck;
use crate::error::{AppError, AppResult};

use super::core::App;
use super::host::HostApi;

mod host_faults;

#[derive(Debug, Default)]
pub(crate) struct HostLog {
    pub(crate) titles: Vec<String>,
    pub(crate) fullscreen_requests: usize,
    pub(crate) fullscreen_exits: usize,
    pub(crate) printed: Vec<String>,
}

/// Host double that records calls and can be told to refuse them.
#[derive(Debug, Default, Clone)]
pub(crate) struct RecordingHost {
    pub(crate) log: Rc<RefCell<HostLog>>,
    pub(crate) refuse_fullscreen: bool,
    pub(crate) refuse_print: bool,
    pub(crate) refuse_title: bool,
}

impl HostApi for RecordingHost {
    fn request_fullscreen(&mut self) -> AppResult<()> {
        if self.refuse_fullscreen {
            return Err(AppError::host("request-fullscreen", "not allowed"));
        }
        self.log.borrow_mut().fullscreen_requests += 1;
        Ok(())
    }

    fn exit_fullscreen(&mut self) -> AppResult<()> {
        self.log.borrow_mut().fullscreen_exits += 1;
        Ok(())
    }

    fn print(&mut self, document: &str) -> AppResult<PathBuf> {
        if self.refuse_print {
            return Err(AppError::host("print", "no printer"));
        }
        self.log.borrow_mut().printed.push(document.to_string());
        Ok(PathBuf::from("deck.print.txt"))
    }

    fn set_title(&mut self, title: &str) -> AppResult<()> {
        if self.refuse_title {
            return Err(AppError::host("set-title", "detached"));
        }
        self.log.borrow_mut().titles.push(title.to_string());
        Ok(())
    }
}

/// Deck of `count` slides headed `Topic 1..=count`, started at `now` with
/// default timings. The deck title comes from the first heading.
pub(crate) fn app_with_deck(
    count: usize,
    host: RecordingHost,
    now: Instant,
) -> (App, Rc<RefCell<HostLog>>) {
    app_with_config(count, Config::default(), host, now)
}

pub(crate) fn app_with_config(
    count: usize,
    config: Config,
    host: RecordingHost,
    now: Instant,
) -> (App, Rc<RefCell<HostLog>>) {
    let raw = (1..=count)
        .map(|n| format!("# Topic {n}\nbody {n}"))
        .collect::<Vec<_>>()
        .join("\n---\n");
    let deck = MarkdownDeck::parse(&raw, "Deck");
    let log = Rc::clone(&host.log);
    let app = App::new(Box::new(deck), config, Box::new(host), now);
    (app, log)
}
