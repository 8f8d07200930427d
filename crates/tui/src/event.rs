use anyhow::Result;
use crossterm::event::{self, Event as CrosstermEvent, KeyEvent, KeyEventKind};
use log::{debug, error};
use std::cell::RefCell;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::mpsc::{self, Sender};
use std::sync::Arc;
use std::thread;
use std::time::Duration;

use crate::store;

/// An event our app may receive
#[derive(Debug)]
pub enum Event {
    /// Key press.
    Key(KeyEvent),

    /// Terminal resize.
    Resize(u16, u16),

    /// A response or question from the store worker.
    Store(store::Event),
}

/// The event bus aggregates events from multiple threads, and joins them all back when dropped.
#[derive(Debug)]
pub struct EventBus {
    sender: mpsc::Sender<Event>,
    receiver: mpsc::Receiver<Event>,
    running: Arc<AtomicBool>,
    handles: RefCell<Vec<thread::JoinHandle<()>>>,
}

impl EventBus {
    /// Create a new event bus
    pub fn new() -> Self {
        let (sender, receiver) = mpsc::channel();
        Self {
            sender,
            receiver,
            running: Arc::new(AtomicBool::new(true)),
            handles: Default::default(),
        }
    }

    /// Receive the next event from any of our threads.
    ///
    /// This will block the current thread if there is no data available and it's possible for more data to be sent.
    pub fn next(&self) -> Result<Event> {
        Ok(self.receiver.recv()?)
    }

    /// Spawn a new thread that can publish to this event bus
    pub fn spawn<F>(&self, name: impl ToString, f: F) -> Result<()>
    where
        F: 'static + Send + FnOnce(Arc<AtomicBool>, Sender<Event>),
    {
        let sender = self.sender.clone();
        let running = self.running.clone();
        let handle = thread::Builder::new()
            .name(name.to_string())
            .spawn(move || f(running, sender))?;
        self.handles.borrow_mut().push(handle);

        Ok(())
    }

    /// Spawn a thread to publish terminal events to this bus
    pub fn spawn_terminal_listener(&self) -> Result<()> {
        self.spawn("terminal_events", Self::terminal_events)
    }

    /// Polls for terminal events and sends them to the given sender, until we stop running.
    fn terminal_events(running: Arc<AtomicBool>, sender: Sender<Event>) {
        while running.load(Ordering::Relaxed) {
            let ev = match event::poll(Duration::from_millis(250)) {
                Ok(true) => event::read(),
                Ok(false) => continue,
                Err(e) => Err(e),
            };

            let sent = match ev {
                // windows also reports releases
                Ok(CrosstermEvent::Key(e)) if e.kind == KeyEventKind::Press => {
                    sender.send(Event::Key(e))
                }
                Ok(CrosstermEvent::Resize(w, h)) => sender.send(Event::Resize(w, h)),
                Ok(_) => Ok(()),
                Err(e) => {
                    error!("error reading terminal events: {}", e);
                    break;
                }
            };

            if sent.is_err() {
                debug!("event bus closed, stopping terminal listener");
                break;
            }
        }
    }
}

impl Drop for EventBus {
    fn drop(&mut self) {
        self.running.store(false, Ordering::Relaxed);

        // Unanswered questions hold a reply channel the worker is blocked on
        while self.receiver.try_recv().is_ok() {}

        self.handles.borrow_mut().drain(..).for_each(|h| {
            debug!("joining thread {:?}", h.thread().name());
            if h.join().is_err() {
                error!("thread panicked");
            }
        });
    }
}
