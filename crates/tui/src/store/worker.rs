use anyhow::Result;
use course_listing::{confirm_and_delete, Confirm, CourseApi};
use log::debug;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::mpsc::{channel, Receiver, RecvTimeoutError, Sender};
use std::sync::Arc;
use std::time::Duration;

use super::{Event, Request};
use crate::event::{Event as CrateEvent, EventBus};

/// A yes/no question from the worker. Dropping it without answering counts as "no".
#[derive(Debug)]
pub struct Question {
    pub message: String,
    reply: Sender<bool>,
}

impl Question {
    pub(crate) fn new(message: impl Into<String>, reply: Sender<bool>) -> Self {
        Self {
            message: message.into(),
            reply,
        }
    }

    pub fn answer(self, yes: bool) {
        if self.reply.send(yes).is_err() {
            debug!("nobody waiting for answer to {:?}", self.message);
        }
    }
}

/// How often a waiting worker checks whether the app is shutting down
const ANSWER_POLL: Duration = Duration::from_millis(250);

/// Asks the UI thread, and blocks the worker until it answers or the app stops running
struct ChannelConfirm<'a> {
    event_send: &'a Sender<CrateEvent>,
    running: &'a AtomicBool,
}

impl Confirm for ChannelConfirm<'_> {
    fn confirm(&mut self, message: &str) -> bool {
        let (reply, answer) = channel();
        let question = Question::new(message, reply);

        if self
            .event_send
            .send(CrateEvent::Store(Event::Confirm(question)))
            .is_err()
        {
            return false;
        }

        loop {
            match answer.recv_timeout(ANSWER_POLL) {
                Ok(yes) => return yes,
                Err(RecvTimeoutError::Timeout) if self.running.load(Ordering::Relaxed) => continue,
                Err(_) => return false,
            }
        }
    }
}

/// Performs requests it receives from the main thread, and sends the results back.
pub struct Worker<A> {
    api: A,
    msg_recv: Receiver<Request>,
    event_send: Sender<CrateEvent>,
    running: Arc<AtomicBool>,
}

impl<A> Worker<A>
where
    A: CourseApi + Send + 'static,
{
    /// Spawn the store worker on the given event bus, returning a channel to send requests down.
    pub(crate) fn spawn_on(bus: &EventBus, api: A) -> Result<Sender<Request>> {
        let (cmd_send, cmd_recv) = channel();

        bus.spawn("store_worker", move |running, event_send| {
            // the receiver raises an error once the store is dropped, so running only matters mid-question
            Worker {
                api,
                msg_recv: cmd_recv,
                event_send,
                running,
            }
            .main()
        })?;

        Ok(cmd_send)
    }

    fn main(self) {
        while let Ok(msg) = self.msg_recv.recv() {
            debug!("received message: {:?}", msg);
            let event = self.process_msg(msg);
            if let Err(e) = self.event_send.send(CrateEvent::Store(event)) {
                debug!("error sending event: {:?}", e);
                break;
            }
        }

        debug!("shutting down");
    }

    fn process_msg(&self, msg: Request) -> Event {
        match msg {
            Request::Courses => Event::Courses(self.api.list_courses()),
            Request::Delete(id) => {
                let mut confirm = ChannelConfirm {
                    event_send: &self.event_send,
                    running: &self.running,
                };
                Event::Deleted(confirm_and_delete(&id, &mut confirm, &self.api))
            }
        }
    }
}
