use std::{cell::RefCell, sync::mpsc::Sender};

use course_listing::{
    Course, CourseApi, CourseList, DeleteOutcome, Diagnostic, LogObserver, Observer,
};
use coursedesk_client::Error;
use log::{debug, error};

mod worker;
pub use worker::Question;
use worker::Worker;

use crate::{courses_screen::Action, event::EventBus, styles::error_text};

/// Our copy of the course list, along with a handle to the thread that talks to the server.
pub struct Store {
    list: CourseList,
    worker_channel: Sender<Request>,
}

/// Requests sent to the worker thread
#[derive(Debug)]
pub enum Request {
    Courses,
    Delete(String),
}

/// Messages received by the app from the worker thread
#[derive(Debug)]
pub enum Event {
    Courses(Result<Vec<Course>, Error>),
    Deleted(DeleteOutcome),

    /// The worker needs a yes/no answer before it can carry on
    Confirm(Question),
}

impl Store {
    /// Create a store, spawning its worker on the given event bus
    pub fn new<A>(bus: &EventBus, api: A) -> anyhow::Result<Self>
    where
        A: CourseApi + Send + 'static,
    {
        let worker_channel = Worker::spawn_on(bus, api)?;

        Ok(Self::with_channel(worker_channel))
    }

    pub(crate) fn with_channel(worker_channel: Sender<Request>) -> Self {
        Self {
            list: CourseList::new(),
            worker_channel,
        }
    }

    pub fn list(&self) -> &CourseList {
        &self.list
    }

    /// Start fetching the course list, unless we already have.
    pub fn request_courses(&mut self) {
        if self.list.begin_load() {
            self.send(Request::Courses);
        }
    }

    /// Ask the worker to delete a course. It will check with the user first.
    pub fn request_delete(&self, id: String) {
        self.send(Request::Delete(id));
    }

    fn send(&self, req: Request) {
        if let Err(e) = self.worker_channel.send(req) {
            error!("store worker has gone away: {}", e);
        }
    }

    pub fn event(&mut self, e: Event) -> Action {
        let observer = FlashObserver::default();

        match e {
            Event::Courses(result) => self.list.finish_load(result, &observer),
            Event::Deleted(outcome) => {
                if self.list.apply_delete(outcome, &observer) {
                    return Action::Flash("Course deleted".into());
                }
            }
            Event::Confirm(question) => return Action::Confirm(question),
        };

        match observer.last.into_inner() {
            Some(msg) => Action::Flash(error_text(msg)),
            None => Action::None,
        }
    }
}

/// Logs diagnostics, and remembers the last one so we can show it in the flash bar.
#[derive(Default)]
struct FlashObserver {
    last: RefCell<Option<String>>,
}

impl Observer for FlashObserver {
    fn observe(&self, diagnostic: &Diagnostic) {
        LogObserver.observe(diagnostic);
        debug!("flashing diagnostic");
        *self.last.borrow_mut() = Some(diagnostic.to_string());
    }
}

#[cfg(test)]
mod tests {
    use std::{
        sync::mpsc::{channel, Receiver},
        thread,
        time::Duration,
    };

    use super::*;
    use pretty_assertions::assert_eq;
    use ratatui::text::Text;

    fn store() -> (Store, Receiver<Request>) {
        let (send, recv) = channel();
        (Store::with_channel(send), recv)
    }

    fn course(id: &str) -> Course {
        Course {
            id: id.to_string(),
            title: format!("Course {}", id),
            overall_duration: 10,
            status: "draft".to_string(),
        }
    }

    fn flash_text(action: Action) -> Text<'static> {
        match action {
            Action::Flash(t) => t,
            _ => panic!("expected a flash"),
        }
    }

    #[test]
    fn requests_courses_once() {
        let (mut store, recv) = store();

        store.request_courses();
        store.request_courses();

        assert!(matches!(recv.try_recv(), Ok(Request::Courses)));
        assert!(recv.try_recv().is_err());
        assert!(store.list().is_loading());
    }

    #[test]
    fn courses_loaded() {
        let (mut store, _recv) = store();
        store.request_courses();

        let action = store.event(Event::Courses(Ok(vec![course("a"), course("b")])));

        assert!(matches!(action, Action::None));
        assert_eq!(store.list().stats().total, 2);
    }

    #[test]
    fn fetch_failure_flashes_and_loads_empty() {
        let (mut store, _recv) = store();
        store.request_courses();

        let action = store.event(Event::Courses(Err(Error::Status {
            status: 502,
            body: "bad gateway".to_string(),
        })));

        assert_eq!(
            flash_text(action),
            error_text("Failed to fetch courses: server responded with 502: bad gateway")
        );
        assert!(!store.list().is_loading());
        assert!(store.list().courses().is_empty());
    }

    #[test]
    fn delete_reconciles() {
        let (mut store, recv) = store();
        store.request_courses();
        store.event(Event::Courses(Ok(vec![course("a"), course("b")])));

        store.request_delete("a".to_string());
        assert!(matches!(recv.try_recv(), Ok(Request::Courses)));
        assert!(matches!(recv.try_recv(), Ok(Request::Delete(id)) if id == "a"));

        let action = store.event(Event::Deleted(DeleteOutcome::Deleted("a".to_string())));

        assert_eq!(flash_text(action), Text::from("Course deleted"));
        assert_eq!(store.list().courses(), &[course("b")]);
    }

    #[test]
    fn delete_failure_keeps_course() {
        let (mut store, _recv) = store();
        store.request_courses();
        store.event(Event::Courses(Ok(vec![course("a")])));

        let action = store.event(Event::Deleted(DeleteOutcome::Failed {
            id: "a".to_string(),
            error: Error::Status {
                status: 404,
                body: "".to_string(),
            },
        }));

        assert_eq!(
            flash_text(action),
            error_text("Failed to delete course a: server responded with 404: ")
        );
        assert_eq!(store.list().courses().len(), 1);
    }

    #[test]
    fn declined_delete_does_nothing() {
        let (mut store, _recv) = store();
        store.request_courses();
        store.event(Event::Courses(Ok(vec![course("a")])));

        let action = store.event(Event::Deleted(DeleteOutcome::Declined));

        assert!(matches!(action, Action::None));
        assert_eq!(store.list().courses().len(), 1);
    }

    struct NoCourses;

    impl CourseApi for NoCourses {
        fn list_courses(&self) -> coursedesk_client::Result<Vec<Course>> {
            Ok(vec![])
        }

        fn delete_course(&self, _id: &str) -> coursedesk_client::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn quitting_with_unanswered_questions_exits() {
        let bus = EventBus::new();
        let store = Store::new(&bus, NoCourses).unwrap();
        store.request_delete("abc".to_string());
        store.request_delete("def".to_string());

        // let the worker block on the first question, which nobody reads
        thread::sleep(Duration::from_millis(200));
        drop(store);

        let (done_send, done) = channel();
        thread::spawn(move || {
            drop(bus);
            done_send.send(()).unwrap();
        });

        assert!(
            done.recv_timeout(Duration::from_secs(3)).is_ok(),
            "event bus still joining the store worker"
        );
    }
}
