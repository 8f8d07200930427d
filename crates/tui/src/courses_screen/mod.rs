use anyhow::Result;
use course_listing::{
    render::{self, Body},
    CourseApi, Route,
};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use log::debug;
use ratatui::{
    prelude::{Constraint, Direction, Layout},
    text::Text,
    widgets::Paragraph,
    Frame,
};

use crate::{
    event::{Event, EventBus},
    store::{Question, Store},
    styles::{error_text, key_hints},
    widgets::StatefulTable,
    ExitState, Screen,
};

mod dialog;
use dialog::ConfirmDialog;

/// Something the screen should do in response to an event
pub enum Action {
    /// Do nothing
    None,

    /// Quit the application
    Exit,

    /// Open a page of the admin site in the browser
    Open(Route),

    /// Ask the store to delete the course with this id
    Delete(String),

    /// Show a yes/no prompt for the store worker
    Confirm(Question),

    /// Display the given text at the bottom of the screen
    Flash(Text<'static>),
}

/// Lists every course, with stats at the top and a delete action per row.
pub struct CoursesScreen {
    store: Store,
    admin_base: String,
    table: StatefulTable,
    dialog: Option<ConfirmDialog>,
    flash: Text<'static>,
}

impl CoursesScreen {
    /// Create the screen, and start loading the courses
    pub fn new<A>(events: &EventBus, api: A, admin_base: String) -> Result<Self>
    where
        A: CourseApi + Send + 'static,
    {
        Ok(Self::with_store(Store::new(events, api)?, admin_base))
    }

    pub(crate) fn with_store(mut store: Store, admin_base: String) -> Self {
        store.request_courses();

        Self {
            store,
            admin_base,
            table: StatefulTable::default(),
            dialog: None,
            flash: Text::raw(""),
        }
    }

    /// The id of the highlighted course, if any
    fn selected_id(&self) -> Option<String> {
        let sel = self.table.selected()?;
        self.store
            .list()
            .courses()
            .get(sel)
            .map(|c| c.id.clone())
    }

    fn handle_key(&mut self, key: KeyEvent) -> Action {
        // Modal prompt swallows everything until it's answered
        if let Some(dialog) = self.dialog.take() {
            self.dialog = dialog.handle_key(key);
            return Action::None;
        }

        match key.code {
            KeyCode::Esc | KeyCode::Char('q') => Action::Exit,
            KeyCode::Down | KeyCode::Char('j') => {
                self.table.next();
                Action::None
            }
            KeyCode::Up | KeyCode::Char('k') => {
                self.table.previous();
                Action::None
            }
            KeyCode::Char('n') => Action::Open(Route::NewCourse),
            KeyCode::Enter | KeyCode::Char('e') => match self.selected_id() {
                Some(id) => Action::Open(Route::EditCourse(id)),
                None => Action::None,
            },
            KeyCode::Char('d') => match self.selected_id() {
                Some(id) => Action::Delete(id),
                None => Action::None,
            },
            _ => Action::None,
        }
    }

    fn open(&self, route: &Route) -> Action {
        let url = route.url(&self.admin_base);
        debug!("opening {}", url);

        match open::that(&url) {
            Ok(()) => Action::Flash(format!("Opened {url} in browser").into()),
            Err(e) => Action::Flash(error_text(format!("Error opening in browser: {e}"))),
        }
    }

    fn perform(&mut self, action: Action) -> ExitState {
        match action {
            Action::None => (),
            Action::Exit => return ExitState::Quit,
            Action::Open(route) => return self.perform(self.open(&route)),
            Action::Delete(id) => self.store.request_delete(id),
            Action::Confirm(question) => {
                // A second question can't arrive until this one is answered, since the worker is blocked on it.
                self.dialog = Some(ConfirmDialog::new(question));
            }
            Action::Flash(t) => self.flash = t,
        };

        ExitState::Running
    }
}

impl Screen for CoursesScreen {
    fn draw(&mut self, frame: &mut Frame) {
        let size = frame.size();

        let layout = Layout::new(
            Direction::Vertical,
            [
                Constraint::Length(2),
                Constraint::Length(4),
                Constraint::Length(1),
                Constraint::Min(0),
                Constraint::Length(1),
            ],
        )
        .horizontal_margin(1)
        .split(size);

        frame.render_widget(render::header(), layout[0]);

        let list = self.store.list();
        let cards = Layout::new(
            Direction::Horizontal,
            [
                Constraint::Ratio(1, 3),
                Constraint::Ratio(1, 3),
                Constraint::Ratio(1, 3),
            ],
        )
        .split(layout[1]);
        for (card, area) in render::stat_cards(list.stats()).into_iter().zip(cards.iter()) {
            frame.render_widget(card, *area);
        }

        frame.render_widget(Paragraph::new(render::toolbar()), layout[2]);

        match Body::of(list) {
            Body::Loading => frame.render_widget(render::loading(), layout[3]),
            Body::Empty => {
                self.table.set_row_count(0);
                frame.render_widget(render::empty_state(), layout[3]);
            }
            Body::Rows(rows) => {
                self.table
                    .render_to(frame, layout[3], render::table(&rows), rows.len());
            }
        }

        let bottom_bar = if self.flash.width() == 0 {
            Paragraph::new(key_hints(&[
                ("j/k", "move"),
                ("n", "new"),
                ("e", "edit"),
                ("d", "delete"),
                ("q", "quit"),
            ]))
        } else {
            Paragraph::new(self.flash.clone())
        };
        frame.render_widget(bottom_bar, layout[4]);

        if let Some(dialog) = &self.dialog {
            dialog.draw(frame, size);
        }
    }

    fn handle_event(&mut self, event: Event) -> Result<ExitState> {
        // C-C always exits
        if let Event::Key(KeyEvent {
            code: KeyCode::Char('c') | KeyCode::Char('C'),
            modifiers: KeyModifiers::CONTROL,
            ..
        }) = event
        {
            return Ok(ExitState::Quit);
        }

        let action = match event {
            Event::Store(s) => self.store.event(s),
            Event::Key(key) => {
                self.flash = Text::raw("");
                self.handle_key(key)
            }
            Event::Resize(_, _) => Action::None,
        };

        Ok(self.perform(action))
    }
}

#[cfg(test)]
mod tests {
    use std::sync::mpsc::{channel, Receiver};

    use course_listing::Course;
    use crossterm::event::KeyEvent;

    use super::*;
    use crate::store::{self, Request};

    fn screen_with(courses: Vec<Course>) -> (CoursesScreen, Receiver<Request>) {
        let (send, recv) = channel();
        let mut screen = CoursesScreen::with_store(
            Store::with_channel(send),
            "http://localhost:3000".to_string(),
        );
        screen
            .handle_event(Event::Store(store::Event::Courses(Ok(courses))))
            .unwrap();
        screen.table.set_row_count(screen.store.list().courses().len());

        (screen, recv)
    }

    fn course(id: &str) -> Course {
        Course {
            id: id.to_string(),
            title: id.to_uppercase(),
            overall_duration: 15,
            status: "draft".to_string(),
        }
    }

    fn press(screen: &mut CoursesScreen, code: KeyCode) -> Action {
        screen.handle_key(KeyEvent::from(code))
    }

    #[test]
    fn loads_on_creation() {
        let (_screen, recv) = screen_with(vec![]);

        assert!(matches!(recv.try_recv(), Ok(Request::Courses)));
        assert!(recv.try_recv().is_err());
    }

    #[test]
    fn new_course_route() {
        let (mut screen, _recv) = screen_with(vec![]);

        assert!(matches!(
            press(&mut screen, KeyCode::Char('n')),
            Action::Open(Route::NewCourse)
        ));
    }

    #[test]
    fn edit_selected_course() {
        let (mut screen, _recv) = screen_with(vec![course("aaa"), course("bbb")]);
        press(&mut screen, KeyCode::Char('j'));

        assert!(matches!(
            press(&mut screen, KeyCode::Char('e')),
            Action::Open(Route::EditCourse(id)) if id == "bbb"
        ));
    }

    #[test]
    fn nothing_to_edit_or_delete_when_empty() {
        let (mut screen, _recv) = screen_with(vec![]);

        assert!(matches!(press(&mut screen, KeyCode::Enter), Action::None));
        assert!(matches!(press(&mut screen, KeyCode::Char('d')), Action::None));
    }

    #[test]
    fn delete_goes_to_store() {
        let (mut screen, recv) = screen_with(vec![course("aaa")]);
        let _ = recv.try_recv();

        let action = press(&mut screen, KeyCode::Char('d'));
        assert!(matches!(screen.perform(action), ExitState::Running));

        assert!(matches!(recv.try_recv(), Ok(Request::Delete(id)) if id == "aaa"));
    }

    #[test]
    fn dialog_answers_question() {
        let (mut screen, _recv) = screen_with(vec![course("aaa")]);
        let (reply, answer) = channel();
        screen
            .handle_event(Event::Store(store::Event::Confirm(Question::new(
                "Are you sure?",
                reply,
            ))))
            .unwrap();

        // other keys are swallowed while the prompt is up
        assert!(matches!(press(&mut screen, KeyCode::Char('q')), Action::None));
        assert!(screen.dialog.is_some());

        press(&mut screen, KeyCode::Char('n'));
        assert!(screen.dialog.is_none());
        assert!(!answer.recv().unwrap());
    }

    #[test]
    fn ctrl_c_quits() {
        let (mut screen, _recv) = screen_with(vec![]);
        let key = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);

        assert!(matches!(
            screen.handle_event(Event::Key(key)).unwrap(),
            ExitState::Quit
        ));
    }

    #[test]
    fn q_quits() {
        let (mut screen, _recv) = screen_with(vec![]);

        assert!(matches!(
            screen.handle_event(Event::Key(KeyEvent::from(KeyCode::Char('q')))).unwrap(),
            ExitState::Quit
        ));
    }
}
