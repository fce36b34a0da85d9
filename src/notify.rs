/// Severity of a user-facing notice.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeLevel {
    Info,
    Warning,
    Error,
}

/// A non-blocking message for the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub level: NoticeLevel,
    pub title: String,
    pub message: String,
}

impl Notice {
    pub fn new(level: NoticeLevel, title: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            level,
            title: title.into(),
            message: message.into(),
        }
    }
}

/// Surface for info/warning/error notices.
///
/// Implementations must return promptly; the editor never waits for a notice
/// to be dismissed.
pub trait Notifier {
    fn notify(&mut self, notice: Notice);

    fn info(&mut self, title: &str, message: &str) {
        self.notify(Notice::new(NoticeLevel::Info, title, message));
    }

    fn warning(&mut self, title: &str, message: &str) {
        self.notify(Notice::new(NoticeLevel::Warning, title, message));
    }

    fn error(&mut self, title: &str, message: &str) {
        self.notify(Notice::new(NoticeLevel::Error, title, message));
    }
}

/// Queue of notices waiting to be shown (and dismissed) by the UI.
#[derive(Debug, Default)]
pub struct NoticeLog {
    notices: Vec<Notice>,
}

impl NoticeLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn notices(&self) -> &[Notice] {
        &self.notices
    }

    pub fn last(&self) -> Option<&Notice> {
        self.notices.last()
    }

    pub fn is_empty(&self) -> bool {
        self.notices.is_empty()
    }

    pub fn len(&self) -> usize {
        self.notices.len()
    }

    pub fn dismiss(&mut self, index: usize) {
        if index < self.notices.len() {
            self.notices.remove(index);
        }
    }

    pub fn clear(&mut self) {
        self.notices.clear();
    }
}

impl Notifier for NoticeLog {
    fn notify(&mut self, notice: Notice) {
        match notice.level {
            NoticeLevel::Info => log::info!("{}: {}", notice.title, notice.message),
            NoticeLevel::Warning => log::warn!("{}: {}", notice.title, notice.message),
            NoticeLevel::Error => log::error!("{}: {}", notice.title, notice.message),
        }
        self.notices.push(notice);
    }
}
