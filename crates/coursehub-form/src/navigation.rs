//! Navigation seam. The form never routes by itself; it asks the host to.

pub trait Navigator {
    fn navigate(&mut self, route: &str);
}

/// Keeps every requested route. Used by headless hosts and tests.
#[derive(Debug, Default, Clone)]
pub struct RecordingNavigator {
    routes: Vec<String>,
}

impl RecordingNavigator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn routes(&self) -> &[String] {
        &self.routes
    }

    pub fn last(&self) -> Option<&str> {
        self.routes.last().map(String::as_str)
    }
}

impl Navigator for RecordingNavigator {
    fn navigate(&mut self, route: &str) {
        self.routes.push(route.to_string());
    }
}
