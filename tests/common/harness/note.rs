//! Programmatic construction of note files for tests.

#![allow(dead_code)]

/// Builder for the content of a test note.
///
/// Emits a front-matter block when at least one metadata field is set,
/// otherwise just the body.
pub struct TestNote {
    filename: String,
    title: Option<String>,
    date: Option<String>,
    tags: Option<Tags>,
    body: String,
}

enum Tags {
    List(Vec<String>),
    CommaSeparated(String),
}

impl TestNote {
    pub fn new(filename: &str) -> Self {
        Self {
            filename: filename.to_string(),
            title: None,
            date: None,
            tags: None,
            body: String::new(),
        }
    }

    pub fn title(mut self, title: &str) -> Self {
        self.title = Some(title.to_string());
        self
    }

    pub fn date(mut self, date: &str) -> Self {
        self.date = Some(date.to_string());
        self
    }

    /// Sets tags in the YAML sequence form.
    pub fn tags(mut self, tags: &[&str]) -> Self {
        self.tags = Some(Tags::List(tags.iter().map(|t| t.to_string()).collect()));
        self
    }

    /// Sets tags in the comma-separated string form.
    pub fn tags_string(mut self, tags: &str) -> Self {
        self.tags = Some(Tags::CommaSeparated(tags.to_string()));
        self
    }

    pub fn body(mut self, body: &str) -> Self {
        self.body = body.to_string();
        self
    }

    pub fn filename(&self) -> &str {
        &self.filename
    }

    pub fn to_content(&self) -> String {
        if self.title.is_none() && self.date.is_none() && self.tags.is_none() {
            return self.body.clone();
        }

        let mut front = String::new();
        if let Some(title) = &self.title {
            front.push_str(&format!("title: {title}\n"));
        }
        if let Some(date) = &self.date {
            front.push_str(&format!("date: {date}\n"));
        }
        match &self.tags {
            Some(Tags::List(tags)) => {
                front.push_str("tags:\n");
                for tag in tags {
                    front.push_str(&format!("- {tag}\n"));
                }
            }
            Some(Tags::CommaSeparated(tags)) => {
                front.push_str(&format!("tags: {tags}\n"));
            }
            None => {}
        }

        format!("---\n{front}---\n\n{}\n", self.body)
    }
}
