//! Where command reports are printed.

/// Which terminal stream a line belongs on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stream {
    Stdout,
    Stderr,
}

/// A sink for report lines.
///
/// Implementors only decide where a finished line goes. The provided methods
/// fix the layout so every sink prints reports the same way.
pub trait Output {
    fn line(&mut self, stream: Stream, text: &str);

    fn section(&mut self, name: &str) {
        self.line(Stream::Stdout, &format!("{}:", name));
    }

    fn key_value(&mut self, key: &str, value: &str) {
        self.line(Stream::Stdout, &format!("{}: {}", key, value));
    }

    fn key_value_indented(&mut self, key: &str, value: &str) {
        self.line(Stream::Stdout, &format!("  {}: {}", key, value));
    }

    fn list_item(&mut self, text: &str) {
        self.line(Stream::Stdout, &format!("  - {}", text));
    }

    /// A file that was just written.
    fn added_item(&mut self, text: &str) {
        self.line(Stream::Stdout, &format!("  + {}", text));
    }

    fn warning(&mut self, msg: &str) {
        self.line(Stream::Stderr, &format!("warning: {}", msg));
    }

    fn error(&mut self, msg: &str) {
        self.line(Stream::Stderr, &format!("error: {}", msg));
    }

    fn divider(&mut self, label: &str) {
        self.line(Stream::Stdout, &format!("── {} ──", label));
    }

    /// Printed as is, e.g. the body of a previewed file.
    fn preformatted(&mut self, text: &str) {
        self.line(Stream::Stdout, text);
    }

    fn newline(&mut self) {
        self.line(Stream::Stdout, "");
    }
}

pub trait Report {
    fn render(&self, out: &mut dyn Output);
}

/// Prints reports to the process's stdout and stderr.
#[derive(Debug, Default)]
pub struct TerminalOutput;

impl TerminalOutput {
    pub fn new() -> Self {
        Self
    }
}

impl Output for TerminalOutput {
    fn line(&mut self, stream: Stream, text: &str) {
        match stream {
            Stream::Stdout => println!("{}", text),
            Stream::Stderr => eprintln!("{}", text),
        }
    }
}

/// Collects both streams into one string.
#[cfg(test)]
#[derive(Debug, Default)]
pub struct BufferOutput {
    pub text: String,
}

#[cfg(test)]
impl Output for BufferOutput {
    fn line(&mut self, _stream: Stream, text: &str) {
        self.text.push_str(text);
        self.text.push('\n');
    }
}
