//! Circular buffer of the most recent log lines.

use std::collections::VecDeque;

pub struct LineBuffer {
    lines: VecDeque<String>,
    capacity: usize,
    partial: String,
}

impl LineBuffer {
    pub fn new(capacity: usize) -> Self {
        Self {
            lines: VecDeque::with_capacity(capacity),
            capacity,
            partial: String::new(),
        }
    }

    /// Feed raw writer output; lines are completed on `\n`.
    pub fn push_bytes(&mut self, bytes: &[u8]) {
        self.partial.push_str(&String::from_utf8_lossy(bytes));
        while let Some(pos) = self.partial.find('\n') {
            let line: String = self.partial.drain(..=pos).collect();
            self.push_line(line.trim_end_matches(['\n', '\r']).to_string());
        }
    }

    pub fn push_line(&mut self, line: String) {
        if self.capacity == 0 {
            return;
        }
        if self.lines.len() == self.capacity {
            self.lines.pop_front();
        }
        self.lines.push_back(line);
    }

    /// Oldest first
    pub fn lines(&self) -> Vec<String> {
        self.lines.iter().cloned().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_drops_oldest_when_full() {
        let mut buffer = LineBuffer::new(2);
        buffer.push_bytes(b"one\ntwo\nthree\n");
        assert_eq!(buffer.lines(), vec!["two", "three"]);
    }

    #[test]
    fn test_partial_lines_wait_for_newline() {
        let mut buffer = LineBuffer::new(4);
        buffer.push_bytes(b"hel");
        assert!(buffer.lines().is_empty());
        buffer.push_bytes(b"lo\r\nwor");
        assert_eq!(buffer.lines(), vec!["hello"]);
        buffer.push_bytes(b"ld\n");
        assert_eq!(buffer.lines(), vec!["hello", "world"]);
    }

    #[test]
    fn test_zero_capacity_keeps_nothing() {
        let mut buffer = LineBuffer::new(0);
        buffer.push_bytes(b"ignored\n");
        assert!(buffer.lines().is_empty());
    }
}
