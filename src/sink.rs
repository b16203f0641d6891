//! Result sink adapter (C9): emits final patterns. Serialization
//! (string joining, separators) is entirely the sink's concern - the
//! core never formats output itself.

use crate::errors::Result;
use crate::types::FrequentPattern;
use serde::Serialize;
use std::fmt::Display;
use std::io::Write;

/// Abstract destination for mined patterns.
pub trait Sink<I> {
    fn emit(&mut self, patterns: &[FrequentPattern<I>]) -> Result<()>;
}

/// The trivial adapter: patterns collected in memory.
#[derive(Default)]
pub struct VecSink<I> {
    patterns: Vec<FrequentPattern<I>>,
}

impl<I: Clone> VecSink<I> {
    pub fn new() -> Self {
        Self {
            patterns: Vec::new(),
        }
    }

    pub fn into_inner(self) -> Vec<FrequentPattern<I>> {
        self.patterns
    }
}

impl<I: Clone> Sink<I> for VecSink<I> {
    fn emit(&mut self, patterns: &[FrequentPattern<I>]) -> Result<()> {
        self.patterns.extend_from_slice(patterns);
        Ok(())
    }
}

/// Reference sink for the documented output line format:
/// `itemA itemB … : expectedSupport`, one pattern per line.
pub struct TextSink<W> {
    writer: W,
}

impl<W: Write> TextSink<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }
}

impl<I: Display + Clone, W: Write> Sink<I> for TextSink<W> {
    fn emit(&mut self, patterns: &[FrequentPattern<I>]) -> Result<()> {
        for pattern in patterns {
            let items = pattern
                .items
                .iter()
                .map(|item| item.to_string())
                .collect::<Vec<_>>()
                .join(" ");
            writeln!(self.writer, "{items} : {}", pattern.expected_support)?;
        }
        Ok(())
    }
}

/// Sink that writes one JSON object per line (newline-delimited JSON),
/// for callers that want structured output instead of the reference
/// text format.
pub struct JsonSink<W> {
    writer: W,
}

impl<W: Write> JsonSink<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }
}

impl<I: Serialize + Clone, W: Write> Sink<I> for JsonSink<W> {
    fn emit(&mut self, patterns: &[FrequentPattern<I>]) -> Result<()> {
        for pattern in patterns {
            serde_json::to_writer(&mut self.writer, pattern)?;
            writeln!(self.writer)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn vec_sink_accumulates() {
        let mut sink = VecSink::new();
        sink.emit(&[FrequentPattern {
            items: vec!["a".to_string()],
            expected_support: 1.0,
        }])
        .unwrap();
        sink.emit(&[FrequentPattern {
            items: vec!["b".to_string()],
            expected_support: 2.0,
        }])
        .unwrap();
        assert_eq!(sink.into_inner().len(), 2);
    }

    #[test]
    fn text_sink_writes_reference_format() {
        let mut buf = Vec::new();
        {
            let mut sink = TextSink::new(&mut buf);
            sink.emit(&[FrequentPattern {
                items: vec!["a".to_string(), "b".to_string()],
                expected_support: 0.5,
            }])
            .unwrap();
        }
        assert_eq!(String::from_utf8(buf).unwrap(), "a b : 0.5\n");
    }

    #[test]
    fn json_sink_writes_one_object_per_line() {
        let mut buf = Vec::new();
        {
            let mut sink = JsonSink::new(&mut buf);
            sink.emit(&[
                FrequentPattern {
                    items: vec!["a".to_string()],
                    expected_support: 1.0,
                },
                FrequentPattern {
                    items: vec!["a".to_string(), "b".to_string()],
                    expected_support: 0.5,
                },
            ])
            .unwrap();
        }
        let text = String::from_utf8(buf).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0], r#"{"items":["a"],"expected_support":1.0}"#);
    }
}
