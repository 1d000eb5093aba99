use std::time::Duration;

/// What the typewriter shows at one instant
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TypedFrame {
    /// Number of fully typed lines
    pub completed: usize,
    /// Line being typed and how many of its characters are visible
    pub current: Option<(usize, usize)>,
}

/// Types code lines one character at a time
///
/// The schedule is a pure function of elapsed time: after `start_delay`,
/// each line shows one more character every `type_speed`, is committed one
/// tick after its last character, then the next line starts after
/// `line_delay`.
#[derive(Debug, Clone)]
pub struct Typewriter {
    lines: Vec<String>,
    start_delay: Duration,
    type_speed: Duration,
    line_delay: Duration,
}

impl Typewriter {
    pub fn new(
        lines: Vec<String>,
        start_delay: Duration,
        type_speed: Duration,
        line_delay: Duration,
    ) -> Self {
        Self {
            lines,
            start_delay,
            type_speed,
            line_delay,
        }
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// Time a line occupies, including the commit tick
    fn line_duration(&self, line: &str) -> Duration {
        self.type_speed * (line.chars().count() as u32 + 1)
    }

    pub fn frame_at(&self, elapsed: Duration) -> TypedFrame {
        let mut t = self.start_delay;
        if elapsed < t {
            return TypedFrame {
                completed: 0,
                current: None,
            };
        }

        for (i, line) in self.lines.iter().enumerate() {
            let line_end = t + self.line_duration(line);
            if elapsed < line_end {
                let speed = self.type_speed.as_millis().max(1);
                let typed = ((elapsed - t).as_millis() / speed) as usize;
                return TypedFrame {
                    completed: i,
                    current: Some((i, typed.min(line.chars().count()))),
                };
            }

            t = line_end + self.line_delay;
            if elapsed < t && i + 1 < self.lines.len() {
                return TypedFrame {
                    completed: i + 1,
                    current: None,
                };
            }
        }

        TypedFrame {
            completed: self.lines.len(),
            current: None,
        }
    }

    /// Elapsed time at which every line has been committed
    pub fn total_duration(&self) -> Duration {
        let typing: Duration = self.lines.iter().map(|l| self.line_duration(l)).sum();
        let pauses = self.line_delay * (self.lines.len().saturating_sub(1) as u32);
        self.start_delay + typing + pauses
    }

    pub fn is_finished_at(&self, elapsed: Duration) -> bool {
        elapsed >= self.total_duration()
    }
}

/// First `chars` characters of `line`
pub fn typed_prefix(line: &str, chars: usize) -> &str {
    match line.char_indices().nth(chars) {
        Some((byte, _)) => &line[..byte],
        None => line,
    }
}
