use serde::{Deserialize, Serialize};

/// Threading marker found in a run name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ThreadingMarker {
    /// No `ST` or `<digits>T` marker.
    Unmarked,
    /// Explicit ` ST` marker.
    SingleThreaded,
    /// `<digits>T` marker; `threads` is `None` when the count overflows.
    MultiThreaded { threads: Option<u32> },
}

/// Renderer identity and threading classification derived from a run name.
///
/// Run names are free-form (`"Blend2D 4T"`, `"Cairo ST"`, `"AGG"`), so the
/// markers are scanned once when the dataset is ingested.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunProfile {
    renderer: String,
    /// Literal `" ST"` substring.
    space_st: bool,
    /// Whitespace followed by `ST`.
    whitespace_st: bool,
    /// Whitespace, one or more ASCII digits, then `T`.
    thread_marker: bool,
    threads: Option<u32>,
}

impl RunProfile {
    #[must_use]
    pub fn parse(name: &str) -> Self {
        let (thread_marker, threads) = match find_thread_count(name) {
            Some(digits) => (true, digits.parse::<u32>().ok()),
            None => (false, None),
        };
        Self {
            renderer: renderer_identity(name),
            space_st: name.contains(" ST"),
            whitespace_st: has_whitespace_st(name),
            thread_marker,
            threads,
        }
    }

    /// Lowercased first space-delimited token of the run name.
    #[must_use]
    pub fn renderer(&self) -> &str {
        &self.renderer
    }

    #[must_use]
    pub fn marker(&self) -> ThreadingMarker {
        if self.thread_marker {
            ThreadingMarker::MultiThreaded {
                threads: self.threads,
            }
        } else if self.space_st || self.whitespace_st {
            ThreadingMarker::SingleThreaded
        } else {
            ThreadingMarker::Unmarked
        }
    }

    /// Explicit single-thread marker, or no thread-count marker at all.
    #[must_use]
    pub fn is_single_threaded_candidate(&self) -> bool {
        self.space_st || !self.thread_marker
    }

    /// Any threading designation (`ST` or `<digits>T`).
    #[must_use]
    pub fn is_multi_threaded_candidate(&self) -> bool {
        self.whitespace_st || self.thread_marker
    }
}

#[must_use]
pub fn renderer_identity(name: &str) -> String {
    name.split(' ').next().unwrap_or_default().to_lowercase()
}

fn has_whitespace_st(name: &str) -> bool {
    name.char_indices()
        .any(|(index, ch)| ch.is_whitespace() && name[index + ch.len_utf8()..].starts_with("ST"))
}

/// Digits of the first `<whitespace><digits>T` marker.
fn find_thread_count(name: &str) -> Option<&str> {
    for (index, ch) in name.char_indices() {
        if !ch.is_whitespace() {
            continue;
        }
        let rest = &name[index + ch.len_utf8()..];
        let digits_len = rest.bytes().take_while(u8::is_ascii_digit).count();
        if digits_len > 0 && rest[digits_len..].starts_with('T') {
            return Some(&rest[..digits_len]);
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renderer_is_lowercased_first_token() {
        assert_eq!(RunProfile::parse("Blend2D 4T").renderer(), "blend2d");
        assert_eq!(RunProfile::parse("vello-cpu ST").renderer(), "vello-cpu");
        assert_eq!(RunProfile::parse("AGG").renderer(), "agg");
    }

    #[test]
    fn markers_are_classified() {
        assert_eq!(
            RunProfile::parse("blend2d ST").marker(),
            ThreadingMarker::SingleThreaded
        );
        assert_eq!(
            RunProfile::parse("blend2d 16T").marker(),
            ThreadingMarker::MultiThreaded { threads: Some(16) }
        );
        assert_eq!(RunProfile::parse("cairo").marker(), ThreadingMarker::Unmarked);
        assert_eq!(
            RunProfile::parse("skia 99999999999T").marker(),
            ThreadingMarker::MultiThreaded { threads: None }
        );
    }

    #[test]
    fn single_threaded_candidates() {
        assert!(RunProfile::parse("blend2d ST").is_single_threaded_candidate());
        assert!(RunProfile::parse("cairo").is_single_threaded_candidate());
        assert!(!RunProfile::parse("qt 4Threads").is_single_threaded_candidate());
        assert!(!RunProfile::parse("blend2d 4T").is_single_threaded_candidate());
        // Tab-separated `ST` is not the literal " ST" marker but has no thread count either.
        assert!(RunProfile::parse("agg\tST").is_single_threaded_candidate());
    }

    #[test]
    fn multi_threaded_candidates() {
        assert!(RunProfile::parse("blend2d ST").is_multi_threaded_candidate());
        assert!(RunProfile::parse("blend2d 8T").is_multi_threaded_candidate());
        assert!(RunProfile::parse("agg\tST").is_multi_threaded_candidate());
        assert!(!RunProfile::parse("cairo").is_multi_threaded_candidate());
        assert!(!RunProfile::parse("blend2d T").is_multi_threaded_candidate());
        assert!(!RunProfile::parse("blend2d4T").is_multi_threaded_candidate());
    }
}
