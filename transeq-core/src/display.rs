// transeq-core - Sequence rendering
// Copyright (c) 2025 Tom Waddington. MIT licensed.

//! String rendering for sequences: `(1 2 3)`, `()` for empty.

use std::cell::Cell;
use std::fmt::{self, Write};

use crate::error::Result;
use crate::seq::{Element, Seq};

// Thread-local print settings
thread_local! {
    /// Maximum number of elements to render in a sequence.
    /// None means unlimited, Some(n) means render at most n elements.
    /// Default: None (unlimited)
    static PRINT_LENGTH: Cell<Option<usize>> = const { Cell::new(None) };
}

/// Get the current print-length setting.
pub fn get_print_length() -> Option<usize> {
    PRINT_LENGTH.with(|pl| pl.get())
}

/// Set the print-length setting. Returns the previous value.
pub fn set_print_length(len: Option<usize>) -> Option<usize> {
    PRINT_LENGTH.with(|pl| pl.replace(len))
}

impl<T: Element + fmt::Display> Seq<T> {
    /// Render the sequence, realizing as many elements as the print-length
    /// setting allows. Realization errors are returned rather than hidden.
    pub fn render(&self) -> Result<String> {
        let mut out = String::new();
        self.render_into(&mut out)?;
        Ok(out)
    }

    fn render_into(&self, out: &mut String) -> Result<()> {
        let limit = get_print_length();
        let mut cursor = self.resolve()?;
        let mut count = 0usize;
        out.push('(');
        loop {
            if limit.is_some_and(|max| count >= max) {
                if !cursor.is_empty() {
                    if count > 0 {
                        out.push(' ');
                    }
                    out.push_str("...");
                }
                break;
            }
            let Some(item) = cursor.first()? else {
                break;
            };
            if count > 0 {
                out.push(' ');
            }
            // Writing into a String cannot fail
            let _ = write!(out, "{}", item);
            count += 1;
            cursor = cursor.next()?;
        }
        out.push(')');
        Ok(())
    }
}

impl<T: Element + fmt::Display> fmt::Display for Seq<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rendered = self.render().map_err(|e| {
            log::debug!("sequence rendering aborted: {}", e);
            fmt::Error
        })?;
        f.write_str(&rendered)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generators::range_until;

    #[test]
    fn test_render_empty() {
        assert_eq!(Seq::<i64>::empty().to_string(), "()");
    }

    #[test]
    fn test_render_nested() {
        let inner = Seq::cons(1, Seq::cons(2, Seq::empty()));
        let outer = Seq::cons(inner, Seq::cons(Seq::empty(), Seq::empty()));
        assert_eq!(outer.to_string(), "((1 2) ())");
    }

    #[test]
    fn test_print_length_truncates() {
        let previous = set_print_length(Some(3));
        let rendered = range_until(10i64).to_string();
        set_print_length(previous);
        assert_eq!(rendered, "(0 1 2 ...)");
    }

    #[test]
    fn test_print_length_exact_fit_has_no_ellipsis() {
        let previous = set_print_length(Some(3));
        let rendered = range_until(3i64).to_string();
        set_print_length(previous);
        assert_eq!(rendered, "(0 1 2)");
    }
}
