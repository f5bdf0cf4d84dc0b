/// Reports the column count of the terminal the bar is drawn on.
///
/// Returning `None` means the size is unknown; the renderer then falls back
/// to the width of its last frame when clearing.
///
/// Implemented for closures, so tests can pin a width:
///
/// ```rust,ignore
/// let bar = ProgressRenderer::new(10)?.width_query(|| Some(80usize));
/// ```
pub trait WidthQuery {
    fn columns(&self) -> Option<usize>;
}

impl<F> WidthQuery for F
where F: Fn() -> Option<usize>
{
    fn columns(&self) -> Option<usize> {
        self()
    }
}

/// Queries the controlling terminal's window size.
#[derive(Debug, Clone, Copy, Default)]
pub struct TerminalWidth;

impl WidthQuery for TerminalWidth {
    fn columns(&self) -> Option<usize> {
        term_size::dimensions()
            .map(|(w, _)| w)
            .filter(|&w| w > 0)
    }
}

/// Never reports a size. Use this when the sink is not a terminal.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoTerminal;

impl WidthQuery for NoTerminal {
    fn columns(&self) -> Option<usize> {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn closures_are_queries() {
        let fixed = || Some(120usize);
        assert_eq!(fixed.columns(), Some(120));
        assert_eq!(NoTerminal.columns(), None);
    }
}
