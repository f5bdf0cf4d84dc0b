/// Errors reported by the renderer.
///
/// Rejected progress values are not errors; [`ProgressRenderer::set`] just
/// returns `false` for them.
///
/// [`ProgressRenderer::set`]: crate::ProgressRenderer::set
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A renderer needs a positive total.
    #[error("progress total must be greater than zero")]
    ZeroTotal,
    /// A format needs at least one fill glyph.
    #[error("format fill sequence must contain at least one glyph")]
    EmptyFill,
    /// Writing a frame to the output sink failed.
    #[error("failed to write progress line: {0}")]
    Write(#[from] std::io::Error),
}
