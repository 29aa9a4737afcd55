pub(crate) mod compositor;
pub(crate) mod reveal;
pub(crate) mod scrubber;
pub(crate) mod timeline;
