//! Behaviour shared by every stored entity.

/// A row with an integer primary key and a display name used for
/// filtering and ordering paged listings.
pub trait Entity: Clone + Send + Sync + 'static {
    /// Human-readable kind, used in log fields.
    const KIND: &'static str;

    /// Primary key.
    fn id(&self) -> i32;

    /// Overwrite the primary key (the store assigns it on insert).
    fn set_id(&mut self, id: i32);

    /// Field paging filters and sorts on.
    fn display_name(&self) -> &str;
}
