/// A state value that supports shallow merging.
///
/// Merge-style writes on a store combine the current state with a partial
/// value: fields present in the partial overwrite their counterparts, and
/// every other field is retained. `merge` produces a new value; the
/// receiver is never mutated.
///
/// [`Record`](crate::Record) implements this for flat key-value state.
/// Struct state implements it with an all-`Option` partial:
///
/// ```
/// use ripple::State;
///
/// #[derive(Clone, Debug, PartialEq)]
/// struct Settings {
///     volume: u8,
///     muted: bool,
/// }
///
/// #[derive(Default)]
/// struct SettingsPatch {
///     volume: Option<u8>,
///     muted: Option<bool>,
/// }
///
/// impl State for Settings {
///     type Partial = SettingsPatch;
///
///     fn merge(&self, patch: SettingsPatch) -> Self {
///         Settings {
///             volume: patch.volume.unwrap_or(self.volume),
///             muted: patch.muted.unwrap_or(self.muted),
///         }
///     }
/// }
///
/// let current = Settings { volume: 7, muted: false };
/// let next = current.merge(SettingsPatch { muted: Some(true), ..Default::default() });
/// assert_eq!(next, Settings { volume: 7, muted: true });
/// ```
pub trait State: Clone {
    /// The partial-update type accepted by merge-style writes.
    type Partial;

    /// Produce a new state with the partial's fields overlaid on `self`.
    fn merge(&self, partial: Self::Partial) -> Self;
}
