//! Charset probers.
//!
//! Every prober consumes the document chunk by chunk and keeps a running
//! confidence that the bytes are in its charset. Probers never fail: a byte
//! sequence a charset cannot produce simply rules that prober out.

mod escape;
mod group;
mod hebrew;
mod multibyte;
mod singlebyte;
mod utf1632;
mod utf8;

pub use escape::EscCharSetProber;
pub use group::CharSetGroupProber;
pub use hebrew::HebrewProber;
pub use multibyte::MultiByteCharSetProber;
pub use singlebyte::SingleByteCharSetProber;
pub use utf1632::Utf1632Prober;
pub use utf8::Utf8Prober;

use crate::enums::ProbingState;

pub(crate) const SURE_YES: f64 = 0.99;
pub(crate) const SURE_NO: f64 = 0.01;
/// Confidence above which a prober may stop early.
pub(crate) const SHORTCUT_THRESHOLD: f64 = 0.95;

/// Incremental detector for one charset (or one family, for groups).
///
/// `feed` may be called any number of times; state carried across chunk
/// boundaries is the prober's own business. Once a prober reports
/// [`ProbingState::FoundIt`] or [`ProbingState::NotMe`] further input is
/// ignored until [`reset`](CharSetProber::reset).
pub trait CharSetProber: Send {
    /// Returns the prober to its freshly constructed state.
    fn reset(&mut self);

    /// Consumes one chunk and returns the resulting state.
    fn feed(&mut self, buf: &[u8]) -> ProbingState;

    fn state(&self) -> ProbingState;

    /// Confidence in `[0, 1]` that the input seen so far is in this charset.
    fn confidence(&self) -> f64;

    /// Name of the charset this prober currently favours, if any.
    fn charset_name(&self) -> Option<&'static str>;

    /// Language of the text, `Some("")` when the charset is language-neutral.
    fn language(&self) -> Option<&'static str>;

    /// Member probers of an ensemble; empty for a leaf prober.
    fn children(&self) -> &[Box<dyn CharSetProber>] {
        &[]
    }

    fn is_active(&self) -> bool {
        self.state() != ProbingState::NotMe
    }
}

// Compile-time verification that probers can move between threads
const _: () = {
    fn assert_send<T: Send>() {}
    fn verify_thread_safety() {
        assert_send::<Box<dyn CharSetProber>>();
        assert_send::<CharSetGroupProber>();
        assert_send::<EscCharSetProber>();
        assert_send::<Utf1632Prober>();
    }
};
