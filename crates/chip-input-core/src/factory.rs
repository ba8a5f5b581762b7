/// Host-supplied token creation for text typed into the chip input.
use crate::token::{IdGenerator, Token};

/// What a [`TokenFactory`] decided for a piece of text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Creation {
    Created(Token),
    /// The host refused the text (too long, duplicate, invalid...).
    Rejected,
}

/// Turns trimmed, non-empty text into a token.
pub trait TokenFactory {
    fn create(&mut self, text: &str) -> Creation;
}

impl<F> TokenFactory for F
where
    F: FnMut(&str) -> Creation,
{
    fn create(&mut self, text: &str) -> Creation {
        self(text)
    }
}

/// Default factory: one token per text, label and value both set to the text.
///
/// Labels longer than `max_label_len` characters are rejected; `0` disables
/// the limit.
#[derive(Debug, Clone)]
pub struct LabelFactory<G> {
    ids: G,
    max_label_len: usize,
}

impl<G: IdGenerator> LabelFactory<G> {
    pub fn new(ids: G) -> Self {
        Self {
            ids,
            max_label_len: 0,
        }
    }

    pub fn with_max_label_len(mut self, max_label_len: usize) -> Self {
        self.max_label_len = max_label_len;
        self
    }

    pub fn max_label_len(&self) -> usize {
        self.max_label_len
    }

    /// Gives access to the id source, e.g. to decode pasted text with it.
    pub fn ids_mut(&mut self) -> &mut G {
        &mut self.ids
    }
}

impl<G: IdGenerator> TokenFactory for LabelFactory<G> {
    fn create(&mut self, text: &str) -> Creation {
        if self.max_label_len > 0 && text.chars().count() > self.max_label_len {
            tracing::debug!(
                "Rejecting chip label of {} chars (limit {})",
                text.chars().count(),
                self.max_label_len
            );
            return Creation::Rejected;
        }
        Creation::Created(Token::new(self.ids.next_id(), text))
    }
}
