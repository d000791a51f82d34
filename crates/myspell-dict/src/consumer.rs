// The capability that receives the forms generated for each word.
// Origin: WordFormsProcessor.java

use std::io;

/// Error returned by a consumer that cannot take a word's forms.
#[derive(Debug, thiserror::Error)]
pub enum ConsumerError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
    #[error("forms rejected: {0}")]
    Rejected(String),
}

/// Receives the surface forms of one word at a time.
///
/// `forms[0]` is always the base form; the remaining elements are the
/// distinct derived forms in ascending order.
pub trait WordFormsConsumer {
    fn consume(&mut self, forms: &[String]) -> Result<(), ConsumerError>;
}

impl<F> WordFormsConsumer for F
where
    F: FnMut(&[String]) -> Result<(), ConsumerError>,
{
    fn consume(&mut self, forms: &[String]) -> Result<(), ConsumerError> {
        self(forms)
    }
}

/// Collects every word's forms in memory.
impl WordFormsConsumer for Vec<Vec<String>> {
    fn consume(&mut self, forms: &[String]) -> Result<(), ConsumerError> {
        self.push(forms.to_vec());
        Ok(())
    }
}
