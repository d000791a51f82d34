// Per-word expansion loop: expand every pattern and feed the consumer.
// Origin: MySpellDictionary.java (processAllForms)

use std::thread;

use myspell_core::{FormatError, RuleTable, WordPattern};

use crate::consumer::{ConsumerError, WordFormsConsumer};

/// Words between two progress messages.
const PROGRESS_INTERVAL: usize = 1000;

/// Options for [`process_all_forms`].
#[derive(Debug, Clone)]
pub struct ProcessOptions {
    /// Stop at the first failing word instead of logging it and moving on.
    pub break_on_error: bool,
    /// Number of expansion threads. `0` and `1` both mean "expand on the
    /// calling thread".
    pub threads: usize,
    /// Patterns expanded per parallel round. Only used when `threads > 1`.
    pub batch_size: usize,
}

impl Default for ProcessOptions {
    fn default() -> Self {
        Self {
            break_on_error: true,
            threads: 1,
            batch_size: 1024,
        }
    }
}

/// A single word that could not be processed.
#[derive(Debug, thiserror::Error)]
pub enum ProcessingError {
    #[error("cannot expand word '{base_form}': {source}")]
    Expansion {
        base_form: String,
        source: FormatError,
    },
    #[error("consumer failed on word '{base_form}': {source}")]
    Consumer {
        base_form: String,
        source: ConsumerError,
    },
}

impl ProcessingError {
    /// Base form of the word that failed.
    pub fn base_form(&self) -> &str {
        match self {
            ProcessingError::Expansion { base_form, .. }
            | ProcessingError::Consumer { base_form, .. } => base_form,
        }
    }
}

/// Outcome of a completed run.
#[derive(Debug, Default)]
pub struct ProcessReport {
    /// Words whose forms reached the consumer.
    pub processed: usize,
    /// Words skipped because of an error, in input order.
    pub failures: Vec<ProcessingError>,
}

impl ProcessReport {
    pub fn skipped(&self) -> usize {
        self.failures.len()
    }

    pub fn is_clean(&self) -> bool {
        self.failures.is_empty()
    }
}

/// Expand every pattern in order and pass its forms to `consumer`.
///
/// The consumer sees words in input order whatever the thread count. With
/// `break_on_error` the first failure is returned; otherwise failures are
/// logged, collected in the report and processing continues.
pub fn process_all_forms<C>(
    rules: &RuleTable,
    words: &[WordPattern],
    consumer: &mut C,
    options: &ProcessOptions,
) -> Result<ProcessReport, ProcessingError>
where
    C: WordFormsConsumer + ?Sized,
{
    let mut report = ProcessReport::default();

    if options.threads <= 1 {
        for pattern in words {
            let expanded = pattern.expand(rules);
            deliver(pattern, expanded, consumer, options, &mut report)?;
        }
    } else {
        let batch_size = options.batch_size.max(1);
        for batch in words.chunks(batch_size) {
            let expanded = expand_parallel(rules, batch, options.threads);
            for (pattern, forms) in batch.iter().zip(expanded) {
                deliver(pattern, forms, consumer, options, &mut report)?;
            }
        }
    }

    log::debug!(
        "processed {} words, skipped {}",
        report.processed,
        report.skipped()
    );
    Ok(report)
}

/// Hand one word's expansion result to the consumer and record the outcome.
fn deliver<C>(
    pattern: &WordPattern,
    expanded: Result<Vec<String>, FormatError>,
    consumer: &mut C,
    options: &ProcessOptions,
    report: &mut ProcessReport,
) -> Result<(), ProcessingError>
where
    C: WordFormsConsumer + ?Sized,
{
    let outcome = match expanded {
        Ok(forms) => consumer
            .consume(&forms)
            .map_err(|source| ProcessingError::Consumer {
                base_form: pattern.base_form().to_string(),
                source,
            }),
        Err(source) => Err(ProcessingError::Expansion {
            base_form: pattern.base_form().to_string(),
            source,
        }),
    };

    match outcome {
        Ok(()) => {
            report.processed += 1;
            let done = report.processed + report.skipped();
            if done % PROGRESS_INTERVAL == 0 {
                log::debug!("{done} words processed");
            }
            Ok(())
        }
        Err(err) if options.break_on_error => Err(err),
        Err(err) => {
            log::warn!("skipping word: {err}");
            report.failures.push(err);
            Ok(())
        }
    }
}

/// Expand a batch on up to `threads` scoped workers, keeping input order.
fn expand_parallel(
    rules: &RuleTable,
    batch: &[WordPattern],
    threads: usize,
) -> Vec<Result<Vec<String>, FormatError>> {
    let chunk_size = batch.len().div_ceil(threads).max(1);
    thread::scope(|scope| {
        let handles: Vec<_> = batch
            .chunks(chunk_size)
            .map(|chunk| {
                scope.spawn(move || {
                    chunk
                        .iter()
                        .map(|pattern| pattern.expand(rules))
                        .collect::<Vec<_>>()
                })
            })
            .collect();

        handles
            .into_iter()
            .flat_map(|handle| {
                handle
                    .join()
                    .unwrap_or_else(|panic| std::panic::resume_unwind(panic))
            })
            .collect()
    })
}
