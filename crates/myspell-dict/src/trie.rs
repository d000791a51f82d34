// Character trie built from generated word forms.
// Origin: MySpellTreeBuilder.java

use std::io::{self, Write};

use hashbrown::HashMap;

use crate::consumer::{ConsumerError, WordFormsConsumer};

/// Separator between a surface form and its base form in transducer mode.
pub const TRANSDUCER_SEPARATOR: char = '*';

/// What [`TrieBuilder`] stores for each word.
#[derive(Debug, Clone, Default)]
pub struct TrieOptions {
    /// Store only the base form of every word.
    pub only_base_forms: bool,
    /// Store every form as `form*base` so a lookup yields the base form.
    pub transducer: bool,
}

#[derive(Debug, Default)]
struct TrieNode {
    children: HashMap<char, TrieNode>,
    terminal: bool,
}

/// In-memory character trie fed by the expansion driver.
#[derive(Debug, Default)]
pub struct TrieBuilder {
    root: TrieNode,
    options: TrieOptions,
    word_count: usize,
    node_count: usize,
}

impl TrieBuilder {
    pub fn new(options: TrieOptions) -> Self {
        Self {
            options,
            ..Self::default()
        }
    }

    pub fn options(&self) -> &TrieOptions {
        &self.options
    }

    /// Insert a string. Returns `true` if it was not yet stored.
    pub fn insert(&mut self, word: &str) -> bool {
        let mut node = &mut self.root;
        for c in word.chars() {
            node = node.children.entry(c).or_insert_with(|| {
                self.node_count += 1;
                TrieNode::default()
            });
        }
        if node.terminal {
            return false;
        }
        node.terminal = true;
        self.word_count += 1;
        true
    }

    pub fn contains(&self, word: &str) -> bool {
        let mut node = &self.root;
        for c in word.chars() {
            match node.children.get(&c) {
                Some(child) => node = child,
                None => return false,
            }
        }
        node.terminal
    }

    /// Number of distinct strings stored.
    pub fn word_count(&self) -> usize {
        self.word_count
    }

    /// Number of nodes below the root.
    pub fn node_count(&self) -> usize {
        self.node_count
    }

    /// All stored strings in ascending code-point order.
    pub fn words(&self) -> Vec<String> {
        let mut out = Vec::with_capacity(self.word_count);
        let mut prefix = String::new();
        collect(&self.root, &mut prefix, &mut out);
        out
    }

    /// Write all stored strings, one per line, in ascending order.
    pub fn write_words<W: Write>(&self, mut out: W) -> io::Result<()> {
        for word in self.words() {
            writeln!(out, "{word}")?;
        }
        out.flush()
    }
}

fn collect(node: &TrieNode, prefix: &mut String, out: &mut Vec<String>) {
    if node.terminal {
        out.push(prefix.clone());
    }
    let mut labels: Vec<&char> = node.children.keys().collect();
    labels.sort_unstable();
    for &c in labels {
        prefix.push(c);
        collect(&node.children[&c], prefix, out);
        prefix.pop();
    }
}

impl WordFormsConsumer for TrieBuilder {
    fn consume(&mut self, forms: &[String]) -> Result<(), ConsumerError> {
        let Some(base) = forms.first() else {
            return Ok(());
        };
        if self.options.only_base_forms {
            self.insert(base);
            return Ok(());
        }
        for form in forms {
            if self.options.transducer {
                self.insert(&format!("{form}{TRANSDUCER_SEPARATOR}{base}"));
            } else {
                self.insert(form);
            }
        }
        Ok(())
    }
}
