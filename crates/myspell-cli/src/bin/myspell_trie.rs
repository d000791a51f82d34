// myspell-trie: Build a character trie from a MySpell dictionary.
//
// Expands every word of SYMBOL.aff + SYMBOL.dic into a trie and prints its
// statistics, or the stored strings with --list.
//
// Usage:
//   myspell-trie [-d DICT_PATH] SYMBOL [--base-only] [--transducer] [--list]
//
// Options:
//   -d, --dict-path PATH   Directory containing SYMBOL.aff and SYMBOL.dic
//   --base-only            Store only base forms
//   --transducer           Store every form as FORM*BASE
//   --list                 Print the stored strings in order
//   -h, --help             Print help

use std::io::{self, BufWriter};

use myspell_dict::{ProcessOptions, TrieOptions};

fn main() {
    myspell_cli::init_logging();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let (dict_path, mut args) = myspell_cli::parse_dict_path(&args);

    if myspell_cli::wants_help(&args) {
        println!("myspell-trie: Build a character trie from a MySpell dictionary.");
        println!();
        println!("Usage: myspell-trie [-d DICT_PATH] SYMBOL [--base-only] [--transducer] [--list]");
        println!();
        println!("Options:");
        println!("  -d, --dict-path PATH   Directory containing SYMBOL.aff and SYMBOL.dic");
        println!("  --base-only            Store only base forms");
        println!("  --transducer           Store every form as FORM*BASE");
        println!("  --list                 Print the stored strings in order");
        println!("  -h, --help             Print this help");
        return;
    }

    let trie_options = TrieOptions {
        only_base_forms: myspell_cli::take_flag(&mut args, &["--base-only"]),
        transducer: myspell_cli::take_flag(&mut args, &["--transducer"]),
    };
    let list = myspell_cli::take_flag(&mut args, &["--list"]);

    let symbol = match args.as_slice() {
        [symbol] => symbol.clone(),
        [] => myspell_cli::fatal("missing dictionary symbol (try --help)"),
        [_, extra, ..] => myspell_cli::fatal(&format!("unexpected argument: {extra}")),
    };

    let dictionary = myspell_cli::load_dictionary(dict_path.as_deref(), &symbol)
        .unwrap_or_else(|e| myspell_cli::fatal(&e));

    let options = ProcessOptions {
        break_on_error: false,
        ..ProcessOptions::default()
    };
    let (trie, report) = dictionary
        .build_trie(trie_options, &options)
        .unwrap_or_else(|e| myspell_cli::fatal(&e.to_string()));

    if list {
        let stdout = io::stdout();
        trie.write_words(BufWriter::new(stdout.lock()))
            .unwrap_or_else(|e| myspell_cli::fatal(&format!("failed to write output: {e}")));
    } else {
        println!("words:   {}", report.processed);
        println!("skipped: {}", report.skipped());
        println!("strings: {}", trie.word_count());
        println!("nodes:   {}", trie.node_count());
    }
}
