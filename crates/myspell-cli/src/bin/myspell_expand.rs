// myspell-expand: Generate the full word-form list of a MySpell dictionary.
//
// Loads SYMBOL.aff and SYMBOL.dic, expands every word into all of its forms
// and writes one comma-separated line per word (base form first).
//
// Usage:
//   myspell-expand [-d DICT_PATH] SYMBOL [-o OUT] [--ignore FILE] [--keep-going] [-j N]
//
// Options:
//   -d, --dict-path PATH   Directory containing SYMBOL.aff and SYMBOL.dic
//   -o, --output FILE      Output file (default: stdout)
//   --ignore FILE          File of base forms to leave out, one per line
//   --keep-going           Skip words that fail instead of stopping
//   -j, --jobs N           Number of expansion threads
//   -h, --help             Print help

use std::fs::File;
use std::io::{self, BufReader, BufWriter, Write};

use myspell_dict::writer::{FullDictionaryWriter, WriterOptions, read_ignore_list};
use myspell_dict::{Dictionary, ProcessOptions, ProcessReport};

fn main() {
    myspell_cli::init_logging();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let (dict_path, mut args) = myspell_cli::parse_dict_path(&args);

    if myspell_cli::wants_help(&args) {
        println!("myspell-expand: Generate the full word-form list of a MySpell dictionary.");
        println!();
        println!(
            "Usage: myspell-expand [-d DICT_PATH] SYMBOL [-o OUT] [--ignore FILE] [--keep-going] [-j N]"
        );
        println!();
        println!("Writes one line per word: the base form followed by every derived");
        println!("form, separated by commas, in the dictionary's charset.");
        println!();
        println!("Options:");
        println!("  -d, --dict-path PATH   Directory containing SYMBOL.aff and SYMBOL.dic");
        println!("  -o, --output FILE      Output file (default: stdout)");
        println!("  --ignore FILE          File of base forms to leave out, one per line");
        println!("  --keep-going           Skip words that fail instead of stopping");
        println!("  -j, --jobs N           Number of expansion threads (default: 1)");
        println!("  -h, --help             Print this help");
        return;
    }

    let keep_going = myspell_cli::take_flag(&mut args, &["--keep-going"]);
    let output = myspell_cli::take_option(&mut args, &["-o", "--output"]);
    let ignore = myspell_cli::take_option(&mut args, &["--ignore"]);
    let threads = match myspell_cli::take_option(&mut args, &["-j", "--jobs"]) {
        Some(n) => n
            .parse::<usize>()
            .unwrap_or_else(|_| myspell_cli::fatal(&format!("invalid thread count: {n}"))),
        None => 1,
    };

    let symbol = match args.as_slice() {
        [symbol] => symbol.clone(),
        [] => myspell_cli::fatal("missing dictionary symbol (try --help)"),
        [_, extra, ..] => myspell_cli::fatal(&format!("unexpected argument: {extra}")),
    };

    let dictionary = myspell_cli::load_dictionary(dict_path.as_deref(), &symbol)
        .unwrap_or_else(|e| myspell_cli::fatal(&e));

    let ignored = match ignore {
        Some(path) => File::open(&path)
            .map(BufReader::new)
            .and_then(read_ignore_list)
            .unwrap_or_else(|e| myspell_cli::fatal(&format!("failed to read {path}: {e}"))),
        None => Default::default(),
    };

    let options = ProcessOptions {
        break_on_error: !keep_going,
        threads,
        ..ProcessOptions::default()
    };
    let writer_options = WriterOptions {
        encoding: Some(dictionary.encoding()),
        ..WriterOptions::default()
    };

    let report = match output {
        Some(path) => {
            let file = File::create(&path)
                .unwrap_or_else(|e| myspell_cli::fatal(&format!("failed to create {path}: {e}")));
            expand(&dictionary, BufWriter::new(file), &writer_options, ignored, &options)
        }
        None => {
            let stdout = io::stdout();
            expand(&dictionary, BufWriter::new(stdout.lock()), &writer_options, ignored, &options)
        }
    }
    .unwrap_or_else(|e| myspell_cli::fatal(&e));

    log::info!(
        "{} words written, {} skipped",
        report.processed,
        report.skipped()
    );
    if !report.is_clean() {
        eprintln!("{} word(s) skipped", report.skipped());
    }
}

fn expand<W: Write>(
    dictionary: &Dictionary,
    out: W,
    writer_options: &WriterOptions,
    ignored: impl IntoIterator<Item = String>,
    options: &ProcessOptions,
) -> Result<ProcessReport, String> {
    let mut writer = FullDictionaryWriter::with_options(out, writer_options).with_ignored(ignored);
    let report = dictionary
        .process_all_forms(&mut writer, options)
        .map_err(|e| e.to_string())?;
    writer
        .into_inner()
        .map_err(|e| format!("failed to write output: {e}"))?;
    Ok(report)
}
