//! Text output formatter

use std::path::Path;

use wordwarn_core::HighlightOptions;

pub fn output_text(path: &Path, words: &[String], options: &HighlightOptions) {
    if !words.is_empty() {
        println!("\n{}:", path.display());
        for word in words {
            println!("  {} ({})", word, word.chars().count());
        }
    }

    let bounds = if options.is_inclusive {
        format!("{} to {}", options.min_length, options.max_length)
    } else {
        format!("strictly between {} and {}", options.min_length, options.max_length)
    };

    println!();
    println!("Found {} words of {} characters", words.len(), bounds);
}
