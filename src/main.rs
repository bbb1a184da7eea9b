use log::{debug, info};
use tokio::io::{AsyncBufReadExt, BufReader};

use trigramplexity::tokenize::tokenize_corpus;
use trigramplexity::{Context, PerplexityCalculator, TrigramModel, START, STOP};

/// The reference table: "the dog runs" and "the cat walks", each a coin flip
/// on the second word.
fn reference_model() -> TrigramModel {
    let mut model = TrigramModel::new();
    model.add_rule("the", Context::new(START, START), 1.0);
    model.add_rule("cat", Context::new(START, "the"), 0.5);
    model.add_rule(STOP, Context::new("cat", "walks"), 1.0);
    model.add_rule(STOP, Context::new("dog", "runs"), 1.0);
    model.add_rule("dog", Context::new(START, "the"), 0.5);
    model.add_rule("walks", Context::new("the", "cat"), 1.0);
    model.add_rule("runs", Context::new("the", "dog"), 1.0);
    model
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::init();

    let model = reference_model();
    let conditions: usize = model.rules().map(|rule| rule.len()).sum();
    info!("Loaded model with {} words and {} conditions", model.len(), conditions);
    for rule in model.rules() {
        let contexts: Vec<String> = rule.contexts().map(|c| c.to_string()).collect();
        debug!("{} | {}", rule.word(), contexts.join(" "));
    }
    let calculator = PerplexityCalculator::new(&model);

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    loop {
        println!("Enter sentences (separate several with '|'):");

        let Some(line) = lines.next_line().await? else {
            break;
        };
        let corpus = tokenize_corpus(line.trim());
        if corpus.is_empty() {
            continue;
        }

        for sentence in &corpus {
            match model.probability_of(sentence.as_slice()) {
                Ok(p) => println!("{}: probability {}", sentence.join(" "), p),
                Err(e) => println!("{}: {}", sentence.join(" "), e),
            }
        }
        match calculator.calculate(&corpus) {
            Ok(perplexity) => println!("perplexity: {}\n", perplexity),
            Err(e) => println!("error: {}\n", e),
        }
    }
    Ok(())
}
