use trigramplexity::{Context, Error, PerplexityCalculator, TrigramModel, START, STOP};

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

#[test]
fn knows_perplexity() {
    let model = reference_model();
    let sentences = vec![
        vec!["the", "dog", "runs", STOP],
        vec!["the", "cat", "walks", STOP],
        vec!["the", "dog", "runs", STOP],
    ];

    let perplexity = PerplexityCalculator::new(&model).calculate(&sentences);
    assert_eq!(perplexity, Ok(1.189));
}

#[test]
fn unrounded_perplexity_is_fourth_root_of_two() {
    let model = reference_model();
    let sentences = vec![vec!["the", "cat", "walks", STOP]];

    let perplexity = PerplexityCalculator::new(&model)
        .calculate_unrounded(&sentences)
        .unwrap();
    assert!((perplexity - 2f64.powf(0.25)).abs() < 1e-12);
}

#[test]
fn stop_rule_keeps_both_contexts() {
    let model = reference_model();
    let rule = model.rule_for(STOP).unwrap();

    assert_eq!(rule.probability_given(&Context::new("cat", "walks")), Some(1.0));
    assert_eq!(rule.probability_given(&Context::new("dog", "runs")), Some(1.0));
    assert_eq!(model.len(), 6);
}

#[test]
fn unknown_word_aborts_the_corpus() {
    let model = reference_model();
    let sentences = vec![
        vec!["the", "dog", "runs", STOP],
        vec!["the", "bird", "flies", STOP],
    ];

    let result = PerplexityCalculator::new(&model).calculate(&sentences);
    assert_eq!(
        result,
        Err(Error::UnknownWord {
            word: "bird".to_string()
        })
    );
}

#[test]
fn undefined_context_aborts_the_corpus() {
    let model = reference_model();
    let sentences = vec![vec!["the", "dog", "walks", STOP]];

    let result = PerplexityCalculator::new(&model).calculate(&sentences);
    assert_eq!(
        result,
        Err(Error::UndefinedContext {
            word: "walks".to_string(),
            context: Context::new("the", "dog"),
        })
    );
}

#[test]
fn errors_read_as_messages() {
    let err = Error::UndefinedContext {
        word: "walks".to_string(),
        context: Context::new("the", "dog"),
    };
    assert_eq!(err.to_string(), "no probability for 'walks' given (the, dog)");
}
