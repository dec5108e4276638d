//! Command execution: wiring between arguments, the loader, and the report
//! builder.

use anyhow::Context;

use senti_cli::predictions::read_predictions;
use senti_ingest::{LoadOutcome, Loader};
use senti_model::{DatePolicy, IdSource, LabelVocabulary, LoadOptions, Report};
use senti_report::build_report;

use crate::cli::{IdSourceArg, LoadArgs, ReportArgs, VocabularyArg};

pub fn run_load(args: &LoadArgs) -> anyhow::Result<(LoadOutcome, LabelVocabulary)> {
    let options = load_options(args);
    let vocabulary = options.vocabulary.clone();
    let outcome = Loader::new(options)
        .load(&args.input)
        .with_context(|| format!("load {}", args.input.display()))?;
    Ok((outcome, vocabulary))
}

pub fn run_report(args: &ReportArgs) -> anyhow::Result<(LoadOutcome, Report)> {
    let (outcome, vocabulary) = run_load(&args.load)?;
    let predictions = read_predictions(&args.predictions)?;
    let report = build_report(&predictions, &outcome.records, &vocabulary)
        .context("build report from predictions")?;
    Ok((outcome, report))
}

fn load_options(args: &LoadArgs) -> LoadOptions {
    let vocabulary = match args.vocabulary {
        VocabularyArg::Sentiment3 => LabelVocabulary::sentiment3(),
        VocabularyArg::Polarity2 => LabelVocabulary::polarity2(),
    };
    let mut options = LoadOptions::new(vocabulary).with_id_source(match args.id_source {
        IdSourceArg::Column => IdSource::Column,
        IdSourceArg::Ordinal => IdSource::Ordinal,
    });
    if let Some(min_text_length) = args.min_text_length {
        options = options.with_min_text_length(min_text_length);
    }
    if args.date_default {
        options = options.with_date_policy(DatePolicy::FixedDefault);
    }
    options
}
