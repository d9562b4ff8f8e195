use crate::infra::{load_store, parse_answer};
use ayurveda_shop::catalog::{by_dosha, CatalogReader, Product};
use ayurveda_shop::config::StorefrontConfig;
use ayurveda_shop::dosha::{Dosha, DoshaAffinity};
use ayurveda_shop::error::AppError;
use ayurveda_shop::quiz::{
    AnswerSet, DoshaProfile, DoshaQuizService, QuizOutcome, QuizServiceError,
    RecommendationSelector,
};
use clap::Args;
use std::path::PathBuf;
use std::sync::Arc;

#[derive(Args, Debug)]
pub(crate) struct QuizScoreArgs {
    /// Answer as QUESTION=TAG, e.g. `--answer 1=vata`. Repeat for each question.
    #[arg(long = "answer", value_parser = parse_answer)]
    pub(crate) answers: Vec<(String, String)>,
    /// Catalog CSV to recommend from instead of the built-in catalog
    #[arg(long)]
    pub(crate) csv: Option<PathBuf>,
    /// Maximum number of recommended products (at least 1)
    #[arg(
        long,
        value_parser = parse_limit,
        default_value_t = StorefrontConfig::DEFAULT_RECOMMENDATION_LIMIT
    )]
    pub(crate) limit: usize,
    /// Print the result as JSON instead of a summary
    #[arg(long)]
    pub(crate) json: bool,
}

#[derive(Args, Debug)]
pub(crate) struct CatalogListArgs {
    /// Only show products suited to this dosha (vata, pitta, kapha, tri-dosha)
    #[arg(long, value_parser = parse_affinity)]
    pub(crate) dosha: Option<DoshaAffinity>,
    /// Catalog CSV to list instead of the built-in catalog
    #[arg(long)]
    pub(crate) csv: Option<PathBuf>,
}

pub(crate) fn run_quiz_score(args: QuizScoreArgs) -> Result<(), AppError> {
    let QuizScoreArgs {
        answers,
        csv,
        limit,
        json,
    } = args;

    let store = Arc::new(load_store(csv.as_deref())?);
    let service = DoshaQuizService::new(
        store.clone(),
        store,
        RecommendationSelector::new(limit),
    );
    let answers: AnswerSet = answers.into_iter().collect();
    let outcome = service.submit(&answers).map_err(|err| match err {
        QuizServiceError::Repository(err) => AppError::Repository(err),
    })?;

    if json {
        let rendered = serde_json::to_string_pretty(&outcome).map_err(std::io::Error::from)?;
        println!("{rendered}");
    } else {
        print!("{}", render_quiz_outcome(&outcome));
    }
    Ok(())
}

pub(crate) fn run_catalog_list(args: CatalogListArgs) -> Result<(), AppError> {
    let store = load_store(args.csv.as_deref())?;
    let products = store.all_products()?;

    let listed: Vec<&Product> = match args.dosha {
        Some(affinity) => by_dosha(&products, affinity).collect(),
        None => products.iter().collect(),
    };

    print!("{}", render_catalog(&listed));
    Ok(())
}

fn parse_affinity(raw: &str) -> Result<DoshaAffinity, String> {
    raw.trim().parse().map_err(|err| format!("{err}"))
}

fn parse_limit(raw: &str) -> Result<usize, String> {
    match raw.trim().parse::<usize>() {
        Ok(limit) if limit > 0 => Ok(limit),
        _ => Err(format!("`{raw}` is not a positive integer")),
    }
}

pub(crate) fn render_quiz_outcome(outcome: &QuizOutcome) -> String {
    let score = &outcome.score;
    let profile = DoshaProfile::for_dosha(score.dominant_dosha);
    let mut lines = vec![format!("Dominant dosha: {}", profile.name)];

    lines.extend(
        Dosha::ordered()
            .into_iter()
            .map(|dosha| format!("  {:<6} {}", dosha.tag(), score.tally.count(dosha))),
    );
    lines.push(format!("Elements: {}", profile.elements.join(" + ")));

    if outcome.recommendations.is_empty() {
        lines.push("No matching products in the catalog.".to_string());
    } else {
        lines.push("Recommended products:".to_string());
        lines.extend(
            outcome
                .recommendations
                .iter()
                .map(|product| format!("  {}", product_line(product))),
        );
    }

    lines.push("Balance tips:".to_string());
    lines.extend(profile.balance_tips.iter().map(|tip| format!("  - {tip}")));
    join_lines(lines)
}

pub(crate) fn render_catalog(products: &[&Product]) -> String {
    let mut lines: Vec<String> = products.iter().map(|product| product_line(product)).collect();
    lines.push(format!("{} product(s)", products.len()));
    join_lines(lines)
}

fn join_lines(lines: Vec<String>) -> String {
    let mut output = lines.join("\n");
    output.push('\n');
    output
}

fn product_line(product: &Product) -> String {
    let dosha = product
        .dosha_type
        .map(|affinity| affinity.tag())
        .unwrap_or("-");
    format!(
        "#{:<3} {:<32} {:>8.2}  {:<10} {}",
        product.id.0, product.name, product.price, dosha, product.category
    )
}
