use smearbench::core::random::Seed;
use smearbench::core::{Dataset, Variable};
use smearbench::estimators::{Estimator, LeastSquares, predict_all};
use smearbench::evaluation::{Binning, EvaluationError, Predictions, ResidualEvaluator};
use smearbench::export::DelimitedExporter;
use smearbench::streams::{GenerationMode, generate};
use smearbench::utils::math::normal_coverage;

fn reference_dataset(mode: GenerationMode) -> Dataset {
    generate(10_000, Seed::Fixed(0), 10.0, mode).unwrap()
}

#[test]
fn reference_run_matches_expected_distributions() {
    let data = reference_dataset(GenerationMode::Correlated);
    assert_eq!(data.len(), 10_000);
    assert!(data.iter().all(|s| (0.0..100.0).contains(&s.a_true)));

    let split = data.split(0.5, Seed::Fixed(0)).unwrap();
    let model = LeastSquares
        .fit(&split.training, &Variable::OBSERVED_FEATURES, Variable::ZTrue)
        .unwrap();
    let predictions = Predictions::new()
        .with("ols", predict_all(model.as_ref(), &split.test))
        .unwrap();

    let report = ResidualEvaluator::new(Binning::default())
        .unwrap()
        .evaluate(&split.test, &predictions)
        .unwrap();

    let true_a = report.histogram("true_a").unwrap();
    assert_eq!(true_a.underflow() + true_a.overflow(), 0);
    assert_eq!(true_a.fraction_within(0.0, 102.0), 1.0);

    let residual_z = report.histogram("residual_z").unwrap();
    let within = residual_z.fraction_within(-40.0, 40.0);
    assert!(within >= 0.99, "only {within} within ±40");
    assert!(normal_coverage(40.0, 10.0 * std::f64::consts::SQRT_2) > 0.99);

    let ols = report.histogram("residual_ols").unwrap();
    assert_eq!(ols.entries(), 5_000);
    assert!(ols.mean().abs() < 1.0, "mean {}", ols.mean());
}

#[test]
fn smearing_concentrates_full_reference_dataset() {
    let report = ResidualEvaluator::new(Binning::default())
        .unwrap()
        .evaluate(&reference_dataset(GenerationMode::Correlated), &Predictions::new())
        .unwrap();
    let residual_z = report.histogram("residual_z").unwrap();
    assert_eq!(residual_z.entries(), 10_000);
    let within = residual_z.fraction_within(-40.0, 40.0);
    assert!(within >= 0.99, "only {within} within ±40");
}

#[test]
fn correlation_reflects_generation_mode() {
    let evaluator = ResidualEvaluator::new(Binning::default()).unwrap();

    let correlated = evaluator
        .evaluate(&reference_dataset(GenerationMode::Correlated), &Predictions::new())
        .unwrap();
    let r = correlated.correlation("true_corr").unwrap().value();
    assert!((r + std::f64::consts::FRAC_1_SQRT_2).abs() < 0.03, "r = {r}");

    let independent = evaluator
        .evaluate(&reference_dataset(GenerationMode::Independent), &Predictions::new())
        .unwrap();
    let r = independent.correlation("true_corr").unwrap().value();
    assert!(r.abs() < 0.05, "r = {r}");
}

#[test]
fn short_prediction_sequence_is_a_shape_mismatch() {
    let data = reference_dataset(GenerationMode::Correlated);
    let predictions = Predictions::new()
        .with("bdt", vec![0.0; 9_999])
        .unwrap()
        .with("smlp", vec![0.0; 10_000])
        .unwrap();
    let evaluator = ResidualEvaluator::new(Binning::default()).unwrap();

    assert_eq!(
        evaluator.evaluate(&data, &predictions).unwrap_err(),
        EvaluationError::ShapeMismatch {
            estimator: "bdt".into(),
            expected: 10_000,
            actual: 9_999,
        }
    );

    let partial = evaluator.evaluate_partial(&data, &predictions);
    assert_eq!(partial.failures.len(), 1);
    assert_eq!(partial.failures[0].estimator, "bdt");
    assert!(partial.histogram("residual_bdt").is_none());
    assert_eq!(partial.histogram("residual_smlp").unwrap().entries(), 10_000);
}

#[test]
fn csv_export_writes_one_file_per_histogram() {
    let dir = tempfile::tempdir().unwrap();
    let data = generate(500, Seed::Fixed(3), 10.0, GenerationMode::Correlated).unwrap();
    let predictions = Predictions::new()
        .with("dmlp", data.column(Variable::ZObs))
        .unwrap();
    let report = ResidualEvaluator::new(Binning::default())
        .unwrap()
        .evaluate(&data, &predictions)
        .unwrap();

    report.export(&mut DelimitedExporter::csv(dir.path())).unwrap();

    for name in report.histogram_names() {
        assert!(dir.path().join(format!("{name}.csv")).is_file(), "{name}");
    }
    let comp = std::fs::read_to_string(dir.path().join("comp_dmlp.csv")).unwrap();
    assert!(comp.starts_with("bin,lower,upper,count\n"));
    assert!(dir.path().join("correlations.csv").is_file());
}
