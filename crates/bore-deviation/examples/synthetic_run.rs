use std::error::Error;
use std::f64::consts::PI;

use bore_deviation::{
    AnalysisConfig, Condition, ConditionBatch, CoordinateSample, DeviationAnalyzer, RadialScale,
    RadialSeries, StyleMap,
};

/// Condition sampled on an ellipse-ish bore: `growth` widens it uniformly,
/// `ovality` stretches it along x.
fn synthetic_condition(label: &str, n: usize, growth: f64, ovality: f64) -> Condition {
    let samples = (0..n)
        .map(|i| {
            let t = PI * (i as f64 + 0.5) / n as f64;
            let rx = 42.0 + growth + ovality;
            let ry = 42.0 + growth - ovality;
            CoordinateSample::new([rx * t.cos(), ry * t.sin()], [rx * t.cos(), -ry * t.sin()])
        })
        .collect();
    Condition::new(label, samples)
}

fn synthetic_batch() -> ConditionBatch {
    ConditionBatch {
        conditions: vec![
            synthetic_condition("assembled", 18, 0.0, 0.0).as_reference(),
            synthetic_condition("bolted", 18, -0.004, 0.003).with_style("red"),
            synthetic_condition("heated", 18, 0.012, 0.001)
                .with_style("blue-dotted")
                .with_smoothing(true),
        ],
        config: AnalysisConfig {
            threshold_rad: 0.2,
            threshold_dia: 0.2,
            threshold_lsm: 0.2,
            ..Default::default()
        },
    }
}

fn main() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let records = DeviationAnalyzer::analyze_batch(&synthetic_batch())?;
    let styles = StyleMap::default();
    for rec in &records {
        let legend = styles.legend_label(rec).unwrap_or("(hidden)");
        println!("{} [{}] vs {}", rec.label(), legend, rec.reference().label);
        for (name, value) in rec.summary().rows() {
            println!("  {name:>18}: {value:>10.4}");
        }
    }
    println!(
        "radial scale: raw {:?}, corrected {:?}",
        RadialScale::for_records(&records, RadialSeries::Raw),
        RadialScale::for_records(&records, RadialSeries::Corrected)
    );

    let reports: Vec<_> = records.iter().map(|r| r.report()).collect();
    println!("{}", serde_json::to_string_pretty(&reports)?);
    Ok(())
}
