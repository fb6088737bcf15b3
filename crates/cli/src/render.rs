//! Result rendering for the terminal

use feature_engine::{FeatureVector, RawInput, FEATURE_COLUMNS};
use inference_engine::{Prediction, Preference};
use serde::Serialize;
use std::io::{self, Write};

/// Width of a 100% bar
const BAR_WIDTH: usize = 40;

/// Headline, confidence, description and probability chart
pub fn render_prediction(out: &mut impl Write, prediction: &Prediction) -> io::Result<()> {
    let headline = match prediction.preference {
        Preference::Mountains => "You prefer MOUNTAINS!",
        Preference::Beaches => "You prefer BEACHES!",
    };
    writeln!(out, "{headline}")?;
    writeln!(out, "Confidence: {:.1}%", prediction.confidence * 100.0)?;
    writeln!(out)?;

    writeln!(out, "Based on your preferences, you seem to enjoy:")?;
    for line in prediction.preference.highlights() {
        writeln!(out, "  - {line}")?;
    }
    writeln!(out)?;

    writeln!(out, "Preference Probability Distribution")?;
    for (label, p) in [
        ("Beaches", prediction.probabilities[0]),
        ("Mountains", prediction.probabilities[1]),
    ] {
        writeln!(out, "  {label:<10}|{:<BAR_WIDTH$}| {:5.1}%", bar(p), p * 100.0)?;
    }
    Ok(())
}

fn bar(p: f64) -> String {
    let filled = (p.clamp(0.0, 1.0) * BAR_WIDTH as f64).round() as usize;
    "#".repeat(filled)
}

/// Encoded features, one column per line
pub fn render_features(out: &mut impl Write, features: &FeatureVector) -> io::Result<()> {
    writeln!(out, "Encoded features:")?;
    for (name, value) in features.named() {
        writeln!(out, "  {name:<32}{value}")?;
    }
    Ok(())
}

/// Model input columns with their positions
pub fn render_schema(out: &mut impl Write) -> io::Result<()> {
    for (i, name) in FEATURE_COLUMNS.iter().enumerate() {
        writeln!(out, "{i:>2}  {name}")?;
    }
    Ok(())
}

#[derive(Debug, Serialize)]
struct NamedFeature {
    name: &'static str,
    value: f64,
}

#[derive(Debug, Serialize)]
struct Report<'a> {
    input: &'a RawInput,
    prediction: &'a Prediction,
    #[serde(skip_serializing_if = "Option::is_none")]
    features: Option<Vec<NamedFeature>>,
}

/// Machine-readable report
pub fn render_json(
    out: &mut impl Write,
    input: &RawInput,
    prediction: &Prediction,
    features: Option<&FeatureVector>,
) -> serde_json::Result<()> {
    let report = Report {
        input,
        prediction,
        features: features.map(|f| {
            f.named()
                .map(|(name, value)| NamedFeature { name, value })
                .collect()
        }),
    };
    serde_json::to_writer_pretty(&mut *out, &report)?;
    writeln!(out).map_err(serde_json::Error::io)
}
