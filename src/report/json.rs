use serde::Serialize;

use crate::instrument::{Instrument, ItemBlock};
use crate::model::correlation::CorrelationResult;
use crate::model::descriptives::Descriptives;
use crate::model::normality::NormalityOutcome;
use crate::model::reliability::Reliability;
use crate::pipeline::Analysis;
use crate::pipeline::stage8_report::ReportMeta;

#[derive(Debug, Serialize)]
struct Summary<'a> {
    tool: &'a str,
    version: &'a str,
    input: &'a str,
    instrument: InstrumentInfo<'a>,
    sample: SampleInfo,
    descriptives: DescriptivesInfo<'a>,
    reliability: Pair<BlockReliability<'a>>,
    normality: Pair<BlockNormality<'a>>,
    correlation: &'a CorrelationResult,
}

#[derive(Debug, Serialize)]
struct InstrumentInfo<'a> {
    name: &'a str,
    min_valid_items: usize,
    total_items: usize,
}

#[derive(Debug, Serialize)]
struct SampleInfo {
    rows: usize,
    retained: usize,
    dropped: usize,
}

#[derive(Debug, Serialize)]
struct DescriptivesInfo<'a> {
    items: &'a [Descriptives],
    composites: &'a [Descriptives],
}

#[derive(Debug, Serialize)]
struct Pair<T> {
    x: T,
    y: T,
}

#[derive(Debug, Serialize)]
struct BlockReliability<'a> {
    block: &'a str,
    label: &'a str,
    #[serde(flatten)]
    reliability: &'a Reliability,
}

#[derive(Debug, Serialize)]
struct BlockNormality<'a> {
    column: String,
    #[serde(flatten)]
    outcome: &'a NormalityOutcome,
}

pub fn render_summary_json(
    analysis: &Analysis,
    instrument: &Instrument,
    meta: &ReportMeta,
) -> serde_json::Result<String> {
    let summary = Summary {
        tool: &meta.tool_name,
        version: &meta.tool_version,
        input: &meta.input,
        instrument: InstrumentInfo {
            name: &instrument.name,
            min_valid_items: instrument.min_valid_items,
            total_items: instrument.total_items(),
        },
        sample: SampleInfo {
            rows: analysis.n_input,
            retained: analysis.n_retained(),
            dropped: analysis.n_dropped(),
        },
        descriptives: DescriptivesInfo {
            items: &analysis.item_descriptives,
            composites: &analysis.composite_descriptives,
        },
        reliability: Pair {
            x: block_reliability(&instrument.x, &analysis.reliability_x),
            y: block_reliability(&instrument.y, &analysis.reliability_y),
        },
        normality: Pair {
            x: BlockNormality {
                column: instrument.x.total_column(),
                outcome: &analysis.normality_x,
            },
            y: BlockNormality {
                column: instrument.y.total_column(),
                outcome: &analysis.normality_y,
            },
        },
        correlation: &analysis.correlation,
    };
    serde_json::to_string_pretty(&summary)
}

fn block_reliability<'a>(
    block: &'a ItemBlock,
    reliability: &'a Reliability,
) -> BlockReliability<'a> {
    BlockReliability {
        block: &block.id,
        label: &block.label,
        reliability,
    }
}
